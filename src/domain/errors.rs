use thiserror::Error;

/// Errors from the UI preferences store.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("Could not resolve a home directory for preferences")]
    HomeDirUnset,

    #[error("Failed to read preferences at {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("Failed to write preferences at {path}: {reason}")]
    WriteFailed { path: String, reason: String },

    #[error("Preferences file at {path} is malformed: {reason}")]
    Malformed { path: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefs_error_formatting() {
        let err = PrefsError::Malformed {
            path: "/home/t/.classdesk/ui_settings.json".to_string(),
            reason: "expected value at line 1".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("ui_settings.json"));
        assert!(msg.contains("line 1"));
    }
}
