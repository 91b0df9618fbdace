use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileKind {
    Pdf,
    Image,
    Document,
}

impl FileKind {
    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Pdf => "PDF",
            FileKind::Image => "Image",
            FileKind::Document => "Document",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            FileKind::Pdf => "📄",
            FileKind::Image => "🖼",
            FileKind::Document => "📝",
        }
    }
}

/// A folder of shared assessment material, shown in the library grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentFolder {
    pub id: Uuid,
    pub name: String,
    pub file_count: usize,
    pub category: String,
}

/// One file inside a material folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialFile {
    pub id: Uuid,
    pub name: String,
    pub kind: FileKind,
    pub size_kb: u64,
}

impl MaterialFile {
    /// Case-insensitive name match for the folder search box.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty() || self.name.to_lowercase().contains(&query)
    }
}

/// "860 KB" below one megabyte, "2.3 MB" above.
pub fn human_size(size_kb: u64) -> String {
    if size_kb < 1024 {
        format!("{} KB", size_kb)
    } else {
        format!("{:.1} MB", size_kb as f64 / 1024.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> MaterialFile {
        MaterialFile {
            id: Uuid::new_v4(),
            name: name.to_string(),
            kind: FileKind::Pdf,
            size_kb: 100,
        }
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let f = file("Algebra Worksheet.pdf");
        assert!(f.matches("algebra"));
        assert!(f.matches("WORKSHEET"));
        assert!(!f.matches("geometry"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(file("anything.pdf").matches(""));
        assert!(file("anything.pdf").matches("   "));
    }

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(860), "860 KB");
        assert_eq!(human_size(2355), "2.3 MB");
        assert_eq!(human_size(1024), "1.0 MB");
    }
}
