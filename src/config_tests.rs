use crate::config::{PortalConfig, StartView};
use std::env;
use std::str::FromStr;
use std::sync::Mutex;
use std::sync::OnceLock;

// Global lock to prevent race conditions when modifying environment variables in tests
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn get_env_lock() -> &'static Mutex<()> {
    ENV_LOCK.get_or_init(|| Mutex::new(()))
}

fn clear_portal_env() {
    unsafe {
        env::remove_var("PORTAL_SCHOOL_NAME");
        env::remove_var("PORTAL_DATA_SEED");
        env::remove_var("PORTAL_UI_SCALE");
        env::remove_var("PORTAL_START_VIEW");
    }
}

#[test]
fn test_config_defaults_without_env() {
    let _guard = get_env_lock().lock().unwrap();
    clear_portal_env();

    let config = PortalConfig::from_env().unwrap();

    assert_eq!(config.school_name, "Sunrise Public School");
    assert_eq!(config.data_seed, 7);
    assert!((config.ui_scale - 1.0).abs() < f32::EPSILON);
    assert_eq!(config.start_view, StartView::SavedAssessments);
}

#[test]
fn test_config_reads_env_overrides() {
    let _guard = get_env_lock().lock().unwrap();
    clear_portal_env();
    unsafe {
        env::set_var("PORTAL_SCHOOL_NAME", "Hillview Academy");
        env::set_var("PORTAL_DATA_SEED", "99");
        env::set_var("PORTAL_START_VIEW", "library");
    }

    let config = PortalConfig::from_env().unwrap();

    assert_eq!(config.school_name, "Hillview Academy");
    assert_eq!(config.data_seed, 99);
    assert_eq!(config.start_view, StartView::Library);

    clear_portal_env();
}

#[test]
fn test_config_rejects_bad_seed() {
    let _guard = get_env_lock().lock().unwrap();
    clear_portal_env();
    unsafe {
        env::set_var("PORTAL_DATA_SEED", "not-a-number");
    }

    let result = PortalConfig::from_env();

    assert!(result.is_err());
    let err_msg = format!("{:?}", result.err().unwrap());
    assert!(err_msg.contains("PORTAL_DATA_SEED"));

    clear_portal_env();
}

#[test]
fn test_start_view_parsing() {
    assert_eq!(
        StartView::from_str("saved-quizzes").unwrap(),
        StartView::SavedQuizzes
    );
    assert_eq!(
        StartView::from_str("PAPER-REVIEW").unwrap(),
        StartView::PaperReview
    );
    assert!(StartView::from_str("dashboard").is_err());
}

#[test]
fn test_start_view_names_round_trip() {
    let views = [
        StartView::SavedAssessments,
        StartView::SavedQuizzes,
        StartView::CreateAssessment,
        StartView::CreateAiAssessment,
        StartView::Library,
        StartView::Reports,
        StartView::PaperReview,
    ];

    for view in views {
        assert_eq!(StartView::from_str(view.name()).unwrap(), view);
    }
}

#[test]
fn test_toml_overlay_wins_over_env() {
    let _guard = get_env_lock().lock().unwrap();
    clear_portal_env();
    unsafe {
        env::set_var("PORTAL_SCHOOL_NAME", "Env School");
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portal.toml");
    std::fs::write(
        &path,
        "school_name = \"File School\"\nstart_view = \"reports\"\n",
    )
    .unwrap();

    let mut config = PortalConfig::from_env().unwrap();
    config.apply_file(&path).unwrap();

    assert_eq!(config.school_name, "File School");
    assert_eq!(config.start_view, StartView::Reports);
    // Fields the file leaves out keep their env/default values
    assert_eq!(config.data_seed, 7);

    clear_portal_env();
}

#[test]
fn test_missing_overlay_file_is_fine() {
    let _guard = get_env_lock().lock().unwrap();
    clear_portal_env();

    let mut config = PortalConfig::from_env().unwrap();
    let before = config.clone();
    config
        .apply_file(std::path::Path::new("/nonexistent/portal.toml"))
        .unwrap();

    assert_eq!(config.school_name, before.school_name);
}

#[test]
fn test_malformed_overlay_file_errors() {
    let _guard = get_env_lock().lock().unwrap();
    clear_portal_env();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portal.toml");
    std::fs::write(&path, "school_name = [unclosed").unwrap();

    let mut config = PortalConfig::from_env().unwrap();
    let result = config.apply_file(&path);

    assert!(result.is_err());
}
