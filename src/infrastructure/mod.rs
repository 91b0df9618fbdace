pub mod mock;
pub mod ui_prefs;

pub use mock::MockCatalog;
pub use ui_prefs::{UiPrefs, UiPrefsStore};
