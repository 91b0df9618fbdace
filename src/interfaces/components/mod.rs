//! Shared UI components

pub mod card;
pub mod student_picker;
pub mod topic_picker;
pub mod widgets;

pub use card::Card;
pub use student_picker::{render_student_picker, StudentPickerData, StudentPickerState};
pub use topic_picker::{render_topic_picker, TopicPickerData};
pub use widgets::NumberSpinner;
