pub mod components;
pub mod design_system;
pub mod library;
pub mod paper_review;
pub mod reports;
pub mod saved;
pub mod shell;
pub mod wizard;
