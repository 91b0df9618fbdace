// School directory records
pub mod school;

// Assessment and quiz drafting
pub mod assessment;

// Content library (folders and material files)
pub mod library;

// Saved papers, test results and progress records
pub mod records;

// Answered-paper review
pub mod paper;

// Domain-specific error types
pub mod errors;
