use serde::{Deserialize, Serialize};

/// How an option should render on the answered-paper page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionVerdict {
    /// The student picked it and it was right.
    SelectedCorrect,
    /// The student picked it and it was wrong.
    SelectedIncorrect,
    /// The right answer the student did not pick.
    MissedCorrect,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewedOption {
    pub text: String,
    pub selected: bool,
    pub correct: bool,
}

impl ReviewedOption {
    pub fn verdict(&self) -> OptionVerdict {
        match (self.selected, self.correct) {
            (true, true) => OptionVerdict::SelectedCorrect,
            (true, false) => OptionVerdict::SelectedIncorrect,
            (false, true) => OptionVerdict::MissedCorrect,
            (false, false) => OptionVerdict::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewedQuestion {
    pub number: usize,
    pub text: String,
    pub points: u32,
    pub options: Vec<ReviewedOption>,
}

/// A submitted paper with scores, ready for teacher feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewedPaper {
    pub student_name: String,
    pub assessment_title: String,
    pub score: u32,
    pub max_score: u32,
    pub skill_percentages: Vec<(String, u8)>,
    pub star_rating: u8,
    pub questions: Vec<ReviewedQuestion>,
}
