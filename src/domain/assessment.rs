use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MIN_OPTIONS: usize = 1;
pub const MAX_OPTIONS: usize = 10;

pub const MAX_DURATION_HOURS: u32 = 23;
pub const MAX_DURATION_MINUTES: u32 = 59;
pub const MAX_QUESTION_POINTS: u32 = 99;
pub const MAX_TOTAL_POINTS: u32 = 999;

/// Which kind of paper the wizard is drafting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssessmentKind {
    Assessment,
    Quiz,
}

impl AssessmentKind {
    pub fn label(&self) -> &'static str {
        match self {
            AssessmentKind::Assessment => "Assessment",
            AssessmentKind::Quiz => "Quiz",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: Uuid,
    pub text: String,
}

impl AnswerOption {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            text: String::new(),
        }
    }
}

/// One question under construction in the questionnaire step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub id: Uuid,
    pub text: String,
    pub points: u32,
    pub options: Vec<AnswerOption>,
    pub correct_option_id: Option<Uuid>,
}

impl QuestionDraft {
    /// A fresh question starts with two empty options and no correct choice.
    pub fn new_blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            text: String::new(),
            points: 1,
            options: vec![AnswerOption::blank(), AnswerOption::blank()],
            correct_option_id: None,
        }
    }

    /// A copy with fresh ids, keeping texts, points and the correct choice.
    pub fn duplicated(&self) -> Self {
        let options: Vec<AnswerOption> = self
            .options
            .iter()
            .map(|o| AnswerOption {
                id: Uuid::new_v4(),
                text: o.text.clone(),
            })
            .collect();

        let correct_option_id = self.correct_option_id.and_then(|old| {
            self.options
                .iter()
                .position(|o| o.id == old)
                .map(|idx| options[idx].id)
        });

        Self {
            id: Uuid::new_v4(),
            text: self.text.clone(),
            points: self.points,
            options,
            correct_option_id,
        }
    }

    /// Grows or truncates the option list to `count` (clamped to 1..=10).
    ///
    /// Growing appends blank options and keeps existing texts. Truncating
    /// drops trailing options; if the correct choice was among them the
    /// selection resets so a stale id never survives.
    pub fn set_option_count(&mut self, count: usize) {
        let count = count.clamp(MIN_OPTIONS, MAX_OPTIONS);

        if count > self.options.len() {
            while self.options.len() < count {
                self.options.push(AnswerOption::blank());
            }
        } else if count < self.options.len() {
            self.options.truncate(count);

            let correct_still_exists = self
                .correct_option_id
                .is_some_and(|id| self.options.iter().any(|o| o.id == id));
            if !correct_still_exists {
                self.correct_option_id = None;
            }
        }
    }
}

/// Who a paper is assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Audience {
    AllStudents,
    Selected(Vec<Uuid>),
}

impl Audience {
    pub fn summary(&self) -> String {
        match self {
            Audience::AllStudents => "All Students".to_string(),
            Audience::Selected(ids) => format!("{} Selected Students", ids.len()),
        }
    }
}

/// Everything the creation wizard collects before publish.
///
/// Dates are kept as the raw dd-mm-yyyy field text; the form shows an
/// inline parse preview instead of failing on partial input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentDraft {
    pub id: Uuid,
    pub kind: AssessmentKind,
    pub name: String,
    pub description: String,
    pub subject: String,
    pub class_name: String,
    pub group_name: String,
    pub test_date: String,
    pub expiry_date: String,
    pub duration_hours: u32,
    pub duration_minutes: u32,
    pub total_points: u32,
    pub passing_points: u32,
    pub topics: Vec<String>,
    pub audience: Audience,
    pub questions: Vec<QuestionDraft>,
}

impl AssessmentDraft {
    pub fn new(kind: AssessmentKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            name: String::new(),
            description: String::new(),
            subject: String::new(),
            class_name: String::new(),
            group_name: String::new(),
            test_date: String::new(),
            expiry_date: String::new(),
            duration_hours: 0,
            duration_minutes: 30,
            total_points: 10,
            passing_points: 4,
            topics: Vec::new(),
            audience: Audience::AllStudents,
            questions: vec![QuestionDraft::new_blank()],
        }
    }

    /// Trimmed name, or a placeholder while the field is still empty.
    pub fn display_title(&self) -> String {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            format!("Untitled {}", self.kind.label())
        } else {
            trimmed.to_string()
        }
    }
}

/// Sum of the per-question points in the questionnaire.
pub fn questions_points_total(questions: &[QuestionDraft]) -> u32 {
    questions.iter().map(|q| q.points).sum()
}

/// "1 Hours : 30 Minutes" style duration text for the review summary.
pub fn format_duration(hours: u32, minutes: u32) -> String {
    match (hours, minutes) {
        (0, m) => format!("{} Minutes", m),
        (h, 0) => format!("{} Hours", h),
        (h, m) => format!("{} Hours : {} Minutes", h, m),
    }
}

/// Parses the dd-mm-yyyy text the date fields hold.
pub fn parse_display_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%d-%m-%Y").ok()
}

/// "12 March 2026" long form for cards and summaries.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_question_has_two_blank_options() {
        let q = QuestionDraft::new_blank();
        assert_eq!(q.options.len(), 2);
        assert!(q.correct_option_id.is_none());
    }

    #[test]
    fn test_growing_options_keeps_texts_and_correct_choice() {
        let mut q = QuestionDraft::new_blank();
        q.options[0].text = "Paris".to_string();
        q.correct_option_id = Some(q.options[0].id);

        q.set_option_count(5);

        assert_eq!(q.options.len(), 5);
        assert_eq!(q.options[0].text, "Paris");
        assert_eq!(q.correct_option_id, Some(q.options[0].id));
    }

    #[test]
    fn test_truncating_below_correct_option_resets_selection() {
        let mut q = QuestionDraft::new_blank();
        q.set_option_count(4);
        q.correct_option_id = Some(q.options[3].id);

        q.set_option_count(2);

        assert_eq!(q.options.len(), 2);
        assert!(
            q.correct_option_id.is_none(),
            "correct option was removed, selection must reset"
        );
    }

    #[test]
    fn test_truncating_above_correct_option_keeps_selection() {
        let mut q = QuestionDraft::new_blank();
        q.set_option_count(4);
        q.correct_option_id = Some(q.options[0].id);

        q.set_option_count(2);

        assert_eq!(q.correct_option_id, Some(q.options[0].id));
    }

    #[test]
    fn test_option_count_clamps_to_bounds() {
        let mut q = QuestionDraft::new_blank();

        q.set_option_count(25);
        assert_eq!(q.options.len(), MAX_OPTIONS);

        q.set_option_count(0);
        assert_eq!(q.options.len(), MIN_OPTIONS);
    }

    #[test]
    fn test_duplicated_question_remaps_correct_option() {
        let mut q = QuestionDraft::new_blank();
        q.text = "Capital of France?".to_string();
        q.options[0].text = "Paris".to_string();
        q.options[1].text = "Lyon".to_string();
        q.correct_option_id = Some(q.options[1].id);

        let copy = q.duplicated();

        assert_ne!(copy.id, q.id);
        assert_eq!(copy.text, q.text);
        assert_eq!(copy.options[1].text, "Lyon");
        assert_ne!(copy.options[1].id, q.options[1].id);
        assert_eq!(copy.correct_option_id, Some(copy.options[1].id));
    }

    #[test]
    fn test_points_total_sums_questions() {
        let mut a = QuestionDraft::new_blank();
        a.points = 5;
        let mut b = QuestionDraft::new_blank();
        b.points = 3;

        assert_eq!(questions_points_total(&[a, b]), 8);
        assert_eq!(questions_points_total(&[]), 0);
    }

    #[test]
    fn test_format_duration_shapes() {
        assert_eq!(format_duration(1, 30), "1 Hours : 30 Minutes");
        assert_eq!(format_duration(2, 0), "2 Hours");
        assert_eq!(format_duration(0, 45), "45 Minutes");
        assert_eq!(format_duration(0, 0), "0 Minutes");
    }

    #[test]
    fn test_parse_display_date() {
        assert_eq!(
            parse_display_date("12-03-2026"),
            NaiveDate::from_ymd_opt(2026, 3, 12)
        );
        assert_eq!(parse_display_date(" 01-01-2027 "), NaiveDate::from_ymd_opt(2027, 1, 1));
        assert!(parse_display_date("2026-03-12").is_none());
        assert!(parse_display_date("not a date").is_none());
    }

    #[test]
    fn test_long_date() {
        let d = NaiveDate::from_ymd_opt(2026, 3, 12).unwrap();
        assert_eq!(long_date(d), "12 March 2026");
    }

    #[test]
    fn test_audience_summary() {
        assert_eq!(Audience::AllStudents.summary(), "All Students");
        let picked = Audience::Selected(vec![Uuid::new_v4(), Uuid::new_v4()]);
        assert_eq!(picked.summary(), "2 Selected Students");
    }
}
