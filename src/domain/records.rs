use crate::domain::assessment::AssessmentKind;
use crate::domain::school::Student;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperStatus {
    Scheduled,
    Completed,
    Saved,
}

impl PaperStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaperStatus::Scheduled => "Scheduled",
            PaperStatus::Completed => "Completed",
            PaperStatus::Saved => "Saved",
        }
    }
}

/// A saved assessment or quiz card on the list pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPaper {
    pub id: Uuid,
    pub kind: AssessmentKind,
    pub title: String,
    pub batch: String,
    pub scheduled_on: NaiveDate,
    pub status: PaperStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultOutcome {
    Pass,
    Fail,
}

impl ResultOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            ResultOutcome::Pass => "Pass",
            ResultOutcome::Fail => "Failed",
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, ResultOutcome::Pass)
    }
}

/// One row in the report page results table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub id: Uuid,
    pub kind: AssessmentKind,
    pub test_name: String,
    pub started_on: NaiveDate,
    pub ended_at: NaiveDateTime,
    pub total_marks: u32,
    pub passing_marks: u32,
    pub marks_scored: u32,
}

impl TestResult {
    /// Scoring exactly the passing marks counts as a pass.
    pub fn outcome(&self) -> ResultOutcome {
        if self.marks_scored >= self.passing_marks {
            ResultOutcome::Pass
        } else {
            ResultOutcome::Fail
        }
    }

    pub fn score_fraction(&self) -> f32 {
        if self.total_marks == 0 {
            return 0.0;
        }
        self.marks_scored as f32 / self.total_marks as f32
    }
}

/// An "achieved out of total" score, rendered as a ring or bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillScore {
    pub name: String,
    pub achieved: u32,
    pub out_of: u32,
}

impl SkillScore {
    pub fn fraction(&self) -> f32 {
        if self.out_of == 0 {
            return 0.0;
        }
        (self.achieved as f32 / self.out_of as f32).clamp(0.0, 1.0)
    }

    /// "3/4" display text.
    pub fn display(&self) -> String {
        format!("{}/{}", self.achieved, self.out_of)
    }
}

/// A titled group of skills with an overall score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub overall: SkillScore,
    pub skills: Vec<SkillScore>,
}

/// One month of the three progress series on the report chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrend {
    pub month: u32,
    pub basic: f32,
    pub critical: f32,
    pub personality: f32,
}

/// Everything a student report page shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentReport {
    pub student: Student,
    pub trends: Vec<MonthlyTrend>,
    pub skill_rings: Vec<SkillScore>,
    pub categories: Vec<SkillCategory>,
    pub results: Vec<TestResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(scored: u32, passing: u32, total: u32) -> TestResult {
        TestResult {
            id: Uuid::new_v4(),
            kind: AssessmentKind::Assessment,
            test_name: "Unit Test".to_string(),
            started_on: NaiveDate::from_ymd_opt(2026, 2, 10).unwrap(),
            ended_at: NaiveDate::from_ymd_opt(2026, 2, 10)
                .unwrap()
                .and_hms_opt(11, 30, 0)
                .unwrap(),
            total_marks: total,
            passing_marks: passing,
            marks_scored: scored,
        }
    }

    #[test]
    fn test_exact_passing_marks_is_a_pass() {
        assert_eq!(result(40, 40, 100).outcome(), ResultOutcome::Pass);
    }

    #[test]
    fn test_below_passing_marks_fails() {
        assert_eq!(result(39, 40, 100).outcome(), ResultOutcome::Fail);
    }

    #[test]
    fn test_score_fraction_handles_zero_total() {
        assert_eq!(result(10, 5, 0).score_fraction(), 0.0);
        assert!((result(25, 40, 100).score_fraction() - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_skill_fraction_and_display() {
        let s = SkillScore {
            name: "Observation".to_string(),
            achieved: 3,
            out_of: 4,
        };
        assert!((s.fraction() - 0.75).abs() < f32::EPSILON);
        assert_eq!(s.display(), "3/4");

        let empty = SkillScore {
            name: "Empty".to_string(),
            achieved: 0,
            out_of: 0,
        };
        assert_eq!(empty.fraction(), 0.0);
    }
}
