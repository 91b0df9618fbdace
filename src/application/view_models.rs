//! View models turn domain records into the exact values the pages print,
//! so the render functions stay free of arithmetic.

use crate::domain::assessment::{
    format_duration, questions_points_total, AssessmentDraft, AssessmentKind,
};
use crate::domain::records::{MonthlyTrend, PaperStatus, SavedPaper, TestResult};
use chrono::{Datelike, NaiveDate};

/// A year/month pair the stats sidebar pages through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn prev(&mut self) {
        if self.month == 1 {
            self.month = 12;
            self.year -= 1;
        } else {
            self.month -= 1;
        }
    }

    pub fn next(&mut self) {
        if self.month == 12 {
            self.month = 1;
            self.year += 1;
        } else {
            self.month += 1;
        }
    }

    /// "March 2026"
    pub fn label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlyStats {
    pub scheduled: usize,
    pub completed: usize,
    pub saved: usize,
    /// Mean score percentage over the month's results, 0 for an empty month.
    pub average_score: f32,
}

impl MonthlyStats {
    pub fn total(&self) -> usize {
        self.scheduled + self.completed + self.saved
    }

    pub fn incomplete(&self) -> usize {
        self.scheduled + self.saved
    }
}

pub struct StatsViewModel;

impl StatsViewModel {
    /// Status tallies for the papers scheduled inside the cursor month, plus
    /// the average score of the results that started in it.
    pub fn for_month(
        papers: &[SavedPaper],
        results: &[TestResult],
        cursor: MonthCursor,
    ) -> MonthlyStats {
        let mut stats = MonthlyStats::default();
        for paper in papers.iter().filter(|p| cursor.contains(p.scheduled_on)) {
            match paper.status {
                PaperStatus::Scheduled => stats.scheduled += 1,
                PaperStatus::Completed => stats.completed += 1,
                PaperStatus::Saved => stats.saved += 1,
            }
        }

        let month_results: Vec<&TestResult> = results
            .iter()
            .filter(|r| cursor.contains(r.started_on))
            .collect();
        if !month_results.is_empty() {
            let sum: f32 = month_results.iter().map(|r| r.score_fraction()).sum();
            stats.average_score = sum / month_results.len() as f32 * 100.0;
        }

        stats
    }
}

/// Plot-ready points for the three tracked skill groups, one per month.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrendSeries {
    pub basic: Vec<[f64; 2]>,
    pub critical: Vec<[f64; 2]>,
    pub personality: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResultTally {
    pub passed: usize,
    pub failed: usize,
}

pub struct ReportViewModel;

impl ReportViewModel {
    pub fn trend_series(trends: &[MonthlyTrend]) -> TrendSeries {
        let mut series = TrendSeries::default();
        for t in trends {
            let x = t.month as f64;
            series.basic.push([x, t.basic as f64]);
            series.critical.push([x, t.critical as f64]);
            series.personality.push([x, t.personality as f64]);
        }
        series
    }

    /// Series clipped to an inclusive month range, for the report page's
    /// From/To selects.
    pub fn trend_series_between(trends: &[MonthlyTrend], from: u32, to: u32) -> TrendSeries {
        let clipped: Vec<MonthlyTrend> = trends
            .iter()
            .filter(|t| t.month >= from && t.month <= to)
            .cloned()
            .collect();
        Self::trend_series(&clipped)
    }

    pub fn result_tally(results: &[TestResult]) -> ResultTally {
        let mut tally = ResultTally::default();
        for result in results {
            if result.outcome().is_pass() {
                tally.passed += 1;
            } else {
                tally.failed += 1;
            }
        }
        tally
    }
}

/// Everything the review step prints, derived once from the draft.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardSummary {
    pub title: String,
    pub kind: AssessmentKind,
    pub subject: String,
    pub class_name: String,
    pub test_date: String,
    pub expiry_date: String,
    pub duration: String,
    pub question_count: usize,
    pub question_points: u32,
    pub total_points: u32,
    pub passing_points: u32,
    pub audience: String,
    pub topics: String,
}

impl WizardSummary {
    pub fn from_draft(draft: &AssessmentDraft) -> Self {
        Self {
            title: draft.display_title(),
            kind: draft.kind,
            subject: draft.subject.clone(),
            class_name: draft.class_name.clone(),
            test_date: draft.test_date.clone(),
            expiry_date: draft.expiry_date.clone(),
            duration: format_duration(draft.duration_hours, draft.duration_minutes),
            question_count: draft.questions.len(),
            question_points: questions_points_total(&draft.questions),
            total_points: draft.total_points,
            passing_points: draft.passing_points,
            audience: draft.audience.summary(),
            topics: if draft.topics.is_empty() {
                "No topics selected".to_string()
            } else {
                draft.topics.join(", ")
            },
        }
    }
}
