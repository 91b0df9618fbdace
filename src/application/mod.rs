// Presentation-ready projections of the domain records
pub mod view_models;

// Demo handlers for actions a real backend would own
pub mod stub_actions;

pub use view_models::{
    MonthCursor, MonthlyStats, ReportViewModel, ResultTally, StatsViewModel, TrendSeries,
    WizardSummary,
};
