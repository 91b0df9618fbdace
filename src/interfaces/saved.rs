//! Saved assessments / saved quizzes pages: the filterable paper list
//! plus the monthly stats sidebar.

use crate::application::stub_actions;
use crate::application::view_models::{MonthCursor, MonthlyStats, StatsViewModel};
use crate::domain::assessment::{long_date, AssessmentKind};
use crate::domain::records::{PaperStatus, SavedPaper, TestResult};
use crate::infrastructure::mock::MockCatalog;
use crate::interfaces::components::widgets::{
    primary_button, render_empty_state, render_select, render_status_pill, render_tab_strip,
};
use crate::interfaces::components::Card;
use crate::interfaces::design_system::DesignSystem;
use chrono::NaiveDate;
use eframe::egui;
use tracing::info;
use uuid::Uuid;

pub const ALL_BATCHES: &str = "All Batches";

const STATUS_TABS: [&str; 3] = ["Scheduled", "Completed", "Saved"];
const SIDEBAR_WIDTH: f32 = 260.0;

/// What the page asked the shell to do after this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavedOutcome {
    Stay,
    /// Create pressed; the shell opens the wizard for this page's kind.
    CreateRequested,
    Notice(String),
}

/// Working copies of one kind's papers and results. Duplicate and delete
/// mutate this list only; the catalog itself never changes.
pub struct SavedPapersState {
    pub kind: AssessmentKind,
    pub papers: Vec<SavedPaper>,
    results: Vec<TestResult>,
    batches: Vec<String>,
    pub status_tab: usize,
    pub batch_filter: String,
    pub cursor: MonthCursor,
}

impl SavedPapersState {
    pub fn new(kind: AssessmentKind, catalog: &MockCatalog, today: NaiveDate) -> Self {
        let papers = catalog
            .saved_papers
            .iter()
            .filter(|p| p.kind == kind)
            .cloned()
            .collect();
        let results = catalog
            .reports
            .iter()
            .flat_map(|r| r.results.iter())
            .filter(|r| r.kind == kind)
            .cloned()
            .collect();

        Self {
            kind,
            papers,
            results,
            batches: catalog.batches.clone(),
            status_tab: 0,
            batch_filter: ALL_BATCHES.to_string(),
            cursor: MonthCursor::from_date(today),
        }
    }

    pub fn active_status(&self) -> PaperStatus {
        match self.status_tab {
            0 => PaperStatus::Scheduled,
            1 => PaperStatus::Completed,
            _ => PaperStatus::Saved,
        }
    }

    /// Indices into `papers` that pass the current tab and batch filter.
    pub fn visible_indices(&self) -> Vec<usize> {
        let status = self.active_status();
        self.papers
            .iter()
            .enumerate()
            .filter(|(_, p)| {
                p.status == status
                    && (self.batch_filter == ALL_BATCHES || p.batch == self.batch_filter)
            })
            .map(|(i, _)| i)
            .collect()
    }

    /// Inserts a "Copy of …" clone right after the source so it shows up
    /// on the same tab. Returns the copy's title.
    pub fn duplicate_at(&mut self, index: usize) -> String {
        let mut copy = self.papers[index].clone();
        copy.id = Uuid::new_v4();
        copy.title = format!("Copy of {}", copy.title);
        let title = copy.title.clone();
        self.papers.insert(index + 1, copy);
        info!("Duplicated paper into '{}'", title);
        title
    }

    /// Removes the paper and returns its title for the notice.
    pub fn delete_at(&mut self, index: usize) -> String {
        let removed = self.papers.remove(index);
        info!("Deleted paper '{}'", removed.title);
        removed.title
    }

    pub fn month_stats(&self) -> MonthlyStats {
        StatsViewModel::for_month(&self.papers, &self.results, self.cursor)
    }
}

pub fn render_saved_papers(ui: &mut egui::Ui, state: &mut SavedPapersState) -> SavedOutcome {
    let mut outcome = SavedOutcome::Stay;

    ui.heading(
        egui::RichText::new(format!("Saved {}s", state.kind.label()))
            .size(20.0)
            .color(DesignSystem::TEXT_PRIMARY),
    );
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    ui.horizontal_top(|ui| {
        let gap = DesignSystem::SPACING_LARGE;
        let list_width = (ui.available_width() - SIDEBAR_WIDTH - gap).max(320.0);

        ui.vertical(|ui| {
            ui.set_width(list_width);
            render_paper_list(ui, state, &mut outcome);
        });

        ui.add_space(gap - ui.spacing().item_spacing.x);

        ui.vertical(|ui| {
            ui.set_width(SIDEBAR_WIDTH);
            render_stats_sidebar(ui, state, &mut outcome);
        });
    });

    outcome
}

fn render_paper_list(ui: &mut egui::Ui, state: &mut SavedPapersState, outcome: &mut SavedOutcome) {
    ui.horizontal(|ui| {
        render_tab_strip(ui, &STATUS_TABS, &mut state.status_tab);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut options = vec![ALL_BATCHES.to_string()];
            options.extend(state.batches.iter().cloned());
            render_select(
                ui,
                "saved_batch_filter",
                &mut state.batch_filter,
                &options,
                ALL_BATCHES,
            );
        });
    });
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    let visible = state.visible_indices();
    if visible.is_empty() {
        render_empty_state(
            ui,
            "🗂",
            "Nothing here yet",
            &format!(
                "No {} {}s match this filter",
                STATUS_TABS[state.status_tab].to_lowercase(),
                state.kind.label().to_lowercase()
            ),
        );
        return;
    }

    // Deferred so the row indices stay valid while the list renders.
    let mut duplicate_at: Option<usize> = None;
    let mut delete_at: Option<usize> = None;
    let show_actions = state.kind == AssessmentKind::Quiz;

    egui::ScrollArea::vertical()
        .id_salt("saved_papers_list")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for index in visible {
                let paper = &state.papers[index];
                Card::new().show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                egui::RichText::new(&paper.title)
                                    .size(15.0)
                                    .strong()
                                    .color(DesignSystem::TEXT_PRIMARY),
                            );
                            ui.add_space(4.0);
                            ui.horizontal(|ui| {
                                render_status_pill(ui, &paper.batch, DesignSystem::INFO);
                                ui.label(
                                    egui::RichText::new(long_date(paper.scheduled_on))
                                        .size(12.0)
                                        .color(DesignSystem::TEXT_SECONDARY),
                                );
                            });
                        });

                        if show_actions {
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.button("Info").clicked() {
                                        *outcome =
                                            SavedOutcome::Notice(stub_actions::paper_info(paper));
                                    }
                                    if ui.button("Delete").clicked() {
                                        delete_at = Some(index);
                                    }
                                    if ui.button("Duplicate").clicked() {
                                        duplicate_at = Some(index);
                                    }
                                    if ui.button("Edit").clicked() {
                                        *outcome =
                                            SavedOutcome::Notice(stub_actions::edit_paper(paper));
                                    }
                                },
                            );
                        }
                    });
                });
                ui.add_space(DesignSystem::SPACING_SMALL);
            }
        });

    if let Some(index) = duplicate_at {
        let title = state.duplicate_at(index);
        *outcome = SavedOutcome::Notice(format!("Duplicated into \"{}\".", title));
    }
    if let Some(index) = delete_at {
        let title = state.delete_at(index);
        *outcome = SavedOutcome::Notice(format!("Deleted \"{}\".", title));
    }
}

fn render_stats_sidebar(
    ui: &mut egui::Ui,
    state: &mut SavedPapersState,
    outcome: &mut SavedOutcome,
) {
    Card::new().title("Overview").show(ui, |ui| {
        let nav_button = |label: &str| {
            egui::Button::new(egui::RichText::new(label).size(14.0))
                .min_size(egui::vec2(26.0, 26.0))
                .corner_radius(DesignSystem::ROUNDING_SMALL)
        };

        ui.horizontal(|ui| {
            if ui.add(nav_button("‹")).clicked() {
                state.cursor.prev();
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.add(nav_button("›")).clicked() {
                    state.cursor.next();
                }
                ui.with_layout(
                    egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                    |ui| {
                        ui.label(
                            egui::RichText::new(state.cursor.label())
                                .size(14.0)
                                .strong()
                                .color(DesignSystem::TEXT_PRIMARY),
                        );
                    },
                );
            });
        });
        ui.add_space(DesignSystem::SPACING_MEDIUM);

        let stats = state.month_stats();
        stat_row(
            ui,
            "Complete",
            format!("{}/{}", stats.completed, stats.total()),
        );
        stat_row(ui, "Incomplete", stats.incomplete().to_string());
        stat_row(ui, "Average Score", format!("{:.0}%", stats.average_score));

        ui.add_space(DesignSystem::SPACING_MEDIUM);
        let create = primary_button(&format!("Create {}", state.kind.label()));
        if ui
            .add_sized(egui::vec2(ui.available_width(), 36.0), create)
            .clicked()
        {
            *outcome = SavedOutcome::CreateRequested;
        }
    });
}

fn stat_row(ui: &mut egui::Ui, label: &str, value: String) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(label)
                .size(12.0)
                .color(DesignSystem::TEXT_SECONDARY),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(value)
                    .size(13.0)
                    .strong()
                    .color(DesignSystem::TEXT_PRIMARY),
            );
        });
    });
    ui.add_space(4.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_for(kind: AssessmentKind) -> SavedPapersState {
        let anchor = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        let catalog = MockCatalog::generate_at(11, anchor);
        SavedPapersState::new(kind, &catalog, anchor)
    }

    #[test]
    fn test_state_keeps_only_its_kind() {
        let state = state_for(AssessmentKind::Quiz);
        assert!(!state.papers.is_empty());
        assert!(state.papers.iter().all(|p| p.kind == AssessmentKind::Quiz));
    }

    #[test]
    fn test_visible_indices_follow_tab_and_batch() {
        let mut state = state_for(AssessmentKind::Assessment);
        state.status_tab = 1;
        for index in state.visible_indices() {
            assert_eq!(state.papers[index].status, PaperStatus::Completed);
        }

        let batch = state.papers[0].batch.clone();
        state.status_tab = 0;
        state.batch_filter = batch.clone();
        for index in state.visible_indices() {
            assert_eq!(state.papers[index].batch, batch);
        }
    }

    #[test]
    fn test_duplicate_inserts_copy_after_source() {
        let mut state = state_for(AssessmentKind::Quiz);
        let before = state.papers.len();
        let source_title = state.papers[0].title.clone();

        let copy_title = state.duplicate_at(0);

        assert_eq!(state.papers.len(), before + 1);
        assert_eq!(copy_title, format!("Copy of {}", source_title));
        assert_eq!(state.papers[1].title, copy_title);
        assert_ne!(state.papers[1].id, state.papers[0].id, "copy gets a fresh id");
        assert_eq!(state.papers[1].status, state.papers[0].status);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut state = state_for(AssessmentKind::Quiz);
        let before = state.papers.len();
        let title = state.papers[2].title.clone();

        let removed = state.delete_at(2);

        assert_eq!(removed, title);
        assert_eq!(state.papers.len(), before - 1);
    }

    #[test]
    fn test_month_stats_follow_the_cursor() {
        let mut state = state_for(AssessmentKind::Assessment);
        let march = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let april = NaiveDate::from_ymd_opt(2026, 4, 2).unwrap();
        state.papers[0].scheduled_on = march;
        state.papers[0].status = PaperStatus::Completed;

        state.cursor = MonthCursor {
            year: 2026,
            month: 3,
        };
        let in_march = state.month_stats();
        assert!(in_march.completed >= 1);

        for paper in &mut state.papers {
            paper.scheduled_on = april;
        }
        let empty_march = state.month_stats();
        assert_eq!(empty_march.total(), 0, "cursor month has no papers left");
    }
}
