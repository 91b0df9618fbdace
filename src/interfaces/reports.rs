//! Student report page: profile header, three-series progress chart,
//! skill rings, category breakdowns and the results table.

use crate::application::view_models::ReportViewModel;
use crate::domain::assessment::{long_date, AssessmentKind};
use crate::domain::records::{SkillCategory, StudentReport, TestResult};
use crate::domain::school::Student;
use crate::infrastructure::mock::MockCatalog;
use crate::interfaces::components::widgets::{
    render_empty_state, render_progress_bar, render_progress_ring, render_status_pill,
    render_tab_strip,
};
use crate::interfaces::components::Card;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const KIND_TABS: [&str; 2] = ["Assessments", "Quizzes"];

const RING_COLORS: [egui::Color32; 4] = [
    DesignSystem::SERIES_BASIC,
    DesignSystem::SERIES_CRITICAL,
    DesignSystem::SERIES_PERSONALITY,
    DesignSystem::SUCCESS,
];

pub struct ReportsState {
    reports: Vec<StudentReport>,
    pub student_idx: usize,
    pub kind_tab: usize,
    pub from_month: u32,
    pub to_month: u32,
}

impl ReportsState {
    pub fn new(catalog: &MockCatalog) -> Self {
        Self {
            reports: catalog.reports.clone(),
            student_idx: 0,
            kind_tab: 0,
            from_month: 1,
            to_month: 12,
        }
    }

    pub fn active_kind(&self) -> AssessmentKind {
        if self.kind_tab == 0 {
            AssessmentKind::Assessment
        } else {
            AssessmentKind::Quiz
        }
    }

    pub fn current(&self) -> Option<&StudentReport> {
        self.reports.get(self.student_idx)
    }

    /// Picking a From month past the To month drags To along, and the
    /// other way round.
    pub fn clamp_range_from(&mut self) {
        if self.from_month > self.to_month {
            self.to_month = self.from_month;
        }
    }

    pub fn clamp_range_to(&mut self) {
        if self.to_month < self.from_month {
            self.from_month = self.to_month;
        }
    }

    /// The current student's results for the active kind tab.
    pub fn filtered_results(&self) -> Vec<TestResult> {
        let kind = self.active_kind();
        self.current()
            .map(|report| {
                report
                    .results
                    .iter()
                    .filter(|r| r.kind == kind)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

pub fn render_student_report(ui: &mut egui::Ui, state: &mut ReportsState) {
    ui.horizontal(|ui| {
        ui.heading(
            egui::RichText::new("Student Reports")
                .size(20.0)
                .color(DesignSystem::TEXT_PRIMARY),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            render_student_select(ui, state);
        });
    });
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    let Some(report) = state.current().cloned() else {
        render_empty_state(ui, "📊", "No reports yet", "Reports appear after the first test");
        return;
    };

    egui::ScrollArea::vertical()
        .id_salt("student_report")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            render_profile_header(ui, &report.student);
            ui.add_space(DesignSystem::SPACING_MEDIUM);

            render_trend_chart(ui, state, &report);
            ui.add_space(DesignSystem::SPACING_MEDIUM);

            render_skill_rings(ui, &report);
            ui.add_space(DesignSystem::SPACING_MEDIUM);

            render_categories(ui, &report.categories);
            ui.add_space(DesignSystem::SPACING_MEDIUM);

            render_results_table(ui, state);
        });
}

fn render_student_select(ui: &mut egui::Ui, state: &mut ReportsState) {
    let selected = state
        .current()
        .map(|r| r.student.full_name.clone())
        .unwrap_or_else(|| "No students".to_string());

    egui::ComboBox::from_id_salt("report_student")
        .selected_text(selected)
        .width(220.0)
        .show_ui(ui, |ui| {
            for (i, report) in state.reports.iter().enumerate() {
                ui.selectable_value(&mut state.student_idx, i, &report.student.full_name);
            }
        });
}

fn render_profile_header(ui: &mut egui::Ui, student: &Student) {
    Card::new().show(ui, |ui| {
        ui.horizontal(|ui| {
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(48.0, 48.0), egui::Sense::hover());
            ui.painter()
                .circle_filled(rect.center(), 24.0, DesignSystem::ACCENT_PRIMARY);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                student.initials(),
                egui::FontId::proportional(16.0),
                DesignSystem::TEXT_ON_ACCENT,
            );

            ui.add_space(DesignSystem::SPACING_SMALL);
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(&student.full_name)
                        .size(16.0)
                        .strong()
                        .color(DesignSystem::TEXT_PRIMARY),
                );
                ui.horizontal(|ui| {
                    render_status_pill(ui, &student.class_name, DesignSystem::INFO);
                    render_status_pill(ui, &student.group_name, DesignSystem::ACCENT_PRIMARY);
                });
            });
        });

        ui.add_space(DesignSystem::SPACING_SMALL);
        ui.separator();
        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = DesignSystem::SPACING_LARGE;
            labeled_value(ui, "Gender", student.gender.label());
            labeled_value(ui, "Date of Birth", &long_date(student.date_of_birth));
            labeled_value(ui, "Email", &student.email);
            labeled_value(ui, "Contact", &student.contact_number);
            labeled_value(ui, "State", &student.state);
        });

        if !student.focus_areas.is_empty() {
            ui.add_space(DesignSystem::SPACING_SMALL);
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    egui::RichText::new("Focus Areas")
                        .size(11.0)
                        .color(DesignSystem::TEXT_MUTED),
                );
                for area in &student.focus_areas {
                    render_status_pill(ui, area, DesignSystem::WARNING);
                }
            });
        }
    });
}

fn labeled_value(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.vertical(|ui| {
        ui.label(
            egui::RichText::new(label)
                .size(11.0)
                .color(DesignSystem::TEXT_MUTED),
        );
        ui.label(
            egui::RichText::new(value)
                .size(13.0)
                .color(DesignSystem::TEXT_PRIMARY),
        );
    });
}

fn render_trend_chart(ui: &mut egui::Ui, state: &mut ReportsState, report: &StudentReport) {
    Card::new().title("Progress Over The Year").show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("From")
                    .size(12.0)
                    .color(DesignSystem::TEXT_SECONDARY),
            );
            if month_select(ui, "trend_from", &mut state.from_month) {
                state.clamp_range_from();
            }
            ui.add_space(DesignSystem::SPACING_SMALL);
            ui.label(
                egui::RichText::new("To")
                    .size(12.0)
                    .color(DesignSystem::TEXT_SECONDARY),
            );
            if month_select(ui, "trend_to", &mut state.to_month) {
                state.clamp_range_to();
            }
        });
        ui.add_space(DesignSystem::SPACING_SMALL);

        let series =
            ReportViewModel::trend_series_between(&report.trends, state.from_month, state.to_month);

        Plot::new("report_trends")
            .height(220.0)
            .legend(Legend::default())
            .include_y(0.0)
            .include_y(5.5)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new("Basic skills", PlotPoints::from(series.basic))
                        .color(DesignSystem::SERIES_BASIC)
                        .width(2.0),
                );
                plot_ui.line(
                    Line::new("Critical thinking", PlotPoints::from(series.critical))
                        .color(DesignSystem::SERIES_CRITICAL)
                        .width(2.0),
                );
                plot_ui.line(
                    Line::new("Personality", PlotPoints::from(series.personality))
                        .color(DesignSystem::SERIES_PERSONALITY)
                        .width(2.0),
                );
            });
    });
}

fn month_select(ui: &mut egui::Ui, id_salt: &str, value: &mut u32) -> bool {
    let mut changed = false;
    let index = (*value as usize).clamp(1, 12) - 1;

    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(MONTH_NAMES[index])
        .width(120.0)
        .show_ui(ui, |ui| {
            for (i, name) in MONTH_NAMES.iter().enumerate() {
                if ui
                    .selectable_value(value, (i + 1) as u32, *name)
                    .changed()
                {
                    changed = true;
                }
            }
        });

    changed
}

fn render_skill_rings(ui: &mut egui::Ui, report: &StudentReport) {
    Card::new().title("Learning Skills").show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = DesignSystem::SPACING_LARGE;
            for (i, skill) in report.skill_rings.iter().enumerate() {
                let color = RING_COLORS[i % RING_COLORS.len()];
                ui.vertical(|ui| {
                    render_progress_ring(
                        ui,
                        skill.fraction(),
                        color,
                        64.0,
                        &format!("{:.0}%", skill.fraction() * 100.0),
                    );
                    ui.label(
                        egui::RichText::new(&skill.name)
                            .size(12.0)
                            .color(DesignSystem::TEXT_SECONDARY),
                    );
                });
            }
        });
    });
}

fn render_categories(ui: &mut egui::Ui, categories: &[SkillCategory]) {
    let per_row = categories.len().clamp(1, 3);
    for row in categories.chunks(per_row) {
        ui.columns(per_row, |columns| {
            for (slot, category) in row.iter().enumerate() {
                columns[slot].push_id(&category.title, |ui| {
                    render_category_card(ui, category);
                });
            }
        });
    }
}

fn render_category_card(ui: &mut egui::Ui, category: &SkillCategory) {
    Card::new().title(&category.title).min_height(150.0).show(ui, |ui| {
        skill_row(ui, &category.overall, DesignSystem::ACCENT_PRIMARY, true);
        ui.add_space(DesignSystem::SPACING_SMALL);
        for skill in &category.skills {
            skill_row(ui, skill, DesignSystem::INFO, false);
        }
    });
}

fn skill_row(
    ui: &mut egui::Ui,
    skill: &crate::domain::records::SkillScore,
    color: egui::Color32,
    emphasized: bool,
) {
    ui.horizontal(|ui| {
        let text = if emphasized {
            egui::RichText::new(&skill.name)
                .size(12.0)
                .strong()
                .color(DesignSystem::TEXT_PRIMARY)
        } else {
            egui::RichText::new(&skill.name)
                .size(12.0)
                .color(DesignSystem::TEXT_SECONDARY)
        };
        ui.label(text);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(skill.display())
                    .size(12.0)
                    .color(DesignSystem::TEXT_SECONDARY),
            );
            render_progress_bar(ui, skill.fraction(), color, 90.0);
        });
    });
}

fn render_results_table(ui: &mut egui::Ui, state: &mut ReportsState) {
    Card::new().title("Test Results").show(ui, |ui| {
        render_tab_strip(ui, &KIND_TABS, &mut state.kind_tab);
        ui.add_space(DesignSystem::SPACING_SMALL);

        // Filtered after the strip so a switch shows up in the same frame.
        let results = state.filtered_results();
        let tally = ReportViewModel::result_tally(&results);

        ui.horizontal(|ui| {
            render_status_pill(
                ui,
                &format!("{} passed", tally.passed),
                DesignSystem::SUCCESS,
            );
            render_status_pill(
                ui,
                &format!("{} failed", tally.failed),
                DesignSystem::DANGER,
            );
        });
        ui.add_space(DesignSystem::SPACING_SMALL);

        if results.is_empty() {
            render_empty_state(ui, "📋", "No results", "Nothing of this kind has been taken yet");
            return;
        }

        egui::Grid::new("report_results")
            .striped(true)
            .num_columns(6)
            .spacing([DesignSystem::SPACING_LARGE, 8.0])
            .show(ui, |ui| {
                for header in ["Test", "Started On", "Ended At", "Marks", "Scored", "Result"] {
                    ui.label(
                        egui::RichText::new(header)
                            .size(12.0)
                            .strong()
                            .color(DesignSystem::TEXT_SECONDARY),
                    );
                }
                ui.end_row();

                for result in &results {
                    let outcome = result.outcome();
                    let score_color = if outcome.is_pass() {
                        DesignSystem::SUCCESS
                    } else {
                        DesignSystem::DANGER
                    };

                    ui.label(
                        egui::RichText::new(&result.test_name)
                            .size(13.0)
                            .color(DesignSystem::TEXT_PRIMARY),
                    );
                    ui.label(long_date(result.started_on));
                    ui.label(result.ended_at.format("%-d %b, %H:%M").to_string());
                    ui.label(format!("{} ({})", result.total_marks, result.passing_marks));
                    ui.label(
                        egui::RichText::new(result.marks_scored.to_string())
                            .strong()
                            .color(score_color),
                    );
                    render_status_pill(ui, outcome.label(), score_color);
                    ui.end_row();
                }
            });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn state() -> ReportsState {
        let anchor = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        let catalog = MockCatalog::generate_at(11, anchor);
        ReportsState::new(&catalog)
    }

    #[test]
    fn test_every_student_has_a_report() {
        let state = state();
        assert!(!state.reports.is_empty());
        assert!(state.current().is_some());
    }

    #[test]
    fn test_kind_tab_filters_results() {
        let mut state = state();

        state.kind_tab = 0;
        let assessments = state.filtered_results();
        assert!(!assessments.is_empty());
        assert!(assessments
            .iter()
            .all(|r| r.kind == AssessmentKind::Assessment));

        state.kind_tab = 1;
        let quizzes = state.filtered_results();
        assert!(!quizzes.is_empty());
        assert!(quizzes.iter().all(|r| r.kind == AssessmentKind::Quiz));
    }

    #[test]
    fn test_range_clamps_drag_each_other() {
        let mut state = state();

        state.from_month = 8;
        state.clamp_range_from();
        assert_eq!(state.to_month, 12, "wide To is untouched");

        state.to_month = 4;
        state.clamp_range_to();
        assert_eq!(state.from_month, 4, "From follows a smaller To");

        state.from_month = 9;
        state.clamp_range_from();
        assert_eq!(state.to_month, 9, "To follows a larger From");
    }
}
