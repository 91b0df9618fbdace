//! Answered-paper review page: scores, per-option verdicts and the
//! feedback box.

use crate::application::stub_actions;
use crate::domain::paper::{OptionVerdict, ReviewedPaper, ReviewedQuestion};
use crate::infrastructure::mock::MockCatalog;
use crate::interfaces::components::widgets::{
    primary_button, render_empty_state, render_field_label, render_multiline_field,
    render_progress_bar, render_star_rating, render_status_pill,
};
use crate::interfaces::components::Card;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

pub struct PaperReviewState {
    papers: Vec<ReviewedPaper>,
    pub paper_idx: usize,
    pub feedback: String,
}

impl PaperReviewState {
    pub fn new(catalog: &MockCatalog) -> Self {
        Self {
            papers: catalog.reviewed_papers.clone(),
            paper_idx: 0,
            feedback: String::new(),
        }
    }

    pub fn current(&self) -> Option<&ReviewedPaper> {
        self.papers.get(self.paper_idx)
    }

    /// Submit clears the box; the notice comes back for the banner.
    pub fn submit_feedback(&mut self) -> Option<String> {
        if self.feedback.trim().is_empty() {
            return None;
        }
        let student = self.current()?.student_name.clone();
        let notice = stub_actions::submit_feedback(&student, &self.feedback);
        self.feedback.clear();
        Some(notice)
    }
}

/// Returns the notice a stub action produced, if any.
pub fn render_paper_review(ui: &mut egui::Ui, state: &mut PaperReviewState) -> Option<String> {
    let mut notice = None;

    ui.horizontal(|ui| {
        ui.heading(
            egui::RichText::new("Paper Review")
                .size(20.0)
                .color(DesignSystem::TEXT_PRIMARY),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            render_paper_select(ui, state);
        });
    });
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    let Some(paper) = state.current().cloned() else {
        render_empty_state(ui, "📝", "No submissions", "Answered papers show up here");
        return notice;
    };

    egui::ScrollArea::vertical()
        .id_salt("paper_review")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            render_review_header(ui, &paper);
            ui.add_space(DesignSystem::SPACING_MEDIUM);

            for question in &paper.questions {
                render_question_card(ui, question);
                ui.add_space(DesignSystem::SPACING_SMALL);
            }
            ui.add_space(DesignSystem::SPACING_SMALL);

            render_feedback_box(ui, state, &mut notice);
        });

    notice
}

fn render_paper_select(ui: &mut egui::Ui, state: &mut PaperReviewState) {
    let selected = state
        .current()
        .map(|p| format!("{} · {}", p.student_name, p.assessment_title))
        .unwrap_or_else(|| "No submissions".to_string());

    egui::ComboBox::from_id_salt("review_paper")
        .selected_text(selected)
        .width(280.0)
        .show_ui(ui, |ui| {
            for (i, paper) in state.papers.iter().enumerate() {
                let label = format!("{} · {}", paper.student_name, paper.assessment_title);
                ui.selectable_value(&mut state.paper_idx, i, label);
            }
        });
}

fn render_review_header(ui: &mut egui::Ui, paper: &ReviewedPaper) {
    Card::new().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(&paper.student_name)
                        .size(16.0)
                        .strong()
                        .color(DesignSystem::TEXT_PRIMARY),
                );
                ui.label(
                    egui::RichText::new(&paper.assessment_title)
                        .size(13.0)
                        .color(DesignSystem::TEXT_SECONDARY),
                );
                ui.add_space(4.0);
                render_star_rating(ui, paper.star_rating, 5);
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let color = if paper.score * 2 >= paper.max_score {
                    DesignSystem::SUCCESS
                } else {
                    DesignSystem::DANGER
                };
                render_status_pill(
                    ui,
                    &format!("Score {}/{}", paper.score, paper.max_score),
                    color,
                );
            });
        });

        ui.add_space(DesignSystem::SPACING_SMALL);
        ui.separator();
        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = DesignSystem::SPACING_LARGE;
            for (name, percent) in &paper.skill_percentages {
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(format!("{} · {}%", name, percent))
                            .size(12.0)
                            .color(DesignSystem::TEXT_SECONDARY),
                    );
                    render_progress_bar(
                        ui,
                        f32::from(*percent) / 100.0,
                        DesignSystem::ACCENT_PRIMARY,
                        120.0,
                    );
                });
            }
        });
    });
}

fn render_question_card(ui: &mut egui::Ui, question: &ReviewedQuestion) {
    Card::new().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!("Q{}. {}", question.number, question.text))
                    .size(14.0)
                    .strong()
                    .color(DesignSystem::TEXT_PRIMARY),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!("{} pts", question.points))
                        .size(12.0)
                        .color(DesignSystem::TEXT_MUTED),
                );
            });
        });
        ui.add_space(DesignSystem::SPACING_SMALL);

        for option in &question.options {
            render_option_row(ui, &option.text, option.verdict());
        }
    });
}

fn render_option_row(ui: &mut egui::Ui, text: &str, verdict: OptionVerdict) {
    let (fill, mark, text_color) = match verdict {
        OptionVerdict::SelectedCorrect | OptionVerdict::MissedCorrect => (
            DesignSystem::SUCCESS.linear_multiply(0.12),
            Some(("✔", DesignSystem::SUCCESS)),
            DesignSystem::TEXT_PRIMARY,
        ),
        OptionVerdict::SelectedIncorrect => (
            DesignSystem::DANGER.linear_multiply(0.12),
            Some(("✘", DesignSystem::DANGER)),
            DesignSystem::TEXT_PRIMARY,
        ),
        OptionVerdict::Neutral => (
            DesignSystem::BG_INPUT,
            None,
            DesignSystem::TEXT_SECONDARY,
        ),
    };

    egui::Frame::NONE
        .fill(fill)
        .corner_radius(DesignSystem::ROUNDING_SMALL)
        .inner_margin(egui::Margin::symmetric(10, 6))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                match mark {
                    Some((glyph, color)) => {
                        ui.label(egui::RichText::new(glyph).size(13.0).color(color));
                    }
                    None => {
                        ui.add_space(18.0);
                    }
                }
                ui.label(egui::RichText::new(text).size(13.0).color(text_color));
            });
        });
    ui.add_space(4.0);
}

fn render_feedback_box(
    ui: &mut egui::Ui,
    state: &mut PaperReviewState,
    notice: &mut Option<String>,
) {
    Card::new().title("Teacher Feedback").show(ui, |ui| {
        render_field_label(ui, "Feedback for the student");
        render_multiline_field(ui, &mut state.feedback, "What went well, what to work on…");
        ui.add_space(DesignSystem::SPACING_SMALL);

        let can_submit = !state.feedback.trim().is_empty();
        if ui
            .add_enabled(can_submit, primary_button("Submit Feedback"))
            .clicked()
        {
            *notice = state.submit_feedback();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> PaperReviewState {
        let catalog = MockCatalog::generate(11);
        PaperReviewState::new(&catalog)
    }

    #[test]
    fn test_catalog_provides_submissions() {
        let state = state();
        assert!(!state.papers.is_empty());
        let paper = state.current().expect("first paper");
        assert!(!paper.questions.is_empty());
        assert!(paper.score <= paper.max_score);
    }

    #[test]
    fn test_submit_clears_the_feedback_box() {
        let mut state = state();
        state.feedback = "Good work on the algebra section.".to_string();

        let notice = state.submit_feedback().expect("notice for the banner");

        assert!(notice.contains(&state.papers[0].student_name));
        assert!(state.feedback.is_empty());
    }

    #[test]
    fn test_blank_feedback_is_not_submitted() {
        let mut state = state();
        state.feedback = "   ".to_string();
        assert!(state.submit_feedback().is_none());
        assert_eq!(state.feedback, "   ", "box keeps whatever was typed");
    }
}
