//! Multi-step creation wizard, shared by assessments and quizzes.

pub mod details_step;
pub mod footer;
pub mod generation_step;
pub mod questionnaire_step;
pub mod review_step;
pub mod state;

pub use footer::FooterAction;
pub use state::{GenerationBrief, WizardMode, WizardState, WizardStep};

use crate::application::stub_actions;
use crate::infrastructure::MockCatalog;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// What the shell should do after this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardOutcome {
    Stay,
    /// Cancel pressed; the state has been reset.
    Cancelled,
    /// A stub action produced a banner notice.
    Notice(String),
    /// Publish/Submit pressed; the state has been reset.
    Published(String),
}

pub fn render_wizard(
    ui: &mut egui::Ui,
    state: &mut WizardState,
    catalog: &MockCatalog,
) -> WizardOutcome {
    let heading = match state.mode {
        WizardMode::Manual => format!("Create {}", state.kind().label()),
        WizardMode::AiGenerated => format!("AI Assisted {}", state.kind().label()),
    };
    ui.label(
        egui::RichText::new(heading)
            .size(20.0)
            .strong()
            .color(DesignSystem::TEXT_PRIMARY),
    );
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    render_step_indicator(ui, state);

    if let Some(notice) = state.notice.clone() {
        ui.add_space(DesignSystem::SPACING_SMALL);
        DesignSystem::banner_frame(DesignSystem::INFO).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(notice)
                        .size(12.0)
                        .color(DesignSystem::INFO),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✕").clicked() {
                        state.notice = None;
                    }
                });
            });
        });
    }

    ui.add_space(DesignSystem::SPACING_MEDIUM);

    let footer_height = 56.0;
    egui::ScrollArea::vertical()
        .id_salt("wizard_body")
        .max_height(ui.available_height() - footer_height)
        .show(ui, |ui| match (state.step, state.mode) {
            (WizardStep::Details, _) => details_step::render_details_step(ui, state, catalog),
            (WizardStep::Questionnaire, WizardMode::Manual) => {
                questionnaire_step::render_questionnaire_step(ui, state)
            }
            (WizardStep::Questionnaire, WizardMode::AiGenerated) => {
                generation_step::render_generation_step(ui, state, catalog)
            }
            (WizardStep::Review, _) => review_step::render_review_step(ui, state),
        });

    match footer::render_footer(ui, state) {
        Some(action) => apply_footer_action(state, action),
        None => WizardOutcome::Stay,
    }
}

fn apply_footer_action(state: &mut WizardState, action: FooterAction) -> WizardOutcome {
    match action {
        FooterAction::Cancel => {
            state.reset();
            WizardOutcome::Cancelled
        }
        FooterAction::Back => {
            state.notice = None;
            state.back();
            WizardOutcome::Stay
        }
        FooterAction::Continue => {
            state.notice = None;
            state.advance();
            WizardOutcome::Stay
        }
        FooterAction::UploadFile => {
            WizardOutcome::Notice(stub_actions::upload_file("Question Import"))
        }
        FooterAction::Save => WizardOutcome::Notice(stub_actions::save_draft(&state.draft)),
        FooterAction::Preview => WizardOutcome::Notice(stub_actions::preview_draft(&state.draft)),
        FooterAction::Publish => {
            let notice = stub_actions::publish_draft(&state.draft);
            state.reset();
            WizardOutcome::Published(notice)
        }
    }
}

fn render_step_indicator(ui: &mut egui::Ui, state: &WizardState) {
    let current = state.step.index();

    ui.horizontal(|ui| {
        for (i, step) in WizardStep::ALL.iter().enumerate() {
            let (fill, ring_text) = if i < current {
                (DesignSystem::SUCCESS, "✓".to_string())
            } else if i == current {
                (DesignSystem::ACCENT_PRIMARY, format!("{}", i + 1))
            } else {
                (DesignSystem::BG_INPUT, format!("{}", i + 1))
            };

            let number_color = if i <= current {
                DesignSystem::TEXT_ON_ACCENT
            } else {
                DesignSystem::TEXT_MUTED
            };

            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(26.0, 26.0), egui::Sense::hover());
            ui.painter().circle_filled(rect.center(), 13.0, fill);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                ring_text,
                egui::FontId::proportional(12.0),
                number_color,
            );

            let label_color = if i == current {
                DesignSystem::TEXT_PRIMARY
            } else {
                DesignSystem::TEXT_MUTED
            };
            ui.label(
                egui::RichText::new(step.title(state.mode))
                    .size(13.0)
                    .strong()
                    .color(label_color),
            );

            if i + 1 < WizardStep::ALL.len() {
                let (line, _) =
                    ui.allocate_exact_size(egui::vec2(36.0, 26.0), egui::Sense::hover());
                ui.painter().hline(
                    line.x_range(),
                    line.center().y,
                    egui::Stroke::new(2.0, DesignSystem::BORDER_SUBTLE),
                );
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::AssessmentKind;

    #[test]
    fn test_cancel_resets_and_reports() {
        let mut state = WizardState::new(AssessmentKind::Assessment, WizardMode::Manual);
        state.draft.name = "Partial".to_string();
        state.advance();

        let outcome = apply_footer_action(&mut state, FooterAction::Cancel);

        assert_eq!(outcome, WizardOutcome::Cancelled);
        assert_eq!(state.step, WizardStep::Details);
        assert!(state.draft.name.is_empty());
    }

    #[test]
    fn test_continue_clears_inline_notice() {
        let mut state = WizardState::new(AssessmentKind::Quiz, WizardMode::AiGenerated);
        state.notice = Some("drafted".to_string());

        apply_footer_action(&mut state, FooterAction::Continue);

        assert!(state.notice.is_none());
        assert_eq!(state.step, WizardStep::Questionnaire);
    }

    #[test]
    fn test_publish_resets_and_carries_title_in_notice() {
        let mut state = WizardState::new(AssessmentKind::Quiz, WizardMode::Manual);
        state.draft.name = "Solar System Quiz".to_string();
        state.jump_to(WizardStep::Review);

        let outcome = apply_footer_action(&mut state, FooterAction::Publish);

        match outcome {
            WizardOutcome::Published(notice) => assert!(notice.contains("Solar System Quiz")),
            other => panic!("expected Published, got {:?}", other),
        }
        assert_eq!(state.step, WizardStep::Details);
        assert!(state.draft.name.is_empty());
    }

    #[test]
    fn test_save_keeps_wizard_in_place() {
        let mut state = WizardState::new(AssessmentKind::Assessment, WizardMode::Manual);
        state.jump_to(WizardStep::Review);

        let outcome = apply_footer_action(&mut state, FooterAction::Save);

        assert!(matches!(outcome, WizardOutcome::Notice(_)));
        assert_eq!(state.step, WizardStep::Review);
    }
}
