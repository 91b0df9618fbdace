//! Second wizard step (AI mode): a short brief and a Generate action that
//! drafts questions from the catalog question bank.

use crate::infrastructure::MockCatalog;
use crate::interfaces::components::widgets::{
    primary_button, render_field_label, render_multiline_field, render_select, NumberSpinner,
};
use crate::interfaces::components::Card;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::wizard::state::WizardState;
use eframe::egui;
use tracing::info;

pub fn render_generation_step(ui: &mut egui::Ui, state: &mut WizardState, catalog: &MockCatalog) {
    let difficulties: Vec<String> = ["Easy", "Medium", "Hard"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    Card::new().title("Generation Brief").show(ui, |ui| {
        render_field_label(ui, "What should the questions cover?");
        render_multiline_field(
            ui,
            &mut state.brief.prompt,
            "e.g. fractions, decimals and the number line for Class 6",
        );

        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                render_field_label(ui, "Difficulty");
                render_select(
                    ui,
                    "gen_difficulty",
                    &mut state.brief.difficulty,
                    &difficulties,
                    "Select difficulty",
                );
            });
            ui.add_space(DesignSystem::SPACING_LARGE);
            ui.vertical(|ui| {
                render_field_label(ui, "Number of questions");
                NumberSpinner::new(&mut state.brief.question_count)
                    .range(1, 10)
                    .show(ui);
            });
        });

        ui.add_space(DesignSystem::SPACING_MEDIUM);

        let generate_label = if state.brief.generated {
            "Regenerate"
        } else {
            "Generate Questions"
        };
        if ui.add(primary_button(generate_label)).clicked() {
            generate_questions(state, catalog);
        }
    });

    if state.brief.generated {
        ui.add_space(DesignSystem::SPACING_MEDIUM);
        render_field_label(ui, "Drafted questions");
        ui.add_space(4.0);

        for (i, question) in state.draft.questions.iter().enumerate() {
            Card::new().show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!("Q{}.", i + 1))
                            .strong()
                            .color(DesignSystem::ACCENT_PRIMARY),
                    );
                    ui.label(egui::RichText::new(&question.text).size(13.0));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("{} pts", question.points))
                                .size(11.0)
                                .color(DesignSystem::TEXT_MUTED),
                        );
                    });
                });

                for option in &question.options {
                    let is_correct = question.correct_option_id == Some(option.id);
                    let (glyph, color) = if is_correct {
                        ("✓", DesignSystem::SUCCESS)
                    } else {
                        (" ", DesignSystem::TEXT_SECONDARY)
                    };
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(glyph).color(color));
                        ui.label(egui::RichText::new(&option.text).size(12.0).color(color));
                    });
                }
            });
            ui.add_space(DesignSystem::SPACING_SMALL);
        }
    }
}

/// Draft `question_count` questions out of the bank. The slice rotates with
/// the brief so different prompts pull different questions, but the same
/// brief always drafts the same paper.
fn generate_questions(state: &mut WizardState, catalog: &MockCatalog) {
    let pool = &catalog.question_pool;
    if pool.is_empty() {
        state.notice = Some("The question bank is empty.".to_string());
        return;
    }

    let count = (state.brief.question_count as usize).min(pool.len());
    let start = state.brief.prompt.trim().len() % pool.len();

    state.draft.questions = (0..count)
        .map(|k| pool[(start + k) % pool.len()].duplicated())
        .collect();
    state.brief.generated = true;

    info!(
        "Drafted {} questions (difficulty: {}, prompt: '{}')",
        count,
        state.brief.difficulty,
        state.brief.prompt.trim()
    );
    state.notice = Some(format!(
        "{} questions drafted. Adjust the brief and regenerate, or continue to review.",
        count
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::AssessmentKind;
    use crate::interfaces::wizard::state::WizardMode;
    use chrono::NaiveDate;

    fn catalog() -> MockCatalog {
        MockCatalog::generate_at(3, NaiveDate::from_ymd_opt(2026, 3, 15).unwrap())
    }

    #[test]
    fn test_generation_fills_draft_from_bank() {
        let catalog = catalog();
        let mut state = WizardState::new(AssessmentKind::Assessment, WizardMode::AiGenerated);
        state.brief.question_count = 4;
        state.brief.prompt = "solar system".to_string();

        generate_questions(&mut state, &catalog);

        assert!(state.brief.generated);
        assert_eq!(state.draft.questions.len(), 4);
        for q in &state.draft.questions {
            assert!(q.correct_option_id.is_some());
            assert!(!q.text.is_empty());
        }
    }

    #[test]
    fn test_same_brief_drafts_same_questions() {
        let catalog = catalog();
        let mut a = WizardState::new(AssessmentKind::Quiz, WizardMode::AiGenerated);
        let mut b = WizardState::new(AssessmentKind::Quiz, WizardMode::AiGenerated);
        for s in [&mut a, &mut b] {
            s.brief.prompt = "grammar".to_string();
            s.brief.question_count = 3;
        }

        generate_questions(&mut a, &catalog);
        generate_questions(&mut b, &catalog);

        let texts = |s: &WizardState| {
            s.draft
                .questions
                .iter()
                .map(|q| q.text.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(texts(&a), texts(&b));
    }

    #[test]
    fn test_regeneration_replaces_previous_draft() {
        let catalog = catalog();
        let mut state = WizardState::new(AssessmentKind::Quiz, WizardMode::AiGenerated);
        state.brief.question_count = 2;
        generate_questions(&mut state, &catalog);
        let first = state.draft.questions.clone();

        state.brief.prompt = "a longer prompt to rotate the bank".to_string();
        generate_questions(&mut state, &catalog);

        assert_eq!(state.draft.questions.len(), 2);
        assert_ne!(
            state.draft.questions[0].text, first[0].text,
            "rotated slice should start elsewhere"
        );
    }
}
