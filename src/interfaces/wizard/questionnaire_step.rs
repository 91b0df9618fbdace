//! Second wizard step (manual mode): build the question list.

use crate::domain::assessment::{
    questions_points_total, QuestionDraft, MAX_OPTIONS, MAX_QUESTION_POINTS, MIN_OPTIONS,
};
use crate::interfaces::components::widgets::{
    primary_button, render_field_label, NumberSpinner,
};
use crate::interfaces::components::Card;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::wizard::state::WizardState;
use eframe::egui;
use uuid::Uuid;

pub fn render_questionnaire_step(ui: &mut egui::Ui, state: &mut WizardState) {
    let draft = &mut state.draft;

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("{} Questions", draft.questions.len()))
                .size(14.0)
                .strong()
                .color(DesignSystem::TEXT_PRIMARY),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let assigned = questions_points_total(&draft.questions);
            let color = if assigned > draft.total_points {
                DesignSystem::WARNING
            } else {
                DesignSystem::TEXT_SECONDARY
            };
            ui.label(
                egui::RichText::new(format!(
                    "Question points: {} (paper total {})",
                    assigned, draft.total_points
                ))
                .size(12.0)
                .color(color),
            );
        });
    });

    ui.add_space(DesignSystem::SPACING_SMALL);

    let mut removed: Option<usize> = None;
    let mut duplicated: Option<usize> = None;
    let question_count = draft.questions.len();

    for (i, question) in draft.questions.iter_mut().enumerate() {
        Card::new().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("Question {}", i + 1))
                        .size(13.0)
                        .strong()
                        .color(DesignSystem::ACCENT_PRIMARY),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let remove_btn = egui::Button::new(
                        egui::RichText::new("✕ Remove")
                            .size(11.0)
                            .color(DesignSystem::DANGER),
                    )
                    .fill(DesignSystem::DANGER.linear_multiply(0.08));
                    if ui.add_enabled(question_count > 1, remove_btn).clicked() {
                        removed = Some(i);
                    }

                    if ui
                        .add(
                            egui::Button::new(
                                egui::RichText::new("⧉ Duplicate")
                                    .size(11.0)
                                    .color(DesignSystem::TEXT_SECONDARY),
                            )
                            .fill(DesignSystem::BG_INPUT),
                        )
                        .clicked()
                    {
                        duplicated = Some(i);
                    }
                });
            });

            ui.add_space(4.0);
            ui.add(
                egui::TextEdit::multiline(&mut question.text)
                    .hint_text("Type the question...")
                    .desired_rows(2)
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(DesignSystem::SPACING_SMALL);

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    render_field_label(ui, "Points");
                    NumberSpinner::new(&mut question.points)
                        .range(0, MAX_QUESTION_POINTS)
                        .show(ui);
                });
                ui.add_space(DesignSystem::SPACING_LARGE);
                ui.vertical(|ui| {
                    render_field_label(ui, "Options");
                    let mut count = question.options.len() as u32;
                    if NumberSpinner::new(&mut count)
                        .range(MIN_OPTIONS as u32, MAX_OPTIONS as u32)
                        .show(ui)
                    {
                        question.set_option_count(count as usize);
                    }
                });
            });

            ui.add_space(DesignSystem::SPACING_SMALL);
            render_field_label(ui, "Answer options (tick the correct one)");

            let correct_id = question.correct_option_id;
            let mut set_correct: Option<Uuid> = None;

            for (k, option) in question.options.iter_mut().enumerate() {
                ui.horizontal(|ui| {
                    if ui.radio(correct_id == Some(option.id), "").clicked() {
                        set_correct = Some(option.id);
                    }
                    ui.add(
                        egui::TextEdit::singleline(&mut option.text)
                            .hint_text(format!("Option {}", k + 1))
                            .desired_width(ui.available_width() - 8.0),
                    );
                });
            }

            if let Some(id) = set_correct {
                question.correct_option_id = Some(id);
            }
        });

        ui.add_space(DesignSystem::SPACING_SMALL);
    }

    if let Some(i) = duplicated {
        let copy = draft.questions[i].duplicated();
        draft.questions.insert(i + 1, copy);
    }
    if let Some(i) = removed {
        draft.questions.remove(i);
    }

    ui.add_space(DesignSystem::SPACING_SMALL);
    ui.vertical_centered(|ui| {
        if ui.add(primary_button("+ Add Question")).clicked() {
            draft.questions.push(QuestionDraft::new_blank());
        }
    });
}
