//! Final wizard step: read-only summary before publishing.

use crate::application::WizardSummary;
use crate::domain::assessment::{long_date, parse_display_date};
use crate::interfaces::components::widgets::render_empty_state;
use crate::interfaces::components::Card;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::wizard::state::{WizardState, WizardStep};
use eframe::egui;

pub fn render_review_step(ui: &mut egui::Ui, state: &mut WizardState) {
    let summary = WizardSummary::from_draft(&state.draft);
    let mut jump: Option<WizardStep> = None;

    Card::new().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(&summary.title)
                    .size(18.0)
                    .strong()
                    .color(DesignSystem::TEXT_PRIMARY),
            );
            ui.label(
                egui::RichText::new(summary.kind.label())
                    .size(12.0)
                    .color(DesignSystem::TEXT_MUTED),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Edit").clicked() {
                    jump = Some(WizardStep::Details);
                }
            });
        });

        ui.add_space(DesignSystem::SPACING_SMALL);

        egui::Grid::new("review_summary")
            .num_columns(2)
            .spacing([24.0, 8.0])
            .show(ui, |ui| {
                summary_row(ui, "Subject", &summary.subject);
                summary_row(ui, "Class", &summary.class_name);
                summary_row(ui, "Scheduled for", &display_date(&summary.test_date));
                summary_row(ui, "Time", &summary.duration);
                summary_row(ui, "Total Point", &summary.total_points.to_string());
                summary_row(ui, "Passing Point", &summary.passing_points.to_string());
                summary_row(ui, "Expiry", &display_date(&summary.expiry_date));
                summary_row(ui, "Audience", &summary.audience);
                summary_row(ui, "Topics", &summary.topics);
            });
    });

    ui.add_space(DesignSystem::SPACING_MEDIUM);

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!(
                "{} Questions ({} points)",
                summary.question_count, summary.question_points
            ))
            .size(14.0)
            .strong()
            .color(DesignSystem::TEXT_PRIMARY),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Edit").clicked() {
                jump = Some(WizardStep::Questionnaire);
            }
        });
    });

    ui.add_space(DesignSystem::SPACING_SMALL);

    if state.draft.questions.is_empty() {
        render_empty_state(
            ui,
            "❓",
            "No questions yet",
            "Go back a step to add or generate questions.",
        );
    }

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

            ui.add_space(4.0);

            for option in &question.options {
                let is_correct = question.correct_option_id == Some(option.id);
                let frame = if is_correct {
                    egui::Frame::NONE
                        .fill(DesignSystem::SUCCESS.linear_multiply(0.1))
                        .corner_radius(DesignSystem::ROUNDING_SMALL)
                        .inner_margin(egui::Margin::symmetric(6, 3))
                } else {
                    egui::Frame::NONE.inner_margin(egui::Margin::symmetric(6, 3))
                };

                frame.show(ui, |ui| {
                    let color = if is_correct {
                        DesignSystem::SUCCESS
                    } else {
                        DesignSystem::TEXT_SECONDARY
                    };
                    let marker = if is_correct { "✓" } else { "○" };
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(marker).color(color));
                        ui.label(egui::RichText::new(&option.text).size(12.0).color(color));
                    });
                });
            }
        });
        ui.add_space(DesignSystem::SPACING_SMALL);
    }

    if let Some(step) = jump {
        state.jump_to(step);
    }
}

fn summary_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.label(
        egui::RichText::new(label)
            .size(12.0)
            .color(DesignSystem::TEXT_SECONDARY),
    );
    let shown = if value.is_empty() { "Not set" } else { value };
    ui.label(
        egui::RichText::new(shown)
            .size(12.0)
            .strong()
            .color(DesignSystem::TEXT_PRIMARY),
    );
    ui.end_row();
}

/// Long form when the field parses, otherwise whatever was typed.
fn display_date(raw: &str) -> String {
    match parse_display_date(raw) {
        Some(date) => long_date(date),
        None => raw.to_string(),
    }
}
