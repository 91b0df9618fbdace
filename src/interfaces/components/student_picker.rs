//! Student picker for assigning an assessment to part of a class.
//!
//! Selections stay pending until Apply writes them into the draft audience,
//! so closing the wizard step never leaves a half-edited assignment.

use crate::domain::assessment::Audience;
use crate::domain::school::Student;
use crate::interfaces::components::card::Card;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;
use uuid::Uuid;

/// State for the student picker UI
#[derive(Default)]
pub struct StudentPickerState {
    /// Search query for filtering students
    pub search_query: String,
    /// Currently ticked students (pending apply)
    pub pending_selection: Vec<Uuid>,
    /// Whether the picker has been initialized
    pub initialized: bool,
}

impl StudentPickerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize with the draft's current audience
    pub fn initialize(&mut self, audience: &Audience) {
        if !self.initialized {
            if let Audience::Selected(ids) = audience {
                self.pending_selection = ids.clone();
            }
            self.initialized = true;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Data container for student picker rendering
pub struct StudentPickerData<'a> {
    pub students: &'a [Student],
    pub audience: &'a mut Audience,
}

/// Renders the student picker component
pub fn render_student_picker(
    ui: &mut egui::Ui,
    data: StudentPickerData<'_>,
    state: &mut StudentPickerState,
) {
    state.initialize(data.audience);

    Card::new().title("Assign Students").show(ui, |ui| {
        ui.add_space(8.0);

        // Stats row
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!(
                    "{} selected / {} students",
                    state.pending_selection.len(),
                    data.students.len()
                ))
                .color(DesignSystem::TEXT_SECONDARY)
                .size(13.0),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add(
                        egui::Button::new(
                            egui::RichText::new("Clear All")
                                .size(12.0)
                                .color(DesignSystem::TEXT_SECONDARY),
                        )
                        .fill(DesignSystem::BG_INPUT),
                    )
                    .clicked()
                {
                    state.pending_selection.clear();
                }

                if ui
                    .add(
                        egui::Button::new(
                            egui::RichText::new("Select All")
                                .size(12.0)
                                .color(DesignSystem::TEXT_SECONDARY),
                        )
                        .fill(DesignSystem::BG_INPUT),
                    )
                    .clicked()
                {
                    state.pending_selection = data.students.iter().map(|s| s.id).collect();
                }
            });
        });

        ui.add_space(12.0);

        // Search input
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("🔍")
                    .size(16.0)
                    .color(DesignSystem::TEXT_MUTED),
            );

            let response = ui.add(
                egui::TextEdit::singleline(&mut state.search_query)
                    .hint_text("Search students...")
                    .desired_width(ui.available_width() - 40.0)
                    .font(egui::FontId::proportional(14.0)),
            );

            if !state.search_query.is_empty() && ui.button("✕").clicked() {
                state.search_query.clear();
                response.request_focus();
            }
        });

        ui.add_space(12.0);

        let filtered: Vec<&Student> = data
            .students
            .iter()
            .filter(|s| s.matches(&state.search_query))
            .collect();

        egui::ScrollArea::vertical()
            .id_salt("student_list")
            .max_height(240.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                egui::Grid::new("student_grid")
                    .num_columns(2)
                    .spacing([8.0, 6.0])
                    .show(ui, |ui| {
                        for (idx, student) in filtered.iter().enumerate() {
                            let is_selected = state.pending_selection.contains(&student.id);

                            let bg_color = if is_selected {
                                DesignSystem::ACCENT_PRIMARY.linear_multiply(0.15)
                            } else {
                                DesignSystem::BG_INPUT
                            };

                            let text_color = if is_selected {
                                DesignSystem::ACCENT_PRIMARY
                            } else {
                                DesignSystem::TEXT_PRIMARY
                            };

                            let btn = egui::Button::new(
                                egui::RichText::new(format!(
                                    "{} ({})",
                                    student.full_name, student.class_name
                                ))
                                .size(12.0)
                                .color(text_color),
                            )
                            .fill(bg_color)
                            .min_size(egui::vec2(180.0, 28.0));

                            if ui.add(btn).clicked() {
                                if is_selected {
                                    state.pending_selection.retain(|id| *id != student.id);
                                } else {
                                    state.pending_selection.push(student.id);
                                }
                            }

                            if (idx + 1) % 2 == 0 {
                                ui.end_row();
                            }
                        }
                    });

                if filtered.is_empty() {
                    ui.add_space(20.0);
                    ui.label(
                        egui::RichText::new("No students match the search")
                            .color(DesignSystem::TEXT_MUTED)
                            .italics(),
                    );
                }
            });

        ui.add_space(16.0);

        let committed: Vec<Uuid> = match data.audience {
            Audience::Selected(ids) => ids.clone(),
            Audience::AllStudents => Vec::new(),
        };
        let has_changes = state.pending_selection != committed;
        let can_apply = !state.pending_selection.is_empty() && has_changes;

        ui.horizontal(|ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let apply_btn = egui::Button::new(
                    egui::RichText::new("✓ Apply Selection")
                        .size(14.0)
                        .strong()
                        .color(if can_apply {
                            DesignSystem::TEXT_ON_ACCENT
                        } else {
                            DesignSystem::TEXT_MUTED
                        }),
                )
                .fill(if can_apply {
                    DesignSystem::ACCENT_PRIMARY
                } else {
                    DesignSystem::BG_INPUT
                })
                .min_size(egui::vec2(150.0, 36.0));

                if ui.add_enabled(can_apply, apply_btn).clicked() {
                    *data.audience = Audience::Selected(state.pending_selection.clone());
                    tracing::info!(
                        "Audience updated: {} students assigned",
                        state.pending_selection.len()
                    );
                }

                if has_changes
                    && ui
                        .add(
                            egui::Button::new(
                                egui::RichText::new("Reset")
                                    .size(12.0)
                                    .color(DesignSystem::TEXT_SECONDARY),
                            )
                            .fill(DesignSystem::BG_INPUT),
                        )
                        .clicked()
                {
                    state.pending_selection = committed.clone();
                }
            });
        });
    });
}
