//! First wizard step: name, schedule, scoring, topics and audience.

use crate::domain::assessment::{
    Audience, MAX_DURATION_HOURS, MAX_DURATION_MINUTES, MAX_TOTAL_POINTS,
};
use crate::infrastructure::MockCatalog;
use crate::interfaces::components::widgets::{
    render_date_field, render_field_label, render_multiline_field, render_select,
    render_text_field, NumberSpinner,
};
use crate::interfaces::components::{
    render_student_picker, render_topic_picker, Card, StudentPickerData, TopicPickerData,
};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::wizard::state::WizardState;
use eframe::egui;

pub fn render_details_step(ui: &mut egui::Ui, state: &mut WizardState, catalog: &MockCatalog) {
    let kind_label = state.kind().label();

    Card::new().title("Basic Information").show(ui, |ui| {
        render_field_label(ui, &format!("{} Name", kind_label));
        render_text_field(
            ui,
            &mut state.draft.name,
            &format!("e.g. Midterm {}", kind_label),
        );
        ui.add_space(DesignSystem::SPACING_SMALL);

        render_field_label(ui, "Description");
        render_multiline_field(
            ui,
            &mut state.draft.description,
            "What this paper covers...",
        );
        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                render_field_label(ui, "Subject");
                render_select(
                    ui,
                    "details_subject",
                    &mut state.draft.subject,
                    &catalog.subjects,
                    "Select subject",
                );
            });
            ui.add_space(DesignSystem::SPACING_MEDIUM);
            ui.vertical(|ui| {
                render_field_label(ui, "Class");
                render_select(
                    ui,
                    "details_class",
                    &mut state.draft.class_name,
                    &catalog.class_names,
                    "Select class",
                );
            });
            ui.add_space(DesignSystem::SPACING_MEDIUM);
            ui.vertical(|ui| {
                render_field_label(ui, "Group");
                render_select(
                    ui,
                    "details_group",
                    &mut state.draft.group_name,
                    &catalog.group_names,
                    "Select group",
                );
            });
        });
    });

    ui.add_space(DesignSystem::SPACING_MEDIUM);

    Card::new().title("Schedule & Scoring").show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                render_field_label(ui, "Test Date");
                render_date_field(ui, &mut state.draft.test_date);
            });
            ui.add_space(DesignSystem::SPACING_LARGE);
            ui.vertical(|ui| {
                render_field_label(ui, "Expiry Date");
                render_date_field(ui, &mut state.draft.expiry_date);
            });
        });

        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                render_field_label(ui, "Duration (Hours)");
                NumberSpinner::new(&mut state.draft.duration_hours)
                    .range(0, MAX_DURATION_HOURS)
                    .show(ui);
            });
            ui.add_space(DesignSystem::SPACING_LARGE);
            ui.vertical(|ui| {
                render_field_label(ui, "Duration (Minutes)");
                NumberSpinner::new(&mut state.draft.duration_minutes)
                    .range(0, MAX_DURATION_MINUTES)
                    .show(ui);
            });
        });

        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                render_field_label(ui, "Total Points");
                if NumberSpinner::new(&mut state.draft.total_points)
                    .range(0, MAX_TOTAL_POINTS)
                    .show(ui)
                {
                    // Passing can never exceed the total
                    state.draft.passing_points =
                        state.draft.passing_points.min(state.draft.total_points);
                }
            });
            ui.add_space(DesignSystem::SPACING_LARGE);
            ui.vertical(|ui| {
                render_field_label(ui, "Passing Points");
                let total = state.draft.total_points;
                NumberSpinner::new(&mut state.draft.passing_points)
                    .range(0, total)
                    .show(ui);
            });
        });
    });

    ui.add_space(DesignSystem::SPACING_MEDIUM);

    Card::new().title("Topics").show(ui, |ui| {
        render_topic_picker(
            ui,
            TopicPickerData {
                available: &catalog.unit_topics,
                selected: &mut state.draft.topics,
            },
        );
    });

    ui.add_space(DesignSystem::SPACING_MEDIUM);

    let assign_all = matches!(state.draft.audience, Audience::AllStudents);
    Card::new().title("Audience").show(ui, |ui| {
        ui.horizontal(|ui| {
            if ui.radio(assign_all, "All Students").clicked() {
                state.draft.audience = Audience::AllStudents;
            }
            if ui.radio(!assign_all, "Selected Students").clicked() && assign_all {
                state.draft.audience =
                    Audience::Selected(state.student_picker.pending_selection.clone());
            }
        });
    });

    if !matches!(state.draft.audience, Audience::AllStudents) {
        ui.add_space(DesignSystem::SPACING_MEDIUM);
        render_student_picker(
            ui,
            StudentPickerData {
                students: &catalog.students,
                audience: &mut state.draft.audience,
            },
            &mut state.student_picker,
        );
    }
}
