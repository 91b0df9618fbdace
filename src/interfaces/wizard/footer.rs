//! Bottom action row of the wizard. Emits the clicked action; the wizard
//! root decides what it means for the state.

use crate::interfaces::components::widgets::{primary_button, secondary_button};
use crate::interfaces::wizard::state::{WizardMode, WizardState, WizardStep};
use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterAction {
    Cancel,
    Back,
    Continue,
    UploadFile,
    Save,
    Preview,
    Publish,
}

pub fn render_footer(ui: &mut egui::Ui, state: &WizardState) -> Option<FooterAction> {
    let mut action = None;

    ui.separator();
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        if ui.add(secondary_button("Cancel")).clicked() {
            action = Some(FooterAction::Cancel);
        }

        if state.step.prev().is_some() && ui.add(secondary_button("Back")).clicked() {
            action = Some(FooterAction::Back);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            match state.step {
                WizardStep::Review => {
                    let publish_label = match state.mode {
                        WizardMode::Manual => format!("Create {}", state.kind().label()),
                        WizardMode::AiGenerated => "Submit".to_string(),
                    };
                    if ui.add(primary_button(&publish_label)).clicked() {
                        action = Some(FooterAction::Publish);
                    }
                    if ui.add(secondary_button("Preview")).clicked() {
                        action = Some(FooterAction::Preview);
                    }
                    if ui.add(secondary_button("Save")).clicked() {
                        action = Some(FooterAction::Save);
                    }
                }
                _ => {
                    if ui.add(primary_button("Continue")).clicked() {
                        action = Some(FooterAction::Continue);
                    }

                    let manual_questionnaire = state.step == WizardStep::Questionnaire
                        && state.mode == WizardMode::Manual;
                    if manual_questionnaire {
                        if ui.add(secondary_button("Save")).clicked() {
                            action = Some(FooterAction::Save);
                        }
                        if ui.add(secondary_button("Upload File")).clicked() {
                            action = Some(FooterAction::UploadFile);
                        }
                    }
                }
            }
        });
    });

    action
}
