//! Topic chips with an inline checklist for adding more.

use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

pub struct TopicPickerData<'a> {
    pub available: &'a [String],
    pub selected: &'a mut Vec<String>,
}

/// Renders the selected topic chips and the add-topic checklist.
/// Returns true when the selection changed this frame.
pub fn render_topic_picker(ui: &mut egui::Ui, data: TopicPickerData<'_>) -> bool {
    let mut changed = false;

    if data.selected.is_empty() {
        ui.label(
            egui::RichText::new("No topics selected yet")
                .size(12.0)
                .color(DesignSystem::TEXT_MUTED)
                .italics(),
        );
    } else {
        let mut removed: Option<usize> = None;
        ui.horizontal_wrapped(|ui| {
            for (i, topic) in data.selected.iter().enumerate() {
                egui::Frame::NONE
                    .fill(DesignSystem::ACCENT_PRIMARY.linear_multiply(0.12))
                    .corner_radius(12)
                    .inner_margin(egui::Margin::symmetric(8, 4))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(topic)
                                .size(12.0)
                                .color(DesignSystem::ACCENT_PRIMARY),
                        );
                        if ui
                            .add(egui::Button::new(egui::RichText::new("✕").size(10.0)).frame(false))
                            .clicked()
                        {
                            removed = Some(i);
                        }
                    });
            }
        });

        if let Some(i) = removed {
            data.selected.remove(i);
            changed = true;
        }
    }

    ui.add_space(DesignSystem::SPACING_SMALL);

    egui::CollapsingHeader::new(
        egui::RichText::new("Add Topics")
            .size(13.0)
            .color(DesignSystem::TEXT_SECONDARY),
    )
    .id_salt("topic_checklist")
    .show(ui, |ui| {
        for topic in data.available {
            let mut is_selected = data.selected.contains(topic);
            if ui.checkbox(&mut is_selected, topic).changed() {
                if is_selected {
                    data.selected.push(topic.clone());
                } else {
                    data.selected.retain(|t| t != topic);
                }
                changed = true;
            }
        }
    });

    changed
}
