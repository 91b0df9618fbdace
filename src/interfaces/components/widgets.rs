//! Small shared widgets used across the portal pages.

use crate::domain::assessment::{long_date, parse_display_date};
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Secondary label shown above a form field
pub fn render_field_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(12.0)
            .color(DesignSystem::TEXT_SECONDARY)
            .strong(),
    );
}

pub fn render_text_field(ui: &mut egui::Ui, value: &mut String, hint: &str) -> egui::Response {
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    )
}

pub fn render_multiline_field(ui: &mut egui::Ui, value: &mut String, hint: &str) -> egui::Response {
    ui.add(
        egui::TextEdit::multiline(value)
            .hint_text(hint)
            .desired_rows(3)
            .desired_width(f32::INFINITY),
    )
}

/// Dropdown over a fixed option list. Returns true when the value changed.
pub fn render_select(
    ui: &mut egui::Ui,
    id_salt: &str,
    value: &mut String,
    options: &[String],
    placeholder: &str,
) -> bool {
    let mut changed = false;
    let selected_text = if value.is_empty() {
        placeholder.to_string()
    } else {
        value.clone()
    };

    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(selected_text)
        .width(ui.available_width().min(220.0))
        .show_ui(ui, |ui| {
            for option in options {
                if ui
                    .selectable_value(value, option.clone(), option)
                    .changed()
                {
                    changed = true;
                }
            }
        });

    changed
}

/// Free-text date field. The form keeps whatever is typed; a small line
/// underneath confirms the parse or nudges toward the expected format.
pub fn render_date_field(ui: &mut egui::Ui, value: &mut String) -> egui::Response {
    let response = ui.add(
        egui::TextEdit::singleline(value)
            .hint_text("dd-mm-yyyy")
            .desired_width(150.0),
    );

    match parse_display_date(value) {
        Some(date) => {
            ui.label(
                egui::RichText::new(long_date(date))
                    .size(11.0)
                    .color(DesignSystem::SUCCESS),
            );
        }
        None if !value.trim().is_empty() => {
            ui.label(
                egui::RichText::new("Use dd-mm-yyyy")
                    .size(11.0)
                    .color(DesignSystem::WARNING),
            );
        }
        None => {}
    }

    response
}

/// Stepper for small counts. Shows the value zero padded to two digits and
/// disables the buttons at the range ends.
pub struct NumberSpinner<'a> {
    value: &'a mut u32,
    min: u32,
    max: u32,
}

impl<'a> NumberSpinner<'a> {
    pub fn new(value: &'a mut u32) -> Self {
        Self {
            value,
            min: 0,
            max: u32::MAX,
        }
    }

    pub fn range(mut self, min: u32, max: u32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;

        ui.horizontal(|ui| {
            let step_button = |label: &str| {
                egui::Button::new(egui::RichText::new(label).size(14.0).strong())
                    .min_size(egui::vec2(26.0, 26.0))
                    .corner_radius(DesignSystem::ROUNDING_SMALL)
            };

            if ui
                .add_enabled(*self.value > self.min, step_button("-"))
                .clicked()
            {
                *self.value -= 1;
                changed = true;
            }

            ui.label(
                egui::RichText::new(format!("{:02}", *self.value))
                    .size(16.0)
                    .strong()
                    .color(DesignSystem::TEXT_PRIMARY),
            );

            if ui
                .add_enabled(*self.value < self.max, step_button("+"))
                .clicked()
            {
                *self.value += 1;
                changed = true;
            }
        });

        changed
    }
}

/// Accent-filled call-to-action button
pub fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(text)
            .size(14.0)
            .strong()
            .color(DesignSystem::TEXT_ON_ACCENT),
    )
    .fill(DesignSystem::ACCENT_PRIMARY)
    .corner_radius(DesignSystem::ROUNDING_MEDIUM)
    .min_size(egui::vec2(120.0, 34.0))
}

/// Quiet button for secondary actions
pub fn secondary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(text)
            .size(13.0)
            .color(DesignSystem::TEXT_SECONDARY),
    )
    .fill(DesignSystem::BG_INPUT)
    .corner_radius(DesignSystem::ROUNDING_MEDIUM)
    .min_size(egui::vec2(90.0, 34.0))
}

/// A status pill (e.g., for Pass/Fail or paper status)
pub fn render_status_pill(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    egui::Frame::NONE
        .fill(color.linear_multiply(0.15))
        .corner_radius(12)
        .inner_margin(egui::Margin::symmetric(8, 4))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(12.0).strong().color(color));
        });
}

/// Horizontal row of selectable tab labels. Returns true on switch.
pub fn render_tab_strip(ui: &mut egui::Ui, labels: &[&str], active: &mut usize) -> bool {
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = DesignSystem::SPACING_MEDIUM;
        for (i, label) in labels.iter().enumerate() {
            let selected = *active == i;
            let text = if selected {
                egui::RichText::new(*label)
                    .strong()
                    .color(DesignSystem::ACCENT_PRIMARY)
            } else {
                egui::RichText::new(*label).color(DesignSystem::TEXT_SECONDARY)
            };

            if ui.selectable_label(selected, text).clicked() && !selected {
                *active = i;
                changed = true;
            }
        }
    });

    changed
}

pub fn render_empty_state(ui: &mut egui::Ui, icon: &str, title: &str, subtitle: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(DesignSystem::SPACING_LARGE);
        ui.label(egui::RichText::new(icon).size(40.0));
        ui.label(
            egui::RichText::new(title)
                .size(16.0)
                .strong()
                .color(DesignSystem::TEXT_PRIMARY),
        );
        ui.label(
            egui::RichText::new(subtitle)
                .size(12.0)
                .color(DesignSystem::TEXT_MUTED),
        );
        ui.add_space(DesignSystem::SPACING_LARGE);
    });
}

/// Thin horizontal bar filled to `fraction`
pub fn render_progress_bar(ui: &mut egui::Ui, fraction: f32, color: egui::Color32, width: f32) {
    let height = 6.0;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());

    ui.painter()
        .rect_filled(rect, height / 2.0, DesignSystem::BORDER_SUBTLE);

    let filled = fraction.clamp(0.0, 1.0) * rect.width();
    if filled > 0.0 {
        let fill_rect = egui::Rect::from_min_size(rect.min, egui::vec2(filled, height));
        ui.painter().rect_filled(fill_rect, height / 2.0, color);
    }
}

pub fn render_star_rating(ui: &mut egui::Ui, rating: u8, out_of: u8) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;
        for i in 0..out_of {
            let (glyph, color) = if i < rating {
                ("★", DesignSystem::WARNING)
            } else {
                ("☆", DesignSystem::TEXT_MUTED)
            };
            ui.label(egui::RichText::new(glyph).size(16.0).color(color));
        }
    });
}

/// Circular progress ring with a label in the middle
pub fn render_progress_ring(
    ui: &mut egui::Ui,
    fraction: f32,
    color: egui::Color32,
    size: f32,
    center_text: &str,
) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());

    // Background track
    ui.painter().circle_stroke(
        rect.center(),
        size / 2.0 - 3.0,
        egui::Stroke::new(5.0, DesignSystem::BORDER_SUBTLE),
    );

    let fraction = fraction.clamp(0.0, 1.0);
    if fraction > 0.0 {
        use egui::epaint::{PathShape, Stroke};
        use std::f32::consts::PI;

        let center = rect.center();
        let radius = size / 2.0 - 3.0;
        let start_angle = -PI / 2.0; // Top
        let sweep_angle = 2.0 * PI * fraction;

        let steps = 32;
        let mut points = Vec::new();

        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let angle = start_angle + t * sweep_angle;
            points.push(egui::pos2(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            ));
        }

        ui.painter()
            .add(PathShape::line(points, Stroke::new(5.0, color)));
    }

    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        center_text,
        egui::FontId::proportional(12.0),
        DesignSystem::TEXT_PRIMARY,
    );
}
