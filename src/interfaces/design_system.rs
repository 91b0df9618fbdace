use eframe::egui;

/// Classdesk Light Mode Design System
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    // Backgrounds
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(245, 246, 250); // #F5F6FA
    pub const BG_PANEL: egui::Color32 = egui::Color32::from_rgb(245, 246, 250); // #F5F6FA
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(255, 255, 255); // #FFFFFF
    pub const BG_CARD_HOVER: egui::Color32 = egui::Color32::from_rgb(248, 243, 246);
    pub const BG_INPUT: egui::Color32 = egui::Color32::from_rgb(247, 248, 252);

    // Accents
    pub const ACCENT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(255, 51, 102); // #FF3366 (Pink)
    pub const ACCENT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(255, 102, 143); // Lighter Pink

    // Status
    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(46, 174, 96); // #2EAE60
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(229, 57, 53); // #E53935
    pub const WARNING: egui::Color32 = egui::Color32::from_rgb(245, 158, 11); // #F59E0B
    pub const INFO: egui::Color32 = egui::Color32::from_rgb(41, 98, 255);

    // Report chart series
    pub const SERIES_BASIC: egui::Color32 = egui::Color32::from_rgb(41, 98, 255); // Blue
    pub const SERIES_CRITICAL: egui::Color32 = egui::Color32::from_rgb(255, 51, 102); // Pink
    pub const SERIES_PERSONALITY: egui::Color32 = egui::Color32::from_rgb(245, 158, 11); // Amber

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(31, 36, 48);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_gray(110);
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_gray(150);
    pub const TEXT_ON_ACCENT: egui::Color32 = egui::Color32::from_rgb(255, 255, 255);

    // Borders
    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(225, 228, 235);
    pub const BORDER_FOCUS: egui::Color32 = egui::Color32::from_rgb(255, 102, 143);

    // --- Metrics ---

    pub const ROUNDING_SMALL: f32 = 4.0;
    pub const ROUNDING_MEDIUM: f32 = 8.0;
    pub const ROUNDING_LARGE: f32 = 12.0;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;
    pub const SPACING_LARGE: f32 = 24.0;

    // --- Styles ---

    /// Returns the standard visual style for the application
    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::light();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_PANEL;
        visuals.extreme_bg_color = Self::BG_INPUT;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);

        visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_SECONDARY);
        visuals.widgets.inactive.weak_bg_fill = Self::BG_CARD;
        visuals.widgets.inactive.bg_fill = Self::BG_CARD;

        visuals.widgets.hovered.bg_fill = Self::BG_CARD_HOVER;
        visuals.widgets.active.bg_fill = Self::ACCENT_SECONDARY;

        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.2);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::ACCENT_PRIMARY);

        visuals
    }

    /// Standard Card Styling
    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    /// Application Main Layout Frame
    pub fn main_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_WINDOW)
            .inner_margin(egui::Margin::same(Self::SPACING_LARGE as i8))
    }

    /// Tinted strip used for the notice banner
    pub fn banner_frame(color: egui::Color32) -> egui::Frame {
        egui::Frame::NONE
            .fill(color.linear_multiply(0.12))
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, color))
            .inner_margin(egui::Margin::symmetric(12, 8))
    }
}
