//! Application shell: window panels, sidebar navigation, the activity
//! feed and routing between the portal pages.

use crate::config::StartView;
use crate::domain::assessment::AssessmentKind;
use crate::infrastructure::mock::MockCatalog;
use crate::infrastructure::ui_prefs::{UiPrefs, UiPrefsStore};
use crate::interfaces::components::widgets::render_status_pill;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::library::{render_library, LibraryState};
use crate::interfaces::paper_review::{render_paper_review, PaperReviewState};
use crate::interfaces::reports::{render_student_report, ReportsState};
use crate::interfaces::saved::{render_saved_papers, SavedOutcome, SavedPapersState};
use crate::interfaces::wizard::{render_wizard, WizardMode, WizardOutcome, WizardState};
use chrono::Local;
use crossbeam_channel::Receiver;
use eframe::egui;
use std::collections::VecDeque;
use tracing::warn;

/// Dropped from the front of the feed once the channel outruns it.
const LOG_SCROLLBACK: usize = 500;

/// Sidebar navigation target for every page the portal has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortalView {
    SavedAssessments,
    SavedQuizzes,
    CreateAssessment,
    CreateAiAssessment,
    Library,
    Reports,
    PaperReview,
}

impl PortalView {
    pub const ALL: [PortalView; 7] = [
        PortalView::SavedAssessments,
        PortalView::SavedQuizzes,
        PortalView::CreateAssessment,
        PortalView::CreateAiAssessment,
        PortalView::Library,
        PortalView::Reports,
        PortalView::PaperReview,
    ];

    pub fn icon(&self) -> &'static str {
        match self {
            PortalView::SavedAssessments => "🗂",
            PortalView::SavedQuizzes => "📋",
            PortalView::CreateAssessment => "✏",
            PortalView::CreateAiAssessment => "✨",
            PortalView::Library => "📚",
            PortalView::Reports => "📊",
            PortalView::PaperReview => "📝",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PortalView::SavedAssessments => "Assessments",
            PortalView::SavedQuizzes => "Quizzes",
            PortalView::CreateAssessment => "Create",
            PortalView::CreateAiAssessment => "AI Create",
            PortalView::Library => "Library",
            PortalView::Reports => "Reports",
            PortalView::PaperReview => "Review",
        }
    }
}

impl From<StartView> for PortalView {
    fn from(view: StartView) -> Self {
        match view {
            StartView::SavedAssessments => PortalView::SavedAssessments,
            StartView::SavedQuizzes => PortalView::SavedQuizzes,
            StartView::CreateAssessment => PortalView::CreateAssessment,
            StartView::CreateAiAssessment => PortalView::CreateAiAssessment,
            StartView::Library => PortalView::Library,
            StartView::Reports => PortalView::Reports,
            StartView::PaperReview => PortalView::PaperReview,
        }
    }
}

impl From<PortalView> for StartView {
    fn from(view: PortalView) -> Self {
        match view {
            PortalView::SavedAssessments => StartView::SavedAssessments,
            PortalView::SavedQuizzes => StartView::SavedQuizzes,
            PortalView::CreateAssessment => StartView::CreateAssessment,
            PortalView::CreateAiAssessment => StartView::CreateAiAssessment,
            PortalView::Library => StartView::Library,
            PortalView::Reports => StartView::Reports,
            PortalView::PaperReview => StartView::PaperReview,
        }
    }
}

pub struct PortalApp {
    school_name: String,
    catalog: MockCatalog,
    pub current_view: PortalView,

    // Per-page state, all built from the same catalog.
    manual_wizard: WizardState,
    ai_wizard: WizardState,
    saved_assessments: SavedPapersState,
    saved_quizzes: SavedPapersState,
    library: LibraryState,
    reports: ReportsState,
    paper_review: PaperReviewState,

    /// Banner line from the last stub action, until dismissed.
    pub notice: Option<String>,

    log_rx: Receiver<String>,
    log_feed: VecDeque<String>,
    feed_collapsed: bool,

    prefs_store: Option<UiPrefsStore>,
    ui_scale: f32,
    style_applied: bool,
}

impl PortalApp {
    pub fn new(
        school_name: String,
        catalog: MockCatalog,
        start_view: PortalView,
        ui_scale: f32,
        log_rx: Receiver<String>,
        prefs_store: Option<UiPrefsStore>,
    ) -> Self {
        let today = Local::now().date_naive();

        Self {
            school_name,
            current_view: start_view,
            manual_wizard: WizardState::new(AssessmentKind::Assessment, WizardMode::Manual),
            ai_wizard: WizardState::new(AssessmentKind::Assessment, WizardMode::AiGenerated),
            saved_assessments: SavedPapersState::new(
                AssessmentKind::Assessment,
                &catalog,
                today,
            ),
            saved_quizzes: SavedPapersState::new(AssessmentKind::Quiz, &catalog, today),
            library: LibraryState::new(&catalog),
            reports: ReportsState::new(&catalog),
            paper_review: PaperReviewState::new(&catalog),
            catalog,
            notice: None,
            log_rx,
            log_feed: VecDeque::new(),
            feed_collapsed: true,
            prefs_store,
            ui_scale,
            style_applied: false,
        }
    }

    /// Pull everything the tracing layer wrote since the last frame.
    fn drain_logs(&mut self) {
        while let Ok(chunk) = self.log_rx.try_recv() {
            for line in chunk.lines() {
                let line = line.trim_end();
                if !line.is_empty() {
                    self.log_feed.push_back(line.to_string());
                }
            }
        }
        while self.log_feed.len() > LOG_SCROLLBACK {
            self.log_feed.pop_front();
        }
    }

    fn handle_saved_outcome(&mut self, outcome: SavedOutcome, kind: AssessmentKind) {
        match outcome {
            SavedOutcome::Stay => {}
            SavedOutcome::Notice(text) => self.notice = Some(text),
            SavedOutcome::CreateRequested => {
                self.manual_wizard.restart_for(kind);
                self.current_view = PortalView::CreateAssessment;
            }
        }
    }

    fn handle_wizard_outcome(&mut self, outcome: WizardOutcome, kind: AssessmentKind) {
        match outcome {
            WizardOutcome::Stay => {}
            WizardOutcome::Notice(text) => self.notice = Some(text),
            WizardOutcome::Cancelled => self.current_view = saved_view_for(kind),
            WizardOutcome::Published(text) => {
                self.notice = Some(text);
                self.current_view = saved_view_for(kind);
            }
        }
    }

    fn render_top_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(
                    egui::RichText::new(format!("🎓 {}", self.school_name))
                        .size(17.0)
                        .color(DesignSystem::TEXT_PRIMARY),
                );
                ui.separator();
                ui.label(
                    egui::RichText::new(Local::now().format("%A, %-d %B · %H:%M").to_string())
                        .size(13.0)
                        .color(DesignSystem::TEXT_SECONDARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    render_status_pill(ui, "Demo Data", DesignSystem::SUCCESS);
                });
            });
        });
    }

    fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("nav_panel")
            .exact_width(96.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(DesignSystem::SPACING_LARGE);

                    for view in PortalView::ALL {
                        let is_selected = self.current_view == view;

                        let bg_color = if is_selected {
                            DesignSystem::ACCENT_PRIMARY.linear_multiply(0.12)
                        } else {
                            egui::Color32::TRANSPARENT
                        };
                        let stroke = if is_selected {
                            egui::Stroke::new(1.5, DesignSystem::ACCENT_PRIMARY)
                        } else {
                            egui::Stroke::NONE
                        };

                        egui::Frame::NONE
                            .fill(bg_color)
                            .corner_radius(8)
                            .stroke(stroke)
                            .inner_margin(egui::Margin::symmetric(0, 10))
                            .show(ui, |ui| {
                                ui.set_width(80.0);
                                if ui
                                    .vertical_centered(|ui| {
                                        ui.label(egui::RichText::new(view.icon()).size(22.0));
                                        ui.add_space(4.0);
                                        ui.label(
                                            egui::RichText::new(view.label()).size(10.0).color(
                                                if is_selected {
                                                    DesignSystem::ACCENT_PRIMARY
                                                } else {
                                                    DesignSystem::TEXT_SECONDARY
                                                },
                                            ),
                                        );
                                    })
                                    .response
                                    .interact(egui::Sense::click())
                                    .clicked()
                                {
                                    self.current_view = view;
                                }
                            });

                        ui.add_space(12.0);
                    }
                });
            });
    }

    fn render_activity_feed(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("activity_feed")
            .resizable(true)
            .default_height(180.0)
            .min_height(40.0)
            .show_animated(ctx, !self.feed_collapsed, |ui| {
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new("Activity")
                        .size(13.0)
                        .strong()
                        .color(DesignSystem::TEXT_PRIMARY),
                );
                ui.separator();

                egui::ScrollArea::vertical()
                    .id_salt("activity_feed_scroll")
                    .auto_shrink([false, true])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if self.log_feed.is_empty() {
                            ui.label(
                                egui::RichText::new("Nothing yet. Actions you take show up here.")
                                    .color(DesignSystem::TEXT_MUTED)
                                    .italics(),
                            );
                            return;
                        }

                        for (i, line) in self.log_feed.iter().enumerate() {
                            let bg_color = if i % 2 == 0 {
                                DesignSystem::BG_INPUT
                            } else {
                                egui::Color32::TRANSPARENT
                            };
                            let color = if line.contains("WARN") {
                                DesignSystem::WARNING
                            } else if line.contains("ERROR") {
                                DesignSystem::DANGER
                            } else {
                                DesignSystem::TEXT_SECONDARY
                            };

                            egui::Frame::NONE
                                .fill(bg_color)
                                .inner_margin(4)
                                .corner_radius(2)
                                .show(ui, |ui| {
                                    ui.label(
                                        egui::RichText::new(line).size(11.0).color(color),
                                    );
                                });
                        }
                    });
            });

        // Always-visible toggle strip under the feed.
        egui::TopBottomPanel::bottom("activity_toggle")
            .exact_height(25.0)
            .frame(
                egui::Frame::NONE
                    .fill(DesignSystem::BG_PANEL)
                    .inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let toggle_text = if self.feed_collapsed {
                        "Show Activity"
                    } else {
                        "Hide Activity"
                    };
                    if ui
                        .button(
                            egui::RichText::new(toggle_text)
                                .size(11.0)
                                .color(DesignSystem::TEXT_SECONDARY),
                        )
                        .clicked()
                    {
                        self.feed_collapsed = !self.feed_collapsed;
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("{} entries", self.log_feed.len()))
                                .size(10.0)
                                .color(DesignSystem::TEXT_MUTED),
                        );
                    });
                });
            });
    }

    fn render_notice_banner(&mut self, ui: &mut egui::Ui) {
        let Some(text) = self.notice.clone() else {
            return;
        };

        DesignSystem::banner_frame(DesignSystem::INFO).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&text)
                        .size(13.0)
                        .color(DesignSystem::TEXT_PRIMARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✕").clicked() {
                        self.notice = None;
                    }
                });
            });
        });
        ui.add_space(DesignSystem::SPACING_MEDIUM);
    }

    fn render_current_view(&mut self, ui: &mut egui::Ui) {
        match self.current_view {
            PortalView::SavedAssessments => {
                let outcome = render_saved_papers(ui, &mut self.saved_assessments);
                self.handle_saved_outcome(outcome, AssessmentKind::Assessment);
            }
            PortalView::SavedQuizzes => {
                let outcome = render_saved_papers(ui, &mut self.saved_quizzes);
                self.handle_saved_outcome(outcome, AssessmentKind::Quiz);
            }
            PortalView::CreateAssessment => {
                let kind = self.manual_wizard.kind();
                let outcome = render_wizard(ui, &mut self.manual_wizard, &self.catalog);
                self.handle_wizard_outcome(outcome, kind);
            }
            PortalView::CreateAiAssessment => {
                let kind = self.ai_wizard.kind();
                let outcome = render_wizard(ui, &mut self.ai_wizard, &self.catalog);
                self.handle_wizard_outcome(outcome, kind);
            }
            PortalView::Library => {
                if let Some(text) = render_library(ui, &mut self.library) {
                    self.notice = Some(text);
                }
            }
            PortalView::Reports => render_student_report(ui, &mut self.reports),
            PortalView::PaperReview => {
                if let Some(text) = render_paper_review(ui, &mut self.paper_review) {
                    self.notice = Some(text);
                }
            }
        }
    }
}

fn saved_view_for(kind: AssessmentKind) -> PortalView {
    match kind {
        AssessmentKind::Assessment => PortalView::SavedAssessments,
        AssessmentKind::Quiz => PortalView::SavedQuizzes,
    }
}

impl eframe::App for PortalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.style_applied {
            ctx.set_visuals(DesignSystem::theme());
            ctx.set_zoom_factor(self.ui_scale);
            self.style_applied = true;
        }

        self.drain_logs();

        self.render_top_bar(ctx);
        self.render_sidebar(ctx);
        self.render_activity_feed(ctx);

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                self.render_notice_banner(ui);
                self.render_current_view(ui);
            });

        // Keep the top-bar clock moving.
        ctx.request_repaint_after(std::time::Duration::from_secs(1));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        let Some(store) = &self.prefs_store else {
            return;
        };

        let prefs = UiPrefs {
            start_view: Some(StartView::from(self.current_view).name().to_string()),
            ui_scale: self.ui_scale,
        };
        if let Err(err) = store.save(&prefs) {
            warn!("Could not save UI preferences: {}", err);
        }
    }
}

/// Text styles the pages assume; egui's defaults run a size small for
/// this much tabular content.
pub fn configure_fonts(ctx: &egui::Context) {
    use egui::{FontFamily, FontId, TextStyle};

    let mut style = (*ctx.style()).clone();
    style.text_styles = [
        (TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace)),
        (TextStyle::Button, FontId::new(13.0, FontFamily::Proportional)),
        (TextStyle::Small, FontId::new(11.0, FontFamily::Proportional)),
    ]
    .into();
    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> PortalApp {
        let (_tx, rx) = crossbeam_channel::unbounded();
        let catalog = MockCatalog::generate(11);
        PortalApp::new(
            "Test School".to_string(),
            catalog,
            PortalView::SavedAssessments,
            1.0,
            rx,
            None,
        )
    }

    #[test]
    fn test_start_view_round_trips_through_portal_view() {
        for view in PortalView::ALL {
            let round_tripped = PortalView::from(StartView::from(view));
            assert_eq!(round_tripped, view);
        }
    }

    #[test]
    fn test_create_request_switches_to_the_manual_wizard() {
        let mut app = app();
        app.current_view = PortalView::SavedQuizzes;

        app.handle_saved_outcome(SavedOutcome::CreateRequested, AssessmentKind::Quiz);

        assert_eq!(app.current_view, PortalView::CreateAssessment);
        assert_eq!(app.manual_wizard.kind(), AssessmentKind::Quiz);
    }

    #[test]
    fn test_publish_returns_to_the_matching_list() {
        let mut app = app();
        app.current_view = PortalView::CreateAssessment;

        app.handle_wizard_outcome(
            WizardOutcome::Published("done".to_string()),
            AssessmentKind::Assessment,
        );

        assert_eq!(app.current_view, PortalView::SavedAssessments);
        assert_eq!(app.notice.as_deref(), Some("done"));
    }

    #[test]
    fn test_log_feed_is_bounded() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let catalog = MockCatalog::generate(11);
        let mut app = PortalApp::new(
            "Test School".to_string(),
            catalog,
            PortalView::SavedAssessments,
            1.0,
            rx,
            None,
        );

        for i in 0..(LOG_SCROLLBACK + 50) {
            tx.send(format!("line {}\n", i)).unwrap();
        }
        app.drain_logs();

        assert_eq!(app.log_feed.len(), LOG_SCROLLBACK);
        assert_eq!(app.log_feed.front().map(String::as_str), Some("line 50"));
    }
}
