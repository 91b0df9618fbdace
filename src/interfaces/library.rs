//! Library pages: the folder browser grid and the file listing inside an
//! opened folder.

use crate::application::stub_actions;
use crate::domain::library::{human_size, AssessmentFolder, FileKind, MaterialFile};
use crate::infrastructure::mock::MockCatalog;
use crate::interfaces::components::widgets::{
    render_empty_state, render_status_pill, render_tab_strip, render_text_field,
};
use crate::interfaces::components::Card;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

const KIND_TABS: [&str; 4] = ["All", "PDF", "Images", "Documents"];
const FOLDERS_PER_ROW: usize = 3;

pub struct LibraryState {
    folders: Vec<AssessmentFolder>,
    files: Vec<MaterialFile>,
    categories: Vec<String>,
    pub category_tab: usize,
    pub open_folder: Option<String>,
    pub search: String,
    pub kind_tab: usize,
}

impl LibraryState {
    pub fn new(catalog: &MockCatalog) -> Self {
        Self {
            folders: catalog.folders.clone(),
            files: catalog.material_files.clone(),
            categories: catalog.folder_categories.clone(),
            category_tab: 0,
            open_folder: None,
            search: String::new(),
            kind_tab: 0,
        }
    }

    /// Indices into `folders` for the active category tab (0 = All).
    pub fn visible_folder_indices(&self) -> Vec<usize> {
        if self.category_tab == 0 || self.category_tab > self.categories.len() {
            return (0..self.folders.len()).collect();
        }
        let category = &self.categories[self.category_tab - 1];
        self.folders
            .iter()
            .enumerate()
            .filter(|(_, f)| &f.category == category)
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices into `files` passing the search box and the kind tab.
    pub fn visible_file_indices(&self) -> Vec<usize> {
        let kind = kind_for_tab(self.kind_tab);
        self.files
            .iter()
            .enumerate()
            .filter(|(_, f)| f.matches(&self.search) && kind.is_none_or(|k| f.kind == k))
            .map(|(i, _)| i)
            .collect()
    }

    /// Opening a folder starts with a clean search and filter.
    pub fn open(&mut self, name: &str) {
        self.open_folder = Some(name.to_string());
        self.search.clear();
        self.kind_tab = 0;
    }

    pub fn close(&mut self) {
        self.open_folder = None;
    }
}

pub fn kind_for_tab(tab: usize) -> Option<FileKind> {
    match tab {
        1 => Some(FileKind::Pdf),
        2 => Some(FileKind::Image),
        3 => Some(FileKind::Document),
        _ => None,
    }
}

fn kind_color(kind: FileKind) -> egui::Color32 {
    match kind {
        FileKind::Pdf => DesignSystem::DANGER,
        FileKind::Image => DesignSystem::INFO,
        FileKind::Document => DesignSystem::SUCCESS,
    }
}

/// Routes between the browser grid and an opened folder. Returns the
/// notice a stub action produced, if any.
pub fn render_library(ui: &mut egui::Ui, state: &mut LibraryState) -> Option<String> {
    let mut notice = None;
    match state.open_folder.clone() {
        Some(folder_name) => render_folder_contents(ui, state, &folder_name, &mut notice),
        None => render_folder_browser(ui, state, &mut notice),
    }
    notice
}

pub fn render_folder_browser(
    ui: &mut egui::Ui,
    state: &mut LibraryState,
    notice: &mut Option<String>,
) {
    ui.heading(
        egui::RichText::new("Library")
            .size(20.0)
            .color(DesignSystem::TEXT_PRIMARY),
    );
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    let mut tabs: Vec<&str> = vec!["All"];
    tabs.extend(state.categories.iter().map(|s| s.as_str()));
    render_tab_strip(ui, &tabs, &mut state.category_tab);
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    let visible = state.visible_folder_indices();
    if visible.is_empty() {
        render_empty_state(
            ui,
            "📁",
            "No folders in this category",
            "Folders you share will show up here",
        );
        return;
    }

    let mut open_request: Option<String> = None;

    egui::ScrollArea::vertical()
        .id_salt("library_folders")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for row in visible.chunks(FOLDERS_PER_ROW) {
                ui.columns(FOLDERS_PER_ROW, |columns| {
                    for (slot, &index) in row.iter().enumerate() {
                        let folder = &state.folders[index];
                        columns[slot].push_id(folder.id, |ui| {
                            render_folder_card(ui, folder, &mut open_request, notice);
                        });
                    }
                });
                ui.add_space(DesignSystem::SPACING_MEDIUM);
            }
        });

    if let Some(name) = open_request {
        state.open(&name);
    }
}

fn render_folder_card(
    ui: &mut egui::Ui,
    folder: &AssessmentFolder,
    open_request: &mut Option<String>,
    notice: &mut Option<String>,
) {
    Card::new().min_height(110.0).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("📁").size(20.0));
            ui.label(
                egui::RichText::new(&folder.name)
                    .size(14.0)
                    .strong()
                    .color(DesignSystem::TEXT_PRIMARY),
            );
        });
        ui.label(
            egui::RichText::new(format!("{} Files", folder.file_count))
                .size(12.0)
                .color(DesignSystem::TEXT_SECONDARY),
        );
        ui.add_space(4.0);
        render_status_pill(ui, &folder.category, DesignSystem::ACCENT_PRIMARY);
        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.horizontal(|ui| {
            if ui.button("Open").clicked() {
                *open_request = Some(folder.name.clone());
            }
            if ui.button("Manage Access").clicked() {
                *notice = Some(stub_actions::manage_access(&folder.name));
            }
        });
    });
}

pub fn render_folder_contents(
    ui: &mut egui::Ui,
    state: &mut LibraryState,
    folder_name: &str,
    notice: &mut Option<String>,
) {
    ui.horizontal(|ui| {
        if ui.button("← Back").clicked() {
            state.close();
        }
        ui.heading(
            egui::RichText::new(folder_name)
                .size(20.0)
                .color(DesignSystem::TEXT_PRIMARY),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Upload File").clicked() {
                *notice = Some(stub_actions::upload_file(folder_name));
            }
        });
    });
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    ui.horizontal(|ui| {
        ui.scope(|ui| {
            ui.set_width(260.0);
            render_text_field(ui, &mut state.search, "Search files");
        });
        ui.add_space(DesignSystem::SPACING_MEDIUM);
        render_tab_strip(ui, &KIND_TABS, &mut state.kind_tab);
    });
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    let visible = state.visible_file_indices();
    if visible.is_empty() {
        render_empty_state(
            ui,
            "🔍",
            "No files found",
            "Try a different search or filter",
        );
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("library_files")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for index in visible {
                let file = &state.files[index];
                Card::new().show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(file.kind.icon()).size(18.0));
                        ui.label(
                            egui::RichText::new(&file.name)
                                .size(14.0)
                                .strong()
                                .color(DesignSystem::TEXT_PRIMARY),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(
                                    egui::RichText::new(human_size(file.size_kb))
                                        .size(12.0)
                                        .color(DesignSystem::TEXT_SECONDARY),
                                );
                                render_status_pill(
                                    ui,
                                    file.kind.label(),
                                    kind_color(file.kind),
                                );
                            },
                        );
                    });
                });
                ui.add_space(DesignSystem::SPACING_SMALL);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> LibraryState {
        let catalog = MockCatalog::generate(11);
        LibraryState::new(&catalog)
    }

    #[test]
    fn test_all_tab_shows_every_folder() {
        let state = state();
        assert_eq!(state.visible_folder_indices().len(), state.folders.len());
    }

    #[test]
    fn test_category_tab_filters_folders() {
        let mut state = state();
        state.category_tab = 1;
        let category = state.categories[0].clone();
        for index in state.visible_folder_indices() {
            assert_eq!(state.folders[index].category, category);
        }
    }

    #[test]
    fn test_search_narrows_files() {
        let mut state = state();
        state.search = "chapter".to_string();
        let visible = state.visible_file_indices();
        assert!(!visible.is_empty());
        for index in visible {
            assert!(state.files[index].name.to_lowercase().contains("chapter"));
        }
    }

    #[test]
    fn test_kind_tab_narrows_files() {
        let mut state = state();
        state.kind_tab = 2;
        let visible = state.visible_file_indices();
        assert!(!visible.is_empty(), "catalog always has image files");
        for index in visible {
            assert_eq!(state.files[index].kind, FileKind::Image);
        }
    }

    #[test]
    fn test_kind_for_tab_mapping() {
        assert_eq!(kind_for_tab(0), None);
        assert_eq!(kind_for_tab(1), Some(FileKind::Pdf));
        assert_eq!(kind_for_tab(2), Some(FileKind::Image));
        assert_eq!(kind_for_tab(3), Some(FileKind::Document));
    }

    #[test]
    fn test_opening_a_folder_resets_the_filters() {
        let mut state = state();
        state.search = "left over".to_string();
        state.kind_tab = 3;

        state.open("Geometry Drills");

        assert_eq!(state.open_folder.as_deref(), Some("Geometry Drills"));
        assert!(state.search.is_empty());
        assert_eq!(state.kind_tab, 0);

        state.close();
        assert!(state.open_folder.is_none());
    }
}
