//! Cross-page behavior over a single generated catalog, the way the shell
//! wires the portal together.

use classdesk::domain::assessment::AssessmentKind;
use classdesk::domain::records::PaperStatus;
use classdesk::infrastructure::mock::MockCatalog;
use classdesk::interfaces::library::LibraryState;
use classdesk::interfaces::paper_review::PaperReviewState;
use classdesk::interfaces::reports::ReportsState;
use classdesk::interfaces::saved::{SavedPapersState, ALL_BATCHES};
use chrono::NaiveDate;

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
}

fn catalog() -> MockCatalog {
    MockCatalog::generate_at(9, anchor())
}

#[test]
fn test_saved_list_filters_and_row_actions() {
    let catalog = catalog();
    let mut state = SavedPapersState::new(AssessmentKind::Quiz, &catalog, anchor());

    // Only quizzes made it into the page state.
    assert!(state.papers.iter().all(|p| p.kind == AssessmentKind::Quiz));
    assert_eq!(state.batch_filter, ALL_BATCHES);

    // The default tab shows every scheduled quiz.
    assert_eq!(state.active_status(), PaperStatus::Scheduled);
    let scheduled = state.visible_indices();
    assert!(!scheduled.is_empty());
    assert!(scheduled
        .iter()
        .all(|&i| state.papers[i].status == PaperStatus::Scheduled));

    // Narrowing to one batch can only shrink the list.
    state.batch_filter = catalog.batches[0].clone();
    let narrowed = state.visible_indices();
    assert!(narrowed.len() <= scheduled.len());
    assert!(narrowed
        .iter()
        .all(|&i| state.papers[i].batch == catalog.batches[0]));

    // Duplicate inserts a renamed copy right after the original.
    state.batch_filter = ALL_BATCHES.to_string();
    let before = state.papers.len();
    let original_title = state.papers[0].title.clone();
    state.duplicate_at(0);
    assert_eq!(state.papers.len(), before + 1);
    assert_eq!(state.papers[1].title, format!("Copy of {}", original_title));
    assert_ne!(state.papers[1].id, state.papers[0].id);

    // Delete removes exactly the targeted row.
    let doomed = state.papers[1].id;
    state.delete_at(1);
    assert_eq!(state.papers.len(), before);
    assert!(state.papers.iter().all(|p| p.id != doomed));
}

#[test]
fn test_saved_month_stats_match_visible_data() {
    let catalog = catalog();
    let state = SavedPapersState::new(AssessmentKind::Assessment, &catalog, anchor());

    let stats = state.month_stats();
    let in_month = state
        .papers
        .iter()
        .filter(|p| {
            p.scheduled_on.format("%Y-%m").to_string() == anchor().format("%Y-%m").to_string()
        })
        .count();

    assert_eq!(stats.total(), in_month);
    assert_eq!(stats.scheduled + stats.completed + stats.saved, in_month);
}

#[test]
fn test_library_browse_and_search() {
    let catalog = catalog();
    let mut state = LibraryState::new(&catalog);

    // The All tab shows every folder.
    assert_eq!(state.visible_folder_indices().len(), catalog.folders.len());

    // A category tab shows only its folders. Tab 0 is "All".
    state.category_tab = 1;
    let category = catalog.folder_categories[0].clone();
    assert!(state
        .visible_folder_indices()
        .iter()
        .all(|&i| catalog.folders[i].category == category));

    // Opening a folder clears any stale file filters.
    state.search = "left over".to_string();
    state.kind_tab = 2;
    state.open(&catalog.materials_folder_name);
    assert_eq!(state.open_folder.as_deref(), Some("Algebra Basics"));
    assert!(state.search.is_empty());
    assert_eq!(state.kind_tab, 0);

    // Search narrows the file list to matches.
    state.search = "chapter summary".to_string();
    let hits = state.visible_file_indices();
    assert_eq!(hits.len(), 1);
    assert_eq!(catalog.material_files[hits[0]].name, "Chapter Summary.pdf");

    state.close();
    assert!(state.open_folder.is_none());
}

#[test]
fn test_report_range_and_kind_filters() {
    let catalog = catalog();
    let mut state = ReportsState::new(&catalog);

    let report = state.current().expect("first student selected");
    let total = report.results.len();

    // Kind tabs split the results without losing any.
    let assessments = state.filtered_results().len();
    state.kind_tab = 1;
    assert_eq!(state.active_kind(), AssessmentKind::Quiz);
    let quizzes = state.filtered_results().len();
    assert_eq!(assessments + quizzes, total);
    assert!(assessments > 0 && quizzes > 0);

    // Dragging From past To pulls To along, and the other way around.
    state.from_month = 9;
    state.to_month = 4;
    state.clamp_range_from();
    assert_eq!(state.to_month, 9);

    state.to_month = 2;
    state.clamp_range_to();
    assert_eq!(state.from_month, 2);
}

#[test]
fn test_review_feedback_requires_text_and_clears_after_send() {
    let catalog = catalog();
    let mut state = PaperReviewState::new(&catalog);

    let student = state.current().expect("a paper is selected").student_name.clone();

    // Blank feedback is rejected.
    state.feedback = "   ".to_string();
    assert!(state.submit_feedback().is_none());

    state.feedback = "Strong on geometry, slow on word problems.".to_string();
    let notice = state.submit_feedback().expect("feedback accepted");
    assert!(notice.contains(&student));
    assert!(state.feedback.is_empty());
}
