//! Handlers for every button that would talk to a backend in production.
//!
//! Each one logs what would have been sent and returns the notice line the
//! shell banner shows. Nothing here touches disk or network.

use crate::domain::assessment::{long_date, AssessmentDraft};
use crate::domain::records::SavedPaper;
use tracing::{info, warn};

pub fn publish_draft(draft: &AssessmentDraft) -> String {
    let title = draft.display_title();
    info!(
        "Publish requested for {} '{}' ({} questions, audience: {})",
        draft.kind.label(),
        title,
        draft.questions.len(),
        draft.audience.summary()
    );
    format!("\"{}\" has been published (demo only).", title)
}

pub fn save_draft(draft: &AssessmentDraft) -> String {
    let title = draft.display_title();
    match serde_json::to_string_pretty(draft) {
        Ok(payload) => info!("Saving draft '{}':\n{}", title, payload),
        Err(err) => warn!("Could not serialize draft '{}': {}", title, err),
    }
    format!("\"{}\" saved to drafts (demo only).", title)
}

pub fn preview_draft(draft: &AssessmentDraft) -> String {
    let title = draft.display_title();
    info!("Preview requested for '{}'", title);
    format!("Preview for \"{}\" is not available in this demo.", title)
}

pub fn upload_file(folder_name: &str) -> String {
    info!("Upload requested for folder '{}'", folder_name);
    format!(
        "Uploads to \"{}\" are not available in this demo.",
        folder_name
    )
}

pub fn manage_access(folder_name: &str) -> String {
    info!("Access management opened for folder '{}'", folder_name);
    format!(
        "Access management for \"{}\" is not available in this demo.",
        folder_name
    )
}

pub fn edit_paper(paper: &SavedPaper) -> String {
    info!("Edit requested for paper '{}'", paper.title);
    format!("Editing \"{}\" is not available in this demo.", paper.title)
}

pub fn paper_info(paper: &SavedPaper) -> String {
    info!(
        "Info requested for paper '{}' ({:?}, {})",
        paper.title, paper.status, paper.batch
    );
    format!(
        "\"{}\": {} for {}, scheduled {}.",
        paper.title,
        paper.kind.label(),
        paper.batch,
        long_date(paper.scheduled_on)
    )
}

pub fn submit_feedback(student_name: &str, text: &str) -> String {
    info!(
        "Feedback for {} submitted ({} chars)",
        student_name,
        text.trim().len()
    );
    format!("Feedback for {} submitted (demo only).", student_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::AssessmentKind;
    use crate::domain::records::PaperStatus;
    use chrono::NaiveDate;
    use uuid::Uuid;

    #[test]
    fn test_publish_notice_names_the_draft() {
        let mut draft = AssessmentDraft::new(AssessmentKind::Assessment);
        draft.name = "Midterm Mathematics".to_string();

        let notice = publish_draft(&draft);
        assert!(notice.contains("Midterm Mathematics"));
        assert!(notice.contains("published"));
    }

    #[test]
    fn test_untitled_draft_gets_placeholder_in_notice() {
        let draft = AssessmentDraft::new(AssessmentKind::Quiz);
        let notice = save_draft(&draft);
        assert!(notice.contains("Untitled Quiz"));
    }

    #[test]
    fn test_paper_info_summarizes_metadata() {
        let paper = SavedPaper {
            id: Uuid::new_v4(),
            kind: AssessmentKind::Quiz,
            title: "Solar System Quiz".to_string(),
            batch: "Batch 2026".to_string(),
            scheduled_on: NaiveDate::from_ymd_opt(2026, 3, 12).unwrap(),
            status: PaperStatus::Scheduled,
        };

        let notice = paper_info(&paper);
        assert!(notice.contains("Solar System Quiz"));
        assert!(notice.contains("Quiz"));
        assert!(notice.contains("12 March 2026"));
    }
}
