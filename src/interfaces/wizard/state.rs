//! Wizard step machine and the per-run editing state.

use crate::domain::assessment::{AssessmentDraft, AssessmentKind};
use crate::interfaces::components::StudentPickerState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardMode {
    Manual,
    AiGenerated,
}

impl WizardMode {
    pub fn is_ai(&self) -> bool {
        matches!(self, WizardMode::AiGenerated)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Details,
    Questionnaire,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [
        WizardStep::Details,
        WizardStep::Questionnaire,
        WizardStep::Review,
    ];

    pub fn index(&self) -> usize {
        match self {
            WizardStep::Details => 0,
            WizardStep::Questionnaire => 1,
            WizardStep::Review => 2,
        }
    }

    /// Step label for the indicator. The middle step is the manual
    /// questionnaire or the generation brief depending on mode.
    pub fn title(&self, mode: WizardMode) -> &'static str {
        match (self, mode) {
            (WizardStep::Details, _) => "Details",
            (WizardStep::Questionnaire, WizardMode::Manual) => "Questionnaire",
            (WizardStep::Questionnaire, WizardMode::AiGenerated) => "Generate",
            (WizardStep::Review, _) => "Review",
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Details => Some(WizardStep::Questionnaire),
            WizardStep::Questionnaire => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    pub fn prev(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Details => None,
            WizardStep::Questionnaire => Some(WizardStep::Details),
            WizardStep::Review => Some(WizardStep::Questionnaire),
        }
    }
}

/// Inputs for the AI generation brief.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationBrief {
    pub prompt: String,
    pub difficulty: String,
    pub question_count: u32,
    pub generated: bool,
}

impl Default for GenerationBrief {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            difficulty: "Medium".to_string(),
            question_count: 5,
            generated: false,
        }
    }
}

pub struct WizardState {
    pub mode: WizardMode,
    pub step: WizardStep,
    pub draft: AssessmentDraft,
    pub student_picker: StudentPickerState,
    pub brief: GenerationBrief,
    /// Inline message under the step header (e.g. after generation).
    pub notice: Option<String>,
}

impl WizardState {
    pub fn new(kind: AssessmentKind, mode: WizardMode) -> Self {
        Self {
            mode,
            step: WizardStep::Details,
            draft: AssessmentDraft::new(kind),
            student_picker: StudentPickerState::new(),
            brief: GenerationBrief::default(),
            notice: None,
        }
    }

    pub fn kind(&self) -> AssessmentKind {
        self.draft.kind
    }

    /// Fresh draft of the same kind and mode.
    pub fn reset(&mut self) {
        *self = Self::new(self.draft.kind, self.mode);
    }

    /// Start over for a different paper kind (saved-list Create buttons).
    pub fn restart_for(&mut self, kind: AssessmentKind) {
        *self = Self::new(kind, self.mode);
    }

    pub fn advance(&mut self) {
        if let Some(next) = self.step.next() {
            self.step = next;
        }
    }

    pub fn back(&mut self) {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
    }

    pub fn jump_to(&mut self, step: WizardStep) {
        self.step = step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_advance_in_order_and_stop_at_review() {
        let mut state = WizardState::new(AssessmentKind::Assessment, WizardMode::Manual);
        assert_eq!(state.step, WizardStep::Details);

        state.advance();
        assert_eq!(state.step, WizardStep::Questionnaire);
        state.advance();
        assert_eq!(state.step, WizardStep::Review);
        state.advance();
        assert_eq!(state.step, WizardStep::Review);
    }

    #[test]
    fn test_back_stops_at_details() {
        let mut state = WizardState::new(AssessmentKind::Quiz, WizardMode::Manual);
        state.advance();
        state.back();
        assert_eq!(state.step, WizardStep::Details);
        state.back();
        assert_eq!(state.step, WizardStep::Details);
    }

    #[test]
    fn test_middle_step_title_depends_on_mode() {
        let step = WizardStep::Questionnaire;
        assert_eq!(step.title(WizardMode::Manual), "Questionnaire");
        assert_eq!(step.title(WizardMode::AiGenerated), "Generate");
    }

    #[test]
    fn test_reset_keeps_kind_and_mode_but_clears_edits() {
        let mut state = WizardState::new(AssessmentKind::Quiz, WizardMode::AiGenerated);
        state.draft.name = "Half-finished".to_string();
        state.brief.prompt = "photosynthesis".to_string();
        state.advance();

        state.reset();

        assert_eq!(state.kind(), AssessmentKind::Quiz);
        assert!(state.mode.is_ai());
        assert_eq!(state.step, WizardStep::Details);
        assert!(state.draft.name.is_empty());
        assert!(state.brief.prompt.is_empty());
    }

    #[test]
    fn test_restart_for_switches_kind() {
        let mut state = WizardState::new(AssessmentKind::Assessment, WizardMode::Manual);
        state.restart_for(AssessmentKind::Quiz);
        assert_eq!(state.kind(), AssessmentKind::Quiz);
        assert_eq!(state.step, WizardStep::Details);
    }
}
