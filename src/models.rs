use serde::Deserialize;

use crate::error::QuizError;

/// Upper bound on the number of questions drawn for one quiz run.
pub const MAX_QUESTIONS: usize = 10;

/// A question as it appears in a bank file.
///
/// French keys (`texte`, `propositions`, ...) are accepted as aliases.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct QuestionRecord {
    #[serde(alias = "texte")]
    pub text: String,
    #[serde(alias = "propositions")]
    pub options: Vec<String>,
    #[serde(alias = "bonneReponseIndex")]
    pub correct_index: usize,
    #[serde(alias = "explication", default)]
    pub explanation: String,
}

/// One multiple-choice item. Everything but the current selection is fixed
/// at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct_index: usize,
    explanation: String,
    selected_index: Option<usize>,
}

impl Question {
    /// Build a question, checking that it has options and that the correct
    /// index points at one of them.
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, String> {
        if options.is_empty() {
            return Err("question has no options".to_string());
        }
        if correct_index >= options.len() {
            return Err(format!(
                "correct index {} out of range for {} options",
                correct_index,
                options.len()
            ));
        }
        Ok(Self {
            text: text.into(),
            options,
            correct_index,
            explanation: explanation.into(),
            selected_index: None,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn is_answered(&self) -> bool {
        self.selected_index.is_some()
    }

    /// True only when an answer is selected and it is the correct one.
    pub fn is_correct(&self) -> bool {
        self.selected_index == Some(self.correct_index)
    }

    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }

    pub fn user_option(&self) -> Option<&str> {
        self.selected_index.map(|i| self.options[i].as_str())
    }

    /// Set or clear the selection. An index outside the option range is
    /// rejected and the previous selection is kept.
    pub fn set_selected(&mut self, index: Option<usize>) -> Result<(), QuizError> {
        if let Some(i) = index
            && i >= self.options.len()
        {
            return Err(QuizError::InvalidSelectionIndex {
                index: i,
                options: self.options.len(),
            });
        }
        self.selected_index = index;
        Ok(())
    }

    /// Copy of this question with no selection, for handing to a new session.
    pub fn unanswered_copy(&self) -> Self {
        Self {
            selected_index: None,
            ..self.clone()
        }
    }
}

impl TryFrom<QuestionRecord> for Question {
    type Error = String;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        Question::new(
            record.text,
            record.options,
            record.correct_index,
            record.explanation,
        )
    }
}

/// Which part of the bank a session draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelection {
    All,
    Category(String),
}

impl CategorySelection {
    pub fn label(&self) -> &str {
        match self {
            CategorySelection::All => "ALL CATEGORIES (shuffled)",
            CategorySelection::Category(name) => name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Completed,
}

/// Position-based and answer-based progress, deliberately kept apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
    pub position: usize,
}

impl Progress {
    /// Fill ratio for a progress bar, driven by position only.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.position + 1) as f64 / self.total as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsReview,
}

impl ScoreBand {
    pub fn message(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent!",
            ScoreBand::Good => "Good result!",
            ScoreBand::NeedsReview => "Needs review!",
        }
    }
}

impl Score {
    pub fn band(&self) -> ScoreBand {
        if self.percentage >= 80.0 {
            ScoreBand::Excellent
        } else if self.percentage >= 60.0 {
            ScoreBand::Good
        } else {
            ScoreBand::NeedsReview
        }
    }

    pub fn rounded_percentage(&self) -> u32 {
        self.percentage.round() as u32
    }
}

/// Per-question line of the correction, shared by the quick recap and the
/// detailed correction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionEntry {
    pub index: usize,
    pub question_text: String,
    pub correct_option: String,
    pub user_option: Option<String>,
    pub is_correct: bool,
    pub explanation: String,
}

impl CorrectionEntry {
    pub fn is_answered(&self) -> bool {
        self.user_option.is_some()
    }
}

/// One quiz run: the drawn questions and the current position.
#[derive(Debug, Clone)]
pub struct QuizSession {
    pub(crate) questions: Vec<Question>,
    pub(crate) current_index: usize,
    pub(crate) state: SessionState,
    pub(crate) category: String,
}

/// A running session together with the terminal-only view state around it.
#[derive(Debug)]
pub struct ActiveQuiz {
    pub session: QuizSession,
    pub highlighted: usize,
    pub recap_open: bool,
    pub correction_scroll: u16,
}

impl ActiveQuiz {
    pub fn new(session: QuizSession) -> Self {
        let highlighted = session.current().selected_index().unwrap_or(0);
        Self {
            session,
            highlighted,
            recap_open: false,
            correction_scroll: 0,
        }
    }

    /// Move the highlight onto the stored answer of the question now shown.
    pub fn sync_highlight(&mut self) {
        self.highlighted = self.session.current().selected_index().unwrap_or(0);
    }
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Menu,
    Quiz,
    QuizQuitConfirm,
    Summary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capital_question() -> Question {
        Question::new(
            "Capital of France?",
            vec!["Lyon".to_string(), "Paris".to_string(), "Nice".to_string()],
            1,
            "Paris has been the capital since 987.",
        )
        .unwrap()
    }

    #[test]
    fn test_question_rejects_empty_options() {
        assert!(Question::new("Q", vec![], 0, "").is_err());
    }

    #[test]
    fn test_question_rejects_out_of_range_correct_index() {
        let err = Question::new("Q", vec!["a".to_string()], 1, "").unwrap_err();
        assert!(err.contains("out of range"));
    }

    #[test]
    fn test_unanswered_question_is_not_correct() {
        let q = capital_question();
        assert!(!q.is_correct());
        assert!(!q.is_answered());
        assert_eq!(q.user_option(), None);
        assert_eq!(q.correct_option(), "Paris");
    }

    #[test]
    fn test_correct_and_incorrect_selection() {
        let mut q = capital_question();
        q.set_selected(Some(1)).unwrap();
        assert!(q.is_correct());
        assert_eq!(q.user_option(), Some("Paris"));

        q.set_selected(Some(2)).unwrap();
        assert!(!q.is_correct());
        assert_eq!(q.user_option(), Some("Nice"));
    }

    #[test]
    fn test_selection_is_idempotent() {
        let mut q = capital_question();
        q.set_selected(Some(0)).unwrap();
        let first = (q.is_correct(), q.user_option().map(str::to_string));
        q.set_selected(Some(0)).unwrap();
        assert_eq!(first, (q.is_correct(), q.user_option().map(str::to_string)));
    }

    #[test]
    fn test_clearing_selection_restores_unanswered() {
        let mut q = capital_question();
        q.set_selected(Some(1)).unwrap();
        q.set_selected(None).unwrap();
        assert!(!q.is_correct());
        assert_eq!(q.user_option(), None);
    }

    #[test]
    fn test_out_of_range_selection_is_rejected() {
        let mut q = capital_question();
        q.set_selected(Some(2)).unwrap();
        let err = q.set_selected(Some(3)).unwrap_err();
        assert_eq!(
            err,
            QuizError::InvalidSelectionIndex {
                index: 3,
                options: 3
            }
        );
        assert_eq!(q.selected_index(), Some(2));
    }

    #[test]
    fn test_duplicate_option_text_selected_by_index() {
        let mut q = Question::new(
            "Pick the second",
            vec!["Same".to_string(), "Same".to_string()],
            1,
            "",
        )
        .unwrap();
        q.set_selected(Some(1)).unwrap();
        assert!(q.is_correct());
        q.set_selected(Some(0)).unwrap();
        assert!(!q.is_correct());
    }

    #[test]
    fn test_unanswered_copy_drops_selection() {
        let mut q = capital_question();
        q.set_selected(Some(1)).unwrap();
        let copy = q.unanswered_copy();
        assert_eq!(copy.selected_index(), None);
        assert_eq!(copy.text(), q.text());
        assert_eq!(q.selected_index(), Some(1));
    }

    #[test]
    fn test_record_with_french_keys() {
        let json = r#"{
            "texte": "Question ?",
            "propositions": ["A", "B"],
            "bonneReponseIndex": 0,
            "explication": "Because."
        }"#;
        let record: QuestionRecord = serde_json::from_str(json).unwrap();
        let q = Question::try_from(record).unwrap();
        assert_eq!(q.text(), "Question ?");
        assert_eq!(q.correct_option(), "A");
        assert_eq!(q.explanation(), "Because.");
    }

    #[test]
    fn test_record_without_explanation() {
        let json = r#"{"text": "Q", "options": ["x"], "correct_index": 0}"#;
        let record: QuestionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.explanation, "");
    }

    #[test]
    fn test_progress_fraction_uses_position() {
        let progress = Progress {
            answered: 0,
            total: 4,
            position: 1,
        };
        assert!((progress.fraction() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_bands() {
        let score = |percentage| Score {
            correct: 0,
            total: 10,
            percentage,
        };
        assert_eq!(score(80.0).band(), ScoreBand::Excellent);
        assert_eq!(score(60.0).band(), ScoreBand::Good);
        assert_eq!(score(59.9).band(), ScoreBand::NeedsReview);
        assert_eq!(score(33.333).rounded_percentage(), 33);
    }
}
