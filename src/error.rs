use thiserror::Error;

/// Failures raised by quiz session operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("no questions available for this category")]
    NoQuestionsAvailable,

    #[error("category not found: {0}")]
    CategoryNotFound(String),

    #[error("option index {index} is out of range for a question with {options} options")]
    InvalidSelectionIndex { index: usize, options: usize },
}

/// Failures raised while loading a question bank file.
#[derive(Debug, Error)]
pub enum BankError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("question {index} is invalid: {reason}")]
    InvalidQuestion { index: usize, reason: String },
}
