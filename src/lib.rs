pub mod bank;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use bank::{QuestionBank, load_bank, load_bank_file};
pub use config::Config;
pub use error::{BankError, QuizError};
pub use models::{
    ActiveQuiz, AppState, CategorySelection, CorrectionEntry, MAX_QUESTIONS, Progress, Question,
    QuizSession, Score, ScoreBand, SessionState,
};
pub use session::handle_quiz_input;
pub use ui::{draw_menu, draw_quit_confirmation, draw_quiz, draw_summary};
