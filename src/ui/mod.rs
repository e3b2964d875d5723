pub mod layout;
mod menu;
mod quiz;
mod summary;

pub use layout::{calculate_quiz_chunks, calculate_summary_chunks, centered_rect};
pub use menu::{draw_menu, menu_entries};
pub use quiz::{draw_quit_confirmation, draw_quiz, draw_recap, progress_label};
pub use summary::{correction_text, draw_summary, score_line};
