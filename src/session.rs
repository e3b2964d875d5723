use crate::bank::QuestionBank;
use crate::error::QuizError;
use crate::logger;
use crate::models::{
    ActiveQuiz, AppState, CategorySelection, CorrectionEntry, Progress, Question, QuizSession,
    Score, SessionState,
};
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;
use rand::seq::SliceRandom;

impl QuizSession {
    /// Draw up to `max_questions` shuffled questions from the selected part
    /// of the bank.
    pub fn start(
        bank: &QuestionBank,
        selection: &CategorySelection,
        max_questions: usize,
    ) -> Result<Self, QuizError> {
        Self::start_with_rng(bank, selection, max_questions, &mut rand::thread_rng())
    }

    pub fn start_with_rng<R: Rng + ?Sized>(
        bank: &QuestionBank,
        selection: &CategorySelection,
        max_questions: usize,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        if bank.is_empty() {
            return Err(QuizError::NoQuestionsAvailable);
        }

        let mut source: Vec<&Question> = match selection {
            CategorySelection::All => bank.all_questions().collect(),
            CategorySelection::Category(name) => bank
                .get(name)
                .ok_or_else(|| QuizError::CategoryNotFound(name.clone()))?
                .iter()
                .collect(),
        };

        source.shuffle(rng);
        let questions: Vec<Question> = source
            .into_iter()
            .take(max_questions)
            .map(Question::unanswered_copy)
            .collect();

        if questions.is_empty() {
            return Err(QuizError::NoQuestionsAvailable);
        }

        logger::log(&format!(
            "Session started: {} ({} questions)",
            selection.label(),
            questions.len()
        ));

        Ok(Self {
            questions,
            current_index: 0,
            state: SessionState::InProgress,
            category: selection.label().to_string(),
        })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn current(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    /// Set or clear the answer of the current question.
    pub fn record_answer(&mut self, option_index: Option<usize>) -> Result<(), QuizError> {
        self.questions[self.current_index].set_selected(option_index)
    }

    pub fn clear_answer(&mut self) -> Result<(), QuizError> {
        self.record_answer(None)
    }

    /// Advance one question, or mark the session completed when already on
    /// the last one.
    pub fn next(&mut self) -> SessionState {
        if self.current_index < self.questions.len().saturating_sub(1) {
            self.current_index += 1;
            self.state = SessionState::InProgress;
        } else {
            if self.state != SessionState::Completed {
                let score = self.score();
                logger::log(&format!(
                    "Session completed: {} - {}/{}",
                    self.category, score.correct, score.total
                ));
            }
            self.state = SessionState::Completed;
        }
        self.state
    }

    pub fn previous(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
        }
        self.state = SessionState::InProgress;
    }

    pub fn progress(&self) -> Progress {
        Progress {
            answered: self.questions.iter().filter(|q| q.is_answered()).count(),
            total: self.questions.len(),
            position: self.current_index,
        }
    }

    pub fn score(&self) -> Score {
        let correct = self.questions.iter().filter(|q| q.is_correct()).count();
        let total = self.questions.len();
        let percentage = if total == 0 {
            0.0
        } else {
            100.0 * correct as f64 / total as f64
        };
        Score {
            correct,
            total,
            percentage,
        }
    }

    pub fn correction_report(&self) -> Vec<CorrectionEntry> {
        self.questions
            .iter()
            .enumerate()
            .map(|(index, q)| CorrectionEntry {
                index,
                question_text: q.text().to_string(),
                correct_option: q.correct_option().to_string(),
                user_option: q.user_option().map(str::to_string),
                is_correct: q.is_correct(),
                explanation: q.explanation().to_string(),
            })
            .collect()
    }
}

pub fn handle_quiz_input(
    quiz: &mut ActiveQuiz,
    key: KeyEvent,
    app_state: &mut AppState,
) -> Result<(), QuizError> {
    if quiz.recap_open {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('r')) {
            quiz.recap_open = false;
        }
        return Ok(());
    }

    let option_count = quiz.session.current().options().len();

    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::QuizQuitConfirm;
        }
        KeyCode::Up => {
            quiz.highlighted = quiz.highlighted.saturating_sub(1);
        }
        KeyCode::Down => {
            if quiz.highlighted < option_count.saturating_sub(1) {
                quiz.highlighted += 1;
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            quiz.session.record_answer(Some(quiz.highlighted))?;
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if index < option_count {
                quiz.session.record_answer(Some(index))?;
                quiz.highlighted = index;
            }
        }
        KeyCode::Backspace | KeyCode::Delete => {
            quiz.session.clear_answer()?;
        }
        KeyCode::Left | KeyCode::Char('p') => {
            quiz.session.previous();
            quiz.sync_highlight();
        }
        KeyCode::Right | KeyCode::Char('n') => {
            if quiz.session.next() == SessionState::Completed {
                quiz.correction_scroll = 0;
                *app_state = AppState::Summary;
            } else {
                quiz.sync_highlight();
            }
        }
        KeyCode::Char('r') => {
            quiz.recap_open = true;
        }
        _ => {}
    }

    Ok(())
}
