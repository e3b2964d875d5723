use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use qcm_trainer::{
    ActiveQuiz, AppState, Config, QuizSession, draw_menu, draw_quit_confirmation, draw_quiz,
    draw_summary, handle_quiz_input, load_bank, logger, ui::menu_entries,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

fn main() -> io::Result<()> {
    let config = Config::from_env();
    logger::init(&config.log_file);
    let bank = load_bank(&config.questions_dir);
    logger::log(&format!(
        "Bank loaded from {}: {} categories, {} questions",
        config.questions_dir.display(),
        bank.len(),
        bank.total_questions()
    ));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::Menu;
    let entries = menu_entries(&bank);
    let mut selected_index: usize = 0;
    let mut status: Option<String> = None;
    let mut active: Option<ActiveQuiz> = None;

    loop {
        terminal.draw(|f| match app_state {
            AppState::Menu => draw_menu(
                f,
                &bank,
                &config.questions_dir,
                selected_index,
                status.as_deref(),
            ),
            AppState::Quiz => {
                if let Some(quiz) = &active {
                    draw_quiz(f, quiz);
                }
            }
            AppState::QuizQuitConfirm => draw_quit_confirmation(f),
            AppState::Summary => {
                if let Some(quiz) = &mut active {
                    draw_summary(f, quiz);
                }
            }
        })?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            break;
        }

        match app_state {
            AppState::Menu => match key.code {
                KeyCode::Up => {
                    selected_index = selected_index.saturating_sub(1);
                }
                KeyCode::Down => {
                    if selected_index < entries.len().saturating_sub(1) {
                        selected_index += 1;
                    }
                }
                KeyCode::Enter => {
                    if bank.is_empty() {
                        continue;
                    }
                    if let Some((selection, _)) = entries.get(selected_index) {
                        match QuizSession::start(&bank, selection, config.max_questions) {
                            Ok(session) => {
                                status = None;
                                active = Some(ActiveQuiz::new(session));
                                app_state = AppState::Quiz;
                            }
                            Err(e) => {
                                logger::log(&format!("Cannot start {}: {}", selection.label(), e));
                                status = Some(e.to_string());
                            }
                        }
                    }
                }
                KeyCode::Esc | KeyCode::Char('q') => break,
                _ => {}
            },
            AppState::Quiz => {
                if let Some(quiz) = &mut active
                    && let Err(e) = handle_quiz_input(quiz, key, &mut app_state)
                {
                    logger::log(&format!("Rejected input: {}", e));
                }
            }
            AppState::QuizQuitConfirm => match key.code {
                KeyCode::Char('y') => {
                    active = None;
                    app_state = AppState::Menu;
                }
                KeyCode::Char('n') | KeyCode::Esc => {
                    app_state = AppState::Quiz;
                }
                _ => {}
            },
            AppState::Summary => match key.code {
                KeyCode::Up => {
                    if let Some(quiz) = &mut active {
                        quiz.correction_scroll = quiz.correction_scroll.saturating_sub(1);
                    }
                }
                KeyCode::Down => {
                    if let Some(quiz) = &mut active {
                        quiz.correction_scroll = quiz.correction_scroll.saturating_add(1);
                    }
                }
                KeyCode::Char('m') | KeyCode::Enter => {
                    active = None;
                    app_state = AppState::Menu;
                }
                KeyCode::Esc | KeyCode::Char('q') => break,
                _ => {}
            },
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
