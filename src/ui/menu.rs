use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use std::path::Path;

use crate::bank::QuestionBank;
use crate::models::{CategorySelection, MAX_QUESTIONS};

/// Menu rows: the combined pool first, then every category with its size.
pub fn menu_entries(bank: &QuestionBank) -> Vec<(CategorySelection, usize)> {
    let mut entries = vec![(CategorySelection::All, bank.total_questions())];
    entries.extend(
        bank.iter()
            .map(|(name, qs)| (CategorySelection::Category(name.to_string()), qs.len())),
    );
    entries
}

fn key_span(key: &str) -> Span<'_> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

pub fn draw_menu(
    f: &mut Frame,
    bank: &QuestionBank,
    questions_dir: &Path,
    selected_index: usize,
    status: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("QCM Trainer")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let items: Vec<ListItem> = if bank.is_empty() {
        vec![
            ListItem::new(format!(
                "No question files found in {}",
                questions_dir.display()
            ))
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        ]
    } else {
        menu_entries(bank)
            .iter()
            .enumerate()
            .map(|(i, (selection, count))| {
                let style = if i == selected_index {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(format!("{} ({} questions)", selection.label(), count))
                    .style(style)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Choose a category"),
    );
    f.render_widget(list, chunks[1]);

    let status_line = match status {
        Some(message) => Line::from(Span::styled(
            message,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(format!(
            "Each quiz draws up to {} questions",
            MAX_QUESTIONS
        )),
    };
    let status_widget = Paragraph::new(status_line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status_widget, chunks[2]);

    let help_text = vec![Line::from(vec![
        key_span("↑/↓"),
        Span::from(" Navigate  "),
        key_span("Enter"),
        Span::from(" Start Quiz  "),
        key_span("Esc/q"),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Question;

    #[test]
    fn test_menu_entries_put_all_first() {
        let mut bank = QuestionBank::new();
        let q = Question::new("Q", vec!["a".to_string()], 0, "").unwrap();
        bank.insert("GENERAL", vec![q.clone(), q.clone()]);
        bank.insert("DEPARTEMENTS", vec![q]);

        let entries = menu_entries(&bank);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], (CategorySelection::All, 3));
        assert_eq!(
            entries[1],
            (CategorySelection::Category("GENERAL".to_string()), 2)
        );
        assert_eq!(
            entries[2],
            (CategorySelection::Category("DEPARTEMENTS".to_string()), 1)
        );
    }
}
