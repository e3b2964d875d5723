use crate::models::{ActiveQuiz, CorrectionEntry};
use crate::ui::layout::{calculate_quiz_chunks, centered_rect};
use crate::utils::truncate_string;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

fn key_span(key: &str) -> Span<'_> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

pub fn progress_label(answered: usize, position: usize, total: usize) -> String {
    format!(
        "Question {} / {} • {} answer{}",
        position + 1,
        total,
        answered,
        if answered > 1 { "s" } else { "" }
    )
}

pub fn draw_quiz(f: &mut Frame, quiz: &ActiveQuiz) {
    let layout = calculate_quiz_chunks(f.area());
    let session = &quiz.session;
    let question = session.current();
    let progress = session.progress();

    let header = Paragraph::new(format!(
        "Quiz in progress - {} questions - {}",
        session.len(),
        session.category()
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(progress.fraction().clamp(0.0, 1.0))
        .label(progress_label(
            progress.answered,
            progress.position,
            progress.total,
        ));
    f.render_widget(gauge, layout.progress_area);

    let question_text = Text::from(format!(
        "{}. {}",
        session.current_index() + 1,
        question.text()
    ));
    let question_widget = Paragraph::new(question_text)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question_widget, layout.question_area);

    let selected = question.selected_index();
    let items: Vec<ListItem> = question
        .options()
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let mark = if selected == Some(i) { "(•)" } else { "( )" };
            let mut style = Style::default();
            if selected == Some(i) {
                style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
            }
            if i == quiz.highlighted {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(format!("{} {}. {}", mark, i + 1, option)).style(style)
        })
        .collect();
    let options = List::new(items).block(Block::default().borders(Borders::ALL).title("Options"));
    f.render_widget(options, layout.options_area);

    let next_label = if session.is_last() { " Finish  " } else { " Next  " };
    let mut spans = vec![
        key_span("↑/↓"),
        Span::from(" Choose  "),
        key_span("Enter/1-9"),
        Span::from(" Answer  "),
        key_span("Del"),
        Span::from(" Clear  "),
    ];
    if !session.is_first() {
        spans.extend([key_span("←"), Span::from(" Previous  ")]);
    }
    spans.extend([
        key_span("→"),
        Span::from(next_label),
        key_span("r"),
        Span::from(" Recap  "),
        key_span("Esc"),
        Span::from(" Quit"),
    ]);
    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);

    if quiz.recap_open {
        draw_recap(f, &session.correction_report());
    }
}

fn recap_line(entry: &CorrectionEntry) -> Line<'static> {
    let (icon, color) = if !entry.is_answered() {
        ("○", Color::Gray)
    } else if entry.is_correct {
        ("✓", Color::Green)
    } else {
        ("✗", Color::Red)
    };
    let answer = entry.user_option.as_deref().unwrap_or("Not answered");

    Line::from(vec![
        Span::styled(format!("{} ", icon), Style::default().fg(color)),
        Span::styled(
            format!("{}. ", entry.index + 1),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::from(format!(
            "{} → {}",
            truncate_string(&entry.question_text, 50),
            truncate_string(answer, 30)
        )),
    ])
}

/// Quick recap popup drawn over the quiz screen.
pub fn draw_recap(f: &mut Frame, report: &[CorrectionEntry]) {
    let area = centered_rect(90, 70, f.area());
    let lines: Vec<Line> = report.iter().map(recap_line).collect();

    let recap = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Quick recap (r/Esc to close)"),
        );
    f.render_widget(Clear, area);
    f.render_widget(recap, area);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Quit to Menu")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Abandon this quiz and return to the menu?")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Return to Menu)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Continue Quiz)  "),
        key_span("Ctrl+C"),
        Span::from(" Exit App"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_label_pluralises() {
        assert_eq!(progress_label(0, 0, 10), "Question 1 / 10 • 0 answer");
        assert_eq!(progress_label(1, 2, 10), "Question 3 / 10 • 1 answer");
        assert_eq!(progress_label(2, 9, 10), "Question 10 / 10 • 2 answers");
    }

    #[test]
    fn test_recap_line_icons() {
        let mut entry = CorrectionEntry {
            index: 0,
            question_text: "Q".to_string(),
            correct_option: "A".to_string(),
            user_option: None,
            is_correct: false,
            explanation: String::new(),
        };
        let text = |line: &Line| line.spans.iter().map(|s| s.content.to_string()).collect::<String>();

        assert!(text(&recap_line(&entry)).starts_with("○ 1. Q → Not answered"));

        entry.user_option = Some("B".to_string());
        assert!(text(&recap_line(&entry)).starts_with("✗"));

        entry.user_option = Some("A".to_string());
        entry.is_correct = true;
        assert!(text(&recap_line(&entry)).starts_with("✓"));
    }
}
