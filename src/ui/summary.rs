use crate::models::{ActiveQuiz, CorrectionEntry, Score, ScoreBand};
use crate::ui::layout::calculate_summary_chunks;
use crate::utils::{calculate_max_scroll, estimate_text_height};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

fn band_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::Excellent => Color::Green,
        ScoreBand::Good => Color::Cyan,
        ScoreBand::NeedsReview => Color::Red,
    }
}

pub fn score_line(score: &Score) -> String {
    format!(
        "{} / {} ({} %)",
        score.correct,
        score.total,
        score.rounded_percentage()
    )
}

/// Detailed correction text, one block per question.
pub fn correction_text(report: &[CorrectionEntry]) -> Text<'static> {
    let mut text = Text::default();

    for entry in report {
        let (icon, color) = if entry.is_correct {
            ("✓", Color::Green)
        } else {
            ("✗", Color::Red)
        };
        text.push_line(Line::from(vec![
            Span::styled(
                format!("{} {}. ", icon, entry.index + 1),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                entry.question_text.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        text.push_line(Line::from(Span::styled(
            format!("   Correct answer: {}", entry.correct_option),
            Style::default().fg(Color::Green),
        )));

        let user_style = match (&entry.user_option, entry.is_correct) {
            (None, _) => Style::default().fg(Color::DarkGray),
            (Some(_), true) => Style::default().fg(Color::Green),
            (Some(_), false) => Style::default().fg(Color::Red),
        };
        text.push_line(Line::from(Span::styled(
            format!(
                "   Your answer: {}",
                entry.user_option.as_deref().unwrap_or("None")
            ),
            user_style,
        )));

        if !entry.explanation.is_empty() {
            text.push_line(Line::from(Span::styled(
                format!("   {}", entry.explanation),
                Style::default().add_modifier(Modifier::ITALIC),
            )));
        }
        text.push_line(Line::from(""));
    }

    text
}

pub fn draw_summary(f: &mut Frame, quiz: &mut ActiveQuiz) {
    let layout = calculate_summary_chunks(f.area());
    let session = &quiz.session;
    let score = session.score();
    let band = score.band();

    let title = Paragraph::new(format!("Final result - {}", session.category()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let score_text = vec![
        Line::from(Span::styled(
            score_line(&score),
            Style::default()
                .fg(band_color(band))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(band.message()),
    ];
    let score_widget = Paragraph::new(score_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(score_widget, layout.score_area);

    let correction = correction_text(&session.correction_report());
    let text_width = layout.content_area.width.saturating_sub(2) as usize;
    let visible_height = layout.content_area.height.saturating_sub(2) as usize;
    let plain: Vec<String> = correction.lines.iter().map(|l| l.to_string()).collect();
    let content_height = estimate_text_height(plain.iter().map(String::as_str), text_width);
    let max_scroll = calculate_max_scroll(content_height, visible_height);
    quiz.correction_scroll = quiz.correction_scroll.min(max_scroll);

    let content = Paragraph::new(correction)
        .wrap(Wrap { trim: true })
        .scroll((quiz.correction_scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Detailed correction"),
        );
    f.render_widget(content, layout.content_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "↑/↓",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Scroll  "),
        Span::styled(
            "m/Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" New Quiz  "),
        Span::styled(
            "Esc/q",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(index: usize, user_option: Option<&str>, is_correct: bool) -> CorrectionEntry {
        CorrectionEntry {
            index,
            question_text: format!("Question {}", index + 1),
            correct_option: "Right".to_string(),
            user_option: user_option.map(str::to_string),
            is_correct,
            explanation: "Because.".to_string(),
        }
    }

    #[test]
    fn test_score_line_rounds_for_display() {
        let score = Score {
            correct: 1,
            total: 3,
            percentage: 100.0 / 3.0,
        };
        assert_eq!(score_line(&score), "1 / 3 (33 %)");
    }

    #[test]
    fn test_correction_text_lists_every_question() {
        let report = vec![
            entry(0, Some("Right"), true),
            entry(1, Some("Wrong"), false),
            entry(2, None, false),
        ];
        let text = correction_text(&report);
        let lines: Vec<String> = text.lines.iter().map(|l| l.to_string()).collect();

        assert_eq!(lines.len(), 3 * 5);
        assert_eq!(lines[0], "✓ 1. Question 1");
        assert_eq!(lines[1], "   Correct answer: Right");
        assert_eq!(lines[7], "   Your answer: Wrong");
        assert_eq!(lines[12], "   Your answer: None");
        assert_eq!(lines[13], "   Because.");
    }
}
