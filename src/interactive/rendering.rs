//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Color as FeedbackColor, Feedback};
use crate::output::describe_position;
use crate::output::formatters::letter_list;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Candidates listed by name before switching to a count
const LISTED_CANDIDATES: usize = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🎯 WORDLE ASSISTANT - {} ({} words)",
        app.profile.name(),
        app.dictionary.len()
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),      // Suggestion
            Constraint::Percentage(50), // Candidates
            Constraint::Min(4),         // History
        ])
        .split(area);

    render_suggestion(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_suggestion(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Suggested Guess ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let content = match app.session.current_guess() {
        Some(guess) => vec![
            Line::from(vec![
                Span::raw("Play: "),
                Span::styled(
                    guess.to_uppercase(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!(
                "Round {} of {} | {} candidates",
                app.session.round() + 1,
                app.session.max_rounds(),
                app.session.candidate_count()
            )),
        ],
        None => vec![Line::from("No suggestion available")],
    };

    f.render_widget(Paragraph::new(content).block(block).wrap(Wrap { trim: false }), area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.session.remaining_candidates();

    let content: Vec<Line> = if remaining.is_empty() {
        vec![Line::from("Game completed!")]
    } else if remaining.len() <= LISTED_CANDIDATES {
        remaining
            .iter()
            .enumerate()
            .map(|(i, word)| {
                let style = if i == 0 {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::Green)
                };
                Line::from(Span::styled(format!("  {}", word.to_uppercase()), style))
            })
            .collect()
    } else {
        let mut lines: Vec<Line> = remaining
            .iter()
            .take(LISTED_CANDIDATES)
            .map(|word| Line::from(format!("  {}", word.to_uppercase())))
            .collect();
        lines.push(Line::from(Span::styled(
            format!("  ... and {} more", remaining.len() - LISTED_CANDIDATES),
            Style::default().fg(Color::DarkGray),
        )));
        lines
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn feedback_tiles<'a>(guess: &str, feedback: &Feedback) -> Vec<Span<'a>> {
    guess
        .chars()
        .zip(feedback.colors())
        .map(|(letter, color)| {
            let background = match color {
                FeedbackColor::CorrectPosition => Color::Green,
                FeedbackColor::PresentElsewhere => Color::Yellow,
                FeedbackColor::Absent => Color::DarkGray,
            };
            Span::styled(
                format!(" {} ", letter.to_uppercase()),
                Style::default()
                    .fg(Color::Black)
                    .bg(background)
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .history()
        .iter()
        .enumerate()
        .map(|(i, round)| {
            let mut spans = vec![Span::raw(format!("{}: ", i + 1))];
            spans.extend(feedback_tiles(&round.guess, &round.feedback));
            spans.push(Span::styled(
                format!("  {} candidates", round.candidates_before),
                Style::default().fg(Color::DarkGray),
            ));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let history = List::new(items).block(Block::default().title(" History ").borders(Borders::ALL));
    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Constraints
            Constraint::Length(3), // Rounds gauge
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_constraints(f, app, chunks[0]);
    render_rounds(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_constraints(f: &mut Frame, app: &App, area: Rect) {
    let constraints = app.session.constraints();
    let pattern = constraints.positional_pattern(app.profile.alphabet());

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Correct:   "),
            Span::styled(
                letter_list(constraints.correct_position_letters()),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::raw("Elsewhere: "),
            Span::styled(
                letter_list(constraints.present_elsewhere_letters()),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::raw("Absent:    "),
            Span::styled(
                letter_list(constraints.absent_letters()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    for (i, position) in pattern.iter().enumerate() {
        lines.push(Line::from(format!("  {}: {}", i + 1, describe_position(position))));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Constraints ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_rounds(f: &mut Frame, app: &App, area: Rect) {
    let used = app.session.round();
    let max = app.session.max_rounds().max(1);
    // Cast is safe: clamped to 100
    let percent = ((used * 100) / max).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Rounds ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{max} rounds used"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Feedback => (
            " Colours (g=green o=orange r=gray) | Enter submits, empty Enter stops ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let state = Paragraph::new(format!("State: {:?}", app.session.state())).alignment(Alignment::Center);
    f.render_widget(state, chunks[0]);

    let stats_text = format!(
        "Games: {} | Won: {}",
        app.stats.total_games, app.stats.games_won
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[1]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Feedback => "q: Quit | n: New Game | Enter: Submit | TAB: Word rejected",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{Dictionary, LanguageProfile};
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn renders_suggestion_and_history() {
        let profile = LanguageProfile::english();
        let dictionary: Dictionary = ["those", "drain", "lumpy"].into_iter().collect();
        let mut app = App::new(&profile, &dictionary);
        app.input_buffer = "rrrrr".to_string();
        app.submit_feedback();

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let screen: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(screen.contains("DRAIN"));
        assert!(screen.contains("History"));
        assert!(screen.contains("1/6 rounds used"));
    }
}
