//! TUI rendering with ratatui
//!
//! Letter board, current word, score panel and found-word list.

use super::app::App;
use crate::output::formatters::{MessageStyle, next_rank_text};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board and input
            Constraint::Percentage(45), // Score and words
        ])
        .split(chunks[1]);

    render_play_panel(f, app, main_chunks[0]);
    render_score_panel(f, app, main_chunks[1]);

    render_status(f, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🐝 SPELLING BEE")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(header, area);
}

fn render_play_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Board
            Constraint::Length(3), // Current word
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_current_word(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn outer_span(letter: char) -> Span<'static> {
    Span::styled(
        format!(" {letter} "),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let outer = app.board.outer();
    let (top, bottom) = outer.split_at(outer.len() / 2);

    let row = |letters: &[char]| {
        let mut spans = Vec::new();
        for (i, &letter) in letters.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(outer_span(letter));
        }
        Line::from(spans)
    };

    let content = vec![
        row(top),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {} ", app.board.center()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        row(bottom),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_current_word(f: &mut Frame, app: &App, area: Rect) {
    let config = app.engine.config();
    let spans: Vec<Span> = app
        .engine
        .current_word()
        .chars()
        .map(|c| {
            let style = if c == config.center_letter() {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if config.has_letter(c) {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(c.to_string(), style)
        })
        .collect();

    let input = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(input, area);
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
                MessageStyle::Warning => Style::default().fg(Color::Yellow),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_score_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Score and rank
            Constraint::Length(3), // Progress gauge
            Constraint::Min(3),    // Found words
        ])
        .split(area);

    let engine = &app.engine;
    let content = vec![
        Line::from(vec![
            Span::raw("Score: "),
            Span::styled(
                engine.score().to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" / {}", engine.max_score())),
            Span::raw("   Rank: "),
            Span::styled(
                engine.rank().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            next_rank_text(engine.score()),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let score = Paragraph::new(content).block(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(score, chunks[0]);

    let progress = engine.progress_percentage();
    let gauge = Gauge::default()
        .block(Block::default().title(" Progress ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Yellow))
        .percent(progress.round() as u16)
        .label(format!("{progress:.0}%"));
    f.render_widget(gauge, chunks[1]);

    render_found_words(f, app, chunks[2]);
}

fn render_found_words(f: &mut Frame, app: &App, area: Rect) {
    let engine = &app.engine;
    let items: Vec<ListItem> = engine
        .found_words()
        .iter()
        .map(|word| {
            if engine.is_pangram(word) {
                ListItem::new(format!("★ {word}")).style(
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(format!("  {word}"))
            }
        })
        .collect();

    let title = format!(
        " Found words ({}) | {} left ",
        engine.found_words().len(),
        engine.remaining_words()
    );
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_status(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "Enter: Submit | Bksp: Delete | Space: Shuffle | ?: Hint | ^U: Clear | ^N: New | Esc: Quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}
