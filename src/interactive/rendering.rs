//! TUI rendering with ratatui
//!
//! Tile row, picture panel and message log for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::feedback::letter_sound;
use crate::output::formatters::letter_count;
use crate::session::{Highlight, SessionPhase, SessionView, TileView};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};
use std::time::Instant;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, now: Instant) {
    let view = app.session.view(now);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Tiles and picture
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[1]);

    render_main_panel(f, app, &view, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);

    render_input(f, app, &view, chunks[2]);
    render_status(f, &view, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 PHONICS TILES - Build a Word")
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

fn render_main_panel(f: &mut Frame, app: &App, view: &SessionView<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Tile row
            Constraint::Length(3), // Capacity gauge
            Constraint::Min(4),    // Picture
        ])
        .split(area);

    render_tiles(f, app, view, chunks[0]);
    render_capacity(f, view, chunks[1]);
    render_picture(f, view, chunks[2]);
}

fn tile_style(tile: &TileView) -> Style {
    let base = Style::default().fg(Color::Black).add_modifier(Modifier::BOLD);
    match (tile.incorrect, tile.highlight) {
        (true, _) => base.bg(Color::Red).fg(Color::White),
        (false, Some(Highlight::Speaking)) => base.bg(Color::Cyan),
        (false, Some(Highlight::Fresh)) => base.bg(Color::Yellow),
        (false, None) => base.bg(Color::LightBlue),
    }
}

fn render_tiles(f: &mut Frame, app: &App, view: &SessionView<'_>, area: Rect) {
    let cursor = Span::styled("▏", Style::default().fg(Color::White));
    let mut spans = Vec::with_capacity(view.tiles.len() * 2 + 1);

    for (i, tile) in view.tiles.iter().enumerate() {
        if i == app.cursor && app.input_mode == InputMode::Tiles {
            spans.push(cursor.clone());
        } else {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" {} ", tile.letter.as_char().to_ascii_uppercase()),
            tile_style(tile),
        ));
    }
    if app.cursor >= view.tiles.len() && app.input_mode == InputMode::Tiles {
        spans.push(cursor);
    }
    for _ in 0..view.ghost_slots.unwrap_or(0) {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(" _ ", Style::default().fg(Color::DarkGray)));
    }

    let selected = app
        .cursor
        .checked_sub(1)
        .and_then(|i| view.tiles.get(i))
        .map_or_else(String::new, |tile| {
            format!(
                "{} says \"{}\"",
                tile.letter.as_char().to_ascii_uppercase(),
                letter_sound(tile.letter)
            )
        });

    let content = vec![
        Line::from(""),
        Line::from(spans),
        Line::from(""),
        Line::from(Span::styled(selected, Style::default().fg(Color::Cyan))),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Tiles ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_capacity(f: &mut Frame, view: &SessionView<'_>, area: Rect) {
    let used = view.tiles.len().min(view.tap_capacity);
    let percent = if view.tap_capacity == 0 {
        100
    } else {
        u16::try_from(used * 100 / view.tap_capacity).unwrap_or(100)
    };
    let color = if view.is_full() {
        Color::Red
    } else {
        Color::Green
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{}/{} tiles", view.tiles.len(), view.tap_capacity));
    f.render_widget(gauge, area);
}

fn render_picture(f: &mut Frame, view: &SessionView<'_>, area: Rect) {
    let (title, content) = match (view.phase, view.target) {
        (SessionPhase::Freeform, _) => {
            let lines = view.recognized.map_or_else(
                || {
                    vec![
                        Line::from("Make any word you like."),
                        Line::from("Real words light up here!"),
                    ]
                },
                |entry| {
                    vec![
                        Line::from(Span::styled(
                            format!("{}  {}", entry.pictogram, entry.word.to_uppercase()),
                            Style::default()
                                .fg(Color::Green)
                                .add_modifier(Modifier::BOLD),
                        )),
                        Line::from(format!("{} · {}", entry.category, entry.difficulty)),
                    ]
                },
            );
            (" Free Play ", lines)
        }
        (_, Some(hint)) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    hint.pictogram,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(format!(
                    "{} · {} · {}",
                    letter_count(hint.len),
                    hint.difficulty,
                    hint.category
                )),
            ];
            if let Some(word) = view.solved_word {
                lines.push(Line::from(Span::styled(
                    format!("You spelled {}!", word.to_uppercase()),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            (" Spell the Picture ", lines)
        }
        (_, None) => (" Spell the Picture ", Vec::new()),
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .log
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Speech => Style::default().fg(Color::Cyan),
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

fn render_input(f: &mut Frame, app: &App, view: &SessionView<'_>, area: Rect) {
    let (title, content, color) = match (app.input_mode, view.phase) {
        (InputMode::Typing, _) => (
            " Type a word | Enter to place | ESC to cancel ",
            app.text_buffer.as_str(),
            Color::Cyan,
        ),
        (InputMode::Tiles, SessionPhase::GuessRoundComplete) => (
            " 🎉 WELL DONE! 🎉 | Enter for a new word ",
            "",
            Color::Green,
        ),
        (InputMode::Tiles, SessionPhase::GuessRoundActive) => (
            " Letters place tiles | Enter to check | F1 hint | Ctrl+T type ",
            "",
            Color::Yellow,
        ),
        (InputMode::Tiles, SessionPhase::Freeform) => (
            " Letters place tiles | ↑ hear tile | F3 hear word | Ctrl+T type ",
            "",
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

fn render_status(f: &mut Frame, view: &SessionView<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Mode: {}", view.mode)).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let difficulty =
        Paragraph::new(format!("Words: {}", view.difficulty)).alignment(Alignment::Center);
    f.render_widget(difficulty, chunks[1]);

    let stats_text = format!(
        "Solved: {}/{} | Found: {}",
        view.stats.rounds_completed, view.stats.rounds_started, view.stats.words_recognized
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[2]);

    let help = Paragraph::new("Tab: Mode | F2: Level | Esc: Clear | Ctrl+Q: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, WordCatalog, WordEntry};
    use crate::core::Difficulty;
    use crate::session::SessionConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app, Instant::now())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_tiles_and_status() {
        let catalog = WordCatalog::new([WordEntry::new(
            "cat",
            "🐱",
            Difficulty::Easy,
            Category::Animals,
        )])
        .unwrap();
        let mut app = App::new(&catalog, SessionConfig::default());
        for c in ['c', 'a', 't'] {
            app.handle_key(
                KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE),
                Instant::now(),
            );
        }

        let text = screen(&app);
        assert!(text.contains("PHONICS TILES"));
        assert!(text.contains(" C "));
        assert!(text.contains("3/9 tiles"));
        assert!(text.contains("Mode: free"));
        assert!(text.contains("T says \"tuh\""));
    }
}
