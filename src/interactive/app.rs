//! TUI application state and logic

use crate::catalog::WordCatalog;
use crate::feedback::{
    Celebration, CelebrationKind, FeedbackSink, SpeechStatus, Speaker, ToneKind, TonePlayer,
    Utterance,
};
use crate::session::{DropSlot, GameSession, Input, SessionConfig, SessionPhase};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// Longest the loop sleeps waiting for a key
const IDLE_POLL: Duration = Duration::from_millis(250);
const MAX_MESSAGES: usize = 8;

/// Application state
pub struct App<'a> {
    pub session: GameSession<'a>,
    pub log: MessageLog,
    pub input_mode: InputMode,
    /// Insertion point in the tile row, `0..=len`
    pub cursor: usize,
    pub text_buffer: String,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Each letter key places a tile
    Tiles,
    /// Keys collect text that replaces the whole row on Enter
    Typing,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Speech,
    Success,
    Error,
}

/// Recent messages and the last tone; the TUI's feedback sink
///
/// Speech is shown as text and counts as finished straight away.
#[derive(Debug, Default)]
pub struct MessageLog {
    pub messages: Vec<Message>,
    pub last_tone: Option<ToneKind>,
}

impl MessageLog {
    pub fn push(&mut self, text: impl Into<String>, style: MessageStyle) {
        self.messages.push(Message {
            text: text.into(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

impl Speaker for MessageLog {
    fn speak(&mut self, utterance: &Utterance) -> SpeechStatus {
        self.push(format!("🔊 {}", utterance.text), MessageStyle::Speech);
        SpeechStatus::Finished
    }
}

impl TonePlayer for MessageLog {
    fn emit_tone(&mut self, tone: ToneKind) {
        self.last_tone = Some(tone);
    }
}

impl FeedbackSink for MessageLog {
    fn celebrate(&mut self, celebration: &Celebration) {
        let text = match celebration.kind {
            CelebrationKind::Solved => format!(
                "🎉 {} {} 🎉  Enter for a new word",
                celebration.word.to_uppercase(),
                celebration.pictogram
            ),
            CelebrationKind::Recognized => format!(
                "✨ You made a word: {} {}",
                celebration.word.to_uppercase(),
                celebration.pictogram
            ),
        };
        self.push(text, MessageStyle::Success);
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(catalog: &'a WordCatalog, config: SessionConfig) -> Self {
        let mut app = Self {
            session: GameSession::new(catalog, config),
            log: MessageLog::default(),
            input_mode: InputMode::Tiles,
            cursor: 0,
            text_buffer: String::new(),
            should_quit: false,
        };
        app.log.push(
            "Welcome! Type letters to place tiles and hear their sounds.",
            MessageStyle::Info,
        );
        app.log.push("Tab starts the picture game.", MessageStyle::Info);
        app.session.pump(&mut app.log);
        app
    }

    /// Handle one key press at time `now`
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c' | 'q') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('t') if ctrl => {
                self.toggle_typing();
                return;
            }
            _ => {}
        }

        match self.input_mode {
            InputMode::Tiles => self.handle_tile_key(key, now),
            InputMode::Typing => self.handle_typing_key(key, now),
        }

        self.cursor = self.cursor.min(self.session.sequence().len());
        self.session.pump(&mut self.log);
    }

    fn handle_tile_key(&mut self, key: KeyEvent, now: Instant) {
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => self.place(c, now),
            KeyCode::Left if shift => self.shift_selected(false),
            KeyCode::Right if shift => self.shift_selected(true),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor += 1,
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.session.sequence().len(),
            KeyCode::Backspace if self.cursor > 0 => {
                if self.session.remove(self.cursor - 1) {
                    self.cursor -= 1;
                }
            }
            KeyCode::Delete => {
                self.session.remove(self.cursor);
            }
            KeyCode::Up if self.cursor > 0 => {
                self.session.speak_tile(self.cursor - 1, now);
            }
            KeyCode::Esc => {
                self.session.clear();
                self.cursor = 0;
            }
            KeyCode::Tab => {
                self.session.toggle_mode();
                self.cursor = 0;
            }
            KeyCode::Enter => self.submit(),
            KeyCode::F(1) => self.session.toggle_hint(),
            KeyCode::F(2) => {
                let next = self.session.difficulty().next();
                self.session.change_difficulty(next);
                self.cursor = self.cursor.min(self.session.sequence().len());
                self.log.push(format!("Difficulty: {next}"), MessageStyle::Info);
            }
            KeyCode::F(3) => self.session.speak_word(),
            _ => {}
        }
    }

    fn handle_typing_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Tiles;
                self.text_buffer.clear();
            }
            KeyCode::Enter => {
                let text = std::mem::take(&mut self.text_buffer);
                self.session.handle(Input::TypedText(text), now);
                self.cursor = self.session.sequence().len();
                self.input_mode = InputMode::Tiles;
            }
            KeyCode::Backspace => {
                self.text_buffer.pop();
            }
            KeyCode::Char(c) => self.text_buffer.push(c),
            _ => {}
        }
    }

    fn toggle_typing(&mut self) {
        self.input_mode = match self.input_mode {
            InputMode::Tiles => {
                self.text_buffer = self.session.sequence().to_word();
                InputMode::Typing
            }
            InputMode::Typing => {
                self.text_buffer.clear();
                InputMode::Tiles
            }
        };
    }

    /// Place a letter at the cursor
    fn place(&mut self, c: char, now: Instant) {
        let Some(letter) = crate::core::Letter::new(c) else {
            return;
        };
        let slot = if self.cursor >= self.session.sequence().len() {
            DropSlot::End
        } else {
            DropSlot::Index(self.cursor)
        };

        if self.session.place(letter, slot, now) {
            self.cursor += 1;
        } else if self.session.sequence().is_full() {
            self.log.push("The row is full!", MessageStyle::Error);
        }
    }

    /// Move the tile left of the cursor one step, keeping it selected
    fn shift_selected(&mut self, right: bool) {
        let Some(from) = self.cursor.checked_sub(1) else {
            return;
        };
        let to = if right {
            from + 1
        } else if let Some(to) = from.checked_sub(1) {
            to
        } else {
            return;
        };
        if self.session.reorder(from, to) {
            self.cursor = to + 1;
        }
    }

    /// Enter: check, move on after a solved word, or hear the row
    fn submit(&mut self) {
        match self.session.phase() {
            SessionPhase::GuessRoundActive => {
                if self.session.sequence().is_empty() {
                    self.log.push("Place some letters first!", MessageStyle::Error);
                } else {
                    self.session.check_spelling();
                }
            }
            SessionPhase::GuessRoundComplete => {
                self.session.acknowledge();
                self.cursor = 0;
            }
            SessionPhase::Freeform => self.session.speak_word(),
        }
    }

    /// How long to wait for input before the next highlight expires
    fn poll_timeout(&self, now: Instant) -> Duration {
        self.session
            .next_deadline()
            .map_or(IDLE_POLL, |deadline| {
                deadline.saturating_duration_since(now).min(IDLE_POLL)
            })
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(%err, "tui loop failed");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let now = Instant::now();
        terminal.draw(|f| super::rendering::ui(f, &app, now))?;

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(app.poll_timeout(now))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }

        if app.session.tick(Instant::now()) {
            debug!("highlight expired");
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
