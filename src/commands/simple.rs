//! Simple interactive CLI mode
//!
//! Text-based game without the TUI. Each line is one command; tile positions
//! are typed 1-based.

use crate::catalog::WordCatalog;
use crate::core::{DifficultyFilter, Letter};
use crate::output::{ConsoleFeedback, print_view};
use crate::session::{DropSlot, GameSession, Input, SessionConfig, SessionPhase};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::time::Instant;
use thiserror::Error;

/// A parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Input(Input),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("Unknown command '{0}' (type 'help')")]
    Unknown(String),
    #[error("'{0}' needs {1}")]
    MissingArgument(&'static str, &'static str),
    #[error("'{0}' is not a letter")]
    NotALetter(String),
    #[error("'{0}' is not a tile position (positions start at 1)")]
    BadPosition(String),
    #[error(transparent)]
    Difficulty(#[from] crate::core::ParseDifficultyError),
}

const HELP: &str = "\
Commands (positions start at 1):
  c | tap c          place a letter at the end
  drop c 2           place a letter before tile 2 ('end' for the end)
  move 1 3           move tile 1 to position 3
  remove 2 | rm 2    take tile 2 away
  type c4at!         replace all tiles with the letters typed
  clear              take all tiles away
  say [2]            hear tile 2, or the whole word
  mode               switch free play / guess the word
  check              check your spelling (guess mode)
  next               new word after a correct guess
  difficulty easy    all | easy | medium | hard
  hint               show or hide blank letter slots
  show | help | quit | exit";

fn parse_letter(arg: Option<&str>, command: &'static str) -> Result<Letter, ParseCommandError> {
    let arg = arg.ok_or(ParseCommandError::MissingArgument(command, "a letter"))?;
    let mut chars = arg.chars();
    match (chars.next().and_then(Letter::new), chars.next()) {
        (Some(letter), None) => Ok(letter),
        _ => Err(ParseCommandError::NotALetter(arg.to_string())),
    }
}

fn parse_position(arg: Option<&str>, command: &'static str) -> Result<usize, ParseCommandError> {
    let arg = arg.ok_or(ParseCommandError::MissingArgument(command, "a position"))?;
    match arg.parse::<usize>() {
        Ok(position) if position >= 1 => Ok(position - 1),
        _ => Err(ParseCommandError::BadPosition(arg.to_string())),
    }
}

/// Parse one input line
///
/// # Errors
/// Returns `ParseCommandError` for unknown commands or bad arguments.
///
/// # Examples
/// ```
/// use phonics_tiles::commands::{ReplCommand, parse_command};
/// use phonics_tiles::session::Input;
///
/// let cmd = parse_command("move 1 3").unwrap();
/// assert_eq!(cmd, ReplCommand::Input(Input::Reorder { from: 0, to: 2 }));
/// ```
pub fn parse_command(line: &str) -> Result<ReplCommand, ParseCommandError> {
    let line = line.trim();
    let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let mut args = rest.split_whitespace();
    let head = head.to_ascii_lowercase();

    let input = match head.as_str() {
        "" | "show" => return Ok(ReplCommand::Show),
        "help" | "?" => return Ok(ReplCommand::Help),
        "quit" | "exit" => return Ok(ReplCommand::Quit),
        "tap" => Input::Tap(parse_letter(args.next(), "tap")?),
        "drop" => {
            let letter = parse_letter(args.next(), "drop")?;
            let slot = match args.next() {
                None | Some("end") => DropSlot::End,
                position => DropSlot::Index(parse_position(position, "drop")?),
            };
            Input::DropAt { letter, slot }
        }
        "move" => Input::Reorder {
            from: parse_position(args.next(), "move")?,
            to: parse_position(args.next(), "move")?,
        },
        "remove" | "rm" => Input::RemoveAt(parse_position(args.next(), "remove")?),
        "type" => Input::TypedText(rest.to_string()),
        "clear" => Input::Clear,
        "say" => match args.next() {
            None => Input::SpeakWord,
            position => Input::SpeakTile(parse_position(position, "say")?),
        },
        "mode" => Input::ToggleMode,
        "check" => Input::CheckSpelling,
        "next" => Input::Acknowledge,
        "difficulty" | "diff" => {
            let name = args
                .next()
                .ok_or(ParseCommandError::MissingArgument("difficulty", "a tier"))?;
            Input::ChangeDifficulty(name.parse::<DifficultyFilter>()?)
        }
        "hint" => Input::ToggleHint,
        single if single.chars().count() == 1 && rest.is_empty() => {
            Input::Tap(parse_letter(Some(single), "tap")?)
        }
        other => return Err(ParseCommandError::Unknown(other.to_string())),
    };

    Ok(ReplCommand::Input(input))
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_simple(catalog: &WordCatalog, config: SessionConfig, show_tones: bool) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Phonics Tiles - Line Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Type letters to build words. Type 'help' for all commands.");

    let mut session = GameSession::new(catalog, config);
    let mut feedback = ConsoleFeedback::new(show_tones);
    session.pump(&mut feedback);
    print_view(&session.view(Instant::now()));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("\n{} ", ">".bright_cyan().bold());
        io::stdout().flush().context("failed to flush prompt")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read input")?;

        match parse_command(&line) {
            Ok(ReplCommand::Quit) => break,
            Ok(ReplCommand::Help) => println!("{HELP}"),
            Ok(ReplCommand::Show) => print_view(&session.view(Instant::now())),
            Ok(ReplCommand::Input(input)) => {
                let was_full = session.sequence().is_full();
                let is_placement = matches!(input, Input::Tap(_) | Input::DropAt { .. });
                let now = Instant::now();

                session.handle(input, now);
                session.pump(&mut feedback);

                if is_placement && was_full {
                    println!("  {}", "The row is full!".yellow());
                }
                print_view(&session.view(now));
            }
            Err(err) => println!("  {}", err.to_string().red()),
        }
    }

    let stats = session.stats();
    println!(
        "\n👋 Bye! Words solved: {} | Words found: {}\n",
        stats.rounds_completed, stats.words_recognized
    );
    if session.phase() == SessionPhase::GuessRoundActive && stats.checks > 0 {
        println!("   Come back and finish your word!");
    }
    Ok(())
}
