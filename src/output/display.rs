//! Display functions for command results and the line-mode game

use super::formatters::{check_marks, create_progress_bar, letter_count, tile_row};
use crate::commands::{CatalogListing, CheckResult};
use crate::feedback::{
    Celebration, CelebrationKind, FeedbackSink, SpeechStatus, Speaker, ToneKind, TonePlayer,
    Utterance,
};
use crate::session::{SessionPhase, SessionView};
use colored::Colorize;

/// Print the result of a one-shot spelling check
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    match result.pictogram {
        Some(pictogram) => println!(
            "Target: {} {}",
            result.target.to_uppercase().bright_yellow().bold(),
            pictogram
        ),
        None => println!(
            "Target: {}",
            result.target.to_uppercase().bright_yellow().bold()
        ),
    }
    println!("{}", "─".repeat(40).cyan());

    println!("\n  Attempt: {}", result.attempt.to_uppercase().bold());
    println!(
        "  Marks:   {}",
        check_marks(result.attempt.len(), &result.incorrect)
    );
    if result.missing > 0 {
        println!("  Missing: {}", letter_count(result.missing));
    }

    println!();
    if result.complete {
        println!("{}", "✅ Spelled correctly!".green().bold());
    } else {
        println!("{}", "❌ Not quite - keep trying".red().bold());
    }
}

/// Print catalog entries grouped under a header
pub fn print_catalog(listing: &CatalogListing) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(
        " {} {} ",
        "WORDS:".bright_cyan().bold(),
        listing.filter.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(50).cyan());

    for entry in &listing.entries {
        let tier = match entry.difficulty {
            crate::core::Difficulty::Easy => entry.difficulty.to_string().green(),
            crate::core::Difficulty::Medium => entry.difficulty.to_string().yellow(),
            crate::core::Difficulty::Hard => entry.difficulty.to_string().red(),
        };
        println!(
            "  {}  {:<12} {:<8} {}",
            entry.pictogram,
            entry.word,
            tier,
            entry.category.to_string().bright_black()
        );
    }

    println!(
        "\n  {} words (easy {}, medium {}, hard {})",
        listing.entries.len(),
        listing.easy,
        listing.medium,
        listing.hard
    );
}

/// Print the board for line mode
pub fn print_view(view: &SessionView<'_>) {
    println!();
    match (view.phase, view.target) {
        (SessionPhase::Freeform, _) => println!("{}", "Free play".bright_cyan().bold()),
        (_, Some(hint)) => println!(
            "{} {}  {} ({})",
            "Spell:".bright_cyan().bold(),
            hint.pictogram,
            letter_count(hint.len),
            hint.difficulty
        ),
        (_, None) => {}
    }

    let row = tile_row(view);
    if row.is_empty() {
        println!("  {}", "(no tiles yet)".bright_black());
    } else {
        println!("  {}", row.bold());
    }
    println!(
        "  {} {}/{}",
        create_progress_bar(view.tiles.len(), view.tap_capacity, view.tap_capacity).bright_black(),
        view.tiles.len(),
        view.tap_capacity
    );

    if let Some(word) = view.solved_word {
        println!(
            "  {} Type 'next' for a new word.",
            format!("Solved: {}", word.to_uppercase()).green().bold()
        );
    }
}

/// Feedback sink that writes speech and tones to stdout
///
/// Speech is "finished" as soon as it is printed.
#[derive(Debug, Default)]
pub struct ConsoleFeedback {
    /// Print tone cues as well as speech
    pub show_tones: bool,
}

impl Speaker for ConsoleFeedback {
    fn speak(&mut self, utterance: &Utterance) -> SpeechStatus {
        println!("  🔊 {}", utterance.text.italic());
        SpeechStatus::Finished
    }
}

impl ConsoleFeedback {
    #[must_use]
    pub const fn new(show_tones: bool) -> Self {
        Self { show_tones }
    }

    /// The line printed for a tone cue, if tones are shown
    #[must_use]
    pub fn tone_line(&self, tone: ToneKind) -> Option<String> {
        self.show_tones.then(|| format!("♪ {tone}"))
    }
}

impl TonePlayer for ConsoleFeedback {
    fn emit_tone(&mut self, tone: ToneKind) {
        if let Some(line) = self.tone_line(tone) {
            println!("  {}", line.bright_black());
        }
    }
}

impl FeedbackSink for ConsoleFeedback {
    fn celebrate(&mut self, celebration: &Celebration) {
        let banner = match celebration.kind {
            CelebrationKind::Solved => format!(
                "🎉 {} {} 🎉",
                celebration.word.to_uppercase(),
                celebration.pictogram
            ),
            CelebrationKind::Recognized => format!(
                "✨ You made a word: {} {} ✨",
                celebration.word.to_uppercase(),
                celebration.pictogram
            ),
        };
        println!("\n  {}", banner.bright_green().bold());
    }
}
