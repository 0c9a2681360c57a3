//! Game session state machine
//!
//! A `GameSession` owns the tile row, the current round and the feedback
//! queue for one learner. Every method is one synchronous step reacting to one
//! input event; feedback produced by that step is queued as [`Effect`]s and
//! handed to a [`FeedbackSink`] by [`GameSession::pump`].
//!
//! ```text
//! Freeform --toggle--> GuessRoundActive --check ok--> GuessRoundComplete
//!    ^                   |    ^   |                         |
//!    +------toggle-------+    |   +--check wrong--(stays)   |
//!                             +-------acknowledge-----------+
//! ```

mod config;
mod highlight;
mod input;
mod speech;
mod state;
mod view;

pub use config::SessionConfig;
pub use highlight::Highlight;
pub use input::{DropSlot, Input};
pub use state::{Mode, ParseModeError, Round, SessionPhase, SessionState};
pub use view::{SessionView, Statistics, TargetHint, TileView};

use crate::catalog::{WordCatalog, WordEntry};
use crate::core::{DifficultyFilter, Letter};
use crate::evaluator::{self, IncorrectPositions};
use crate::feedback::{
    Celebration, CelebrationKind, Effect, FeedbackSink, SpeechStatus, ToneKind, UtteranceId,
    letter_sound,
};
use crate::placement::PlacementSequence;
use highlight::HighlightTimers;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use speech::SpeechQueue;
use std::time::Instant;
use tracing::{debug, info};

const ROUND_PROMPT: &str = "Can you spell this word?";
const TRY_AGAIN: &str = "Not quite. Try again!";

/// One learner's game: tile row, mode, round and pending feedback
pub struct GameSession<'a, R: Rng = StdRng> {
    catalog: &'a WordCatalog,
    rng: R,
    config: SessionConfig,
    sequence: PlacementSequence,
    state: SessionState<'a>,
    difficulty: DifficultyFilter,
    incorrect: IncorrectPositions,
    hint_visible: bool,
    recognized: Option<&'a WordEntry>,
    highlights: HighlightTimers,
    speech: SpeechQueue,
    effects: Vec<Effect>,
    stats: Statistics,
}

impl<'a> GameSession<'a, StdRng> {
    /// Create a session seeded from `config.seed`, or from the OS when unset
    #[must_use]
    pub fn new(catalog: &'a WordCatalog, config: SessionConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::with_rng(catalog, config, rng)
    }
}

impl<'a, R: Rng> GameSession<'a, R> {
    /// Create a session with an explicit random source
    pub fn with_rng(catalog: &'a WordCatalog, config: SessionConfig, rng: R) -> Self {
        let mut session = Self {
            catalog,
            rng,
            sequence: PlacementSequence::with_capacities(
                config.tap_capacity,
                config.text_capacity,
            ),
            state: SessionState::Freeform,
            difficulty: config.difficulty,
            incorrect: IncorrectPositions::new(),
            hint_visible: false,
            recognized: None,
            highlights: HighlightTimers::default(),
            speech: SpeechQueue::default(),
            effects: Vec::new(),
            stats: Statistics::default(),
            config,
        };

        if session.config.start_mode == Mode::Guess {
            session.start_round();
        }
        session
    }

    /// Apply one input event
    pub fn handle(&mut self, input: Input, now: Instant) {
        match input {
            Input::Tap(letter) => {
                self.place(letter, DropSlot::End, now);
            }
            Input::DropAt { letter, slot } => {
                self.place(letter, slot, now);
            }
            Input::Reorder { from, to } => {
                self.reorder(from, to);
            }
            Input::TypedText(text) => self.type_text(&text),
            Input::RemoveAt(index) => {
                self.remove(index);
            }
            Input::Clear => self.clear(),
            Input::ToggleMode => self.toggle_mode(),
            Input::CheckSpelling => {
                self.check_spelling();
            }
            Input::Acknowledge => {
                self.acknowledge();
            }
            Input::ChangeDifficulty(filter) => self.change_difficulty(filter),
            Input::ToggleHint => self.toggle_hint(),
            Input::SpeakTile(index) => self.speak_tile(index, now),
            Input::SpeakWord => self.speak_word(),
        }
    }

    // ------------------------------------------------------------------
    // Tile row
    // ------------------------------------------------------------------

    /// A solved round keeps its tiles on screen until acknowledged
    fn accepts_edits(&self) -> bool {
        !matches!(self.state, SessionState::GuessRoundComplete(_))
    }

    /// Place a letter at a slot; returns false if it was not placed
    pub fn place(&mut self, letter: Letter, slot: DropSlot, now: Instant) -> bool {
        if !self.accepts_edits() {
            return false;
        }

        let placed = match slot {
            DropSlot::End => self.sequence.append(letter),
            DropSlot::Index(index) => self.sequence.insert_at(index, letter),
        };
        let Some(tile) = placed else {
            return false;
        };

        self.highlights
            .start(tile.id, Highlight::Fresh, now + self.config.fresh_highlight);
        self.effects.push(Effect::Tone(ToneKind::Place));
        self.say(letter_sound(letter));
        self.after_edit();
        true
    }

    /// Move a placed tile; returns false if nothing moved
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if !self.accepts_edits() || !self.sequence.move_to(from, to) {
            return false;
        }
        self.effects.push(Effect::Tone(ToneKind::Place));
        self.after_edit();
        true
    }

    /// Replace the row with the letters of typed text
    pub fn type_text(&mut self, text: &str) {
        if !self.accepts_edits() {
            return;
        }
        self.highlights.cancel_all();
        let placed = self.sequence.replace_all(text);
        debug!(placed, "row replaced from typed text");
        self.after_edit();
    }

    /// Remove the tile at `index`; returns false for a stale index
    pub fn remove(&mut self, index: usize) -> bool {
        if !self.accepts_edits() {
            return false;
        }
        let Some(tile) = self.sequence.remove_at(index) else {
            return false;
        };
        self.highlights.cancel(tile.id);
        self.effects.push(Effect::Tone(ToneKind::Remove));
        self.after_edit();
        true
    }

    pub fn clear(&mut self) {
        if !self.accepts_edits() || self.sequence.is_empty() {
            return;
        }
        self.sequence.clear();
        self.highlights.cancel_all();
        self.effects.push(Effect::Tone(ToneKind::Clear));
        self.after_edit();
    }

    /// Feedback always refers to the row as it was at the last check
    fn after_edit(&mut self) {
        self.incorrect.clear();
        self.recognized = None;
        if matches!(self.state, SessionState::Freeform) {
            self.recognize();
        }
    }

    fn recognize(&mut self) {
        let catalog = self.catalog;
        let Some(entry) = catalog.lookup(&self.sequence.to_word()) else {
            return;
        };

        info!(word = entry.word, "recognized free-form word");
        self.recognized = Some(entry);
        self.stats.words_recognized += 1;
        self.effects.push(Effect::Celebrate(Celebration {
            kind: CelebrationKind::Recognized,
            word: entry.word.to_string(),
            pictogram: entry.pictogram,
        }));
        self.say(entry.word);
    }

    fn reset_row(&mut self) {
        self.sequence.clear();
        self.highlights.cancel_all();
        self.incorrect.clear();
        self.recognized = None;
    }

    // ------------------------------------------------------------------
    // Mode and rounds
    // ------------------------------------------------------------------

    pub fn toggle_mode(&mut self) {
        match self.state {
            SessionState::Freeform => self.start_round(),
            SessionState::GuessRoundActive(_) | SessionState::GuessRoundComplete(_) => {
                self.reset_row();
                self.speech.cancel_follow_up();
                self.state = SessionState::Freeform;
                debug!("switched to free-form mode");
            }
        }
    }

    fn start_round(&mut self) {
        self.reset_row();

        let catalog = self.catalog;
        let target = catalog.pick_random(self.difficulty, &mut self.rng);
        self.state = SessionState::GuessRoundActive(Round::new(target));
        self.stats.rounds_started += 1;
        info!(difficulty = %self.difficulty, letters = target.len(), "new round");
        debug!(target = target.word, "round target");

        // The word must not overlap the instruction, so it waits for its completion
        let rate = self.config.speech_rate;
        let prompt = self.speech.utterance(ROUND_PROMPT, rate);
        let word = self.speech.utterance(target.word, rate);
        let prompt = self.speech.chain(prompt, word);
        self.effects.push(Effect::Speak(prompt));
    }

    /// Judge the row against the target
    ///
    /// Returns `Some(true)` when solved, `Some(false)` when wrong, and `None`
    /// outside an active round.
    pub fn check_spelling(&mut self) -> Option<bool> {
        let SessionState::GuessRoundActive(mut round) = self.state else {
            return None;
        };
        round.checks += 1;
        self.stats.checks += 1;

        let verdict = evaluator::judge(&self.sequence, round.target.word);
        if verdict.complete {
            self.state = SessionState::GuessRoundComplete(round);
            self.stats.rounds_completed += 1;
            self.incorrect.clear();
            info!(checks = round.checks, "round solved");

            self.effects.push(Effect::Tone(ToneKind::Success));
            self.effects.push(Effect::Celebrate(Celebration {
                kind: CelebrationKind::Solved,
                word: round.target.word.to_string(),
                pictogram: round.target.pictogram,
            }));
            self.say(format!("Great job! You spelled {}!", round.target.word));
            Some(true)
        } else {
            self.state = SessionState::GuessRoundActive(round);
            self.stats.incorrect_checks += 1;
            debug!(wrong = verdict.incorrect.len(), "spelling incorrect");
            self.incorrect = verdict.incorrect;

            self.effects.push(Effect::Tone(ToneKind::Incorrect));
            self.say(TRY_AGAIN);
            Some(false)
        }
    }

    /// Start the next round after a solved one; no-op in any other state
    pub fn acknowledge(&mut self) -> bool {
        if matches!(self.state, SessionState::GuessRoundComplete(_)) {
            self.start_round();
            true
        } else {
            false
        }
    }

    /// Change the target tier; an active round is abandoned for a new target
    pub fn change_difficulty(&mut self, filter: DifficultyFilter) {
        if filter == self.difficulty {
            return;
        }
        debug!(from = %self.difficulty, to = %filter, "difficulty changed");
        self.difficulty = filter;
        if matches!(self.state, SessionState::GuessRoundActive(_)) {
            self.start_round();
        }
    }

    pub fn toggle_hint(&mut self) {
        self.hint_visible = !self.hint_visible;
    }

    // ------------------------------------------------------------------
    // Speech
    // ------------------------------------------------------------------

    fn say(&mut self, text: impl Into<String>) {
        let utterance = self.speech.utterance(text, self.config.speech_rate);
        self.effects.push(Effect::Speak(utterance));
    }

    /// Say the sound of a placed tile and highlight it while speaking
    pub fn speak_tile(&mut self, index: usize, now: Instant) {
        let Some(tile) = self.sequence.get(index).copied() else {
            return;
        };
        self.highlights.start(
            tile.id,
            Highlight::Speaking,
            now + self.config.speaking_highlight,
        );
        self.say(letter_sound(tile.letter));
    }

    pub fn speak_word(&mut self) {
        if !self.sequence.is_empty() {
            self.say(self.sequence.to_word());
        }
    }

    /// Report that the speaker finished an utterance
    ///
    /// Releases the target word queued behind a round prompt.
    pub fn speech_finished(&mut self, id: UtteranceId) {
        if let Some(next) = self.speech.finished(id) {
            self.effects.push(Effect::Speak(next));
        }
    }

    // ------------------------------------------------------------------
    // Effects and timers
    // ------------------------------------------------------------------

    /// Take the queued effects without playing them
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Play every queued effect on `sink`
    ///
    /// Speech the sink finishes synchronously is reported back at once, so
    /// anything sequenced behind it plays in the same call.
    pub fn pump<S: FeedbackSink + ?Sized>(&mut self, sink: &mut S) {
        while !self.effects.is_empty() {
            for effect in std::mem::take(&mut self.effects) {
                match effect {
                    Effect::Speak(utterance) => {
                        if sink.speak(&utterance) == SpeechStatus::Finished {
                            self.speech_finished(utterance.id);
                        }
                    }
                    Effect::Tone(tone) => sink.emit_tone(tone),
                    Effect::Celebrate(celebration) => sink.celebrate(&celebration),
                }
            }
        }
    }

    /// Expire elapsed highlights; returns true if any changed
    pub fn tick(&mut self, now: Instant) -> bool {
        !self.highlights.expire(now).is_empty()
    }

    /// When the next highlight runs out, if any is running
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.highlights.next_deadline()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    #[must_use]
    pub const fn difficulty(&self) -> DifficultyFilter {
        self.difficulty
    }

    #[must_use]
    pub const fn sequence(&self) -> &PlacementSequence {
        &self.sequence
    }

    #[must_use]
    pub const fn incorrect_positions(&self) -> &IncorrectPositions {
        &self.incorrect
    }

    #[must_use]
    pub const fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    #[must_use]
    pub const fn stats(&self) -> Statistics {
        self.stats
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The round target; crate-only so presentation goes through the view
    pub(crate) fn target(&self) -> Option<&'a WordEntry> {
        match self.state {
            SessionState::Freeform => None,
            SessionState::GuessRoundActive(round) | SessionState::GuessRoundComplete(round) => {
                Some(round.target)
            }
        }
    }

    /// Snapshot for rendering at time `now`
    #[must_use]
    pub fn view(&self, now: Instant) -> SessionView<'_> {
        let tiles = self
            .sequence
            .tiles()
            .iter()
            .enumerate()
            .map(|(i, tile)| TileView {
                letter: tile.letter,
                id: tile.id,
                incorrect: self.incorrect.contains(i),
                highlight: self.highlights.get(tile.id, now),
            })
            .collect();

        let ghost_slots = match self.state {
            SessionState::GuessRoundActive(round) if self.hint_visible => {
                Some(evaluator::ghost_slots(&self.sequence, round.target.word))
            }
            _ => None,
        };

        let solved_word = match self.state {
            SessionState::GuessRoundComplete(round) => Some(round.target.word),
            _ => None,
        };

        SessionView {
            mode: self.mode(),
            phase: self.phase(),
            difficulty: self.difficulty,
            tiles,
            incorrect: &self.incorrect,
            target: self.target().map(TargetHint::from),
            ghost_slots,
            hint_visible: self.hint_visible,
            solved_word,
            recognized: self.recognized,
            tap_capacity: self.sequence.tap_capacity(),
            stats: self.stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, WordEntry};
    use crate::core::Difficulty;
    use crate::feedback::{RecordingFeedback, SilentFeedback};
    use std::time::Duration;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    fn catalog() -> WordCatalog {
        WordCatalog::new([
            WordEntry::new("cat", "🐱", Difficulty::Easy, Category::Animals),
            WordEntry::new("frog", "🐸", Difficulty::Medium, Category::Animals),
        ])
        .unwrap()
    }

    fn session(catalog: &WordCatalog, config: SessionConfig) -> GameSession<'_> {
        GameSession::new(
            catalog,
            SessionConfig {
                seed: Some(1),
                ..config
            },
        )
    }

    fn guess_session(catalog: &WordCatalog, difficulty: DifficultyFilter) -> GameSession<'_> {
        session(
            catalog,
            SessionConfig {
                difficulty,
                start_mode: Mode::Guess,
                ..SessionConfig::default()
            },
        )
    }

    fn tap_word(session: &mut GameSession<'_>, word: &str) {
        let now = Instant::now();
        for ch in word.chars() {
            session.handle(Input::Tap(letter(ch)), now);
        }
    }

    #[test]
    fn starts_in_freeform() {
        let catalog = catalog();
        let s = session(&catalog, SessionConfig::default());
        assert_eq!(s.phase(), SessionPhase::Freeform);
        assert_eq!(s.mode(), Mode::Freeform);
        assert!(s.target().is_none());
    }

    #[test]
    fn toggle_into_guess_picks_target_and_clears_row() {
        let catalog = catalog();
        let mut s = session(&catalog, SessionConfig::default());
        tap_word(&mut s, "xy");

        s.handle(Input::ToggleMode, Instant::now());
        assert_eq!(s.phase(), SessionPhase::GuessRoundActive);
        assert!(s.sequence().is_empty());
        assert!(s.target().is_some());
        assert_eq!(s.stats().rounds_started, 1);
    }

    #[test]
    fn toggle_back_to_freeform_clears_row() {
        let catalog = catalog();
        let mut s = guess_session(&catalog, DifficultyFilter::Easy);
        tap_word(&mut s, "ca");
        s.toggle_mode();
        assert_eq!(s.phase(), SessionPhase::Freeform);
        assert!(s.sequence().is_empty());
        assert!(s.target().is_none());
    }

    #[test]
    fn wrong_spelling_marks_positions_and_stays_active() {
        let catalog = catalog();
        let mut s = guess_session(&catalog, DifficultyFilter::Easy);
        assert_eq!(s.target().unwrap().word, "cat");

        tap_word(&mut s, "cot");
        assert_eq!(s.check_spelling(), Some(false));
        assert_eq!(s.phase(), SessionPhase::GuessRoundActive);
        assert_eq!(s.incorrect_positions().iter().collect::<Vec<_>>(), [1]);
        assert_eq!(s.stats().incorrect_checks, 1);
    }

    #[test]
    fn any_edit_clears_incorrect_positions() {
        let catalog = catalog();
        let mut s = guess_session(&catalog, DifficultyFilter::Easy);
        tap_word(&mut s, "cot");
        s.check_spelling();
        assert!(!s.incorrect_positions().is_empty());

        s.remove(1);
        assert!(s.incorrect_positions().is_empty());

        s.place(letter('x'), DropSlot::Index(1), Instant::now());
        s.check_spelling();
        assert!(!s.incorrect_positions().is_empty());
        s.reorder(0, 2);
        assert!(s.incorrect_positions().is_empty());
    }

    #[test]
    fn correct_spelling_completes_round() {
        let catalog = catalog();
        let mut s = guess_session(&catalog, DifficultyFilter::Easy);
        tap_word(&mut s, "cat");

        assert_eq!(s.check_spelling(), Some(true));
        assert_eq!(s.phase(), SessionPhase::GuessRoundComplete);
        assert!(s.incorrect_positions().is_empty());
        assert_eq!(s.view(Instant::now()).solved_word, Some("cat"));
        assert_eq!(s.stats().rounds_completed, 1);
    }

    #[test]
    fn completed_round_ignores_edits_until_acknowledged() {
        let catalog = catalog();
        let mut s = guess_session(&catalog, DifficultyFilter::Easy);
        tap_word(&mut s, "cat");
        s.check_spelling();

        tap_word(&mut s, "s");
        assert_eq!(s.sequence().to_word(), "cat");
        assert_eq!(s.check_spelling(), None);

        assert!(s.acknowledge());
        assert_eq!(s.phase(), SessionPhase::GuessRoundActive);
        assert!(s.sequence().is_empty());
        assert_eq!(s.stats().rounds_started, 2);
    }

    #[test]
    fn acknowledge_outside_complete_is_noop() {
        let catalog = catalog();
        let mut s = session(&catalog, SessionConfig::default());
        assert!(!s.acknowledge());
        assert_eq!(s.phase(), SessionPhase::Freeform);

        let mut s = guess_session(&catalog, DifficultyFilter::All);
        assert!(!s.acknowledge());
        assert_eq!(s.stats().rounds_started, 1);
    }

    #[test]
    fn check_in_freeform_is_noop() {
        let catalog = catalog();
        let mut s = session(&catalog, SessionConfig::default());
        tap_word(&mut s, "dog");
        assert_eq!(s.check_spelling(), None);
        assert_eq!(s.stats().checks, 0);
    }

    #[test]
    fn difficulty_change_rerolls_active_round() {
        let catalog = catalog();
        let mut s = guess_session(&catalog, DifficultyFilter::Easy);
        tap_word(&mut s, "ca");

        s.change_difficulty(DifficultyFilter::Medium);
        assert_eq!(s.difficulty(), DifficultyFilter::Medium);
        assert_eq!(s.target().unwrap().word, "frog");
        assert!(s.sequence().is_empty());
        assert_eq!(s.stats().rounds_started, 2);
    }

    #[test]
    fn difficulty_change_in_freeform_only_updates_filter() {
        let catalog = catalog();
        let mut s = session(&catalog, SessionConfig::default());
        tap_word(&mut s, "ab");
        s.change_difficulty(DifficultyFilter::Hard);
        assert_eq!(s.difficulty(), DifficultyFilter::Hard);
        assert_eq!(s.sequence().to_word(), "ab");

        // Empty tier falls back to the whole catalog
        s.toggle_mode();
        assert!(s.target().is_some());
    }

    #[test]
    fn difficulty_change_in_complete_waits_for_next_round() {
        let catalog = catalog();
        let mut s = guess_session(&catalog, DifficultyFilter::Easy);
        tap_word(&mut s, "cat");
        s.check_spelling();

        s.change_difficulty(DifficultyFilter::Medium);
        assert_eq!(s.phase(), SessionPhase::GuessRoundComplete);
        s.acknowledge();
        assert_eq!(s.target().unwrap().word, "frog");
    }

    #[test]
    fn freeform_recognizes_catalog_words() {
        let catalog = catalog();
        let mut s = session(&catalog, SessionConfig::default());
        let mut sink = RecordingFeedback::default();

        tap_word(&mut s, "ca");
        assert!(s.view(Instant::now()).recognized.is_none());
        tap_word(&mut s, "t");
        s.pump(&mut sink);

        assert_eq!(s.view(Instant::now()).recognized.unwrap().word, "cat");
        assert_eq!(s.stats().words_recognized, 1);
        let celebrations = sink.celebrations();
        assert_eq!(celebrations.len(), 1);
        assert_eq!(celebrations[0].kind, CelebrationKind::Recognized);
        assert_eq!(sink.spoken().last(), Some(&"cat"));

        s.remove(2);
        assert!(s.view(Instant::now()).recognized.is_none());
    }

    #[test]
    fn typed_text_recognized_too() {
        let catalog = catalog();
        let mut s = session(&catalog, SessionConfig::default());
        s.handle(Input::TypedText("F-R-O-G".to_string()), Instant::now());
        assert_eq!(s.sequence().to_word(), "frog");
        assert_eq!(s.stats().words_recognized, 1);
    }

    #[test]
    fn guess_mode_does_not_auto_recognize() {
        let catalog = catalog();
        let mut s = guess_session(&catalog, DifficultyFilter::Easy);
        tap_word(&mut s, "cat");
        assert_eq!(s.phase(), SessionPhase::GuessRoundActive);
        assert_eq!(s.stats().words_recognized, 0);
    }

    #[test]
    fn placement_feedback_only_when_accepted() {
        let catalog = catalog();
        let mut s = session(
            &catalog,
            SessionConfig {
                tap_capacity: 2,
                ..SessionConfig::default()
            },
        );
        let mut sink = RecordingFeedback::default();

        tap_word(&mut s, "ab");
        s.pump(&mut sink);
        assert_eq!(sink.tones(), [ToneKind::Place, ToneKind::Place]);

        let now = Instant::now();
        assert!(!s.place(letter('c'), DropSlot::End, now));
        s.pump(&mut sink);
        assert_eq!(sink.tones().len(), 2);
    }

    #[test]
    fn tap_speaks_letter_sound() {
        let catalog = catalog();
        let mut s = session(&catalog, SessionConfig::default());
        let mut sink = RecordingFeedback::default();
        tap_word(&mut s, "b");
        s.pump(&mut sink);
        assert_eq!(sink.spoken(), ["buh"]);
    }

    #[test]
    fn remove_and_clear_emit_tones() {
        let catalog = catalog();
        let mut s = session(&catalog, SessionConfig::default());
        tap_word(&mut s, "xyz");
        s.take_effects();

        assert!(!s.remove(9));
        assert!(s.remove(0));
        s.clear();
        s.clear();
        let tones: Vec<Effect> = s.take_effects();
        assert_eq!(tones, [Effect::Tone(ToneKind::Remove), Effect::Tone(ToneKind::Clear)]);
    }

    #[test]
    fn round_prompt_waits_for_completion_signal() {
        let catalog = catalog();
        let mut s = session(&catalog, SessionConfig::default());
        let mut sink = RecordingFeedback {
            hold_speech: true,
            ..RecordingFeedback::default()
        };

        s.toggle_mode();
        s.pump(&mut sink);
        assert_eq!(sink.spoken(), [ROUND_PROMPT]);

        let Some(Effect::Speak(prompt)) = sink.effects.first().cloned() else {
            panic!("expected prompt speech");
        };
        s.speech_finished(prompt.id);
        s.pump(&mut sink);
        let target = s.target().unwrap().word;
        assert_eq!(sink.spoken(), [ROUND_PROMPT, target]);
    }

    #[test]
    fn synchronous_speaker_hears_prompt_then_word() {
        let catalog = catalog();
        let mut s = guess_session(&catalog, DifficultyFilter::Medium);
        let mut sink = RecordingFeedback::default();
        s.pump(&mut sink);
        assert_eq!(sink.spoken(), [ROUND_PROMPT, "frog"]);
    }

    #[test]
    fn leaving_guess_mode_drops_pending_word() {
        let catalog = catalog();
        let mut s = session(&catalog, SessionConfig::default());
        s.toggle_mode();
        let effects = s.take_effects();
        let Some(Effect::Speak(prompt)) = effects.first().cloned() else {
            panic!("expected prompt speech");
        };
        s.toggle_mode();
        s.speech_finished(prompt.id);
        assert!(s.take_effects().is_empty());
    }

    #[test]
    fn incorrect_check_feedback() {
        let catalog = catalog();
        let mut s = guess_session(&catalog, DifficultyFilter::Easy);
        tap_word(&mut s, "cot");
        s.take_effects();
        s.check_spelling();
        let mut sink = RecordingFeedback::default();
        s.pump(&mut sink);
        assert_eq!(sink.tones(), [ToneKind::Incorrect]);
        assert_eq!(sink.spoken(), [TRY_AGAIN]);
    }

    #[test]
    fn fresh_highlight_expires_and_is_cancelled_on_removal() {
        let catalog = catalog();
        let mut s = session(&catalog, SessionConfig::default());
        let now = Instant::now();
        s.place(letter('a'), DropSlot::End, now);
        s.place(letter('b'), DropSlot::End, now);

        let view = s.view(now);
        assert!(view.tiles.iter().all(|t| t.highlight == Some(Highlight::Fresh)));
        assert!(s.next_deadline().is_some());

        s.remove(0);
        s.remove(0);
        assert!(s.next_deadline().is_none());

        s.place(letter('c'), DropSlot::End, now);
        let later = now + s.config().fresh_highlight + Duration::from_millis(1);
        assert!(s.tick(later));
        assert_eq!(s.view(later).tiles[0].highlight, None);
        assert!(!s.tick(later));
    }

    #[test]
    fn speak_tile_highlights_speaking() {
        let catalog = catalog();
        let mut s = session(&catalog, SessionConfig::default());
        let now = Instant::now();
        s.handle(Input::TypedText("ox".to_string()), now);
        s.take_effects();

        s.handle(Input::SpeakTile(1), now);
        assert_eq!(s.view(now).tiles[1].highlight, Some(Highlight::Speaking));
        let mut sink = RecordingFeedback::default();
        s.pump(&mut sink);
        assert_eq!(sink.spoken(), ["ks"]);

        s.handle(Input::SpeakTile(5), now);
        assert!(s.take_effects().is_empty());
    }

    #[test]
    fn speak_word_says_spelling() {
        let catalog = catalog();
        let mut s = session(&catalog, SessionConfig::default());
        s.speak_word();
        assert!(s.take_effects().is_empty());

        s.type_text("zig");
        s.take_effects();
        s.speak_word();
        let mut sink = RecordingFeedback::default();
        s.pump(&mut sink);
        assert_eq!(sink.spoken(), ["zig"]);
    }

    #[test]
    fn hint_shows_ghost_slot_count_only_in_active_round() {
        let catalog = catalog();
        let mut s = guess_session(&catalog, DifficultyFilter::Medium);
        let now = Instant::now();
        assert_eq!(s.view(now).ghost_slots, None);

        s.handle(Input::ToggleHint, now);
        tap_word(&mut s, "f");
        let view = s.view(now);
        assert_eq!(view.ghost_slots, Some(3));
        let hint = view.target.unwrap();
        assert_eq!(hint.len, 4);
        assert_eq!(hint.pictogram, "🐸");
        assert_eq!(view.solved_word, None);

        s.toggle_mode();
        assert_eq!(s.view(now).ghost_slots, None);
        assert!(s.hint_visible());
    }

    #[test]
    fn silent_sink_drains_everything() {
        let catalog = catalog();
        let mut s = guess_session(&catalog, DifficultyFilter::All);
        tap_word(&mut s, "abc");
        s.pump(&mut SilentFeedback);
        assert!(s.take_effects().is_empty());
    }
}
