//! Feedback effects and the collaborator seams that play them
//!
//! The game engine never talks to audio or the screen directly. It queues
//! [`Effect`]s; a front end drains them into something implementing
//! [`FeedbackSink`] (a speech engine, a tone generator, a message log).

mod sounds;

pub use sounds::letter_sound;

use std::fmt;

/// Identity of one speech request, used to report its completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtteranceId(u64);

impl UtteranceId {
    #[must_use]
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Text to speak at a given rate (1.0 = normal speed)
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub id: UtteranceId,
    pub text: String,
    pub rate: f32,
}

/// What a speaker reports right after accepting an utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechStatus {
    /// Already done; anything queued behind it may play now
    Finished,
    /// Still playing; completion is reported later through
    /// `GameSession::speech_finished`
    Pending,
}

/// Short non-verbal sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToneKind {
    Place,
    Remove,
    Clear,
    Incorrect,
    Success,
}

impl fmt::Display for ToneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Place => "place",
            Self::Remove => "remove",
            Self::Clear => "clear",
            Self::Incorrect => "incorrect",
            Self::Success => "success",
        })
    }
}

/// Why a word is being celebrated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CelebrationKind {
    /// The learner spelled the round's target and pressed check
    Solved,
    /// A free-form spelling happens to be a catalog word
    Recognized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Celebration {
    pub kind: CelebrationKind,
    pub word: String,
    pub pictogram: &'static str,
}

/// One piece of feedback queued by the engine
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Speak(Utterance),
    Tone(ToneKind),
    Celebrate(Celebration),
}

/// Speech synthesis collaborator
pub trait Speaker {
    fn speak(&mut self, utterance: &Utterance) -> SpeechStatus;
}

/// Tone/beep collaborator
pub trait TonePlayer {
    fn emit_tone(&mut self, tone: ToneKind);
}

/// Everything a front end needs to play the engine's feedback
pub trait FeedbackSink: Speaker + TonePlayer {
    fn celebrate(&mut self, celebration: &Celebration);
}

/// Sink that drops everything; speech completes immediately
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentFeedback;

impl Speaker for SilentFeedback {
    fn speak(&mut self, _utterance: &Utterance) -> SpeechStatus {
        SpeechStatus::Finished
    }
}

impl TonePlayer for SilentFeedback {
    fn emit_tone(&mut self, _tone: ToneKind) {}
}

impl FeedbackSink for SilentFeedback {
    fn celebrate(&mut self, _celebration: &Celebration) {}
}

/// Sink that remembers everything it was given, in order
///
/// Useful for transcripts and for asserting on feedback in tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingFeedback {
    pub effects: Vec<Effect>,
    /// When set, speech reports `Pending` instead of finishing at once
    pub hold_speech: bool,
}

impl RecordingFeedback {
    /// Text of every spoken utterance, in order
    #[must_use]
    pub fn spoken(&self) -> Vec<&str> {
        self.effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Speak(utterance) => Some(utterance.text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn tones(&self) -> Vec<ToneKind> {
        self.effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Tone(tone) => Some(*tone),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn celebrations(&self) -> Vec<&Celebration> {
        self.effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Celebrate(celebration) => Some(celebration),
                _ => None,
            })
            .collect()
    }
}

impl Speaker for RecordingFeedback {
    fn speak(&mut self, utterance: &Utterance) -> SpeechStatus {
        self.effects.push(Effect::Speak(utterance.clone()));
        if self.hold_speech {
            SpeechStatus::Pending
        } else {
            SpeechStatus::Finished
        }
    }
}

impl TonePlayer for RecordingFeedback {
    fn emit_tone(&mut self, tone: ToneKind) {
        self.effects.push(Effect::Tone(tone));
    }
}

impl FeedbackSink for RecordingFeedback {
    fn celebrate(&mut self, celebration: &Celebration) {
        self.effects.push(Effect::Celebrate(celebration.clone()));
    }
}
