//! Caller-owned quiz session state.
//!
//! The core itself is stateless; a [`Session`] is an explicit value the
//! caller (CLI loop, chat handler) owns and threads through its own
//! conversation flow. It tracks the current question, the attempt counter,
//! and the cumulative statistics reported at the end of a session.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pitch::PitchClass;
use crate::question::{Orientation, Question, RenderMode};

/// Wrong attempts allowed before the answer is revealed.
const MAX_ATTEMPTS: u32 = 2;

/// Cumulative statistics for one practice session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_questions: u32,
    pub correct_answers: u32,
    pub wrong_answers: u32,
    /// Questions that needed more than one attempt.
    pub questions_with_hints: u32,
}

impl SessionStats {
    /// Percentage of questions answered correctly on the first attempt,
    /// 0.0 for an empty session.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.total_questions == 0 {
            0.0
        } else {
            f64::from(self.correct_answers) / f64::from(self.total_questions) * 100.0
        }
    }
}

/// Outcome of grading one submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Matched the target note.
    Correct,
    /// Wrong, but another attempt remains on this question.
    TryAgain,
    /// Wrong on the last attempt; carries the note that was asked.
    Revealed(PitchClass),
}

/// One player's practice session.
#[derive(Debug, Clone)]
pub struct Session {
    max_fret: u8,
    orientation: Orientation,
    mode: RenderMode,
    current: Option<Question>,
    attempts: u32,
    stats: SessionStats,
}

impl Session {
    #[must_use]
    pub fn new(max_fret: u8, orientation: Orientation, mode: RenderMode) -> Self {
        Self {
            max_fret,
            orientation,
            mode,
            current: None,
            attempts: 0,
            stats: SessionStats::default(),
        }
    }

    #[must_use]
    pub fn max_fret(&self) -> u8 {
        self.max_fret
    }

    #[must_use]
    pub fn current(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Generate and store the next question, resetting the attempt counter.
    pub fn next_question<R: Rng>(&mut self, rng: &mut R) -> Result<&Question> {
        let question = Question::generate(self.max_fret, self.orientation, self.mode, rng)?;
        self.attempts = 0;
        Ok(self.current.insert(question))
    }

    /// Grade one answer against the current question and update the stats.
    ///
    /// The first attempt on each question counts it toward the totals. A
    /// correct first attempt scores; a correct later attempt moves on
    /// without scoring either way. The second wrong attempt reveals the
    /// note, records the miss, and retires the question. Returns `None`
    /// when no question is active.
    pub fn submit(&mut self, raw: &str) -> Option<Answer> {
        let question = self.current.as_ref()?;

        if self.attempts == 0 {
            self.stats.total_questions += 1;
        }

        if question.check(raw) {
            if self.attempts == 0 {
                self.stats.correct_answers += 1;
            }
            self.current = None;
            self.attempts = 0;
            return Some(Answer::Correct);
        }

        self.attempts += 1;
        if self.attempts >= MAX_ATTEMPTS {
            self.stats.wrong_answers += 1;
            self.stats.questions_with_hints += 1;
            let note = question.note;
            log::debug!("question missed, revealing {note}");
            self.current = None;
            self.attempts = 0;
            Some(Answer::Revealed(note))
        } else {
            Some(Answer::TryAgain)
        }
    }
}
