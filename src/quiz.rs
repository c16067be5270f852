//! Quiz rounds: pick a scenario, take one answer, explain, repeat.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::chamber::{catalog, Particle, Scenario};

pub const PROMPT: &str =
    "Pick the particle based on curvature (sign), radius (momentum), and line width (dE/dx).";

/// Source of uniform choices. Tests swap in a fixed one.
pub trait Picker {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

pub struct RngPicker<R: Rng>(R);

impl RngPicker<Pcg32> {
    pub fn seeded(seed: u64) -> Self {
        Self(Pcg32::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::seeded(rand::thread_rng().gen())
    }
}

impl<R: Rng> Picker for RngPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Uniformly choose an index below `len`; `None` only when `len` is 0.
///
/// Clamped so a misbehaving picker can't index past the slice.
pub fn choose_index(picker: &mut dyn Picker, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(picker.pick(len).min(len - 1))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The round was already scored; nothing changed.
    AlreadyAnswered,
    /// Nothing selected; nothing changed.
    NoSelection,
    Scored { correct: bool },
}

pub struct QuizSession {
    scenarios: Vec<Scenario>,
    picker: Box<dyn Picker>,
    current: usize,
    rounds: u32,
    score: u32,
    answered: bool,
    feedback: String,
}

impl QuizSession {
    /// Build a session and start its first round.
    pub fn new(picker: Box<dyn Picker>) -> Self {
        let mut session = Self {
            scenarios: catalog(),
            picker,
            current: 0,
            rounds: 0,
            score: 0,
            answered: false,
            feedback: String::new(),
        };
        session.new_round();
        session
    }

    pub fn new_round(&mut self) {
        self.current = choose_index(self.picker.as_mut(), self.scenarios.len()).unwrap_or(0);
        self.answered = false;
        self.feedback = PROMPT.to_string();
        log::debug!("new round: {}", self.current().answer);
    }

    pub fn submit(&mut self, selection: Option<Particle>) -> SubmitOutcome {
        if self.answered {
            return SubmitOutcome::AlreadyAnswered;
        }
        let Some(choice) = selection else {
            log::debug!("submit with nothing selected");
            return SubmitOutcome::NoSelection;
        };

        self.rounds += 1;
        let correct = choice == self.current().answer;
        if correct {
            self.score += 1;
        }
        self.answered = true;
        self.feedback = self.compose_feedback(correct);
        log::info!(
            "answered {} for {}: {} ({}/{})",
            choice,
            self.current().answer,
            if correct { "correct" } else { "wrong" },
            self.score,
            self.rounds
        );
        SubmitOutcome::Scored { correct }
    }

    /// Move on, answered or not.
    pub fn next(&mut self) {
        self.new_round();
    }

    fn compose_feedback(&self, correct: bool) -> String {
        let scenario = self.current();
        let verdict = if correct { "✓ Correct!" } else { "✗ Not quite." };
        format!(
            "Answer: {}\n\n{}\n\nReasoning: {}\n\nClues: {}\nTags: {}",
            scenario.answer,
            verdict,
            scenario.explanation,
            scenario.tags.clues(),
            scenario.tags.summary()
        )
    }

    pub fn current(&self) -> &Scenario {
        &self.scenarios[self.current]
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }
}
