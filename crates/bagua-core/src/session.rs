//! Self-test session state and answer evaluation.
//!
//! A session holds one [`Answer`] per hexagram of the palace under test and,
//! once submitted, one verdict per hexagram. Every operation takes the
//! session by value and hands back the next state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::model::{Hexagram, Line, Palace};

/// How the line toggles of a fresh answer are seeded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerSeed {
    /// A copy of the correct lines. The test-taker toggles lines away from
    /// the answer only where they believe it differs.
    #[default]
    Correct,
    /// Every line starts broken.
    Yin,
    /// Every line starts solid.
    Yang,
}

impl AnswerSeed {
    fn seed(self, hexagram: &Hexagram) -> Vec<Line> {
        match self {
            AnswerSeed::Correct => hexagram.lines.clone(),
            AnswerSeed::Yin => vec![Line::Yin; hexagram.lines.len()],
            AnswerSeed::Yang => vec![Line::Yang; hexagram.lines.len()],
        }
    }
}

impl fmt::Display for AnswerSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerSeed::Correct => write!(f, "correct"),
            AnswerSeed::Yin => write!(f, "yin"),
            AnswerSeed::Yang => write!(f, "yang"),
        }
    }
}

impl FromStr for AnswerSeed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "correct" => Ok(AnswerSeed::Correct),
            "yin" | "0" => Ok(AnswerSeed::Yin),
            "yang" | "1" => Ok(AnswerSeed::Yang),
            other => Err(format!("unknown answer seed: {other}")),
        }
    }
}

/// The test-taker's answer for one hexagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub name: String,
    pub lines: Vec<Line>,
}

/// Number of correct hexagrams after a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

/// Self-test state for one palace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSession {
    answers: Vec<Answer>,
    results: Vec<Option<bool>>,
    submitted: bool,
    seed: AnswerSeed,
}

impl TestSession {
    /// Start a session for `palace`.
    pub fn new(palace: &Palace, seed: AnswerSeed) -> Self {
        let mut session = Self {
            answers: Vec::new(),
            results: Vec::new(),
            submitted: false,
            seed,
        };
        session.reset(palace);
        session
    }

    fn reset(&mut self, palace: &Palace) {
        self.answers = palace
            .hexagrams
            .iter()
            .map(|h| Answer {
                name: String::new(),
                lines: self.seed.seed(h),
            })
            .collect();
        self.results = vec![None; palace.hexagrams.len()];
        self.submitted = false;
    }

    /// Throw away all answers and verdicts.
    pub fn retest(mut self, palace: &Palace) -> Self {
        tracing::debug!(palace = %palace.name, "retest");
        self.reset(palace);
        self
    }

    /// Flip one line of one answer. Verdicts are left as they are.
    pub fn toggle_line(mut self, hexagram: usize, line: usize) -> Result<Self, SessionError> {
        let len = self.answers.len();
        let answer = self
            .answers
            .get_mut(hexagram)
            .ok_or(SessionError::HexagramOutOfRange {
                index: hexagram,
                len,
            })?;
        let lines = answer.lines.len();
        let slot = answer
            .lines
            .get_mut(line)
            .ok_or(SessionError::LineOutOfRange {
                hexagram,
                index: line,
                len: lines,
            })?;
        *slot = slot.flip();
        tracing::debug!(hexagram, line, value = %slot, "toggled line");
        Ok(self)
    }

    /// Replace the name of one answer verbatim.
    pub fn set_name(
        mut self,
        hexagram: usize,
        text: impl Into<String>,
    ) -> Result<Self, SessionError> {
        let len = self.answers.len();
        let answer = self
            .answers
            .get_mut(hexagram)
            .ok_or(SessionError::HexagramOutOfRange {
                index: hexagram,
                len,
            })?;
        answer.name = text.into();
        Ok(self)
    }

    /// Grade every answer against `palace`.
    pub fn submit(mut self, palace: &Palace) -> Self {
        self.results = evaluate(palace, &self.answers)
            .into_iter()
            .map(Some)
            .collect();
        self.submitted = true;
        if let Some(score) = self.score() {
            tracing::debug!(palace = %palace.name, %score, "submitted");
        }
        self
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn results(&self) -> &[Option<bool>] {
        &self.results
    }

    /// The verdict for one hexagram; `None` before submit or out of range.
    pub fn result(&self, hexagram: usize) -> Option<bool> {
        self.results.get(hexagram).copied().flatten()
    }

    pub fn seed(&self) -> AnswerSeed {
        self.seed
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Correct count over total, once submitted.
    pub fn score(&self) -> Option<Score> {
        if !self.is_submitted() {
            return None;
        }
        Some(Score {
            correct: self.results.iter().filter(|r| **r == Some(true)).count(),
            total: self.results.len(),
        })
    }
}

/// Grade answers against a palace, one verdict per hexagram.
///
/// A hexagram is correct only when the name matches exactly and every line
/// matches. A missing answer counts as wrong.
pub fn evaluate(palace: &Palace, answers: &[Answer]) -> Vec<bool> {
    palace
        .hexagrams
        .iter()
        .enumerate()
        .map(|(i, hexagram)| {
            answers
                .get(i)
                .is_some_and(|a| a.name == hexagram.name && a.lines == hexagram.lines)
        })
        .collect()
}
