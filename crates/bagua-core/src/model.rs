//! Core data model types for bagua.
//!
//! A dataset is a list of palaces; each palace is an ordered list of
//! hexagrams; each hexagram is a name plus its lines. Lines are stored
//! bottom line first.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One line of a hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Line {
    /// Broken line, stored as 0.
    Yin,
    /// Solid line, stored as 1.
    Yang,
}

impl Line {
    /// Binary complement: yang becomes yin and yin becomes yang.
    pub fn flip(self) -> Line {
        match self {
            Line::Yin => Line::Yang,
            Line::Yang => Line::Yin,
        }
    }

    /// The numeric value used in dataset files.
    pub fn value(self) -> u8 {
        match self {
            Line::Yin => 0,
            Line::Yang => 1,
        }
    }

    pub fn is_yang(self) -> bool {
        self == Line::Yang
    }
}

impl TryFrom<u8> for Line {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Line::Yin),
            1 => Ok(Line::Yang),
            other => Err(format!("line value must be 0 or 1, got {other}")),
        }
    }
}

impl From<Line> for u8 {
    fn from(line: Line) -> u8 {
        line.value()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A named hexagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hexagram {
    /// Traditional name, e.g. "乾为天".
    pub name: String,
    /// Lines from bottom to top.
    pub lines: Vec<Line>,
}

/// A palace: a named, ordered group of hexagrams.
///
/// The name is the palace's identity across every view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palace {
    pub name: String,
    #[serde(default)]
    pub hexagrams: Vec<Hexagram>,
}

impl Palace {
    /// The first hexagram, which names the palace in the traditional scheme.
    pub fn head(&self) -> Option<&Hexagram> {
        self.hexagrams.first()
    }
}

/// The full, read-only collection of palaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub palaces: Vec<Palace>,
}

impl Dataset {
    /// Look a palace up by exact name. The first match wins.
    pub fn find(&self, name: &str) -> Option<&Palace> {
        self.palaces.iter().find(|p| p.name == name)
    }

    /// Number of lines per hexagram, taken from the data rather than assumed.
    ///
    /// Returns `None` when the dataset holds no hexagrams at all.
    pub fn line_count(&self) -> Option<usize> {
        self.palaces
            .iter()
            .find_map(|p| p.head())
            .map(|h| h.lines.len())
    }

    pub fn hexagram_count(&self) -> usize {
        self.palaces.iter().map(|p| p.hexagrams.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.palaces.is_empty()
    }
}
