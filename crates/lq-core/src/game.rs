//! Game enumerations shared across the engine and the progress service.
//!
//! The serde representations ("math", "easy", "+", "sightWords", ...) are the
//! wire and storage contract; stored records and clients depend on them.

use serde::{Deserialize, Serialize};

/// Which mini-game a record or question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    /// Arithmetic practice.
    Math,
    /// Spelling practice.
    Word,
    /// Memory card matching.
    Memory,
}

impl GameType {
    /// Parse a game type from its wire string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "math" => Some(Self::Math),
            "word" => Some(Self::Word),
            "memory" => Some(Self::Memory),
            _ => None,
        }
    }

    /// All game types in display order.
    pub fn all() -> &'static [Self] {
        &[Self::Math, Self::Word, Self::Memory]
    }
}

impl std::fmt::Display for GameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Math => write!(f, "math"),
            Self::Word => write!(f, "word"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// A coarse difficulty tier.
///
/// Derived from rolling accuracy for spelling, chosen directly for memory
/// boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// The gentlest tier.
    Easy,
    /// The default tier.
    #[default]
    Medium,
    /// The hardest tier.
    Hard,
}

impl Difficulty {
    /// Parse a difficulty from its wire string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    /// All difficulties from easiest to hardest.
    pub fn all() -> &'static [Self] {
        &[Self::Easy, Self::Medium, Self::Hard]
    }

    /// Capitalized label used in player-facing hints ("Easy", "Medium", "Hard").
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Medium => write!(f, "medium"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

/// An arithmetic operation.
///
/// Stored in question history as its symbol ("+", "-", "*").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Addition.
    #[serde(rename = "+")]
    Add,
    /// Subtraction.
    #[serde(rename = "-")]
    Sub,
    /// Multiplication.
    #[serde(rename = "*")]
    Mul,
}

impl Operation {
    /// The operator symbol as it appears in question text and storage.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
        }
    }

    /// Parse an operation from its symbol.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            _ => None,
        }
    }

    /// All operations, in tie-break order (addition first).
    pub fn all() -> &'static [Self] {
        &[Self::Add, Self::Sub, Self::Mul]
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A memory-board theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Theme {
    /// Opposite word pairs (hot/cold, big/small, ...).
    Opposites,
    /// Animal and habitat emoji.
    Habitats,
    /// Early-reader sight words.
    SightWords,
    /// Small arithmetic facts ("2+3", "8-4", ...).
    MathFacts,
}

impl Theme {
    /// All themes available to the board generator.
    pub fn all() -> &'static [Self] {
        &[
            Self::Opposites,
            Self::Habitats,
            Self::SightWords,
            Self::MathFacts,
        ]
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Opposites => write!(f, "opposites"),
            Self::Habitats => write!(f, "habitats"),
            Self::SightWords => write!(f, "sightWords"),
            Self::MathFacts => write!(f, "mathFacts"),
        }
    }
}
