//! Memory card-set generation.
//!
//! Picks a random theme, selects distinct items for the requested pair
//! count (clamped to what the catalog holds), duplicates each item into a
//! pair, and shuffles the board.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::{Deserialize, Serialize};

use lq_core::{Difficulty, Theme};

use crate::catalog;

/// A single card on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryCard {
    /// Stable positional id (0-based board position).
    pub id: usize,
    /// The face content; exactly one other card shares it.
    pub content: String,
    /// Whether the pair has been matched. Always `false` on a fresh board.
    pub matched: bool,
}

/// A generated memory board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardBoard {
    /// The shuffled cards, two per pair.
    pub cards: Vec<MemoryCard>,
    /// The theme the items were drawn from.
    pub theme: Theme,
    /// Realized pair count, possibly smaller than requested when the
    /// catalog cell runs short.
    pub num_pairs: usize,
    /// The level the board was generated for.
    pub level: u32,
    /// The requested difficulty.
    pub difficulty: Difficulty,
}

/// Pairs on a board for each difficulty (12, 16, or 20 cards).
pub fn pair_count(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy => 6,
        Difficulty::Medium => 8,
        Difficulty::Hard => 10,
    }
}

/// Generate a memory board for a level and difficulty, drawing a theme
/// uniformly from the fixed theme set.
pub fn generate(level: u32, difficulty: Difficulty, rng: &mut StdRng) -> CardBoard {
    let themes = Theme::all();
    let theme = themes[rng.random_range(0..themes.len())];
    let available = catalog::memory_items(theme, level);
    build_board(theme, level, difficulty, available, rng)
}

/// Build a board from an explicit item slice.
///
/// The pair count is clamped to the slice length: serving a smaller board
/// is the defined behavior, never an error, and items are never repeated
/// beyond their own pair.
pub fn build_board(
    theme: Theme,
    level: u32,
    difficulty: Difficulty,
    available: &[&str],
    rng: &mut StdRng,
) -> CardBoard {
    let num_pairs = pair_count(difficulty).min(available.len());

    let mut contents: Vec<&str> = Vec::with_capacity(num_pairs * 2);
    for item in available.choose_multiple(rng, num_pairs) {
        contents.push(*item);
        contents.push(*item);
    }
    contents.shuffle(rng);

    let cards = contents
        .into_iter()
        .enumerate()
        .map(|(id, content)| MemoryCard {
            id,
            content: content.to_string(),
            matched: false,
        })
        .collect();

    CardBoard {
        cards,
        theme,
        num_pairs,
        level,
        difficulty,
    }
}
