//! Static content catalogs.
//!
//! Word lists for the spelling game keyed by level and difficulty tier, and
//! memory-board items keyed by theme and level. Read-only data shared freely
//! across concurrent generator calls. Levels beyond [`MAX_LEVEL`] clamp to
//! the top tier.

use lq_core::{Difficulty, Theme};

/// Highest level with distinct catalog content.
pub const MAX_LEVEL: u32 = 5;

/// Clamp a level into the catalog range and convert to a table index.
fn level_index(level: u32) -> usize {
    (level.clamp(1, MAX_LEVEL) - 1) as usize
}

// ---------------------------------------------------------------------------
// Spelling word lists
// ---------------------------------------------------------------------------

const WORDS_1_EASY: &[&str] = &[
    "cat", "dog", "sun", "hat", "pen", "cup", "bat", "fox", "bug", "pig", "bed", "act", "pet",
    "for", "get", "ate", "are", "own", "the", "put", "his", "big",
];
const WORDS_1_MEDIUM: &[&str] = &[
    "car", "bus", "ant", "rat", "net", "jar", "log", "web", "egg", "jam", "ice", "run", "her",
    "our", "rug", "hit", "fry", "got", "has", "sit", "old",
];
const WORDS_1_HARD: &[&str] = &[
    "zip", "jet", "gym", "owl", "elf", "yak", "wax", "zoo", "ski", "ivy", "man", "toe", "tip",
    "why", "new", "war", "end", "eye", "top", "cry", "one", "two", "fan",
];

const WORDS_2_EASY: &[&str] = &[
    "tree", "book", "star", "moon", "fish", "bird", "door", "ball", "snow", "leaf", "spot",
    "exit", "ship", "fire", "word", "bell", "rain", "hope", "twin", "path", "play", "jump",
    "zero", "four", "skin", "cute", "huge", "race", "best",
];
const WORDS_2_MEDIUM: &[&str] = &[
    "desk", "lamp", "sock", "duck", "ring", "vest", "drum", "gift", "kite", "nest", "love",
    "hard", "bath", "city", "farm", "cool", "game", "milk", "care", "girl", "five", "home",
    "king", "rose", "nine", "life", "back", "land",
];
const WORDS_2_HARD: &[&str] = &[
    "lynx", "quiz", "wasp", "twig", "plum", "crab", "frog", "swan", "wolf", "maze", "about",
    "block", "actor", "begin", "apple", "found", "guess", "event", "doing", "guest", "crowd",
    "brown", "build", "every", "child", "carry", "frame", "great", "floor", "glass", "dream",
    "night", "funny", "ideal",
];

const WORDS_3_EASY: &[&str] = &[
    "house", "table", "chair", "water", "bread", "music", "tiger", "horse", "beach", "plane",
    "quick", "noise", "north", "around", "couple", "change", "accept", "battle", "define",
    "coffee", "anyway", "common", "corner", "carpet", "detail", "effort",
];
const WORDS_3_MEDIUM: &[&str] = &[
    "grape", "apple", "lemon", "melon", "piano", "watch", "cloud", "ocean", "earth", "river",
    "other", "reach", "eleven", "dollar", "behind", "camera", "animal", "guitar", "parrot",
    "letter", "island", "damage", "caught", "fallen", "father", "cheese", "honest",
];
const WORDS_3_HARD: &[&str] = &[
    "zebra", "camel", "eagle", "koala", "panda", "shark", "whale", "crown", "knight", "castle",
    "doctor", "carrot", "potato", "circle", "street", "mirror", "spring", "figure", "answer",
    "action", "bright", "bounce", "ignore", "ground", "little", "listen", "kidney",
];

const WORDS_4_EASY: &[&str] = &[
    "garden", "rocket", "planet", "school", "family", "pencil", "monkey", "castle", "dragon",
    "flower", "carpet", "detail", "effort", "fallen", "father", "cheese", "honest", "ignore",
    "ground", "little", "listen", "kidney", "score", "prize", "tired", "sweet", "taste",
];
const WORDS_4_MEDIUM: &[&str] = &[
    "window", "button", "basket", "helmet", "market", "magnet", "puppet", "tunnel", "violin",
    "airport", "chapter", "federal", "confirm", "feeling", "explore", "discuss", "average",
    "desktop", "clothes", "instant", "largely", "holding", "kitchen", "helpful", "meeting",
];
const WORDS_4_HARD: &[&str] = &[
    "giraffe", "octopus", "penguin", "leopard", "buffalo", "pyramid", "volcano", "dolphin",
    "elephant", "triangle", "accident", "birthday", "baseball", "likewise", "magazine",
    "question", "describe", "colorful", "addition", "floating", "everyone", "firewall",
    "everyday", "property", "remember", "somebody", "together", "yourself", "whenever",
];

const WORDS_5_EASY: &[&str] = &[
    "elephant", "rainbow", "mountain", "butterfly", "computer", "dinosaur", "chocolate",
    "adventure", "treasure",
];
const WORDS_5_MEDIUM: &[&str] = &[
    "kangaroo", "alligator", "crocodile", "pineapple", "blueberry", "strawberry", "hamburger",
    "spaghetti", "broccoli", "cutting", "purpose", "setting", "perfect", "railway", "musical",
    "nowhere", "nothing", "officer", "outdoor", "predict", "tonight", "special", "respect",
    "removed", "totally", "welcome", "vehicle", "weekend", "upgrade", "student", "running",
    "science",
];
const WORDS_5_HARD: &[&str] = &[
    "rhinoceros", "hippopotamus", "photography", "meteorology", "archaeology", "encyclopedia",
    "extraordinary", "multiplication", "thirteen", "weakness", "reporter", "nineteen",
    "notebook", "marriage", "overseas", "lifetime", "midnight", "learning", "overcome",
    "keyboard", "judgment", "friendly", "homeless", "grateful", "fourteen", "increase",
    "distance", "electric", "anything", "breaking", "bathroom",
];

const WORDS: [[&[&str]; 3]; 5] = [
    [WORDS_1_EASY, WORDS_1_MEDIUM, WORDS_1_HARD],
    [WORDS_2_EASY, WORDS_2_MEDIUM, WORDS_2_HARD],
    [WORDS_3_EASY, WORDS_3_MEDIUM, WORDS_3_HARD],
    [WORDS_4_EASY, WORDS_4_MEDIUM, WORDS_4_HARD],
    [WORDS_5_EASY, WORDS_5_MEDIUM, WORDS_5_HARD],
];

/// Spelling candidates for a level and tier. Never empty.
pub fn words(level: u32, tier: Difficulty) -> &'static [&'static str] {
    let tier_index = match tier {
        Difficulty::Easy => 0,
        Difficulty::Medium => 1,
        Difficulty::Hard => 2,
    };
    WORDS[level_index(level)][tier_index]
}

// ---------------------------------------------------------------------------
// Memory-board items
// ---------------------------------------------------------------------------

const OPPOSITES: [&[&str]; 5] = [
    &[
        "hot", "cold", "big", "small", "up", "down", "in", "out", "on", "off", "yes", "no",
    ],
    &[
        "fast", "slow", "happy", "sad", "day", "night", "wet", "dry", "loud", "quiet", "good",
        "bad",
    ],
    &[
        "open", "close", "hard", "soft", "long", "short", "near", "far", "full", "empty", "new",
        "old",
    ],
    &[
        "young", "old", "left", "right", "high", "low", "light", "dark", "early", "late",
        "front", "back",
    ],
    &[
        "thick", "thin", "many", "few", "inside", "outside", "over", "under", "push", "pull",
        "true", "false",
    ],
];

const HABITATS: [&[&str]; 5] = [
    &[
        "🐟", "🌊", "🐠", "🐡", "🦈", "🐬", "🐙", "🦀", "🦞", "🐚", "🦑", "🪼",
    ],
    &[
        "🦁", "🐘", "🦒", "🌴", "🦬", "🦓", "🐆", "🦏", "🦛", "🐊", "🦘", "🐍",
    ],
    &[
        "🐻", "🦊", "🐺", "🌲", "🦌", "🦉", "🐿️", "🐇", "🦔", "🦫", "🦝", "🐗",
    ],
    &[
        "🐫", "☀️", "🦂", "🏜️", "🦎", "🦨", "🐪", "🌵", "🦗", "🐜", "🕷️", "🦅",
    ],
    &[
        "🐧", "❄️", "🦭", "🌨️", "🐋", "🦦", "🦣", "🌬️", "🐻‍❄️", "🧊", "🦈", "🐟",
    ],
];

const SIGHT_WORDS: [&[&str]; 5] = [
    &[
        "the", "and", "can", "see", "for", "you", "are", "was", "his", "her", "not", "but",
    ],
    &[
        "play", "said", "look", "come", "here", "make", "away", "blue", "from", "good", "have",
        "they",
    ],
    &[
        "help", "find", "funny", "little", "down", "where", "three", "under", "jump", "run",
        "ride", "went",
    ],
    &[
        "always", "before", "around", "pretty", "their", "about", "better", "many", "every",
        "first", "green", "small",
    ],
    &[
        "because", "thought", "enough", "through", "together", "another", "almost", "between",
        "children", "favorite", "different", "important",
    ],
];

const MATH_FACTS: [&[&str]; 5] = [
    &[
        "1+1", "1+2", "2+2", "3+1", "4-1", "5-2", "2+1", "3-1", "1+3", "2-1", "3+2", "4-2",
    ],
    &[
        "2+3", "3+2", "4+1", "6-3", "7-2", "8-4", "5+3", "6-1", "5+2", "7-3", "6+2", "8-3",
    ],
    &[
        "5+4", "6+2", "7+1", "9-3", "10-5", "8-2", "4+4", "3+4", "2+5", "7-3", "9-4", "10-6",
    ],
    &[
        "7+3", "8+2", "9+4", "12-4", "11-5", "10-2", "6+5", "15-7", "9+1", "14-6", "13-4",
        "16-8",
    ],
    &[
        "8+3", "7+4", "9+2", "13-6", "14-8", "16-7", "12+3", "11+4", "18-9", "10+5", "9+6",
        "15-9",
    ],
];

/// Memory-board candidates for a theme and level. Never empty; the board
/// generator clamps its pair count to this slice's length.
pub fn memory_items(theme: Theme, level: u32) -> &'static [&'static str] {
    let idx = level_index(level);
    match theme {
        Theme::Opposites => OPPOSITES[idx],
        Theme::Habitats => HABITATS[idx],
        Theme::SightWords => SIGHT_WORDS[idx],
        Theme::MathFacts => MATH_FACTS[idx],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_word_cell_is_populated() {
        for level in 1..=MAX_LEVEL {
            for tier in Difficulty::all() {
                assert!(
                    !words(level, *tier).is_empty(),
                    "empty cell at level {level} tier {tier}"
                );
            }
        }
    }

    #[test]
    fn every_memory_cell_has_twelve_items() {
        for theme in Theme::all() {
            for level in 1..=MAX_LEVEL {
                assert_eq!(
                    memory_items(*theme, level).len(),
                    12,
                    "cell {theme} level {level}"
                );
            }
        }
    }

    #[test]
    fn memory_cells_have_distinct_items() {
        for theme in Theme::all() {
            for level in 1..=MAX_LEVEL {
                let items = memory_items(*theme, level);
                for (i, a) in items.iter().enumerate() {
                    assert!(
                        !items[i + 1..].contains(a),
                        "duplicate {a:?} in {theme} level {level}"
                    );
                }
            }
        }
    }

    #[test]
    fn levels_clamp_to_catalog_range() {
        assert_eq!(words(0, Difficulty::Easy), words(1, Difficulty::Easy));
        assert_eq!(words(9, Difficulty::Hard), words(5, Difficulty::Hard));
        assert_eq!(
            memory_items(Theme::Opposites, 99),
            memory_items(Theme::Opposites, 5)
        );
    }

    #[test]
    fn words_are_lowercase_ascii() {
        for level in 1..=MAX_LEVEL {
            for tier in Difficulty::all() {
                for word in words(level, *tier) {
                    assert!(
                        word.chars().all(|c| c.is_ascii_lowercase()),
                        "{word:?} at level {level}"
                    );
                }
            }
        }
    }
}
