//! The durable per-user, per-game progress record.
//!
//! A [`ProgressRecord`] is keyed by `(user, game type)` and accumulates
//! totals, bounded answer-history windows, and the scored level. `accuracy`
//! is derived from the counters and recomputed inside every mutating method,
//! never written from external input. Serialized field names are the
//! document-store schema and must stay stable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::game::{Difficulty, GameType, Operation};
use crate::user::UserId;

/// Integer accuracy percentage: `round(100 * correct / total)`, 0 when
/// `total` is 0.
pub fn accuracy_percentage(correct: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    ((correct as f64 / total as f64) * 100.0).round() as u8
}

/// One answered arithmetic question, kept in the sliding history window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// The operation the question used.
    pub operation: Operation,
    /// Whether the learner answered correctly.
    pub correct: bool,
    /// When the answer was recorded.
    pub timestamp: DateTime<Utc>,
}

/// Summary of one submitted play session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    /// Points earned in the session.
    pub score: u32,
    /// Session-local accuracy percentage.
    pub accuracy: u8,
    /// Questions answered in the session.
    pub questions_answered: u32,
    /// When the session was submitted.
    pub played_at: DateTime<Utc>,
}

/// Durable statistics and leveling state for one `(user, game type)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    /// The learner this record belongs to.
    pub user_id: UserId,
    /// The mini-game this record tracks.
    pub game_type: GameType,
    /// Certified skill tier. Starts at 1 and only moves through the session
    /// reducer's level-up rule or the administrative override.
    pub level: u32,
    /// "Next level to offer on resume": the continue-feature checkpoint,
    /// independent of the scored `level`.
    pub current_level: u32,
    /// Last board difficulty chosen, also part of the continue checkpoint.
    pub difficulty: Difficulty,
    /// Total questions ever answered. Non-decreasing.
    pub total_questions: u64,
    /// Total correct answers ever given. Non-decreasing.
    pub correct_answers: u64,
    /// Total points ever earned. Non-decreasing.
    pub total_score: u64,
    /// Derived cumulative accuracy percentage.
    pub accuracy: u8,
    /// When this record last absorbed a submission or checkpoint.
    pub last_played: Option<DateTime<Utc>>,
    /// Recent arithmetic answers, oldest first, capped at
    /// [`ProgressRecord::HISTORY_CAP`].
    pub question_history: Vec<QuestionRecord>,
    /// Distinct recently missed spelling words, capped at
    /// [`ProgressRecord::MISSED_WORDS_CAP`].
    pub missed_words: Vec<String>,
    /// One summary per submitted session, append-only.
    pub sessions: Vec<SessionSummary>,
}

impl ProgressRecord {
    /// Sliding-window cap for arithmetic question history.
    pub const HISTORY_CAP: usize = 50;
    /// Cap for the missed spelling words window.
    pub const MISSED_WORDS_CAP: usize = 20;

    /// Accuracy threshold (percent) required to level up.
    pub const LEVEL_UP_ACCURACY: u8 = 85;
    /// Questions required per level before leveling up.
    pub const LEVEL_UP_QUESTIONS_PER_LEVEL: u64 = 15;
    /// Sessions that must be played before the first level up.
    pub const LEVEL_UP_MIN_SESSIONS: usize = 3;

    /// A zeroed level-1 record, the shape progress queries return for a
    /// key that has never been played.
    pub fn fresh(user_id: UserId, game_type: GameType) -> Self {
        Self {
            user_id,
            game_type,
            level: 1,
            current_level: 1,
            difficulty: Difficulty::Medium,
            total_questions: 0,
            correct_answers: 0,
            total_score: 0,
            accuracy: 0,
            last_played: None,
            question_history: Vec::new(),
            missed_words: Vec::new(),
            sessions: Vec::new(),
        }
    }

    /// Add a session's scalar results to the running totals and recompute
    /// the derived accuracy.
    pub fn add_totals(&mut self, questions: u32, correct: u32, score: u32) {
        self.total_questions += u64::from(questions);
        self.correct_answers += u64::from(correct);
        self.total_score += u64::from(score);
        self.recompute_accuracy();
    }

    /// Append an arithmetic answer to the history window, dropping the
    /// oldest entries beyond [`Self::HISTORY_CAP`].
    pub fn record_question(&mut self, operation: Operation, correct: bool, at: DateTime<Utc>) {
        self.question_history.push(QuestionRecord {
            operation,
            correct,
            timestamp: at,
        });
        if self.question_history.len() > Self::HISTORY_CAP {
            let excess = self.question_history.len() - Self::HISTORY_CAP;
            self.question_history.drain(..excess);
        }
    }

    /// Record a missed spelling word if it is not already in the window,
    /// dropping the oldest entries beyond [`Self::MISSED_WORDS_CAP`].
    pub fn record_missed_word(&mut self, word: &str) {
        if self.missed_words.iter().any(|w| w == word) {
            return;
        }
        self.missed_words.push(word.to_string());
        if self.missed_words.len() > Self::MISSED_WORDS_CAP {
            let excess = self.missed_words.len() - Self::MISSED_WORDS_CAP;
            self.missed_words.drain(..excess);
        }
    }

    /// Append a session summary to the append-only session log.
    pub fn log_session(&mut self, summary: SessionSummary) {
        self.sessions.push(summary);
    }

    /// Whether the record currently satisfies every level-up gate:
    /// cumulative accuracy, question volume for the current level, and
    /// sessions played.
    pub fn ready_to_level_up(&self) -> bool {
        self.accuracy >= Self::LEVEL_UP_ACCURACY
            && self.total_questions >= u64::from(self.level) * Self::LEVEL_UP_QUESTIONS_PER_LEVEL
            && self.sessions.len() >= Self::LEVEL_UP_MIN_SESSIONS
    }

    /// Advance the scored level by exactly one step.
    pub fn level_up(&mut self) {
        self.level += 1;
    }

    fn recompute_accuracy(&mut self) {
        self.accuracy = accuracy_percentage(self.correct_answers, self.total_questions);
    }
}
