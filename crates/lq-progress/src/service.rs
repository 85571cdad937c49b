//! The service operations exposed to the routing/auth layer.
//!
//! `GameService` owns the record store and the random source and offers the
//! four operation groups: question generation, progress queries, result
//! submission, and the trusted administrative level override. The caller
//! supplies an authenticated [`UserId`]; authorization happens upstream.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use lq_core::{Difficulty, GameType, ProgressRecord, UserId};
use lq_engine::{ArithmeticQuestion, CardBoard, SpellingQuestion};
use lq_engine::{arithmetic, memory, spelling, tier_for_accuracy};

use crate::config::ServiceConfig;
use crate::error::{ServiceError, ServiceResult};
use crate::reducer::{SessionOutcome, SubmissionDraft, fold_session};
use crate::store::GameStore;

/// A generated question or card set, shaped per game type.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Question {
    /// An arithmetic question.
    Arithmetic(ArithmeticQuestion),
    /// A spelling question with scrambled and fill-blank variants.
    Spelling(SpellingQuestion),
    /// A memory card board.
    Memory(CardBoard),
}

/// Progress for all three games, defaults where never played.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressReport {
    /// Arithmetic progress.
    pub math: ProgressRecord,
    /// Spelling progress.
    pub word: ProgressRecord,
    /// Memory progress.
    pub memory: ProgressRecord,
}

/// The scalar progress slice returned after a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressTotals {
    /// Scored level.
    pub level: u32,
    /// Cumulative questions answered.
    pub total_questions: u64,
    /// Cumulative correct answers.
    pub correct_answers: u64,
    /// Cumulative score.
    pub total_score: u64,
    /// Derived cumulative accuracy.
    pub accuracy: u8,
}

impl From<&ProgressRecord> for ProgressTotals {
    fn from(record: &ProgressRecord) -> Self {
        Self {
            level: record.level,
            total_questions: record.total_questions,
            correct_answers: record.correct_answers,
            total_score: record.total_score,
            accuracy: record.accuracy,
        }
    }
}

/// Coaching text derived from the accuracy band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    /// Pace message for the current accuracy band.
    pub difficulty: String,
    /// Either the unlock notice or the distance to the next level.
    pub next_challenge: String,
}

/// Everything a submission returns to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    /// Updated progress totals.
    pub progress: ProgressTotals,
    /// The user's new star total.
    pub total_stars: u64,
    /// Whether this submission leveled the learner up.
    pub level_up: bool,
    /// Coaching text.
    pub ai_insights: Insights,
}

/// Acknowledgement of an administrative level override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelOverride {
    /// The game whose level was overridden.
    pub game_type: GameType,
    /// The level now in force.
    pub level: u32,
}

/// The adaptive progression engine's service façade.
pub struct GameService<S: GameStore> {
    store: S,
    rng: Mutex<StdRng>,
    config: ServiceConfig,
}

impl<S: GameStore> GameService<S> {
    /// Create a service over a record store.
    pub fn new(store: S, config: ServiceConfig) -> Self {
        let rng = Mutex::new(config.rng());
        Self { store, rng, config }
    }

    /// The configuration this service was built with.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    // A poisoned RNG mutex only means another thread panicked mid-draw; the
    // generator state is still sound, so recover the guard.
    fn rng(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn load_or_fresh(&self, user: UserId, game: GameType) -> ServiceResult<ProgressRecord> {
        Ok(self
            .store
            .load_progress(user, game)?
            .unwrap_or_else(|| ProgressRecord::fresh(user, game)))
    }

    /// Generate the next question or card set for a learner.
    ///
    /// `requested_difficulty` applies to memory boards only; when absent the
    /// board uses the record's checkpointed difficulty.
    pub fn next_question(
        &self,
        user: UserId,
        game: GameType,
        requested_difficulty: Option<Difficulty>,
    ) -> ServiceResult<Question> {
        let record = self.load_or_fresh(user, game)?;
        debug!(user = %user, game = %game, level = record.level, "generating question");

        let mut rng = self.rng();
        match game {
            GameType::Math => Ok(Question::Arithmetic(arithmetic::generate(
                record.level,
                &record.question_history,
                &mut rng,
            ))),
            GameType::Word => Ok(Question::Spelling(spelling::generate(
                record.level,
                record.accuracy,
                &record.missed_words,
                &mut rng,
            ))),
            GameType::Memory => {
                let difficulty = requested_difficulty.unwrap_or(record.difficulty);
                let board = memory::generate(record.level, difficulty, &mut rng);
                let requested_pairs = memory::pair_count(difficulty);
                if board.num_pairs < requested_pairs {
                    debug!(
                        theme = %board.theme,
                        requested = requested_pairs,
                        served = board.num_pairs,
                        "catalog short, board clamped"
                    );
                }
                Ok(Question::Memory(board))
            }
        }
    }

    /// Build the multiple-choice option set for a spelling word, using the
    /// learner's current level and accuracy tier.
    pub fn word_choices(&self, user: UserId, word: &str) -> ServiceResult<Vec<String>> {
        let record = self.load_or_fresh(user, GameType::Word)?;
        let tier = tier_for_accuracy(record.accuracy);
        let mut rng = self.rng();
        Ok(spelling::multiple_choice(word, record.level, tier, &mut rng))
    }

    /// Current progress for one game; the zeroed level-1 default when the
    /// learner has never played it.
    pub fn progress(&self, user: UserId, game: GameType) -> ServiceResult<ProgressRecord> {
        self.load_or_fresh(user, game)
    }

    /// Current progress for all three games.
    pub fn progress_all(&self, user: UserId) -> ServiceResult<ProgressReport> {
        Ok(ProgressReport {
            math: self.load_or_fresh(user, GameType::Math)?,
            word: self.load_or_fresh(user, GameType::Word)?,
            memory: self.load_or_fresh(user, GameType::Memory)?,
        })
    }

    /// The user's current star total.
    pub fn total_stars(&self, user: UserId) -> ServiceResult<u64> {
        Ok(self.store.total_stars(user)?)
    }

    /// Validate and fold a submitted session, credit the score to the star
    /// counter, and report the outcome with coaching text.
    ///
    /// Validation happens before any store access, so a rejected submission
    /// leaves the record exactly as it was.
    pub fn submit_result(
        &self,
        user: UserId,
        draft: SubmissionDraft,
    ) -> ServiceResult<SubmissionResponse> {
        let submission = draft.validate()?;
        let now = Utc::now();

        let mut outcome = SessionOutcome::default();
        let (record, total_stars) = self.store.apply_session(
            user,
            submission.game_type,
            &mut |record| outcome = fold_session(record, &submission, now),
            submission.score,
        )?;

        info!(
            user = %user,
            game = %submission.game_type,
            score = submission.score,
            accuracy = record.accuracy,
            "session folded"
        );
        if outcome.leveled_up {
            info!(user = %user, game = %submission.game_type, level = record.level, "level up");
        }

        Ok(SubmissionResponse {
            progress: ProgressTotals::from(&record),
            total_stars,
            level_up: outcome.leveled_up,
            ai_insights: insights(record.accuracy, outcome.leveled_up, record.level),
        })
    }

    /// Save the continue-feature checkpoint: the level to offer on resume
    /// and, optionally, the last board difficulty.
    ///
    /// Writes only the checkpoint fields; the scored `level` is untouched.
    pub fn save_checkpoint(
        &self,
        user: UserId,
        game: GameType,
        current_level: u32,
        difficulty: Option<Difficulty>,
    ) -> ServiceResult<ProgressRecord> {
        if current_level == 0 {
            return Err(ServiceError::Validation(
                "currentLevel must be at least 1".to_string(),
            ));
        }
        let now = Utc::now();
        let record = self.store.update_progress(user, game, &mut |record| {
            record.current_level = current_level;
            if let Some(difficulty) = difficulty {
                record.difficulty = difficulty;
            }
            record.last_played = Some(now);
        })?;
        debug!(user = %user, game = %game, current_level, "checkpoint saved");
        Ok(record)
    }

    /// Administrative override of the scored level.
    ///
    /// This is a trusted path with no relation to accumulated accuracy or
    /// question volume. It is a distinct operation, never invoked by the
    /// submission flow, and must be guarded by the caller's authorization.
    pub fn override_level(
        &self,
        user: UserId,
        game: GameType,
        level: u32,
    ) -> ServiceResult<LevelOverride> {
        if level == 0 {
            return Err(ServiceError::Validation(
                "level must be at least 1".to_string(),
            ));
        }
        let record = self.store.update_progress(user, game, &mut |record| {
            record.level = level;
        })?;
        info!(user = %user, game = %game, level, "administrative level override");
        Ok(LevelOverride {
            game_type: game,
            level: record.level,
        })
    }
}

/// Coaching text for an accuracy band, per the legacy client contract.
fn insights(accuracy: u8, leveled_up: bool, level: u32) -> Insights {
    let difficulty = if accuracy >= 85 {
        "Increasing difficulty!"
    } else if accuracy >= 70 {
        "Great progress!"
    } else {
        "Keep practicing!"
    };
    let next_challenge = if leveled_up {
        format!("Level {level} unlocked!")
    } else {
        format!("{}% more to level up", 85u8.saturating_sub(accuracy))
    };
    Insights {
        difficulty: difficulty.to_string(),
        next_challenge,
    }
}
