//! Folding a submitted play session into a progress record.
//!
//! [`SubmissionDraft`] is the all-optional shape the transport layer
//! deserializes; [`SubmissionDraft::validate`] turns it into a
//! [`SessionSubmission`] or a validation error before anything is mutated.
//! [`fold_session`] then applies one submission to one record: totals,
//! detail windows, session log, derived accuracy, and the single-step
//! level-up decision.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lq_core::{GameType, Operation, ProgressRecord, SessionSummary, accuracy_percentage};

use crate::error::ServiceError;

/// Per-question detail reported by the client alongside session totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDetail {
    /// The arithmetic operation, for math sessions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<Operation>,
    /// The target word, for spelling sessions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    /// Whether the learner answered correctly.
    pub correct: bool,
}

/// A submission as it arrives from the client, every field optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDraft {
    /// Which game the session belongs to.
    pub game_type: Option<GameType>,
    /// Points earned.
    pub score: Option<u32>,
    /// Questions answered.
    pub questions_answered: Option<u32>,
    /// Correct answers given.
    pub correct_answers: Option<u32>,
    /// Optional per-question details.
    pub question_details: Option<Vec<QuestionDetail>>,
}

impl SubmissionDraft {
    /// Check the required scalars and produce a validated submission.
    ///
    /// Any caller-supplied accuracy is ignored by construction: the draft
    /// has no such field, and the ledger recomputes its own.
    pub fn validate(self) -> Result<SessionSubmission, ServiceError> {
        let game_type = self.game_type.ok_or(ServiceError::MissingField("gameType"))?;
        let score = self.score.ok_or(ServiceError::MissingField("score"))?;
        let questions_answered = self
            .questions_answered
            .ok_or(ServiceError::MissingField("questionsAnswered"))?;
        let correct_answers = self
            .correct_answers
            .ok_or(ServiceError::MissingField("correctAnswers"))?;

        if correct_answers > questions_answered {
            return Err(ServiceError::Validation(format!(
                "correctAnswers ({correct_answers}) exceeds questionsAnswered ({questions_answered})"
            )));
        }

        Ok(SessionSubmission {
            game_type,
            score,
            questions_answered,
            correct_answers,
            details: self.question_details,
        })
    }
}

/// A validated play-session submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSubmission {
    /// Which game the session belongs to.
    pub game_type: GameType,
    /// Points earned.
    pub score: u32,
    /// Questions answered.
    pub questions_answered: u32,
    /// Correct answers given; never more than `questions_answered`.
    pub correct_answers: u32,
    /// Optional per-question details.
    pub details: Option<Vec<QuestionDetail>>,
}

/// What a fold decided, beyond the record mutation itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOutcome {
    /// Whether this submission triggered the one-step level-up.
    pub leveled_up: bool,
    /// The session's own accuracy percentage.
    pub session_accuracy: u8,
}

/// Fold one validated submission into a progress record.
///
/// Runs inside the store's per-key serialization point. The level moves by
/// at most one step per call, regardless of how far the thresholds are
/// exceeded.
pub fn fold_session(
    record: &mut ProgressRecord,
    submission: &SessionSubmission,
    now: DateTime<Utc>,
) -> SessionOutcome {
    record.add_totals(
        submission.questions_answered,
        submission.correct_answers,
        submission.score,
    );
    record.last_played = Some(now);

    if let Some(details) = &submission.details {
        match submission.game_type {
            GameType::Math => {
                for detail in details {
                    if let Some(operation) = detail.operation {
                        record.record_question(operation, detail.correct, now);
                    }
                }
            }
            GameType::Word => {
                for detail in details {
                    if detail.correct {
                        continue;
                    }
                    if let Some(word) = &detail.word {
                        record.record_missed_word(word);
                    }
                }
            }
            GameType::Memory => {}
        }
    }

    let session_accuracy = accuracy_percentage(
        u64::from(submission.correct_answers),
        u64::from(submission.questions_answered),
    );
    record.log_session(SessionSummary {
        score: submission.score,
        accuracy: session_accuracy,
        questions_answered: submission.questions_answered,
        played_at: now,
    });

    let leveled_up = record.ready_to_level_up();
    if leveled_up {
        record.level_up();
    }

    SessionOutcome {
        leveled_up,
        session_accuracy,
    }
}
