//! Progress ledger service for LearnQuest.
//!
//! Folds submitted play sessions into durable per-user, per-game progress
//! records, decides level-ups, credits the star economy, and serves
//! questions calibrated by the engine. The routing/auth layer calls the
//! [`service::GameService`] operations with an authenticated user identity;
//! persistence hides behind the [`store::GameStore`] trait.

pub mod config;
pub mod error;
pub mod reducer;
pub mod service;
pub mod store;

pub use config::ServiceConfig;
pub use error::{ServiceError, ServiceResult, StoreError, StoreResult};
pub use reducer::{QuestionDetail, SessionSubmission, SubmissionDraft, fold_session};
pub use service::{GameService, Insights, LevelOverride, Question, SubmissionResponse};
pub use store::{GameStore, MemoryStore};
