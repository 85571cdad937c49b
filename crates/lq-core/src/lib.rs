//! Core types for LearnQuest: game enumerations and the progress ledger.
//!
//! This crate defines the data model shared by the question generators and
//! the progress service. The serialized field names and enumeration strings
//! are the document-store contract inherited from the original deployment
//! and must not change.

/// Game type, difficulty, operation, and theme enumerations.
pub mod game;
/// The durable per-user, per-game progress record.
pub mod progress;
/// User identifiers.
pub mod user;

/// Re-export game enumerations.
pub use game::{Difficulty, GameType, Operation, Theme};
/// Re-export progress ledger types.
pub use progress::{ProgressRecord, QuestionRecord, SessionSummary, accuracy_percentage};
/// Re-export user identifier.
pub use user::UserId;
