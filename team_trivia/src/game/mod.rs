//! Trivia game engine - rules state machine and question pool.
//!
//! This module provides:
//! - Closed entity types (teams, wagers, screens, questions)
//! - The per-category question pool
//! - Validate-then-commit transition functions on [`TriviaGame`]
//! - The score-edit flow and winner calculation

pub mod constants;
pub mod entities;
pub mod pool;
pub mod scoring;
pub mod state_machine;

pub use entities::{CategorySummary, Points, Question, Screen, Team, TeamId, Wager};
pub use pool::{Category, QuestionPool};
pub use state_machine::{GameError, GameEvent, GameState, TriviaGame};
