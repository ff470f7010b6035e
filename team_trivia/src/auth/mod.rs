//! Access gate in front of team setup.
//!
//! The gate only ever yields a boolean; the game engine consumes it through
//! [`TriviaGame::begin_setup`](crate::TriviaGame::begin_setup).
//!
//! ## Example
//!
//! ```
//! use team_trivia::auth::AccessGate;
//!
//! let mut gate = AccessGate::default();
//! assert!(!gate.authenticate("wrong code"));
//! assert!(!gate.is_authenticated());
//! ```

pub mod access;
pub mod errors;

pub use access::{AccessGate, DEFAULT_ACCESS_HASH};
pub use errors::{AccessError, AccessResult};
