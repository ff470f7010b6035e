//! Startup data loading.
//!
//! Reads the teams and questions documents, drops malformed question
//! records with a warning, and hands the engine a normalized [`GameData`].
//! The load either succeeds as a whole or fails as a whole.
//!
//! ## Example
//!
//! ```no_run
//! use team_trivia::{TriviaGame, data::load_game_data};
//!
//! #[tokio::main]
//! async fn main() {
//!     let result = load_game_data("teams.json", "questions.json").await;
//!     let game = TriviaGame::from_load(result);
//!     println!("Starting on the {} screen", game.state().screen);
//! }
//! ```

pub mod errors;
pub mod loader;
pub mod records;

pub use errors::{LoadError, LoadResult};
pub use loader::{load_game_data, parse_game_data};
pub use records::{GameData, QuestionRecord, TeamRecord};
