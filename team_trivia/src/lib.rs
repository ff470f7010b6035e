//! # Team Trivia
//!
//! A two-team, turn-based trivia game implemented as a validate-then-commit
//! state machine.
//!
//! The engine owns a single [`GameState`] and a [`QuestionPool`]. The
//! presentation layer reads both by shared reference and routes every change
//! through the transition functions on [`TriviaGame`]. A rejected transition
//! returns a [`GameError`] and changes nothing.
//!
//! ## Game flow
//!
//! The game moves through these screens:
//!
//! - **Intro**: Waiting for the access gate
//! - **Setup**: Naming teams and members
//! - **Grid**: The choosing team picks a category
//! - **Question**: Wager, optional pass, reveal, and resolution
//! - **End**: Every question has been played
//! - **Error**: The startup load failed
//!
//! Each question cycle runs category → wager → (pass) → correct / no points,
//! after which the choosing team flips.
//!
//! ## Core Modules
//!
//! - [`game`]: Entities, question pool, and the rules state machine
//! - [`data`]: Loading teams and questions from JSON
//! - [`auth`]: Access code gate in front of setup
//!
//! ## Example
//!
//! ```
//! use team_trivia::{GameData, QuestionRecord, Screen, TeamId, TriviaGame};
//!
//! let mut game = TriviaGame::new(GameData {
//!     questions: vec![QuestionRecord {
//!         id: "q1".to_string(),
//!         category: "History".to_string(),
//!         prompt: "Year the Berlin Wall fell?".to_string(),
//!         answer: "1989".to_string(),
//!         notes: String::new(),
//!     }],
//!     ..GameData::default()
//! });
//!
//! game.begin_setup(true).unwrap();
//! game.start_game().unwrap();
//! game.select_category("History").unwrap();
//! game.select_wager(10).unwrap();
//! game.mark_correct().unwrap();
//!
//! assert_eq!(game.team(TeamId::A).score, 10);
//! assert_eq!(game.state().screen, Screen::End);
//! ```

/// Access code gate.
pub mod auth;

/// Loading teams and questions.
pub mod data;

/// Core game logic, entities, and state machine.
pub mod game;
pub use game::{
    CategorySummary, GameError, GameEvent, GameState, Points, Question, QuestionPool, Screen,
    Team, TeamId, TriviaGame, Wager, constants,
};

pub use data::{GameData, LoadError, QuestionRecord, TeamRecord, load_game_data};
