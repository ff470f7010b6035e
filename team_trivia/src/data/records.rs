//! Normalized records handed from the loader to the game engine.

use serde::{Deserialize, Serialize};

use crate::game::{Team, TeamId};

/// Team as supplied by the data file. Ids and scores aren't part of the
/// record; the engine assigns the fixed ids and starts scores at zero.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TeamRecord {
    pub name: String,
    pub members: Vec<String>,
}

impl TeamRecord {
    pub fn new(name: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }
}

impl From<TeamId> for TeamRecord {
    fn from(id: TeamId) -> Self {
        Self::new(Team::default_name(id), Vec::new())
    }
}

/// A question that passed validation: every required field is present
/// and non-empty.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct QuestionRecord {
    pub id: String,
    pub category: String,
    pub prompt: String,
    pub answer: String,
    pub notes: String,
}

/// Everything the engine needs to start a game.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GameData {
    pub teams: [TeamRecord; 2],
    /// Source order, which also fixes category and question order.
    pub questions: Vec<QuestionRecord>,
}

impl Default for GameData {
    fn default() -> Self {
        Self {
            teams: [TeamId::A.into(), TeamId::B.into()],
            questions: Vec::new(),
        }
    }
}
