use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::{
    constants::{DEFAULT_TEAM_A_NAME, DEFAULT_TEAM_B_NAME, TEAM_A_ID, TEAM_B_ID},
    state_machine::GameError,
};
use crate::data::QuestionRecord;

/// Type alias for team scores. Scores can be edited by hand, so they're
/// allowed to go negative.
pub type Points = i64;

/// One of the two fixed team identities. A game always has exactly one
/// team for each variant.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum TeamId {
    #[serde(rename = "team-a")]
    A,
    #[serde(rename = "team-b")]
    B,
}

impl TeamId {
    pub const ALL: [TeamId; 2] = [TeamId::A, TeamId::B];

    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => TEAM_A_ID,
            Self::B => TEAM_B_ID,
        }
    }

    /// Position of the team in the game's team pair.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TeamId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            TEAM_A_ID => Ok(Self::A),
            TEAM_B_ID => Ok(Self::B),
            other => Err(GameError::UnknownTeam(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Member names in the order they were entered.
    pub members: Vec<String>,
    pub score: Points,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            id,
            name: name.into(),
            members,
            score: 0,
        }
    }

    /// Whether the team has a name that isn't just whitespace.
    #[must_use]
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    #[must_use]
    pub fn default_name(id: TeamId) -> &'static str {
        match id {
            TeamId::A => DEFAULT_TEAM_A_NAME,
            TeamId::B => DEFAULT_TEAM_B_NAME,
        }
    }
}

impl From<TeamId> for Team {
    fn from(id: TeamId) -> Self {
        Self::new(id, Team::default_name(id), Vec::new())
    }
}

/// The fixed point stakes. Anything else is rejected before it reaches
/// the game state.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Wager {
    Five,
    Ten,
    Fifteen,
}

impl Wager {
    pub const ALL: [Wager; 3] = [Wager::Five, Wager::Ten, Wager::Fifteen];

    #[must_use]
    pub const fn points(self) -> Points {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::Fifteen => 15,
        }
    }
}

impl TryFrom<i64> for Wager {
    type Error = GameError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|wager| wager.points() == value)
            .ok_or(GameError::InvalidWager(value))
    }
}

impl fmt::Display for Wager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.points())
    }
}

/// Which screen the presentation layer should be showing.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Intro,
    Setup,
    Grid,
    Question,
    End,
    /// Only reachable when the startup load fails.
    Error,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Intro => "intro",
            Self::Setup => "setup",
            Self::Grid => "grid",
            Self::Question => "question",
            Self::End => "end",
            Self::Error => "error",
        };
        write!(f, "{repr}")
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Question {
    pub id: String,
    pub category: String,
    pub prompt: String,
    pub answer: String,
    pub notes: String,
    /// Flips to true once the question's cycle completes. Never flips back.
    pub used: bool,
}

impl From<QuestionRecord> for Question {
    fn from(record: QuestionRecord) -> Self {
        Self {
            id: record.id,
            category: record.category,
            prompt: record.prompt,
            answer: record.answer,
            notes: record.notes,
            used: false,
        }
    }
}

/// What the category grid shows for a single category.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub remaining_count: usize,
    pub disabled: bool,
}
