//! Trivia game state machine implementation.
//!
//! Every transition validates its preconditions first and only then
//! commits. A rejected transition returns a [`GameError`] and leaves the
//! game state and question pool exactly as they were.

use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, VecDeque},
    fmt,
};
use thiserror::Error;

use super::entities::{CategorySummary, Points, Question, Screen, Team, TeamId, Wager};
use super::pool::QuestionPool;
use crate::data::{GameData, LoadError};

/// Reasons a transition can be rejected.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum GameError {
    #[error("can't do that on the {actual} screen, need the {expected} screen")]
    WrongScreen { expected: Screen, actual: Screen },
    #[error("access code required")]
    AccessDenied,
    #[error("game data failed to load")]
    LoadFailed,
    #[error("game already in progress")]
    GameAlreadyStarted,
    #[error("both teams need a name")]
    MissingTeamName,
    #[error("a question is already in progress")]
    QuestionInProgress,
    #[error("no questions left in category {0:?}")]
    CategoryUnavailable(String),
    #[error("wager already locked")]
    WagerAlreadyLocked,
    #[error("illegal wager {0}, must be 5, 10, or 15")]
    InvalidWager(i64),
    #[error("lock a wager first")]
    WagerNotLocked,
    #[error("answer already shown")]
    AnswerAlreadyShown,
    #[error("question already passed")]
    AlreadyPassed,
    #[error("can only end without points after a pass")]
    NotPassed,
    #[error("team {0:?} does not exist")]
    UnknownTeam(String),
    #[error("member index {0} out of bounds")]
    InvalidMemberIndex(usize),
    #[error("already editing scores")]
    AlreadyEditingScores,
    #[error("not editing scores")]
    NotEditingScores,
    #[error("{0:?} is not a whole number")]
    InvalidScore(String),
    #[error("{0} score would overflow")]
    ScoreOverflow(TeamId),
}

/// Things that happened as a result of successful transitions, queued for
/// the presentation layer.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum GameEvent {
    SetupStarted,
    GameStarted { first: TeamId },
    CategorySelected { category: String, question_id: String },
    WagerLocked(Wager),
    AnswerRevealed,
    Passed { to: TeamId },
    PointsAwarded { team: TeamId, points: Points },
    NoPoints,
    GameOver { winner: Option<TeamId> },
    ScoresEdited,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::SetupStarted => "team setup started".to_string(),
            Self::GameStarted { first } => format!("game started, {first} chooses first"),
            Self::CategorySelected {
                category,
                question_id,
            } => format!("{category} picked, question {question_id}"),
            Self::WagerLocked(wager) => format!("wager locked at {wager}"),
            Self::AnswerRevealed => "answer revealed".to_string(),
            Self::Passed { to } => format!("passed to {to}"),
            Self::PointsAwarded { team, points } => format!("{team} won {points} points"),
            Self::NoPoints => "no points awarded".to_string(),
            Self::GameOver { winner: Some(team) } => format!("game over, {team} wins"),
            Self::GameOver { winner: None } => "game over, it's a tie".to_string(),
            Self::ScoresEdited => "scores edited".to_string(),
        };
        write!(f, "{repr}")
    }
}

/// The single mutable aggregate behind a game. The presentation layer only
/// ever sees it by shared reference.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GameState {
    pub screen: Screen,
    /// Indexed by [`TeamId::index`].
    pub teams: [Team; 2],
    /// Team entitled to pick the next category. Flips after every
    /// completed question.
    pub choosing_team_id: TeamId,
    /// Only set after a pass, and then always the non-choosing team.
    pub answering_team_id: Option<TeamId>,
    pub current_category: Option<String>,
    pub current_question_id: Option<String>,
    /// Locked once per question; only the completion routine clears it.
    pub current_wager: Option<Wager>,
    pub has_passed: bool,
    pub show_answer: bool,
    /// Team names and members are frozen once this is set.
    pub game_started: bool,
    pub editing_scores: bool,
    /// Shadow copy of the scores while editing. Keyed by raw team id so
    /// callers may write keys that don't name a team; only the two fixed
    /// ids are read back on save.
    pub temp_scores: BTreeMap<String, Points>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_teams(Team::from(TeamId::A), Team::from(TeamId::B))
    }
}

impl GameState {
    #[must_use]
    pub fn with_teams(team_a: Team, team_b: Team) -> Self {
        Self {
            screen: Screen::Intro,
            teams: [team_a, team_b],
            choosing_team_id: TeamId::A,
            answering_team_id: None,
            current_category: None,
            current_question_id: None,
            current_wager: None,
            has_passed: false,
            show_answer: false,
            game_started: false,
            editing_scores: false,
            temp_scores: TeamId::ALL
                .iter()
                .map(|id| (id.as_str().to_string(), 0))
                .collect(),
        }
    }

    #[must_use]
    pub fn team(&self, id: TeamId) -> &Team {
        &self.teams[id.index()]
    }

    pub(crate) fn team_mut(&mut self, id: TeamId) -> &mut Team {
        &mut self.teams[id.index()]
    }

    /// Look a team up by its raw id. Unknown ids aren't an error here.
    #[must_use]
    pub fn team_by_key(&self, key: &str) -> Option<&Team> {
        self.teams.iter().find(|team| team.id.as_str() == key)
    }

    #[must_use]
    pub fn other_team(&self, id: TeamId) -> &Team {
        self.team(id.other())
    }

    #[must_use]
    pub fn choosing_team(&self) -> &Team {
        self.team(self.choosing_team_id)
    }

    /// The team currently allowed to answer: the passed-to team after a
    /// pass, otherwise the choosing team.
    #[must_use]
    pub fn answering_team(&self) -> &Team {
        self.team(self.answering_team_id.unwrap_or(self.choosing_team_id))
    }

    /// Clear everything tied to the question in flight.
    pub fn reset_question(&mut self) {
        self.current_category = None;
        self.current_question_id = None;
        self.current_wager = None;
        self.has_passed = false;
        self.show_answer = false;
        self.answering_team_id = None;
    }
}

/// Reject with `err` unless `condition` holds.
pub(crate) fn ensure(condition: bool, err: GameError) -> Result<(), GameError> {
    if condition {
        Ok(())
    } else {
        debug!("transition rejected: {err}");
        Err(err)
    }
}

pub(crate) fn ensure_screen(actual: Screen, expected: Screen) -> Result<(), GameError> {
    ensure(actual == expected, GameError::WrongScreen { expected, actual })
}

/// Nothing past the error screen is reachable after a failed load.
pub(crate) fn ensure_loaded(screen: Screen) -> Result<(), GameError> {
    ensure(screen != Screen::Error, GameError::LoadFailed)
}

/// A trivia game end-to-end: state, question pool, and the transition
/// functions that are the only way to change either.
#[derive(Debug, Default)]
pub struct TriviaGame {
    pub(crate) state: GameState,
    pub(crate) pool: QuestionPool,
    pub(crate) events: VecDeque<GameEvent>,
}

impl TriviaGame {
    #[must_use]
    pub fn new(data: GameData) -> Self {
        let [team_a, team_b] = data.teams;
        let state = GameState::with_teams(
            Team::new(TeamId::A, team_a.name, team_a.members),
            Team::new(TeamId::B, team_b.name, team_b.members),
        );
        Self {
            state,
            pool: QuestionPool::from_records(data.questions),
            events: VecDeque::new(),
        }
    }

    /// Build a game from the outcome of the startup load. A failed load
    /// lands on the error screen with nothing else reachable.
    #[must_use]
    pub fn from_load(result: Result<GameData, LoadError>) -> Self {
        match result {
            Ok(data) => Self::new(data),
            Err(err) => {
                error!("failed to load game data: {err}");
                let mut game = Self::default();
                game.state.screen = Screen::Error;
                game
            }
        }
    }

    /// Restore the full default state, including an empty question pool.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn pool(&self) -> &QuestionPool {
        &self.pool
    }

    #[must_use]
    pub fn team(&self, id: TeamId) -> &Team {
        self.state.team(id)
    }

    #[must_use]
    pub fn team_by_key(&self, key: &str) -> Option<&Team> {
        self.state.team_by_key(key)
    }

    /// The question in flight, if both its category and id are set and
    /// match a pool entry.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match (&self.state.current_category, &self.state.current_question_id) {
            (Some(category), Some(id)) => self.pool.get(category, id),
            _ => None,
        }
    }

    #[must_use]
    pub fn categories(&self) -> Vec<CategorySummary> {
        self.pool.summaries()
    }

    #[must_use]
    pub fn is_game_complete(&self) -> bool {
        self.pool.is_exhausted()
    }

    pub fn drain_events(&mut self) -> VecDeque<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn begin_setup(&mut self, access_granted: bool) -> Result<(), GameError> {
        ensure_screen(self.state.screen, Screen::Intro)?;
        ensure(access_granted, GameError::AccessDenied)?;

        self.state.screen = Screen::Setup;
        self.events.push_back(GameEvent::SetupStarted);
        Ok(())
    }

    pub fn start_game(&mut self) -> Result<(), GameError> {
        ensure_loaded(self.state.screen)?;
        ensure(!self.state.game_started, GameError::GameAlreadyStarted)?;
        ensure(
            self.state.teams.iter().all(Team::has_name),
            GameError::MissingTeamName,
        )?;

        self.state.game_started = true;
        self.state.screen = Screen::Grid;
        self.state.choosing_team_id = TeamId::A;
        info!(
            "game started: {} vs {}",
            self.state.teams[0].name, self.state.teams[1].name
        );
        self.events
            .push_back(GameEvent::GameStarted { first: TeamId::A });
        Ok(())
    }

    pub fn select_category(&mut self, name: &str) -> Result<(), GameError> {
        ensure_screen(self.state.screen, Screen::Grid)?;
        ensure(
            self.state.current_category.is_none(),
            GameError::QuestionInProgress,
        )?;
        let question_id = match self.pool.next_question(name) {
            Some(question) => question.id.clone(),
            None => {
                return ensure(false, GameError::CategoryUnavailable(name.to_string()));
            }
        };

        self.state.reset_question();
        self.state.current_category = Some(name.to_string());
        self.state.current_question_id = Some(question_id.clone());
        self.state.screen = Screen::Question;
        self.events.push_back(GameEvent::CategorySelected {
            category: name.to_string(),
            question_id,
        });
        Ok(())
    }

    pub fn select_wager(&mut self, value: i64) -> Result<(), GameError> {
        ensure_screen(self.state.screen, Screen::Question)?;
        ensure(
            self.state.current_wager.is_none(),
            GameError::WagerAlreadyLocked,
        )?;
        let wager =
            Wager::try_from(value).inspect_err(|err| debug!("transition rejected: {err}"))?;

        self.state.current_wager = Some(wager);
        self.events.push_back(GameEvent::WagerLocked(wager));
        Ok(())
    }

    pub fn reveal_answer(&mut self) -> Result<(), GameError> {
        ensure_screen(self.state.screen, Screen::Question)?;
        ensure(self.state.current_wager.is_some(), GameError::WagerNotLocked)?;
        ensure(!self.state.show_answer, GameError::AnswerAlreadyShown)?;

        self.state.show_answer = true;
        self.events.push_back(GameEvent::AnswerRevealed);
        Ok(())
    }

    pub fn pass_question(&mut self) -> Result<(), GameError> {
        ensure_screen(self.state.screen, Screen::Question)?;
        ensure(self.state.current_wager.is_some(), GameError::WagerNotLocked)?;
        ensure(!self.state.has_passed, GameError::AlreadyPassed)?;

        let to = self.state.choosing_team_id.other();
        self.state.has_passed = true;
        self.state.answering_team_id = Some(to);
        self.events.push_back(GameEvent::Passed { to });
        Ok(())
    }

    /// Award the locked wager to whoever is answering and close the
    /// question. Doesn't require a prior pass.
    pub fn mark_correct(&mut self) -> Result<(), GameError> {
        ensure_screen(self.state.screen, Screen::Question)?;
        let wager = match self.state.current_wager {
            Some(wager) => wager,
            None => return ensure(false, GameError::WagerNotLocked),
        };

        let team = self.state.answering_team().id;
        let score = match self.state.team(team).score.checked_add(wager.points()) {
            Some(score) => score,
            None => return ensure(false, GameError::ScoreOverflow(team)),
        };

        self.state.team_mut(team).score = score;
        self.events.push_back(GameEvent::PointsAwarded {
            team,
            points: wager.points(),
        });
        self.complete_question();
        Ok(())
    }

    /// Close the question without scoring. Only allowed after a pass.
    pub fn end_no_points(&mut self) -> Result<(), GameError> {
        ensure_screen(self.state.screen, Screen::Question)?;
        ensure(self.state.current_wager.is_some(), GameError::WagerNotLocked)?;
        ensure(self.state.has_passed, GameError::NotPassed)?;

        self.events.push_back(GameEvent::NoPoints);
        self.complete_question();
        Ok(())
    }

    /// Shared tail of `mark_correct` and `end_no_points`.
    fn complete_question(&mut self) {
        if let (Some(category), Some(id)) = (
            self.state.current_category.take(),
            self.state.current_question_id.take(),
        ) {
            self.pool.mark_used(&category, &id);
        }

        self.state.reset_question();
        self.state.choosing_team_id = self.state.choosing_team_id.other();

        if self.pool.is_exhausted() {
            self.state.screen = Screen::End;
            let winner = self.winner().map(|team| team.id);
            info!(
                "game over: {} {} - {} {}",
                self.state.teams[0].name,
                self.state.teams[0].score,
                self.state.teams[1].score,
                self.state.teams[1].name
            );
            self.events.push_back(GameEvent::GameOver { winner });
        } else {
            self.state.screen = Screen::Grid;
        }
    }

    pub fn update_team_name(
        &mut self,
        team: TeamId,
        name: impl Into<String>,
    ) -> Result<(), GameError> {
        ensure_loaded(self.state.screen)?;
        ensure(!self.state.game_started, GameError::GameAlreadyStarted)?;

        self.state.team_mut(team).name = name.into();
        Ok(())
    }

    pub fn add_team_member(
        &mut self,
        team: TeamId,
        member: impl Into<String>,
    ) -> Result<(), GameError> {
        ensure_loaded(self.state.screen)?;
        ensure(!self.state.game_started, GameError::GameAlreadyStarted)?;

        self.state.team_mut(team).members.push(member.into());
        Ok(())
    }

    pub fn remove_team_member(&mut self, team: TeamId, index: usize) -> Result<(), GameError> {
        ensure_loaded(self.state.screen)?;
        ensure(!self.state.game_started, GameError::GameAlreadyStarted)?;
        ensure(
            index < self.state.team(team).members.len(),
            GameError::InvalidMemberIndex(index),
        )?;

        self.state.team_mut(team).members.remove(index);
        Ok(())
    }

    pub fn update_team_member(
        &mut self,
        team: TeamId,
        index: usize,
        member: impl Into<String>,
    ) -> Result<(), GameError> {
        ensure_loaded(self.state.screen)?;
        ensure(!self.state.game_started, GameError::GameAlreadyStarted)?;
        ensure(
            index < self.state.team(team).members.len(),
            GameError::InvalidMemberIndex(index),
        )?;

        self.state.team_mut(team).members[index] = member.into();
        Ok(())
    }
}
