//! Manual score corrections and the final result.
//!
//! Editing works on a shadow copy of both scores: start snapshots them,
//! updates only touch the copy, save commits it and cancel throws it away.

use super::entities::{Points, Team, TeamId};
use super::state_machine::{GameError, GameEvent, TriviaGame, ensure, ensure_loaded};

/// Parse the leading integer of `raw`, ignoring surrounding whitespace and
/// anything after the digits. `"12pts"` is 12; `"pts"` is rejected.
pub fn parse_score(raw: &str) -> Option<Points> {
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    trimmed[..sign_len + digits_len].parse().ok()
}

impl TriviaGame {
    pub fn start_score_edit(&mut self) -> Result<(), GameError> {
        ensure_loaded(self.state.screen)?;
        ensure(!self.state.editing_scores, GameError::AlreadyEditingScores)?;

        self.state.editing_scores = true;
        for id in TeamId::ALL {
            let score = self.state.team(id).score;
            self.state.temp_scores.insert(id.as_str().to_string(), score);
        }
        Ok(())
    }

    /// Write a shadow score. `team_key` isn't checked against the real
    /// teams; only `team-a` and `team-b` are read back on save.
    pub fn update_temp_score(&mut self, team_key: &str, raw: &str) -> Result<(), GameError> {
        ensure(self.state.editing_scores, GameError::NotEditingScores)?;
        let score = match parse_score(raw) {
            Some(score) => score,
            None => return ensure(false, GameError::InvalidScore(raw.to_string())),
        };

        self.state.temp_scores.insert(team_key.to_string(), score);
        Ok(())
    }

    pub fn save_score_edit(&mut self) -> Result<(), GameError> {
        ensure(self.state.editing_scores, GameError::NotEditingScores)?;

        for id in TeamId::ALL {
            if let Some(&score) = self.state.temp_scores.get(id.as_str()) {
                self.state.team_mut(id).score = score;
            }
        }
        self.state.editing_scores = false;
        self.events.push_back(GameEvent::ScoresEdited);
        Ok(())
    }

    pub fn cancel_score_edit(&mut self) -> Result<(), GameError> {
        ensure(self.state.editing_scores, GameError::NotEditingScores)?;

        self.state.editing_scores = false;
        Ok(())
    }

    /// The team with the higher score, or `None` on a tie.
    #[must_use]
    pub fn winner(&self) -> Option<&Team> {
        let [team_a, team_b] = &self.state.teams;
        match team_a.score.cmp(&team_b.score) {
            std::cmp::Ordering::Greater => Some(team_a),
            std::cmp::Ordering::Less => Some(team_b),
            std::cmp::Ordering::Equal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score("42"), Some(42));
        assert_eq!(parse_score("  -7 "), Some(-7));
        assert_eq!(parse_score("+3"), Some(3));
        assert_eq!(parse_score("12pts"), Some(12));
        assert_eq!(parse_score("3.9"), Some(3));
        assert_eq!(parse_score(""), None);
        assert_eq!(parse_score("abc"), None);
        assert_eq!(parse_score("-"), None);
        assert_eq!(parse_score("99999999999999999999"), None);
    }

    #[test]
    fn test_start_snapshots_scores() {
        let mut game = TriviaGame::default();
        game.state.teams[0].score = 20;
        game.state.teams[1].score = -5;
        game.start_score_edit().unwrap();
        assert!(game.state().editing_scores);
        assert_eq!(game.state().temp_scores["team-a"], 20);
        assert_eq!(game.state().temp_scores["team-b"], -5);
        assert_eq!(
            game.start_score_edit(),
            Err(GameError::AlreadyEditingScores)
        );
    }

    #[test]
    fn test_cancel_discards_edits() {
        let mut game = TriviaGame::default();
        game.state.teams[0].score = 10;
        game.start_score_edit().unwrap();
        game.update_temp_score("team-a", "99").unwrap();
        game.cancel_score_edit().unwrap();
        assert_eq!(game.team(TeamId::A).score, 10);
        assert!(!game.state().editing_scores);
        assert_eq!(game.cancel_score_edit(), Err(GameError::NotEditingScores));
    }

    #[test]
    fn test_save_commits_last_valid_value() {
        let mut game = TriviaGame::default();
        game.start_score_edit().unwrap();
        game.update_temp_score("team-a", "30").unwrap();
        game.update_temp_score("team-b", "8").unwrap();
        assert_eq!(
            game.update_temp_score("team-b", "eight"),
            Err(GameError::InvalidScore("eight".to_string()))
        );
        game.save_score_edit().unwrap();
        assert_eq!(game.team(TeamId::A).score, 30);
        assert_eq!(game.team(TeamId::B).score, 8);
        assert_eq!(game.save_score_edit(), Err(GameError::NotEditingScores));
    }

    #[test]
    fn test_update_temp_score_accepts_unknown_keys() {
        let mut game = TriviaGame::default();
        game.start_score_edit().unwrap();
        game.update_temp_score("team-z", "50").unwrap();
        assert_eq!(game.state().temp_scores["team-z"], 50);
        game.save_score_edit().unwrap();
        assert_eq!(game.team(TeamId::A).score, 0);
        assert_eq!(game.team(TeamId::B).score, 0);
    }

    #[test]
    fn test_update_temp_score_needs_edit_mode() {
        let mut game = TriviaGame::default();
        assert_eq!(
            game.update_temp_score("team-a", "5"),
            Err(GameError::NotEditingScores)
        );
    }

    #[test]
    fn test_winner() {
        let mut game = TriviaGame::default();
        assert!(game.winner().is_none());
        game.state.teams[1].score = 5;
        assert_eq!(game.winner().unwrap().id, TeamId::B);
        game.state.teams[0].score = 6;
        assert_eq!(game.winner().unwrap().id, TeamId::A);
    }
}
