//! Glue between parsed commands, the access gate, and the engine.

use log::info;
use team_trivia::{GameError, GameEvent, Screen, TriviaGame, auth::AccessGate};

use crate::commands::Command;

/// What the input loop should do after a command.
#[derive(Debug, Eq, PartialEq)]
pub enum Flow {
    Continue,
    /// Print the command help.
    Help,
    Quit,
}

/// One host session: the engine plus the gate in front of setup.
pub struct Session {
    game: TriviaGame,
    gate: AccessGate,
    skip_access: bool,
}

impl Session {
    #[must_use]
    pub fn new(game: TriviaGame, gate: AccessGate, skip_access: bool) -> Self {
        Self {
            game,
            gate,
            skip_access,
        }
    }

    #[must_use]
    pub fn game(&self) -> &TriviaGame {
        &self.game
    }

    /// Events produced since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.game.drain_events().into()
    }

    /// Apply one command.
    ///
    /// # Errors
    ///
    /// Returns the engine's rejection unchanged. A rejected command leaves
    /// the game exactly as it was.
    pub fn execute(&mut self, command: Command) -> Result<Flow, GameError> {
        if command.is_setup_only() {
            self.ensure_setup_screen()?;
        }

        match command {
            Command::Code(code) => {
                let granted = self.gate.authenticate(&code);
                self.game.begin_setup(granted)?;
                info!("access granted");
            }
            Command::Begin => {
                let granted = self.skip_access || self.gate.is_authenticated();
                self.game.begin_setup(granted)?;
            }
            Command::Rename(team, name) => self.game.update_team_name(team, name)?,
            Command::AddMember(team, member) => self.game.add_team_member(team, member)?,
            Command::RemoveMember(team, index) => self.game.remove_team_member(team, index)?,
            Command::UpdateMember(team, index, member) => {
                self.game.update_team_member(team, index, member)?;
            }
            Command::Start => self.game.start_game()?,
            Command::Pick(category) => self.game.select_category(&category)?,
            Command::Wager(value) => self.game.select_wager(value)?,
            Command::Reveal => self.game.reveal_answer()?,
            Command::Pass => self.game.pass_question()?,
            Command::Correct => self.game.mark_correct()?,
            Command::NoPoints => self.game.end_no_points()?,
            Command::EditScores => self.game.start_score_edit()?,
            Command::Score(key, raw) => self.game.update_temp_score(&key, &raw)?,
            Command::SaveScores => self.game.save_score_edit()?,
            Command::CancelScores => self.game.cancel_score_edit()?,
            Command::Show => {}
            Command::Help => return Ok(Flow::Help),
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    // Team edits and the start button live on the setup screen, which is
    // only reachable through the access gate.
    fn ensure_setup_screen(&self) -> Result<(), GameError> {
        let actual = self.game.state().screen;
        if actual == Screen::Setup {
            Ok(())
        } else {
            Err(GameError::WrongScreen {
                expected: Screen::Setup,
                actual,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use team_trivia::{GameData, QuestionRecord, TeamId};

    // SHA-256 of "abc"
    const ABC_HASH: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    fn session(skip_access: bool) -> Session {
        let game = TriviaGame::new(GameData {
            questions: vec![QuestionRecord {
                id: "q1".to_string(),
                category: "History".to_string(),
                prompt: "?".to_string(),
                answer: "!".to_string(),
                notes: String::new(),
            }],
            ..GameData::default()
        });
        Session::new(game, AccessGate::new(ABC_HASH).unwrap(), skip_access)
    }

    #[test]
    fn test_wrong_code_stays_on_intro() {
        let mut session = session(false);
        assert_eq!(
            session.execute(Command::Code("nope".to_string())),
            Err(GameError::AccessDenied)
        );
        assert_eq!(session.game().state().screen, Screen::Intro);
    }

    #[test]
    fn test_code_opens_setup() {
        let mut session = session(false);
        assert_eq!(
            session.execute(Command::Code(" ABC ".to_string())),
            Ok(Flow::Continue)
        );
        assert_eq!(session.game().state().screen, Screen::Setup);
        assert_eq!(session.drain_events(), [GameEvent::SetupStarted]);
    }

    #[test]
    fn test_begin_requires_skip_or_code() {
        let mut locked = session(false);
        assert_eq!(locked.execute(Command::Begin), Err(GameError::AccessDenied));

        let mut open = session(true);
        assert_eq!(open.execute(Command::Begin), Ok(Flow::Continue));
        assert_eq!(open.game().state().screen, Screen::Setup);
    }

    #[test]
    fn test_commands_drive_a_question() {
        let mut session = session(true);
        for command in [
            Command::Begin,
            Command::Rename(TeamId::A, "Owls".to_string()),
            Command::Start,
            Command::Pick("History".to_string()),
            Command::Wager(15),
            Command::Reveal,
            Command::Correct,
        ] {
            session.execute(command).unwrap();
        }
        assert_eq!(session.game().team(TeamId::A).name, "Owls");
        assert_eq!(session.game().team(TeamId::A).score, 15);
        assert_eq!(session.game().state().screen, Screen::End);
    }

    #[test]
    fn test_setup_commands_need_setup_screen() {
        let mut session = session(false);
        for command in [
            Command::Start,
            Command::Rename(TeamId::A, "Owls".to_string()),
            Command::AddMember(TeamId::B, "Alice".to_string()),
        ] {
            assert_eq!(
                session.execute(command),
                Err(GameError::WrongScreen {
                    expected: Screen::Setup,
                    actual: Screen::Intro,
                })
            );
        }
        assert_eq!(session.game().state().screen, Screen::Intro);
        assert!(!session.game().state().game_started);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_loop_control_commands() {
        let mut session = session(true);
        assert_eq!(session.execute(Command::Show), Ok(Flow::Continue));
        assert_eq!(session.execute(Command::Help), Ok(Flow::Help));
        assert_eq!(session.execute(Command::Quit), Ok(Flow::Quit));
    }
}
