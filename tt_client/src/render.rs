//! Plain-text rendering of the read-only game state.
//!
//! Nothing here mutates the game; every view is built from shared
//! references to the engine.

use std::fmt;
use team_trivia::{Screen, Team, TeamId, TriviaGame};

/// Borrowed view of the whole game, rendered according to the current
/// screen.
pub struct GameView<'a>(pub &'a TriviaGame);

impl fmt::Display for GameView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.0;
        let state = game.state();
        writeln!(f, "== {} ==", state.screen)?;

        match state.screen {
            Screen::Intro => writeln!(f, "Enter the access code with 'code SECRET'.")?,
            Screen::Setup => {
                for team in &state.teams {
                    write_roster(f, team)?;
                }
                writeln!(f, "Type 'start' when both teams are named.")?;
            }
            Screen::Grid => {
                write_scoreboard(f, game)?;
                writeln!(f, "{} to choose:", state.choosing_team().name)?;
                for summary in game.categories() {
                    if summary.disabled {
                        writeln!(f, "  {} (done)", summary.name)?;
                    } else {
                        writeln!(f, "  {} [{} left]", summary.name, summary.remaining_count)?;
                    }
                }
            }
            Screen::Question => write_question(f, game)?,
            Screen::End => {
                write_scoreboard(f, game)?;
                match game.winner() {
                    Some(team) => writeln!(f, "{} wins!", team.name)?,
                    None => writeln!(f, "It's a tie!")?,
                }
            }
            Screen::Error => writeln!(
                f,
                "The game data couldn't be loaded. Check the teams and questions files."
            )?,
        }

        if state.editing_scores {
            write_score_edit(f, game)?;
        }
        Ok(())
    }
}

fn write_roster(f: &mut fmt::Formatter<'_>, team: &Team) -> fmt::Result {
    let name = if team.name.is_empty() {
        "(unnamed)"
    } else {
        team.name.as_str()
    };
    writeln!(f, "{} [{}]", name, team.id)?;
    for (index, member) in team.members.iter().enumerate() {
        writeln!(f, "  {index}: {member}")?;
    }
    Ok(())
}

fn write_scoreboard(f: &mut fmt::Formatter<'_>, game: &TriviaGame) -> fmt::Result {
    let a = game.team(TeamId::A);
    let b = game.team(TeamId::B);
    writeln!(f, "{} {} - {} {}", a.name, a.score, b.score, b.name)
}

fn write_question(f: &mut fmt::Formatter<'_>, game: &TriviaGame) -> fmt::Result {
    let state = game.state();
    write_scoreboard(f, game)?;

    if let Some(question) = game.current_question() {
        writeln!(f, "[{}] {}", question.category, question.prompt)?;
        if state.show_answer {
            writeln!(f, "Answer: {}", question.answer)?;
            if !question.notes.is_empty() {
                writeln!(f, "Notes: {}", question.notes)?;
            }
        }
    }

    match state.current_wager {
        Some(wager) => writeln!(f, "Wager: {wager}")?,
        None => writeln!(f, "Wager: choose 5, 10, or 15")?,
    }
    let answering = state.answering_team();
    if state.has_passed {
        writeln!(f, "Passed to {}", answering.name)?;
    } else {
        writeln!(f, "{} is answering", answering.name)?;
    }
    Ok(())
}

fn write_score_edit(f: &mut fmt::Formatter<'_>, game: &TriviaGame) -> fmt::Result {
    writeln!(f, "-- editing scores ('save' or 'cancel') --")?;
    for (key, value) in &game.state().temp_scores {
        let label = game
            .team_by_key(key)
            .map_or(key.as_str(), |team| team.name.as_str());
        writeln!(f, "  {label}: {value}")?;
    }
    Ok(())
}
