use std::fmt;
use team_trivia::TeamId;

/// A single line of host input, decoded.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    /// Try an access code and, if it matches, open team setup.
    Code(String),
    /// Open team setup without a code. Only allowed when access is skipped.
    Begin,
    Rename(TeamId, String),
    AddMember(TeamId, String),
    RemoveMember(TeamId, usize),
    UpdateMember(TeamId, usize, String),
    Start,
    Pick(String),
    Wager(i64),
    Reveal,
    Pass,
    Correct,
    NoPoints,
    EditScores,
    /// Raw shadow-score write. The key is passed through untouched apart
    /// from the `a`/`b` shorthands.
    Score(String, String),
    SaveScores,
    CancelScores,
    Show,
    Help,
    Quit,
}

impl Command {
    /// Commands that only make sense while the teams are being set up.
    #[must_use]
    pub fn is_setup_only(&self) -> bool {
        matches!(
            self,
            Self::Start
                | Self::Rename(..)
                | Self::AddMember(..)
                | Self::RemoveMember(..)
                | Self::UpdateMember(..)
        )
    }
}

/// Errors that can occur during command parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A command that needs arguments was given too few.
    MissingArgument {
        command: &'static str,
        usage: &'static str,
    },
    /// Team argument wasn't `a`, `b`, `team-a`, or `team-b`.
    InvalidTeam(String),
    /// Member index wasn't a non-negative number.
    InvalidIndex(String),
    /// Wager wasn't a number.
    InvalidWager(String),
    /// Unrecognized command.
    UnrecognizedCommand(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArgument { command, usage } => {
                write!(f, "'{command}' is missing arguments (e.g., '{usage}')")
            }
            Self::InvalidTeam(value) => {
                write!(f, "Unknown team '{value}'. Use 'a' or 'b'")
            }
            Self::InvalidIndex(value) => write!(
                f,
                "Invalid member index '{value}'. Must be a number starting at 0"
            ),
            Self::InvalidWager(value) => write!(
                f,
                "Invalid wager '{value}'. Must be a number (e.g., 'wager 10')"
            ),
            Self::UnrecognizedCommand(cmd) => write!(
                f,
                "Unrecognized command '{cmd}'. Type 'help' to see available commands"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a command string into a [`Command`].
///
/// Names (team names, member names, categories) take the rest of the line,
/// so they may contain spaces.
///
/// # Examples
///
/// ```
/// use team_trivia::TeamId;
/// use tt_client::commands::{Command, parse_command};
///
/// assert_eq!(parse_command("reveal"), Ok(Command::Reveal));
/// assert_eq!(parse_command("wager 10"), Ok(Command::Wager(10)));
/// assert_eq!(
///     parse_command("name a The Owls"),
///     Ok(Command::Rename(TeamId::A, "The Owls".to_string()))
/// );
/// assert_eq!(
///     parse_command("pick Modern History"),
///     Ok(Command::Pick("Modern History".to_string()))
/// );
/// ```
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();

    // Try single-word commands first
    match trimmed {
        "begin" => return Ok(Command::Begin),
        "start" => return Ok(Command::Start),
        "reveal" => return Ok(Command::Reveal),
        "pass" => return Ok(Command::Pass),
        "correct" => return Ok(Command::Correct),
        "nopoints" => return Ok(Command::NoPoints),
        "edit" => return Ok(Command::EditScores),
        "save" => return Ok(Command::SaveScores),
        "cancel" => return Ok(Command::CancelScores),
        "show" | "" => return Ok(Command::Show),
        "help" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let (word, rest) = split_word(trimmed);
    match word {
        "code" => Ok(Command::Code(require(rest, "code", "code SECRET")?.to_string())),
        "name" => {
            let (team, name) = parse_team_and_rest(rest, "name", "name a The Owls")?;
            Ok(Command::Rename(team, name.to_string()))
        }
        "add" => {
            let (team, member) = parse_team_and_rest(rest, "add", "add a Alice")?;
            Ok(Command::AddMember(team, require(member, "add", "add a Alice")?.to_string()))
        }
        "remove" => {
            let (team, index) = parse_team_and_rest(rest, "remove", "remove a 0")?;
            Ok(Command::RemoveMember(
                team,
                parse_index(require(index, "remove", "remove a 0")?)?,
            ))
        }
        "member" => {
            let (team, rest) = parse_team_and_rest(rest, "member", "member a 0 Alice")?;
            let (index, member) = split_word(rest);
            let index = parse_index(require(index, "member", "member a 0 Alice")?)?;
            Ok(Command::UpdateMember(team, index, member.to_string()))
        }
        "pick" => Ok(Command::Pick(
            require(rest, "pick", "pick History")?.to_string(),
        )),
        "wager" => {
            let value = require(rest, "wager", "wager 10")?;
            value
                .parse::<i64>()
                .map(Command::Wager)
                .map_err(|_| ParseError::InvalidWager(value.to_string()))
        }
        "score" => {
            let (key, value) = split_word(rest);
            require(value, "score", "score a 25")?;
            Ok(Command::Score(team_key(key), value.to_string()))
        }
        _ => Err(ParseError::UnrecognizedCommand(trimmed.to_string())),
    }
}

/// Split off the first whitespace-delimited word.
fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (input, ""),
    }
}

fn require<'a>(
    value: &'a str,
    command: &'static str,
    usage: &'static str,
) -> Result<&'a str, ParseError> {
    if value.is_empty() {
        Err(ParseError::MissingArgument { command, usage })
    } else {
        Ok(value)
    }
}

fn parse_team(value: &str) -> Result<TeamId, ParseError> {
    team_key(value)
        .parse()
        .map_err(|_| ParseError::InvalidTeam(value.to_string()))
}

/// Parse "TEAM REST..." where REST may be empty.
fn parse_team_and_rest<'a>(
    input: &'a str,
    command: &'static str,
    usage: &'static str,
) -> Result<(TeamId, &'a str), ParseError> {
    let (team, rest) = split_word(input);
    let team = parse_team(require(team, command, usage)?)?;
    Ok((team, rest))
}

fn parse_index(value: &str) -> Result<usize, ParseError> {
    value
        .parse()
        .map_err(|_| ParseError::InvalidIndex(value.to_string()))
}

/// Expand the `a`/`b` shorthands to full team ids.
fn team_key(value: &str) -> String {
    match value {
        "a" | "A" => TeamId::A.as_str().to_string(),
        "b" | "B" => TeamId::B.as_str().to_string(),
        other => other.to_string(),
    }
}
