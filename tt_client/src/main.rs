//! A terminal host for a two-team trivia game.
//!
//! The host loads the teams and questions, then reads one command per line
//! from stdin and prints the game after every accepted command.

use anyhow::{Context, Result};
use ctrlc::set_handler;
use log::{info, warn};
use pico_args::Arguments;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

use team_trivia::{TriviaGame, auth::AccessGate, load_game_data};
use tt_client::{
    commands::parse_command,
    config::{ClientConfig, ConfigOverrides},
    render::GameView,
    session::{Flow, Session},
};

const HELP: &str = "\
Host a two-team trivia game

USAGE:
  tt_client [OPTIONS]

OPTIONS:
  --teams        PATH     Teams JSON file      [default: env TRIVIA_TEAMS_PATH or teams.json]
  --questions    PATH     Questions JSON file  [default: env TRIVIA_QUESTIONS_PATH or questions.json]
  --access-hash  HEX      SHA-256 digest of the access code  [default: env TRIVIA_ACCESS_HASH or built in]

FLAGS:
  --skip-access           Open team setup without an access code
  -h, --help              Print help information

ENVIRONMENT:
  TRIVIA_TEAMS_PATH       Teams JSON file
  TRIVIA_QUESTIONS_PATH   Questions JSON file
  TRIVIA_ACCESS_HASH      SHA-256 digest of the access code
  TRIVIA_SKIP_ACCESS      Set to true to skip the access code
";

const COMMANDS: &str = "\
code SECRET
        Enter the access code and open team setup.
begin
        Open team setup when the access code is skipped.
name a|b NAME
        Rename a team. Only before the game starts.
add a|b NAME
        Add a member to a team.
remove a|b INDEX
        Remove the member at INDEX.
member a|b INDEX NAME
        Rename the member at INDEX.
start
        Start the game. Team A chooses first.
pick CATEGORY
        Choose a category from the grid.
wager 5|10|15
        Lock the wager for the current question.
reveal
        Show the answer.
pass
        Pass the question to the other team.
correct
        Award the wager to the answering team.
nopoints
        End a passed question without awarding points.
edit
        Start editing scores.
score a|b VALUE
        Set a shadow score while editing.
save | cancel
        Apply or discard the edited scores.
show
        Print the game again.
help
        Print this list.
quit
        Leave the game.
";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let overrides = ConfigOverrides {
        teams_path: pargs.opt_value_from_str::<_, PathBuf>("--teams")?,
        questions_path: pargs.opt_value_from_str::<_, PathBuf>("--questions")?,
        access_hash: pargs.opt_value_from_str("--access-hash")?,
        skip_access: pargs.contains("--skip-access"),
    };

    // Catching signals for exit.
    set_handler(|| std::process::exit(0))?;

    env_logger::builder().format_target(false).init();

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        warn!("Ignoring unknown arguments: {remaining:?}");
    }

    let config = ClientConfig::from_env(overrides)?;
    let gate = AccessGate::new(&config.access_hash).context("Invalid access hash")?;

    info!(
        "Loading teams from {} and questions from {}",
        config.teams_path.display(),
        config.questions_path.display()
    );
    let game = TriviaGame::from_load(
        load_game_data(&config.teams_path, &config.questions_path).await,
    );

    run(Session::new(game, gate, config.skip_access)).await
}

async fn run(mut session: Session) -> Result<()> {
    println!("{}", GameView(session.game()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match session.execute(command) {
            Ok(Flow::Continue) => {
                for event in session.drain_events() {
                    println!("* {event}");
                }
                println!("{}", GameView(session.game()));
            }
            Ok(Flow::Help) => print!("{COMMANDS}"),
            Ok(Flow::Quit) => break,
            Err(e) => println!("Rejected: {e}"),
        }
    }

    info!("Goodbye");
    Ok(())
}
