//! Wyrdl - CLI
//!
//! Guess the secret five-letter word in six tries, in a line-based console or a full-screen TUI.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::process::ExitCode;
use wyrdl::{
    commands::{classify_words, run_simple},
    output::print_classify_result,
    wordlists::WordList,
};

#[derive(Debug, Parser)]
#[command(
    name = "wyrdl",
    about = "Guess the secret five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for choosing the secret, to replay the same game
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Disable colored output (NO_COLOR is honoured too)
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Line-based game in the terminal (default)
    Simple,

    /// Full-screen interactive TUI game
    Play,

    /// Show the feedback a guess gets against a given secret
    Classify {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("Command line options: {cli:?}");

    if cli.no_color {
        colored::control::set_override(false);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format!("{err:#}").red().on_yellow());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Default to the line-based game if no command given
    match cli.command.unwrap_or(Commands::Simple) {
        Commands::Simple => run_simple_command(cli.wordlist, cli.seed),
        Commands::Play => run_play_command(cli.wordlist, cli.seed),
        Commands::Classify { guess, secret } => run_classify_command(&guess, &secret),
    }
}

/// Load the candidate words selected by the -w flag
fn load_candidates(wordlist: Option<PathBuf>) -> Result<Vec<String>> {
    let source = wordlist.map_or(WordList::Embedded, WordList::File);
    let candidates = source.load()?;
    log::info!("Loaded {} candidates from {source:?}", candidates.len());
    Ok(candidates)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn run_simple_command(wordlist: Option<PathBuf>, seed: Option<u64>) -> Result<()> {
    let candidates = load_candidates(wordlist)?;
    run_simple(&candidates, &mut make_rng(seed))?;
    Ok(())
}

fn run_play_command(wordlist: Option<PathBuf>, seed: Option<u64>) -> Result<()> {
    use wyrdl::game::Game;
    use wyrdl::interactive::{App, run_tui};
    use wyrdl::wordlists::select_secret;

    let candidates = load_candidates(wordlist)?;
    let secret = select_secret(&candidates, &mut make_rng(seed))?;

    let status = run_tui(App::new(Game::new(secret)))?;
    log::info!("TUI closed with game {status:?}");
    Ok(())
}

fn run_classify_command(guess: &str, secret: &str) -> Result<()> {
    let result = classify_words(guess, secret).map_err(|e| anyhow::anyhow!(e))?;
    print_classify_result(&result);
    Ok(())
}
