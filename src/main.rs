//! Bulls and Cows - CLI
//!
//! Interactive 1A2B number guessing game for the terminal.

use anyhow::{Context, Result};
use bulls_cows::{
    config::GameConfig,
    core::DEFAULT_LENGTH,
    game::{Session, SessionOutcome},
    logging::init_logging,
    terminal::{StdinConsole, TerminalConsole, forward_interrupts},
};
use clap::Parser;
use std::io::{self, IsTerminal};

#[derive(Parser)]
#[command(
    name = "bulls_cows",
    about = "Bulls and Cows (1A2B): guess the secret number of unique digits",
    version,
    author
)]
struct Cli {
    /// Seed the secret generator for reproducible games (e.g., --seed 12345)
    #[arg(long)]
    seed: Option<u64>,

    /// Let secrets and guesses start with 0
    #[arg(long)]
    allow_leading_zero: bool,

    /// Length used when the length prompt is left blank (2-10)
    #[arg(long, default_value_t = DEFAULT_LENGTH)]
    default_length: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = GameConfig::new(cli.default_length, cli.allow_leading_zero, cli.seed)
        .context("invalid --default-length")?;

    let outcome = run_session(config).context("terminal I/O failed")?;
    tracing::debug!(?outcome, "exiting");
    Ok(())
}

fn run_session(config: GameConfig) -> io::Result<SessionOutcome> {
    let secrets = config.secret_source();
    let out = io::stdout();

    // Raw-mode reading needs a real terminal; pipes are read line by line
    if io::stdin().is_terminal() {
        let console = TerminalConsole::new();
        forward_interrupts(console.interrupter())?;
        Session::new(config, console, secrets, out).run()
    } else {
        let console = StdinConsole::stdin()?;
        forward_interrupts(console.interrupter())?;
        Session::new(config, console, secrets, out).run()
    }
}
