// src/cli.rs
use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::config::resolve_store_path;
use crate::core::store::{FileStore, InputStore, MemoryStore};
use crate::display::{render_inputs, render_result, render_welcome};
use crate::interactive::run_interactive;
use crate::session::Session;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// File holding the last entered prices (defaults to the user config directory)
    #[arg(short, long, global = true)]
    pub store: Option<PathBuf>,

    /// Keep prices in memory only; nothing is read from or written to disk
    #[arg(short, long, global = true)]
    pub ephemeral: bool,

    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Compare an ethanol price with a gasoline price (e.g. `calc 3,49 5,00`)
    Calc {
        /// Ethanol price per litre
        #[arg(allow_hyphen_values = true)]
        ethanol: String,

        /// Gasoline price per litre
        #[arg(allow_hyphen_values = true)]
        gasoline: String,
    },

    /// Print the last stored prices
    Show,

    /// Edit the prices and calculate from a prompt
    Interactive,

    /// Show the welcome overlay
    Welcome,
}

/// Runs the command against the process's stdin and stdout.
///
/// # Errors
///
/// Returns an error if the prices are invalid or the terminal cannot be
/// written to.
pub fn run(args: Args) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(args, stdin.lock(), stdout.lock())
}

/// Runs the command reading user input from `input` and writing to `output`.
///
/// # Errors
///
/// Returns an error if the prices given to `calc` are invalid, or if
/// reading `input` or writing `output` fails.
pub fn run_with(args: Args, input: impl BufRead, output: impl Write) -> Result<()> {
    if args.ephemeral {
        tracing::info!("using in-memory input store");
        return execute(args.command, MemoryStore::new(), input, output);
    }

    let store = FileStore::new(resolve_store_path(args.store.as_deref()));
    tracing::info!(path = %store.path().display(), "using input store");
    execute(args.command, store, input, output)
}

fn execute<S: InputStore>(
    command: Command,
    store: S,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    match command {
        Command::Calc { ethanol, gasoline } => {
            let mut session = Session::start(store);
            session.set_ethanol(ethanol);
            session.set_gasoline(gasoline);
            let result = session.calculate().with_context(|| {
                format!(
                    "Cannot compare '{}' with '{}'",
                    session.ethanol().raw(),
                    session.gasoline().raw()
                )
            })?;
            writeln!(output, "{}", render_result(&result))?;
        }
        Command::Show => {
            let inputs = store.load().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "could not load stored inputs");
                Default::default()
            });
            writeln!(output, "{}", render_inputs(&inputs))?;
        }
        Command::Interactive => {
            let mut session = Session::start(store);
            run_interactive(&mut session, input, output)?;
        }
        Command::Welcome => {
            writeln!(output, "{}", render_welcome())?;
        }
    }

    Ok(())
}
