// src/interactive.rs
use anyhow::Result;
use std::io::{BufRead, Write};

use crate::core::store::InputStore;
use crate::display::render_result;
use crate::session::{Session, SessionState};

const HELP: &str = "\
commands:
  ethanol <price>   set the ethanol price (alias: alcool)
  gasoline <price>  set the gasoline price (alias: gasolina)
  calc              compare the two prices
  close             close the result
  show              print the current prices
  help              print this message
  quit              leave";

/// Drives a session from line-based commands until `quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails. Invalid
/// prices are reported on `output` and do not end the loop.
pub fn run_interactive<S: InputStore>(
    session: &mut Session<S>,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    print_fields(session, &mut output)?;

    for line in input.lines() {
        let line = line?;
        let (command, rest) = line
            .trim()
            .split_once(char::is_whitespace)
            .map_or((line.trim(), ""), |(command, rest)| (command, rest.trim()));

        match command {
            "" => {}
            "ethanol" | "alcool" | "gasoline" | "gasolina"
                if matches!(session.state(), SessionState::ResultShown(_)) =>
            {
                writeln!(output, "close the result before editing prices")?;
            }
            "ethanol" | "alcool" => session.set_ethanol(rest),
            "gasoline" | "gasolina" => session.set_gasoline(rest),
            "calc" => match session.calculate() {
                Ok(result) => writeln!(output, "{}", render_result(&result))?,
                Err(e) => writeln!(output, "! {e}")?,
            },
            "close" => session.dismiss(),
            "show" => print_fields(session, &mut output)?,
            "help" => writeln!(output, "{HELP}")?,
            "quit" | "exit" => break,
            other => writeln!(output, "unknown command '{other}', try 'help'")?,
        }
    }

    Ok(())
}

fn print_fields<S: InputStore>(session: &Session<S>, output: &mut impl Write) -> Result<()> {
    writeln!(output, "ethanol:  {}", session.ethanol().raw())?;
    writeln!(output, "gasoline: {}", session.gasoline().raw())?;
    Ok(())
}
