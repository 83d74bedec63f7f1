use std::io::{self, BufRead};

use rustyline::{error::ReadlineError, history::DefaultHistory, Editor};
use shell_words::split;

use crate::cli::{
    commands::{LoopControl, ShellContext},
    output,
    prompts::{AssumeYesGate, DialogGate},
    CliError,
};

enum CliMode {
    Interactive,
    Script,
}

/// Entry point for the shell. `TALLY_SCRIPT` switches to line-per-command
/// stdin processing with confirmations assumed, for scripted use.
pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os("TALLY_SCRIPT").is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    match mode {
        CliMode::Interactive => {
            let mut context = ShellContext::new(Box::new(DialogGate::new()))?;
            run_interactive(&mut context)
        }
        CliMode::Script => {
            let mut context = ShellContext::new(Box::new(AssumeYesGate))?;
            run_script(&mut context)
        }
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<(), DefaultHistory>::new()?;
    context.banner();

    loop {
        match editor.readline("tally> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();
                match handle_line(context, trimmed) {
                    LoopControl::Continue => {}
                    LoopControl::Exit => break,
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                output::info("Exiting.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match handle_line(context, &line) {
            LoopControl::Continue => {}
            LoopControl::Exit => break,
        }
    }
    Ok(())
}

fn handle_line(context: &mut ShellContext, line: &str) -> LoopControl {
    let tokens = match split(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            output::warning(format!("Could not parse input: {err}"));
            return LoopControl::Continue;
        }
    };

    let Some((raw, rest)) = tokens.split_first() else {
        return LoopControl::Continue;
    };
    let command = raw.to_lowercase();
    let args: Vec<&str> = rest.iter().map(String::as_str).collect();

    context.dispatch(&command, &args)
}
