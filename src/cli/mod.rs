//! Interactive builder menus.
//!
//! Nested numbered menus driven by rustyline. Ctrl-C / Ctrl-D at any prompt
//! backs out of the current menu instead of aborting the session.

mod builder;
mod team;
mod trainer_edit;

pub(crate) use builder::run_builder;

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Present numbered options and read a selection.
///
/// Returns `None` when the user backs out (Ctrl-C / Ctrl-D); re-prompts on
/// anything that is not a valid option number.
pub(crate) fn choose(
    rl: &mut DefaultEditor,
    title: &str,
    options: &[String],
) -> Result<Option<usize>> {
    println!("\n{title}");
    for (i, option) in options.iter().enumerate() {
        println!("  {}) {}", i + 1, option);
    }
    loop {
        match rl.readline("> ") {
            Ok(line) => match line.trim().parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(Some(n - 1)),
                _ => println!("Enter a number between 1 and {}", options.len()),
            },
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(None),
            Err(e) => return Err(e.into()),
        }
    }
}

/// Read a free-text answer. `None` when the user backs out.
pub(crate) fn text(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<String>> {
    match rl.readline(&format!("{prompt}: ")) {
        Ok(line) => Ok(Some(line.trim().to_string())),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Yes/no confirmation, defaulting to no.
pub(crate) fn confirm(rl: &mut DefaultEditor, message: &str) -> Result<bool> {
    match rl.readline(&format!("{message} [y/N] ")) {
        Ok(line) => Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes")),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(false),
        Err(e) => Err(e.into()),
    }
}
