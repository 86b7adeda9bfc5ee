//! Trainer property editing menu.

use anyhow::Result;
use rustyline::DefaultEditor;
use tracing::info;

use trainerforge::trainer::Trainer;

use super::{choose, confirm, text};

pub(crate) fn edit_trainer(rl: &mut DefaultEditor, trainer: &mut Trainer) -> Result<()> {
    loop {
        let options: Vec<String> = [
            "Return",
            "Reset",
            "Rename",
            "winCommand",
            "canOnlyBeatOnce",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        match choose(rl, "Select to edit", &options)? {
            Some(0) | None => return Ok(()),
            Some(1) => {
                if confirm(rl, "Reset all trainer properties?")? {
                    trainer.reset();
                    info!("Reset trainer {}", trainer.name);
                }
            }
            Some(2) => {
                if let Some(name) = text(rl, "New trainer name")? {
                    if !name.is_empty() {
                        info!("Renamed trainer {} to {}", trainer.name, name);
                        trainer.name = name;
                    }
                }
            }
            Some(3) => {
                if let Some(command) = text(rl, "Type winCommand")? {
                    trainer.properties.win_command = command;
                    info!("Set winCommand of {}", trainer.name);
                }
            }
            Some(_) => {
                let once = confirm(rl, "Should the trainer be beaten only once?")?;
                trainer.properties.can_only_beat_once = once;
                info!("Set canOnlyBeatOnce of {} to {}", trainer.name, once);
            }
        }
    }
}
