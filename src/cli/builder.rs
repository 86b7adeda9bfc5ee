//! Top-level builder menu: print, edit, export, import, close.

use std::sync::Arc;

use anyhow::Result;
use rustyline::DefaultEditor;
use tracing::info;

use trainerforge::api::PokemonWikiApi;
use trainerforge::config::Config;
use trainerforge::trainer::{io, Trainer};

use super::{choose, confirm, team, trainer_edit};

/// Run the interactive session until the user closes it.
pub(crate) async fn run_builder(
    api: Arc<dyn PokemonWikiApi>,
    config: &Config,
    name: &str,
) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut trainer = Trainer::new(name);
    info!("Started builder for trainer {}", trainer.name);

    loop {
        let options: Vec<String> = ["Print", "Trainer", "Pokemon", "Export", "Import", "Close"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        match choose(&mut rl, "Select command", &options)? {
            Some(0) => println!("{}", serde_json::to_string_pretty(&trainer.properties)?),
            Some(1) => trainer_edit::edit_trainer(&mut rl, &mut trainer)?,
            Some(2) => team::edit_team(&mut rl, api.clone(), &mut trainer).await?,
            Some(3) => export(&mut rl, &trainer, config)?,
            Some(4) => import(&mut rl, &mut trainer, config)?,
            Some(_) | None => break,
        }
    }
    Ok(())
}

fn export(rl: &mut DefaultEditor, trainer: &Trainer, config: &Config) -> Result<()> {
    let path = io::export_path(trainer, &config.export_dir);
    if confirm(rl, &format!("Export to {}?", path.display()))? {
        let written = io::export_trainer(trainer, &config.export_dir)?;
        println!("Exported to {}", written.display());
        info!("Exported trainer {} to {}", trainer.name, written.display());
    }
    Ok(())
}

fn import(rl: &mut DefaultEditor, trainer: &mut Trainer, config: &Config) -> Result<()> {
    let files = io::list_importable_files(&config.import_dir);
    if files.is_empty() {
        println!(
            "No importable JSON files in {}",
            config.import_dir.display()
        );
        return Ok(());
    }

    let mut options = vec!["Return".to_string()];
    options.extend(
        files
            .iter()
            .map(|f| f.file_name().unwrap_or_default().to_string_lossy().into_owned()),
    );
    match choose(rl, "Select to import", &options)? {
        Some(0) | None => {}
        Some(i) => {
            let path = &files[i - 1];
            trainer.properties = io::import_properties(path)?;
            println!("Imported {}", path.display());
            info!("Imported trainer properties from {}", path.display());
        }
    }
    Ok(())
}
