//! Trainer JSON export and import.
//!
//! Exports land in the export directory as `<trainer name>.json`, pretty
//! printed. Imports are offered from the import directory; files that do not
//! parse as JSON are filtered out rather than reported.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

use super::{Trainer, TrainerProperties};

/// Write the trainer's properties to `<export_dir>/<name>.json`.
///
/// Creates the export directory when absent. Returns the written path.
pub fn export_trainer(trainer: &Trainer, export_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(export_dir)?;
    let path = export_path(trainer, export_dir);
    let data = serde_json::to_string_pretty(&trainer.properties)?;
    std::fs::write(&path, data)?;
    debug!(path = %path.display(), "Exported trainer");
    Ok(path)
}

/// The path `export_trainer` would write to.
pub fn export_path(trainer: &Trainer, export_dir: &Path) -> PathBuf {
    export_dir.join(format!("{}.json", trainer.name))
}

/// Load trainer properties from a JSON file.
pub fn import_properties(path: &Path) -> Result<TrainerProperties> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// List the files in `import_dir` that parse as valid JSON, sorted by name.
///
/// A missing directory yields an empty list.
pub fn list_importable_files(import_dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(import_dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_valid_json_file(path))
        .collect();
    files.sort();
    files
}

fn is_valid_json_file(path: &Path) -> bool {
    match std::fs::read_to_string(path) {
        Ok(data) => serde_json::from_str::<serde_json::Value>(&data).is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokemon::{species_id, Pokemon};

    #[test]
    fn test_export_then_import_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut trainer = Trainer::new("brock");
        trainer.add_pokemon(Pokemon {
            species: species_id("onix"),
            ..Pokemon::default()
        });
        trainer.properties.win_command = "/say gg".to_string();

        let path = export_trainer(&trainer, dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "brock.json");

        let imported = import_properties(&path).unwrap();
        assert_eq!(imported, trainer.properties);
    }

    #[test]
    fn test_listing_filters_invalid_json() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("good.json"), r#"{"team": []}"#).unwrap();
        std::fs::write(dir.path().join("bad.json"), "{ not json").unwrap();

        let files = list_importable_files(dir.path());
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name().unwrap(), "good.json");
    }

    #[test]
    fn test_listing_missing_dir_is_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let files = list_importable_files(&dir.path().join("nope"));
        assert!(files.is_empty());
    }
}
