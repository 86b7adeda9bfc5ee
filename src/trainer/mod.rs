//! Trainer aggregate: the roster of generated Pokemon plus mod-side config.

pub mod io;

use serde::{Deserialize, Serialize};

use crate::pokemon::Pokemon;

/// Maximum roster size the mod supports.
pub const TEAM_SIZE: usize = 6;

/// A named trainer configuration under construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Trainer {
    pub name: String,
    pub properties: TrainerProperties,
}

/// The exported trainer payload, in the mod's wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TrainerProperties {
    pub team: Vec<Pokemon>,
    pub win_command: String,
    pub can_only_beat_once: bool,
}

impl Trainer {
    /// A trainer with default properties.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: TrainerProperties::default(),
        }
    }

    /// Append a Pokemon to the roster.
    pub fn add_pokemon(&mut self, pokemon: Pokemon) {
        self.properties.team.push(pokemon);
    }

    /// Remove the Pokemon at `slot`. A no-op (not an error) when the slot is
    /// out of range.
    pub fn remove_pokemon(&mut self, slot: usize) {
        if slot < self.properties.team.len() {
            self.properties.team.remove(slot);
        }
    }

    /// Set every roster member to the same level.
    pub fn set_team_level(&mut self, level: u32) {
        for pokemon in &mut self.properties.team {
            pokemon.level = level;
        }
    }

    /// Discard all properties, keeping the name.
    pub fn reset(&mut self) {
        self.properties = TrainerProperties::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokemon::species_id;

    fn sample_pokemon(name: &str) -> Pokemon {
        Pokemon {
            species: species_id(name),
            ..Pokemon::default()
        }
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut trainer = Trainer::new("red");
        trainer.add_pokemon(sample_pokemon("pikachu"));
        trainer.add_pokemon(sample_pokemon("snorlax"));
        let names: Vec<&str> = trainer
            .properties
            .team
            .iter()
            .map(|p| p.display_name())
            .collect();
        assert_eq!(names, vec!["pikachu", "snorlax"]);
    }

    #[test]
    fn test_remove_by_index() {
        let mut trainer = Trainer::new("red");
        trainer.add_pokemon(sample_pokemon("pikachu"));
        trainer.add_pokemon(sample_pokemon("snorlax"));
        trainer.remove_pokemon(0);
        assert_eq!(trainer.properties.team.len(), 1);
        assert_eq!(trainer.properties.team[0].display_name(), "snorlax");
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut trainer = Trainer::new("red");
        trainer.add_pokemon(sample_pokemon("pikachu"));
        trainer.remove_pokemon(5);
        assert_eq!(trainer.properties.team.len(), 1);
    }

    #[test]
    fn test_set_team_level() {
        let mut trainer = Trainer::new("red");
        trainer.add_pokemon(sample_pokemon("pikachu"));
        trainer.add_pokemon(sample_pokemon("snorlax"));
        trainer.set_team_level(42);
        assert!(trainer.properties.team.iter().all(|p| p.level == 42));
    }

    #[test]
    fn test_reset_clears_properties() {
        let mut trainer = Trainer::new("red");
        trainer.add_pokemon(sample_pokemon("pikachu"));
        trainer.properties.win_command = "/say gg".to_string();
        trainer.reset();
        assert_eq!(trainer.properties, TrainerProperties::default());
        assert_eq!(trainer.name, "red");
    }

    #[test]
    fn test_properties_wire_shape() {
        let mut trainer = Trainer::new("red");
        trainer.properties.win_command = "/say gg".to_string();
        trainer.properties.can_only_beat_once = true;
        let value = serde_json::to_value(&trainer.properties).unwrap();
        assert_eq!(value["winCommand"], "/say gg");
        assert_eq!(value["canOnlyBeatOnce"], true);
        assert!(value["team"].is_array());
    }

    #[test]
    fn test_properties_import_with_missing_fields() {
        // Hand-edited import files may omit fields; defaults fill them in.
        let properties: TrainerProperties = serde_json::from_str(r#"{"team": []}"#).unwrap();
        assert_eq!(properties, TrainerProperties::default());
    }
}
