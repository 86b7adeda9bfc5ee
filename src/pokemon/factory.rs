//! Randomized entity construction.
//!
//! The factory validates a requested species name, pulls the required facts
//! through [`PokemonWikiApi`], and assembles a complete record. Only the
//! pre-flight name validation and the species-existence check are fatal;
//! every other field falls back to its template default on remote failure,
//! so an existing species always yields a structurally complete record.

use std::sync::Arc;

use rand::seq::SliceRandom;
use tracing::debug;

use crate::api::PokemonWikiApi;
use crate::error::{ForgeError, Result};

use super::{
    capitalize, random_nature, select_random_moveset, species_id, Gender, Ivs, Pokemon,
};

/// Builds randomized [`Pokemon`] records from live API data.
pub struct RandomizedPokemonFactory {
    api: Arc<dyn PokemonWikiApi>,
    template: Pokemon,
}

impl RandomizedPokemonFactory {
    /// Create a factory using the built-in template defaults.
    pub fn new(api: Arc<dyn PokemonWikiApi>) -> Self {
        Self::with_template(api, Pokemon::default())
    }

    /// Create a factory with an explicit fallback template.
    pub fn with_template(api: Arc<dyn PokemonWikiApi>, template: Pokemon) -> Self {
        Self { api, template }
    }

    /// Build a complete record for the named species.
    ///
    /// Fails with [`ForgeError::Creation`] when the name is empty or numeric,
    /// or when the species does not exist remotely. Per-field remote failures
    /// are logged at debug level and masked by the template defaults.
    pub async fn create(&self, name: &str) -> Result<Pokemon> {
        let name = name.trim().to_lowercase();
        assert_valid_name(&name)?;
        match self.build(&name).await {
            Err(ForgeError::SpeciesNotFound(_)) => Err(ForgeError::Creation(format!(
                "Pokemon {} does not exist",
                capitalize(&name)
            ))),
            other => other,
        }
    }

    async fn build(&self, name: &str) -> Result<Pokemon> {
        // Existence is the single hard gate; everything after degrades softly.
        self.api.assert_species_exists(name).await?;
        Ok(Pokemon {
            species: species_id(name),
            gender: self.roll_gender(name).await,
            level: self.template.level,
            nature: random_nature(),
            ability: self.roll_ability(name).await,
            moveset: self.roll_moveset(name).await,
            ivs: Ivs::random(),
            evs: self.template.evs.clone(),
            shiny: self.template.shiny,
            held_item: self.template.held_item.clone(),
        })
    }

    async fn roll_gender(&self, name: &str) -> Gender {
        match self.api.is_genderless(name).await {
            Ok(true) => Gender::Genderless,
            Ok(false) => {
                if rand::random() {
                    Gender::Male
                } else {
                    Gender::Female
                }
            }
            Err(e) => {
                debug!(name, error = %e, "Gender lookup failed, using template default");
                self.template.gender
            }
        }
    }

    async fn roll_ability(&self, name: &str) -> String {
        match self.api.get_abilities(name).await {
            Ok(abilities) => abilities
                .choose(&mut rand::thread_rng())
                .cloned()
                .unwrap_or_else(|| self.template.ability.clone()),
            Err(e) => {
                debug!(name, error = %e, "Ability lookup failed, using template default");
                self.template.ability.clone()
            }
        }
    }

    async fn roll_moveset(&self, name: &str) -> Vec<String> {
        match self.api.get_moves(name).await {
            Ok(moves) => select_random_moveset(moves),
            Err(e) => {
                debug!(name, error = %e, "Move lookup failed, using template moveset");
                self.template.moveset.clone()
            }
        }
    }
}

/// Pre-flight validation, checked before any network activity.
fn assert_valid_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ForgeError::Creation(
            "Pokemon's name cannot be an empty string".to_string(),
        ));
    }
    if name.chars().all(|c| c.is_ascii_digit()) {
        return Err(ForgeError::Creation(
            "Pokemon's name cannot be a number string".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockPokemonWikiApi;
    use crate::pokemon::MOVESET_SIZE;

    fn factory_with(mock: MockPokemonWikiApi) -> RandomizedPokemonFactory {
        RandomizedPokemonFactory::new(Arc::new(mock))
    }

    fn mock_happy_path() -> MockPokemonWikiApi {
        let mut mock = MockPokemonWikiApi::new();
        mock.expect_assert_species_exists().returning(|_| Ok(()));
        mock.expect_is_genderless().returning(|_| Ok(false));
        mock.expect_get_abilities()
            .returning(|_| Ok(vec!["blaze".to_string(), "solarpower".to_string()]));
        mock.expect_get_moves().returning(|_| {
            Ok((0..10).map(|i| format!("move{i}")).collect())
        });
        mock
    }

    #[tokio::test]
    async fn test_create_returns_fully_populated_record() {
        let factory = factory_with(mock_happy_path());
        let pokemon = factory.create("Charmander").await.unwrap();

        assert_eq!(pokemon.species, "cobblemon:charmander");
        assert!(matches!(pokemon.gender, Gender::Male | Gender::Female));
        assert_eq!(pokemon.level, Pokemon::default().level);
        assert!(pokemon.nature.starts_with("cobblemon:"));
        assert!(["blaze", "solarpower"].contains(&pokemon.ability.as_str()));
        assert_eq!(pokemon.moveset.len(), MOVESET_SIZE);
        assert!(!pokemon.shiny);
        assert_eq!(pokemon.held_item, "minecraft:air");

        // All ten wire fields present.
        let value = serde_json::to_value(&pokemon).unwrap();
        for field in [
            "species", "gender", "level", "nature", "ability", "moveset", "ivs", "evs", "shiny",
            "heldItem",
        ] {
            assert!(!value[field].is_null(), "missing field {field}");
        }
    }

    #[tokio::test]
    async fn test_empty_name_fails_before_any_lookup() {
        // No expectations set: any API call would panic the mock.
        let factory = factory_with(MockPokemonWikiApi::new());
        let err = factory.create("").await.unwrap_err();
        assert!(matches!(err, ForgeError::Creation(_)));
    }

    #[tokio::test]
    async fn test_numeric_name_fails_before_any_lookup() {
        let factory = factory_with(MockPokemonWikiApi::new());
        let err = factory.create("025").await.unwrap_err();
        assert!(matches!(err, ForgeError::Creation(_)));
    }

    #[tokio::test]
    async fn test_unknown_species_fails_with_readable_reason() {
        let mut mock = MockPokemonWikiApi::new();
        mock.expect_assert_species_exists()
            .returning(|name| Err(ForgeError::SpeciesNotFound(name.to_string())));
        let factory = factory_with(mock);

        let err = factory.create("missingno").await.unwrap_err();
        match err {
            ForgeError::Creation(reason) => {
                assert_eq!(reason, "Pokemon Missingno does not exist")
            }
            other => panic!("expected Creation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_genderless_species_forces_genderless() {
        let mut mock = MockPokemonWikiApi::new();
        mock.expect_assert_species_exists().returning(|_| Ok(()));
        mock.expect_is_genderless().returning(|_| Ok(true));
        mock.expect_get_abilities()
            .returning(|_| Ok(vec!["imposter".to_string()]));
        mock.expect_get_moves()
            .returning(|_| Ok(vec!["transform".to_string()]));
        let factory = factory_with(mock);

        let pokemon = factory.create("ditto").await.unwrap();
        assert_eq!(pokemon.gender, Gender::Genderless);
    }

    #[tokio::test]
    async fn test_field_failures_fall_back_to_template_defaults() {
        let mut mock = MockPokemonWikiApi::new();
        mock.expect_assert_species_exists().returning(|_| Ok(()));
        mock.expect_is_genderless().returning(|_| {
            Err(ForgeError::ApiRequest {
                url: "u".to_string(),
            })
        });
        mock.expect_get_abilities().returning(|_| {
            Err(ForgeError::ApiRequest {
                url: "u".to_string(),
            })
        });
        mock.expect_get_moves().returning(|_| {
            Err(ForgeError::ApiRequest {
                url: "u".to_string(),
            })
        });
        let factory = factory_with(mock);

        let template = Pokemon::default();
        let pokemon = factory.create("charmander").await.unwrap();
        assert_eq!(pokemon.gender, template.gender);
        assert_eq!(pokemon.ability, template.ability);
        assert_eq!(pokemon.moveset, template.moveset);
        // Creation still succeeded with a complete record.
        assert_eq!(pokemon.species, "cobblemon:charmander");
    }

    #[tokio::test]
    async fn test_two_remote_moves_yield_two_move_moveset() {
        let mut mock = MockPokemonWikiApi::new();
        mock.expect_assert_species_exists().returning(|_| Ok(()));
        mock.expect_is_genderless().returning(|_| Ok(false));
        mock.expect_get_abilities()
            .returning(|_| Ok(vec!["owntempo".to_string()]));
        mock.expect_get_moves()
            .returning(|_| Ok(vec!["sketch".to_string(), "doubleedge".to_string()]));
        let factory = factory_with(mock);

        let pokemon = factory.create("smeargle").await.unwrap();
        assert_eq!(pokemon.moveset, vec!["sketch", "doubleedge"]);
    }

    #[tokio::test]
    async fn test_hyphenated_name_sanitized_in_species_id() {
        let factory = factory_with(mock_happy_path());
        let pokemon = factory.create("Mr-Mime").await.unwrap();
        assert_eq!(pokemon.species, "cobblemon:mrmime");
    }
}
