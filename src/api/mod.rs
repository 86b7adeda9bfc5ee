//! Remote creature-data lookups through the cache and cooldown gate.
//!
//! [`PokemonWikiApi`] is the capability seam between the factory/CLI and the
//! remote service. [`PokeApi`] is the one concrete implementation; tests use
//! a generated mock of the trait instead of touching the network.

pub mod cooldown;
pub mod pokeapi;

use async_trait::async_trait;

use crate::error::Result;

pub use cooldown::Cooldown;
pub use pokeapi::PokeApi;

/// Domain queries answered by the creature-data wiki.
///
/// Every method is a logical lookup; whether it hits the local cache or the
/// network is an implementation detail behind this trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PokemonWikiApi: Send + Sync {
    /// Ability names of the species' default variety, hyphens stripped.
    async fn get_abilities(&self, name: &str) -> Result<Vec<String>>;

    /// `true` iff the species reports the genderless sentinel gender rate.
    async fn is_genderless(&self, name: &str) -> Result<bool>;

    /// Move names of the species' default variety, hyphens stripped.
    async fn get_moves(&self, name: &str) -> Result<Vec<String>>;

    /// Fail with [`crate::ForgeError::SpeciesNotFound`] unless the species
    /// resolves remotely.
    async fn assert_species_exists(&self, name: &str) -> Result<()>;

    /// A uniformly random species name, excluding species from the
    /// generation the target game does not ship.
    async fn get_random_species_name(&self) -> Result<String>;
}
