//! trainerforge — interactive Cobblemon trainer team builder backed by PokeAPI.
//!
//! The core is a response-caching layer combined with a randomized-entity
//! construction pipeline: a durable URL-keyed cache fronts the remote API, a
//! cooldown gates outbound fetches, and the factory turns raw API responses
//! into fully populated Pokemon records with per-field fallback defaults.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod pokemon;
pub mod trainer;

pub use error::{ForgeError, Result};
