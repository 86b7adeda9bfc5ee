//! Pokemon record model, template defaults, and randomization helpers.
//!
//! The wire shape matches what the Cobblemon trainers mod consumes: camelCase
//! keys, `cobblemon:`-namespaced species and nature identifiers, genders in
//! SCREAMING_SNAKE_CASE.

pub mod factory;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ForgeError, Result};

/// Namespace prefix for species and nature identifiers.
pub const COBBLEMON_PREFIX: &str = "cobblemon:";

/// A full moveset; shorter remote lists are kept as-is, never padded.
pub const MOVESET_SIZE: usize = 4;

pub const MIN_LEVEL: u32 = 1;
pub const MAX_LEVEL: u32 = 100;

const MIN_IV: u8 = 0;
const MAX_IV: u8 = 31;

/// Level assigned at creation; levels are edited afterwards, never rolled.
const DEFAULT_LEVEL: u32 = 10;

/// The fixed 25-nature table.
const NATURES: [&str; 25] = [
    "hardy", "lonely", "brave", "adamant", "naughty", "bold", "docile", "relaxed", "impish", "lax",
    "timid", "hasty", "serious", "jolly", "naive", "modest", "mild", "quiet", "bashful", "rash",
    "calm", "gentle", "sassy", "careful", "quirky",
];

/// Entity gender as exported to the mod.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Genderless,
}

/// The six individual values, independently drawn in `[0, 31]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ivs {
    pub hp: u8,
    pub attack: u8,
    pub defence: u8,
    pub special_attack: u8,
    pub special_defence: u8,
    pub speed: u8,
}

impl Ivs {
    /// Six independent uniform draws.
    pub fn random() -> Self {
        Self {
            hp: random_iv(),
            attack: random_iv(),
            defence: random_iv(),
            special_attack: random_iv(),
            special_defence: random_iv(),
            speed: random_iv(),
        }
    }
}

/// One uniform draw in `[0, 31]`.
pub fn random_iv() -> u8 {
    rand::thread_rng().gen_range(MIN_IV..=MAX_IV)
}

/// A complete entity record. Every field is always present; per-field remote
/// failures during creation are masked by the template defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
    pub species: String,
    pub gender: Gender,
    pub level: u32,
    pub nature: String,
    pub ability: String,
    pub moveset: Vec<String>,
    pub ivs: Ivs,
    pub evs: BTreeMap<String, u32>,
    pub shiny: bool,
    pub held_item: String,
}

impl Default for Pokemon {
    /// The template record supplying per-field fallback defaults.
    fn default() -> Self {
        Self {
            species: String::new(),
            gender: Gender::Male,
            level: DEFAULT_LEVEL,
            nature: format!("{COBBLEMON_PREFIX}hardy"),
            ability: String::new(),
            moveset: vec!["tackle".to_string()],
            ivs: Ivs::default(),
            evs: BTreeMap::new(),
            shiny: false,
            held_item: "minecraft:air".to_string(),
        }
    }
}

impl Pokemon {
    /// The species name without the namespace prefix, for display.
    pub fn display_name(&self) -> &str {
        self.species
            .strip_prefix(COBBLEMON_PREFIX)
            .unwrap_or(&self.species)
    }
}

/// Namespaced species identifier: prefix plus the name with hyphens stripped.
pub fn species_id(name: &str) -> String {
    format!("{COBBLEMON_PREFIX}{}", name.replace('-', ""))
}

/// A uniform draw from the fixed nature table, namespaced.
pub fn random_nature() -> String {
    let nature = NATURES
        .choose(&mut rand::thread_rng())
        .expect("nature table is non-empty");
    format!("{COBBLEMON_PREFIX}{nature}")
}

/// Sample a moveset from the available moves.
///
/// Fewer than [`MOVESET_SIZE`] moves returns the whole list unchanged (no
/// padding); otherwise a random sample of exactly [`MOVESET_SIZE`] distinct
/// moves.
pub fn select_random_moveset(moves: Vec<String>) -> Vec<String> {
    if moves.len() < MOVESET_SIZE {
        return moves;
    }
    moves
        .choose_multiple(&mut rand::thread_rng(), MOVESET_SIZE)
        .cloned()
        .collect()
}

/// Validate a user-supplied level against `[1, 100]`.
pub fn assert_valid_level(level: u32) -> Result<()> {
    if (MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        Ok(())
    } else {
        Err(ForgeError::InvalidLevel(level))
    }
}

/// Uppercase the first character, for user-facing messages and menu labels.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
