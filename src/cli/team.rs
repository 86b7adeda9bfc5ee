//! Team and slot editing menus: add, edit, remove, random team.

use std::sync::Arc;

use anyhow::Result;
use rustyline::DefaultEditor;
use tracing::info;

use trainerforge::api::PokemonWikiApi;
use trainerforge::pokemon::factory::RandomizedPokemonFactory;
use trainerforge::pokemon::{assert_valid_level, capitalize, random_nature, select_random_moveset};
use trainerforge::trainer::{Trainer, TEAM_SIZE};
use trainerforge::ForgeError;

use super::{choose, confirm, text};

pub(crate) async fn edit_team(
    rl: &mut DefaultEditor,
    api: Arc<dyn PokemonWikiApi>,
    trainer: &mut Trainer,
) -> Result<()> {
    let factory = RandomizedPokemonFactory::new(api.clone());
    loop {
        let mut options = vec!["Return".to_string()];
        for slot in 0..TEAM_SIZE {
            options.push(slot_label(trainer, slot));
        }
        options.push("Team Level".to_string());
        options.push("Random Team".to_string());

        match choose(rl, "Select Pokemon", &options)? {
            Some(0) | None => return Ok(()),
            Some(i) if (1..=TEAM_SIZE).contains(&i) => {
                let slot = i - 1;
                if slot < trainer.properties.team.len() {
                    edit_slot(rl, api.clone(), trainer, slot).await?;
                } else {
                    add_pokemon(rl, &factory, trainer).await?;
                }
            }
            Some(i) if i == TEAM_SIZE + 1 => set_team_level(rl, trainer)?,
            Some(_) => random_team(rl, api.as_ref(), &factory, trainer).await?,
        }
    }
}

fn slot_label(trainer: &Trainer, slot: usize) -> String {
    match trainer.properties.team.get(slot) {
        Some(pokemon) => format!("[{}] {}", slot + 1, capitalize(pokemon.display_name())),
        None => format!("[{}] Empty", slot + 1),
    }
}

async fn add_pokemon(
    rl: &mut DefaultEditor,
    factory: &RandomizedPokemonFactory,
    trainer: &mut Trainer,
) -> Result<()> {
    let Some(name) = text(rl, "Pokemon Name")? else {
        return Ok(());
    };
    match factory.create(&name).await {
        Ok(pokemon) => {
            let label = capitalize(pokemon.display_name());
            trainer.add_pokemon(pokemon);
            println!("Added {label} to {}", trainer.name);
            info!("Added {} to {}", label, trainer.name);
        }
        Err(ForgeError::Creation(reason)) => println!("{reason}"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

async fn edit_slot(
    rl: &mut DefaultEditor,
    api: Arc<dyn PokemonWikiApi>,
    trainer: &mut Trainer,
    slot: usize,
) -> Result<()> {
    loop {
        let options: Vec<String> = [
            "Return", "Print", "Level", "Ability", "Nature", "Moveset", "Remove",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        let label = capitalize(trainer.properties.team[slot].display_name());
        match choose(rl, &format!("{label} — select action"), &options)? {
            Some(0) | None => return Ok(()),
            Some(1) => {
                let pokemon = &trainer.properties.team[slot];
                println!("{}", serde_json::to_string_pretty(pokemon)?);
            }
            Some(2) => edit_level(rl, trainer, slot)?,
            Some(3) => edit_ability(rl, api.as_ref(), trainer, slot).await?,
            Some(4) => edit_nature(rl, trainer, slot)?,
            Some(5) => edit_moveset(rl, api.as_ref(), trainer, slot).await?,
            Some(_) => {
                if confirm(rl, "Remove this Pokemon?")? {
                    trainer.remove_pokemon(slot);
                    println!("Removed {label} from {}", trainer.name);
                    info!("Removed {} from {}", label, trainer.name);
                    // Slot indices shifted; back out to the team menu.
                    return Ok(());
                }
            }
        }
    }
}

fn edit_level(rl: &mut DefaultEditor, trainer: &mut Trainer, slot: usize) -> Result<()> {
    let Some(answer) = text(rl, "Pokemon Level")? else {
        return Ok(());
    };
    match answer.parse::<u32>() {
        Ok(level) if assert_valid_level(level).is_ok() => {
            let pokemon = &mut trainer.properties.team[slot];
            pokemon.level = level;
            info!("Set level of {} to {}", capitalize(pokemon.display_name()), level);
        }
        _ => println!("Invalid value was given for Pokemon level"),
    }
    Ok(())
}

async fn edit_ability(
    rl: &mut DefaultEditor,
    api: &dyn PokemonWikiApi,
    trainer: &mut Trainer,
    slot: usize,
) -> Result<()> {
    let name = trainer.properties.team[slot].display_name().to_string();
    let abilities = match api.get_abilities(&name).await {
        Ok(abilities) if !abilities.is_empty() => abilities,
        _ => {
            println!("Could not fetch abilities for {}", capitalize(&name));
            return Ok(());
        }
    };
    if let Some(i) = choose(rl, "Pokemon Ability", &abilities)? {
        let pokemon = &mut trainer.properties.team[slot];
        pokemon.ability = abilities[i].clone();
        info!("Set ability of {} to {}", capitalize(&name), abilities[i]);
    }
    Ok(())
}

fn edit_nature(rl: &mut DefaultEditor, trainer: &mut Trainer, slot: usize) -> Result<()> {
    if confirm(rl, "Randomize nature?")? {
        let pokemon = &mut trainer.properties.team[slot];
        pokemon.nature = random_nature();
        info!(
            "Set nature of {} to {}",
            capitalize(pokemon.display_name()),
            pokemon.nature
        );
    }
    Ok(())
}

async fn edit_moveset(
    rl: &mut DefaultEditor,
    api: &dyn PokemonWikiApi,
    trainer: &mut Trainer,
    slot: usize,
) -> Result<()> {
    if !confirm(rl, "Randomize moveset?")? {
        return Ok(());
    }
    let name = trainer.properties.team[slot].display_name().to_string();
    match api.get_moves(&name).await {
        Ok(moves) => {
            let pokemon = &mut trainer.properties.team[slot];
            pokemon.moveset = select_random_moveset(moves);
            info!(
                "Set moveset of {} to {:?}",
                capitalize(&name),
                pokemon.moveset
            );
        }
        Err(_) => println!("Could not fetch moves for {}", capitalize(&name)),
    }
    Ok(())
}

fn set_team_level(rl: &mut DefaultEditor, trainer: &mut Trainer) -> Result<()> {
    let Some(answer) = text(rl, "Team Level")? else {
        return Ok(());
    };
    match answer.parse::<u32>() {
        Ok(level) if assert_valid_level(level).is_ok() => {
            trainer.set_team_level(level);
            info!("Set team level of {} to {}", trainer.name, level);
        }
        _ => println!("Invalid value was given for Pokemon level"),
    }
    Ok(())
}

async fn random_team(
    rl: &mut DefaultEditor,
    api: &dyn PokemonWikiApi,
    factory: &RandomizedPokemonFactory,
    trainer: &mut Trainer,
) -> Result<()> {
    let message =
        "Generate random team? (All Pokemon will be overridden and this takes about a minute)";
    if !confirm(rl, message)? {
        return Ok(());
    }

    trainer.properties.team.clear();
    for _ in 0..TEAM_SIZE {
        let name = match api.get_random_species_name().await {
            Ok(name) => name,
            Err(e) => {
                println!("Random team generation stopped: {e}");
                return Ok(());
            }
        };
        match factory.create(&name).await {
            Ok(pokemon) => {
                println!("  rolled {}", capitalize(pokemon.display_name()));
                trainer.add_pokemon(pokemon);
            }
            Err(e) => {
                println!("Random team generation stopped: {e}");
                return Ok(());
            }
        }
    }
    info!("Generated a random team for {}", trainer.name);
    Ok(())
}
