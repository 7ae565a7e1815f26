/*
* Copyright (C) 2025  The Jepoku Authors
* This file is part of Jepoku.
*
* Jepoku is free software: you can redistribute it and/or modify
* it under the terms of the GNU Affero General Public License as published
* by the Free Software Foundation, either version 3 of the License, or
* (at your option) any later version.
*
* Jepoku is distributed in the hope that it will be useful,
* but WITHOUT ANY WARRANTY; without even the implied warranty of
* MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
* GNU Affero General Public License for more details.
*
* You should have received a copy of the GNU Affero General Public License
* along with Jepoku.  If not, see <https://www.gnu.org/licenses/>.
*/

//! Clue lists for the guess-the-Pokémon modes.

use crate::criteria::capitalize;
use crate::pokemon::Pokemon;
use crate::random;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub label: String,
    pub value: String,
}

impl Clue {
    fn new(label: &str, value: impl Into<String>) -> Self {
        Clue {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

/// `"swift-swim"` → `"Swift Swim"`; empty input reads `"N/A"`.
pub fn format_string(raw: &str) -> String {
    if raw.is_empty() {
        return "N/A".to_string();
    }
    raw.split('-').map(capitalize).collect::<Vec<_>>().join(" ")
}

/// Rarity label. Later flags win when several are set.
pub fn status_of(pokemon: &Pokemon) -> &'static str {
    let mut status = "Regular";
    if pokemon.is_legendary {
        status = "Legendary";
    }
    if pokemon.is_mythical {
        status = "Mythical";
    }
    if pokemon.is_ultra_beast {
        status = "Ultra Beast";
    }
    if pokemon.is_paradox {
        status = "Paradox";
    }
    status
}

pub fn evolution_status_of(pokemon: &Pokemon) -> &'static str {
    if pokemon.can_evolve {
        "Can Evolve"
    } else if pokemon.is_final_evolution {
        "Final Evolution"
    } else {
        "Does Not Evolve"
    }
}

fn type_clues(pokemon: &Pokemon) -> [Clue; 2] {
    let first = pokemon.types.first().map(String::as_str).unwrap_or_default();
    let second = match pokemon.types.get(1) {
        Some(t) => format_string(t),
        None => "None".to_string(),
    };
    [
        Clue::new("Type 1", format_string(first)),
        Clue::new("Type 2", second),
    ]
}

fn random_ability<R: Rng + ?Sized>(pokemon: &Pokemon, rng: &mut R) -> String {
    let ability = random::index(pokemon.abilities.len(), rng)
        .map(|i| pokemon.abilities[i].as_str())
        .unwrap_or_default();
    format_string(ability)
}

/// The full clue set for criteria puzzles, shuffled.
pub fn criteria_clues<R: Rng + ?Sized>(pokemon: &Pokemon, rng: &mut R) -> Vec<Clue> {
    let mut clues: Vec<Clue> = type_clues(pokemon).into();
    clues.push(Clue::new("Generation", pokemon.region.clone()));
    let egg_group = match pokemon.egg_groups.first() {
        Some(group) => format_string(group),
        None => "None".to_string(),
    };
    clues.push(Clue::new("Primary Egg Group", egg_group));
    clues.push(Clue::new("Evolution Status", evolution_status_of(pokemon)));
    clues.push(Clue::new("Possible Ability", random_ability(pokemon, rng)));
    clues.push(Clue::new("Pokédex Number", pokemon.id.to_string()));
    clues.push(Clue::new(
        "Evolution Line Size",
        pokemon.evolution_line_size.to_string(),
    ));
    clues.push(Clue::new("Status", status_of(pokemon)));

    let moves = random::shuffled(pokemon.moves.iter().collect::<Vec<_>>(), rng);
    for (label, name) in ["Learns", "Also Learns"].into_iter().zip(moves) {
        clues.push(Clue::new(label, format_string(name)));
    }

    let stats = &pokemon.stats;
    clues.push(Clue::new("Base Stat Total", stats.total().to_string()));
    for (label, value) in [
        ("HP", stats.hp),
        ("Attack", stats.attack),
        ("Defense", stats.defense),
        ("Sp. Atk", stats.special_attack),
        ("Sp. Def", stats.special_defense),
        ("Speed", stats.speed),
    ] {
        clues.push(Clue::new(label, value.to_string()));
    }

    random::shuffled(clues, rng)
}

/// The eight fixed-order clues of easy-criteria puzzles.
pub fn easy_criteria_clues<R: Rng + ?Sized>(pokemon: &Pokemon, rng: &mut R) -> Vec<Clue> {
    let mut clues: Vec<Clue> = type_clues(pokemon).into();
    clues.push(Clue::new("Status", status_of(pokemon)));
    clues.push(Clue::new("Region", pokemon.region.clone()));
    clues.push(Clue::new("Evolution Status", evolution_status_of(pokemon)));
    clues.push(Clue::new("Pokédex Number", pokemon.id.to_string()));
    clues.push(Clue::new("A Possible Ability", random_ability(pokemon, rng)));
    clues.push(Clue::new(
        "Base Stat Total",
        pokemon.stats.total().to_string(),
    ));
    clues
}
