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

//! Pool fixtures shared by the integration tests.

#![allow(dead_code)]

use jepoku_wasm::pokemon::{Pokemon, Stats};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub const ALL_TYPES: [&str; 18] = [
    "normal", "fire", "water", "grass", "electric", "ice", "fighting", "poison", "ground",
    "flying", "psychic", "bug", "rock", "ghost", "dragon", "steel", "fairy", "dark",
];

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn stats(value: u32) -> Stats {
    Stats {
        hp: value,
        attack: value,
        defense: value,
        special_attack: value,
        special_defense: value,
        speed: value,
    }
}

/// A plain Johto Pokémon: no flags, no tracked abilities or moves, and stats
/// that cross no threshold.
pub fn plain(id: u32, name: &str, types: &[&str]) -> Pokemon {
    Pokemon {
        id,
        name: name.to_string(),
        types: types.iter().map(|t| t.to_string()).collect(),
        sprite_url: String::new(),
        is_mega: false,
        region: "Johto".to_string(),
        abilities: Vec::new(),
        moves: Vec::new(),
        can_evolve: false,
        is_final_evolution: false,
        is_partner: false,
        is_legendary: false,
        is_mythical: false,
        is_ultra_beast: false,
        is_paradox: false,
        height: id * 3 % 17 + 1,
        weight: id * 7 % 23 + 1,
        pokedex_entry: format!("Entry for {name}."),
        egg_groups: vec!["undiscovered".to_string()],
        evolution_line_size: 1,
        stats: stats(70),
    }
}

/// A Fire/Flying legendary from Kanto carrying every flag, the normal-pool
/// abilities and the normal-pool moves. It satisfies 22 normal criteria.
pub fn universal(id: u32) -> Pokemon {
    Pokemon {
        is_mega: true,
        region: "Kanto".to_string(),
        abilities: ["sturdy", "swift-swim", "cursed-body", "mold-breaker"]
            .iter()
            .map(|a| a.to_string())
            .collect(),
        moves: [
            "brick-break",
            "grass-knot",
            "iron-tail",
            "cut",
            "flamethrower",
            "leer",
            "mud-slap",
        ]
        .iter()
        .map(|m| m.to_string())
        .collect(),
        can_evolve: true,
        is_final_evolution: true,
        is_partner: true,
        is_legendary: true,
        is_mythical: true,
        is_ultra_beast: true,
        is_paradox: true,
        ..plain(id, &format!("legend{id}"), &["fire", "flying"])
    }
}

/// [`universal`] plus every hard-pool ability and move and stats above every
/// upper threshold.
pub fn universal_hard(id: u32) -> Pokemon {
    let mut pokemon = universal(id);
    pokemon.abilities.extend(
        [
            "drizzle",
            "sand-stream",
            "snow-warning",
            "grassy-surge",
            "magic-guard",
            "thick-fat",
            "flash-fire",
            "water-absorb",
            "sap-sipper",
            "prankster",
            "competitive",
            "frisk",
        ]
        .iter()
        .map(|a| a.to_string()),
    );
    pokemon.moves.extend(
        [
            "earthquake",
            "bind",
            "close-combat",
            "dazzling-gleam",
            "dark-pulse",
            "heal-pulse",
            "scratch",
            "wish",
            "healing-wish",
            "belly-drum",
            "after-you",
            "sucker-punch",
        ]
        .iter()
        .map(|m| m.to_string()),
    );
    pokemon.stats = stats(110);
    pokemon
}

/// `count` universal Pokémon with ids starting at `first_id`.
pub fn universal_pool(first_id: u32, count: u32) -> Vec<Pokemon> {
    (first_id..first_id + count).map(universal).collect()
}

pub fn universal_hard_pool(first_id: u32, count: u32) -> Vec<Pokemon> {
    (first_id..first_id + count).map(universal_hard).collect()
}

/// `count` plain Water Pokémon, usable as anomalies against any criterion a
/// universal Pokémon satisfies.
pub fn outsiders(first_id: u32, count: u32) -> Vec<Pokemon> {
    (first_id..first_id + count)
        .map(|id| plain(id, &format!("outsider{id}"), &["water"]))
        .collect()
}

/// One Pokémon for every unordered pair of distinct types.
pub fn type_pair_pool() -> Vec<Pokemon> {
    let mut pool = Vec::new();
    let mut id = 1;
    for (i, first) in ALL_TYPES.iter().enumerate() {
        for second in &ALL_TYPES[i + 1..] {
            pool.push(plain(id, &format!("{first}{second}"), &[first, second]));
            id += 1;
        }
    }
    pool
}

/// One Fire/Flying legendary and eight Pokémon that each keep exactly one of
/// Fire, Flying or Legendary. Every other universal criterion is shared.
pub fn sparse_legendary_pool() -> Vec<Pokemon> {
    let mut pool = vec![universal(1)];
    for id in 2..10 {
        let mut pokemon = universal(id);
        pokemon.is_legendary = false;
        match id % 3 {
            0 => pokemon.types = vec!["fire".to_string()],
            1 => pokemon.types = vec!["flying".to_string()],
            _ => {
                pokemon.types = vec!["water".to_string()];
                pokemon.is_legendary = true;
            }
        }
        pool.push(pokemon);
    }
    pool
}
