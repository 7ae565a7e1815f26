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

//! The criteria model: every textual criterion a Pokémon satisfies.
//!
//! Generation and answer checking both call [`criteria_of`], so a tag derived
//! while building a puzzle is always the tag the checker sees.

use crate::pokemon::{Pokemon, Stats};
use std::collections::HashSet;

pub const EASY_CRITERIA: &[&str] = &[
    "Normal", "Fire", "Water", "Grass", "Electric", "Ice", "Fighting", "Poison",
    "Ground", "Flying", "Psychic", "Bug", "Rock", "Ghost", "Dragon", "Steel",
    "Fairy", "Dark",
    "Kanto", "Johto", "Hoenn", "Sinnoh", "Unova", "Kalos", "Alola", "Galar", "Paldea",
    "Can Evolve", "Final Evolution",
];

pub const NORMAL_CRITERIA: &[&str] = &[
    "Normal", "Fire", "Water", "Grass", "Electric", "Ice", "Fighting", "Poison",
    "Ground", "Flying", "Psychic", "Bug", "Rock", "Ghost", "Dragon", "Steel",
    "Fairy", "Dark",
    "Mega", "Legendary", "Mythical", "Ultra Beast", "Paradox",
    "Kanto", "Johto", "Hoenn", "Sinnoh", "Unova", "Kalos", "Alola", "Galar", "Paldea",
    "Has: Sturdy",
    "Can Evolve", "Final Evolution", "Partner Pokemon",
    "Knows: Brick Break", "Knows: Grass Knot", "Knows: Iron Tail", "Knows: Cut",
    "Knows: Flame Thrower", "Knows: Leer", "Knows: Mud Slap",
    "Has: Swift Swim", "Has: Cursed Body", "Has: Mold Breaker",
];

pub const HARD_CRITERIA: &[&str] = &[
    "Above 100 hp", "Above 100 sp atk", "Above 100 atk",
    "Above 100 sp def", "Above 100 def", "Above 100 speed",
    "Below 50 hp", "Below 50 sp atk", "Below 50 atk",
    "Below 50 sp def", "Below 50 def", "Below 50 speed",
    "Learns Grass Knot", "Learns Brick Break", "Learns Earthquake", "Learns Bind",
    "Learns Mud Slap", "Learns Close Combat", "Learns Dazzling Gleam", "Learns Dark Pulse",
    "Learns Heal Pulse", "Learns Scratch", "Learns Wish", "Learns Healing Wish",
    "Learns Belly Drum", "Learns After You", "Learns Sucker Punch", "Learns Cut",
    "Has: Drizzle", "Has: Sand Stream", "Has: Snow Warning", "Has: Grassy Surge",
    "Has: Magic Guard", "Has: Thick Fat", "Has: Flash Fire", "Has: Water Absorb",
    "Has: Sap Sipper", "Has: Prankster", "Has: Competitive", "Has: Frisk",
    "Has below 320 bst", "Has above 620 bst",
];

/// The eighteen type criteria, used on their own by dex puzzles.
pub const TYPE_CRITERIA: &[&str] = &[
    "Normal", "Fire", "Water", "Grass", "Electric", "Ice", "Fighting", "Poison",
    "Ground", "Flying", "Psychic", "Bug", "Rock", "Ghost", "Dragon", "Steel",
    "Fairy", "Dark",
];

pub const REGIONS: &[&str] = &[
    "Kanto", "Johto", "Hoenn", "Sinnoh", "Unova", "Kalos", "Alola", "Galar", "Paldea",
];

/// Type combinations no Pokémon has, so a row and column may not pair them.
pub const IMPOSSIBLE_TYPE_PAIRS: &[(&str, &str)] = &[
    ("Normal", "Ice"),
    ("Normal", "Bug"),
    ("Normal", "Rock"),
    ("Normal", "Steel"),
    ("Fire", "Fairy"),
    ("Ice", "Poison"),
    ("Ground", "Fairy"),
    ("Bug", "Dragon"),
    ("Rock", "Ghost"),
];

/// Numeric ranges that cannot both hold for one Pokémon.
pub const OPPOSING_HARD_CRITERIA: &[(&str, &str)] = &[
    ("Above 100 hp", "Below 50 hp"),
    ("Above 100 atk", "Below 50 atk"),
    ("Above 100 def", "Below 50 def"),
    ("Above 100 sp atk", "Below 50 sp atk"),
    ("Above 100 sp def", "Below 50 sp def"),
    ("Above 100 speed", "Below 50 speed"),
    ("Has above 620 bst", "Has below 320 bst"),
];

/// Ability name (as the provider spells it) → criterion.
const ABILITY_CRITERIA: &[(&str, &str)] = &[
    ("sturdy", "Has: Sturdy"),
    ("swift-swim", "Has: Swift Swim"),
    ("cursed-body", "Has: Cursed Body"),
    ("mold-breaker", "Has: Mold Breaker"),
    ("drizzle", "Has: Drizzle"),
    ("sand-stream", "Has: Sand Stream"),
    ("snow-warning", "Has: Snow Warning"),
    ("grassy-surge", "Has: Grassy Surge"),
    ("magic-guard", "Has: Magic Guard"),
    ("thick-fat", "Has: Thick Fat"),
    ("flash-fire", "Has: Flash Fire"),
    ("water-absorb", "Has: Water Absorb"),
    ("sap-sipper", "Has: Sap Sipper"),
    ("prankster", "Has: Prankster"),
    ("competitive", "Has: Competitive"),
    ("frisk", "Has: Frisk"),
];

/// Move name → criterion. A move may back both a normal and a hard criterion.
const MOVE_CRITERIA: &[(&str, &str)] = &[
    ("brick-break", "Knows: Brick Break"),
    ("grass-knot", "Knows: Grass Knot"),
    ("iron-tail", "Knows: Iron Tail"),
    ("cut", "Knows: Cut"),
    ("flamethrower", "Knows: Flame Thrower"),
    ("leer", "Knows: Leer"),
    ("mud-slap", "Knows: Mud Slap"),
    ("grass-knot", "Learns Grass Knot"),
    ("brick-break", "Learns Brick Break"),
    ("earthquake", "Learns Earthquake"),
    ("bind", "Learns Bind"),
    ("mud-slap", "Learns Mud Slap"),
    ("close-combat", "Learns Close Combat"),
    ("dazzling-gleam", "Learns Dazzling Gleam"),
    ("dark-pulse", "Learns Dark Pulse"),
    ("heal-pulse", "Learns Heal Pulse"),
    ("scratch", "Learns Scratch"),
    ("wish", "Learns Wish"),
    ("healing-wish", "Learns Healing Wish"),
    ("belly-drum", "Learns Belly Drum"),
    ("after-you", "Learns After You"),
    ("sucker-punch", "Learns Sucker Punch"),
    ("cut", "Learns Cut"),
];

const HIGH_STAT: u32 = 100;
const LOW_STAT: u32 = 50;
const HIGH_TOTAL: u32 = 620;
const LOW_TOTAL: u32 = 320;

/// Each stat paired with the suffix used in its threshold criteria.
fn labelled_stats(stats: &Stats) -> [(u32, &'static str); 6] {
    [
        (stats.hp, "hp"),
        (stats.attack, "atk"),
        (stats.defense, "def"),
        (stats.special_attack, "sp atk"),
        (stats.special_defense, "sp def"),
        (stats.speed, "speed"),
    ]
}

lazy_static::lazy_static! {
    /// The union of the three pools, first-seen order, without duplicates.
    pub static ref ALL_CRITERIA: Vec<&'static str> = {
        let mut seen = HashSet::new();
        EASY_CRITERIA
            .iter()
            .chain(NORMAL_CRITERIA)
            .chain(HARD_CRITERIA)
            .copied()
            .filter(|c| seen.insert(*c))
            .collect()
    };
    /// The pool hard and imposter puzzles draw from.
    pub static ref HARD_AND_NORMAL_CRITERIA: Vec<&'static str> = {
        HARD_CRITERIA.iter().chain(NORMAL_CRITERIA).copied().collect()
    };
}

/// Upper-cases the first character: `"fire"` → `"Fire"`.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn is_region(criterion: &str) -> bool {
    REGIONS.contains(&criterion)
}

/// Whether `a` and `b` name a type combination that cannot occur.
pub fn is_impossible_pair(a: &str, b: &str) -> bool {
    IMPOSSIBLE_TYPE_PAIRS
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

/// The criterion that contradicts `criterion`, if it is one half of an
/// opposing pair.
pub fn opposite_of(criterion: &str) -> Option<&'static str> {
    OPPOSING_HARD_CRITERIA.iter().find_map(|&(high, low)| {
        if high == criterion {
            Some(low)
        } else if low == criterion {
            Some(high)
        } else {
            None
        }
    })
}

/// Computes every criterion satisfied by `pokemon`.
pub fn criteria_of(pokemon: &Pokemon) -> HashSet<String> {
    let mut criteria: HashSet<String> = pokemon.types.iter().map(|t| capitalize(t)).collect();

    let flags = [
        (pokemon.is_mega, "Mega"),
        (pokemon.is_legendary, "Legendary"),
        (pokemon.is_mythical, "Mythical"),
        (pokemon.is_ultra_beast, "Ultra Beast"),
        (pokemon.is_paradox, "Paradox"),
        (pokemon.can_evolve, "Can Evolve"),
        (pokemon.is_final_evolution, "Final Evolution"),
        (pokemon.is_partner, "Partner Pokemon"),
    ];
    criteria.extend(
        flags
            .iter()
            .filter(|(set, _)| *set)
            .map(|(_, label)| label.to_string()),
    );

    if !pokemon.region.is_empty() {
        criteria.insert(pokemon.region.clone());
    }

    for &(ability, label) in ABILITY_CRITERIA {
        if pokemon.abilities.iter().any(|a| a == ability) {
            criteria.insert(label.to_string());
        }
    }

    for &(name, label) in MOVE_CRITERIA {
        if pokemon.moves.iter().any(|m| m == name) {
            criteria.insert(label.to_string());
        }
    }

    for (value, suffix) in labelled_stats(&pokemon.stats) {
        if value > HIGH_STAT {
            criteria.insert(format!("Above {HIGH_STAT} {suffix}"));
        }
        if value < LOW_STAT {
            criteria.insert(format!("Below {LOW_STAT} {suffix}"));
        }
    }

    let total = pokemon.stats.total();
    if total < LOW_TOTAL {
        criteria.insert(format!("Has below {LOW_TOTAL} bst"));
    }
    if total > HIGH_TOTAL {
        criteria.insert(format!("Has above {HIGH_TOTAL} bst"));
    }

    criteria
}

/// Whether `pokemon` satisfies `criterion`.
pub fn satisfies(pokemon: &Pokemon, criterion: &str) -> bool {
    criteria_of(pokemon).contains(criterion)
}
