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

//! Modes without a criteria grid: order, criteria and crossword.

use super::retry;
use crate::clues::{criteria_clues, easy_criteria_clues};
use crate::config::GenerationConfig;
use crate::criteria::capitalize;
use crate::crossword::{build_clues, place_words};
use crate::order::{OrderDirection, canonical_order};
use crate::pokemon::{OrderBy, Pokemon};
use crate::puzzle::{CriteriaPuzzle, CrosswordPuzzle, Mode, OrderPuzzle, Puzzle};
use crate::random;
use log::{info, warn};
use rand::Rng;
use std::collections::{HashMap, HashSet};

/// A random sample of the pool to put in order by a random key.
pub(super) fn order<R: Rng + ?Sized>(
    pool: &[Pokemon],
    config: &GenerationConfig,
    rng: &mut R,
) -> Option<Puzzle> {
    let list: Vec<Pokemon> = random::shuffled(pool.iter().collect::<Vec<_>>(), rng)
        .into_iter()
        .take(config.order_size)
        .cloned()
        .collect();
    let order_by = OrderBy::ALL[random::index(OrderBy::ALL.len(), rng)?];
    let order_direction = if random::coin_flip(rng) {
        OrderDirection::Asc
    } else {
        OrderDirection::Desc
    };
    let correct_order_ids = canonical_order(&list, order_by, order_direction);

    info!("[{}] Successfully generated puzzle.", Mode::Order);
    Some(Puzzle::Order(OrderPuzzle {
        pokemon_list: random::shuffled(list, rng),
        order_by,
        order_direction,
        correct_order_ids,
    }))
}

/// A random target Pokémon described by clues.
pub(super) fn criteria<R: Rng + ?Sized>(mode: Mode, pool: &[Pokemon], rng: &mut R) -> Option<Puzzle> {
    let target_pokemon = pool[random::index(pool.len(), rng)?].clone();
    info!(
        "[{mode}] Successfully generated puzzle. Target: {}",
        target_pokemon.name
    );

    Some(if mode == Mode::EasyCriteria {
        let clues = easy_criteria_clues(&target_pokemon, rng);
        Puzzle::EasyCriteria(CriteriaPuzzle {
            target_pokemon,
            clues,
        })
    } else {
        let clues = criteria_clues(&target_pokemon, rng);
        Puzzle::Criteria(CriteriaPuzzle {
            target_pokemon,
            clues,
        })
    })
}

/// The crossword answer for `pokemon`: its name uppercased, when the name is
/// short and purely alphabetic.
fn crossword_word(pokemon: &Pokemon, max_len: usize) -> Option<String> {
    let name = &pokemon.name;
    let usable = !name.is_empty()
        && name.len() <= max_len
        && name.chars().all(|c| c.is_ascii_alphabetic());
    usable.then(|| name.to_ascii_uppercase())
}

fn type_clue(pokemon: &Pokemon) -> String {
    pokemon
        .types
        .iter()
        .map(|t| capitalize(t))
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Interlocks a random selection of Pokémon names, retrying with a fresh
/// selection when a word cannot be anchored.
pub(super) fn crossword<R: Rng + ?Sized>(
    pool: &[Pokemon],
    config: &GenerationConfig,
    rng: &mut R,
) -> Option<Puzzle> {
    let mut seen = HashSet::new();
    let words: Vec<(String, &Pokemon)> = pool
        .iter()
        .filter_map(|p| crossword_word(p, config.max_word_length).map(|w| (w, p)))
        .filter(|(w, _)| seen.insert(w.clone()))
        .collect();
    if words.len() < config.crossword_words {
        warn!(
            "[{}] Only {} usable names, {} needed.",
            Mode::Crossword,
            words.len(),
            config.crossword_words
        );
        return None;
    }
    let by_word: HashMap<&str, &Pokemon> = words.iter().map(|(w, p)| (w.as_str(), *p)).collect();

    retry(
        Mode::Crossword,
        config.crossword_attempts,
        config.log_interval,
        || {
            let selection: Vec<String> = random::shuffled(words.iter().collect::<Vec<_>>(), &mut *rng)
                .into_iter()
                .take(config.crossword_words)
                .map(|(w, _)| w.clone())
                .collect();
            let layout = place_words(&selection, config.crossword_size, &mut *rng)?;

            let crossword_clues = build_clues(&layout.placements, |placement| {
                let word: String = placement.word.iter().collect();
                match by_word.get(word.as_str()) {
                    Some(pokemon) => (type_clue(pokemon), pokemon.name.clone()),
                    None => (String::new(), word),
                }
            });
            Some(Puzzle::Crossword(CrosswordPuzzle {
                crossword_grid: layout.grid,
                crossword_clues,
            }))
        },
    )
}
