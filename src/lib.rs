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

//! Puzzle engine for Jepoku, the Pokémon grid-deduction game.
//!
//! The library generates puzzles for every game mode from a pool of Pokémon
//! records and checks player submissions. The `#[wasm_bindgen]` functions at
//! the bottom of this file are the browser entry points; everything else is
//! plain Rust and usable without a JavaScript host.

pub mod anomaly;
pub mod candidates;
pub mod clues;
pub mod config;
pub mod criteria;
pub mod crossword;
pub mod error;
pub mod generate;
pub mod mask;
pub mod order;
pub mod pokemon;
pub mod puzzle;
pub mod random;
pub mod score;
pub mod selector;
pub mod solver;

pub use config::GenerationConfig;
pub use generate::generate;
pub use pokemon::{Pokemon, RawPokemon, parse_pool, pool_from_values, sanitize_pool};
pub use puzzle::{Mode, Puzzle};
pub use score::{Submission, ValidationResult, score, score_json};

use log::warn;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}

fn pool_from_js(pool: JsValue) -> Result<Vec<Pokemon>, JsValue> {
    let values: Vec<serde_json::Value> = serde_wasm_bindgen::from_value(pool)?;
    Ok(pool_from_values(values))
}

fn generate_with(mode: &str, pool: JsValue, config: &GenerationConfig) -> Result<JsValue, JsValue> {
    let mode: Mode = mode.parse().map_err(|e: error::ParseModeError| JsValue::from_str(&e.to_string()))?;
    let pool = pool_from_js(pool)?;
    match generate(mode, &pool, config, &mut rand::rng()) {
        Some(puzzle) => to_js(&puzzle),
        None => Ok(JsValue::NULL),
    }
}

/// Generates a puzzle for `mode` from a JS array of Pokémon records.
///
/// Resolves to `null` when no puzzle could be generated and rejects on an
/// unknown mode or a pool that is not an array of records.
#[wasm_bindgen(js_name = generatePuzzle)]
pub fn generate_puzzle(mode: &str, pool: JsValue) -> Result<JsValue, JsValue> {
    generate_with(mode, pool, &GenerationConfig::default())
}

/// Like [`generate_puzzle`], with budget overrides. Fields absent from
/// `config` keep their defaults.
#[wasm_bindgen(js_name = generatePuzzleWithConfig)]
pub fn generate_puzzle_with_config(
    mode: &str,
    pool: JsValue,
    config: JsValue,
) -> Result<JsValue, JsValue> {
    let config: GenerationConfig = if config.is_undefined() || config.is_null() {
        GenerationConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };
    generate_with(mode, pool, &config)
}

/// Scores a submission against the puzzle it answers. Payloads that do not
/// decode score as "nothing correct".
#[wasm_bindgen(js_name = checkAnswers)]
pub fn check_answers(puzzle: JsValue, submission: JsValue) -> Result<JsValue, JsValue> {
    let puzzle: Option<Puzzle> = serde_wasm_bindgen::from_value(puzzle)
        .inspect_err(|e| warn!("malformed puzzle payload: {e}"))
        .ok();
    let submission: Option<Submission> = serde_wasm_bindgen::from_value(submission)
        .inspect_err(|e| warn!("malformed submission payload: {e}"))
        .ok();
    to_js(&score(puzzle.as_ref(), submission.as_ref()))
}

/// Every criterion `pokemon` satisfies, sorted.
#[wasm_bindgen(js_name = pokemonCriteria)]
pub fn pokemon_criteria(pokemon: JsValue) -> Result<JsValue, JsValue> {
    let pokemon: Pokemon = serde_wasm_bindgen::from_value(pokemon)?;
    let mut criteria: Vec<String> = criteria::criteria_of(&pokemon).into_iter().collect();
    criteria.sort();
    to_js(&criteria)
}
