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

//! JavaScript entry points. Run with `wasm-pack test --node`.

#![cfg(target_arch = "wasm32")]

mod common;

use jepoku_wasm::{
    GenerationConfig, Puzzle, ValidationResult, check_answers, generate_puzzle,
    generate_puzzle_with_config, pokemon_criteria,
};
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap()
}

#[wasm_bindgen_test]
fn test_generate_puzzle_returns_a_puzzle() {
    let pool = to_js(&common::type_pair_pool());
    let value = generate_puzzle("dex", pool).unwrap();
    let puzzle: Puzzle = serde_wasm_bindgen::from_value(value).unwrap();
    assert!(matches!(puzzle, Puzzle::Dex(_)));
}

#[wasm_bindgen_test]
fn test_generate_puzzle_rejects_unknown_mode() {
    let pool = to_js(&common::type_pair_pool());
    assert!(generate_puzzle("speedrun", pool).is_err());
}

#[wasm_bindgen_test]
fn test_exhausted_generation_is_null() {
    let pool = to_js(&common::universal_pool(1, 12));
    let config = to_js(&GenerationConfig::quick());
    let value = generate_puzzle_with_config("easy", pool, config).unwrap();
    assert!(value.is_null());
}

#[wasm_bindgen_test]
fn test_check_answers_round_trip() {
    let pool = to_js(&common::type_pair_pool());
    let puzzle_js = generate_puzzle("dex", pool).unwrap();
    let puzzle: Puzzle = serde_wasm_bindgen::from_value(puzzle_js.clone()).unwrap();
    let base = puzzle.grid_puzzle().unwrap();

    let submission = serde_json::json!({
        "kind": "grid",
        "rows": base.row_answers,
        "cols": base.col_answers,
    });
    let submission = submission
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap();

    let result: ValidationResult =
        serde_wasm_bindgen::from_value(check_answers(puzzle_js, submission).unwrap()).unwrap();
    assert!(result.is_correct);
}

#[wasm_bindgen_test]
fn test_check_answers_with_garbage_is_neutral() {
    let result = check_answers(JsValue::from_str("nope"), JsValue::NULL).unwrap();
    let result: ValidationResult = serde_wasm_bindgen::from_value(result).unwrap();
    assert_eq!(result, ValidationResult::neutral());
}

#[wasm_bindgen_test]
fn test_pokemon_criteria_is_sorted() {
    let criteria = pokemon_criteria(to_js(&common::plain(1, "marill", &["water", "fairy"]))).unwrap();
    let criteria: Vec<String> = serde_wasm_bindgen::from_value(criteria).unwrap();
    assert_eq!(criteria, vec!["Fairy", "Johto", "Water"]);
}
