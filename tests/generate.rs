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

mod common;

use jepoku_wasm::criteria::{OPPOSING_HARD_CRITERIA, TYPE_CRITERIA, satisfies};
use jepoku_wasm::error::ParseModeError;
use jepoku_wasm::mask::is_balanced;
use jepoku_wasm::order::OrderDirection;
use jepoku_wasm::puzzle::{GridPuzzle, Mode, Puzzle};
use jepoku_wasm::selector::Axis;
use jepoku_wasm::{GenerationConfig, Pokemon, generate};
use std::collections::HashSet;

fn run(mode: Mode, pool: &[Pokemon], seed: u64) -> Option<Puzzle> {
    generate(mode, pool, &GenerationConfig::default(), &mut common::rng(seed))
}

/// Every cell is filled, fits its row and column, and holds a distinct
/// Pokémon.
fn assert_cells_fit(puzzle: &GridPuzzle) {
    let size = puzzle.size();
    assert_eq!(puzzle.row_answers.len(), size);
    assert_eq!(puzzle.col_answers.len(), size);

    let answers: HashSet<&String> = puzzle.row_answers.iter().chain(&puzzle.col_answers).collect();
    assert_eq!(answers.len(), size * 2, "Axis criteria must be distinct.");

    let mut ids = HashSet::new();
    for (r, row) in puzzle.grid.iter().enumerate() {
        assert_eq!(row.len(), size);
        for (c, cell) in row.iter().enumerate() {
            let pokemon = cell.as_ref().expect("grid puzzles have no empty cells");
            assert!(satisfies(pokemon, &puzzle.row_answers[r]), "({r},{c}) misses its row");
            assert!(satisfies(pokemon, &puzzle.col_answers[c]), "({r},{c}) misses its column");
            assert!(ids.insert(pokemon.id), "Pokémon {} appears twice.", pokemon.id);
        }
    }
}

#[test]
fn test_mode_names_round_trip() {
    for mode in Mode::ALL {
        assert_eq!(mode.as_str().parse::<Mode>(), Ok(mode));
        assert_eq!(mode.to_string(), mode.as_str());
    }
    assert_eq!("odd-one-out".parse::<Mode>(), Ok(Mode::OddOneOut));
    assert_eq!(
        "speedrun".parse::<Mode>(),
        Err(ParseModeError("speedrun".to_string()))
    );
}

#[test]
fn test_empty_pool_generates_nothing() {
    for mode in Mode::ALL {
        assert!(
            generate(mode, &[], &GenerationConfig::quick(), &mut common::rng(0)).is_none(),
            "{mode} produced a puzzle from an empty pool."
        );
    }
}

#[test]
fn test_normal_puzzle() {
    let pool = common::universal_pool(1, 9);
    let Some(Puzzle::Normal(puzzle)) = run(Mode::Normal, &pool, 1) else {
        panic!("expected a normal puzzle");
    };
    assert_eq!(puzzle.size(), 3);
    assert_cells_fit(&puzzle);
}

#[test]
fn test_sprite_puzzle_uses_normal_recipe() {
    let pool = common::universal_pool(1, 9);
    let puzzle = run(Mode::Sprite, &pool, 2).expect("sprite puzzle");
    assert_eq!(puzzle.mode(), Mode::Sprite);
    assert_cells_fit(puzzle.grid_puzzle().unwrap());
}

#[test]
fn test_ditto_is_never_placed() {
    let mut pool = common::universal_pool(1, 9);
    let mut ditto = common::universal(132);
    ditto.name = "Ditto".to_string();
    pool.push(ditto);

    for seed in 0..3 {
        let Some(Puzzle::Ditto(puzzle)) = run(Mode::Ditto, &pool, seed) else {
            panic!("expected a ditto puzzle");
        };
        assert_cells_fit(&puzzle);
        assert!(
            puzzle.grid.iter().flatten().flatten().all(|p| p.id != 132),
            "Ditto must be filtered out of the pool."
        );
    }
}

#[test]
fn test_exhausted_budget_returns_none() {
    // The fixture satisfies only five easy criteria, six are needed.
    let pool = common::universal_pool(1, 30);
    let puzzle = generate(Mode::Easy, &pool, &GenerationConfig::quick(), &mut common::rng(0));
    assert!(puzzle.is_none());
}

#[test]
fn test_hard_puzzle_avoids_opposing_criteria() {
    // Both halves of every opposing pair are satisfiable, by different Pokémon.
    let mut pool = common::universal_hard_pool(1, 9);
    pool.extend((100..109).map(|id| {
        let mut frail = common::universal_hard(id);
        frail.stats = common::stats(10);
        frail
    }));

    for seed in 0..8 {
        let Some(Puzzle::Hard(puzzle)) = run(Mode::Hard, &pool, seed) else {
            panic!("expected a hard puzzle for seed {seed}");
        };
        assert_cells_fit(&puzzle);

        let answers: HashSet<&str> = puzzle
            .row_answers
            .iter()
            .chain(&puzzle.col_answers)
            .map(String::as_str)
            .collect();
        for (high, low) in OPPOSING_HARD_CRITERIA {
            assert!(
                !(answers.contains(high) && answers.contains(low)),
                "seed {seed} picked both {high} and {low}: {answers:?}"
            );
        }
    }
}

#[test]
fn test_sparse_legendary_pool_generates_normal_puzzle() {
    let pool = common::sparse_legendary_pool();
    for pokemon in &pool[1..] {
        let kept = ["Fire", "Flying", "Legendary"]
            .iter()
            .filter(|criterion| satisfies(pokemon, criterion))
            .count();
        assert_eq!(kept, 1, "{} keeps {kept} of the three", pokemon.name);
    }

    for seed in 0..3 {
        let Some(Puzzle::Normal(puzzle)) = run(Mode::Normal, &pool, seed) else {
            panic!("expected a normal puzzle for seed {seed}");
        };
        assert_eq!(puzzle.row_answers.len(), 3);
        assert_eq!(puzzle.col_answers.len(), 3);
        assert_cells_fit(&puzzle);
    }
}

#[test]
fn test_ditto_only_pool_generates_nothing() {
    let pool: Vec<Pokemon> = ["Ditto", "ditto", "DITTO"]
        .iter()
        .zip(1..)
        .map(|(name, id)| {
            let mut ditto = common::universal(id);
            ditto.name = name.to_string();
            ditto
        })
        .collect();
    // An unbounded budget would spin forever if the filtered pool reached the solver.
    let config = GenerationConfig {
        max_attempts: usize::MAX,
        ..GenerationConfig::default()
    };
    assert!(generate(Mode::Ditto, &pool, &config, &mut common::rng(0)).is_none());
}

#[test]
fn test_dual_puzzle_fits_both_layers() {
    let pool = common::universal_hard_pool(1, 9);
    let Some(Puzzle::Dual(puzzle)) = run(Mode::Dual, &pool, 4) else {
        panic!("expected a dual puzzle");
    };
    assert_cells_fit(&puzzle.base);

    let all: HashSet<&String> = puzzle
        .base
        .row_answers
        .iter()
        .chain(&puzzle.base.col_answers)
        .chain(&puzzle.row_answers_hard)
        .chain(&puzzle.col_answers_hard)
        .collect();
    assert_eq!(all.len(), 12, "Both layers together use twelve criteria.");

    for (r, row) in puzzle.base.grid.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let pokemon = cell.as_ref().unwrap();
            assert!(satisfies(pokemon, &puzzle.row_answers_hard[r]));
            assert!(satisfies(pokemon, &puzzle.col_answers_hard[c]));
        }
    }
}

#[test]
fn test_blinded_puzzle_has_balanced_mask() {
    let pool = common::universal_pool(1, 25);
    let Some(Puzzle::Blinded(puzzle)) = run(Mode::Blinded, &pool, 5) else {
        panic!("expected a blinded puzzle");
    };
    assert_eq!(puzzle.base.size(), 5);
    assert_cells_fit(&puzzle.base);
    assert!(is_balanced(&puzzle.visible_mask, 2), "{:?}", puzzle.visible_mask);
}

#[test]
fn test_odd_one_out_plants_one_anomaly_per_line() {
    let mut pool = common::universal_pool(1, 25);
    pool.extend(common::outsiders(100, 10));
    let Some(Puzzle::OddOneOut(puzzle)) = run(Mode::OddOneOut, &pool, 6) else {
        panic!("expected an odd-one-out puzzle");
    };

    let size = puzzle.base.size();
    assert_eq!(size, 5);
    assert_eq!(puzzle.odd_one_out_coords.len(), size);
    for line in 0..size {
        assert!(puzzle.anomaly_in_row(line).is_some());
        assert!(puzzle.anomaly_in_col(line).is_some());
    }

    let base = &puzzle.base;
    for (r, row) in base.grid.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let pokemon = cell.as_ref().unwrap();
            let fits_row = satisfies(pokemon, &base.row_answers[r]);
            let fits_col = satisfies(pokemon, &base.col_answers[c]);
            if puzzle.anomaly_in_row(r) == Some(c) {
                assert!(!fits_row && !fits_col, "anomaly at ({r},{c}) fits a line");
            } else {
                assert!(fits_row && fits_col, "regular cell ({r},{c}) misfits");
            }
        }
    }
}

#[test]
fn test_imposter_plants_a_single_anomaly() {
    let mut pool = common::universal_hard_pool(1, 9);
    pool.extend(common::outsiders(100, 3));
    let Some(Puzzle::Imposter(puzzle)) = run(Mode::Imposter, &pool, 7) else {
        panic!("expected an imposter puzzle");
    };

    assert_eq!(puzzle.base.size(), 3);
    let [coord] = puzzle.odd_one_out_coords.as_slice() else {
        panic!("imposter puzzles hold exactly one anomaly");
    };
    let imposter = puzzle.base.grid[coord.row][coord.col].as_ref().unwrap();
    assert!(imposter.id >= 100, "The imposter must come from the outsiders.");
}

#[test]
fn test_miss_matched_puzzle() {
    let pool = common::universal_pool(1, 9);
    let Some(Puzzle::MissMatched(puzzle)) = run(Mode::MissMatched, &pool, 8) else {
        panic!("expected a miss-matched puzzle");
    };

    assert_eq!(puzzle.base.grid, puzzle.shuffled_grid);
    let shown: Vec<u32> = puzzle.shuffled_grid.iter().flatten().flatten().map(|p| p.id).collect();
    let empty = puzzle.shuffled_grid.iter().flatten().filter(|c| c.is_none()).count();
    assert_eq!(shown.len(), 8);
    assert_eq!(empty, 1, "Exactly one slot stays empty.");

    let solution = GridPuzzle {
        grid: puzzle.solution_grid.clone(),
        row_answers: puzzle.base.row_answers.clone(),
        col_answers: puzzle.base.col_answers.clone(),
    };
    assert_cells_fit(&solution);
    let solution_ids: HashSet<u32> = solution.grid.iter().flatten().flatten().map(|p| p.id).collect();
    assert!(shown.iter().all(|id| solution_ids.contains(id)));

    let revealed = &puzzle.revealed_criterion;
    let answers = match revealed.axis {
        Axis::Row => &puzzle.base.row_answers,
        Axis::Col => &puzzle.base.col_answers,
    };
    assert_eq!(answers[revealed.index], revealed.value);
}

#[test]
fn test_dex_puzzle_uses_types_only() {
    let pool = common::type_pair_pool();
    let Some(Puzzle::Dex(puzzle)) = run(Mode::Dex, &pool, 9) else {
        panic!("expected a dex puzzle");
    };
    assert_cells_fit(&puzzle.base);
    assert!(
        puzzle
            .base
            .row_answers
            .iter()
            .chain(&puzzle.base.col_answers)
            .all(|a| TYPE_CRITERIA.contains(&a.as_str()))
    );
    assert_eq!(puzzle.dex_display.len(), 3);
    assert!(puzzle.dex_display.iter().all(|row| row.len() == 3));
}

#[test]
fn test_order_puzzle() {
    let pool = common::type_pair_pool();
    let Some(Puzzle::Order(puzzle)) = run(Mode::Order, &pool, 10) else {
        panic!("expected an order puzzle");
    };

    assert_eq!(puzzle.pokemon_list.len(), 16);
    let listed: HashSet<u32> = puzzle.pokemon_list.iter().map(|p| p.id).collect();
    let ordered: HashSet<u32> = puzzle.correct_order_ids.iter().copied().collect();
    assert_eq!(listed.len(), 16, "No Pokémon is listed twice.");
    assert_eq!(listed, ordered);

    let values: Vec<u32> = puzzle
        .correct_order_ids
        .iter()
        .map(|id| {
            pool.iter()
                .find(|p| p.id == *id)
                .unwrap()
                .order_value(puzzle.order_by)
        })
        .collect();
    let sorted = values.windows(2).all(|w| match puzzle.order_direction {
        OrderDirection::Asc => w[0] <= w[1],
        OrderDirection::Desc => w[0] >= w[1],
    });
    assert!(sorted, "{:?} {:?}: {values:?}", puzzle.order_by, puzzle.order_direction);
}

#[test]
fn test_order_puzzle_with_small_pool() {
    let pool = common::outsiders(1, 5);
    let Some(Puzzle::Order(puzzle)) = run(Mode::Order, &pool, 11) else {
        panic!("expected an order puzzle");
    };
    assert_eq!(puzzle.pokemon_list.len(), 5);
    assert_eq!(puzzle.correct_order_ids.len(), 5);
}

#[test]
fn test_criteria_puzzles() {
    let mut target = common::plain(25, "pikachu", &["electric"]);
    target.moves = vec!["thunderbolt".into(), "quick-attack".into(), "iron-tail".into()];
    target.abilities = vec!["static".into()];
    let pool = vec![target];

    let Some(Puzzle::Criteria(puzzle)) = run(Mode::Criteria, &pool, 12) else {
        panic!("expected a criteria puzzle");
    };
    assert_eq!(puzzle.target_pokemon.id, 25);
    assert_eq!(puzzle.clues.len(), 18, "Sixteen fixed clues plus two moves.");
    let labels: HashSet<&str> = puzzle.clues.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels.len(), puzzle.clues.len(), "Clue labels are unique.");
    assert!(
        puzzle
            .clues
            .iter()
            .any(|c| c.label == "Possible Ability" && c.value == "Static")
    );

    let Some(Puzzle::EasyCriteria(puzzle)) = run(Mode::EasyCriteria, &pool, 12) else {
        panic!("expected an easy-criteria puzzle");
    };
    let labels: Vec<&str> = puzzle.clues.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Type 1",
            "Type 2",
            "Status",
            "Region",
            "Evolution Status",
            "Pokédex Number",
            "A Possible Ability",
            "Base Stat Total",
        ]
    );
    assert_eq!(puzzle.clues[1].value, "None");
    assert_eq!(puzzle.clues[7].value, "420");
}

fn eeveelutions() -> Vec<Pokemon> {
    [
        ("eevee", "normal"),
        ("vaporeon", "water"),
        ("jolteon", "electric"),
        ("flareon", "fire"),
        ("espeon", "psychic"),
        ("umbreon", "dark"),
        ("leafeon", "grass"),
        ("glaceon", "ice"),
        ("sylveon", "fairy"),
    ]
    .iter()
    .enumerate()
    .map(|(i, &(name, kind))| common::plain(133 + i as u32, name, &[kind]))
    .collect()
}

#[test]
fn test_crossword_puzzle() {
    let pool = eeveelutions();
    let config = GenerationConfig {
        crossword_words: 5,
        ..GenerationConfig::default()
    };
    let Some(Puzzle::Crossword(puzzle)) =
        generate(Mode::Crossword, &pool, &config, &mut common::rng(13))
    else {
        panic!("expected a crossword puzzle");
    };

    assert_eq!(puzzle.crossword_grid.len(), config.crossword_size);
    let clues = &puzzle.crossword_clues;
    let all: Vec<_> = clues.across.iter().chain(&clues.down).collect();
    assert_eq!(all.len(), 5);

    for clue in all {
        let pokemon = pool
            .iter()
            .find(|p| p.name == clue.answer)
            .expect("answers are pool names");
        assert_eq!(clue.clue, jepoku_wasm::criteria::capitalize(&pokemon.types[0]));
        assert_eq!(clue.length, clue.answer.len());

        let spelled: String = (0..clue.length)
            .filter_map(|i| match clue.direction {
                jepoku_wasm::crossword::Direction::Across => {
                    puzzle.crossword_grid[clue.row][clue.col + i]
                }
                jepoku_wasm::crossword::Direction::Down => {
                    puzzle.crossword_grid[clue.row + i][clue.col]
                }
            })
            .collect();
        assert_eq!(spelled, clue.answer.to_uppercase());
    }
}

#[test]
fn test_crossword_skips_unusable_names() {
    let mut pool = eeveelutions();
    pool.truncate(3);
    pool.push(common::plain(122, "mr-mime", &["psychic", "fairy"]));
    pool.push(common::plain(655, "fletchinder", &["fire", "flying"]));
    let config = GenerationConfig {
        crossword_words: 4,
        ..GenerationConfig::quick()
    };
    assert!(
        generate(Mode::Crossword, &pool, &config, &mut common::rng(0)).is_none(),
        "Only three names are usable."
    );
}

#[test]
fn test_puzzle_json_shape() {
    let pool = common::universal_pool(1, 9);
    let puzzle = run(Mode::Normal, &pool, 14).unwrap();
    let json = serde_json::to_value(&puzzle).unwrap();
    assert_eq!(json["mode"], "normal");
    assert_eq!(json["rowAnswers"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["grid"][0][0]["region"], "Kanto");

    let back: Puzzle = serde_json::from_value(json).unwrap();
    assert_eq!(back, puzzle);
}

#[test]
fn test_anomaly_json_shape() {
    let mut pool = common::universal_hard_pool(1, 9);
    pool.extend(common::outsiders(100, 3));
    let puzzle = run(Mode::Imposter, &pool, 15).unwrap();
    let json = serde_json::to_value(&puzzle).unwrap();
    assert_eq!(json["mode"], "imposter");
    assert!(json["oddOneOutCoords"][0]["row"].is_u64());
    assert!(json["colAnswers"].is_array(), "Flattened base fields sit at the top level.");
}
