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

//! Checks a player's submission against the puzzle it was made for.
//!
//! Criteria are always re-derived with [`crate::criteria::satisfies`], the
//! same function generation used, so anomaly and placement checks accept any
//! criterion that genuinely fits and not only the stored answer.

use crate::anomaly::Coord;
use crate::criteria::satisfies;
use crate::error::PayloadError;
use crate::order::score_order;
use crate::pokemon::Pokemon;
use crate::puzzle::{
    AnomalyPuzzle, CriteriaPuzzle, CrosswordPuzzle, DualPuzzle, GridPuzzle, MissMatchedPuzzle,
    OrderPuzzle, Puzzle,
};
use crate::selector::Axis;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Per-line guesses. A missing or empty guess means "not answered".
pub type Guesses = Vec<Option<String>>;

/// What the player sent back, tagged by `"kind"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum Submission {
    /// Row and column guesses for the plain grid modes.
    Grid {
        #[serde(default)]
        rows: Guesses,
        #[serde(default)]
        cols: Guesses,
    },
    Dual {
        #[serde(default)]
        rows: Guesses,
        #[serde(default)]
        cols: Guesses,
        #[serde(default)]
        rows_hard: Guesses,
        #[serde(default)]
        cols_hard: Guesses,
    },
    /// Guesses plus the cells marked as anomalies.
    Anomaly {
        #[serde(default)]
        rows: Guesses,
        #[serde(default)]
        cols: Guesses,
        #[serde(default)]
        selected: Vec<Coord>,
    },
    /// Guesses plus the player's arrangement, as Pokémon ids.
    MissMatched {
        #[serde(default)]
        rows: Guesses,
        #[serde(default)]
        cols: Guesses,
        #[serde(default)]
        placement: Vec<Vec<Option<u32>>>,
    },
    /// Pokémon ids in the submitted order.
    Order { order: Vec<u32> },
    /// Entered letters, same shape as the crossword grid.
    Crossword { letters: Vec<Vec<Option<String>>> },
    /// A name guess for the criteria modes.
    Guess { name: String },
}

/// Mode-specific parts of a [`ValidationResult`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum ValidationDetail {
    #[default]
    None,
    Dual {
        row_results_hard: Vec<Option<bool>>,
        col_results_hard: Vec<Option<bool>>,
    },
    Anomaly {
        odd_one_out_selection_results: Vec<Vec<Option<bool>>>,
        is_odd_one_out_selection_correct: bool,
    },
    Placement {
        is_placement_correct: bool,
    },
    Order {
        accuracy: f64,
    },
    Crossword {
        letter_results: Vec<Vec<Option<bool>>>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub row_results: Vec<Option<bool>>,
    pub col_results: Vec<Option<bool>>,
    pub is_criteria_correct: bool,
    pub is_correct: bool,
    #[serde(default)]
    pub detail: ValidationDetail,
}

impl ValidationResult {
    /// Nothing answered, nothing correct.
    pub fn neutral() -> Self {
        Self::default()
    }
}

fn guess_at(guesses: &[Option<String>], i: usize) -> Option<&str> {
    guesses
        .get(i)
        .and_then(|g| g.as_deref())
        .filter(|g| !g.is_empty())
}

/// `Some(guess == answer)` per line, `None` where nothing was guessed.
fn exact_results(guesses: &[Option<String>], answers: &[String]) -> Vec<Option<bool>> {
    answers
        .iter()
        .enumerate()
        .map(|(i, answer)| guess_at(guesses, i).map(|g| g == answer))
        .collect()
}

fn all_correct<'a>(results: impl IntoIterator<Item = &'a Option<bool>>) -> bool {
    results.into_iter().all(|r| *r == Some(true))
}

fn score_grid(puzzle: &GridPuzzle, rows: &[Option<String>], cols: &[Option<String>]) -> ValidationResult {
    let row_results = exact_results(rows, &puzzle.row_answers);
    let col_results = exact_results(cols, &puzzle.col_answers);
    let is_criteria_correct = all_correct(row_results.iter().chain(&col_results));
    ValidationResult {
        row_results,
        col_results,
        is_criteria_correct,
        is_correct: is_criteria_correct,
        detail: ValidationDetail::None,
    }
}

fn score_dual(
    puzzle: &DualPuzzle,
    rows: &[Option<String>],
    cols: &[Option<String>],
    rows_hard: &[Option<String>],
    cols_hard: &[Option<String>],
) -> ValidationResult {
    let row_results = exact_results(rows, &puzzle.base.row_answers);
    let col_results = exact_results(cols, &puzzle.base.col_answers);
    let row_results_hard = exact_results(rows_hard, &puzzle.row_answers_hard);
    let col_results_hard = exact_results(cols_hard, &puzzle.col_answers_hard);
    let is_criteria_correct = all_correct(
        row_results
            .iter()
            .chain(&col_results)
            .chain(&row_results_hard)
            .chain(&col_results_hard),
    );
    ValidationResult {
        row_results,
        col_results,
        is_criteria_correct,
        is_correct: is_criteria_correct,
        detail: ValidationDetail::Dual {
            row_results_hard,
            col_results_hard,
        },
    }
}

/// Whether every occupied cell in `line` satisfies `guess`. An empty cell
/// fails the line.
fn line_satisfies<'a>(mut line: impl Iterator<Item = &'a Option<Pokemon>>, guess: &str) -> bool {
    line.all(|cell| cell.as_ref().is_some_and(|p| satisfies(p, guess)))
}

fn score_anomaly(
    puzzle: &AnomalyPuzzle,
    rows: &[Option<String>],
    cols: &[Option<String>],
    selected: &[Coord],
) -> ValidationResult {
    let grid = &puzzle.base.grid;
    let size = puzzle.base.size();

    let row_results: Vec<Option<bool>> = (0..size)
        .map(|r| {
            let guess = guess_at(rows, r)?;
            let skip = puzzle.anomaly_in_row(r);
            let line = grid[r]
                .iter()
                .enumerate()
                .filter(move |&(c, _)| Some(c) != skip)
                .map(|(_, cell)| cell);
            Some(line_satisfies(line, guess))
        })
        .collect();
    let col_results: Vec<Option<bool>> = (0..size)
        .map(|c| {
            let guess = guess_at(cols, c)?;
            let skip = puzzle.anomaly_in_col(c);
            let line = grid
                .iter()
                .enumerate()
                .filter(move |&(r, _)| Some(r) != skip)
                .filter_map(move |(_, row)| row.get(c));
            Some(line_satisfies(line, guess))
        })
        .collect();
    let is_criteria_correct = all_correct(row_results.iter().chain(&col_results));

    let expected: HashSet<Coord> = puzzle.odd_one_out_coords.iter().copied().collect();
    let chosen: HashSet<Coord> = selected.iter().copied().collect();
    let is_odd_one_out_selection_correct = expected == chosen;
    let odd_one_out_selection_results = (0..size)
        .map(|row| {
            (0..size)
                .map(|col| {
                    let coord = Coord { row, col };
                    chosen.contains(&coord).then(|| expected.contains(&coord))
                })
                .collect()
        })
        .collect();

    ValidationResult {
        row_results,
        col_results,
        is_criteria_correct,
        is_correct: is_criteria_correct && is_odd_one_out_selection_correct,
        detail: ValidationDetail::Anomaly {
            odd_one_out_selection_results,
            is_odd_one_out_selection_correct,
        },
    }
}

/// Per-line results where the revealed line is compared with its revealed
/// value.
fn revealed_results(
    puzzle: &MissMatchedPuzzle,
    axis: Axis,
    guesses: &[Option<String>],
    answers: &[String],
) -> Vec<Option<bool>> {
    let revealed = &puzzle.revealed_criterion;
    answers
        .iter()
        .enumerate()
        .map(|(i, answer)| {
            let guess = guess_at(guesses, i)?;
            if revealed.axis == axis && revealed.index == i {
                Some(guess == revealed.value)
            } else {
                Some(guess == answer)
            }
        })
        .collect()
}

/// The arrangement is correct when it uses every shuffled Pokémon exactly
/// once and each one fits its cell's solution criteria.
fn placement_correct(puzzle: &MissMatchedPuzzle, placement: &[Vec<Option<u32>>]) -> bool {
    let base = &puzzle.base;
    let lookup = |id: u32| {
        puzzle
            .solution_grid
            .iter()
            .flatten()
            .flatten()
            .find(|p| p.id == id)
    };
    let expected: Vec<u32> = puzzle
        .shuffled_grid
        .iter()
        .flatten()
        .flatten()
        .map(|p| p.id)
        .collect();

    let mut placed: Vec<u32> = Vec::with_capacity(expected.len());
    for (r, row) in placement.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let Some(id) = *cell else {
                continue;
            };
            let (Some(row_criterion), Some(col_criterion)) =
                (base.row_answers.get(r), base.col_answers.get(c))
            else {
                return false;
            };
            let fits = lookup(id).is_some_and(|p| {
                satisfies(p, row_criterion) && satisfies(p, col_criterion)
            });
            if !fits {
                return false;
            }
            placed.push(id);
        }
    }

    let mut expected = expected;
    expected.sort_unstable();
    placed.sort_unstable();
    placed == expected
}

fn score_miss_matched(
    puzzle: &MissMatchedPuzzle,
    rows: &[Option<String>],
    cols: &[Option<String>],
    placement: &[Vec<Option<u32>>],
) -> ValidationResult {
    let row_results = revealed_results(puzzle, Axis::Row, rows, &puzzle.base.row_answers);
    let col_results = revealed_results(puzzle, Axis::Col, cols, &puzzle.base.col_answers);
    let is_criteria_correct = all_correct(row_results.iter().chain(&col_results));
    let is_placement_correct = placement_correct(puzzle, placement);

    ValidationResult {
        row_results,
        col_results,
        is_criteria_correct,
        is_correct: is_criteria_correct && is_placement_correct,
        detail: ValidationDetail::Placement {
            is_placement_correct,
        },
    }
}

fn score_order_puzzle(puzzle: &OrderPuzzle, order: &[u32]) -> ValidationResult {
    let score = score_order(order, &puzzle.correct_order_ids);
    ValidationResult {
        is_correct: score.passed,
        detail: ValidationDetail::Order {
            accuracy: score.accuracy,
        },
        ..ValidationResult::neutral()
    }
}

fn score_crossword(puzzle: &CrosswordPuzzle, letters: &[Vec<Option<String>>]) -> ValidationResult {
    let entered = |r: usize, c: usize| {
        letters
            .get(r)
            .and_then(|row| row.get(c))
            .and_then(|cell| cell.as_deref())
            .and_then(|s| s.trim().chars().next())
    };

    let letter_results: Vec<Vec<Option<bool>>> = puzzle
        .crossword_grid
        .iter()
        .enumerate()
        .map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(|(c, expected)| {
                    let expected = (*expected)?;
                    let got = entered(r, c)?;
                    Some(got.eq_ignore_ascii_case(&expected))
                })
                .collect()
        })
        .collect();

    let is_correct = puzzle
        .crossword_grid
        .iter()
        .flatten()
        .zip(letter_results.iter().flatten())
        .all(|(expected, result)| expected.is_none() || *result == Some(true));

    ValidationResult {
        is_correct,
        detail: ValidationDetail::Crossword { letter_results },
        ..ValidationResult::neutral()
    }
}

fn score_guess(puzzle: &CriteriaPuzzle, name: &str) -> ValidationResult {
    let name = name.trim();
    ValidationResult {
        is_correct: !name.is_empty()
            && name.to_lowercase() == puzzle.target_pokemon.name.to_lowercase(),
        ..ValidationResult::neutral()
    }
}

/// Scores `submission` against `puzzle`.
///
/// A missing puzzle or submission, or a submission of the wrong kind for the
/// puzzle's mode, yields [`ValidationResult::neutral`].
pub fn score(puzzle: Option<&Puzzle>, submission: Option<&Submission>) -> ValidationResult {
    let (Some(puzzle), Some(submission)) = (puzzle, submission) else {
        return ValidationResult::neutral();
    };

    match (puzzle, submission) {
        (
            Puzzle::Normal(p)
            | Puzzle::Easy(p)
            | Puzzle::Hard(p)
            | Puzzle::Timer(p)
            | Puzzle::Ditto(p)
            | Puzzle::Sprite(p),
            Submission::Grid { rows, cols },
        ) => score_grid(p, rows, cols),
        (Puzzle::Blinded(p), Submission::Grid { rows, cols }) => score_grid(&p.base, rows, cols),
        (Puzzle::Dex(p), Submission::Grid { rows, cols }) => score_grid(&p.base, rows, cols),
        (
            Puzzle::Dual(p),
            Submission::Dual {
                rows,
                cols,
                rows_hard,
                cols_hard,
            },
        ) => score_dual(p, rows, cols, rows_hard, cols_hard),
        (
            Puzzle::OddOneOut(p) | Puzzle::Imposter(p),
            Submission::Anomaly {
                rows,
                cols,
                selected,
            },
        ) => score_anomaly(p, rows, cols, selected),
        (
            Puzzle::MissMatched(p),
            Submission::MissMatched {
                rows,
                cols,
                placement,
            },
        ) => score_miss_matched(p, rows, cols, placement),
        (Puzzle::Order(p), Submission::Order { order }) => score_order_puzzle(p, order),
        (Puzzle::Crossword(p), Submission::Crossword { letters }) => score_crossword(p, letters),
        (Puzzle::Criteria(p) | Puzzle::EasyCriteria(p), Submission::Guess { name }) => {
            score_guess(p, name)
        }
        (puzzle, _) => {
            warn!("Submission does not match a {} puzzle.", puzzle.mode());
            ValidationResult::neutral()
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(json: &str, what: &'static str) -> Result<T, PayloadError> {
    if json.trim().is_empty() {
        return Err(PayloadError::Missing(what));
    }
    serde_json::from_str(json).map_err(|source| PayloadError::Json { what, source })
}

pub fn parse_puzzle(json: &str) -> Result<Puzzle, PayloadError> {
    decode(json, "puzzle")
}

pub fn parse_submission(json: &str) -> Result<Submission, PayloadError> {
    decode(json, "submission")
}

/// [`score`] over JSON payloads. Undecodable payloads are logged and score
/// as neutral.
pub fn score_json(puzzle: &str, submission: &str) -> ValidationResult {
    let puzzle = parse_puzzle(puzzle)
        .inspect_err(|e| warn!("{e}"))
        .ok();
    let submission = parse_submission(submission)
        .inspect_err(|e| warn!("{e}"))
        .ok();
    score(puzzle.as_ref(), submission.as_ref())
}
