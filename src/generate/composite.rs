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

//! Modes built on top of a solved base grid.

use super::grid::{grid_puzzle, solve};
use super::retry;
use crate::anomaly::{derangement_coords, inject_anomalies, single_coord};
use crate::candidates::CandidateIndex;
use crate::config::GenerationConfig;
use crate::pokemon::Pokemon;
use crate::puzzle::{
    AnomalyPuzzle, Grid, GridPuzzle, Mode, MissMatchedPuzzle, Puzzle, RevealedCriterion,
};
use crate::random;
use crate::selector::Axis;
use rand::Rng;

/// A 5×5 axis-exclusive grid with one anomaly in every row and column.
pub(super) fn odd_one_out<R: Rng + ?Sized>(
    pool: &[Pokemon],
    config: &GenerationConfig,
    rng: &mut R,
) -> Option<Puzzle> {
    let index = CandidateIndex::build(pool);

    retry(
        Mode::OddOneOut,
        config.composite_attempts,
        config.log_interval,
        || {
            let (axes, filled) = solve(Mode::Blinded, &index, config, &mut *rng)?;
            let coords = derangement_coords(axes.size(), &mut *rng);
            let planted = inject_anomalies(&filled, &axes, &coords, &index, &mut *rng)?;
            Some(Puzzle::OddOneOut(AnomalyPuzzle {
                base: grid_puzzle(&axes, &planted, &index),
                odd_one_out_coords: coords,
            }))
        },
    )
}

/// A hard 3×3 grid with a single anomaly.
pub(super) fn imposter<R: Rng + ?Sized>(
    pool: &[Pokemon],
    config: &GenerationConfig,
    rng: &mut R,
) -> Option<Puzzle> {
    let index = CandidateIndex::build(pool);

    retry(
        Mode::Imposter,
        config.composite_attempts,
        config.log_interval,
        || {
            let (axes, filled) = solve(Mode::Imposter, &index, config, &mut *rng)?;
            let coords = vec![single_coord(axes.size(), &mut *rng)?];
            let planted = inject_anomalies(&filled, &axes, &coords, &index, &mut *rng)?;
            Some(Puzzle::Imposter(AnomalyPuzzle {
                base: grid_puzzle(&axes, &planted, &index),
                odd_one_out_coords: coords,
            }))
        },
    )
}

/// A solved normal grid whose Pokémon are shuffled into a grid with one empty
/// slot. One axis criterion is revealed.
pub(super) fn miss_matched<R: Rng + ?Sized>(
    pool: &[Pokemon],
    config: &GenerationConfig,
    rng: &mut R,
) -> Option<Puzzle> {
    let index = CandidateIndex::build(pool);

    retry(
        Mode::MissMatched,
        config.composite_attempts,
        config.log_interval,
        || {
            let (axes, filled) = solve(Mode::Normal, &index, config, &mut *rng)?;
            let size = filled.size();

            let axis = if random::coin_flip(&mut *rng) {
                Axis::Row
            } else {
                Axis::Col
            };
            let revealed = random::index(size, &mut *rng)?;
            let value = match axis {
                Axis::Row => axes.rows[revealed],
                Axis::Col => axes.cols[revealed],
            };

            let empty_slot = random::index(size * size, &mut *rng)?;
            let mut remaining: Vec<Pokemon> = filled
                .cells
                .iter()
                .flatten()
                .enumerate()
                .filter(|&(slot, _)| slot != empty_slot)
                .map(|(_, &idx)| index.pokemon(idx).clone())
                .collect();
            random::shuffle(&mut remaining, &mut *rng);

            let mut remaining = remaining.into_iter();
            let shuffled_grid: Grid = (0..size)
                .map(|r| {
                    (0..size)
                        .map(|c| {
                            if r * size + c == empty_slot {
                                None
                            } else {
                                remaining.next()
                            }
                        })
                        .collect()
                })
                .collect();

            let solution = grid_puzzle(&axes, &filled, &index);
            Some(Puzzle::MissMatched(MissMatchedPuzzle {
                base: GridPuzzle {
                    grid: shuffled_grid.clone(),
                    row_answers: solution.row_answers,
                    col_answers: solution.col_answers,
                },
                shuffled_grid,
                solution_grid: solution.grid,
                revealed_criterion: RevealedCriterion {
                    axis,
                    index: revealed,
                    value: value.to_string(),
                },
            }))
        },
    )
}
