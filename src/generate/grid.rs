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

//! Plain grid modes: standard, blinded, dex and dual.

use super::retry;
use crate::candidates::CandidateIndex;
use crate::config::GenerationConfig;
use crate::criteria::{
    EASY_CRITERIA, HARD_AND_NORMAL_CRITERIA, HARD_CRITERIA, NORMAL_CRITERIA, TYPE_CRITERIA,
};
use crate::mask::{generate_visibility_mask, visible_count};
use crate::pokemon::Pokemon;
use crate::puzzle::{
    BlindedPuzzle, DexDisplay, DexPuzzle, DualPuzzle, GridPuzzle, Mode, Puzzle,
};
use crate::random;
use crate::selector::{AxisCriteria, SelectionPolicy, select};
use crate::solver::{FilledGrid, fill_grid};
use rand::Rng;
use std::collections::HashSet;

pub(super) const STANDARD_SIZE: usize = 3;
pub(super) const BLINDED_SIZE: usize = 5;

/// Where a mode's criteria come from and how big its grid is.
#[derive(Debug, Clone, Copy)]
pub(super) struct Recipe {
    pub policy: SelectionPolicy,
    pub criteria: &'static [&'static str],
    pub size: usize,
}

pub(super) fn recipe(mode: Mode) -> Recipe {
    match mode {
        Mode::Easy | Mode::Timer => Recipe {
            policy: SelectionPolicy::Disjoint,
            criteria: EASY_CRITERIA,
            size: STANDARD_SIZE,
        },
        Mode::Hard | Mode::Imposter => Recipe {
            policy: SelectionPolicy::OpposingPairExclusion,
            criteria: HARD_AND_NORMAL_CRITERIA.as_slice(),
            size: STANDARD_SIZE,
        },
        Mode::Blinded => Recipe {
            policy: SelectionPolicy::AxisExclusive,
            criteria: NORMAL_CRITERIA,
            size: BLINDED_SIZE,
        },
        Mode::Dex => Recipe {
            policy: SelectionPolicy::Disjoint,
            criteria: TYPE_CRITERIA,
            size: STANDARD_SIZE,
        },
        _ => Recipe {
            policy: SelectionPolicy::Disjoint,
            criteria: NORMAL_CRITERIA,
            size: STANDARD_SIZE,
        },
    }
}

/// One selector → solver pass.
fn attempt_grid<R: Rng + ?Sized>(
    recipe: Recipe,
    index: &CandidateIndex,
    rng: &mut R,
) -> Option<(AxisCriteria, FilledGrid)> {
    let axes = select(recipe.policy, recipe.criteria, recipe.size, rng)?;
    let filled = fill_grid(&[&axes], index, rng)?;
    Some((axes, filled))
}

/// Retries selection and filling for `mode` within the grid budget.
pub(super) fn solve<R: Rng + ?Sized>(
    mode: Mode,
    index: &CandidateIndex,
    config: &GenerationConfig,
    rng: &mut R,
) -> Option<(AxisCriteria, FilledGrid)> {
    let recipe = recipe(mode);
    retry(mode, config.max_attempts, config.log_interval, || {
        attempt_grid(recipe, index, &mut *rng)
    })
}

pub(super) fn grid_puzzle(
    axes: &AxisCriteria,
    filled: &FilledGrid,
    index: &CandidateIndex,
) -> GridPuzzle {
    let (row_answers, col_answers) = axes.to_strings();
    GridPuzzle {
        grid: filled.to_grid(index),
        row_answers,
        col_answers,
    }
}

/// Normal, easy, hard, timer, ditto and sprite puzzles.
pub(super) fn standard<R: Rng + ?Sized>(
    mode: Mode,
    pool: &[Pokemon],
    config: &GenerationConfig,
    rng: &mut R,
) -> Option<Puzzle> {
    let index = CandidateIndex::build(pool);
    let (axes, filled) = solve(mode, &index, config, rng)?;
    let base = grid_puzzle(&axes, &filled, &index);

    Some(match mode {
        Mode::Easy => Puzzle::Easy(base),
        Mode::Hard => Puzzle::Hard(base),
        Mode::Timer => Puzzle::Timer(base),
        Mode::Ditto => Puzzle::Ditto(base),
        Mode::Sprite => Puzzle::Sprite(base),
        _ => Puzzle::Normal(base),
    })
}

/// A 5×5 grid with a balanced visibility mask. A grid whose mask cannot be
/// balanced within the reseed limit counts as a failed attempt.
pub(super) fn blinded<R: Rng + ?Sized>(
    pool: &[Pokemon],
    config: &GenerationConfig,
    rng: &mut R,
) -> Option<Puzzle> {
    let index = CandidateIndex::build(pool);
    let recipe = recipe(Mode::Blinded);
    let k = visible_count(recipe.size);

    retry(Mode::Blinded, config.max_attempts, config.log_interval, || {
        let (axes, filled) = attempt_grid(recipe, &index, &mut *rng)?;
        let visible_mask = (0..config.mask_reseeds.max(1))
            .find_map(|_| generate_visibility_mask(recipe.size, k, &mut *rng))?;
        Some(Puzzle::Blinded(BlindedPuzzle {
            base: grid_puzzle(&axes, &filled, &index),
            visible_mask,
        }))
    })
}

/// A type-only grid where each cell shows either the dex number or the dex
/// entry instead of the sprite.
pub(super) fn dex<R: Rng + ?Sized>(
    pool: &[Pokemon],
    config: &GenerationConfig,
    rng: &mut R,
) -> Option<Puzzle> {
    let index = CandidateIndex::build(pool);
    let (axes, filled) = solve(Mode::Dex, &index, config, rng)?;

    let dex_display: Vec<Vec<DexDisplay>> = (0..filled.size())
        .map(|_| {
            (0..filled.size())
                .map(|_| {
                    if random::coin_flip(&mut *rng) {
                        DexDisplay::Number
                    } else {
                        DexDisplay::Entry
                    }
                })
                .collect()
        })
        .collect();

    Some(Puzzle::Dex(DexPuzzle {
        base: grid_puzzle(&axes, &filled, &index),
        dex_display,
    }))
}

/// Two criteria layers on one grid: every cell satisfies a normal and a hard
/// criterion on both axes.
pub(super) fn dual<R: Rng + ?Sized>(
    pool: &[Pokemon],
    config: &GenerationConfig,
    rng: &mut R,
) -> Option<Puzzle> {
    let index = CandidateIndex::build(pool);
    let normal_pool: Vec<&'static str> = NORMAL_CRITERIA
        .iter()
        .copied()
        .filter(|c| !HARD_CRITERIA.contains(c))
        .collect();

    retry(Mode::Dual, config.max_attempts, config.log_interval, || {
        let normal = select(SelectionPolicy::Disjoint, &normal_pool, STANDARD_SIZE, &mut *rng)?;
        let hard = select(
            SelectionPolicy::OpposingPairExclusion,
            HARD_CRITERIA,
            STANDARD_SIZE,
            &mut *rng,
        )?;

        let distinct: HashSet<&str> = normal
            .rows
            .iter()
            .chain(&normal.cols)
            .chain(&hard.rows)
            .chain(&hard.cols)
            .copied()
            .collect();
        if distinct.len() != STANDARD_SIZE * 4 {
            return None;
        }

        let filled = fill_grid(&[&normal, &hard], &index, &mut *rng)?;
        let (row_answers_hard, col_answers_hard) = hard.to_strings();
        Some(Puzzle::Dual(DualPuzzle {
            base: grid_puzzle(&normal, &filled, &index),
            row_answers_hard,
            col_answers_hard,
        }))
    })
}
