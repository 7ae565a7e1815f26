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

//! Puzzle generation for every mode.
//! This module dispatches on the mode and owns the shared retry loop; the
//! per-family routines live in the submodules.

mod composite;
mod grid;
mod listing;

use crate::config::GenerationConfig;
use crate::pokemon::Pokemon;
use crate::puzzle::{Mode, Puzzle};
use log::{debug, info, warn};
use rand::Rng;
use std::borrow::Cow;

/// Generates a puzzle for `mode` from `pool`.
///
/// Returns `None` when the pool is empty or no puzzle was found within the
/// budgets of `config`. A partially built puzzle is never returned.
pub fn generate<R: Rng + ?Sized>(
    mode: Mode,
    pool: &[Pokemon],
    config: &GenerationConfig,
    rng: &mut R,
) -> Option<Puzzle> {
    info!("--- Generating new puzzle for mode: {mode} ---");
    // Ditto never appears in its own mode, so an all-Ditto pool is empty.
    let pool: Cow<'_, [Pokemon]> = if matches!(mode, Mode::Ditto) {
        Cow::Owned(
            pool.iter()
                .filter(|p| !p.name.eq_ignore_ascii_case("ditto"))
                .cloned()
                .collect(),
        )
    } else {
        Cow::Borrowed(pool)
    };
    if pool.is_empty() {
        warn!("[{mode}] No Pokémon data available.");
        return None;
    }
    let pool = pool.as_ref();

    match mode {
        Mode::Normal | Mode::Easy | Mode::Hard | Mode::Timer | Mode::Sprite | Mode::Ditto => {
            grid::standard(mode, pool, config, rng)
        }
        Mode::Blinded => grid::blinded(pool, config, rng),
        Mode::Dex => grid::dex(pool, config, rng),
        Mode::Dual => grid::dual(pool, config, rng),
        Mode::OddOneOut => composite::odd_one_out(pool, config, rng),
        Mode::Imposter => composite::imposter(pool, config, rng),
        Mode::MissMatched => composite::miss_matched(pool, config, rng),
        Mode::Order => listing::order(pool, config, rng),
        Mode::Criteria | Mode::EasyCriteria => listing::criteria(mode, pool, rng),
        Mode::Crossword => listing::crossword(pool, config, rng),
    }
}

/// Calls `attempt` until it produces a value or `budget` attempts are spent.
fn retry<T>(
    mode: Mode,
    budget: usize,
    log_interval: usize,
    mut attempt: impl FnMut() -> Option<T>,
) -> Option<T> {
    for n in 0..budget {
        if n > 0 && log_interval > 0 && n % log_interval == 0 {
            debug!("[{mode}] Generation attempt: {n}...");
        }
        if let Some(found) = attempt() {
            info!("[{mode}] Successfully generated puzzle after {} attempts.", n + 1);
            return Some(found);
        }
    }
    warn!("[{mode}] Failed to generate a puzzle after {budget} attempts.");
    None
}
