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

//! Criterion → candidate lookup, built once per generation call.

use crate::criteria::{ALL_CRITERIA, criteria_of};
use crate::pokemon::Pokemon;
use std::collections::{HashMap, HashSet};

/// Candidates are stored as indices into the pool the index was built from.
pub struct CandidateIndex<'a> {
    pool: &'a [Pokemon],
    by_criterion: HashMap<&'static str, Vec<usize>>,
    tags: Vec<HashSet<String>>,
}

impl<'a> CandidateIndex<'a> {
    /// Builds the index in a single pass over `pool`. Lists keep pool order.
    pub fn build(pool: &'a [Pokemon]) -> Self {
        let mut by_criterion: HashMap<&'static str, Vec<usize>> =
            ALL_CRITERIA.iter().map(|&c| (c, Vec::new())).collect();
        let mut tags = Vec::with_capacity(pool.len());

        for (idx, pokemon) in pool.iter().enumerate() {
            let criteria = criteria_of(pokemon);
            for criterion in &criteria {
                if let Some(list) = by_criterion.get_mut(criterion.as_str()) {
                    list.push(idx);
                }
            }
            tags.push(criteria);
        }

        CandidateIndex {
            pool,
            by_criterion,
            tags,
        }
    }

    pub fn pool(&self) -> &'a [Pokemon] {
        self.pool
    }

    pub fn pokemon(&self, idx: usize) -> &'a Pokemon {
        &self.pool[idx]
    }

    /// The pool indices satisfying `criterion`; empty for unknown criteria.
    pub fn candidates(&self, criterion: &str) -> &[usize] {
        self.by_criterion
            .get(criterion)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the Pokémon at `idx` satisfies `criterion`.
    pub fn satisfies(&self, idx: usize, criterion: &str) -> bool {
        self.tags[idx].contains(criterion)
    }

    /// The full criteria set of the Pokémon at `idx`.
    pub fn criteria(&self, idx: usize) -> &HashSet<String> {
        &self.tags[idx]
    }
}
