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

//! Greedy grid filler.
//!
//! Cells are filled row-major with a random Pokémon from the intersection of
//! the cell's candidate sets. There is no backtracking: an empty intersection
//! fails the whole attempt and the caller samples fresh criteria.

use crate::candidates::CandidateIndex;
use crate::puzzle::Grid;
use crate::random;
use crate::selector::AxisCriteria;
use rand::Rng;
use std::collections::HashSet;

/// A filled grid of pool indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilledGrid {
    pub cells: Vec<Vec<usize>>,
}

impl FilledGrid {
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Ids of every Pokémon on the grid.
    pub fn used_ids(&self, index: &CandidateIndex) -> HashSet<u32> {
        self.cells
            .iter()
            .flatten()
            .map(|&idx| index.pokemon(idx).id)
            .collect()
    }

    /// Resolves the indices into owned records.
    pub fn to_grid(&self, index: &CandidateIndex) -> Grid {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&idx| Some(index.pokemon(idx).clone()))
                    .collect()
            })
            .collect()
    }
}

/// Fills a grid whose cell (r, c) satisfies `rows[r]` and `cols[c]` of every
/// layer. Single-layer puzzles pass one [`AxisCriteria`]; dual puzzles pass
/// the normal and the hard layer.
pub fn fill_grid<R: Rng + ?Sized>(
    layers: &[&AxisCriteria],
    index: &CandidateIndex,
    rng: &mut R,
) -> Option<FilledGrid> {
    let primary = layers.first()?;
    let size = primary.size();
    let mut used: HashSet<u32> = HashSet::new();
    let mut cells = Vec::with_capacity(size);

    for r in 0..size {
        let mut row = Vec::with_capacity(size);
        for c in 0..size {
            let mut candidates: Vec<usize> = index
                .candidates(primary.cols[c])
                .iter()
                .copied()
                .filter(|&idx| !used.contains(&index.pokemon(idx).id))
                .filter(|&idx| {
                    layers.iter().all(|layer| {
                        index.satisfies(idx, layer.rows[r]) && index.satisfies(idx, layer.cols[c])
                    })
                })
                .collect();

            random::shuffle(&mut candidates, rng);
            let chosen = *candidates.first()?;
            used.insert(index.pokemon(chosen).id);
            row.push(chosen);
        }
        cells.push(row);
    }

    Some(FilledGrid { cells })
}
