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

//! Plants anomaly cells: Pokémon that fit neither their row nor their column.

use crate::candidates::CandidateIndex;
use crate::random;
use crate::selector::AxisCriteria;
use crate::solver::FilledGrid;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

/// One coordinate per row and per column, from two independent shuffles.
pub fn derangement_coords<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<Coord> {
    let rows = random::permutation(size, rng);
    let cols = random::permutation(size, rng);
    rows.into_iter()
        .zip(cols)
        .map(|(row, col)| Coord { row, col })
        .collect()
}

/// A single random coordinate.
pub fn single_coord<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Option<Coord> {
    let row = random::index(size, rng)?;
    let col = random::index(size, rng)?;
    Some(Coord { row, col })
}

/// Replaces each cell in `coords` with an unused Pokémon satisfying neither
/// the cell's row criterion nor its column criterion.
///
/// The grid is only returned when every coordinate was filled; partial
/// placements are discarded.
pub fn inject_anomalies<R: Rng + ?Sized>(
    grid: &FilledGrid,
    axes: &AxisCriteria,
    coords: &[Coord],
    index: &CandidateIndex,
    rng: &mut R,
) -> Option<FilledGrid> {
    let mut grid = grid.clone();
    let mut used = grid.used_ids(index);

    for coord in coords {
        let row_criterion = axes.rows[coord.row];
        let col_criterion = axes.cols[coord.col];
        let occupant = grid.cells[coord.row][coord.col];
        used.remove(&index.pokemon(occupant).id);

        let mut candidates: Vec<usize> = (0..index.pool().len())
            .filter(|&idx| !used.contains(&index.pokemon(idx).id))
            .filter(|&idx| {
                !index.satisfies(idx, row_criterion) && !index.satisfies(idx, col_criterion)
            })
            .collect();
        random::shuffle(&mut candidates, rng);

        let anomaly = *candidates.first()?;
        grid.cells[coord.row][coord.col] = anomaly;
        used.insert(index.pokemon(anomaly).id);
    }

    Some(grid)
}
