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

//! Visibility masks for blinded puzzles: every row and every column shows the
//! same number of cells.

use crate::random;
use rand::Rng;

pub type Mask = Vec<Vec<bool>>;

/// Visible cells per line for a grid of `size`: 2 for 5×5, 3 for 6×6.
pub fn visible_count(size: usize) -> usize {
    (size / 2).max(1)
}

fn column_count(mask: &Mask, col: usize) -> usize {
    mask.iter().filter(|row| row[col]).count()
}

/// Whether every row and column of `mask` holds exactly `k` visible cells.
pub fn is_balanced(mask: &Mask, k: usize) -> bool {
    let size = mask.len();
    mask.iter()
        .all(|row| row.len() == size && row.iter().filter(|&&v| v).count() == k)
        && (0..size).all(|c| column_count(mask, c) == k)
}

/// Builds a `size`×`size` mask with exactly `k` visible cells in every row and
/// every column.
///
/// Rows are seeded with a random `k`-subset each, which leaves columns uneven.
/// Each rebalancing move then reveals a cell of an under-full column and hides
/// the cell of an over-full column in the same row, so rows stay at `k` while
/// the column surplus shrinks by one. Returns `None` if the move ceiling is
/// reached first or `k` exceeds `size`.
pub fn generate_visibility_mask<R: Rng + ?Sized>(size: usize, k: usize, rng: &mut R) -> Option<Mask> {
    if k > size {
        return None;
    }

    let mut mask = vec![vec![false; size]; size];
    for row in mask.iter_mut() {
        for c in random::permutation(size, rng).into_iter().take(k) {
            row[c] = true;
        }
    }

    let ceiling = size * size;
    for _ in 0..ceiling {
        let counts: Vec<usize> = (0..size).map(|c| column_count(&mask, c)).collect();
        let under: Vec<usize> = (0..size).filter(|&c| counts[c] < k).collect();
        let over: Vec<usize> = (0..size).filter(|&c| counts[c] > k).collect();

        if over.is_empty() {
            break;
        }
        let Some(reveal_col) = random::index(under.len(), rng).map(|i| under[i]) else {
            break;
        };

        // Any over-full column has strictly more visible cells than the
        // under-full one, so at least one row can donate.
        let mut moves: Vec<(usize, usize)> = over
            .iter()
            .flat_map(|&hide_col| {
                let mask = &mask;
                (0..size)
                    .filter(move |&r| mask[r][hide_col] && !mask[r][reveal_col])
                    .map(move |r| (r, hide_col))
            })
            .collect();
        random::shuffle(&mut moves, rng);
        let Some(&(row, hide_col)) = moves.first() else {
            break;
        };

        mask[row][hide_col] = false;
        mask[row][reveal_col] = true;
    }

    is_balanced(&mask, k).then_some(mask)
}
