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

//! Canonical orderings and partial credit for order puzzles.

use crate::pokemon::{OrderBy, Pokemon};
use serde::{Deserialize, Serialize};

/// Minimum accuracy that counts as solved.
pub const PASS_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    Asc,
    Desc,
}

/// Ids of `list` stable-sorted by `key`. Ties keep their listed order in
/// both directions.
pub fn canonical_order(list: &[Pokemon], key: OrderBy, direction: OrderDirection) -> Vec<u32> {
    let mut sorted: Vec<&Pokemon> = list.iter().collect();
    match direction {
        OrderDirection::Asc => sorted.sort_by_key(|p| p.order_value(key)),
        OrderDirection::Desc => sorted.sort_by(|a, b| b.order_value(key).cmp(&a.order_value(key))),
    }
    sorted.into_iter().map(|p| p.id).collect()
}

/// Length of the longest common subsequence of `a` and `b`.
pub fn lcs<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    // Rolling single row of the classic DP table.
    let mut row = vec![0usize; b.len() + 1];
    for x in a {
        let mut diagonal = 0;
        for (j, y) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if x == y {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }
    row[b.len()]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderScore {
    pub accuracy: f64,
    pub passed: bool,
}

/// Scores `submitted` against `canonical`. An empty canonical order scores
/// zero.
pub fn score_order(submitted: &[u32], canonical: &[u32]) -> OrderScore {
    if canonical.is_empty() {
        return OrderScore {
            accuracy: 0.0,
            passed: false,
        };
    }
    let accuracy = lcs(submitted, canonical) as f64 / canonical.len() as f64;
    OrderScore {
        accuracy,
        passed: accuracy >= PASS_THRESHOLD,
    }
}
