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

//! Policies that choose the row and column criteria of a grid.
//!
//! A policy returning `None` ends the current generation attempt; the caller's
//! retry loop samples again.

use crate::criteria::{is_impossible_pair, is_region, opposite_of};
use crate::random;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One row criterion per row and one column criterion per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisCriteria {
    pub rows: Vec<&'static str>,
    pub cols: Vec<&'static str>,
}

impl AxisCriteria {
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Whether all row and column criteria are pairwise distinct.
    pub fn is_distinct(&self) -> bool {
        let all: HashSet<&str> = self.rows.iter().chain(&self.cols).copied().collect();
        all.len() == self.rows.len() + self.cols.len()
    }

    pub fn to_strings(&self) -> (Vec<String>, Vec<String>) {
        (
            self.rows.iter().map(|c| c.to_string()).collect(),
            self.cols.iter().map(|c| c.to_string()).collect(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Row,
    Col,
}

/// How a mode picks its axis criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// First N of a shuffled pool become rows, the next N columns.
    Disjoint,
    /// Random picks; picking one half of an opposing pair discards the other.
    OpposingPairExclusion,
    /// Slot-by-slot picks keeping regions to one axis and avoiding impossible
    /// type pairs across axes.
    AxisExclusive,
}

/// Chooses `size` row and `size` column criteria from `pool`.
pub fn select<R: Rng + ?Sized>(
    policy: SelectionPolicy,
    pool: &[&'static str],
    size: usize,
    rng: &mut R,
) -> Option<AxisCriteria> {
    let axes = match policy {
        SelectionPolicy::Disjoint => select_disjoint(pool, size, rng),
        SelectionPolicy::OpposingPairExclusion => select_excluding_opposites(pool, size, rng),
        SelectionPolicy::AxisExclusive => select_axis_exclusive(pool, size, rng),
    }?;
    axes.is_distinct().then_some(axes)
}

fn select_disjoint<R: Rng + ?Sized>(
    pool: &[&'static str],
    size: usize,
    rng: &mut R,
) -> Option<AxisCriteria> {
    if pool.len() < size * 2 {
        return None;
    }
    let shuffled = random::shuffled(pool.to_vec(), rng);
    Some(AxisCriteria {
        rows: shuffled[..size].to_vec(),
        cols: shuffled[size..size * 2].to_vec(),
    })
}

fn select_excluding_opposites<R: Rng + ?Sized>(
    pool: &[&'static str],
    size: usize,
    rng: &mut R,
) -> Option<AxisCriteria> {
    let mut available = random::shuffled(pool.to_vec(), rng);
    let mut selected = Vec::with_capacity(size * 2);

    while selected.len() < size * 2 {
        let pick = available.pop()?;
        let opposite = opposite_of(pick);
        available.retain(|&c| c != pick && Some(c) != opposite);
        selected.push(pick);
    }

    let cols = selected.split_off(size);
    Some(AxisCriteria {
        rows: selected,
        cols,
    })
}

fn select_axis_exclusive<R: Rng + ?Sized>(
    pool: &[&'static str],
    size: usize,
    rng: &mut R,
) -> Option<AxisCriteria> {
    let mut available = random::shuffled(pool.to_vec(), rng);
    let mut rows: Vec<&'static str> = Vec::with_capacity(size);
    let mut cols: Vec<&'static str> = Vec::with_capacity(size);
    let mut region_axis: Option<Axis> = None;

    for slot in 0..size * 2 {
        let axis = if slot < size { Axis::Row } else { Axis::Col };
        let (same, other) = match axis {
            Axis::Row => (&rows, &cols),
            Axis::Col => (&cols, &rows),
        };

        let position = available.iter().position(|&candidate| {
            if same.contains(&candidate) || other.contains(&candidate) {
                return false;
            }
            if is_region(candidate) && region_axis.is_some_and(|held| held != axis) {
                return false;
            }
            !other.iter().any(|&o| is_impossible_pair(candidate, o))
        })?;

        let chosen = available.remove(position);
        if is_region(chosen) && region_axis.is_none() {
            region_axis = Some(axis);
        }
        match axis {
            Axis::Row => rows.push(chosen),
            Axis::Col => cols.push(chosen),
        }
    }

    Some(AxisCriteria { rows, cols })
}
