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

//! Greedy crossword layout.
//!
//! Every word after the first is anchored on a letter it shares with an
//! already placed word, running perpendicular to it.

use crate::random;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type LetterGrid = Vec<Vec<Option<char>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    pub fn perpendicular(self) -> Self {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }

    /// Row and column step between consecutive letters.
    fn step(self) -> (usize, usize) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }
}

/// A word committed to the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub word: Vec<char>,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl Placement {
    fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        let (dr, dc) = self.direction.step();
        self.word
            .iter()
            .enumerate()
            .map(move |(i, &ch)| (self.row + dr * i, self.col + dc * i, ch))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrosswordClue {
    pub number: u32,
    pub direction: Direction,
    pub row: usize,
    pub col: usize,
    pub length: usize,
    /// The types, e.g. "Fire / Flying".
    pub clue: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrosswordClues {
    pub across: Vec<CrosswordClue>,
    pub down: Vec<CrosswordClue>,
}

/// A finished layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub grid: LetterGrid,
    pub placements: Vec<Placement>,
}

/// Whether `word` fits at (`row`, `col`) without leaving the grid or
/// contradicting a letter already there.
pub fn can_place(grid: &LetterGrid, word: &[char], row: usize, col: usize, direction: Direction) -> bool {
    let size = grid.len();
    let (dr, dc) = direction.step();
    let end_row = row + dr * word.len().saturating_sub(1);
    let end_col = col + dc * word.len().saturating_sub(1);
    if word.is_empty() || end_row >= size || end_col >= size {
        return false;
    }

    word.iter().enumerate().all(|(i, &ch)| match grid[row + dr * i][col + dc * i] {
        Some(existing) => existing == ch,
        None => true,
    })
}

fn commit(grid: &mut LetterGrid, placement: &Placement) {
    for (r, c, ch) in placement.cells() {
        grid[r][c] = Some(ch);
    }
}

/// Finds the first anchored position for `word` against the placed words.
fn find_anchor(grid: &LetterGrid, placements: &[Placement], word: &[char]) -> Option<Placement> {
    for (i, &letter) in word.iter().enumerate() {
        for placed in placements {
            let direction = placed.direction.perpendicular();
            for (j, _) in placed.word.iter().enumerate().filter(|&(_, &ch)| ch == letter) {
                // Shift back from the shared cell to the start of `word`.
                let (row, col) = match placed.direction {
                    Direction::Across => (placed.row.checked_sub(i), Some(placed.col + j)),
                    Direction::Down => (Some(placed.row + j), placed.col.checked_sub(i)),
                };
                let (Some(row), Some(col)) = (row, col) else {
                    continue;
                };
                if can_place(grid, word, row, col, direction) {
                    return Some(Placement {
                        word: word.to_vec(),
                        row,
                        col,
                        direction,
                    });
                }
            }
        }
    }
    None
}

/// One layout attempt for `words` on a `size`×`size` grid. Fails as soon as a
/// word cannot be anchored.
pub fn place_words<R: Rng + ?Sized>(words: &[String], size: usize, rng: &mut R) -> Option<Layout> {
    let mut grid: LetterGrid = vec![vec![None; size]; size];
    let mut placements: Vec<Placement> = Vec::with_capacity(words.len());
    let (first, rest) = words.split_first()?;

    let first: Vec<char> = first.chars().collect();
    if first.is_empty() || first.len() > size {
        return None;
    }
    let direction = if random::coin_flip(rng) {
        Direction::Across
    } else {
        Direction::Down
    };
    let slack = size - first.len() + 1;
    let (row, col) = match direction {
        Direction::Across => (random::index(size, rng)?, random::index(slack, rng)?),
        Direction::Down => (random::index(slack, rng)?, random::index(size, rng)?),
    };
    let placement = Placement {
        word: first,
        row,
        col,
        direction,
    };
    commit(&mut grid, &placement);
    placements.push(placement);

    for word in rest {
        let word: Vec<char> = word.chars().collect();
        let placement = find_anchor(&grid, &placements, &word)?;
        commit(&mut grid, &placement);
        placements.push(placement);
    }

    Some(Layout { grid, placements })
}

/// Numbers each distinct start cell once, in row-major order of the starts.
pub fn number_placements(placements: &[Placement]) -> Vec<(u32, &Placement)> {
    let mut ordered: Vec<&Placement> = placements.iter().collect();
    ordered.sort_by_key(|p| (p.row, p.col));

    let mut numbers: BTreeMap<(usize, usize), u32> = BTreeMap::new();
    let mut next = 1;
    ordered
        .into_iter()
        .map(|p| {
            let number = *numbers.entry((p.row, p.col)).or_insert_with(|| {
                next += 1;
                next - 1
            });
            (number, p)
        })
        .collect()
}

/// Builds the across and down clue lists, each sorted by number. `describe`
/// maps a placed word to its clue text and answer.
pub fn build_clues<F>(placements: &[Placement], mut describe: F) -> CrosswordClues
where
    F: FnMut(&Placement) -> (String, String),
{
    let mut clues = CrosswordClues::default();
    for (number, placement) in number_placements(placements) {
        let (clue, answer) = describe(placement);
        let entry = CrosswordClue {
            number,
            direction: placement.direction,
            row: placement.row,
            col: placement.col,
            length: placement.word.len(),
            clue,
            answer,
        };
        match placement.direction {
            Direction::Across => clues.across.push(entry),
            Direction::Down => clues.down.push(entry),
        }
    }
    clues.across.sort_by_key(|c| c.number);
    clues.down.sort_by_key(|c| c.number);
    clues
}
