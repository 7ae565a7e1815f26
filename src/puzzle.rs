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

//! Puzzle modes and the serialized puzzle shapes.
//!
//! A [`Puzzle`] is sent to the client as JSON and echoed back unchanged for
//! checking, so its field names follow the client's camelCase schema.

use crate::anomaly::Coord;
use crate::clues::Clue;
use crate::crossword::{CrosswordClues, LetterGrid};
use crate::error::ParseModeError;
use crate::mask::Mask;
use crate::order::OrderDirection;
use crate::pokemon::{OrderBy, Pokemon};
use crate::selector::Axis;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cells of a grid puzzle. `None` marks an empty slot.
pub type Grid = Vec<Vec<Option<Pokemon>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    Normal,
    Easy,
    Hard,
    Blinded,
    Timer,
    Ditto,
    Sprite,
    OddOneOut,
    Imposter,
    MissMatched,
    Order,
    Dual,
    Dex,
    Criteria,
    EasyCriteria,
    Crossword,
}

impl Mode {
    pub const ALL: [Mode; 16] = [
        Mode::Normal,
        Mode::Easy,
        Mode::Hard,
        Mode::Blinded,
        Mode::Timer,
        Mode::Ditto,
        Mode::Sprite,
        Mode::OddOneOut,
        Mode::Imposter,
        Mode::MissMatched,
        Mode::Order,
        Mode::Dual,
        Mode::Dex,
        Mode::Criteria,
        Mode::EasyCriteria,
        Mode::Crossword,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Normal => "normal",
            Mode::Easy => "easy",
            Mode::Hard => "hard",
            Mode::Blinded => "blinded",
            Mode::Timer => "timer",
            Mode::Ditto => "ditto",
            Mode::Sprite => "sprite",
            Mode::OddOneOut => "odd-one-out",
            Mode::Imposter => "imposter",
            Mode::MissMatched => "miss-matched",
            Mode::Order => "order",
            Mode::Dual => "dual",
            Mode::Dex => "dex",
            Mode::Criteria => "criteria",
            Mode::EasyCriteria => "easy-criteria",
            Mode::Crossword => "crossword",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}

/// The part every grid puzzle shares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPuzzle {
    pub grid: Grid,
    pub row_answers: Vec<String>,
    pub col_answers: Vec<String>,
}

impl GridPuzzle {
    pub fn size(&self) -> usize {
        self.grid.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlindedPuzzle {
    #[serde(flatten)]
    pub base: GridPuzzle,
    pub visible_mask: Mask,
}

/// Odd-one-out and imposter puzzles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyPuzzle {
    #[serde(flatten)]
    pub base: GridPuzzle,
    pub odd_one_out_coords: Vec<Coord>,
}

impl AnomalyPuzzle {
    /// The anomaly column in `row`, if the row holds one.
    pub fn anomaly_in_row(&self, row: usize) -> Option<usize> {
        self.odd_one_out_coords
            .iter()
            .find(|c| c.row == row)
            .map(|c| c.col)
    }

    /// The anomaly row in `col`, if the column holds one.
    pub fn anomaly_in_col(&self, col: usize) -> Option<usize> {
        self.odd_one_out_coords
            .iter()
            .find(|c| c.col == col)
            .map(|c| c.row)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedCriterion {
    pub axis: Axis,
    pub index: usize,
    pub value: String,
}

/// `base.grid` holds the shuffled layout shown to the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissMatchedPuzzle {
    #[serde(flatten)]
    pub base: GridPuzzle,
    pub shuffled_grid: Grid,
    pub solution_grid: Grid,
    pub revealed_criterion: RevealedCriterion,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DualPuzzle {
    #[serde(flatten)]
    pub base: GridPuzzle,
    pub row_answers_hard: Vec<String>,
    pub col_answers_hard: Vec<String>,
}

/// What a dex cell shows in place of the sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DexDisplay {
    Number,
    Entry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DexPuzzle {
    #[serde(flatten)]
    pub base: GridPuzzle,
    pub dex_display: Vec<Vec<DexDisplay>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPuzzle {
    /// Presented in random order.
    pub pokemon_list: Vec<Pokemon>,
    pub order_by: OrderBy,
    pub order_direction: OrderDirection,
    pub correct_order_ids: Vec<u32>,
}

/// Criteria and easy-criteria puzzles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriteriaPuzzle {
    pub target_pokemon: Pokemon,
    pub clues: Vec<Clue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrosswordPuzzle {
    pub crossword_grid: LetterGrid,
    pub crossword_clues: CrosswordClues,
}

/// A generated puzzle, tagged by its mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum Puzzle {
    Normal(GridPuzzle),
    Easy(GridPuzzle),
    Hard(GridPuzzle),
    Timer(GridPuzzle),
    Ditto(GridPuzzle),
    Sprite(GridPuzzle),
    Blinded(BlindedPuzzle),
    OddOneOut(AnomalyPuzzle),
    Imposter(AnomalyPuzzle),
    MissMatched(MissMatchedPuzzle),
    Order(OrderPuzzle),
    Dual(DualPuzzle),
    Dex(DexPuzzle),
    Criteria(CriteriaPuzzle),
    EasyCriteria(CriteriaPuzzle),
    Crossword(CrosswordPuzzle),
}

impl Puzzle {
    pub fn mode(&self) -> Mode {
        match self {
            Puzzle::Normal(_) => Mode::Normal,
            Puzzle::Easy(_) => Mode::Easy,
            Puzzle::Hard(_) => Mode::Hard,
            Puzzle::Timer(_) => Mode::Timer,
            Puzzle::Ditto(_) => Mode::Ditto,
            Puzzle::Sprite(_) => Mode::Sprite,
            Puzzle::Blinded(_) => Mode::Blinded,
            Puzzle::OddOneOut(_) => Mode::OddOneOut,
            Puzzle::Imposter(_) => Mode::Imposter,
            Puzzle::MissMatched(_) => Mode::MissMatched,
            Puzzle::Order(_) => Mode::Order,
            Puzzle::Dual(_) => Mode::Dual,
            Puzzle::Dex(_) => Mode::Dex,
            Puzzle::Criteria(_) => Mode::Criteria,
            Puzzle::EasyCriteria(_) => Mode::EasyCriteria,
            Puzzle::Crossword(_) => Mode::Crossword,
        }
    }

    /// The shared grid part, for every mode that has one.
    pub fn grid_puzzle(&self) -> Option<&GridPuzzle> {
        match self {
            Puzzle::Normal(p)
            | Puzzle::Easy(p)
            | Puzzle::Hard(p)
            | Puzzle::Timer(p)
            | Puzzle::Ditto(p)
            | Puzzle::Sprite(p) => Some(p),
            Puzzle::Blinded(p) => Some(&p.base),
            Puzzle::OddOneOut(p) | Puzzle::Imposter(p) => Some(&p.base),
            Puzzle::MissMatched(p) => Some(&p.base),
            Puzzle::Dual(p) => Some(&p.base),
            Puzzle::Dex(p) => Some(&p.base),
            Puzzle::Order(_)
            | Puzzle::Criteria(_)
            | Puzzle::EasyCriteria(_)
            | Puzzle::Crossword(_) => None,
        }
    }
}
