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

use serde::{Deserialize, Serialize};

/// Budgets and sizes for puzzle generation. Missing fields take their
/// defaults when deserialized, so callers only send what they override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Selector/solver attempts for a single grid puzzle.
    pub max_attempts: usize,
    /// Base puzzles tried by odd-one-out, imposter and miss-matched.
    pub composite_attempts: usize,
    /// Full layout attempts for a crossword.
    pub crossword_attempts: usize,
    /// Attempts between progress messages.
    pub log_interval: usize,
    pub crossword_size: usize,
    pub crossword_words: usize,
    pub max_word_length: usize,
    /// Pokémon listed in an order puzzle.
    pub order_size: usize,
    /// Fresh masks tried for one blinded grid before the grid is discarded.
    pub mask_reseeds: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_attempts: 50_000,
            composite_attempts: 100,
            crossword_attempts: 100,
            log_interval: 5_000,
            crossword_size: 15,
            crossword_words: 10,
            max_word_length: 10,
            order_size: 16,
            mask_reseeds: 10,
        }
    }
}

impl GenerationConfig {
    /// Small budgets for tests and previews.
    pub fn quick() -> Self {
        Self {
            max_attempts: 500,
            composite_attempts: 10,
            crossword_attempts: 20,
            log_interval: 100,
            ..Self::default()
        }
    }
}
