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

//! Randomness helpers. Every generator takes its RNG explicitly so tests can
//! pass a seeded one.

use rand::Rng;
use rand::seq::{IteratorRandom, SliceRandom};

/// Permutes `items` in place (Fisher–Yates).
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Returns `items` permuted.
pub fn shuffled<T, R: Rng + ?Sized>(mut items: Vec<T>, rng: &mut R) -> Vec<T> {
    shuffle(&mut items, rng);
    items
}

/// A uniformly random index below `len`, or `None` when `len` is zero.
pub fn index<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Option<usize> {
    (0..len).choose(rng)
}

/// A fair coin.
pub fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> bool {
    index(2, rng) == Some(1)
}

/// A random permutation of `0..len`.
pub fn permutation<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<usize> {
    shuffled((0..len).collect(), rng)
}
