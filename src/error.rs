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

use thiserror::Error;

/// A provider record that cannot enter the generation pool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PokemonError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("expected one or two types, found {0}")]
    TypeCount(usize),
}

/// An unrecognised mode tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown puzzle mode `{0}`")]
pub struct ParseModeError(pub String);

/// A puzzle or submission payload that could not be decoded.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("no {0} payload was supplied")]
    Missing(&'static str),
    #[error("malformed {what} payload: {source}")]
    Json {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
