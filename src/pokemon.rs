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

//! The entity records supplied by the data provider.

use crate::error::{PayloadError, PokemonError};
use serde::{Deserialize, Serialize};

/// The six base stats of a Pokémon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl Stats {
    /// Base stat total. Saturates rather than overflowing on absurd records.
    pub fn total(&self) -> u32 {
        [
            self.attack,
            self.defense,
            self.special_attack,
            self.special_defense,
            self.speed,
        ]
        .into_iter()
        .fold(self.hp, u32::saturating_add)
    }
}

/// A fully validated Pokémon. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// One or two lowercase type names, in slot order.
    pub types: Vec<String>,
    #[serde(default)]
    pub sprite_url: String,
    pub is_mega: bool,
    pub region: String,
    pub abilities: Vec<String>,
    pub moves: Vec<String>,
    pub can_evolve: bool,
    pub is_final_evolution: bool,
    pub is_partner: bool,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub is_ultra_beast: bool,
    pub is_paradox: bool,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub pokedex_entry: String,
    #[serde(default)]
    pub egg_groups: Vec<String>,
    #[serde(default = "default_evolution_line_size")]
    pub evolution_line_size: u32,
    pub stats: Stats,
}

fn default_evolution_line_size() -> u32 {
    1
}

/// A provider record before validation.
///
/// Every attribute read by the criteria model is optional here so that a
/// record with gaps can be rejected on its own instead of failing the whole
/// batch.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPokemon {
    pub id: Option<u32>,
    pub name: Option<String>,
    pub types: Option<Vec<String>>,
    #[serde(default)]
    pub sprite_url: Option<String>,
    pub is_mega: Option<bool>,
    pub region: Option<String>,
    pub abilities: Option<Vec<String>>,
    pub moves: Option<Vec<String>>,
    pub can_evolve: Option<bool>,
    pub is_final_evolution: Option<bool>,
    pub is_partner: Option<bool>,
    pub is_legendary: Option<bool>,
    pub is_mythical: Option<bool>,
    pub is_ultra_beast: Option<bool>,
    pub is_paradox: Option<bool>,
    pub height: Option<u32>,
    pub weight: Option<u32>,
    #[serde(default)]
    pub pokedex_entry: Option<String>,
    #[serde(default)]
    pub egg_groups: Option<Vec<String>>,
    #[serde(default)]
    pub evolution_line_size: Option<u32>,
    pub stats: Option<RawStats>,
}

/// Stats as the provider sends them. Any missing stat rejects the record.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStats {
    pub hp: Option<u32>,
    pub attack: Option<u32>,
    pub defense: Option<u32>,
    pub special_attack: Option<u32>,
    pub special_defense: Option<u32>,
    pub speed: Option<u32>,
}

impl TryFrom<RawStats> for Stats {
    type Error = PokemonError;

    fn try_from(raw: RawStats) -> Result<Self, Self::Error> {
        Ok(Stats {
            hp: require(raw.hp, "stats.hp")?,
            attack: require(raw.attack, "stats.attack")?,
            defense: require(raw.defense, "stats.defense")?,
            special_attack: require(raw.special_attack, "stats.specialAttack")?,
            special_defense: require(raw.special_defense, "stats.specialDefense")?,
            speed: require(raw.speed, "stats.speed")?,
        })
    }
}

fn require<T>(value: Option<T>, field: &'static str) -> Result<T, PokemonError> {
    value.ok_or(PokemonError::MissingField(field))
}

impl TryFrom<RawPokemon> for Pokemon {
    type Error = PokemonError;

    fn try_from(raw: RawPokemon) -> Result<Self, Self::Error> {
        let types = require(raw.types, "types")?;
        if types.is_empty() || types.len() > 2 {
            return Err(PokemonError::TypeCount(types.len()));
        }
        let name = require(raw.name, "name")?;
        if name.is_empty() {
            return Err(PokemonError::MissingField("name"));
        }

        Ok(Pokemon {
            id: require(raw.id, "id")?,
            name,
            types,
            sprite_url: raw.sprite_url.unwrap_or_default(),
            is_mega: require(raw.is_mega, "isMega")?,
            region: require(raw.region, "region")?,
            abilities: require(raw.abilities, "abilities")?,
            moves: require(raw.moves, "moves")?,
            can_evolve: require(raw.can_evolve, "canEvolve")?,
            is_final_evolution: require(raw.is_final_evolution, "isFinalEvolution")?,
            is_partner: require(raw.is_partner, "isPartner")?,
            is_legendary: require(raw.is_legendary, "isLegendary")?,
            is_mythical: require(raw.is_mythical, "isMythical")?,
            is_ultra_beast: require(raw.is_ultra_beast, "isUltraBeast")?,
            is_paradox: require(raw.is_paradox, "isParadox")?,
            height: require(raw.height, "height")?,
            weight: require(raw.weight, "weight")?,
            pokedex_entry: raw.pokedex_entry.unwrap_or_default(),
            egg_groups: raw.egg_groups.unwrap_or_default(),
            evolution_line_size: raw
                .evolution_line_size
                .unwrap_or_else(default_evolution_line_size),
            stats: Stats::try_from(require(raw.stats, "stats")?)?,
        })
    }
}

/// Validates a batch of provider records, dropping the ones that cannot be
/// used for generation.
pub fn sanitize_pool(raw: Vec<RawPokemon>) -> Vec<Pokemon> {
    let total = raw.len();
    let pool: Vec<Pokemon> = raw
        .into_iter()
        .filter_map(|record| {
            let label = record
                .name
                .clone()
                .or_else(|| record.id.map(|id| format!("#{id}")))
                .unwrap_or_else(|| "<unnamed>".to_string());
            match Pokemon::try_from(record) {
                Ok(pokemon) => Some(pokemon),
                Err(err) => {
                    log::warn!("Dropping {label} from the pool: {err}");
                    None
                }
            }
        })
        .collect();

    if pool.len() < total {
        log::warn!("Kept {} of {} provider records.", pool.len(), total);
    }
    pool
}

/// Decodes provider records one at a time, so a record with a wrongly typed
/// field is dropped on its own, then validates the survivors.
pub fn pool_from_values(values: Vec<serde_json::Value>) -> Vec<Pokemon> {
    let total = values.len();
    let raw: Vec<RawPokemon> = values
        .into_iter()
        .enumerate()
        .filter_map(|(i, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!("Dropping provider record {i} from the pool: {err}");
                None
            }
        })
        .collect();
    if raw.len() < total {
        log::warn!("Decoded {} of {} provider records.", raw.len(), total);
    }
    sanitize_pool(raw)
}

/// Parses a JSON array of provider records into a generation pool. Only a
/// payload that is not an array at all is an error.
pub fn parse_pool(json: &str) -> Result<Vec<Pokemon>, PayloadError> {
    if json.trim().is_empty() {
        return Err(PayloadError::Missing("pool"));
    }
    let values: Vec<serde_json::Value> = serde_json::from_str(json)
        .map_err(|source| PayloadError::Json {
            what: "pool",
            source,
        })?;
    Ok(pool_from_values(values))
}

/// The numeric key an order puzzle sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderBy {
    Pokedex,
    Height,
    Weight,
    Bst,
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl OrderBy {
    pub const ALL: [OrderBy; 10] = [
        OrderBy::Pokedex,
        OrderBy::Height,
        OrderBy::Weight,
        OrderBy::Bst,
        OrderBy::Hp,
        OrderBy::Attack,
        OrderBy::Defense,
        OrderBy::SpecialAttack,
        OrderBy::SpecialDefense,
        OrderBy::Speed,
    ];
}

impl Pokemon {
    /// Reads the attribute selected by `key`.
    pub fn order_value(&self, key: OrderBy) -> u32 {
        match key {
            OrderBy::Pokedex => self.id,
            OrderBy::Height => self.height,
            OrderBy::Weight => self.weight,
            OrderBy::Bst => self.stats.total(),
            OrderBy::Hp => self.stats.hp,
            OrderBy::Attack => self.stats.attack,
            OrderBy::Defense => self.stats.defense,
            OrderBy::SpecialAttack => self.stats.special_attack,
            OrderBy::SpecialDefense => self.stats.special_defense,
            OrderBy::Speed => self.stats.speed,
        }
    }
}
