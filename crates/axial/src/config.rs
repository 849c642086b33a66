// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Construction options for [`AxialMap`](crate::AxialMap).
//!
//! # Spec String Format
//!
//! Options can be parsed from a semicolon-separated string:
//!
//! ```text
//! max_size=20
//! ```
//!
//! ## Supported Keys
//!
//! | Key        | Type    | Description                                              |
//! |------------|---------|----------------------------------------------------------|
//! | `max_size` | Integer | Maximum entry count (alias `maxSize`, case-insensitive). |
//!
//! A `max_size` of zero or less, `unbounded` or `infinity` means the map never evicts.

use std::{fmt::Display, num::NonZeroUsize, str::FromStr};

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// The maximum number of entries an [`AxialMap`](crate::AxialMap) retains.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Capacity {
    /// No bound, entries are never evicted.
    #[default]
    Unbounded,
    /// At most this many entries, the oldest is evicted on overflow.
    Bounded(NonZeroUsize),
}

impl Capacity {
    /// Creates a [`Capacity`] from a raw maximum size, where zero means unbounded.
    #[must_use]
    pub const fn from_max_size(max_size: usize) -> Self {
        match NonZeroUsize::new(max_size) {
            Some(max_size) => Self::Bounded(max_size),
            None => Self::Unbounded,
        }
    }

    /// Returns the bound, or `None` if unbounded.
    #[must_use]
    pub const fn get(&self) -> Option<usize> {
        match self {
            Self::Unbounded => None,
            Self::Bounded(max_size) => Some(max_size.get()),
        }
    }

    /// Returns whether holding `len` entries would overflow this capacity.
    #[must_use]
    pub const fn is_exceeded_by(&self, len: usize) -> bool {
        match self {
            Self::Unbounded => false,
            Self::Bounded(max_size) => len > max_size.get(),
        }
    }
}

impl Display for Capacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unbounded => write!(f, "unbounded"),
            Self::Bounded(max_size) => write!(f, "{max_size}"),
        }
    }
}

/// Configuration for an [`AxialMap`](crate::AxialMap).
///
/// # Examples
///
/// ```
/// use axial_map::{AxialMapConfig, AxialMapConfigBuilder, Capacity};
///
/// let config = AxialMapConfigBuilder::default().max_size(20).build().unwrap();
/// assert_eq!(config.capacity().get(), Some(20));
///
/// // Non-positive sizes leave the map unbounded
/// let config: AxialMapConfig = "max_size=-1".parse().unwrap();
/// assert_eq!(config.capacity(), Capacity::Unbounded);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct AxialMapConfig {
    /// Maximum entry count; `None` or a non-positive value means unbounded.
    #[builder(default, setter(into, strip_option))]
    #[serde(alias = "maxSize")]
    pub max_size: Option<i64>,
}

impl AxialMapConfig {
    /// Creates a new [`AxialMapConfig`] instance.
    #[must_use]
    pub const fn new(max_size: Option<i64>) -> Self {
        Self { max_size }
    }

    /// Returns the effective [`Capacity`] for this configuration.
    #[must_use]
    pub fn capacity(&self) -> Capacity {
        self.max_size
            .and_then(|max_size| usize::try_from(max_size).ok())
            .map_or(Capacity::Unbounded, Capacity::from_max_size)
    }

    /// Parses a configuration from a spec string.
    ///
    /// # Format
    ///
    /// Semicolon-separated key-value pairs:
    /// ```text
    /// max_size=20
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the spec string contains invalid syntax, an unrecognized key, or a
    /// `max_size` value that is not an integer.
    pub fn from_spec(spec: &str) -> anyhow::Result<Self> {
        let mut config = Self::default();

        for kv in spec.split(';') {
            let kv = kv.trim();
            if kv.is_empty() {
                continue;
            }

            let Some((k, v)) = kv.split_once('=') else {
                anyhow::bail!("Invalid spec pair: {kv}");
            };

            match k.trim().to_lowercase().as_str() {
                "max_size" | "maxsize" => config.max_size = parse_max_size(v.trim())?,
                _ => anyhow::bail!("Unrecognized config key: {}", k.trim()),
            }
        }

        Ok(config)
    }
}

impl FromStr for AxialMapConfig {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_spec(s)
    }
}

fn parse_max_size(value: &str) -> anyhow::Result<Option<i64>> {
    if value.eq_ignore_ascii_case("unbounded") || value.eq_ignore_ascii_case("infinity") {
        return Ok(None);
    }

    value
        .parse::<i64>()
        .map(Some)
        .map_err(|e| anyhow::anyhow!("Invalid `max_size` value '{value}': {e}"))
}
