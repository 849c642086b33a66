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

//! An insertion-ordered, key-addressable map with a movable cursor and an optional capacity
//! bound enforced by FIFO eviction.
//!
//! The `axial-map` crate provides:
//!
//! - [`AxialMap`]: the map itself, with positional lookups (`first`, `last`, `nth`), cursor
//!   traversal (`next`, `previous` and their clamped variants), range reads (`slice`) and range
//!   removals (`splice`).
//! - [`AxialKey`]: the key type, either a string or an integer. Other shapes are rejected with
//!   [`AxialMapError::InvalidKey`] when converted.
//! - [`AxialMapConfig`]: construction options, buildable, deserializable or parsed from a spec
//!   string such as `max_size=20`.
//!
//! Eviction is logged at `debug` level through the `log` facade; the crate never installs a
//! logger itself.
//!
//! # Feature flags
//!
//! - `stubs`: Exposes the `rstest` fixtures used by the test suite.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod key;
pub mod map;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

pub use crate::{
    config::{AxialMapConfig, AxialMapConfigBuilder, AxialMapConfigBuilderError, Capacity},
    error::AxialMapError,
    key::AxialKey,
    map::AxialMap,
};
