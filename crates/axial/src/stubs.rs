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

//! Helper functions for stubbing maps in tests.

use rstest::fixture;

use crate::map::AxialMap;

/// Timestamps keying the entries of the [`axial_map`] fixture, in insertion order.
pub const TEST_TIMESTAMPS: [i64; 5] = [
    1_539_550_856,
    1_539_550_858,
    1_539_550_861,
    1_539_550_863,
    1_539_550_866,
];

const TEST_URIS: [&str; 5] = ["g/200/300", "200/300", "200/200", "600/200", "640/480"];

/// A payload keyed by its own timestamp.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestPayload {
    pub timestamp: i64,
    pub uri: String,
}

impl TestPayload {
    /// Creates a new [`TestPayload`] instance.
    #[must_use]
    pub fn new(timestamp: i64, uri: &str) -> Self {
        Self {
            timestamp,
            uri: uri.to_string(),
        }
    }
}

/// Returns the five test payloads in insertion order.
#[must_use]
pub fn test_payloads() -> Vec<TestPayload> {
    TEST_TIMESTAMPS
        .iter()
        .zip(TEST_URIS)
        .map(|(timestamp, uri)| TestPayload::new(*timestamp, uri))
        .collect()
}

/// An unbounded map holding [`test_payloads`] keyed by timestamp.
///
/// # Panics
///
/// Never in practice, timestamp keys are always valid integers.
#[fixture]
pub fn axial_map() -> AxialMap<TestPayload> {
    let mut map = AxialMap::new();
    for payload in test_payloads() {
        map.add(payload.timestamp, payload)
            .expect("timestamp keys are integers");
    }
    map
}
