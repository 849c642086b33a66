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

//! Error types raised by [`AxialMap`](crate::AxialMap) operations.

use std::convert::Infallible;

use thiserror::Error;

/// Errors raised by [`AxialMap`](crate::AxialMap) at its API boundary.
///
/// Lookup misses (absent keys, out-of-range positions, an unset cursor) are never errors, they
/// are reported as `None`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AxialMapError {
    /// The supplied key was neither a string nor an integer.
    #[error("Key must be an integer or a string, was {0}")]
    InvalidKey(String),
}

impl AxialMapError {
    pub(crate) fn invalid_key(shape: impl Into<String>) -> Self {
        Self::InvalidKey(shape.into())
    }
}

// Infallible key conversions (`&str`, `i64`, ...) flow through the same `TryInto` bound as the
// checked ones.
impl From<Infallible> for AxialMapError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_invalid_key_display() {
        let err = AxialMapError::invalid_key("float 1.5");
        assert_eq!(
            err.to_string(),
            "Key must be an integer or a string, was float 1.5"
        );
    }

    #[rstest]
    fn test_converts_into_anyhow() {
        let err: anyhow::Error = AxialMapError::invalid_key("an array").into();
        assert!(err.to_string().contains("an array"));
        assert_eq!(
            err.downcast_ref::<AxialMapError>(),
            Some(&AxialMapError::InvalidKey("an array".to_string()))
        );
    }
}
