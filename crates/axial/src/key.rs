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

//! Represents a valid [`AxialMap`](crate::AxialMap) key: a string or an integer.
//!
//! Conversions into [`AxialKey`] are where key shapes are validated. Strings and integers
//! convert infallibly, while wide integers, floats and dynamic JSON values go through
//! `TryFrom` and fail with [`AxialMapError::InvalidKey`].

use std::fmt::{Debug, Display};

use serde_json::Value;

use crate::error::AxialMapError;

/// Represents a valid map key.
///
/// A float is accepted only when it has no fractional part, in which case it becomes an
/// [`AxialKey::Integer`]. Keys of different variants never compare equal, so `"10"` and `10`
/// address different entries.
#[derive(Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum AxialKey {
    /// A string key.
    Text(String),
    /// An integer key.
    Integer(i64),
}

impl AxialKey {
    /// Returns the string value if this is a [`AxialKey::Text`] key.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Integer(_) => None,
        }
    }

    /// Returns the integer value if this is a [`AxialKey::Integer`] key.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Text(_) => None,
            Self::Integer(value) => Some(*value),
        }
    }
}

impl Debug for AxialKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{}('{text}')", stringify!(AxialKey)),
            Self::Integer(value) => write!(f, "{}({value})", stringify!(AxialKey)),
        }
    }
}

impl Display for AxialKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Integer(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for AxialKey {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AxialKey {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for AxialKey {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<&AxialKey> for AxialKey {
    fn from(value: &AxialKey) -> Self {
        value.clone()
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for AxialKey {
                fn from(value: $t) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_try_from_wide_integer {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for AxialKey {
                type Error = AxialMapError;

                fn try_from(value: $t) -> Result<Self, Self::Error> {
                    i64::try_from(value).map(Self::Integer).map_err(|_| {
                        AxialMapError::invalid_key(format!("integer {value} outside the i64 range"))
                    })
                }
            }
        )*
    };
}

impl_try_from_wide_integer!(u64, u128, i128, usize, isize);

impl TryFrom<f64> for AxialKey {
    type Error = AxialMapError;

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        // `i64::MAX as f64` rounds up to 2^63, which is itself out of range
        if value.is_finite()
            && value.fract() == 0.0
            && value >= i64::MIN as f64
            && value < i64::MAX as f64
        {
            Ok(Self::Integer(value as i64))
        } else {
            Err(AxialMapError::invalid_key(format!("float {value}")))
        }
    }
}

impl TryFrom<f32> for AxialKey {
    type Error = AxialMapError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::try_from(f64::from(value))
    }
}

impl TryFrom<&Value> for AxialKey {
    type Error = AxialMapError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(Self::Text(text.clone())),
            Value::Number(number) => {
                if let Some(value) = number.as_i64() {
                    Ok(Self::Integer(value))
                } else if let Some(value) = number.as_u64() {
                    Self::try_from(value)
                } else if let Some(value) = number.as_f64() {
                    Self::try_from(value)
                } else {
                    Err(AxialMapError::invalid_key(format!("number {number}")))
                }
            }
            Value::Null => Err(AxialMapError::invalid_key("null")),
            Value::Bool(flag) => Err(AxialMapError::invalid_key(format!("bool {flag}"))),
            Value::Array(_) => Err(AxialMapError::invalid_key("an array")),
            Value::Object(_) => Err(AxialMapError::invalid_key("an object")),
        }
    }
}

impl TryFrom<Value> for AxialKey {
    type Error = AxialMapError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(Self::Text(text)),
            other => Self::try_from(&other),
        }
    }
}
