// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt::Display;

use async_graphql::scalar;
use serde::{Deserialize, Serialize};

use crate::types::hex::normalize_hex;

/// Byte sequence in its normalized hex form, for example `0xdeadbeef`.
///
/// Input values are accepted with or without `0x` prefix and in any case.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Bytes(String);

impl Bytes {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T: Display> From<&T> for Bytes {
    fn from(value: &T) -> Self {
        Self(value.to_string())
    }
}

impl Serialize for Bytes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Bytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let str: String = Deserialize::deserialize(deserializer)?;
        let normalized = normalize_hex(&str).map_err(serde::de::Error::custom)?;
        Ok(Bytes(normalized))
    }
}

impl Display for Bytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

scalar!(Bytes);
