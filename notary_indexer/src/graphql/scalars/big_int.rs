// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt::Display;

use async_graphql::scalar;
use serde::{Deserialize, Serialize};

/// Unsigned integer which does not fit into a GraphQL `Int`.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct BigInt(u64);

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Decimal strings keep large numbers intact in JSON responses
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let str: String = Deserialize::deserialize(deserializer)?;

        let value: u64 = str
            .parse()
            .map_err(|_| serde::de::Error::custom("Could not parse BigInt string as u64"))?;

        Ok(BigInt(value))
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

scalar!(BigInt);
