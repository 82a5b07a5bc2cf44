// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::hex::{from_hex_fixed, to_display_hex, HexError};

/// Length of a transaction hash in bytes.
pub const TRANSACTION_HASH_LEN: usize = 32;

/// Hash of the transaction which emitted a log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransactionHash([u8; TRANSACTION_HASH_LEN]);

impl TransactionHash {
    /// Returns a transaction hash from its raw bytes.
    pub fn new(bytes: [u8; TRANSACTION_HASH_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes of this hash.
    pub fn as_bytes(&self) -> &[u8; TRANSACTION_HASH_LEN] {
        &self.0
    }
}

impl FromStr for TransactionHash {
    type Err = HexError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self(from_hex_fixed::<TRANSACTION_HASH_LEN>(value)?))
    }
}

impl Display for TransactionHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", to_display_hex(&self.0))
    }
}

impl Serialize for TransactionHash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TransactionHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
