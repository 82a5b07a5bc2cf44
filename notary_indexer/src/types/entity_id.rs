// SPDX-License-Identifier: AGPL-3.0-or-later

//! Deterministic identifiers of indexed records.
//!
//! An [`EntityId`] is the hash of the transaction which emitted a log, followed by the index of
//! that log encoded as a fixed-width big-endian integer. Log indices are unique within a
//! transaction, which makes the id unique for every log a chain can produce. Replaying the same
//! log always derives the same id, so the id doubles as the deduplication key of the store.
use std::convert::{TryFrom, TryInto};
use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::hex::{from_hex_fixed, to_display_hex, HexError};
use crate::types::transaction_hash::{TransactionHash, TRANSACTION_HASH_LEN};

/// Position of a log inside its transaction.
pub type LogIndex = u32;

/// Number of bytes used for the encoded log index suffix.
const LOG_INDEX_LEN: usize = 4;

/// Length of an entity id in bytes.
pub const ENTITY_ID_LEN: usize = TRANSACTION_HASH_LEN + LOG_INDEX_LEN;

/// Unique and deterministic id of an indexed record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId([u8; ENTITY_ID_LEN]);

impl EntityId {
    /// Derives the id from the emitting transaction and the log position within it.
    pub fn new(transaction_hash: &TransactionHash, log_index: LogIndex) -> Self {
        let mut bytes = [0u8; ENTITY_ID_LEN];
        bytes[..TRANSACTION_HASH_LEN].copy_from_slice(transaction_hash.as_bytes());
        bytes[TRANSACTION_HASH_LEN..].copy_from_slice(&log_index.to_be_bytes());
        Self(bytes)
    }

    /// Returns the raw bytes of this id.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the hash of the transaction this id was derived from.
    pub fn transaction_hash(&self) -> TransactionHash {
        let mut bytes = [0u8; TRANSACTION_HASH_LEN];
        bytes.copy_from_slice(&self.0[..TRANSACTION_HASH_LEN]);
        TransactionHash::new(bytes)
    }

    /// Returns the log index this id was derived from.
    pub fn log_index(&self) -> LogIndex {
        let mut bytes = [0u8; LOG_INDEX_LEN];
        bytes.copy_from_slice(&self.0[TRANSACTION_HASH_LEN..]);
        LogIndex::from_be_bytes(bytes)
    }
}

impl FromStr for EntityId {
    type Err = HexError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self(from_hex_fixed::<ENTITY_ID_LEN>(value)?))
    }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", to_display_hex(&self.0))
    }
}

impl Serialize for EntityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

impl TryFrom<&[u8]> for EntityId {
    type Error = HexError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; ENTITY_ID_LEN] = bytes.try_into().map_err(|_| HexError::InvalidLength {
            expected: ENTITY_ID_LEN,
            actual: bytes.len(),
        })?;

        Ok(Self(bytes))
    }
}
