// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::types::{Address, LogIndex, TransactionHash};

/// Block the log was included in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockContext {
    /// Height of the block.
    pub number: u64,

    /// Block timestamp in seconds since the unix epoch.
    pub timestamp: u64,
}

/// Transaction which emitted the log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionContext {
    /// Transaction hash.
    pub hash: TransactionHash,
}

/// ABI type of an event parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamKind {
    /// 20 byte address.
    #[serde(rename = "address")]
    Address,

    /// Dynamic byte sequence.
    #[serde(rename = "bytes")]
    Bytes,

    /// Unsigned 256 bit integer.
    #[serde(rename = "uint256")]
    Uint256,

    /// UTF-8 string.
    #[serde(rename = "string")]
    String,
}

impl ParamKind {
    /// Returns the name of this kind as it appears in event signatures.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKind::Address => "address",
            ParamKind::Bytes => "bytes",
            ParamKind::Uint256 => "uint256",
            ParamKind::String => "string",
        }
    }
}

impl Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parameter of a log as delivered by the chain runtime, still in its text encoding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawParam {
    /// ABI type of this parameter.
    #[serde(rename = "type")]
    pub kind: ParamKind,

    /// Text encoded value: hex for addresses and bytes, decimal or hex for integers.
    pub value: String,
}

impl RawParam {
    /// Returns a new parameter.
    pub fn new(kind: ParamKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Log record exactly as delivered by the chain runtime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLog {
    /// Contract which emitted the log.
    pub address: Address,

    /// Canonical event signature, for example `DocumentRetrieved(address,bytes,uint256)`.
    pub event: String,

    /// Block context.
    pub block: BlockContext,

    /// Transaction context.
    pub transaction: TransactionContext,

    /// Position of this log inside its transaction.
    pub log_index: LogIndex,

    /// Ordered list of event parameters.
    pub params: Vec<RawParam>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ParamKind, RawLog};

    #[test]
    fn deserialize_from_json() {
        let log: RawLog = serde_json::from_value(json!({
            "address": "0x5fbdb2315678afecb367f032d93f642f64180aa3",
            "event": "DocumentRetrieved(address,bytes,uint256)",
            "block": { "number": 12, "timestamp": 1700000000 },
            "transaction": { "hash": format!("0x{}", "ab".repeat(32)) },
            "logIndex": 3,
            "params": [
                { "type": "address", "value": "0x0000000000000000000000000000000000000001" },
                { "type": "bytes", "value": "0xdeadbeef" },
                { "type": "uint256", "value": "234" }
            ]
        }))
        .unwrap();

        assert_eq!(log.block.number, 12);
        assert_eq!(log.log_index, 3);
        assert_eq!(log.params.len(), 3);
        assert_eq!(log.params[1].kind, ParamKind::Bytes);
    }

    #[test]
    fn reject_invalid_transaction_hash() {
        let result = serde_json::from_value::<RawLog>(json!({
            "address": "0x5fbdb2315678afecb367f032d93f642f64180aa3",
            "event": "DocumentRetrieved(address,bytes,uint256)",
            "block": { "number": 12, "timestamp": 1700000000 },
            "transaction": { "hash": "0xabcd" },
            "logIndex": 0,
            "params": []
        }));

        assert!(result.is_err());
    }
}
