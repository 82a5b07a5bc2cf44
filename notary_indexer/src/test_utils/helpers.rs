// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::events::{BlockContext, ParamKind, RawLog, RawParam, TransactionContext};
use crate::types::LogIndex;

/// Transaction hash used by most test logs.
pub const TRANSACTION_HASH: &str =
    "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

/// Owner or requester of all test logs.
pub const OWNER: &str = "0x0000000000000000000000000000000000000001";

/// Address of the contract emitting the test logs.
const CONTRACT: &str = "0x5fbdb2315678afecb367f032d93f642f64180aa3";

/// Timestamp parameter of all test logs.
const TIMESTAMP: &str = "234";

/// Returns a transaction hash made of 32 times the given byte.
pub fn transaction_hash(byte: u8) -> String {
    format!("0x{}", hex::encode([byte; 32]))
}

/// Returns a log at block 1 with the given event signature and parameters.
pub fn raw_log(event: &str, transaction: &str, log_index: LogIndex, params: Vec<RawParam>) -> RawLog {
    RawLog {
        address: CONTRACT.parse().unwrap(),
        event: event.to_owned(),
        block: BlockContext {
            number: 1,
            timestamp: 1_700_000_000,
        },
        transaction: TransactionContext {
            hash: transaction.parse().unwrap(),
        },
        log_index,
        params,
    }
}

pub fn notarized_log(
    transaction: &str,
    log_index: LogIndex,
    document_hash: &str,
    image_uri: &str,
    description: &str,
) -> RawLog {
    raw_log(
        "DocumentNotarized(address,bytes,uint256,string,string)",
        transaction,
        log_index,
        vec![
            RawParam::new(ParamKind::Address, OWNER),
            RawParam::new(ParamKind::Bytes, document_hash),
            RawParam::new(ParamKind::Uint256, TIMESTAMP),
            RawParam::new(ParamKind::String, image_uri),
            RawParam::new(ParamKind::String, description),
        ],
    )
}

pub fn retrieved_log(transaction: &str, log_index: LogIndex, document_hash: &str) -> RawLog {
    raw_log(
        "DocumentRetrieved(address,bytes,uint256)",
        transaction,
        log_index,
        vec![
            RawParam::new(ParamKind::Address, OWNER),
            RawParam::new(ParamKind::Bytes, document_hash),
            RawParam::new(ParamKind::Uint256, TIMESTAMP),
        ],
    )
}

/// Returns a revocation log, the image uri is left empty.
pub fn revoked_log(
    transaction: &str,
    log_index: LogIndex,
    document_hash: &str,
    description: &str,
) -> RawLog {
    raw_log(
        "DocumentRevoked(address,bytes,uint256,string,string)",
        transaction,
        log_index,
        vec![
            RawParam::new(ParamKind::Address, OWNER),
            RawParam::new(ParamKind::Bytes, document_hash),
            RawParam::new(ParamKind::Uint256, TIMESTAMP),
            RawParam::new(ParamKind::String, description),
            RawParam::new(ParamKind::String, ""),
        ],
    )
}
