// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::events::raw::ParamKind;
use crate::events::signature::EventSignature;

/// Errors which occur when decoding a raw log into a typed event.
///
/// All of these indicate that the deployed contract does not match the event shapes this indexer
/// was built for. None of them can be recovered from by retrying.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Signature does not belong to any known event.
    #[error("unknown event signature '{0}'")]
    UnknownEvent(String),

    /// Log carries a different number of parameters than its event declares.
    #[error("{event} expects {expected} parameters, found {actual}")]
    ParamCount {
        /// Event the log claimed to be.
        event: EventSignature,

        /// Declared number of parameters.
        expected: usize,

        /// Number of parameters found in the log.
        actual: usize,
    },

    /// Parameter at this position has a different type than declared.
    #[error("{event} expects parameter {position} to be {expected}, found {actual}")]
    ParamKind {
        /// Event the log claimed to be.
        event: EventSignature,

        /// Zero-based position of the parameter.
        position: usize,

        /// Declared type.
        expected: ParamKind,

        /// Type found in the log.
        actual: ParamKind,
    },

    /// Parameter value can not be parsed into its declared type.
    #[error("invalid {kind} value at parameter {position} of {event}: {reason}")]
    InvalidValue {
        /// Event the log claimed to be.
        event: EventSignature,

        /// Zero-based position of the parameter.
        position: usize,

        /// Declared type.
        kind: ParamKind,

        /// Description of what went wrong.
        reason: String,
    },

    /// Block number or timestamp does not fit into the signed 64 bit storage columns.
    #[error("block {field} {value} exceeds the supported maximum of {max}")]
    BlockValueOutOfRange {
        /// Name of the block value.
        field: &'static str,

        /// Delivered value.
        value: u64,

        /// Largest supported value.
        max: u64,
    },
}
