// SPDX-License-Identifier: AGPL-3.0-or-later

//! Decoding of raw chain logs into typed notary events.
//!
//! The set of events is closed: every log is matched against the three signatures of the notary
//! contract and its parameters are checked against the declared ABI shape before any value is
//! parsed. There is no lookup of parameters by name or position after this boundary.
mod decode;
mod errors;
mod raw;
mod signature;

pub use decode::{
    decode_log, DecodedEvent, DocumentNotarizedParams, DocumentRetrievedParams,
    DocumentRevokedParams, LogContext, NotaryEvent,
};
pub use errors::DecodeError;
pub use raw::{BlockContext, ParamKind, RawLog, RawParam, TransactionContext};
pub use signature::EventSignature;
