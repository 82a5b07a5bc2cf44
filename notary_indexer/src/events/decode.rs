// SPDX-License-Identifier: AGPL-3.0-or-later

use std::convert::TryFrom;
use std::slice::Iter;

use crate::events::errors::DecodeError;
use crate::events::raw::{ParamKind, RawLog, RawParam};
use crate::events::signature::EventSignature;
use crate::types::hex::from_hex;
use crate::types::{Address, LogIndex, TransactionHash};

/// Integers are persisted in signed 64 bit columns, larger values are rejected.
const MAX_UINT: u64 = i64::MAX as u64;

fn check_block_value(field: &'static str, value: u64) -> Result<u64, DecodeError> {
    if value > MAX_UINT {
        return Err(DecodeError::BlockValueOutOfRange {
            field,
            value,
            max: MAX_UINT,
        });
    }

    Ok(value)
}

/// Where on the chain a log was observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogContext {
    /// Height of the including block.
    pub block_number: u64,

    /// Timestamp of the including block in seconds.
    pub block_timestamp: u64,

    /// Hash of the emitting transaction.
    pub transaction_hash: TransactionHash,

    /// Position of the log inside the transaction.
    pub log_index: LogIndex,
}

impl TryFrom<&RawLog> for LogContext {
    type Error = DecodeError;

    fn try_from(log: &RawLog) -> Result<Self, Self::Error> {
        Ok(Self {
            block_number: check_block_value("number", log.block.number)?,
            block_timestamp: check_block_value("timestamp", log.block.timestamp)?,
            transaction_hash: log.transaction.hash,
            log_index: log.log_index,
        })
    }
}

/// Parameters of a `DocumentNotarized` event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentNotarizedParams {
    /// Account which notarized the document.
    pub owner: Address,

    /// Hash of the document as raw bytes.
    pub document_hash: Vec<u8>,

    /// Notarization time in seconds, as recorded by the contract.
    pub timestamp: u64,

    /// Image attached to the document.
    pub image_uri: String,

    /// Free text description of the document.
    pub description: String,
}

/// Parameters of a `DocumentRetrieved` event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentRetrievedParams {
    /// Account which looked the document up.
    pub requester: Address,

    /// Hash of the document as raw bytes.
    pub document_hash: Vec<u8>,

    /// Retrieval time in seconds, as recorded by the contract.
    pub timestamp: u64,
}

/// Parameters of a `DocumentRevoked` event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentRevokedParams {
    /// Account which revoked the document.
    pub owner: Address,

    /// Hash of the document as raw bytes.
    pub document_hash: Vec<u8>,

    /// Revocation time in seconds, as recorded by the contract.
    pub timestamp: u64,

    /// Reason given for the revocation.
    pub description: String,

    /// Image attached to the revocation.
    pub image_uri: String,
}

/// Typed event emitted by the notary contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotaryEvent {
    /// A document hash was notarized by its owner.
    Notarized(DocumentNotarizedParams),

    /// A notarized document was looked up.
    Retrieved(DocumentRetrievedParams),

    /// The owner revoked a notarized document.
    Revoked(DocumentRevokedParams),
}

impl NotaryEvent {
    /// Returns the signature of this event.
    pub fn signature(&self) -> EventSignature {
        match self {
            NotaryEvent::Notarized(_) => EventSignature::DocumentNotarized,
            NotaryEvent::Retrieved(_) => EventSignature::DocumentRetrieved,
            NotaryEvent::Revoked(_) => EventSignature::DocumentRevoked,
        }
    }
}

/// A typed event together with the position it was observed at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedEvent {
    /// Position of the log on the chain.
    pub context: LogContext,

    /// Decoded event parameters.
    pub event: NotaryEvent,
}

/// Decodes a raw log into a typed event.
///
/// The parameter list is first checked against the declared shape of the event, only then are
/// values parsed in order.
pub fn decode_log(log: &RawLog) -> Result<DecodedEvent, DecodeError> {
    let signature: EventSignature = log.event.parse()?;
    validate_shape(signature, &log.params)?;
    let context = LogContext::try_from(log)?;

    let mut params = ParamReader::new(signature, &log.params);

    let event = match signature {
        EventSignature::DocumentNotarized => NotaryEvent::Notarized(DocumentNotarizedParams {
            owner: params.address()?,
            document_hash: params.bytes()?,
            timestamp: params.uint()?,
            image_uri: params.string()?,
            description: params.string()?,
        }),
        EventSignature::DocumentRetrieved => NotaryEvent::Retrieved(DocumentRetrievedParams {
            requester: params.address()?,
            document_hash: params.bytes()?,
            timestamp: params.uint()?,
        }),
        EventSignature::DocumentRevoked => NotaryEvent::Revoked(DocumentRevokedParams {
            owner: params.address()?,
            document_hash: params.bytes()?,
            timestamp: params.uint()?,
            description: params.string()?,
            image_uri: params.string()?,
        }),
    };

    Ok(DecodedEvent { context, event })
}

fn validate_shape(signature: EventSignature, params: &[RawParam]) -> Result<(), DecodeError> {
    let expected = signature.params();

    if expected.len() != params.len() {
        return Err(DecodeError::ParamCount {
            event: signature,
            expected: expected.len(),
            actual: params.len(),
        });
    }

    for (position, (kind, param)) in expected.iter().zip(params).enumerate() {
        if *kind != param.kind {
            return Err(DecodeError::ParamKind {
                event: signature,
                position,
                expected: *kind,
                actual: param.kind,
            });
        }
    }

    Ok(())
}

/// Reads parameters in declaration order, parsing each value into its type.
struct ParamReader<'a> {
    signature: EventSignature,
    params: Iter<'a, RawParam>,
    position: usize,
}

impl<'a> ParamReader<'a> {
    fn new(signature: EventSignature, params: &'a [RawParam]) -> Self {
        Self {
            signature,
            params: params.iter(),
            position: 0,
        }
    }

    fn next(&mut self, kind: ParamKind) -> Result<(usize, &'a str), DecodeError> {
        let position = self.position;
        self.position += 1;

        match self.params.next() {
            Some(param) if param.kind == kind => Ok((position, param.value.as_str())),
            Some(param) => Err(DecodeError::ParamKind {
                event: self.signature,
                position,
                expected: kind,
                actual: param.kind,
            }),
            None => Err(DecodeError::ParamCount {
                event: self.signature,
                expected: self.signature.params().len(),
                actual: position,
            }),
        }
    }

    fn invalid(&self, position: usize, kind: ParamKind, reason: impl ToString) -> DecodeError {
        DecodeError::InvalidValue {
            event: self.signature,
            position,
            kind,
            reason: reason.to_string(),
        }
    }

    fn address(&mut self) -> Result<Address, DecodeError> {
        let (position, value) = self.next(ParamKind::Address)?;
        value
            .parse::<Address>()
            .map_err(|err| self.invalid(position, ParamKind::Address, err))
    }

    fn bytes(&mut self) -> Result<Vec<u8>, DecodeError> {
        let (position, value) = self.next(ParamKind::Bytes)?;
        from_hex(value).map_err(|err| self.invalid(position, ParamKind::Bytes, err))
    }

    fn uint(&mut self) -> Result<u64, DecodeError> {
        let (position, value) = self.next(ParamKind::Uint256)?;

        let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
            Some(digits) => u64::from_str_radix(digits, 16),
            None => value.parse::<u64>(),
        }
        .map_err(|err| self.invalid(position, ParamKind::Uint256, err))?;

        if parsed > MAX_UINT {
            return Err(self.invalid(
                position,
                ParamKind::Uint256,
                format!("{} exceeds the supported maximum of {}", parsed, MAX_UINT),
            ));
        }

        Ok(parsed)
    }

    fn string(&mut self) -> Result<String, DecodeError> {
        let (_, value) = self.next(ParamKind::String)?;
        Ok(value.to_owned())
    }
}
