// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt::{self, Display};

use serde::Serialize;

use crate::types::{Address, EntityId, LogIndex, TransactionHash};

/// Record created for every observed `DocumentNotarized` event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentNotarized {
    /// Transaction hash and log index of the source event.
    pub id: EntityId,

    /// Account which notarized the document.
    pub owner: Address,

    /// Normalized hex form of the document hash.
    pub document_hash: String,

    /// Notarization time in seconds, as recorded by the contract.
    pub timestamp: u64,

    /// Image attached to the document.
    #[serde(rename = "imageURI")]
    pub image_uri: String,

    /// Free text description of the document.
    pub description: String,

    /// Height of the block which included the event.
    pub block_number: u64,

    /// Timestamp of that block in seconds.
    pub block_timestamp: u64,

    /// Hash of the emitting transaction.
    pub transaction_hash: TransactionHash,

    /// Position of the event inside its transaction.
    pub log_index: LogIndex,
}

/// Record created for every observed `DocumentRetrieved` event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRetrieved {
    /// Transaction hash and log index of the source event.
    pub id: EntityId,

    /// Account which looked up the document.
    pub requester: Address,

    /// Normalized hex form of the document hash.
    pub document_hash: String,

    /// Retrieval time in seconds, as recorded by the contract.
    pub timestamp: u64,

    /// Height of the block which included the event.
    pub block_number: u64,

    /// Timestamp of that block in seconds.
    pub block_timestamp: u64,

    /// Hash of the emitting transaction.
    pub transaction_hash: TransactionHash,

    /// Position of the event inside its transaction.
    pub log_index: LogIndex,
}

/// Record created for every observed `DocumentRevoked` event.
///
/// Revocations are stored as their own records, the matching `DocumentNotarized` record is left
/// untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRevoked {
    /// Transaction hash and log index of the source event.
    pub id: EntityId,

    /// Account which revoked the document.
    pub owner: Address,

    /// Normalized hex form of the document hash.
    pub document_hash: String,

    /// Revocation time in seconds, as recorded by the contract.
    pub timestamp: u64,

    /// Reason given for the revocation.
    pub description: String,

    /// Image attached to the revocation.
    #[serde(rename = "imageURI")]
    pub image_uri: String,

    /// Height of the block which included the event.
    pub block_number: u64,

    /// Timestamp of that block in seconds.
    pub block_timestamp: u64,

    /// Hash of the emitting transaction.
    pub transaction_hash: TransactionHash,

    /// Position of the event inside its transaction.
    pub log_index: LogIndex,
}

/// Discriminant of the record types kept by the indexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum EntityKind {
    /// See [`DocumentNotarized`].
    DocumentNotarized,

    /// See [`DocumentRetrieved`].
    DocumentRetrieved,

    /// See [`DocumentRevoked`].
    DocumentRevoked,
}

impl EntityKind {
    /// Returns the name of this record type.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::DocumentNotarized => "DocumentNotarized",
            EntityKind::DocumentRetrieved => "DocumentRetrieved",
            EntityKind::DocumentRevoked => "DocumentRevoked",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Any record kept by the indexer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entity {
    /// A notarized document.
    Notarized(DocumentNotarized),

    /// A document lookup.
    Retrieved(DocumentRetrieved),

    /// A revocation.
    Revoked(DocumentRevoked),
}

impl Entity {
    /// Returns the id of this record.
    pub fn id(&self) -> &EntityId {
        match self {
            Entity::Notarized(record) => &record.id,
            Entity::Retrieved(record) => &record.id,
            Entity::Revoked(record) => &record.id,
        }
    }

    /// Returns the record type.
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Notarized(_) => EntityKind::DocumentNotarized,
            Entity::Retrieved(_) => EntityKind::DocumentRetrieved,
            Entity::Revoked(_) => EntityKind::DocumentRevoked,
        }
    }

    /// Returns the normalized document hash this record refers to.
    pub fn document_hash(&self) -> &str {
        match self {
            Entity::Notarized(record) => &record.document_hash,
            Entity::Retrieved(record) => &record.document_hash,
            Entity::Revoked(record) => &record.document_hash,
        }
    }
}
