// SPDX-License-Identifier: AGPL-3.0-or-later

//! Turns decoded events into the records which get persisted.
//!
//! This is the only place where binary event values are converted into their text form, every
//! record type goes through the same normalizer.
use crate::events::{DecodedEvent, LogContext, NotaryEvent};
use crate::indexer::entity::{DocumentNotarized, DocumentRetrieved, DocumentRevoked, Entity};
use crate::types::hex::to_display_hex;
use crate::types::EntityId;

impl From<DecodedEvent> for Entity {
    fn from(decoded: DecodedEvent) -> Self {
        let LogContext {
            block_number,
            block_timestamp,
            transaction_hash,
            log_index,
        } = decoded.context;

        let id = EntityId::new(&transaction_hash, log_index);

        match decoded.event {
            NotaryEvent::Notarized(params) => Entity::Notarized(DocumentNotarized {
                id,
                owner: params.owner,
                document_hash: to_display_hex(&params.document_hash),
                timestamp: params.timestamp,
                image_uri: params.image_uri,
                description: params.description,
                block_number,
                block_timestamp,
                transaction_hash,
                log_index,
            }),
            NotaryEvent::Retrieved(params) => Entity::Retrieved(DocumentRetrieved {
                id,
                requester: params.requester,
                document_hash: to_display_hex(&params.document_hash),
                timestamp: params.timestamp,
                block_number,
                block_timestamp,
                transaction_hash,
                log_index,
            }),
            NotaryEvent::Revoked(params) => Entity::Revoked(DocumentRevoked {
                id,
                owner: params.owner,
                document_hash: to_display_hex(&params.document_hash),
                timestamp: params.timestamp,
                description: params.description,
                image_uri: params.image_uri,
                block_number,
                block_timestamp,
                transaction_hash,
                log_index,
            }),
        }
    }
}
