// SPDX-License-Identifier: AGPL-3.0-or-later

use async_graphql::SimpleObject;

use crate::graphql::scalars::{BigInt, Bytes};
use crate::indexer::DocumentRevoked;

/// A revocation of a notarized document by its owner.
#[derive(SimpleObject, Debug)]
#[graphql(name = "DocumentRevoked")]
pub struct DocumentRevokedObject {
    pub id: Bytes,

    pub owner: Bytes,

    pub document_hash: Bytes,

    pub timestamp: BigInt,

    pub description: String,

    #[graphql(name = "imageURI")]
    pub image_uri: String,

    pub block_number: BigInt,

    pub block_timestamp: BigInt,

    pub transaction_hash: Bytes,

    pub log_index: u32,
}

impl From<DocumentRevoked> for DocumentRevokedObject {
    fn from(record: DocumentRevoked) -> Self {
        Self {
            id: Bytes::from(&record.id),
            owner: Bytes::from(&record.owner),
            document_hash: Bytes::from(&record.document_hash),
            timestamp: record.timestamp.into(),
            description: record.description,
            image_uri: record.image_uri,
            block_number: record.block_number.into(),
            block_timestamp: record.block_timestamp.into(),
            transaction_hash: Bytes::from(&record.transaction_hash),
            log_index: record.log_index,
        }
    }
}
