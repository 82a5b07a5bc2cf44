// SPDX-License-Identifier: AGPL-3.0-or-later

use async_graphql::SimpleObject;

use crate::graphql::scalars::{BigInt, Bytes};
use crate::indexer::DocumentRetrieved;

/// A lookup of a notarized document.
#[derive(SimpleObject, Debug)]
#[graphql(name = "DocumentRetrieved")]
pub struct DocumentRetrievedObject {
    pub id: Bytes,

    /// Account which looked the document up.
    pub requester: Bytes,

    pub document_hash: Bytes,

    pub timestamp: BigInt,

    pub block_number: BigInt,

    pub block_timestamp: BigInt,

    pub transaction_hash: Bytes,

    pub log_index: u32,
}

impl From<DocumentRetrieved> for DocumentRetrievedObject {
    fn from(record: DocumentRetrieved) -> Self {
        Self {
            id: Bytes::from(&record.id),
            requester: Bytes::from(&record.requester),
            document_hash: Bytes::from(&record.document_hash),
            timestamp: record.timestamp.into(),
            block_number: record.block_number.into(),
            block_timestamp: record.block_timestamp.into(),
            transaction_hash: Bytes::from(&record.transaction_hash),
            log_index: record.log_index,
        }
    }
}
