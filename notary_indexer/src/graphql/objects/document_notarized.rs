// SPDX-License-Identifier: AGPL-3.0-or-later

use async_graphql::{ComplexObject, Context, Result, SimpleObject};

use crate::db::SqlStore;
use crate::graphql::scalars::{BigInt, Bytes};
use crate::indexer::DocumentNotarized;
use crate::types::Address;

/// A document hash notarized by its owner.
#[derive(SimpleObject, Debug)]
#[graphql(complex, name = "DocumentNotarized")]
pub struct DocumentNotarizedObject {
    pub id: Bytes,

    /// Account which notarized the document.
    pub owner: Bytes,

    pub document_hash: Bytes,

    /// Notarization time in seconds, as recorded by the contract.
    pub timestamp: BigInt,

    #[graphql(name = "imageURI")]
    pub image_uri: String,

    pub description: String,

    pub block_number: BigInt,

    pub block_timestamp: BigInt,

    pub transaction_hash: Bytes,

    pub log_index: u32,

    #[graphql(skip)]
    owner_address: Address,
}

#[ComplexObject]
impl DocumentNotarizedObject {
    /// True when the owner revoked a document with the same hash.
    async fn revoked(&self, ctx: &Context<'_>) -> Result<bool> {
        let store = ctx.data::<SqlStore>()?;
        let revoked = store
            .revocation_exists(&self.owner_address, self.document_hash.as_str())
            .await?;
        Ok(revoked)
    }
}

impl From<DocumentNotarized> for DocumentNotarizedObject {
    fn from(record: DocumentNotarized) -> Self {
        Self {
            id: Bytes::from(&record.id),
            owner: Bytes::from(&record.owner),
            document_hash: Bytes::from(&record.document_hash),
            timestamp: record.timestamp.into(),
            image_uri: record.image_uri,
            description: record.description,
            block_number: record.block_number.into(),
            block_timestamp: record.block_timestamp.into(),
            transaction_hash: Bytes::from(&record.transaction_hash),
            log_index: record.log_index,
            owner_address: record.owner,
        }
    }
}
