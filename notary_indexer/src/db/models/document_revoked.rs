// SPDX-License-Identifier: AGPL-3.0-or-later

use std::convert::TryFrom;

use serde::Serialize;
use sqlx::FromRow;

use crate::db::errors::SqlStoreError;
use crate::db::models::utils::{parse_column, to_i64, to_u32, to_u64};
use crate::indexer::DocumentRevoked;

const TABLE: &str = "document_revoked";

/// Representation of a row from the `document_revoked` table as stored in the database.
#[derive(FromRow, Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRevokedRow {
    pub id: String,
    pub owner: String,
    pub document_hash: String,
    pub document_timestamp: i64,
    pub description: String,
    pub image_uri: String,
    pub block_number: i64,
    pub block_timestamp: i64,
    pub transaction_hash: String,
    pub log_index: i64,
}

impl TryFrom<&DocumentRevoked> for DocumentRevokedRow {
    type Error = SqlStoreError;

    fn try_from(record: &DocumentRevoked) -> Result<Self, Self::Error> {
        Ok(Self {
            id: record.id.to_string(),
            owner: record.owner.to_string(),
            document_hash: record.document_hash.clone(),
            document_timestamp: to_i64(TABLE, "document_timestamp", record.timestamp)?,
            description: record.description.clone(),
            image_uri: record.image_uri.clone(),
            block_number: to_i64(TABLE, "block_number", record.block_number)?,
            block_timestamp: to_i64(TABLE, "block_timestamp", record.block_timestamp)?,
            transaction_hash: record.transaction_hash.to_string(),
            log_index: i64::from(record.log_index),
        })
    }
}

impl TryFrom<DocumentRevokedRow> for DocumentRevoked {
    type Error = SqlStoreError;

    fn try_from(row: DocumentRevokedRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_column(TABLE, "id", &row.id)?,
            owner: parse_column(TABLE, "owner", &row.owner)?,
            document_hash: row.document_hash,
            timestamp: to_u64(TABLE, row.document_timestamp)?,
            description: row.description,
            image_uri: row.image_uri,
            block_number: to_u64(TABLE, row.block_number)?,
            block_timestamp: to_u64(TABLE, row.block_timestamp)?,
            transaction_hash: parse_column(TABLE, "transaction_hash", &row.transaction_hash)?,
            log_index: to_u32(TABLE, row.log_index)?,
        })
    }
}
