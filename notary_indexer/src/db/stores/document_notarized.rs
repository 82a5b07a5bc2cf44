// SPDX-License-Identifier: AGPL-3.0-or-later

use std::convert::TryFrom;

use sqlx::{query, query_as};

use crate::db::errors::SqlStoreError;
use crate::db::models::DocumentNotarizedRow;
use crate::db::query::{bind_to_query, select_sql, Direction, Filter, Pagination};
use crate::db::SqlStore;
use crate::indexer::DocumentNotarized;
use crate::types::EntityId;

/// Methods to interact with the `document_notarized` table in the database.
impl SqlStore {
    pub(super) async fn upsert_notarized(
        &self,
        record: &DocumentNotarized,
    ) -> Result<u64, SqlStoreError> {
        let row = DocumentNotarizedRow::try_from(record)?;

        let result = query(
            "
            INSERT INTO
                document_notarized (
                    id,
                    owner,
                    document_hash,
                    document_timestamp,
                    image_uri,
                    description,
                    block_number,
                    block_timestamp,
                    transaction_hash,
                    log_index
                )
            VALUES
                ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (id) DO UPDATE SET
                owner = excluded.owner,
                document_hash = excluded.document_hash,
                document_timestamp = excluded.document_timestamp,
                image_uri = excluded.image_uri,
                description = excluded.description,
                block_number = excluded.block_number,
                block_timestamp = excluded.block_timestamp,
                transaction_hash = excluded.transaction_hash,
                log_index = excluded.log_index
            ",
        )
        .bind(row.id)
        .bind(row.owner)
        .bind(row.document_hash)
        .bind(row.document_timestamp)
        .bind(row.image_uri)
        .bind(row.description)
        .bind(row.block_number)
        .bind(row.block_timestamp)
        .bind(row.transaction_hash)
        .bind(row.log_index)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Returns the notarization with this id, `None` when it was never indexed.
    pub async fn get_notarized(
        &self,
        id: &EntityId,
    ) -> Result<Option<DocumentNotarized>, SqlStoreError> {
        let row = query_as::<_, DocumentNotarizedRow>(
            "
            SELECT
                *
            FROM
                document_notarized
            WHERE
                id = $1
            ",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(DocumentNotarized::try_from).transpose()
    }

    /// Returns a page of notarizations in chain order.
    ///
    /// The filter needs to be built for the `DocumentNotarized` record type.
    pub async fn list_notarized(
        &self,
        filter: &Filter,
        direction: Direction,
        pagination: &Pagination,
    ) -> Result<Vec<DocumentNotarized>, SqlStoreError> {
        let (sql, args) = select_sql("document_notarized", filter, direction, pagination);

        let rows = bind_to_query(query_as::<_, DocumentNotarizedRow>(&sql), &args)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(DocumentNotarized::try_from).collect()
    }
}
