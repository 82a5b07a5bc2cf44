// SPDX-License-Identifier: AGPL-3.0-or-later

use std::convert::TryFrom;

use sqlx::{query, query_as};

use crate::db::errors::SqlStoreError;
use crate::db::models::DocumentRetrievedRow;
use crate::db::query::{bind_to_query, select_sql, Direction, Filter, Pagination};
use crate::db::SqlStore;
use crate::indexer::DocumentRetrieved;
use crate::types::EntityId;

/// Methods to interact with the `document_retrieved` table in the database.
impl SqlStore {
    pub(super) async fn upsert_retrieved(
        &self,
        record: &DocumentRetrieved,
    ) -> Result<u64, SqlStoreError> {
        let row = DocumentRetrievedRow::try_from(record)?;

        let result = query(
            "
            INSERT INTO
                document_retrieved (
                    id,
                    requester,
                    document_hash,
                    document_timestamp,
                    block_number,
                    block_timestamp,
                    transaction_hash,
                    log_index
                )
            VALUES
                ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                requester = excluded.requester,
                document_hash = excluded.document_hash,
                document_timestamp = excluded.document_timestamp,
                block_number = excluded.block_number,
                block_timestamp = excluded.block_timestamp,
                transaction_hash = excluded.transaction_hash,
                log_index = excluded.log_index
            ",
        )
        .bind(row.id)
        .bind(row.requester)
        .bind(row.document_hash)
        .bind(row.document_timestamp)
        .bind(row.block_number)
        .bind(row.block_timestamp)
        .bind(row.transaction_hash)
        .bind(row.log_index)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Returns the retrieval with this id, `None` when it was never indexed.
    pub async fn get_retrieved(
        &self,
        id: &EntityId,
    ) -> Result<Option<DocumentRetrieved>, SqlStoreError> {
        let row = query_as::<_, DocumentRetrievedRow>(
            "
            SELECT
                *
            FROM
                document_retrieved
            WHERE
                id = $1
            ",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(DocumentRetrieved::try_from).transpose()
    }

    /// Returns a page of retrievals in chain order.
    pub async fn list_retrieved(
        &self,
        filter: &Filter,
        direction: Direction,
        pagination: &Pagination,
    ) -> Result<Vec<DocumentRetrieved>, SqlStoreError> {
        let (sql, args) = select_sql("document_retrieved", filter, direction, pagination);

        let rows = bind_to_query(query_as::<_, DocumentRetrievedRow>(&sql), &args)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(DocumentRetrieved::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::db::query::{Direction, DocumentFilter, Filter, Pagination};
    use crate::events::decode_log;
    use crate::indexer::{Entity, EntityKind};
    use crate::test_utils::{retrieved_log, test_runner, TestNode, OWNER, TRANSACTION_HASH};

    #[test]
    fn insert_get_and_list() {
        test_runner(|node: TestNode| async move {
            let entity = Entity::from(
                decode_log(&retrieved_log(TRANSACTION_HASH, 3, "0xABCD")).unwrap(),
            );
            node.context.store.upsert(&entity).await.unwrap();

            let record = node.context.store.get_retrieved(entity.id()).await.unwrap();
            assert_eq!(record.clone().map(Entity::Retrieved), Some(entity));

            let filter = Filter::for_kind(
                EntityKind::DocumentRetrieved,
                &DocumentFilter {
                    account: Some(OWNER.into()),
                    document_hash: Some("abcd".into()),
                    ..Default::default()
                },
            )
            .unwrap();

            let records = node
                .context
                .store
                .list_retrieved(&filter, Direction::Ascending, &Pagination::default())
                .await
                .unwrap();
            assert_eq!(records, vec![record.unwrap()]);
        });
    }
}
