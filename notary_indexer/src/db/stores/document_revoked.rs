// SPDX-License-Identifier: AGPL-3.0-or-later

use std::convert::TryFrom;

use sqlx::{query, query_as, query_scalar};

use crate::db::errors::SqlStoreError;
use crate::db::models::DocumentRevokedRow;
use crate::db::query::{bind_to_query, select_sql, Direction, Filter, Pagination};
use crate::db::SqlStore;
use crate::indexer::DocumentRevoked;
use crate::types::{Address, EntityId};

/// Methods to interact with the `document_revoked` table in the database.
impl SqlStore {
    pub(super) async fn upsert_revoked(
        &self,
        record: &DocumentRevoked,
    ) -> Result<u64, SqlStoreError> {
        let row = DocumentRevokedRow::try_from(record)?;

        let result = query(
            "
            INSERT INTO
                document_revoked (
                    id,
                    owner,
                    document_hash,
                    document_timestamp,
                    description,
                    image_uri,
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
                description = excluded.description,
                image_uri = excluded.image_uri,
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
        .bind(row.description)
        .bind(row.image_uri)
        .bind(row.block_number)
        .bind(row.block_timestamp)
        .bind(row.transaction_hash)
        .bind(row.log_index)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Returns the revocation with this id, `None` when it was never indexed.
    pub async fn get_revoked(
        &self,
        id: &EntityId,
    ) -> Result<Option<DocumentRevoked>, SqlStoreError> {
        let row = query_as::<_, DocumentRevokedRow>(
            "
            SELECT
                *
            FROM
                document_revoked
            WHERE
                id = $1
            ",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(DocumentRevoked::try_from).transpose()
    }

    /// Returns a page of revocations in chain order.
    pub async fn list_revoked(
        &self,
        filter: &Filter,
        direction: Direction,
        pagination: &Pagination,
    ) -> Result<Vec<DocumentRevoked>, SqlStoreError> {
        let (sql, args) = select_sql("document_revoked", filter, direction, pagination);

        let rows = bind_to_query(query_as::<_, DocumentRevokedRow>(&sql), &args)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(DocumentRevoked::try_from).collect()
    }

    /// Returns true when the owner revoked a document with this normalized hash.
    pub async fn revocation_exists(
        &self,
        owner: &Address,
        document_hash: &str,
    ) -> Result<bool, SqlStoreError> {
        let count: i64 = query_scalar(
            "
            SELECT
                COUNT(*)
            FROM
                document_revoked
            WHERE
                owner = $1
                AND document_hash = $2
            ",
        )
        .bind(owner.to_string())
        .bind(document_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    use crate::db::query::{Direction, DocumentFilter, Filter, Pagination};
    use crate::events::{decode_log, ParamKind, RawParam};
    use crate::indexer::{Entity, EntityKind};
    use crate::test_utils::{revoked_log, test_runner, transaction_hash, TestNode, OWNER};

    #[test]
    fn revocation_lookup() {
        test_runner(|node: TestNode| async move {
            let log = revoked_log(&transaction_hash(1), 0, "0xAA", "lost");
            let entity = Entity::from(decode_log(&log).unwrap());
            node.context.store.upsert(&entity).await.unwrap();

            let owner = OWNER.parse().unwrap();
            let other = "0x00000000000000000000000000000000000000ff".parse().unwrap();

            let store = &node.context.store;
            assert!(store.revocation_exists(&owner, "0xaa").await.unwrap());
            assert!(!store.revocation_exists(&owner, "0xbb").await.unwrap());
            assert!(!store.revocation_exists(&other, "0xaa").await.unwrap());
        });
    }

    #[test]
    fn list_by_owner() {
        test_runner(|node: TestNode| async move {
            let mine = revoked_log(&transaction_hash(1), 0, "0x01", "mine");
            let mut theirs = revoked_log(&transaction_hash(2), 0, "0x01", "theirs");
            theirs.params[0] = RawParam::new(
                ParamKind::Address,
                "0x00000000000000000000000000000000000000ff",
            );

            for log in [mine, theirs].iter() {
                let entity = Entity::from(decode_log(log).unwrap());
                node.context.store.upsert(&entity).await.unwrap();
            }

            let filter = Filter::for_kind(
                EntityKind::DocumentRevoked,
                &DocumentFilter {
                    account: Some(OWNER.into()),
                    ..Default::default()
                },
            )
            .unwrap();

            let records = node
                .context
                .store
                .list_revoked(&filter, Direction::Ascending, &Pagination::default())
                .await
                .unwrap();

            assert_eq!(records.len(), 1);
            assert_eq!(records[0].description, "mine");

            let record = node.context.store.get_revoked(&records[0].id).await.unwrap();
            assert_eq!(record.as_ref(), records.first());
        });
    }
}
