// SPDX-License-Identifier: AGPL-3.0-or-later

//! Methods to upsert, look up and list indexed records.
mod document_notarized;
mod document_retrieved;
mod document_revoked;

use sqlx::query_scalar;

use crate::db::errors::SqlStoreError;
use crate::db::SqlStore;
use crate::indexer::{Entity, EntityKind};

/// Returns the name of the table holding records of the given type.
pub(crate) fn table_name(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::DocumentNotarized => "document_notarized",
        EntityKind::DocumentRetrieved => "document_retrieved",
        EntityKind::DocumentRevoked => "document_revoked",
    }
}

impl SqlStore {
    /// Inserts a record under its id or overwrites the record already stored there.
    ///
    /// Writing the same record twice leaves exactly one row behind.
    pub async fn upsert(&self, entity: &Entity) -> Result<(), SqlStoreError> {
        let rows_affected = match entity {
            Entity::Notarized(record) => self.upsert_notarized(record).await?,
            Entity::Retrieved(record) => self.upsert_retrieved(record).await?,
            Entity::Revoked(record) => self.upsert_revoked(record).await?,
        };

        if rows_affected != 1 {
            return Err(SqlStoreError::InsertionFailed(
                entity.id().to_string(),
                table_name(entity.kind()),
            ));
        }

        Ok(())
    }

    /// Returns the number of stored records of the given type.
    pub async fn count(&self, kind: EntityKind) -> Result<u64, SqlStoreError> {
        let sql = format!("SELECT COUNT(*) FROM {}", table_name(kind));
        let count: i64 = query_scalar(&sql).fetch_one(&self.pool).await?;

        // Counts are never negative
        Ok(count.max(0) as u64)
    }
}

#[cfg(test)]
mod tests {
    use crate::events::decode_log;
    use crate::indexer::{Entity, EntityKind};
    use crate::test_utils::{notarized_log, test_runner, TestNode, TRANSACTION_HASH};

    #[test]
    fn upsert_is_idempotent() {
        test_runner(|node: TestNode| async move {
            let log = notarized_log(TRANSACTION_HASH, 0, "0x01", "u", "d");
            let entity = Entity::from(decode_log(&log).unwrap());

            node.context.store.upsert(&entity).await.unwrap();
            node.context.store.upsert(&entity).await.unwrap();

            let count = node
                .context
                .store
                .count(EntityKind::DocumentNotarized)
                .await
                .unwrap();
            assert_eq!(count, 1);
        });
    }

    #[test]
    fn last_write_wins() {
        test_runner(|node: TestNode| async move {
            let first = Entity::from(
                decode_log(&notarized_log(TRANSACTION_HASH, 0, "0x01", "u", "first")).unwrap(),
            );
            let second = Entity::from(
                decode_log(&notarized_log(TRANSACTION_HASH, 0, "0x01", "u", "second")).unwrap(),
            );
            assert_eq!(first.id(), second.id());

            node.context.store.upsert(&first).await.unwrap();
            node.context.store.upsert(&second).await.unwrap();

            let record = node
                .context
                .store
                .get_notarized(first.id())
                .await
                .unwrap()
                .unwrap();
            assert_eq!(record.description, "second");
        });
    }

    #[test]
    fn count_per_table() {
        test_runner(|node: TestNode| async move {
            let store = &node.context.store;
            for kind in [
                EntityKind::DocumentNotarized,
                EntityKind::DocumentRetrieved,
                EntityKind::DocumentRevoked,
            ]
            .iter()
            {
                assert_eq!(store.count(*kind).await.unwrap(), 0);
            }
        });
    }
}
