// SPDX-License-Identifier: AGPL-3.0-or-later

/// `SqlStore` errors.
#[derive(thiserror::Error, Debug)]
pub enum SqlStoreError {
    /// Error returned from the database.
    #[error("Database transaction failed: {0}")]
    Transaction(#[from] sqlx::Error),

    /// Upsert did not affect exactly one row.
    #[error("Insertion of {0} into table {1} did not affect any rows")]
    InsertionFailed(String, &'static str),

    /// A stored row could not be converted back into a record.
    #[error("Invalid row in table {0}: {1}")]
    InvalidRow(&'static str, String),
}
