// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::db::errors::SqlStoreError;
use crate::events::DecodeError;

/// Errors which can occur while indexing a single log.
#[derive(thiserror::Error, Debug)]
pub enum IndexerError {
    /// Log does not match the shape of any known event.
    ///
    /// Delivering the same log again fails the same way.
    #[error("Malformed event: {0}")]
    Decode(#[from] DecodeError),

    /// Record could not be written to the store.
    #[error("Persisting record failed: {0}")]
    Store(#[from] SqlStoreError),
}

impl IndexerError {
    /// Returns true when delivering the same log again might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, IndexerError::Store(_))
    }
}
