// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::db::query::errors::QueryError;

/// Number of records returned when no page size was requested.
pub const DEFAULT_PAGE_SIZE: u64 = 100;

/// Largest page size a client can request.
pub const MAX_PAGE_SIZE: u64 = 1000;

/// Largest number of records a client can skip.
pub const MAX_SKIP: u64 = 5000;

/// Offset based pagination of record listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    first: u64,
    skip: u64,
}

impl Pagination {
    /// Returns validated pagination settings, applying defaults for missing values.
    pub fn new(first: Option<u64>, skip: Option<u64>) -> Result<Self, QueryError> {
        let first = first.unwrap_or(DEFAULT_PAGE_SIZE);
        if first > MAX_PAGE_SIZE {
            return Err(QueryError::PageSizeExceeded {
                max: MAX_PAGE_SIZE,
                requested: first,
            });
        }

        let skip = skip.unwrap_or(0);
        if skip > MAX_SKIP {
            return Err(QueryError::SkipExceeded {
                max: MAX_SKIP,
                requested: skip,
            });
        }

        Ok(Self { first, skip })
    }

    /// Maximum number of records on this page.
    pub fn first(&self) -> u64 {
        self.first
    }

    /// Number of records skipped before this page starts.
    pub fn skip(&self) -> u64 {
        self.skip
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            first: DEFAULT_PAGE_SIZE,
            skip: 0,
        }
    }
}
