// SPDX-License-Identifier: AGPL-3.0-or-later

use thiserror::Error;

use crate::types::hex::HexError;

/// Validation errors for record listings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// Requested page is larger than allowed.
    #[error("Can't request more than {max} records per page, requested {requested}")]
    PageSizeExceeded {
        /// Largest allowed page size.
        max: u64,

        /// Requested page size.
        requested: u64,
    },

    /// Requested offset is larger than allowed.
    #[error("Can't skip more than {max} records, requested {requested}")]
    SkipExceeded {
        /// Largest allowed offset.
        max: u64,

        /// Requested offset.
        requested: u64,
    },

    /// Filter value for an address column is not a valid address.
    #[error("Invalid address in filter: {0}")]
    InvalidAddress(HexError),

    /// Filter value for a hash column is not valid hex.
    #[error("Invalid document hash in filter: {0}")]
    InvalidDocumentHash(HexError),

    /// Filter is not available for this record type.
    #[error("Can't filter {0} by {1}")]
    UnsupportedFilter(&'static str, &'static str),
}
