// SPDX-License-Identifier: AGPL-3.0-or-later

//! Input values of the listing queries.
mod filter;
mod order;

pub use filter::{DocumentNotarizedFilter, DocumentRetrievedFilter, DocumentRevokedFilter};
pub use order::OrderDirection;
