// SPDX-License-Identifier: AGPL-3.0-or-later

//! Filtering, ordering and pagination of record listings.
pub mod errors;
mod filter;
mod order;
mod pagination;
mod sql;

pub use filter::{DocumentFilter, Filter, FilterBy, FilterItem};
pub use order::Direction;
pub use pagination::Pagination;
pub(crate) use sql::{bind_to_query, select_sql};
