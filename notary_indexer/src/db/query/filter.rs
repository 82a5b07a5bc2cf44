// SPDX-License-Identifier: AGPL-3.0-or-later

use std::slice::Iter;

use crate::db::query::errors::QueryError;
use crate::indexer::EntityKind;
use crate::types::hex::normalize_hex;
use crate::types::Address;

/// Options of different filters which can be applied on record columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterBy {
    /// Filter rows with exactly this value.
    Element(String),

    /// Filter rows containing this search string, ignoring case.
    Contains(String),
}

/// A single filter applied on one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterItem {
    /// Column this filter is applied on.
    pub column: &'static str,

    /// Type of filter.
    pub by: FilterBy,
}

/// Filter values as requested by a client, before they are validated for a record type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFilter {
    /// Owner of notarizations and revocations, requester of retrievals.
    pub account: Option<String>,

    /// Document hash in any accepted hex form.
    pub document_hash: Option<String>,

    /// Search string matched against the description.
    pub description_contains: Option<String>,
}

/// Collection of filter items, all of them need to match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter(Vec<FilterItem>);

impl Filter {
    /// Returns an empty filter matching every row.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Validates and normalizes client filter values for the table of the given record type.
    pub fn for_kind(kind: EntityKind, values: &DocumentFilter) -> Result<Self, QueryError> {
        let mut filter = Self::new();

        if let Some(account) = &values.account {
            let address: Address = account.parse().map_err(QueryError::InvalidAddress)?;
            let column = match kind {
                EntityKind::DocumentRetrieved => "requester",
                _ => "owner",
            };
            filter.add(column, FilterBy::Element(address.to_string()));
        }

        if let Some(hash) = &values.document_hash {
            let hash = normalize_hex(hash).map_err(QueryError::InvalidDocumentHash)?;
            filter.add("document_hash", FilterBy::Element(hash));
        }

        if let Some(search) = &values.description_contains {
            if kind == EntityKind::DocumentRetrieved {
                return Err(QueryError::UnsupportedFilter(
                    kind.as_str(),
                    "descriptionContains",
                ));
            }
            filter.add("description", FilterBy::Contains(search.to_owned()));
        }

        Ok(filter)
    }

    /// Adds a filter on a column.
    pub fn add(&mut self, column: &'static str, by: FilterBy) {
        self.0.push(FilterItem { column, by });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> Iter<FilterItem> {
        self.0.iter()
    }
}
