// SPDX-License-Identifier: AGPL-3.0-or-later

use async_graphql::InputObject;

use crate::db::query::DocumentFilter;
use crate::graphql::scalars::Bytes;

/// Filter notarizations, all given values need to match.
#[derive(InputObject, Debug, Default)]
pub struct DocumentNotarizedFilter {
    pub owner: Option<Bytes>,

    /// Case-insensitive substring of the description. On SQLite only ASCII letters are matched
    /// regardless of their case.
    pub description_contains: Option<String>,

    pub document_hash: Option<Bytes>,
}

/// Filter revocations, all given values need to match.
#[derive(InputObject, Debug, Default)]
pub struct DocumentRevokedFilter {
    pub owner: Option<Bytes>,

    pub document_hash: Option<Bytes>,
}

/// Filter retrievals, all given values need to match.
#[derive(InputObject, Debug, Default)]
pub struct DocumentRetrievedFilter {
    pub requester: Option<Bytes>,

    pub document_hash: Option<Bytes>,
}

fn to_string(value: Option<Bytes>) -> Option<String> {
    value.map(|bytes| bytes.to_string())
}

impl From<DocumentNotarizedFilter> for DocumentFilter {
    fn from(filter: DocumentNotarizedFilter) -> Self {
        Self {
            account: to_string(filter.owner),
            document_hash: to_string(filter.document_hash),
            description_contains: filter.description_contains,
        }
    }
}

impl From<DocumentRevokedFilter> for DocumentFilter {
    fn from(filter: DocumentRevokedFilter) -> Self {
        Self {
            account: to_string(filter.owner),
            document_hash: to_string(filter.document_hash),
            description_contains: None,
        }
    }
}

impl From<DocumentRetrievedFilter> for DocumentFilter {
    fn from(filter: DocumentRetrievedFilter) -> Self {
        Self {
            account: to_string(filter.requester),
            document_hash: to_string(filter.document_hash),
            description_contains: None,
        }
    }
}
