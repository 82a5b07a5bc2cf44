// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::graphql::RootSchema;
use crate::indexer::Indexer;

/// Shared state of all HTTP routes.
#[derive(Clone)]
#[allow(missing_debug_implementations)]
pub struct HttpServiceContext {
    /// Read-only GraphQL schema.
    pub schema: RootSchema,

    /// Pipeline receiving logs posted to the ingest route.
    pub indexer: Indexer,
}

impl HttpServiceContext {
    pub fn new(schema: RootSchema, indexer: Indexer) -> Self {
        Self { schema, indexer }
    }
}
