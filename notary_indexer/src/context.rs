// SPDX-License-Identifier: AGPL-3.0-or-later

use std::ops::Deref;
use std::sync::Arc;

use crate::config::Configuration;
use crate::db::SqlStore;
use crate::graphql::{build_root_schema, RootSchema};
use crate::indexer::Indexer;

/// Inner data shared across all services.
#[allow(missing_debug_implementations)]
pub struct Data {
    /// Node configuration.
    pub config: Configuration,

    /// Storage provider with database connection pool.
    pub store: SqlStore,

    /// Pipeline turning raw logs into stored records.
    pub indexer: Indexer,

    /// Read-only GraphQL schema over the stored records.
    pub schema: RootSchema,
}

impl Data {
    pub fn new(store: SqlStore, config: Configuration, indexer: Indexer) -> Self {
        let schema = build_root_schema(store.clone());

        Self {
            config,
            store,
            indexer,
            schema,
        }
    }
}

/// Data shared across all services.
#[allow(missing_debug_implementations)]
pub struct Context(pub Arc<Data>);

impl Context {
    /// Returns a new instance of `Context`.
    pub fn new(store: SqlStore, config: Configuration, indexer: Indexer) -> Self {
        Self(Arc::new(Data::new(store, config, indexer)))
    }
}

impl Clone for Context {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl Deref for Context {
    type Target = Data;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
