// SPDX-License-Identifier: AGPL-3.0-or-later

use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};

use crate::db::SqlStore;
use crate::graphql::queries::DocumentsRoot;

/// All of the graphql query sub modules merged into one top level root.
#[derive(MergedObject, Debug, Default)]
pub struct QueryRoot(pub DocumentsRoot);

/// Read-only GraphQL schema over the indexed records.
pub type RootSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the root graphql schema that can handle graphql requests.
pub fn build_root_schema(store: SqlStore) -> RootSchema {
    Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription)
        .data(store)
        .finish()
}
