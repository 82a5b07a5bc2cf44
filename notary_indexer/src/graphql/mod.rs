// SPDX-License-Identifier: AGPL-3.0-or-later

//! Read-only GraphQL API over the indexed records.
mod input_values;
mod objects;
mod queries;
mod scalars;
mod schema;

pub use schema::{build_root_schema, QueryRoot, RootSchema};
