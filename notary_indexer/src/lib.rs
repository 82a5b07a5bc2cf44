// SPDX-License-Identifier: AGPL-3.0-or-later

//! # notary_indexer
//!
//! Indexer for the logs of a document notarization contract. Every delivered log is decoded into
//! one of three typed events, keyed by its transaction hash and log index, normalized and upserted
//! into a SQLite or PostgreSQL database. Stored records can be queried through a read-only GraphQL
//! API.
//!
//! ## Example
//!
//! ```rust,no_run
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! use notary_indexer::{Configuration, Node};
//!
//! let config = Configuration::default();
//! let node = Node::start(config).await?;
//!
//! node.on_exit().await;
//! node.shutdown().await;
//! # Ok(())
//! # }
//! ```
#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

mod bus;
mod config;
mod context;
mod db;
mod events;
mod graphql;
mod http;
mod indexer;
mod manager;
mod node;
mod types;

#[cfg(test)]
mod test_utils;

pub use crate::config::{Configuration, ConfigurationError};
pub use crate::db::errors::SqlStoreError;
pub use crate::events::{
    BlockContext, DecodeError, EventSignature, ParamKind, RawLog, RawParam, TransactionContext,
};
pub use crate::indexer::{
    DocumentNotarized, DocumentRetrieved, DocumentRevoked, Entity, EntityKind, IndexerError,
};
pub use crate::types::{Address, EntityId, LogIndex, TransactionHash};
pub use node::Node;
