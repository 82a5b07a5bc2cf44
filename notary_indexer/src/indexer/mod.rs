// SPDX-License-Identifier: AGPL-3.0-or-later

//! Pipeline from raw logs to stored records.
//!
//! Logs are decoded, keyed by their transaction hash and log index, normalized and upserted into
//! the store. The [`Indexer`] makes sure only one log is in flight at any time so records get
//! written in the order logs arrive.
mod entity;
mod errors;
mod handler;
mod mapping;

use std::sync::Arc;

use log::warn;
use tokio::sync::Mutex;

use crate::bus::{ServiceMessage, ServiceSender};
use crate::events::RawLog;

pub use entity::{DocumentNotarized, DocumentRetrieved, DocumentRevoked, Entity, EntityKind};
pub use errors::IndexerError;
pub use handler::EventHandler;

/// Serializes access to an [`EventHandler`] and announces every stored record on the service bus.
#[derive(Clone, Debug)]
pub struct Indexer {
    handler: Arc<Mutex<EventHandler>>,
    tx: ServiceSender,
}

impl Indexer {
    /// Returns a new indexer around the given handler.
    pub fn new(handler: EventHandler, tx: ServiceSender) -> Self {
        Self {
            handler: Arc::new(Mutex::new(handler)),
            tx,
        }
    }

    /// Indexes one log, waiting until all previously delivered logs were handled.
    pub async fn ingest(&self, log: &RawLog) -> Result<Option<Entity>, IndexerError> {
        let handler = self.handler.lock().await;
        let entity = handler.handle(log).await?;

        if let Some(entity) = &entity {
            let message = ServiceMessage::EntityIndexed(entity.kind(), *entity.id());
            if self.tx.send(message).is_err() {
                warn!("No subscriber informed about indexed {}", entity.id());
            }
        }

        Ok(entity)
    }
}
