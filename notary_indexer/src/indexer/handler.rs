// SPDX-License-Identifier: AGPL-3.0-or-later

use log::{debug, warn};

use crate::db::SqlStore;
use crate::events::{decode_log, RawLog};
use crate::indexer::errors::IndexerError;
use crate::indexer::Entity;
use crate::types::Address;

/// Turns raw logs of the notary contract into stored records.
///
/// Every log is handled on its own: it gets decoded, keyed by its transaction hash and log index,
/// normalized and finally upserted. No state is kept between two logs.
#[derive(Clone, Debug)]
pub struct EventHandler {
    store: SqlStore,
    contract_address: Option<Address>,
}

impl EventHandler {
    /// Returns a handler writing into the given store.
    ///
    /// When a contract address is set, logs emitted by other contracts are ignored.
    pub fn new(store: SqlStore, contract_address: Option<Address>) -> Self {
        Self {
            store,
            contract_address,
        }
    }

    /// Indexes one log and returns the stored record.
    ///
    /// Returns `None` when the log was emitted by a contract this handler is not bound to.
    pub async fn handle(&self, log: &RawLog) -> Result<Option<Entity>, IndexerError> {
        if let Some(contract_address) = &self.contract_address {
            if &log.address != contract_address {
                warn!(
                    "Ignore {} log from contract {}, expected {}",
                    log.event, log.address, contract_address
                );
                return Ok(None);
            }
        }

        let entity = Entity::from(decode_log(log)?);
        self.store.upsert(&entity).await?;

        debug!(
            "Indexed {} {} from block {}",
            entity.kind(),
            entity.id(),
            log.block.number
        );

        Ok(Some(entity))
    }
}
