// SPDX-License-Identifier: AGPL-3.0-or-later

use anyhow::Result;
use log::info;

use crate::bus::{create_service_sender, ServiceMessage};
use crate::config::Configuration;
use crate::context::Context;
use crate::db::SqlStore;
use crate::db::{connection_pool, create_database, run_pending_migrations, Pool};
use crate::events::RawLog;
use crate::http::http_service;
use crate::indexer::{Entity, EventHandler, Indexer, IndexerError};
use crate::manager::ServiceManager;

/// Makes sure database is created and migrated before returning connection pool.
async fn initialize_db(config: &Configuration) -> Result<Pool> {
    // Find SSL certificate locations on the system for OpenSSL for TLS
    openssl_probe::init_ssl_cert_env_vars();

    create_database(&config.database_url).await?;

    let pool = connection_pool(&config.database_url, config.database_max_connections).await?;

    run_pending_migrations(&pool).await?;

    Ok(pool)
}

/// Main runtime managing the indexer process.
#[allow(missing_debug_implementations)]
pub struct Node {
    pool: Pool,
    context: Context,
    manager: ServiceManager<Context, ServiceMessage>,
}

impl Node {
    /// Start the indexer with your configuration. This method can be used to run the indexer
    /// within other applications.
    ///
    /// Fails when the configuration is invalid or the database can not be prepared.
    pub async fn start(config: Configuration) -> Result<Self> {
        let mut node = Self::init(config).await?;
        node.serve();
        Ok(node)
    }

    /// Prepare database, indexer and GraphQL schema without starting any services.
    ///
    /// Logs can already be ingested through [`Node::ingest`], nothing is served until
    /// [`Node::serve`] gets called.
    pub async fn init(config: Configuration) -> Result<Self> {
        let contract_address = config.validate()?;

        let pool = initialize_db(&config).await?;
        let store = SqlStore::new(pool.clone());

        match &contract_address {
            Some(address) => info!("Index logs of contract {}", address),
            None => info!("Index logs of any contract"),
        }

        let tx = create_service_sender(config.bus_capacity);
        let indexer = Indexer::new(EventHandler::new(store.clone(), contract_address), tx.clone());

        // Schema and store are built once here and shared with all services
        let context = Context::new(store, config, indexer);
        let manager = ServiceManager::<Context, ServiceMessage>::new(tx, context.clone());

        Ok(Self {
            pool,
            context,
            manager,
        })
    }

    /// Start HTTP server with log ingest endpoint and GraphQL API.
    pub fn serve(&mut self) {
        self.manager.add("http", http_service);
    }

    /// Index a single log, see [`Indexer::ingest`].
    pub async fn ingest(&self, log: &RawLog) -> Result<Option<Entity>, IndexerError> {
        self.context.indexer.ingest(log).await
    }

    /// This future resolves when at least one system service stopped.
    ///
    /// It can be used to exit the application as a stopped service usually means that something
    /// went wrong.
    pub async fn on_exit(&self) {
        self.manager.on_exit().await;
    }

    /// Close all running concurrent tasks and wait until they are fully shut down.
    pub async fn shutdown(self) {
        self.manager.shutdown().await;
        self.pool.close().await;
    }
}
