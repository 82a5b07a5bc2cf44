// SPDX-License-Identifier: AGPL-3.0-or-later

use std::future::Future;
use std::panic;

use tokio::runtime::Builder;

use crate::bus::create_service_sender;
use crate::context::Context;
use crate::db::SqlStore;
use crate::indexer::{EventHandler, Indexer};
use crate::test_utils::{initialize_db, TestConfiguration};
use crate::Configuration;

/// Node context backed by its own test database.
pub struct TestNode {
    pub context: Context,
}

#[async_trait::async_trait]
pub trait AsyncTestFn {
    async fn call(self, node: TestNode);
}

#[async_trait::async_trait]
impl<FN, F> AsyncTestFn for FN
where
    FN: FnOnce(TestNode) -> F + Sync + Send,
    F: Future<Output = ()> + Send,
{
    async fn call(self, node: TestNode) {
        self(node).await
    }
}

/// Provides a safe way to write tests using a database which closes the pool connection
/// automatically when the test succeeds or fails.
///
/// Takes an (async) test function as an argument and passes over the `TestNode` instance
/// so it can be used inside of it.
pub fn test_runner<F: AsyncTestFn + Send + Sync + 'static>(test: F) {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .thread_name("test_runner")
        .build()
        .expect("Could not build tokio Runtime for test");

    // Respects RUST_LOG, repeated initialisation by other tests is ignored
    let _ = env_logger::builder().is_test(true).try_init();

    runtime.block_on(async {
        let config = TestConfiguration::new();
        let pool = initialize_db(&config.database_url).await;
        let store = SqlStore::new(pool.clone());

        let indexer = Indexer::new(
            EventHandler::new(store.clone(), None),
            create_service_sender(16),
        );

        let node = TestNode {
            context: Context::new(store, Configuration::default(), indexer),
        };

        // Run the test in its own task so a panic inside it does not skip the teardown
        let result = tokio::task::spawn(async move {
            test.call(node).await;
        })
        .await;

        pool.close().await;

        if let Err(err) = result {
            panic::resume_unwind(err.into_panic());
        }
    });
}
