// SPDX-License-Identifier: AGPL-3.0-or-later

use std::future::Future;

use anyhow::Result;
use log::{error, info};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tokio::task;
use tokio::task::JoinHandle;
use triggered::{Listener, Trigger};

/// Sends messages through the communication bus between services.
pub type Sender<T> = broadcast::Sender<T>;

/// Resolves when the service is asked to shut down.
pub type Shutdown = JoinHandle<()>;

/// Long-running async task receiving the shared context, a shutdown handle and the bus sender.
#[async_trait::async_trait]
pub trait Service<D, M>
where
    D: Clone + Send + Sync + 'static,
    M: Clone + Send + Sync + 'static,
{
    async fn call(&self, context: D, shutdown: Shutdown, tx: Sender<M>) -> Result<()>;
}

#[async_trait::async_trait]
impl<FN, F, D, M> Service<D, M> for FN
where
    FN: Fn(D, Shutdown, Sender<M>) -> F + Sync,
    F: Future<Output = Result<()>> + Send + 'static,
    D: Clone + Send + Sync + 'static,
    M: Clone + Send + Sync + 'static,
{
    async fn call(&self, context: D, shutdown: Shutdown, tx: Sender<M>) -> Result<()> {
        (self)(context, shutdown, tx).await
    }
}

/// Fires the wrapped trigger when dropped, also when the owning task panicked.
#[derive(Clone)]
struct Signal(Trigger);

impl Signal {
    fn trigger(&self) {
        self.0.trigger();
    }
}

impl Drop for Signal {
    fn drop(&mut self) {
        self.trigger();
    }
}

/// Runs services as concurrent tasks and coordinates their shutdown.
///
/// A service which returns, fails or panics fires the exit signal, see `on_exit`. The node treats
/// this as fatal since the HTTP service is never expected to stop on its own.
pub struct ServiceManager<D, M>
where
    D: Clone + Send + Sync + 'static,
    M: Clone + Send + Sync + 'static,
{
    context: D,

    /// Bus handed to every service.
    tx: Sender<M>,

    exit_signal: Signal,

    exit_handle: Listener,

    /// Every service task holds a clone of this sender and drops it once it stopped, a closed
    /// channel therefore means all services are done.
    shutdown_signal: broadcast::Sender<bool>,
}

impl<D, M> ServiceManager<D, M>
where
    D: Clone + Send + Sync + 'static,
    M: Clone + Send + Sync + 'static,
{
    /// Returns a new manager handing out the given bus sender and context to its services.
    pub fn new(tx: Sender<M>, context: D) -> Self {
        let (shutdown_signal, _) = broadcast::channel(16);
        let (exit_signal, exit_handle) = triggered::trigger();

        Self {
            context,
            tx,
            exit_signal: Signal(exit_signal),
            exit_handle,
            shutdown_signal,
        }
    }

    /// Spawns a service.
    pub fn add<F: Service<D, M> + Send + Sync + Copy + 'static>(
        &mut self,
        name: &'static str,
        service: F,
    ) {
        let tx = self.tx.clone();
        let context = self.context.clone();
        let exit_signal = self.exit_signal.clone();

        let shutdown_tx = self.shutdown_signal.clone();
        let mut shutdown_rx = shutdown_tx.subscribe();
        let signal = task::spawn(async move {
            let _ = shutdown_rx.recv().await;
        });

        task::spawn(async move {
            info!("Start {} service", name);

            let result = service.call(context, signal, tx).await;

            drop(shutdown_tx);

            match result {
                Ok(()) => info!("Stopped {} service", name),
                Err(err) => {
                    error!("Error in {} service: {}", name, err);
                    exit_signal.trigger();
                }
            }
        });
    }

    /// Resolves as soon as one service stopped.
    pub async fn on_exit(&self) {
        self.exit_handle.clone().await;
    }

    /// Asks all services to stop and waits until every one of them did.
    pub async fn shutdown(self) {
        info!("Received shutdown signal");

        let mut rx = self.shutdown_signal.subscribe();

        // Nobody listening means no service is running anymore
        let _ = self.shutdown_signal.send(true);
        drop(self.shutdown_signal);

        while !matches!(rx.recv().await, Err(RecvError::Closed)) {}
    }
}
