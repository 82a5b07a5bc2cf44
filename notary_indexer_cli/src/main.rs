// SPDX-License-Identifier: AGPL-3.0-or-later

#![allow(clippy::uninlined_format_args)]
mod config;
mod replay;
mod utils;

use anyhow::Result;
use env_logger::Env;
use log::{error, info};
use notary_indexer::Node;

use crate::config::{load_config, print_config};
use crate::replay::replay;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from config file, environment variables and command line arguments
    let (config_file_path, config, options) = load_config()?;

    // RUST_LOG takes precedence over the configured log level
    env_logger::Builder::from_env(Env::default().default_filter_or(options.log_filter())).init();

    println!("{}", print_config(config_file_path, &config, &options)?);

    // Prepare indexer in async runtime, nothing is served yet
    let mut node = Node::init(config).await?;

    // Recorded logs are ingested before any other client can reach the node
    if let Some(path) = &options.replay {
        if let Err(err) = replay(&node, path).await {
            error!("Replay failed: {:#}", err);
            node.shutdown().await;
            return Err(err);
        }
    }

    node.serve();
    info!("Indexer is ready");

    // Run this until [CTRL] + [C] got pressed or something went wrong
    tokio::select! {
        _ = tokio::signal::ctrl_c() => (),
        _ = node.on_exit() => (),
    }

    // Wait until all tasks are gracefully shut down and exit
    node.shutdown().await;

    Ok(())
}
