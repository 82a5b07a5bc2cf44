// SPDX-License-Identifier: AGPL-3.0-or-later

mod client;
mod config;
mod db;
mod helpers;
mod runner;

pub use client::{http_test_client, TestClient};
pub use config::TestConfiguration;
pub use db::initialize_db;
pub use helpers::{
    notarized_log, raw_log, retrieved_log, revoked_log, transaction_hash, OWNER,
    TRANSACTION_HASH,
};
pub use runner::{test_runner, TestNode};
