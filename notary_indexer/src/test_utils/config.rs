// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt::Debug;

use serde::Deserialize;

/// Configuration used in test helper methods.
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct TestConfiguration {
    /// Database url (SQLite or PostgreSQL).
    pub database_url: String,
}

impl TestConfiguration {
    /// Reads `DATABASE_URL` from the environment, falls back to an in-memory SQLite database.
    pub fn new() -> Self {
        envy::from_env::<TestConfiguration>()
            .expect("Could not read environment variables for test configuration")
    }
}

impl Default for TestConfiguration {
    fn default() -> Self {
        Self {
            // Every pool connecting to this url gets its own database, shared by all of its
            // connections
            database_url: "sqlite::memory:".into(),
        }
    }
}
