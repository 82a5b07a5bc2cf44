// SPDX-License-Identifier: AGPL-3.0-or-later

use sqlx::migrate::MigrateDatabase;
use sqlx::Any;

use crate::db::{connection_pool, create_database, run_pending_migrations, Pool};

/// Create a migrated test database, dropping any previous database behind the same url.
pub async fn initialize_db(url: &str) -> Pool {
    drop_database(url).await;
    create_database(url).await.unwrap();

    let pool = connection_pool(url, 25).await.unwrap();
    run_pending_migrations(&pool)
        .await
        .expect("Could not run migrations on test database");

    pool
}

/// Delete test database.
async fn drop_database(url: &str) {
    if Any::database_exists(url).await.unwrap() {
        Any::drop_database(url).await.unwrap();
    }
}
