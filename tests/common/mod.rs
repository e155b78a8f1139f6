use std::sync::Arc;
use core_auth::db::database_service::DatabaseService;
use sea_orm::ConnectOptions;

pub mod client;

pub struct TestContext {
    pub db: Arc<DatabaseService>,
}

impl TestContext {
    /// Fresh in-memory database per test. A single pooled connection keeps
    /// every query on the same SQLite memory database.
    pub async fn new() -> TestContext {
        let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
        opts.max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let db = Arc::new(
            DatabaseService::connect(opts)
                .await
                .expect("Failed to initialize DatabaseService")
        );

        TestContext { db }
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use core_auth::types::user::{RTokenCreate, RUserCreate};

    pub fn sample_user() -> RUserCreate {
        RUserCreate {
            email: "testuser1@gmail.com".to_string(),
            password: "test123".to_string(),
            name: "Test User1".to_string(),
        }
    }

    pub fn credentials(email: &str, password: &str) -> RTokenCreate {
        RTokenCreate {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}
