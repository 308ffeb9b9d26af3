#![allow(dead_code)]

use agency_service::config::{AgencyConfig, DatabaseConfig};
use agency_service::services::{init_metrics, DatabaseHandle, DocumentStore};
use agency_service::startup::Application;
use async_trait::async_trait;
use mongodb::bson::Document;
use service_core::config::Config as CoreConfig;
use service_core::error::AppError;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the service with no database configured.
    pub async fn spawn_unconfigured() -> Self {
        Self::spawn(DatabaseConfig::default(), DatabaseHandle::Unconfigured).await
    }

    /// Spawn the service backed by `store`.
    pub async fn spawn_with_store(store: Arc<dyn DocumentStore>) -> Self {
        let database = DatabaseConfig {
            url: Some("mongodb://test-store".to_string()),
            name: Some("agency_test".to_string()),
        };
        Self::spawn(database, DatabaseHandle::with_store(store)).await
    }

    pub async fn spawn(database: DatabaseConfig, db: DatabaseHandle) -> Self {
        // Installs the process-wide recorder once; later calls are no-ops
        init_metrics();

        let config = AgencyConfig {
            common: CoreConfig {
                port: 0, // Random port for testing
                ..CoreConfig::default()
            },
            database,
        };

        let app = Application::build_with_database(config, db)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        for _ in 0..50 {
            if client.get(&address).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_inquiry(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/inquiries", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// Document store kept in memory, keyed by collection name.
#[derive(Default)]
pub struct InMemoryStore {
    collections: Mutex<BTreeMap<String, Vec<Document>>>,
    next_id: Mutex<u64>,
}

impl InMemoryStore {
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn total_documents(&self) -> usize {
        self.collections.lock().unwrap().values().map(Vec::len).sum()
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        Ok(self.collections.lock().unwrap().keys().cloned().collect())
    }

    async fn insert_document(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<String, AppError> {
        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            format!("doc-{}", *next_id)
        };
        document.insert("_id", id.clone());

        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(id)
    }

    async fn find_documents(&self, collection: &str) -> Result<Vec<Document>, AppError> {
        Ok(self.documents(collection))
    }
}

/// Document store whose every call fails with `message`.
pub struct FailingStore {
    pub message: String,
}

impl FailingStore {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    fn error(&self) -> AppError {
        AppError::DatabaseError(anyhow::anyhow!(self.message.clone()))
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        Err(self.error())
    }

    async fn insert_document(&self, _: &str, _: Document) -> Result<String, AppError> {
        Err(self.error())
    }

    async fn find_documents(&self, _: &str) -> Result<Vec<Document>, AppError> {
        Err(self.error())
    }
}
