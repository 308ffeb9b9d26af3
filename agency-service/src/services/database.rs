use crate::config::DatabaseConfig;
use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{
    bson::{self, Bson, DateTime as BsonDateTime, Document},
    Client as MongoClient, Database,
};
use serde::Serialize;
use service_core::error::AppError;
use std::sync::Arc;

/// Minimal document-store surface used by the service.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn list_collection_names(&self) -> Result<Vec<String>, AppError>;

    /// Insert `document` and return the store-assigned id as a string.
    async fn insert_document(&self, collection: &str, document: Document)
        -> Result<String, AppError>;

    async fn find_documents(&self, collection: &str) -> Result<Vec<Document>, AppError>;
}

#[derive(Clone)]
pub struct MongoStore {
    client: MongoClient,
    db: Database,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB client ready");
        Ok(Self { client, db })
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        Ok(self.db.list_collection_names(None).await?)
    }

    async fn insert_document(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<String, AppError> {
        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(document, None)
            .await?;

        Ok(match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s,
            other => other.to_string(),
        })
    }

    async fn find_documents(&self, collection: &str) -> Result<Vec<Document>, AppError> {
        let cursor = self
            .db
            .collection::<Document>(collection)
            .find(None, None)
            .await?;

        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }
}

/// Outcome of probing the database for `GET /test`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseStatus {
    Connected(Vec<String>),
    Unconfigured,
    Error(String),
}

/// The process-wide database handle.
///
/// Built once at startup and shared through application state. An
/// `Unconfigured` handle is a normal state: diagnostics report it and writes
/// fail with a database error.
#[derive(Clone)]
pub enum DatabaseHandle {
    Connected(Arc<dyn DocumentStore>),
    Unconfigured,
}

impl DatabaseHandle {
    /// Connect to MongoDB when both URL and database name are configured.
    ///
    /// Missing settings or a client error leave the handle unconfigured.
    pub async fn from_config(config: &DatabaseConfig) -> Self {
        let (Some(url), Some(name)) = (config.url.as_deref(), config.name.as_deref()) else {
            let database_url = if config.url_is_set() { "set" } else { "missing" };
            tracing::warn!(
                database_url,
                database_name = config.name.as_deref().unwrap_or("missing"),
                "Database not configured; continuing without persistence"
            );
            return DatabaseHandle::Unconfigured;
        };

        match MongoStore::connect(url, name).await {
            Ok(store) => DatabaseHandle::Connected(Arc::new(store)),
            Err(e) => {
                tracing::warn!(error = %e, "Database unavailable; continuing without persistence");
                DatabaseHandle::Unconfigured
            }
        }
    }

    pub fn with_store(store: Arc<dyn DocumentStore>) -> Self {
        DatabaseHandle::Connected(store)
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, DatabaseHandle::Connected(_))
    }

    fn store(&self) -> Result<&Arc<dyn DocumentStore>, AppError> {
        match self {
            DatabaseHandle::Connected(store) => Ok(store),
            DatabaseHandle::Unconfigured => Err(AppError::DatabaseError(anyhow::anyhow!(
                "Database not available. Check DATABASE_URL and DATABASE_NAME environment variables."
            ))),
        }
    }

    /// Serialize `record`, stamp `created_at`/`updated_at`, and insert it.
    pub async fn create_document<T: Serialize>(
        &self,
        collection: &str,
        record: &T,
    ) -> Result<String, AppError> {
        let store = self.store()?;

        let mut document = bson::to_document(record)?;
        let now = BsonDateTime::from_chrono(Utc::now());
        document.insert("created_at", now);
        document.insert("updated_at", now);

        let id = store.insert_document(collection, document).await?;
        tracing::debug!(collection = %collection, id = %id, "Document inserted");
        Ok(id)
    }

    /// Every document in `collection`.
    pub async fn get_documents(&self, collection: &str) -> Result<Vec<Document>, AppError> {
        self.store()?.find_documents(collection).await
    }

    pub async fn status(&self) -> DatabaseStatus {
        match self {
            DatabaseHandle::Unconfigured => DatabaseStatus::Unconfigured,
            DatabaseHandle::Connected(store) => match store.list_collection_names().await {
                Ok(collections) => DatabaseStatus::Connected(collections),
                Err(e) => {
                    tracing::warn!(error = %e, "Database probe failed");
                    DatabaseStatus::Error(probe_message(&e))
                }
            },
        }
    }
}

/// Underlying cause of a probe failure, without the error-kind prefix.
fn probe_message(err: &AppError) -> String {
    match err {
        AppError::DatabaseError(inner) | AppError::InternalError(inner) => inner.to_string(),
        other => other.to_string(),
    }
}
