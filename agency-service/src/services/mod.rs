pub mod database;
pub mod metrics;

pub use database::{DatabaseHandle, DatabaseStatus, DocumentStore, MongoStore};
pub use metrics::{get_metrics, init_metrics, record_inquiry};
