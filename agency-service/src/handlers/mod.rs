pub mod health;
pub mod inquiries;
pub mod metrics;
pub mod root;
pub mod schema;
pub mod services;

pub use health::test_database;
pub use inquiries::create_inquiry;
pub use metrics::metrics_endpoint;
pub use root::root;
pub use schema::get_schema;
pub use services::list_services;
