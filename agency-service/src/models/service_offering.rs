use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An entry of the static service catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ServiceOffering {
    #[schema(example = "web-design")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
}

impl ServiceOffering {
    fn new(id: &str, title: &str, description: &str, features: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// The fixed catalog served by `GET /services`.
pub fn service_catalog() -> Vec<ServiceOffering> {
    vec![
        ServiceOffering::new(
            "web-design",
            "Web Design",
            "Modern, responsive websites tailored to your brand.",
            &["UX/UI", "Responsive", "SEO-ready", "Accessibility"],
        ),
        ServiceOffering::new(
            "hosting",
            "Managed Hosting",
            "Fast, secure, and monitored cloud hosting.",
            &["SSL", "Backups", "Monitoring", "CDN"],
        ),
        ServiceOffering::new(
            "maintenance",
            "Maintenance",
            "Ongoing updates, security patches, and enhancements.",
            &["Updates", "Security", "Performance", "Support"],
        ),
    ]
}
