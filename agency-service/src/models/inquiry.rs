use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Collection that receives contact-form submissions.
pub const INQUIRY_COLLECTION: &str = "inquiry";

/// A contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Inquiry {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    #[schema(example = "Jo", min_length = 2)]
    pub name: String,

    #[validate(
        email(message = "Invalid email format"),
        custom(function = "validate_deliverable_domain")
    )]
    #[schema(example = "jo@example.com")]
    pub email: String,

    #[serde(default)]
    #[schema(example = "Acme Ltd")]
    pub company: Option<String>,

    /// Requested service
    #[schema(example = "hosting")]
    pub service: String,

    #[validate(length(min = 5, message = "Message must be at least 5 characters"))]
    #[schema(example = "Hello there", min_length = 5)]
    pub message: String,
}

/// Domains reserved for special use that can never receive mail.
const SPECIAL_USE_DOMAINS: [&str; 6] = ["arpa", "invalid", "local", "localhost", "onion", "test"];

/// Reject addresses whose domain is dotless, numeric-TLD or special-use.
///
/// Syntax is checked by the `email` rule; this only looks at the domain.
fn validate_deliverable_domain(email: &str) -> Result<(), ValidationError> {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return Ok(());
    };
    let domain = domain.trim_end_matches('.').to_ascii_lowercase();

    let numeric_or_missing_tld = match domain.rsplit_once('.') {
        None => true,
        Some((_, tld)) => tld.chars().all(|c| c.is_ascii_digit()),
    };
    let special_use = SPECIAL_USE_DOMAINS
        .iter()
        .any(|special| domain == *special || domain.ends_with(&format!(".{}", special)));
    let undeliverable = numeric_or_missing_tld || special_use;

    if undeliverable {
        let mut err = ValidationError::new("email_domain");
        err.message = Some("Email domain cannot receive mail".into());
        return Err(err);
    }

    Ok(())
}
