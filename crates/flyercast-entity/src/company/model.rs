//! Company entity model.

use serde::{Deserialize, Serialize};
use validator::Validate;

use flyercast_core::types::CompanyId;

/// A tenant company registered with the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Company {
    /// Unique company identifier.
    pub id: CompanyId,
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub contact_email: String,
    /// Google Business Profile review URL, if configured.
    #[serde(default)]
    pub review_link_url: Option<String>,
}

impl Company {
    /// Whether review requests can be sent for this company.
    ///
    /// The GBP review link must be configured first; the Day-0/1/3
    /// messages embed it.
    pub fn review_ready(&self) -> bool {
        self.review_link_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }
}

/// Data required to create a new company.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCompany {
    /// Display name.
    #[validate(length(min = 1, message = "company name must not be empty"))]
    pub name: String,
    /// Contact email address.
    #[validate(email)]
    pub contact_email: String,
    /// Google Business Profile review URL (optional at creation).
    #[serde(default)]
    pub review_link_url: Option<String>,
}

/// Data for updating an existing company. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateCompany {
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New contact email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    /// New Google Business Profile review URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_link_url: Option<String>,
}
