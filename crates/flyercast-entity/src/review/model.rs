//! Review-request customer entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use flyercast_core::types::{CompanyId, CustomerId};

/// A customer enrolled in the review-request automation.
///
/// The server owns the Day-0/1/3 send-state flags; the client only
/// displays them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReviewCustomer {
    /// Unique customer identifier.
    pub id: CustomerId,
    /// Customer display name.
    pub customer_name: String,
    /// WhatsApp phone number in international format.
    pub phone_number: String,
    /// Owning company.
    pub company_id: CompanyId,
    /// Whether further automated messages will be sent.
    pub is_active: bool,
    /// Day-0 message sent.
    #[serde(default)]
    pub day0_sent: bool,
    /// Day-1 message sent.
    #[serde(default)]
    pub day1_sent: bool,
    /// Day-3 message sent.
    #[serde(default)]
    pub day3_sent: bool,
    /// When the customer was enrolled.
    pub created_at: DateTime<Utc>,
}

/// Data for `POST /review/customer`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateReviewCustomer {
    /// Customer display name.
    #[validate(length(min = 1, message = "customer name must not be empty"))]
    pub customer_name: String,
    /// WhatsApp phone number in international format.
    #[validate(custom(function = validate_phone))]
    pub phone_number: String,
    /// Owning company.
    pub company_id: CompanyId,
}

/// Accepts an optional leading `+`, then digits with embedded spaces or
/// dashes, at least six digits total.
fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let trimmed = phone.trim();
    let rest = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits = rest.chars().filter(|c| c.is_ascii_digit()).count();
    let valid_chars = rest
        .chars()
        .all(|c| c.is_ascii_digit() || c == ' ' || c == '-');
    if digits >= 6 && valid_chars {
        Ok(())
    } else {
        Err(ValidationError::new("phone_number"))
    }
}
