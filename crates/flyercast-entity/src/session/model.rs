//! Session entity model.

use serde::{Deserialize, Serialize};

use flyercast_core::types::CompanyId;

use super::role::Role;

/// An authenticated dashboard session.
///
/// Returned by the auth endpoints and persisted locally between
/// invocations. `Company` sessions always carry the company identifier
/// they are scoped to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Session {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// Account role.
    pub role: Role,
    /// Company scope (present for `Company` sessions).
    #[serde(default)]
    pub company_id: Option<CompanyId>,
    /// Account email address.
    pub email: String,
}

impl Session {
    /// Check whether this session may act on the given company.
    ///
    /// Admins may act on any company; a company session only on its own.
    pub fn can_access_company(&self, company_id: CompanyId) -> bool {
        match self.role {
            Role::Admin => true,
            Role::Company => self.company_id == Some(company_id),
        }
    }
}

/// Credentials for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginRequest {
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Profile for `POST /auth/register`. Registration creates a `Company`
/// account tied to a new company record.
#[derive(Debug, Clone, Serialize, Deserialize, validator::Validate)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterRequest {
    /// Name of the company being registered.
    #[validate(length(min = 1, message = "company name must not be empty"))]
    pub company_name: String,
    /// Contact email address, used as the login.
    #[validate(email)]
    pub email: String,
    /// Account password.
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}
