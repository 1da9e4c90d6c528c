//! Flyer listing filter.

use serde::{Deserialize, Serialize};

use flyercast_core::{AppError, AppResult};
use flyercast_core::types::CompanyId;

/// Filter for listing flyers by company and month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FlyerQuery {
    /// Restrict to one company (admins may omit this).
    pub company_id: Option<CompanyId>,
    /// Target year.
    pub year: i32,
    /// Target month (1-12).
    pub month: u32,
}

impl FlyerQuery {
    /// Build a validated query.
    pub fn new(company_id: Option<CompanyId>, year: i32, month: u32) -> AppResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(AppError::validation(format!(
                "Invalid month: {month}. Expected 1-12"
            )));
        }
        Ok(Self {
            company_id,
            year,
            month,
        })
    }
}
