//! Flyer entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use flyercast_core::types::{CompanyId, FlyerId};

/// An uploaded promotional flyer tied to a company and a target month.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Flyer {
    /// Unique flyer identifier.
    pub id: FlyerId,
    /// Flyer title, also the suggested filename base when exporting.
    pub title: String,
    /// Owning company.
    pub company_id: CompanyId,
    /// The month/date this flyer promotes.
    pub for_date: NaiveDate,
    /// Direct URL of the stored image, if the backend exposes one.
    #[serde(default)]
    pub image_url: Option<String>,
    /// When the flyer was uploaded.
    pub created_at: DateTime<Utc>,
}

impl Flyer {
    /// Server-mediated binary download path for this flyer.
    pub fn download_endpoint(&self) -> String {
        format!("/flyer/download/{}", self.id)
    }
}

/// Data for `POST /flyer/upload` (multipart).
#[derive(Debug, Clone)]
pub struct FlyerUpload {
    /// Flyer title.
    pub title: String,
    /// Owning company.
    pub company_id: CompanyId,
    /// The month/date this flyer promotes.
    pub for_date: NaiveDate,
    /// Path of the image file to upload.
    pub image_path: std::path::PathBuf,
}

/// Data for `PUT /flyer/:id` (multipart, file optional). Unset fields are
/// left unchanged.
#[derive(Debug, Clone, Default)]
pub struct FlyerUpdate {
    /// New title.
    pub title: Option<String>,
    /// New target date.
    pub for_date: Option<NaiveDate>,
    /// Replacement image file.
    pub image_path: Option<std::path::PathBuf>,
}
