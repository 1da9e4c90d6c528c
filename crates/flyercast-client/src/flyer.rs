//! Flyer registry endpoint bindings, including the multipart upload and
//! the binary download path used by the share resolver.

use bytes::Bytes;
use reqwest::Method;
use reqwest::multipart::{Form, Part};

use flyercast_core::AppResult;
use flyercast_core::types::FlyerId;
use flyercast_entity::flyer::{Flyer, FlyerQuery, FlyerUpdate, FlyerUpload};

use crate::error::ClientError;
use crate::http::ApiClient;

impl ApiClient {
    /// List flyers for a month. With a company filter this is
    /// `GET /flyer/company/:companyId?year&month`, otherwise `GET /flyer`.
    pub async fn list_flyers(&self, query: FlyerQuery) -> AppResult<Vec<Flyer>> {
        let path = match query.company_id {
            Some(company_id) => format!(
                "/flyer/company/{company_id}?year={}&month={}",
                query.year, query.month
            ),
            None => format!("/flyer?year={}&month={}", query.year, query.month),
        };
        Ok(self.get_json(&path).await?)
    }

    /// `POST /flyer/upload` — multipart upload of a new flyer.
    pub async fn upload_flyer(&self, upload: &FlyerUpload) -> AppResult<Flyer> {
        let form = Form::new()
            .text("title", upload.title.clone())
            .text("companyId", upload.company_id.to_string())
            .text("forDate", upload.for_date.to_string())
            .part("file", file_part(&upload.image_path).await?);

        let url = self.endpoint("/flyer/upload")?;
        tracing::debug!(%url, title = %upload.title, "POST (multipart)");
        let response = self
            .request(Method::POST, url)
            .multipart(form)
            .send()
            .await
            .map_err(ClientError::from)?;
        let response = self.check(response).await?;
        let flyer = response.json::<Flyer>().await.map_err(ClientError::from)?;
        Ok(flyer)
    }

    /// `PUT /flyer/:id` — multipart update; the file part is optional.
    pub async fn update_flyer(&self, id: FlyerId, update: &FlyerUpdate) -> AppResult<Flyer> {
        let mut form = Form::new();
        if let Some(title) = &update.title {
            form = form.text("title", title.clone());
        }
        if let Some(for_date) = update.for_date {
            form = form.text("forDate", for_date.to_string());
        }
        if let Some(path) = &update.image_path {
            form = form.part("file", file_part(path).await?);
        }

        let url = self.endpoint(&format!("/flyer/{id}"))?;
        tracing::debug!(%url, "PUT (multipart)");
        let response = self
            .request(Method::PUT, url)
            .multipart(form)
            .send()
            .await
            .map_err(ClientError::from)?;
        let response = self.check(response).await?;
        let flyer = response.json::<Flyer>().await.map_err(ClientError::from)?;
        Ok(flyer)
    }

    /// `DELETE /flyer/:id` — remove a flyer.
    pub async fn delete_flyer(&self, id: FlyerId) -> AppResult<()> {
        Ok(self.delete(&format!("/flyer/{id}")).await?)
    }

    /// `GET /flyer/download/:id` — fetch the raw image bytes through the
    /// authenticated session. Empty bodies are an error, never success.
    pub async fn download_flyer(&self, id: FlyerId) -> AppResult<Bytes> {
        Ok(self.get_bytes(&format!("/flyer/download/{id}")).await?)
    }
}

/// Build the multipart file part for a flyer image.
async fn file_part(path: &std::path::Path) -> Result<Part, ClientError> {
    let data = tokio::fs::read(path)
        .await
        .map_err(|e| ClientError::InvalidRequest(format!("Cannot read '{}': {e}", path.display())))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "flyer".to_string());
    let mime = image_mime(&file_name);
    Part::bytes(data)
        .file_name(file_name)
        .mime_str(mime)
        .map_err(|e| ClientError::InvalidRequest(format!("Bad MIME type: {e}")))
}

/// Guess the image MIME type from a filename extension.
fn image_mime(name: &str) -> &'static str {
    match name.rsplit('.').next().map(|e| e.to_ascii_lowercase()) {
        Some(ext) if ext == "png" => "image/png",
        Some(ext) if ext == "gif" => "image/gif",
        Some(ext) if ext == "webp" => "image/webp",
        Some(ext) if ext == "jpg" || ext == "jpeg" => "image/jpeg",
        _ => "application/octet-stream",
    }
}
