//! Fetch + re-encode acquisition.
//!
//! The last-resort stage: load the image and export it again, recovering
//! from servers whose blob responses the earlier stages could not use.
//! Decoding and re-encoding run on a blocking thread.

use std::io::Cursor;

use async_trait::async_trait;
use bytes::Bytes;
use image::ImageFormat;
use image::codecs::jpeg::JpegEncoder;
use reqwest::Url;

use crate::artifact::extension_from_url;
use crate::error::ShareError;
use crate::media::MediaReference;
use crate::origin::same_origin;

use super::AcquireStrategy;

/// JPEG export quality, matching the canvas export setting of the
/// dashboard this replaces (0.95).
const JPEG_QUALITY: u8 = 95;

/// Re-export target derived from the source URL's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReencodeTarget {
    /// Export as JPEG at quality 95.
    Jpeg,
    /// Export as PNG.
    Png,
}

impl ReencodeTarget {
    /// Pick the target format for a source URL.
    pub fn for_url(url: Option<&str>) -> Self {
        if extension_from_url(url) == "png" {
            Self::Png
        } else {
            Self::Jpeg
        }
    }
}

/// Fetches the primary URL and re-encodes the image.
///
/// Credentials are attached only when the URL is same-origin with the
/// backend; cross-origin loads go anonymous so the fetch cannot be
/// rejected for carrying foreign credentials.
pub struct ReencodeStrategy {
    http: reqwest::Client,
    backend_origin: Url,
    token: Option<String>,
}

impl ReencodeStrategy {
    /// Create the strategy for the given backend origin and session.
    pub fn new(backend_origin: Url, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            backend_origin,
            token,
        }
    }
}

#[async_trait]
impl AcquireStrategy for ReencodeStrategy {
    fn name(&self) -> &'static str {
        "reencode"
    }

    async fn acquire(&self, reference: &MediaReference) -> Result<Bytes, ShareError> {
        let Some(raw) = reference.primary_url.as_deref() else {
            return Err(ShareError::UnsupportedCapability("no primary URL".into()));
        };
        let url = Url::parse(raw)
            .map_err(|e| ShareError::UnsupportedCapability(format!("bad primary URL: {e}")))?;

        let mut request = self.http.get(url.clone());
        if same_origin(&url, &self.backend_origin) {
            if let Some(token) = &self.token {
                request = request.bearer_auth(token);
            }
        }

        let response = request
            .send()
            .await
            .map_err(|e| ShareError::NetworkUnreachable(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ShareError::Server {
                status: status.as_u16(),
            });
        }
        let source = response
            .bytes()
            .await
            .map_err(|e| ShareError::NetworkUnreachable(e.to_string()))?;
        if source.is_empty() {
            return Err(ShareError::EmptyPayload);
        }

        let target = ReencodeTarget::for_url(reference.primary_url.as_deref());
        let encoded =
            tokio::task::spawn_blocking(move || reencode_image(&source, target))
                .await
                .map_err(|e| ShareError::Encoding(format!("re-encode task panicked: {e}")))??;
        Ok(Bytes::from(encoded))
    }
}

/// Decode an image and export it in the target format.
pub fn reencode_image(data: &[u8], target: ReencodeTarget) -> Result<Vec<u8>, ShareError> {
    let decoded = image::load_from_memory(data)
        .map_err(|e| ShareError::Encoding(format!("decode failed: {e}")))?;

    let mut out = Cursor::new(Vec::new());
    match target {
        ReencodeTarget::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY);
            decoded
                .to_rgb8()
                .write_with_encoder(encoder)
                .map_err(|e| ShareError::Encoding(format!("JPEG encode failed: {e}")))?;
        }
        ReencodeTarget::Png => {
            decoded
                .write_to(&mut out, ImageFormat::Png)
                .map_err(|e| ShareError::Encoding(format!("PNG encode failed: {e}")))?;
        }
    }

    let encoded = out.into_inner();
    if encoded.is_empty() {
        return Err(ShareError::EmptyPayload);
    }
    Ok(encoded)
}
