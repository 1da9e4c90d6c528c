//! Media resource references.

use flyercast_entity::flyer::Flyer;

/// A media resource to share.
///
/// Immutable for the duration of one share attempt. Carries the opaque
/// identifier of the remote resource plus zero or more candidate URLs.
#[derive(Debug, Clone)]
pub struct MediaReference {
    /// Opaque identifier of the remote resource.
    pub identifier: String,
    /// Direct fetchable URL, if known.
    pub primary_url: Option<String>,
    /// Server-mediated blob-fetch path (same-origin, bypasses
    /// cross-origin restrictions).
    pub download_endpoint: Option<String>,
    /// Caption and filename base.
    pub suggested_title: String,
}

impl MediaReference {
    /// Build a reference for a flyer.
    pub fn for_flyer(flyer: &Flyer) -> Self {
        Self {
            identifier: flyer.id.to_string(),
            primary_url: flyer.image_url.clone(),
            download_endpoint: Some(flyer.download_endpoint()),
            suggested_title: flyer.title.clone(),
        }
    }
}
