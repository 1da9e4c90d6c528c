//! End-to-end share resolver behavior against the stub backend.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use flyercast_share::acquire::standard_strategies;
use flyercast_share::deliver::DownloadSink;
use flyercast_share::error::ShareError;
use flyercast_share::surface::{SharePayload, ShareSurface, SurfaceError};
use flyercast_share::{MediaReference, ShareOutcome, ShareResolver};

use crate::helpers::{TestBackend, spawn_backend};

/// A share surface that records every payload it is handed.
#[derive(Debug)]
struct RecordingSurface {
    result: Result<(), SurfaceError>,
    payloads: Mutex<Vec<RecordedPayload>>,
}

#[derive(Debug, Clone)]
struct RecordedPayload {
    file_name: String,
    mime: &'static str,
    len: usize,
    caption: Option<String>,
}

impl RecordingSurface {
    fn with(result: Result<(), SurfaceError>) -> Arc<Self> {
        Arc::new(Self {
            result,
            payloads: Mutex::new(Vec::new()),
        })
    }

    fn recorded(&self) -> Vec<RecordedPayload> {
        self.payloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShareSurface for RecordingSurface {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn can_share(&self, mime: &str) -> bool {
        mime.starts_with("image/")
    }

    async fn share(&self, payload: &SharePayload) -> Result<(), SurfaceError> {
        self.payloads.lock().unwrap().push(RecordedPayload {
            file_name: payload.file_name.clone(),
            mime: payload.mime,
            len: payload.bytes.len(),
            caption: payload.caption.clone(),
        });
        self.result.clone()
    }
}

fn flyer_reference(backend: &TestBackend) -> MediaReference {
    MediaReference {
        identifier: backend.flyer_id.to_string(),
        primary_url: None,
        download_endpoint: Some(format!("/flyer/download/{}", backend.flyer_id)),
        suggested_title: "Summer Sale!!".into(),
    }
}

async fn resolver_with(
    backend: &TestBackend,
    surface: Option<Arc<dyn ShareSurface>>,
    dir: &std::path::Path,
) -> ShareResolver {
    let client = backend.company_client().await;
    ShareResolver::new(standard_strategies(&client), surface, DownloadSink::new(dir))
}

#[tokio::test]
async fn test_working_endpoint_and_capable_surface_yields_shared() {
    let backend = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let surface = RecordingSurface::with(Ok(()));
    let resolver = resolver_with(
        &backend,
        Some(surface.clone() as Arc<dyn ShareSurface>),
        dir.path(),
    )
    .await;

    let outcome = resolver.resolve(&flyer_reference(&backend)).await.unwrap();
    assert!(matches!(outcome, ShareOutcome::Shared));

    let recorded = surface.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].file_name, "Summer_Sale__.jpg");
    assert_eq!(recorded[0].mime, "image/jpeg");
    assert!(recorded[0].len > 0);
    assert_eq!(recorded[0].caption.as_deref(), Some("Summer Sale!!"));
}

#[tokio::test]
async fn test_surface_not_allowed_falls_back_to_one_download() {
    let backend = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let surface = RecordingSurface::with(Err(SurfaceError::Failed("NotAllowedError".into())));
    let resolver = resolver_with(
        &backend,
        Some(surface.clone() as Arc<dyn ShareSurface>),
        dir.path(),
    )
    .await;

    let outcome = resolver.resolve(&flyer_reference(&backend)).await.unwrap();
    let ShareOutcome::Downloaded { path, instructions } = outcome else {
        panic!("expected Downloaded, got {outcome:?}");
    };
    assert!(path.exists());
    assert!(instructions.is_some(), "first fallback carries instructions");

    // A second attempt downloads again but repeats no instructions.
    let outcome = resolver.resolve(&flyer_reference(&backend)).await.unwrap();
    let ShareOutcome::Downloaded { instructions, .. } = outcome else {
        panic!("expected Downloaded");
    };
    assert!(instructions.is_none());
}

#[tokio::test]
async fn test_cancellation_is_silent_and_writes_nothing() {
    let backend = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let surface = RecordingSurface::with(Err(SurfaceError::Cancelled));
    let resolver = resolver_with(&backend, Some(surface as Arc<dyn ShareSurface>), dir.path()).await;

    let outcome = resolver.resolve(&flyer_reference(&backend)).await.unwrap();
    assert!(matches!(outcome, ShareOutcome::Cancelled));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_empty_blob_at_every_stage_fails_with_empty_payload() {
    let backend = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let resolver = resolver_with(&backend, None, dir.path()).await;

    let reference = MediaReference {
        identifier: backend.empty_flyer_id.to_string(),
        primary_url: Some(format!("{}/cdn/empty.jpg", backend.base_url)),
        download_endpoint: Some(format!("/flyer/download/{}", backend.empty_flyer_id)),
        suggested_title: "Empty Promo".into(),
    };
    let outcome = resolver.resolve(&reference).await.unwrap();
    let ShareOutcome::Failed(err) = outcome else {
        panic!("expected Failed, got {outcome:?}");
    };
    assert_eq!(err, ShareError::EmptyPayload);
}

#[tokio::test]
async fn test_broken_endpoint_falls_back_to_direct_fetch() {
    let backend = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let resolver = resolver_with(&backend, None, dir.path()).await;

    let reference = MediaReference {
        identifier: "gone".into(),
        primary_url: Some(format!("{}/cdn/img.jpg", backend.base_url)),
        download_endpoint: Some(format!("/flyer/download/{}", uuid::Uuid::new_v4())),
        suggested_title: "Summer Sale!!".into(),
    };
    let outcome = resolver.resolve(&reference).await.unwrap();
    let ShareOutcome::Downloaded { path, .. } = outcome else {
        panic!("expected Downloaded, got {outcome:?}");
    };
    let saved = std::fs::read(&path).unwrap();
    assert_eq!(&saved[..2], &[0xFF, 0xD8], "direct fetch delivered the JPEG");
}

#[tokio::test]
async fn test_missing_resource_reports_not_found() {
    let backend = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let resolver = resolver_with(&backend, None, dir.path()).await;

    let reference = MediaReference {
        identifier: "gone".into(),
        primary_url: None,
        download_endpoint: Some(format!("/flyer/download/{}", uuid::Uuid::new_v4())),
        suggested_title: "Gone".into(),
    };
    let outcome = resolver.resolve(&reference).await.unwrap();
    let ShareOutcome::Failed(err) = outcome else {
        panic!("expected Failed, got {outcome:?}");
    };
    assert_eq!(err, ShareError::Server { status: 404 });
    assert!(err.user_message().contains("expired"));
}

#[tokio::test]
async fn test_reencode_recovers_protected_image_with_same_origin_credentials() {
    let backend = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let resolver = resolver_with(&backend, None, dir.path()).await;

    // Direct (anonymous) fetch gets 403 here; the re-encode stage runs
    // same-origin with the session attached and succeeds.
    let reference = MediaReference {
        identifier: "protected".into(),
        primary_url: Some(format!("{}/protected/img.png", backend.base_url)),
        download_endpoint: None,
        suggested_title: "Summer Sale!!".into(),
    };
    let outcome = resolver.resolve(&reference).await.unwrap();
    let ShareOutcome::Downloaded { path, .. } = outcome else {
        panic!("expected Downloaded, got {outcome:?}");
    };
    assert_eq!(path.file_name().unwrap(), "Summer_Sale__.png");
    let saved = std::fs::read(&path).unwrap();
    assert_eq!(&saved[..4], &[0x89, b'P', b'N', b'G']);
}
