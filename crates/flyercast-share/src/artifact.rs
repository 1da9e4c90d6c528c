//! Artifact naming: filename sanitization and MIME typing.

/// The named, typed file produced from an acquired blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Sanitized filename including extension.
    pub file_name: String,
    /// MIME type matching the extension.
    pub mime: &'static str,
    /// Lowercase extension without the dot.
    pub extension: String,
}

impl Artifact {
    /// Name and type the artifact from the suggested title and the URL
    /// the bytes came from (if any).
    pub fn build(title: &str, source_url: Option<&str>) -> Self {
        let extension = extension_from_url(source_url);
        let mime = mime_for_extension(&extension);
        let file_name = format!("{}.{}", sanitize_title(title), extension);
        Self {
            file_name,
            mime,
            extension,
        }
    }
}

/// Sanitize a suggested title into a filename base.
///
/// Characters outside `[a-z0-9\s]` (case-insensitive) become `_`, then
/// whitespace runs collapse to a single `_`. Idempotent.
pub fn sanitize_title(title: &str) -> String {
    let replaced: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c.is_whitespace() {
                c
            } else {
                '_'
            }
        })
        .collect();

    let mut out = String::with_capacity(replaced.len());
    let mut in_whitespace = false;
    for c in replaced.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
                in_whitespace = true;
            }
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out
}

/// Extract a file extension from a URL, stripping query parameters and
/// fragments first. Defaults to `jpg` when absent.
pub fn extension_from_url(url: Option<&str>) -> String {
    let Some(url) = url else {
        return "jpg".to_string();
    };
    let path = url
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');
    let segment = path.rsplit('/').next().unwrap_or_default();
    match segment.rsplit_once('.') {
        Some((_, ext))
            if !ext.is_empty() && ext.len() <= 5 && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            ext.to_ascii_lowercase()
        }
        _ => "jpg".to_string(),
    }
}

/// Map an extension to its MIME type: `png` is PNG, everything else is
/// treated as JPEG.
pub fn mime_for_extension(extension: &str) -> &'static str {
    if extension.eq_ignore_ascii_case("png") {
        "image/png"
    } else {
        "image/jpeg"
    }
}
