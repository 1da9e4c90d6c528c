//! Origin comparison and secure-context rules.

use reqwest::Url;

/// Whether two URLs share an origin (scheme + host + effective port).
pub fn same_origin(a: &Url, b: &Url) -> bool {
    a.scheme() == b.scheme()
        && a.host_str() == b.host_str()
        && a.port_or_known_default() == b.port_or_known_default()
}

/// Whether an origin counts as a secure context.
///
/// HTTPS is not assumed: plain-HTTP loopback origins (localhost and the
/// loopback addresses) are secure too, matching platform share-surface
/// availability rules.
pub fn is_secure_origin(url: &Url) -> bool {
    if url.scheme() == "https" {
        return true;
    }
    matches!(
        url.host_str(),
        Some("localhost") | Some("127.0.0.1") | Some("[::1]") | Some("::1")
    )
}
