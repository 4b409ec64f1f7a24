//! Share URL assembly and payload extraction.

use crate::constants::SHARE_PATH;

/// Join an origin and a payload into `<origin>/share?<payload>`
///
/// A trailing `/` on the origin is dropped.
#[must_use]
pub fn share_url(origin: &str, payload: &str) -> String {
    let origin = origin.strip_suffix('/').unwrap_or(origin);
    format!("{origin}{SHARE_PATH}?{payload}")
}

/// Extract the payload from a share URL
///
/// The payload is the first query key: the text after `?`, up to the first
/// `&` or `#`, and before any `=`. Returns `None` when the URL has no query or
/// the first key is empty.
#[must_use]
pub fn payload_from_url(url: &str) -> Option<&str> {
    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or(query);
    let first = query.split('&').next().unwrap_or(query);
    let key = first.split('=').next().unwrap_or(first);
    (!key.is_empty()).then_some(key)
}
