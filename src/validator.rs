//! URL validation.
//!
//! Only absolute `http` and `https` URLs are scanned. Everything else is
//! rejected before a report is generated.

use crate::errors::{LinkScanError, LinkScanResult};
use url::Url;

const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// Returns true when `input` is an absolute http(s) URL. Never panics.
pub fn validate(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => ALLOWED_SCHEMES.contains(&url.scheme()),
        Err(_) => false,
    }
}

/// Trim and parse user input into a scannable URL.
pub fn parse_target(input: &str) -> LinkScanResult<Url> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LinkScanError::empty_input());
    }

    let url = Url::parse(trimmed).map_err(|e| {
        log::debug!("Rejected '{}': {}", trimmed, e);
        LinkScanError::invalid_url(trimmed)
    })?;

    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        log::debug!("Rejected '{}': unsupported scheme {}", trimmed, url.scheme());
        return Err(LinkScanError::invalid_url(trimmed));
    }

    Ok(url)
}
