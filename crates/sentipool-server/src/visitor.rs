//! Visitor identity resolution from cookies.
//!
//! The core never reads ambient request state; handlers resolve the
//! identity here and pass a [`VisitorId`] value in. A browser without a
//! token gets one minted and is told to persist it for about a year.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use sentipool_domain::VisitorId;

/// Name of the cookie carrying the visitor token
pub const VISITOR_COOKIE: &str = "visitor_id";

/// Read the visitor token from the request's Cookie header, if present
pub fn visitor_from_headers(headers: &HeaderMap) -> Option<VisitorId> {
    let raw = headers.get(COOKIE)?.to_str().ok()?;
    for pair in raw.split(';') {
        if let Some((name, value)) = pair.trim().split_once('=') {
            if name == VISITOR_COOKIE && !value.is_empty() {
                return Some(VisitorId::new(value));
            }
        }
    }
    None
}

/// Format the Set-Cookie value that persists a visitor token
pub fn build_visitor_cookie(visitor: &VisitorId, max_age_secs: u64) -> String {
    format!(
        "{}={}; Max-Age={}; Path=/; SameSite=Lax; HttpOnly",
        VISITOR_COOKIE,
        visitor.as_str(),
        max_age_secs
    )
}

/// Resolve the request's visitor identity, minting one when absent
///
/// Returns the identity plus the Set-Cookie value to attach when a fresh
/// token was minted.
pub fn resolve_visitor(headers: &HeaderMap, max_age_secs: u64) -> (VisitorId, Option<String>) {
    match visitor_from_headers(headers) {
        Some(visitor) => (visitor, None),
        None => {
            let visitor = VisitorId::mint();
            let cookie = build_visitor_cookie(&visitor, max_age_secs);
            (visitor, Some(cookie))
        }
    }
}
