//! Login round-trip helpers.
//!
//! The guard sends anonymous visitors to `<login>?next=<original location>`.
//! After sign-in the login page sends them back, but only to same-origin
//! paths so the `next` parameter cannot become an open redirect.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use url::form_urlencoded;

pub const NEXT_PARAM: &str = "next";

/// Rebuild the full in-app location from router parts. `search` and `hash`
/// may be given with or without their leading `?`/`#`.
pub fn current_location(pathname: &str, search: &str, hash: &str) -> String {
    let mut out = if pathname.is_empty() { "/".to_owned() } else { pathname.to_owned() };
    let search = search.trim_start_matches('?');
    if !search.is_empty() {
        out.push('?');
        out.push_str(search);
    }
    let hash = hash.trim_start_matches('#');
    if !hash.is_empty() {
        out.push('#');
        out.push_str(hash);
    }
    out
}

/// Login URL carrying `from` as the `next` query parameter.
pub fn login_redirect_path(login: &str, from: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(NEXT_PARAM, from)
        .finish();
    let sep = if login.contains('?') { '&' } else { '?' };
    format!("{login}{sep}{query}")
}

/// Read the raw `next` value out of a query string.
pub fn next_from_query(query: &str) -> Option<String> {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .find(|(k, _)| k == NEXT_PARAM)
        .map(|(_, v)| v.into_owned())
}

/// Where to go after sign-in: `next` when it is a safe in-app path,
/// otherwise `home`.
pub fn return_path(next: Option<&str>, home: &str) -> String {
    match next {
        Some(path) if is_local_path(path) => path.to_owned(),
        _ => home.to_owned(),
    }
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\')
}
