//! Minimal `Cookie` request-header parsing.

use axum::http::{HeaderMap, header};

/// All `Cookie` headers of a request joined into one `; `-separated string.
///
/// HTTP/2 clients may split cookies across several header lines. Non-UTF-8
/// lines are skipped; no cookies yields an empty string.
#[must_use]
pub fn request_cookie_header(headers: &HeaderMap) -> String {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Iterate `(name, value)` pairs of a `Cookie` header.
///
/// Pairs without `=` are skipped. Names and values are trimmed of surrounding
/// whitespace; values are returned verbatim otherwise.
pub fn cookie_pairs(raw: &str) -> impl Iterator<Item = (&str, &str)> {
    raw
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .map(|(name, value)| (name.trim(), value.trim()))
        .filter(|(name, _)| !name.is_empty())
}

/// Value of the first cookie called `name`.
#[must_use]
pub fn find_cookie<'a>(raw: &'a str, name: &str) -> Option<&'a str> {
    cookie_pairs(raw).find_map(|(n, v)| (n == name).then_some(v))
}

/// `true` when any of `names` appears with a non-empty value.
#[must_use]
pub fn has_any_cookie<S: AsRef<str>>(raw: &str, names: &[S]) -> bool {
    cookie_pairs(raw)
        .any(|(n, v)| !v.is_empty() && names.iter().any(|candidate| candidate.as_ref() == n))
}
