use url::Url;

/// Resolves a possibly relative URL against a base URL.
///
/// Returns `None` when either side cannot be parsed. Absolute references are
/// returned as-is (after normalization), everything else is merged against
/// `base` following the usual reference resolution rules.
pub fn resolve_url(base: &str, relative: &str) -> Option<String> {
    let base = Url::parse(base).ok()?;
    join_url(&base, relative)
}

/// Same as [`resolve_url`] for a base that has already been parsed
pub fn join_url(base: &Url, relative: &str) -> Option<String> {
    match base.join(relative) {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            ::log::trace!("Dropping unresolvable URL {:?} against {}: {}", relative, base, e);
            None
        }
    }
}
