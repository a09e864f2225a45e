/// Generate a URL-safe slug from a display name.
///
/// `&` is spelled out as `and`, apostrophes vanish without leaving a gap, and
/// any other run of characters outside ASCII `[a-z0-9]` becomes a single
/// `-`. Non-ASCII letters count as separators.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    let spelled = name.replace('&', " and ");
    for c in spelled.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else if c == '\'' || c == '\u{2019}' {
            continue;
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Join already-slugified path segments into a category id.
pub(crate) fn join_id<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
