//! Site path utilities.
//!
//! Provides consistent handling of resource paths across the codebase:
//! - Canonical form (percent-decoded, no redundant separators, `.`/`..` resolved)
//! - Leading slash handling
//! - Index file expansion for directory paths

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

/// Strip leading slashes from a site path
///
/// # Examples
/// ```
/// use pagerule::utils::path::strip_leading_slash;
/// assert_eq!(strip_leading_slash("/blog/post.html"), "blog/post.html");
/// assert_eq!(strip_leading_slash("//blog"), "blog");
/// assert_eq!(strip_leading_slash("/"), "");
/// ```
#[inline]
pub fn strip_leading_slash(path: &str) -> &str {
    path.trim_start_matches('/')
}

/// Ensure a path starts with exactly one slash
///
/// # Examples
/// ```
/// use pagerule::utils::path::with_leading_slash;
/// assert_eq!(with_leading_slash("about.html"), "/about.html");
/// assert_eq!(with_leading_slash("///about.html"), "/about.html");
/// assert_eq!(with_leading_slash(""), "/");
/// ```
#[inline]
pub fn with_leading_slash(path: &str) -> String {
    format!("/{}", strip_leading_slash(path))
}

/// Canonicalize a site path.
///
/// - Percent-encoding is decoded (invalid UTF-8 keeps the raw input)
/// - Leading slashes are dropped
/// - Empty and `.` segments are removed, `..` pops the previous segment
///   (never above the root)
/// - A trailing slash survives, since it marks a directory
///
/// # Examples
/// ```
/// use pagerule::utils::path::normalize_path;
/// assert_eq!(normalize_path("/blog//2024/./post.html"), "blog/2024/post.html");
/// assert_eq!(normalize_path("/docs/guide/../"), "docs/");
/// assert_eq!(normalize_path("/caf%C3%A9.html"), "café.html");
/// ```
pub fn normalize_path(path: &str) -> String {
    let decoded: Cow<'_, str> = percent_decode_str(path)
        .decode_utf8()
        .unwrap_or(Cow::Borrowed(path));

    let mut segments: Vec<&str> = Vec::new();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }

    let mut normalized = segments.join("/");
    if decoded.ends_with('/') && !normalized.is_empty() {
        normalized.push('/');
    }
    normalized
}

/// Append the index file to a directory path.
///
/// An empty path is the site root.
///
/// # Examples
/// ```
/// use pagerule::utils::path::join_index;
/// assert_eq!(join_index("blog/", "index.html"), "blog/index.html");
/// assert_eq!(join_index("blog", "index.html"), "blog/index.html");
/// assert_eq!(join_index("", "index.html"), "index.html");
/// ```
pub fn join_index(dir: &str, index_file: &str) -> String {
    if dir.is_empty() {
        index_file.to_string()
    } else if dir.ends_with('/') {
        format!("{dir}{index_file}")
    } else {
        format!("{dir}/{index_file}")
    }
}
