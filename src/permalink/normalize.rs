//! The URL normalizer: logical content references to canonical site URLs.

use thiserror::Error;

use super::style::PermalinkStyle;
use crate::config::Settings;

/// Errors from URL construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UrlError {
    /// Relative-URL mode needs the rendering page's own path to compute
    /// the `../` chain back to the site root.
    #[error("relative URL mode requires a render context with the current page path")]
    MissingRenderContext,
}

/// Context of the page currently being rendered.
///
/// One per page render, supplied by the caller and passed by reference;
/// the normalizer never holds on to it.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Output-relative path of the page (e.g. `2024/03/hello/index.html`).
    pub filepath: String,
}

impl RenderContext {
    pub fn new(filepath: impl Into<String>) -> Self {
        Self {
            filepath: filepath.into(),
        }
    }
}

/// Build a canonical URL from a base identifier and path segments.
///
/// `base` is either an absolute URL (kept as the address prefix) or a
/// logical root identifier (site prefix, possibly empty) that becomes the
/// first path segment. Segments are sanitized (slash-trimmed, spaces to
/// dashes), joined, lowercased, and rewritten to match the configured
/// permalink style. A trailing `/index.html` collapses into its directory
/// URL.
///
/// In relative-URL mode the result is rooted at `ctx`'s page location;
/// requesting relative URLs without a context is a contract violation and
/// fails with [`UrlError::MissingRenderContext`].
pub fn build_url<S: AsRef<str>>(
    settings: &Settings,
    base: &str,
    segments: &[S],
    ctx: Option<&RenderContext>,
) -> Result<String, UrlError> {
    let mut parts: Vec<&str> = Vec::with_capacity(segments.len() + 1);

    let prefix = if base.starts_with("http://") || base.starts_with("https://") {
        format!("{}/", base.trim_end_matches('/'))
    } else if settings.build.use_relative_url {
        let ctx = ctx.ok_or(UrlError::MissingRenderContext)?;
        parts.push(base);
        format!("{}/", relative_base(&ctx.filepath))
    } else {
        parts.push(base);
        "/".to_string()
    };

    parts.extend(segments.iter().map(AsRef::as_ref));

    let joined = parts
        .iter()
        .map(|part| part.trim_matches('/'))
        .collect::<Vec<_>>()
        .join("/")
        .replace("//", "/")
        .replace(' ', "-");

    let url = format!("{}{}", prefix, joined.trim_start_matches('/')).to_lowercase();
    let url = collapse_index(&url);

    // Directory URLs are already final; no suffix rewriting applies.
    if url.ends_with('/') {
        return Ok(url);
    }

    Ok(apply_style(url, settings.permalink_style()))
}

/// Compute the relative prefix that reaches the site root from a page's
/// own output path.
///
/// `index.html` → `.`, `tag/index.html` → `..`, `2024/03/post.html` → `../..`
pub fn relative_base(filepath: &str) -> String {
    let depth = filepath.rsplit_once('/').map_or(0, |(dir, _)| {
        dir.split('/').filter(|part| !part.is_empty()).count()
    });

    if depth == 0 {
        ".".to_string()
    } else {
        vec![".."; depth].join("/")
    }
}

/// Collapse a trailing `/index.html` into its directory URL.
///
/// Idempotent: a collapsed URL no longer ends with `index.html`.
fn collapse_index(url: &str) -> String {
    match url.strip_suffix("/index.html") {
        Some(dir) => format!("{dir}/"),
        None => url.to_string(),
    }
}

/// Rewrite the URL suffix to match the permalink style.
fn apply_style(url: String, style: PermalinkStyle) -> String {
    match style {
        PermalinkStyle::Html => {
            if url.ends_with(".html") || url.ends_with(".xml") {
                url
            } else {
                format!("{url}.html")
            }
        }
        PermalinkStyle::Directory => {
            let url = strip_markup_suffix(url);
            if url.ends_with('/') {
                url
            } else {
                format!("{url}/")
            }
        }
        PermalinkStyle::Extensionless => strip_markup_suffix(url),
    }
}

/// Remove an exact trailing `.html` (collapsing `/index.html` first) or
/// `.xml` suffix.
///
/// Exact literal removal only: `/all.html` becomes `/all`, never `/a`.
fn strip_markup_suffix(url: String) -> String {
    if url.ends_with(".html") {
        let url = collapse_index(&url);
        match url.strip_suffix(".html") {
            Some(stripped) => stripped.to_string(),
            None => url,
        }
    } else if let Some(stripped) = url.strip_suffix(".xml") {
        stripped.to_string()
    } else {
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_settings;

    fn directory_settings() -> Settings {
        test_settings("[build]\npermalink = \"/:year/:month/:day/:title/\"")
    }

    fn html_settings() -> Settings {
        test_settings("[build]\npermalink = \"/:title.html\"")
    }

    fn extensionless_settings() -> Settings {
        test_settings("[build]\npermalink = \"/:year/:title\"")
    }

    fn relative_settings() -> Settings {
        test_settings(
            "[build]\npermalink = \"/:year/:month/:day/:title/\"\nuse_relative_url = true",
        )
    }

    #[test]
    fn test_tag_index_directory_style() {
        let url = build_url(
            &directory_settings(),
            "",
            &["tag", "python", "index.html"],
            None,
        )
        .unwrap();
        assert_eq!(url, "/tag/python/");
    }

    #[test]
    fn test_html_style_appends_extension() {
        let url = build_url(&html_settings(), "", &["about"], None).unwrap();
        assert_eq!(url, "/about.html");
    }

    #[test]
    fn test_html_style_keeps_existing_extensions() {
        let settings = html_settings();
        assert_eq!(
            build_url(&settings, "", &["about.html"], None).unwrap(),
            "/about.html"
        );
        assert_eq!(
            build_url(&settings, "", &["feed.xml"], None).unwrap(),
            "/feed.xml"
        );
    }

    #[test]
    fn test_html_style_still_collapses_index() {
        // index.html collapses before suffix rewriting, so even the .html
        // style produces a directory URL for index pages
        let url = build_url(
            &html_settings(),
            "",
            &["tag", "python", "index.html"],
            None,
        )
        .unwrap();
        assert_eq!(url, "/tag/python/");
    }

    #[test]
    fn test_directory_style_strips_extensions() {
        let settings = directory_settings();
        assert_eq!(
            build_url(&settings, "", &["about.html"], None).unwrap(),
            "/about/"
        );
        assert_eq!(
            build_url(&settings, "", &["feed.xml"], None).unwrap(),
            "/feed/"
        );
    }

    #[test]
    fn test_directory_style_invariants() {
        let settings = directory_settings();
        for segments in [
            vec!["about.html"],
            vec!["feed.xml"],
            vec!["tag", "rust", "index.html"],
            vec!["2024", "hello"],
        ] {
            let url = build_url(&settings, "", &segments, None).unwrap();
            assert!(url.ends_with('/'), "{url} should end with /");
            assert!(!url.ends_with(".html"), "{url} should not end with .html");
            assert!(!url.ends_with(".xml"), "{url} should not end with .xml");
        }
    }

    #[test]
    fn test_extensionless_style() {
        let settings = extensionless_settings();
        assert_eq!(
            build_url(&settings, "", &["about.html"], None).unwrap(),
            "/about"
        );
        assert_eq!(
            build_url(&settings, "", &["feed.xml"], None).unwrap(),
            "/feed"
        );
        assert_eq!(
            build_url(&settings, "", &["about"], None).unwrap(),
            "/about"
        );
    }

    #[test]
    fn test_literal_suffix_strip_not_character_class() {
        // A name whose stem ends in extension letters must lose exactly
        // the ".html" suffix, nothing more
        let settings = extensionless_settings();
        assert_eq!(
            build_url(&settings, "", &["all.html"], None).unwrap(),
            "/all"
        );
        assert_eq!(
            build_url(&settings, "", &["shtml.html"], None).unwrap(),
            "/shtml"
        );
    }

    #[test]
    fn test_absolute_base_keeps_scheme_and_host() {
        for settings in [
            directory_settings(),
            html_settings(),
            extensionless_settings(),
        ] {
            let url = build_url(
                &settings,
                "https://example.com",
                &["tag", "rust", "index.html"],
                None,
            )
            .unwrap();
            assert!(
                url.starts_with("https://example.com/"),
                "{url} should start with the base"
            );
        }
    }

    #[test]
    fn test_absolute_base_trailing_slashes_stripped() {
        let url = build_url(
            &directory_settings(),
            "https://example.com///",
            &["about.html"],
            None,
        )
        .unwrap();
        assert_eq!(url, "https://example.com/about/");
    }

    #[test]
    fn test_base_prepended_as_segment() {
        let url = build_url(
            &directory_settings(),
            "blog",
            &["tag", "rust", "index.html"],
            None,
        )
        .unwrap();
        assert_eq!(url, "/blog/tag/rust/");
    }

    #[test]
    fn test_segment_sanitization() {
        // Empty segment elided, space replaced, no double slash
        let url = build_url(&extensionless_settings(), "", &["a b", "", "c"], None).unwrap();
        assert_eq!(url, "/a-b/c");
    }

    #[test]
    fn test_lowercased() {
        let url = build_url(
            &directory_settings(),
            "",
            &["Tag", "Python", "Index.html"],
            None,
        )
        .unwrap();
        assert_eq!(url, "/tag/python/");
    }

    #[test]
    fn test_relative_mode_uses_page_location() {
        let settings = relative_settings();
        let ctx = RenderContext::new("2024/03/index.html");
        let url = build_url(&settings, "", &["tag", "rust", "index.html"], Some(&ctx)).unwrap();
        assert_eq!(url, "../../tag/rust/");
    }

    #[test]
    fn test_relative_mode_root_page() {
        let settings = relative_settings();
        let ctx = RenderContext::new("index.html");
        let url = build_url(&settings, "", &["about.html"], Some(&ctx)).unwrap();
        assert_eq!(url, "./about/");
    }

    #[test]
    fn test_relative_mode_ignored_for_absolute_base() {
        let settings = relative_settings();
        let ctx = RenderContext::new("2024/index.html");
        let url = build_url(&settings, "https://example.com", &["about.html"], Some(&ctx)).unwrap();
        assert_eq!(url, "https://example.com/about/");
    }

    #[test]
    fn test_relative_mode_without_context_fails() {
        let settings = relative_settings();
        let err = build_url(&settings, "", &["about.html"], None).unwrap_err();
        assert_eq!(err, UrlError::MissingRenderContext);
    }

    #[test]
    fn test_collapse_index_idempotent() {
        let once = collapse_index("/tag/rust/index.html");
        let twice = collapse_index(&once);
        assert_eq!(once, "/tag/rust/");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_collapse_index_root() {
        assert_eq!(collapse_index("/index.html"), "/");
    }

    #[test]
    fn test_collapse_index_requires_full_name() {
        // "reindex.html" is not an index page
        assert_eq!(collapse_index("/reindex.html"), "/reindex.html");
    }

    #[test]
    fn test_relative_base() {
        assert_eq!(relative_base("index.html"), ".");
        assert_eq!(relative_base("tag/index.html"), "..");
        assert_eq!(relative_base("2024/03/post.html"), "../..");
        assert_eq!(relative_base("/2024/index.html"), "..");
    }
}
