//! Tag and year archive URL helpers.

use super::normalize::{RenderContext, UrlError, build_url};
use crate::config::Settings;

/// URL for a tag page.
///
/// With a tag-cloud writer configured there is no per-tag page; the tag
/// links to its anchor on the shared tag index instead. `prepend_site`
/// roots the URL at the configured `site.url` (for feeds and sharing).
///
/// The anchor fragment carries the tag text verbatim: anchors must match
/// the heading ids the tag-cloud page emits, which are not lowercased.
pub fn tag_url(
    settings: &Settings,
    tag: &str,
    prepend_site: bool,
    ctx: Option<&RenderContext>,
) -> Result<String, UrlError> {
    let prefix = settings.site.prefix.as_str();
    let site = settings.site.url.as_str();

    if settings.writers.tagcloud {
        let index = if prepend_site {
            build_url(settings, site, &[prefix, "tag", "index.html"], ctx)?
        } else {
            build_url(settings, prefix, &["tag", "index.html"], ctx)?
        };
        return Ok(format!("{index}#{tag}"));
    }

    if prepend_site {
        build_url(settings, site, &[prefix, "tag", tag, "index.html"], ctx)
    } else {
        build_url(settings, prefix, &["tag", tag, "index.html"], ctx)
    }
}

/// URL for a year archive page (`<prefix>/<year>/`).
pub fn year_url(
    settings: &Settings,
    year: i32,
    ctx: Option<&RenderContext>,
) -> Result<String, UrlError> {
    build_url(
        settings,
        &settings.site.prefix,
        &[year.to_string(), "index.html".to_string()],
        ctx,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_settings;

    fn settings(extra: &str) -> Settings {
        test_settings(&format!(
            "[build]\npermalink = \"/:year/:month/:day/:title/\"\n{extra}"
        ))
    }

    #[test]
    fn test_tag_url() {
        let settings = settings("");
        assert_eq!(tag_url(&settings, "python", false, None).unwrap(), "/tag/python/");
    }

    #[test]
    fn test_tag_url_with_prefix() {
        let settings = settings("[site]\nprefix = \"blog\"");
        assert_eq!(
            tag_url(&settings, "python", false, None).unwrap(),
            "/blog/tag/python/"
        );
    }

    #[test]
    fn test_tag_url_prepend_site() {
        let settings = settings("[site]\nurl = \"https://example.com\"\nprefix = \"blog\"");
        assert_eq!(
            tag_url(&settings, "python", true, None).unwrap(),
            "https://example.com/blog/tag/python/"
        );
    }

    #[test]
    fn test_tag_url_spaces_become_dashes() {
        let settings = settings("");
        assert_eq!(
            tag_url(&settings, "data science", false, None).unwrap(),
            "/tag/data-science/"
        );
    }

    #[test]
    fn test_tag_url_tagcloud_anchor() {
        let settings = settings("[writers]\ntagcloud = true");
        assert_eq!(
            tag_url(&settings, "python", false, None).unwrap(),
            "/tag/#python"
        );
    }

    #[test]
    fn test_tag_url_tagcloud_keeps_tag_verbatim() {
        // Only the URL is normalized; the anchor text is not
        let settings = settings("[writers]\ntagcloud = true");
        assert_eq!(
            tag_url(&settings, "Data Science", false, None).unwrap(),
            "/tag/#Data Science"
        );
    }

    #[test]
    fn test_tag_url_tagcloud_prepend_site() {
        let settings = settings(
            "[site]\nurl = \"https://example.com\"\nprefix = \"blog\"\n[writers]\ntagcloud = true",
        );
        assert_eq!(
            tag_url(&settings, "python", true, None).unwrap(),
            "https://example.com/blog/tag/#python"
        );
    }

    #[test]
    fn test_year_url() {
        let settings = settings("");
        assert_eq!(year_url(&settings, 2024, None).unwrap(), "/2024/");
    }

    #[test]
    fn test_year_url_with_prefix() {
        let settings = settings("[site]\nprefix = \"blog\"");
        assert_eq!(year_url(&settings, 2024, None).unwrap(), "/blog/2024/");
    }
}
