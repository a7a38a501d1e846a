//! Cache-busted static asset URLs.

use super::cache::AssetHashCache;
use crate::config::Settings;
use crate::permalink::{RenderContext, UrlError, relative_base};

/// Build the URL for a static asset: `<prefix>/<path>?v=<hash5>`.
///
/// The prefix is the configured static prefix; in relative-URL mode a
/// non-absolute prefix is re-rooted at the rendering page's location. A
/// missing asset degrades to an empty token (and a logged warning) rather
/// than failing the build.
pub fn static_url(
    settings: &Settings,
    cache: &AssetHashCache,
    path: &str,
    ctx: Option<&RenderContext>,
) -> Result<String, UrlError> {
    let hash = cache.short_hash(path);
    let mut prefix = settings.build.static_prefix.trim_end_matches('/').to_string();

    if settings.build.use_relative_url && !prefix.starts_with("http") {
        let ctx = ctx.ok_or(UrlError::MissingRenderContext)?;
        prefix = format!(
            "{}/{}",
            relative_base(&ctx.filepath),
            prefix.trim_start_matches('/')
        );
    }

    Ok(format!("{prefix}/{path}?v={hash}"))
}
