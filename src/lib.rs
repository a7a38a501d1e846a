//! Permalink normalization and asset cache-busting for static site generators.
//!
//! Two cooperating units:
//!
//! - [`permalink`] — pure URL construction: a logical content reference
//!   (tag page, year archive, arbitrary path segments) plus the configured
//!   permalink style becomes a canonical, collision-free URL string.
//! - [`asset`] — a per-build [`asset::AssetHashCache`] memoizing content
//!   digests of static files, feeding `?v=<hash>` cache-busting tokens.
//!
//! Both consume a read-only [`config::Settings`] record and, in relative-URL
//! mode, the [`permalink::RenderContext`] of the page currently rendering.

pub mod asset;
pub mod cli;
pub mod config;
pub mod logger;
pub mod permalink;

pub use asset::{AssetHashCache, ContentHash, static_url};
pub use config::Settings;
pub use permalink::{PermalinkStyle, RenderContext, UrlError, build_url, tag_url, year_url};
