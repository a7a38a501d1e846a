//! Permalink URL construction.
//!
//! The normalizer turns a logical content reference into its final site
//! URL. Callers hand it a base identifier (absolute URL or site prefix),
//! a list of path segments, and optionally the [`RenderContext`] of the
//! page being rendered:
//!
//! | Input                              | Style         | Result              |
//! |------------------------------------|---------------|---------------------|
//! | `("", ["tag", "rust", "index.html"])` | `Directory`   | `/tag/rust/`        |
//! | `("", ["about"])`                  | `Html`        | `/about.html`       |
//! | `("blog", ["2024", "index.html"])` | `Extensionless` | `/blog/2024/`     |
//!
//! All construction is pure string work; no filesystem or network access.

mod helpers;
mod normalize;
mod style;

pub use helpers::{tag_url, year_url};
pub use normalize::{RenderContext, UrlError, build_url, relative_base};
pub use style::PermalinkStyle;
