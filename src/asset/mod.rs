//! Static asset hashing and cache-busted URL construction.

mod cache;
mod hash;
mod url;

pub use cache::AssetHashCache;
pub use hash::{ContentHash, compute_file_hash};
pub use url::static_url;
