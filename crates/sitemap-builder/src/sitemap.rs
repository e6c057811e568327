//! Sitemap protocol builders

pub mod entry;
pub mod index;
mod list;
pub mod root;
pub mod urlset;

pub use entry::{ChangeFrequency, SitemapLocation, SitemapUrl};
pub use index::SitemapIndexBuilder;
pub use root::SitemapBuilder;
pub use urlset::SitemapUrlSetBuilder;

/// Namespace of sitemap protocol 0.9, set on every document root
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
