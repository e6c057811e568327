//! Base URL shared by every builder derived from it

use std::sync::Arc;

use crate::sitemap::index::SitemapIndexBuilder;
use crate::sitemap::urlset::SitemapUrlSetBuilder;

/// Holds the base URL that relative locations are resolved against
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SitemapBuilder {
    base_url: Arc<str>,
}

impl SitemapBuilder {
    /// Create a root; the base URL is stored verbatim (no slash handling)
    pub fn create(base_url: impl Into<Arc<str>>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start an empty sitemap index bound to this root
    pub fn as_index(&self) -> SitemapIndexBuilder {
        SitemapIndexBuilder::with_root(self.clone())
    }

    /// Start an empty URL set bound to this root
    pub fn as_url_set(&self) -> SitemapUrlSetBuilder {
        SitemapUrlSetBuilder::with_root(self.clone())
    }

    /// Absolute `http://` and `https://` locations pass through unchanged;
    /// anything else is appended to the base URL as-is.
    pub fn resolve(&self, location: &str) -> String {
        if is_absolute(location) {
            location.to_string()
        } else {
            format!("{}{location}", self.base_url)
        }
    }
}

fn is_absolute(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_locations_are_concatenated() {
        let root = SitemapBuilder::create("https://www.natsuneko.blog");
        assert_eq!(
            root.resolve("/sitemap-0.xml"),
            "https://www.natsuneko.blog/sitemap-0.xml"
        );
        assert_eq!(root.resolve("about"), "https://www.natsuneko.blogabout");
        assert_eq!(root.resolve(""), "https://www.natsuneko.blog");
    }

    #[test]
    fn test_trailing_slash_is_not_normalized() {
        let root = SitemapBuilder::create(String::from("https://example.com/"));
        assert_eq!(root.base_url(), "https://example.com/");
        assert_eq!(root.resolve("/a"), "https://example.com//a");
    }

    #[test]
    fn test_absolute_locations_pass_through() {
        let root = SitemapBuilder::create("https://example.com");
        assert_eq!(root.resolve("http://other.test/x"), "http://other.test/x");
        assert_eq!(root.resolve("https://other.test/y"), "https://other.test/y");
        // only the two web schemes count as absolute
        assert_eq!(root.resolve("ftp://x"), "https://example.comftp://x");
        assert_eq!(root.resolve("HTTPS://x"), "https://example.comHTTPS://x");
    }

    #[test]
    fn test_builders_share_the_root() {
        let root = SitemapBuilder::create("https://example.com");
        assert_eq!(root.as_index().root(), &root);
        assert_eq!(root.as_url_set().root(), &root);
        assert!(root.as_index().is_empty());
        assert!(root.as_url_set().is_empty());
    }
}
