//! URL set (`<urlset>`) builder

use tracing::{debug, instrument};

use crate::sitemap::entry::{format_last_mod, format_priority, SitemapUrl};
use crate::sitemap::list::EntryList;
use crate::sitemap::root::SitemapBuilder;
use crate::sitemap::SITEMAP_NAMESPACE;
use crate::xml::{Document, Element, RenderOptions};

/// Immutable accumulator of URL set entries
#[derive(Clone, Debug)]
pub struct SitemapUrlSetBuilder {
    root: SitemapBuilder,
    urls: EntryList<SitemapUrl>,
}

impl SitemapUrlSetBuilder {
    pub(crate) fn with_root(root: SitemapBuilder) -> Self {
        Self {
            root,
            urls: EntryList::new(),
        }
    }

    pub fn root(&self) -> &SitemapBuilder {
        &self.root
    }

    /// Returns a new builder with `url` appended; `self` is unchanged
    #[must_use]
    pub fn add_url(&self, url: impl Into<SitemapUrl>) -> Self {
        Self {
            root: self.root.clone(),
            urls: self.urls.push(url.into()),
        }
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Entries in the order they were added
    pub fn urls(&self) -> impl Iterator<Item = &SitemapUrl> {
        self.urls.iter()
    }

    /// The `<urlset>` element tree
    pub fn to_element(&self) -> Element {
        Element::new("urlset")
            .with_attribute("xmlns", SITEMAP_NAMESPACE)
            .with_children(self.urls.iter().map(|url| self.url_element(url)))
    }

    // Child order is fixed: loc, lastmod, changefreq, priority.
    fn url_element(&self, url: &SitemapUrl) -> Element {
        let mut children = vec![Element::text("loc", self.root.resolve(&url.loc))];
        if let Some(last_mod) = url.last_mod {
            children.push(Element::text("lastmod", format_last_mod(last_mod)));
        }
        if let Some(change_freq) = url.change_freq {
            children.push(Element::text("changefreq", change_freq.as_str()));
        }
        if let Some(priority) = url.priority.and_then(format_priority) {
            children.push(Element::text("priority", priority));
        }
        Element::new("url").with_children(children)
    }

    /// Render as a minified document
    pub fn build(&self) -> String {
        self.build_with_options(RenderOptions::default())
    }

    #[instrument(level = "debug", skip(self), fields(urls = self.len()))]
    pub fn build_with_options(&self, options: RenderOptions) -> String {
        let output = Document::from(self.to_element()).render(options);
        debug!(bytes = output.len(), "built url set");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sitemap::ChangeFrequency;

    fn url_set() -> SitemapUrlSetBuilder {
        SitemapBuilder::create("https://example.com").as_url_set()
    }

    fn child_names(builder: &SitemapUrlSetBuilder) -> Vec<String> {
        builder.to_element().children()[0]
            .children()
            .iter()
            .map(|child| child.name.clone())
            .collect()
    }

    #[test]
    fn test_child_order_is_fixed() {
        let builder = url_set().add_url(
            SitemapUrl::new("/p")
                .with_priority(0.3)
                .with_change_freq(ChangeFrequency::Never)
                .with_last_mod(time::OffsetDateTime::UNIX_EPOCH),
        );
        assert_eq!(
            child_names(&builder),
            vec!["loc", "lastmod", "changefreq", "priority"]
        );
    }

    #[test]
    fn test_zero_priority_is_omitted() {
        let builder = url_set().add_url(SitemapUrl::new("/p").with_priority(0.0));
        assert_eq!(child_names(&builder), vec!["loc"]);
        assert!(!builder.build().contains("<priority>"));
    }

    #[test]
    fn test_out_of_range_priority_passes_through() {
        let out = url_set()
            .add_url(SitemapUrl::new("/p").with_priority(-3.5))
            .build();
        assert!(out.contains("<priority>-3.5</priority>"));
    }

    #[test]
    fn test_urls_iterates_in_insertion_order() {
        let builder = url_set().add_url("/a").add_url("/b").add_url("/c");
        let locs: Vec<_> = builder.urls().map(|url| url.loc.as_str()).collect();
        assert_eq!(locs, vec!["/a", "/b", "/c"]);
    }
}
