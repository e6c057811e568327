//! Sitemap index (`<sitemapindex>`) builder

use tracing::{debug, instrument};

use crate::sitemap::entry::{format_last_mod, SitemapLocation};
use crate::sitemap::list::EntryList;
use crate::sitemap::root::SitemapBuilder;
use crate::sitemap::SITEMAP_NAMESPACE;
use crate::xml::{Document, Element, RenderOptions};

/// Immutable accumulator of sitemap index entries
#[derive(Clone, Debug)]
pub struct SitemapIndexBuilder {
    root: SitemapBuilder,
    locations: EntryList<SitemapLocation>,
}

impl SitemapIndexBuilder {
    pub(crate) fn with_root(root: SitemapBuilder) -> Self {
        Self {
            root,
            locations: EntryList::new(),
        }
    }

    pub fn root(&self) -> &SitemapBuilder {
        &self.root
    }

    /// Returns a new builder with `location` appended; `self` is unchanged
    #[must_use]
    pub fn add_location(&self, location: impl Into<SitemapLocation>) -> Self {
        Self {
            root: self.root.clone(),
            locations: self.locations.push(location.into()),
        }
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Entries in the order they were added
    pub fn locations(&self) -> impl Iterator<Item = &SitemapLocation> {
        self.locations.iter()
    }

    /// The `<sitemapindex>` element tree
    pub fn to_element(&self) -> Element {
        Element::new("sitemapindex")
            .with_attribute("xmlns", SITEMAP_NAMESPACE)
            .with_children(self.locations.iter().map(|loc| self.sitemap_element(loc)))
    }

    fn sitemap_element(&self, location: &SitemapLocation) -> Element {
        let mut children = vec![Element::text("loc", self.root.resolve(&location.url))];
        if let Some(last_mod) = location.last_mod {
            children.push(Element::text("lastmod", format_last_mod(last_mod)));
        }
        Element::new("sitemap").with_children(children)
    }

    /// Render as a minified document
    pub fn build(&self) -> String {
        self.build_with_options(RenderOptions::default())
    }

    #[instrument(level = "debug", skip(self), fields(locations = self.len()))]
    pub fn build_with_options(&self, options: RenderOptions) -> String {
        let output = Document::from(self.to_element()).render(options);
        debug!(bytes = output.len(), "built sitemap index");
        output
    }
}
