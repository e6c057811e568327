//! sitemap-builder - sitemap index and URL-set XML generation
//!
//! # Quick Start
//!
//! ```
//! use sitemap_builder::{ChangeFrequency, RenderOptions, SitemapBuilder, SitemapUrl};
//!
//! let root = SitemapBuilder::create("https://www.natsuneko.blog");
//!
//! let index = root.as_index().add_location("/sitemap-0.xml");
//! assert_eq!(
//!     index.build(),
//!     concat!(
//!         r#"<?xml version="1.0" encoding="UTF-8"?>"#,
//!         r#"<sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#,
//!         "<sitemap><loc>https://www.natsuneko.blog/sitemap-0.xml</loc></sitemap>",
//!         "</sitemapindex>",
//!     )
//! );
//!
//! let urls = root
//!     .as_url_set()
//!     .add_url(SitemapUrl::new("/about").with_change_freq(ChangeFrequency::Daily));
//! let pretty = urls.build_with_options(RenderOptions::pretty());
//! assert!(pretty.contains("\n    <changefreq>daily</changefreq>\n"));
//! ```
//!
//! Builders are immutable: every `add_*` call returns a new builder that
//! shares the existing entries, so a builder can be extended from several
//! places without the branches seeing each other.

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Result};

pub mod xml;
pub use xml::{
    escape, Content as XmlContent, Document as XmlDocument, Element as XmlElement, RenderOptions,
    XML_DECLARATION,
};

pub mod sitemap;
pub use sitemap::{
    ChangeFrequency, SitemapBuilder, SitemapIndexBuilder, SitemapLocation, SitemapUrl,
    SitemapUrlSetBuilder, SITEMAP_NAMESPACE,
};

/// Render a single element tree as a complete document
///
/// ```
/// use sitemap_builder::{to_xml_string, RenderOptions, XmlElement};
///
/// let note = XmlElement::new("note").with_children([XmlElement::text("to", "A & B")]);
/// assert_eq!(
///     to_xml_string(note.clone(), RenderOptions::minified()),
///     r#"<?xml version="1.0" encoding="UTF-8"?><note><to>A &amp; B</to></note>"#
/// );
/// assert_eq!(
///     to_xml_string(note, RenderOptions::pretty().with_indent(6)),
///     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<note>\n  <to>A &amp; B</to>\n</note>"
/// );
/// ```
pub fn to_xml_string(root: XmlElement, options: RenderOptions) -> String {
    XmlDocument::from(root).render(options)
}
