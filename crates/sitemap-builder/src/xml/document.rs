//! Declaration line plus top-level elements

use tracing::trace;

use crate::xml::model::Element;
use crate::xml::render::RenderOptions;

/// Declaration written at the start of every document
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// XML document
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    pub roots: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a top-level element
    pub fn add(&mut self, root: Element) {
        self.roots.push(root);
    }

    /// Render the declaration followed by every root element.
    ///
    /// Roots start at column 0 whatever `options.indent` is, and each level
    /// below adds two spaces. Roots are separated by `\n` even in minified
    /// mode; only the break after the declaration depends on `options.minified`.
    pub fn render(&self, options: RenderOptions) -> String {
        trace!(roots = self.roots.len(), minified = options.minified, "rendering document");

        let mut out = String::from(XML_DECLARATION);
        if !options.minified {
            out.push('\n');
        }
        for (i, root) in self.roots.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            root.write_to(&mut out, options, 0);
        }
        out
    }
}

impl From<Element> for Document {
    fn from(root: Element) -> Self {
        Self { roots: vec![root] }
    }
}
