//! Minified and pretty-indented element rendering

use crate::xml::escape::escape;
use crate::xml::model::{Content, Element};

/// Extra spaces each nesting level adds in pretty mode
const INDENT_STEP: usize = 2;

/// Configuration for rendering elements and documents
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RenderOptions {
    /// Emit everything on one line with no indentation
    pub minified: bool,
    /// Leading spaces of an element rendered on its own in pretty mode;
    /// children sit two spaces deeper than their parent. Documents always
    /// start their roots at column 0. Ignored when minified.
    #[cfg_attr(feature = "serde", serde(alias = "indentWidth"))]
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::minified()
    }
}

impl RenderOptions {
    /// Single-line output, the default
    pub const fn minified() -> Self {
        Self {
            minified: true,
            indent: 2,
        }
    }

    /// One element per line, two spaces per level
    pub const fn pretty() -> Self {
        Self {
            minified: false,
            indent: 2,
        }
    }

    pub const fn with_indent(self, indent: usize) -> Self {
        Self { indent, ..self }
    }

    pub const fn with_minified(self, minified: bool) -> Self {
        Self { minified, ..self }
    }

    fn newline(self, out: &mut String) {
        if !self.minified {
            out.push('\n');
        }
    }

    fn pad(self, out: &mut String, offset: usize) {
        if !self.minified {
            out.push_str(&" ".repeat(offset));
        }
    }
}

impl Element {
    /// Render this element placed `options.indent` spaces in
    pub fn render(&self, options: RenderOptions) -> String {
        let mut out = String::new();
        self.write_to(&mut out, options, options.indent);
        out
    }

    pub(crate) fn write_to(&self, out: &mut String, options: RenderOptions, offset: usize) {
        options.pad(out, offset);
        out.push('<');
        out.push_str(&self.name);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape(value));
            out.push('"');
        }
        out.push('>');

        match &self.content {
            Content::Text(text) => out.push_str(&escape(text)),
            Content::Children(children) => {
                for child in children {
                    options.newline(out);
                    child.write_to(out, options, offset.saturating_add(INDENT_STEP));
                }
                options.newline(out);
                options.pad(out, offset);
            }
            Content::Absent => {
                options.newline(out);
                options.pad(out, offset);
            }
        }

        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}
