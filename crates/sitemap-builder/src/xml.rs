//! XML element tree and string rendering

pub mod document;
pub mod escape;
pub mod model;
pub mod render;

pub use document::{Document, XML_DECLARATION};
pub use escape::escape;
pub use model::{Content, Element};
pub use render::RenderOptions;
