//! Markup primitive: tag + class + attributes + children to HTML text.

pub mod node;

pub use node::{escape_attr, AttrValue, HtmlNode, Markup};
