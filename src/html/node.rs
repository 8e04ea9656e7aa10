//! Node types: HtmlNode, Markup, AttrValue.

use std::fmt;

/// Tags that never receive a closing tag.
const VOID_TAGS: &[&str] = &["input", "img", "br", "hr", "meta", "link"];

/// An attribute value: either text or a boolean flag.
///
/// `Flag(true)` renders as a bare attribute name (`required`), `Flag(false)`
/// is omitted entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Text(String),
    Flag(bool),
}

impl AttrValue {
    /// The text value, if this is a text attribute.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            AttrValue::Flag(_) => None,
        }
    }

    /// Whether the attribute counts as "set".
    pub fn is_truthy(&self) -> bool {
        match self {
            AttrValue::Text(s) => !s.is_empty(),
            AttrValue::Flag(b) => *b,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Flag(value)
    }
}

/// A child of an [`HtmlNode`]: a nested node or an already rendered fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    Raw(String),
    Node(HtmlNode),
}

impl From<HtmlNode> for Markup {
    fn from(node: HtmlNode) -> Self {
        Markup::Node(node)
    }
}

impl From<String> for Markup {
    fn from(html: String) -> Self {
        Markup::Raw(html)
    }
}

impl From<&str> for Markup {
    fn from(html: &str) -> Self {
        Markup::Raw(html.to_owned())
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Markup::Raw(html) => f.write_str(html),
            Markup::Node(node) => node.fmt(f),
        }
    }
}

/// A single HTML element ready to be serialized.
///
/// Inline `content` is written directly after the opening tag; block
/// `children` follow, one per line. The class attribute is always written
/// first, then the remaining attributes in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlNode {
    tag: String,
    class: Option<String>,
    attrs: Vec<(String, AttrValue)>,
    content: Option<String>,
    children: Vec<Markup>,
}

impl HtmlNode {
    /// Create an empty node with the given tag name.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class: None,
            attrs: Vec::new(),
            content: None,
            children: Vec::new(),
        }
    }

    /// Set the class attribute (builder). An empty string clears it.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.set_class(class);
        self
    }

    /// Set an attribute (builder).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set the inline content (builder).
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Append a block child (builder).
    pub fn with_child(mut self, child: impl Into<Markup>) -> Self {
        self.push(child);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Replace the class attribute. An empty string clears it.
    pub fn set_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        self.class = if class.is_empty() { None } else { Some(class) };
    }

    /// Set an attribute, replacing any previous value under the same name.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = Some(content.into());
    }

    /// Append a block child.
    pub fn push(&mut self, child: impl Into<Markup>) {
        self.children.push(child.into());
    }

    /// Append several block children in order.
    pub fn extend(&mut self, children: impl IntoIterator<Item = Markup>) {
        self.children.extend(children);
    }

    pub fn children(&self) -> &[Markup] {
        &self.children
    }

    /// Remove content and children, keeping tag and attributes.
    pub fn clear(&mut self) {
        self.content = None;
        self.children.clear();
    }

    /// Whether the tag is a void element (no closing tag).
    pub fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.tag.as_str())
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        if let Some(class) = &self.class {
            write!(f, " class=\"{}\"", escape_attr(class))?;
        }
        for (name, value) in &self.attrs {
            match value {
                AttrValue::Text(text) => write!(f, " {}=\"{}\"", name, escape_attr(text))?,
                AttrValue::Flag(true) => write!(f, " {}", name)?,
                AttrValue::Flag(false) => {}
            }
        }
        f.write_str(">")?;

        if self.is_void() {
            return Ok(());
        }

        if let Some(content) = &self.content {
            f.write_str(content)?;
        }
        if !self.children.is_empty() {
            f.write_str("\n")?;
            for child in &self.children {
                writeln!(f, "{}", child)?;
            }
        }
        write!(f, "</{}>", self.tag)
    }
}

/// Escape a value for use inside a double-quoted attribute.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
