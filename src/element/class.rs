//! Class lists with literal and deferred entries.
//!
//! A deferred entry is a function of the owning element's live state. It is
//! evaluated every time the list is rendered, never when it is inserted, so a
//! decoration pass that runs once still reacts to later option or error
//! changes.

use std::fmt;
use std::rc::Rc;

use super::node::Element;

/// Read-only state a deferred class entry is evaluated against.
#[derive(Clone, Copy)]
pub struct ClassContext<'a> {
    /// The element that owns the class list (or owns the component that does).
    pub owner: &'a Element,
    /// The resolved content of the node being rendered, if any.
    pub content: Option<&'a str>,
}

impl<'a> ClassContext<'a> {
    pub fn new(owner: &'a Element) -> Self {
        Self {
            owner,
            content: None,
        }
    }

    pub fn with_content(mut self, content: Option<&'a str>) -> Self {
        self.content = content;
        self
    }
}

/// Signature of a deferred class computation.
pub type ClassFn = Rc<dyn Fn(&ClassContext<'_>) -> Option<String>>;

/// One entry in a [`ClassList`].
#[derive(Clone)]
pub enum ClassEntry {
    /// One or more whitespace-separated class names.
    Literal(String),
    /// Computed at render time; `None` contributes nothing.
    Deferred(ClassFn),
}

impl ClassEntry {
    pub fn deferred(f: impl Fn(&ClassContext<'_>) -> Option<String> + 'static) -> Self {
        ClassEntry::Deferred(Rc::new(f))
    }

    fn evaluate(&self, ctx: &ClassContext<'_>) -> Option<String> {
        match self {
            ClassEntry::Literal(class) => Some(class.clone()),
            ClassEntry::Deferred(f) => f(ctx),
        }
    }
}

impl fmt::Debug for ClassEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassEntry::Literal(class) => f.debug_tuple("Literal").field(class).finish(),
            ClassEntry::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl From<&str> for ClassEntry {
    fn from(class: &str) -> Self {
        ClassEntry::Literal(class.to_owned())
    }
}

impl From<String> for ClassEntry {
    fn from(class: String) -> Self {
        ClassEntry::Literal(class)
    }
}

/// Append-only list of class entries.
///
/// Duplicates are allowed on insertion and removed when the list is
/// resolved; the first occurrence of a name fixes its position.
#[derive(Debug, Clone, Default)]
pub struct ClassList {
    entries: Vec<ClassEntry>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: impl Into<ClassEntry>) {
        self.entries.push(entry.into());
    }

    pub fn push_deferred(&mut self, f: impl Fn(&ClassContext<'_>) -> Option<String> + 'static) {
        self.entries.push(ClassEntry::deferred(f));
    }

    /// Whether a literal entry contains `name`. Deferred entries are not
    /// consulted, so this is safe to call from inside a deferred entry.
    pub fn has_class(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| match entry {
            ClassEntry::Literal(class) => class.split_whitespace().any(|c| c == name),
            ClassEntry::Deferred(_) => false,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ClassEntry] {
        &self.entries
    }

    /// Evaluate every entry against `ctx` and return the de-duplicated class
    /// names in first-seen order.
    pub fn resolve(&self, ctx: &ClassContext<'_>) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for entry in &self.entries {
            let Some(value) = entry.evaluate(ctx) else {
                continue;
            };
            for name in value.split_whitespace() {
                if !names.iter().any(|n| n == name) {
                    names.push(name.to_owned());
                }
            }
        }
        names
    }

    /// The resolved list joined with spaces (empty when nothing applies).
    pub fn render(&self, ctx: &ClassContext<'_>) -> String {
        self.resolve(ctx).join(" ")
    }
}
