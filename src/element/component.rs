//! Components: named, lazily created sub-nodes owned by an element.
//!
//! Decorators register components (label, container, addons, help, error)
//! during the decoration pass; the render pass turns each component into a
//! fresh [`HtmlNode`] so rendering never mutates the registry.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use slotmap::{new_key_type, SlotMap};

use super::class::{ClassContext, ClassEntry, ClassList};
use super::node::Element;
use crate::error::{FormError, FormResult};
use crate::html::{AttrValue, HtmlNode, Markup};

new_key_type! {
    /// Handle to a component inside its owner's registry. Copy, lightweight.
    pub struct ComponentId;
}

/// Signature of deferred component content.
pub type ContentFn = Rc<dyn Fn(&Element) -> Option<String>>;

/// Inline content of a component.
#[derive(Clone, Default)]
pub enum Content {
    #[default]
    Empty,
    Markup(String),
    /// Computed from the owning element at render time.
    Deferred(ContentFn),
}

impl Content {
    pub fn deferred(f: impl Fn(&Element) -> Option<String> + 'static) -> Self {
        Content::Deferred(Rc::new(f))
    }

    pub fn resolve(&self, owner: &Element) -> Option<String> {
        match self {
            Content::Empty => None,
            Content::Markup(html) => Some(html.clone()),
            Content::Deferred(f) => f(owner),
        }
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Empty => f.write_str("Empty"),
            Content::Markup(html) => f.debug_tuple("Markup").field(html).finish(),
            Content::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl From<&str> for Content {
    fn from(html: &str) -> Self {
        Content::Markup(html.to_owned())
    }
}

impl From<String> for Content {
    fn from(html: String) -> Self {
        Content::Markup(html)
    }
}

/// A structural part of an element: tag, fixed attributes, class list,
/// inline content and static children.
#[derive(Debug, Clone)]
pub struct Component {
    tag: String,
    attrs: Vec<(String, AttrValue)>,
    classes: ClassList,
    content: Content,
    children: Vec<String>,
}

impl Component {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            classes: ClassList::new(),
            content: Content::Empty,
            children: Vec::new(),
        }
    }

    /// Add a class entry (builder).
    pub fn with_class(mut self, entry: impl Into<ClassEntry>) -> Self {
        self.classes.push(entry);
        self
    }

    /// Set a fixed attribute (builder).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

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

    pub fn add_class(&mut self, entry: impl Into<ClassEntry>) {
        self.classes.push(entry);
    }

    pub fn add_deferred_class(
        &mut self,
        f: impl Fn(&ClassContext<'_>) -> Option<String> + 'static,
    ) {
        self.classes.push_deferred(f);
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.has_class(name)
    }

    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    pub fn set_content(&mut self, content: impl Into<Content>) {
        self.content = content.into();
    }

    pub fn set_deferred_content(&mut self, f: impl Fn(&Element) -> Option<String> + 'static) {
        self.content = Content::deferred(f);
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Append a static child fragment.
    pub fn add(&mut self, html: impl Into<String>) {
        self.children.push(html.into());
    }

    /// Drop content and static children.
    pub fn clear(&mut self) {
        self.content = Content::Empty;
        self.children.clear();
    }

    /// Whether `other` has the same fixed shape (tag and attributes).
    fn same_shape(&self, other: &Component) -> bool {
        self.tag == other.tag && self.attrs == other.attrs
    }

    /// Build a fresh node from this component against the owner's current
    /// state. Content is resolved first so deferred classes can inspect it.
    pub fn to_node(&self, owner: &Element) -> HtmlNode {
        let content = self.content.resolve(owner);
        let ctx = ClassContext::new(owner).with_content(content.as_deref());
        let mut node = HtmlNode::new(self.tag.clone()).with_class(self.classes.render(&ctx));
        for (name, value) in &self.attrs {
            node.set_attr(name.clone(), value.clone());
        }
        if let Some(content) = content {
            node.set_content(content);
        }
        node.extend(self.children.iter().cloned().map(Markup::Raw));
        node
    }
}

/// Default template for a component requested by key before anyone
/// registered it.
fn default_component(key: &str) -> Component {
    match key {
        "label" => Component::new("label"),
        "help" | "error" | "prepend" | "append" => Component::new("span"),
        _ => Component::new("div"),
    }
}

/// Registry of an element's components: one instance per key, plus any
/// number of anonymous structural components.
#[derive(Debug, Clone, Default)]
pub struct Components {
    slots: SlotMap<ComponentId, Component>,
    names: HashMap<String, ComponentId>,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Component> {
        self.names.get(key).and_then(|&id| self.slots.get(id))
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Component> {
        let id = *self.names.get(key)?;
        self.slots.get_mut(id)
    }

    pub fn by_id(&self, id: ComponentId) -> Option<&Component> {
        self.slots.get(id)
    }

    pub fn by_id_mut(&mut self, id: ComponentId) -> Option<&mut Component> {
        self.slots.get_mut(id)
    }

    /// Fetch the component under `key`, creating it from the default
    /// template on first access. Later calls return the same instance.
    pub fn get_or_create(&mut self, key: &str) -> &mut Component {
        let id = match self.names.get(key) {
            Some(&id) => id,
            None => {
                let id = self.slots.insert(default_component(key));
                self.names.insert(key.to_owned(), id);
                id
            }
        };
        &mut self.slots[id]
    }

    /// Register a component explicitly.
    ///
    /// A `None` key registers an anonymous component. Registering a named
    /// key a second time is a no-op returning the existing id when the tag
    /// and attributes match, and an error when they differ.
    pub fn register(
        &mut self,
        key: Option<&str>,
        component: Component,
    ) -> FormResult<ComponentId> {
        let Some(key) = key else {
            return Ok(self.slots.insert(component));
        };

        if let Some(&id) = self.names.get(key) {
            return if self.slots[id].same_shape(&component) {
                Ok(id)
            } else {
                Err(FormError::ComponentConflict {
                    key: key.to_owned(),
                })
            };
        }

        let id = self.slots.insert(component);
        self.names.insert(key.to_owned(), id);
        Ok(id)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.names.contains_key(key)
    }

    /// Remove a named component, returning it.
    pub fn remove(&mut self, key: &str) -> Option<Component> {
        let id = self.names.remove(key)?;
        self.slots.remove(id)
    }

    /// Number of components, named and anonymous.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::input;
    use pretty_assertions::assert_eq;

    #[test]
    fn get_or_create_is_singleton() {
        let mut components = Components::new();
        components.get_or_create("label").add_class("a");
        components.get_or_create("label").add_class("b");
        assert_eq!(components.len(), 1);

        let owner = input("name");
        let node = components.get("label").unwrap().to_node(&owner);
        assert_eq!(node.to_string(), r#"<label class="a b"></label>"#);
    }

    #[test]
    fn default_templates_by_key() {
        let mut components = Components::new();
        assert_eq!(components.get_or_create("label").tag(), "label");
        assert_eq!(components.get_or_create("help").tag(), "span");
        assert_eq!(components.get_or_create("prepend").tag(), "span");
        assert_eq!(components.get_or_create("container").tag(), "div");
    }

    #[test]
    fn register_same_shape_is_noop() {
        let mut components = Components::new();
        let first = components
            .register(Some("container"), Component::new("div").with_class("form-group"))
            .unwrap();
        let second = components
            .register(Some("container"), Component::new("div").with_class("other"))
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(components.len(), 1);
        assert!(components.get("container").unwrap().has_class("form-group"));
        assert!(!components.get("container").unwrap().has_class("other"));
    }

    #[test]
    fn register_conflicting_shape_errors() {
        let mut components = Components::new();
        components
            .register(Some("container"), Component::new("div"))
            .unwrap();
        let err = components
            .register(Some("container"), Component::new("section"))
            .unwrap_err();
        assert!(matches!(err, FormError::ComponentConflict { ref key } if key == "container"));
    }

    #[test]
    fn anonymous_components_never_collide() {
        let mut components = Components::new();
        let a = components.register(None, Component::new("div")).unwrap();
        let b = components.register(None, Component::new("div")).unwrap();
        assert_ne!(a, b);
        assert_eq!(components.len(), 2);
        assert!(components.by_id(a).is_some());
    }

    #[test]
    fn remove_named() {
        let mut components = Components::new();
        components.get_or_create("help");
        assert!(components.remove("help").is_some());
        assert!(!components.contains("help"));
        assert!(components.is_empty());
    }

    #[test]
    fn to_node_resolves_deferred_content_and_classes() {
        let mut owner = input("name");
        owner.set_option("help", "Enter full name");

        let mut help = Component::new("span").with_class("help-block");
        help.set_deferred_content(|el| el.option_text("help").map(str::to_owned));
        help.add_deferred_class(|ctx| ctx.content.map(|_| "has-content".to_owned()));

        assert_eq!(
            help.to_node(&owner).to_string(),
            r#"<span class="help-block has-content">Enter full name</span>"#
        );
    }

    #[test]
    fn clear_drops_content_and_children() {
        let owner = input("name");
        let mut component = Component::new("div").with_attr("role", "group");
        component.set_content("x");
        component.add("<hr>");
        component.clear();
        assert_eq!(
            component.to_node(&owner).to_string(),
            r#"<div role="group"></div>"#
        );
    }

    #[test]
    fn static_children_render_as_blocks() {
        let owner = input("name");
        let mut component = Component::new("div");
        component.add("<hr>");
        assert_eq!(component.to_node(&owner).to_string(), "<div>\n<hr>\n</div>");
    }
}
