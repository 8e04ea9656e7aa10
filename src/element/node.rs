//! Element: a form field or grouping with attributes, options, classes and
//! components.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use super::class::{ClassContext, ClassEntry, ClassList};
use super::component::{Component, ComponentId, Components};
use super::value::OptionValue;
use crate::decorator::Decorator;
use crate::error::{FormError, FormResult};
use crate::html::{AttrValue, HtmlNode, Markup};

// ---------------------------------------------------------------------------
// Kind
// ---------------------------------------------------------------------------

/// What an element is. Capabilities (components, error text, children) are
/// derived from the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Input,
    Select,
    Textarea,
    Button,
    Group,
}

impl Kind {
    /// Type name used in logs and errors.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Input => "Input",
            Kind::Select => "Select",
            Kind::Textarea => "Textarea",
            Kind::Button => "Button",
            Kind::Group => "Group",
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Kind::Input => "input",
            Kind::Select => "select",
            Kind::Textarea => "textarea",
            Kind::Button => "button",
            Kind::Group => "fieldset",
        }
    }

    /// Whether elements of this kind carry a value and validation error.
    pub fn is_control(self) -> bool {
        matches!(self, Kind::Input | Kind::Select | Kind::Textarea)
    }
}

/// One `<option>` of a select element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

// ---------------------------------------------------------------------------
// Element
// ---------------------------------------------------------------------------

/// A node of the form tree.
///
/// Elements are plain data: they know nothing about any CSS framework.
/// Decorators attached through [`Element::decorate`] add classes and
/// components, then take part in every [`Element::render`] call.
#[derive(Clone)]
pub struct Element {
    kind: Kind,
    attrs: Vec<(String, AttrValue)>,
    options: BTreeMap<String, OptionValue>,
    classes: ClassList,
    description: Option<String>,
    content: Option<String>,
    choices: Vec<Choice>,
    selected: Option<String>,
    error: Option<String>,
    validation_script: Option<String>,
    components: Components,
    children: Vec<Element>,
    decorators: Vec<Rc<dyn Decorator>>,
}

impl Element {
    /// Create a bare element of the given kind.
    ///
    /// Controls start with the `container` option on; buttons and groups
    /// start without it.
    pub fn new(kind: Kind) -> Self {
        let mut options = BTreeMap::new();
        if kind.is_control() {
            options.insert("container".to_owned(), OptionValue::Flag(true));
        }
        Self {
            kind,
            attrs: Vec::new(),
            options,
            classes: ClassList::new(),
            description: None,
            content: None,
            choices: Vec::new(),
            selected: None,
            error: None,
            validation_script: None,
            components: Components::new(),
            children: Vec::new(),
            decorators: Vec::new(),
        }
    }

    // -- builders ----------------------------------------------------------

    /// Set the `id` attribute (builder).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.set_attr("id", id.into());
        self
    }

    /// Set the `type` attribute (builder).
    pub fn with_type(mut self, input_type: impl Into<String>) -> Self {
        self.set_attr("type", input_type.into());
        self
    }

    /// Set an attribute (builder).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set an option (builder).
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.set_option(name, value);
        self
    }

    /// Add a class entry (builder).
    pub fn with_class(mut self, entry: impl Into<ClassEntry>) -> Self {
        self.add_class(entry);
        self
    }

    /// Set the description / caption (builder).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the inline content: button text or textarea body (builder).
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the current value (builder). Inputs store it as the `value`
    /// attribute, selects mark the matching choice, textareas use it as body.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    /// Add a select choice (builder).
    pub fn with_choice(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.choices.push(Choice {
            value: value.into(),
            label: label.into(),
        });
        self
    }

    /// Set the validation error (builder).
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.set_error(error);
        self
    }

    /// Add a child element (builder). See [`Element::add_child`].
    pub fn with_child(mut self, child: Element) -> Self {
        self.add_child(child);
        self
    }

    /// Attach a decorator (builder). See [`Element::decorate`].
    pub fn with_decorator(mut self, decorator: Rc<dyn Decorator>) -> Self {
        self.decorate(decorator);
        self
    }

    // -- kind introspection -----------------------------------------------

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn is_input(&self) -> bool {
        self.kind == Kind::Input
    }

    pub fn is_select(&self) -> bool {
        self.kind == Kind::Select
    }

    pub fn is_textarea(&self) -> bool {
        self.kind == Kind::Textarea
    }

    pub fn is_button(&self) -> bool {
        self.kind == Kind::Button
    }

    pub fn is_group(&self) -> bool {
        self.kind == Kind::Group
    }

    pub fn is_control(&self) -> bool {
        self.kind.is_control()
    }

    /// The input type (`text` when unset). `None` for non-inputs.
    pub fn input_type(&self) -> Option<&str> {
        if !self.is_input() {
            return None;
        }
        Some(self.attr_text("type").unwrap_or("text"))
    }

    /// Whether this is an `<input type="hidden">`.
    pub fn is_hidden_input(&self) -> bool {
        self.input_type() == Some("hidden")
    }

    // -- attributes -------------------------------------------------------

    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn attr_text(&self, name: &str) -> Option<&str> {
        self.attr(name).and_then(AttrValue::as_text)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<AttrValue> {
        let pos = self.attrs.iter().position(|(n, _)| n == name)?;
        Some(self.attrs.remove(pos).1)
    }

    pub fn id(&self) -> Option<&str> {
        self.attr_text("id")
    }

    pub fn name(&self) -> Option<&str> {
        self.attr_text("name")
    }

    // -- options ----------------------------------------------------------

    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options.get(name)
    }

    pub fn option_text(&self, name: &str) -> Option<&str> {
        self.option(name).and_then(OptionValue::as_text)
    }

    /// Whether the option is present and truthy.
    pub fn has_option(&self, name: &str) -> bool {
        self.option(name).is_some_and(OptionValue::is_truthy)
    }

    /// Set an option. A nested element receives every deep decorator
    /// already attached here, as a late child would.
    pub fn set_option(&mut self, name: impl Into<String>, value: impl Into<OptionValue>) {
        let mut value = value.into();
        if let OptionValue::Element(nested) = &mut value {
            let nested = Rc::make_mut(nested);
            for decorator in self.decorators.iter().filter(|d| d.is_deep()) {
                nested.decorate(Rc::clone(decorator));
            }
        }
        self.options.insert(name.into(), value);
    }

    pub fn remove_option(&mut self, name: &str) -> Option<OptionValue> {
        self.options.remove(name)
    }

    // -- classes ----------------------------------------------------------

    pub fn add_class(&mut self, entry: impl Into<ClassEntry>) {
        self.classes.push(entry);
    }

    pub fn add_deferred_class(
        &mut self,
        f: impl Fn(&ClassContext<'_>) -> Option<String> + 'static,
    ) {
        self.classes.push_deferred(f);
    }

    /// Whether a literal class entry carries `name`.
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.has_class(name)
    }

    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    /// Resolve the class list against the element's current state.
    pub fn resolved_classes(&self) -> Vec<String> {
        self.classes.resolve(&ClassContext::new(self))
    }

    // -- description, content, value --------------------------------------

    /// The caption: the explicit description, or else the `label` option
    /// when it holds caption text.
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .or_else(|| self.option_text("label").filter(|l| *l != "inside"))
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = Some(content.into());
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        match self.kind {
            Kind::Select => self.selected = Some(value),
            Kind::Textarea => self.content = Some(value),
            _ => self.set_attr("value", value),
        }
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    // -- control capability -----------------------------------------------

    /// The validation error. Always `None` for non-controls and for an
    /// empty error string.
    pub fn error(&self) -> Option<&str> {
        if !self.is_control() {
            return None;
        }
        self.error.as_deref().filter(|e| !e.is_empty())
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Client-side validation script appended after the control.
    pub fn validation_script(&self) -> Option<&str> {
        self.validation_script.as_deref()
    }

    pub fn set_validation_script(&mut self, script: impl Into<String>) {
        self.validation_script = Some(script.into());
    }

    // -- composite capability ---------------------------------------------

    /// Whether this element owns components. Groups and hidden inputs do not.
    pub fn has_components(&self) -> bool {
        !self.is_group() && !self.is_hidden_input()
    }

    pub fn components(&self) -> Option<&Components> {
        self.has_components().then_some(&self.components)
    }

    pub fn components_mut(&mut self) -> Option<&mut Components> {
        if self.has_components() {
            Some(&mut self.components)
        } else {
            None
        }
    }

    /// Look up a component without creating it.
    pub fn component(&self, key: &str) -> Option<&Component> {
        self.components()?.get(key)
    }

    /// Fetch a component, creating it from its default template on first
    /// access. `None` when the element owns no components.
    pub fn component_mut(&mut self, key: &str) -> Option<&mut Component> {
        Some(self.components_mut()?.get_or_create(key))
    }

    pub fn component_by_id_mut(&mut self, id: ComponentId) -> Option<&mut Component> {
        self.components_mut()?.by_id_mut(id)
    }

    /// Register a component. A `None` key registers an anonymous one.
    pub fn new_component(
        &mut self,
        key: Option<&str>,
        component: Component,
    ) -> FormResult<ComponentId> {
        let kind = self.kind.name();
        self.components_mut()
            .ok_or(FormError::NoComponents { kind })?
            .register(key, component)
    }

    // -- children ---------------------------------------------------------

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Element] {
        &mut self.children
    }

    /// Append a child to a group.
    ///
    /// Every deep decorator already attached to the group is applied to the
    /// child first. Non-group elements cannot hold children; the child is
    /// dropped.
    pub fn add_child(&mut self, mut child: Element) {
        if !self.is_group() {
            tracing::debug!(
                kind = self.kind.name(),
                "element cannot hold children, child dropped"
            );
            return;
        }
        for decorator in self.decorators.iter().filter(|d| d.is_deep()) {
            child.decorate(Rc::clone(decorator));
        }
        self.children.push(child);
    }

    // -- decoration -------------------------------------------------------

    pub fn decorators(&self) -> &[Rc<dyn Decorator>] {
        &self.decorators
    }

    /// Whether `decorator`, or another instance of the same decorator type
    /// and name, is already attached.
    pub fn is_decorated_by(&self, decorator: &Rc<dyn Decorator>) -> bool {
        let type_id = Any::type_id(decorator.as_any());
        self.decorators.iter().any(|attached| {
            Rc::ptr_eq(attached, decorator)
                || (Any::type_id(attached.as_any()) == type_id
                    && attached.name() == decorator.name())
        })
    }

    /// Attach a decorator: run its decoration pass once and, for deep
    /// decorators, repeat on every descendant and nested option element.
    /// Attaching a decorator of the same type and name again is a no-op.
    pub fn decorate(&mut self, decorator: Rc<dyn Decorator>) {
        if self.is_decorated_by(&decorator) {
            return;
        }
        tracing::trace!(
            decorator = decorator.name(),
            kind = self.kind.name(),
            "applying decorator"
        );
        decorator.apply(self);
        if decorator.is_deep() {
            for child in &mut self.children {
                child.decorate(Rc::clone(&decorator));
            }
            for value in self.options.values_mut() {
                if let OptionValue::Element(nested) = value {
                    Rc::make_mut(nested).decorate(Rc::clone(&decorator));
                }
            }
        }
        self.decorators.push(decorator);
    }

    // -- rendering --------------------------------------------------------

    /// Inline content after every decorator's content hook.
    pub fn render_content(&self) -> String {
        let raw = self.content.clone().unwrap_or_default();
        self.decorators
            .iter()
            .fold(raw, |html, d| d.render_content(self, html))
    }

    /// The bare control markup, without any structural wrapping.
    pub fn render_element(&self) -> String {
        let class = self.classes.render(&ClassContext::new(self));
        let mut node = HtmlNode::new(self.kind.tag()).with_class(class);
        for (name, value) in &self.attrs {
            node.set_attr(name.clone(), value.clone());
        }

        match self.kind {
            Kind::Input => {}
            Kind::Select => {
                for choice in &self.choices {
                    let selected = self.selected.as_deref() == Some(choice.value.as_str());
                    node.push(
                        HtmlNode::new("option")
                            .with_attr("value", choice.value.clone())
                            .with_attr("selected", selected)
                            .with_content(choice.label.clone()),
                    );
                }
            }
            Kind::Textarea => node.set_content(self.content.clone().unwrap_or_default()),
            Kind::Button => node.set_content(self.render_content()),
            Kind::Group => {
                if let Some(legend) = self.description() {
                    node.push(HtmlNode::new("legend").with_content(legend));
                }
                node.extend(self.children.iter().map(|child| Markup::Raw(child.render())));
            }
        }

        node.to_string()
    }

    /// Full markup: the bare control passed through every decorator's
    /// render hook. Rendering never changes the element.
    pub fn render(&self) -> String {
        self.decorators
            .iter()
            .fold(self.render_element(), |html, d| d.render(self, html))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decorators: Vec<&str> = self.decorators.iter().map(|d| d.name()).collect();
        f.debug_struct("Element")
            .field("kind", &self.kind)
            .field("attrs", &self.attrs)
            .field("options", &self.options)
            .field("classes", &self.classes)
            .field("description", &self.description)
            .field("error", &self.error)
            .field("components", &self.components.len())
            .field("children", &self.children)
            .field("decorators", &decorators)
            .finish()
    }
}
