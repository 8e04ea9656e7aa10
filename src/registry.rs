//! Lookup of decorators and element types by string key.
//!
//! Keys are namespaced by convention (`bootstrap`, `bootstrap/fileinput`).
//! Decorator factories receive their options as JSON so configuration can
//! come straight from a config file.

use std::collections::HashMap;
use std::rc::Rc;

use crate::decorator::{Bootstrap, Decorator};
use crate::element::Element;
use crate::error::{FormError, FormResult};

/// Builds a decorator from JSON options (`null` when none were given).
pub type DecoratorFactory = fn(&serde_json::Value) -> FormResult<Rc<dyn Decorator>>;

/// Builds an element from a field name.
pub type ElementFactory = fn(&str) -> Element;

/// Registered decorator and element factories.
#[derive(Debug, Clone)]
pub struct Registry {
    decorators: HashMap<String, DecoratorFactory>,
    elements: HashMap<String, ElementFactory>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            decorators: HashMap::new(),
            elements: HashMap::new(),
        }
    }

    /// A registry holding the built-in decorators and element types.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        Bootstrap::register(&mut registry);
        registry
    }

    /// Register a decorator factory, replacing any previous one under `key`.
    pub fn register_decorator(&mut self, key: impl Into<String>, factory: DecoratorFactory) {
        let key = key.into();
        if self.decorators.insert(key.clone(), factory).is_some() {
            tracing::debug!(key = %key, "decorator factory replaced");
        }
    }

    /// Register an element factory. An existing registration under `key`
    /// is kept.
    pub fn register_element(&mut self, key: impl Into<String>, factory: ElementFactory) {
        let key = key.into();
        if self.elements.contains_key(&key) {
            tracing::debug!(key = %key, "element type already registered, keeping existing");
            return;
        }
        self.elements.insert(key, factory);
    }

    pub fn has_decorator(&self, key: &str) -> bool {
        self.decorators.contains_key(key)
    }

    pub fn has_element(&self, key: &str) -> bool {
        self.elements.contains_key(key)
    }

    /// Build the decorator registered under `key`.
    pub fn decorator(
        &self,
        key: &str,
        options: &serde_json::Value,
    ) -> FormResult<Rc<dyn Decorator>> {
        let factory = self
            .decorators
            .get(key)
            .ok_or_else(|| FormError::UnknownDecorator(key.to_owned()))?;
        factory(options)
    }

    /// Build an element of the type registered under `key`.
    pub fn element(&self, key: &str, name: &str) -> FormResult<Element> {
        let factory = self
            .elements
            .get(key)
            .ok_or_else(|| FormError::UnknownElement(key.to_owned()))?;
        Ok(factory(name))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorator::bootstrap::SUPPORTED_VERSION;
    use crate::elements;
    use serde_json::json;

    #[test]
    fn defaults_include_bootstrap() {
        let registry = Registry::default();
        assert!(registry.has_decorator("bootstrap"));
        assert!(registry.has_element("bootstrap/fileinput"));
        assert!(registry.has_element("bootstrap/imageinput"));
        assert!(!Registry::new().has_decorator("bootstrap"));
    }

    #[test]
    fn build_bootstrap_from_json() {
        let registry = Registry::with_defaults();
        let decorator = registry.decorator("bootstrap", &json!({ "version": 3 })).unwrap();
        let bootstrap = decorator.as_any().downcast_ref::<Bootstrap>().unwrap();
        assert_eq!(bootstrap.version(), SUPPORTED_VERSION);
    }

    #[test]
    fn null_options_mean_default_config() {
        let registry = Registry::with_defaults();
        assert!(registry.decorator("bootstrap", &serde_json::Value::Null).is_ok());
    }

    #[test]
    fn unsupported_version_from_json() {
        let registry = Registry::with_defaults();
        let err = registry
            .decorator("bootstrap", &json!({ "version": 4 }))
            .err().unwrap();
        assert!(matches!(err, FormError::UnsupportedVersion { requested: 4, .. }));
    }

    #[test]
    fn string_version_from_json() {
        let registry = Registry::with_defaults();
        assert!(registry.decorator("bootstrap", &json!({ "version": "3" })).is_ok());
        let err = registry
            .decorator("bootstrap", &json!({ "version": "4" }))
            .err().unwrap();
        assert!(matches!(err, FormError::UnsupportedVersion { requested: 4, .. }));
    }

    #[test]
    fn malformed_options() {
        let registry = Registry::with_defaults();
        let err = registry
            .decorator("bootstrap", &json!({ "version": "three" }))
            .err().unwrap();
        assert!(matches!(err, FormError::InvalidConfig(_)));
    }

    #[test]
    fn unknown_keys() {
        let registry = Registry::with_defaults();
        assert!(matches!(
            registry.decorator("foundation", &json!(null)),
            Err(FormError::UnknownDecorator(key)) if key == "foundation"
        ));
        assert!(matches!(
            registry.element("bootstrap/colorpicker", "c"),
            Err(FormError::UnknownElement(key)) if key == "bootstrap/colorpicker"
        ));
    }

    #[test]
    fn element_factories() {
        let registry = Registry::with_defaults();
        let file = registry.element("bootstrap/imageinput", "avatar").unwrap();
        assert_eq!(file.input_type(), Some("file"));
        assert_eq!(file.name(), Some("avatar"));
    }

    #[test]
    fn element_registration_keeps_first() {
        let mut registry = Registry::new();
        registry.register_element("field", elements::text);
        registry.register_element("field", elements::email);
        let el = registry.element("field", "x").unwrap();
        assert_eq!(el.input_type(), Some("text"));
    }

    #[test]
    fn decorator_registration_replaces() {
        let mut registry = Registry::with_defaults();
        registry.register_decorator("bootstrap", |_| {
            Err(FormError::UnknownDecorator("off".into()))
        });
        assert!(registry.decorator("bootstrap", &json!(null)).is_err());
    }
}
