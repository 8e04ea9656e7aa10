//! Decorator trait: decoration pass plus render hooks.
//!
//! A decorator holds no per-element state. [`Decorator::apply`] runs once per
//! element when the decorator is attached; the render hooks run on every
//! [`Element::render`](crate::element::Element::render) call and must derive
//! their output from the element's state at that moment.

use std::any::Any;

use crate::element::Element;

/// A stackable presentation policy.
///
/// Decorators attached to an element form an ordered list. Each render stage
/// folds the fragment through the list in attachment order, so a later
/// decorator sees what an earlier one produced.
pub trait Decorator {
    /// Identifier used in logs.
    fn name(&self) -> &str;

    /// Whether attaching this decorator to a group also attaches it to every
    /// descendant (and to children added later).
    fn is_deep(&self) -> bool {
        false
    }

    /// Mutate the element's static presentation: classes and components.
    fn apply(&self, element: &mut Element) {
        let _ = element;
    }

    /// Rewrite the inline content of the control (button text).
    fn render_content(&self, element: &Element, html: String) -> String {
        let _ = element;
        html
    }

    /// Rewrite the rendered control into its final markup.
    fn render(&self, element: &Element, html: String) -> String {
        let _ = element;
        html
    }

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;
}
