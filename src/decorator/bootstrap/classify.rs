//! Style classification: buttons, form controls, addons.
//!
//! Every function here is a pure function of the element's current state, so
//! deferred class entries can call them at render time and get the same
//! answer for the same state.

use crate::element::{Element, OptionValue};

/// Input types rendered as buttons.
const BUTTON_INPUT_TYPES: &[&str] = &["button", "submit", "reset"];

/// Input types that never receive `form-control`.
const CHECKABLE_INPUT_TYPES: &[&str] = &["checkbox", "radio"];

/// Anything a classification helper may be asked about: an element, or a
/// fragment of markup (e.g. addon content given as text).
#[derive(Debug, Clone, Copy)]
pub enum Subject<'a> {
    Element(&'a Element),
    Markup(&'a str),
}

impl<'a> From<&'a Element> for Subject<'a> {
    fn from(element: &'a Element) -> Self {
        Subject::Element(element)
    }
}

impl<'a> From<&'a str> for Subject<'a> {
    fn from(markup: &'a str) -> Self {
        Subject::Markup(markup)
    }
}

impl<'a> From<&'a OptionValue> for Subject<'a> {
    fn from(value: &'a OptionValue) -> Self {
        match value {
            OptionValue::Element(element) => Subject::Element(element),
            OptionValue::Text(text) => Subject::Markup(text),
            OptionValue::Flag(_) | OptionValue::Grid(_) => Subject::Markup(""),
        }
    }
}

/// Whether the subject renders as a button: a button element, an input of
/// type button/submit/reset, anything already carrying `btn`, or anything
/// with a truthy `btn` / `btn-style` option. Markup is never a button.
pub fn is_button<'a>(subject: impl Into<Subject<'a>>) -> bool {
    let Subject::Element(element) = subject.into() else {
        return false;
    };

    element.is_button()
        || element
            .input_type()
            .is_some_and(|t| BUTTON_INPUT_TYPES.contains(&t))
        || element.has_class("btn")
        || element.has_option("btn")
        || element.has_option("btn-style")
}

/// A button styled to hold label spans (`btn-labeled`).
pub fn is_labeled_button(element: &Element) -> bool {
    is_button(element) && element.has_class("btn-labeled")
}

/// A control that gets `form-control`: a non-button input that is not a
/// checkbox or radio, a textarea, or a select.
pub fn is_form_control(element: &Element) -> bool {
    if is_button(element) {
        return false;
    }
    match element.input_type() {
        Some(t) => !CHECKABLE_INPUT_TYPES.contains(&t),
        None => element.is_textarea() || element.is_select(),
    }
}

/// `btn` followed by one `btn-<token>` per whitespace-separated token of
/// the style (`btn` option, else `btn-style`, else `default`).
pub fn button_class(element: &Element) -> String {
    let style = ["btn", "btn-style"]
        .iter()
        .filter_map(|name| element.option_text(name))
        .find(|s| !s.trim().is_empty())
        .unwrap_or("default");

    let mut class = String::from("btn");
    for token in style.split_whitespace() {
        class.push_str(" btn-");
        class.push_str(token);
    }
    class
}

/// Where an addon sits relative to the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Prepend,
    Append,
}

impl Placement {
    /// Option and component key for this placement.
    pub fn key(self) -> &'static str {
        match self {
            Placement::Prepend => "prepend",
            Placement::Append => "append",
        }
    }
}

/// Class of an addon span, decided from the addon's current content.
///
/// Labeled buttons get `btn-label` (plus `btn-label-right` when appended).
/// Non-button inputs get `input-group-btn` when the addon content is itself
/// a button, `input-group-addon` otherwise. Anything else gets no class.
pub fn addon_class(element: &Element, placement: Placement) -> Option<String> {
    if is_labeled_button(element) {
        let class = match placement {
            Placement::Prepend => "btn-label",
            Placement::Append => "btn-label btn-label-right",
        };
        return Some(class.to_owned());
    }

    if element.is_input() && !is_button(element) {
        let content_is_button = element
            .option(placement.key())
            .is_some_and(|value| is_button(value));
        let class = if content_is_button {
            "input-group-btn"
        } else {
            "input-group-addon"
        };
        return Some(class.to_owned());
    }

    None
}
