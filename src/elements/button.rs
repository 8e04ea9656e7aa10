//! Button constructors.
//!
//! Buttons hold inline content instead of a value and start without a
//! container.

use crate::element::{Element, Kind};

/// A `<button type="button">` showing `content`.
pub fn button(content: &str) -> Element {
    typed("button", content)
}

/// A `<button type="submit">` showing `content`.
pub fn submit(content: &str) -> Element {
    typed("submit", content)
}

/// A `<button type="reset">` showing `content`.
pub fn reset(content: &str) -> Element {
    typed("reset", content)
}

fn typed(button_type: &str, content: &str) -> Element {
    Element::new(Kind::Button)
        .with_type(button_type)
        .with_content(content)
}
