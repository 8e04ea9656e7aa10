//! Group constructors.

use crate::element::{Element, Kind};

/// An empty group, rendered as `<fieldset>`.
pub fn group() -> Element {
    Element::new(Kind::Group)
}

/// A group captioned with a `<legend>`.
pub fn fieldset(legend: &str) -> Element {
    group().with_description(legend)
}
