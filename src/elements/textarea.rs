//! Textarea constructor.

use super::id_from_name;
use crate::element::{Element, Kind};

pub fn textarea(name: &str) -> Element {
    Element::new(Kind::Textarea)
        .with_attr("name", name)
        .with_id(id_from_name(name))
}
