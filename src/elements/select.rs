//! Select constructor.

use super::id_from_name;
use crate::element::{Element, Kind};

/// An empty `<select>` named `name`. Add choices with
/// [`Element::with_choice`].
pub fn select(name: &str) -> Element {
    Element::new(Kind::Select)
        .with_attr("name", name)
        .with_id(id_from_name(name))
}
