//! Input constructors, one per common `type`.

use super::id_from_name;
use crate::element::{Element, Kind};

/// A text input named `name`, with an id derived from the name.
pub fn input(name: &str) -> Element {
    typed("text", name)
}

/// Alias of [`input`].
pub fn text(name: &str) -> Element {
    typed("text", name)
}

pub fn email(name: &str) -> Element {
    typed("email", name)
}

pub fn password(name: &str) -> Element {
    typed("password", name)
}

/// A hidden input. Hidden inputs own no components, so decorators never
/// wrap them.
pub fn hidden(name: &str) -> Element {
    typed("hidden", name)
}

pub fn checkbox(name: &str) -> Element {
    typed("checkbox", name)
}

pub fn radio(name: &str) -> Element {
    typed("radio", name)
}

pub fn file(name: &str) -> Element {
    typed("file", name)
}

fn typed(input_type: &str, name: &str) -> Element {
    Element::new(Kind::Input)
        .with_type(input_type)
        .with_attr("name", name)
        .with_id(id_from_name(name))
}
