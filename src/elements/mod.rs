//! Built-in element constructors: inputs, select, textarea, buttons, groups.

pub mod button;
pub mod group;
pub mod input;
pub mod select;
pub mod textarea;

pub use button::{button, reset, submit};
pub use group::{fieldset, group};
pub use input::{checkbox, email, file, hidden, input, password, radio, text};
pub use select::select;
pub use textarea::textarea;

/// Derive an element id from a field name: `user[email]` → `user-email`.
pub(crate) fn id_from_name(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
            id.push(ch);
        } else if !id.ends_with('-') {
            id.push('-');
        }
    }
    id.trim_matches('-').to_owned()
}
