//! form! macro expansion against the real element API.

#![cfg(feature = "macros")]

use formwork::form;
use formwork::testing::{decorated, has_class};
use pretty_assertions::assert_eq;

#[test]
fn test_flat_elements() {
    let elements = form! {
        <email name="email" label="Email" required=true />
        <submit content="Go" btn="primary" />
    };
    assert_eq!(elements.len(), 2);
    assert_eq!(elements[0].input_type(), Some("email"));
    assert_eq!(elements[0].option_text("label"), Some("Email"));
    assert!(elements[0].attr("required").is_some_and(|v| v.is_truthy()));
    assert_eq!(elements[1].content(), Some("Go"));
}

#[test]
fn test_nested_fieldset_renders() {
    let mut elements = form! {
        <fieldset legend="Sign in">
            <text name="user" label="User" />
            <select name="role">
                <option value="admin" label="Admin" />
                <option value="guest" />
            </select>
        </fieldset>
    };
    let form = decorated(elements.remove(0));
    assert_eq!(form.children().len(), 2);
    assert_eq!(form.children()[1].choices().len(), 2);

    let html = form.render();
    assert!(html.starts_with("<fieldset>\n<legend>Sign in</legend>"));
    assert!(has_class(&html, "input", "form-control"));
    assert!(html.contains("<option value=\"guest\">guest</option>"));
}

#[test]
fn test_keyword_and_dashed_attributes() {
    let elements = form! {
        <input name="age" type="number" required-suffix=" *" data-min="0" />
    };
    let el = &elements[0];
    assert_eq!(el.input_type(), Some("number"));
    assert_eq!(el.option_text("required-suffix"), Some(" *"));
    assert_eq!(el.attr_text("data-min"), Some("0"));
}
