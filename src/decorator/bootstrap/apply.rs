//! Decoration pass: style classes and component registration.
//!
//! Runs once per element. Everything that depends on state which may change
//! later (options, error text, addon content) is registered as a deferred
//! class or deferred content so the render pass sees the live value.

use super::classify::{addon_class, button_class, is_button, is_form_control, Placement};
use crate::element::{AttrValue, Component, Element, OptionValue};

/// Decorate one element.
pub(super) fn apply(element: &mut Element) {
    apply_to_element(element);

    if element.components().is_none() {
        return;
    }

    if element.is_control() {
        apply_to_label(element);
    }
    apply_to_container(element);
    if element.is_input() && !is_button(&*element) {
        apply_to_input_group(element);
    }
    if element.is_input() || element.is_button() {
        apply_to_addon(element, Placement::Prepend);
        apply_to_addon(element, Placement::Append);
    }
    apply_to_help(element);
    if element.is_control() {
        apply_to_error(element);
    }
}

/// `btn btn-<style>` for buttons, `form-control` for plain controls.
fn apply_to_element(element: &mut Element) {
    element.add_deferred_class(|ctx| is_button(ctx.owner).then(|| button_class(ctx.owner)));
    element.add_deferred_class(|ctx| {
        is_form_control(ctx.owner).then(|| "form-control".to_owned())
    });
}

fn apply_to_label(element: &mut Element) {
    let Some(label) = register(element, "label", Component::new("label")) else {
        return;
    };
    label.add_deferred_class(|ctx| label_class(ctx.owner));
    label.set_deferred_content(label_text);
}

fn apply_to_container(element: &mut Element) {
    let Some(container) = register(element, "container", Component::new("div")) else {
        return;
    };
    container.add_class("form-group");
    container.add_deferred_class(|ctx| ctx.owner.error().map(|_| "has-error".to_owned()));
}

fn apply_to_input_group(element: &mut Element) {
    if let Some(group) = register(element, "input-group", Component::new("div")) {
        group.add_class("input-group");
    }
}

fn apply_to_addon(element: &mut Element, placement: Placement) {
    let Some(addon) = register(element, placement.key(), Component::new("span")) else {
        return;
    };
    addon.add_deferred_class(move |ctx| addon_class(ctx.owner, placement));
    addon.set_deferred_content(move |el| {
        el.option(placement.key()).and_then(OptionValue::to_markup)
    });
}

fn apply_to_help(element: &mut Element) {
    let Some(help) = register(element, "help", Component::new("span")) else {
        return;
    };
    help.add_class("help-block");
    help.set_deferred_content(|el| el.option("help").and_then(OptionValue::to_markup));
}

fn apply_to_error(element: &mut Element) {
    let Some(error) = register(element, "error", Component::new("span")) else {
        return;
    };
    error.add_class("help-block error");
    error.set_deferred_content(|el| el.error().map(str::to_owned));
}

/// Register `template` under `key`, or fall back to the component already
/// registered there so classes from several passes merge onto one node.
fn register<'a>(
    element: &'a mut Element,
    key: &str,
    template: Component,
) -> Option<&'a mut Component> {
    match element.new_component(Some(key), template) {
        Ok(id) => element.component_by_id_mut(id),
        Err(err) => {
            tracing::debug!(%err, key, "keeping existing component");
            element.component_mut(key)
        }
    }
}

/// `control-label` plus the grid's label column, unless the label wraps the
/// control.
pub(super) fn label_class(element: &Element) -> Option<String> {
    if element.option_text("label") == Some("inside") {
        return None;
    }
    let mut class = String::from("control-label");
    if let Some(grid) = element.option("grid").and_then(OptionValue::as_grid) {
        class.push(' ');
        class.push_str(&grid.label);
    }
    Some(class)
}

/// The description, followed by the `required-suffix` option for required
/// controls.
pub(super) fn label_text(element: &Element) -> Option<String> {
    let mut text = element.description().unwrap_or_default().to_owned();
    let required = element.is_control()
        && element.attr("required").is_some_and(AttrValue::is_truthy);
    if required {
        if let Some(suffix) = element.option_text("required-suffix") {
            text.push_str(suffix);
        }
    }
    (!text.is_empty()).then_some(text)
}
