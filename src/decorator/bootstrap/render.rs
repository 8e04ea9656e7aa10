//! Render assembly: container, label, grid column, input group, addons,
//! help and error blocks.
//!
//! Each call builds a fresh node tree from the element's component
//! templates, so rendering is repeatable and never touches element state.

use super::apply::label_text;
use super::classify::{addon_class, is_labeled_button, Placement};
use crate::element::{Components, Element, OptionValue};
use crate::html::{HtmlNode, Markup};

/// How the `label` option asks for the label to be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LabelMode {
    /// No label option (or a falsy one).
    Absent,
    /// A label preceding the control.
    Before,
    /// A label wrapping the control.
    Inside,
}

impl LabelMode {
    fn of(element: &Element) -> Self {
        match element.option("label") {
            Some(value) if value.as_text() == Some("inside") => LabelMode::Inside,
            Some(value) if value.is_truthy() => LabelMode::Before,
            _ => LabelMode::Absent,
        }
    }
}

/// Fold prepend/append into the content of a labeled button.
pub(super) fn render_content(element: &Element, html: String) -> String {
    if !is_labeled_button(element) {
        return html;
    }

    let mut out = String::new();
    if let Some(prepend) = addon(element, Placement::Prepend) {
        out.push_str(&prepend.to_string());
    }
    out.push_str(&html);
    if let Some(append) = addon(element, Placement::Append) {
        out.push_str(&append.to_string());
    }
    out
}

/// Wrap the rendered control in its form group.
pub(super) fn render(element: &Element, html: String) -> String {
    let Some(components) = element.components() else {
        return html;
    };
    if !element.has_option("container") {
        return html;
    }
    let Some(container) = components.get("container") else {
        return html;
    };

    let mut container = container.to_node(element);
    container.clear();

    let label_mode = LabelMode::of(element);
    let label = match label_mode {
        LabelMode::Before => label_node(element),
        LabelMode::Absent | LabelMode::Inside => None,
    };
    let has_label = label.is_some();
    if let Some(label) = label {
        container.push(label);
    }

    match element.option("grid").and_then(OptionValue::as_grid) {
        Some(grid) => {
            let class = if has_label {
                grid.control.clone()
            } else {
                format!("{} {}", grid.label_offset(), grid.control)
            };
            let mut column = HtmlNode::new("div").with_class(class);
            render_control(element, components, html, label_mode, &mut column);
            container.push(column);
        }
        None => render_control(element, components, html, label_mode, &mut container),
    }

    if let Some(script) = element.validation_script() {
        container.push(script);
    }

    container.to_string()
}

/// Place addons, the control, help and error text into `target`.
fn render_control(
    element: &Element,
    components: &Components,
    html: String,
    label_mode: LabelMode,
    target: &mut HtmlNode,
) {
    let has_addon = [Placement::Prepend, Placement::Append]
        .iter()
        .any(|p| element.has_option(p.key()));
    let input_group = components
        .get("input-group")
        .filter(|_| has_addon && label_mode != LabelMode::Inside);

    let labeled = is_labeled_button(element);
    let mut parts: Vec<Markup> = Vec::new();

    if !labeled {
        parts.extend(addon(element, Placement::Prepend));
    }
    if label_mode == LabelMode::Inside {
        parts.push(inside_label(element, html));
    } else {
        parts.push(Markup::Raw(html));
    }
    if !labeled {
        parts.extend(addon(element, Placement::Append));
    }

    match input_group {
        Some(group) => {
            let mut group = group.to_node(element);
            group.extend(parts);
            target.push(group);
        }
        None => target.extend(parts),
    }

    if element.has_option("help") {
        if let Some(help) = components.get("help") {
            target.push(help.to_node(element));
        }
    }

    if let Some(error) = element.error() {
        let node = match components.get("error") {
            Some(component) => component.to_node(element),
            None => HtmlNode::new("span")
                .with_class("help-block error")
                .with_content(error),
        };
        target.push(node);
    }
}

/// The addon for `placement`, or `None` when the option carries no markup.
/// Content is passed through bare when there is no addon component or the
/// element gets no addon class.
fn addon(element: &Element, placement: Placement) -> Option<Markup> {
    let content = element.option(placement.key())?.to_markup()?;
    let component = element
        .component(placement.key())
        .filter(|_| addon_class(element, placement).is_some());
    let markup = match component {
        Some(component) => Markup::Node(component.to_node(element)),
        None => Markup::Raw(content),
    };
    Some(markup)
}

/// The label component bound to the control's id.
fn label_node(element: &Element) -> Option<HtmlNode> {
    let mut node = element.component("label")?.to_node(element);
    if let Some(id) = element.id() {
        node.set_attr("for", id);
    }
    Some(node)
}

/// The label component wrapping the control, caption after it.
fn inside_label(element: &Element, html: String) -> Markup {
    let Some(component) = element.component("label") else {
        return Markup::Raw(html);
    };
    let mut node = component.to_node(element);
    match label_text(element) {
        Some(text) => node.set_content(format!("{html} {text}")),
        None => node.set_content(html),
    }
    Markup::Node(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorator::bootstrap::apply::apply;
    use crate::elements::{checkbox, input, select, submit};
    use pretty_assertions::assert_eq;

    fn decorated(mut element: Element) -> Element {
        apply(&mut element);
        element
    }

    fn full(element: &Element) -> String {
        render(element, element.render_element())
    }

    #[test]
    fn label_mode_from_option() {
        assert_eq!(LabelMode::of(&input("a")), LabelMode::Absent);
        assert_eq!(LabelMode::of(&input("a").with_option("label", false)), LabelMode::Absent);
        assert_eq!(LabelMode::of(&input("a").with_option("label", true)), LabelMode::Before);
        assert_eq!(LabelMode::of(&input("a").with_option("label", "Name")), LabelMode::Before);
        assert_eq!(LabelMode::of(&input("a").with_option("label", "inside")), LabelMode::Inside);
    }

    #[test]
    fn plain_control_in_form_group() {
        let el = decorated(input("name"));
        assert_eq!(
            full(&el),
            "<div class=\"form-group\">\n\
             <input class=\"form-control\" type=\"text\" name=\"name\" id=\"name\">\n\
             </div>"
        );
    }

    #[test]
    fn without_container_option_control_is_bare() {
        let el = decorated(input("name").with_option("container", false));
        assert_eq!(
            full(&el),
            r#"<input class="form-control" type="text" name="name" id="name">"#
        );
    }

    #[test]
    fn label_then_control_then_help() {
        let el = decorated(
            input("name")
                .with_option("label", "Name")
                .with_option("help", "Enter full name"),
        );
        assert_eq!(
            full(&el),
            "<div class=\"form-group\">\n\
             <label class=\"control-label\" for=\"name\">Name</label>\n\
             <input class=\"form-control\" type=\"text\" name=\"name\" id=\"name\">\n\
             <span class=\"help-block\">Enter full name</span>\n\
             </div>"
        );
    }

    #[test]
    fn grid_with_label() {
        let el = decorated(
            input("name")
                .with_option("label", "Name")
                .with_option("grid", ["col-sm-2", "col-sm-10"]),
        );
        assert_eq!(
            full(&el),
            "<div class=\"form-group\">\n\
             <label class=\"control-label col-sm-2\" for=\"name\">Name</label>\n\
             <div class=\"col-sm-10\">\n\
             <input class=\"form-control\" type=\"text\" name=\"name\" id=\"name\">\n\
             </div>\n\
             </div>"
        );
    }

    #[test]
    fn grid_offset_when_label_inside() {
        let el = decorated(
            checkbox("remember")
                .with_option("label", "inside")
                .with_description("Remember me")
                .with_option("grid", ["col-sm-2", "col-sm-10"]),
        );
        assert_eq!(
            full(&el),
            "<div class=\"form-group\">\n\
             <div class=\"col-sm-offset-2 col-sm-10\">\n\
             <label><input type=\"checkbox\" name=\"remember\" id=\"remember\"> Remember me</label>\n\
             </div>\n\
             </div>"
        );
    }

    #[test]
    fn prepend_text_uses_input_group() {
        let el = decorated(input("price").with_option("prepend", "$"));
        assert_eq!(
            full(&el),
            "<div class=\"form-group\">\n\
             <div class=\"input-group\">\n\
             <span class=\"input-group-addon\">$</span>\n\
             <input class=\"form-control\" type=\"text\" name=\"price\" id=\"price\">\n\
             </div>\n\
             </div>"
        );
    }

    #[test]
    fn append_button_uses_input_group_btn() {
        let go = submit("Go");
        let el = decorated(input("q").with_option("append", go));
        let html = full(&el);
        assert!(html.contains(
            "<span class=\"input-group-btn\"><button type=\"submit\">Go</button></span>"
        ));
        assert!(html.contains("<div class=\"input-group\">"));
    }

    #[test]
    fn label_inside_skips_input_group() {
        let el = decorated(
            input("price")
                .with_option("prepend", "$")
                .with_option("label", "inside"),
        );
        let html = full(&el);
        assert!(!html.contains("input-group\""));
        assert!(html.contains("<span class=\"input-group-addon\">$</span>"));
    }

    #[test]
    fn error_adds_class_and_block() {
        let el = decorated(input("name").with_error("Required"));
        assert_eq!(
            full(&el),
            "<div class=\"form-group has-error\">\n\
             <input class=\"form-control\" type=\"text\" name=\"name\" id=\"name\">\n\
             <span class=\"help-block error\">Required</span>\n\
             </div>"
        );
    }

    #[test]
    fn validation_script_goes_last() {
        let mut el = decorated(input("name").with_option("help", "h"));
        el.set_validation_script("<script>check()</script>");
        let html = full(&el);
        assert!(html.ends_with(
            "<span class=\"help-block\">h</span>\n<script>check()</script>\n</div>"
        ));
    }

    #[test]
    fn select_prepend_passes_through_bare() {
        let el = decorated(select("unit").with_option("prepend", "kg"));
        let html = full(&el);
        assert!(html.contains("\nkg\n<select"));
    }

    #[test]
    fn labeled_button_folds_addons_into_content() {
        let el = decorated(
            submit("Save")
                .with_class("btn-labeled")
                .with_option("prepend", "<i class=\"glyphicon glyphicon-ok\"></i>")
                .with_option("append", "!"),
        );
        assert_eq!(
            render_content(&el, "Save".to_owned()),
            "<span class=\"btn-label\"><i class=\"glyphicon glyphicon-ok\"></i></span>\
             Save<span class=\"btn-label btn-label-right\">!</span>"
        );
    }

    #[test]
    fn plain_button_content_untouched() {
        let el = decorated(submit("Save").with_option("prepend", "x"));
        assert_eq!(render_content(&el, "Save".to_owned()), "Save");
    }

    #[test]
    fn plain_button_addons_pass_through_bare() {
        let el = decorated(
            submit("Save")
                .with_option("prepend", "<b>x</b>")
                .with_option("container", true),
        );
        assert_eq!(
            full(&el),
            "<div class=\"form-group\">\n\
             <b>x</b>\n\
             <button class=\"btn btn-default\" type=\"submit\">Save</button>\n\
             </div>"
        );
    }

    #[test]
    fn labeled_button_in_container_has_no_addon_spans_outside() {
        let el = decorated(
            submit("Save")
                .with_class("btn-labeled")
                .with_option("prepend", "+")
                .with_option("container", true),
        );
        let html = full(&el);
        assert!(html.starts_with("<div class=\"form-group\">\n<button"));
        assert_eq!(html.matches("btn-label\"").count(), 0);
    }
}
