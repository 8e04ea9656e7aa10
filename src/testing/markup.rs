//! Probes over rendered HTML.
//!
//! These look at opening tags only and assume the double-quoted attribute
//! style [`HtmlNode`](crate::html::HtmlNode) writes.

use std::sync::LazyLock;

use regex::Regex;

static OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<([a-zA-Z][a-zA-Z0-9-]*)([^>]*)>").expect("open tag pattern is valid")
});

static CLASS_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bclass="([^"]*)""#).expect("class pattern is valid"));

/// Opening tags of `tag` in document order, as attribute strings.
fn open_tags<'a>(html: &'a str, tag: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    OPEN_TAG.captures_iter(html).filter_map(move |caps| {
        let name = caps.get(1)?.as_str();
        name.eq_ignore_ascii_case(tag)
            .then(|| caps.get(2).map_or("", |m| m.as_str()))
    })
}

/// The class attribute of the first `tag` element, if it has one.
///
/// ```ignore
/// assert_eq!(class_of(r#"<div class="form-group">"#, "div"), Some("form-group".into()));
/// ```
pub fn class_of(html: &str, tag: &str) -> Option<String> {
    let attrs = open_tags(html, tag).next()?;
    CLASS_ATTR
        .captures(attrs)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
}

/// Whether the first `tag` element carries `class` among its classes.
pub fn has_class(html: &str, tag: &str, class: &str) -> bool {
    class_of(html, tag).is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
}

/// Number of opening `tag` elements.
pub fn count_tag(html: &str, tag: &str) -> usize {
    open_tags(html, tag).count()
}
