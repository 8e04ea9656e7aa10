//! Test helpers: a ready-made Bootstrap decorator and markup probes.
//!
//! Use [`decorated`] to attach Bootstrap to an element and the functions in
//! [`markup`] to pick classes and tags out of rendered HTML without
//! hand-matching whole strings.

pub mod markup;

use std::rc::Rc;

use crate::decorator::{Bootstrap, BootstrapConfig, Decorator};
use crate::element::Element;

pub use markup::{class_of, count_tag, has_class};

/// A Bootstrap 3 decorator behind an `Rc`.
pub fn bootstrap() -> Rc<dyn Decorator> {
    Bootstrap::shared(BootstrapConfig::new().with_version(3)).expect("version 3 is supported")
}

/// `element` with a fresh Bootstrap 3 decorator attached.
pub fn decorated(element: Element) -> Element {
    element.with_decorator(bootstrap())
}
