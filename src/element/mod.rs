//! Element model: attributes, options, deferred class lists, components and
//! tree queries.

pub mod class;
pub mod component;
pub mod node;
pub mod query;
pub mod value;

pub use class::{ClassContext, ClassEntry, ClassFn, ClassList};
pub use component::{Component, ComponentId, Components, Content, ContentFn};
pub use node::{Choice, Element, Kind};
pub use value::{Grid, OptionValue};

pub use crate::html::AttrValue;
