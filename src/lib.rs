//! # formwork
//!
//! Form element rendering with pluggable presentation decorators.
//!
//! Elements (inputs, selects, textareas, buttons, groups) carry their own
//! attributes, options and child elements. A [`Decorator`] attached to an
//! element adds framework classes and structural wrappers; the bundled
//! [`Bootstrap`] decorator produces Bootstrap 3 form markup.
//!
//! ```ignore
//! use formwork::elements::{email, fieldset, submit};
//! use formwork::{Bootstrap, BootstrapConfig};
//!
//! let bootstrap = Bootstrap::shared(BootstrapConfig::new().with_version(3))?;
//! let form = fieldset("Sign in")
//!     .with_child(email("email").with_option("label", "Email"))
//!     .with_child(submit("Go").with_option("btn", "primary"))
//!     .with_decorator(bootstrap);
//! println!("{form}");
//! ```
//!
//! ## Modules
//!
//! - **[`element`]**: Element model: options, deferred classes, components, tree queries
//! - **[`elements`]**: Constructors for the built-in element kinds
//! - **[`decorator`]**: Decorator trait and the Bootstrap decorator
//! - **[`html`]**: Markup nodes and serialization
//! - **[`registry`]**: Decorators and element types by string key
//! - **[`testing`]**: Helpers for asserting on rendered markup

// Markup
pub mod html;

// Element model
pub mod element;
pub mod elements;

// Presentation
pub mod decorator;
pub mod registry;

pub mod error;
pub mod testing;

pub use decorator::{Bootstrap, BootstrapConfig, Decorator};
pub use element::{Element, Grid, Kind, OptionValue};
pub use error::{FormError, FormResult};
pub use registry::Registry;

// Proc macros (feature-gated)
#[cfg(feature = "macros")]
pub use formwork_macros::form;
