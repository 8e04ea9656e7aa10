//! Decorators: framework-specific presentation policies for elements.

pub mod bootstrap;
pub mod traits;

pub use bootstrap::{Bootstrap, BootstrapConfig};
pub use traits::Decorator;
