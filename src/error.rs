//! Crate error type.

use thiserror::Error;

/// Result alias used throughout formwork.
pub type FormResult<T> = Result<T, FormError>;

/// Errors raised while building decorators, registering components, or
/// resolving registry keys.
///
/// Rendering itself never fails: an element that lacks a capability simply
/// renders without the corresponding markup.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("only Bootstrap version {supported} is supported, got version {requested}")]
    UnsupportedVersion { requested: u32, supported: u32 },

    #[error("invalid decorator configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("component `{key}` is already registered with a different tag or attributes")]
    ComponentConflict { key: String },

    #[error("element of kind {kind} does not own components")]
    NoComponents { kind: &'static str },

    #[error("unknown decorator `{0}`")]
    UnknownDecorator(String),

    #[error("unknown element type `{0}`")]
    UnknownElement(String),
}
