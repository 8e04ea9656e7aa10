//! Bootstrap 3 decorator.
//!
//! Adds Bootstrap classes to every element of a tree (`btn`, `form-control`,
//! `form-group`, `control-label`, ...) and wraps controls in form groups with
//! labels, grid columns, input groups, help and error blocks. Optionally uses
//! Jasny Bootstrap features (labeled buttons, file inputs).

mod apply;
pub mod classify;
pub mod icon;
mod render;

use std::any::Any;
use std::rc::Rc;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::decorator::Decorator;
use crate::element::Element;
use crate::elements;
use crate::error::{FormError, FormResult};
use crate::registry::Registry;

pub use classify::{is_button, Placement, Subject};
pub use icon::{default_fontset, icon, set_default_fontset};

/// The only Bootstrap major version this decorator produces markup for.
pub const SUPPORTED_VERSION: u32 = 3;

/// Decorator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Bootstrap major version in use. Accepts a number or a numeric string
    /// (`3` or `"3"`).
    #[serde(deserialize_with = "lenient_version")]
    pub version: Option<u32>,
}

/// A version as it may appear in configuration files.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawVersion {
    Number(u32),
    Text(String),
}

fn lenient_version<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawVersion>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawVersion::Number(version)) => Ok(Some(version)),
        Some(RawVersion::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid Bootstrap version `{text}`"))),
    }
}

impl BootstrapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the version (builder).
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }
}

/// The Bootstrap decorator. Deep: attaching it to a group decorates every
/// descendant.
#[derive(Debug, Clone)]
pub struct Bootstrap {
    version: u32,
}

impl Bootstrap {
    /// Build the decorator.
    ///
    /// A missing version logs a warning and assumes version 3. Any other
    /// version is refused.
    pub fn new(config: BootstrapConfig) -> FormResult<Self> {
        match config.version {
            None => {
                tracing::warn!(
                    "no Bootstrap version specified, assuming version {}",
                    SUPPORTED_VERSION
                );
            }
            Some(version) if version != SUPPORTED_VERSION => {
                return Err(FormError::UnsupportedVersion {
                    requested: version,
                    supported: SUPPORTED_VERSION,
                });
            }
            Some(_) => {}
        }
        Ok(Self {
            version: SUPPORTED_VERSION,
        })
    }

    /// Build the decorator behind an `Rc`, ready to attach to elements.
    pub fn shared(config: BootstrapConfig) -> FormResult<Rc<dyn Decorator>> {
        Ok(Rc::new(Self::new(config)?))
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Register the `bootstrap` decorator and the `bootstrap/fileinput` and
    /// `bootstrap/imageinput` element types.
    pub fn register(registry: &mut Registry) {
        registry.register_decorator("bootstrap", |options| {
            let config = if options.is_null() {
                BootstrapConfig::default()
            } else {
                serde_json::from_value(options.clone())?
            };
            Bootstrap::shared(config)
        });
        registry.register_element("bootstrap/fileinput", fileinput);
        registry.register_element("bootstrap/imageinput", imageinput);
    }
}

impl Decorator for Bootstrap {
    fn name(&self) -> &str {
        "bootstrap"
    }

    fn is_deep(&self) -> bool {
        true
    }

    fn apply(&self, element: &mut Element) {
        apply::apply(element);
    }

    fn render_content(&self, element: &Element, html: String) -> String {
        render::render_content(element, html)
    }

    fn render(&self, element: &Element, html: String) -> String {
        render::render(element, html)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A file input marked for the Jasny file-input widget.
pub fn fileinput(name: &str) -> Element {
    elements::file(name)
        .with_attr("data-provides", "fileinput")
        .with_option("fileinput", "file")
}

/// An image file input marked for the Jasny file-input widget.
pub fn imageinput(name: &str) -> Element {
    elements::file(name)
        .with_attr("accept", "image/*")
        .with_attr("data-provides", "fileinput")
        .with_option("fileinput", "image")
}
