//! Option values: flags, text, grid columns, nested elements.

use std::rc::Rc;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::node::Element;

/// Matches a `-<digits>` column width suffix (`col-sm-2` → `-2`).
static COLUMN_WIDTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-(\d+)\b").expect("column width pattern is valid"));

/// A two-column layout for horizontal forms: the label column class and
/// the control column class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub label: String,
    pub control: String,
}

impl Grid {
    pub fn new(label: impl Into<String>, control: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            control: control.into(),
        }
    }

    /// The label column class turned into an offset (`col-sm-2` →
    /// `col-sm-offset-2`), used when no label occupies the first column.
    pub fn label_offset(&self) -> String {
        COLUMN_WIDTH
            .replace_all(&self.label, "-offset-$1")
            .into_owned()
    }
}

/// The value of a named element option.
#[derive(Debug, Clone)]
pub enum OptionValue {
    Flag(bool),
    Text(String),
    Grid(Grid),
    /// A nested element, e.g. a button used as an input addon.
    Element(Rc<Element>),
}

impl OptionValue {
    /// Whether the option counts as "set". Empty text and `false` do not.
    pub fn is_truthy(&self) -> bool {
        match self {
            OptionValue::Flag(b) => *b,
            OptionValue::Text(s) => !s.is_empty(),
            OptionValue::Grid(_) | OptionValue::Element(_) => true,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_grid(&self) -> Option<&Grid> {
        match self {
            OptionValue::Grid(grid) => Some(grid),
            _ => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            OptionValue::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Render the value as markup: text verbatim, elements through their
    /// own render pipeline. Flags and grids have no markup.
    pub fn to_markup(&self) -> Option<String> {
        match self {
            OptionValue::Text(s) if !s.is_empty() => Some(s.clone()),
            OptionValue::Element(element) => Some(element.render()),
            _ => None,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Flag(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<Grid> for OptionValue {
    fn from(value: Grid) -> Self {
        OptionValue::Grid(value)
    }
}

impl From<Element> for OptionValue {
    fn from(value: Element) -> Self {
        OptionValue::Element(Rc::new(value))
    }
}

impl From<[&str; 2]> for OptionValue {
    fn from([label, control]: [&str; 2]) -> Self {
        OptionValue::Grid(Grid::new(label, control))
    }
}
