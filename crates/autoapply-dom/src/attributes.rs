//! Node attributes, computed style, and select options.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Attributes extracted from a page element. Only the attributes the
/// matching heuristics look at are modeled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeAttributes {
    /// Element `id` attribute (distinct from the node handle).
    pub id: Option<String>,
    /// Class names, space separated.
    pub class: Option<String>,
    /// `name` attribute.
    pub name: Option<String>,
    /// `type` attribute for inputs.
    pub r#type: Option<String>,
    /// Placeholder text.
    pub placeholder: Option<String>,
    /// Current value for inputs and textareas.
    pub value: Option<String>,
    /// ARIA role.
    pub role: Option<String>,
    /// `aria-label`.
    pub aria_label: Option<String>,
    /// The vendor's `data-automation-id`.
    pub automation_id: Option<String>,
    /// `for` attribute on labels.
    pub for_id: Option<String>,
    /// Whether the element is content-editable.
    pub content_editable: bool,
    /// Remaining data attributes.
    pub data: HashMap<String, String>,
}

impl NodeAttributes {
    /// Case-insensitive substring test against the class list.
    pub fn class_contains(&self, term: &str) -> bool {
        self.class
            .as_deref()
            .map(|c| c.to_lowercase().contains(&term.to_lowercase()))
            .unwrap_or(false)
    }
}

/// Computed style values relevant for visibility and highlighting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputedStyle {
    pub display: String,
    pub visibility: String,
    pub opacity: String,
    pub border: String,
    pub background_color: String,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            display: "block".to_string(),
            visibility: "visible".to_string(),
            opacity: "1".to_string(),
            border: String::new(),
            background_color: String::new(),
        }
    }
}

impl ComputedStyle {
    /// Whether these style values hide the element.
    pub fn hides(&self) -> bool {
        self.display == "none" || self.visibility == "hidden" || self.opacity == "0"
    }
}

/// One option of a select control.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }
}
