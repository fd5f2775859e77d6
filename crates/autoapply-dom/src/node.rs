//! Element nodes and constructor helpers.

use serde::{Deserialize, Serialize};

use crate::attributes::{ComputedStyle, NodeAttributes, SelectOption};

/// One element of the page snapshot.
///
/// The `id` field is the node handle, unique within a tree; the element's
/// own `id` attribute lives in [`NodeAttributes`]. Helpers default every
/// node to a visible rendered size so snapshots stay terse; hidden elements
/// opt in via [`ElementNode::hidden`] or zeroed offsets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementNode {
    /// Node handle, unique within the tree.
    pub id: String,

    /// Tag name, lowercase.
    pub tag_name: String,

    /// Attributes the heuristics read.
    pub attributes: NodeAttributes,

    /// Direct text content (not including children).
    pub text: String,

    /// Computed style values.
    pub style: ComputedStyle,

    /// Rendered width in pixels; zero means not laid out.
    pub offset_width: f64,

    /// Rendered height in pixels.
    pub offset_height: f64,

    /// Checked state for radios and checkboxes.
    pub checked: bool,

    /// Options for select controls.
    pub options: Vec<SelectOption>,

    /// Selected option index for select controls.
    pub selected_index: Option<usize>,

    /// Parent node handle.
    pub parent_id: Option<String>,

    /// Child node handles, document order.
    pub children: Vec<String>,
}

impl Default for ElementNode {
    fn default() -> Self {
        Self {
            id: String::new(),
            tag_name: "div".to_string(),
            attributes: NodeAttributes::default(),
            text: String::new(),
            style: ComputedStyle::default(),
            offset_width: 120.0,
            offset_height: 24.0,
            checked: false,
            options: Vec::new(),
            selected_index: None,
            parent_id: None,
            children: Vec::new(),
        }
    }
}

impl ElementNode {
    pub fn new(id: impl Into<String>, tag_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag_name: tag_name.into().to_lowercase(),
            ..Default::default()
        }
    }

    /// Input element; the node handle doubles as the `id` attribute.
    pub fn input(id: impl Into<String>, input_type: &str) -> Self {
        let id = id.into();
        let mut node = Self::new(id.clone(), "input");
        node.attributes.id = Some(id);
        node.attributes.r#type = Some(input_type.to_string());
        node
    }

    pub fn text_input(id: impl Into<String>) -> Self {
        Self::input(id, "text")
    }

    pub fn checkbox(id: impl Into<String>) -> Self {
        Self::input(id, "checkbox")
    }

    pub fn radio(id: impl Into<String>, group: &str) -> Self {
        let mut node = Self::input(id, "radio");
        node.attributes.name = Some(group.to_string());
        node
    }

    pub fn date_input(id: impl Into<String>) -> Self {
        Self::input(id, "date")
    }

    pub fn textarea(id: impl Into<String>) -> Self {
        let id = id.into();
        let mut node = Self::new(id.clone(), "textarea");
        node.attributes.id = Some(id);
        node
    }

    pub fn select(id: impl Into<String>, options: &[(&str, &str)]) -> Self {
        let id = id.into();
        let mut node = Self::new(id.clone(), "select");
        node.attributes.id = Some(id);
        node.options = options
            .iter()
            .map(|(value, text)| SelectOption::new(*value, *text))
            .collect();
        node
    }

    pub fn button(id: impl Into<String>, caption: &str) -> Self {
        let id = id.into();
        let mut node = Self::new(id.clone(), "button");
        node.attributes.id = Some(id);
        node.text = caption.to_string();
        node
    }

    pub fn label(id: impl Into<String>, for_id: Option<&str>, text: &str) -> Self {
        let mut node = Self::new(id, "label");
        node.attributes.for_id = for_id.map(str::to_string);
        node.text = text.to_string();
        node
    }

    /// Container element; mirrors the handle into the `id` attribute like
    /// the control constructors, so id-based heuristics see it.
    pub fn container(id: impl Into<String>) -> Self {
        let id = id.into();
        let mut node = Self::new(id.clone(), "div");
        node.attributes.id = Some(id);
        node.offset_width = 600.0;
        node.offset_height = 400.0;
        node
    }

    pub fn fieldset(id: impl Into<String>) -> Self {
        let id = id.into();
        let mut node = Self::new(id.clone(), "fieldset");
        node.attributes.id = Some(id);
        node.offset_width = 600.0;
        node.offset_height = 400.0;
        node
    }

    pub fn legend(id: impl Into<String>, text: &str) -> Self {
        let mut node = Self::new(id, "legend");
        node.text = text.to_string();
        node
    }

    pub fn heading(id: impl Into<String>, level: u8, text: &str) -> Self {
        let mut node = Self::new(id, format!("h{}", level.clamp(1, 6)));
        node.text = text.to_string();
        node
    }

    // Builder-style modifiers, used by snapshots and tests.

    pub fn with_name(mut self, name: &str) -> Self {
        self.attributes.name = Some(name.to_string());
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.attributes.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn with_aria_label(mut self, label: &str) -> Self {
        self.attributes.aria_label = Some(label.to_string());
        self
    }

    pub fn with_automation_id(mut self, automation_id: &str) -> Self {
        self.attributes.automation_id = Some(automation_id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.attributes.class = Some(class.to_string());
        self
    }

    pub fn with_role(mut self, role: &str) -> Self {
        self.attributes.role = Some(role.to_string());
        self
    }

    pub fn content_editable(mut self) -> Self {
        self.attributes.content_editable = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.style.display = "none".to_string();
        self
    }

    /// Whether this is a form control (input, select, or textarea).
    pub fn is_form_control(&self) -> bool {
        matches!(self.tag_name.as_str(), "input" | "select" | "textarea")
    }

    /// Whether this behaves as a button (tag or ARIA role).
    pub fn is_button_like(&self) -> bool {
        self.tag_name == "button" || self.attributes.role.as_deref() == Some("button")
    }

    /// Lowercased `type` attribute for inputs, defaulting to "text".
    pub fn input_type(&self) -> String {
        self.attributes
            .r#type
            .as_deref()
            .unwrap_or("text")
            .to_lowercase()
    }

    /// The element's own `id` attribute, if any.
    pub fn dom_id(&self) -> Option<&str> {
        self.attributes.id.as_deref()
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
