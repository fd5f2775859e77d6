//! Element classification and per-kind fill procedure.

use std::sync::Arc;

use tracing::debug;

use autoapply_dom::{ElementNode, HighlightKind, Page, PageTree};

use crate::config::EngineConfig;
use crate::dates::normalize_date;

/// What kind of control an element is, derived from tag and `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Text,
    Email,
    Tel,
    Url,
    Number,
    Search,
    Radio,
    Checkbox,
    Date,
    Select,
    TextArea,
    ContentEditable,
    Unsupported,
}

impl ControlKind {
    /// Kinds that take a string value verbatim.
    pub fn is_text_like(&self) -> bool {
        matches!(
            self,
            ControlKind::Text
                | ControlKind::Email
                | ControlKind::Tel
                | ControlKind::Url
                | ControlKind::Number
                | ControlKind::Search
                | ControlKind::TextArea
        )
    }
}

/// Classify an element by tag name and, for inputs, the `type` attribute.
pub fn control_kind(node: &ElementNode) -> ControlKind {
    if node.attributes.content_editable {
        return ControlKind::ContentEditable;
    }
    match node.tag_name.as_str() {
        "select" => ControlKind::Select,
        "textarea" => ControlKind::TextArea,
        "input" => match node.input_type().as_str() {
            "text" => ControlKind::Text,
            "email" => ControlKind::Email,
            "tel" => ControlKind::Tel,
            "url" => ControlKind::Url,
            "number" => ControlKind::Number,
            "search" => ControlKind::Search,
            "radio" => ControlKind::Radio,
            "checkbox" => ControlKind::Checkbox,
            "date" => ControlKind::Date,
            _ => ControlKind::Unsupported,
        },
        _ => ControlKind::Unsupported,
    }
}

/// Whether an element is attached, has a rendered size, and is not hidden
/// by its computed style. Always computed against the live tree; pages
/// mutate, so visibility is never cached.
pub fn is_visible(tree: &PageTree, id: &str) -> bool {
    let Some(node) = tree.get(id) else {
        return false;
    };
    node.offset_width > 0.0 && node.offset_height > 0.0 && !node.style.hides()
}

/// Visible and of a kind the fill procedure can write to.
pub fn is_fillable(tree: &PageTree, id: &str) -> bool {
    if !is_visible(tree, id) {
        return false;
    }
    tree.get(id)
        .map(|node| control_kind(node) != ControlKind::Unsupported)
        .unwrap_or(false)
}

/// A value to write into a control.
#[derive(Debug, Clone)]
pub enum FillValue {
    Text(String),
    Toggle(bool),
}

impl FillValue {
    pub fn text(value: impl Into<String>) -> Self {
        FillValue::Text(value.into())
    }

    fn as_text(&self) -> Option<&str> {
        match self {
            FillValue::Text(text) => Some(text),
            FillValue::Toggle(_) => None,
        }
    }

    /// Checkbox coercion: true, "true", "1" and "yes" check the box;
    /// anything else unchecks it.
    fn truthy(&self) -> bool {
        match self {
            FillValue::Toggle(flag) => *flag,
            FillValue::Text(text) => matches!(text.as_str(), "true" | "1" | "yes"),
        }
    }
}

/// Write a value into an element according to its control kind.
///
/// Returns false on any miss (hidden element, unsupported kind, no radio
/// label match, no select option match) without mutating the element. On
/// success, dispatches synthetic input/change notifications and applies
/// the transient "filled" highlight.
pub fn fill_control(page: &Arc<Page>, id: &str, value: &FillValue, config: &EngineConfig) -> bool {
    let kind = {
        let tree = page.tree();
        if !is_visible(&tree, id) {
            return false;
        }
        match tree.get(id) {
            Some(node) => control_kind(node),
            None => return false,
        }
    };

    match kind {
        kind if kind.is_text_like() => {
            let Some(text) = value.as_text() else {
                return false;
            };
            write_value(page, id, text, config)
        }
        ControlKind::Date => {
            let Some(text) = value.as_text() else {
                return false;
            };
            write_value(page, id, &normalize_date(text), config)
        }
        ControlKind::Radio => fill_radio(page, id, value, config),
        ControlKind::Checkbox => {
            let checked = value.truthy();
            if page.set_checked(id, checked).is_err() {
                return false;
            }
            finish(page, id, config);
            true
        }
        ControlKind::Select => fill_select(page, id, value, config),
        ControlKind::ContentEditable => {
            let Some(text) = value.as_text() else {
                return false;
            };
            if page.set_text(id, text).is_err() {
                return false;
            }
            finish(page, id, config);
            true
        }
        _ => false,
    }
}

fn write_value(page: &Arc<Page>, id: &str, value: &str, config: &EngineConfig) -> bool {
    if page.set_value(id, value).is_err() {
        return false;
    }
    finish(page, id, config);
    true
}

/// Select the radio in the element's group whose label text contains the
/// value. A miss leaves every radio in the group untouched.
fn fill_radio(page: &Arc<Page>, id: &str, value: &FillValue, config: &EngineConfig) -> bool {
    let Some(wanted) = value.as_text() else {
        return false;
    };
    let wanted = wanted.to_lowercase();

    let chosen = {
        let tree = page.tree();
        let Some(group) = tree.get(id).and_then(|n| n.attributes.name.clone()) else {
            return false;
        };
        tree.radio_group(&group).into_iter().find(|radio| {
            tree.label_for(radio)
                .map(|label| tree.inner_text(&label).to_lowercase().contains(&wanted))
                .unwrap_or(false)
        })
    };

    match chosen {
        Some(radio) => {
            if page.set_checked(&radio, true).is_err() {
                return false;
            }
            finish(page, &radio, config);
            true
        }
        None => {
            debug!("no radio label matched {:?}", wanted);
            false
        }
    }
}

/// Two-pass option match: exact value/text first, then substring. The
/// first matching option in document order wins.
fn fill_select(page: &Arc<Page>, id: &str, value: &FillValue, config: &EngineConfig) -> bool {
    let Some(wanted) = value.as_text() else {
        return false;
    };
    let wanted = wanted.to_lowercase();

    let index = {
        let tree = page.tree();
        let Some(node) = tree.get(id) else {
            return false;
        };
        let exact = node.options.iter().position(|option| {
            option.value.to_lowercase() == wanted || option.text.to_lowercase() == wanted
        });
        exact.or_else(|| {
            node.options.iter().position(|option| {
                option.value.to_lowercase().contains(&wanted)
                    || option.text.to_lowercase().contains(&wanted)
            })
        })
    };

    match index {
        Some(index) => {
            if page.select_index(id, index).is_err() {
                return false;
            }
            finish(page, id, config);
            true
        }
        None => false,
    }
}

fn finish(page: &Arc<Page>, id: &str, config: &EngineConfig) {
    page.notify_changed(id);
    if let Err(error) = page.apply_highlight(id, HighlightKind::Filled, config.highlight_duration) {
        debug!("highlight failed for {}: {}", id, error);
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
