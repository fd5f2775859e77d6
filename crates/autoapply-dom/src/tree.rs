//! Page tree: document-order traversal, containers, label association.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::node::ElementNode;

/// Grouping containers recognized when walking up from a field.
const CONTAINER_CLASSES: [&str; 2] = ["form-row", "form-group"];

/// Parent levels to ascend when no recognized container is found.
const CONTAINER_CLIMB: usize = 3;

/// A snapshot of the hosting page as a tree of [`ElementNode`]s.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageTree {
    /// Page URL, used for target-page recognition.
    pub url: String,
    /// Page title.
    pub title: String,
    /// Root node handles, document order.
    pub roots: Vec<String>,
    /// All nodes indexed by handle.
    pub nodes: HashMap<String, ElementNode>,
}

impl PageTree {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Attach a node under `parent` (or as a root) and return its handle.
    pub fn attach(&mut self, mut node: ElementNode, parent: Option<&str>) -> String {
        let id = node.id.clone();
        match parent {
            Some(parent_id) => {
                node.parent_id = Some(parent_id.to_string());
                if let Some(parent_node) = self.nodes.get_mut(parent_id) {
                    parent_node.children.push(id.clone());
                }
            }
            None => {
                node.parent_id = None;
                self.roots.push(id.clone());
            }
        }
        self.nodes.insert(id.clone(), node);
        id
    }

    /// Detach a node (and its subtree) from the tree.
    pub fn remove(&mut self, id: &str) {
        let Some(node) = self.nodes.remove(id) else {
            return;
        };
        match &node.parent_id {
            Some(parent_id) => {
                if let Some(parent) = self.nodes.get_mut(parent_id) {
                    parent.children.retain(|child| child != id);
                }
            }
            None => self.roots.retain(|root| root != id),
        }
        for child in node.children {
            self.remove(&child);
        }
    }

    pub fn get(&self, id: &str) -> Option<&ElementNode> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut ElementNode> {
        self.nodes.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// All node handles in document order (depth-first from the roots).
    pub fn document_order(&self) -> Vec<String> {
        let mut order = Vec::with_capacity(self.nodes.len());
        for root in &self.roots {
            self.walk(root, &mut order);
        }
        order
    }

    fn walk(&self, id: &str, out: &mut Vec<String>) {
        if let Some(node) = self.nodes.get(id) {
            out.push(id.to_string());
            for child in &node.children {
                self.walk(child, out);
            }
        }
    }

    /// Descendant handles of `scope` in document order, excluding `scope`.
    pub fn descendants(&self, scope: &str) -> Vec<String> {
        let mut order = Vec::new();
        if let Some(node) = self.nodes.get(scope) {
            for child in &node.children {
                self.walk(child, &mut order);
            }
        }
        order
    }

    /// Handles searched by a query: the whole document, or a scope's
    /// descendants when a section restricts the search.
    pub fn scope_ids(&self, scope: Option<&str>) -> Vec<String> {
        match scope {
            Some(scope) => self.descendants(scope),
            None => self.document_order(),
        }
    }

    /// Ancestor handles from the immediate parent upward.
    pub fn ancestors(&self, id: &str) -> Vec<String> {
        let mut out = Vec::new();
        let mut current = self.nodes.get(id).and_then(|n| n.parent_id.clone());
        while let Some(ancestor_id) = current {
            current = self.nodes.get(&ancestor_id).and_then(|n| n.parent_id.clone());
            out.push(ancestor_id);
        }
        out
    }

    /// Whether `candidate` is `id` itself or one of its ancestors.
    pub fn is_within(&self, id: &str, candidate: &str) -> bool {
        id == candidate || self.ancestors(id).iter().any(|a| a == candidate)
    }

    /// Full text of a subtree: direct text plus descendant text.
    pub fn inner_text(&self, id: &str) -> String {
        let mut parts = Vec::new();
        if let Some(node) = self.nodes.get(id) {
            if !node.text.is_empty() {
                parts.push(node.text.clone());
            }
        }
        for descendant in self.descendants(id) {
            if let Some(node) = self.nodes.get(&descendant) {
                if !node.text.is_empty() {
                    parts.push(node.text.clone());
                }
            }
        }
        parts.join(" ")
    }

    /// Walk up from a field to the nearest recognized grouping container:
    /// fieldset, ARIA group, or a row/form-group class. Falls back to
    /// ascending a fixed number of div levels.
    pub fn closest_container(&self, id: &str) -> Option<String> {
        for ancestor_id in self.ancestors(id) {
            let Some(ancestor) = self.nodes.get(&ancestor_id) else {
                continue;
            };
            if ancestor.tag_name == "fieldset"
                || ancestor.attributes.role.as_deref() == Some("group")
                || CONTAINER_CLASSES
                    .iter()
                    .any(|class| ancestor.attributes.class_contains(class))
            {
                return Some(ancestor_id);
            }
        }

        // No recognized container; go up several div levels instead.
        let mut current = self.nodes.get(id).and_then(|n| n.parent_id.clone())?;
        for _ in 0..CONTAINER_CLIMB {
            let Some(node) = self.nodes.get(&current) else {
                break;
            };
            if node.tag_name != "div" {
                break;
            }
            match &node.parent_id {
                Some(parent) => current = parent.clone(),
                None => break,
            }
        }
        Some(current)
    }

    /// Find a node by its `id` attribute.
    pub fn by_dom_id(&self, dom_id: &str) -> Option<String> {
        self.document_order().into_iter().find(|handle| {
            self.nodes
                .get(handle)
                .and_then(|n| n.dom_id())
                .map(|d| d == dom_id)
                .unwrap_or(false)
        })
    }

    /// All radio inputs sharing a group name, document order.
    pub fn radio_group(&self, group: &str) -> Vec<String> {
        self.document_order()
            .into_iter()
            .filter(|handle| {
                self.nodes
                    .get(handle)
                    .map(|n| {
                        n.tag_name == "input"
                            && n.input_type() == "radio"
                            && n.attributes.name.as_deref() == Some(group)
                    })
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Find the label associated with a form element: `for` attribute
    /// association first, then the parent's labels, then the labels of the
    /// closest grouping container.
    pub fn label_for(&self, control_id: &str) -> Option<String> {
        let control = self.nodes.get(control_id)?;
        if let Some(dom_id) = control.dom_id() {
            for handle in self.document_order() {
                let Some(node) = self.nodes.get(&handle) else {
                    continue;
                };
                if node.tag_name == "label" && node.attributes.for_id.as_deref() == Some(dom_id) {
                    return Some(handle);
                }
            }
        }

        if let Some(parent_id) = &control.parent_id {
            if let Some(label) = self.first_label_under(parent_id) {
                return Some(label);
            }
        }

        let container = self.closest_container(control_id)?;
        self.first_label_under(&container)
    }

    fn first_label_under(&self, scope: &str) -> Option<String> {
        self.descendants(scope).into_iter().find(|handle| {
            self.nodes
                .get(handle)
                .map(|n| n.tag_name == "label")
                .unwrap_or(false)
        })
    }

    /// Resolve a label to the input it describes: `for` attribute first,
    /// then following siblings, then the parent's first control, then the
    /// closest container's first control.
    pub fn label_target(&self, label_id: &str) -> Option<String> {
        let label = self.nodes.get(label_id)?;

        if let Some(for_id) = &label.attributes.for_id {
            if let Some(target) = self.by_dom_id(for_id) {
                return Some(target);
            }
        }

        if let Some(parent_id) = &label.parent_id {
            if let Some(parent) = self.nodes.get(parent_id) {
                let position = parent.children.iter().position(|c| c == label_id);
                if let Some(position) = position {
                    for sibling in &parent.children[position + 1..] {
                        if let Some(node) = self.nodes.get(sibling) {
                            if node.is_form_control() {
                                return Some(sibling.clone());
                            }
                        }
                    }
                }
            }
            if let Some(control) = self.first_control_under(parent_id) {
                return Some(control);
            }
        }

        let container = self.closest_container(label_id)?;
        self.first_control_under(&container)
    }

    /// First form control under a scope, document order.
    pub fn first_control_under(&self, scope: &str) -> Option<String> {
        self.descendants(scope).into_iter().find(|handle| {
            self.nodes
                .get(handle)
                .map(|n| n.is_form_control())
                .unwrap_or(false)
        })
    }

    /// Count of form controls under a scope.
    pub fn control_count(&self, scope: &str) -> usize {
        self.descendants(scope)
            .iter()
            .filter(|handle| {
                self.nodes
                    .get(*handle)
                    .map(|n| n.is_form_control())
                    .unwrap_or(false)
            })
            .count()
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
