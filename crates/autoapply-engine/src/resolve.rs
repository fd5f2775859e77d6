//! Field resolution: catalog strategies evaluated against a scope.
//!
//! Resolution crosses each strategy of a field's ladder with the field's
//! synonym terms, restricted to the whole document or one section. Within
//! a strategy the first candidate passing the fillability check wins, and
//! the first strategy producing such a candidate ends the search. All
//! attribute matching is case-insensitive; deployments disagree on casing.

use autoapply_dom::PageTree;
use autoapply_protocols::FieldKey;

use crate::catalog::{self, Strategy};
use crate::classify;

/// Resolve a canonical field to an element handle within a scope.
pub fn resolve(tree: &PageTree, key: FieldKey, scope: Option<&str>) -> Option<String> {
    resolve_terms(tree, catalog::strategies_for(key), key.terms(), scope)
}

/// Resolve using an explicit strategy ladder and term list.
pub fn resolve_terms(
    tree: &PageTree,
    strategies: &[Strategy],
    terms: &[&str],
    scope: Option<&str>,
) -> Option<String> {
    for strategy in strategies {
        for term in terms {
            if let Some(found) = apply_strategy(tree, *strategy, term, scope) {
                return Some(found);
            }
        }
    }
    None
}

fn apply_strategy(
    tree: &PageTree,
    strategy: Strategy,
    term: &str,
    scope: Option<&str>,
) -> Option<String> {
    let term_lower = term.to_lowercase();
    let ids = tree.scope_ids(scope);

    match strategy {
        Strategy::LabelFor => {
            return labels_matching(tree, &ids, |node| {
                attr_contains(node.attributes.for_id.as_deref(), &term_lower)
            })
            .into_iter()
            .find_map(|label| fillable_label_target(tree, &label));
        }
        Strategy::LabelText => {
            return labels_matching(tree, &ids, |node| {
                tree.inner_text(&node.id).to_lowercase().contains(&term_lower)
            })
            .into_iter()
            .find_map(|label| fillable_label_target(tree, &label));
        }
        _ => {}
    }

    ids.into_iter()
        .filter(|id| {
            let Some(node) = tree.get(id) else {
                return false;
            };
            match strategy {
                Strategy::ExactId => attr_equals(node.dom_id(), &term_lower),
                Strategy::IdContains => attr_contains(node.dom_id(), &term_lower),
                Strategy::ExactName => attr_equals(node.attributes.name.as_deref(), &term_lower),
                Strategy::NameContains => {
                    attr_contains(node.attributes.name.as_deref(), &term_lower)
                }
                Strategy::TypeEquals(input_type) => {
                    node.tag_name == "input" && node.input_type() == input_type
                }
                Strategy::PlaceholderContains => {
                    attr_contains(node.attributes.placeholder.as_deref(), &term_lower)
                }
                Strategy::AriaLabelContains => {
                    attr_contains(node.attributes.aria_label.as_deref(), &term_lower)
                }
                Strategy::AutomationIdContains => {
                    attr_contains(node.attributes.automation_id.as_deref(), &term_lower)
                }
                Strategy::LabelFor | Strategy::LabelText => false,
            }
        })
        .find(|id| classify::is_fillable(tree, id))
}

fn labels_matching(
    tree: &PageTree,
    ids: &[String],
    pred: impl Fn(&autoapply_dom::ElementNode) -> bool,
) -> Vec<String> {
    ids.iter()
        .filter(|id| {
            tree.get(id)
                .map(|node| node.tag_name == "label" && pred(node))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

fn fillable_label_target(tree: &PageTree, label: &str) -> Option<String> {
    let target = tree.label_target(label)?;
    classify::is_fillable(tree, &target).then_some(target)
}

fn attr_equals(attr: Option<&str>, term_lower: &str) -> bool {
    attr.map(|a| a.to_lowercase() == term_lower).unwrap_or(false)
}

fn attr_contains(attr: Option<&str>, term_lower: &str) -> bool {
    attr.map(|a| a.to_lowercase().contains(term_lower))
        .unwrap_or(false)
}

/// Vendor pages often nest the real control inside a container whose id or
/// class carries the field name. Tried after the direct strategies miss.
pub fn resolve_container_nested(
    tree: &PageTree,
    terms: &[&str],
    scope: Option<&str>,
) -> Option<String> {
    for term in terms {
        let term_lower = term.to_lowercase();
        for id in tree.scope_ids(scope) {
            let Some(node) = tree.get(&id) else {
                continue;
            };
            if node.is_form_control() {
                continue;
            }
            let matches = attr_contains(node.dom_id(), &term_lower)
                || node.attributes.class_contains(&term_lower);
            if !matches {
                continue;
            }
            if let Some(control) = tree
                .descendants(&id)
                .into_iter()
                .find(|candidate| classify::is_fillable(tree, candidate))
            {
                return Some(control);
            }
        }
    }
    None
}

/// Resolve a checkbox by id/name substring, e.g. the "current job" box of
/// a work entry. Only checkbox controls are considered.
pub fn resolve_checkbox(tree: &PageTree, terms: &[&str], scope: Option<&str>) -> Option<String> {
    for term in terms {
        let term_lower = term.to_lowercase();
        let found = tree.scope_ids(scope).into_iter().find(|id| {
            let Some(node) = tree.get(id) else {
                return false;
            };
            node.tag_name == "input"
                && node.input_type() == "checkbox"
                && (attr_contains(node.dom_id(), &term_lower)
                    || attr_contains(node.attributes.name.as_deref(), &term_lower))
                && classify::is_fillable(tree, id)
        });
        if found.is_some() {
            return found;
        }
    }
    None
}

/// Combined full-name fields: any attribute mentions "name" but none
/// mention "first" or "last". Independent of the per-field mappings.
pub fn resolve_full_name(tree: &PageTree) -> Option<String> {
    tree.document_order().into_iter().find(|id| {
        let Some(node) = tree.get(id) else {
            return false;
        };
        let attrs = [
            node.dom_id(),
            node.attributes.name.as_deref(),
            node.attributes.placeholder.as_deref(),
            node.attributes.aria_label.as_deref(),
        ];
        let mentions = |needle: &str| {
            attrs
                .iter()
                .flatten()
                .any(|a| a.to_lowercase().contains(needle))
        };
        mentions("name") && !mentions("first") && !mentions("last") && classify::is_fillable(tree, id)
    })
}

/// Label-driven fallback used by the skills category: besides the literal
/// term, try it humanized ("technicalSkills" -> "technical skills").
pub fn resolve_by_label_variants(
    tree: &PageTree,
    terms: &[&str],
    scope: Option<&str>,
) -> Option<String> {
    for term in terms {
        for variant in [term.to_string(), humanize(term)] {
            if let Some(found) =
                resolve_terms(tree, &[Strategy::LabelText], &[variant.as_str()], scope)
            {
                return Some(found);
            }
        }
    }
    None
}

/// Split a camelCase term into space-separated words.
fn humanize(term: &str) -> String {
    let mut out = String::with_capacity(term.len() + 4);
    for ch in term.chars() {
        if ch.is_uppercase() && !out.is_empty() {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
