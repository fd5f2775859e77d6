//! Section discovery and add-entry clicking for repeating categories.
//!
//! Work and education render as repeated blocks. Discovery runs a ladder
//! of heuristics from most to least explicit: marker attributes, headings,
//! fieldset legends, and finally anchor fields whose containers imply a
//! section. One oversized hit is subdivided into its grouping descendants.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use autoapply_dom::{Page, PageTree};
use autoapply_protocols::Category;

use crate::catalog::{self, SectionProfile};
use crate::classify;
use crate::config::EngineConfig;

/// Grouping classes recognized when subdividing an oversized section.
const SUBDIVISION_CLASSES: [&str; 3] = ["form-row", "form-group", "row"];

/// Discover the entry sections of a repeating category, document order.
pub fn find_sections(tree: &PageTree, category: Category, config: &EngineConfig) -> Vec<String> {
    let Some(profile) = catalog::section_profile(category) else {
        return Vec::new();
    };

    let sections = marker_sections(tree, profile)
        .or_else(|| heading_sections(tree, profile))
        .or_else(|| legend_sections(tree, profile))
        .or_else(|| anchor_sections(tree, profile))
        .unwrap_or_default();

    debug!(?category, count = sections.len(), "sections discovered");
    subdivide_if_oversized(tree, sections, config)
}

/// Containers whose `id` or `data-automation-id` carries a marker term.
/// Nested hits collapse to the outermost so one visual block counts once.
/// Controls and button-like nodes are never sections; an add-entry button
/// whose automation id embeds the category name must not count as one.
fn marker_sections(tree: &PageTree, profile: &SectionProfile) -> Option<Vec<String>> {
    let mut hits: Vec<String> = Vec::new();
    for id in tree.document_order() {
        let Some(node) = tree.get(&id) else {
            continue;
        };
        if node.is_form_control() || node.is_button_like() {
            continue;
        }
        let matched = profile.marker_terms.iter().any(|term| {
            let term = term.to_lowercase();
            attr_contains(node.dom_id(), &term)
                || attr_contains(node.attributes.automation_id.as_deref(), &term)
        });
        if matched && !hits.iter().any(|outer| tree.is_within(&id, outer)) {
            hits.push(id);
        }
    }
    (!hits.is_empty()).then_some(hits)
}

/// Sections implied by h2/h3 headings: the heading's parent is the block.
fn heading_sections(tree: &PageTree, profile: &SectionProfile) -> Option<Vec<String>> {
    let mut hits: Vec<String> = Vec::new();
    for id in tree.document_order() {
        let Some(node) = tree.get(&id) else {
            continue;
        };
        if node.tag_name != "h2" && node.tag_name != "h3" {
            continue;
        }
        let text = tree.inner_text(&id).to_lowercase();
        if !profile.heading_terms.iter().any(|term| text.contains(term)) {
            continue;
        }
        if let Some(parent) = &node.parent_id {
            if !hits.contains(parent) {
                hits.push(parent.clone());
            }
        }
    }
    (!hits.is_empty()).then_some(hits)
}

/// Fieldsets whose legend text names the category.
fn legend_sections(tree: &PageTree, profile: &SectionProfile) -> Option<Vec<String>> {
    let mut hits = Vec::new();
    for id in tree.document_order() {
        let Some(node) = tree.get(&id) else {
            continue;
        };
        if node.tag_name != "fieldset" {
            continue;
        }
        let legend_matches = node.children.iter().any(|child| {
            tree.get(child)
                .map(|c| {
                    c.tag_name == "legend" && {
                        let text = tree.inner_text(child).to_lowercase();
                        profile.legend_terms.iter().any(|term| text.contains(term))
                    }
                })
                .unwrap_or(false)
        });
        if legend_matches {
            hits.push(id);
        }
    }
    (!hits.is_empty()).then_some(hits)
}

/// Last resort: known sub-fields of the category locate their closest
/// containers, deduplicated.
fn anchor_sections(tree: &PageTree, profile: &SectionProfile) -> Option<Vec<String>> {
    let mut hits: Vec<String> = Vec::new();
    for id in tree.document_order() {
        let Some(node) = tree.get(&id) else {
            continue;
        };
        if !node.is_form_control() {
            continue;
        }
        let matched = profile.anchor_terms.iter().any(|term| {
            let term = term.to_lowercase();
            attr_contains(node.dom_id(), &term)
                || attr_contains(node.attributes.name.as_deref(), &term)
        });
        if !matched {
            continue;
        }
        if let Some(container) = tree.closest_container(&id) {
            if !hits.contains(&container) {
                hits.push(container);
            }
        }
    }
    (!hits.is_empty()).then_some(hits)
}

/// A single discovered section holding an implausible number of controls
/// is usually the whole form. Subdivide it into grouping descendants that
/// hold enough controls to be an entry.
fn subdivide_if_oversized(
    tree: &PageTree,
    sections: Vec<String>,
    config: &EngineConfig,
) -> Vec<String> {
    let [only] = sections.as_slice() else {
        return sections;
    };
    if tree.control_count(only) <= config.oversized_section_controls {
        return sections;
    }

    let parts: Vec<String> = tree
        .descendants(only)
        .into_iter()
        .filter(|id| {
            let Some(node) = tree.get(id) else {
                return false;
            };
            let grouping = node.tag_name == "fieldset"
                || node.attributes.role.as_deref() == Some("group")
                || SUBDIVISION_CLASSES
                    .iter()
                    .any(|class| node.attributes.class_contains(class));
            grouping && tree.control_count(id) >= config.min_section_controls
        })
        .collect();
    // Keep only outermost parts so nested rows do not double-count.
    let outermost: Vec<String> = parts
        .iter()
        .filter(|part| {
            !parts
                .iter()
                .any(|other| *part != other && tree.is_within(part, other))
        })
        .cloned()
        .collect();

    if outermost.is_empty() {
        sections
    } else {
        debug!(parts = outermost.len(), "oversized section subdivided");
        outermost
    }
}

/// Locate add-entry controls for a category: automation ids first, then
/// aria labels, then button captions, then any "add" button near the last
/// discovered section. Vendor pages keep hidden template buttons around,
/// so only visible candidates are returned.
pub fn find_add_buttons(tree: &PageTree, category: Category, config: &EngineConfig) -> Vec<String> {
    let Some(profile) = catalog::section_profile(category) else {
        return Vec::new();
    };

    let by_automation = buttons_where(tree, |node| {
        profile.add_automation_terms.iter().any(|term| {
            attr_contains(node.attributes.automation_id.as_deref(), &term.to_lowercase())
        })
    });
    if !by_automation.is_empty() {
        return by_automation;
    }

    let by_aria = buttons_where(tree, |node| {
        profile
            .add_aria_terms
            .iter()
            .any(|term| attr_contains(node.attributes.aria_label.as_deref(), &term.to_lowercase()))
    });
    if !by_aria.is_empty() {
        return by_aria;
    }

    let by_caption: Vec<String> = tree
        .document_order()
        .into_iter()
        .filter(|id| {
            tree.get(id)
                .map(|node| {
                    node.is_button_like()
                        && classify::is_visible(tree, id)
                        && {
                            let text = tree.inner_text(id).to_lowercase();
                            profile
                                .add_caption_terms
                                .iter()
                                .any(|term| text.contains(term))
                        }
                })
                .unwrap_or(false)
        })
        .collect();
    if !by_caption.is_empty() {
        return by_caption;
    }

    generic_add_buttons(tree, category, config)
}

/// "Add"-captioned buttons around the last discovered section, skipping
/// removal controls.
fn generic_add_buttons(tree: &PageTree, category: Category, config: &EngineConfig) -> Vec<String> {
    let sections = find_sections(tree, category, config);
    let Some(last) = sections.last() else {
        return Vec::new();
    };
    let Some(neighborhood) = tree.get(last).and_then(|n| n.parent_id.clone()) else {
        return Vec::new();
    };

    tree.descendants(&neighborhood)
        .into_iter()
        .filter(|id| {
            tree.get(id)
                .map(|node| {
                    node.is_button_like()
                        && classify::is_visible(tree, id)
                        && {
                            let text = tree.inner_text(id).to_lowercase();
                            text.contains("add") && !text.contains("remov")
                        }
                })
                .unwrap_or(false)
        })
        .collect()
}

fn buttons_where(tree: &PageTree, pred: impl Fn(&autoapply_dom::ElementNode) -> bool) -> Vec<String> {
    tree.document_order()
        .into_iter()
        .filter(|id| {
            tree.get(id)
                .map(|node| node.is_button_like() && pred(node))
                .unwrap_or(false)
                && classify::is_visible(tree, id)
        })
        .collect()
}

fn attr_contains(attr: Option<&str>, term_lower: &str) -> bool {
    attr.map(|a| a.to_lowercase().contains(term_lower))
        .unwrap_or(false)
}

/// Click the add-entry control until the page holds `desired` sections.
///
/// Each click is followed by a settle delay and a recount; a click that
/// fails to grow the section list is retried a bounded number of times
/// before giving up, so a broken add control cannot loop. Returns the
/// sections present afterwards.
pub async fn ensure_section_count(
    page: &Arc<Page>,
    config: &EngineConfig,
    category: Category,
    desired: usize,
) -> Vec<String> {
    let (mut sections, add_button) = {
        let tree = page.tree();
        let sections = find_sections(&tree, category, config);
        let add_button = find_add_buttons(&tree, category, config).into_iter().next();
        (sections, add_button)
    };

    if sections.len() >= desired {
        return sections;
    }
    let Some(add_button) = add_button else {
        warn!(?category, "no add-entry control; filling existing sections only");
        return sections;
    };

    let mut stalled_attempts = 0;
    while sections.len() < desired {
        let before = sections.len();
        if let Err(error) = page.click(&add_button) {
            warn!(?category, %error, "add-entry click failed");
            break;
        }
        sleep(config.settle_delay).await;

        sections = {
            let tree = page.tree();
            find_sections(&tree, category, config)
        };
        if sections.len() > before {
            stalled_attempts = 0;
            info!(?category, count = sections.len(), "section added");
        } else {
            stalled_attempts += 1;
            if stalled_attempts >= config.max_add_attempts {
                warn!(
                    ?category,
                    have = sections.len(),
                    desired,
                    "add-entry control not producing sections"
                );
                break;
            }
        }
    }
    sections
}

async fn sleep(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
#[path = "sections_tests.rs"]
mod tests;
