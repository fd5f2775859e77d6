use std::time::Duration;

use super::*;
use crate::{ElementNode, PageTree};

fn page_with_input() -> std::sync::Arc<Page> {
    let mut tree = PageTree::new("https://acme.workday.com/apply");
    let form = tree.attach(ElementNode::container("form"), None);
    tree.attach(ElementNode::text_input("email"), Some(&form));
    Page::from_tree(tree)
}

#[test]
fn test_set_value_and_read_back() {
    let page = page_with_input();
    page.set_value("email", "jane@x.com").unwrap();
    let tree = page.tree();
    assert_eq!(
        tree.get("email").unwrap().attributes.value.as_deref(),
        Some("jane@x.com")
    );
}

#[test]
fn test_set_value_missing_node() {
    let page = page_with_input();
    let err = page.set_value("ghost", "x").unwrap_err();
    assert!(matches!(err, PageError::NodeNotFound(_)));
}

#[test]
fn test_notify_changed_dispatches_input_then_change() {
    let page = page_with_input();
    page.notify_changed("email");
    let events = page.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind, EventKind::Input);
    assert_eq!(events[1].kind, EventKind::Change);
    assert!(events.iter().all(|e| e.bubbles && e.target == "email"));
}

#[test]
fn test_click_runs_host_hooks() {
    let mut tree = PageTree::new("https://acme.workday.com/apply");
    tree.attach(ElementNode::button("add", "Add Another"), None);
    let page = Page::from_tree(tree);

    page.on_click(|tree, target| {
        if target == "add" {
            tree.attach(ElementNode::text_input("new-field"), None);
        }
    });

    page.click("add").unwrap();
    assert!(page.tree().contains("new-field"));
    assert_eq!(page.events().last().unwrap().kind, EventKind::Click);
}

#[test]
fn test_click_missing_node_fails_without_hooks() {
    let page = page_with_input();
    assert!(page.click("ghost").is_err());
    assert!(page.events().is_empty());
}

#[test]
fn test_select_index_writes_option_value() {
    let mut tree = PageTree::new("https://acme.workday.com/apply");
    tree.attach(
        ElementNode::select("country", &[("US", "United States"), ("CA", "Canada")]),
        None,
    );
    let page = Page::from_tree(tree);
    page.select_index("country", 1).unwrap();
    let tree = page.tree();
    let node = tree.get("country").unwrap();
    assert_eq!(node.selected_index, Some(1));
    assert_eq!(node.attributes.value.as_deref(), Some("CA"));
}

#[test]
fn test_select_index_out_of_range() {
    let mut tree = PageTree::new("https://acme.workday.com/apply");
    tree.attach(ElementNode::select("country", &[("US", "United States")]), None);
    let page = Page::from_tree(tree);
    assert!(page.select_index("country", 5).is_err());
}

#[tokio::test]
async fn test_highlight_applies_and_reverts() {
    let page = page_with_input();
    page.apply_highlight("email", HighlightKind::Filled, Duration::from_millis(10))
        .unwrap();
    {
        let tree = page.tree();
        let style = &tree.get("email").unwrap().style;
        assert_eq!(style.border, HighlightKind::Filled.border());
        assert_eq!(style.background_color, HighlightKind::Filled.background());
    }

    tokio::time::sleep(Duration::from_millis(50)).await;
    let tree = page.tree();
    let style = &tree.get("email").unwrap().style;
    assert_eq!(style.border, "");
    assert_eq!(style.background_color, "");
}

#[tokio::test]
async fn test_highlight_revert_survives_node_removal() {
    let page = page_with_input();
    page.apply_highlight("email", HighlightKind::Detected, Duration::from_millis(10))
        .unwrap();
    page.mutate(|tree| tree.remove("email"));
    tokio::time::sleep(Duration::from_millis(50)).await;
    // No panic; node is simply gone.
    assert!(!page.tree().contains("email"));
}
