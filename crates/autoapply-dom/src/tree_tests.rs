use super::*;
use crate::ElementNode;

fn sample_tree() -> PageTree {
    let mut tree = PageTree::new("https://acme.wd5.myworkdayjobs.com/careers");
    let form = tree.attach(ElementNode::container("form"), None);
    let row = tree.attach(
        ElementNode::container("row").with_class("form-row"),
        Some(&form),
    );
    tree.attach(
        ElementNode::label("first-label", Some("firstName"), "First Name"),
        Some(&row),
    );
    tree.attach(ElementNode::text_input("firstName"), Some(&row));
    tree.attach(ElementNode::text_input("lastName"), Some(&form));
    tree
}

#[test]
fn test_document_order_is_depth_first() {
    let tree = sample_tree();
    let order = tree.document_order();
    assert_eq!(order, vec!["form", "row", "first-label", "firstName", "lastName"]);
}

#[test]
fn test_descendants_exclude_scope() {
    let tree = sample_tree();
    let descendants = tree.descendants("row");
    assert_eq!(descendants, vec!["first-label", "firstName"]);
}

#[test]
fn test_scope_ids_whole_document() {
    let tree = sample_tree();
    assert_eq!(tree.scope_ids(None).len(), 5);
    assert_eq!(tree.scope_ids(Some("row")).len(), 2);
}

#[test]
fn test_ancestors() {
    let tree = sample_tree();
    assert_eq!(tree.ancestors("firstName"), vec!["row", "form"]);
    assert!(tree.ancestors("form").is_empty());
}

#[test]
fn test_is_within() {
    let tree = sample_tree();
    assert!(tree.is_within("firstName", "row"));
    assert!(tree.is_within("firstName", "firstName"));
    assert!(!tree.is_within("lastName", "row"));
}

#[test]
fn test_remove_detaches_subtree() {
    let mut tree = sample_tree();
    tree.remove("row");
    assert!(!tree.contains("firstName"));
    assert_eq!(tree.get("form").unwrap().children.len(), 1);
}

#[test]
fn test_inner_text_concatenates_subtree() {
    let tree = sample_tree();
    assert_eq!(tree.inner_text("row"), "First Name");
}

#[test]
fn test_closest_container_prefers_row_class() {
    let tree = sample_tree();
    assert_eq!(tree.closest_container("firstName").as_deref(), Some("row"));
}

#[test]
fn test_closest_container_fieldset() {
    let mut tree = PageTree::new("https://example.workday.com");
    let fs = tree.attach(ElementNode::fieldset("fs"), None);
    let inner = tree.attach(ElementNode::container("inner"), Some(&fs));
    tree.attach(ElementNode::text_input("school"), Some(&inner));
    assert_eq!(tree.closest_container("school").as_deref(), Some("fs"));
}

#[test]
fn test_closest_container_climbs_divs_as_fallback() {
    let mut tree = PageTree::new("https://example.workday.com");
    let a = tree.attach(ElementNode::container("a"), None);
    let b = tree.attach(ElementNode::container("b"), Some(&a));
    let c = tree.attach(ElementNode::container("c"), Some(&b));
    tree.attach(ElementNode::text_input("field"), Some(&c));
    // No fieldset/group/row anywhere: climbs div levels up to the top.
    assert_eq!(tree.closest_container("field").as_deref(), Some("a"));
}

#[test]
fn test_by_dom_id() {
    let tree = sample_tree();
    assert_eq!(tree.by_dom_id("lastName").as_deref(), Some("lastName"));
    assert_eq!(tree.by_dom_id("missing"), None);
}

#[test]
fn test_radio_group_scan() {
    let mut tree = PageTree::new("https://example.workday.com");
    let form = tree.attach(ElementNode::container("form"), None);
    tree.attach(ElementNode::radio("r1", "relocate"), Some(&form));
    tree.attach(ElementNode::radio("r2", "relocate"), Some(&form));
    tree.attach(ElementNode::radio("other", "visa"), Some(&form));
    assert_eq!(tree.radio_group("relocate"), vec!["r1", "r2"]);
}

#[test]
fn test_label_for_prefers_for_attribute() {
    let tree = sample_tree();
    assert_eq!(tree.label_for("firstName").as_deref(), Some("first-label"));
}

#[test]
fn test_label_for_falls_back_to_parent_labels() {
    let mut tree = PageTree::new("https://example.workday.com");
    let wrap = tree.attach(ElementNode::container("wrap"), None);
    tree.attach(ElementNode::label("lbl", None, "Phone"), Some(&wrap));
    tree.attach(ElementNode::text_input("phone"), Some(&wrap));
    assert_eq!(tree.label_for("phone").as_deref(), Some("lbl"));
}

#[test]
fn test_label_target_for_attribute() {
    let tree = sample_tree();
    assert_eq!(tree.label_target("first-label").as_deref(), Some("firstName"));
}

#[test]
fn test_label_target_following_sibling() {
    let mut tree = PageTree::new("https://example.workday.com");
    let wrap = tree.attach(ElementNode::container("wrap"), None);
    tree.attach(ElementNode::label("lbl", None, "Skills"), Some(&wrap));
    tree.attach(ElementNode::container("spacer"), Some(&wrap));
    tree.attach(ElementNode::textarea("skills-box"), Some(&wrap));
    assert_eq!(tree.label_target("lbl").as_deref(), Some("skills-box"));
}

#[test]
fn test_control_count() {
    let tree = sample_tree();
    assert_eq!(tree.control_count("form"), 2);
    assert_eq!(tree.control_count("row"), 1);
}
