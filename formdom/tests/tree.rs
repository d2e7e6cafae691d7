use formdom::element::find_element;
use formdom::{closest, find_all_by_data, find_by_id_prefix, path_to, Document, Element};

fn order_form() -> Element {
    Element::form()
        .id("order")
        .child(
            Element::fieldset()
                .id("soups")
                .child(Element::radio("cat_1", "11").id("soup-11"))
                .child(Element::radio("cat_1", "12").id("soup-12")),
        )
        .child(
            Element::div()
                .id("selected_items_lunch")
                .child(Element::hidden_input("items", "11").data("category", "cat_1"))
                .child(Element::hidden_input("items", "21").data("category", "cat_2")),
        )
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_find_by_id_prefix_exact_and_prefixed() {
    let form = order_form();
    let found = find_by_id_prefix(&form, "selected_items").unwrap();
    assert_eq!(found.id, "selected_items_lunch");

    let found = find_by_id_prefix(&form, "selected_items_lunch").unwrap();
    assert_eq!(found.id, "selected_items_lunch");

    assert!(find_by_id_prefix(&form, "selected_items_dinner").is_none());
}

#[test]
fn test_find_by_id_prefix_first_in_document_order() {
    // The nested match comes before the later sibling in pre-order.
    let form = Element::form()
        .child(Element::div().child(Element::div().id("selected_items_a")))
        .child(Element::div().id("selected_items_b"));

    assert_eq!(
        find_by_id_prefix(&form, "selected_items").unwrap().id,
        "selected_items_a"
    );
}

#[test]
fn test_find_by_id_prefix_excludes_container() {
    let container = Element::div().id("selected_items");
    assert!(find_by_id_prefix(&container, "selected_items").is_none());
}

#[test]
fn test_find_all_by_data_exact_match() {
    let form = order_form();
    let found = find_all_by_data(&form, "category", "cat_1");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].value.as_deref(), Some("11"));

    // Prefix of a marker is not a match.
    assert!(find_all_by_data(&form, "category", "cat").is_empty());
}

#[test]
fn test_path_to_and_at_path() {
    let form = order_form();
    let path = path_to(&form, "soup-12").unwrap();
    assert_eq!(path, vec![0, 1]);
    assert_eq!(form.at_path(&path).unwrap().id, "soup-12");
    assert_eq!(path_to(&form, "order"), Some(vec![]));
    assert_eq!(path_to(&form, "missing"), None);
}

#[test]
fn test_closest_form_from_document_root() {
    let doc = Document::new(
        Element::div()
            .id("page")
            .child(Element::span("header"))
            .child(order_form()),
    );

    let path = doc.closest_form("soup-11").unwrap();
    assert_eq!(path, vec![1]);
    assert_eq!(doc.at_path(&path).unwrap().id, "order");

    // An element outside any form has no owner.
    let header = doc.root().child_elements()[0].id.clone();
    assert_eq!(doc.closest_form(&header), None);
}

#[test]
fn test_closest_prefers_nearest_ancestor() {
    let root = Element::div()
        .id("a")
        .data("mark", "yes")
        .child(Element::div().id("b").data("mark", "yes").child(Element::div().id("c")));

    let path = closest(&root, "c", |e| e.get_data("mark").is_some()).unwrap();
    assert_eq!(root.at_path(&path).unwrap().id, "b");
}

// ============================================================================
// Mutation
// ============================================================================

#[test]
fn test_append_child_goes_last() {
    let mut container = Element::div().child(Element::span("first"));
    container.append_child(Element::span("second").id("second"));

    let children = container.child_elements();
    assert_eq!(children.len(), 2);
    assert_eq!(children[1].id, "second");
}

#[test]
fn test_append_child_replaces_text() {
    let mut label = Element::label("placeholder");
    label.append_child(Element::span("real"));
    assert_eq!(label.child_elements().len(), 1);
}

#[test]
fn test_remove_descendants_preserves_order() {
    let mut container = Element::div()
        .child(Element::hidden_input("items", "a").id("a").data("category", "x"))
        .child(Element::hidden_input("items", "b").id("b").data("category", "y"))
        .child(Element::hidden_input("items", "c").id("c").data("category", "x"))
        .child(Element::hidden_input("items", "d").id("d").data("category", "z"));

    let removed = container.remove_descendants_where(|e| {
        e.get_data("category").map(String::as_str) == Some("x")
    });

    assert_eq!(removed, 2);
    let ids: Vec<_> = container.child_elements().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "d"]);
}

#[test]
fn test_remove_descendants_reaches_nested() {
    let mut container = Element::div().child(
        Element::div()
            .id("wrapper")
            .child(Element::hidden_input("items", "a").id("nested").data("category", "x")),
    );

    assert_eq!(
        container.remove_descendants_where(|e| e.get_data("category").is_some()),
        1
    );
    assert!(find_element(&container, "wrapper").is_some());
    assert!(find_element(&container, "nested").is_none());
}

#[test]
fn test_document_get_mut() {
    let mut doc = Document::new(order_form());
    doc.get_mut("soup-11").unwrap().checked = true;
    assert!(doc.get("soup-11").unwrap().checked);
    assert!(doc.get("nope").is_none());
}
