//! Integration tests for form value collection
//!
//! Collection walks every named field in document order and applies the
//! per-kind policy: scalar radio groups, accumulating checkbox groups, file
//! lists, and last-write-wins scalars for everything else.

use pretty_assertions::assert_eq;

use formgate::{collect, Document, Element, FileRef, FormValue, NodeId};

fn page() -> (Document, NodeId) {
    let mut doc = Document::new();
    let body = doc.create_root(Element::new("body"));
    let form = doc.create_element(body, Element::new("form").with_id("signup"));
    (doc, form)
}

fn text_input(doc: &mut Document, form: NodeId, name: &str, value: &str) -> NodeId {
    doc.create_element(
        form,
        Element::new("input").with_attr("name", name).with_value(value),
    )
}

fn checkbox(doc: &mut Document, form: NodeId, name: &str, value: &str, checked: bool) -> NodeId {
    doc.create_element(
        form,
        Element::new("input")
            .with_attr("type", "checkbox")
            .with_attr("name", name)
            .with_value(value)
            .with_checked(checked),
    )
}

fn radio(doc: &mut Document, form: NodeId, name: &str, value: &str, checked: bool) -> NodeId {
    doc.create_element(
        form,
        Element::new("input")
            .with_attr("type", "radio")
            .with_attr("name", name)
            .with_value(value)
            .with_checked(checked),
    )
}

#[test]
fn test_collects_named_fields_without_rules() {
    let (mut doc, form) = page();
    text_input(&mut doc, form, "username", "alice");
    doc.create_element(
        form,
        Element::new("textarea").with_attr("name", "bio").with_value("hello"),
    );

    let values = collect(&doc, form);
    assert_eq!(values.len(), 2);
    assert_eq!(values["username"], FormValue::Text("alice".to_string()));
    assert_eq!(values["bio"], FormValue::Text("hello".to_string()));
}

#[test]
fn test_later_scalar_overwrites_earlier() {
    let (mut doc, form) = page();
    text_input(&mut doc, form, "city", "hanoi");
    text_input(&mut doc, form, "city", "hue");

    let values = collect(&doc, form);
    assert_eq!(values["city"], FormValue::Text("hue".to_string()));
}

#[test]
fn test_checkbox_group_accumulates_checked_values() {
    let (mut doc, form) = page();
    checkbox(&mut doc, form, "tags", "rust", true);
    checkbox(&mut doc, form, "tags", "forms", false);
    checkbox(&mut doc, form, "tags", "web", true);

    let values = collect(&doc, form);
    assert_eq!(
        values["tags"],
        FormValue::Many(vec!["rust".to_string(), "web".to_string()])
    );
}

#[test]
fn test_checkbox_group_none_checked_yields_empty_scalar() {
    let (mut doc, form) = page();
    checkbox(&mut doc, form, "tags", "rust", false);
    checkbox(&mut doc, form, "tags", "web", false);

    let values = collect(&doc, form);
    assert_eq!(values["tags"], FormValue::Text(String::new()));
}

#[test]
fn test_single_checkbox_checked() {
    let (mut doc, form) = page();
    checkbox(&mut doc, form, "subscribe", "yes", true);

    let values = collect(&doc, form);
    assert_eq!(values["subscribe"], FormValue::Many(vec!["yes".to_string()]));
}

#[test]
fn test_radio_group_is_scalar_only() {
    let (mut doc, form) = page();
    radio(&mut doc, form, "plan", "free", false);
    radio(&mut doc, form, "plan", "pro", true);
    radio(&mut doc, form, "plan", "team", false);

    let values = collect(&doc, form);
    // The checked radio wins; unchecked ones in the same group never
    // overwrite it, and no array is ever built for radios.
    assert_eq!(values["plan"], FormValue::Text("pro".to_string()));
}

#[test]
fn test_radio_group_none_checked_yields_empty_scalar() {
    let (mut doc, form) = page();
    radio(&mut doc, form, "plan", "free", false);
    radio(&mut doc, form, "plan", "pro", false);

    let values = collect(&doc, form);
    assert_eq!(values["plan"], FormValue::Text(String::new()));
}

#[test]
fn test_file_input_collects_file_list() {
    let (mut doc, form) = page();
    doc.create_element(
        form,
        Element::new("input")
            .with_attr("type", "file")
            .with_attr("name", "avatar")
            .with_files(vec![FileRef::new("me.png", 2048)]),
    );

    let values = collect(&doc, form);
    assert_eq!(
        values["avatar"],
        FormValue::Files(vec![FileRef::new("me.png", 2048)])
    );
}

#[test]
fn test_collect_is_idempotent() {
    let (mut doc, form) = page();
    text_input(&mut doc, form, "username", "alice");
    checkbox(&mut doc, form, "tags", "rust", true);
    checkbox(&mut doc, form, "tags", "web", false);
    radio(&mut doc, form, "plan", "pro", true);

    let first = collect(&doc, form);
    let second = collect(&doc, form);
    assert_eq!(first, second);
}

#[test]
fn test_values_serialize_by_shape() {
    let (mut doc, form) = page();
    text_input(&mut doc, form, "username", "alice");
    checkbox(&mut doc, form, "tags", "rust", true);

    let values = collect(&doc, form);
    let json = serde_json::to_value(&values).unwrap();
    assert_eq!(json["username"], serde_json::json!("alice"));
    assert_eq!(json["tags"], serde_json::json!(["rust"]));
}
