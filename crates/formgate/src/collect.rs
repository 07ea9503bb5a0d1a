// File: src/collect.rs
// Purpose: Gathering submitted form values by field kind

use std::collections::HashMap;

use serde::Serialize;

use crate::dom::{Document, FileRef, NodeId};

/// A collected field value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FormValue {
    /// Scalar value (text inputs, textareas, selects, radio groups).
    Text(String),
    /// Accumulated values of a checked checkbox group.
    Many(Vec<String>),
    /// File list of a file input.
    Files(Vec<FileRef>),
}

impl FormValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

/// Field name → collected value, as handed to the submit callback.
pub type FormValues = HashMap<String, FormValue>;

/// Collect every named field under `form` in document order (a rules
/// attribute is not required here).
///
/// Kind policy:
/// - radio: scalar value of the checked radio in the name group, empty
///   string when none is checked
/// - checkbox: checked boxes accumulate into an array per name; an unchecked
///   box contributes an empty scalar only when nothing was collected for the
///   name yet
/// - file: the input's file list
/// - anything else: the current scalar value, overwriting earlier fields
///   with the same name
///
/// Pure read of the document, so collecting twice without interaction yields
/// identical results.
pub fn collect(doc: &Document, form: NodeId) -> FormValues {
    let fields = doc.query_by_attributes(form, &["name"]);
    let mut values = FormValues::new();

    for &field in &fields {
        let element = doc.element(field);
        let Some(name) = element.attributes.get("name").cloned() else {
            continue;
        };

        match element.input_type() {
            "radio" => {
                let checked = fields.iter().copied().find(|&id| {
                    let candidate = doc.element(id);
                    candidate.input_type() == "radio"
                        && candidate.attributes.get("name") == Some(&name)
                        && candidate.checked
                });
                let value = checked
                    .map(|id| doc.element(id).value.clone())
                    .unwrap_or_default();
                values.insert(name, FormValue::Text(value));
            }
            "checkbox" => {
                if !element.checked {
                    values
                        .entry(name)
                        .or_insert_with(|| FormValue::Text(String::new()));
                } else {
                    let slot = values
                        .entry(name)
                        .or_insert_with(|| FormValue::Many(Vec::new()));
                    if let FormValue::Many(items) = slot {
                        items.push(element.value.clone());
                    } else {
                        // A prior empty scalar gives way to the accumulator.
                        *slot = FormValue::Many(vec![element.value.clone()]);
                    }
                }
            }
            "file" => {
                values.insert(name, FormValue::Files(element.files.clone()));
            }
            _ => {
                values.insert(name, FormValue::Text(element.value.clone()));
            }
        }
    }

    values
}
