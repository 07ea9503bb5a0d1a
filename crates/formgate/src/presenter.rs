// File: src/presenter.rs
// Purpose: Error display seam (class toggling and message text)

use crate::dom::{Document, NodeId};

/// Mutation seam for surfacing validation errors. All class and text changes
/// go through this trait, keeping the rule logic free of document concerns.
pub trait ErrorPresenter {
    /// Mark a group invalid and write the message into its message slot.
    fn show_error(&self, doc: &mut Document, group: NodeId, message: &str);

    /// Remove the invalid marker and blank the message slot. Does nothing
    /// when the group is not currently marked.
    fn clear_error(&self, doc: &mut Document, group: NodeId);
}

/// Default presenter: toggles a class on the group container and writes into
/// the first descendant matching the message selector. Groups without a
/// message slot still get the class.
pub struct ClassPresenter {
    invalid_class: String,
    message_selector: String,
}

impl ClassPresenter {
    pub fn new(invalid_class: &str, message_selector: &str) -> Self {
        Self {
            invalid_class: invalid_class.to_string(),
            message_selector: message_selector.to_string(),
        }
    }

    fn message_slot(&self, doc: &Document, group: NodeId) -> Option<NodeId> {
        doc.query_selector_in(group, &self.message_selector)
    }
}

impl ErrorPresenter for ClassPresenter {
    fn show_error(&self, doc: &mut Document, group: NodeId, message: &str) {
        doc.add_class(group, &self.invalid_class);
        if let Some(slot) = self.message_slot(doc, group) {
            doc.set_text(slot, message);
        }
    }

    fn clear_error(&self, doc: &mut Document, group: NodeId) {
        if !doc.has_class(group, &self.invalid_class) {
            return;
        }
        doc.remove_class(group, &self.invalid_class);
        if let Some(slot) = self.message_slot(doc, group) {
            doc.set_text(slot, "");
        }
    }
}
