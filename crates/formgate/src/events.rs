// File: src/events.rs
// Purpose: User-interaction events routed to a bound form

use crate::dom::NodeId;

/// Discrete user events the validator reacts to. Each handler runs to
/// completion before the next event is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// Focus left a field: run its rules.
    Blur { target: NodeId },
    /// Field content changed: clear any displayed error.
    Input { target: NodeId },
    /// The form was asked to submit.
    Submit,
}
