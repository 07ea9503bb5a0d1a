// FORMGATE - declarative form validation bound to a document tree
// Rule declarations live in field attributes; pure predicates check values;
// error text is surfaced by mutating the field's group container.

pub mod collect;
pub mod dom;
pub mod events;
pub mod presenter;
pub mod validator;

pub use collect::{collect, FormValue, FormValues};
pub use dom::{Document, Element, FileRef, NodeId};
pub use events::FormEvent;
pub use presenter::{ClassPresenter, ErrorPresenter};
pub use validator::{
    BindError, BoundForm, FormRules, FormValidator, SubmitCallback, ValidatorOptions,
};

// Re-export the validation core for custom rules
pub use formgate_validation as validation;
