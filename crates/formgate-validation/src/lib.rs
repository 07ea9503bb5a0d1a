//! Formgate Validation Core
//!
//! Pure validation predicates, message strings, rule-declaration parsing and
//! the rule registry used by the formgate binding layer. Nothing in here
//! touches a document: every check maps a field value to a pass/fail result,
//! so rules stay unit-testable on their own.

pub mod email;
pub mod messages;
pub mod parse;
pub mod registry;
pub mod string;

pub use email::is_valid_email;
pub use parse::{parse_rule_list, RuleSpec};
pub use registry::{run_rules, BoundPredicate, RuleEntry, RuleError, RuleRegistry};
pub use string::{validate_max_length, validate_min_length, validate_required};
