//! Rule registry and predicate binding
//!
//! Each validator instance owns its own registry, so independent validators
//! on one document cannot interfere with each other's rule sets.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::email::is_valid_email;
use crate::messages;
use crate::parse::RuleSpec;
use crate::string::{validate_max_length, validate_min_length, validate_required};

/// A predicate bound to its argument: maps a field value to an error
/// message, or `None` when the value passes.
pub type BoundPredicate = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Builds a predicate from the raw argument string of an argument-taking
/// rule. Fails when the argument does not parse.
pub type PredicateFactory =
    Arc<dyn Fn(&str) -> Result<BoundPredicate, RuleError> + Send + Sync>;

/// A registry entry is explicitly one of two shapes, so binding is a total
/// operation: no naming convention decides whether an entry takes an
/// argument.
#[derive(Clone)]
pub enum RuleEntry {
    /// Zero-argument rule (`required`, `email`).
    Predicate(BoundPredicate),
    /// Single-argument rule (`min:6`, `max:32`).
    Factory(PredicateFactory),
}

impl RuleEntry {
    /// Wrap a plain predicate function.
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        RuleEntry::Predicate(Arc::new(f))
    }

    /// Wrap a predicate factory.
    pub fn factory<F>(f: F) -> Self
    where
        F: Fn(&str) -> Result<BoundPredicate, RuleError> + Send + Sync + 'static,
    {
        RuleEntry::Factory(Arc::new(f))
    }
}

/// Errors raised while binding rule declarations against the registry.
///
/// These are configuration errors: they surface when a form is bound, not
/// while a user is typing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("unknown rule `{0}`")]
    UnknownRule(String),

    #[error("rule `{0}` requires an argument")]
    MissingArgument(String),

    #[error("rule `{0}` does not take an argument")]
    UnexpectedArgument(String),

    #[error("rule `{rule}` argument `{arg}` is invalid: {reason}")]
    InvalidArgument {
        rule: String,
        arg: String,
        reason: String,
    },
}

/// Named validation rules owned by one validator instance.
pub struct RuleRegistry {
    entries: HashMap<String, RuleEntry>,
}

impl Default for RuleRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();

        registry.register(
            "required",
            RuleEntry::predicate(|value| validate_required(value).err()),
        );
        registry.register(
            "email",
            RuleEntry::predicate(|value| {
                if is_valid_email(value) {
                    None
                } else {
                    Some(messages::EMAIL.to_string())
                }
            }),
        );
        registry.register(
            "min",
            RuleEntry::factory(|arg| {
                let min = parse_length_arg("min", arg)?;
                let predicate: BoundPredicate =
                    Arc::new(move |value: &str| validate_min_length(value, min).err());
                Ok(predicate)
            }),
        );
        registry.register(
            "max",
            RuleEntry::factory(|arg| {
                let max = parse_length_arg("max", arg)?;
                let predicate: BoundPredicate =
                    Arc::new(move |value: &str| validate_max_length(value, max).err());
                Ok(predicate)
            }),
        );

        registry
    }
}

impl RuleRegistry {
    /// Registry with the built-in rules: `required`, `email`, `min`, `max`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with no rules at all.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Add or replace a rule.
    pub fn register(&mut self, name: impl Into<String>, entry: RuleEntry) {
        self.entries.insert(name.into(), entry);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Bind a parsed rule spec to a predicate.
    ///
    /// Unknown names and argument-arity mismatches fail here rather than at
    /// validation time.
    pub fn bind(&self, spec: &RuleSpec) -> Result<BoundPredicate, RuleError> {
        let entry = self
            .entries
            .get(&spec.name)
            .ok_or_else(|| RuleError::UnknownRule(spec.name.clone()))?;

        match (entry, &spec.arg) {
            (RuleEntry::Predicate(predicate), None) => Ok(predicate.clone()),
            (RuleEntry::Predicate(_), Some(_)) => {
                Err(RuleError::UnexpectedArgument(spec.name.clone()))
            }
            (RuleEntry::Factory(factory), Some(arg)) => factory(arg),
            (RuleEntry::Factory(_), None) => Err(RuleError::MissingArgument(spec.name.clone())),
        }
    }
}

fn parse_length_arg(rule: &str, arg: &str) -> Result<usize, RuleError> {
    arg.parse().map_err(|_| RuleError::InvalidArgument {
        rule: rule.to_string(),
        arg: arg.to_string(),
        reason: "expected a number".to_string(),
    })
}

/// Run a field's predicates in declaration order, stopping at the first
/// failure and returning its message.
pub fn run_rules(rules: &[BoundPredicate], value: &str) -> Option<String> {
    rules.iter().find_map(|rule| rule(value))
}
