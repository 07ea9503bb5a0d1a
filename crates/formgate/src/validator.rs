// File: src/validator.rs
// Purpose: FormValidator component: binding, event handling, submission gating

use std::collections::{HashMap, HashSet};
use std::fmt;

use thiserror::Error;
use tracing::{debug, warn};

use formgate_validation::{
    parse_rule_list, run_rules, BoundPredicate, RuleEntry, RuleError, RuleRegistry,
};

use crate::collect::{collect, FormValues};
use crate::dom::{Document, NodeId};
use crate::events::FormEvent;
use crate::presenter::{ClassPresenter, ErrorPresenter};

/// Submit callback invoked with the collected values when every field
/// passes. When absent, the form performs its native submission instead.
pub type SubmitCallback = Box<dyn FnMut(FormValues)>;

/// Field name → ordered predicates. Built once at bind time; declaration
/// order is evaluation order, and fields sharing a name append to one list.
pub type FormRules = HashMap<String, Vec<BoundPredicate>>;

/// Configuration for a `FormValidator`.
///
/// Selector knobs default to the markup contract: fields carry `name` and
/// `rules` attributes, the visual group matches `.form-group`, the message
/// slot `.form-message`, and invalid groups gain the `invalid` class.
pub struct ValidatorOptions {
    pub on_submit: Option<SubmitCallback>,
    pub group_selector: String,
    pub message_selector: String,
    pub rules_attribute: String,
    pub invalid_class: String,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            on_submit: None,
            group_selector: ".form-group".to_string(),
            message_selector: ".form-message".to_string(),
            rules_attribute: "rules".to_string(),
            invalid_class: "invalid".to_string(),
        }
    }
}

impl ValidatorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_submit(mut self, callback: impl FnMut(FormValues) + 'static) -> Self {
        self.on_submit = Some(Box::new(callback));
        self
    }

    pub fn group_selector(mut self, selector: &str) -> Self {
        self.group_selector = selector.to_string();
        self
    }

    pub fn invalid_class(mut self, class: &str) -> Self {
        self.invalid_class = class.to_string();
        self
    }
}

/// Configuration errors surfaced when a form is bound.
#[derive(Debug, PartialEq, Error)]
pub enum BindError {
    #[error("no form matches selector `{0}`")]
    FormNotFound(String),

    #[error("field `{field}`: {source}")]
    Rule {
        field: String,
        #[source]
        source: RuleError,
    },
}

/// Entry point: owns the rule registry and the configuration used to wire a
/// form found in a document. Each instance has its own registry, so two
/// validators on one page cannot interfere with each other's rule sets.
pub struct FormValidator {
    form_selector: String,
    registry: RuleRegistry,
    options: ValidatorOptions,
}

impl FormValidator {
    pub fn new(form_selector: &str, options: ValidatorOptions) -> Self {
        Self {
            form_selector: form_selector.to_string(),
            registry: RuleRegistry::new(),
            options,
        }
    }

    /// Add or replace a rule available to this validator only.
    pub fn register_rule(&mut self, name: &str, entry: RuleEntry) {
        self.registry.register(name, entry);
    }

    /// Locate the form and wire every field carrying both a `name` and a
    /// rules attribute. Fails fast on a missing form or an unbindable rule.
    pub fn bind(self, doc: &Document) -> Result<BoundForm, BindError> {
        let form = doc
            .query_selector(&self.form_selector)
            .ok_or_else(|| BindError::FormNotFound(self.form_selector.clone()))?;

        let mut rules = FormRules::new();
        let mut listeners = HashSet::new();

        for field in doc.query_by_attributes(form, &["name", self.options.rules_attribute.as_str()]) {
            // The query guarantees both attributes are present.
            let Some(name) = doc.attribute(field, "name").map(str::to_string) else {
                continue;
            };
            let Some(decl) = doc
                .attribute(field, &self.options.rules_attribute)
                .map(str::to_string)
            else {
                continue;
            };

            for spec in parse_rule_list(&decl) {
                let predicate = self
                    .registry
                    .bind(&spec)
                    .map_err(|source| BindError::Rule {
                        field: name.clone(),
                        source,
                    })?;
                rules.entry(name.clone()).or_default().push(predicate);
            }
            // Wires the blur/input listeners for this field.
            listeners.insert(field);
        }

        Ok(BoundForm {
            form,
            rules,
            listeners,
            presenter: ClassPresenter::new(
                &self.options.invalid_class,
                &self.options.message_selector,
            ),
            group_selector: self.options.group_selector,
            rules_attribute: self.options.rules_attribute,
            on_submit: self.options.on_submit,
        })
    }
}

/// A validator wired to one form in a document.
pub struct BoundForm {
    form: NodeId,
    rules: FormRules,
    /// Fields that had listeners attached at bind time. Fields added later
    /// receive no blur/input handling.
    listeners: HashSet<NodeId>,
    presenter: ClassPresenter,
    group_selector: String,
    rules_attribute: String,
    on_submit: Option<SubmitCallback>,
}

// The predicates and the submit callback are opaque closures, so only the
// structural state is rendered.
impl fmt::Debug for BoundForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<&String> = self.rules.keys().collect();
        fields.sort();
        f.debug_struct("BoundForm")
            .field("form", &self.form)
            .field("fields", &fields)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl BoundForm {
    pub fn form(&self) -> NodeId {
        self.form
    }

    /// Route an event to its handler. Blur and input on fields that were not
    /// wired at bind time are ignored.
    pub fn handle_event(&mut self, doc: &mut Document, event: FormEvent) {
        match event {
            FormEvent::Blur { target } if self.listeners.contains(&target) => {
                self.validate_field(doc, target);
            }
            FormEvent::Input { target } if self.listeners.contains(&target) => {
                self.clear_field(doc, target);
            }
            FormEvent::Submit => {
                self.handle_submit(doc);
            }
            _ => {}
        }
    }

    /// Run a field's rules against its current value, in declaration order,
    /// stopping at the first failure.
    ///
    /// On failure the nearest group container is marked via the presenter;
    /// without a container the result is still computed, just not displayed.
    /// Success does *not* clear an existing marker; only an input event
    /// does. That asymmetry is part of the observable contract.
    pub fn validate_field(&self, doc: &mut Document, field: NodeId) -> bool {
        let Some(name) = doc.attribute(field, "name").map(str::to_string) else {
            return true;
        };
        let value = doc.element(field).value.clone();

        let Some(rules) = self.rules.get(&name) else {
            debug!(field = %name, "no rules bound for field, treating as valid");
            return true;
        };

        match run_rules(rules, &value) {
            Some(message) => {
                match doc.closest(field, &self.group_selector) {
                    Some(group) => self.presenter.show_error(doc, group, &message),
                    None => {
                        warn!(field = %name, "no group container found, skipping error display")
                    }
                }
                false
            }
            None => true,
        }
    }

    /// Clear any displayed error for the field, regardless of whether its
    /// current value would validate.
    fn clear_field(&self, doc: &mut Document, field: NodeId) {
        match doc.closest(field, &self.group_selector) {
            Some(group) => self.presenter.clear_error(doc, group),
            None => warn!("no group container found, nothing to clear"),
        }
    }

    /// Intercept submission: re-validate every rule-bearing field currently
    /// in the form and gate on the combined result. Returns overall validity.
    ///
    /// Fields are re-queried here rather than cached from bind time, so
    /// dynamically added or removed fields are respected. Every field is
    /// checked; validation does not short-circuit across fields, only
    /// within one field's rule list.
    pub fn handle_submit(&mut self, doc: &mut Document) -> bool {
        let fields = doc.query_by_attributes(self.form, &["name", self.rules_attribute.as_str()]);

        let mut is_valid = true;
        for field in fields {
            if !self.validate_field(doc, field) {
                is_valid = false;
            }
        }

        if !is_valid {
            // Error displays from the per-field runs stay visible.
            return false;
        }

        if let Some(callback) = self.on_submit.as_mut() {
            let values = collect(doc, self.form);
            callback(values);
        } else {
            doc.element_mut(self.form).native_submitted = true;
        }
        true
    }
}
