//! Rule-declaration parsing
//!
//! Declarations are pipe-delimited lists of `rule` or `rule:arg` tokens,
//! e.g. `required|min:6|email`.

/// A rule name plus its optional argument, as written in markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    pub name: String,
    pub arg: Option<String>,
}

impl RuleSpec {
    pub fn new(name: &str, arg: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            arg: arg.map(str::to_string),
        }
    }
}

/// Parse a pipe-delimited rule declaration, preserving declaration order.
///
/// Each token is split on the first `:`; everything after it is the argument.
pub fn parse_rule_list(decl: &str) -> Vec<RuleSpec> {
    decl.split('|')
        .map(|token| match token.split_once(':') {
            Some((name, arg)) => RuleSpec::new(name, Some(arg)),
            None => RuleSpec::new(token, None),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_order() {
        let specs = parse_rule_list("required|min:6|email");
        assert_eq!(
            specs,
            vec![
                RuleSpec::new("required", None),
                RuleSpec::new("min", Some("6")),
                RuleSpec::new("email", None),
            ]
        );
    }

    #[test]
    fn test_parse_single_rule() {
        assert_eq!(parse_rule_list("required"), vec![RuleSpec::new("required", None)]);
    }

    #[test]
    fn test_parse_splits_on_first_colon_only() {
        assert_eq!(parse_rule_list("min:6:7"), vec![RuleSpec::new("min", Some("6:7"))]);
    }

    #[test]
    fn test_parse_empty_declaration() {
        // An empty declaration yields one empty-named spec; the registry
        // rejects it at bind time.
        assert_eq!(parse_rule_list(""), vec![RuleSpec::new("", None)]);
    }
}
