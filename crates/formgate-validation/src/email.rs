//! Email validation

use once_cell::sync::Lazy;
use regex::Regex;

// ASCII word characters with optional dot/hyphen separators, then one or more
// 2-3 letter dot-segments. `(?-u)` keeps `\w` ASCII so non-ASCII local parts
// are rejected.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?-u)\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$").unwrap()
});

/// Validate email format
///
/// Deliberately permissive about trailing segments: `a@b.co.uk` is accepted
/// because the final dot-segment group repeats.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
