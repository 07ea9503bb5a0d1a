//! User-facing error messages
//!
//! The strings written into a field's message slot when a rule fails.

pub const REQUIRED: &str = "Vui lòng nhập trường này!";
pub const EMAIL: &str = "Vui lòng nhập email!";

pub fn min_length(min: usize) -> String {
    format!("Vui lòng nhập ít nhất {} ký tự!", min)
}

pub fn max_length(max: usize) -> String {
    format!("Vui lòng nhập tối đa {} ký tự!", max)
}
