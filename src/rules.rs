//! The fixed rule set a candidate password must satisfy.

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum candidate length, in characters
pub const MIN_LENGTH: usize = 6;

/// Characters that count as "special" for the rule set
pub const SPECIAL_CHARS: [char; 6] = ['!', '?', '&', '%', '*', '@'];

static LOWERCASE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z]").expect("Failed to compile lowercase regex"));

static UPPERCASE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]").expect("Failed to compile uppercase regex"));

static DIGIT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]").expect("Failed to compile digit regex"));

/// One named predicate per rule; all of them must hold.
const CONSTRAINTS: [fn(&str) -> bool; 5] = [
    long_enough,
    has_lowercase,
    has_uppercase,
    has_digit,
    has_special_char,
];

/// This function checks if the given candidate password is valid.
/// Returns true if every rule holds, false otherwise. Any string is an
/// acceptable input, including the empty string.
///
/// Letter and digit classification is ASCII-only: characters outside
/// ASCII count towards the length and towards nothing else.
pub fn is_valid(password: &str) -> bool {
    CONSTRAINTS.iter().all(|constraint| constraint(password))
}

// Length is counted in characters, not bytes
fn long_enough(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}

fn has_lowercase(password: &str) -> bool {
    LOWERCASE_REGEX.is_match(password)
}

fn has_uppercase(password: &str) -> bool {
    UPPERCASE_REGEX.is_match(password)
}

fn has_digit(password: &str) -> bool {
    DIGIT_REGEX.is_match(password)
}

fn has_special_char(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARS.contains(&c))
}
