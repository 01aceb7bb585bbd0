//! User-facing verdict lines for a checked candidate.

use crate::password::Password;

/// Renders the one-line verdict shown after a check.
pub fn verdict_line(password: &Password) -> String {
    if password.is_valid() {
        format!("Password {password} is valid. Thank you for joining!")
    } else {
        format!("Password {password} is not valid. Please try again.")
    }
}
