//! Input normalization for names & emails.

use crate::server::error::validation::ValidationError;

/// Trims a name, rejecting names that are empty after trimming
///
/// # Arguments
/// - `name`: The submitted name
/// - `kind`: What is being named (`"team"`, `"project"`, ...), used in the error message
pub fn trimmed_name(name: &str, kind: &'static str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName(kind));
    }

    Ok(name.to_string())
}

/// Trims an email, rejecting emails that are empty after trimming
pub fn trimmed_email(email: &str) -> Result<String, ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }

    Ok(email.to_string())
}
