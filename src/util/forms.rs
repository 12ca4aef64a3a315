//! Pure form validation for the auth and post pages.
//!
//! Validators trim what should be trimmed and return the cleaned values, or a
//! message ready to show next to the form. Passwords are never trimmed.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::PostDraft;

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_TITLE_LEN: usize = 200;

/// Loose shape check: `local@domain.tld` with no whitespace.
pub fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}

/// # Errors
///
/// Returns a display message when the email is blank or malformed.
pub fn validate_email_input(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter your email address.");
    }
    if !looks_like_email(email) {
        return Err("Enter a valid email address.");
    }
    Ok(email.to_owned())
}

/// # Errors
///
/// Returns a display message when either field is unusable.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = validate_email_input(email)?;
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email, password.to_owned()))
}

/// # Errors
///
/// Returns a display message when the password is too short or the
/// confirmation differs.
pub fn validate_new_password(password: &str, confirm: &str) -> Result<String, &'static str> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(password.to_owned())
}

/// # Errors
///
/// Returns a display message for the first invalid field.
pub fn validate_registration_input(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(String, String, String), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter your name.");
    }
    let email = validate_email_input(email)?;
    let password = validate_new_password(password, confirm)?;
    Ok((name.to_owned(), email, password))
}

/// # Errors
///
/// Returns a display message when the title or body is blank, or the title is
/// too long.
pub fn validate_post_input(title: &str, body: &str) -> Result<PostDraft, &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Give your post a title.");
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err("Title must be 200 characters or fewer.");
    }
    if body.trim().is_empty() {
        return Err("Write something before publishing.");
    }
    Ok(PostDraft { title: title.to_owned(), body: body.trim_end().to_owned() })
}
