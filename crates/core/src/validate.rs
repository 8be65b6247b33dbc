//! Input-format validation for contact fields.

use crate::error::{DomainError, DomainResult};

/// Basic email format check: `local@domain.tld`, no whitespace.
pub fn email_format(email: &str) -> DomainResult<()> {
    let invalid = || DomainError::validation(format!("invalid email format: {email}"));

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let (host, tld) = domain.rsplit_once('.').ok_or_else(invalid)?;
    if host.is_empty() || tld.is_empty() {
        return Err(invalid());
    }
    Ok(())
}

/// Phone format check: optional leading `+`, then 7-20 characters of digits
/// with space or dash separators.
pub fn phone_format(phone: &str) -> DomainResult<()> {
    let invalid = || DomainError::validation(format!("invalid phone format: {phone}"));

    let rest = phone.strip_prefix('+').unwrap_or(phone);
    if !(7..=20).contains(&rest.len()) {
        return Err(invalid());
    }

    let digits: String = rest.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    Ok(())
}
