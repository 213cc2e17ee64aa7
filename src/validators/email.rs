use super::ValidationError;
use super::required::trim_blank;

/// Checks an optional email address.
///
/// Missing or blank input is accepted. Anything else must contain both an
/// `@` and a `.`.
pub fn validate_email_optional(email: Option<&str>) -> Result<(), ValidationError> {
    let Some(email) = email else {
        return Ok(());
    };

    let email = trim_blank(email);
    if email.is_empty() {
        return Ok(());
    }

    if !email.contains('@') || !email.contains('.') {
        return Err(ValidationError::EmailInvalid);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email_optional(Some("user@example.com")).is_ok());
        assert!(validate_email_optional(Some("user.name@example.com")).is_ok());
        assert!(validate_email_optional(Some(" ivanov@mail.ru ")).is_ok());
    }

    #[test]
    fn test_absent_email() {
        assert!(validate_email_optional(None).is_ok());
        assert!(validate_email_optional(Some("")).is_ok());
        assert!(validate_email_optional(Some("   ")).is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(
            validate_email_optional(Some("notanemail")).unwrap_err(),
            ValidationError::EmailInvalid
        );
        assert_eq!(
            validate_email_optional(Some("missing@domain")).unwrap_err(),
            ValidationError::EmailInvalid
        );
        assert_eq!(
            validate_email_optional(Some("no.at.sign")).unwrap_err(),
            ValidationError::EmailInvalid
        );
    }
}
