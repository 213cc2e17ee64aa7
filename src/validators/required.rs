use super::ValidationError;

/// Whitespace as the form layer sees it: Unicode whitespace plus the ASCII
/// information separators U+001C..U+001F.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

/// Strips leading and trailing blank characters.
pub(crate) fn trim_blank(value: &str) -> &str {
    value.trim_matches(is_blank)
}

/// Trims `value` and rejects it when nothing is left.
///
/// Returns the trimmed slice on success.
pub fn require_non_empty<'a>(value: &'a str, field: &str) -> Result<&'a str, ValidationError> {
    let trimmed = trim_blank(value);

    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_owned(),
        });
    }

    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_trims() {
        assert_eq!(require_non_empty("  Developer ", "Position"), Ok("Developer"));
    }

    #[test]
    fn test_required_rejects_blank() {
        let expected = ValidationError::Required {
            field: "Position".to_owned(),
        };
        assert_eq!(require_non_empty("", "Position").unwrap_err(), expected);
        assert_eq!(require_non_empty(" \t\n", "Position").unwrap_err(), expected);
        assert_eq!(require_non_empty("\u{1c}\u{1f}", "Position").unwrap_err(), expected);
    }

    #[test]
    fn test_required_trims_information_separators() {
        assert_eq!(require_non_empty("\u{1f}Developer\u{1e}", "Position"), Ok("Developer"));
        assert_eq!(trim_blank("\u{1c} Lead \u{1d}"), "Lead");
    }
}
