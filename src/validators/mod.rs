pub mod completed_at;
pub mod email;
pub mod name;
pub mod required;

pub use completed_at::{validate_completed_at_not_future, validate_completed_at_not_future_at};
pub use email::validate_email_optional;
pub use name::{
    FullName, GIVEN_NAME_LABEL, PATRONYMIC_LABEL, SURNAME_LABEL, validate_full_name,
    validate_name_part,
};
pub use required::require_non_empty;

use serde::{Deserialize, Serialize};

/// A rejected user input.
///
/// The `Display` text is the message shown to the end user. Variants that
/// belong to a named form field carry its label so the message can say
/// which field to fix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationError {
    Required { field: String },
    NameInvalidCharacters { field: String },
    NameForbiddenLatin { field: String },
    NameMissingNativeLetter { field: String },
    NameStartsWithRoman { field: String },
    NameInvalidStart { field: String, ch: char },
    NameInvalidEnd { field: String, ch: char },
    NameConsecutiveSpecials { field: String, first: char, second: char },
    NameDoubleOpenParen { field: String },
    NameUnbalancedParens { field: String },
    NameUnclosedParens { field: String },
    NameNestedParens { field: String },
    NameEmptyParens { field: String },
    EmailInvalid,
    CompletedInFuture,
    ClientNotSelected,
    ProjectNotSelected,
    StartDateMissing,
    DueDateMissing,
}

impl ValidationError {
    /// Label of the form field the error belongs to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Required { field }
            | Self::NameInvalidCharacters { field }
            | Self::NameForbiddenLatin { field }
            | Self::NameMissingNativeLetter { field }
            | Self::NameStartsWithRoman { field }
            | Self::NameInvalidStart { field, .. }
            | Self::NameInvalidEnd { field, .. }
            | Self::NameConsecutiveSpecials { field, .. }
            | Self::NameDoubleOpenParen { field }
            | Self::NameUnbalancedParens { field }
            | Self::NameUnclosedParens { field }
            | Self::NameNestedParens { field }
            | Self::NameEmptyParens { field } => Some(field.as_str()),
            Self::EmailInvalid
            | Self::CompletedInFuture
            | Self::ClientNotSelected
            | Self::ProjectNotSelected
            | Self::StartDateMissing
            | Self::DueDateMissing => None,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required { field } => write!(f, "Field «{field}» is required."),
            Self::NameInvalidCharacters { field } => write!(
                f,
                "Field «{field}» contains invalid characters. Allowed: Cyrillic letters, space, -, ., ', ’, ,, (), I/V."
            ),
            Self::NameForbiddenLatin { field } => write!(
                f,
                "Field «{field}»: Latin letters other than I/V are forbidden."
            ),
            Self::NameMissingNativeLetter { field } => write!(
                f,
                "Field «{field}» must contain at least one Cyrillic letter."
            ),
            Self::NameStartsWithRoman { field } => {
                write!(f, "Field «{field}»: I/V cannot be the first character.")
            }
            Self::NameInvalidStart { field, ch } => {
                write!(f, "Field «{field}» cannot start with character «{ch}».")
            }
            Self::NameInvalidEnd { field, ch } => {
                write!(f, "Field «{field}» cannot end with character «{ch}».")
            }
            Self::NameConsecutiveSpecials {
                field,
                first,
                second,
            } => write!(
                f,
                "Field «{field}»: consecutive special characters are forbidden (e.g. \"{first}{second}\")."
            ),
            Self::NameDoubleOpenParen { field } => {
                write!(f, "Field «{field}»: consecutive \"((\" are forbidden.")
            }
            Self::NameUnbalancedParens { field } => {
                write!(f, "Field «{field}»: unbalanced parentheses.")
            }
            Self::NameUnclosedParens { field } => {
                write!(f, "Field «{field}»: parentheses must be balanced.")
            }
            Self::NameNestedParens { field } => {
                write!(f, "Field «{field}»: nested parentheses are not allowed.")
            }
            Self::NameEmptyParens { field } => {
                write!(f, "Field «{field}»: empty parentheses () are not allowed.")
            }
            Self::EmailInvalid => write!(f, "Invalid email."),
            Self::CompletedInFuture => write!(
                f,
                "Completion date cannot be later than the current date and time."
            ),
            Self::ClientNotSelected => write!(f, "No client selected."),
            Self::ProjectNotSelected => write!(f, "No project selected."),
            Self::StartDateMissing => write!(f, "Project start date is not set."),
            Self::DueDateMissing => write!(f, "Task due date is not set."),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_field_label() {
        let err = ValidationError::NameInvalidStart {
            field: "Surname".to_owned(),
            ch: '-',
        };
        assert_eq!(err.to_string(), "Field «Surname» cannot start with character «-».");
        assert_eq!(err.field(), Some("Surname"));
    }

    #[test]
    fn test_consecutive_specials_message_cites_pair() {
        let err = ValidationError::NameConsecutiveSpecials {
            field: "Given name".to_owned(),
            first: ')',
            second: ',',
        };
        assert!(err.to_string().contains("\"),\""));
    }

    #[test]
    fn test_unlabelled_errors() {
        assert_eq!(ValidationError::EmailInvalid.field(), None);
        assert_eq!(ValidationError::EmailInvalid.to_string(), "Invalid email.");
    }
}
