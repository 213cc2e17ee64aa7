//! Validation of the parts of a personal name.
//!
//! A name part is written in Cyrillic. It may also contain the Latin
//! capitals `I` and `V` for ordinal suffixes, and a small set of separators.
//! The rules run in a fixed order and the first one that fails is reported.

use serde::{Deserialize, Serialize};

use super::ValidationError;
use super::required::{require_non_empty, trim_blank};

pub const SURNAME_LABEL: &str = "Surname";
pub const GIVEN_NAME_LABEL: &str = "Given name";
pub const PATRONYMIC_LABEL: &str = "Patronymic";

/// Separators that may not stand next to each other.
const SPECIAL_CHARS: &[char] = &['-', '.', ',', '\'', '’', '(', ')', ' '];

const FORBIDDEN_FIRST: &[char] = &['-', '.', '\'', '’', ',', ' ', '(', ')'];

/// A closing parenthesis may end a name, e.g. a bracketed alias.
const FORBIDDEN_LAST: &[char] = &['-', '.', '\'', '’', ',', ' ', '('];

/// `А`..=`я` is the contiguous block U+0410..U+044F; `Ё`/`ё` sit outside it.
fn is_native_letter(c: char) -> bool {
    matches!(c, 'А'..='я' | 'Ё' | 'ё')
}

fn is_roman_letter(c: char) -> bool {
    matches!(c, 'I' | 'V')
}

fn is_special(c: char) -> bool {
    SPECIAL_CHARS.contains(&c)
}

fn is_allowed(c: char) -> bool {
    is_native_letter(c) || is_roman_letter(c) || is_special(c)
}

/// Surname, given name and optional patronymic after validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullName {
    pub surname: String,
    pub given_name: String,
    pub patronymic: Option<String>,
}

/// Validates one part of a personal name.
///
/// Returns the input with surrounding whitespace trimmed. `field` is only
/// used in the error message.
///
/// # Examples
///
/// ```
/// use staffdesk::validators::validate_name_part;
///
/// assert_eq!(validate_name_part("  Иванов  ", "Surname"), Ok("Иванов"));
/// assert_eq!(validate_name_part("Иванов-IV", "Surname"), Ok("Иванов-IV"));
/// assert!(validate_name_part("IVанов", "Surname").is_err());
/// ```
///
/// # Errors
///
/// Returns the [`ValidationError`] of the first rule the input breaks.
pub fn validate_name_part<'a>(part: &'a str, field: &str) -> Result<&'a str, ValidationError> {
    let name = require_non_empty(part, field)?;

    check_characters(name, field)?;
    check_latin(name, field)?;
    check_native_letter(name, field)?;
    check_edges(name, field)?;
    check_adjacent_specials(name, field)?;
    check_parentheses(name, field)?;

    Ok(name)
}

/// Validates surname, given name and patronymic, in that order.
///
/// A blank or absent patronymic is not an error and comes back as `None`.
/// Stops at the first field that fails.
pub fn validate_full_name(
    surname: &str,
    given_name: &str,
    patronymic: Option<&str>,
) -> Result<FullName, ValidationError> {
    let surname = validate_name_part(surname, SURNAME_LABEL)?;
    let given_name = validate_name_part(given_name, GIVEN_NAME_LABEL)?;
    let patronymic = match patronymic {
        Some(p) if !trim_blank(p).is_empty() => Some(validate_name_part(p, PATRONYMIC_LABEL)?),
        _ => None,
    };

    Ok(FullName {
        surname: surname.to_owned(),
        given_name: given_name.to_owned(),
        patronymic: patronymic.map(str::to_owned),
    })
}

fn check_characters(name: &str, field: &str) -> Result<(), ValidationError> {
    if name.chars().all(is_allowed) {
        Ok(())
    } else {
        Err(ValidationError::NameInvalidCharacters {
            field: field.to_owned(),
        })
    }
}

fn check_latin(name: &str, field: &str) -> Result<(), ValidationError> {
    if name
        .chars()
        .any(|c| c.is_ascii_alphabetic() && !is_roman_letter(c))
    {
        return Err(ValidationError::NameForbiddenLatin {
            field: field.to_owned(),
        });
    }
    Ok(())
}

fn check_native_letter(name: &str, field: &str) -> Result<(), ValidationError> {
    if name.chars().any(is_native_letter) {
        Ok(())
    } else {
        Err(ValidationError::NameMissingNativeLetter {
            field: field.to_owned(),
        })
    }
}

fn check_edges(name: &str, field: &str) -> Result<(), ValidationError> {
    if let Some(first) = name.chars().next() {
        if is_roman_letter(first) {
            return Err(ValidationError::NameStartsWithRoman {
                field: field.to_owned(),
            });
        }
        if FORBIDDEN_FIRST.contains(&first) {
            return Err(ValidationError::NameInvalidStart {
                field: field.to_owned(),
                ch: first,
            });
        }
    }

    if let Some(last) = name.chars().next_back() {
        if FORBIDDEN_LAST.contains(&last) {
            return Err(ValidationError::NameInvalidEnd {
                field: field.to_owned(),
                ch: last,
            });
        }
    }

    Ok(())
}

fn check_adjacent_specials(name: &str, field: &str) -> Result<(), ValidationError> {
    let pairs = name.chars().zip(name.chars().skip(1));
    for (first, second) in pairs {
        if is_special(first) && is_special(second) {
            return Err(ValidationError::NameConsecutiveSpecials {
                field: field.to_owned(),
                first,
                second,
            });
        }
    }
    Ok(())
}

fn check_parentheses(name: &str, field: &str) -> Result<(), ValidationError> {
    let mut depth: i32 = 0;
    let mut max_depth: i32 = 0;
    let mut prev: Option<char> = None;

    for c in name.chars() {
        match c {
            '(' => {
                if prev == Some('(') {
                    return Err(ValidationError::NameDoubleOpenParen {
                        field: field.to_owned(),
                    });
                }
                depth += 1;
                max_depth = max_depth.max(depth);
            }
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return Err(ValidationError::NameUnbalancedParens {
                        field: field.to_owned(),
                    });
                }
            }
            _ => {}
        }
        prev = Some(c);
    }

    if depth != 0 {
        return Err(ValidationError::NameUnclosedParens {
            field: field.to_owned(),
        });
    }
    if max_depth > 1 {
        return Err(ValidationError::NameNestedParens {
            field: field.to_owned(),
        });
    }
    if name.contains("()") {
        return Err(ValidationError::NameEmptyParens {
            field: field.to_owned(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> String {
        "Surname".to_owned()
    }

    #[test]
    fn test_valid_names() {
        assert_eq!(validate_name_part("Иванов", "Surname"), Ok("Иванов"));
        assert_eq!(validate_name_part("Ёлкина", "Surname"), Ok("Ёлкина"));
        assert_eq!(validate_name_part("Салтыков-Щедрин", "Surname"), Ok("Салтыков-Щедрин"));
        assert_eq!(validate_name_part("Д’Артаньян", "Surname"), Ok("Д’Артаньян"));
        assert_eq!(validate_name_part("О'Нил", "Surname"), Ok("О'Нил"));
        assert_eq!(validate_name_part("Анна Мария", "Given name"), Ok("Анна Мария"));
        assert_eq!(validate_name_part("ИвановIV", "Surname"), Ok("ИвановIV"));
        assert_eq!(validate_name_part("Иванов-IV", "Surname"), Ok("Иванов-IV"));
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(validate_name_part("  Иванов  ", "Surname"), Ok("Иванов"));
        assert_eq!(validate_name_part("\tПётр\n", "Given name"), Ok("Пётр"));
        assert_eq!(validate_name_part("\u{1f}Иванов\u{1c}", "Surname"), Ok("Иванов"));
    }

    #[test]
    fn test_accepting_is_idempotent() {
        for input in [" Иванов ", "Фамилия(Псевдоним)", "Людовик XIV", "Карл-V"] {
            if let Ok(first) = validate_name_part(input, "Surname") {
                assert_eq!(validate_name_part(first, "Surname"), Ok(first));
            }
        }
    }

    #[test]
    fn test_required() {
        assert_eq!(
            validate_name_part("", "Surname").unwrap_err(),
            ValidationError::Required { field: field() }
        );
        assert_eq!(
            validate_name_part("   ", "Surname").unwrap_err(),
            ValidationError::Required { field: field() }
        );
    }

    #[test]
    fn test_invalid_characters() {
        let expected = ValidationError::NameInvalidCharacters { field: field() };
        assert_eq!(validate_name_part("123", "Surname").unwrap_err(), expected);
        assert_eq!(validate_name_part("Иванов1", "Surname").unwrap_err(), expected);
        assert_eq!(validate_name_part("Иван_ов", "Surname").unwrap_err(), expected);
        assert_eq!(validate_name_part("Ivanov", "Surname").unwrap_err(), expected);
        // Latin "o" in place of the Cyrillic one
        assert_eq!(validate_name_part("Иванoв", "Surname").unwrap_err(), expected);
        // lowercase roman letters are not in the allowed set
        assert_eq!(validate_name_part("Иванi", "Surname").unwrap_err(), expected);
        assert_eq!(validate_name_part("Иван\tов", "Surname").unwrap_err(), expected);
    }

    #[test]
    fn test_latin_check_in_isolation() {
        assert_eq!(
            check_latin("Ивaн", "Surname").unwrap_err(),
            ValidationError::NameForbiddenLatin { field: field() }
        );
        assert_eq!(
            check_latin("Иванv", "Surname").unwrap_err(),
            ValidationError::NameForbiddenLatin { field: field() }
        );
        assert!(check_latin("ИванIV", "Surname").is_ok());
    }

    #[test]
    fn test_missing_native_letter() {
        let expected = ValidationError::NameMissingNativeLetter { field: field() };
        assert_eq!(validate_name_part("IV", "Surname").unwrap_err(), expected);
        assert_eq!(validate_name_part(".V", "Surname").unwrap_err(), expected);
        assert_eq!(validate_name_part("-", "Surname").unwrap_err(), expected);
    }

    #[test]
    fn test_roman_first() {
        assert_eq!(
            validate_name_part("IVанов", "Surname").unwrap_err(),
            ValidationError::NameStartsWithRoman { field: field() }
        );
        assert_eq!(
            validate_name_part("Vанов", "Surname").unwrap_err(),
            ValidationError::NameStartsWithRoman { field: field() }
        );
    }

    #[test]
    fn test_invalid_start() {
        for ch in ['-', '.', '\'', '’', ',', '(', ')'] {
            let input = format!("{ch}Иванов");
            assert_eq!(
                validate_name_part(&input, "Surname").unwrap_err(),
                ValidationError::NameInvalidStart { field: field(), ch },
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_invalid_end() {
        for ch in ['-', '.', '\'', '’', ',', '('] {
            let input = format!("Иванов{ch}");
            assert_eq!(
                validate_name_part(&input, "Surname").unwrap_err(),
                ValidationError::NameInvalidEnd { field: field(), ch },
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_closing_paren_may_end_a_name() {
        assert_eq!(
            validate_name_part("Фамилия(Псевдоним)", "Surname"),
            Ok("Фамилия(Псевдоним)")
        );
        assert_eq!(
            validate_name_part("Иванов (Петров)", "Surname"),
            Err(ValidationError::NameConsecutiveSpecials {
                field: field(),
                first: ' ',
                second: '(',
            })
        );
    }

    #[test]
    fn test_consecutive_specials() {
        assert_eq!(validate_name_part("Иван-ов", "Surname"), Ok("Иван-ов"));
        assert_eq!(
            validate_name_part("Иван--ов", "Surname").unwrap_err(),
            ValidationError::NameConsecutiveSpecials {
                field: field(),
                first: '-',
                second: '-',
            }
        );
        assert_eq!(
            validate_name_part("Иван  ов", "Surname").unwrap_err(),
            ValidationError::NameConsecutiveSpecials {
                field: field(),
                first: ' ',
                second: ' ',
            }
        );
        assert_eq!(
            validate_name_part("Иван- ов", "Surname").unwrap_err(),
            ValidationError::NameConsecutiveSpecials {
                field: field(),
                first: '-',
                second: ' ',
            }
        );
        assert_eq!(
            validate_name_part("Иван(ов),Пётр", "Surname").unwrap_err(),
            ValidationError::NameConsecutiveSpecials {
                field: field(),
                first: ')',
                second: ',',
            }
        );
        assert_eq!(validate_name_part("Иван(ов)Пётр", "Surname"), Ok("Иван(ов)Пётр"));
    }

    #[test]
    fn test_parentheses_through_public_api() {
        assert!(validate_name_part("Фамилия((Псевдоним)", "Surname").is_err());
        assert!(validate_name_part("Фамилия()", "Surname").is_err());
        assert!(validate_name_part("Фамилия)Псевдоним(", "Surname").is_err());
        assert_eq!(
            validate_name_part("Фамилия(Псевдоним", "Surname").unwrap_err(),
            ValidationError::NameUnclosedParens { field: field() }
        );
        assert_eq!(
            validate_name_part("Фамилия)Псевдоним", "Surname").unwrap_err(),
            ValidationError::NameUnbalancedParens { field: field() }
        );
        assert_eq!(
            validate_name_part("А(Б(В)Г)", "Surname").unwrap_err(),
            ValidationError::NameNestedParens { field: field() }
        );
        assert_eq!(
            validate_name_part("Анна(Аня)Мария(Маша)", "Surname"),
            Ok("Анна(Аня)Мария(Маша)")
        );
    }

    #[test]
    fn test_parentheses_scan_in_isolation() {
        assert_eq!(
            check_parentheses("А((Б))", "Surname").unwrap_err(),
            ValidationError::NameDoubleOpenParen { field: field() }
        );
        assert_eq!(
            check_parentheses("А()Б", "Surname").unwrap_err(),
            ValidationError::NameEmptyParens { field: field() }
        );
        assert_eq!(
            check_parentheses("А)(Б", "Surname").unwrap_err(),
            ValidationError::NameUnbalancedParens { field: field() }
        );
    }

    #[test]
    fn test_earliest_rule_wins() {
        // invalid characters are reported before position rules
        assert_eq!(
            validate_name_part("-Иван1", "Surname").unwrap_err(),
            ValidationError::NameInvalidCharacters { field: field() }
        );
        // position rules are reported before adjacency
        assert_eq!(
            validate_name_part("Иван--", "Surname").unwrap_err(),
            ValidationError::NameInvalidEnd {
                field: field(),
                ch: '-',
            }
        );
        // adjacency is reported before the parenthesis scan
        assert_eq!(
            validate_name_part("Фамилия((Псевдоним)", "Surname").unwrap_err(),
            ValidationError::NameConsecutiveSpecials {
                field: field(),
                first: '(',
                second: '(',
            }
        );
    }

    #[test]
    fn test_full_name_without_patronymic() {
        let name = validate_full_name("Иванов", "Иван", Some("")).unwrap();
        assert_eq!(name.surname, "Иванов");
        assert_eq!(name.given_name, "Иван");
        assert_eq!(name.patronymic, None);

        let name = validate_full_name("Иванов", "Иван", None).unwrap();
        assert_eq!(name.patronymic, None);

        let name = validate_full_name("Иванов", "Иван", Some("   ")).unwrap();
        assert_eq!(name.patronymic, None);
    }

    #[test]
    fn test_full_name_trims_every_part() {
        let name = validate_full_name(" Иванов", "Иван ", Some(" Петрович ")).unwrap();
        assert_eq!(
            name,
            FullName {
                surname: "Иванов".to_owned(),
                given_name: "Иван".to_owned(),
                patronymic: Some("Петрович".to_owned()),
            }
        );
    }

    #[test]
    fn test_full_name_stops_at_first_failure() {
        assert_eq!(
            validate_full_name("123", "Иван", None).unwrap_err(),
            ValidationError::NameInvalidCharacters {
                field: SURNAME_LABEL.to_owned()
            }
        );
        // the given name is bad too, but the surname is reported
        assert_eq!(
            validate_full_name("", "", None).unwrap_err(),
            ValidationError::Required {
                field: SURNAME_LABEL.to_owned()
            }
        );
        assert_eq!(
            validate_full_name("Иванов", "", None).unwrap_err(),
            ValidationError::Required {
                field: GIVEN_NAME_LABEL.to_owned()
            }
        );
        assert_eq!(
            validate_full_name("Иванов", "Иван", Some("Petrovich")).unwrap_err(),
            ValidationError::NameInvalidCharacters {
                field: PATRONYMIC_LABEL.to_owned()
            }
        );
    }
}
