//! Personal-name rules exercised through the public validator API.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use staffdesk::ValidationError;
use staffdesk::validators::{
    FullName, GIVEN_NAME_LABEL, SURNAME_LABEL, validate_full_name, validate_name_part,
};

fn surname(input: &str) -> Result<&str, ValidationError> {
    validate_name_part(input, SURNAME_LABEL)
}

#[test]
fn test_surrounding_whitespace_is_trimmed() {
    assert_eq!(surname("  Иванов  "), Ok("Иванов"));
    assert_eq!(surname("\u{1f}Иванов"), Ok("Иванов"));
    assert_eq!(
        validate_full_name("Иванов", "Иван", Some("\u{1e} ")).unwrap().patronymic,
        None
    );
}

#[test]
fn test_accepted_names_are_fixed_points() {
    let inputs = [
        "  Иванов  ",
        "ИвановIV",
        "Иванов-IV",
        "Иван-ов",
        "Фамилия(Псевдоним)",
        "Мария Луиза",
        "Д’Артаньян",
    ];
    for input in inputs {
        let accepted = surname(input).unwrap();
        assert_eq!(surname(accepted), Ok(accepted), "input {input:?}");
    }
}

#[test]
fn test_roman_numeral_suffixes() {
    assert_eq!(surname("ИвановIV"), Ok("ИвановIV"));
    assert_eq!(surname("Иванов-IV"), Ok("Иванов-IV"));
    assert_eq!(
        surname("IVанов"),
        Err(ValidationError::NameStartsWithRoman {
            field: SURNAME_LABEL.to_owned()
        })
    );
}

#[test]
fn test_latin_lookalike_is_rejected() {
    // Latin "o" in the middle of a Cyrillic word
    assert!(surname("Иванoв").is_err());
    assert!(surname("Иванов-iv").is_err());
}

#[test]
fn test_native_letter_required() {
    let missing = ValidationError::NameMissingNativeLetter {
        field: SURNAME_LABEL.to_owned(),
    };
    assert_eq!(surname("IV"), Err(missing.clone()));
    // would also break the first-character rule, which is checked later
    assert_eq!(surname(".V"), Err(missing));
}

#[test]
fn test_adjacent_specials() {
    assert_eq!(surname("Иван-ов"), Ok("Иван-ов"));
    assert!(matches!(
        surname("Иван--ов"),
        Err(ValidationError::NameConsecutiveSpecials {
            first: '-',
            second: '-',
            ..
        })
    ));
    assert!(matches!(
        surname("Иван  ов"),
        Err(ValidationError::NameConsecutiveSpecials {
            first: ' ',
            second: ' ',
            ..
        })
    ));
    assert!(surname("Иван)(ов").is_err());
}

#[test]
fn test_parentheses() {
    assert_eq!(surname("Фамилия(Псевдоним)"), Ok("Фамилия(Псевдоним)"));
    assert!(surname("Фамилия((Псевдоним)").is_err());
    assert!(surname("Фамилия()").is_err());
    assert_eq!(
        surname("Фамилия(Псевдоним"),
        Err(ValidationError::NameUnclosedParens {
            field: SURNAME_LABEL.to_owned()
        })
    );
    assert!(surname("Фамилия)Псевдоним(").is_err());
    assert_eq!(
        surname("Фамилия)Псевдоним"),
        Err(ValidationError::NameUnbalancedParens {
            field: SURNAME_LABEL.to_owned()
        })
    );
    assert_eq!(
        surname("Ан(на)Мария(Луиза)"),
        Ok("Ан(на)Мария(Луиза)")
    );
}

#[test]
fn test_closing_paren_may_end_but_not_start() {
    assert_eq!(surname("Петров(Пётр)"), Ok("Петров(Пётр)"));
    assert!(matches!(
        surname(")Петров"),
        Err(ValidationError::NameInvalidStart { ch: ')', .. })
    ));
    assert!(matches!(
        surname("Петров("),
        Err(ValidationError::NameInvalidEnd { ch: '(', .. })
    ));
}

#[test]
fn test_blank_is_required_before_anything_else() {
    let err = surname("   ").unwrap_err();
    assert_eq!(
        err,
        ValidationError::Required {
            field: SURNAME_LABEL.to_owned()
        }
    );
    assert_eq!(err.to_string(), "Field «Surname» is required.");
}

#[test]
fn test_full_name_with_blank_patronymic() {
    assert_eq!(
        validate_full_name("Иванов", "Иван", Some("")),
        Ok(FullName {
            surname: "Иванов".to_owned(),
            given_name: "Иван".to_owned(),
            patronymic: None,
        })
    );
}

#[test]
fn test_full_name_stops_at_first_bad_field() {
    let err = validate_full_name("123", "Иван", None).unwrap_err();
    assert_eq!(err.field(), Some(SURNAME_LABEL));
    assert!(err.to_string().contains("contains invalid characters"));

    // the bad given name is never reached
    let err = validate_full_name("1", "2", None).unwrap_err();
    assert_ne!(err.field(), Some(GIVEN_NAME_LABEL));
}

#[test]
fn test_full_name_reports_given_name_label() {
    let err = validate_full_name("Иванов", "Ivan", None).unwrap_err();
    assert_eq!(
        err,
        ValidationError::NameInvalidCharacters {
            field: GIVEN_NAME_LABEL.to_owned()
        }
    );
}
