use fieldkit::limits::{check_edit, Edit};
use fieldkit::{parse, NumberFieldConfig, RejectReason};

fn config() -> NumberFieldConfig {
    NumberFieldConfig::new().integer_limit(4).decimal_limit(2)
}

// ============================================================================
// Parser
// ============================================================================

#[test]
fn test_parse_integer_and_decimal() {
    let parsed = parse("1234.56", &config());
    assert_eq!(parsed.original, "1234.56");
    assert_eq!(parsed.string_value, "1234.56");
    assert_eq!(parsed.integer_part, "1234");
    assert_eq!(parsed.decimal_part, "56");
    assert!(parsed.contains_decimal);
    assert_eq!(parsed.integer_length, 4);
    assert_eq!(parsed.decimal_length, 2);
    assert_eq!(parsed.separator_index(), Some(4));
}

#[test]
fn test_parse_empty() {
    let parsed = parse("", &config());
    assert_eq!(parsed.integer_part, "");
    assert_eq!(parsed.decimal_part, "");
    assert!(!parsed.contains_decimal);
    assert_eq!(parsed.integer_length, 0);
    assert_eq!(parsed.separator_index(), None);
    assert!(parsed.is_well_formed('.'));
}

#[test]
fn test_parse_strips_thousands_separator() {
    let parsed = parse("1,234.5", &config());
    assert_eq!(parsed.original, "1,234.5");
    assert_eq!(parsed.string_value, "1234.5");
    assert_eq!(parsed.integer_length, 4);
}

#[test]
fn test_parse_sign_not_counted() {
    let parsed = parse("-12.5", &config());
    assert_eq!(parsed.integer_part, "-12");
    assert_eq!(parsed.integer_length, 2);
    assert!(parsed.is_well_formed('.'));
}

#[test]
fn test_parse_trailing_separator() {
    let parsed = parse("42.", &config());
    assert!(parsed.contains_decimal);
    assert_eq!(parsed.decimal_part, "");
    assert_eq!(parsed.decimal_length, 0);
    assert!(parsed.in_decimal_part(3));
    assert!(!parsed.in_decimal_part(2));
}

#[test]
fn test_parse_splits_on_first_separator() {
    let parsed = parse("1.2.3", &config());
    assert_eq!(parsed.integer_part, "1");
    assert_eq!(parsed.decimal_part, "2.3");
    assert!(parsed.has_extra_separator('.'));
    assert!(!parsed.is_well_formed('.'));
}

#[test]
fn test_parse_custom_separators() {
    let config = NumberFieldConfig::new()
        .decimal_separator(',')
        .thousands_separator(Some('.'));
    let parsed = parse("1.234,5", &config);
    assert_eq!(parsed.string_value, "1234,5");
    assert_eq!(parsed.integer_part, "1234");
    assert_eq!(parsed.decimal_part, "5");
}

#[test]
fn test_parse_non_digits_are_not_well_formed() {
    assert!(!parse("1a", &config()).is_well_formed('.'));
    assert!(!parse("1.x", &config()).is_well_formed('.'));
    assert!(parse(".", &config()).is_well_formed('.'));
}

// ============================================================================
// Limit Enforcer
// ============================================================================

#[test]
fn test_integer_edit_within_limit() {
    let parsed = parse("1234", &config());
    assert_eq!(check_edit(&parsed, Edit::at(3), &config()), Ok(()));
}

#[test]
fn test_integer_edit_over_limit() {
    let parsed = parse("12345", &config());
    assert_eq!(
        check_edit(&parsed, Edit::at(4), &config()),
        Err(RejectReason::IntegerLimit {
            length: 5,
            limit: 4
        })
    );
}

#[test]
fn test_decimal_edit_over_limit() {
    let parsed = parse("1.234", &config());
    assert_eq!(
        check_edit(&parsed, Edit::at(4), &config()),
        Err(RejectReason::DecimalLimit {
            length: 3,
            limit: 2
        })
    );
}

#[test]
fn test_separator_exempt_from_integer_limit() {
    let parsed = parse("12345.", &config());
    assert_eq!(check_edit(&parsed, Edit::separator_at(5), &config()), Ok(()));
}

#[test]
fn test_separator_splitting_digits_over_decimal_limit() {
    let config = NumberFieldConfig::new().integer_limit(6).decimal_limit(2);
    let parsed = parse("1.2345", &config);
    assert_eq!(
        check_edit(&parsed, Edit::separator_at(1), &config),
        Err(RejectReason::DecimalLimit {
            length: 4,
            limit: 2
        })
    );

    let parsed = parse("123.45", &config);
    assert_eq!(check_edit(&parsed, Edit::separator_at(3), &config), Ok(()));
}

#[test]
fn test_decimal_edit_ignores_oversized_integer() {
    let parsed = parse("12345.6", &config());
    assert_eq!(check_edit(&parsed, Edit::at(6), &config()), Ok(()));
    assert!(check_edit(&parsed, Edit::at(0), &config()).is_err());
}

#[test]
fn test_duplicate_separator_rejected() {
    let parsed = parse("1.2.", &config());
    assert_eq!(
        check_edit(&parsed, Edit::separator_at(3), &config()),
        Err(RejectReason::DuplicateSeparator('.'))
    );
}

#[test]
fn test_reject_reason_messages() {
    let reason = RejectReason::IntegerLimit {
        length: 5,
        limit: 4,
    };
    assert_eq!(reason.to_string(), "integer part has 5 digits, limit is 4");
    assert_eq!(
        RejectReason::DuplicateSeparator(',').to_string(),
        "value already contains decimal separator ','"
    );
}
