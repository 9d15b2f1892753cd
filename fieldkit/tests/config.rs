use fieldkit::{
    ConfigError, FieldType, NumberField, NumberFieldConfig, TextFieldConfig, ValueStore,
};

// ============================================================================
// Number Field Config
// ============================================================================

#[test]
fn test_number_config_defaults() {
    let config = NumberFieldConfig::new();
    assert_eq!(config.decimal_separator, '.');
    assert_eq!(config.thousands_separator, Some(','));
    assert_eq!(config.integer_limit, 12);
    assert_eq!(config.decimal_limit, 2);
    assert_eq!(config.field.color.as_deref(), Some("primary"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_separator_collision() {
    let config = NumberFieldConfig::new().thousands_separator(Some('.'));
    assert_eq!(config.validate(), Err(ConfigError::SeparatorCollision('.')));

    let store = ValueStore::new(String::new());
    assert!(NumberField::new(config, store).is_err());
}

#[test]
fn test_invalid_separators() {
    let digit = NumberFieldConfig::new().decimal_separator('5');
    assert_eq!(digit.validate(), Err(ConfigError::InvalidSeparator('5')));

    let minus = NumberFieldConfig::new().thousands_separator(Some('-'));
    assert_eq!(minus.validate(), Err(ConfigError::InvalidSeparator('-')));
}

#[test]
fn test_number_config_from_json() {
    let config: NumberFieldConfig = serde_json::from_str(
        r#"{
            "decimalSeparator": ",",
            "thousandsSeparator": ".",
            "integerLimit": 6,
            "prefix": "€ ",
            "clearable": true,
            "validateOnBlur": true,
            "box": true,
            "fullWidth": true
        }"#,
    )
    .unwrap();

    assert_eq!(config.decimal_separator, ',');
    assert_eq!(config.thousands_separator, Some('.'));
    assert_eq!(config.integer_limit, 6);
    assert_eq!(config.decimal_limit, 2);
    assert_eq!(config.field.prefix.as_deref(), Some("€ "));
    assert!(config.field.clearable);
    assert!(config.field.validate_on_blur);
    assert!(config.boxed);
    assert!(config.full_width);
    assert!(config.validate().is_ok());
}

#[test]
fn test_null_thousands_separator_disables_grouping() {
    let config: NumberFieldConfig =
        serde_json::from_str(r#"{ "thousandsSeparator": null }"#).unwrap();
    assert_eq!(config.thousands_separator, None);
}

// ============================================================================
// Text Field Config
// ============================================================================

#[test]
fn test_text_config_from_json() {
    let config: TextFieldConfig = serde_json::from_str(
        r#"{
            "type": "datetime-local",
            "mask": "date",
            "box": true,
            "counter": 10,
            "autoGrow": true,
            "label": "When"
        }"#,
    )
    .unwrap();

    assert_eq!(config.field_type, FieldType::DatetimeLocal);
    assert_eq!(config.mask.as_deref(), Some("date"));
    assert!(config.boxed);
    assert!(config.auto_grow);
    assert_eq!(config.counter, Some(10));
    assert_eq!(config.rows, 5);
    assert_eq!(config.field.label.as_deref(), Some("When"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_text_config_resolves_mask() {
    let config = TextFieldConfig::new().mask("phone");
    let mask = config.pattern_mask().unwrap().unwrap();
    assert_eq!(mask.pattern(), "(###) ### - ####");

    assert_eq!(TextFieldConfig::new().pattern_mask(), Ok(None));
}

#[test]
fn test_textarea_flags() {
    assert!(TextFieldConfig::new().textarea().is_textarea());
    assert!(TextFieldConfig::new().multi_line().is_textarea());
    assert!(!TextFieldConfig::new().is_textarea());
}

#[test]
fn test_config_error_messages() {
    assert_eq!(
        ConfigError::SeparatorCollision(',').to_string(),
        "decimal separator ',' is also used as thousands separator"
    );
    assert_eq!(
        ConfigError::unknown_mask("nope").to_string(),
        "unknown mask 'nope'"
    );
}
