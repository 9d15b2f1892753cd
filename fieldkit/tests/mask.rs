use fieldkit::mask::is_mask_delimiter;
use fieldkit::{CaretTracker, ConfigError, Maskable, NumberMask, PatternMask};

fn pattern(mask: &str) -> PatternMask {
    PatternMask::parse(mask, false).unwrap()
}

// ============================================================================
// Pattern Masks
// ============================================================================

#[test]
fn test_presets_expand() {
    assert_eq!(pattern("date").pattern(), "##/##/####");
    assert_eq!(pattern("phone").pattern(), "(###) ### - ####");
    assert_eq!(pattern("social").pattern(), "###-##-####");
    assert_eq!(pattern("time-with-seconds").pattern(), "##:##:##");
    assert_eq!(pattern("credit-card").max_len(), 25);
}

#[test]
fn test_date_mask() {
    let mask = pattern("date");
    assert_eq!(mask.mask_text("12252020"), "12/25/2020");
    assert_eq!(mask.mask_text("12/25/2020"), "12/25/2020");
    assert_eq!(mask.unmask_text("12/25/2020"), "12252020");
}

#[test]
fn test_partial_input_fills_next_literal() {
    let mask = pattern("date");
    assert_eq!(mask.mask_text("1"), "1");
    assert_eq!(mask.mask_text("12"), "12/");
    assert_eq!(mask.mask_text(""), "");
}

#[test]
fn test_phone_mask_writes_leading_literal() {
    let mask = pattern("phone");
    assert_eq!(mask.mask_text("5551234567"), "(555) 123 - 4567");
    assert_eq!(mask.unmask_text("(555) 123 - 4567"), "5551234567");
}

#[test]
fn test_mask_stops_at_rejected_char() {
    let mask = pattern("date");
    assert_eq!(mask.mask_text("12a5"), "12/");
    assert_eq!(mask.mask_text("a"), "");
}

#[test]
fn test_letter_tokens_convert_case() {
    let mask = pattern("AA-nn");
    assert_eq!(mask.mask_text("ab1C"), "AB-1c");
    assert_eq!(pattern("aa").mask_text("XY"), "xy");
    assert_eq!(pattern("A").mask_text("1"), "");
}

#[test]
fn test_delimiter_token() {
    let mask = pattern("#X#");
    assert_eq!(mask.mask_text("1/2"), "1/2");
    assert_eq!(mask.mask_text("1a2"), "1");
}

#[test]
fn test_dont_fill_blanks() {
    let mask = PatternMask::parse("##/##", true).unwrap();
    assert_eq!(mask.mask_text("12"), "12");
    assert_eq!(mask.mask_text("1234"), "12");
    assert_eq!(mask.mask_text("12/34"), "12/34");
}

#[test]
fn test_pattern_without_tokens_rejected() {
    assert_eq!(
        PatternMask::parse("--", false),
        Err(ConfigError::UnknownMask("--".to_string()))
    );
}

#[test]
fn test_delimiter_set() {
    for c in ['-', '/', '(', ')', ' ', ':', '.', ',', '\\'] {
        assert!(is_mask_delimiter(c), "{c:?} should be a delimiter");
    }
    for c in ['1', 'a', 'Z', '#'] {
        assert!(!is_mask_delimiter(c), "{c:?} should not be a delimiter");
    }
}

// ============================================================================
// Number Mask
// ============================================================================

#[test]
fn test_number_mask_groups_integer_digits() {
    let mask = NumberMask::new('.', Some(','));
    assert_eq!(mask.mask_text("1"), "1");
    assert_eq!(mask.mask_text("123"), "123");
    assert_eq!(mask.mask_text("1234"), "1,234");
    assert_eq!(mask.mask_text("1234567.891"), "1,234,567.891");
    assert_eq!(mask.mask_text("-1234"), "-1,234");
    assert_eq!(mask.mask_text("-123"), "-123");
}

#[test]
fn test_number_mask_regroups_formatted_input() {
    let mask = NumberMask::new('.', Some(','));
    assert_eq!(mask.mask_text("12,34"), "1,234");
    assert_eq!(mask.unmask_text("1,234,567.5"), "1234567.5");
}

#[test]
fn test_number_mask_custom_separators() {
    let mask = NumberMask::new(',', Some('.'));
    assert_eq!(mask.mask_text("1234,5"), "1.234,5");
    assert_eq!(mask.unmask_text("1.234,5"), "1234,5");
    assert!(mask.is_delimiter('.'));
    assert!(!mask.is_delimiter(','));
}

#[test]
fn test_number_mask_without_grouping() {
    let mask = NumberMask::new('.', None);
    assert_eq!(mask.mask_text("1234567"), "1234567");
    assert!(!mask.is_delimiter(','));
}

// ============================================================================
// Caret Tracker
// ============================================================================

#[test]
fn test_tracker_restores_across_regrouping() {
    let mask = NumberMask::new('.', Some(','));
    let mut tracker = CaretTracker::new();

    tracker.reset("15,234", 3, &mask);
    assert_eq!(tracker.selection_count(), 2);
    assert_eq!(tracker.restore("152,340", &mask), 2);
    assert_eq!(tracker.restore("1,523,400", &mask), 3);
}

#[test]
fn test_tracker_skips_trailing_delimiters() {
    let mask = NumberMask::new('.', Some(','));
    let mut tracker = CaretTracker::new();
    tracker.set_selection_count(1);
    assert_eq!(tracker.restore("1,234", &mask), 1);

    let date = pattern("date");
    tracker.set_selection_count(2);
    assert_eq!(tracker.restore("12/2", &date), 2);
    tracker.set_selection_count(3);
    assert_eq!(tracker.restore("12/2", &date), 4);
}

#[test]
fn test_tracker_clamps_to_text_end() {
    let mask = NumberMask::new('.', Some(','));
    let mut tracker = CaretTracker::new();
    tracker.set_selection_count(10);
    assert_eq!(tracker.restore("1,234", &mask), 5);
    tracker.set_selection_count(0);
    assert_eq!(tracker.restore("1,234", &mask), 0);
}
