use fieldkit::ripple::{RippleOptions, RIPPLE_CLASS};
use fieldkit::{
    ClassList, Colorable, EditOrigin, FieldEvent, Key, Ripple, Rippleable, Theme, ThemeColor,
    Toggle, ValueStore,
};

/// Minimal control counting `on_change` calls.
#[derive(Default)]
struct Counter {
    ripple: Ripple,
    disabled: bool,
    changes: usize,
    events: Vec<FieldEvent>,
}

impl Rippleable for Counter {
    fn ripple(&self) -> Ripple {
        self.ripple
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn on_change(&mut self) {
        self.changes += 1;
    }

    fn emit(&mut self, event: FieldEvent) {
        self.events.push(event);
    }
}

// ============================================================================
// Ripple Capability
// ============================================================================

#[test]
fn test_ripple_surface_by_default() {
    let control = Counter::default();
    let surface = control.gen_ripple().unwrap();
    assert_eq!(surface.class, RIPPLE_CLASS);
    assert_eq!(surface.effect, Some(RippleOptions { center: true }));
}

#[test]
fn test_ripple_click_calls_on_change() {
    let mut control = Counter::default();
    assert!(control.ripple_click());
    assert_eq!(control.changes, 1);
    assert_eq!(control.events, vec![FieldEvent::Click]);
}

#[test]
fn test_ripple_off_renders_nothing() {
    let mut control = Counter {
        ripple: Ripple::Off,
        ..Default::default()
    };
    assert!(control.gen_ripple().is_none());
    assert!(!control.ripple_click());
    assert_eq!(control.changes, 0);
}

#[test]
fn test_enabled_ripple_is_centered() {
    let control = Counter {
        ripple: Ripple::On,
        ..Default::default()
    };
    assert_eq!(
        control.gen_ripple().and_then(|s| s.effect),
        Some(RippleOptions { center: true })
    );

    let toggle = Toggle::new(ValueStore::new(false)).with_ripple(Ripple::On);
    assert_eq!(
        toggle.ripple_surface().and_then(|s| s.effect),
        Some(RippleOptions { center: true })
    );
}

#[test]
fn test_disabled_surface_has_no_effect() {
    let control = Counter {
        disabled: true,
        ..Default::default()
    };
    let surface = control.gen_ripple().unwrap();
    assert_eq!(surface.class, RIPPLE_CLASS);
    assert_eq!(surface.effect, None);
}

// ============================================================================
// Toggle
// ============================================================================

#[test]
fn test_toggle_click_flips_value() {
    let store = ValueStore::new(false);
    let mut toggle = Toggle::new(store.clone()).label("Enabled");

    assert!(toggle.ripple_click());
    assert!(store.get());
    assert_eq!(store.origin(), EditOrigin::UserEdit);
    assert_eq!(
        toggle.take_events(),
        vec![FieldEvent::Click, FieldEvent::Change("true".to_string())]
    );
    assert!(toggle.classes().contains("input-group--active"));
    assert!(toggle.classes().contains("primary--text"));
}

#[test]
fn test_toggle_space_key() {
    let store = ValueStore::new(true);
    let mut toggle = Toggle::new(store.clone());
    toggle.handle_key(Key::Char(' '));
    assert!(!toggle.is_on());
    assert_eq!(
        toggle.take_events(),
        vec![FieldEvent::Change("false".to_string())]
    );
}

#[test]
fn test_disabled_toggle_ignores_clicks() {
    let store = ValueStore::new(false);
    let mut toggle = Toggle::new(store.clone()).disabled();

    assert_eq!(toggle.ripple_surface().and_then(|s| s.effect), None);
    toggle.ripple_click();
    toggle.handle_key(Key::Char(' '));
    assert!(!store.get());
    assert!(toggle.classes().contains("input-group--disabled"));
}

// ============================================================================
// Colors
// ============================================================================

struct Swatch(Option<&'static str>);

impl Colorable for Swatch {
    fn color(&self) -> Option<&str> {
        self.0
    }
}

#[test]
fn test_color_classes() {
    let mut text = ClassList::new();
    Swatch(Some("red lighten-2")).add_text_color_classes(&mut text);
    assert_eq!(text.to_string(), "red--text text--lighten-2");

    let mut background = ClassList::new();
    Swatch(Some("red lighten-2")).add_background_color_classes(&mut background);
    assert_eq!(background.to_string(), "lighten-2 red");

    let mut none = ClassList::new();
    Swatch(None).add_text_color_classes(&mut none);
    assert!(none.is_empty());
}

#[test]
fn test_theme_resolves_text_color() {
    let theme = Theme::default();
    let mut classes = ClassList::new();
    classes.add("primary--text");

    let primary = theme.get("primary").unwrap().to_rgb();
    assert_eq!(theme.text_color(&classes), Some(primary));

    classes.add("error--text");
    let error = theme.get("error").unwrap().to_rgb();
    assert_eq!(theme.text_color(&classes), Some(error));
}

#[test]
fn test_theme_modifiers_shift_lightness() {
    let theme = Theme::new().with("gray", ThemeColor::oklch(0.5, 0.0, 0.0));
    let mut base = ClassList::new();
    base.add("gray--text");
    let mut lighter = base.clone();
    lighter.add("text--lighten-3");

    let base = theme.text_color(&base).unwrap();
    let lighter = theme.text_color(&lighter).unwrap();
    assert!(lighter.r > base.r);
}

#[test]
fn test_unknown_color_has_no_rgb() {
    let mut classes = ClassList::new();
    classes.add("chartreuse--text");
    assert_eq!(Theme::default().text_color(&classes), None);
}
