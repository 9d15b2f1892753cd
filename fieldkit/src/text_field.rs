//! Text field with optional pattern mask, counter and multi-line mode.

use crate::caret::CaretTracker;
use crate::config::{FieldType, TextFieldConfig};
use crate::error::ConfigError;
use crate::event::{FieldEvent, Key, Modifiers, TextEditResult};
use crate::input::FieldCore;
use crate::mask::{Maskable, PatternMask};
use crate::store::{EditOrigin, ValueStore};
use crate::style::{ClassList, Colorable, Soloable};
use crate::text::{char_len, insert_char, remove_char};
use crate::tick::FieldTask;
use crate::validation::{ErrorDisplay, Rules, Validatable};
use crate::view::{caret_cell, FieldAttrs, FieldView};

const PASSWORD_CHAR: char = '•';

/// A single or multi-line text input.
///
/// Without a mask the stored value is the text itself. With a mask the
/// stored value is unmasked (delimiters stripped) unless
/// `return_masked_value` is set, and the caret is restored after every
/// reformat the same way the number field does it.
#[derive(Debug)]
pub struct TextField {
    config: TextFieldConfig,
    mask: Option<PatternMask>,
    core: FieldCore,
    lazy_value: String,
    display: String,
    caret: usize,
    tracker: CaretTracker,
    bad_input: bool,
    /// Rows measured for auto-grow.
    measured_rows: Option<usize>,
}

impl TextField {
    pub fn new(config: TextFieldConfig, store: ValueStore<String>) -> Result<Self, ConfigError> {
        let mask = config.pattern_mask()?;
        let initial = store.get();
        let core = FieldCore::new(config.field.clone(), store);

        let mut field = Self {
            config,
            mask,
            core,
            lazy_value: String::new(),
            display: String::new(),
            caret: 0,
            tracker: CaretTracker::new(),
            bad_input: false,
            measured_rows: None,
        };
        field.load(&initial);
        Ok(field)
    }

    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.core.rules = rules;
        self
    }

    pub fn with_error_display(mut self, display: ErrorDisplay) -> Self {
        self.core.error_display = display;
        self
    }

    pub fn config(&self) -> &TextFieldConfig {
        &self.config
    }

    /// Internal value (unmasked when a mask is set).
    pub fn value(&self) -> &str {
        &self.lazy_value
    }

    /// Text as displayed (masked, but not password-hidden).
    pub fn display_text(&self) -> &str {
        &self.display
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn bad_input(&self) -> bool {
        self.bad_input
    }

    pub fn is_focused(&self) -> bool {
        self.core.focus.is_focused()
    }

    pub fn is_dirty(&self) -> bool {
        !self.lazy_value.is_empty() || self.bad_input || self.config.field_type.is_always_dirty()
    }

    pub fn is_textarea(&self) -> bool {
        self.config.is_textarea()
    }

    fn should_auto_grow(&self) -> bool {
        self.is_textarea() && self.config.auto_grow
    }

    fn no_resize_handle(&self) -> bool {
        self.is_textarea() && (self.config.no_resize || self.should_auto_grow())
    }

    /// Counter text, `"<length> / <max>"`.
    pub fn counter(&self) -> Option<String> {
        self.config
            .counter
            .map(|max| format!("{} / {}", char_len(&self.lazy_value), max))
    }

    /// Height in rows.
    pub fn height(&self) -> usize {
        if !self.is_textarea() {
            return 1;
        }
        self.measured_rows.unwrap_or(self.config.rows)
    }

    pub fn store(&self) -> &ValueStore<String> {
        &self.core.store
    }

    pub fn take_events(&mut self) -> Vec<FieldEvent> {
        self.core.take_events()
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    pub fn mount(&mut self) {
        if self.should_auto_grow() {
            self.core.ticks.schedule(FieldTask::MeasureHeight);
        }
        if self.core.options.autofocus {
            self.focus();
        }
    }

    pub fn focus(&mut self) -> bool {
        self.core.focus(&self.lazy_value)
    }

    pub fn blur(&mut self) -> bool {
        self.flush_caret();
        self.core.blur(&self.lazy_value)
    }

    pub fn clear(&mut self) -> bool {
        if !self.core.options.clearable || self.core.options.disabled {
            return false;
        }
        self.core.ticks.take(FieldTask::PlaceCaret);
        self.lazy_value.clear();
        self.display.clear();
        self.caret = 0;
        self.tracker.set_selection_count(0);
        self.bad_input = false;
        self.publish();
        self.core.ticks.schedule(FieldTask::Focus);
        true
    }

    pub fn after_render(&mut self) {
        for task in self.core.ticks.drain() {
            match task {
                FieldTask::PlaceCaret => self.place_caret(),
                FieldTask::Validate => {
                    self.validate();
                }
                FieldTask::Focus => {
                    self.focus();
                }
                FieldTask::MeasureHeight => self.measure_height(),
            }
        }
    }

    /// Apply a store write made outside this field.
    pub fn sync(&mut self) -> bool {
        let Some((value, origin)) = self.core.take_store_update() else {
            return false;
        };

        self.load(&value);
        if origin == EditOrigin::ExternalUpdate && self.mask.is_some() {
            let emitted = self.emitted_value();
            if emitted != value {
                log::debug!("text field normalized external value {value:?} to {emitted:?}");
                self.core.publish(&emitted);
            }
        }

        if !self.core.options.validate_on_blur {
            self.validate();
        }
        if self.should_auto_grow() {
            self.core.ticks.schedule(FieldTask::MeasureHeight);
        }
        true
    }

    pub fn set_caret(&mut self, caret: usize) {
        self.core.ticks.take(FieldTask::PlaceCaret);
        self.caret = caret.min(char_len(&self.display));
        if let Some(mask) = &self.mask {
            self.tracker.reset(&self.display, self.caret, mask);
        }
    }

    // -------------------------------------------------------------------------
    // Key handling
    // -------------------------------------------------------------------------

    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> TextEditResult {
        if self.core.options.disabled || !self.is_focused() {
            return TextEditResult::Ignored;
        }
        self.flush_caret();

        let editable = self.core.is_editable();
        match key {
            Key::Char(c) if modifiers.is_typing() && editable => self.insert(c),
            // Enter in a textarea is text, and must not reach the host
            // (where it could e.g. close a dialog).
            Key::Enter if self.is_textarea() && editable => self.insert('\n'),
            Key::Enter => {
                self.core.emit(FieldEvent::Submit);
                TextEditResult::Submitted
            }
            Key::Backspace if modifiers.none() && editable => self.delete_back(),
            Key::Delete if modifiers.none() && editable => self.delete_forward(),
            Key::Left if !modifiers.ctrl => {
                self.set_caret(self.caret.saturating_sub(1));
                TextEditResult::Handled
            }
            Key::Right if !modifiers.ctrl => {
                self.set_caret(self.caret + 1);
                TextEditResult::Handled
            }
            Key::Home => {
                self.set_caret(0);
                TextEditResult::Handled
            }
            Key::End => {
                self.set_caret(char_len(&self.display));
                TextEditResult::Handled
            }
            _ => TextEditResult::Ignored,
        }
    }

    fn insert(&mut self, c: char) -> TextEditResult {
        let mut candidate = self.display.clone();
        insert_char(&mut candidate, self.caret, c);
        if self.apply(candidate, self.caret + 1) {
            TextEditResult::Changed
        } else {
            // Refused chars leave the caret where it was.
            self.set_caret(self.caret);
            TextEditResult::Rejected
        }
    }

    fn delete_back(&mut self) -> TextEditResult {
        if self.caret == 0 {
            return TextEditResult::Handled;
        }
        let mut candidate = self.display.clone();
        remove_char(&mut candidate, self.caret - 1);
        if self.apply(candidate, self.caret - 1) {
            TextEditResult::Changed
        } else {
            TextEditResult::Handled
        }
    }

    fn delete_forward(&mut self) -> TextEditResult {
        let mut candidate = self.display.clone();
        if remove_char(&mut candidate, self.caret).is_none() {
            return TextEditResult::Handled;
        }
        if self.apply(candidate, self.caret) {
            TextEditResult::Changed
        } else {
            TextEditResult::Handled
        }
    }

    /// Take edited display text with the caret at `caret`.
    /// Returns true if the value changed.
    fn apply(&mut self, candidate: String, caret: usize) -> bool {
        let Some(mask) = &self.mask else {
            if candidate == self.lazy_value {
                return false;
            }
            self.lazy_value = candidate;
            self.display = self.lazy_value.clone();
            self.caret = caret.min(char_len(&self.display));
            self.after_change();
            return true;
        };

        self.tracker.reset(&candidate, caret, mask);
        let unmasked = mask.unmask_text(&mask.mask_text(&mask.unmask_text(&candidate)));
        // Either the mask refused the char or only a delimiter was touched;
        // the caret still has to settle on the reformatted text.
        self.core.ticks.schedule(FieldTask::PlaceCaret);
        if unmasked == self.lazy_value {
            return false;
        }

        self.lazy_value = unmasked;
        self.display = mask.mask_text(&self.lazy_value);
        self.caret = caret.min(char_len(&self.display));
        self.after_change();
        true
    }

    fn after_change(&mut self) {
        self.update_bad_input();
        self.publish();
        if self.should_auto_grow() {
            self.core.ticks.schedule(FieldTask::MeasureHeight);
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn emitted_value(&self) -> String {
        if self.mask.is_some() && self.config.return_masked_value {
            self.display.clone()
        } else {
            self.lazy_value.clone()
        }
    }

    fn publish(&mut self) {
        let value = self.emitted_value();
        log::trace!("text field input {value:?}");
        self.core.publish(&value);
        if !self.core.options.validate_on_blur {
            self.validate();
        }
    }

    fn load(&mut self, value: &str) {
        self.core.ticks.take(FieldTask::PlaceCaret);
        match &self.mask {
            Some(mask) => {
                self.lazy_value = mask.unmask_text(&mask.mask_text(&mask.unmask_text(value)));
                self.display = mask.mask_text(&self.lazy_value);
            }
            None => {
                self.lazy_value = value.to_string();
                self.display = self.lazy_value.clone();
            }
        }
        self.caret = char_len(&self.display);
        if let Some(mask) = &self.mask {
            self.tracker.reset(&self.display, self.caret, mask);
        }
        self.update_bad_input();
    }

    fn update_bad_input(&mut self) {
        self.bad_input = self.config.field_type == FieldType::Number
            && !self.lazy_value.is_empty()
            && self.lazy_value.trim().parse::<f64>().is_err();
    }

    fn place_caret(&mut self) {
        if let Some(mask) = &self.mask {
            self.caret = self.tracker.restore(&self.display, mask);
        }
    }

    fn flush_caret(&mut self) {
        if self.core.ticks.take(FieldTask::PlaceCaret) {
            self.place_caret();
        }
    }

    fn measure_height(&mut self) {
        let lines = self.display.split('\n').count();
        self.measured_rows = Some(lines.max(self.config.rows));
    }

    fn classes(&self) -> ClassList {
        let config = &self.config;
        let mut classes = ClassList::new();
        self.add_solo_classes(&mut classes);
        classes.add("input-group--text-field");
        classes.set("input-group--text-field-box", config.boxed);
        classes.set(
            "input-group--single-line",
            config.single_line || self.is_solo(),
        );
        classes.set("input-group--multi-line", config.multi_line);
        classes.set("input-group--full-width", config.full_width);
        classes.set("input-group--no-resize", self.no_resize_handle());
        classes.set("input-group--prefix", config.field.prefix.is_some());
        classes.set("input-group--suffix", config.field.suffix.is_some());
        classes.set("input-group--textarea", config.textarea);
        classes.set("input-group--focused", self.is_focused());
        classes.set("input-group--dirty", self.is_dirty());
        classes.set("input-group--disabled", config.field.disabled);
        if self.has_error() {
            classes.add("error--text");
        } else {
            self.add_text_color_classes(&mut classes);
        }
        classes
    }

    pub fn view(&self) -> FieldView {
        let options = &self.core.options;
        let showing_placeholder = self.display.is_empty() && options.placeholder.is_some();
        let shown = if self.config.field_type == FieldType::Password {
            self.display
                .chars()
                .map(|c| if c == '\n' { c } else { PASSWORD_CHAR })
                .collect()
        } else {
            self.display.clone()
        };
        let text = if showing_placeholder {
            options.placeholder.clone().unwrap_or_default()
        } else {
            shown.clone()
        };
        let caret = self.is_focused().then(|| {
            let caret = if showing_placeholder { 0 } else { self.caret };
            caret_cell(&shown, caret, options.prefix.as_deref())
        });

        FieldView {
            label: options.label.clone(),
            prefix: options.prefix.clone(),
            text,
            showing_placeholder,
            suffix: options.suffix.clone(),
            caret,
            classes: self.classes(),
            attrs: FieldAttrs {
                disabled: options.disabled,
                readonly: options.readonly,
                required: options.required,
                autofocus: options.autofocus,
                max_length: self.mask.as_ref().map(PatternMask::max_len),
            },
            counter: self.counter(),
            error: self.core.error.clone(),
            error_display: self.core.error_display,
            clear_icon: options.clearable && self.is_dirty() && !options.disabled,
            height: self.height(),
        }
    }
}

impl Colorable for TextField {
    fn color(&self) -> Option<&str> {
        self.core.options.color.as_deref()
    }
}

impl Soloable for TextField {
    fn solo(&self) -> bool {
        self.config.solo
    }

    fn solo_inverted(&self) -> bool {
        self.config.solo_inverted
    }

    fn flat(&self) -> bool {
        self.config.flat
    }
}

impl Validatable for TextField {
    fn validation_value(&self) -> String {
        self.lazy_value.clone()
    }

    fn rules(&self) -> &Rules {
        &self.core.rules
    }

    fn error(&self) -> Option<&str> {
        self.core.error.as_deref()
    }

    fn set_error(&mut self, msg: Option<String>) {
        self.core.error = msg;
    }

    fn error_display(&self) -> ErrorDisplay {
        self.core.error_display
    }
}
