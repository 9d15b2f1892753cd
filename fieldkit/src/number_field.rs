//! Number field: masked numeric input kept in sync with a value store.
//!
//! Every keystroke is applied to the unformatted ("lazy") value, parsed,
//! checked against the digit limits and, if accepted, reformatted with
//! thousands separators. Rejected keystrokes leave the displayed text as it
//! was. The caret is restored after reformatting by the [`CaretTracker`],
//! once the host has repainted (`after_render`).
//!
//! # Example
//!
//! ```ignore
//! let amount = ValueStore::new(String::new());
//! let config = NumberFieldConfig::new().integer_limit(6).decimal_limit(2).prefix("$ ");
//! let mut field = NumberField::new(config, amount.clone())?;
//!
//! field.focus();
//! field.handle_key(Key::Char('1'), Modifiers::new());
//! field.after_render();
//! assert_eq!(amount.get(), "1");
//! ```

use crate::caret::{significant_before, CaretTracker};
use crate::config::NumberFieldConfig;
use crate::error::{ConfigError, RejectReason};
use crate::event::{FieldEvent, Key, Modifiers, TextEditResult};
use crate::input::FieldCore;
use crate::limits::{check_edit, Edit};
use crate::mask::{Maskable, NumberMask};
use crate::parse::{parse, ParsedValue};
use crate::store::{EditOrigin, ValueStore};
use crate::style::{ClassList, Colorable};
use crate::text::{char_at, char_len, insert_char, remove_char};
use crate::tick::FieldTask;
use crate::validation::{ErrorDisplay, Rules, Validatable};
use crate::view::{caret_cell, FieldAttrs, FieldView};

#[derive(Debug)]
pub struct NumberField {
    config: NumberFieldConfig,
    mask: NumberMask,
    core: FieldCore,
    /// Unformatted value, as stored.
    lazy_value: String,
    /// Formatted value, as shown.
    display: String,
    /// Caret as a char offset into `display`.
    caret: usize,
    tracker: CaretTracker,
    bad_input: bool,
    last_rejection: Option<RejectReason>,
}

impl NumberField {
    /// Create a field bound to `store`, showing its current value.
    pub fn new(config: NumberFieldConfig, store: ValueStore<String>) -> Result<Self, ConfigError> {
        config.validate()?;
        let mask = NumberMask::new(config.decimal_separator, config.thousands_separator);
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
            last_rejection: None,
        };
        field.load(&initial);
        Ok(field)
    }

    /// Replace the validation rules.
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.core.rules = rules;
        self
    }

    pub fn with_error_display(mut self, display: ErrorDisplay) -> Self {
        self.core.error_display = display;
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn config(&self) -> &NumberFieldConfig {
        &self.config
    }

    /// Unformatted value.
    pub fn value(&self) -> &str {
        &self.lazy_value
    }

    /// Formatted value as displayed.
    pub fn display_text(&self) -> &str {
        &self.display
    }

    /// Caret position (char offset into the displayed text).
    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn parsed(&self) -> ParsedValue {
        parse(&self.lazy_value, &self.config)
    }

    /// The value doesn't read as a number.
    pub fn bad_input(&self) -> bool {
        self.bad_input
    }

    /// Why the most recent edit was refused, cleared by the next accepted one.
    pub fn last_rejection(&self) -> Option<&RejectReason> {
        self.last_rejection.as_ref()
    }

    pub fn is_dirty(&self) -> bool {
        !self.lazy_value.is_empty() || self.bad_input
    }

    pub fn is_focused(&self) -> bool {
        self.core.focus.is_focused()
    }

    pub fn store(&self) -> &ValueStore<String> {
        &self.core.store
    }

    /// Events emitted since the last call.
    pub fn take_events(&mut self) -> Vec<FieldEvent> {
        self.core.take_events()
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Called once the field is first shown; honours `autofocus`.
    pub fn mount(&mut self) {
        if self.core.options.autofocus {
            self.focus();
        }
    }

    /// Returns true if focus changed.
    pub fn focus(&mut self) -> bool {
        self.core.focus(&self.lazy_value)
    }

    /// Returns true if focus changed.
    pub fn blur(&mut self) -> bool {
        self.flush_caret();
        self.core.blur(&self.lazy_value)
    }

    /// Empty the field and take focus back after the next repaint.
    /// Returns false when the field isn't clearable.
    pub fn clear(&mut self) -> bool {
        if !self.core.options.clearable || self.core.options.disabled {
            return false;
        }
        self.lazy_value.clear();
        self.display.clear();
        self.caret = 0;
        self.tracker.set_selection_count(0);
        self.bad_input = false;
        self.core.ticks.take(FieldTask::PlaceCaret);
        self.core.publish("");
        self.validate_on_change();
        self.core.ticks.schedule(FieldTask::Focus);
        true
    }

    /// Run deferred work. Call after the field has been repainted.
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
                FieldTask::MeasureHeight => {}
            }
        }
    }

    /// Apply a store write made outside this field.
    /// Returns true if anything was applied.
    pub fn sync(&mut self) -> bool {
        let Some((value, origin)) = self.core.take_store_update() else {
            return false;
        };

        self.load(&value);
        if origin == EditOrigin::ExternalUpdate && self.lazy_value != value {
            log::debug!(
                "number field normalized external value {value:?} to {:?}",
                self.lazy_value
            );
            let normalized = self.lazy_value.clone();
            self.core.publish(&normalized);
        }

        self.validate_on_change();
        true
    }

    /// Move the caret, e.g. from a click. Clamped to the text.
    pub fn set_caret(&mut self, caret: usize) {
        self.core.ticks.take(FieldTask::PlaceCaret);
        self.caret = caret.min(char_len(&self.display));
        self.tracker.reset(&self.display, self.caret, &self.mask);
    }

    // -------------------------------------------------------------------------
    // Key handling
    // -------------------------------------------------------------------------

    /// Handle a key press while focused.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> TextEditResult {
        if self.core.options.disabled || !self.is_focused() {
            return TextEditResult::Ignored;
        }

        // A pending placement must land before the next edit reads the caret.
        self.flush_caret();

        let editable = self.core.is_editable();
        match key {
            Key::Char(c) if modifiers.is_typing() && editable => self.insert(c),
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
            Key::Enter => {
                self.core.emit(FieldEvent::Submit);
                TextEditResult::Submitted
            }
            _ => TextEditResult::Ignored,
        }
    }

    fn insert(&mut self, c: char) -> TextEditResult {
        // Grouping belongs to the mask; typing a separator is a no-op.
        if self.config.thousands_separator == Some(c) {
            return TextEditResult::Handled;
        }

        let position = significant_before(&self.display, self.caret, &self.mask);
        let mut candidate = self.lazy_value.clone();
        insert_char(&mut candidate, position, c);

        let edit = if c == self.config.decimal_separator {
            Edit::separator_at(position)
        } else {
            Edit::at(position)
        };
        self.try_commit(candidate, Some(edit), position + 1, self.caret + 1)
    }

    fn delete_back(&mut self) -> TextEditResult {
        let position = significant_before(&self.display, self.caret, &self.mask);
        if position == 0 {
            return TextEditResult::Handled;
        }
        let mut candidate = self.lazy_value.clone();
        let removed = remove_char(&mut candidate, position - 1);
        let edit = self.merging_edit(removed, position - 1);
        self.try_commit(candidate, edit, position - 1, self.caret.saturating_sub(1))
    }

    fn delete_forward(&mut self) -> TextEditResult {
        // Counting significant chars skips a separator right after the caret.
        let position = significant_before(&self.display, self.caret, &self.mask);
        if char_at(&self.lazy_value, position).is_none() {
            return TextEditResult::Handled;
        }
        let mut candidate = self.lazy_value.clone();
        let removed = remove_char(&mut candidate, position);
        let edit = self.merging_edit(removed, position);
        self.try_commit(candidate, edit, position, self.caret)
    }

    /// Deletions only need a limit check when they join the two parts.
    fn merging_edit(&self, removed: Option<char>, position: usize) -> Option<Edit> {
        (removed == Some(self.config.decimal_separator)).then(|| Edit::at(position))
    }

    /// Commit `candidate` unless the limit check refuses it.
    ///
    /// `selection_count` is where the caret belongs in significant chars;
    /// `naive_caret` is where it sits until the deferred placement runs.
    fn try_commit(
        &mut self,
        candidate: String,
        edit: Option<Edit>,
        selection_count: usize,
        naive_caret: usize,
    ) -> TextEditResult {
        let parsed = parse(&candidate, &self.config);
        if let Some(reason) = edit.and_then(|edit| check_edit(&parsed, edit, &self.config).err()) {
            log::debug!("number field rejected {candidate:?}: {reason}");
            self.last_rejection = Some(reason);
            return TextEditResult::Rejected;
        }

        self.last_rejection = None;
        self.bad_input = !parsed.is_well_formed(self.config.decimal_separator);
        self.lazy_value = parsed.string_value;
        self.display = self.mask.mask_text(&self.lazy_value);
        self.caret = naive_caret.min(char_len(&self.display));
        self.tracker.set_selection_count(selection_count);
        self.core.ticks.schedule(FieldTask::PlaceCaret);
        log::trace!(
            "number field value {:?} displayed as {:?}",
            self.lazy_value,
            self.display
        );

        let value = self.lazy_value.clone();
        self.core.publish(&value);
        self.validate_on_change();
        TextEditResult::Changed
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Show `value` as-is, caret at the end, superseding a pending placement.
    fn load(&mut self, value: &str) {
        self.lazy_value = self.mask.unmask_text(&self.mask.mask_text(value));
        self.bad_input = !parse(&self.lazy_value, &self.config)
            .is_well_formed(self.config.decimal_separator);
        self.display = self.mask.mask_text(&self.lazy_value);
        self.core.ticks.take(FieldTask::PlaceCaret);
        self.caret = char_len(&self.display);
        self.tracker.reset(&self.display, self.caret, &self.mask);
    }

    fn place_caret(&mut self) {
        self.caret = self.tracker.restore(&self.display, &self.mask);
    }

    fn flush_caret(&mut self) {
        if self.core.ticks.take(FieldTask::PlaceCaret) {
            self.place_caret();
        }
    }

    fn validate_on_change(&mut self) {
        if !self.core.options.validate_on_blur {
            self.validate();
        }
    }

    fn classes(&self) -> ClassList {
        let mut classes = ClassList::new();
        classes.add("input-group--text-field");
        classes.set("input-group--text-field-box", self.config.boxed);
        classes.set("input-group--full-width", self.config.full_width);
        classes.set("input-group--prefix", self.config.field.prefix.is_some());
        classes.set("input-group--suffix", self.config.field.suffix.is_some());
        classes.set("input-group--focused", self.is_focused());
        classes.set("input-group--dirty", self.is_dirty());
        classes.set("input-group--disabled", self.core.options.disabled);
        if self.has_error() {
            classes.add("error--text");
        } else {
            self.add_text_color_classes(&mut classes);
        }
        classes
    }

    /// Render model for the current state.
    pub fn view(&self) -> FieldView {
        let options = &self.core.options;
        let showing_placeholder = self.display.is_empty() && options.placeholder.is_some();
        let text = if showing_placeholder {
            options.placeholder.clone().unwrap_or_default()
        } else {
            self.display.clone()
        };
        let caret = self.is_focused().then(|| {
            let caret = if showing_placeholder { 0 } else { self.caret };
            caret_cell(&self.display, caret, options.prefix.as_deref())
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
                max_length: None,
            },
            counter: None,
            error: self.core.error.clone(),
            error_display: self.core.error_display,
            clear_icon: options.clearable && self.is_dirty() && !options.disabled,
            height: 1,
        }
    }
}

impl Colorable for NumberField {
    fn color(&self) -> Option<&str> {
        self.core.options.color.as_deref()
    }
}

impl Validatable for NumberField {
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
