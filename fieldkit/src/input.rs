//! State shared by every field: binding, focus session, deferred work,
//! validation state and the outgoing event queue.

use crate::config::FieldOptions;
use crate::event::FieldEvent;
use crate::focus::FocusLifecycle;
use crate::store::{EditOrigin, ValueStore};
use crate::tick::{FieldTask, NextTick};
use crate::validation::{ErrorDisplay, Rules};

#[derive(Debug)]
pub(crate) struct FieldCore {
    pub options: FieldOptions,
    pub store: ValueStore<String>,
    /// Last store revision this field has applied or written.
    seen_revision: u64,
    pub focus: FocusLifecycle,
    pub ticks: NextTick,
    events: Vec<FieldEvent>,
    pub rules: Rules,
    pub error: Option<String>,
    pub error_display: ErrorDisplay,
}

impl FieldCore {
    pub fn new(options: FieldOptions, store: ValueStore<String>) -> Self {
        let seen_revision = store.revision();
        Self {
            options,
            store,
            seen_revision,
            focus: FocusLifecycle::new(),
            ticks: NextTick::new(),
            events: Vec::new(),
            rules: Rules::new(),
            error: None,
            error_display: ErrorDisplay::default(),
        }
    }

    pub fn emit(&mut self, event: FieldEvent) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<FieldEvent> {
        std::mem::take(&mut self.events)
    }

    /// Write a value produced by the field and emit `Input`.
    pub fn publish(&mut self, value: &str) {
        self.store.set_from(value.to_string(), EditOrigin::UserEdit);
        self.seen_revision = self.store.revision();
        self.emit(FieldEvent::Input(value.to_string()));
    }

    /// The store value if it changed since the field last looked.
    pub fn take_store_update(&mut self) -> Option<(String, EditOrigin)> {
        let (value, origin, revision) = self.store.snapshot();
        if revision == self.seen_revision {
            return None;
        }
        self.seen_revision = revision;
        Some((value, origin))
    }

    pub fn is_editable(&self) -> bool {
        !self.options.disabled && !self.options.readonly
    }

    /// Start a focus session. Returns true if focus changed.
    pub fn focus(&mut self, value: &str) -> bool {
        if self.options.disabled || !self.focus.focus(value) {
            return false;
        }
        self.emit(FieldEvent::Focus);
        true
    }

    /// End the focus session, emitting `Change` if the value moved.
    /// Validation runs after the next repaint.
    pub fn blur(&mut self, value: &str) -> bool {
        if !self.focus.is_focused() {
            return false;
        }
        let committed = self.focus.blur(value);
        self.emit(FieldEvent::Blur);
        if let Some(value) = committed {
            log::debug!("field committed change: {value:?}");
            self.emit(FieldEvent::Change(value));
        }
        self.ticks.schedule(FieldTask::Validate);
        true
    }
}
