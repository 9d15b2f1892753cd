//! Toggle: an on/off selection control with a ripple surface.

use crate::event::{FieldEvent, Key, TextEditResult};
use crate::ripple::{Ripple, RippleSurface, Rippleable};
use crate::store::{EditOrigin, ValueStore};
use crate::style::{ClassList, Colorable};

#[derive(Debug)]
pub struct Toggle {
    label: Option<String>,
    store: ValueStore<bool>,
    ripple: Ripple,
    disabled: bool,
    color: Option<String>,
    events: Vec<FieldEvent>,
}

impl Toggle {
    pub fn new(store: ValueStore<bool>) -> Self {
        Self {
            label: None,
            store,
            ripple: Ripple::default(),
            disabled: false,
            color: Some(crate::config::DEFAULT_COLOR.to_string()),
            events: Vec::new(),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_ripple(mut self, ripple: Ripple) -> Self {
        self.ripple = ripple;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn with_color(mut self, color: Option<&str>) -> Self {
        self.color = color.map(str::to_string);
        self
    }

    pub fn is_on(&self) -> bool {
        self.store.get()
    }

    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn take_events(&mut self) -> Vec<FieldEvent> {
        std::mem::take(&mut self.events)
    }

    /// Space toggles, like a click.
    pub fn handle_key(&mut self, key: Key) -> TextEditResult {
        match key {
            Key::Char(' ') if !self.disabled => {
                self.on_change();
                TextEditResult::Changed
            }
            _ => TextEditResult::Ignored,
        }
    }

    pub fn classes(&self) -> ClassList {
        let mut classes = ClassList::new();
        classes.add("input-group--selection-controls");
        classes.set("input-group--active", self.is_on());
        classes.set("input-group--disabled", self.disabled);
        if self.is_on() {
            self.add_text_color_classes(&mut classes);
        }
        classes
    }

    pub fn ripple_surface(&self) -> Option<RippleSurface> {
        self.gen_ripple()
    }
}

impl Rippleable for Toggle {
    fn ripple(&self) -> Ripple {
        self.ripple
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn on_change(&mut self) {
        if self.disabled {
            return;
        }
        let value = !self.store.get();
        self.store.set_from(value, EditOrigin::UserEdit);
        log::debug!("toggle switched to {value}");
        self.events.push(FieldEvent::Change(value.to_string()));
    }

    fn emit(&mut self, event: FieldEvent) {
        self.events.push(event);
    }
}

impl Colorable for Toggle {
    fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }
}
