//! Ripple capability for selection controls.
//!
//! A rippleable control renders an extra surface that shows click feedback
//! and forwards clicks to the control's `on_change`.

use crate::event::FieldEvent;

/// Class carried by every ripple surface.
pub const RIPPLE_CLASS: &str = "v-input--selection-controls__ripple";

/// Ripple setting of a control. Enabled by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Ripple {
    Off,
    #[default]
    On,
}

impl Ripple {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Ripple::Off)
    }
}

/// Options handed to the renderer's ripple effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RippleOptions {
    pub center: bool,
}

/// Render model of a ripple surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RippleSurface {
    pub class: &'static str,
    /// Effect options; `None` renders the surface without animation.
    pub effect: Option<RippleOptions>,
}

pub trait Rippleable {
    fn ripple(&self) -> Ripple;

    fn is_disabled(&self) -> bool;

    /// Called when the ripple surface is clicked.
    fn on_change(&mut self);

    /// Queue an event for the host.
    fn emit(&mut self, event: FieldEvent);

    /// Ripple surface to render, or `None` when ripple is off.
    fn gen_ripple(&self) -> Option<RippleSurface> {
        if !self.ripple().is_enabled() {
            return None;
        }
        // Selection controls always ripple from the center.
        let effect = (!self.is_disabled()).then_some(RippleOptions { center: true });
        Some(RippleSurface {
            class: RIPPLE_CLASS,
            effect,
        })
    }

    /// Dispatch a click on the ripple surface: emits `Click`, then runs
    /// `on_change`. Returns false when there is no surface to click.
    fn ripple_click(&mut self) -> bool {
        if self.gen_ripple().is_none() {
            return false;
        }
        self.emit(FieldEvent::Click);
        self.on_change();
        true
    }
}
