//! Input widgets for terminal and other retained-mode UIs.
//!
//! Fields are plain state machines: feed them keys, focus changes and store
//! updates, draw their [`FieldView`], and call `after_render` once drawn so
//! deferred work (caret placement, validation) can run.

pub mod caret;
pub mod config;
pub mod error;
pub mod event;
pub mod focus;
mod input;
pub mod limits;
pub mod mask;
pub mod number_field;
pub mod parse;
pub mod ripple;
pub mod store;
pub mod style;
mod text;
pub mod text_field;
pub mod theme;
pub mod tick;
pub mod toggle;
pub mod validation;
pub mod view;

pub use caret::CaretTracker;
pub use config::{FieldOptions, FieldType, NumberFieldConfig, TextFieldConfig};
pub use error::{ConfigError, RejectReason};
pub use event::{FieldEvent, Key, Modifiers, TextEditResult};
pub use focus::FocusLifecycle;
pub use mask::{Maskable, NumberMask, PatternMask};
pub use number_field::NumberField;
pub use parse::{parse, ParsedValue};
pub use ripple::{Ripple, RippleSurface, Rippleable};
pub use store::{EditOrigin, ValueStore};
pub use style::{ClassList, Colorable, Soloable};
pub use text_field::TextField;
pub use theme::{Rgb, Theme, ThemeColor};
pub use tick::{FieldTask, NextTick};
pub use toggle::Toggle;
pub use validation::{ErrorDisplay, Rules, Validatable};
pub use view::{FieldAttrs, FieldView};
