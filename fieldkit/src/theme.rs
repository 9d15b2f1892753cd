//! Theme colors resolved from a field's classes.

use std::collections::HashMap;

use crate::style::ClassList;

/// Lightness step applied per `lighten-N` / `darken-N` modifier level.
const MODIFIER_STEP: f32 = 0.06;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThemeColor {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb(Rgb),
}

impl ThemeColor {
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    /// Shift lightness by `delta`; RGB colors are returned unchanged.
    pub fn shift_lightness(self, delta: f32) -> Self {
        match self {
            Self::Oklch { l, c, h } => Self::Oklch {
                l: (l + delta).clamp(0.0, 1.0),
                c,
                h,
            },
            other => other,
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb(rgb) => *rgb,
            Self::Oklch { l, c, h } => oklch_to_rgb(*l, *c, *h),
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}

/// Named colors available to `Colorable` widgets.
#[derive(Debug, Clone)]
pub struct Theme {
    colors: HashMap<String, ThemeColor>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
            .with("primary", ThemeColor::oklch(0.55, 0.2, 260.0))
            .with("secondary", ThemeColor::oklch(0.45, 0.03, 260.0))
            .with("accent", ThemeColor::oklch(0.65, 0.18, 330.0))
            .with("error", ThemeColor::oklch(0.6, 0.22, 25.0))
            .with("info", ThemeColor::oklch(0.65, 0.14, 230.0))
            .with("success", ThemeColor::oklch(0.65, 0.17, 145.0))
            .with("warning", ThemeColor::oklch(0.78, 0.16, 75.0))
    }
}

impl Theme {
    /// An empty theme.
    pub fn new() -> Self {
        Self {
            colors: HashMap::new(),
        }
    }

    pub fn with(mut self, name: impl Into<String>, color: ThemeColor) -> Self {
        self.colors.insert(name.into(), color);
        self
    }

    pub fn get(&self, name: &str) -> Option<ThemeColor> {
        self.colors.get(name).copied()
    }

    /// Text color for a field: `error--text` wins, then the first
    /// `<name>--text` class naming a theme color, adjusted by any
    /// `text--lighten-N` / `text--darken-N` modifier.
    pub fn text_color(&self, classes: &ClassList) -> Option<Rgb> {
        let base = if classes.contains("error--text") {
            self.get("error")?
        } else {
            classes
                .iter()
                .filter_map(|class| class.strip_suffix("--text"))
                .find_map(|name| self.get(name))?
        };

        let shift = classes
            .iter()
            .filter_map(|class| class.strip_prefix("text--"))
            .find_map(parse_modifier)
            .unwrap_or(0.0);

        Some(base.shift_lightness(shift).to_rgb())
    }
}

fn parse_modifier(modifier: &str) -> Option<f32> {
    let (direction, level) = modifier.split_once('-')?;
    let level: u8 = level.parse().ok()?;
    match direction {
        "lighten" => Some(MODIFIER_STEP * f32::from(level)),
        "darken" => Some(-MODIFIER_STEP * f32::from(level)),
        _ => None,
    }
}
