//! Class decoration: the `Colorable` and `Soloable` capabilities.

use std::collections::BTreeSet;

/// Set of style class names attached to a rendered field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: BTreeSet<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `name` when `on` is true.
    pub fn set(&mut self, name: impl Into<String>, on: bool) {
        if on {
            self.classes.insert(name.into());
        }
    }

    pub fn add(&mut self, name: impl Into<String>) {
        self.classes.insert(name.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl std::fmt::Display for ClassList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for class in &self.classes {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(class)?;
            first = false;
        }
        Ok(())
    }
}

/// Widgets decorated with a theme color.
///
/// A color is a theme name with an optional modifier, e.g. `"primary"` or
/// `"red lighten-2"`.
pub trait Colorable {
    fn color(&self) -> Option<&str>;

    /// Add the color name and modifier as background classes.
    fn add_background_color_classes(&self, classes: &mut ClassList) {
        if let Some(color) = self.color() {
            color.split_whitespace().for_each(|part| classes.add(part));
        }
    }

    /// Add `<name>--text` and `text--<modifier>` classes.
    fn add_text_color_classes(&self, classes: &mut ClassList) {
        let Some(color) = self.color() else {
            return;
        };
        let mut parts = color.split_whitespace();
        if let Some(name) = parts.next() {
            classes.add(format!("{name}--text"));
        }
        if let Some(modifier) = parts.next() {
            classes.add(format!("text--{modifier}"));
        }
    }
}

/// Widgets with the solo (boxed, label-less) look.
pub trait Soloable {
    fn solo(&self) -> bool;
    fn solo_inverted(&self) -> bool;
    fn flat(&self) -> bool;

    fn is_solo(&self) -> bool {
        self.solo() || self.solo_inverted()
    }

    fn add_solo_classes(&self, classes: &mut ClassList) {
        classes.set("input-group--solo", self.solo());
        classes.set("input-group--solo-inverted", self.solo_inverted());
        classes.set("elevation-0", self.flat());
    }
}
