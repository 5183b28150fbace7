//! Start-up configuration of a display session.

use crate::{color::Color888, driver::Rotation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Settings applied once by [`Lcd::with_config`](crate::Lcd::with_config).
///
/// The default is landscape orientation with no stored default colors.
pub struct Config {
    pub rotation: Rotation,
    pub foreground: Option<Color888>,
    pub background: Option<Color888>,
}

impl Config {
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Store default colors at start-up, as if `set_default_color` was called.
    pub fn with_default_color(mut self, foreground: Color888, background: Option<Color888>) -> Self {
        self.foreground = Some(foreground);
        self.background = background;
        self
    }
}
