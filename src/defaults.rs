//! # Default color state
//!
//! Drawing calls may leave out their color. In that case the session falls back to the stored
//! foreground color, and to white when no foreground was ever stored. Clearing the screen is the
//! exception: it always targets black.
//!
//! The state lives inside the display session (one per panel), so there is no global to
//! initialise or guard.

use log::trace;

use crate::{
    color::{quantize, Color565, Color888},
    colors::{BLACK, WHITE},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// The cached foreground and background colors of a display session.
///
/// Both slots start unset.
pub struct DefaultColors {
    foreground: Option<Color888>,
    background: Option<Color888>,
}

impl DefaultColors {
    /// Both slots unset.
    pub const fn new() -> Self {
        DefaultColors {
            foreground: None,
            background: None,
        }
    }

    /// Store new default colors.
    ///
    /// A missing foreground resets it to white. A missing background leaves the current
    /// background alone, there is no fallback for it.
    pub fn set_default_color(&mut self, foreground: Option<Color888>, background: Option<Color888>) {
        self.foreground = Some(foreground.unwrap_or(WHITE));
        if background.is_some() {
            self.background = background;
        }
        trace!(
            "default colors: fg={:?} bg={:?}",
            self.foreground,
            self.background
        );
    }

    /// Store a background color and leave the foreground as it is.
    pub fn set_background(&mut self, background: Color888) {
        self.background = Some(background);
        trace!("default background: {:?}", background);
    }

    pub fn foreground(&self) -> Option<Color888> {
        self.foreground
    }

    pub fn background(&self) -> Option<Color888> {
        self.background
    }

    /// Color for a drawing call: explicit argument, then stored foreground, then white.
    pub fn resolve_draw_color(&self, explicit: Option<Color888>) -> Color565 {
        quantize(explicit.or(self.foreground).unwrap_or(WHITE))
    }

    /// Color for clearing the screen. Always black, whatever the stored defaults are.
    pub fn resolve_clear_color(&self) -> Color565 {
        quantize(BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLUE, RED};

    #[test]
    fn test_starts_unset() {
        let defaults = DefaultColors::new();
        assert_eq!(defaults.foreground(), None);
        assert_eq!(defaults.background(), None);
        assert_eq!(defaults.resolve_draw_color(None), quantize(WHITE));
    }

    #[test]
    fn test_explicit_wins() {
        let mut defaults = DefaultColors::new();
        defaults.set_default_color(Some(RED), None);
        assert_eq!(defaults.resolve_draw_color(Some(BLUE)), quantize(BLUE));
    }

    #[test]
    fn test_stored_foreground_is_used() {
        let mut defaults = DefaultColors::new();
        defaults.set_default_color(Some(Color888::new(0xFF0000)), None);
        assert_eq!(
            defaults.resolve_draw_color(None),
            quantize(Color888::new(0xFF0000))
        );
    }

    #[test]
    fn test_missing_foreground_resets_to_white() {
        let mut defaults = DefaultColors::new();
        defaults.set_default_color(Some(RED), None);
        defaults.set_default_color(None, None);
        assert_eq!(defaults.foreground(), Some(WHITE));
        assert_eq!(defaults.resolve_draw_color(None), quantize(WHITE));
    }

    #[test]
    fn test_background_is_kept_when_missing() {
        let mut defaults = DefaultColors::new();
        defaults.set_default_color(None, Some(BLUE));
        defaults.set_default_color(Some(RED), None);
        assert_eq!(defaults.background(), Some(BLUE));
    }

    #[test]
    fn test_set_background_keeps_foreground_unset() {
        let mut defaults = DefaultColors::new();
        defaults.set_background(BLUE);
        assert_eq!(defaults.foreground(), None);
        assert_eq!(defaults.background(), Some(BLUE));
        assert_eq!(defaults.resolve_draw_color(None), quantize(WHITE));
    }

    #[test]
    fn test_clear_color_ignores_defaults() {
        let mut defaults = DefaultColors::new();
        assert_eq!(defaults.resolve_clear_color(), quantize(BLACK));
        defaults.set_default_color(Some(RED), Some(BLUE));
        assert_eq!(defaults.resolve_clear_color(), quantize(BLACK));
    }
}
