//! # The driver seam
//!
//! [`LcdDriver`] is everything the display session needs from the panel driver: cursor control,
//! rotation, the drawing primitives and text. The session never hands it a 24-bit color, every
//! color argument is already quantized to [`Color565`].
//!
//! Rasterization is entirely up to the driver. With the "graphics" feature the crate ships
//! [`GraphicsDriver`](crate::graphics::GraphicsDriver), which draws through `embedded_graphics`
//! onto any RGB565 draw target.

use crate::color::Color565;

/// A position on the (rotated) screen, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
/// Screen orientation, clockwise from the panel's native portrait orientation.
pub enum Rotation {
    Portrait = 0,
    Landscape = 1,
    PortraitFlipped = 2,
    LandscapeFlipped = 3,
}

impl Rotation {
    /// Map a rotation index. Anything outside 0..=3 falls back to portrait.
    pub fn from_index(index: u8) -> Rotation {
        match index {
            1 => Rotation::Landscape,
            2 => Rotation::PortraitFlipped,
            3 => Rotation::LandscapeFlipped,
            _ => Rotation::Portrait,
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// true if width and height are swapped compared to the native panel
    pub fn is_landscape(self) -> bool {
        matches!(self, Rotation::Landscape | Rotation::LandscapeFlipped)
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Rotation::Landscape
    }
}

/// Operations the display session forwards to the panel driver.
///
/// Rectangles are given by their top left corner and size, circles by their center and radius.
pub trait LcdDriver {
    type Error;

    fn set_rotation(&mut self, rotation: Rotation) -> Result<(), Self::Error>;

    fn set_cursor(&mut self, x: i32, y: i32) -> Result<(), Self::Error>;

    /// current text cursor
    fn cursor(&self) -> (i32, i32);

    fn set_text_color(&mut self, color: Color565) -> Result<(), Self::Error>;

    /// Set text color together with an opaque background color.
    fn set_text_bg_color(&mut self, color: Color565, background: Color565) -> Result<(), Self::Error>;

    fn draw_pixel(&mut self, at: Point, color: Color565) -> Result<(), Self::Error>;

    fn fill_screen(&mut self, color: Color565) -> Result<(), Self::Error>;

    fn draw_line(&mut self, start: Point, end: Point, color: Color565) -> Result<(), Self::Error>;

    fn draw_triangle(&mut self, vertices: [Point; 3], color: Color565) -> Result<(), Self::Error>;

    fn fill_triangle(&mut self, vertices: [Point; 3], color: Color565) -> Result<(), Self::Error>;

    fn draw_circle(&mut self, center: Point, radius: u32, color: Color565) -> Result<(), Self::Error>;

    fn fill_circle(&mut self, center: Point, radius: u32, color: Color565) -> Result<(), Self::Error>;

    fn draw_rect(&mut self, top_left: Point, width: u32, height: u32, color: Color565) -> Result<(), Self::Error>;

    fn fill_rect(&mut self, top_left: Point, width: u32, height: u32, color: Color565) -> Result<(), Self::Error>;

    fn draw_round_rect(
        &mut self,
        top_left: Point,
        width: u32,
        height: u32,
        radius: u32,
        color: Color565,
    ) -> Result<(), Self::Error>;

    fn fill_round_rect(
        &mut self,
        top_left: Point,
        width: u32,
        height: u32,
        radius: u32,
        color: Color565,
    ) -> Result<(), Self::Error>;

    /// Draw text with the current text color, starting at `at`.
    fn draw_string(&mut self, text: &str, at: Point) -> Result<(), Self::Error>;
}
