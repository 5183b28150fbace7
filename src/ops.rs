//! Arguments of the drawing operations.
//!
//! Geometry is required and set through `new()`, the color is optional and set with
//! `with_color()`. A missing color is resolved by the display session (stored foreground, else
//! white).
//!
//! ```
//! use lcd565::{colors::RED, ops::Line};
//!
//! let line = Line::new(0, 0, 319, 239).with_color(RED);
//! assert_eq!(line.color, Some(RED));
//! ```

use crate::{color::Color888, driver::Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub at: Point,
    pub color: Option<Color888>,
}

impl Pixel {
    pub const fn new(x: i32, y: i32) -> Self {
        Pixel {
            at: Point::new(x, y),
            color: None,
        }
    }

    pub const fn with_color(mut self, color: Color888) -> Self {
        self.color = Some(color);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub color: Option<Color888>,
}

impl Line {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Line {
            start: Point::new(x0, y0),
            end: Point::new(x1, y1),
            color: None,
        }
    }

    pub const fn with_color(mut self, color: Color888) -> Self {
        self.color = Some(color);
        self
    }
}

/// Used for both outlined and filled triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub vertices: [Point; 3],
    pub color: Option<Color888>,
}

impl Triangle {
    pub const fn new(a: (i32, i32), b: (i32, i32), c: (i32, i32)) -> Self {
        Triangle {
            vertices: [
                Point::new(a.0, a.1),
                Point::new(b.0, b.1),
                Point::new(c.0, c.1),
            ],
            color: None,
        }
    }

    pub const fn with_color(mut self, color: Color888) -> Self {
        self.color = Some(color);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub center: Point,
    pub radius: u32,
    pub color: Option<Color888>,
}

impl Circle {
    pub const fn new(x: i32, y: i32, radius: u32) -> Self {
        Circle {
            center: Point::new(x, y),
            radius,
            color: None,
        }
    }

    pub const fn with_color(mut self, color: Color888) -> Self {
        self.color = Some(color);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub top_left: Point,
    pub width: u32,
    pub height: u32,
    pub color: Option<Color888>,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Rect {
            top_left: Point::new(x, y),
            width,
            height,
            color: None,
        }
    }

    pub const fn with_color(mut self, color: Color888) -> Self {
        self.color = Some(color);
        self
    }
}

/// Rectangle with rounded corners of equal `radius`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRect {
    pub top_left: Point,
    pub width: u32,
    pub height: u32,
    pub radius: u32,
    pub color: Option<Color888>,
}

impl RoundRect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32, radius: u32) -> Self {
        RoundRect {
            top_left: Point::new(x, y),
            width,
            height,
            radius,
            color: None,
        }
    }

    pub const fn with_color(mut self, color: Color888) -> Self {
        self.color = Some(color);
        self
    }
}

/// A string to draw. Coordinates left out are taken from the driver's text cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text<'a> {
    pub text: &'a str,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub color: Option<Color888>,
}

impl<'a> Text<'a> {
    pub const fn new(text: &'a str) -> Self {
        Text {
            text,
            x: None,
            y: None,
            color: None,
        }
    }

    pub const fn at(mut self, x: i32, y: i32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub const fn with_color(mut self, color: Color888) -> Self {
        self.color = Some(color);
        self
    }
}
