//! # The display session
//!
//! [`Lcd`] owns the panel driver together with the default color state, and is the type
//! applications draw on.
//!
//! Every drawing call takes a small argument struct from [`ops`](crate::ops). Coordinates are
//! required, the color is optional. Before anything reaches the driver the color is resolved:
//!
//!  - the color given with the call, if any
//!  - otherwise the foreground stored with `set_default_color()`
//!  - otherwise white
//!
//! and quantized to RGB565. `clear()` is the odd one out and always paints the screen black.
//!
//! Typically you want to look into the following functions:
//!  - Lcd::new() to wrap a driver, this also puts the screen in landscape orientation
//!  - Lcd::set_default_color() to pick the color used when a call leaves it out
//!  - Lcd::draw_string() or the `write!()` macro for text
use core::fmt::{Error as FmtError, Result as FmtResult, Write};

use log::{debug, warn};

use crate::{
    color::{quantize, quantize_from_channels, Color565, Color888},
    colors::WHITE,
    config::Config,
    defaults::DefaultColors,
    driver::{LcdDriver, Point, Rotation},
    ops::{Circle, Line, Pixel, Rect, RoundRect, Text, Triangle},
};

#[derive(Debug)]
/// A display session: one driver and its default colors.
pub struct Lcd<D>
where
    D: LcdDriver,
{
    driver: D,
    defaults: DefaultColors,
    rotation: Rotation,
}

impl<D> Lcd<D>
where
    D: LcdDriver,
{
    /// Wrap a driver with the default [`Config`] (landscape, no default colors).
    pub fn new(driver: D) -> Result<Lcd<D>, D::Error> {
        Lcd::with_config(driver, Config::default())
    }

    /// Wrap a driver and apply `config` to it.
    pub fn with_config(driver: D, config: Config) -> Result<Lcd<D>, D::Error> {
        let mut lcd = Lcd {
            driver,
            defaults: DefaultColors::new(),
            rotation: config.rotation,
        };

        lcd.driver.set_rotation(config.rotation)?;
        if config.foreground.is_some() {
            lcd.set_default_color(config.foreground, config.background)?;
        } else if let Some(background) = config.background {
            // background only: the foreground stays unset
            lcd.defaults.set_background(background);
            lcd.driver
                .set_text_bg_color(quantize(WHITE), quantize(background))?;
        }
        debug!("display session ready, rotation {:?}", config.rotation);

        Ok(lcd)
    }

    /// Standalone RGB888 to RGB565 conversion for separate channels.
    pub fn color565(r: u8, g: u8, b: u8) -> Color565 {
        quantize_from_channels(r, g, b)
    }

    pub fn set_cursor(&mut self, x: i32, y: i32) -> Result<(), D::Error> {
        self.driver.set_cursor(x, y)
    }

    pub fn cursor(&self) -> (i32, i32) {
        self.driver.cursor()
    }

    /// Rotate the screen by rotation index (0..=3). Other values select rotation 0.
    pub fn set_rotation(&mut self, index: u8) -> Result<(), D::Error> {
        if index > 3 {
            warn!("rotation index {} out of range, using 0", index);
        }
        self.set_rotation_to(Rotation::from_index(index))
    }

    pub fn set_rotation_to(&mut self, rotation: Rotation) -> Result<(), D::Error> {
        self.driver.set_rotation(rotation)?;
        self.rotation = rotation;
        debug!("rotation set to {:?}", rotation);
        Ok(())
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Store the default colors and make them the driver's text colors.
    ///
    /// A missing foreground resets it to white. The background is only touched, and only sent to
    /// the driver, when one is given.
    pub fn set_default_color(
        &mut self,
        foreground: Option<Color888>,
        background: Option<Color888>,
    ) -> Result<(), D::Error> {
        self.defaults.set_default_color(foreground, background);

        let color = quantize(foreground.unwrap_or(WHITE));
        self.driver.set_text_color(color)?;
        if let Some(background) = background {
            self.driver.set_text_bg_color(color, quantize(background))?;
        }
        Ok(())
    }

    /// Same as [`set_default_color`](Lcd::set_default_color).
    pub fn set_text_color(
        &mut self,
        foreground: Option<Color888>,
        background: Option<Color888>,
    ) -> Result<(), D::Error> {
        self.set_default_color(foreground, background)
    }

    pub fn foreground(&self) -> Option<Color888> {
        self.defaults.foreground()
    }

    pub fn background(&self) -> Option<Color888> {
        self.defaults.background()
    }

    /// The default color state, for inspection.
    pub fn defaults(&self) -> &DefaultColors {
        &self.defaults
    }

    pub fn draw_pixel(&mut self, pixel: Pixel) -> Result<(), D::Error> {
        let color = self.defaults.resolve_draw_color(pixel.color);
        self.driver.draw_pixel(pixel.at, color)
    }

    /// Paint the whole screen in `color`.
    pub fn fill_screen(&mut self, color: Color888) -> Result<(), D::Error> {
        self.driver.fill_screen(quantize(color))
    }

    /// Paint the whole screen black, regardless of the default colors.
    pub fn clear(&mut self) -> Result<(), D::Error> {
        let color = self.defaults.resolve_clear_color();
        self.driver.fill_screen(color)
    }

    pub fn draw_line(&mut self, line: Line) -> Result<(), D::Error> {
        let color = self.defaults.resolve_draw_color(line.color);
        self.driver.draw_line(line.start, line.end, color)
    }

    pub fn draw_triangle(&mut self, triangle: Triangle) -> Result<(), D::Error> {
        let color = self.defaults.resolve_draw_color(triangle.color);
        self.driver.draw_triangle(triangle.vertices, color)
    }

    pub fn fill_triangle(&mut self, triangle: Triangle) -> Result<(), D::Error> {
        let color = self.defaults.resolve_draw_color(triangle.color);
        self.driver.fill_triangle(triangle.vertices, color)
    }

    pub fn draw_circle(&mut self, circle: Circle) -> Result<(), D::Error> {
        let color = self.defaults.resolve_draw_color(circle.color);
        self.driver.draw_circle(circle.center, circle.radius, color)
    }

    pub fn fill_circle(&mut self, circle: Circle) -> Result<(), D::Error> {
        let color = self.defaults.resolve_draw_color(circle.color);
        self.driver.fill_circle(circle.center, circle.radius, color)
    }

    pub fn draw_rect(&mut self, rect: Rect) -> Result<(), D::Error> {
        let color = self.defaults.resolve_draw_color(rect.color);
        self.driver
            .draw_rect(rect.top_left, rect.width, rect.height, color)
    }

    pub fn fill_rect(&mut self, rect: Rect) -> Result<(), D::Error> {
        let color = self.defaults.resolve_draw_color(rect.color);
        self.driver
            .fill_rect(rect.top_left, rect.width, rect.height, color)
    }

    pub fn draw_round_rect(&mut self, rect: RoundRect) -> Result<(), D::Error> {
        let color = self.defaults.resolve_draw_color(rect.color);
        self.driver
            .draw_round_rect(rect.top_left, rect.width, rect.height, rect.radius, color)
    }

    pub fn fill_round_rect(&mut self, rect: RoundRect) -> Result<(), D::Error> {
        let color = self.defaults.resolve_draw_color(rect.color);
        self.driver
            .fill_round_rect(rect.top_left, rect.width, rect.height, rect.radius, color)
    }

    /// Draw a string. Missing coordinates are taken from the text cursor.
    ///
    /// The text is drawn on the stored background color, if there is one, and transparent
    /// otherwise.
    pub fn draw_string(&mut self, text: Text) -> Result<(), D::Error> {
        let (cursor_x, cursor_y) = self.driver.cursor();
        let at = Point::new(text.x.unwrap_or(cursor_x), text.y.unwrap_or(cursor_y));

        let color = self.defaults.resolve_draw_color(text.color);
        match self.defaults.background() {
            Some(background) => self.driver.set_text_bg_color(color, quantize(background))?,
            None => self.driver.set_text_color(color)?,
        }
        self.driver.draw_string(text.text, at)
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Direct access to the driver, for everything the session doesn't cover.
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Give the driver back.
    pub fn release(self) -> D {
        self.driver
    }
}

// with this implementation the session works with write!() and writeln!(), text goes to the
// cursor in the default draw color.
impl<D> Write for Lcd<D>
where
    D: LcdDriver,
{
    fn write_str(&mut self, s: &str) -> FmtResult {
        self.draw_string(Text::new(s)).map_err(|_| FmtError)
    }
}
