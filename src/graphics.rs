//! # Graphics driver on top of embedded_graphics
//!
//! This module is behind a feature flag. Enable it in your Cargo.toml with feature flag
//! "graphics".
//!
//! [`GraphicsDriver`] implements [`LcdDriver`] for anything that implements the embedded_graphics
//! `DrawTarget` trait with RGB565 colors: a [`Framebuffer`](crate::framebuffer::Framebuffer),
//! or a panel driver crate that draws directly. Lines, circles, triangles and (rounded)
//! rectangles are drawn by embedded_graphics, text uses its 6x10 monospace font.
//!
//! The target is taken to be in the panel's native portrait orientation. Rotation is done in
//! software: coordinates are mapped onto the target pixel by pixel, so a 240x320 target reads as
//! 320x240 when the session is in landscape.
//!
//! Rasterization of the primitives is embedded_graphics' business, see
//! <https://docs.rs/embedded-graphics/0.7/embedded_graphics/primitives/>.
use embedded_graphics::{
    geometry::{Dimensions, OriginDimensions, Point as GfxPoint, Size},
    mono_font::{ascii::FONT_6X10, MonoTextStyle, MonoTextStyleBuilder},
    pixelcolor::Rgb565,
    primitives::{Circle, Line, Primitive, PrimitiveStyle, Rectangle, RoundedRectangle, Triangle},
    text::{Baseline, Text},
    Drawable,
};
use embedded_graphics_core::{draw_target::DrawTarget, Pixel};

use crate::{
    color::Color565,
    driver::{LcdDriver, Point, Rotation},
};

fn gfx(point: Point) -> GfxPoint {
    GfxPoint::new(point.x, point.y)
}

fn rgb(color: Color565) -> Rgb565 {
    color.into()
}

// circles are given by radius, embedded_graphics wants the diameter
fn diameter(radius: u32) -> u32 {
    radius.saturating_mul(2).saturating_add(1)
}

/// [`LcdDriver`] drawing through embedded_graphics onto an RGB565 draw target.
#[derive(Debug)]
pub struct GraphicsDriver<T>
where
    T: DrawTarget<Color = Rgb565>,
{
    target: T,
    rotation: Rotation,
    cursor: GfxPoint,
    text_color: Rgb565,
    text_background: Option<Rgb565>,
}

impl<T> GraphicsDriver<T>
where
    T: DrawTarget<Color = Rgb565>,
{
    /// Wrap a draw target. Starts in portrait, cursor at (0, 0), white text.
    pub fn new(target: T) -> Self {
        GraphicsDriver {
            target,
            rotation: Rotation::Portrait,
            cursor: GfxPoint::zero(),
            text_color: rgb(Color565::from_raw(0xFFFF)),
            text_background: None,
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn release(self) -> T {
        self.target
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Screen size as seen through the current rotation.
    pub fn size(&self) -> Size {
        rotated_size(self.rotation, self.target.bounding_box().size)
    }

    fn rotated(&mut self) -> Rotated<'_, T> {
        Rotated {
            target: &mut self.target,
            rotation: self.rotation,
        }
    }

    fn text_style(&self) -> MonoTextStyle<'static, Rgb565> {
        let builder = MonoTextStyleBuilder::new()
            .font(&FONT_6X10)
            .text_color(self.text_color);
        match self.text_background {
            Some(background) => builder.background_color(background).build(),
            None => builder.build(),
        }
    }
}

impl<T> LcdDriver for GraphicsDriver<T>
where
    T: DrawTarget<Color = Rgb565>,
{
    type Error = T::Error;

    fn set_rotation(&mut self, rotation: Rotation) -> Result<(), Self::Error> {
        self.rotation = rotation;
        Ok(())
    }

    fn set_cursor(&mut self, x: i32, y: i32) -> Result<(), Self::Error> {
        self.cursor = GfxPoint::new(x, y);
        Ok(())
    }

    fn cursor(&self) -> (i32, i32) {
        (self.cursor.x, self.cursor.y)
    }

    fn set_text_color(&mut self, color: Color565) -> Result<(), Self::Error> {
        // a plain text color draws with a transparent background
        self.text_color = rgb(color);
        self.text_background = None;
        Ok(())
    }

    fn set_text_bg_color(&mut self, color: Color565, background: Color565) -> Result<(), Self::Error> {
        self.text_color = rgb(color);
        self.text_background = Some(rgb(background));
        Ok(())
    }

    fn draw_pixel(&mut self, at: Point, color: Color565) -> Result<(), Self::Error> {
        Pixel(gfx(at), rgb(color)).draw(&mut self.rotated())
    }

    fn fill_screen(&mut self, color: Color565) -> Result<(), Self::Error> {
        self.target.clear(rgb(color))
    }

    fn draw_line(&mut self, start: Point, end: Point, color: Color565) -> Result<(), Self::Error> {
        Line::new(gfx(start), gfx(end))
            .into_styled(PrimitiveStyle::with_stroke(rgb(color), 1))
            .draw(&mut self.rotated())
    }

    fn draw_triangle(&mut self, vertices: [Point; 3], color: Color565) -> Result<(), Self::Error> {
        let [a, b, c] = vertices;
        Triangle::new(gfx(a), gfx(b), gfx(c))
            .into_styled(PrimitiveStyle::with_stroke(rgb(color), 1))
            .draw(&mut self.rotated())
    }

    fn fill_triangle(&mut self, vertices: [Point; 3], color: Color565) -> Result<(), Self::Error> {
        let [a, b, c] = vertices;
        Triangle::new(gfx(a), gfx(b), gfx(c))
            .into_styled(PrimitiveStyle::with_fill(rgb(color)))
            .draw(&mut self.rotated())
    }

    fn draw_circle(&mut self, center: Point, radius: u32, color: Color565) -> Result<(), Self::Error> {
        Circle::with_center(gfx(center), diameter(radius))
            .into_styled(PrimitiveStyle::with_stroke(rgb(color), 1))
            .draw(&mut self.rotated())
    }

    fn fill_circle(&mut self, center: Point, radius: u32, color: Color565) -> Result<(), Self::Error> {
        Circle::with_center(gfx(center), diameter(radius))
            .into_styled(PrimitiveStyle::with_fill(rgb(color)))
            .draw(&mut self.rotated())
    }

    fn draw_rect(&mut self, top_left: Point, width: u32, height: u32, color: Color565) -> Result<(), Self::Error> {
        Rectangle::new(gfx(top_left), Size::new(width, height))
            .into_styled(PrimitiveStyle::with_stroke(rgb(color), 1))
            .draw(&mut self.rotated())
    }

    fn fill_rect(&mut self, top_left: Point, width: u32, height: u32, color: Color565) -> Result<(), Self::Error> {
        Rectangle::new(gfx(top_left), Size::new(width, height))
            .into_styled(PrimitiveStyle::with_fill(rgb(color)))
            .draw(&mut self.rotated())
    }

    fn draw_round_rect(
        &mut self,
        top_left: Point,
        width: u32,
        height: u32,
        radius: u32,
        color: Color565,
    ) -> Result<(), Self::Error> {
        let rect = Rectangle::new(gfx(top_left), Size::new(width, height));
        RoundedRectangle::with_equal_corners(rect, Size::new(radius, radius))
            .into_styled(PrimitiveStyle::with_stroke(rgb(color), 1))
            .draw(&mut self.rotated())
    }

    fn fill_round_rect(
        &mut self,
        top_left: Point,
        width: u32,
        height: u32,
        radius: u32,
        color: Color565,
    ) -> Result<(), Self::Error> {
        let rect = Rectangle::new(gfx(top_left), Size::new(width, height));
        RoundedRectangle::with_equal_corners(rect, Size::new(radius, radius))
            .into_styled(PrimitiveStyle::with_fill(rgb(color)))
            .draw(&mut self.rotated())
    }

    fn draw_string(&mut self, text: &str, at: Point) -> Result<(), Self::Error> {
        let line_height = FONT_6X10.character_size.height as i32;

        // the cursor ends up right behind the last character drawn, a newline moves it to the
        // left edge of the next line
        let mut position = gfx(at);
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                position = GfxPoint::new(0, position.y + line_height);
            }
            if !line.is_empty() {
                position = Text::with_baseline(line, position, self.text_style(), Baseline::Top)
                    .draw(&mut self.rotated())?;
            }
        }
        self.cursor = position;
        Ok(())
    }
}

fn rotated_size(rotation: Rotation, native: Size) -> Size {
    if rotation.is_landscape() {
        Size::new(native.height, native.width)
    } else {
        native
    }
}

// map a point on the rotated screen onto the native target
fn to_native(rotation: Rotation, native: Size, p: GfxPoint) -> GfxPoint {
    let w = native.width as i32;
    let h = native.height as i32;
    match rotation {
        Rotation::Portrait => p,
        Rotation::Landscape => GfxPoint::new(w - 1 - p.y, p.x),
        Rotation::PortraitFlipped => GfxPoint::new(w - 1 - p.x, h - 1 - p.y),
        Rotation::LandscapeFlipped => GfxPoint::new(p.y, h - 1 - p.x),
    }
}

/// Draw target adapter that applies a rotation to every pixel.
struct Rotated<'a, T> {
    target: &'a mut T,
    rotation: Rotation,
}

impl<'a, T> OriginDimensions for Rotated<'a, T>
where
    T: DrawTarget<Color = Rgb565>,
{
    fn size(&self) -> Size {
        rotated_size(self.rotation, self.target.bounding_box().size)
    }
}

impl<'a, T> DrawTarget for Rotated<'a, T>
where
    T: DrawTarget<Color = Rgb565>,
{
    type Color = Rgb565;
    type Error = T::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let native = self.target.bounding_box().size;
        let rotation = self.rotation;
        self.target.draw_iter(
            pixels
                .into_iter()
                .map(move |Pixel(p, color)| Pixel(to_native(rotation, native, p), color)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_maps_corners() {
        let native = Size::new(240, 320);
        let origin = GfxPoint::zero();
        assert_eq!(to_native(Rotation::Portrait, native, origin), origin);
        assert_eq!(to_native(Rotation::Landscape, native, origin), GfxPoint::new(239, 0));
        assert_eq!(
            to_native(Rotation::PortraitFlipped, native, origin),
            GfxPoint::new(239, 319)
        );
        assert_eq!(
            to_native(Rotation::LandscapeFlipped, native, origin),
            GfxPoint::new(0, 319)
        );
        // bottom right of the landscape screen
        assert_eq!(
            to_native(Rotation::Landscape, native, GfxPoint::new(319, 239)),
            GfxPoint::new(0, 319)
        );
    }

    #[test]
    fn test_diameter_saturates() {
        assert_eq!(diameter(0), 1);
        assert_eq!(diameter(3), 7);
        assert_eq!(diameter(u32::MAX / 2), u32::MAX);
        assert_eq!(diameter(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_rotated_size() {
        let native = Size::new(240, 320);
        assert_eq!(rotated_size(Rotation::Landscape, native), Size::new(320, 240));
        assert_eq!(rotated_size(Rotation::PortraitFlipped, native), native);
    }
}
