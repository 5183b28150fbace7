//! # RGB565 framebuffer
//!
//! This module is behind a feature flag. Enable it in your Cargo.toml with feature flag
//! "graphics".
//!
//! [`Framebuffer`] keeps a full screen of pixels in memory and implements the embedded_graphics
//! `DrawTarget` trait, so it can be handed to a
//! [`GraphicsDriver`](crate::graphics::GraphicsDriver). It trades memory for speed: a 320x240
//! screen takes 150kB, so on small microcontrollers use a smaller buffer or draw directly to a
//! display driver implementing `DrawTarget`.
//!
//! The typical workflow for (animated) graphics is:
//!  - clear the screen with Lcd.clear()
//!  - draw "stuff" through the display session
//!  - Framebuffer.flush() to the panel, it now gets visible
//!  - rinse and repeat
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::Rgb565,
    Pixel,
};
use log::trace;

use crate::{
    color::Color565,
    instructions::Instruction::{ColumnAddressSet, MemoryWrite, PageAddressSet},
    interface::DisplayInterface,
};

// pixels are streamed in chunks of this many bytes
const CHUNK: usize = 64;

/// A `W` x `H` screen of RGB565 pixels, initialized to black.
#[derive(Debug, Clone)]
pub struct Framebuffer<const W: usize, const H: usize> {
    pixels: [[Color565; W]; H],
}

impl<const W: usize, const H: usize> Default for Framebuffer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> Framebuffer<W, H> {
    pub fn new() -> Self {
        Framebuffer {
            pixels: [[Color565::default(); W]; H],
        }
    }

    pub fn width(&self) -> usize {
        W
    }

    pub fn height(&self) -> usize {
        H
    }

    /// Set a pixel, silently ignoring coordinates outside the buffer.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color565) {
        if x < W && y < H {
            self.pixels[y][x] = color;
        }
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Color565> {
        self.pixels.get(y).and_then(|row| row.get(x)).copied()
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> &[[Color565; W]; H] {
        &self.pixels
    }

    /// Write the whole buffer to the panel.
    ///
    /// Sets the address window to the full buffer and streams the pixels big-endian, which is
    /// the 16-bit pixel format of the controller.
    pub fn flush<I>(&self, iface: &mut I) -> Result<(), I::Error>
    where
        I: DisplayInterface,
    {
        iface.send(ColumnAddressSet {
            start: 0,
            end: W.saturating_sub(1) as u16,
        })?;
        iface.send(PageAddressSet {
            start: 0,
            end: H.saturating_sub(1) as u16,
        })?;
        iface.send(MemoryWrite)?;

        let mut chunk = [0u8; CHUNK];
        let mut len = 0;
        for pixel in self.pixels.iter().flat_map(|row| row.iter()) {
            chunk[len..len + 2].copy_from_slice(&pixel.to_be_bytes());
            len += 2;
            if len == CHUNK {
                iface.write_data(&chunk)?;
                len = 0;
            }
        }
        if len > 0 {
            iface.write_data(&chunk[..len])?;
        }

        trace!("flushed {}x{} framebuffer", W, H);
        Ok(())
    }
}

impl<const W: usize, const H: usize> DrawTarget for Framebuffer<W, H> {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if coord.x >= 0 && coord.y >= 0 {
                self.set_pixel(coord.x as usize, coord.y as usize, color.into());
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Rgb565) -> Result<(), Self::Error> {
        let color: Color565 = color.into();
        self.pixels = [[color; W]; H];
        Ok(())
    }
}

impl<const W: usize, const H: usize> OriginDimensions for Framebuffer<W, H> {
    fn size(&self) -> Size {
        Size::new(W as u32, H as u32)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use embedded_graphics_core::{geometry::Point, pixelcolor::RgbColor};

    use super::*;

    #[derive(Default)]
    struct Recorder {
        commands: Vec<u8>,
        data: Vec<u8>,
    }

    impl DisplayInterface for Recorder {
        type Error = core::convert::Infallible;

        fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
            self.commands.push(command);
            Ok(())
        }

        fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            self.data.extend_from_slice(data);
            Ok(())
        }
    }

    #[test]
    fn test_draw_iter_clips() {
        let mut fb = Framebuffer::<4, 3>::new();
        fb.draw_iter([
            Pixel(Point::new(1, 1), Rgb565::RED),
            Pixel(Point::new(-1, 0), Rgb565::RED),
            Pixel(Point::new(4, 0), Rgb565::RED),
        ])
        .unwrap();
        assert_eq!(fb.get_pixel(1, 1), Some(Color565::from_raw(0xF800)));
        assert_eq!(fb.get_pixel(0, 0), Some(Color565::from_raw(0)));
        assert_eq!(fb.get_pixel(4, 0), None);
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::<2, 2>::new();
        fb.clear(Rgb565::WHITE).unwrap();
        assert!(fb
            .rows()
            .iter()
            .flat_map(|row| row.iter())
            .all(|p| p.raw() == 0xFFFF));
    }

    #[test]
    fn test_flush_sets_window_and_streams_big_endian() {
        let mut fb = Framebuffer::<40, 2>::new();
        fb.set_pixel(0, 0, Color565::from_raw(0xF800));
        fb.set_pixel(39, 1, Color565::from_raw(0x001F));

        let mut rec = Recorder::default();
        fb.flush(&mut rec).unwrap();

        assert_eq!(rec.commands, [0x2A, 0x2B, 0x2C]);
        // 4 bytes CASET, 4 bytes PASET, then the pixels
        assert_eq!(&rec.data[..4], &[0, 0, 0, 39]);
        assert_eq!(&rec.data[4..8], &[0, 0, 0, 1]);
        let pixels = &rec.data[8..];
        assert_eq!(pixels.len(), 40 * 2 * 2);
        assert_eq!(&pixels[..2], &[0xF8, 0x00]);
        assert_eq!(&pixels[pixels.len() - 2..], &[0x00, 0x1F]);
    }
}
