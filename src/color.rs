//! # Color types and the RGB888 to RGB565 quantizer
//!
//! Applications speak 24-bit colors (`0xRRGGBB`), the panel only understands 16-bit R5G6B5
//! pixels. Every color that reaches a driver goes through [`quantize`] first.
//!
//! The conversion simply drops the low bits of every channel: 3 bits of red, 2 bits of green and
//! 3 bits of blue. There is no rounding, so `0x000007` is still black on the panel and
//! `0x000008` is the first visible step of blue. Existing images and color tables were tuned
//! against this behaviour, so it has to stay bit-exact.
//!
//! ```
//! use lcd565::color::{quantize, quantize_from_channels, Color888};
//!
//! assert_eq!(quantize(Color888::new(0xFF0000)).raw(), 0xF800);
//! assert_eq!(quantize_from_channels(0x00, 0xFF, 0x00).raw(), 0x07E0);
//! ```

#[cfg(feature = "graphics")]
use embedded_graphics_core::pixelcolor::{
    raw::{RawData, RawU16},
    Rgb565,
};

/// A 24-bit color packed as `0x00RRGGBB`.
///
/// The high byte is carried along but ignored by [`quantize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color888(u32);

impl Color888 {
    /// Wrap a packed `0x00RRGGBB` value.
    pub const fn new(raw: u32) -> Self {
        Color888(raw)
    }

    /// Pack separate 8-bit channels.
    pub const fn from_channels(r: u8, g: u8, b: u8) -> Self {
        Color888(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Shorthand for [`quantize`].
    pub const fn to_565(self) -> Color565 {
        quantize(self)
    }
}

impl From<u32> for Color888 {
    fn from(raw: u32) -> Self {
        Color888(raw)
    }
}

impl From<Color888> for u32 {
    fn from(color: Color888) -> u32 {
        color.0
    }
}

/// A 16-bit R5G6B5 pixel, the native format of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color565(u16);

impl Color565 {
    /// Wrap a raw R5G6B5 value, for example one read back from a framebuffer.
    pub const fn from_raw(raw: u16) -> Self {
        Color565(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    /// 5-bit red field
    pub const fn red(self) -> u8 {
        (self.0 >> 11) as u8 & 0x1f
    }

    /// 6-bit green field
    pub const fn green(self) -> u8 {
        (self.0 >> 5) as u8 & 0x3f
    }

    /// 5-bit blue field
    pub const fn blue(self) -> u8 {
        self.0 as u8 & 0x1f
    }

    /// Byte order in which the panel expects pixels on the wire.
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<Color565> for u16 {
    fn from(color: Color565) -> u16 {
        color.0
    }
}

impl From<Color888> for Color565 {
    fn from(color: Color888) -> Self {
        quantize(color)
    }
}

/// Convert a 24-bit color to R5G6B5 by truncating every channel.
///
/// Total over all inputs: bits above the 24-bit channel range are masked off, never rejected.
pub const fn quantize(color888: Color888) -> Color565 {
    let raw = color888.0;
    let r5 = ((raw >> 19) & 0x1f) as u16;
    let g6 = ((raw >> 10) & 0x3f) as u16;
    let b5 = ((raw >> 3) & 0x1f) as u16;
    Color565((r5 << 11) | (g6 << 5) | b5)
}

/// Same as [`quantize`], for callers that already hold separate channels.
pub const fn quantize_from_channels(r: u8, g: u8, b: u8) -> Color565 {
    let r5 = (r >> 3) as u16;
    let g6 = (g >> 2) as u16;
    let b5 = (b >> 3) as u16;
    Color565((r5 << 11) | (g6 << 5) | b5)
}

#[cfg(feature = "graphics")]
impl From<Color565> for Rgb565 {
    fn from(color: Color565) -> Self {
        Rgb565::from(RawU16::new(color.0))
    }
}

#[cfg(feature = "graphics")]
impl From<Rgb565> for Color565 {
    fn from(color: Rgb565) -> Self {
        Color565(RawU16::from(color).into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_and_white() {
        assert_eq!(quantize(Color888::new(0x000000)).raw(), 0x0000);
        assert_eq!(quantize(Color888::new(0xFFFFFF)).raw(), 0xFFFF);
    }

    #[test]
    fn test_primaries() {
        assert_eq!(quantize(Color888::new(0xF80000)).raw(), 0xF800);
        assert_eq!(quantize(Color888::new(0xFF0000)).raw(), 0xF800);
        assert_eq!(quantize(Color888::new(0x00FF00)).raw(), 0x07E0);
        assert_eq!(quantize(Color888::new(0x0000FF)).raw(), 0x001F);
    }

    #[test]
    fn test_truncates_instead_of_rounding() {
        assert_eq!(quantize(Color888::new(0x000004)).raw(), 0x0000);
        assert_eq!(quantize(Color888::new(0x000007)).raw(), 0x0000);
        assert_eq!(quantize(Color888::new(0x000008)).raw(), 0x0001);
        // green keeps one more bit than red and blue
        assert_eq!(quantize(Color888::new(0x000400)).raw(), 0x0020);
        assert_eq!(quantize(Color888::new(0x040000)).raw(), 0x0000);
    }

    #[test]
    fn test_high_byte_is_ignored() {
        assert_eq!(
            quantize(Color888::new(0xAB12_3456)),
            quantize(Color888::new(0x0012_3456))
        );
    }

    #[test]
    fn test_channels_match_packed_for_every_color() {
        for r in 0..=255u8 {
            for g in 0..=255u8 {
                for b in 0..=255u8 {
                    let packed = ((r as u32) << 16) | ((g as u32) << 8) | b as u32;
                    assert_eq!(
                        quantize_from_channels(r, g, b),
                        quantize(Color888::new(packed))
                    );
                }
            }
        }
    }

    #[test]
    fn test_quantize_is_repeatable() {
        let color = Color888::new(0x12_34_56);
        assert_eq!(quantize(color), quantize(color));
        assert_eq!(color.to_565(), Color565::from(color));
    }

    #[test]
    fn test_channel_accessors() {
        let color = Color888::from_channels(0xAD, 0xFF, 0x2F);
        assert_eq!(color.raw(), 0xADFF2F);
        assert_eq!((color.red(), color.green(), color.blue()), (0xAD, 0xFF, 0x2F));

        let pixel = color.to_565();
        assert_eq!(pixel.red(), 0xAD >> 3);
        assert_eq!(pixel.green(), 0xFF >> 2);
        assert_eq!(pixel.blue(), 0x2F >> 3);
        assert_eq!(pixel.to_be_bytes(), [(pixel.raw() >> 8) as u8, pixel.raw() as u8]);
    }
}
