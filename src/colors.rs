//! Named 24-bit colors of the ILI9341 palette, and the supported color depths.

use crate::color::Color888;

pub const BLACK: Color888 = Color888::new(0x000000);
pub const NAVY: Color888 = Color888::new(0x000080);
pub const DARKGREEN: Color888 = Color888::new(0x008000);
pub const DARKCYAN: Color888 = Color888::new(0x008080);
pub const MAROON: Color888 = Color888::new(0x800000);
pub const PURPLE: Color888 = Color888::new(0x800080);
pub const OLIVE: Color888 = Color888::new(0x808000);
pub const LIGHTGREY: Color888 = Color888::new(0xC0C0C0);
pub const DARKGREY: Color888 = Color888::new(0x808080);
pub const BLUE: Color888 = Color888::new(0x0000FF);
pub const GREEN: Color888 = Color888::new(0x00FF00);
pub const CYAN: Color888 = Color888::new(0x00FFFF);
pub const RED: Color888 = Color888::new(0xFF0000);
pub const MAGENTA: Color888 = Color888::new(0xFF00FF);
pub const YELLOW: Color888 = Color888::new(0xFFFF00);
pub const WHITE: Color888 = Color888::new(0xFFFFFF);
pub const ORANGE: Color888 = Color888::new(0xFFA500);
pub const GREENYELLOW: Color888 = Color888::new(0xADFF2F);
pub const PINK: Color888 = Color888::new(0xFFC0CB);

/// Every named color, in palette order.
pub const NAMED: [(&str, Color888); 19] = [
    ("BLACK", BLACK),
    ("NAVY", NAVY),
    ("DARKGREEN", DARKGREEN),
    ("DARKCYAN", DARKCYAN),
    ("MAROON", MAROON),
    ("PURPLE", PURPLE),
    ("OLIVE", OLIVE),
    ("LIGHTGREY", LIGHTGREY),
    ("DARKGREY", DARKGREY),
    ("BLUE", BLUE),
    ("GREEN", GREEN),
    ("CYAN", CYAN),
    ("RED", RED),
    ("MAGENTA", MAGENTA),
    ("YELLOW", YELLOW),
    ("WHITE", WHITE),
    ("ORANGE", ORANGE),
    ("GREENYELLOW", GREENYELLOW),
    ("PINK", PINK),
];

/// Look up a named color, ignoring ASCII case.
pub fn by_name(name: &str) -> Option<Color888> {
    NAMED
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, color)| *color)
}

pub const COLOR_BITS16: u8 = 16;
pub const COLOR_BITS24: u8 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
/// Color depth of the pixel data sent to the panel.
///
/// 16 bits is one RGB565 word per pixel. 24 bits sends one byte per channel, of which the panel
/// keeps the top 6 bits (its 18-bit mode).
pub enum ColorBits {
    Bits16 = COLOR_BITS16,
    Bits24 = COLOR_BITS24,
}

impl ColorBits {
    /// Parameter byte of the pixel format instruction (DPI and DBI nibbles).
    pub fn pixel_format(self) -> u8 {
        match self {
            ColorBits::Bits16 => 0x55,
            ColorBits::Bits24 => 0x66,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("ORANGE"), Some(ORANGE));
        assert_eq!(by_name("greenyellow"), Some(GREENYELLOW));
        assert_eq!(by_name("LightGrey"), Some(LIGHTGREY));
        assert_eq!(by_name("TEAL"), None);
    }

    #[test]
    fn test_palette_values() {
        assert_eq!(WHITE.to_565().raw(), 0xFFFF);
        assert_eq!(BLACK.to_565().raw(), 0x0000);
        assert_eq!(NAVY.to_565().raw(), 0x0010);
        assert_eq!(ORANGE.to_565().raw(), 0xFD20);
        assert_eq!(NAMED.len(), 19);
    }

    #[test]
    fn test_color_bits() {
        assert_eq!(ColorBits::Bits16 as u8, 16);
        assert_eq!(ColorBits::Bits24 as u8, 24);
        assert_eq!(ColorBits::Bits16.pixel_format(), 0x55);
    }
}
