//! # Instruction set of the ILI9341 panel controller
//!
//! Only the part of the MIPI Display Command Set this crate needs: waking the panel up, choosing
//! the pixel format and orientation, and streaming pixels into an address window.
//! The data sheet can be found here:
//! <https://cdn-shop.adafruit.com/datasheets/ILI9341.pdf>
//!
//! ## Address window
//! Pixels are written into a window set with ColumnAddressSet (CASET) and PageAddressSet
//! (PASET). Both take an inclusive start and end, as two big-endian 16-bit words. After
//! MemoryWrite (RAMWR) every data byte pair fills the next pixel of the window, left to right,
//! top to bottom.
//!
//! ## Memory access control
//! MADCTL tells the controller in which order it walks its memory. The MX, MY and MV bits mirror
//! and swap the axes, which is how the panel is rotated in hardware. The BGR bit is set on every
//! value because the common ILI9341 modules have their subpixels in BGR order.

use crate::{colors::ColorBits, driver::Rotation};

const MADCTL_MY: u8 = 0x80;
const MADCTL_MX: u8 = 0x40;
const MADCTL_MV: u8 = 0x20;
const MADCTL_BGR: u8 = 0x08;

/// ILI9341 instructions with their arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// no operation, do nothing
    Nop,

    /// reset all registers to their defaults, needs 5ms before the next instruction
    SoftwareReset,

    /// leave sleep mode, needs 120ms before the display is turned on
    SleepOut,

    DisplayOff,

    DisplayOn,

    /// set the first and last column (inclusive) of the address window
    ColumnAddressSet { start: u16, end: u16 },

    /// set the first and last row (inclusive) of the address window
    PageAddressSet { start: u16, end: u16 },

    /// every data byte after this instruction goes into the address window
    MemoryWrite,

    /// memory walking order, see the module documentation
    MemoryAccessControl(Rotation),

    /// color depth of the pixel data on the interface
    PixelFormatSet(ColorBits),
}

use Instruction::*;

impl Instruction {
    /// The command byte, sent with DC low.
    pub fn opcode(self) -> u8 {
        match self {
            Nop => 0x00,
            SoftwareReset => 0x01,
            SleepOut => 0x11,
            DisplayOff => 0x28,
            DisplayOn => 0x29,
            ColumnAddressSet { .. } => 0x2A,
            PageAddressSet { .. } => 0x2B,
            MemoryWrite => 0x2C,
            MemoryAccessControl(_) => 0x36,
            PixelFormatSet(_) => 0x3A,
        }
    }

    /// The parameter bytes, sent with DC high right after the opcode.
    ///
    /// Returns a buffer and the number of valid bytes in it.
    pub fn params(self) -> ([u8; 4], usize) {
        match self {
            ColumnAddressSet { start, end } | PageAddressSet { start, end } => {
                let [s0, s1] = start.to_be_bytes();
                let [e0, e1] = end.to_be_bytes();
                ([s0, s1, e0, e1], 4)
            }
            MemoryAccessControl(rotation) => ([madctl(rotation), 0, 0, 0], 1),
            PixelFormatSet(bits) => ([bits.pixel_format(), 0, 0, 0], 1),
            _ => ([0; 4], 0),
        }
    }
}

fn madctl(rotation: Rotation) -> u8 {
    match rotation {
        Rotation::Portrait => MADCTL_MX | MADCTL_BGR,
        Rotation::Landscape => MADCTL_MV | MADCTL_BGR,
        Rotation::PortraitFlipped => MADCTL_MY | MADCTL_BGR,
        Rotation::LandscapeFlipped => MADCTL_MX | MADCTL_MY | MADCTL_MV | MADCTL_BGR,
    }
}

/// The power-up sequence: reset, wake up, 16-bit pixels, orientation, display on.
///
/// The controller wants a pause after SoftwareReset and SleepOut. Sending the sequence in one
/// go works on most modules when the SPI clock is slow, otherwise insert a delay after those two.
pub fn init_sequence(rotation: Rotation) -> [Instruction; 5] {
    [
        SoftwareReset,
        SleepOut,
        PixelFormatSet(ColorBits::Bits16),
        MemoryAccessControl(rotation),
        DisplayOn,
    ]
}

/// A prelude for convenience, it pulls the instruction enum and its variants into scope.
pub mod prelude {
    pub use super::{init_sequence, Instruction, Instruction::*};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_window_params() {
        let caset = ColumnAddressSet { start: 0, end: 319 };
        assert_eq!(caset.opcode(), 0x2A);
        assert_eq!(caset.params(), ([0x00, 0x00, 0x01, 0x3F], 4));

        let paset = PageAddressSet { start: 16, end: 239 };
        assert_eq!(paset.opcode(), 0x2B);
        assert_eq!(paset.params(), ([0x00, 0x10, 0x00, 0xEF], 4));
    }

    #[test]
    fn test_single_byte_params() {
        assert_eq!(PixelFormatSet(ColorBits::Bits16).params(), ([0x55, 0, 0, 0], 1));
        assert_eq!(
            MemoryAccessControl(Rotation::Landscape).params(),
            ([0x28, 0, 0, 0], 1)
        );
        assert_eq!(MemoryWrite.params().1, 0);
    }

    #[test]
    fn test_init_sequence_ends_with_display_on() {
        let sequence = init_sequence(Rotation::Portrait);
        assert_eq!(sequence[0], SoftwareReset);
        assert_eq!(sequence[3], MemoryAccessControl(Rotation::Portrait));
        assert_eq!(sequence[4].opcode(), 0x29);
    }
}
