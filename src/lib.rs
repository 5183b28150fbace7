//! # Display session for RGB565 LCD panels
//!
//! Applications describe colors as 24-bit `0xRRGGBB` values, ILI9341-class panels take 16-bit
//! RGB565 pixels. This crate sits between the two: a display session ([`Lcd`]) takes drawing
//! calls with optional colors, fills in the default color where one is missing, quantizes it to
//! RGB565 and forwards the call to a panel driver implementing [`LcdDriver`].
//!
//! The crate is `no_std` and has two parts:
//!  - always: the quantizer ([`color`]), the named colors ([`colors`]), the default color state
//!    ([`defaults`]), the session ([`display`]) and an embedded_hal SPI interface to the panel
//!    controller ([`interface`], [`instructions`]).
//!  - feature "graphics": a driver drawing through embedded_graphics ([`graphics`]) and an
//!    in-memory framebuffer that can be flushed over the SPI interface ([`framebuffer`]).
//!
//! ```ignore
//! use core::fmt::Write;
//! use lcd565::{colors, ops::Circle, Framebuffer, GraphicsDriver, Lcd};
//!
//! let driver = GraphicsDriver::new(Framebuffer::<240, 320>::new());
//! let mut lcd = Lcd::new(driver)?;
//!
//! lcd.clear()?;
//! lcd.set_default_color(Some(colors::ORANGE), None)?;
//! lcd.fill_circle(Circle::new(160, 120, 40))?;
//! writeln!(lcd, "Hello World").unwrap();
//! ```
#![no_std]

extern crate embedded_hal as hal;

pub mod color;
pub mod colors;
pub mod config;
pub mod defaults;
pub mod display;
pub mod driver;
pub mod error;
pub mod instructions;
pub mod interface;
pub mod ops;

#[cfg(feature = "graphics")]
pub mod framebuffer;
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::{quantize, quantize_from_channels, Color565, Color888};
pub use config::Config;
pub use defaults::DefaultColors;
pub use display::Lcd;
pub use driver::{LcdDriver, Point, Rotation};
pub use interface::{DisplayInterface, SpiInterface};

#[cfg(feature = "graphics")]
pub use framebuffer::Framebuffer;
#[cfg(feature = "graphics")]
pub use graphics::GraphicsDriver;

/// width of the ILI9341 panel in its native (portrait) orientation
pub const WIDTH: u16 = 240;

/// height of the ILI9341 panel in its native (portrait) orientation
pub const HEIGHT: u16 = 320;
