//! Bounces a ball across an ILI9341 driven 240x320 TFT screen
//! This example is for the Raspberry Pico with the rp2040 chip
//!
//! Pin layout and connection for this example
//!
//! display | Pico pin |  Pico function       | purpose
//!  1 VCC     pin 36     3V3(OUT)              Power to the display and leds
//!  2 GND     pin 38     GND                   Ground
//!  3 CS      pin 10     GP7 (gpio7)           Chip Select: active low allows data
//!  4 RESET   pin 9      GP6 (gpio6)           reset: active low to reset display
//!  5 DC      pin 11     GP8 (gpio8)           Data/Command (1 = Data, 0 = Command)
//!  6 SDI     pin 5      GP3 (gpio3)           Serial data line (MOSI)
//!  7 SCK     pin 4      GP2 (gpio2)           Serial clock
//!  8 LED     pin 36     3V3(OUT)              Backlight, always on
//!
//! A full 240x320 RGB565 framebuffer doesn't leave much of the rp2040's RAM, so this example
//! draws into a 120x160 buffer that covers the top left quarter of the screen.

#![deny(unsafe_code)]
#![deny(warnings)]
#![no_std]
#![no_main]

// Imports

use panic_halt as _;                        // well. halt on panic..
use cortex_m_rt::entry;                     // the macro for our startup function
use core::fmt::Write;                       // write!() onto the display session
use embedded_hal::digital::v2::OutputPin;   // GPIO output pin trait
use embedded_time::rate::*;                 // Embed the `Hz` function/trait:
use rp_pico as bsp;                         // Provide an alias for our BSP so we can switch targets quickly.
use bsp::hal::{
    prelude::*,                             // pull in any important traits
    pac,                                    // Peripheral Access Crate; low-level registers
    sio::Sio,                               // the SIO manages al the pins and their modes
    watchdog::Watchdog,                     // we need to regularly call the watchdog or it shuts down our Pico
};

use lcd565::colors::{NAVY, ORANGE, WHITE, YELLOW};
use lcd565::instructions::prelude::*;
use lcd565::ops::{Circle, RoundRect, Text};
use lcd565::{Config, DisplayInterface, Framebuffer, GraphicsDriver, Lcd, Rotation, SpiInterface};

const BUF_WIDTH: usize = 120;
const BUF_HEIGHT: usize = 160;
const RADIUS: i32 = 8;

#[entry]
fn main() -> ! {

 // --------------------------------------------------------------------------
 //  First part is "boilerplate" setup stuff for Raspberry Pico
 // --------------------------------------------------------------------------

    let mut pac = pac::Peripherals::take().unwrap();   // grab singleton objects
    let core = pac::CorePeripherals::take().unwrap();
    let mut watchdog = Watchdog::new(pac.WATCHDOG);    // set up watchdog timer

    let clocks = bsp::hal::clocks::init_clocks_and_plls(   // configure clocks
        bsp::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    let sio = Sio::new(pac.SIO);
    let pins = bsp::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    // The spi driver picks up this pins automatically if they are in the correct mode
    let _spi_sclk = pins.gpio2.into_mode::<bsp::hal::gpio::FunctionSpi>();
    let _spi_mosi = pins.gpio3.into_mode::<bsp::hal::gpio::FunctionSpi>();
    let spi = bsp::hal::Spi::<_, _, 8>::new(pac.SPI0);

    // the ILI9341 takes writes up to 10 MHz by the data sheet, most modules go a lot faster
    let lcd_spi = spi.init(
        &mut pac.RESETS,
        clocks.peripheral_clock.freq(),
        16_000_000u32.Hz(),
        &embedded_hal::spi::MODE_0,
    );

    let mut lcd_rst = pins.gpio6.into_push_pull_output();
    let lcd_cs = pins.gpio7.into_push_pull_output();
    let lcd_dc = pins.gpio8.into_push_pull_output();

    let mut pico_led = pins.led.into_push_pull_output();
    let mut delay = cortex_m::delay::Delay::new(core.SYST, clocks.system_clock.freq().integer());

 // --------------------------------------------------------------------------
 //  Wake up the panel
 // --------------------------------------------------------------------------

    // hardware reset pulse
    lcd_rst.set_low().unwrap();
    delay.delay_ms(10);
    lcd_rst.set_high().unwrap();
    delay.delay_ms(120);

    let mut iface = SpiInterface::new(lcd_spi, lcd_dc, lcd_cs).unwrap();
    for instruction in init_sequence(Rotation::Portrait).iter() {
        iface.send(*instruction).unwrap();
        if let SoftwareReset | SleepOut = instruction {
            delay.delay_ms(120);
        }
    }

    // The framebuffer is in the native orientation of the panel, so is the session
    let config = Config::default()
        .with_rotation(Rotation::Portrait)
        .with_default_color(ORANGE, None);
    let driver = GraphicsDriver::new(Framebuffer::<BUF_WIDTH, BUF_HEIGHT>::new());
    let mut lcd = Lcd::with_config(driver, config).unwrap();

    pico_led.set_high().unwrap();

 // --------------------------------------------------------------------------
 //  And loop forever bouncing balls.
 // --------------------------------------------------------------------------

    let (mut x, mut y) = (RADIUS, RADIUS);
    let (mut dx, mut dy) = (2, 3);
    let mut bounces = 0u32;

    loop {
        // clear the framebuffer (not the screen)
        lcd.clear().unwrap();

        lcd.draw_round_rect(
            RoundRect::new(0, 0, BUF_WIDTH as u32, BUF_HEIGHT as u32, 6).with_color(NAVY),
        )
        .unwrap();

        // the ball uses the default color from the config
        lcd.fill_circle(Circle::new(x, y, RADIUS as u32)).unwrap();
        lcd.draw_circle(Circle::new(x, y, RADIUS as u32).with_color(YELLOW)).unwrap();

        lcd.draw_string(Text::new("Bounces:").at(4, 4).with_color(WHITE)).unwrap();
        // continues at the text cursor, in the default color
        write!(lcd, " {}", bounces).unwrap();

        // copy the in-memory framebuffer to the panel
        lcd.driver().target().flush(&mut iface).unwrap();

        x += dx;
        y += dy;
        if x <= RADIUS || x >= BUF_WIDTH as i32 - 1 - RADIUS {
            dx = -dx;
            bounces += 1;
        }
        if y <= RADIUS || y >= BUF_HEIGHT as i32 - 1 - RADIUS {
            dy = -dy;
            bounces += 1;
        }

        delay.delay_ms(20);
    }
}

// End of file
