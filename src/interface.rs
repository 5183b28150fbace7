//! # SPI interface to the panel controller
//!
//! The panel listens on a write-only SPI bus plus two GPIOs: DC selects between command (low)
//! and data (high), CS enables the chip while it is low.
//!
//! [`DisplayInterface`] is what the framebuffer needs to push pixels, [`SpiInterface`] is the
//! implementation on top of embedded_hal.
use hal::blocking::spi::Write as SpiWrite;
use hal::digital::v2::OutputPin;
use log::trace;

use crate::{error::InterfaceError, instructions::Instruction};

/// Byte level access to the panel controller.
pub trait DisplayInterface {
    type Error;

    /// Send one command byte (DC low).
    fn write_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Send a buffer of parameter or pixel bytes (DC high).
    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Send an instruction followed by its parameters.
    fn send(&mut self, instruction: Instruction) -> Result<(), Self::Error> {
        self.write_command(instruction.opcode())?;
        let (params, len) = instruction.params();
        if len > 0 {
            self.write_data(&params[..len])?;
        }
        Ok(())
    }

    /// Send a list of instructions, for example [`init_sequence`](crate::instructions::init_sequence).
    fn send_all(&mut self, instructions: &[Instruction]) -> Result<(), Self::Error> {
        for instruction in instructions {
            self.send(*instruction)?;
        }
        Ok(())
    }
}

/// Panel controller on a hardware (or bit banged) SPI bus.
#[derive(Debug)]
pub struct SpiInterface<SPI, DC, CS>
where
    SPI: SpiWrite<u8>,
    DC: OutputPin,
    CS: OutputPin,
{
    spi: SPI,
    dc: DC,
    cs: CS,
}

impl<SPI, DC, CS, PinErr, SpiErr> SpiInterface<SPI, DC, CS>
where
    SPI: SpiWrite<u8, Error = SpiErr>,
    DC: OutputPin<Error = PinErr>,
    CS: OutputPin<Error = PinErr>,
{
    /// Create the interface. CS is pulled high so the panel ignores the bus until we talk to it.
    pub fn new(spi: SPI, dc: DC, mut cs: CS) -> Result<SpiInterface<SPI, DC, CS>, PinErr> {
        cs.set_high()?;
        Ok(SpiInterface { spi, dc, cs })
    }

    /// Give back the bus and the pins.
    pub fn release(self) -> (SPI, DC, CS) {
        (self.spi, self.dc, self.cs)
    }

    // CS low "activates" the controller for the duration of one transfer
    fn transfer(&mut self, bytes: &[u8]) -> Result<(), InterfaceError<PinErr, SpiErr>> {
        InterfaceError::pin(self.cs.set_low())?;
        InterfaceError::spi(self.spi.write(bytes))?;
        InterfaceError::pin(self.cs.set_high())?;
        Ok(())
    }
}

impl<SPI, DC, CS, PinErr, SpiErr> DisplayInterface for SpiInterface<SPI, DC, CS>
where
    SPI: SpiWrite<u8, Error = SpiErr>,
    DC: OutputPin<Error = PinErr>,
    CS: OutputPin<Error = PinErr>,
{
    type Error = InterfaceError<PinErr, SpiErr>;

    fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
        trace!("command 0x{:02X}", command);
        InterfaceError::pin(self.dc.set_low())?;
        self.transfer(&[command])
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        InterfaceError::pin(self.dc.set_high())?;
        self.transfer(data)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::{cell::RefCell, rc::Rc, vec, vec::Vec};

    use super::*;
    use crate::instructions::Instruction::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Dc(bool),
        Cs(bool),
        Bytes(Vec<u8>),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    struct Pin {
        log: Log,
        dc: bool,
    }

    impl OutputPin for Pin {
        type Error = ();

        fn set_low(&mut self) -> Result<(), ()> {
            let event = if self.dc { Event::Dc(false) } else { Event::Cs(false) };
            self.log.borrow_mut().push(event);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), ()> {
            let event = if self.dc { Event::Dc(true) } else { Event::Cs(true) };
            self.log.borrow_mut().push(event);
            Ok(())
        }
    }

    struct Spi {
        log: Log,
        fail: bool,
    }

    impl SpiWrite<u8> for Spi {
        type Error = &'static str;

        fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
            if self.fail {
                return Err("bus");
            }
            self.log.borrow_mut().push(Event::Bytes(words.to_vec()));
            Ok(())
        }
    }

    fn interface(fail: bool) -> (SpiInterface<Spi, Pin, Pin>, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let spi = Spi { log: log.clone(), fail };
        let dc = Pin { log: log.clone(), dc: true };
        let cs = Pin { log: log.clone(), dc: false };
        let iface = SpiInterface::new(spi, dc, cs).unwrap();
        log.borrow_mut().clear();
        (iface, log)
    }

    #[test]
    fn test_command_is_framed_with_dc_low() {
        let (mut iface, log) = interface(false);
        iface.write_command(0x29).unwrap();
        assert_eq!(
            *log.borrow(),
            vec![
                Event::Dc(false),
                Event::Cs(false),
                Event::Bytes(vec![0x29]),
                Event::Cs(true),
            ]
        );
    }

    #[test]
    fn test_instruction_sends_params_as_data() {
        let (mut iface, log) = interface(false);
        iface.send(ColumnAddressSet { start: 0, end: 239 }).unwrap();
        let log = log.borrow();
        assert_eq!(log[2], Event::Bytes(vec![0x2A]));
        assert_eq!(log[4], Event::Dc(true));
        assert_eq!(log[6], Event::Bytes(vec![0x00, 0x00, 0x00, 0xEF]));
    }

    #[test]
    fn test_instruction_without_params_sends_no_data() {
        let (mut iface, log) = interface(false);
        iface.send(MemoryWrite).unwrap();
        assert!(!log.borrow().contains(&Event::Dc(true)));
    }

    #[test]
    fn test_spi_error_is_reported() {
        let (mut iface, _log) = interface(true);
        assert_eq!(iface.write_data(&[1, 2]), Err(InterfaceError::Spi("bus")));
    }
}
