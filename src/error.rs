//! Errors of the SPI display interface.

use core::fmt;

/// Failure while talking to the panel: either a GPIO (DC / CS) or the SPI bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceError<PinErr, SpiErr> {
    Pin(PinErr),
    Spi(SpiErr),
}

impl<PinErr, SpiErr> InterfaceError<PinErr, SpiErr> {
    // helpers to wrap embedded_hal results, so call sites stay a one-liner with `?`
    pub(crate) fn pin<T>(result: Result<T, PinErr>) -> Result<T, Self> {
        result.map_err(InterfaceError::Pin)
    }

    pub(crate) fn spi<T>(result: Result<T, SpiErr>) -> Result<T, Self> {
        result.map_err(InterfaceError::Spi)
    }
}

impl<PinErr, SpiErr> fmt::Display for InterfaceError<PinErr, SpiErr>
where
    PinErr: fmt::Debug,
    SpiErr: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterfaceError::Pin(e) => write!(f, "display pin error: {:?}", e),
            InterfaceError::Spi(e) => write!(f, "display SPI error: {:?}", e),
        }
    }
}
