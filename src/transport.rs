//! The physical link between the driver and the transceiver.
use embedded_hal::{digital::OutputPin, spi::SpiBus};

/// The three operations the driver needs from the platform.
///
/// Every register transaction is framed by [`Transport::set_csn()`]:
/// the line is driven low, bytes are exchanged one at a time with
/// [`Transport::exchange()`], and the line is driven high again.
/// [`Transport::set_ce()`] gates the radio's RX/TX activity.
pub trait Transport {
    type Error;

    /// Clock one byte out to the chip and return the byte clocked in.
    fn exchange(&mut self, byte: u8) -> Result<u8, Self::Error>;

    /// Drive the CSN line. The chip is selected while this line is low.
    fn set_csn(&mut self, high: bool) -> Result<(), Self::Error>;

    /// Drive the CE line.
    fn set_ce(&mut self, high: bool) -> Result<(), Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    fn exchange(&mut self, byte: u8) -> Result<u8, Self::Error> {
        T::exchange(self, byte)
    }

    fn set_csn(&mut self, high: bool) -> Result<(), Self::Error> {
        T::set_csn(self, high)
    }

    fn set_ce(&mut self, high: bool) -> Result<(), Self::Error> {
        T::set_ce(self, high)
    }
}

/// Errors reported by [`SpiTransport`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransportError<SPI, CSN, CE> {
    /// Represents a SPI transaction error.
    Spi(SPI),
    /// Represents an error driving the CSN pin.
    Csn(CSN),
    /// Represents an error driving the CE pin.
    Ce(CE),
}

/// A [`Transport`] built from an [`SpiBus`] and two [`OutputPin`]s.
///
/// The bus must not be shared with other devices unless the caller
/// serializes access to it; the CSN pin is driven by this adapter.
pub struct SpiTransport<SPI, CSN, CE> {
    spi: SPI,
    csn: CSN,
    ce: CE,
}

impl<SPI, CSN, CE> SpiTransport<SPI, CSN, CE>
where
    SPI: SpiBus<u8>,
    CSN: OutputPin,
    CE: OutputPin,
{
    pub fn new(spi: SPI, csn: CSN, ce: CE) -> Self {
        Self { spi, csn, ce }
    }

    /// Give back the bus and pins.
    pub fn release(self) -> (SPI, CSN, CE) {
        (self.spi, self.csn, self.ce)
    }
}

impl<SPI, CSN, CE> Transport for SpiTransport<SPI, CSN, CE>
where
    SPI: SpiBus<u8>,
    CSN: OutputPin,
    CE: OutputPin,
{
    type Error = TransportError<SPI::Error, CSN::Error, CE::Error>;

    fn exchange(&mut self, byte: u8) -> Result<u8, Self::Error> {
        let mut buf = [byte];
        self.spi
            .transfer_in_place(&mut buf)
            .map_err(TransportError::Spi)?;
        Ok(buf[0])
    }

    fn set_csn(&mut self, high: bool) -> Result<(), Self::Error> {
        if high {
            // all clocked bytes must be on the wire before deselecting
            self.spi.flush().map_err(TransportError::Spi)?;
            self.csn.set_high().map_err(TransportError::Csn)
        } else {
            self.csn.set_low().map_err(TransportError::Csn)
        }
    }

    fn set_ce(&mut self, high: bool) -> Result<(), Self::Error> {
        if high {
            self.ce.set_high().map_err(TransportError::Ce)
        } else {
            self.ce.set_low().map_err(TransportError::Ce)
        }
    }
}
