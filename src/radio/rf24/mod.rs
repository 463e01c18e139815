use embedded_hal::delay::DelayNs;
mod auto_ack;
pub(crate) mod bit_fields;
mod channel;
mod init;
use bit_fields::Flags;
mod constants;
mod crc_length;
mod data_rate;
mod fifo;
mod pa_level;
mod payload_length;
mod pipe;
mod power;
mod radio;
pub use constants::{commands, mnemonics, registers, timing};
mod status;
use crate::{
    log::{debug, error},
    StatusFlags, Transport,
};

/// An collection of error types to describe hardware malfunctions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nrf24Error<E> {
    /// Represents an error reported by the [`Transport`].
    Transport(E),
    /// The FEATURE register ignored a write, even after sending the ACTIVATE command.
    ///
    /// Dynamic payloads and ACK payloads cannot be used with this radio.
    /// This is not recoverable by retrying.
    FeaturesLocked,
    /// Represents a corruption of binary data (as it was transferred over the SPI bus' MISO)
    BinaryCorruption,
    /// A zero-length payload was given while dynamic payloads are enabled.
    EmptyPayload,
}

#[cfg(feature = "defmt")]
impl<E> defmt::Format for Nrf24Error<E> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Nrf24Error::Transport(_) => defmt::write!(fmt, "Transport"),
            Nrf24Error::FeaturesLocked => defmt::write!(fmt, "FeaturesLocked"),
            Nrf24Error::BinaryCorruption => defmt::write!(fmt, "BinaryCorruption"),
            Nrf24Error::EmptyPayload => defmt::write!(fmt, "EmptyPayload"),
        }
    }
}

/// This struct implements the [`Esb*` traits](mod@crate::radio::prelude)
/// for the nRF24L01 transceiver.
///
/// Additionally, there are some functions implemented that are specific to the nRF24L01.
pub struct RF24<T, DELAY> {
    _transport: T,
    _delay_impl: DELAY,
    _status: StatusFlags,
    _flags: Flags,
    _payload_size: u8,
    _pipe0_rx_addr: [u8; 5],
    _ack_payload_length: u8,
}

impl<T, DELAY> RF24<T, DELAY>
where
    T: Transport,
    DELAY: DelayNs,
{
    /// Instantiate an [`RF24`] object that talks to the radio over `transport`.
    ///
    /// Nothing is sent to the radio until
    /// [`init()`](fn@crate::radio::prelude::EsbInit::init) is called.
    pub fn new(transport: T, delay_impl: DELAY) -> RF24<T, DELAY> {
        RF24 {
            _transport: transport,
            _delay_impl: delay_impl,
            _status: StatusFlags::default(),
            _flags: Flags::new().with_wide_band(true),
            _payload_size: 32,
            _pipe0_rx_addr: [0; 5],
            _ack_payload_length: 0,
        }
    }

    /// Frame one transaction: select the radio, send the `command` byte,
    /// let `body` exchange the data bytes, then deselect the radio.
    ///
    /// The radio is always deselected, even if `body` fails.
    /// The STATUS byte clocked in with the `command` is cached.
    fn transaction<R>(
        &mut self,
        command: u8,
        body: impl FnOnce(&mut T) -> Result<R, T::Error>,
    ) -> Result<R, Nrf24Error<T::Error>> {
        self._transport.set_csn(false).map_err(Nrf24Error::Transport)?;
        let result = match self._transport.exchange(command) {
            Ok(status) => {
                self._status = StatusFlags::from_bits(status);
                body(&mut self._transport)
            }
            Err(e) => Err(e),
        };
        let released = self._transport.set_csn(true);
        let out = result.map_err(Nrf24Error::Transport)?;
        released.map_err(Nrf24Error::Transport)?;
        Ok(out)
    }

    /// Send a command that has no data bytes (eg. NOP, FLUSH_TX).
    ///
    /// ```ignore
    /// self.spi_command(commands::NOP)?;
    /// // STATUS register is now stored in self._status
    /// ```
    fn spi_command(&mut self, command: u8) -> Result<StatusFlags, Nrf24Error<T::Error>> {
        self.transaction(command, |_| Ok(()))?;
        Ok(self._status)
    }

    /// Clock out `total` bytes after the `command`, keeping as many as `buf` holds.
    fn spi_read(
        &mut self,
        command: u8,
        buf: &mut [u8],
        total: usize,
    ) -> Result<(), Nrf24Error<T::Error>> {
        self.transaction(command, |transport| {
            for i in 0..total {
                let byte = transport.exchange(commands::NOP)?;
                if let Some(slot) = buf.get_mut(i) {
                    *slot = byte;
                }
            }
            Ok(())
        })
    }

    /// Clock in `buf` after the `command`, followed by zeros up to `total` bytes.
    fn spi_write(
        &mut self,
        command: u8,
        buf: &[u8],
        total: usize,
    ) -> Result<StatusFlags, Nrf24Error<T::Error>> {
        self.transaction(command, |transport| {
            for byte in buf {
                transport.exchange(*byte)?;
            }
            for _ in buf.len()..total {
                transport.exchange(0)?;
            }
            Ok(())
        })?;
        Ok(self._status)
    }

    fn read_registers(&mut self, register: u8, buf: &mut [u8]) -> Result<(), Nrf24Error<T::Error>> {
        let total = buf.len();
        self.spi_read(
            commands::R_REGISTER | (register & commands::REGISTER_MASK),
            buf,
            total,
        )
    }

    fn read_register(&mut self, register: u8) -> Result<u8, Nrf24Error<T::Error>> {
        let mut buf = [0u8];
        self.read_registers(register, &mut buf)?;
        Ok(buf[0])
    }

    fn write_registers(
        &mut self,
        register: u8,
        buf: &[u8],
    ) -> Result<StatusFlags, Nrf24Error<T::Error>> {
        self.spi_write(
            commands::W_REGISTER | (register & commands::REGISTER_MASK),
            buf,
            buf.len(),
        )
    }

    fn write_register(
        &mut self,
        register: u8,
        byte: u8,
    ) -> Result<StatusFlags, Nrf24Error<T::Error>> {
        self.write_registers(register, &[byte])
    }

    /// Drive the CE pin.
    fn set_ce(&mut self, high: bool) -> Result<(), Nrf24Error<T::Error>> {
        self._transport.set_ce(high).map_err(Nrf24Error::Transport)
    }

    /// A private function to write a special SPI command specific to older
    /// non-plus variants of the nRF24L01 radio module. It has no effect on plus variants.
    fn toggle_features(&mut self) -> Result<(), Nrf24Error<T::Error>> {
        self.spi_write(commands::ACTIVATE, &[commands::ACTIVATE_KEY], 1)?;
        Ok(())
    }

    /// Write the FEATURE register and verify it took effect.
    ///
    /// Older variants ignore writes to FEATURE until the ACTIVATE command unlocks it.
    /// The unlock is attempted once.
    fn write_feature(&mut self, value: u8) -> Result<(), Nrf24Error<T::Error>> {
        self.write_register(registers::FEATURE, value)?;
        if self.read_register(registers::FEATURE)? == value {
            return Ok(());
        }
        debug!("FEATURE register is locked; sending ACTIVATE");
        self.toggle_features()?;
        self.write_register(registers::FEATURE, value)?;
        if self.read_register(registers::FEATURE)? == value {
            return Ok(());
        }
        error!("FEATURE register rejected {=u8:#X} after ACTIVATE", value);
        Err(Nrf24Error::FeaturesLocked)
    }

    /// Is this radio a nRF24L01+ variant?
    ///
    /// The bool that this function returns is only valid _after_ calling
    /// [`init()`](fn@crate::radio::prelude::EsbInit::init).
    /// It is detected by the radio accepting the 250 Kbps data rate.
    pub fn is_plus_variant(&self) -> bool {
        self._flags.p_variant()
    }

    /// Does the configured data rate use the wider (1 MHz or 2 MHz) channel spacing?
    pub fn is_wide_band(&self) -> bool {
        self._flags.wide_band()
    }

    /// Was a carrier detected on the current channel?
    ///
    /// This is meant for older non-plus variants. The radio must be listening.
    pub fn test_carrier(&mut self) -> Result<bool, Nrf24Error<T::Error>> {
        Ok(self.read_register(registers::CD)? & 1 == 1)
    }

    /// Was a signal stronger than -64 dBm received on the current channel?
    ///
    /// This is meant for plus variants. The radio must be listening.
    pub fn test_rpd(&mut self) -> Result<bool, Nrf24Error<T::Error>> {
        Ok(self.read_register(registers::RPD)? & 1 == 1)
    }
}
