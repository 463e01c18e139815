use embedded_hal::delay::DelayNs;

use crate::{
    log::warn,
    radio::{
        prelude::{EsbFifo, EsbPayloadLength, EsbStatus},
        Nrf24Error, RF24,
    },
    types::StatusFlags,
    Transport,
};

use super::{commands, registers};

impl<T, DELAY> EsbStatus for RF24<T, DELAY>
where
    T: Transport,
    DELAY: DelayNs,
{
    type StatusErrorType = Nrf24Error<T::Error>;

    fn get_status(&mut self) -> Result<StatusFlags, Self::StatusErrorType> {
        self.spi_command(commands::NOP)
    }

    fn get_status_flags(&self) -> StatusFlags {
        self._status
    }

    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType> {
        self.write_register(registers::STATUS, flags.into_bits() & StatusFlags::IRQ_MASK)?;
        Ok(())
    }

    fn what_happened(&mut self) -> Result<StatusFlags, Self::StatusErrorType> {
        // the STATUS byte clocked in with the command predates the write
        let status = self.write_register(registers::STATUS, StatusFlags::IRQ_MASK)?;
        if status.rx_dr() {
            self._ack_payload_length = match self.get_dynamic_payload_size() {
                Ok(len) => len,
                // a width above 32 means the payload is garbage
                Err(Nrf24Error::BinaryCorruption) => {
                    warn!("discarding RX payload of invalid width");
                    self.flush_rx()?;
                    0
                }
                Err(e) => return Err(e),
            };
        }
        Ok(status)
    }
}
