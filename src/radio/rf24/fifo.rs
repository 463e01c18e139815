use embedded_hal::delay::DelayNs;

use crate::radio::{prelude::EsbFifo, Nrf24Error, RF24};
use crate::{FifoState, Transport};

use super::{commands, mnemonics, registers};

impl<T, DELAY> EsbFifo for RF24<T, DELAY>
where
    T: Transport,
    DELAY: DelayNs,
{
    type FifoErrorType = Nrf24Error<T::Error>;

    fn available(&mut self) -> Result<bool, Self::FifoErrorType> {
        Ok(self.available_pipe()?.is_some())
    }

    fn available_pipe(&mut self) -> Result<Option<u8>, Self::FifoErrorType> {
        let status = self.spi_command(commands::NOP)?;
        if !status.rx_dr() {
            return Ok(None);
        }
        self.write_register(registers::STATUS, mnemonics::MASK_RX_DR)?;
        // an ACK payload was just sent along with the ACK packet
        if status.tx_ds() {
            self.write_register(registers::STATUS, mnemonics::MASK_TX_DS)?;
        }
        Ok(Some(status.rx_pipe()))
    }

    /// Use this to discard all 3 layers in the radio's RX FIFO.
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.spi_command(commands::FLUSH_RX)?;
        Ok(())
    }

    /// Use this to discard all 3 layers in the radio's TX FIFO.
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.spi_command(commands::FLUSH_TX)?;
        Ok(())
    }

    fn get_fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::FifoErrorType> {
        let fifo_status = self.read_register(registers::FIFO_STATUS)?;
        let offset = about_tx as u8 * 4;
        let status = (fifo_status & (3 << offset)) >> offset;
        match status {
            1 => Ok(FifoState::Empty),
            2 => Ok(FifoState::Full),
            _ => Ok(FifoState::Occupied),
        }
    }
}

impl<T, DELAY> RF24<T, DELAY>
where
    T: Transport,
    DELAY: DelayNs,
{
    /// Is the RX FIFO empty?
    pub(super) fn rx_fifo_empty(&mut self) -> Result<bool, Nrf24Error<T::Error>> {
        Ok(self.read_register(registers::FIFO_STATUS)? & mnemonics::RX_EMPTY != 0)
    }
}
