use embedded_hal::delay::DelayNs;

use crate::{
    radio::{prelude::EsbPipe, Nrf24Error, RF24},
    Transport,
};

use super::registers;

impl<T, DELAY> EsbPipe for RF24<T, DELAY>
where
    T: Transport,
    DELAY: DelayNs,
{
    type PipeErrorType = Nrf24Error<T::Error>;

    fn open_rx_pipe(&mut self, pipe: u8, address: &[u8; 5]) -> Result<(), Self::PipeErrorType> {
        if pipe > 5 {
            return Ok(());
        }

        if pipe < 2 {
            // If this is pipe 0, cache the address.  This is needed because
            // open_tx_pipe() will overwrite the pipe 0 address, so
            // start_listening() will have to restore it.
            if pipe == 0 {
                self._pipe0_rx_addr = *address;
            }
            self.write_registers(registers::RX_ADDR_P0 + pipe, address)?;
        }
        // For pipes 2-5, only write the LSB
        else {
            self.write_register(registers::RX_ADDR_P0 + pipe, address[0])?;
        }
        self.write_register(registers::RX_PW_P0 + pipe, self._payload_size)?;

        let out = self.read_register(registers::EN_RXADDR)? | (1 << pipe);
        self.write_register(registers::EN_RXADDR, out)?;
        Ok(())
    }

    fn open_tx_pipe(&mut self, address: &[u8; 5]) -> Result<(), Self::PipeErrorType> {
        // pipe 0 receives the ACK packets
        self.write_registers(registers::RX_ADDR_P0, address)?;
        self.write_registers(registers::TX_ADDR, address)?;
        self.write_register(registers::RX_PW_P0, self._payload_size)?;
        Ok(())
    }

    /// If the given `pipe` number is  not in range [0, 5], then this function does nothing.
    fn close_rx_pipe(&mut self, pipe: u8) -> Result<(), Self::PipeErrorType> {
        if pipe > 5 {
            return Ok(());
        }
        let out = self.read_register(registers::EN_RXADDR)? & !(1 << pipe);
        self.write_register(registers::EN_RXADDR, out)?;
        Ok(())
    }
}
