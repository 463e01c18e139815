use embedded_hal::delay::DelayNs;

use crate::{
    radio::{prelude::EsbAutoAck, Nrf24Error, RF24},
    Transport,
};

use super::{bit_fields::SetupRetry, commands, mnemonics, registers};

impl<T, DELAY> EsbAutoAck for RF24<T, DELAY>
where
    T: Transport,
    DELAY: DelayNs,
{
    type AutoAckErrorType = Nrf24Error<T::Error>;

    /// Enabling this feature turns on dynamic payloads for pipes 0 and 1 only.
    /// It does not change [`RF24::get_dynamic_payloads()`], so outgoing payloads
    /// are still padded to the static payload length unless
    /// [`RF24::set_dynamic_payloads()`] is also used.
    fn set_ack_payloads(&mut self, enable: bool) -> Result<(), Self::AutoAckErrorType> {
        let feature = self.read_register(registers::FEATURE)?;
        if enable {
            self.write_feature(feature | mnemonics::EN_ACK_PAY | mnemonics::EN_DPL)?;
            let dynpd = self.read_register(registers::DYNPD)?;
            self.write_register(registers::DYNPD, dynpd | 0b11)?;
        } else {
            // leave dynamic payloads as is
            self.write_feature(feature & !mnemonics::EN_ACK_PAY)?;
        }
        Ok(())
    }

    fn get_ack_payloads(&mut self) -> Result<bool, Self::AutoAckErrorType> {
        Ok(self.read_register(registers::FEATURE)? & mnemonics::EN_ACK_PAY != 0)
    }

    fn write_ack_payload(&mut self, pipe: u8, buf: &[u8]) -> Result<bool, Self::AutoAckErrorType> {
        if pipe > 5 {
            return Ok(false);
        }
        let len = buf.len().min(32);
        let status = self.spi_write(commands::W_ACK_PAYLOAD | pipe, &buf[..len], len)?;
        Ok(!status.tx_full())
    }

    fn get_ack_payload_length(&self) -> u8 {
        self._ack_payload_length
    }

    fn is_ack_payload_available(&mut self) -> bool {
        let available = self._ack_payload_length > 0;
        self._ack_payload_length = 0;
        available
    }

    fn set_auto_ack(&mut self, enable: bool) -> Result<(), Self::AutoAckErrorType> {
        self.write_register(registers::EN_AA, mnemonics::ALL_PIPES * enable as u8)?;
        Ok(())
    }

    fn set_auto_ack_pipe(&mut self, pipe: u8, enable: bool) -> Result<(), Self::AutoAckErrorType> {
        if pipe > 5 {
            return Ok(());
        }
        let mask = 1 << pipe;
        let reg_val = self.read_register(registers::EN_AA)?;
        self.write_register(registers::EN_AA, reg_val & !mask | (mask * enable as u8))?;
        Ok(())
    }

    fn set_retries(&mut self, delay: u8, count: u8) -> Result<(), Self::AutoAckErrorType> {
        let setup_retr = SetupRetry::new()
            .with_ard(delay.min(15))
            .with_arc(count.min(15));
        self.write_register(registers::SETUP_RETR, setup_retr.into_bits())?;
        Ok(())
    }
}
