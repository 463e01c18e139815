use crate::{
    radio::{prelude::EsbPayloadLength, Nrf24Error, RF24},
    Transport,
};
use embedded_hal::delay::DelayNs;

use super::{commands, mnemonics, registers};

impl<T, DELAY> EsbPayloadLength for RF24<T, DELAY>
where
    T: Transport,
    DELAY: DelayNs,
{
    type PayloadLengthErrorType = Nrf24Error<T::Error>;

    fn set_payload_size(&mut self, size: u8) {
        self._payload_size = size.clamp(1, 32);
    }

    fn get_payload_size(&self) -> u8 {
        self._payload_size
    }

    /// Disabling dynamic payloads also disables ACK payloads,
    /// since the radio cannot send those with a static length.
    fn set_dynamic_payloads(&mut self, enable: bool) -> Result<(), Self::PayloadLengthErrorType> {
        let feature = self.read_register(registers::FEATURE)?;
        if enable {
            self.write_feature(feature | mnemonics::EN_DPL)?;
            self.write_register(registers::DYNPD, mnemonics::ALL_PIPES)?;
        } else {
            self.write_feature(feature & !(mnemonics::EN_DPL | mnemonics::EN_ACK_PAY))?;
            self.write_register(registers::DYNPD, 0)?;
        }
        self._flags.set_dynamic_payloads(enable);
        Ok(())
    }

    fn get_dynamic_payloads(&self) -> bool {
        self._flags.dynamic_payloads()
    }

    fn get_dynamic_payload_size(&mut self) -> Result<u8, Self::PayloadLengthErrorType> {
        let mut buf = [0u8];
        self.spi_read(commands::R_RX_PL_WID, &mut buf, 1)?;
        if buf[0] > 32 {
            return Err(Nrf24Error::BinaryCorruption);
        }
        Ok(buf[0])
    }
}
