use super::{bit_fields::Config, registers};
use crate::{
    radio::{prelude::EsbCrcLength, Nrf24Error, RF24},
    CrcLength, Transport,
};
use embedded_hal::delay::DelayNs;

impl<T, DELAY> EsbCrcLength for RF24<T, DELAY>
where
    T: Transport,
    DELAY: DelayNs,
{
    type CrcLengthErrorType = Nrf24Error<T::Error>;

    fn get_crc_length(&mut self) -> Result<CrcLength, Self::CrcLengthErrorType> {
        let config = Config::from_bits(self.read_register(registers::CONFIG)?);
        Ok(config.crc_length())
    }

    fn set_crc_length(&mut self, crc_length: CrcLength) -> Result<(), Self::CrcLengthErrorType> {
        let config = Config::from_bits(self.read_register(registers::CONFIG)?);
        self.write_register(
            registers::CONFIG,
            config.with_crc_length(crc_length).into_bits(),
        )?;
        Ok(())
    }

    fn disable_crc(&mut self) -> Result<(), Self::CrcLengthErrorType> {
        let config = Config::from_bits(self.read_register(registers::CONFIG)?);
        self.write_register(registers::CONFIG, config.without_crc().into_bits())?;
        Ok(())
    }
}
