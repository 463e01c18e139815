use crate::{
    log::warn,
    radio::{prelude::EsbDataRate, Nrf24Error, RF24},
    DataRate, Transport,
};
use embedded_hal::delay::DelayNs;

use super::registers;

impl<T, DELAY> EsbDataRate for RF24<T, DELAY>
where
    T: Transport,
    DELAY: DelayNs,
{
    type DataRateErrorType = Nrf24Error<T::Error>;

    /// Returns [`Nrf24Error::BinaryCorruption`] if both data rate bits are set.
    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType> {
        let rf_setup = self.read_register(registers::RF_SETUP)?;
        DataRate::from_bits(rf_setup).ok_or(Nrf24Error::BinaryCorruption)
    }

    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<bool, Self::DataRateErrorType> {
        let rf_setup = self.read_register(registers::RF_SETUP)?;
        let out = rf_setup & !DataRate::MASK | data_rate.into_bits();
        self._flags.set_wide_band(data_rate.is_wide_band());
        self.write_register(registers::RF_SETUP, out)?;
        if self.read_register(registers::RF_SETUP)? == out {
            return Ok(true);
        }
        warn!("radio rejected data rate {}", data_rate);
        self._flags.set_wide_band(false);
        Ok(false)
    }
}
