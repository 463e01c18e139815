use crate::{
    radio::{prelude::EsbPaLevel, Nrf24Error, RF24},
    PaLevel, Transport,
};
use embedded_hal::delay::DelayNs;

use super::registers;

impl<T, DELAY> EsbPaLevel for RF24<T, DELAY>
where
    T: Transport,
    DELAY: DelayNs,
{
    type PaLevelErrorType = Nrf24Error<T::Error>;

    fn get_pa_level(&mut self) -> Result<PaLevel, Self::PaLevelErrorType> {
        let rf_setup = self.read_register(registers::RF_SETUP)?;
        Ok(PaLevel::from_bits(rf_setup))
    }

    fn set_pa_level(&mut self, pa_level: PaLevel) -> Result<(), Self::PaLevelErrorType> {
        let rf_setup = self.read_register(registers::RF_SETUP)?;
        let out = rf_setup & !PaLevel::MASK | pa_level.into_bits();
        self.write_register(registers::RF_SETUP, out)?;
        Ok(())
    }
}
