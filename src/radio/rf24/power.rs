use embedded_hal::delay::DelayNs;

use crate::{
    radio::{prelude::EsbPower, Nrf24Error, RF24},
    Transport,
};

use super::{bit_fields::Config, registers};

impl<T, DELAY> EsbPower for RF24<T, DELAY>
where
    T: Transport,
    DELAY: DelayNs,
{
    type PowerErrorType = Nrf24Error<T::Error>;

    /// In full power down mode (a sleep state), the radio will consume approximately
    /// 900nA (.0009mA). The CE pin is not changed.
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType> {
        let config = Config::from_bits(self.read_register(registers::CONFIG)?);
        self.write_register(registers::CONFIG, config.with_power(false).into_bits())?;
        Ok(())
    }

    /// The radio needs up to 1.5 ms (5 ms on older variants) to reach standby
    /// mode; this function does not wait for it.
    fn power_up(&mut self) -> Result<(), Self::PowerErrorType> {
        let config = Config::from_bits(self.read_register(registers::CONFIG)?);
        self.write_register(registers::CONFIG, config.with_power(true).into_bits())?;
        Ok(())
    }

    fn is_powered(&mut self) -> Result<bool, Self::PowerErrorType> {
        Ok(Config::from_bits(self.read_register(registers::CONFIG)?).power())
    }
}
