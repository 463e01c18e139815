use super::registers;
use crate::{
    radio::{prelude::EsbChannel, Nrf24Error, RF24},
    Transport,
};
use embedded_hal::delay::DelayNs;

impl<T, DELAY> EsbChannel for RF24<T, DELAY>
where
    T: Transport,
    DELAY: DelayNs,
{
    type ChannelErrorType = Nrf24Error<T::Error>;

    /// The RF_CH register is 7 bits wide. The specified `channel` is
    /// clamped to the range [0, 127].
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType> {
        self.write_register(registers::RF_CH, channel.min(127))?;
        Ok(())
    }

    /// See also [`RF24::set_channel()`].
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType> {
        self.read_register(registers::RF_CH)
    }
}
