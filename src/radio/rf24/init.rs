use super::{bit_fields::Flags, registers, timing, Nrf24Error, RF24};
use crate::{
    log::debug,
    radio::{
        prelude::{
            EsbAutoAck, EsbChannel, EsbCrcLength, EsbDataRate, EsbFifo, EsbInit,
            EsbPaLevel, EsbPayloadLength, EsbStatus,
        },
        RadioConfig,
    },
    CrcLength, DataRate, PaLevel, StatusFlags, Transport,
};
use embedded_hal::delay::DelayNs;

impl<T, DELAY> EsbInit for RF24<T, DELAY>
where
    T: Transport,
    DELAY: DelayNs,
{
    type ConfigErrorType = Nrf24Error<T::Error>;

    /// Initialize the radio's hardware using the [`Transport`] given
    /// to [`RF24::new()`].
    fn init(&mut self) -> Result<(), Self::ConfigErrorType> {
        self._flags = Flags::new().with_wide_band(true);
        self._payload_size = 32;
        self._pipe0_rx_addr = [0; 5];
        self._ack_payload_length = 0;

        self.set_ce(false)?;
        // Must allow the radio time to settle else configuration bits will not necessarily stick.
        // This is actually only required following power up but some settling time also appears to
        // be required after resets too.
        self._delay_impl.delay_ms(timing::POWER_ON_SETTLE_MS);

        let defaults = RadioConfig::default();
        self.set_retries(defaults.auto_retry_delay(), defaults.auto_retry_count())?;
        self.set_pa_level(PaLevel::Max)?;

        // only plus variants keep the 250 Kbps setting
        let is_plus_variant = self.set_data_rate(DataRate::Kbps250)?;
        self._flags.set_p_variant(is_plus_variant);
        debug!("detected plus variant: {}", is_plus_variant);

        self.set_data_rate(DataRate::Mbps1)?;
        self.set_crc_length(CrcLength::Bit16)?;
        self.write_register(registers::DYNPD, 0)?;
        self.clear_status_flags(StatusFlags::new())?;
        self.set_channel(defaults.channel())?;
        self.flush_rx()?;
        self.flush_tx()
    }

    fn with_config(&mut self, config: &RadioConfig) -> Result<bool, Self::ConfigErrorType> {
        self.set_retries(config.auto_retry_delay(), config.auto_retry_count())?;
        self.set_pa_level(config.pa_level())?;
        let rate_accepted = self.set_data_rate(config.data_rate())?;
        self.set_crc_length(config.crc_length())?;
        self.set_auto_ack(config.auto_ack())?;
        self.set_payload_size(config.payload_size());
        self.set_dynamic_payloads(config.dynamic_payloads())?;
        self.set_ack_payloads(config.ack_payloads())?;
        self.clear_status_flags(StatusFlags::new())?;
        self.set_channel(config.channel())?;
        self.flush_rx()?;
        self.flush_tx()?;
        Ok(rate_accepted)
    }
}
