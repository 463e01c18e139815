use crate::radio::rf24::bit_fields::{Config, SetupRetry};
use crate::{CrcLength, DataRate, PaLevel};

/// A complete set of radio settings, applied in one go with
/// [`EsbInit::with_config()`](fn@crate::radio::prelude::EsbInit::with_config).
///
/// Start from [`RadioConfig::default()`] and chain the `with_*()` setters.
/// Values are clamped exactly like the radio's own setters clamp them.
/// ```
/// use rf24::radio::RadioConfig;
/// use rf24::DataRate;
///
/// let config = RadioConfig::default()
///     .with_channel(42)
///     .with_data_rate(DataRate::Mbps2);
/// assert_eq!(config.channel(), 42);
/// assert_eq!(config.data_rate(), DataRate::Mbps2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RadioConfig {
    config_reg: Config,
    retries: SetupRetry,
    pa_level: PaLevel,
    data_rate: DataRate,
    channel: u8,
    payload_size: u8,
    auto_ack: bool,
    dynamic_payloads: bool,
    ack_payloads: bool,
}

impl Default for RadioConfig {
    /// The settings that [`EsbInit::init()`](fn@crate::radio::prelude::EsbInit::init)
    /// leaves the radio with.
    ///
    /// | setting | value |
    /// |--------:|:------|
    /// | channel | `76` |
    /// | PA level | [`PaLevel::Max`] |
    /// | data rate | [`DataRate::Mbps1`] |
    /// | CRC | [`CrcLength::Bit16`] |
    /// | retry delay | `4` (1250 us) |
    /// | retry count | `15` |
    /// | static payload size | `32` |
    /// | auto-ack | on, all pipes |
    /// | dynamic payloads | off |
    /// | ACK payloads | off |
    fn default() -> Self {
        Self {
            config_reg: Config::new().with_crc_length(CrcLength::Bit16),
            retries: SetupRetry::new().with_ard(4).with_arc(15),
            pa_level: PaLevel::Max,
            data_rate: DataRate::Mbps1,
            channel: 76,
            payload_size: 32,
            auto_ack: true,
            dynamic_payloads: false,
            ack_payloads: false,
        }
    }
}

impl RadioConfig {
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// RF channel, 2400 MHz + `channel` MHz. Clamped to 127.
    pub fn with_channel(self, channel: u8) -> Self {
        Self {
            channel: channel.min(127),
            ..self
        }
    }

    pub const fn pa_level(&self) -> PaLevel {
        self.pa_level
    }

    pub fn with_pa_level(self, pa_level: PaLevel) -> Self {
        Self { pa_level, ..self }
    }

    pub const fn data_rate(&self) -> DataRate {
        self.data_rate
    }

    /// [`DataRate::Kbps250`] is only kept by plus variants; see
    /// [`EsbDataRate::set_data_rate()`](fn@crate::radio::prelude::EsbDataRate::set_data_rate).
    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        Self { data_rate, ..self }
    }

    pub const fn crc_length(&self) -> CrcLength {
        self.config_reg.crc_length()
    }

    pub fn with_crc_length(self, crc_length: CrcLength) -> Self {
        Self {
            config_reg: self.config_reg.with_crc_length(crc_length),
            ..self
        }
    }

    pub const fn auto_retry_delay(&self) -> u8 {
        self.retries.ard()
    }

    pub const fn auto_retry_count(&self) -> u8 {
        self.retries.arc()
    }

    /// Both values are clamped to 15.
    ///
    /// See [`EsbAutoAck::set_retries()`](fn@crate::radio::prelude::EsbAutoAck::set_retries).
    pub fn with_auto_retries(self, delay: u8, count: u8) -> Self {
        Self {
            retries: SetupRetry::new()
                .with_ard(delay.min(15))
                .with_arc(count.min(15)),
            ..self
        }
    }

    pub const fn payload_size(&self) -> u8 {
        self.payload_size
    }

    /// Static payload length, clamped to [1, 32].
    pub fn with_payload_size(self, size: u8) -> Self {
        Self {
            payload_size: size.clamp(1, 32),
            ..self
        }
    }

    pub const fn auto_ack(&self) -> bool {
        self.auto_ack
    }

    /// Auto-ack for all six pipes.
    pub fn with_auto_ack(self, auto_ack: bool) -> Self {
        Self { auto_ack, ..self }
    }

    pub const fn dynamic_payloads(&self) -> bool {
        self.dynamic_payloads
    }

    /// Turning dynamic payloads off also turns ACK payloads off.
    pub fn with_dynamic_payloads(self, dynamic_payloads: bool) -> Self {
        Self {
            dynamic_payloads,
            ack_payloads: self.ack_payloads && dynamic_payloads,
            ..self
        }
    }

    pub const fn ack_payloads(&self) -> bool {
        self.ack_payloads
    }

    /// Attach custom payloads to ACK packets.
    ///
    /// The radio needs dynamic payloads for this; applying a config with ACK
    /// payloads on also enables dynamic payloads on pipes 0 and 1.
    pub fn with_ack_payloads(self, ack_payloads: bool) -> Self {
        Self {
            ack_payloads,
            ..self
        }
    }
}

#[cfg(test)]
mod test {
    use super::RadioConfig;
    use crate::{CrcLength, DataRate, PaLevel};

    #[test]
    fn defaults() {
        let config = RadioConfig::default();
        assert_eq!(config.channel(), 76);
        assert_eq!(config.pa_level(), PaLevel::Max);
        assert_eq!(config.data_rate(), DataRate::Mbps1);
        assert_eq!(config.crc_length(), CrcLength::Bit16);
        assert_eq!(config.auto_retry_delay(), 4);
        assert_eq!(config.auto_retry_count(), 15);
        assert_eq!(config.payload_size(), 32);
        assert!(config.auto_ack());
        assert!(!config.dynamic_payloads());
        assert!(!config.ack_payloads());
    }

    #[test]
    fn setters_do_not_interfere() {
        let config = RadioConfig::default()
            .with_crc_length(CrcLength::Bit8)
            .with_pa_level(PaLevel::Low)
            .with_data_rate(DataRate::Kbps250)
            .with_auto_ack(false);
        assert_eq!(config.crc_length(), CrcLength::Bit8);
        assert_eq!(config.pa_level(), PaLevel::Low);
        assert_eq!(config.data_rate(), DataRate::Kbps250);
        assert!(!config.auto_ack());
        assert_eq!(config.channel(), 76);

        let config = config.with_crc_length(CrcLength::Disabled);
        assert_eq!(config.crc_length(), CrcLength::Disabled);
    }

    #[test]
    fn clamping() {
        let config = RadioConfig::default()
            .with_channel(200)
            .with_payload_size(40)
            .with_auto_retries(16, 2);
        assert_eq!(config.channel(), 127);
        assert_eq!(config.payload_size(), 32);
        assert_eq!(config.auto_retry_delay(), 15);
        assert_eq!(config.auto_retry_count(), 2);
        assert_eq!(config.with_payload_size(0).payload_size(), 1);
    }

    #[test]
    fn ack_payloads_follow_dynamic_payloads() {
        let config = RadioConfig::default()
            .with_dynamic_payloads(true)
            .with_ack_payloads(true);
        assert!(config.dynamic_payloads() && config.ack_payloads());
        let config = config.with_dynamic_payloads(false);
        assert!(!config.dynamic_payloads());
        assert!(!config.ack_payloads());
    }
}
