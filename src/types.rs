//! Value types shared by the radio traits.
//!
//! Each enum knows how it is packed into its register field, so the
//! trait implementations only deal with whole register bytes.

use core::fmt::{Display, Formatter, Result};

use bitfield_struct::bitfield;

/// Implement [`Display`] (and `defmt::Format` when enabled) from an `as_str()` method.
macro_rules! display_as_str {
    ($($name:ident),+) => {
        $(
            impl Display for $name {
                fn fmt(&self, f: &mut Formatter<'_>) -> Result {
                    f.write_str(self.as_str())
                }
            }

            #[cfg(feature = "defmt")]
            impl defmt::Format for $name {
                fn format(&self, fmt: defmt::Formatter) {
                    defmt::write!(fmt, "{=str}", self.as_str())
                }
            }
        )+
    };
}

display_as_str!(PaLevel, DataRate, CrcLength, FifoState, TxOutcome);

/// Transmit power of the radio's amplifier, in dBm.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaLevel {
    /// -18 dBm
    Min,
    /// -12 dBm
    Low,
    /// -6 dBm
    High,
    /// 0 dBm
    Max,
}

impl PaLevel {
    /// The RF_PWR field of the RF_SETUP register.
    pub(crate) const MASK: u8 = 0b110;

    pub(crate) const fn into_bits(self) -> u8 {
        (self as u8) << 1
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        match (value & Self::MASK) >> 1 {
            0 => PaLevel::Min,
            1 => PaLevel::Low,
            2 => PaLevel::High,
            _ => PaLevel::Max,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PaLevel::Min => "-18 dBm",
            PaLevel::Low => "-12 dBm",
            PaLevel::High => "-6 dBm",
            PaLevel::Max => "0 dBm",
        }
    }
}

/// Convert a level index (0 = [`PaLevel::Min`] ... 3 = [`PaLevel::Max`]).
///
/// Any index outside that range is treated as an error and yields
/// [`PaLevel::Max`].
impl From<u8> for PaLevel {
    fn from(index: u8) -> Self {
        Self::from_bits(index.min(3) << 1)
    }
}

/// On-air bit rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DataRate {
    Mbps1,
    Mbps2,
    /// Only accepted by plus variants.
    Kbps250,
}

impl DataRate {
    /// The RF_DR_LOW (bit 5) and RF_DR_HIGH (bit 3) flags of the RF_SETUP register.
    pub(crate) const MASK: u8 = 0x28;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            DataRate::Mbps1 => 0,
            DataRate::Mbps2 => 1 << 3,
            DataRate::Kbps250 => 1 << 5,
        }
    }

    /// Returns [`None`] for the unused `RF_DR_LOW | RF_DR_HIGH` combination.
    pub(crate) const fn from_bits(value: u8) -> Option<Self> {
        match value & Self::MASK {
            0 => Some(DataRate::Mbps1),
            0x08 => Some(DataRate::Mbps2),
            0x20 => Some(DataRate::Kbps250),
            _ => None,
        }
    }

    /// Does this rate use the wider (2 MHz) channel spacing?
    pub const fn is_wide_band(self) -> bool {
        !matches!(self, DataRate::Kbps250)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            DataRate::Mbps1 => "1 Mbps",
            DataRate::Mbps2 => "2 Mbps",
            DataRate::Kbps250 => "250 Kbps",
        }
    }
}

/// Width of the checksum appended to every packet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CrcLength {
    Disabled,
    Bit8,
    Bit16,
}

impl CrcLength {
    /// The EN_CRC (bit 3) and CRCO (bit 2) flags of the CONFIG register.
    pub(crate) const MASK: u8 = 0b1100;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            CrcLength::Disabled => 0,
            CrcLength::Bit8 => 0b1000,
            CrcLength::Bit16 => 0b1100,
        }
    }

    /// CRCO has no meaning while EN_CRC is clear.
    pub(crate) const fn from_bits(value: u8) -> Self {
        if value & 8 == 0 {
            CrcLength::Disabled
        } else if value & 4 == 0 {
            CrcLength::Bit8
        } else {
            CrcLength::Bit16
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            CrcLength::Disabled => "disabled",
            CrcLength::Bit8 => "8 bit",
            CrcLength::Bit16 => "16 bit",
        }
    }
}

/// Fill level of the 3-slot RX or TX FIFO.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FifoState {
    Full,
    Empty,
    /// Holding 1 or 2 payloads.
    Occupied,
}

impl FifoState {
    pub const fn as_str(self) -> &'static str {
        match self {
            FifoState::Full => "full",
            FifoState::Empty => "empty",
            FifoState::Occupied => "occupied",
        }
    }
}

/// How a transmission ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TxOutcome {
    /// The payload was acknowledged (or auto-ack is disabled).
    Acked,
    /// The radio gave up after exhausting its configured retries.
    Failed,
    /// Neither the "sent" nor the "max retries" event was observed
    /// within the polling budget.
    TimedOut,
}

impl TxOutcome {
    /// Classify the events captured by
    /// [`EsbStatus::what_happened()`](fn@crate::radio::prelude::EsbStatus::what_happened).
    pub const fn from_flags(flags: StatusFlags) -> Self {
        if flags.tx_ds() {
            TxOutcome::Acked
        } else if flags.max_rt() {
            TxOutcome::Failed
        } else {
            TxOutcome::TimedOut
        }
    }

    pub const fn is_acked(self) -> bool {
        matches!(self, TxOutcome::Acked)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TxOutcome::Acked => "acked",
            TxOutcome::Failed => "max retries",
            TxOutcome::TimedOut => "timed out",
        }
    }
}

/// The decoded STATUS byte.
///
/// The chip clocks this byte out while receiving the command byte of every
/// transaction, so it is available after any register access.
///
/// Use [`StatusFlags::default`] to instantiate all flags set to false.
/// Use [`StatusFlags::new`] to instantiate the three event flags set to true.
#[bitfield(u8, new = false, order = Msb)]
#[derive(PartialEq, Eq)]
pub struct StatusFlags {
    #[bits(1)]
    _padding: u8,

    /// RX Data Ready: a payload arrived in the RX FIFO.
    pub rx_dr: bool,

    /// TX Data Sent: a payload was transmitted (and acknowledged if auto-ack is on).
    pub tx_ds: bool,

    /// Maximum number of retransmits reached.
    pub max_rt: bool,

    /// The pipe number of the payload at the top of the RX FIFO (7 when empty).
    #[bits(3, access = RO)]
    pub rx_pipe: u8,

    /// The TX FIFO is full.
    #[bits(1, access = RO)]
    pub tx_full: bool,
}

impl StatusFlags {
    /// A mask to isolate only the IRQ flags. Useful for STATUS and CONFIG registers.
    pub(crate) const IRQ_MASK: u8 = 0x70;

    /// A convenience constructor similar to [`StatusFlags::default`] except
    /// the `rx_dr`, `tx_ds` and `max_rt` fields are set to `true`.
    pub const fn new() -> Self {
        Self::from_bits(Self::IRQ_MASK)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusFlags {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "rx_dr={} tx_ds={} max_rt={} pipe={} tx_full={}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt(),
            self.rx_pipe(),
            self.tx_full()
        )
    }
}

impl Display for StatusFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "rx_dr={} tx_ds={} max_rt={} pipe={} tx_full={}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt(),
            self.rx_pipe(),
            self.tx_full()
        )
    }
}

#[cfg(test)]
mod test {
    use crate::StatusFlags;

    use super::{CrcLength, DataRate, PaLevel, TxOutcome};
    extern crate std;
    use std::{format, string::String};

    #[test]
    fn crc_display() {
        assert_eq!(format!("{}", CrcLength::Bit8), String::from("8 bit"));
        assert_eq!(format!("{}", CrcLength::Bit16), String::from("16 bit"));
        assert_eq!(format!("{}", CrcLength::Disabled), String::from("disabled"));
    }

    #[test]
    fn crc_bits() {
        for crc in [CrcLength::Disabled, CrcLength::Bit8, CrcLength::Bit16] {
            assert_eq!(CrcLength::from_bits(crc.into_bits()), crc);
        }
        // CRCO alone does not enable the CRC
        assert_eq!(CrcLength::from_bits(4), CrcLength::Disabled);
    }

    #[test]
    fn data_rate_bits() {
        for rate in [DataRate::Mbps1, DataRate::Mbps2, DataRate::Kbps250] {
            assert_eq!(DataRate::from_bits(rate.into_bits()), Some(rate));
        }
        assert_eq!(DataRate::from_bits(0x28), None);
        assert!(DataRate::Mbps2.is_wide_band());
        assert!(!DataRate::Kbps250.is_wide_band());
    }

    #[test]
    fn data_rate_display() {
        assert_eq!(format!("{}", DataRate::Mbps1), String::from("1 Mbps"));
        assert_eq!(format!("{}", DataRate::Kbps250), String::from("250 Kbps"));
    }

    #[test]
    fn pa_level_bits() {
        for level in [PaLevel::Min, PaLevel::Low, PaLevel::High, PaLevel::Max] {
            assert_eq!(PaLevel::from_bits(level.into_bits()), level);
        }
        // the LNA bit is not part of the level
        assert_eq!(PaLevel::from_bits(0x07), PaLevel::Max);
        assert_eq!(format!("{}", PaLevel::High), String::from("-6 dBm"));
    }

    #[test]
    fn pa_level_from_index() {
        assert_eq!(PaLevel::from(0), PaLevel::Min);
        assert_eq!(PaLevel::from(1), PaLevel::Low);
        assert_eq!(PaLevel::from(2), PaLevel::High);
        assert_eq!(PaLevel::from(3), PaLevel::Max);
        // out of range means "error", which falls back to the strongest level
        assert_eq!(PaLevel::from(42), PaLevel::Max);
    }

    #[test]
    fn status_decoding() {
        // RX_DR, MAX_RT, pipe 3, TX_FULL
        let flags = StatusFlags::from_bits(0x57);
        assert!(flags.rx_dr());
        assert!(!flags.tx_ds());
        assert!(flags.max_rt());
        assert_eq!(flags.rx_pipe(), 3);
        assert!(flags.tx_full());
        assert_eq!(
            format!("{flags}"),
            String::from("rx_dr=true tx_ds=false max_rt=true pipe=3 tx_full=true")
        );
    }

    #[test]
    fn outcome_classification() {
        let sent = StatusFlags::default().with_tx_ds(true).with_max_rt(true);
        assert_eq!(TxOutcome::from_flags(sent), TxOutcome::Acked);
        let failed = StatusFlags::default().with_max_rt(true);
        assert_eq!(TxOutcome::from_flags(failed), TxOutcome::Failed);
        assert_eq!(
            TxOutcome::from_flags(StatusFlags::default()),
            TxOutcome::TimedOut
        );
        assert!(!TxOutcome::TimedOut.is_acked());
    }
}
