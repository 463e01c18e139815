use bitfield_struct::bitfield;

use crate::CrcLength;

#[bitfield(u8, order = Msb)]
pub(crate) struct Config {
    #[bits(1)]
    _padding: u8,

    /// Masks the "RX Data Ready" event from the IRQ pin.
    pub mask_rx_dr: bool,

    /// Masks the "TX Data Sent" event from the IRQ pin.
    pub mask_tx_ds: bool,

    /// Masks the "Max Retries" event from the IRQ pin.
    pub mask_max_rt: bool,

    #[bits(2, access = None)]
    pub crc_length: u8,

    pub power: bool,

    pub is_rx: bool,
}

impl Config {
    const EN_CRC: u8 = 0b1000;

    pub const fn crc_length(&self) -> CrcLength {
        CrcLength::from_bits(self.into_bits())
    }

    pub fn with_crc_length(self, length: CrcLength) -> Self {
        let new_val = self.into_bits() & !CrcLength::MASK | length.into_bits();
        Self::from_bits(new_val)
    }

    /// Clear EN_CRC only. The CRCO bit keeps its value.
    pub fn without_crc(self) -> Self {
        Self::from_bits(self.into_bits() & !Self::EN_CRC)
    }

    pub fn as_rx(self) -> Self {
        self.with_power(true).with_is_rx(true)
    }

    pub fn as_tx(self) -> Self {
        self.with_power(true).with_is_rx(false)
    }
}

#[bitfield(u8, order = Msb)]
pub(crate) struct SetupRetry {
    /// The auto-retry feature's `delay` (in multiples of 250 us).
    #[bits(4)]
    pub ard: u8,

    /// The auto-retry feature's `count`.
    #[bits(4)]
    pub arc: u8,
}

#[bitfield(u8, order = Msb)]
pub(crate) struct ObserveTx {
    /// Lost packets, saturates at 15. Reset by writing RF_CH.
    #[bits(4)]
    pub plos_cnt: u8,

    /// Retries made for the last payload.
    #[bits(4)]
    pub arc_cnt: u8,
}

/// The driver's record of what the radio was found to support.
#[bitfield(u8)]
pub(crate) struct Flags {
    /// The configured data rate uses 1 MHz or 2 MHz channel spacing.
    pub wide_band: bool,

    /// The radio accepted the 250 Kbps data rate at bring-up.
    pub p_variant: bool,

    /// Dynamic payloads are enabled on all pipes.
    pub dynamic_payloads: bool,

    #[bits(5)]
    _padding: u8,
}
