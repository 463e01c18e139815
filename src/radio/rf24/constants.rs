/// A private module encapsulating register offsets for the nRF24L01.
pub mod registers {
    pub const CONFIG: u8 = 0x00;
    pub const EN_AA: u8 = 0x01;
    pub const EN_RXADDR: u8 = 0x02;
    pub const SETUP_RETR: u8 = 0x04;
    pub const RF_CH: u8 = 0x05;
    pub const RF_SETUP: u8 = 0x06;
    pub const STATUS: u8 = 0x07;
    pub const OBSERVE_TX: u8 = 0x08;
    /// Carrier Detect on older non-plus variants.
    pub const CD: u8 = 0x09;
    /// Received Power Detector on plus variants. Same offset as [`CD`].
    pub const RPD: u8 = 0x09;
    pub const RX_ADDR_P0: u8 = 0x0A;
    pub const TX_ADDR: u8 = 0x10;
    pub const RX_PW_P0: u8 = 0x11;
    pub const FIFO_STATUS: u8 = 0x17;
    pub const DYNPD: u8 = 0x1C;
    pub const FEATURE: u8 = 0x1D;
}

/// A private module encapsulating SPI commands for the nRF24L01.
pub mod commands {
    pub const R_REGISTER: u8 = 0x00;
    pub const W_REGISTER: u8 = 0x20;
    pub const REGISTER_MASK: u8 = 0x1F;
    pub const ACTIVATE: u8 = 0x50;
    /// The data byte following [`ACTIVATE`] that unlocks the FEATURE register.
    pub const ACTIVATE_KEY: u8 = 0x73;
    pub const R_RX_PL_WID: u8 = 0x60;
    pub const R_RX_PAYLOAD: u8 = 0x61;
    pub const W_TX_PAYLOAD: u8 = 0xA0;
    pub const W_ACK_PAYLOAD: u8 = 0xA8;
    pub const FLUSH_TX: u8 = 0xE1;
    pub const FLUSH_RX: u8 = 0xE2;
    pub const NOP: u8 = 0xFF;
}

/// A private module to encapsulate bit mnemonics
pub mod mnemonics {
    pub const MASK_RX_DR: u8 = 1 << 6;
    pub const MASK_TX_DS: u8 = 1 << 5;

    // FIFO_STATUS
    pub const RX_EMPTY: u8 = 1;

    // FEATURE
    pub const EN_ACK_PAY: u8 = 1 << 1;
    pub const EN_DPL: u8 = 1 << 2;

    /// All six pipes in EN_AA, EN_RXADDR and DYNPD.
    pub const ALL_PIPES: u8 = 0x3F;
}

/// Settle times and limits dictated by the chip's state machine.
pub mod timing {
    /// Settling time after power on or reset, in milliseconds.
    pub const POWER_ON_SETTLE_MS: u32 = 5;
    /// Standby to TX settling time after setting PWR_UP, in microseconds.
    pub const TX_SETTLE_US: u32 = 150;
    /// CE must stay high at least 10 us to start a transmission.
    pub const CE_PULSE_US: u32 = 15;
    /// Standby to RX settling time, in microseconds.
    pub const RX_SETTLE_US: u32 = 130;
    /// Number of 1 ms polls made by a blocking send before giving up.
    pub const TX_POLL_LIMIT: u16 = 500;
}
