//! Test doubles shared by the unit tests of this crate.
extern crate std;
use crate::{
    radio::{
        rf24::{commands, registers},
        RF24,
    },
    SpiTransport, Transport,
};
use core::convert::Infallible;
use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType, OutputPin},
};
use embedded_hal_mock::eh1::{
    delay::NoopDelay,
    digital::{Mock as PinMock, Transaction as PinTransaction},
    spi::{Mock as SpiMock, Transaction as SpiTransaction},
};
use std::{collections::VecDeque, vec::Vec};

/// Takes an indefinite repetition of a tuple of 2 vectors: `(expected_data, response_data)`
/// and generates a vector of `SpiTransaction`s.
///
/// Each tuple is one CSN-framed transaction. Bytes are exchanged one at a time
/// and the bus is flushed before CSN is released.
///
/// NOTE: This macro is only used to generate code in unit tests (for this crate only).
#[macro_export]
macro_rules! spi_test_expects {
    ($( ($expected:expr , $response:expr $(,)? ) , ) + ) => {{
        let mut expectations = std::vec::Vec::new();
        $(
            let expected: std::vec::Vec<u8> = $expected;
            let response: std::vec::Vec<u8> = $response;
            assert_eq!(expected.len(), response.len());
            for (mosi, miso) in expected.into_iter().zip(response) {
                expectations.push(SpiTransaction::transfer_in_place(
                    std::vec![mosi],
                    std::vec![miso],
                ));
            }
            expectations.push(SpiTransaction::flush());
        )*
        expectations
    }};
}

/// A CSN pin that accepts every level. CSN framing is checked by the transport tests.
pub struct NoopPin;

impl ErrorType for NoopPin {
    type Error = Infallible;
}

impl OutputPin for NoopPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A tuple struct to encapsulate objects used to mock [`RF24`],
pub struct MockRadio(
    pub RF24<SpiTransport<SpiMock<u8>, NoopPin, PinMock>, NoopDelay>,
    pub SpiMock<u8>,
    pub PinMock,
);

/// Create a mock objects using the given expectations.
pub fn mk_radio(
    ce_expectations: &[PinTransaction],
    spi_expectations: &[SpiTransaction<u8>],
) -> MockRadio {
    let spi = SpiMock::new(spi_expectations);
    let ce_pin = PinMock::new(ce_expectations);
    let transport = SpiTransport::new(spi.clone(), NoopPin, ce_pin.clone());
    let radio = RF24::new(transport, NoopDelay::new());
    MockRadio(radio, spi, ce_pin)
}

/// A [`DelayNs`] that only adds up the time it was asked to wait.
#[derive(Default)]
pub struct TallyDelay {
    pub elapsed_ns: u64,
}

impl TallyDelay {
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns / 1_000_000
    }
}

impl DelayNs for TallyDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += ns as u64;
    }
}

/// How the simulated peer reacts to a transmission.
#[derive(Clone, Debug, PartialEq)]
pub enum TxResponse {
    /// The payload is acknowledged.
    Ack,
    /// The payload is acknowledged with the given ACK payload attached.
    AckWithPayload(Vec<u8>),
    /// Nobody answers; the radio gives up after its retries.
    MaxRetries,
    /// The radio never reports an outcome.
    Silent,
}

const RX_DR: u8 = 0x40;
const TX_DS: u8 = 0x20;
const MAX_RT: u8 = 0x10;
const PWR_UP: u8 = 0x02;
const PRIM_RX: u8 = 0x01;
const RF_DR_LOW: u8 = 0x20;
const FIFO_DEPTH: usize = 3;
// registers the driver never addresses
const SETUP_AW: u8 = 0x03;
const RX_ADDR_P1: u8 = 0x0B;

/// A register level model of the nRF24L01 that implements [`Transport`].
///
/// Every CSN-framed transaction is recorded in [`SimChip::frames`] (MOSI bytes only).
/// Register writes and commands take effect when CSN is released.
pub struct SimChip {
    /// The single byte registers. Address registers are kept separately.
    pub regs: [u8; 0x20],
    pub rx_addr_p0: [u8; 5],
    pub rx_addr_p1: [u8; 5],
    pub tx_addr: [u8; 5],
    /// The IRQ event bits of STATUS.
    pub events: u8,
    pub rx_fifo: VecDeque<(u8, Vec<u8>)>,
    pub tx_fifo: VecDeque<Vec<u8>>,
    pub ack_fifo: VecDeque<(u8, Vec<u8>)>,
    /// Payloads that went over the air.
    pub transmitted: Vec<Vec<u8>>,
    pub frames: Vec<Vec<u8>>,
    /// Every level written to CE, in order.
    pub ce_log: Vec<bool>,
    pub ce: bool,
    /// The chip accepts the 250 Kbps data rate.
    pub p_variant: bool,
    /// The FEATURE register accepts writes.
    pub features_active: bool,
    /// ACTIVATE has no effect.
    pub unlock_broken: bool,
    pub activations: usize,
    pub tx_response: TxResponse,
    pub observe_tx_reads: usize,
    csn_low: bool,
    current: Vec<u8>,
}

impl SimChip {
    /// A plus variant at its power-on reset state.
    pub fn new() -> Self {
        let mut regs = [0u8; 0x20];
        regs[registers::CONFIG as usize] = 0x08;
        regs[registers::EN_AA as usize] = 0x3F;
        regs[registers::EN_RXADDR as usize] = 0x03;
        regs[SETUP_AW as usize] = 0x03;
        regs[registers::SETUP_RETR as usize] = 0x03;
        regs[registers::RF_CH as usize] = 0x02;
        regs[registers::RF_SETUP as usize] = 0x0E;
        for (pipe, reg) in (0x0Cu8..=0x0F).enumerate() {
            regs[reg as usize] = 0xC3 + pipe as u8;
        }
        Self {
            regs,
            rx_addr_p0: [0xE7; 5],
            rx_addr_p1: [0xC2; 5],
            tx_addr: [0xE7; 5],
            events: 0,
            rx_fifo: VecDeque::new(),
            tx_fifo: VecDeque::new(),
            ack_fifo: VecDeque::new(),
            transmitted: Vec::new(),
            frames: Vec::new(),
            ce_log: Vec::new(),
            ce: false,
            p_variant: true,
            features_active: true,
            unlock_broken: false,
            activations: 0,
            tx_response: TxResponse::Ack,
            observe_tx_reads: 0,
            csn_low: false,
            current: Vec::new(),
        }
    }

    /// An older non-plus variant: no 250 Kbps and a locked FEATURE register.
    pub fn legacy() -> Self {
        let mut chip = Self::new();
        chip.p_variant = false;
        chip.features_active = false;
        chip.regs[registers::RF_SETUP as usize] = 0x0F;
        chip
    }

    pub fn reg(&self, register: u8) -> u8 {
        match register {
            registers::STATUS => self.status(),
            registers::FIFO_STATUS => self.fifo_status(),
            registers::FEATURE if !self.features_active => 0,
            _ => self.regs[register as usize],
        }
    }

    pub fn selected(&self) -> bool {
        self.csn_low
    }

    pub fn is_powered(&self) -> bool {
        self.regs[registers::CONFIG as usize] & PWR_UP != 0
    }

    /// Queue a received payload on `pipe`.
    pub fn inject_rx(&mut self, pipe: u8, payload: &[u8]) {
        self.rx_fifo.push_back((pipe, payload.to_vec()));
        self.events |= RX_DR;
    }

    /// The frames that started with the given command byte.
    pub fn frames_with(&self, command: u8) -> Vec<&Vec<u8>> {
        self.frames.iter().filter(|f| f[0] == command).collect()
    }

    fn status(&self) -> u8 {
        let pipe = self.rx_fifo.front().map_or(7, |(pipe, _)| *pipe);
        self.events | (pipe << 1) | (self.tx_fifo.len() >= FIFO_DEPTH) as u8
    }

    fn fifo_status(&self) -> u8 {
        let mut out = 0;
        if self.rx_fifo.is_empty() {
            out |= 1;
        }
        if self.rx_fifo.len() >= FIFO_DEPTH {
            out |= 1 << 1;
        }
        if self.tx_fifo.is_empty() {
            out |= 1 << 4;
        }
        if self.tx_fifo.len() >= FIFO_DEPTH {
            out |= 1 << 5;
        }
        out
    }

    fn address(&self, register: u8) -> Option<&[u8; 5]> {
        match register {
            registers::RX_ADDR_P0 => Some(&self.rx_addr_p0),
            RX_ADDR_P1 => Some(&self.rx_addr_p1),
            registers::TX_ADDR => Some(&self.tx_addr),
            _ => None,
        }
    }

    /// The MISO byte for the data byte at `index` (1-based) of the current frame.
    fn respond(&mut self, index: usize) -> u8 {
        let command = self.current[0];
        match command {
            0x00..=0x1F => {
                if command == registers::OBSERVE_TX && index == 1 {
                    self.observe_tx_reads += 1;
                }
                match self.address(command) {
                    Some(addr) => addr.get(index - 1).copied().unwrap_or(0),
                    None => self.reg(command),
                }
            }
            commands::R_RX_PL_WID => self.rx_fifo.front().map_or(0, |(_, p)| p.len() as u8),
            commands::R_RX_PAYLOAD => self
                .rx_fifo
                .front()
                .and_then(|(_, p)| p.get(index - 1).copied())
                .unwrap_or(0),
            _ => 0,
        }
    }

    fn write(&mut self, register: u8, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        let value = data[0];
        match register {
            registers::RX_ADDR_P0 => self.rx_addr_p0[..data.len().min(5)]
                .copy_from_slice(&data[..data.len().min(5)]),
            RX_ADDR_P1 => self.rx_addr_p1[..data.len().min(5)]
                .copy_from_slice(&data[..data.len().min(5)]),
            registers::TX_ADDR => {
                self.tx_addr[..data.len().min(5)].copy_from_slice(&data[..data.len().min(5)])
            }
            registers::STATUS => self.events &= !(value & (RX_DR | TX_DS | MAX_RT)),
            registers::FEATURE => {
                if self.features_active {
                    self.regs[register as usize] = value;
                }
            }
            registers::RF_SETUP => {
                let value = if self.p_variant {
                    value
                } else {
                    value & !RF_DR_LOW
                };
                self.regs[register as usize] = value;
            }
            registers::RF_CH => {
                self.regs[register as usize] = value & 0x7F;
                // writing RF_CH resets the lost packet counter
                self.regs[registers::OBSERVE_TX as usize] &= 0x0F;
            }
            registers::OBSERVE_TX | registers::RPD | registers::FIFO_STATUS => {}
            _ => self.regs[register as usize] = value,
        }
    }

    fn commit(&mut self) {
        let frame = core::mem::take(&mut self.current);
        if frame.is_empty() {
            return;
        }
        let command = frame[0];
        let data = &frame[1..];
        match command {
            0x20..=0x3F => self.write(command & commands::REGISTER_MASK, data),
            commands::W_TX_PAYLOAD => {
                if self.tx_fifo.len() < FIFO_DEPTH {
                    self.tx_fifo.push_back(data.to_vec());
                }
            }
            commands::R_RX_PAYLOAD => {
                if !data.is_empty() {
                    self.rx_fifo.pop_front();
                }
            }
            commands::FLUSH_TX => self.tx_fifo.clear(),
            commands::FLUSH_RX => self.rx_fifo.clear(),
            commands::ACTIVATE => {
                if data == [commands::ACTIVATE_KEY] {
                    self.activations += 1;
                    if !self.unlock_broken {
                        self.features_active = !self.features_active;
                    }
                }
            }
            c if c & !0x07 == commands::W_ACK_PAYLOAD => {
                if self.ack_fifo.len() < FIFO_DEPTH {
                    self.ack_fifo.push_back((c & 0x07, data.to_vec()));
                }
            }
            _ => {}
        }
        self.frames.push(frame);
    }

    /// A rising CE edge in TX mode sends the payload at the top of the TX FIFO.
    fn transmit(&mut self) {
        let config = self.regs[registers::CONFIG as usize];
        if config & PWR_UP == 0 || config & PRIM_RX != 0 {
            return;
        }
        let payload = match self.tx_response {
            TxResponse::Silent => return,
            _ => match self.tx_fifo.front() {
                Some(payload) => payload.clone(),
                None => return,
            },
        };
        self.transmitted.push(payload);
        let observe = &mut self.regs[registers::OBSERVE_TX as usize];
        match &self.tx_response {
            TxResponse::Ack => {
                *observe &= 0xF0;
                self.events |= TX_DS;
                self.tx_fifo.pop_front();
            }
            TxResponse::AckWithPayload(ack) => {
                *observe &= 0xF0;
                self.events |= TX_DS | RX_DR;
                self.rx_fifo.push_back((0, ack.clone()));
                self.tx_fifo.pop_front();
            }
            TxResponse::MaxRetries => {
                let lost = (*observe >> 4).saturating_add(1).min(15);
                *observe = (lost << 4) | 0x0F;
                self.events |= MAX_RT;
            }
            TxResponse::Silent => {}
        }
    }
}

impl Default for SimChip {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for SimChip {
    type Error = Infallible;

    fn exchange(&mut self, byte: u8) -> Result<u8, Self::Error> {
        assert!(self.csn_low, "byte exchanged while CSN is high");
        self.current.push(byte);
        if self.current.len() == 1 {
            Ok(self.status())
        } else {
            Ok(self.respond(self.current.len() - 1))
        }
    }

    fn set_csn(&mut self, high: bool) -> Result<(), Self::Error> {
        if high && self.csn_low {
            self.commit();
        }
        self.csn_low = !high;
        Ok(())
    }

    fn set_ce(&mut self, high: bool) -> Result<(), Self::Error> {
        self.ce_log.push(high);
        if high && !self.ce {
            self.ce = true;
            self.transmit();
        }
        self.ce = high;
        Ok(())
    }
}

/// A radio attached to a plus variant [`SimChip`].
pub fn sim_radio() -> RF24<SimChip, TallyDelay> {
    RF24::new(SimChip::new(), TallyDelay::default())
}
