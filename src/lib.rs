//! A blocking driver for the nRF24L01(+) 2.4GHz transceiver.
//!
//! The driver speaks to the chip through a [`Transport`]: one byte exchange
//! primitive plus the CSN (chip select) and CE (chip enable) lines. Use
//! [`SpiTransport`] to build one from an [`embedded_hal::spi::SpiBus`] and two
//! [`embedded_hal::digital::OutputPin`]s.
//!
//! ```ignore
//! use rf24::radio::{prelude::*, RF24};
//! use rf24::SpiTransport;
//!
//! let mut radio = RF24::new(SpiTransport::new(spi_bus, csn_pin, ce_pin), delay);
//! radio.init()?;
//! radio.open_tx_pipe(b"1Node")?;
//! if radio.send(b"hello")? {
//!     // the payload was acknowledged
//! }
//! ```
//!
//! ## Where to look
//!
//! | task | methods |
//! |------|---------|
//! | bring-up | [`RF24::new()`](fn@crate::radio::RF24::new), [`init()`](fn@radio::prelude::EsbInit::init), [`with_config()`](fn@radio::prelude::EsbInit::with_config) |
//! | addressing | [`open_tx_pipe()`](fn@radio::prelude::EsbPipe::open_tx_pipe), [`open_rx_pipe()`](fn@radio::prelude::EsbPipe::open_rx_pipe), [`close_rx_pipe()`](fn@radio::prelude::EsbPipe::close_rx_pipe) |
//! | receiving | [`start_listening()`](fn@radio::prelude::EsbRadio::start_listening), [`available_pipe()`](fn@radio::prelude::EsbFifo::available_pipe), [`read()`](fn@radio::prelude::EsbRadio::read), [`stop_listening()`](fn@radio::prelude::EsbRadio::stop_listening) |
//! | transmitting | [`send()`](fn@radio::prelude::EsbRadio::send), [`send_with_outcome()`](fn@radio::prelude::EsbRadio::send_with_outcome) |
//! | IRQ driven transmitting | [`write()`](fn@radio::prelude::EsbRadio::write), [`what_happened()`](fn@radio::prelude::EsbStatus::what_happened) |
//! | ACK payloads | [`set_ack_payloads()`](fn@radio::prelude::EsbAutoAck::set_ack_payloads), [`write_ack_payload()`](fn@radio::prelude::EsbAutoAck::write_ack_payload), [`is_ack_payload_available()`](fn@radio::prelude::EsbAutoAck::is_ack_payload_available) |
//! | RF tuning | [`set_channel()`](fn@radio::prelude::EsbChannel::set_channel), [`set_data_rate()`](fn@radio::prelude::EsbDataRate::set_data_rate), [`set_pa_level()`](fn@radio::prelude::EsbPaLevel::set_pa_level), [`set_crc_length()`](fn@radio::prelude::EsbCrcLength::set_crc_length) |
//! | link tuning | [`set_retries()`](fn@radio::prelude::EsbAutoAck::set_retries), [`set_auto_ack()`](fn@radio::prelude::EsbAutoAck::set_auto_ack), [`set_dynamic_payloads()`](fn@radio::prelude::EsbPayloadLength::set_dynamic_payloads), [`set_payload_size()`](fn@radio::prelude::EsbPayloadLength::set_payload_size) |
//! | power | [`power_up()`](fn@radio::prelude::EsbPower::power_up), [`power_down()`](fn@radio::prelude::EsbPower::power_down) |
//! | diagnostics | [`test_rpd()`](fn@crate::radio::RF24::test_rpd), [`test_carrier()`](fn@crate::radio::RF24::test_carrier), [`get_last_arc()`](fn@radio::prelude::EsbRadio::get_last_arc), [`get_fifo_state()`](fn@radio::prelude::EsbFifo::get_fifo_state) |
#![no_std]

mod log;
mod transport;
pub use transport::{SpiTransport, Transport, TransportError};
mod types;
pub use types::{CrcLength, DataRate, FifoState, PaLevel, StatusFlags, TxOutcome};
pub mod radio;

#[cfg(test)]
mod test;
