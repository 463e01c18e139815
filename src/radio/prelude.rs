//! The radio's operations, grouped by concern.
//!
//! Method calls on [`RF24`](crate::radio::RF24) need the traits in scope;
//! a glob import is the usual way.
//!
//! ```
//! use rf24::radio::prelude::*;
//! ```

use crate::types::{CrcLength, DataRate, FifoState, PaLevel, StatusFlags, TxOutcome};

use super::RadioConfig;

/// Addressing: the six RX pipes and the TX destination.
pub trait EsbPipe {
    type PipeErrorType;

    /// Listen for packets sent to `address` on `pipe` once RX mode starts.
    ///
    /// A `pipe` above 5 is ignored.
    ///
    /// Up to 6 pipes can be open for reading at once. Open all the required
    /// reading pipes, and then call [`EsbRadio::start_listening()`].
    ///
    /// ### Address sharing
    /// Pipes 0 and 1 store a full 5-byte address. Pipes 2-5 only store the
    /// least significant byte (`address[0]`) and borrow the other 4 bytes from
    /// the address of pipe 1. This is not validated.
    ///
    /// The pipe's static payload length is set from
    /// [`EsbPayloadLength::get_payload_size()`].
    ///
    /// <div class="warning">
    ///
    /// The `address` given for pipe 0 is cached and written back to the radio at
    /// every call to [`EsbRadio::start_listening()`], because
    /// [`EsbPipe::open_tx_pipe()`] overwrites it.
    ///
    /// </div>
    fn open_rx_pipe(&mut self, pipe: u8, address: &[u8; 5]) -> Result<(), Self::PipeErrorType>;

    /// Set the destination `address` used when transmitting.
    ///
    /// The address is also written to pipe 0's RX address (the radio expects
    /// ACK packets on it) along with pipe 0's static payload length.
    fn open_tx_pipe(&mut self, address: &[u8; 5]) -> Result<(), Self::PipeErrorType>;

    /// Stop accepting packets on `pipe`.
    ///
    /// A `pipe` above 5 is ignored.
    fn close_rx_pipe(&mut self, pipe: u8) -> Result<(), Self::PipeErrorType>;
}

/// The RF channel (carrier frequency).
pub trait EsbChannel {
    type ChannelErrorType;

    /// Tune to `channel`.
    ///
    /// These channels translate to the RF frequency as an offset of MHz from 2400 MHz.
    /// After bring-up the radio sits on channel 76 (2476 MHz).
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType>;

    /// Read back the channel from the radio.
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType>;
}

/// The IRQ events reported in the STATUS byte, see [`StatusFlags`].
pub trait EsbStatus {
    type StatusErrorType;

    /// Fetch the STATUS byte without touching any register.
    fn get_status(&mut self) -> Result<StatusFlags, Self::StatusErrorType>;

    /// Get the [`StatusFlags`] cached from the latest transaction.
    fn get_status_flags(&self) -> StatusFlags;

    /// Clear the radio's IRQ status flags.
    ///
    /// Each event set to `true` in `flags` is cleared on the radio. Events
    /// set to `false` are left pending.
    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType>;

    /// Find out why the IRQ fired.
    ///
    /// This clears all three events in one transaction and returns their
    /// values from before the clear. If `rx_dr` was set during a transmission, an
    /// ACK payload arrived; its length is fetched and recorded (see
    /// [`EsbAutoAck::get_ack_payload_length()`]).
    ///
    /// This is the second half of [`EsbRadio::write()`] for interrupt driven
    /// applications; the driver never calls it on its own after a non-blocking write.
    /// Use [`TxOutcome::from_flags()`] to classify the result.
    fn what_happened(&mut self) -> Result<StatusFlags, Self::StatusErrorType>;
}

/// The 3-slot RX and TX FIFOs.
pub trait EsbFifo {
    type FifoErrorType;

    /// Discard every payload waiting in the RX FIFO.
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Discard every payload waiting in the TX FIFO.
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Fill level of the TX FIFO (`about_tx = true`) or the RX FIFO (`false`).
    fn get_fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::FifoErrorType>;

    /// Is there a new payload available?
    ///
    /// See [`EsbFifo::available_pipe()`].
    fn available(&mut self) -> Result<bool, Self::FifoErrorType>;

    /// Returns the pipe number that received a new payload, if any.
    ///
    /// This checks the "RX data ready" event and clears it (and a pending
    /// "TX data sent" event caused by an outgoing ACK payload) in the same call.
    ///
    /// <div class="warning">
    ///
    /// The event is cleared before the payload is read. A second call made before
    /// [`EsbRadio::read()`] reports nothing new even though the payload is still
    /// in the RX FIFO. Drain with [`EsbRadio::read()`] until it reports an empty FIFO.
    ///
    /// </div>
    fn available_pipe(&mut self) -> Result<Option<u8>, Self::FifoErrorType>;
}

/// Static and dynamic payload lengths.
pub trait EsbPayloadLength {
    type PayloadLengthErrorType;

    /// Set the static payload length. It is clamped to the range [1, 32].
    ///
    /// This only updates the driver's setting; it is written to the radio for
    /// each pipe opened afterward and it governs padding of outgoing payloads.
    fn set_payload_size(&mut self, size: u8);

    /// Get the configured static payload length.
    fn get_payload_size(&self) -> u8;

    /// Switch every pipe between static and dynamic payload lengths.
    ///
    /// Returns [`Nrf24Error::FeaturesLocked`](crate::radio::Nrf24Error::FeaturesLocked)
    /// if the radio refuses to unlock its FEATURE register.
    fn set_dynamic_payloads(&mut self, enable: bool) -> Result<(), Self::PayloadLengthErrorType>;

    /// Are dynamic payloads on? Answered from the driver's record.
    fn get_dynamic_payloads(&self) -> bool;

    /// Get the length of the payload at the top of the RX FIFO.
    fn get_dynamic_payload_size(&mut self) -> Result<u8, Self::PayloadLengthErrorType>;
}

/// Automatic acknowledgement, retries and ACK payloads.
pub trait EsbAutoAck: EsbPayloadLength {
    type AutoAckErrorType;

    /// Enable or disable custom payloads attached to ACK packets.
    ///
    /// Enabling also turns on dynamic payloads for pipes 0 and 1.
    /// Returns [`Nrf24Error::FeaturesLocked`](crate::radio::Nrf24Error::FeaturesLocked)
    /// if the radio refuses to unlock its FEATURE register.
    fn set_ack_payloads(&mut self, enable: bool) -> Result<(), Self::AutoAckErrorType>;

    /// Is the ACK payloads feature enabled?
    fn get_ack_payloads(&mut self) -> Result<bool, Self::AutoAckErrorType>;

    /// Queue a payload to be attached to the next ACK packet sent on `pipe`.
    ///
    /// The radio holds at most 3 of these; the limit is not checked here.
    /// `buf` is truncated to 32 bytes. Returns `false` if the TX FIFO reported
    /// full when the command was issued, or if `pipe` is not in range [0, 5].
    fn write_ack_payload(&mut self, pipe: u8, buf: &[u8]) -> Result<bool, Self::AutoAckErrorType>;

    /// Length of the ACK payload that arrived with the latest transmission (0 if none).
    fn get_ack_payload_length(&self) -> u8;

    /// Did an ACK payload arrive since the last call?
    ///
    /// This resets the recorded ACK payload length.
    fn is_ack_payload_available(&mut self) -> bool;

    /// Enable or disable the auto-ack feature for all pipes.
    fn set_auto_ack(&mut self, enable: bool) -> Result<(), Self::AutoAckErrorType>;

    /// Set the auto-ack feature for an individual `pipe` in range [0, 5].
    ///
    /// Other `pipe` values are ignored.
    fn set_auto_ack_pipe(&mut self, pipe: u8, enable: bool) -> Result<(), Self::AutoAckErrorType>;

    /// Set the delay between retries and the number of retries.
    ///
    /// `delay` and `count` are each clamped to 15.
    /// - `delay`: in multiples of 250 us, 0 means 250 us and 15 means 4000 us.
    /// - `count`: 0 disables retrying.
    fn set_retries(&mut self, delay: u8, count: u8) -> Result<(), Self::AutoAckErrorType>;
}

/// Transmit power.
pub trait EsbPaLevel {
    type PaLevelErrorType;

    /// Read the PA level from RF_SETUP.
    fn get_pa_level(&mut self) -> Result<PaLevel, Self::PaLevelErrorType>;

    /// Change the PA level. Other RF_SETUP bits are kept.
    fn set_pa_level(&mut self, pa_level: PaLevel) -> Result<(), Self::PaLevelErrorType>;
}

/// Power-down (sleep) and standby.
pub trait EsbPower {
    type PowerErrorType;

    /// Clear the PWR_UP bit. All other configuration is left intact.
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Set the PWR_UP bit. All other configuration is left intact.
    fn power_up(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Read the PWR_UP bit.
    fn is_powered(&mut self) -> Result<bool, Self::PowerErrorType>;
}

/// Packet checksum.
pub trait EsbCrcLength {
    type CrcLengthErrorType;

    /// Read the CRC length from CONFIG.
    fn get_crc_length(&mut self) -> Result<CrcLength, Self::CrcLengthErrorType>;

    /// Change the CRC length. Other CONFIG bits are kept.
    fn set_crc_length(&mut self, crc_length: CrcLength) -> Result<(), Self::CrcLengthErrorType>;

    /// Clear the CRC enable bit, leaving the CRC width bit as is.
    fn disable_crc(&mut self) -> Result<(), Self::CrcLengthErrorType>;
}

/// On-air bit rate.
pub trait EsbDataRate {
    type DataRateErrorType;

    /// Read the data rate from RF_SETUP.
    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType>;

    /// Set the radio's Data Rate.
    ///
    /// The register is read back after writing it. Returns `Ok(false)` if the
    /// radio did not keep the new value (eg. [`DataRate::Kbps250`] on a non-plus
    /// variant). This is advisory; the radio remains usable.
    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<bool, Self::DataRateErrorType>;
}

/// Bring-up and bulk configuration.
pub trait EsbInit {
    type ConfigErrorType;

    /// Bring up the radio with the library defaults.
    ///
    /// This must be called once before any other operation. It detects
    /// whether the radio is a plus variant and leaves it configured with
    /// the values listed in [`RadioConfig::default()`].
    fn init(&mut self) -> Result<(), Self::ConfigErrorType>;

    /// Apply the given configuration. Call [`EsbInit::init()`] first.
    ///
    /// Returns the result of [`EsbDataRate::set_data_rate()`].
    fn with_config(&mut self, config: &RadioConfig) -> Result<bool, Self::ConfigErrorType>;
}

/// Moving payloads: RX mode, TX mode and the blocking send.
pub trait EsbRadio {
    type RadioErrorType;

    /// Start listening on the pipes opened for reading.
    ///
    /// Pipe 0's address (as given to [`EsbPipe::open_rx_pipe()`]) is restored,
    /// both FIFOs are flushed and the radio is put in active RX mode.
    /// Do not transmit while listening; call [`EsbRadio::stop_listening()`] first.
    fn start_listening(&mut self) -> Result<(), Self::RadioErrorType>;

    /// Leave active RX mode and flush both FIFOs.
    fn stop_listening(&mut self) -> Result<(), Self::RadioErrorType>;

    /// Read the payload at the top of the RX FIFO into `buf`.
    ///
    /// With dynamic payloads disabled, exactly
    /// [`EsbPayloadLength::get_payload_size()`] bytes are clocked out of the radio.
    /// With dynamic payloads enabled, the length reported by the radio is used.
    /// Bytes that do not fit in `buf` are discarded.
    ///
    /// Returns `true` if the RX FIFO is empty afterward.
    fn read(&mut self, buf: &mut [u8]) -> Result<bool, Self::RadioErrorType>;

    /// Start transmitting `buf` and return immediately.
    ///
    /// The radio is powered up in TX mode, the payload is uploaded and CE is
    /// pulsed. Call [`EsbStatus::what_happened()`] once the IRQ fires to learn
    /// the outcome.
    ///
    /// Payloads are 1 to 32 bytes long. With dynamic payloads enabled an empty
    /// `buf` is an error; with static payloads it is sent as all zeros.
    fn write(&mut self, buf: &[u8]) -> Result<(), Self::RadioErrorType>;

    /// Transmit `buf` and block until the outcome is known.
    ///
    /// The radio is powered down and the TX FIFO flushed before returning,
    /// whether the transmission succeeded, failed or was cut short by an error.
    /// Returns `true` only if the payload was acknowledged.
    fn send(&mut self, buf: &[u8]) -> Result<bool, Self::RadioErrorType>;

    /// Same as [`EsbRadio::send()`], but tells a hardware failure (max retries)
    /// apart from a timeout.
    fn send_with_outcome(&mut self, buf: &[u8]) -> Result<TxOutcome, Self::RadioErrorType>;

    /// Get the number of retries made for the last transmission.
    fn get_last_arc(&mut self) -> Result<u8, Self::RadioErrorType>;

    /// Get the number of packets lost on the current channel (saturates at 15).
    fn get_lost_packets(&mut self) -> Result<u8, Self::RadioErrorType>;
}
