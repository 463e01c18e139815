use super::{
    bit_fields::{Config, ObserveTx},
    commands, registers, timing, Nrf24Error, RF24,
};
use crate::{
    log::{debug, trace},
    radio::prelude::{EsbFifo, EsbPayloadLength, EsbPower, EsbRadio, EsbStatus},
    StatusFlags, Transport, TxOutcome,
};
use embedded_hal::delay::DelayNs;

impl<T, DELAY> EsbRadio for RF24<T, DELAY>
where
    T: Transport,
    DELAY: DelayNs,
{
    type RadioErrorType = Nrf24Error<T::Error>;

    fn start_listening(&mut self) -> Result<(), Self::RadioErrorType> {
        // open_tx_pipe() may have overwritten pipe 0's address
        let pipe0 = self._pipe0_rx_addr;
        self.write_registers(registers::RX_ADDR_P0, &pipe0)?;

        let config = Config::from_bits(self.read_register(registers::CONFIG)?);
        self.write_register(registers::CONFIG, config.as_rx().into_bits())?;
        self.clear_status_flags(StatusFlags::new())?;
        self.flush_rx()?;
        self.flush_tx()?;
        self.set_ce(true)?;
        self._delay_impl.delay_us(timing::RX_SETTLE_US);
        Ok(())
    }

    fn stop_listening(&mut self) -> Result<(), Self::RadioErrorType> {
        self.set_ce(false)?;
        self.flush_tx()?;
        self.flush_rx()
    }

    /// See [`EsbRadio::read()`] for implementation-agnostic detail.
    ///
    /// Remember that each call to [`RF24::read()`] fetches data from the
    /// RX FIFO beginning with the first byte from the first available
    /// payload. The payload is removed from the RX FIFO because its
    /// entire length is always clocked out, even if `buf` is shorter.
    fn read(&mut self, buf: &mut [u8]) -> Result<bool, Self::RadioErrorType> {
        let len = if self._flags.dynamic_payloads() {
            self.get_dynamic_payload_size()?
        } else {
            self._payload_size
        } as usize;
        trace!("reading {} bytes into {} byte buffer", len, buf.len());
        self.spi_read(commands::R_RX_PAYLOAD, buf, len)?;
        self.rx_fifo_empty()
    }

    /// See [`EsbRadio::write()`] for implementation-agnostic detail.
    ///
    /// With dynamic payloads disabled, `buf` is truncated or zero-padded to
    /// [`RF24::get_payload_size()`]. Otherwise `buf` is sent as is (up to 32 bytes),
    /// and an empty `buf` is rejected with [`Nrf24Error::EmptyPayload`] before
    /// anything is sent to the radio.
    fn write(&mut self, buf: &[u8]) -> Result<(), Self::RadioErrorType> {
        let dynamic = self._flags.dynamic_payloads();
        if dynamic && buf.is_empty() {
            return Err(Nrf24Error::EmptyPayload);
        }

        let config = Config::from_bits(self.read_register(registers::CONFIG)?);
        self.write_register(registers::CONFIG, config.as_tx().into_bits())?;
        self._delay_impl.delay_us(timing::TX_SETTLE_US);

        let (len, total) = if dynamic {
            let len = buf.len().min(32);
            (len, len)
        } else {
            let total = self._payload_size as usize;
            (buf.len().min(total), total)
        };
        trace!("writing {} bytes + {} bytes of padding", len, total - len);
        self.spi_write(commands::W_TX_PAYLOAD, &buf[..len], total)?;

        // a CE pulse of at least 10 us starts the transmission
        self.set_ce(true)?;
        self._delay_impl.delay_us(timing::CE_PULSE_US);
        self.set_ce(false)
    }

    /// See [`EsbRadio::send()`] for implementation-agnostic detail.
    fn send(&mut self, buf: &[u8]) -> Result<bool, Self::RadioErrorType> {
        Ok(self.send_with_outcome(buf)?.is_acked())
    }

    /// This blocks for up to 500 ms if the radio never reports an outcome.
    ///
    /// The radio is powered down and its TX FIFO flushed even if an error
    /// interrupts the transmission. The first error is the one returned.
    fn send_with_outcome(&mut self, buf: &[u8]) -> Result<TxOutcome, Self::RadioErrorType> {
        let result = self.write(buf).and_then(|()| self.await_outcome());
        let shutdown = self.power_down().and_then(|()| self.flush_tx());

        let (flags, polls) = result?;
        shutdown?;
        let outcome = TxOutcome::from_flags(flags);
        debug!("send finished ({}) after {} polls", outcome, polls);
        Ok(outcome)
    }

    fn get_last_arc(&mut self) -> Result<u8, Self::RadioErrorType> {
        Ok(ObserveTx::from_bits(self.read_register(registers::OBSERVE_TX)?).arc_cnt())
    }

    fn get_lost_packets(&mut self) -> Result<u8, Self::RadioErrorType> {
        Ok(ObserveTx::from_bits(self.read_register(registers::OBSERVE_TX)?).plos_cnt())
    }
}

impl<T, DELAY> RF24<T, DELAY>
where
    T: Transport,
    DELAY: DelayNs,
{
    /// Poll every millisecond until TX_DS or MAX_RT shows up (or the poll
    /// limit is reached), then decode and clear the events.
    fn await_outcome(&mut self) -> Result<(StatusFlags, u16), Nrf24Error<T::Error>> {
        let mut polls = 0;
        while polls < timing::TX_POLL_LIMIT {
            self._delay_impl.delay_ms(1);
            // the STATUS byte comes with any register access
            self.read_register(registers::OBSERVE_TX)?;
            polls += 1;
            if self._status.tx_ds() || self._status.max_rt() {
                break;
            }
        }
        Ok((self.what_happened()?, polls))
    }
}
