// WS2812 Strip über das RMT Peripheral
//
// set_pixel() ändert nur den Frame-Buffer, show() schreibt den ganzen
// Frame auf den Strip.

use esp_hal::Blocking;
use esp_hal::rmt::Rmt;
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use pdt_core::{LedError, LedStrip, OFF};
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

use crate::config::{LED_BUFFER_SIZE, LED_COUNT};

/// Real Hardware LED Strip
///
/// Der RMT-Buffer muss länger leben als der Adapter, daher wird er im
/// Task erstellt und hier nur geliehen.
pub struct RmtLedStrip<'a> {
    led: SmartLedsAdapter<'a, LED_BUFFER_SIZE>,
    frame: [RGB8; LED_COUNT],
}

impl<'a> RmtLedStrip<'a> {
    /// # Parameter
    /// - `gpio5`: Datenleitung des Strips
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer! Macro)
    pub fn new(
        gpio5: esp_hal::peripherals::GPIO5<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [esp_hal::rmt::PulseCode; LED_BUFFER_SIZE],
    ) -> Self {
        let rmt: Rmt<'a, Blocking> =
            Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz)).unwrap();
        let led = SmartLedsAdapter::new(rmt.channel0, gpio5, buffer);

        Self {
            led,
            frame: [OFF; LED_COUNT],
        }
    }
}

impl LedStrip for RmtLedStrip<'_> {
    fn pixel_count(&self) -> usize {
        LED_COUNT
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), LedError> {
        let pixel = self.frame.get_mut(index).ok_or(LedError::WriteFailed)?;
        *pixel = color;
        Ok(())
    }

    fn show(&mut self) -> Result<(), LedError> {
        self.led
            .write(self.frame.iter().copied())
            .map_err(|_| LedError::WriteFailed)
    }
}
