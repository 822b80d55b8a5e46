// LED Task - Strip über das RMT Peripheral
use embassy_time::Delay;
use esp_hal_smartled::smart_led_buffer;
use pdt_core::tasks::led_logic;

use crate::SHARED_STATE;
use crate::config::{LED_COUNT, RMT_CLOCK_MHZ};
use crate::hal::RmtLedStrip;

/// LED Task - Embassy Task für parallele Ausführung
///
/// Übernimmt die Hardware-Initialisierung und ruft dann die testbare
/// `led_logic()` aus pdt-core auf.
///
/// # Parameter
/// - `gpio5`: Datenleitung des Strips
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
#[embassy_executor::task]
pub async fn led_task(
    gpio5: esp_hal::peripherals::GPIO5<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
) {
    // Buffer für SmartLED Daten (ganzer Strip)
    let mut rmt_buffer = smart_led_buffer!(LED_COUNT);

    let strip = RmtLedStrip::new(gpio5, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer);

    led_logic(&SHARED_STATE, strip, Delay).await;
}
