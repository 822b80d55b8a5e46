//! LED-Task: Strip-Farbe je Phase

use embedded_hal_async::delay::DelayNs;
use rgb::RGB8;

use crate::config::{LED_PIXEL_STAGGER_MS, LED_STAGE_MS};
use crate::state::SharedState;
use crate::traits::LedStrip;
use crate::types::{OFF, Phase};

/// Schreibt `color` Pixel für Pixel mit kurzer Pause dazwischen
pub async fn sweep<L: LedStrip, D: DelayNs>(strip: &mut L, delay: &mut D, color: RGB8) {
    for index in 0..strip.pixel_count() {
        if let Err(e) = strip.set_pixel(index, color) {
            error!("LEDs: pixel {} failed: {:?}", index, e);
        }
        if let Err(e) = strip.show() {
            error!("LEDs: show failed: {:?}", e);
        }
        delay.delay_ms(LED_PIXEL_STAGGER_MS).await;
    }
}

/// Alle Pixel auf einmal ausschalten
fn blank<L: LedStrip>(strip: &mut L) {
    for index in 0..strip.pixel_count() {
        if let Err(e) = strip.set_pixel(index, OFF) {
            error!("LEDs: pixel {} failed: {:?}", index, e);
        }
    }
    if let Err(e) = strip.show() {
        error!("LEDs: show failed: {:?}", e);
    }
}

/// LED Logic
///
/// - `Configuring`: Strip aus, aktuelle Einstellung laufend nach
///   LiveColor kopieren
/// - `Treating`: LiveColor einmal schreiben, dann bis zum Phasenwechsel
///   halten (keine weiteren Writes)
/// - `Finished`: einmal aus, Task endet
pub async fn led_logic<L: LedStrip, D: DelayNs>(shared: &SharedState, mut strip: L, mut delay: D) {
    let mut phase_rx = shared.phase_receiver();
    blank(&mut strip);

    while shared.phase() == Phase::Configuring {
        if let Ok(color) = shared.stage_live_color() {
            trace!("LEDs: staged ({}, {}, {})", color.r, color.g, color.b);
        }
        delay.delay_ms(LED_STAGE_MS).await;
    }

    if shared.phase() == Phase::Treating {
        let color = shared.live_color();
        info!("LEDs: on ({}, {}, {})", color.r, color.g, color.b);
        sweep(&mut strip, &mut delay, color).await;

        match phase_rx.as_mut() {
            Some(rx) => {
                rx.get_and(|phase| *phase != Phase::Treating).await;
            }
            None => {
                warn!("LEDs: no phase receiver left, polling");
                while shared.phase() == Phase::Treating {
                    delay.delay_ms(LED_STAGE_MS).await;
                }
            }
        }
    }

    info!("LEDs: off");
    sweep(&mut strip, &mut delay, OFF).await;
}
