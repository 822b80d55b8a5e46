//! Display-Task: rendert den Bildschirm der aktuellen Phase
//!
//! Jeder Render-Vorgang läuft komplett unter dem [`BusLock`].

use embedded_hal_async::delay::DelayNs;

use crate::bus::BusLock;
use crate::config::{DISPLAY_FINISHED_PAUSE_MS, DISPLAY_PERIOD_MS, DISPLAY_TREATING_HOLD_MS};
use crate::screen::{
    Screen, configuring_screen, finished_banner, render_screen, summary_screen, treating_screen,
};
use crate::state::SharedState;
use crate::traits::TextDisplay;
use crate::types::Phase;

async fn show<B: TextDisplay>(bus: &BusLock<B>, screen: &Screen) {
    if let Err(e) = bus.with("display", |display| render_screen(display, screen)).await {
        warn!("Display: render failed: {:?}", e);
    }
}

/// Display Logic
///
/// Alle 300 ms ein Frame; während `Treating` zusätzlich 5 s Pause nach
/// dem Rendern. In `Finished` kommen Abschlussmeldung und Dosis, danach
/// endet der Task.
pub async fn display_logic<B: TextDisplay, D: DelayNs>(
    shared: &SharedState,
    bus: &BusLock<B>,
    mut delay: D,
) {
    loop {
        delay.delay_ms(DISPLAY_PERIOD_MS).await;
        let session = shared.snapshot();

        match session.phase {
            Phase::Configuring => show(bus, &configuring_screen(&session)).await,
            Phase::Treating => {
                show(bus, &treating_screen(&session)).await;
                delay.delay_ms(DISPLAY_TREATING_HOLD_MS).await;
            }
            Phase::Finished => break,
        }
    }

    show(bus, &finished_banner()).await;
    delay.delay_ms(DISPLAY_FINISHED_PAUSE_MS).await;

    let session = shared.snapshot();
    show(bus, &summary_screen(&session)).await;
    info!(
        "Display: final {} mW/cm2, fluence {} J/cm2",
        session.reading.final_irradiance,
        session.fluence()
    );
}
