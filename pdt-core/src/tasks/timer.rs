//! Timer-Task: Restzeit und der Übergang nach `Finished`

use embedded_hal_async::delay::DelayNs;

use crate::config::{TIMER_MIRROR_MS, TIMER_STEP_MS};
use crate::state::SharedState;
use crate::traits::Alert;
use crate::types::Phase;

/// Timer Logic
///
/// - `Configuring`: spiegelt die eingestellte Dauer alle 500 ms
/// - `Treating`: wartet je 60 s und zieht eine Minute ab, ohne
///   Drift-Korrektur
/// - Bei 0 Minuten: `Finished`, Alarm genau einmal, Task endet
pub async fn timer_logic<A: Alert, D: DelayNs>(shared: &SharedState, mut alert: A, mut delay: D) {
    loop {
        match shared.phase() {
            Phase::Configuring => {
                // Kann mit dem Start-Snapshot kollidieren, dann gilt der Snapshot
                if let Err(e) = shared.mirror_duration() {
                    debug!("Timer: mirror skipped: {:?}", e);
                }
                delay.delay_ms(TIMER_MIRROR_MS).await;
            }
            Phase::Treating => {
                delay.delay_ms(TIMER_STEP_MS).await;
                match shared.count_down_minute() {
                    Ok(0) => break,
                    Ok(remaining) => info!("Timer: {} min remaining", remaining),
                    Err(e) => warn!("Timer: count down rejected: {:?}", e),
                }
            }
            Phase::Finished => return,
        }
    }

    match shared.finish(&mut alert) {
        Ok(_) => info!("Timer: treatment complete"),
        Err(e) => {
            error!("Timer: cannot finish treatment: {:?}", e);
            debug_assert!(false, "Treating -> Finished must be legal here");
        }
    }
}
