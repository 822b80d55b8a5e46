//! Settings-Task: Potentiometer, Dauer-Gesten und Start-Geste
//!
//! Läuft nur während `Configuring` und ist der einzige Schreiber von
//! Farbe und Dauer. Nach der Start-Geste endet der Task.

use embedded_hal_async::delay::DelayNs;
use rgb::RGB8;

use crate::config::{
    ADJUST_CONFIRM_MS, ADJUST_SETTLE_MS, DURATION_COARSE_STEP, DURATION_FINE_STEP,
    SETTINGS_POLL_MS, SETTINGS_TAIL_MS, TOUCH_ADJUST_THRESHOLD, TOUCH_START_THRESHOLD,
};
use crate::logic::{adjust_duration, scale_axis};
use crate::state::{PhaseError, SharedState};
use crate::traits::{Alert, InputPanel};
use crate::types::{Axis, BeepPattern, DebouncePolicy, Phase, TouchPad};

/// Touch gilt als berührt, wenn der Näherungswert unter der Schwelle liegt
pub fn is_touched(value: u16, threshold: u16) -> bool {
    value < threshold
}

/// Liest alle drei Potentiometer und skaliert sie auf 0..255
pub fn read_color<I: InputPanel>(inputs: &mut I) -> RGB8 {
    RGB8 {
        r: scale_axis(inputs.read_axis(Axis::Red)),
        g: scale_axis(inputs.read_axis(Axis::Green)),
        b: scale_axis(inputs.read_axis(Axis::Blue)),
    }
}

/// Entprellung der Start-Geste
pub struct StartDebouncer {
    policy: DebouncePolicy,
    streak: u8,
}

impl StartDebouncer {
    pub const fn new(policy: DebouncePolicy) -> Self {
        Self { policy, streak: 0 }
    }

    /// Zählt aufeinanderfolgende positive Abfragen (Sustained-Policy)
    ///
    /// Jede negative Abfrage setzt den Zähler zurück.
    pub fn poll(&mut self, touched: bool) -> bool {
        if !touched {
            self.streak = 0;
            return false;
        }
        self.streak = self.streak.saturating_add(1);
        match self.policy {
            DebouncePolicy::Sustained { polls } => self.streak >= polls.max(1),
            DebouncePolicy::Recheck { .. } => true,
        }
    }

    /// Fragt die Start-Fläche ab und wendet die Policy an
    pub async fn confirm<I: InputPanel, D: DelayNs>(&mut self, inputs: &mut I, delay: &mut D) -> bool {
        let touched = is_touched(inputs.read_touch(TouchPad::Start), TOUCH_START_THRESHOLD);
        match self.policy {
            DebouncePolicy::Sustained { .. } => self.poll(touched),
            DebouncePolicy::Recheck { after_ms } => {
                if !self.poll(touched) {
                    return false;
                }
                delay.delay_ms(after_ms).await;
                let still = is_touched(inputs.read_touch(TouchPad::Start), TOUCH_START_THRESHOLD);
                self.poll(still)
            }
        }
    }
}

/// Zweistufige Dauer-Geste: 1 Minute sofort, weitere 9 wenn nach 400 ms
/// noch berührt
async fn adjust_gesture<I: InputPanel, D: DelayNs>(
    shared: &SharedState,
    inputs: &mut I,
    delay: &mut D,
    pad: TouchPad,
    direction: i32,
) -> Result<(), PhaseError> {
    delay.delay_ms(ADJUST_SETTLE_MS).await;
    let minutes = adjust_duration(shared.duration(), direction * DURATION_FINE_STEP as i32);
    shared.set_duration(minutes)?;

    delay.delay_ms(ADJUST_CONFIRM_MS).await;
    if is_touched(inputs.read_touch(pad), TOUCH_ADJUST_THRESHOLD) {
        let minutes = adjust_duration(minutes, direction * DURATION_COARSE_STEP as i32);
        shared.set_duration(minutes)?;
    }
    info!("Settings: duration {} min", shared.duration());
    Ok(())
}

async fn settings_cycle<I: InputPanel, D: DelayNs>(
    shared: &SharedState,
    inputs: &mut I,
    delay: &mut D,
) -> Result<(), PhaseError> {
    let color = read_color(inputs);
    if color != shared.color() {
        debug!("Settings: color R{} G{} B{}", color.r, color.g, color.b);
    }
    shared.set_color(color)?;

    if is_touched(inputs.read_touch(TouchPad::More), TOUCH_ADJUST_THRESHOLD) {
        adjust_gesture(shared, inputs, delay, TouchPad::More, 1).await?;
    }
    if is_touched(inputs.read_touch(TouchPad::Less), TOUCH_ADJUST_THRESHOLD) {
        adjust_gesture(shared, inputs, delay, TouchPad::Less, -1).await?;
    }
    Ok(())
}

/// Settings Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// # Parameter
/// - `shared`: gemeinsamer Sitzungszustand
/// - `inputs`: Potentiometer und Touch-Flächen (Hardware oder Mock)
/// - `alert`: Buzzer für die Start-Quittung
/// - `delay`: Zeitquelle für Poll-Pausen
/// - `policy`: Entprellung der Start-Geste
pub async fn settings_logic<I: InputPanel, A: Alert, D: DelayNs>(
    shared: &SharedState,
    mut inputs: I,
    mut alert: A,
    mut delay: D,
    policy: DebouncePolicy,
) {
    let mut debouncer = StartDebouncer::new(policy);

    while shared.phase() == Phase::Configuring {
        delay.delay_ms(SETTINGS_POLL_MS).await;

        if let Err(e) = settings_cycle(shared, &mut inputs, &mut delay).await {
            debug!("Settings: write rejected: {:?}", e);
            break;
        }

        if debouncer.confirm(&mut inputs, &mut delay).await {
            info!("Settings: start gesture confirmed");
            match shared.advance_phase(Phase::Treating) {
                Ok(_) => alert.sound(BeepPattern::START),
                Err(e) => error!("Settings: cannot start treatment: {:?}", e),
            }
            break;
        }

        delay.delay_ms(SETTINGS_TAIL_MS).await;
    }

    info!("Settings: task finished");
}
