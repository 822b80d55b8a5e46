// Settings Task - Potentiometer und Taster während `Configuring`
use embassy_time::Delay;
use pdt_core::tasks::settings_logic;

use crate::config::START_DEBOUNCE;
use crate::hal::{PanelInputs, QueuedAlert};
use crate::{AlertSender, SHARED_STATE};

/// Settings Task - endet nach der Start-Geste
///
/// # Parameter
/// - `inputs`: ADC-Kanäle und Taster, in main() konfiguriert
/// - `alerts`: Channel zum Buzzer Task (Start-Quittung)
#[embassy_executor::task]
pub async fn settings_task(inputs: PanelInputs<'static>, alerts: AlertSender) {
    settings_logic(
        &SHARED_STATE,
        inputs,
        QueuedAlert::new(alerts),
        Delay,
        START_DEBOUNCE,
    )
    .await;
}
