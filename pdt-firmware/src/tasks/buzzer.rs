// Buzzer Task - spielt Piep-Muster nacheinander ab
use defmt::debug;

use crate::AlertReceiver;
use crate::hal::Buzzer;

#[embassy_executor::task]
pub async fn buzzer_task(mut buzzer: Buzzer<'static>, alerts: AlertReceiver) {
    loop {
        let pattern = alerts.receive().await;
        debug!("Buzzer: playing {} ({} ms)", pattern, pattern.total_ms());
        buzzer.play(pattern).await;
    }
}
