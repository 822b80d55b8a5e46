// Timer Task - Restzeit in Minuten, Übergang nach `Finished`
use embassy_time::Delay;
use pdt_core::tasks::timer_logic;

use crate::hal::QueuedAlert;
use crate::{AlertSender, SHARED_STATE};

#[embassy_executor::task]
pub async fn timer_task(alerts: AlertSender) {
    timer_logic(&SHARED_STATE, QueuedAlert::new(alerts), Delay).await;
}
