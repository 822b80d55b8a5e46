// Display Task - 16x2 LCD am gemeinsamen Bus
use embassy_time::Delay;
use pdt_core::tasks::display_logic;

use crate::{SHARED_STATE, SharedBus};

#[embassy_executor::task]
pub async fn display_task(bus: &'static SharedBus) {
    display_logic(&SHARED_STATE, bus, Delay).await;
}
