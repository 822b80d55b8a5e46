// Sensor Task - Lichtsensor alle 4 s sampeln
use embassy_time::Delay;
use pdt_core::tasks::sensor_logic;

use crate::{SHARED_STATE, SharedBus};

#[embassy_executor::task]
pub async fn sensor_task(bus: &'static SharedBus) -> ! {
    sensor_logic(&SHARED_STATE, bus, Delay).await
}
