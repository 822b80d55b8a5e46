//! Sensor-Task: Lichtsensor sampeln, Bestrahlungsstärke nachführen
//!
//! Läuft die gesamte Sitzung, auch nach `Finished`. Einziger Schreiber
//! der Messwerte.

use embedded_hal_async::delay::DelayNs;

use crate::bus::BusLock;
use crate::config::SENSOR_PERIOD_MS;
use crate::state::SharedState;
use crate::traits::{LightSensor, SensorError};
use crate::types::SensorReading;

/// Ein Messzyklus: Bus belegen, Lux lesen, Bus freigeben, Werte übernehmen
///
/// Sensorfehler werden geloggt, der letzte Lux-Wert bleibt erhalten.
pub async fn sample_once<B: LightSensor>(shared: &SharedState, bus: &BusLock<B>) -> SensorReading {
    let lux = match bus.with("sensor", |b| b.sample_lux()).await {
        Ok(lux) => Some(lux),
        Err(SensorError::Saturated) => {
            warn!("Sensor: overload, keeping last lux value");
            None
        }
        Err(e) => {
            warn!("Sensor: read failed: {:?}", e);
            None
        }
    };

    let reading = shared.record_sample(lux);
    debug!(
        "Sensor: {} lx, {} mW/cm2 (final {})",
        reading.measured_lux, reading.instant_irradiance, reading.final_irradiance
    );
    reading
}

/// Sensor Logic - alle 4 s ein Sample, unabhängig von der Phase
pub async fn sensor_logic<B: LightSensor, D: DelayNs>(
    shared: &SharedState,
    bus: &BusLock<B>,
    mut delay: D,
) -> ! {
    loop {
        delay.delay_ms(SENSOR_PERIOD_MS).await;
        sample_once(shared, bus).await;
    }
}
