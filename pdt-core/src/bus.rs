//! Gemeinsamer I2C-Bus von Display und Lichtsensor
//!
//! Beide Geräte hängen physisch am selben Bus. Der Bus-Besitzer `B`
//! liegt in einem async Mutex, nur über den Guard kommt man an
//! Display oder Sensor. Rendern und Sampeln können sich so nie
//! überlappen.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;

/// Besitz-Token über den geteilten Bus
pub struct BusLock<B> {
    bus: Mutex<CriticalSectionRawMutex, B>,
}

impl<B> BusLock<B> {
    pub const fn new(bus: B) -> Self {
        Self {
            bus: Mutex::new(bus),
        }
    }

    /// Führt `f` exklusiv auf dem Bus aus
    ///
    /// Wartet (async) bis der andere Task den Bus freigibt, ohne Timeout.
    /// `user` erscheint im Trace-Log bei jedem Acquire/Release.
    pub async fn with<R>(&self, user: &'static str, f: impl FnOnce(&mut B) -> R) -> R {
        let mut guard = self.bus.lock().await;
        trace!("Bus: acquired by {}", user);
        let result = f(&mut guard);
        drop(guard);
        trace!("Bus: released by {}", user);
        result
    }

    /// Gibt den Bus-Besitzer wieder frei (Tests, Shutdown)
    pub fn into_inner(self) -> B {
        self.bus.into_inner()
    }
}
