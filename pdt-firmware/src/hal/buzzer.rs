// Aktiver Buzzer und die Alert-Anbindung der Tasks
//
// Tasks reichen Piep-Muster nur in den Channel weiter, abgespielt wird
// im Buzzer Task.

use defmt::warn;
use embassy_time::{Duration, Timer};
use esp_hal::gpio::Output;
use pdt_core::{Alert, BeepPattern};

use crate::AlertSender;

/// Alert-Implementierung der Tasks: Muster in die Warteschlange legen
#[derive(Clone, Copy)]
pub struct QueuedAlert {
    sender: AlertSender,
}

impl QueuedAlert {
    pub fn new(sender: AlertSender) -> Self {
        Self { sender }
    }
}

impl Alert for QueuedAlert {
    fn sound(&mut self, pattern: BeepPattern) {
        if self.sender.try_send(pattern).is_err() {
            warn!("Buzzer: queue full, dropped {}", pattern);
        }
    }
}

pub struct Buzzer<'d> {
    pin: Output<'d>,
}

impl<'d> Buzzer<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }

    /// Spielt ein Muster komplett ab
    pub async fn play(&mut self, pattern: BeepPattern) {
        for _ in 0..pattern.count {
            self.pin.set_high();
            Timer::after(Duration::from_millis(pattern.on_ms as u64)).await;
            self.pin.set_low();
            if pattern.off_ms > 0 {
                Timer::after(Duration::from_millis(pattern.off_ms as u64)).await;
            }
        }
    }
}
