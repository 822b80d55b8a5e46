// Task-Modul: Embassy-Wrapper um die Task-Logik aus pdt-core
//
// Jeder Task baut seine Hardware-Anbindung und ruft dann die generische
// Logik auf. Koordination läuft nur über SHARED_STATE, den SharedBus
// und den Alert-Channel.

pub mod buzzer;
pub mod display;
pub mod leds;
pub mod sensor;
pub mod settings;
pub mod timer;

// Re-export Tasks für einfachen Import
pub use buzzer::buzzer_task;
pub use display::display_task;
pub use leds::led_task;
pub use sensor::sensor_task;
pub use settings::settings_task;
pub use timer::timer_task;
