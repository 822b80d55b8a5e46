// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::analog::adc::{Adc, AdcConfig, Attenuation};
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use pdt_core::{Alert, BeepPattern, BusLock, TextDisplay};
use pdt_firmware::config::{I2C_FREQUENCY_KHZ, LCD_ADDRESS, LUX_SENSOR_ADDRESS};
use pdt_firmware::hal::{Buzzer, I2cBus, PanelInputs, QueuedAlert};
use pdt_firmware::tasks::{
    buzzer_task, display_task, led_task, sensor_task, settings_task, timer_task,
};
use pdt_firmware::{AlertChannel, SharedBus};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, zeigt den Boot-Screen, prüft den Lichtsensor
/// und spawnt die Tasks. Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Alert-Channel und Buzzer zuerst, damit der Boot-Piep rausgeht
    static ALERTS: static_cell::StaticCell<AlertChannel> = static_cell::StaticCell::new();
    let alerts = &*ALERTS.init(AlertChannel::new());
    let mut alert = QueuedAlert::new(alerts.sender());

    let buzzer_pin = Output::new(peripherals.GPIO23, Level::Low, OutputConfig::default());
    spawner
        .spawn(buzzer_task(Buzzer::new(buzzer_pin), alerts.receiver()))
        .unwrap();

    // I2C Bus für LCD und Lichtsensor
    let i2c = I2c::new(
        peripherals.I2C0,
        I2cConfig::default().with_frequency(Rate::from_khz(I2C_FREQUENCY_KHZ)),
    )
    .expect("Failed to initialize I2C")
    .with_sda(peripherals.GPIO6)
    .with_scl(peripherals.GPIO7);
    let mut i2c_bus = I2cBus::new(i2c, Delay::new(), LCD_ADDRESS, LUX_SENSOR_ADDRESS);

    // Boot-Screen
    let splash = i2c_bus
        .init_display()
        .and_then(|_| i2c_bus.render(0, 0, "Starting..."));
    if let Err(e) = splash {
        error!("LCD not responding: {:?}", e);
    }
    alert.sound(BeepPattern::BOOT);

    // Lichtsensor: Fehler ist nicht fatal, die Sitzung läuft ohne Lux weiter
    match i2c_bus.init_sensor() {
        Ok(id) => info!("TSL2561 ready, id register {:#04x}", id),
        Err(e) => {
            error!("Light sensor not detected, check the I2C address: {:?}", e);
            alert.sound(BeepPattern::SENSOR_FAULT);
        }
    }

    // Bus muss 'static sein für Tasks
    static BUS: static_cell::StaticCell<SharedBus> = static_cell::StaticCell::new();
    let bus = &*BUS.init(BusLock::new(i2c_bus));

    // Potentiometer (ADC1) und Taster (Pull-up)
    let mut adc_config = AdcConfig::new();
    let red = adc_config.enable_pin(peripherals.GPIO0, Attenuation::_11dB);
    let green = adc_config.enable_pin(peripherals.GPIO1, Attenuation::_11dB);
    let blue = adc_config.enable_pin(peripherals.GPIO2, Attenuation::_11dB);
    let adc = Adc::new(peripherals.ADC1, adc_config);

    let button = || InputConfig::default().with_pull(Pull::Up);
    let inputs = PanelInputs {
        adc,
        red,
        green,
        blue,
        start: Input::new(peripherals.GPIO18, button()),
        less: Input::new(peripherals.GPIO19, button()),
        more: Input::new(peripherals.GPIO20, button()),
    };

    // Spawn LED Task zuerst: löscht den Strip vor allem anderen
    spawner
        .spawn(led_task(peripherals.GPIO5, peripherals.RMT))
        .unwrap();

    spawner.spawn(sensor_task(bus)).unwrap();
    spawner.spawn(timer_task(alerts.sender())).unwrap();
    spawner.spawn(settings_task(inputs, alerts.sender())).unwrap();
    spawner.spawn(display_task(bus)).unwrap();

    info!("PDT light box running");

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
