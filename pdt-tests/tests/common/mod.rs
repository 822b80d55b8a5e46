//! Mock-Hardware für die Integration Tests
//!
//! Jeder Mock zeichnet seine Aufrufe auf, damit Tests den kompletten
//! Verlauf prüfen können. Geteilte Aufzeichnungen liegen hinter
//! `Arc<Mutex<..>>`, weil die Mocks in die Task-Logik verschoben werden.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use embedded_hal_async::delay::DelayNs;
use pdt_core::{
    Alert, Axis, BeepPattern, DisplayError, InputPanel, LedError, LedStrip, LightSensor,
    SensorError, TextDisplay, TouchPad,
};
use rgb::RGB8;

/// Nicht berührte Touch-Fläche
pub const RELEASED: u16 = 4095;

/// Sicher berührte Touch-Fläche
pub const PRESSED: u16 = 5;

// ============================================================================
// Zeitquelle
// ============================================================================

/// Simulierte Zeit: jede Pause zählt nur mit und gibt einmal ab
#[derive(Clone, Default)]
pub struct MockDelay {
    elapsed_ms: Arc<AtomicU64>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms.load(Ordering::SeqCst)
    }
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ms.fetch_add(ns as u64 / 1_000_000, Ordering::SeqCst);
        futures_lite::future::yield_now().await;
    }

    async fn delay_us(&mut self, us: u32) {
        self.elapsed_ms.fetch_add(us as u64 / 1_000, Ordering::SeqCst);
        futures_lite::future::yield_now().await;
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.elapsed_ms.fetch_add(ms as u64, Ordering::SeqCst);
        futures_lite::future::yield_now().await;
    }
}

/// Gibt `n` mal an den Executor ab
pub async fn yield_times(n: usize) {
    for _ in 0..n {
        futures_lite::future::yield_now().await;
    }
}

// ============================================================================
// LED Strip
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum StripCall {
    SetPixel { index: usize, color: RGB8 },
    Show,
}

#[derive(Clone)]
pub struct MockStrip {
    pub calls: Arc<Mutex<Vec<StripCall>>>,
    pixels: usize,
    /// Dieser Pixel meldet immer `WriteFailed`
    pub broken_pixel: Option<usize>,
}

impl MockStrip {
    pub fn new(pixels: usize) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            pixels,
            broken_pixel: None,
        }
    }

    pub fn calls(&self) -> Vec<StripCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn pixel_writes(&self, color: RGB8) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, StripCall::SetPixel { color: written, .. } if *written == color))
            .count()
    }
}

impl LedStrip for MockStrip {
    fn pixel_count(&self) -> usize {
        self.pixels
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), LedError> {
        if index >= self.pixels || self.broken_pixel == Some(index) {
            return Err(LedError::WriteFailed);
        }
        self.calls
            .lock()
            .unwrap()
            .push(StripCall::SetPixel { index, color });
        Ok(())
    }

    fn show(&mut self) -> Result<(), LedError> {
        self.calls.lock().unwrap().push(StripCall::Show);
        Ok(())
    }
}

// ============================================================================
// Display + Sensor am gemeinsamen Bus
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum BusCall {
    Clear,
    Render { row: u8, col: u8, text: String },
    Sample,
}

/// Display und Lichtsensor hinter einem Bus, wie auf der Platine
pub struct MockBus {
    pub calls: Vec<BusCall>,
    pub lux: VecDeque<Result<u32, SensorError>>,
    pub fail_render: bool,
}

impl MockBus {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            lux: VecDeque::new(),
            fail_render: false,
        }
    }

    pub fn with_lux(samples: &[Result<u32, SensorError>]) -> Self {
        let mut bus = Self::new();
        bus.lux = samples.iter().copied().collect();
        bus
    }

    /// Alle gerenderten Texte in Reihenfolge
    pub fn texts(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                BusCall::Render { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl TextDisplay for MockBus {
    fn clear(&mut self) -> Result<(), DisplayError> {
        if self.fail_render {
            return Err(DisplayError::Bus);
        }
        self.calls.push(BusCall::Clear);
        Ok(())
    }

    fn render(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        if self.fail_render {
            return Err(DisplayError::Bus);
        }
        self.calls.push(BusCall::Render {
            row,
            col,
            text: text.to_string(),
        });
        Ok(())
    }
}

impl LightSensor for MockBus {
    fn sample_lux(&mut self) -> Result<u32, SensorError> {
        self.calls.push(BusCall::Sample);
        self.lux.pop_front().unwrap_or(Ok(0))
    }
}

/// Bus, der überlappende Zugriffe erkennt (für Thread-Tests)
#[derive(Default)]
pub struct OverlapProbe {
    busy: AtomicBool,
    pub overlaps: AtomicUsize,
    pub accesses: AtomicUsize,
}

impl OverlapProbe {
    fn enter_and_leave(&self) {
        if self.busy.swap(true, Ordering::SeqCst) {
            self.overlaps.fetch_add(1, Ordering::SeqCst);
        }
        std::thread::sleep(Duration::from_micros(50));
        self.accesses.fetch_add(1, Ordering::SeqCst);
        self.busy.store(false, Ordering::SeqCst);
    }
}

impl TextDisplay for OverlapProbe {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.enter_and_leave();
        Ok(())
    }

    fn render(&mut self, _row: u8, _col: u8, _text: &str) -> Result<(), DisplayError> {
        self.enter_and_leave();
        Ok(())
    }
}

impl LightSensor for OverlapProbe {
    fn sample_lux(&mut self) -> Result<u32, SensorError> {
        self.enter_and_leave();
        Ok(100)
    }
}

// ============================================================================
// Eingänge
// ============================================================================

/// Skriptbare Potentiometer und Touch-Flächen
///
/// Touch-Werte werden pro Abfrage aus der Queue genommen, eine leere
/// Queue bedeutet "nicht berührt".
#[derive(Default)]
pub struct MockInputs {
    pub axes: [i32; 3],
    pub start: VecDeque<u16>,
    pub less: VecDeque<u16>,
    pub more: VecDeque<u16>,
}

impl MockInputs {
    pub fn with_axes(red: i32, green: i32, blue: i32) -> Self {
        Self {
            axes: [red, green, blue],
            ..Self::default()
        }
    }

    pub fn script_start(mut self, values: &[u16]) -> Self {
        self.start = values.iter().copied().collect();
        self
    }

    pub fn script_more(mut self, values: &[u16]) -> Self {
        self.more = values.iter().copied().collect();
        self
    }

    pub fn script_less(mut self, values: &[u16]) -> Self {
        self.less = values.iter().copied().collect();
        self
    }
}

impl InputPanel for MockInputs {
    fn read_axis(&mut self, axis: Axis) -> i32 {
        match axis {
            Axis::Red => self.axes[0],
            Axis::Green => self.axes[1],
            Axis::Blue => self.axes[2],
        }
    }

    fn read_touch(&mut self, pad: TouchPad) -> u16 {
        let queue = match pad {
            TouchPad::Start => &mut self.start,
            TouchPad::Less => &mut self.less,
            TouchPad::More => &mut self.more,
        };
        queue.pop_front().unwrap_or(RELEASED)
    }
}

// ============================================================================
// Alarm
// ============================================================================

#[derive(Clone, Default)]
pub struct MockAlert {
    pub sounded: Arc<Mutex<Vec<BeepPattern>>>,
}

impl MockAlert {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn patterns(&self) -> Vec<BeepPattern> {
        self.sounded.lock().unwrap().clone()
    }
}

impl Alert for MockAlert {
    fn sound(&mut self, pattern: BeepPattern) {
        self.sounded.lock().unwrap().push(pattern);
    }
}
