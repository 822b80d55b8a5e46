//! Bildschirm-Layouts für das 16x2 Textdisplay
//!
//! Ein Screen besteht aus Fragmenten (Zeile, Spalte, Text). Der Text wird
//! in `heapless::String<16>` gebaut und bei Überlänge abgeschnitten.

use core::fmt::{self, Write};

use heapless::{String, Vec};

use crate::state::Session;
use crate::traits::{DisplayError, TextDisplay};

/// Spalten pro Zeile
pub const COLUMNS: usize = 16;

pub type Line = String<COLUMNS>;

/// Text an fester Position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub row: u8,
    pub col: u8,
    pub text: Line,
}

/// Kompletter Bildschirminhalt
pub type Screen = Vec<Fragment, 4>;

struct Truncating<'a>(&'a mut Line);

impl Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

fn fragment(row: u8, col: u8, args: fmt::Arguments<'_>) -> Fragment {
    let mut text = Line::new();
    // Truncating schreibt nie einen Fehler
    let _ = Truncating(&mut text).write_fmt(args);
    Fragment { row, col, text }
}

fn screen<const N: usize>(fragments: [Fragment; N]) -> Screen {
    let mut screen = Screen::new();
    for f in fragments {
        // N ist höchstens 4
        let _ = screen.push(f);
    }
    screen
}

/// Konfigurationsmenü: Farben, Dauer, berechnete LED-Leistung
pub fn configuring_screen(session: &Session) -> Screen {
    let c = session.color;
    screen([
        fragment(0, 0, format_args!("R{}", c.r)),
        fragment(0, 6, format_args!("G{}", c.g)),
        fragment(0, 12, format_args!("B{}", c.b)),
        fragment(
            1,
            0,
            format_args!(
                "T:{}min P:{:.1}W",
                session.config.duration_minutes,
                session.configured_power()
            ),
        ),
    ])
}

/// Betriebsanzeige: Lux, Restzeit, momentane Bestrahlungsstärke
pub fn treating_screen(session: &Session) -> Screen {
    screen([
        fragment(
            0,
            0,
            format_args!(
                "{} lx T:{}'",
                session.reading.measured_lux, session.timer.remaining_minutes
            ),
        ),
        fragment(
            1,
            0,
            format_args!("{:.2} mW/cm2", session.reading.instant_irradiance),
        ),
    ])
}

pub fn finished_banner() -> Screen {
    screen([fragment(0, 0, format_args!("Finished."))])
}

/// Abschlussanzeige: letzte Bestrahlungsstärke und Fluenz
pub fn summary_screen(session: &Session) -> Screen {
    screen([
        fragment(
            0,
            0,
            format_args!("Av:{:.2}mW/cm2", session.reading.final_irradiance),
        ),
        fragment(1, 0, format_args!("Acc:{:.2}J/cm2", session.fluence())),
    ])
}

/// Löscht das Display und schreibt alle Fragmente
pub fn render_screen<T: TextDisplay>(display: &mut T, screen: &Screen) -> Result<(), DisplayError> {
    display.clear()?;
    for f in screen {
        display.render(f.row, f.col, &f.text)?;
    }
    Ok(())
}
