//! Clock faces: the strategies that turn a `ClockTime` into text.

use crate::common::{Lamp, LampRow};
use crate::display::{
    ClockDisplay, HOURS_BLOCK_LAMPS, HOURS_UNIT_LAMPS, MINUTES_BLOCK_LAMPS, MINUTES_UNIT_LAMPS,
    SECONDS_LAMPS,
};
use crate::time::ClockTime;
use tracing::trace;

const UNITS_PER_BLOCK: u8 = 5;
/// Every third minute block marks a quarter hour.
const QUARTER_HOUR_BLOCK: usize = 3;

/// Something that can show a time of day.
pub trait ClockFace {
    /// Returns the time as it reads on this face.
    fn read_time(&self, time: &ClockTime) -> String;
}

/// The Berlin Clock (Mengenlehreuhr) face.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BerlinClock;

impl BerlinClock {
    /// Computes the lamp state for every row of the clock.
    pub fn render(&self, time: &ClockTime) -> ClockDisplay {
        trace!(%time, "rendering berlin clock");
        render(time.hour(), time.minute(), time.second())
    }
}

impl ClockFace for BerlinClock {
    fn read_time(&self, time: &ClockTime) -> String {
        self.render(time).to_string()
    }
}

/// Renders `hour:minute:second` on a Berlin Clock.
///
/// The fields must already be in their 24-hour ranges; passing anything else
/// is a caller bug and trips an assertion in debug builds. Use
/// [`ClockTime`]'s parser or [`ClockTime::new`] to validate untrusted input.
pub fn render(hour: u8, minute: u8, second: u8) -> ClockDisplay {
    debug_assert!(hour < 24 && minute < 60 && second < 60);
    ClockDisplay::new(
        seconds_row(second),
        hours_blocks_row(hour),
        hours_units_row(hour),
        minutes_blocks_row(minute),
        minutes_units_row(minute),
    )
}

fn seconds_row(second: u8) -> LampRow {
    let lit = usize::from(second % 2 == 0);
    LampRow::filled(Lamp::Yellow, lit, SECONDS_LAMPS)
}

fn hours_blocks_row(hour: u8) -> LampRow {
    LampRow::filled(Lamp::Red, usize::from(hour / UNITS_PER_BLOCK), HOURS_BLOCK_LAMPS)
}

fn hours_units_row(hour: u8) -> LampRow {
    LampRow::filled(Lamp::Red, usize::from(hour % UNITS_PER_BLOCK), HOURS_UNIT_LAMPS)
}

fn minutes_blocks_row(minute: u8) -> LampRow {
    let blocks = usize::from(minute / UNITS_PER_BLOCK);
    (1..=MINUTES_BLOCK_LAMPS)
        .map(|i| match i {
            i if i > blocks => Lamp::Off,
            i if i % QUARTER_HOUR_BLOCK == 0 => Lamp::Red,
            _ => Lamp::Yellow,
        })
        .collect()
}

fn minutes_units_row(minute: u8) -> LampRow {
    LampRow::filled(
        Lamp::Yellow,
        usize::from(minute % UNITS_PER_BLOCK),
        MINUTES_UNIT_LAMPS,
    )
}
