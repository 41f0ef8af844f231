//! The five-row output of a Berlin Clock face.

use crate::common::{Lamp, LampRow};
use crate::config::OutputStyle;
use colored::{ColoredString, Colorize};
use std::fmt;

/// The platform's line separator, used between rows.
pub const LINE_SEPARATOR: &str = if cfg!(windows) { "\r\n" } else { "\n" };

pub const SECONDS_LAMPS: usize = 1;
pub const HOURS_BLOCK_LAMPS: usize = 4;
pub const HOURS_UNIT_LAMPS: usize = 4;
pub const MINUTES_BLOCK_LAMPS: usize = 11;
pub const MINUTES_UNIT_LAMPS: usize = 4;

/// A rendered clock: the seconds lamp, two hour rows and two minute rows.
///
/// `Display` gives the canonical form: each row's symbols, rows joined by
/// [`LINE_SEPARATOR`], no trailing separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClockDisplay {
    seconds: LampRow,
    hours_blocks: LampRow,
    hours_units: LampRow,
    minutes_blocks: LampRow,
    minutes_units: LampRow,
}

impl ClockDisplay {
    pub(crate) fn new(
        seconds: LampRow,
        hours_blocks: LampRow,
        hours_units: LampRow,
        minutes_blocks: LampRow,
        minutes_units: LampRow,
    ) -> Self {
        debug_assert_eq!(seconds.len(), SECONDS_LAMPS);
        debug_assert_eq!(hours_blocks.len(), HOURS_BLOCK_LAMPS);
        debug_assert_eq!(hours_units.len(), HOURS_UNIT_LAMPS);
        debug_assert_eq!(minutes_blocks.len(), MINUTES_BLOCK_LAMPS);
        debug_assert_eq!(minutes_units.len(), MINUTES_UNIT_LAMPS);
        Self {
            seconds,
            hours_blocks,
            hours_units,
            minutes_blocks,
            minutes_units,
        }
    }

    /// The single blinking lamp on top.
    pub fn seconds(&self) -> &LampRow {
        &self.seconds
    }

    /// Four lamps, one per full block of five hours.
    pub fn hours_blocks(&self) -> &LampRow {
        &self.hours_blocks
    }

    /// Four lamps, one per hour past the last five-hour block.
    pub fn hours_units(&self) -> &LampRow {
        &self.hours_units
    }

    /// Eleven lamps, one per full block of five minutes.
    pub fn minutes_blocks(&self) -> &LampRow {
        &self.minutes_blocks
    }

    /// Four lamps, one per minute past the last five-minute block.
    pub fn minutes_units(&self) -> &LampRow {
        &self.minutes_units
    }

    /// All five rows, top to bottom.
    pub fn rows(&self) -> [&LampRow; 5] {
        [
            &self.seconds,
            &self.hours_blocks,
            &self.hours_units,
            &self.minutes_blocks,
            &self.minutes_units,
        ]
    }

    /// Renders the display for a terminal, painting each lamp in its colour.
    ///
    /// Row layout and separators are the same as the plain `Display` output.
    pub fn to_colored_string(&self) -> String {
        self.rows()
            .iter()
            .map(|row| {
                row.lamps()
                    .iter()
                    .map(|&lamp| paint(lamp).to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join(LINE_SEPARATOR)
    }

    /// Renders the display in the given terminal style.
    pub fn render_styled(&self, style: OutputStyle) -> String {
        match style {
            OutputStyle::Colored => self.to_colored_string(),
            OutputStyle::Plain => self.to_string(),
        }
    }
}

fn paint(lamp: Lamp) -> ColoredString {
    let symbol = lamp.symbol().to_string();
    match lamp {
        Lamp::Yellow => symbol.yellow().bold(),
        Lamp::Red => symbol.red().bold(),
        Lamp::Off => symbol.dimmed(),
    }
}

impl fmt::Display for ClockDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                f.write_str(LINE_SEPARATOR)?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}
