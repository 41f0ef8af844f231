//! # Berlin Clock
//!
//! Renders a wall-clock time as the lamp rows of a Berlin Clock
//! (the *Mengenlehreuhr*).
//!
//! ## Core Concepts
//!
//! - **ClockTime**: A validated `hour:minute:second` triple. The only way to get
//!   one from text is the strict `HH:mm:ss` parser, so everything downstream can
//!   assume the value is in range.
//! - **Lamps and Rows**: Each row is a fixed-length sequence of `Lamp`s, each of
//!   which is `Yellow`, `Red` or `Off`.
//! - **ClockDisplay**: Five rows in fixed order: the seconds lamp, two hour rows
//!   and two minute rows.
//! - **Faces**: A `ClockFace` turns a `ClockTime` into text. `BerlinClock` is
//!   the face this crate ships.
//!
//! ## Example Usage
//!
//! ```rust
//! use berlinclock::prelude::*;
//!
//! let time: ClockTime = "13:17:01".parse()?;
//! let display = BerlinClock.render(&time);
//!
//! assert_eq!(display.hours_blocks().to_string(), "RROO");
//! assert_eq!(display.minutes_blocks().to_string(), "YYROOOOOOOO");
//!
//! // Or go straight from text to the rendered clock.
//! let converter: TimeConverter = TimeConverter::default();
//! assert!(converter.convert_time("25:61:00").is_err());
//! # Ok::<(), berlinclock::error::InvalidTimeFormat>(())
//! ```

pub const CLOCK_NAME: &str = "Berlin Clock";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod common;
pub mod config;
pub mod converter;
pub mod display;
pub mod error;
pub mod face;
pub mod time;

pub use face::render;

/// A prelude module for easy importing of the most common Berlin Clock types.
pub mod prelude {
    pub use crate::common::{Lamp, LampRow};
    pub use crate::config::{BerlinClockConfig, OutputStyle};
    pub use crate::converter::TimeConverter;
    pub use crate::display::{ClockDisplay, LINE_SEPARATOR};
    pub use crate::error::InvalidTimeFormat;
    pub use crate::face::{render, BerlinClock, ClockFace};
    pub use crate::time::ClockTime;
}
