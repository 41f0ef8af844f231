//! Parse-then-render: reads `HH:mm:ss` text and shows it on a clock face.

use crate::error::InvalidTimeFormat;
use crate::face::{BerlinClock, ClockFace};
use crate::time::ClockTime;
use tracing::debug;

/// Converts textual times into the reading of a given `ClockFace`.
///
/// Input is validated before the face is consulted; a rejected input never
/// reaches the renderer.
#[derive(Debug, Clone, Default)]
pub struct TimeConverter<F = BerlinClock> {
    face: F,
}

impl<F: ClockFace> TimeConverter<F> {
    pub fn new(face: F) -> Self {
        Self { face }
    }

    pub fn face(&self) -> &F {
        &self.face
    }

    /// Converts `input` (24-hour `HH:mm:ss`) into this converter's clock face.
    pub fn convert_time(&self, input: &str) -> Result<String, InvalidTimeFormat> {
        let time = input.parse::<ClockTime>().map_err(|err| {
            debug!(input, "rejected time input");
            err
        })?;
        Ok(self.face.read_time(&time))
    }
}
