//! Telemetry log — append-only record of processed move events
//!
//! Every processed move event produces one [`Sample`] correlating physical
//! and visual position, pressure, and timing. Samples are appended in event
//! order from the single dispatch path, so `relative_ms` is non-decreasing
//! by construction. Numeric fields are rounded to their documented precision
//! at log time, not at export time, so the in-memory record and the CSV
//! agree exactly.

use std::time::Instant;

use crate::error::{Result, VisuomotorError};
use crate::types::{ExperimentMode, Point};

/// CSV header, fixed field order
pub const CSV_HEADER: &str = "timestamp,relativeTime,mode,strokeId,realX,realY,drawX,drawY,pressure";

/// Decimal places kept for position fields
const POSITION_DECIMALS: i32 = 2;
/// Decimal places kept for pressure
const PRESSURE_DECIMALS: i32 = 3;
/// Decimal places kept for relative time in milliseconds
const RELATIVE_TIME_DECIMALS: i32 = 3;

/// Round to a fixed number of decimal places
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// One logged record for a single move event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Wall-clock timestamp, unix milliseconds
    pub timestamp_ms: i64,
    /// Monotonic milliseconds since log creation
    pub relative_ms: f64,
    /// Experiment mode active when the event was processed
    pub mode: ExperimentMode,
    /// Stroke this sample belongs to
    pub stroke_id: u64,
    /// Physical (raw input) position
    pub real: Point,
    /// Visual (rendered) position
    pub draw: Point,
    /// Contact pressure in [0, 1]
    pub pressure: f64,
}

impl Sample {
    /// Serialize as one CSV row in the fixed field order
    fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{}",
            self.timestamp_ms,
            self.relative_ms,
            self.mode.as_str(),
            self.stroke_id,
            self.real.x,
            self.real.y,
            self.draw.x,
            self.draw.y,
            self.pressure
        )
    }
}

/// Append-only ordered sequence of logged samples
#[derive(Debug)]
pub struct TelemetryLog {
    samples: Vec<Sample>,
    /// Monotonic epoch for `relative_ms`; survives `clear`
    epoch: Instant,
}

impl Default for TelemetryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryLog {
    /// Create an empty log; the monotonic epoch starts now
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
            epoch: Instant::now(),
        }
    }

    /// Number of logged samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the log holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// All samples in append order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Append one sample, stamping wall-clock and monotonic time
    ///
    /// Positions and pressure are rounded here to their fixed precision.
    /// O(1) amortized, never fails.
    pub fn append(
        &mut self,
        mode: ExperimentMode,
        stroke_id: u64,
        real: Point,
        draw: Point,
        pressure: f64,
    ) {
        let relative_ms = self.epoch.elapsed().as_secs_f64() * 1000.0;
        self.samples.push(Sample {
            timestamp_ms: chrono::Utc::now().timestamp_millis(),
            relative_ms: round_to(relative_ms, RELATIVE_TIME_DECIMALS),
            mode,
            stroke_id,
            real: Point::new(
                round_to(real.x, POSITION_DECIMALS),
                round_to(real.y, POSITION_DECIMALS),
            ),
            draw: Point::new(
                round_to(draw.x, POSITION_DECIMALS),
                round_to(draw.y, POSITION_DECIMALS),
            ),
            pressure: round_to(pressure, PRESSURE_DECIMALS),
        });
    }

    /// Discard all samples unconditionally
    ///
    /// The monotonic epoch is kept, matching the reference behavior where
    /// relative time counts from application start.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Serialize the log as CSV (header + one row per sample)
    ///
    /// Deterministic given the log contents. Fails with
    /// [`VisuomotorError::EmptyLog`] when there is nothing to export.
    pub fn export_csv(&self) -> Result<String> {
        if self.samples.is_empty() {
            return Err(VisuomotorError::EmptyLog);
        }

        let mut csv = String::with_capacity(CSV_HEADER.len() + 1 + self.samples.len() * 64);
        csv.push_str(CSV_HEADER);
        csv.push('\n');
        for sample in &self.samples {
            csv.push_str(&sample.to_csv_row());
            csv.push('\n');
        }
        Ok(csv)
    }
}
