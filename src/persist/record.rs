//! Route file row schema
//!
//! One row per stop: `id,name,passengers,dist_to_next,time_to_next`.

use csv::StringRecord;

use crate::route::{Stop, StopDraft};

/// Column names of the header row, in file order
pub const HEADER: [&str; 5] = ["id", "name", "passengers", "dist_to_next", "time_to_next"];

/// Fields per row. Extra trailing fields are tolerated on load.
pub const FIELD_COUNT: usize = 5;

/// One data row of a route file, minus the advisory id column.
///
/// Identities in the file are never trusted: the route assigns fresh ones
/// at insertion, so a parsed row carries only what insertion needs.
#[derive(Debug, Clone, PartialEq)]
pub struct StopRecord {
    pub name: String,
    pub passengers: u32,
    pub dist_to_next: f64,
    pub time_to_next: f64,
}

impl StopRecord {
    /// Parse a CSV row, permissively.
    ///
    /// The id field (column 0) is ignored without validation. `None` when
    /// any of name, passengers, distance, or time is missing or fails to
    /// parse; such rows are skipped by the loader, not reported as errors.
    pub fn parse(row: &StringRecord) -> Option<Self> {
        if row.len() < FIELD_COUNT {
            return None;
        }
        let name = row.get(1)?;
        if name.is_empty() {
            return None;
        }
        let passengers = row.get(2)?.trim().parse().ok()?;
        let dist_to_next: f64 = row.get(3)?.trim().parse().ok()?;
        let time_to_next: f64 = row.get(4)?.trim().parse().ok()?;
        if !dist_to_next.is_finite() || !time_to_next.is_finite() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            passengers,
            dist_to_next,
            time_to_next,
        })
    }

    /// Format a stop as the five file columns, floats at fixed 6-decimal
    /// precision
    pub fn fields(stop: &Stop) -> [String; 5] {
        [
            stop.id.to_string(),
            stop.name.clone(),
            stop.passengers.to_string(),
            format!("{:.6}", stop.dist_to_next),
            format!("{:.6}", stop.time_to_next),
        ]
    }

    /// Convert into the insertion input the route expects
    pub fn into_draft(self) -> StopDraft {
        StopDraft::new(
            self.name,
            self.passengers,
            self.dist_to_next,
            self.time_to_next,
        )
    }
}
