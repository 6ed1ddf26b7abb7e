//! Route file reader
//!
//! Deserializes a route file into the current route, destructively.

use std::fs::File;
use std::path::Path;

use crate::error::{Result, RouteError};
use crate::route::Route;

use super::record::StopRecord;

/// What a load actually did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows parsed and inserted, in file order
    pub loaded: usize,

    /// Rows that failed schema validation and were skipped
    pub skipped: usize,
}

/// Replace the route's contents with the stops in the file at `path`.
///
/// Opening happens first: an [`RouteError::Io`] here leaves the route
/// untouched. From the moment the file opens the current route is cleared,
/// before any row is validated — a headerless or garbage file still costs
/// the previous contents. The first row is skipped unconditionally as the
/// header; every later row either parses into a stop (appended in file
/// order, fresh identity) or is skipped and counted. A file with no rows at
/// all is [`RouteError::MissingHeader`].
pub fn load_route(route: &mut Route, path: &Path) -> Result<LoadReport> {
    let file = File::open(path)?;

    // Point of no return: the old route is gone whatever the file holds.
    if !route.is_empty() {
        tracing::warn!(
            discarded = route.len(),
            path = %path.display(),
            "clearing current route before load"
        );
    }
    route.clear();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows = reader.records();
    match rows.next() {
        Some(_header) => {
            // Skipped unconditionally, readable or not.
        }
        None => return Err(RouteError::MissingHeader),
    }

    let mut report = LoadReport {
        loaded: 0,
        skipped: 0,
    };
    for (row_no, row) in rows.enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                tracing::debug!(row = row_no + 2, %err, "unreadable row skipped");
                report.skipped += 1;
                continue;
            }
        };
        match StopRecord::parse(&row) {
            Some(record) => {
                route.insert_end(record.into_draft());
                report.loaded += 1;
            }
            None => {
                tracing::debug!(row = row_no + 2, "malformed row skipped");
                report.skipped += 1;
            }
        }
    }

    tracing::info!(
        loaded = report.loaded,
        skipped = report.skipped,
        path = %path.display(),
        "route loaded"
    );
    Ok(report)
}
