//! Route file writer
//!
//! Serializes a route to the CSV schema, head-to-tail.

use std::fs::File;
use std::path::Path;

use crate::error::{Result, RouteError};
use crate::route::Route;

use super::record::{StopRecord, HEADER};

/// Write the route to `path`, replacing any existing file.
///
/// Refuses an empty route with [`RouteError::EmptyRoute`]; fails with
/// [`RouteError::Io`] when the destination cannot be created. The route is
/// never modified by saving.
pub fn save_route(route: &Route, path: &Path) -> Result<()> {
    if route.is_empty() {
        return Err(RouteError::EmptyRoute);
    }

    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(HEADER)?;
    for stop in route.iter() {
        writer.write_record(StopRecord::fields(stop))?;
    }
    writer.flush()?;

    tracing::info!(
        stops = route.len(),
        path = %path.display(),
        "route saved"
    );
    Ok(())
}
