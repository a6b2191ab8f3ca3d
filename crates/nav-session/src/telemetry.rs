//! Navigation telemetry recording and CSV export.
//!
//! Every node arrival — manual step, auto tick, or live snap — appends one
//! record.  The log lives in the session for its lifetime and can be dumped
//! to CSV for offline analysis of walking patterns.

use std::path::Path;

use serde::Serialize;

use nav_core::Tick;

/// One recorded node arrival.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TelemetryRecord {
    /// External code of the node that was reached.
    pub node: String,
    /// Floor of that node.
    pub floor: i16,
    /// Logical tick at which the arrival was observed.
    pub tick: Tick,
}

/// Write `records` to a CSV file at `path`, header row included.
pub fn export_csv(path: &Path, records: &[TelemetryRecord]) -> crate::SessionResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
