//! JSON export of the full dashboard for an external renderer.

use crate::{resolve_range, DataArgs};
use anyhow::Context;
use bike_data::dashboard::Dashboard;
use log::info;
use std::path::Path;

/// Compute every chart summary for the interval and write it as pretty JSON.
pub fn run_export(data: &DataArgs, output: &Path) -> anyhow::Result<()> {
    let datasets = data.load()?;
    let range = resolve_range(&datasets, data.start, data.end)?;
    let dashboard = Dashboard::compute(&datasets, range);

    let json = serde_json::to_string_pretty(&dashboard)?;
    std::fs::write(output, json)
        .with_context(|| format!("Failed to write dashboard JSON to {}", output.display()))?;

    info!(
        "Exported {} days and {} season/weather groups to {}",
        dashboard.daily.len(),
        dashboard.categories.len(),
        output.display()
    );
    Ok(())
}
