pub mod tracing;

use std::io::Write;

use anyhow::Context;
use chrono::Utc;

use crate::aggregate::AggregationEngine;
use crate::config;
use crate::ingest::Snapshot;

/// Application entry point. Initializes tracing and configuration, aggregates
/// the configured snapshot and writes the dashboard as JSON to stdout.
pub fn run() -> anyhow::Result<()> {
    tracing::init_tracing();

    let settings = config::get_configuration().context("loading settings")?;
    ::tracing::info!("Loaded settings");

    let snapshot = Snapshot::from_path(&settings.snapshot_path).with_context(|| {
        format!("loading snapshot {}", settings.snapshot_path.display())
    })?;

    let engine = AggregationEngine::new(settings.limits, settings.local_zone);
    let views = engine.build_from_snapshot(&snapshot, Utc::now());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &views).context("writing dashboard")?;
    writeln!(out).context("writing dashboard")?;
    Ok(())
}
