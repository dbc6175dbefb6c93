//! Export command implementation

use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::common::CommandContext;
use crate::{
    cli::types::SalaryCap,
    core::{
        export_table,
        io::{resolve_export_path, write_string},
    },
    LineupSet, Result,
};

/// Parameters for the export command
#[derive(Debug)]
pub struct ExportParams {
    pub lineups: PathBuf,
    pub analytics: Option<PathBuf>,
    pub cap: Option<SalaryCap>,
    pub output: Option<PathBuf>,
}

/// What an export wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub path: PathBuf,
    pub included: usize,
    pub excluded: usize,
}

/// Build the CSV for `set` and write it under `output`.
///
/// The file is rendered completely before anything touches disk, so a batch
/// with no exportable lineups leaves no file behind.
pub fn write_export(
    set: &LineupSet,
    cap: SalaryCap,
    output: Option<&Path>,
    date: NaiveDate,
) -> Result<ExportOutcome> {
    let table = export_table(set.lineups(), set.analytics(), cap)?;
    let csv = table.to_csv()?;

    let path = resolve_export_path(output, date);
    write_string(&path, &csv)?;

    Ok(ExportOutcome {
        path,
        included: table.included_count(),
        excluded: table.excluded_count(),
    })
}

/// Handle the export command
pub fn handle_export(params: ExportParams) -> Result<()> {
    let ctx = CommandContext::load(
        &params.lineups,
        params.analytics.as_deref(),
        params.cap,
    )?;

    let outcome = write_export(
        &ctx.set,
        ctx.cap,
        params.output.as_deref(),
        Local::now().date_naive(),
    )?;

    if outcome.excluded > 0 {
        warn!(
            excluded = outcome.excluded,
            cap = ctx.cap.as_u32(),
            "over-cap lineups left out of export"
        );
    }
    info!(path = %outcome.path.display(), rows = outcome.included, "export written");

    // tarpaulin::skip - console output
    println!(
        "✓ Exported {} lineups to {}",
        outcome.included,
        outcome.path.display()
    );
    if outcome.excluded > 0 {
        println!("  {} over-cap lineups excluded", outcome.excluded); // tarpaulin::skip
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::LineupError, Lineup, LineupId};
    use tempfile::tempdir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 2).unwrap()
    }

    fn set(salaries: &[u32]) -> LineupSet {
        let lineups = salaries
            .iter()
            .enumerate()
            .map(|(i, s)| Lineup::new(LineupId::from_position(i), *s, 100.0))
            .collect();
        LineupSet::new(lineups, Vec::new()).unwrap()
    }

    #[test]
    fn test_write_export_into_directory() {
        let dir = tempdir().unwrap();
        let outcome = write_export(
            &set(&[50000, 51000, 42000]),
            SalaryCap::new(50000),
            Some(dir.path()),
            date(),
        )
        .unwrap();

        assert_eq!(outcome.path, dir.path().join("dfs_lineups_2025-11-02.csv"));
        assert_eq!(outcome.included, 2);
        assert_eq!(outcome.excluded, 1);

        let written = std::fs::read_to_string(&outcome.path).unwrap();
        assert!(written.starts_with("\"Lineup\",\"Site\""));
        assert!(written.ends_with("\n\"excluded_over_cap:1\"\n"));
    }

    #[test]
    fn test_no_exportable_rows_writes_nothing() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("out.csv");
        let result = write_export(
            &set(&[60000]),
            SalaryCap::new(50000),
            Some(&target),
            date(),
        );

        assert!(matches!(
            result,
            Err(LineupError::NoExportableRows { total: 1 })
        ));
        assert!(!target.exists());
    }
}
