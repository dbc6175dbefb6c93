//! CSV export of the lineups that fit under the salary cap.
//!
//! The export set is always recomputed from the full input: over-cap lineups
//! never reach the file, whatever the current view shows. The number left out
//! is written as an audit footer after the data rows.

use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io;
use tracing::debug;

use super::format::{to_fixed, to_percent};
use crate::{
    cli::types::{LineupId, SalaryCap},
    error::{LineupError, Result},
    models::{AnalyticsIndex, Lineup, LineupAnalytics, ROSTER_SLOTS},
};

/// Fixed header row of the export file.
pub const EXPORT_HEADER: [&str; 19] = [
    "Lineup",
    "Site",
    "Mode",
    "Projection",
    "Total Salary",
    "Win%",
    "Cash%",
    "ROI",
    "Dup Risk",
    "Leverage",
    ROSTER_SLOTS[0],
    ROSTER_SLOTS[1],
    ROSTER_SLOTS[2],
    ROSTER_SLOTS[3],
    ROSTER_SLOTS[4],
    ROSTER_SLOTS[5],
    ROSTER_SLOTS[6],
    ROSTER_SLOTS[7],
    ROSTER_SLOTS[8],
];

/// Token that opens the audit footer line.
pub const AUDIT_FOOTER_KEY: &str = "excluded_over_cap";

/// One exported lineup, already formatted cell by cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    pub lineup_id: LineupId,
    pub cells: Vec<String>,
}

impl ExportRow {
    fn build(rank: usize, lineup: &Lineup, analytics: Option<&LineupAnalytics>) -> Self {
        let empty = LineupAnalytics::empty(lineup.id);
        let a = analytics.unwrap_or(&empty);

        let mut cells = Vec::with_capacity(10 + ROSTER_SLOTS.len());
        cells.push(rank.to_string());
        cells.push(lineup.site.clone());
        cells.push(lineup.mode.clone());
        cells.push(to_fixed(lineup.proj, 1));
        cells.push(lineup.total_salary.to_string());
        cells.push(to_percent(a.win_prob, 2));
        cells.push(to_percent(a.min_cash_prob, 2));
        cells.push(to_percent(a.roi, 0));
        cells.push(to_percent(a.dup_risk, 0));
        cells.push(to_fixed(a.leverage_score, 1));
        cells.extend(
            lineup
                .slots
                .iter()
                .take(ROSTER_SLOTS.len())
                .map(|slot| slot.to_string()),
        );

        Self {
            lineup_id: lineup.id,
            cells,
        }
    }
}

/// The exportable rows plus the count of lineups left out for being over cap.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTable {
    rows: Vec<ExportRow>,
    excluded_count: usize,
}

impl ExportTable {
    pub fn rows(&self) -> &[ExportRow] {
        &self.rows
    }

    pub fn included_count(&self) -> usize {
        self.rows.len()
    }

    pub fn excluded_count(&self) -> usize {
        self.excluded_count
    }

    /// Audit line appended after the data rows, if anything was excluded.
    pub fn audit_footer(&self) -> Option<String> {
        (self.excluded_count > 0).then(|| format!("{}:{}", AUDIT_FOOTER_KEY, self.excluded_count))
    }

    /// Render the complete file in memory.
    ///
    /// Every cell is quoted and records end in `\n`. When lineups were
    /// excluded, a blank line and a one-cell footer follow the data so
    /// column-count-aware readers stop before it.
    pub fn to_csv(&self) -> Result<String> {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(b'\n'))
            .flexible(true)
            .from_writer(Vec::new());

        writer.write_record(EXPORT_HEADER)?;
        for row in &self.rows {
            writer.write_record(&row.cells)?;
        }

        let bytes = writer.into_inner()?;
        let mut out =
            String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        if let Some(footer) = self.audit_footer() {
            out.push('\n');
            out.push_str(&format!("\"{footer}\"\n"));
        }

        Ok(out)
    }
}

/// Collect every under-cap lineup, in input order, into an export table.
///
/// Fails with [`LineupError::NoExportableRows`] rather than producing a file
/// with no data.
pub fn export_table(
    lineups: &[Lineup],
    analytics: &[LineupAnalytics],
    cap: SalaryCap,
) -> Result<ExportTable> {
    let index = AnalyticsIndex::build(analytics);

    let rows: Vec<ExportRow> = lineups
        .iter()
        .filter(|lineup| cap.allows(lineup.total_salary))
        .enumerate()
        .map(|(position, lineup)| ExportRow::build(position + 1, lineup, index.get(lineup.id)))
        .collect();

    let excluded_count = lineups.len() - rows.len();
    debug!(
        included = rows.len(),
        excluded = excluded_count,
        cap = cap.as_u32(),
        "built export table"
    );

    if rows.is_empty() {
        return Err(LineupError::NoExportableRows {
            total: lineups.len(),
        });
    }

    Ok(ExportTable {
        rows,
        excluded_count,
    })
}

/// Suggested file name for an export made on `date`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("dfs_lineups_{}.csv", date.format("%Y-%m-%d"))
}
