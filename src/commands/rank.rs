//! Rank command implementation

use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::info;

use super::common::{load_view, CommandContext};
use crate::{
    cli::types::{SalaryCap, SortField, SortSpec, ViewConfig},
    core::{
        filter_and_sort,
        format::{to_fixed, to_percent},
        summarize, RankedLineup, ViewSummary,
    },
    LineupAnalytics, Result,
};

/// Parameters for the rank command
#[derive(Debug)]
pub struct RankParams {
    pub lineups: PathBuf,
    pub analytics: Option<PathBuf>,
    pub cap: Option<SalaryCap>,
    pub sort: Option<SortField>,
    pub ascending: bool,
    /// `Some` overrides the saved view's over-cap visibility.
    pub show_over_cap: Option<bool>,
    pub view: Option<PathBuf>,
    pub limit: Option<usize>,
    pub as_json: bool,
}

/// JSON payload printed by `rank --json`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankReport<'a> {
    pub view: ViewConfig,
    pub cap: SalaryCap,
    pub summary: ViewSummary,
    pub lineups: &'a [RankedLineup<'a>],
}

/// Combine a saved view with command-line overrides.
pub fn resolve_view(
    saved: ViewConfig,
    sort: Option<SortField>,
    ascending: bool,
    show_over_cap: Option<bool>,
) -> ViewConfig {
    let mut view = saved;
    if let Some(field) = sort {
        view.sort = SortSpec::new(field, !ascending);
    } else if ascending {
        view.sort.descending = false;
    }
    if let Some(show) = show_over_cap {
        view.show_over_cap = show;
    }
    view
}

/// Render a ranked view as a fixed-width text table.
pub fn render_table(
    ranked: &[RankedLineup<'_>],
    cap: SalaryCap,
    summary: &ViewSummary,
    view: &ViewConfig,
) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Sorted by {} ({}), cap {}",
        view.sort.field,
        view.sort.direction_label(),
        cap
    );
    let _ = writeln!(
        out,
        "{:<5} {:<6} {:>7} {:>8} {:>7} {:>7} {:>5} {:>5} {:>6}  Players",
        "#", "Id", "Proj", "Salary", "Win%", "Cash%", "ROI", "Dup", "Lev"
    );

    for (position, entry) in ranked.iter().enumerate() {
        let lineup = entry.lineup;
        let a = entry
            .analytics
            .cloned()
            .unwrap_or_else(|| LineupAnalytics::empty(lineup.id));
        let salary = if entry.is_over_cap(cap) {
            format!("{}*", lineup.total_salary)
        } else {
            lineup.total_salary.to_string()
        };
        let players = lineup
            .slots
            .iter()
            .map(|slot| slot.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let _ = writeln!(
            out,
            "{:<5} {:<6} {:>7} {:>8} {:>7} {:>7} {:>5} {:>5} {:>6}  {}",
            position + 1,
            lineup.id.as_u32(),
            to_fixed(lineup.proj, 1),
            salary,
            to_percent(a.win_prob, 2),
            to_percent(a.min_cash_prob, 2),
            to_percent(a.roi, 0),
            to_percent(a.dup_risk, 0),
            to_fixed(a.leverage_score, 1),
            players
        );
    }

    if ranked.len() < summary.visible {
        let _ = writeln!(out, "Showing {} of {} lineups", ranked.len(), summary.visible);
    }
    if view.show_over_cap {
        if summary.over_cap > 0 {
            let _ = writeln!(out, "* over the salary cap ({} lineups)", summary.over_cap);
        }
    } else if summary.over_cap > 0 {
        let _ = writeln!(
            out,
            "{} over-cap lineups hidden (use --show-over-cap)",
            summary.over_cap
        );
    }

    out
}

/// Handle the rank command
pub fn handle_rank(params: RankParams) -> Result<()> {
    let ctx = CommandContext::load(
        &params.lineups,
        params.analytics.as_deref(),
        params.cap,
    )?;

    let saved = match &params.view {
        Some(path) => load_view(path)?,
        None => ViewConfig::default(),
    };
    let view = resolve_view(saved, params.sort, params.ascending, params.show_over_cap);

    let ranked = filter_and_sort(ctx.set.lineups(), ctx.set.analytics(), ctx.cap, &view);
    let summary = summarize(ctx.set.lineups(), ctx.cap, &ranked);
    let shown = &ranked[..params.limit.unwrap_or(ranked.len()).min(ranked.len())];

    info!(
        visible = summary.visible,
        over_cap = summary.over_cap,
        shown = shown.len(),
        "rank complete"
    );

    if params.as_json {
        let report = RankReport {
            view,
            cap: ctx.cap,
            summary,
            lineups: shown,
        };
        println!("{}", serde_json::to_string_pretty(&report)?); // tarpaulin::skip
    } else {
        print!("{}", render_table(shown, ctx.cap, &summary, &view)); // tarpaulin::skip
    }

    Ok(())
}
