//! Salary-cap filtering and metric sorting for lineup views.

use serde::Serialize;
use tracing::debug;

use crate::{
    cli::types::{SalaryCap, SortField, ViewConfig},
    models::{AnalyticsIndex, Lineup, LineupAnalytics},
};

/// A lineup as it appears in a ranked view.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedLineup<'a> {
    pub lineup: &'a Lineup,
    /// Position of the lineup in the unfiltered input.
    pub original_index: usize,
    /// Analytics joined by the lineup's id, if the provider sent any.
    pub analytics: Option<&'a LineupAnalytics>,
}

impl RankedLineup<'_> {
    pub fn sort_value(&self, field: SortField) -> f64 {
        sort_value(self.lineup, self.analytics, field)
    }

    pub fn is_over_cap(&self, cap: SalaryCap) -> bool {
        !cap.allows(self.lineup.total_salary)
    }
}

/// Counts the display layer shows alongside a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSummary {
    pub total: usize,
    pub visible: usize,
    pub over_cap: usize,
}

/// Value of `field` for a lineup; missing analytics read as 0.
pub fn sort_value(lineup: &Lineup, analytics: Option<&LineupAnalytics>, field: SortField) -> f64 {
    let value = match field {
        SortField::Proj => lineup.proj,
        SortField::TotalSalary => lineup.total_salary as f64,
        analytic => analytics.map(|a| a.metric(analytic)).unwrap_or(0.0),
    };
    // Fold -0.0 into 0.0 so signed zeros compare equal and keep input order.
    value + 0.0
}

/// Build the ordered view of `lineups` described by `view`.
///
/// Over-cap lineups are dropped unless the view shows them. The rest are
/// stable-sorted by the view's sort field, so lineups with equal values keep
/// their input order.
pub fn filter_and_sort<'a>(
    lineups: &'a [Lineup],
    analytics: &'a [LineupAnalytics],
    cap: SalaryCap,
    view: &ViewConfig,
) -> Vec<RankedLineup<'a>> {
    let index = AnalyticsIndex::build(analytics);
    let field = view.sort.field;

    let mut keyed: Vec<(f64, RankedLineup<'a>)> = lineups
        .iter()
        .enumerate()
        .filter(|(_, lineup)| view.show_over_cap || cap.allows(lineup.total_salary))
        .map(|(original_index, lineup)| {
            let ranked = RankedLineup {
                lineup,
                original_index,
                analytics: index.get(lineup.id),
            };
            (ranked.sort_value(field), ranked)
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let ordering = a.total_cmp(b);
        if view.sort.descending {
            ordering.reverse()
        } else {
            ordering
        }
    });

    debug!(
        total = lineups.len(),
        visible = keyed.len(),
        joined = index.len(),
        sort = %field,
        direction = view.sort.direction_label(),
        "ranked lineup view"
    );

    keyed.into_iter().map(|(_, ranked)| ranked).collect()
}

/// Summarize a ranked view against the full input.
pub fn summarize(lineups: &[Lineup], cap: SalaryCap, view: &[RankedLineup<'_>]) -> ViewSummary {
    ViewSummary {
        total: lineups.len(),
        visible: view.len(),
        over_cap: lineups
            .iter()
            .filter(|l| !cap.allows(l.total_salary))
            .count(),
    }
}
