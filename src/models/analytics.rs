//! Per-lineup analytics and the id-keyed lookup used to join them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::cli::types::{LineupId, SortField};

/// Simulated contest metrics for one lineup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupAnalytics {
    pub lineup_id: LineupId,
    #[serde(default)]
    pub win_prob: f64,
    #[serde(default)]
    pub min_cash_prob: f64,
    #[serde(default)]
    pub roi: f64,
    #[serde(default)]
    pub dup_risk: f64,
    #[serde(default)]
    pub leverage_score: f64,
}

impl LineupAnalytics {
    /// All-zero record for `lineup_id`.
    pub fn empty(lineup_id: LineupId) -> Self {
        Self {
            lineup_id,
            win_prob: 0.0,
            min_cash_prob: 0.0,
            roi: 0.0,
            dup_risk: 0.0,
            leverage_score: 0.0,
        }
    }

    /// Value of an analytics-backed sort field; lineup-native fields read as 0.
    pub fn metric(&self, field: SortField) -> f64 {
        match field {
            SortField::Roi => self.roi,
            SortField::WinProb => self.win_prob,
            SortField::DupRisk => self.dup_risk,
            SortField::LeverageScore => self.leverage_score,
            SortField::Proj | SortField::TotalSalary => 0.0,
        }
    }
}

/// Analytics records keyed by lineup id. The first record for an id wins.
#[derive(Debug, Default)]
pub struct AnalyticsIndex<'a> {
    by_id: HashMap<LineupId, &'a LineupAnalytics>,
}

impl<'a> AnalyticsIndex<'a> {
    pub fn build(analytics: &'a [LineupAnalytics]) -> Self {
        let mut by_id = HashMap::with_capacity(analytics.len());
        for record in analytics {
            by_id.entry(record.lineup_id).or_insert(record);
        }
        Self { by_id }
    }

    pub fn get(&self, id: LineupId) -> Option<&'a LineupAnalytics> {
        self.by_id.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, roi: f64) -> LineupAnalytics {
        LineupAnalytics {
            roi,
            ..LineupAnalytics::empty(LineupId::new(id))
        }
    }

    #[test]
    fn test_analytics_deserialize_defaults() {
        let a: LineupAnalytics =
            serde_json::from_str(r#"{"lineupId": 3, "winProb": 0.012}"#).unwrap();
        assert_eq!(a.lineup_id, LineupId::new(3));
        assert_eq!(a.win_prob, 0.012);
        assert_eq!(a.roi, 0.0);
        assert_eq!(a.leverage_score, 0.0);
    }

    #[test]
    fn test_metric_by_field() {
        let a = LineupAnalytics {
            lineup_id: LineupId::new(1),
            win_prob: 0.1,
            min_cash_prob: 0.2,
            roi: 0.3,
            dup_risk: 0.4,
            leverage_score: -1.5,
        };
        assert_eq!(a.metric(SortField::WinProb), 0.1);
        assert_eq!(a.metric(SortField::Roi), 0.3);
        assert_eq!(a.metric(SortField::DupRisk), 0.4);
        assert_eq!(a.metric(SortField::LeverageScore), -1.5);
        assert_eq!(a.metric(SortField::Proj), 0.0);
    }

    #[test]
    fn test_index_first_record_wins() {
        let records = vec![record(1, 0.5), record(2, 0.1), record(1, 0.9)];
        let index = AnalyticsIndex::build(&records);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get(LineupId::new(1)).unwrap().roi, 0.5);
        assert!(index.get(LineupId::new(3)).is_none());
    }
}
