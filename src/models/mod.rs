//! Data models for lineups, analytics and validated lineup batches.

pub mod analytics;
pub mod lineup;

pub use analytics::{AnalyticsIndex, LineupAnalytics};
pub use lineup::{Lineup, LineupInput, PlayerSlot, ROSTER_SLOTS};

use std::collections::HashSet;

use crate::{
    error::{LineupError, Result},
    DEFAULT_MAX_LINEUPS,
};

/// A validated batch of lineups together with their analytics.
///
/// Every lineup carries a unique id and the batch never exceeds the
/// configured row limit.
#[derive(Debug, Clone, Default)]
pub struct LineupSet {
    lineups: Vec<Lineup>,
    analytics: Vec<LineupAnalytics>,
}

impl LineupSet {
    pub fn new(lineups: Vec<Lineup>, analytics: Vec<LineupAnalytics>) -> Result<Self> {
        Self::with_limit(lineups, analytics, DEFAULT_MAX_LINEUPS)
    }

    pub fn with_limit(
        lineups: Vec<Lineup>,
        analytics: Vec<LineupAnalytics>,
        max_lineups: usize,
    ) -> Result<Self> {
        if lineups.len() > max_lineups {
            return Err(LineupError::TooManyLineups {
                count: lineups.len(),
                max: max_lineups,
            });
        }

        let mut seen = HashSet::with_capacity(lineups.len());
        for lineup in &lineups {
            if !seen.insert(lineup.id) {
                return Err(LineupError::DuplicateLineupId { id: lineup.id });
            }
        }

        Ok(Self { lineups, analytics })
    }

    /// Build a batch from generator output, assigning positional ids where missing.
    pub fn from_inputs(
        inputs: Vec<LineupInput>,
        analytics: Vec<LineupAnalytics>,
        max_lineups: usize,
    ) -> Result<Self> {
        if inputs.len() > max_lineups {
            return Err(LineupError::TooManyLineups {
                count: inputs.len(),
                max: max_lineups,
            });
        }
        let lineups = inputs
            .into_iter()
            .enumerate()
            .map(|(index, input)| input.into_lineup(index))
            .collect();
        Self::with_limit(lineups, analytics, max_lineups)
    }

    pub fn lineups(&self) -> &[Lineup] {
        &self.lineups
    }

    pub fn analytics(&self) -> &[LineupAnalytics] {
        &self.analytics
    }

    pub fn len(&self) -> usize {
        self.lineups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lineups.is_empty()
    }
}
