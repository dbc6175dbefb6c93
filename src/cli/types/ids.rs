//! ID and money types for DFS lineups.

use crate::error::{LineupError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier carried by every lineup.
///
/// Analytics are joined to lineups through this id, never through the
/// position a lineup happens to occupy in a filtered or sorted view.
///
/// # Examples
///
/// ```rust
/// use dfs_lineups::LineupId;
///
/// let id = LineupId::new(7);
/// assert_eq!(id.as_u32(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LineupId(pub u32);

impl LineupId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Id assigned to the lineup at `index` in a freshly generated batch.
    ///
    /// Matches the 1-based convention analytics providers key their records by.
    pub fn from_position(index: usize) -> Self {
        Self(index as u32 + 1)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for LineupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maximum total salary a valid lineup may carry.
///
/// ```rust
/// use dfs_lineups::SalaryCap;
///
/// let cap: SalaryCap = "50000".parse().unwrap();
/// assert!(cap.allows(50000));
/// assert!(!cap.allows(50001));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SalaryCap(pub u32);

impl SalaryCap {
    pub fn new(cap: u32) -> Self {
        Self(cap)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// True when `total_salary` fits under the cap (inclusive).
    pub fn allows(&self, total_salary: u32) -> bool {
        total_salary <= self.0
    }
}

impl fmt::Display for SalaryCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SalaryCap {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}
