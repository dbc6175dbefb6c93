//! Sort keys and sort state for the lineup grid.

use crate::error::{LineupError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Metric a lineup view can be ordered by.
///
/// `Proj` and `TotalSalary` come straight from the lineup; the rest are
/// resolved through the lineup's analytics record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Proj,
    TotalSalary,
    Roi,
    WinProb,
    DupRisk,
    LeverageScore,
}

impl SortField {
    pub const ALL: [SortField; 6] = [
        SortField::Proj,
        SortField::TotalSalary,
        SortField::Roi,
        SortField::WinProb,
        SortField::DupRisk,
        SortField::LeverageScore,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Proj => "proj",
            SortField::TotalSalary => "totalSalary",
            SortField::Roi => "roi",
            SortField::WinProb => "winProb",
            SortField::DupRisk => "dupRisk",
            SortField::LeverageScore => "leverageScore",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortField {
    type Err = LineupError;

    /// Accepts the camelCase key as well as snake/kebab spellings
    /// (`totalSalary`, `total_salary`, `total-salary`).
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "proj" | "projection" => Ok(SortField::Proj),
            "totalsalary" | "salary" => Ok(SortField::TotalSalary),
            "roi" => Ok(SortField::Roi),
            "winprob" => Ok(SortField::WinProb),
            "duprisk" => Ok(SortField::DupRisk),
            "leveragescore" | "leverage" => Ok(SortField::LeverageScore),
            _ => Err(LineupError::InvalidSortField {
                field: s.to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for SortField {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Current sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub descending: bool,
}

impl SortSpec {
    pub fn new(field: SortField, descending: bool) -> Self {
        Self { field, descending }
    }

    /// Next sort state after the user picks `field`.
    ///
    /// Picking the active column flips its direction; picking a different
    /// column always starts highest-first.
    ///
    /// ```rust
    /// use dfs_lineups::{SortField, SortSpec};
    ///
    /// let spec = SortSpec::default().toggle(SortField::Roi);
    /// assert_eq!(spec, SortSpec::new(SortField::Roi, true));
    /// assert_eq!(spec.toggle(SortField::Roi), SortSpec::new(SortField::Roi, false));
    /// ```
    pub fn toggle(self, field: SortField) -> Self {
        if field == self.field {
            Self {
                field,
                descending: !self.descending,
            }
        } else {
            Self {
                field,
                descending: true,
            }
        }
    }

    pub fn direction_label(&self) -> &'static str {
        if self.descending {
            "desc"
        } else {
            "asc"
        }
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::Proj,
            descending: true,
        }
    }
}
