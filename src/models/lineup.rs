//! Lineup and roster slot models.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use crate::cli::types::LineupId;

/// Positional roster slots, in the order lineups list their players.
pub const ROSTER_SLOTS: [&str; 9] = [
    "QB", "RB1", "RB2", "WR1", "WR2", "WR3", "TE", "FLEX", "DST",
];

/// Numbers from lineup generators arrive as numbers, numeric strings or not at all.
/// Anything unusable counts as zero.
fn de_lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0),
        _ => 0.0,
    })
}

fn de_lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    // Round fractions up so a salary just over the cap stays over it.
    // Saturating cast: negatives become 0, oversized salaries stay over any cap.
    Ok(de_lenient_f64(deserializer)?.ceil() as u32)
}

/// One player occupying a roster slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSlot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub team: String,
}

impl PlayerSlot {
    pub fn new(name: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
        }
    }
}

impl fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.team)
    }
}

/// Lineup as produced by the upstream generator.
///
/// The `id` is optional here: batches generated before ids existed are
/// identified by their 1-based position when the batch is loaded.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupInput {
    #[serde(default)]
    pub id: Option<LineupId>,
    #[serde(default, deserialize_with = "de_lenient_u32")]
    pub total_salary: u32,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub proj: f64,
    #[serde(default)]
    pub site: String,
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub slots: Vec<PlayerSlot>,
}

impl LineupInput {
    /// Attach a stable id, falling back to the lineup's batch position.
    pub fn into_lineup(self, index: usize) -> Lineup {
        Lineup {
            id: self.id.unwrap_or_else(|| LineupId::from_position(index)),
            total_salary: self.total_salary,
            proj: self.proj,
            site: self.site,
            mode: self.mode,
            slots: self.slots,
        }
    }
}

/// A proposed roster with its total cost and point projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lineup {
    pub id: LineupId,
    pub total_salary: u32,
    pub proj: f64,
    pub site: String,
    pub mode: String,
    pub slots: Vec<PlayerSlot>,
}

impl Lineup {
    pub fn new(id: LineupId, total_salary: u32, proj: f64) -> Self {
        Self {
            id,
            total_salary,
            proj,
            site: String::new(),
            mode: String::new(),
            slots: Vec::new(),
        }
    }

    pub fn with_contest(mut self, site: impl Into<String>, mode: impl Into<String>) -> Self {
        self.site = site.into();
        self.mode = mode.into();
        self
    }

    pub fn with_slots(mut self, slots: Vec<PlayerSlot>) -> Self {
        self.slots = slots;
        self
    }
}
