//! Input loading shared by the rank and export commands.

use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

use super::{max_lineups, resolve_salary_cap};
use crate::{
    cli::types::{SalaryCap, ViewConfig},
    core::io::{read_to_string, try_read_to_string, write_string},
    models::{LineupAnalytics, LineupInput, LineupSet},
    Result,
};

/// Lineups file holding both collections.
#[derive(Debug, Deserialize)]
struct LineupBundle {
    lineups: Vec<LineupInput>,
    #[serde(default)]
    analytics: Vec<LineupAnalytics>,
}

/// Parse a lineups file: either a bare array of lineups or a bundle object.
pub fn parse_lineups_json(text: &str) -> Result<(Vec<LineupInput>, Vec<LineupAnalytics>)> {
    let value: Value = serde_json::from_str(text)?;
    if value.is_array() {
        Ok((serde_json::from_value(value)?, Vec::new()))
    } else {
        let bundle: LineupBundle = serde_json::from_value(value)?;
        Ok((bundle.lineups, bundle.analytics))
    }
}

/// Load and validate a lineup batch from disk.
///
/// Analytics from `analytics_path` replace any embedded in the lineups file.
pub fn load_lineup_set(
    lineups_path: &Path,
    analytics_path: Option<&Path>,
    max_lineups: usize,
) -> Result<LineupSet> {
    let (inputs, mut analytics) = parse_lineups_json(&read_to_string(lineups_path)?)?;

    if let Some(path) = analytics_path {
        analytics = serde_json::from_str(&read_to_string(path)?)?;
    }

    debug!(
        path = %lineups_path.display(),
        lineups = inputs.len(),
        analytics = analytics.len(),
        "parsed lineup inputs"
    );

    LineupSet::from_inputs(inputs, analytics, max_lineups)
}

/// Load a saved view, or the default view if the file does not exist yet.
pub fn load_view(path: &Path) -> Result<ViewConfig> {
    match try_read_to_string(path) {
        Some(text) => Ok(serde_json::from_str(&text)?),
        None => Ok(ViewConfig::default()),
    }
}

/// Persist a view for the next invocation.
pub fn save_view(path: &Path, view: &ViewConfig) -> Result<()> {
    write_string(path, &serde_json::to_string_pretty(view)?)?;
    Ok(())
}

/// Context containing the resources every lineup command needs
pub struct CommandContext {
    pub set: LineupSet,
    pub cap: SalaryCap,
}

impl CommandContext {
    /// Resolve the salary cap and load the lineup batch
    pub fn load(
        lineups_path: &Path,
        analytics_path: Option<&Path>,
        cap: Option<SalaryCap>,
    ) -> Result<Self> {
        let cap = resolve_salary_cap(cap)?;
        let set = load_lineup_set(lineups_path, analytics_path, max_lineups())?;

        info!(
            lineups = set.len(),
            analytics = set.analytics().len(),
            cap = cap.as_u32(),
            "loaded lineup batch"
        );

        Ok(Self { set, cap })
    }
}
