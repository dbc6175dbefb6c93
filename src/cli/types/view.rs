//! View configuration held by the display layer between renders.

use serde::{Deserialize, Serialize};

use super::sort::{SortField, SortSpec};

/// Sort and visibility settings for one lineup view.
///
/// Passed explicitly into the ranking pipeline so the same view can be
/// replayed server-side or persisted between CLI invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewConfig {
    #[serde(default)]
    pub sort: SortSpec,
    /// Show lineups whose salary exceeds the cap.
    #[serde(default)]
    pub show_over_cap: bool,
}

impl ViewConfig {
    pub fn new(sort: SortSpec, show_over_cap: bool) -> Self {
        Self {
            sort,
            show_over_cap,
        }
    }

    pub fn toggle_sort(self, field: SortField) -> Self {
        Self {
            sort: self.sort.toggle(field),
            ..self
        }
    }
}
