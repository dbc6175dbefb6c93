//! DFS Lineup Ranking & Export Library
//!
//! Ranks, filters and exports daily-fantasy-sports lineups that have already
//! been generated and scored upstream.
//!
//! ## Features
//!
//! - **Salary-cap filtering**: hide lineups whose total salary exceeds the cap
//! - **Metric sorting**: stable sorts by projection, salary, ROI, win
//!   probability, duplication risk or leverage, with column-toggle semantics
//! - **Stable analytics join**: analytics attach to lineups by id, so
//!   reordering a view never reassigns metrics
//! - **CSV export**: quoted, fixed-format rows for every under-cap lineup plus
//!   an audit footer counting the lineups left out
//!
//! ## Quick Start
//!
//! ```rust
//! use dfs_lineups::{
//!     core::{export_table, filter_and_sort},
//!     Lineup, LineupId, SalaryCap, SortField, ViewConfig,
//! };
//!
//! # fn example() -> dfs_lineups::Result<()> {
//! let lineups = vec![
//!     Lineup::new(LineupId::new(1), 50000, 145.2),
//!     Lineup::new(LineupId::new(2), 51000, 143.8),
//! ];
//! let cap = SalaryCap::new(50000);
//!
//! let view = ViewConfig::default().toggle_sort(SortField::TotalSalary);
//! let ranked = filter_and_sort(&lineups, &[], cap, &view);
//! assert_eq!(ranked.len(), 1);
//!
//! let table = export_table(&lineups, &[], cap)?;
//! assert!(table.to_csv()?.ends_with("\"excluded_over_cap:1\"\n"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Set the salary cap once instead of passing `--cap` to every command:
//! ```bash
//! export DFS_SALARY_CAP=50000
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use cli::types::{LineupId, SalaryCap, SortField, SortSpec, ViewConfig};
pub use error::{LineupError, Result};
pub use models::{Lineup, LineupAnalytics, LineupSet, PlayerSlot};

pub const SALARY_CAP_ENV_VAR: &str = "DFS_SALARY_CAP";
pub const MAX_LINEUPS_ENV_VAR: &str = "DFS_MAX_LINEUPS";

/// Row limit applied when `DFS_MAX_LINEUPS` is unset.
pub const DEFAULT_MAX_LINEUPS: usize = 50_000;
