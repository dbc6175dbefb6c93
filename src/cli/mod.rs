//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{SalaryCap, SortField};

/// Input files and salary cap shared between commands
#[derive(Debug, Args)]
pub struct LineupInputs {
    /// Lineups JSON: an array of lineups, or `{"lineups": [...], "analytics": [...]}`.
    #[clap(long, short)]
    pub lineups: PathBuf,

    /// Analytics JSON array (replaces any analytics inside the lineups file).
    #[clap(long, short)]
    pub analytics: Option<PathBuf>,

    /// Salary cap (or set `DFS_SALARY_CAP` env var).
    #[clap(long, short)]
    pub cap: Option<SalaryCap>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Filter and sort lineups for display.
    ///
    /// Over-cap lineups are hidden unless `--show-over-cap` is given or the
    /// saved view shows them.
    Rank {
        #[clap(flatten)]
        inputs: LineupInputs,

        /// Sort field: proj | totalSalary | roi | winProb | dupRisk | leverageScore
        #[clap(long, short)]
        sort: Option<SortField>,

        /// Sort lowest-first instead of highest-first.
        #[clap(long)]
        asc: bool,

        /// Include lineups over the salary cap.
        #[clap(long, conflicts_with = "hide_over_cap")]
        show_over_cap: bool,

        /// Hide lineups over the salary cap even if the saved view shows them.
        #[clap(long)]
        hide_over_cap: bool,

        /// Saved view file (see `toggle-sort`); flags above override it.
        #[clap(long)]
        view: Option<PathBuf>,

        /// Only print the first N lineups.
        #[clap(long, short = 'n')]
        limit: Option<usize>,

        /// Output results as JSON instead of a text table.
        #[clap(long)]
        json: bool,
    },

    /// Apply a column click to a saved view: same field flips direction,
    /// a new field starts highest-first.
    ToggleSort {
        /// View file to update (created if missing).
        #[clap(long)]
        view: PathBuf,

        /// Field that was picked.
        field: SortField,

        /// Print the new view as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Export every lineup under the salary cap to CSV.
    Export {
        #[clap(flatten)]
        inputs: LineupInputs,

        /// Output file or directory (defaults to the downloads folder).
        #[clap(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "dfs-lineups", about = "DFS lineup ranking and export")]
pub struct DfsLineups {
    /// Log engine decisions to stderr (`RUST_LOG` takes precedence).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
