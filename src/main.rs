//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use dfs_lineups::{
    cli::{Commands, DfsLineups},
    commands::{
        export::{handle_export, ExportParams},
        rank::{handle_rank, RankParams},
        toggle_sort::handle_toggle_sort,
    },
    Result,
};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose { "dfs_lineups=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(app: DfsLineups) -> Result<()> {
    match app.command {
        Commands::Rank {
            inputs,
            sort,
            asc,
            show_over_cap,
            hide_over_cap,
            view,
            limit,
            json,
        } => handle_rank(RankParams {
            lineups: inputs.lineups,
            analytics: inputs.analytics,
            cap: inputs.cap,
            sort,
            ascending: asc,
            show_over_cap: match (show_over_cap, hide_over_cap) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
            view,
            limit,
            as_json: json,
        })?,

        Commands::ToggleSort { view, field, json } => handle_toggle_sort(&view, field, json)?,

        Commands::Export { inputs, output } => handle_export(ExportParams {
            lineups: inputs.lineups,
            analytics: inputs.analytics,
            cap: inputs.cap,
            output,
        })?,
    }

    Ok(())
}

/// Run the CLI.
fn main() {
    let app = DfsLineups::parse();
    init_logging(app.verbose);

    if let Err(e) = run(app) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
