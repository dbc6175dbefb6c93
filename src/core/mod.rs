//! Core lineup engine
//!
//! - `ranking`: salary-cap filtering and stable metric sorting for views
//! - `export`: CSV export of under-cap lineups with an audit footer
//! - `format`: fixed-decimal number formatting shared by exports
//! - `io`: file helpers for inputs and export artifacts

pub mod export;
pub mod format;
pub mod io;
pub mod ranking;

// Re-export commonly used items for convenience
pub use export::{export_filename, export_table, ExportRow, ExportTable, EXPORT_HEADER};
pub use ranking::{filter_and_sort, summarize, RankedLineup, ViewSummary};
