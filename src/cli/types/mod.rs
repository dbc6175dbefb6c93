//! Type-safe wrappers for lineup ids, salary caps and view state.

pub mod ids;
pub mod sort;
pub mod view;

pub use ids::{LineupId, SalaryCap};
pub use sort::{SortField, SortSpec};
pub use view::ViewConfig;
