//! View models for the dashboard regions
//!
//! Each region is owned by exactly one component. Updating a view never
//! performs I/O, and applying the same snapshot twice leaves it unchanged.

pub mod documents;
pub mod scan;
pub mod stats;

pub use documents::{DocumentTable, Severity, TableRow, render_documents};
pub use scan::ScanPanel;
pub use stats::{StatsPanel, render_stats};
