//! Solution summaries for downstream reporting.
//!
//! - [`summarize`] — Per-vehicle routes and distances plus the fleet total
//! - [`SolutionReport`] — Immutable, serializable summary with a text rendering

mod summary;

pub use summary::{summarize, SolutionReport, VehicleSummary};
