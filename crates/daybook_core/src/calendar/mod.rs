//! Calendar month computation and navigation.
//!
//! # Responsibility
//! - Compute rectangular month grids spanning full calendar weeks.
//! - Track the month/year cursor driving which grid is rendered.
//!
//! # Invariants
//! - Grid rows are exactly 7 days wide and dates increase one day at a time.
//! - The navigation cursor is always a valid month/year pair.

pub mod grid;
pub mod navigation;
