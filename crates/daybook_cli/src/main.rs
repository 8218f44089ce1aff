//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `daybook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use chrono::Datelike;
use daybook_core::grid_for;

fn main() {
    // Render the current month grid as a quick probe of the core wiring,
    // independently from the hosting UI runtime.
    let today = chrono::Local::now().date_naive();
    let grid = grid_for(today.month(), today.year());

    println!("daybook_core version={}", daybook_core::core_version());
    println!("grid for {}-{:02}", grid.year(), grid.month());
    for week in grid.weeks() {
        let row: Vec<String> = week
            .iter()
            .map(|day| {
                if grid.is_in_month(*day) {
                    format!("{:>3}", day.day())
                } else {
                    format!("{:>3}", ".")
                }
            })
            .collect();
        println!("{}", row.join(""));
    }
}
