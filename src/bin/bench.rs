//! Benchmark for model construction and solve time.
//!
//! Run with: cargo run --release --bin bench

use std::time::Instant;

use shift_scheduling::config::AdvisorOverride;
use shift_scheduling::demo_data::{self, DemoData};
use shift_scheduling::orchestrator::generate;

fn main() {
    for demo in [DemoData::Small, DemoData::Large] {
        let instance = demo_data::generate(demo);
        println!("Benchmark: {}", demo.as_str());
        println!("  Employees: {}", instance.employees.len());
        println!("  Locations: {}", instance.locations.len());
        println!("  Shifts per day: {}", instance.shifts.len());

        let overrides = AdvisorOverride::default();
        let start = Instant::now();
        let result = generate(
            &instance.employees,
            &instance.locations,
            &instance.shifts,
            Some(&overrides),
        );
        let elapsed = start.elapsed();

        match result {
            Ok(envelope) => {
                println!(
                    "  Status: {} ({:?}), assignments: {}",
                    envelope.status,
                    elapsed,
                    envelope.schedule.len()
                );
            }
            Err(err) => println!("  Failed: {err} ({elapsed:?})"),
        }
        println!();
    }
}
