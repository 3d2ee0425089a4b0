//! Two-week shift assignment optimizer.
//!
//! Given a roster of employees, a set of locations, and a daily shift
//! template, [`orchestrator::generate`] computes an assignment of employees
//! to (day, location, shift) cells satisfying coverage, capacity,
//! non-overlap and weekly-volume constraints, subject to a max-min fairness
//! objective, and derives a statistics package from the result.

pub mod advisor;
pub mod api;
pub mod config;
pub mod demo_data;
pub mod domain;
pub mod error;
pub mod extract;
pub mod model;
pub mod normalize;
pub mod orchestrator;
pub mod solver;
pub mod stats;

pub use error::CoreError;
pub use orchestrator::generate;
