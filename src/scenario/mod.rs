//! Seed-then-visit scenarios
//!
//! A scenario seeds the backing store with a fresh todo batch and then
//! visits the application so the seeded state renders. Scenarios can be
//! driven from code through [`ScenarioRunner`] or from YAML files through
//! [`run_scenario`].

mod config;
mod runner;

pub use config::{Scenario, TodoBatch};
pub use runner::{run_scenario, ScenarioReport, ScenarioRunner};
