//! Scenario creation for supply planning.
//!
//! A scenario is identified by its plan type, NAMC, line and cycle, where the
//! cycle is the month before the scenario's start. Only one scenario per
//! identity may be active; re-creating a scenario after the previous ones were
//! deactivated assigns the next version number.

pub mod cycle;
pub mod error;
pub mod existence;
pub mod naming;
pub mod period;
pub mod service;
pub mod store;
pub mod validation;
pub mod writer;

#[cfg(test)]
pub(crate) mod testing;

pub use cycle::Cycle;
pub use error::{PlanningError, Result};
pub use existence::{check_existing, next_version, Existence, ScenarioSlot};
pub use naming::scenario_name;
pub use service::create_scenario;
pub use store::{DatabaseStore, ScenarioStore};
pub use validation::{RawScenarioRequest, ScenarioRequest};
