use tracing::{debug, info, instrument, warn};

use crate::cycle::Cycle;
use crate::error::Result;
use crate::naming::scenario_name;
use crate::store::{ExistingScenario, ScenarioIdentity, ScenarioStore};
use crate::validation::ScenarioRequest;

/// Name, cycle and version assigned to a scenario that may be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioSlot {
    pub cycle: Cycle,
    pub version: u32,
    pub scenario_name: String,
}

/// Outcome of checking a request against the scenarios already stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Existence {
    /// An active scenario already holds this identity.
    Duplicate { cycle: Cycle },
    /// No active scenario holds this identity.
    Available(ScenarioSlot),
}

/// Version for a new scenario given the rows sharing its identity, or `None`
/// when one of them is still active.
///
/// The version is one more than the number of inactive rows. Gaps or
/// out-of-order versions among those rows are not taken into account.
pub fn next_version(existing: &[ExistingScenario]) -> Option<u32> {
    let (active, inactive): (Vec<&ExistingScenario>, Vec<&ExistingScenario>) =
        existing.iter().partition(|scenario| scenario.is_active);

    if !active.is_empty() {
        return None;
    }
    Some(inactive.len() as u32 + 1)
}

/// Decides whether `request` may be created and under which name.
#[instrument(skip(store))]
pub async fn check_existing<S: ScenarioStore + ?Sized>(
    store: &S,
    request: &ScenarioRequest,
) -> Result<Existence> {
    let cycle = Cycle::preceding(request.start)?;
    let identity = ScenarioIdentity {
        plan_type: request.plan_type,
        namc: request.namc.clone(),
        line: request.line.clone(),
        cycle: cycle.token(),
    };

    let existing = store.find_existing(&identity).await?;
    debug!(
        "{} scenarios share identity {:?}",
        existing.len(),
        identity
    );

    let Some(version) = next_version(&existing) else {
        warn!("Active scenario already exists for {:?}", identity);
        return Ok(Existence::Duplicate { cycle });
    };

    let slot = ScenarioSlot {
        scenario_name: scenario_name(
            request.plan_type,
            &request.namc,
            &request.line,
            &cycle,
            version,
        ),
        cycle,
        version,
    };
    info!("Assigned scenario name {}", slot.scenario_name);
    Ok(Existence::Available(slot))
}
