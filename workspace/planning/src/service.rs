use common::CreateScenarioResponse;
use tracing::{debug, info, instrument, trace, warn};

use crate::error::Result;
use crate::existence::{check_existing, Existence};
use crate::store::ScenarioStore;
use crate::validation::{RawScenarioRequest, ValidationMessages, DUPLICATE_SCENARIO_MESSAGE};
use crate::writer::write_scenario;

/// Validates a create-scenario request body and persists the scenario.
///
/// Field validation and the duplicate check contribute to one deduplicated
/// list of messages; if it is non-empty the call fails with
/// [`PlanningError::Validation`](crate::PlanningError::Validation) and nothing
/// is written. The duplicate check needs a structurally valid request, so it
/// only runs once every field passed.
#[instrument(skip(store, body), fields(body_len = body.len()))]
pub async fn create_scenario<S: ScenarioStore + ?Sized>(
    store: &S,
    body: &[u8],
) -> Result<CreateScenarioResponse> {
    trace!("Entering create_scenario function");
    let raw = RawScenarioRequest::from_slice(body)?;

    let mut messages = ValidationMessages::new();
    let accepted = match raw.into_request() {
        Ok(request) => match check_existing(store, &request).await? {
            Existence::Available(slot) => Some((request, slot)),
            Existence::Duplicate { cycle } => {
                debug!("Duplicate scenario for cycle {}", cycle);
                messages.push(DUPLICATE_SCENARIO_MESSAGE);
                None
            }
        },
        Err(field_messages) => {
            messages.extend(field_messages);
            None
        }
    };

    let (request, slot) = match accepted {
        Some(accepted) if messages.is_empty() => accepted,
        _ => {
            warn!("Rejecting scenario with {} validation errors", messages.len());
            return Err(messages.into_error());
        }
    };

    let created = write_scenario(store, &request, &slot).await?;
    info!("Successfully created scenario {}", created.scenario_name);
    Ok(CreateScenarioResponse::created())
}
