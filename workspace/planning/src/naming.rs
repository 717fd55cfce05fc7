use model::entities::scenario::PlanType;

use crate::cycle::Cycle;

/// Builds the unique scenario name `{type}/{NAMC}/{line}_{cycle}_V{version}`.
///
/// Only the NAMC is upper-cased; the line is kept as submitted.
pub fn scenario_name(
    plan_type: PlanType,
    namc: &str,
    line: &str,
    cycle: &Cycle,
    version: u32,
) -> String {
    format!(
        "{}/{}/{}_{}_V{}",
        plan_type,
        namc.to_uppercase(),
        line,
        cycle,
        version
    )
}
