use crate::catalog::Catalog;
use crate::engine::EstimationResult;
use crate::error::{IotError, IotResult};
use crate::ranker::{evaluate_all, summarize, Summary};
use crate::scenario::{Scenario, Settings};
use serde::Serialize;

/// Outcome of one evaluation pass. Owned by the caller; nothing is cached
/// between calls.
#[derive(Serialize, Debug, Clone)]
pub struct Comparison {
    pub scenario: Scenario,
    pub settings: Settings,
    /// Sorted ascending by daily consumption.
    pub results: Vec<EstimationResult>,
    pub summary: Summary,
}

/// Service: evaluate every catalog protocol, sort, and summarize.
pub fn compare(catalog: &Catalog, scenario: Scenario, settings: Settings) -> IotResult<Comparison> {
    let results = evaluate_all(
        catalog.protocols(),
        &scenario,
        settings.battery_mah(),
        settings.header_factor(),
    )?;
    let summary = summarize(&results)
        .ok_or_else(|| IotError::InvalidCatalog("catalog is empty".to_string()))?;

    Ok(Comparison {
        scenario,
        settings,
        results,
        summary,
    })
}
