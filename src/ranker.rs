use crate::catalog::ProtocolParams;
use crate::engine::{estimate, EstimationResult};
use crate::error::IotResult;
use crate::scenario::Scenario;
use serde::Serialize;

/// Estimates every protocol (catalog order) and returns the results sorted
/// ascending by daily consumption. The sort is stable, so equal consumptions
/// keep catalog order.
pub fn evaluate_all(
    protocols: &[ProtocolParams],
    scenario: &Scenario,
    battery_mah: f64,
    header_factor: f64,
) -> IotResult<Vec<EstimationResult>> {
    let mut results = protocols
        .iter()
        .map(|p| estimate(p, scenario, battery_mah, header_factor))
        .collect::<IotResult<Vec<_>>>()?;

    results.sort_by(|a, b| a.consumo_mah_dia.total_cmp(&b.consumo_mah_dia));
    Ok(results)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub best_energy: String,
    pub best_coverage: String,
    pub best_latency: String,
}

impl Summary {
    pub fn line(&self) -> String {
        format!(
            "Summary · Lowest consumption: {} · Best coverage: {} · Lowest latency: {}",
            self.best_energy, self.best_coverage, self.best_latency
        )
    }
}

/// Picks the superlative protocol per metric, scanning `results` in the
/// order given. Ties go to the first one encountered. `None` if empty.
pub fn summarize(results: &[EstimationResult]) -> Option<Summary> {
    Some(Summary {
        best_energy: first_best(results, |r| r.consumo_mah_dia, Goal::Min)?,
        best_coverage: first_best(results, |r| r.cobertura_m, Goal::Max)?,
        best_latency: first_best(results, |r| r.latencia_ms, Goal::Min)?,
    })
}

#[derive(Clone, Copy)]
enum Goal {
    Min,
    Max,
}

fn first_best<F>(results: &[EstimationResult], key: F, goal: Goal) -> Option<String>
where
    F: Fn(&EstimationResult) -> f64,
{
    let mut best: Option<&EstimationResult> = None;
    for r in results {
        let better = match best {
            None => true,
            Some(b) => match goal {
                Goal::Min => key(r) < key(b),
                Goal::Max => key(r) > key(b),
            },
        };
        if better {
            best = Some(r);
        }
    }
    best.map(|r| r.protocol.clone())
}
