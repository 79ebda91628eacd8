use crate::reports;
use clap::Args;
use iotcompare::catalog::Catalog;
use iotcompare::config::ScenarioArgs;
use iotcompare::engine::estimate_detailed;
use iotcompare::error::{IotError, IotResult};

#[derive(Args, Debug, Clone)]
pub struct ExplainArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    #[arg(short, long)]
    pub protocol: String,
}

pub fn run(args: ExplainArgs, catalog: &Catalog) -> IotResult<()> {
    let (scenario, settings) = args.scenario.resolve()?;
    let proto = catalog.find(&args.protocol).ok_or_else(|| {
        let known: Vec<&str> = catalog.protocols().iter().map(|p| &*p.name).collect();
        IotError::InvalidCatalog(format!(
            "unknown protocol '{}' (known: {})",
            args.protocol,
            known.join(", ")
        ))
    })?;

    let breakdown = estimate_detailed(
        proto,
        &scenario,
        settings.battery_mah(),
        settings.header_factor(),
    )?;

    println!("\n🔎 === ESTIMATE BREAKDOWN: {} === 🔎", proto.name);
    reports::print_breakdown(proto, &breakdown);
    Ok(())
}
