use crate::reports;
use clap::Args;
use iotcompare::api;
use iotcompare::catalog::Catalog;
use iotcompare::config::ScenarioArgs;
use iotcompare::error::IotResult;
use iotcompare::export::{self, CSV_FILE_NAME};
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Write the results table as CSV
    #[arg(short, long, num_args = 0..=1, default_missing_value = CSV_FILE_NAME)]
    pub export: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub no_charts: bool,

    /// Print the comparison as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: CompareArgs, catalog: &Catalog) -> IotResult<()> {
    let (scenario, settings) = args.scenario.resolve()?;
    let comparison = api::compare(catalog, scenario, settings)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        println!(
            "\n📡 === PROTOCOL COMPARISON: {} sensors, {} msg/day, {} B payload === 📡",
            scenario.n_sensors(),
            scenario.msgs_per_day(),
            scenario.payload_bytes()
        );
        reports::print_results(&comparison.results);

        if !args.no_charts {
            reports::print_charts(&comparison.results);
        }

        println!("\n{}", comparison.summary.line());
    }

    if let Some(path) = args.export {
        export::write_csv(&path, &comparison.results)?;
    }
    Ok(())
}
