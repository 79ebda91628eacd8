use crate::error::IotResult;
use crate::scenario::{Scenario, Settings};
use clap::Args;

/// Scenario inputs as command-line flags. Defaults match the classroom
/// reference setup.
#[derive(Args, Debug, Clone)]
pub struct ScenarioArgs {
    /// Number of sensors in the deployment (informational)
    #[arg(long, default_value_t = 100)]
    pub n_sensors: u32,
    /// Messages sent per sensor per day
    #[arg(long, default_value_t = 24)]
    pub msgs_per_day: u32,
    /// Application payload per message, in bytes
    #[arg(long, default_value_t = 50)]
    pub payload_bytes: u32,
    /// Downlink/ack airtime as a fraction of uplink airtime
    #[arg(long, default_value_t = 0.1)]
    pub rx_ratio: f64,
    /// Battery capacity per sensor
    #[arg(long = "battery-mah", default_value_t = 2400.0)]
    pub battery_mah: f64,
    /// Multiplier on protocol framing overhead (1 = nominal)
    #[arg(long, default_value_t = 1.0)]
    pub header_factor: f64,
}

impl Default for ScenarioArgs {
    fn default() -> Self {
        Self {
            n_sensors: 100,
            msgs_per_day: 24,
            payload_bytes: 50,
            rx_ratio: 0.1,
            battery_mah: 2400.0,
            header_factor: 1.0,
        }
    }
}

impl ScenarioArgs {
    /// Validates the flags at the boundary, before anything reaches the engine.
    pub fn resolve(&self) -> IotResult<(Scenario, Settings)> {
        let scenario = Scenario::build(
            self.n_sensors,
            self.msgs_per_day,
            self.payload_bytes,
            self.rx_ratio,
        )?;
        let settings = Settings::new(self.battery_mah, self.header_factor)?;
        Ok((scenario, settings))
    }
}
