use crate::error::{IotError, IotResult};
use serde::Serialize;
use std::ops::RangeInclusive;

pub const N_SENSORS_RANGE: RangeInclusive<u32> = 1..=10_000;
pub const MSGS_PER_DAY_RANGE: RangeInclusive<u32> = 1..=10_000;
pub const PAYLOAD_BYTES_RANGE: RangeInclusive<u32> = 1..=1024;
pub const RX_RATIO_RANGE: RangeInclusive<f64> = 0.0..=1.0;

pub const BATTERY_MAH_RANGE: RangeInclusive<f64> = 10.0..=20_000.0;
pub const HEADER_FACTOR_RANGE: RangeInclusive<f64> = 0.5..=3.0;

/// Traffic pattern of one sensor. Only constructible through [`Scenario::build`],
/// so every value seen by the engine is in-domain.
///
/// `n_sensors` is carried for reporting; the estimate is per sensor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scenario {
    n_sensors: u32,
    msgs_per_day: u32,
    payload_bytes: u32,
    rx_ratio: f64,
}

impl Scenario {
    pub fn build(
        n_sensors: u32,
        msgs_per_day: u32,
        payload_bytes: u32,
        rx_ratio: f64,
    ) -> IotResult<Self> {
        check_int("n_sensors", n_sensors, &N_SENSORS_RANGE)?;
        check_int("msgs_per_day", msgs_per_day, &MSGS_PER_DAY_RANGE)?;
        check_int("payload_bytes", payload_bytes, &PAYLOAD_BYTES_RANGE)?;
        if !RX_RATIO_RANGE.contains(&rx_ratio) {
            return Err(IotError::InvalidScenario {
                field: "rx_ratio",
                value: rx_ratio,
                min: *RX_RATIO_RANGE.start(),
                max: *RX_RATIO_RANGE.end(),
            });
        }

        Ok(Self {
            n_sensors,
            msgs_per_day,
            payload_bytes,
            rx_ratio,
        })
    }

    pub fn n_sensors(&self) -> u32 {
        self.n_sensors
    }

    pub fn msgs_per_day(&self) -> u32 {
        self.msgs_per_day
    }

    pub fn payload_bytes(&self) -> u32 {
        self.payload_bytes
    }

    pub fn rx_ratio(&self) -> f64 {
        self.rx_ratio
    }
}

fn check_int(field: &'static str, value: u32, range: &RangeInclusive<u32>) -> IotResult<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(IotError::InvalidScenario {
            field,
            value: value as f64,
            min: *range.start() as f64,
            max: *range.end() as f64,
        })
    }
}

/// The two per-evaluation scalars that sit beside the scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Settings {
    battery_mah: f64,
    header_factor: f64,
}

impl Settings {
    pub fn new(battery_mah: f64, header_factor: f64) -> IotResult<Self> {
        for (field, value, range) in [
            ("battery_mAh", battery_mah, &BATTERY_MAH_RANGE),
            ("header_factor", header_factor, &HEADER_FACTOR_RANGE),
        ] {
            if !range.contains(&value) {
                return Err(IotError::InvalidSettings {
                    field,
                    value,
                    min: *range.start(),
                    max: *range.end(),
                });
            }
        }
        Ok(Self {
            battery_mah,
            header_factor,
        })
    }

    pub fn battery_mah(&self) -> f64 {
        self.battery_mah
    }

    pub fn header_factor(&self) -> f64 {
        self.header_factor
    }
}
