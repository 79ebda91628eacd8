use crate::catalog::ProtocolParams;
use crate::error::{IotError, IotResult};
use crate::scenario::Scenario;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const HOURS_PER_DAY: f64 = 24.0;
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Per-protocol metrics for one scenario. Field names match the exported
/// CSV columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    pub protocol: String,
    #[serde(rename = "consumo_mAh_dia")]
    pub consumo_mah_dia: f64,
    pub latencia_ms: f64,
    pub cobertura_m: f64,
    /// `f64::INFINITY` when daily consumption is zero.
    pub dias_bateria: f64,
    pub notas: String,
}

/// Every intermediate quantity of one estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakdown {
    pub bytes_total: u64,
    pub bits_total: u64,
    /// Airtime before any duty-cycle penalty.
    pub raw_tx_time_s: f64,
    pub rx_time_s: f64,
    /// Airtime after dividing by the duty-cycle limit.
    pub tx_time_s: f64,
    pub tx_total_h: f64,
    pub rx_total_h: f64,
    pub active_h: f64,
    pub idle_h: f64,
    pub tx_mah: f64,
    pub rx_mah: f64,
    pub idle_mah: f64,
    pub result: EstimationResult,
}

pub fn estimate(
    proto: &ProtocolParams,
    scenario: &Scenario,
    battery_mah: f64,
    header_factor: f64,
) -> IotResult<EstimationResult> {
    estimate_detailed(proto, scenario, battery_mah, header_factor).map(|b| b.result)
}

pub fn estimate_detailed(
    proto: &ProtocolParams,
    scenario: &Scenario,
    battery_mah: f64,
    header_factor: f64,
) -> IotResult<Breakdown> {
    if !(proto.bitrate_bps.is_finite() && proto.bitrate_bps > 0.0) {
        return Err(IotError::DivisionByZeroConfig {
            protocol: proto.name.to_string(),
            bitrate_bps: proto.bitrate_bps,
        });
    }

    let msgs = scenario.msgs_per_day() as f64;

    // Scaled overhead truncates toward zero.
    let overhead = (proto.overhead_bytes as f64 * header_factor) as u64;
    let bytes_total = scenario.payload_bytes() as u64 + overhead;
    let bits_total = bytes_total * 8;

    let raw_tx_time_s = bits_total as f64 / proto.bitrate_bps;
    // RX mirrors the airtime before the duty-cycle penalty.
    let rx_time_s = raw_tx_time_s * scenario.rx_ratio();
    let tx_time_s = if proto.duty_cycle_limit < 1.0 {
        raw_tx_time_s / proto.duty_cycle_limit
    } else {
        raw_tx_time_s
    };

    let tx_total_h = (tx_time_s * msgs) / SECONDS_PER_HOUR;
    let rx_total_h = (rx_time_s * msgs) / SECONDS_PER_HOUR;
    let active_h = tx_total_h + rx_total_h;
    if active_h > HOURS_PER_DAY {
        warn!(
            "{}: {:.1} h/day of airtime exceeds a day, idle time clamped to 0",
            proto.name, active_h
        );
    }
    let idle_h = (HOURS_PER_DAY - active_h).max(0.0);

    let tx_mah = proto.tx_current_ma * tx_total_h;
    let rx_mah = proto.rx_current_ma * rx_total_h;
    let idle_mah = proto.idle_current_ma * idle_h;
    let daily_mah = tx_mah + rx_mah + idle_mah;

    let latency_ms = proto.base_latency_ms + (tx_time_s * 1000.0);
    let days_battery = if daily_mah > 0.0 {
        battery_mah / daily_mah
    } else {
        f64::INFINITY
    };

    debug!(
        "{}: {:.6} mAh/day, {:.3} ms, {:.1} days",
        proto.name, daily_mah, latency_ms, days_battery
    );

    Ok(Breakdown {
        bytes_total,
        bits_total,
        raw_tx_time_s,
        rx_time_s,
        tx_time_s,
        tx_total_h,
        rx_total_h,
        active_h,
        idle_h,
        tx_mah,
        rx_mah,
        idle_mah,
        result: EstimationResult {
            protocol: proto.name.to_string(),
            consumo_mah_dia: daily_mah,
            latencia_ms: latency_ms,
            cobertura_m: proto.range_m,
            dias_bateria: days_battery,
            notas: proto.notes.to_string(),
        },
    })
}
