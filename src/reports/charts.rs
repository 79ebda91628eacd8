use iotcompare::engine::EstimationResult;
use iotcompare::export::format_metric;

const BAR_WIDTH: usize = 40;

fn series(results: &[EstimationResult], metric: fn(&EstimationResult) -> f64) -> Vec<(&str, f64)> {
    results
        .iter()
        .map(|r| (r.protocol.as_str(), metric(r)))
        .collect()
}

pub fn print_all(results: &[EstimationResult]) {
    bar_chart(
        "🔌 Energy consumption (mAh/day, lower is better)",
        &series(results, |r| r.consumo_mah_dia),
    );
    bar_chart(
        "⏱️  Estimated latency (ms, lower is better)",
        &series(results, |r| r.latencia_ms),
    );
    bar_chart(
        "📡 Typical coverage (m, higher is better)",
        &series(results, |r| r.cobertura_m),
    );
    bar_chart(
        "🔋 Battery life (days, higher is better)",
        &series(results, |r| r.dias_bateria),
    );
}

/// Horizontal bars scaled to the largest finite value. Infinite values
/// get a full bar.
fn bar_chart(title: &str, series: &[(&str, f64)]) {
    println!("\n{}", title);

    let max = series
        .iter()
        .map(|&(_, v)| v)
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    let label_width = series.iter().map(|(n, _)| n.len()).max().unwrap_or(0);

    for &(name, value) in series {
        let len = if !value.is_finite() {
            BAR_WIDTH
        } else if max > 0.0 {
            ((value / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let label = if value.is_finite() {
            format!("{:.2}", value)
        } else {
            format_metric(value)
        };
        println!(
            "  {:<width$} │{:<bar$}│ {}",
            name,
            "█".repeat(len),
            label,
            width = label_width,
            bar = BAR_WIDTH
        );
    }
}
