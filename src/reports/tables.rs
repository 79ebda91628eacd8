use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use iotcompare::catalog::{Catalog, ProtocolParams};
use iotcompare::engine::{Breakdown, EstimationResult};
use iotcompare::export::format_metric;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn days(value: f64) -> String {
    if value.is_finite() {
        format!("{:.1}", value)
    } else {
        format_metric(value)
    }
}

pub fn results(results: &[EstimationResult]) {
    let mut table = new_table();

    table.set_header(vec![
        Cell::new("Protocol").add_attribute(Attribute::Bold),
        Cell::new("mAh/day").fg(Color::Cyan),
        Cell::new("Latency ms"),
        Cell::new("Coverage m"),
        Cell::new("Battery days").fg(Color::Green),
        Cell::new("Notes"),
    ]);
    align_right(&mut table, 1..=4);

    for r in results {
        table.add_row(vec![
            Cell::new(&r.protocol).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.4}", r.consumo_mah_dia)).fg(Color::Cyan),
            Cell::new(format!("{:.2}", r.latencia_ms)),
            Cell::new(format!("{:.0}", r.cobertura_m)),
            Cell::new(days(r.dias_bateria)).fg(Color::Green),
            Cell::new(&r.notas),
        ]);
    }
    println!("\n{}", table);
}

pub fn catalog(catalog: &Catalog) {
    let mut table = new_table();

    table.set_header(vec![
        Cell::new("Protocol").add_attribute(Attribute::Bold),
        Cell::new("Bitrate bps"),
        Cell::new("TX mA"),
        Cell::new("RX mA"),
        Cell::new("Idle mA"),
        Cell::new("Range m"),
        Cell::new("Overhead B"),
        Cell::new("Base ms"),
        Cell::new("Duty cycle"),
        Cell::new("Notes"),
    ]);
    align_right(&mut table, 1..=8);

    for p in catalog.protocols() {
        table.add_row(vec![
            Cell::new(&p.name).add_attribute(Attribute::Bold),
            Cell::new(format!("{}", p.bitrate_bps)),
            Cell::new(format!("{}", p.tx_current_ma)),
            Cell::new(format!("{}", p.rx_current_ma)),
            Cell::new(format!("{}", p.idle_current_ma)),
            Cell::new(format!("{}", p.range_m)),
            Cell::new(p.overhead_bytes),
            Cell::new(format!("{}", p.base_latency_ms)),
            Cell::new(format!("{}", p.duty_cycle_limit)),
            Cell::new(&p.notes),
        ]);
    }
    println!("\n{}", table);
}

pub fn breakdown(proto: &ProtocolParams, b: &Breakdown) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Step").add_attribute(Attribute::Bold),
        Cell::new("Quantity"),
        Cell::new("Value"),
    ]);
    align_right(&mut table, 2..=2);

    let r = &b.result;
    let steps: Vec<(&str, &str, String)> = vec![
        ("1", "bytes_total", b.bytes_total.to_string()),
        ("2", "bits_total", b.bits_total.to_string()),
        ("3", "tx_time_s (raw)", format!("{:e}", b.raw_tx_time_s)),
        ("4", "rx_time_s", format!("{:e}", b.rx_time_s)),
        ("5", "tx_time_s (duty cycle)", format!("{:e}", b.tx_time_s)),
        ("6", "tx_total_h", format!("{:e}", b.tx_total_h)),
        ("6", "rx_total_h", format!("{:e}", b.rx_total_h)),
        ("7", "active_h", format!("{:e}", b.active_h)),
        ("7", "idle_h", format!("{:.6}", b.idle_h)),
        ("8", "tx_mAh", format!("{:.6}", b.tx_mah)),
        ("8", "rx_mAh", format!("{:.6}", b.rx_mah)),
        ("8", "idle_mAh", format!("{:.6}", b.idle_mah)),
        ("8", "consumo_mAh_dia", format!("{:.6}", r.consumo_mah_dia)),
        ("9", "latencia_ms", format!("{:.3}", r.latencia_ms)),
        ("10", "dias_bateria", days(r.dias_bateria)),
    ];

    for (step, name, value) in steps {
        let row = vec![Cell::new(step), Cell::new(name), Cell::new(value)];
        table.add_row(row);
    }
    println!("{}", table);

    if proto.duty_cycle_limit < 1.0 {
        println!(
            "ℹ️  Duty cycle {} inflates airtime x{:.0} (latency included).",
            proto.duty_cycle_limit,
            1.0 / proto.duty_cycle_limit
        );
    }
}
