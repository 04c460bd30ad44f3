//! Multi-rate stream merging example

use chrono::{DateTime, Utc};
use glider_series::{Column, FrameMerger, TimeFrame, TimeIndex};

fn t(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Multi-Rate Merge Example ===\n");

    // Primary CTD stream: one sample every 10 s
    let ctd_time: Vec<DateTime<Utc>> = (0..10).map(|i| t(i * 10)).collect();
    let depth: Vec<f64> = (0..10).map(|i| i as f64 * 5.0).collect();
    let ctd = TimeFrame::new(TimeIndex::Absolute(ctd_time))?
        .with_column("depth", Column::Float(depth))?;

    // Science stream: one sample every 25 s, offset from the CTD clock
    let sci_time: Vec<DateTime<Utc>> = (0..4).map(|i| t(3 + i * 25)).collect();
    let oxygen: Vec<f64> = vec![210.0, 208.0, 205.0, 199.0];
    let sci = TimeFrame::new(TimeIndex::Absolute(sci_time))?
        .with_column("oxygen", Column::Float(oxygen))?;

    // Donate the science columns onto the CTD grid
    let merger = FrameMerger::default();
    let merged = merger.merge(&ctd, &sci)?;

    println!(
        "merged {} rows with columns: {}",
        merged.len(),
        merged.column_names().collect::<Vec<_>>().join(", ")
    );

    if let Some(Column::Float(oxy)) = merged.column("oxygen") {
        for (i, v) in oxy.iter().enumerate() {
            if v.is_nan() {
                println!("  row {i}: oxygen  (gap wider than interp_lim)");
            } else {
                println!("  row {i}: oxygen {v:6.1}");
            }
        }
    }

    Ok(())
}
