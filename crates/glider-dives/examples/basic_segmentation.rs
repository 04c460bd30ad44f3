//! Basic dive segmentation example

use chrono::{DateTime, Utc};
use glider_dives::{vertical_velocity, DiveNumberer, DivePhase, DivePhaseClassifier};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Dive Segmentation Example ===\n");

    // Synthetic deployment: two dives to ~100 m with surface intervals,
    // sampled once a minute
    let depth: Vec<f64> = vec![
        2.0, 3.0, 30.0, 70.0, 100.0, 100.2, 70.0, 30.0, 5.0, 2.0, 3.0, 40.0, 80.0, 105.0, 104.8,
        75.0, 35.0, 6.0, 2.0,
    ];
    let time: Vec<DateTime<Utc>> = (0..depth.len() as i64)
        .map(|m| DateTime::from_timestamp(m * 60, 0).unwrap())
        .collect();

    // 1. Vertical velocity (cm/s, positive descending)
    let velocity = vertical_velocity(&time, &depth)?;
    println!("1. Vertical velocity");
    println!(
        "  max descent rate: {:.1} cm/s",
        velocity.iter().copied().fold(f64::MIN, f64::max)
    );

    // 2. Phase labels
    let classifier = DivePhaseClassifier::new();
    let phases = classifier.classify(&depth, &velocity)?;
    let inflexions = phases
        .iter()
        .filter(|p| **p == DivePhase::Inflexion)
        .count();
    println!("\n2. Phase classification");
    println!("  {} samples, {} inflexion points", phases.len(), inflexions);
    for (i, (d, p)) in depth.iter().zip(&phases).enumerate().take(6) {
        println!("    sample {i}: {d:6.1} m  {p}");
    }

    // 3. Dive numbers
    let dives = DiveNumberer::new().number(&phases);
    println!("\n3. Dive numbering");
    println!(
        "  dive numbers run from {:.1} to {:.1}",
        dives.first().unwrap(),
        dives.last().unwrap()
    );

    Ok(())
}
