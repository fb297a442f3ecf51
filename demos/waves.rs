//! # Wavy Section Background
//!
//! Eight stacked sine curves drifting sideways, bulging where the pointer
//! hovers.
//!
//! ## What This Demonstrates
//!
//! - `WaveField` as a separate component (sampled curves, not particles)
//! - Pointer deformation within a radius
//!
//! Run with: `cargo run --example waves`

use driftfield::prelude::*;

fn main() {
    let mut waves = WaveField::new(WaveConfig::default(), 800.0, 400.0)
        .expect("default wave config is valid");

    println!("=== Eight drifting waves, 800x400 ===");

    waves.pointer_moved(Vec2::new(400.0, 200.0));
    for _ in 0..120 {
        waves.step(1.0);
    }

    let mut sink = RecordingSink::new();
    waves.render(&mut sink).unwrap();

    for (i, curve) in sink.curves.iter().enumerate() {
        let ys: Vec<f32> = curve.points.iter().map(|p| p.y).collect();
        let min = ys.iter().cloned().fold(f32::INFINITY, f32::min);
        let max = ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        println!(
            "wave {}: {} samples, y {:.0}..{:.0}, opacity {:.2}{}",
            i,
            curve.points.len(),
            min,
            max,
            curve.opacity,
            if curve.glow > 0.0 { ", glowing" } else { "" },
        );
    }
}
