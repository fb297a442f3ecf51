//! # Click Bursts
//!
//! Short-lived particles injected at click points, decaying back out of
//! the population.
//!
//! ## What This Demonstrates
//!
//! - `with_burst()` and `clicked()`
//! - The population cap: base particles survive, old bursts are evicted
//!
//! Run with: `cargo run --example burst`

use driftfield::prelude::*;

fn main() {
    let field = ParticleField::builder()
        .with_count(40)
        .with_burst(BurstConfig {
            count: 6,
            decay: 0.96,
            headroom: 12,
        })
        .with_seed(5)
        .build(800.0, 600.0)
        .expect("burst config is valid");

    let mut runner = FieldRunner::new(field, NullSink);
    runner.clock_mut().set_fixed_delta(Some(1.0));

    println!("=== 40 base particles, 6 per click, headroom 12 ===");

    for frame in 0u32..400 {
        if frame % 30 == 0 && frame < 150 {
            runner
                .effect_mut()
                .clicked(Vec2::new(400.0, 300.0));
            println!("frame {:>3}: click -> {} particles", frame, runner.effect().len());
        }
        runner.tick();

        if frame % 100 == 99 {
            println!("frame {:>3}: {} particles alive", frame, runner.effect().len());
        }
    }

    println!("settled at {} particles", runner.effect().len());
}
