//! # Linked Network Background
//!
//! The classic full-page background: slow cyan dots, proximity links,
//! pointer repulsion.
//!
//! ## What This Demonstrates
//!
//! - `ParticleField::builder()` with the network defaults
//! - Pointer repulsion via `with_pointer(PointerMode::Repulse)`
//! - Link counting through a `RecordingSink`
//!
//! ## Try This
//!
//! - Switch to `PointerMode::Attract` and watch the links cluster
//! - Raise `with_link_distance(250.0)` for a denser web
//!
//! Run with: `cargo run --example network`

use driftfield::prelude::*;

fn main() {
    let field = ParticleField::builder()
        .with_count(80)
        .with_speed(1.0)
        .with_size_range(1.0, 4.0)
        .with_link_distance(150.0)
        .with_pointer(PointerMode::Repulse)
        .with_pointer_radius(100.0)
        .with_seed(7)
        .with_visuals(|v| {
            v.palette(Palette::Cyan);
            v.link_opacity(0.3);
        })
        .build(800.0, 600.0)
        .expect("network config is valid");

    let mut runner = FieldRunner::new(field, RecordingSink::new());
    runner.clock_mut().set_fixed_delta(Some(1.0));

    println!("=== Linked network, 80 particles, 800x600 ===");

    for frame in 0u32..300 {
        // Sweep the pointer across the canvas.
        let t = frame as f32 / 300.0;
        runner
            .effect_mut()
            .pointer_moved(Vec2::new(t * 800.0, 300.0));
        runner.tick();

        if frame % 60 == 0 {
            let mut sink = RecordingSink::new();
            runner.effect().render(&mut sink).unwrap();
            let pointer_links = sink.links.iter().filter(|l| l.width == 2.0).count();
            println!(
                "frame {:>3}: {} particles, {} links ({} to the pointer)",
                frame,
                sink.particles.len(),
                sink.links.len(),
                pointer_links,
            );
        }
    }

    runner.dispose();
    println!("disposed");
}
