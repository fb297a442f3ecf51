//! # Circuit Board Overlay
//!
//! Fixed glowing traces plus drifting pulse nodes - the decorative layer
//! that sits behind everything else.
//!
//! ## What This Demonstrates
//!
//! - `TraceOverlay::classic()` and its glow cycling
//! - Combining a static overlay with a slow node drift
//!
//! Run with: `cargo run --example circuit`

use driftfield::prelude::*;

fn main() {
    let traces = TraceOverlay::classic(TraceConfig::default(), 800.0, 600.0)
        .expect("default trace config is valid");
    let mut runner = FieldRunner::new(traces, RecordingSink::new());
    runner.clock_mut().set_fixed_delta(Some(1.0));

    println!("=== Circuit overlay, 7 traces, 15 nodes ===");

    for frame in 0u32..240 {
        runner.tick();
        if frame % 80 == 0 {
            let mut sink = RecordingSink::new();
            runner.effect().render(&mut sink).unwrap();
            let glowing = sink.curves.iter().filter(|c| c.opacity > 0.5).count();
            println!(
                "frame {:>3}: {} traces bright, node 0 at ({:.0}, {:.0})",
                frame,
                glowing,
                sink.particles[0].position.x,
                sink.particles[0].position.y,
            );
        }
    }

    runner.dispose();
}
