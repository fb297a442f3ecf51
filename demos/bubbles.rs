//! # Draggable Bubbles
//!
//! Five large bubbles on a ring, kept apart by pairwise separation, with
//! one of them dragged across the canvas. The sink maps draw calls to CSS
//! transforms the way a DOM-element renderer would.
//!
//! ## What This Demonstrates
//!
//! - A custom spawner placing particles on a ring
//! - Drag: `pointer_pressed()` pins the particle under the pointer
//! - A placed-element sink (transforms instead of strokes)
//!
//! Run with: `cargo run --example bubbles`

use driftfield::prelude::*;

/// Formats each particle as a CSS transform, like a DOM-bubble renderer.
struct TransformSink {
    transforms: Vec<String>,
}

impl RenderSink for TransformSink {
    fn frame_begin(
        &mut self,
        _width: f32,
        _height: f32,
        _background: Option<Vec3>,
    ) -> Result<(), RenderError> {
        self.transforms.clear();
        Ok(())
    }

    fn particle(&mut self, p: &ParticleDraw) -> Result<(), RenderError> {
        self.transforms.push(format!(
            "translate({:.0}px, {:.0}px) rotate({:.0}deg)",
            p.position.x,
            p.position.y,
            p.rotation.to_degrees(),
        ));
        Ok(())
    }

    fn link(&mut self, _: &LinkDraw) -> Result<(), RenderError> {
        Ok(())
    }

    fn curve(&mut self, _: &CurveDraw) -> Result<(), RenderError> {
        Ok(())
    }
}

fn main() {
    let center = Vec2::new(400.0, 250.0);
    let field = ParticleField::builder()
        .with_count(5)
        .with_size_range(60.0, 100.0)
        .with_link_distance(0.0)
        .with_friction(0.98)
        .with_restitution(0.8)
        .with_seed(3)
        .with_visuals(|v| {
            v.palette(Palette::Cyber);
            v.pulse_amplitude(5.0);
        })
        .with_spawner(move |ctx| {
            let mut p = Particle::at(
                ctx.ring_position(center, 120.0),
                ctx.random_range(60.0, 100.0),
                Palette::Cyber.pick(ctx.index as usize),
            );
            p.pulse = ctx.random_phase();
            p.pulse_speed = 0.02 + ctx.random() * 0.02;
            p
        })
        .build(800.0, 500.0)
        .expect("bubble config is valid");

    let mut runner = FieldRunner::new(field, TransformSink { transforms: Vec::new() });
    runner.clock_mut().set_fixed_delta(Some(1.0));

    println!("=== Five bubbles, one dragged ===");

    // Grab whichever bubble sits near the ring's right side and drag it
    // to the far corner.
    let grab = center + Vec2::new(120.0, 0.0);
    runner.effect_mut().pointer_moved(grab);
    runner.effect_mut().pointer_pressed();

    for frame in 0u32..120 {
        let t = frame as f32 / 120.0;
        let target = grab + (Vec2::new(700.0, 450.0) - grab) * t;
        runner.effect_mut().pointer_moved(target);
        runner.tick();
    }
    runner.effect_mut().pointer_released();
    for _ in 0..60 {
        runner.tick();
    }

    let mut sink = TransformSink { transforms: Vec::new() };
    runner.effect().render(&mut sink).unwrap();
    for (i, transform) in sink.transforms.iter().enumerate() {
        let p = &runner.effect().particles()[i];
        println!(
            "bubble {}: {} (r={:.0}{})",
            i,
            transform,
            p.radius,
            if p.dragging { ", dragging" } else { "" },
        );
    }
}
