//! Integration tests driving fields end-to-end through the runner.
//!
//! These exercise the public surface the way a host view would: build a
//! field, wire a sink, tick frames, deliver pointer and visibility events,
//! and tear down.

use driftfield::prelude::*;

// ============================================================================
// ParticleField through FieldRunner
// ============================================================================

fn network_field(seed: u64) -> ParticleField {
    ParticleField::builder()
        .with_count(60)
        .with_speed(1.0)
        .with_size_range(1.0, 4.0)
        .with_link_distance(150.0)
        .with_pointer(PointerMode::Repulse)
        .with_pointer_radius(100.0)
        .with_burst(BurstConfig::default())
        .with_seed(seed)
        .with_visuals(|v| {
            v.palette(Palette::Cyber);
            v.link_opacity(0.3);
        })
        .build(800.0, 600.0)
        .unwrap()
}

#[test]
fn test_runner_renders_every_tick() {
    let mut runner = FieldRunner::new(network_field(3), RecordingSink::new());
    runner.clock_mut().set_fixed_delta(Some(1.0));

    for frame in 0..120 {
        let t = frame as f32 * 0.05;
        runner
            .effect_mut()
            .pointer_moved(Vec2::new(400.0 + t.sin() * 200.0, 300.0));
        assert!(runner.tick());
    }

    // The sink holds the latest frame: one draw per particle, links
    // included, and a frame counter that moved every tick.
    let field_len = runner.effect().len();
    assert_eq!(runner.skipped_frames(), 0);

    // Pull the last frame out by rendering once more by hand.
    let mut sink = RecordingSink::new();
    runner.effect().render(&mut sink).unwrap();
    assert_eq!(sink.particles.len(), field_len);
    assert!(!sink.links.is_empty());
}

#[test]
fn test_invariants_survive_a_busy_session() {
    let mut runner = FieldRunner::new(network_field(11), NullSink);
    runner.clock_mut().set_fixed_delta(Some(1.0));

    for frame in 0u32..600 {
        let t = frame as f32 * 0.07;
        runner
            .effect_mut()
            .pointer_moved(Vec2::new(400.0 + t.cos() * 390.0, 300.0 + t.sin() * 290.0));
        if frame % 97 == 0 {
            runner.effect_mut().clicked(Vec2::new(200.0, 200.0));
        }
        if frame == 300 {
            runner.resize(400.0, 300.0);
        }
        runner.tick();

        let (w, h) = (runner.effect().width(), runner.effect().height());
        for p in runner.effect().particles() {
            assert!(p.radius > 0.0);
            assert!(p.position.x >= 0.0 && p.position.x <= w);
            assert!(p.position.y >= 0.0 && p.position.y <= h);
            assert!(p.velocity.x.abs() <= 2.0 + 1e-4);
            assert!(p.velocity.y.abs() <= 2.0 + 1e-4);
        }
    }
}

#[test]
fn test_identical_sessions_are_identical() {
    let mut a = FieldRunner::new(network_field(21), NullSink);
    let mut b = FieldRunner::new(network_field(21), NullSink);
    a.clock_mut().set_fixed_delta(Some(1.0));
    b.clock_mut().set_fixed_delta(Some(1.0));

    for frame in 0u32..200 {
        for runner in [&mut a, &mut b] {
            let t = frame as f32 * 0.03;
            runner
                .effect_mut()
                .pointer_moved(Vec2::new(100.0 + t * 2.0, 300.0));
            if frame == 50 {
                runner.effect_mut().clicked(Vec2::new(400.0, 300.0));
            }
            runner.tick();
        }
    }

    assert_eq!(a.effect().len(), b.effect().len());
    for (pa, pb) in a.effect().particles().iter().zip(b.effect().particles()) {
        assert_eq!(pa.position, pb.position);
        assert_eq!(pa.velocity, pb.velocity);
    }
}

#[test]
fn test_visibility_pause_freezes_the_field() {
    let mut runner = FieldRunner::new(network_field(5), NullSink);
    runner.clock_mut().set_fixed_delta(Some(1.0));
    runner.tick();

    let frozen: Vec<Vec2> = runner
        .effect()
        .particles()
        .iter()
        .map(|p| p.position)
        .collect();

    runner.set_visible(false);
    for _ in 0..50 {
        assert!(!runner.tick());
    }
    let after: Vec<Vec2> = runner
        .effect()
        .particles()
        .iter()
        .map(|p| p.position)
        .collect();
    assert_eq!(frozen, after);

    runner.set_visible(true);
    assert!(runner.tick());
}

#[test]
fn test_dispose_twice_then_silence() {
    let mut runner = FieldRunner::new(network_field(9), RecordingSink::new());
    runner.clock_mut().set_fixed_delta(Some(1.0));
    runner.tick();

    runner.dispose();
    runner.dispose();
    assert!(runner.is_disposed());
    assert!(!runner.tick());

    // Neither resume nor visibility signals restart a disposed runner.
    runner.resume();
    runner.set_visible(true);
    assert!(!runner.tick());
}

#[test]
fn test_resize_contract_through_the_runner() {
    let mut runner = FieldRunner::new(network_field(13), NullSink);
    runner.clock_mut().set_fixed_delta(Some(1.0));
    for _ in 0..30 {
        runner.tick();
    }

    let before = runner.effect().len();
    runner.resize(400.0, 300.0);
    assert_eq!(runner.effect().len(), before);
    for p in runner.effect().particles() {
        assert!(p.position.x <= 400.0);
        assert!(p.position.y <= 300.0);
    }
}

// ============================================================================
// WaveField and TraceOverlay as effects
// ============================================================================

#[test]
fn test_wave_field_runs_under_the_runner() {
    let waves = WaveField::new(WaveConfig::default(), 800.0, 400.0).unwrap();
    let mut runner = FieldRunner::new(waves, RecordingSink::new());
    runner.clock_mut().set_fixed_delta(Some(1.0));

    for _ in 0..60 {
        assert!(runner.tick());
    }
    assert_eq!(runner.skipped_frames(), 0);

    let mut sink = RecordingSink::new();
    runner.effect().render(&mut sink).unwrap();
    assert_eq!(sink.curves.len(), 8);
}

#[test]
fn test_trace_overlay_runs_under_the_runner() {
    let traces = TraceOverlay::classic(TraceConfig::default(), 800.0, 600.0).unwrap();
    let mut runner = FieldRunner::new(traces, RecordingSink::new());
    runner.clock_mut().set_fixed_delta(Some(1.0));

    for _ in 0..60 {
        assert!(runner.tick());
    }

    let mut sink = RecordingSink::new();
    runner.effect().render(&mut sink).unwrap();
    assert_eq!(sink.curves.len(), 7);
    assert_eq!(sink.particles.len(), 15);
}

// ============================================================================
// Construction failures stay loud
// ============================================================================

#[test]
fn test_bad_configs_fail_at_build() {
    assert!(matches!(
        ParticleField::builder()
            .with_size_range(4.0, 1.0)
            .build(800.0, 600.0),
        Err(ConfigError::InvalidSizeRange { .. })
    ));

    assert!(matches!(
        ParticleField::builder()
            .with_friction(0.0)
            .build(800.0, 600.0),
        Err(ConfigError::InvalidFriction(_))
    ));

    assert!(matches!(
        ParticleField::builder()
            .with_speed(-1.0)
            .build(800.0, 600.0),
        Err(ConfigError::NonPositiveSpeed(_))
    ));

    assert!(matches!(
        ParticleField::builder().build(800.0, f32::NAN),
        Err(ConfigError::InvalidBounds { .. })
    ));
}
