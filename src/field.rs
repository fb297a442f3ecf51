//! The particle field: simulation, links, pointer interaction.
//!
//! A [`ParticleField`] owns a bounded 2D swarm of [`Particle`]s and advances
//! it one frame at a time: integrate, pointer force, pairwise separation,
//! friction, velocity clamp, boundary handling, life decay. Rendering emits
//! draw primitives into a [`RenderSink`], including proximity links with
//! linear opacity falloff.
//!
//! Both the link pass and the separation pass visit every particle pair, so
//! a frame costs O(n²). That is the intended operating point - these fields
//! run with tens to low hundreds of particles. Anyone pushing counts past
//! that should bucket particles into a uniform grid and restrict both passes
//! to neighboring cells.
//!
//! # Example
//!
//! ```ignore
//! let mut field = ParticleField::builder()
//!     .with_count(80)
//!     .with_link_distance(150.0)
//!     .with_pointer(PointerMode::Repulse)
//!     .with_burst(BurstConfig::default())
//!     .build(800.0, 600.0)?;
//!
//! // per frame:
//! field.pointer_moved(pointer);
//! field.step(1.0);
//! field.render(&mut sink)?;
//! ```

use crate::config::{validate_bounds, BoundaryPolicy, BurstConfig, FieldConfig, PointerMode, SizeRange};
use crate::error::{ConfigError, RenderError};
use crate::particle::{Particle, LIFE_FULL};
use crate::render::{LinkDraw, ParticleDraw, RenderSink};
use crate::spawn::SpawnContext;
use crate::visuals::VisualConfig;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Velocity gained per frame from a full pairwise overlap.
const SEPARATION_STRENGTH: f32 = 0.3;

/// Burst particles spawn within this many pixels of the burst point.
const BURST_JITTER: f32 = 10.0;

/// Burst particles launch at this multiple of the field's base speed.
const BURST_SPEED_FACTOR: f32 = 2.0;

type Spawner = Box<dyn Fn(&mut SpawnContext) -> Particle>;

/// Builder for [`ParticleField`]. Use method chaining to configure, then
/// call [`build`](FieldBuilder::build) with the simulation bounds.
pub struct FieldBuilder {
    config: FieldConfig,
    visuals: VisualConfig,
    spawner: Option<Spawner>,
}

impl FieldBuilder {
    /// Start from the default network-background configuration.
    pub fn new() -> Self {
        Self {
            config: FieldConfig::default(),
            visuals: VisualConfig::default(),
            spawner: None,
        }
    }

    /// Set the initial particle count.
    pub fn with_count(mut self, count: usize) -> Self {
        self.config.count = count;
        self
    }

    /// Set the drift speed scale for initial velocities.
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.config.speed = speed;
        self
    }

    /// Set the per-particle radius sampling range.
    pub fn with_size_range(mut self, min: f32, max: f32) -> Self {
        self.config.size_range = SizeRange { min, max };
        self
    }

    /// Set the maximum link distance. 0 disables links.
    pub fn with_link_distance(mut self, distance: f32) -> Self {
        self.config.link_distance = distance;
        self
    }

    /// Set the pointer interaction mode.
    pub fn with_pointer(mut self, mode: PointerMode) -> Self {
        self.config.pointer = mode;
        self
    }

    /// Set the pointer interaction radius.
    pub fn with_pointer_radius(mut self, radius: f32) -> Self {
        self.config.pointer_radius = radius;
        self
    }

    /// Set the velocity change per frame at zero pointer distance.
    pub fn with_pointer_strength(mut self, strength: f32) -> Self {
        self.config.pointer_strength = strength;
        self
    }

    /// Set the per-frame friction multiplier.
    pub fn with_friction(mut self, friction: f32) -> Self {
        self.config.friction = friction;
        self
    }

    /// Set the boundary policy.
    pub fn with_boundary(mut self, policy: BoundaryPolicy) -> Self {
        self.config.boundary = policy;
        self
    }

    /// Set the velocity fraction retained by a reflection.
    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.config.restitution = restitution;
        self
    }

    /// Enable click bursts with the given settings.
    pub fn with_burst(mut self, burst: BurstConfig) -> Self {
        self.config.burst = Some(burst);
        self
    }

    /// Override the velocity component clamp.
    pub fn with_max_velocity(mut self, limit: f32) -> Self {
        self.config.max_velocity = Some(limit);
        self
    }

    /// Seed the field's random streams. Same seed, same trajectories.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Mutate the appearance options.
    pub fn with_visuals<F: FnOnce(&mut VisualConfig)>(mut self, f: F) -> Self {
        f(&mut self.visuals);
        self
    }

    /// Replace the initial spawner.
    ///
    /// Called once per particle with a seeded [`SpawnContext`]. The default
    /// spawner scatters particles uniformly with random drift velocities.
    pub fn with_spawner<F>(mut self, spawner: F) -> Self
    where
        F: Fn(&mut SpawnContext) -> Particle + 'static,
    {
        self.spawner = Some(Box::new(spawner));
        self
    }

    /// Validate the configuration and spawn the initial population.
    pub fn build(self, width: f32, height: f32) -> Result<ParticleField, ConfigError> {
        self.config.validate()?;
        validate_bounds(width, height)?;
        Ok(ParticleField::spawn(self, width, height))
    }
}

impl Default for FieldBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A bounded 2D swarm of particles with pointer interaction and
/// proximity-based links.
pub struct ParticleField {
    config: FieldConfig,
    visuals: VisualConfig,
    particles: Vec<Particle>,
    /// Size of the initial population; bursts never evict it.
    base_count: usize,
    width: f32,
    height: f32,
    pointer: Option<Vec2>,
    /// Runtime stream for burst sampling, separate from the spawn streams.
    rng: SmallRng,
}

impl ParticleField {
    /// Start building a field.
    pub fn builder() -> FieldBuilder {
        FieldBuilder::new()
    }

    fn spawn(builder: FieldBuilder, width: f32, height: f32) -> Self {
        let FieldBuilder {
            config,
            visuals,
            spawner,
        } = builder;

        let count = config.count;
        let mut particles = Vec::with_capacity(count);
        for index in 0..count {
            let mut ctx =
                SpawnContext::new(config.seed, index as u32, count as u32, width, height);
            let mut particle = match &spawner {
                Some(spawner) => spawner(&mut ctx),
                None => Self::drift_particle(&mut ctx, &config, &visuals),
            };
            particle.radius = particle.radius.max(0.1);
            particle.position.x = particle.position.x.clamp(0.0, width);
            particle.position.y = particle.position.y.clamp(0.0, height);
            particles.push(particle);
        }

        log::debug!("spawned field: {} particles in {}x{}", count, width, height);

        Self {
            rng: SmallRng::seed_from_u64(config.seed.wrapping_mul(0x9E37_79B9_7F4A_7C15)),
            config,
            visuals,
            particles,
            base_count: count,
            width,
            height,
            pointer: None,
        }
    }

    /// The default spawner: uniform scatter with slow random drift.
    fn drift_particle(
        ctx: &mut SpawnContext,
        config: &FieldConfig,
        visuals: &VisualConfig,
    ) -> Particle {
        let SizeRange { min, max } = config.size_range;
        let mut p = Particle::at(
            ctx.random_in_bounds(),
            ctx.random_range(min, max),
            visuals.palette.pick(ctx.random_index(5)),
        );
        p.velocity = ctx.random_velocity(config.speed);
        p.pulse = ctx.random_phase();
        p.pulse_speed = 0.02 + ctx.random() * 0.02;
        p.rotation = ctx.random_phase();
        p.rotation_speed = (ctx.random() - 0.5) * 0.035;
        p
    }

    // ========== Frame advance ==========

    /// Advance the swarm by `dt` frames (one frame = 1/60 s).
    ///
    /// Deterministic: for a fixed seed and a fixed sequence of pointer and
    /// `dt` inputs, two fields produce identical trajectories.
    pub fn step(&mut self, dt: f32) {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 1.0 };
        let friction = self.config.friction.powf(dt);
        let limit = self.config.velocity_limit();
        let pointer = self.pointer;

        self.update_hover(pointer);

        // Integration and pointer force.
        for p in &mut self.particles {
            if p.dragging {
                if let Some(ptr) = pointer {
                    p.position = ptr;
                }
                p.velocity = Vec2::ZERO;
                continue;
            }

            p.position += p.velocity * dt;

            if self.config.pointer != PointerMode::None {
                if let Some(ptr) = pointer {
                    let to_pointer = ptr - p.position;
                    let dist = to_pointer.length();
                    let radius = self.config.pointer_radius;
                    if dist < radius && dist > f32::EPSILON {
                        let falloff = (radius - dist) / radius;
                        let push =
                            to_pointer / dist * falloff * self.config.pointer_strength * dt;
                        match self.config.pointer {
                            PointerMode::Repulse => p.velocity -= push,
                            PointerMode::Attract => p.velocity += push,
                            PointerMode::None => {}
                        }
                    }
                }
            }
        }

        self.apply_separation(dt);

        // Friction, clamp, boundary, phase advance, decay.
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            if !p.dragging {
                p.velocity *= friction;
                p.velocity.x = p.velocity.x.clamp(-limit, limit);
                p.velocity.y = p.velocity.y.clamp(-limit, limit);

                if self.config.boundary == BoundaryPolicy::Reflect {
                    let restitution = self.config.restitution;
                    if (p.position.x <= 0.0 && p.velocity.x < 0.0)
                        || (p.position.x >= w && p.velocity.x > 0.0)
                    {
                        p.velocity.x *= -restitution;
                    }
                    if (p.position.y <= 0.0 && p.velocity.y < 0.0)
                        || (p.position.y >= h && p.velocity.y > 0.0)
                    {
                        p.velocity.y *= -restitution;
                    }
                }
                p.position.x = p.position.x.clamp(0.0, w);
                p.position.y = p.position.y.clamp(0.0, h);
            }

            p.pulse += p.pulse_speed * dt;
            p.rotation += p.rotation_speed * dt;
            p.decay_life(dt);
        }

        self.particles.retain(|p| !p.is_expired());
    }

    fn update_hover(&mut self, pointer: Option<Vec2>) {
        match pointer {
            Some(ptr) => {
                for p in &mut self.particles {
                    p.hovered = !p.dragging && p.position.distance(ptr) < p.radius;
                }
            }
            None => {
                for p in &mut self.particles {
                    p.hovered = false;
                }
            }
        }
    }

    /// Pairwise overlap repulsion over post-integration positions.
    ///
    /// Deltas are collected before being applied so iteration order cannot
    /// influence the result.
    fn apply_separation(&mut self, dt: f32) {
        let n = self.particles.len();
        if n < 2 {
            return;
        }
        let mut nudges = vec![Vec2::ZERO; n];
        for i in 0..n {
            if self.particles[i].dragging {
                continue;
            }
            for j in 0..n {
                if i == j {
                    continue;
                }
                let away = self.particles[i].position - self.particles[j].position;
                let dist = away.length();
                let min_dist = self.particles[i].radius + self.particles[j].radius;
                if dist < min_dist && dist > f32::EPSILON {
                    let force = (min_dist - dist) / min_dist;
                    nudges[i] += away / dist * force * SEPARATION_STRENGTH * dt;
                }
            }
        }
        for (p, nudge) in self.particles.iter_mut().zip(nudges) {
            p.velocity += nudge;
        }
    }

    // ========== Bursts ==========

    /// Inject `count` short-lived particles around `center`.
    ///
    /// New particles spawn within [`BURST_JITTER`] pixels of the point with
    /// randomized velocities at [`BURST_SPEED_FACTOR`]× the base speed, and
    /// decay away over a few seconds. The total population is capped at
    /// base count + headroom; when the cap is hit the oldest burst
    /// particles are evicted first. The base population is never evicted.
    pub fn add_burst(&mut self, center: Vec2, count: u32) {
        let burst = self.config.burst.unwrap_or_default();
        let SizeRange { min, max } = self.config.size_range;

        for _ in 0..count {
            let jitter = Vec2::new(
                (self.rng.gen::<f32>() - 0.5) * 2.0 * BURST_JITTER,
                (self.rng.gen::<f32>() - 0.5) * 2.0 * BURST_JITTER,
            );
            let mut position = center + jitter;
            position.x = position.x.clamp(0.0, self.width);
            position.y = position.y.clamp(0.0, self.height);

            let speed = self.config.speed * BURST_SPEED_FACTOR;
            let mut p = Particle::at(
                position,
                if min < max {
                    self.rng.gen_range(min..max)
                } else {
                    min
                },
                self.visuals.palette.pick(self.rng.gen_range(0..5)),
            );
            p.velocity = Vec2::new(
                (self.rng.gen::<f32>() - 0.5) * speed,
                (self.rng.gen::<f32>() - 0.5) * speed,
            );
            p.life = Some(LIFE_FULL);
            p.decay = burst.decay;
            p.pulse = self.rng.gen::<f32>() * std::f32::consts::TAU;
            p.pulse_speed = 0.02 + self.rng.gen::<f32>() * 0.02;
            self.particles.push(p);
        }

        let cap = self.base_count + burst.headroom;
        if self.particles.len() > cap {
            let mut excess = self.particles.len() - cap;
            self.particles.retain(|p| {
                if excess > 0 && p.life.is_some() {
                    excess -= 1;
                    false
                } else {
                    true
                }
            });
        }
    }

    // ========== Pointer wiring ==========

    /// Record a new pointer position, read by the next step.
    pub fn pointer_moved(&mut self, position: Vec2) {
        self.pointer = Some(position);
    }

    /// The pointer left the host view.
    pub fn pointer_left(&mut self) {
        self.pointer = None;
        for p in &mut self.particles {
            p.hovered = false;
        }
    }

    /// Begin dragging every particle under the pointer.
    pub fn pointer_pressed(&mut self) {
        if let Some(ptr) = self.pointer {
            for p in &mut self.particles {
                if p.position.distance(ptr) < p.radius {
                    p.dragging = true;
                    p.hovered = false;
                }
            }
        }
    }

    /// Release all dragged particles.
    pub fn pointer_released(&mut self) {
        for p in &mut self.particles {
            p.dragging = false;
        }
    }

    /// A click: inject a burst when bursts are configured.
    pub fn clicked(&mut self, position: Vec2) {
        if let Some(burst) = self.config.burst {
            self.add_burst(position, burst.count);
        }
    }

    // ========== Bounds ==========

    /// Update the simulation bounds.
    ///
    /// Existing particles are clamped into the new bounds, not
    /// repositioned, and none are removed.
    pub fn resize(&mut self, width: f32, height: f32) {
        if validate_bounds(width, height).is_err() {
            log::warn!("ignoring resize to {}x{}", width, height);
            return;
        }
        self.width = width;
        self.height = height;
        for p in &mut self.particles {
            p.position.x = p.position.x.clamp(0.0, width);
            p.position.y = p.position.y.clamp(0.0, height);
        }
    }

    // ========== Rendering ==========

    /// Emit this frame's draw primitives into `sink`.
    ///
    /// Links first (so particles draw on top): a line for every pair closer
    /// than the link distance, opacity falling off linearly to zero at the
    /// threshold, plus pointer-to-particle links when a pointer is present.
    /// O(n²) over the swarm, like the separation pass.
    pub fn render(&self, sink: &mut dyn RenderSink) -> Result<(), RenderError> {
        sink.frame_begin(self.width, self.height, self.visuals.background)?;

        let link_distance = self.config.link_distance;
        if link_distance > 0.0 {
            let n = self.particles.len();
            for i in 0..n {
                for j in (i + 1)..n {
                    let a = &self.particles[i];
                    let b = &self.particles[j];
                    let dist = a.position.distance(b.position);
                    if dist < link_distance {
                        sink.link(&LinkDraw {
                            from: a.position,
                            to: b.position,
                            color: self.visuals.link_color,
                            opacity: (1.0 - dist / link_distance) * self.visuals.link_opacity,
                            width: 1.0,
                        })?;
                    }
                }
            }

            if let Some(ptr) = self.pointer {
                for p in &self.particles {
                    let dist = p.position.distance(ptr);
                    if dist < link_distance {
                        sink.link(&LinkDraw {
                            from: p.position,
                            to: ptr,
                            color: self.visuals.link_color,
                            opacity: (1.0 - dist / link_distance)
                                * self.visuals.pointer_link_opacity,
                            width: 2.0,
                        })?;
                    }
                }
            }
        }

        for p in &self.particles {
            let radius =
                (p.radius + p.pulse.sin() * self.visuals.pulse_amplitude).max(0.1);
            let glow_boost = if p.hovered { self.visuals.hover_glow } else { 1.0 };
            sink.particle(&ParticleDraw {
                position: p.position,
                radius,
                rotation: p.rotation,
                color: p.color,
                opacity: self.visuals.particle_opacity * p.fade(),
                glow: p.radius * self.visuals.glow * glow_boost,
            })?;
        }

        sink.frame_end()
    }

    // ========== Accessors ==========

    /// Number of active particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the field is empty.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// The active particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Current simulation width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Current simulation height.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// The pointer position the next step will observe.
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }
}

impl crate::runner::Effect for ParticleField {
    fn step(&mut self, dt: f32) {
        ParticleField::step(self, dt);
    }

    fn render(&self, sink: &mut dyn RenderSink) -> Result<(), RenderError> {
        ParticleField::render(self, sink)
    }

    fn resize(&mut self, width: f32, height: f32) {
        ParticleField::resize(self, width, height);
    }
}
