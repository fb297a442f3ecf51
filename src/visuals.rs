//! Visual configuration for field rendering.
//!
//! This module provides appearance options that control how particles, links
//! and waves look, separate from the behavioral options that control how
//! they move.
//!
//! # Usage
//!
//! ```ignore
//! ParticleField::builder()
//!     .with_visuals(|v| {
//!         v.palette(Palette::Cyber);
//!         v.link_opacity(0.3);
//!         v.glow(2.0);
//!     })
//!     .build(800.0, 600.0)?;
//! ```

use glam::Vec3;

/// Pre-defined color palettes for particle rendering.
///
/// Particles sample a palette at spawn time; a `Uniform` palette gives every
/// particle the same color.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Palette {
    /// Single color for the whole field (default: the classic cyan dot).
    #[default]
    Cyan,
    /// The portfolio accent set: cyan, green, violet, blue, orange.
    Cyber,
    /// Vibrant pink/purple/blue/cyan/green.
    Neon,
    /// Cool blues and teals.
    Ocean,
    /// Warm oranges fading to pale yellow.
    Ember,
    /// Black to white.
    Grayscale,
    /// Every particle gets exactly this color.
    Uniform(Vec3),
}

impl Palette {
    /// Get the color stops for this palette (5 colors).
    pub fn colors(&self) -> [Vec3; 5] {
        match self {
            Palette::Cyan => [Vec3::new(0.0, 1.0, 0.917); 5],
            Palette::Cyber => [
                Vec3::new(0.0, 1.0, 1.0),     // Cyan
                Vec3::new(0.224, 1.0, 0.078), // Green
                Vec3::new(0.749, 0.0, 1.0),   // Violet
                Vec3::new(0.0, 0.4, 1.0),     // Blue
                Vec3::new(1.0, 0.4, 0.0),     // Orange
            ],
            Palette::Neon => [
                Vec3::new(1.0, 0.0, 0.5), // Pink
                Vec3::new(0.5, 0.0, 1.0), // Purple
                Vec3::new(0.0, 0.5, 1.0), // Blue
                Vec3::new(0.0, 1.0, 1.0), // Cyan
                Vec3::new(0.5, 1.0, 0.5), // Green
            ],
            Palette::Ocean => [
                Vec3::new(0.0, 0.05, 0.15), // Deep blue
                Vec3::new(0.0, 0.2, 0.4),   // Dark blue
                Vec3::new(0.0, 0.4, 0.6),   // Blue
                Vec3::new(0.2, 0.6, 0.8),   // Light blue
                Vec3::new(0.6, 0.9, 1.0),   // Cyan
            ],
            Palette::Ember => [
                Vec3::new(0.5, 0.0, 0.0), // Red
                Vec3::new(1.0, 0.3, 0.0), // Orange
                Vec3::new(1.0, 0.5, 0.1),
                Vec3::new(1.0, 0.7, 0.2),
                Vec3::new(1.0, 0.9, 0.6), // Pale yellow
            ],
            Palette::Grayscale => [
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(0.25, 0.25, 0.25),
                Vec3::new(0.5, 0.5, 0.5),
                Vec3::new(0.75, 0.75, 0.75),
                Vec3::new(1.0, 1.0, 1.0),
            ],
            Palette::Uniform(color) => [*color; 5],
        }
    }

    /// Pick a stop by index (wrapping), the way bubble-style fields assign
    /// one accent color per bubble.
    #[inline]
    pub fn pick(&self, index: usize) -> Vec3 {
        self.colors()[index % 5]
    }
}

/// Appearance options for a field, mutated in place through
/// `with_visuals(|v| ...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualConfig {
    /// Color source for particles.
    pub palette: Palette,
    /// Base particle opacity, 0.0-1.0.
    pub particle_opacity: f32,
    /// Glow radius as a multiple of the particle radius. 0 disables glow.
    pub glow: f32,
    /// Extra glow factor applied to hovered particles.
    pub hover_glow: f32,
    /// Link color.
    pub link_color: Vec3,
    /// Multiplier on the distance falloff of link opacity.
    pub link_opacity: f32,
    /// Multiplier on pointer-to-particle link opacity.
    pub pointer_link_opacity: f32,
    /// Render-only radius modulation amplitude, in pixels.
    pub pulse_amplitude: f32,
    /// Clear color handed to the sink each frame. `None` leaves the surface
    /// to the host.
    pub background: Option<Vec3>,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            particle_opacity: 0.5,
            glow: 2.0,
            hover_glow: 1.5,
            link_color: Vec3::new(0.0, 1.0, 0.917),
            link_opacity: 1.0,
            pointer_link_opacity: 0.6,
            pulse_amplitude: 0.0,
            background: None,
        }
    }
}

impl VisualConfig {
    /// Create the default appearance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the particle color source.
    pub fn palette(&mut self, palette: Palette) -> &mut Self {
        self.palette = palette;
        self
    }

    /// Set the base particle opacity.
    pub fn particle_opacity(&mut self, opacity: f32) -> &mut Self {
        self.particle_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Set the glow radius multiplier. 0 disables glow.
    pub fn glow(&mut self, glow: f32) -> &mut Self {
        self.glow = glow.max(0.0);
        self
    }

    /// Set the link color.
    pub fn link_color(&mut self, color: Vec3) -> &mut Self {
        self.link_color = color;
        self
    }

    /// Scale the distance falloff of link opacity.
    ///
    /// The emitted opacity is `(1 - distance / link_distance) * link_opacity`.
    pub fn link_opacity(&mut self, opacity: f32) -> &mut Self {
        self.link_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Scale pointer-link opacity.
    pub fn pointer_link_opacity(&mut self, opacity: f32) -> &mut Self {
        self.pointer_link_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Enable render-only radius pulsing with the given amplitude in pixels.
    pub fn pulse_amplitude(&mut self, amplitude: f32) -> &mut Self {
        self.pulse_amplitude = amplitude.max(0.0);
        self
    }

    /// Ask the sink to clear to this color each frame.
    pub fn background(&mut self, color: Vec3) -> &mut Self {
        self.background = Some(color);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_pick_wraps() {
        let palette = Palette::Cyber;
        assert_eq!(palette.pick(0), palette.pick(5));
        assert_eq!(palette.pick(2), palette.colors()[2]);
    }

    #[test]
    fn test_uniform_palette() {
        let color = Vec3::new(0.1, 0.2, 0.3);
        let palette = Palette::Uniform(color);
        for i in 0..7 {
            assert_eq!(palette.pick(i), color);
        }
    }

    #[test]
    fn test_visuals_chain() {
        let mut v = VisualConfig::new();
        v.palette(Palette::Neon).link_opacity(0.3).glow(1.0);
        assert_eq!(v.palette, Palette::Neon);
        assert_eq!(v.link_opacity, 0.3);
        assert_eq!(v.glow, 1.0);
    }

    #[test]
    fn test_opacity_clamped() {
        let mut v = VisualConfig::new();
        v.particle_opacity(1.7).link_opacity(-0.2);
        assert_eq!(v.particle_opacity, 1.0);
        assert_eq!(v.link_opacity, 0.0);
    }
}
