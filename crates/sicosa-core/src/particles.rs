//! Hero particle field.
//!
//! A small fixed set of drifting particles on a toroidal canvas. Each frame
//! every particle advances, is pushed away from the pointer, is damped, and
//! wraps around the edges. Pairs closer than the connection distance are
//! joined by a faint line whose alpha falls off linearly with distance.
//!
//! Rendering lives in the WASM crate; this module only owns the numbers.

use crate::config::ParticleConfig;
use crate::pointer::PointerState;
use kurbo::{Point, Size, Vec2};
use smallvec::SmallVec;

/// Particles stored inline up to this many; the default field holds 60.
pub const INLINE_PARTICLES: usize = 64;

pub type Particles = SmallVec<[Particle; INLINE_PARTICLES]>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Point,
    pub vel: Vec2,
    /// Fixed at spawn.
    pub radius: f64,
    /// Fixed at spawn.
    pub opacity: f64,
}

impl Particle {
    /// Spawn a particle uniformly over `bounds`. `rand` yields values in `[0, 1)`.
    pub fn spawn(bounds: Size, config: &ParticleConfig, rand: &mut impl FnMut() -> f64) -> Self {
        let x = rand() * bounds.width;
        let y = rand() * bounds.height;
        let vx = (rand() - 0.5) * config.max_speed;
        let vy = (rand() - 0.5) * config.max_speed;
        Self {
            pos: Point::new(x, y),
            vel: Vec2::new(vx, vy),
            radius: rand() * config.radius_spread + config.min_radius,
            opacity: rand() * config.opacity_spread + config.min_opacity,
        }
    }

    /// Advance one frame: move, repel, damp, wrap.
    pub fn update(&mut self, pointer: PointerState, bounds: Size, config: &ParticleConfig) {
        self.pos += self.vel;

        if let Some(target) = pointer.position() {
            self.vel += repulsion(self.pos, target, config.pointer_radius, config.repulsion);
        }

        self.vel *= config.damping;

        self.pos.x = wrap_coord(self.pos.x, bounds.width);
        self.pos.y = wrap_coord(self.pos.y, bounds.height);
    }
}

/// A line to draw between two particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub from: Point,
    pub to: Point,
    pub alpha: f64,
}

/// Velocity change pushing a particle at `pos` away from `pointer`.
///
/// Zero outside `radius` and when the two coincide (no direction).
pub fn repulsion(pos: Point, pointer: Point, radius: f64, strength: f64) -> Vec2 {
    let d = pointer - pos;
    let dist = d.hypot();
    if dist >= radius || dist == 0.0 {
        return Vec2::ZERO;
    }
    let force = (radius - dist) / radius;
    -(d / dist) * force * strength
}

/// Wrap `v` into `[0, extent)`. A degenerate extent collapses to 0.
pub fn wrap_coord(v: f64, extent: f64) -> f64 {
    if extent.is_nan() || extent <= 0.0 {
        return 0.0;
    }
    if (0.0..extent).contains(&v) {
        return v;
    }
    let wrapped = v.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs.
    if wrapped >= extent { 0.0 } else { wrapped }
}

/// Line alpha for two particles `distance` apart.
///
/// Linear from `dim` at distance 0 down to exactly 0 at `threshold`,
/// clamped at 0 beyond it. Callers only draw when `distance < threshold`.
pub fn connection_alpha(distance: f64, threshold: f64, dim: f64) -> f64 {
    ((1.0 - distance / threshold) * dim).max(0.0)
}

/// The simulation state behind the hero canvas.
#[derive(Debug, Clone)]
pub struct ParticleField {
    config: ParticleConfig,
    bounds: Size,
    pointer: PointerState,
    particles: Particles,
    frame: u64,
}

impl ParticleField {
    pub fn new(config: ParticleConfig, bounds: Size, rand: &mut impl FnMut() -> f64) -> Self {
        let mut field = Self {
            config,
            bounds,
            pointer: PointerState::Away,
            particles: SmallVec::new(),
            frame: 0,
        };
        field.reseed(rand);
        field
    }

    /// Replace the whole particle set with fresh spawns over the current bounds.
    pub fn reseed(&mut self, rand: &mut impl FnMut() -> f64) {
        self.particles.clear();
        for _ in 0..self.config.count {
            self.particles
                .push(Particle::spawn(self.bounds, &self.config, rand));
        }
        log::debug!(
            "particle field seeded: {} particles over {}x{}",
            self.particles.len(),
            self.bounds.width,
            self.bounds.height
        );
    }

    /// Update canvas bounds. Particles are kept; those now outside the
    /// bounds are wrapped back in on their next update.
    pub fn resize(&mut self, bounds: Size) {
        self.bounds = bounds;
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn set_pointer(&mut self, pointer: PointerState) {
        self.pointer = pointer;
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = PointerState::Away;
    }

    /// Number of frames stepped so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Advance every particle one frame, in index order.
    pub fn step(&mut self) {
        let (pointer, bounds) = (self.pointer, self.bounds);
        for p in self.particles.iter_mut() {
            p.update(pointer, bounds, &self.config);
        }
        self.frame += 1;
    }

    /// Visit every unordered pair closer than the connection distance, once.
    pub fn for_each_connection(&self, mut f: impl FnMut(Connection)) {
        let threshold = self.config.connection_distance;
        let dim = self.config.line_dim;
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let dist = a.pos.distance(b.pos);
                if dist < threshold {
                    f(Connection {
                        from: a.pos,
                        to: b.pos,
                        alpha: connection_alpha(dist, threshold, dim),
                    });
                }
            }
        }
    }

    pub fn connection_count(&self) -> usize {
        let mut n = 0;
        self.for_each_connection(|_| n += 1);
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn still(x: f64, y: f64) -> Particle {
        Particle {
            pos: Point::new(x, y),
            vel: Vec2::ZERO,
            radius: 1.0,
            opacity: 0.5,
        }
    }

    #[test]
    fn spawn_respects_ranges() {
        let config = ParticleConfig::default();
        let bounds = Size::new(800.0, 600.0);
        let mut lo = || 0.0;
        let p = Particle::spawn(bounds, &config, &mut lo);
        assert_eq!(p.pos, Point::ZERO);
        assert_eq!(p.vel, Vec2::new(-0.25, -0.25));
        assert_eq!(p.radius, 1.0);
        assert_eq!(p.opacity, 0.2);

        let mut hi = || 0.999_999;
        let p = Particle::spawn(bounds, &config, &mut hi);
        assert!(p.pos.x < 800.0 && p.pos.y < 600.0);
        assert!(p.vel.x < 0.25 && p.vel.y < 0.25);
        assert!(p.radius < 3.0);
        assert!(p.opacity < 0.7);
    }

    #[test]
    fn repulsion_points_away_from_pointer() {
        let push = repulsion(Point::new(100.0, 100.0), Point::new(190.0, 100.0), 180.0, 0.02);
        assert!(push.x < 0.0);
        assert_eq!(push.y, 0.0);
        // force = (180 - 90) / 180 = 0.5
        assert!((push.x + 0.01).abs() < 1e-12);
    }

    #[test]
    fn repulsion_zero_outside_radius_and_at_pointer() {
        let p = Point::new(10.0, 10.0);
        assert_eq!(repulsion(p, Point::new(190.0, 10.0), 180.0, 0.02), Vec2::ZERO);
        assert_eq!(repulsion(p, Point::new(500.0, 500.0), 180.0, 0.02), Vec2::ZERO);
        assert_eq!(repulsion(p, p, 180.0, 0.02), Vec2::ZERO);
    }

    #[test]
    fn repulsion_grows_with_proximity() {
        let pointer = Point::new(0.0, 0.0);
        let near = repulsion(Point::new(20.0, 0.0), pointer, 180.0, 0.02).hypot();
        let far = repulsion(Point::new(120.0, 0.0), pointer, 180.0, 0.02).hypot();
        assert!(near > far);
    }

    #[test]
    fn wrap_keeps_coordinates_in_range() {
        assert_eq!(wrap_coord(10.0, 100.0), 10.0);
        assert_eq!(wrap_coord(0.0, 100.0), 0.0);
        assert_eq!(wrap_coord(100.0, 100.0), 0.0);
        assert_eq!(wrap_coord(-1.0, 100.0), 99.0);
        assert_eq!(wrap_coord(250.0, 100.0), 50.0);
        let tiny = wrap_coord(-1e-18, 100.0);
        assert!((0.0..100.0).contains(&tiny));
        assert_eq!(wrap_coord(5.0, 0.0), 0.0);
    }

    #[test]
    fn damping_never_increases_speed_without_pointer() {
        let config = ParticleConfig::default();
        let bounds = Size::new(400.0, 300.0);
        let mut p = still(200.0, 150.0);
        p.vel = Vec2::new(0.3, -0.2);
        for _ in 0..1000 {
            let before = p.vel.hypot();
            p.update(PointerState::Away, bounds, &config);
            let after = p.vel.hypot();
            assert!(after <= before);
            assert!(after > 0.0);
        }
    }

    #[test]
    fn update_moves_then_wraps() {
        let config = ParticleConfig::default();
        let bounds = Size::new(100.0, 100.0);
        let mut p = still(99.8, 0.1);
        p.vel = Vec2::new(0.5, -0.5);
        p.update(PointerState::Away, bounds, &config);
        assert!((p.pos.x - 0.3).abs() < 1e-9);
        assert!((p.pos.y - 99.6).abs() < 1e-9);
        // Velocity survives the wrap (only damped).
        assert!((p.vel.x - 0.5 * 0.999).abs() < 1e-12);
    }

    #[test]
    fn connection_alpha_falls_to_zero() {
        assert_eq!(connection_alpha(0.0, 150.0, 0.15), 0.15);
        assert_eq!(connection_alpha(150.0, 150.0, 0.15), 0.0);
        assert_eq!(connection_alpha(200.0, 150.0, 0.15), 0.0);
        let mut prev = f64::INFINITY;
        for d in 0..150 {
            let a = connection_alpha(d as f64, 150.0, 0.15);
            assert!(a < prev);
            prev = a;
        }
    }

    #[test]
    fn connections_visit_each_close_pair_once() {
        let config = ParticleConfig {
            count: 3,
            ..ParticleConfig::default()
        };
        let mut rand = || 0.5;
        let mut field = ParticleField::new(config, Size::new(1000.0, 1000.0), &mut rand);
        field.particles[0] = still(0.0, 0.0);
        field.particles[1] = still(100.0, 0.0);
        field.particles[2] = still(400.0, 0.0);

        let mut seen = Vec::new();
        field.for_each_connection(|c| seen.push(c));
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].from, Point::new(0.0, 0.0));
        assert_eq!(seen[0].to, Point::new(100.0, 0.0));
        assert!((seen[0].alpha - (1.0 - 100.0 / 150.0) * 0.15).abs() < 1e-12);
    }

    #[test]
    fn pair_exactly_at_threshold_is_not_connected() {
        let config = ParticleConfig {
            count: 2,
            ..ParticleConfig::default()
        };
        let mut rand = || 0.5;
        let mut field = ParticleField::new(config, Size::new(1000.0, 1000.0), &mut rand);
        field.particles[0] = still(0.0, 0.0);
        field.particles[1] = still(150.0, 0.0);
        assert_eq!(field.connection_count(), 0);
    }

    #[test]
    fn default_field_stays_inline() {
        let mut rand = || 0.25;
        let field =
            ParticleField::new(ParticleConfig::default(), Size::new(640.0, 480.0), &mut rand);
        assert_eq!(field.particles().len(), 60);
        assert!(!field.particles.spilled());
    }
}
