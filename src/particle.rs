// Simple particle struct to keep track of individual position, velocity,
// size, and shade. The per-frame motion rules live here as free functions
// over the plain value, so none of them need a drawing surface.

use crate::color::Shade;
use vecmath;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
    pub shade: Shade,
}

impl Particle {
    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, radius: f64, shade: Shade) -> Particle {
        Particle {
            pos,
            vel,
            radius,
            shade,
        }
    }
}

/// Move the particle by one frame of its velocity.
pub fn advance(particle: &mut Particle) {
    particle.pos = vecmath::vec2_add(particle.pos, particle.vel);
}

/// Bounce off the drawable rectangle: negate a velocity component once its
/// axis has crossed `[0, width]` / `[0, height]`. The overshooting position
/// is kept as-is; the next advance carries the particle back inside.
pub fn reflect(particle: &mut Particle, width: f64, height: f64) {
    if particle.pos[0] < 0.0 || particle.pos[0] > width {
        particle.vel[0] = -particle.vel[0];
    }
    if particle.pos[1] < 0.0 || particle.pos[1] > height {
        particle.vel[1] = -particle.vel[1];
    }
}

/// One-frame positional push away from the pointer. Strength falls off
/// linearly from 1 at the pointer to 0 at `radius`; stored velocity is
/// never touched. A zero separation would have no direction, so it
/// contributes nothing.
pub fn repel(particle: &mut Particle, pointer: Vector2<f64>, radius: f64) {
    let to_pointer = vecmath::vec2_sub(pointer, particle.pos);
    let distance = vecmath::vec2_len(to_pointer);
    if distance <= 0.0 || distance >= radius {
        return;
    }
    let force = (radius - distance) / radius;
    let push = vecmath::vec2_scale(vecmath::vec2_normalized(to_pointer), force);
    particle.pos = vecmath::vec2_sub(particle.pos, push);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drifting(pos: Vector2<f64>, vel: Vector2<f64>) -> Particle {
        Particle::new(pos, vel, 1.5, Shade::Primary)
    }

    #[test]
    fn advance_adds_velocity() {
        let mut p = drifting([10.0, 20.0], [0.5, -0.25]);
        advance(&mut p);
        assert_eq!(p.pos, [10.5, 19.75]);
        assert_eq!(p.vel, [0.5, -0.25]);
    }

    #[test]
    fn reflect_flips_only_the_crossed_axis() {
        let mut p = drifting([100.4, 50.0], [0.7, 0.3]);
        reflect(&mut p, 100.0, 100.0);
        assert_eq!(p.vel, [-0.7, 0.3]);
        // Overshoot is deliberate; the position is not pulled back in
        assert_eq!(p.pos, [100.4, 50.0]);
    }

    #[test]
    fn reflect_handles_both_axes_independently() {
        let mut p = drifting([-0.2, -0.1], [-0.5, -0.4]);
        reflect(&mut p, 100.0, 100.0);
        assert_eq!(p.vel, [0.5, 0.4]);
    }

    #[test]
    fn reflect_leaves_in_bounds_particle_alone() {
        let mut p = drifting([50.0, 50.0], [0.7, -0.7]);
        reflect(&mut p, 100.0, 100.0);
        assert_eq!(p.vel, [0.7, -0.7]);
    }

    #[test]
    fn crossing_particle_is_back_inside_within_one_advance() {
        let mut p = drifting([99.5, 50.0], [1.0, 0.0]);
        advance(&mut p);
        reflect(&mut p, 100.0, 100.0);
        assert!(p.pos[0] > 100.0);
        advance(&mut p);
        reflect(&mut p, 100.0, 100.0);
        assert!(p.pos[0] >= 0.0 && p.pos[0] <= 100.0);
    }

    #[test]
    fn repel_pushes_directly_away_from_pointer() {
        let mut p = drifting([100.0, 100.0], [0.0, 0.0]);
        repel(&mut p, [50.0, 100.0], 150.0);
        assert!(p.pos[0] > 100.0, "expected a push along +x, got {:?}", p.pos);
        assert_eq!(p.pos[1], 100.0);
        assert_eq!(p.vel, [0.0, 0.0]);
    }

    #[test]
    fn repel_magnitude_is_linear_falloff() {
        // 50px from the pointer with a 150px radius: force = (150 - 50) / 150
        let mut p = drifting([100.0, 100.0], [0.0, 0.0]);
        repel(&mut p, [50.0, 100.0], 150.0);
        let moved = p.pos[0] - 100.0;
        let expected = (150.0 - 50.0) / 150.0;
        assert!(
            (moved - expected).abs() < 1e-12,
            "expected {} got {}",
            expected,
            moved
        );
    }

    #[test]
    fn repel_is_zero_at_the_radius_boundary() {
        let mut p = drifting([200.0, 100.0], [0.0, 0.0]);
        repel(&mut p, [50.0, 100.0], 150.0);
        assert_eq!(p.pos, [200.0, 100.0]);
    }

    #[test]
    fn repel_is_monotonic_in_distance() {
        let mut near = drifting([60.0, 100.0], [0.0, 0.0]);
        let mut far = drifting([120.0, 100.0], [0.0, 0.0]);
        repel(&mut near, [50.0, 100.0], 150.0);
        repel(&mut far, [50.0, 100.0], 150.0);
        let near_push = near.pos[0] - 60.0;
        let far_push = far.pos[0] - 120.0;
        assert!(near_push > far_push && far_push > 0.0);
    }

    #[test]
    fn repel_guards_zero_distance() {
        let mut p = drifting([50.0, 100.0], [0.0, 0.0]);
        repel(&mut p, [50.0, 100.0], 150.0);
        assert!(p.pos[0].is_finite() && p.pos[1].is_finite());
        assert_eq!(p.pos, [50.0, 100.0]);
    }
}
