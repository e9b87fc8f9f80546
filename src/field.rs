// Headless simulation core. Owns the particle population, the tracked
// pointer, and the drawable bounds; knows nothing about canvases. The
// engine in lib.rs ticks it and hands its output to the renderer.

use crate::color::Shade;
use crate::config::FieldConfig;
use crate::particle::{self, Particle};
use rand::Rng;
use vecmath::Vector2;
extern crate nalgebra_glm as glm;

/// A connective edge between two particles close enough to link. Opacity
/// fades linearly from 1 at zero separation to 0 at the connection
/// distance; the accent tint wins when either endpoint carries it.
#[derive(Copy, Clone, Debug)]
pub struct Edge {
    pub from: Vector2<f64>,
    pub to: Vector2<f64>,
    pub opacity: f64,
    pub shade: Shade,
}

pub struct FieldSim {
    pub config: FieldConfig,
    pub particles: Vec<Particle>,
    pub width: f64,
    pub height: f64,
    pub pointer: Option<Vector2<f64>>,
}

impl FieldSim {
    /// Spawn the full population uniformly over the drawable rectangle.
    /// Positions, velocities, radii, and shades are all fixed here; nothing
    /// is ever added or removed afterwards.
    pub fn new(config: FieldConfig, width: f64, height: f64) -> FieldSim {
        let config = config.sanitized();
        let mut rng = rand::thread_rng();
        let mut particles = Vec::with_capacity(config.particle_count as usize);
        for _ in 0..config.particle_count {
            let pos = [rng.gen::<f64>() * width, rng.gen::<f64>() * height];
            let vel = [
                (rng.gen::<f64>() - 0.5) * config.move_speed,
                (rng.gen::<f64>() - 0.5) * config.move_speed,
            ];
            let radius = rng.gen::<f64>() * 1.5 + 1.0;
            let shade = if rng.gen::<f64>() < config.accent_probability {
                Shade::Accent
            } else {
                Shade::Primary
            };
            particles.push(Particle::new(pos, vel, radius, shade));
        }
        FieldSim {
            config,
            particles,
            width,
            height,
            pointer: None,
        }
    }

    /// New drawable bounds. Particle coordinates are left alone; anything
    /// now out of bounds drifts back in through its own reflection.
    pub fn set_bounds(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer = Some([x, y]);
    }

    /// Suspends repulsion until the next pointer move.
    pub fn pointer_left(&mut self) {
        self.pointer = None;
    }

    /// One tick over the whole population, in order: advance, bounce off
    /// the bounds, then the pointer push when a pointer is known.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            particle::advance(p);
            particle::reflect(p, self.width, self.height);
            if let Some(pointer) = self.pointer {
                particle::repel(p, pointer, self.config.repulsion_radius);
            }
        }
    }

    /// Every unordered pair currently within connection distance. Visits
    /// each pair exactly once; a particle is never paired with itself.
    pub fn connections(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        let max_distance = self.config.connection_distance;
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = &self.particles[i];
                let b = &self.particles[j];
                let distance =
                    glm::length(&glm::vec2(a.pos[0] - b.pos[0], a.pos[1] - b.pos[1]));
                if distance < max_distance {
                    let shade = if a.shade == Shade::Accent || b.shade == Shade::Accent {
                        Shade::Accent
                    } else {
                        Shade::Primary
                    };
                    edges.push(Edge {
                        from: a.pos,
                        to: b.pos,
                        opacity: 1.0 - distance / max_distance,
                        shade,
                    });
                }
            }
        }
        edges
    }
}
