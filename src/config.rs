//! Runtime tuning knobs for the field.
//!
//! `FieldConfig` holds the settings the host page can override before
//! starting the engine:
//! - population size,
//! - connection and repulsion distances (pixels),
//! - spawn speed scale and accent probability.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Copy, Clone, Debug)]
pub struct FieldConfig {
    /// How many particles are spawned at start. The population is fixed
    /// for the engine's whole lifetime.
    pub particle_count: u32,
    /// Pair distance below which a connective edge is drawn, in pixels.
    pub connection_distance: f64,
    /// Spawn velocity scale: each component is uniform in
    /// `[-move_speed / 2, move_speed / 2]`. Zero gives a static field.
    pub move_speed: f64,
    /// Pointer distance below which particles get pushed away, in pixels.
    pub repulsion_radius: f64,
    /// Chance for a spawned particle to carry the accent tint.
    pub accent_probability: f64,
}

#[wasm_bindgen]
impl FieldConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> FieldConfig {
        FieldConfig::default()
    }
}

impl Default for FieldConfig {
    fn default() -> FieldConfig {
        FieldConfig {
            particle_count: 120,
            connection_distance: 160.0,
            move_speed: 0.7,
            repulsion_radius: 150.0,
            accent_probability: 0.35,
        }
    }
}

impl FieldConfig {
    /// Pull host-supplied knobs into their valid ranges. Distances make no
    /// sense negative and the probability is a probability.
    pub fn sanitized(mut self) -> FieldConfig {
        self.connection_distance = self.connection_distance.max(0.0);
        self.repulsion_radius = self.repulsion_radius.max(0.0);
        self.accent_probability = self.accent_probability.max(0.0).min(1.0);
        self
    }
}
