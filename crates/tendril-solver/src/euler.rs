//! Symplectic (semi-implicit) Euler integrator.
//!
//! Per free node, per tick:
//!
//! ```text
//! v += (F / m) * dt
//! v *= damping
//! x += v * dt
//! ```
//!
//! No sub-stepping. Damping is a per-tick multiplier, not a rate, so a
//! chain damps faster at higher tick rates. The scheme stays bounded
//! while `k_eff * dt² / m` is well below 4; large strain-coupled
//! stiffness or long frames can still diverge.

use std::time::Instant;

use tendril_material::{ChainMaterial, SpringForceModel};
use tendril_math::Vec2;

use crate::config::ChainConfig;
use crate::forces::accumulate_forces;
use crate::state::ChainState;
use crate::strategy::{Integrator, StepResult};

/// Explicit Euler with velocity damping and an optional speed cap.
#[derive(Debug, Clone, PartialEq)]
pub struct SymplecticEuler {
    damping: f32,
    mass: f32,
    max_speed: Option<f32>,
}

impl SymplecticEuler {
    pub fn new(material: &ChainMaterial, max_speed: Option<f32>) -> Self {
        Self {
            damping: material.damping,
            mass: material.mass,
            max_speed,
        }
    }

    pub fn from_config(config: &ChainConfig) -> Self {
        Self::new(&config.material, config.max_speed)
    }
}

impl Integrator for SymplecticEuler {
    fn step(
        &mut self,
        state: &mut ChainState,
        model: &SpringForceModel,
        anchor: Vec2,
        dt: f32,
    ) -> StepResult {
        let start = Instant::now();
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

        // 1. Kinematic nodes follow the anchor.
        state.pin_kinematic(anchor);

        // 2. Spring forces on the pinned configuration.
        let field = accumulate_forces(state, model);

        let mut clamped_nodes = 0;
        let mut max_displacement = 0.0f32;

        // 3. Integrate free nodes. A zero step leaves them untouched.
        if dt > 0.0 {
            let inv_mass = 1.0 / self.mass;
            for (node, force) in state.nodes.iter_mut().zip(&field.forces) {
                if !node.is_free() {
                    continue;
                }

                let mut velocity = node.velocity + *force * inv_mass * dt;
                velocity *= self.damping;

                if let Some(cap) = self.max_speed {
                    let speed = velocity.length();
                    if speed > cap {
                        velocity *= cap / speed;
                        clamped_nodes += 1;
                    }
                }

                let displacement = velocity * dt;
                node.velocity = velocity;
                node.position += displacement;
                max_displacement = max_displacement.max(displacement.length());
            }
        }

        if clamped_nodes > 0 {
            tracing::warn!(clamped_nodes, "velocity cap engaged");
        }

        StepResult {
            peak_strain: field.peak_strain,
            skipped_edges: field.skipped_edges,
            clamped_nodes,
            max_displacement,
            wall_time: start.elapsed().as_secs_f64(),
        }
    }

    fn name(&self) -> &str {
        "symplectic_euler"
    }
}
