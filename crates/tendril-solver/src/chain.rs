//! Elastic chain aggregate.
//!
//! Owns everything one game entity needs: configuration, state, force
//! model, integrator and (for wave-capable chains) the perturbation
//! layer. The host calls [`ElasticChain::update`] once per frame with
//! the anchor position it read at the start of that frame.

use tendril_material::SpringForceModel;
use tendril_math::{Aabb, Vec2};
use tendril_perturb::{AdvanceReport, PerturbationLayer};
use tendril_types::{Color, NodeId, RenderMode, TendrilResult};

use crate::config::ChainConfig;
use crate::euler::SymplecticEuler;
use crate::state::ChainState;
use crate::strategy::{Integrator, StepResult};

/// Outcome of one [`ElasticChain::update`].
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub step: StepResult,
    /// `None` for chains without a perturbation layer.
    pub shock: Option<AdvanceReport>,
}

/// One simulated chain entity.
pub struct ElasticChain {
    config: ChainConfig,
    state: ChainState,
    force_model: SpringForceModel,
    integrator: Box<dyn Integrator>,
    perturbation: Option<PerturbationLayer>,
    color: Color,
    tick: u64,
    sim_time: f64,
}

impl ElasticChain {
    /// Builds a chain behind `anchor` with the default integrator.
    pub fn new(config: ChainConfig, anchor: Vec2) -> TendrilResult<Self> {
        let integrator = Box::new(SymplecticEuler::from_config(&config));
        Self::with_integrator(config, anchor, integrator)
    }

    /// Builds a chain with a caller-supplied integrator.
    pub fn with_integrator(
        config: ChainConfig,
        anchor: Vec2,
        integrator: Box<dyn Integrator>,
    ) -> TendrilResult<Self> {
        config.validate()?;
        let state = ChainState::construct(anchor, config.node_count, config.spacing)?;
        let force_model = SpringForceModel::from_material(&config.material);
        let perturbation = config.perturbation.clone().map(PerturbationLayer::new);

        tracing::debug!(
            nodes = config.node_count,
            spacing = config.spacing,
            law = force_model.law_name(),
            integrator = integrator.name(),
            "elastic chain constructed"
        );

        Ok(Self {
            config,
            state,
            force_model,
            integrator,
            perturbation,
            color: Color::default(),
            tick: 0,
            sim_time: 0.0,
        })
    }

    /// Advances the chain by `dt` with the anchor at `anchor`.
    pub fn update(&mut self, anchor: Vec2, dt: f32) -> TickReport {
        let step = self
            .integrator
            .step(&mut self.state, &self.force_model, anchor, dt);

        let shock = self
            .perturbation
            .as_mut()
            .map(|layer| layer.advance(dt, step.peak_strain));

        self.tick += 1;
        if dt.is_finite() && dt > 0.0 {
            self.sim_time += dt as f64;
        }

        TickReport { step, shock }
    }

    /// Fires (or restarts) the shock pulse, optionally recoloring the chain.
    ///
    /// Returns false, and changes nothing, if the chain has no
    /// perturbation layer.
    pub fn request_pulse(&mut self, color: Option<Color>) -> bool {
        let Some(layer) = self.perturbation.as_mut() else {
            return false;
        };
        layer.request_pulse();
        if let Some(color) = color {
            self.color = color;
        }
        true
    }

    /// Rebuilds the chain from its configuration behind a new anchor.
    ///
    /// State, pulse, color and clocks start over; the integrator is kept.
    pub fn reset(&mut self, anchor: Vec2) -> TendrilResult<()> {
        self.state = ChainState::construct(anchor, self.config.node_count, self.config.spacing)?;
        self.perturbation = self.config.perturbation.clone().map(PerturbationLayer::new);
        self.color = Color::default();
        self.tick = 0;
        self.sim_time = 0.0;
        tracing::debug!(x = anchor.x, y = anchor.y, "elastic chain reset");
        Ok(())
    }

    // ─── Accessors ───

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    pub fn state(&self) -> &ChainState {
        &self.state
    }

    pub fn force_model(&self) -> &SpringForceModel {
        &self.force_model
    }

    pub fn integrator_name(&self) -> &str {
        self.integrator.name()
    }

    pub fn perturbation(&self) -> Option<&PerturbationLayer> {
        self.perturbation.as_ref()
    }

    pub fn render_mode(&self) -> RenderMode {
        self.config.render_mode
    }

    pub fn is_wave_capable(&self) -> bool {
        self.perturbation.is_some()
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    pub fn node_positions(&self) -> Vec<Vec2> {
        self.state.positions().collect()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.state.kinetic_energy(self.config.material.mass)
    }

    pub fn elastic_energy(&self) -> f64 {
        self.state.elastic_energy(&self.force_model)
    }

    pub fn first_node_hit(&self, target: &Aabb, radius: f32) -> Option<NodeId> {
        self.state.first_node_hit(target, radius)
    }
}

impl std::fmt::Debug for ElasticChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElasticChain")
            .field("nodes", &self.state.node_count())
            .field("integrator", &self.integrator.name())
            .field("wave_capable", &self.is_wave_capable())
            .field("tick", &self.tick)
            .finish()
    }
}
