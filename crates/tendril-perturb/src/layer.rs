//! Per-chain perturbation clock and displacement sampling.

use std::f64::consts::TAU;

use crate::params::PerturbationConfig;
use crate::shock::{ShockPulse, TriggerSource};

/// What changed during one [`PerturbationLayer::advance`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdvanceReport {
    /// The active pulse ran past the end of the edge this tick.
    pub expired: bool,
    /// A pulse was fired automatically this tick.
    pub auto_triggered: bool,
}

/// Wave clock plus shock pulse for one chain.
#[derive(Debug, Clone)]
pub struct PerturbationLayer {
    config: PerturbationConfig,
    shock: ShockPulse,
    /// Accumulated simulation time (seconds).
    elapsed: f64,
}

impl PerturbationLayer {
    pub fn new(config: PerturbationConfig) -> Self {
        Self {
            config,
            shock: ShockPulse::default(),
            elapsed: 0.0,
        }
    }

    pub fn config(&self) -> &PerturbationConfig {
        &self.config
    }

    pub fn shock(&self) -> &ShockPulse {
        &self.shock
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Advances the clock and pulse by `dt`, then checks the auto trigger
    /// against `strain` (the chain's peak signed strain this tick).
    pub fn advance(&mut self, dt: f32, strain: f32) -> AdvanceReport {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        self.elapsed += dt as f64;

        let expired = self.shock.advance(self.config.shock.speed * dt);
        if expired {
            tracing::debug!(elapsed = self.elapsed, "shock pulse expired");
        }

        let auto_triggered = self.try_auto_trigger(strain);

        AdvanceReport {
            expired,
            auto_triggered,
        }
    }

    /// Fires the pulse if `|strain|` exceeds the threshold and no pulse
    /// is travelling.
    pub fn try_auto_trigger(&mut self, strain: f32) -> bool {
        if strain.abs() <= self.config.shock.auto_threshold {
            return false;
        }
        let fired = self.shock.trigger(TriggerSource::Auto);
        if fired {
            tracing::debug!(strain, "shock pulse auto-triggered");
        }
        fired
    }

    /// External pulse request. Always (re)starts the sweep at phase 0.
    pub fn request_pulse(&mut self) {
        let restarted = self.shock.is_active();
        self.shock.trigger(TriggerSource::Manual);
        tracing::debug!(restarted, "shock pulse requested");
    }

    /// Wave time phase `t_elapsed * wave_speed`, reduced modulo 2π so that
    /// long sessions keep full `f32` precision in the sine argument.
    pub fn time_phase(&self) -> f32 {
        (self.elapsed * self.config.wave.wave_speed as f64).rem_euclid(TAU) as f32
    }

    /// Continuous ripple only.
    pub fn wave_displacement(&self, u: f32, strain: f32) -> f32 {
        self.config.wave.displacement(u, strain, self.time_phase())
    }

    /// Shock bump only; zero while idle.
    pub fn shock_displacement(&self, u: f32) -> f32 {
        if self.shock.is_active() {
            self.config.shock.bump(u, self.shock.phase())
        } else {
            0.0
        }
    }

    /// Combined perpendicular displacement at edge parameter `u`.
    pub fn displacement(&self, u: f32, strain: f32) -> f32 {
        self.wave_displacement(u, strain) + self.shock_displacement(u)
    }
}
