//! Wave and shock tuning parameters.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use tendril_types::constants::SHOCK_AUTO_THRESHOLD;
use tendril_types::{TendrilError, TendrilResult};

/// Continuous ripple parameters.
///
/// ```text
/// amplitude(ε) = base_amplitude * (1 + amplitude_gain * |ε|)
/// frequency(ε) = base_frequency + frequency_gain * |ε|
/// wave(u, t)   = amplitude * sin(frequency * u * π + t * wave_speed)
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveParams {
    /// Phase advance rate (radians per second).
    pub wave_speed: f32,
    /// Ripple amplitude at zero strain (length units).
    pub base_amplitude: f32,
    /// Relative amplitude growth per unit of `|strain|`.
    pub amplitude_gain: f32,
    /// Half-wavelengths along the edge at zero strain.
    pub base_frequency: f32,
    /// Extra half-wavelengths per unit of `|strain|`.
    pub frequency_gain: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            wave_speed: 10.0,
            base_amplitude: 9.0,
            amplitude_gain: 1.0,
            base_frequency: 5.0,
            frequency_gain: 6.0,
        }
    }
}

impl WaveParams {
    pub fn amplitude(&self, strain: f32) -> f32 {
        self.base_amplitude * (1.0 + self.amplitude_gain * strain.abs())
    }

    pub fn frequency(&self, strain: f32) -> f32 {
        self.base_frequency + self.frequency_gain * strain.abs()
    }

    /// Ripple displacement at parameter `u` for a given time phase
    /// (`t_elapsed * wave_speed`, already reduced).
    pub fn displacement(&self, u: f32, strain: f32, time_phase: f32) -> f32 {
        self.amplitude(strain) * (self.frequency(strain) * u * PI + time_phase).sin()
    }
}

/// Transient pulse parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShockParams {
    /// Phase advance per second; the pulse lives `1 / speed` seconds.
    pub speed: f32,
    /// Gaussian standard deviation in edge-parameter units.
    pub width: f32,
    /// Peak displacement (length units).
    pub strength: f32,
    /// `|strain|` above which an idle pulse fires on its own.
    pub auto_threshold: f32,
}

impl Default for ShockParams {
    fn default() -> Self {
        Self {
            speed: 10.0,
            width: 0.08,
            strength: 60.0,
            auto_threshold: SHOCK_AUTO_THRESHOLD,
        }
    }
}

impl ShockParams {
    /// Gaussian bump centered on `phase`.
    pub fn bump(&self, u: f32, phase: f32) -> f32 {
        let d = u - phase;
        self.strength * (-(d * d) / (2.0 * self.width * self.width)).exp()
    }
}

/// Full perturbation configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerturbationConfig {
    pub wave: WaveParams,
    pub shock: ShockParams,
}

impl PerturbationConfig {
    pub fn validate(&self) -> TendrilResult<()> {
        let w = &self.wave;
        let finite = [
            w.wave_speed,
            w.base_amplitude,
            w.amplitude_gain,
            w.base_frequency,
            w.frequency_gain,
            self.shock.strength,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(TendrilError::InvalidConfig(
                "wave parameters and shock strength must be finite".into(),
            ));
        }
        if !(self.shock.speed > 0.0 && self.shock.speed.is_finite()) {
            return Err(TendrilError::InvalidConfig(format!(
                "shock speed must be positive, got {}",
                self.shock.speed
            )));
        }
        if !(self.shock.width > 0.0 && self.shock.width.is_finite()) {
            return Err(TendrilError::InvalidConfig(format!(
                "shock width must be positive, got {}",
                self.shock.width
            )));
        }
        if !(self.shock.auto_threshold >= 0.0) {
            return Err(TendrilError::InvalidConfig(format!(
                "shock auto threshold must be non-negative, got {}",
                self.shock.auto_threshold
            )));
        }
        Ok(())
    }
}
