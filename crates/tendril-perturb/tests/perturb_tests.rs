//! Integration tests for tendril-perturb.

use std::f32::consts::PI;

use tendril_perturb::{
    PerturbationConfig, PerturbationLayer, ShockParams, ShockPulse, TriggerSource, WaveParams,
};

fn layer() -> PerturbationLayer {
    PerturbationLayer::new(PerturbationConfig::default())
}

// ─── WaveParams Tests ─────────────────────────────────────────

#[test]
fn wave_grows_with_strain() {
    let w = WaveParams::default();
    assert!((w.amplitude(0.0) - 9.0).abs() < 1e-6);
    assert!((w.amplitude(-0.5) - 13.5).abs() < 1e-5);
    assert!((w.frequency(0.0) - 5.0).abs() < 1e-6);
    assert!((w.frequency(0.5) - 8.0).abs() < 1e-6);
}

#[test]
fn wave_displacement_matches_formula() {
    let w = WaveParams::default();
    let u = 0.3;
    let expected = 9.0 * (5.0 * u * PI + 1.0).sin();
    assert!((w.displacement(u, 0.0, 1.0) - expected).abs() < 1e-4);
}

// ─── ShockParams Tests ────────────────────────────────────────

#[test]
fn bump_peaks_at_phase() {
    let s = ShockParams::default();
    assert!((s.bump(0.4, 0.4) - 60.0).abs() < 1e-4);
    assert!(s.bump(0.4 + 0.08, 0.4) < 60.0 * 0.61);
    assert!(s.bump(1.0, 0.0) < 1e-6);
}

// ─── ShockPulse Tests ─────────────────────────────────────────

#[test]
fn pulse_lifecycle() {
    let mut p = ShockPulse::default();
    assert!(!p.is_active());
    assert!(p.trigger(TriggerSource::Manual));
    assert!(p.is_active());
    assert_eq!(p.phase(), 0.0);

    assert!(!p.advance(0.6));
    assert!(p.advance(0.6));
    assert!(!p.is_active());
    assert_eq!(p.phase(), 0.0);
}

#[test]
fn pulse_exactly_one_stays_active() {
    let mut p = ShockPulse::default();
    p.trigger(TriggerSource::Manual);
    assert!(!p.advance(1.0));
    assert!(p.is_active());
}

#[test]
fn auto_trigger_while_active_is_noop() {
    let mut p = ShockPulse::default();
    p.trigger(TriggerSource::Auto);
    p.advance(0.3);
    let before = p;
    assert!(!p.trigger(TriggerSource::Auto));
    assert_eq!(p, before);
}

#[test]
fn manual_trigger_restarts() {
    let mut p = ShockPulse::default();
    p.trigger(TriggerSource::Manual);
    p.advance(0.5);
    assert!(p.trigger(TriggerSource::Manual));
    assert_eq!(p.phase(), 0.0);
    assert!(p.is_active());
}

// ─── PerturbationLayer Tests ──────────────────────────────────

#[test]
fn lifecycle_takes_ceil_ticks() {
    let mut l = layer();
    l.request_pulse();
    let dt = 0.03; // speed * dt = 0.3 → ceil(1 / 0.3) = 4 ticks
    for tick in 1..=3 {
        let r = l.advance(dt, 0.0);
        assert!(!r.expired, "expired early at tick {tick}");
        assert!(l.shock().is_active());
    }
    let r = l.advance(dt, 0.0);
    assert!(r.expired);
    assert!(!l.shock().is_active());
    assert_eq!(l.shock().phase(), 0.0);
}

#[test]
fn auto_trigger_above_threshold() {
    let mut l = layer();
    let r = l.advance(0.01, 0.2);
    assert!(!r.auto_triggered);
    let r = l.advance(0.01, -0.3);
    assert!(r.auto_triggered);
    assert!(l.shock().is_active());
    assert_eq!(l.shock().phase(), 0.0);
}

#[test]
fn auto_trigger_does_not_restart_active_pulse() {
    let mut l = layer();
    l.advance(0.01, 0.5);
    let r = l.advance(0.02, 0.5);
    assert!(!r.auto_triggered);
    assert!((l.shock().phase() - 0.2).abs() < 1e-6);
}

#[test]
fn request_pulse_restarts_active_pulse() {
    let mut l = layer();
    l.request_pulse();
    l.advance(0.05, 0.0);
    assert!(l.shock().phase() > 0.0);
    l.request_pulse();
    assert_eq!(l.shock().phase(), 0.0);
}

#[test]
fn zero_dt_keeps_phase() {
    let mut l = layer();
    l.request_pulse();
    l.advance(0.02, 0.0);
    let phase = l.shock().phase();
    l.advance(0.0, 0.0);
    l.advance(-1.0, 0.0);
    l.advance(f32::NAN, 0.0);
    assert_eq!(l.shock().phase(), phase);
    assert!((l.elapsed() - 0.02).abs() < 1e-6);
}

#[test]
fn displacement_adds_shock_bump() {
    let mut l = layer();
    l.advance(0.1, 0.0);
    let quiet = l.displacement(0.0, 0.0);
    l.request_pulse();
    let shocked = l.displacement(0.0, 0.0);
    assert!((shocked - quiet - 60.0).abs() < 1e-3);
    assert_eq!(l.shock_displacement(0.5), l.config().shock.bump(0.5, 0.0));
}

#[test]
fn time_phase_wraps() {
    let mut l = layer();
    for _ in 0..10_000 {
        l.advance(1.0 / 60.0, 0.0);
    }
    let phase = l.time_phase();
    assert!((0.0..std::f32::consts::TAU + 1e-4).contains(&phase));
}

// ─── Config Tests ─────────────────────────────────────────────

#[test]
fn default_config_is_valid() {
    PerturbationConfig::default().validate().unwrap();
}

#[test]
fn rejects_zero_width_and_speed() {
    let mut c = PerturbationConfig::default();
    c.shock.width = 0.0;
    assert!(c.validate().is_err());

    let mut c = PerturbationConfig::default();
    c.shock.speed = -1.0;
    assert!(c.validate().is_err());
}

#[test]
fn config_from_partial_toml() {
    let c: PerturbationConfig = toml::from_str("[shock]\nstrength = 30.0\n").unwrap();
    assert_eq!(c.shock.strength, 30.0);
    assert_eq!(c.shock.speed, 10.0);
    assert_eq!(c.wave, WaveParams::default());
}
