//! Integration tests for tendril-material.

use std::sync::Arc;

use tendril_material::{
    strain, ChainMaterial, LinearLaw, MaterialDatabase, PoissonCoupledLaw, SpringForceModel,
    StiffnessLaw,
};

// ─── Strain Tests ─────────────────────────────────────────────

#[test]
fn strain_is_relative_deviation() {
    assert!((strain(12.0, 10.0) - 0.2).abs() < 1e-6);
    assert!((strain(8.0, 10.0) + 0.2).abs() < 1e-6);
    assert_eq!(strain(10.0, 10.0), 0.0);
}

#[test]
fn strain_guards_zero_rest_length() {
    assert_eq!(strain(5.0, 0.0), 0.0);
}

// ─── StiffnessLaw Tests ───────────────────────────────────────

#[test]
fn poisson_law_scales_with_abs_strain() {
    let law = PoissonCoupledLaw::new(0.5);
    assert!((law.stiffness(10.0, 0.0) - 10.0).abs() < 1e-6);
    assert!((law.stiffness(10.0, 0.4) - 12.0).abs() < 1e-5);
    assert!((law.stiffness(10.0, -0.4) - 12.0).abs() < 1e-5);
    assert_eq!(law.name(), "poisson_coupled");
}

#[test]
fn negative_poisson_softens() {
    let law = PoissonCoupledLaw::new(-0.5);
    assert!(law.stiffness(10.0, 0.4) < 10.0);
}

#[test]
fn linear_law_ignores_strain() {
    let law = LinearLaw::new();
    assert_eq!(law.stiffness(8.0, 3.0), 8.0);
}

// ─── SpringForceModel Tests ───────────────────────────────────

#[test]
fn force_sign_symmetry_without_coupling() {
    let model = SpringForceModel::new(8.0, Arc::new(PoissonCoupledLaw::new(0.0)));
    let rest = 10.0;
    let eps = 0.2;
    let stretched = model.force(rest, rest * (1.0 + eps));
    let compressed = model.force(rest, rest * (1.0 - eps));
    assert!(stretched > 0.0);
    assert!(compressed < 0.0);
    assert!((stretched + compressed).abs() < 1e-4);
}

#[test]
fn force_sign_symmetry_holds_for_abs_coupling() {
    let model = SpringForceModel::new(8.0, Arc::new(PoissonCoupledLaw::new(0.7)));
    let stretched = model.force(10.0, 13.0);
    let compressed = model.force(10.0, 7.0);
    assert!((stretched + compressed).abs() < 1e-4);
}

#[test]
fn force_at_rest_is_zero() {
    let model = SpringForceModel::from_material(&ChainMaterial::default());
    assert_eq!(model.force(200.0, 200.0), 0.0);
}

#[test]
fn evaluate_reports_effective_stiffness() {
    let model = SpringForceModel::new(20.0, Arc::new(PoissonCoupledLaw::new(0.4)));
    let f = model.evaluate(0.5, 1.0);
    assert!((f.strain - 1.0).abs() < 1e-6);
    assert!((f.stiffness - 28.0).abs() < 1e-4);
    assert!((f.magnitude - 14.0).abs() < 1e-4);
    assert!((f.potential(0.5) - 0.5 * 28.0 * 0.25).abs() < 1e-4);
}

#[test]
fn from_material_picks_law() {
    let linear = SpringForceModel::from_material(&ChainMaterial::default());
    assert_eq!(linear.law_name(), "linear");

    let coupled = SpringForceModel::from_material(&MaterialDatabase::with_defaults()
        .get("snake")
        .unwrap()
        .clone());
    assert_eq!(coupled.law_name(), "poisson_coupled");
    assert_eq!(coupled.base_stiffness(), 20.0);
}

// ─── ChainMaterial Tests ──────────────────────────────────────

#[test]
fn default_material_is_valid() {
    ChainMaterial::default().validate().unwrap();
}

#[test]
fn rejects_bad_damping() {
    let mut m = ChainMaterial::default();
    m.damping = 0.0;
    assert!(m.validate().is_err());
    m.damping = 1.2;
    assert!(m.validate().is_err());
    m.damping = 1.0;
    assert!(m.validate().is_ok());
}

#[test]
fn rejects_non_positive_mass() {
    let mut m = ChainMaterial::default();
    m.mass = 0.0;
    assert!(m.validate().is_err());
    m.mass = -1.0;
    assert!(m.validate().is_err());
}

#[test]
fn rejects_non_finite_stiffness() {
    let mut m = ChainMaterial::default();
    m.base_stiffness = f32::NAN;
    assert!(m.validate().is_err());
}

#[test]
fn stiffness_number() {
    let m = ChainMaterial::default();
    let dt = 1.0 / 60.0;
    assert!((m.stiffness_number(dt) - 8.0 / 3600.0).abs() < 1e-7);
}

#[test]
fn material_toml_roundtrip_with_defaults() {
    let m: ChainMaterial = toml::from_str("base_stiffness = 12.0\nmass = 2.0").unwrap();
    assert_eq!(m.base_stiffness, 12.0);
    assert_eq!(m.mass, 2.0);
    assert_eq!(m.damping, 0.94); // filled from Default
}

// ─── MaterialDatabase Tests ──────────────────────────────────

#[test]
fn default_database_has_three_presets() {
    let db = MaterialDatabase::with_defaults();
    assert_eq!(db.len(), 3);
    assert_eq!(db.names(), vec!["pinned_segment", "sine_segment", "snake"]);
}

#[test]
fn presets_are_valid_and_safe() {
    let db = MaterialDatabase::with_defaults();
    for name in db.names() {
        let m = db.get(name).unwrap();
        m.validate().unwrap();
        assert!(m.has_safe_poisson_ratio(), "{name} has a negative ratio");
    }
}

#[test]
fn register_custom_material() {
    let mut db = MaterialDatabase::empty();
    assert!(db.is_empty());
    db.register(ChainMaterial {
        name: "rubber".into(),
        ..Default::default()
    });
    assert!(db.get("rubber").is_some());
    assert!(db.get("steel").is_none());
}
