//! Integration tests for tendril-solver.

use tendril_material::SpringForceModel;
use tendril_math::{Aabb, Vec2};
use tendril_solver::{
    accumulate_forces, ChainConfig, ChainState, ElasticChain, Integrator, NodeRole,
    SymplecticEuler,
};
use tendril_types::{Color, EdgeId, NodeId, RenderMode};

const DT: f32 = 1.0 / 60.0;

fn linear_config() -> ChainConfig {
    let mut config = ChainConfig::pinned_segment();
    config.material.poisson_ratio = 0.0;
    config
}

// ─── ChainState Construction Tests ────────────────────────────

#[test]
fn construct_places_nodes_behind_anchor() {
    let anchor = Vec2::new(100.0, 50.0);
    let state = ChainState::construct(anchor, 5, 10.0).unwrap();

    assert_eq!(state.node_count(), 5);
    assert_eq!(state.edge_count(), 4);
    assert_eq!(state.position(NodeId(0)), Vec2::new(60.0, 50.0));
    assert_eq!(state.anchor(), anchor);
    assert!(state.rest_lengths().iter().all(|&r| (r - 10.0).abs() < 1e-4));
    assert!(state.nodes().iter().all(|n| n.velocity == Vec2::ZERO));
}

#[test]
fn only_last_node_is_kinematic() {
    let state = ChainState::construct(Vec2::ZERO, 4, 1.0).unwrap();
    let roles: Vec<NodeRole> = state.nodes().iter().map(|n| n.role).collect();
    assert_eq!(
        roles,
        vec![NodeRole::Free, NodeRole::Free, NodeRole::Free, NodeRole::Kinematic]
    );
}

#[test]
fn construct_rejects_bad_topology() {
    assert!(ChainState::construct(Vec2::ZERO, 1, 10.0).is_err());
    assert!(ChainState::construct(Vec2::ZERO, 3, 0.0).is_err());
    assert!(ChainState::construct(Vec2::ZERO, 3, f32::NAN).is_err());
}

#[test]
fn from_positions_rejects_zero_rest_length() {
    let p = Vec2::new(3.0, 3.0);
    assert!(ChainState::from_positions(&[p, p]).is_err());
    assert!(ChainState::from_positions(&[p]).is_err());
}

#[test]
fn rest_length_depends_on_spawn_geometry() {
    let state =
        ChainState::from_positions(&[Vec2::new(0.0, 0.0), Vec2::new(30.0, 40.0)]).unwrap();
    assert!((state.rest_length(EdgeId(0)) - 50.0).abs() < 1e-5);
    assert_eq!(state.edge_strain(EdgeId(0)), 0.0);
}

// ─── Force Accumulation Tests ─────────────────────────────────

#[test]
fn forces_obey_third_law() {
    let mut state = ChainState::construct(Vec2::ZERO, 6, 2.0).unwrap();
    state.pin_kinematic(Vec2::new(7.0, -3.0));
    let model = SpringForceModel::from_material(&ChainConfig::snake().material);
    let field = accumulate_forces(&state, &model);

    let net = field.forces.iter().fold(Vec2::ZERO, |acc, f| acc + *f);
    assert!(net.length() < 1e-2);
    // Only the last edge is strained; the near node is pulled toward the anchor.
    assert!(field.forces[4].x > 0.0);
    assert_eq!(field.forces[0], Vec2::ZERO);
}

#[test]
fn zero_length_edge_is_skipped() {
    let mut state =
        ChainState::from_positions(&[Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)]).unwrap();
    state.pin_kinematic(Vec2::ZERO);
    let model = SpringForceModel::from_material(&linear_config().material);
    let field = accumulate_forces(&state, &model);
    assert_eq!(field.skipped_edges, 1);
    assert!(field.forces.iter().all(|f| *f == Vec2::ZERO));
}

// ─── Integrator Tests ─────────────────────────────────────────

#[test]
fn zero_dt_only_snaps_anchor() {
    let config = linear_config();
    let mut state =
        ChainState::from_positions(&[Vec2::new(0.0, 0.0), Vec2::new(200.0, 0.0)]).unwrap();
    let model = SpringForceModel::from_material(&config.material);
    let mut euler = SymplecticEuler::from_config(&config);

    // Build up some velocity first.
    euler.step(&mut state, &model, Vec2::new(300.0, 0.0), DT);
    let free_before = state.nodes()[0];
    assert!(free_before.velocity.length() > 0.0);

    let result = euler.step(&mut state, &model, Vec2::new(450.0, 10.0), 0.0);
    assert_eq!(state.nodes()[0], free_before);
    assert_eq!(state.anchor(), Vec2::new(450.0, 10.0));
    assert_eq!(state.velocity(NodeId(1)), Vec2::ZERO);
    assert_eq!(result.max_displacement, 0.0);
}

#[test]
fn negative_or_nan_dt_is_treated_as_zero() {
    let config = linear_config();
    let mut state =
        ChainState::from_positions(&[Vec2::new(0.0, 0.0), Vec2::new(200.0, 0.0)]).unwrap();
    let model = SpringForceModel::from_material(&config.material);
    let mut euler = SymplecticEuler::from_config(&config);

    euler.step(&mut state, &model, Vec2::new(400.0, 0.0), -1.0);
    euler.step(&mut state, &model, Vec2::new(400.0, 0.0), f32::NAN);
    assert_eq!(state.position(NodeId(0)), Vec2::ZERO);
    assert!(state.is_finite());
}

#[test]
fn velocity_cap_limits_speed() {
    let mut config = linear_config();
    config.max_speed = Some(5.0);
    let mut state =
        ChainState::from_positions(&[Vec2::new(0.0, 0.0), Vec2::new(200.0, 0.0)]).unwrap();
    let model = SpringForceModel::from_material(&config.material);
    let mut euler = SymplecticEuler::from_config(&config);

    let result = euler.step(&mut state, &model, Vec2::new(1000.0, 0.0), DT);
    assert_eq!(result.clamped_nodes, 1);
    assert!(state.velocity(NodeId(0)).length() <= 5.0 + 1e-4);
}

#[test]
fn integrator_name() {
    let euler = SymplecticEuler::from_config(&ChainConfig::default());
    assert_eq!(euler.name(), "symplectic_euler");
}

// ─── Stability Tests ──────────────────────────────────────────

#[test]
fn stretched_segment_converges_to_rest_length() {
    let mut chain = ElasticChain::new(linear_config(), Vec2::new(500.0, 300.0)).unwrap();
    let anchor = Vec2::new(600.0, 300.0);
    assert!(chain.config().material.stiffness_number(DT) < 4.0);

    for _ in 0..600 {
        chain.update(anchor, DT);
    }

    let d = chain.state().position(NodeId(0)).distance(anchor);
    assert!((d - 200.0).abs() < 0.5, "distance {d}");
    assert!(chain.kinetic_energy() < 1e-3);
}

#[test]
fn pinned_segment_holds_rest_length_for_five_seconds() {
    let anchor = Vec2::new(500.0, 300.0);
    let mut chain = ElasticChain::new(ChainConfig::pinned_segment(), anchor).unwrap();
    assert!((chain.state().rest_length(EdgeId(0)) - 200.0).abs() < 1e-3);

    for _ in 0..300 {
        chain.update(anchor, DT);
    }

    let d = chain.state().position(NodeId(0)).distance(anchor);
    assert!((d - 200.0).abs() < 2.0, "distance {d}");
}

#[test]
fn equilibrium_round_trip_with_large_dt() {
    let anchor = Vec2::new(320.0, 240.0);
    let mut config = ChainConfig::snake();
    config.node_count = 6;
    config.spacing = 25.0;
    let mut chain = ElasticChain::new(config, anchor).unwrap();

    chain.update(anchor, 1.0);

    let state = chain.state();
    for edge in state.edges() {
        assert!((state.edge_length(edge) - state.rest_length(edge)).abs() < 1e-4);
    }
    assert!(state.positions().all(|p| (p.y - anchor.y).abs() < 1e-4));
    assert_eq!(state.anchor(), anchor);
}

#[test]
fn snake_anchor_jump_respects_force_bound() {
    let config = ChainConfig::snake();
    let start = Vec2::new(450.0, 300.0);
    let mut chain = ElasticChain::new(config.clone(), start).unwrap();
    let jumped = start + Vec2::new(300.0, 0.0);

    // Expected per-node force bound from the pinned, pre-integration geometry.
    let mut pinned = chain.state().clone();
    pinned.pin_kinematic(jumped);
    let field = accumulate_forces(&pinned, chain.force_model());
    let before = chain.node_positions();

    let report = chain.update(jumped, DT);
    assert!(chain.state().is_finite());
    assert!(report.step.peak_strain > 500.0);

    let m = &config.material;
    for (i, node) in chain.state().nodes().iter().enumerate() {
        if !node.is_free() {
            continue;
        }
        let moved = node.position.distance(before[i]);
        let bound = m.damping * field.forces[i].length() * DT * DT / m.mass;
        assert!(moved <= bound * 1.001 + 1e-4, "node {i}: moved {moved} > {bound}");
    }

    // Only the node next to the anchor feels the jump on the first tick.
    for i in 0..18 {
        assert_eq!(chain.state().position(NodeId(i)), before[i as usize]);
    }
    assert!(chain.state().position(NodeId(18)).x > before[18].x);
}

// ─── ElasticChain Tests ───────────────────────────────────────

#[test]
fn new_rejects_invalid_config() {
    let mut config = ChainConfig::default();
    config.material.mass = 0.0;
    assert!(ElasticChain::new(config, Vec2::ZERO).is_err());

    let mut config = ChainConfig::default();
    config.node_count = 1;
    assert!(ElasticChain::new(config, Vec2::ZERO).is_err());
}

#[test]
fn manual_pulse_lifecycle() {
    let anchor = Vec2::new(500.0, 325.0);
    let mut chain = ElasticChain::new(ChainConfig::sine_segment(), anchor).unwrap();
    assert!(chain.is_wave_capable());

    let red = Color::rgb(255, 0, 0);
    assert!(chain.request_pulse(Some(red)));
    assert_eq!(chain.color(), red);
    assert!(chain.perturbation().unwrap().shock().is_active());

    let dt = 0.03; // speed 10 → 0.3 per tick → 4 ticks
    for _ in 0..3 {
        let report = chain.update(anchor, dt);
        assert!(!report.shock.unwrap().expired);
    }
    let report = chain.update(anchor, dt);
    assert!(report.shock.unwrap().expired);
    let shock = chain.perturbation().unwrap().shock();
    assert!(!shock.is_active());
    assert_eq!(shock.phase(), 0.0);
}

#[test]
fn pulse_request_on_plain_chain_is_refused() {
    let mut chain = ElasticChain::new(ChainConfig::snake(), Vec2::ZERO).unwrap();
    assert!(!chain.request_pulse(Some(Color::rgb(1, 2, 3))));
    assert_eq!(chain.color(), Color::default());
    assert!(chain.update(Vec2::ZERO, DT).shock.is_none());
}

#[test]
fn overstretch_auto_triggers_pulse() {
    let anchor = Vec2::new(500.0, 325.0);
    let mut chain = ElasticChain::new(ChainConfig::sine_segment(), anchor).unwrap();

    let report = chain.update(anchor + Vec2::new(100.0, 0.0), DT);
    assert!((report.step.peak_strain - 0.4).abs() < 1e-3);
    assert!(report.shock.unwrap().auto_triggered);
    assert!(chain.perturbation().unwrap().shock().is_active());
}

#[test]
fn reset_rebuilds_from_scratch() {
    let mut chain = ElasticChain::new(ChainConfig::sine_segment(), Vec2::ZERO).unwrap();
    chain.request_pulse(Some(Color::rgb(9, 9, 9)));
    for _ in 0..10 {
        chain.update(Vec2::new(80.0, 40.0), DT);
    }

    let anchor = Vec2::new(-50.0, 10.0);
    chain.reset(anchor).unwrap();

    assert_eq!(chain.tick(), 0);
    assert_eq!(chain.sim_time(), 0.0);
    assert_eq!(chain.color(), Color::default());
    assert_eq!(chain.state().anchor(), anchor);
    assert_eq!(chain.state().position(NodeId(0)), anchor - Vec2::new(250.0, 0.0));
    assert!(!chain.perturbation().unwrap().shock().is_active());
    assert_eq!(chain.perturbation().unwrap().elapsed(), 0.0);
}

#[test]
fn tick_and_time_accumulate() {
    let mut chain = ElasticChain::new(ChainConfig::default(), Vec2::ZERO).unwrap();
    chain.update(Vec2::ZERO, 0.5);
    chain.update(Vec2::ZERO, 0.0);
    assert_eq!(chain.tick(), 2);
    assert!((chain.sim_time() - 0.5).abs() < 1e-9);
}

#[test]
fn energies_are_zero_at_rest() {
    let chain = ElasticChain::new(ChainConfig::snake(), Vec2::new(10.0, 10.0)).unwrap();
    assert_eq!(chain.kinetic_energy(), 0.0);
    assert!(chain.elastic_energy() < 1e-9);
}

#[test]
fn first_node_hit_reports_lowest_index() {
    let chain = ElasticChain::new(ChainConfig::default(), Vec2::new(300.0, 0.0)).unwrap();
    // Nodes at x = 100 and x = 300.
    let target = Aabb::from_center_size(Vec2::new(110.0, 0.0), Vec2::new(10.0, 10.0));
    assert_eq!(chain.first_node_hit(&target, 15.0), Some(NodeId(0)));

    let far = Aabb::from_center_size(Vec2::new(200.0, 100.0), Vec2::new(10.0, 10.0));
    assert_eq!(chain.first_node_hit(&far, 15.0), None);
}

// ─── ChainConfig Tests ────────────────────────────────────────

#[test]
fn presets_validate() {
    for config in [
        ChainConfig::pinned_segment(),
        ChainConfig::sine_segment(),
        ChainConfig::snake(),
    ] {
        config.validate().unwrap();
    }
}

#[test]
fn wave_mode_requires_perturbation() {
    let mut config = ChainConfig::sine_segment();
    config.perturbation = None;
    assert!(config.validate().is_err());

    config.render_mode = RenderMode::Straight;
    assert!(config.validate().is_ok());
}

#[test]
fn rejects_non_positive_max_speed() {
    let mut config = ChainConfig::default();
    config.max_speed = Some(0.0);
    assert!(config.validate().is_err());
}

#[test]
fn config_serialization() {
    let config = ChainConfig::sine_segment();
    let json = serde_json::to_string(&config).unwrap();
    let recovered: ChainConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, config);
}

#[test]
fn config_from_toml() {
    let src = r#"
        node_count = 8
        spacing = 4.0
        render_mode = "straight"

        [material]
        base_stiffness = 15.0
        poisson_ratio = 0.2
    "#;
    let config: ChainConfig = toml::from_str(src).unwrap();
    assert_eq!(config.node_count, 8);
    assert_eq!(config.render_mode, RenderMode::Straight);
    assert_eq!(config.material.base_stiffness, 15.0);
    assert_eq!(config.material.damping, 0.94);
    assert!(config.perturbation.is_none());
    config.validate().unwrap();
}
