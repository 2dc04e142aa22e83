//! Integration tests for tendril-types.

use tendril_types::{Color, EdgeId, NodeId, RenderMode, TendrilError};

// ─── ID Tests ──────────────────────────────────────────────────

#[test]
fn node_id_index() {
    let id = NodeId(42);
    assert_eq!(id.index(), 42);
}

#[test]
fn edge_id_endpoints() {
    let edge = EdgeId(7);
    assert_eq!(edge.index(), 7);
    assert_eq!(edge.near(), NodeId(7));
    assert_eq!(edge.far(), NodeId(8));
}

#[test]
fn ids_are_serializable() {
    let id = NodeId(100);
    let json = serde_json::to_string(&id).unwrap();
    let deserialized: NodeId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, deserialized);
}

// ─── RenderMode / Color Tests ─────────────────────────────────

#[test]
fn render_mode_snake_case() {
    let json = serde_json::to_string(&RenderMode::WaveSampled).unwrap();
    assert_eq!(json, "\"wave_sampled\"");
    assert!(RenderMode::WaveSampled.is_wave());
    assert!(!RenderMode::Thickness.is_wave());
    assert_eq!(RenderMode::default(), RenderMode::Thickness);
}

#[test]
fn color_channels() {
    let c = Color::rgb(1, 2, 3);
    assert_eq!((c.r(), c.g(), c.b()), (1, 2, 3));
    assert_eq!(Color::default(), Color::SPRING);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn error_display() {
    let err = TendrilError::InvalidConfig("mass must be positive".into());
    assert!(err.to_string().contains("mass must be positive"));
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: TendrilError = io.into();
    assert!(err.to_string().starts_with("I/O error"));
}
