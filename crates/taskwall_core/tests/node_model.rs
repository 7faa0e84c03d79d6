use taskwall_core::{
    Link, ModelError, Node, Point, Size, DEFAULT_NODE_WIDTH, MIN_NODE_HEIGHT,
};
use uuid::Uuid;

#[test]
fn node_new_sets_defaults() {
    let node = Node::new(Point::new(120.0, 80.0));

    assert!(!node.uuid.is_nil());
    assert_eq!(node.origin, Point::new(120.0, 80.0));
    assert_eq!(node.size, Size::new(DEFAULT_NODE_WIDTH, MIN_NODE_HEIGHT));
    assert!(node.content.is_empty());
    assert!(!node.completed);
    node.validate().expect("fresh node should validate");
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Node::with_id(Uuid::nil(), Point::new(0.0, 0.0)).unwrap_err();
    assert_eq!(err, ModelError::NilUuid);
}

#[test]
fn validate_rejects_non_finite_position() {
    let mut node = Node::new(Point::new(0.0, 0.0));
    node.origin = Point::new(f64::NAN, 10.0);

    let err = node.validate().unwrap_err();
    assert!(matches!(err, ModelError::NonFinitePosition { .. }));
}

#[test]
fn validate_rejects_non_positive_size() {
    let mut node = Node::new(Point::new(0.0, 0.0));
    node.size = Size::new(0.0, 50.0);

    let err = node.validate().unwrap_err();
    assert!(matches!(err, ModelError::InvalidSize { .. }));
}

#[test]
fn toggle_completed_flips_and_reports_new_value() {
    let mut node = Node::new(Point::new(0.0, 0.0));

    assert!(node.toggle_completed());
    assert!(node.completed);
    assert!(!node.toggle_completed());
    assert!(!node.completed);
}

#[test]
fn fit_height_clamps_to_minimum() {
    let mut node = Node::new(Point::new(0.0, 0.0));

    node.fit_height(18.0);
    assert_eq!(node.size.height, MIN_NODE_HEIGHT);

    node.fit_height(140.0);
    assert_eq!(node.size.height, 140.0);
}

#[test]
fn node_serialization_uses_expected_wire_fields() {
    let node_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut node = Node::with_id(node_id, Point::new(100.0, 100.0)).unwrap();
    node.content = "ship the release".to_string();
    node.completed = true;

    let json = serde_json::to_value(&node).unwrap();
    assert_eq!(json["uuid"], node_id.to_string());
    assert_eq!(json["origin"]["x"], 100.0);
    assert_eq!(json["origin"]["y"], 100.0);
    assert_eq!(json["size"]["width"], DEFAULT_NODE_WIDTH);
    assert_eq!(json["size"]["height"], MIN_NODE_HEIGHT);
    assert_eq!(json["content"], "ship the release");
    assert_eq!(json["completed"], true);

    let decoded: Node = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, node);
}

#[test]
fn link_incidence_and_self_link() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let c = Uuid::new_v4();

    let link = Link::new(a, b);
    assert!(link.is_incident(a));
    assert!(link.is_incident(b));
    assert!(!link.is_incident(c));
    assert!(!link.is_self_link());

    let loop_link = Link::new(a, a);
    assert!(loop_link.is_self_link());
}
