use taskwall_core::{
    LinkRegistry, Node, NodeRegistry, Point, RegistryError,
};
use uuid::Uuid;

fn registry_with_nodes(count: usize) -> (NodeRegistry, Vec<Uuid>) {
    let mut nodes = NodeRegistry::new();
    let ids = (0..count)
        .map(|i| {
            nodes
                .create(Point::new(i as f64 * 100.0, 50.0))
                .expect("node should register")
        })
        .collect();
    (nodes, ids)
}

#[test]
fn nodes_list_in_creation_order() {
    let (nodes, ids) = registry_with_nodes(3);

    let listed: Vec<Uuid> = nodes.iter().map(|node| node.uuid).collect();
    assert_eq!(listed, ids);
}

#[test]
fn node_ids_are_unique() {
    let (nodes, ids) = registry_with_nodes(10);

    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), nodes.len());
}

#[test]
fn node_create_rejects_non_finite_origin() {
    let mut nodes = NodeRegistry::new();
    let err = nodes
        .create(Point::new(f64::INFINITY, 0.0))
        .expect_err("non-finite origin must be rejected");
    assert!(matches!(err, RegistryError::Validation(_)));
}

#[test]
fn insert_rejects_duplicate_id() {
    let mut nodes = NodeRegistry::new();
    let node = Node::new(Point::new(0.0, 0.0));
    nodes.insert(node.clone()).expect("first insert should work");

    let err = nodes.insert(node).expect_err("duplicate id must be rejected");
    assert!(matches!(err, RegistryError::DuplicateNode(_)));
}

#[test]
fn node_remove_is_idempotent() {
    let (mut nodes, ids) = registry_with_nodes(2);

    assert!(nodes.remove(ids[0]).is_some());
    assert!(nodes.remove(ids[0]).is_none());
    assert!(nodes.remove(Uuid::new_v4()).is_none());
    assert_eq!(nodes.len(), 1);
}

#[test]
fn link_create_rejects_unknown_endpoints() {
    let (nodes, ids) = registry_with_nodes(1);
    let mut links = LinkRegistry::new();
    let stranger = Uuid::new_v4();

    let err = links
        .create(ids[0], stranger, &nodes)
        .expect_err("unknown target must be rejected");
    assert_eq!(err, RegistryError::InvalidReference(stranger));

    let err = links
        .create(stranger, ids[0], &nodes)
        .expect_err("unknown source must be rejected");
    assert_eq!(err, RegistryError::InvalidReference(stranger));
    assert!(links.is_empty());
}

#[test]
fn self_links_and_duplicates_are_permitted() {
    let (nodes, ids) = registry_with_nodes(2);
    let mut links = LinkRegistry::new();

    let loop_link = links
        .create(ids[0], ids[0], &nodes)
        .expect("self-link should be permitted");
    assert!(links.get(loop_link).expect("loop should exist").is_self_link());

    links
        .create(ids[0], ids[1], &nodes)
        .expect("pair should be permitted");
    links
        .create(ids[0], ids[1], &nodes)
        .expect("duplicate pair should be permitted");
    assert_eq!(links.len(), 3);
}

#[test]
fn link_remove_is_idempotent() {
    let (nodes, ids) = registry_with_nodes(2);
    let mut links = LinkRegistry::new();
    let link = links
        .create(ids[0], ids[1], &nodes)
        .expect("link should register");

    assert!(links.remove(link).is_some());
    assert!(links.remove(link).is_none());
    assert!(links.is_empty());
}

#[test]
fn remove_incident_returns_exactly_the_cascaded_set() {
    let (nodes, ids) = registry_with_nodes(3);
    let mut links = LinkRegistry::new();

    let incoming = links.create(ids[1], ids[0], &nodes).unwrap();
    let outgoing = links.create(ids[0], ids[2], &nodes).unwrap();
    let unrelated = links.create(ids[1], ids[2], &nodes).unwrap();

    let removed = links.remove_incident(ids[0]);
    let removed_ids: Vec<Uuid> = removed.iter().map(|link| link.uuid).collect();
    assert_eq!(removed_ids, vec![incoming, outgoing]);

    assert_eq!(links.len(), 1);
    assert!(links.get(unrelated).is_some());
    assert!(links.iter().all(|link| !link.is_incident(ids[0])));
}

#[test]
fn remove_incident_on_unlinked_node_is_a_no_op() {
    let (nodes, ids) = registry_with_nodes(2);
    let mut links = LinkRegistry::new();
    links.create(ids[0], ids[0], &nodes).unwrap();

    let removed = links.remove_incident(ids[1]);
    assert!(removed.is_empty());
    assert_eq!(links.len(), 1);
}
