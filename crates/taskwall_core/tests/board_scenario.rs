//! End-to-end scenario: create two cards, link them, drag one, delete the
//! other, and check every invariant along the way.

use taskwall_core::{
    Board, EditKey, GestureMode, HeadlessSurface, InputEvent, Point, PointerButton,
    PointerTarget,
};

#[test]
fn create_link_drag_delete_scenario() {
    let mut board = Board::new(HeadlessSurface::new());

    // Two canvas clicks create two cards at the click points.
    board
        .handle(InputEvent::Click {
            at: Point::new(100.0, 100.0),
            target: PointerTarget::Canvas,
        })
        .expect("first click should create");
    board
        .handle(InputEvent::Click {
            at: Point::new(300.0, 100.0),
            target: PointerTarget::Canvas,
        })
        .expect("second click should create");
    assert_eq!(board.nodes().len(), 2);

    let ids: Vec<_> = board.nodes().iter().map(|node| node.uuid).collect();
    let (a, b) = (ids[0], ids[1]);

    // Modifier press on A arms the link; modifier press on B completes it.
    board
        .handle(InputEvent::PointerDown {
            at: Point::new(150.0, 120.0),
            target: PointerTarget::Node(a),
            button: PointerButton::Primary,
            link_modifier: true,
        })
        .expect("link press should arm");
    board
        .handle(InputEvent::PointerDown {
            at: Point::new(350.0, 120.0),
            target: PointerTarget::Node(b),
            button: PointerButton::Primary,
            link_modifier: true,
        })
        .expect("link press should complete");

    assert_eq!(board.links().len(), 1);
    let link = board.links().iter().next().expect("link should exist");
    assert_eq!((link.source, link.target), (a, b));

    let link_id = link.uuid;
    let (from, to) = board
        .surface()
        .line_endpoints(link_id)
        .expect("line visual should be realized");
    assert_eq!(from, Point::new(200.0, 125.0));
    assert_eq!(to, Point::new(400.0, 125.0));

    // Drag A to (500, 500): press at (150, 120) grabs with offset (50, 20).
    board
        .handle(InputEvent::PointerDown {
            at: Point::new(150.0, 120.0),
            target: PointerTarget::Node(a),
            button: PointerButton::Primary,
            link_modifier: false,
        })
        .expect("press should start drag");
    board
        .handle(InputEvent::PointerMove {
            at: Point::new(550.0, 520.0),
            target: PointerTarget::Node(a),
        })
        .expect("move should drag");
    board
        .handle(InputEvent::PointerUp {
            at: Point::new(550.0, 520.0),
        })
        .expect("up should end drag");

    assert!(matches!(board.mode(), GestureMode::Idle));
    assert_eq!(
        board.nodes().get(a).expect("A should exist").origin,
        Point::new(500.0, 500.0)
    );

    // The link followed A's anchor; B's endpoint is untouched.
    let (from, to) = board
        .surface()
        .line_endpoints(link_id)
        .expect("line visual should still exist");
    assert_eq!(from, Point::new(600.0, 525.0));
    assert_eq!(to, Point::new(400.0, 125.0));

    // Deleting B cascades the link atomically.
    board
        .handle(InputEvent::Key {
            key: EditKey::Delete,
            node: b,
        })
        .expect("delete should cascade");

    assert!(board.links().is_empty());
    assert_eq!(board.nodes().len(), 1);
    assert!(board.nodes().contains(a));
    assert_eq!(board.surface().node_count(), 1);
    assert_eq!(board.surface().line_count(), 0);
    assert_eq!(board.surface().active_captures(), 0);
}
