//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskwall_core` linkage.
//! - Drive one deterministic scripted session on the headless surface.

use taskwall_core::{
    anchor_center, Board, BoardResult, HeadlessSurface, Point, PointerButton, PointerTarget,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("taskwall smoke failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> BoardResult<()> {
    println!("taskwall_core version={}", taskwall_core::core_version());

    let mut board = Board::new(HeadlessSurface::new());

    let a = board.create_node(Point::new(100.0, 100.0))?;
    let b = board.create_node(Point::new(300.0, 100.0))?;
    let link = board.create_link(a, b)?;
    println!("nodes={} links={}", board.nodes().len(), board.links().len());

    // Drag card A by 400x400 and confirm the link followed its anchor.
    board.pointer_down(
        Point::new(110.0, 110.0),
        PointerTarget::Node(a),
        PointerButton::Primary,
        false,
    )?;
    board.pointer_move(Point::new(510.0, 510.0), PointerTarget::Node(a))?;
    board.pointer_up(Point::new(510.0, 510.0))?;

    let anchor = anchor_center(board.surface(), a)?;
    println!("anchor_a=({},{})", anchor.x, anchor.y);
    if let Some((from, to)) = board.surface().line_endpoints(link) {
        println!("link_from=({},{}) link_to=({},{})", from.x, from.y, to.x, to.y);
    }

    board.remove_node(b);
    println!(
        "after_delete nodes={} links={} captures={}",
        board.nodes().len(),
        board.links().len(),
        board.surface().active_captures()
    );

    Ok(())
}
