//! Toroidal wraparound helpers shared by neighbour and frontier queries.
//!
//! Every coordinate is resolved modulo the grid size, so the left edge
//! touches the right edge and the top edge touches the bottom edge.
//! Neighbour lookups therefore never leave `[0, size)`.

use lifestream_core::Position;

/// Moore-neighbourhood offsets as `(dx, dy)`, in iteration order.
///
/// Rows go top to bottom (`dy = -1, 0, 1`), columns left to right
/// within each row (`dx = -1, 0, 1`), and the centre is skipped. Tests
/// and callers depend on this order.
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Resolve a single axis value onto `[0, size)`.
///
/// `size` must be positive.
pub fn wrap_axis(value: i32, size: i32) -> i32 {
    value.rem_euclid(size)
}

/// Resolve both axes of `position` onto the torus of the given size.
pub fn wrap(position: Position, size: i32) -> Position {
    Position::new(wrap_axis(position.x, size), wrap_axis(position.y, size))
}

/// The eight wrapped neighbour positions of `position`, in
/// [`NEIGHBOUR_OFFSETS`] order.
///
/// On grids smaller than 3 the same position can appear more than once
/// (a 1x1 torus is its own neighbour eight times).
pub fn neighbour_positions(position: Position, size: i32) -> [Position; 8] {
    NEIGHBOUR_OFFSETS.map(|(dx, dy)| {
        Position::new(
            wrap_axis(position.x + dx, size),
            wrap_axis(position.y + dy, size),
        )
    })
}
