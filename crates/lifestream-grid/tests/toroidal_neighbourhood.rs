use lifestream_core::{Cell, GridError, Position};
use lifestream_grid::{torus, Grid, Pattern};

#[test]
fn neighbours_wrap_on_every_edge_and_corner() {
    let g = Grid::empty(10).unwrap();
    let corners = [
        Position::new(0, 0),
        Position::new(9, 0),
        Position::new(0, 9),
        Position::new(9, 9),
    ];
    for corner in corners {
        let n = g.neighbours(corner);
        assert_eq!(n.len(), 8);
        assert!(n.iter().all(|c| c.position.in_bounds(10)));
    }

    let n: Vec<Position> = g.neighbours(Position::new(9, 9)).iter().map(|c| c.position).collect();
    assert_eq!(n.first(), Some(&Position::new(8, 8)));
    assert_eq!(n.last(), Some(&Position::new(0, 0)));
}

#[test]
fn frontier_of_edge_change_spans_the_seam() {
    let g = Grid::new(6, [Cell::alive(0, 3)]).unwrap();
    let f = g.frontier(&[Cell::alive(0, 3)]);
    assert_eq!(f.len(), 9);
    assert!(f.contains(&Position::new(5, 2)));
    assert!(f.contains(&Position::new(5, 4)));
    assert!(f.contains(&Position::new(1, 3)));
}

#[test]
fn construction_errors_abort_without_a_grid() {
    let too_far = Cell::alive(4, 2);
    match Grid::new(4, [Cell::alive(0, 0), too_far]) {
        Err(GridError::OutOfBounds { position, size }) => {
            assert_eq!(position, too_far.position);
            assert_eq!(size, 4);
        }
        other => panic!("expected OutOfBounds, got {other:?}"),
    }
}

#[test]
fn offsets_constant_matches_neighbour_query() {
    let g = Grid::empty(7).unwrap();
    let origin = Position::new(3, 3);
    let via_grid: Vec<Position> = g.neighbours(origin).iter().map(|c| c.position).collect();
    let via_offsets: Vec<Position> = torus::NEIGHBOUR_OFFSETS
        .iter()
        .map(|&(dx, dy)| Position::new(3 + dx, 3 + dy))
        .collect();
    assert_eq!(via_grid, via_offsets);
}

#[test]
fn glider_seeds_five_cells_on_size_25() {
    let g = Grid::new(25, Pattern::Glider.cells(25)).unwrap();
    assert_eq!(g.alive_count(), 5);
    assert_eq!(g.full_frontier().len(), 22);
}
