use gridom::{Coord, GridLayout, Rect};

// ============================================================================
// Cell rects
// ============================================================================

#[test]
fn test_cells_divide_area_evenly() {
    let layout = GridLayout::new(Rect::new(0, 0, 50, 20), 4, 5);

    assert_eq!(layout.cell_size(), (10, 5));
    assert_eq!(
        layout.cell_rect(Coord::new(0, 0)),
        Some(Rect::new(0, 0, 10, 5))
    );
    assert_eq!(
        layout.cell_rect(Coord::new(3, 4)),
        Some(Rect::new(40, 15, 10, 5))
    );
}

#[test]
fn test_cell_rect_respects_area_origin() {
    let layout = GridLayout::new(Rect::new(2, 3, 50, 20), 4, 5);

    assert_eq!(
        layout.cell_rect(Coord::new(1, 1)),
        Some(Rect::new(12, 8, 10, 5))
    );
}

#[test]
fn test_cell_rect_outside_shape_is_none() {
    let layout = GridLayout::new(Rect::new(0, 0, 50, 20), 4, 5);

    assert_eq!(layout.cell_rect(Coord::new(4, 0)), None);
    assert_eq!(layout.cell_rect(Coord::new(0, 5)), None);
}

// ============================================================================
// Hit testing
// ============================================================================

#[test]
fn test_coord_at_maps_into_cells() {
    let layout = GridLayout::new(Rect::new(0, 0, 50, 20), 4, 5);

    assert_eq!(layout.coord_at(0, 0), Some(Coord::new(0, 0)));
    assert_eq!(layout.coord_at(9, 4), Some(Coord::new(0, 0)));
    assert_eq!(layout.coord_at(10, 5), Some(Coord::new(1, 1)));
    assert_eq!(layout.coord_at(49, 19), Some(Coord::new(3, 4)));
}

#[test]
fn test_coord_at_outside_area_is_none() {
    let layout = GridLayout::new(Rect::new(5, 5, 50, 20), 4, 5);

    assert_eq!(layout.coord_at(0, 0), None);
    assert_eq!(layout.coord_at(55, 10), None);
    assert_eq!(layout.coord_at(10, 25), None);
}

#[test]
fn test_coord_at_dead_space_is_none() {
    // 52x22 leaves a 2-column and 2-row remainder past the last cell.
    let layout = GridLayout::new(Rect::new(0, 0, 52, 22), 4, 5);

    assert_eq!(layout.cell_size(), (10, 5));
    assert_eq!(layout.coord_at(50, 0), None);
    assert_eq!(layout.coord_at(0, 20), None);
    assert_eq!(layout.coord_at(49, 19), Some(Coord::new(3, 4)));
}

#[test]
fn test_degenerate_area_hits_nothing() {
    let layout = GridLayout::new(Rect::new(0, 0, 3, 2), 4, 5);

    assert!(layout.is_degenerate());
    assert_eq!(layout.coord_at(1, 1), None);
    assert_eq!(layout.cell_rect(Coord::new(0, 0)), None);
}

#[test]
fn test_zero_shape_is_degenerate() {
    let layout = GridLayout::new(Rect::new(0, 0, 50, 20), 0, 0);
    assert!(layout.is_degenerate());
}

// ============================================================================
// Rect
// ============================================================================

#[test]
fn test_rect_contains_is_half_open() {
    let rect = Rect::new(10, 10, 5, 5);

    assert!(rect.contains(10, 10));
    assert!(rect.contains(14, 14));
    assert!(!rect.contains(15, 10));
    assert!(!rect.contains(10, 15));
    assert!(!rect.contains(9, 10));
}

#[test]
fn test_rect_shrink() {
    let rect = Rect::new(0, 0, 20, 10).shrink(1, 2, 3, 4);

    assert_eq!(rect, Rect::new(4, 1, 14, 6));
}
