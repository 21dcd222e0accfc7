use exclusion_shapes::{
    assert_fuzzy_eq,
    core::{math::Vector2, traits::FuzzyEq},
    polygon::{Polygon, WindRule},
    shape::PolygonShape,
    shape_vertices,
};

fn shape_of(vertices: Vec<Vector2<f64>>) -> PolygonShape<f64> {
    PolygonShape::new(Polygon::new(vertices, WindRule::EvenOdd).unwrap(), 0.0, 0.0)
}

fn diamond() -> PolygonShape<f64> {
    shape_of(shape_vertices![
        (50.0, 0.0),
        (100.0, 50.0),
        (50.0, 100.0),
        (0.0, 50.0)
    ])
}

/// Square with a notch cut from y = 30 down, leaving 30 wide towers either side.
fn notched_square() -> PolygonShape<f64> {
    shape_of(shape_vertices![
        (0.0, 0.0),
        (100.0, 0.0),
        (100.0, 100.0),
        (70.0, 100.0),
        (70.0, 30.0),
        (30.0, 30.0),
        (30.0, 100.0),
        (0.0, 100.0)
    ])
}

#[test]
fn box_slides_down_to_the_width_it_needs() {
    // the diamond is 20 wide at y = 10, just enough for the box to start there
    let top = diamond().first_included_interval_logical_top(0.0, Vector2::new(20.0, 20.0));
    assert_fuzzy_eq!(top.unwrap(), 10.0);
}

#[test]
fn wide_box_fits_above_the_notch() {
    let top = notched_square().first_included_interval_logical_top(0.0, Vector2::new(40.0, 20.0));
    assert_fuzzy_eq!(top.unwrap(), 0.0);
}

#[test]
fn wide_box_has_no_placement_between_narrow_towers() {
    // from y = 20 down the box would straddle the notch, and both towers are too narrow
    let top = notched_square().first_included_interval_logical_top(20.0, Vector2::new(40.0, 20.0));
    assert!(top.is_none());
}

#[test]
fn narrow_box_still_fits_beside_the_notch() {
    let top = notched_square().first_included_interval_logical_top(20.0, Vector2::new(20.0, 20.0));
    assert_fuzzy_eq!(top.unwrap(), 20.0);
}

#[test]
fn box_wider_than_the_shape_has_no_placement() {
    let top = diamond().first_included_interval_logical_top(0.0, Vector2::new(120.0, 10.0));
    assert!(top.is_none());
}

#[test]
fn box_running_past_the_bottom_has_no_placement() {
    let top = diamond().first_included_interval_logical_top(90.0, Vector2::new(10.0, 20.0));
    assert!(top.is_none());
}
