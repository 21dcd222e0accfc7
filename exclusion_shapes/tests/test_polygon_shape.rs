mod test_utils;

use exclusion_shapes::{
    core::math::Vector2,
    interval::ShapeInterval,
    polygon::{Polygon, WindRule},
    shape::PolygonShape,
    shape_vertices,
};
use static_aabb2d_index::AABB;
use test_utils::aabb_fuzzy_eq_eps;

fn shape_of(vertices: Vec<Vector2<f64>>, wind_rule: WindRule) -> PolygonShape<f64> {
    PolygonShape::new(Polygon::new(vertices, wind_rule).unwrap(), 0.0, 0.0)
}

fn diamond() -> PolygonShape<f64> {
    shape_of(
        shape_vertices![(50.0, 0.0), (100.0, 50.0), (50.0, 100.0), (0.0, 50.0)],
        WindRule::EvenOdd,
    )
}

#[test]
fn excluded_intervals_cover_bulges_between_the_scanlines() {
    // the diamond waist at y = 50 reaches past both scanline spans
    let intervals = diamond().excluded_intervals(40.0, 20.0);
    assert_eq!(intervals, vec![ShapeInterval::new(0.0, 100.0)]);
}

#[test]
fn excluded_intervals_split_between_disjoint_towers() {
    let shape = shape_of(
        shape_vertices![
            (0.0, 0.0),
            (100.0, 0.0),
            (100.0, 100.0),
            (70.0, 100.0),
            (70.0, 30.0),
            (30.0, 30.0),
            (30.0, 100.0),
            (0.0, 100.0)
        ],
        WindRule::EvenOdd,
    );

    let intervals = shape.excluded_intervals(60.0, 20.0);
    assert_eq!(
        intervals,
        vec![ShapeInterval::new(0.0, 30.0), ShapeInterval::new(70.0, 100.0)]
    );
}

#[test]
fn included_intervals_narrow_at_a_pinched_waist() {
    // hourglass whose sides pinch to x in [40, 60] at y = 50, in the middle of the slab
    let shape = shape_of(
        shape_vertices![
            (0.0, 0.0),
            (100.0, 0.0),
            (60.0, 50.0),
            (100.0, 100.0),
            (0.0, 100.0),
            (40.0, 50.0)
        ],
        WindRule::EvenOdd,
    );

    let intervals = shape.included_intervals(30.0, 40.0);
    assert_eq!(intervals, vec![ShapeInterval::new(40.0, 60.0)]);
}

#[test]
fn included_intervals_require_full_slab_coverage() {
    let shape = shape_of(
        shape_vertices![(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)],
        WindRule::EvenOdd,
    );

    // slab hangs past the bottom of the square: still excluded, no longer included
    assert_eq!(
        shape.excluded_intervals(90.0, 30.0),
        vec![ShapeInterval::new(0.0, 100.0)]
    );
    assert!(shape.included_intervals(90.0, 30.0).is_empty());
}

#[test]
fn wind_rule_decides_intervals_of_overlapping_rings() {
    let vertices = shape_vertices![
        (0.0, 0.0),
        (100.0, 0.0),
        (100.0, 100.0),
        (0.0, 100.0),
        (0.0, 0.0),
        (100.0, 0.0),
        (100.0, 100.0),
        (0.0, 100.0)
    ];

    let non_zero = shape_of(vertices.clone(), WindRule::NonZero);
    assert_eq!(
        non_zero.excluded_intervals(40.0, 20.0),
        vec![ShapeInterval::new(0.0, 100.0)]
    );

    // under even odd the twice wound interior cancels, leaving only the boundary
    let even_odd = shape_of(vertices, WindRule::EvenOdd);
    assert_eq!(
        even_odd.excluded_intervals(40.0, 20.0),
        vec![ShapeInterval::new(0.0, 0.0), ShapeInterval::new(100.0, 100.0)]
    );
}

#[test]
fn apex_graze_adds_no_spurious_crossing() {
    // slab top passes exactly through the diamond apex
    let intervals = diamond().excluded_intervals(0.0, 25.0);
    assert_eq!(intervals, vec![ShapeInterval::new(25.0, 75.0)]);
}

#[test]
fn slab_touching_the_apex_spans_to_the_waist() {
    let intervals = diamond().excluded_intervals(0.0, 50.0);
    assert_eq!(intervals, vec![ShapeInterval::new(0.0, 100.0)]);
}

#[test]
fn empty_shape_answers_every_query_empty() {
    let shape = shape_of(
        shape_vertices![(0.0, 0.0), (50.0, 0.0), (100.0, 0.0)],
        WindRule::NonZero,
    );

    assert!(shape.is_empty());
    assert!(shape.excluded_intervals(0.0, 10.0).is_empty());
    assert!(shape.included_intervals(0.0, 10.0).is_empty());
    assert!(shape.margin_logical_bounding_box().is_none());
    assert!(
        shape
            .first_included_interval_logical_top(0.0, Vector2::new(10.0, 10.0))
            .is_none()
    );
}

#[test]
fn slabs_outside_the_shape_have_no_intervals() {
    let shape = shape_of(
        shape_vertices![(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)],
        WindRule::EvenOdd,
    );

    assert!(shape.excluded_intervals(150.0, 20.0).is_empty());
    assert!(shape.excluded_intervals(-30.0, 10.0).is_empty());
    assert!(shape.included_intervals(-30.0, 10.0).is_empty());
}

#[test]
fn offset_bounds_feed_the_bounding_boxes() {
    let polygon = || {
        Polygon::new(
            shape_vertices![(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)],
            WindRule::EvenOdd,
        )
        .unwrap()
    };

    let with_margin = PolygonShape::new(polygon(), 10.0, 0.0);
    let margin_box = with_margin.margin_logical_bounding_box().unwrap();
    assert!(aabb_fuzzy_eq_eps(&margin_box, &AABB::new(-10.0, -10.0, 110.0, 110.0), 1e-8));

    let with_padding = PolygonShape::new(polygon(), 0.0, 10.0);
    let padding_box = with_padding.padding_logical_bounding_box().unwrap();
    assert!(aabb_fuzzy_eq_eps(&padding_box, &AABB::new(10.0, 10.0, 90.0, 90.0), 1e-8));
}
