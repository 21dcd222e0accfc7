//! Offset polygon construction for padding and margin bounds.
//!
//! Both functions offset every polygon edge along its normal by a fixed distance and rebuild the
//! corners: adjacent offset edges that still intersect within their segment bounds are joined
//! with a miter at the intersect point, otherwise the gap between them is bridged with a short
//! polyline arc approximation centered on the original vertex. Inward offsetting (padding) only
//! fillets reflex vertices, outward offsetting (margin) fillets every vertex whose offset edges
//! pulled apart.

use crate::core::math::{
    LineLineIntr, Vector2, angle, is_left, line_line_intr, normalize_radians, point_from_parametric,
    point_on_circle,
};
use crate::core::traits::Real;
use crate::log::warn;
use crate::polygon::{Polygon, PolygonEdge};

/// Computes the inward offset polygon used as a shape's padding bounds.
///
/// Reflex corners whose offset edges pull apart are bridged with an arc of radius `padding`
/// centered on the original vertex, sweeping the short way around. Vertices of the result are
/// snapped to the `vertex_snap_unit` grid (`0` disables snapping). The result can collapse to
/// empty when `padding` consumes the entire polygon.
pub fn compute_shape_padding_bounds<T>(
    polygon: &Polygon<T>,
    padding: T,
    vertex_snap_unit: T,
) -> Polygon<T>
where
    T: Real,
{
    let mut padded_vertices = Vec::new();

    for i in 0..polygon.edge_count() {
        let this_edge = polygon.edge_at(i);
        let prev_edge = polygon.previous_edge(i);
        let this_offset = inward_edge_normal(&this_edge).scale(padding);
        let prev_offset = inward_edge_normal(&prev_edge).scale(padding);

        let prev_offset_v1 = prev_edge.vertex1 + prev_offset;
        let prev_offset_v2 = prev_edge.vertex2 + prev_offset;
        let this_offset_v1 = this_edge.vertex1 + this_offset;
        let this_offset_v2 = this_edge.vertex2 + this_offset;

        match line_line_intr(
            prev_offset_v1,
            prev_offset_v2,
            this_offset_v1,
            this_offset_v2,
            T::fuzzy_epsilon(),
        ) {
            LineLineIntr::TrueIntersect { seg1_t, .. } => {
                padded_vertices.push(point_from_parametric(prev_offset_v1, prev_offset_v2, seg1_t));
            }
            _ => {
                if is_reflex_vertex(prev_edge.vertex1, this_edge.vertex1, this_edge.vertex2) {
                    append_arc(
                        &mut padded_vertices,
                        this_edge.vertex1,
                        padding,
                        prev_offset_v2,
                        this_offset_v1,
                        true,
                    );
                }
            }
        }
    }

    snap_vertices_to_grid(&mut padded_vertices, vertex_snap_unit);
    let bounds = Polygon::from_offset_vertices(padded_vertices, polygon.wind_rule());
    if bounds.is_empty() && !polygon.is_empty() {
        warn!("inward offset collapsed the polygon to empty");
    }
    bounds
}

/// Computes the outward offset polygon used as a shape's margin bounds.
///
/// Every corner whose offset edges pull apart is bridged with an arc of radius `margin` centered
/// on the original vertex, not only reflex corners as with inward offsetting, and the arc sweeps
/// the long way around. Vertices of the result are snapped to the `vertex_snap_unit` grid (`0`
/// disables snapping).
pub fn compute_shape_margin_bounds<T>(
    polygon: &Polygon<T>,
    margin: T,
    vertex_snap_unit: T,
) -> Polygon<T>
where
    T: Real,
{
    let mut margin_vertices = Vec::new();

    for i in 0..polygon.edge_count() {
        let this_edge = polygon.edge_at(i);
        let prev_edge = polygon.previous_edge(i);
        let this_offset = outward_edge_normal(&this_edge).scale(margin);
        let prev_offset = outward_edge_normal(&prev_edge).scale(margin);

        let prev_offset_v1 = prev_edge.vertex1 + prev_offset;
        let prev_offset_v2 = prev_edge.vertex2 + prev_offset;
        let this_offset_v1 = this_edge.vertex1 + this_offset;
        let this_offset_v2 = this_edge.vertex2 + this_offset;

        match line_line_intr(
            prev_offset_v1,
            prev_offset_v2,
            this_offset_v1,
            this_offset_v2,
            T::fuzzy_epsilon(),
        ) {
            LineLineIntr::TrueIntersect { seg1_t, .. } => {
                margin_vertices.push(point_from_parametric(prev_offset_v1, prev_offset_v2, seg1_t));
            }
            _ => {
                append_arc(
                    &mut margin_vertices,
                    this_edge.vertex1,
                    margin,
                    prev_offset_v2,
                    this_offset_v1,
                    false,
                );
            }
        }
    }

    snap_vertices_to_grid(&mut margin_vertices, vertex_snap_unit);
    let bounds = Polygon::from_offset_vertices(margin_vertices, polygon.wind_rule());
    if bounds.is_empty() && !polygon.is_empty() {
        warn!("outward offset collapsed the polygon to empty");
    }
    bounds
}

/// Unit normal of `edge` pointing into the interior of a clockwise wound polygon in y-down
/// coordinates. Axis aligned edges return exact unit components.
pub fn inward_edge_normal<T>(edge: &PolygonEdge<T>) -> Vector2<T>
where
    T: Real,
{
    let edge_delta = edge.vertex2 - edge.vertex1;
    if edge_delta.x == T::zero() {
        let x = if edge_delta.y > T::zero() {
            -T::one()
        } else {
            T::one()
        };
        return Vector2::new(x, T::zero());
    }

    if edge_delta.y == T::zero() {
        let y = if edge_delta.x > T::zero() {
            T::one()
        } else {
            -T::one()
        };
        return Vector2::new(T::zero(), y);
    }

    edge_delta.unit_perp()
}

/// Unit normal of `edge` pointing away from the interior of a clockwise wound polygon in y-down
/// coordinates.
#[inline]
pub fn outward_edge_normal<T>(edge: &PolygonEdge<T>) -> Vector2<T>
where
    T: Real,
{
    -inward_edge_normal(edge)
}

/// True if the corner formed by `prev_vertex -> vertex -> next_vertex` is reflex (interior angle
/// greater than half a turn) for a clockwise wound polygon in y-down coordinates.
#[inline]
pub fn is_reflex_vertex<T>(
    prev_vertex: Vector2<T>,
    vertex: Vector2<T>,
    next_vertex: Vector2<T>,
) -> bool
where
    T: Real,
{
    is_left(prev_vertex, next_vertex, vertex)
}

/// Appends a polyline approximation of the arc from `start_arc_vertex` to `end_arc_vertex` at
/// `arc_radius` around `arc_center`. Inward (padding) arcs sweep the short way between the two
/// offset edges, outward (margin) arcs the long way.
fn append_arc<T>(
    vertices: &mut Vec<Vector2<T>>,
    arc_center: Vector2<T>,
    arc_radius: T,
    start_arc_vertex: Vector2<T>,
    end_arc_vertex: Vector2<T>,
    is_padding: bool,
) where
    T: Real,
{
    let start_angle = normalize_radians(angle(arc_center, start_arc_vertex));
    let end_angle = normalize_radians(angle(arc_center, end_arc_vertex));
    let delta_angle = if start_angle > end_angle {
        start_angle - end_angle
    } else {
        start_angle + T::tau() - end_angle
    };

    // even segment count so the middle arc vertex lands at half the sweep
    let arc_segment_count = 6;
    let sweep_angle = if is_padding {
        -delta_angle
    } else {
        T::tau() - delta_angle
    };
    let arc_segment_angle = sweep_angle / T::from(arc_segment_count).unwrap();

    vertices.push(start_arc_vertex);
    for i in 1..arc_segment_count {
        let vertex_angle = start_angle + arc_segment_angle * T::from(i).unwrap();
        vertices.push(point_on_circle(arc_radius, arc_center, vertex_angle));
    }
    vertices.push(end_arc_vertex);
}

fn snap_vertices_to_grid<T>(vertices: &mut [Vector2<T>], vertex_snap_unit: T)
where
    T: Real,
{
    if vertex_snap_unit <= T::zero() {
        return;
    }

    for vertex in vertices.iter_mut() {
        vertex.x = (vertex.x / vertex_snap_unit).round() * vertex_snap_unit;
        vertex.y = (vertex.y / vertex_snap_unit).round() * vertex_snap_unit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;
    use std::f64::consts::PI;

    fn edge(x1: f64, y1: f64, x2: f64, y2: f64) -> PolygonEdge<f64> {
        PolygonEdge {
            vertex1: Vector2::new(x1, y1),
            vertex2: Vector2::new(x2, y2),
            edge_index: 0,
        }
    }

    #[test]
    fn inward_normals_of_axis_aligned_edges() {
        assert_fuzzy_eq!(inward_edge_normal(&edge(0.0, 0.0, 10.0, 0.0)), Vector2::new(0.0, 1.0));
        assert_fuzzy_eq!(inward_edge_normal(&edge(10.0, 0.0, 0.0, 0.0)), Vector2::new(0.0, -1.0));
        assert_fuzzy_eq!(inward_edge_normal(&edge(0.0, 0.0, 0.0, 10.0)), Vector2::new(-1.0, 0.0));
        assert_fuzzy_eq!(inward_edge_normal(&edge(0.0, 10.0, 0.0, 0.0)), Vector2::new(1.0, 0.0));
    }

    #[test]
    fn inward_normal_of_diagonal_edge() {
        let normal = inward_edge_normal(&edge(0.0, 0.0, 10.0, 10.0));
        let inv_sqrt2 = 1.0 / 2.0f64.sqrt();
        assert_fuzzy_eq!(normal, Vector2::new(-inv_sqrt2, inv_sqrt2));
        assert_fuzzy_eq!(outward_edge_normal(&edge(0.0, 0.0, 10.0, 10.0)), -normal);
    }

    #[test]
    fn reflex_test_on_l_shape_corners() {
        // clockwise L shape in y-down coordinates, (50, 50) is the inner corner
        let vertices = [
            Vector2::new(0.0, 0.0),
            Vector2::new(100.0, 0.0),
            Vector2::new(100.0, 100.0),
            Vector2::new(50.0, 100.0),
            Vector2::new(50.0, 50.0),
            Vector2::new(0.0, 50.0),
        ];

        let reflex_flags: Vec<bool> = (0..vertices.len())
            .map(|i| {
                let prev = vertices[(i + vertices.len() - 1) % vertices.len()];
                let next = vertices[(i + 1) % vertices.len()];
                is_reflex_vertex(prev, vertices[i], next)
            })
            .collect();

        assert_eq!(reflex_flags, vec![false, false, false, false, true, false]);
    }

    #[test]
    fn margin_arc_interleaves_points_on_circle() {
        let center = Vector2::new(0.0, 0.0);
        let mut vertices = Vec::new();
        append_arc(
            &mut vertices,
            center,
            10.0,
            Vector2::new(10.0, 0.0),
            Vector2::new(0.0, 10.0),
            false,
        );

        assert_eq!(vertices.len(), 7);
        for vertex in vertices.iter() {
            assert_fuzzy_eq!((*vertex - center).length(), 10.0);
        }
        // vertex 3 of 6 sits at half the swept angle
        let mid = vertices[3];
        assert_fuzzy_eq!(mid, point_on_circle(10.0, center, PI / 4.0));
    }

    #[test]
    fn padding_arc_sweeps_the_short_way() {
        let center = Vector2::new(0.0, 0.0);
        let mut vertices = Vec::new();
        append_arc(
            &mut vertices,
            center,
            10.0,
            Vector2::new(0.0, 10.0),
            Vector2::new(10.0, 0.0),
            true,
        );

        assert_eq!(vertices.len(), 7);
        // sweeping from PI/2 down to 0 in six equal steps
        assert_fuzzy_eq!(vertices[1], point_on_circle(10.0, center, PI / 2.0 - PI / 12.0));
        assert_fuzzy_eq!(vertices[6], Vector2::new(10.0, 0.0));
    }

    #[test]
    fn snapping_rounds_to_grid() {
        let mut vertices = vec![Vector2::new(1.26, -0.7401), Vector2::new(0.49, 3.01)];
        snap_vertices_to_grid(&mut vertices, 0.25);
        assert_fuzzy_eq!(vertices[0], Vector2::new(1.25, -0.75));
        assert_fuzzy_eq!(vertices[1], Vector2::new(0.5, 3.0));

        // zero unit disables snapping
        let mut untouched = vec![Vector2::new(1.26, -0.7401)];
        snap_vertices_to_grid(&mut untouched, 0.0);
        assert_fuzzy_eq!(untouched[0], Vector2::new(1.26, -0.7401));
    }
}
