//! First-fit box placement search inside a polygon.
//!
//! Candidate placements are generated as pairwise intersections between polygon edges offset by
//! half the box extents, synthetic corner edges at reflex vertices, and one synthetic horizontal
//! line at the minimum allowed top. A candidate survives if the box centered on it lies inside
//! the polygon without straddling any real edge other than the ones that generated it, and the
//! topmost then leftmost survivor wins.

use crate::core::math::{LineLineIntr, Vector2, line_line_intr, point_from_parametric};
use crate::core::traits::Real;
use crate::polygon::{Polygon, PolygonEdge};
use static_aabb2d_index::AABB;

use super::offset_bounds::is_reflex_vertex;

/// How a candidate offset edge was synthesized.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum OffsetEdgeBasis {
    /// Offset of a polygon edge, keyed by that edge's index.
    Edge { edge_index: usize },
    /// Corner edge bridging the box positions nestling against a reflex vertex.
    Vertex,
    /// Synthetic horizontal line bounding the search from above.
    LineTop,
}

#[derive(Debug, Copy, Clone)]
struct OffsetEdge<T> {
    vertex1: Vector2<T>,
    vertex2: Vector2<T>,
    basis: OffsetEdgeBasis,
}

impl<T> OffsetEdge<T>
where
    T: Real,
{
    fn from_edge(edge: &PolygonEdge<T>, offset: Vector2<T>) -> Self {
        OffsetEdge {
            vertex1: edge.vertex1 + offset,
            vertex2: edge.vertex2 + offset,
            basis: OffsetEdgeBasis::Edge {
                edge_index: edge.edge_index,
            },
        }
    }

    fn from_reflex_vertex(
        reflex_vertex: Vector2<T>,
        offset1: Vector2<T>,
        offset2: Vector2<T>,
    ) -> Self {
        OffsetEdge {
            vertex1: reflex_vertex + offset1,
            vertex2: reflex_vertex + offset2,
            basis: OffsetEdgeBasis::Vertex,
        }
    }

    fn line_top(bounding_box: AABB<T>, min_logical_interval_top: T, offset: Vector2<T>) -> Self {
        OffsetEdge {
            vertex1: Vector2::new(bounding_box.min_x, min_logical_interval_top) + offset,
            vertex2: Vector2::new(bounding_box.max_x, min_logical_interval_top) + offset,
            basis: OffsetEdgeBasis::LineTop,
        }
    }

    #[inline]
    fn max_y(&self) -> T {
        num_traits::real::Real::max(self.vertex1.y, self.vertex2.y)
    }

    /// Index of the polygon edge this candidate was offset from, `None` for synthesized corner
    /// and line top edges.
    #[inline]
    fn polygon_edge_index(&self) -> Option<usize> {
        match self.basis {
            OffsetEdgeBasis::Edge { edge_index } => Some(edge_index),
            _ => None,
        }
    }
}

/// Topmost y at or after `min_logical_interval_top` where a box of `min_logical_interval_size`
/// fits entirely inside `polygon`, `None` when no placement exists.
pub fn first_included_interval_logical_top<T>(
    polygon: &Polygon<T>,
    min_logical_interval_top: T,
    min_logical_interval_size: Vector2<T>,
) -> Option<T>
where
    T: Real,
{
    let bounding_box = polygon.bounding_box()?;

    if min_logical_interval_size.x > bounding_box.max_x - bounding_box.min_x {
        return None;
    }

    let min_y = num_traits::real::Real::max(bounding_box.min_y, min_logical_interval_top);
    let max_y = min_y + min_logical_interval_size.y;
    if max_y > bounding_box.max_y {
        return None;
    }

    let dx = min_logical_interval_size.x / T::two();
    let dy = min_logical_interval_size.y / T::two();
    let mut offset_edges: Vec<OffsetEdge<T>> = Vec::new();

    for edge_index in polygon.overlapping_edges(min_logical_interval_top, bounding_box.max_y) {
        let edge = polygon.edge_at(edge_index);
        let vertex0 = polygon.previous_edge(edge_index).vertex1;
        let vertex1 = edge.vertex1;
        let vertex2 = edge.vertex2;
        let mut offset_edge_buffer: Vec<OffsetEdge<T>> = Vec::new();

        // offset the edge by half the box extents toward each side the box can rest against
        let descends_rightward = if vertex2.y > vertex1.y {
            vertex2.x >= vertex1.x
        } else {
            vertex1.x >= vertex2.x
        };
        if descends_rightward {
            offset_edge_buffer.push(OffsetEdge::from_edge(&edge, Vector2::new(dx, -dy)));
            offset_edge_buffer.push(OffsetEdge::from_edge(&edge, Vector2::new(-dx, dy)));
        } else {
            offset_edge_buffer.push(OffsetEdge::from_edge(&edge, Vector2::new(dx, dy)));
            offset_edge_buffer.push(OffsetEdge::from_edge(&edge, Vector2::new(-dx, -dy)));
        }

        if is_reflex_vertex(vertex0, vertex1, vertex2) {
            // corner edges for the axes the reflex corner opens toward
            if vertex2.x <= vertex1.x && vertex0.x <= vertex1.x {
                offset_edge_buffer.push(OffsetEdge::from_reflex_vertex(
                    vertex1,
                    Vector2::new(dx, -dy),
                    Vector2::new(dx, dy),
                ));
            } else if vertex2.x >= vertex1.x && vertex0.x >= vertex1.x {
                offset_edge_buffer.push(OffsetEdge::from_reflex_vertex(
                    vertex1,
                    Vector2::new(-dx, -dy),
                    Vector2::new(-dx, dy),
                ));
            }
            if vertex2.y <= vertex1.y && vertex0.y <= vertex1.y {
                offset_edge_buffer.push(OffsetEdge::from_reflex_vertex(
                    vertex1,
                    Vector2::new(-dx, dy),
                    Vector2::new(dx, dy),
                ));
            } else if vertex2.y >= vertex1.y && vertex0.y >= vertex1.y {
                offset_edge_buffer.push(OffsetEdge::from_reflex_vertex(
                    vertex1,
                    Vector2::new(-dx, -dy),
                    Vector2::new(dx, -dy),
                ));
            }
        }

        for offset_edge in offset_edge_buffer {
            if offset_edge.max_y() >= min_y {
                offset_edges.push(offset_edge);
            }
        }
    }

    offset_edges.push(OffsetEdge::line_top(
        bounding_box,
        min_logical_interval_top,
        Vector2::new(T::zero(), dy),
    ));

    let mut first_fit_location: Option<Vector2<T>> = None;

    for i in 0..offset_edges.len() - 1 {
        for j in (i + 1)..offset_edges.len() {
            let intersect_point = match line_line_intr(
                offset_edges[i].vertex1,
                offset_edges[i].vertex2,
                offset_edges[j].vertex1,
                offset_edges[j].vertex2,
                T::fuzzy_epsilon(),
            ) {
                LineLineIntr::TrueIntersect { seg1_t, .. } => {
                    point_from_parametric(offset_edges[i].vertex1, offset_edges[i].vertex2, seg1_t)
                }
                _ => continue,
            };

            let potential_location = Vector2::new(intersect_point.x - dx, intersect_point.y - dy);
            if potential_location.y < min_y {
                continue;
            }
            if let Some(best) = first_fit_location {
                if !above_or_to_the_left(potential_location, best) {
                    continue;
                }
            }
            if !polygon.contains(intersect_point) {
                continue;
            }

            let rect = AABB::new(
                potential_location.x,
                potential_location.y,
                potential_location.x + min_logical_interval_size.x,
                potential_location.y + min_logical_interval_size.y,
            );
            if first_fit_rect_in_polygon(
                polygon,
                rect,
                offset_edges[i].polygon_edge_index(),
                offset_edges[j].polygon_edge_index(),
            ) {
                first_fit_location = Some(potential_location);
            }
        }
    }

    first_fit_location.map(|location| location.y)
}

/// True if no polygon edge other than the exempted ones straddles `rect`.
fn first_fit_rect_in_polygon<T>(
    polygon: &Polygon<T>,
    rect: AABB<T>,
    exempt_edge1: Option<usize>,
    exempt_edge2: Option<usize>,
) -> bool
where
    T: Real,
{
    for edge_index in polygon.overlapping_edges(rect.min_y, rect.max_y) {
        if Some(edge_index) == exempt_edge1 || Some(edge_index) == exempt_edge2 {
            continue;
        }

        let edge = polygon.edge_at(edge_index);
        if edge_overlaps_rect(&edge, rect) {
            return false;
        }
    }

    true
}

/// True if the edge's segment passes through the interior of `rect`: their bounds overlap
/// strictly and the rect's corners fall on both sides of the segment's line.
fn edge_overlaps_rect<T>(edge: &PolygonEdge<T>, rect: AABB<T>) -> bool
where
    T: Real,
{
    let bounds_overlap = edge.min_x() < rect.max_x
        && edge.max_x() > rect.min_x
        && edge.min_y() < rect.max_y
        && edge.max_y() > rect.min_y;
    if !bounds_overlap {
        return false;
    }

    let corners = [
        Vector2::new(rect.min_x, rect.min_y),
        Vector2::new(rect.max_x, rect.min_y),
        Vector2::new(rect.min_x, rect.max_y),
        Vector2::new(rect.max_x, rect.max_y),
    ];

    let edge_vector = edge.vertex2 - edge.vertex1;
    let mut current_side_sign = 0i32;
    for corner in corners {
        let side_value = edge_vector.perp_dot(corner - edge.vertex1);
        if side_value == T::zero() {
            continue;
        }

        let side_sign = if side_value > T::zero() { 1 } else { -1 };
        if current_side_sign == 0 {
            current_side_sign = side_sign;
        } else if side_sign != current_side_sign {
            return true;
        }
    }

    false
}

#[inline]
fn above_or_to_the_left<T>(p1: Vector2<T>, p2: Vector2<T>) -> bool
where
    T: Real,
{
    if p1.y < p2.y {
        return true;
    }
    if p1.y == p2.y {
        return p1.x < p2.x;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;
    use crate::polygon::WindRule;

    fn square() -> Polygon<f64> {
        Polygon::new(
            vec![
                Vector2::new(0.0, 0.0),
                Vector2::new(100.0, 0.0),
                Vector2::new(100.0, 100.0),
                Vector2::new(0.0, 100.0),
            ],
            WindRule::EvenOdd,
        )
        .unwrap()
    }

    #[test]
    fn box_fits_at_top_of_square() {
        let top = first_included_interval_logical_top(&square(), 0.0, Vector2::new(20.0, 20.0));
        assert_fuzzy_eq!(top.unwrap(), 0.0);
    }

    #[test]
    fn min_top_is_respected() {
        let top = first_included_interval_logical_top(&square(), 30.0, Vector2::new(20.0, 20.0));
        assert_fuzzy_eq!(top.unwrap(), 30.0);
    }

    #[test]
    fn too_wide_box_has_no_placement() {
        let top = first_included_interval_logical_top(&square(), 0.0, Vector2::new(200.0, 20.0));
        assert!(top.is_none());
    }

    #[test]
    fn box_extending_below_shape_has_no_placement() {
        let top = first_included_interval_logical_top(&square(), 90.0, Vector2::new(20.0, 20.0));
        assert!(top.is_none());
    }

    #[test]
    fn edge_overlap_ignores_touching_rect() {
        let edge = PolygonEdge {
            vertex1: Vector2::new(0.0, 0.0),
            vertex2: Vector2::new(0.0, 100.0),
            edge_index: 0,
        };
        // rect sharing the edge's line only touches, corners never straddle
        assert!(!edge_overlaps_rect(&edge, AABB::new(0.0, 10.0, 20.0, 30.0)));
        // rect crossing the line straddles
        assert!(edge_overlaps_rect(&edge, AABB::new(-5.0, 10.0, 20.0, 30.0)));
    }
}
