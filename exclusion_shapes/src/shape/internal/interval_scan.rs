//! Scanline interval computation over a polygon.
//!
//! [compute_x_intersections] finds the x-spans a polygon covers at a single scanline by typed
//! edge intersection enumeration and a winding walk, [compute_overlapping_edge_x_projections]
//! collects the x-projection of every edge passing through a horizontal slab. The shape interval
//! queries combine the two with the interval algebra.

use crate::core::math::{Vector2, min_max};
use crate::core::traits::Real;
use crate::interval::{ShapeInterval, sort_intervals};
use crate::polygon::{Polygon, PolygonEdge, WindRule};

/// How an edge meets a scanline. The order is significant: intersections are sorted by `(x, kind)`
/// so coincident vertex intersections at one x end up adjacent and can be collapsed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum EdgeIntersectionKind {
    /// Scanline passes through the edge interior.
    Normal,
    /// Scanline touches the edge's minimum y vertex.
    VertexMinY,
    /// Scanline touches the edge's maximum y vertex.
    VertexMaxY,
    /// Horizontal edge lying exactly on the scanline.
    VertexYBoth,
}

#[derive(Debug, Copy, Clone)]
struct EdgeIntersection<T> {
    point: Vector2<T>,
    edge_index: usize,
    kind: EdgeIntersectionKind,
}

/// The x-spans `polygon` covers at scanline `y`, as sorted intervals.
///
/// `is_min_y` is true when `y` is the top boundary of the queried slab and false when it is the
/// bottom, it orients the test deciding whether a vertex lying exactly on the scanline counts as
/// a crossing or a graze.
pub fn compute_x_intersections<T>(
    polygon: &Polygon<T>,
    y: T,
    is_min_y: bool,
) -> Vec<ShapeInterval<T>>
where
    T: Real,
{
    let mut intersections: Vec<EdgeIntersection<T>> = Vec::new();
    for edge_index in polygon.overlapping_edges(y, y) {
        let edge = polygon.edge_at(edge_index);
        if let Some(intersection) = compute_x_intersection(&edge, y) {
            // horizontal edges on the scanline never cross it
            if intersection.kind != EdgeIntersectionKind::VertexYBoth {
                intersections.push(intersection);
            }
        }
    }

    if intersections.len() < 2 {
        return Vec::new();
    }

    intersections.sort_by(|i1, i2| {
        i1.point
            .x
            .partial_cmp(&i2.point.x)
            .unwrap()
            .then(i1.kind.cmp(&i2.kind))
    });

    let mut result = Vec::new();
    let mut index = 0;
    let mut wind_count = 0i32;
    let mut inside = false;

    while index < intersections.len() {
        let this_intersection = intersections[index];
        if index + 1 < intersections.len() {
            let next_intersection = intersections[index + 1];
            if this_intersection.point.x == next_intersection.point.x
                && is_vertex_intersection(this_intersection.kind)
                && is_vertex_intersection(next_intersection.kind)
            {
                if this_intersection.kind == next_intersection.kind {
                    // same kind pair: the boundary touches the scanline and bounces back
                    index += 2;
                } else {
                    // opposite kind pair collapses to a single crossing
                    index += 1;
                }
                continue;
            }
        }

        let this_edge = polygon.edge_at(this_intersection.edge_index);
        let winding_crossing = match polygon.wind_rule() {
            WindRule::EvenOdd => true,
            WindRule::NonZero => {
                let previous_wind = wind_count;
                wind_count += if this_edge.vertex2.y > this_edge.vertex1.y {
                    1
                } else {
                    -1
                };
                (previous_wind == 0) != (wind_count == 0)
            }
        };

        if winding_crossing {
            let mut edge_crossing = this_intersection.kind == EdgeIntersectionKind::Normal;
            if !edge_crossing {
                if let Some((prev_vertex, next_vertex)) =
                    vertex_intersection_neighbors(polygon, &this_intersection)
                {
                    edge_crossing = if next_vertex.y == y {
                        if is_min_y {
                            prev_vertex.y > y
                        } else {
                            prev_vertex.y < y
                        }
                    } else if prev_vertex.y == y {
                        if is_min_y {
                            next_vertex.y > y
                        } else {
                            next_vertex.y < y
                        }
                    } else {
                        true
                    };
                }
            }

            if edge_crossing {
                inside = append_interval_x(this_intersection.point.x, inside, &mut result);
            }
        }

        index += 1;
    }

    result
}

/// The x-projection of every edge whose y extent overlaps the slab `[y1, y2]`, clipped to the
/// slab, as sorted (not coalesced) intervals. Zero width projections are dropped.
pub fn compute_overlapping_edge_x_projections<T>(
    polygon: &Polygon<T>,
    y1: T,
    y2: T,
) -> Vec<ShapeInterval<T>>
where
    T: Real,
{
    let mut result = Vec::new();

    for edge_index in polygon.overlapping_edges(y1, y2) {
        let edge = polygon.edge_at(edge_index);

        let x1 = if edge.min_y() < y1 {
            match compute_x_intersection(&edge, y1) {
                Some(intersection) => intersection.point.x,
                None => continue,
            }
        } else if edge.vertex1.y < edge.vertex2.y {
            edge.vertex1.x
        } else {
            edge.vertex2.x
        };

        let x2 = if edge.max_y() > y2 {
            match compute_x_intersection(&edge, y2) {
                Some(intersection) => intersection.point.x,
                None => continue,
            }
        } else if edge.vertex1.y > edge.vertex2.y {
            edge.vertex1.x
        } else {
            edge.vertex2.x
        };

        let (x1, x2) = min_max(x1, x2);
        if x2 > x1 {
            result.push(ShapeInterval::new(x1, x2));
        }
    }

    sort_intervals(&mut result);
    result
}

/// Typed intersection of a single edge with the scanline at `y`, `None` when the edge's y extent
/// misses the scanline.
fn compute_x_intersection<T>(edge: &PolygonEdge<T>, y: T) -> Option<EdgeIntersection<T>>
where
    T: Real,
{
    use EdgeIntersectionKind::*;

    if edge.min_y() > y || edge.max_y() < y {
        return None;
    }

    let vertex1 = edge.vertex1;
    let vertex2 = edge.vertex2;
    let dy = vertex2.y - vertex1.y;

    let (kind, intersection_x) = if dy == T::zero() {
        (VertexYBoth, edge.min_x())
    } else if y == edge.min_y() {
        let x = if vertex1.y < vertex2.y {
            vertex1.x
        } else {
            vertex2.x
        };
        (VertexMinY, x)
    } else if y == edge.max_y() {
        let x = if vertex1.y > vertex2.y {
            vertex1.x
        } else {
            vertex2.x
        };
        (VertexMaxY, x)
    } else {
        (Normal, (y - vertex1.y) * (vertex2.x - vertex1.x) / dy + vertex1.x)
    };

    Some(EdgeIntersection {
        point: Vector2::new(intersection_x, y),
        edge_index: edge.edge_index,
        kind,
    })
}

#[inline]
fn is_vertex_intersection(kind: EdgeIntersectionKind) -> bool {
    matches!(
        kind,
        EdgeIntersectionKind::VertexMinY | EdgeIntersectionKind::VertexMaxY
    )
}

/// For a vertex intersection, the ring neighbors (previous, next) of the vertex touching the
/// scanline, used to decide whether the touch is a true crossing.
fn vertex_intersection_neighbors<T>(
    polygon: &Polygon<T>,
    intersection: &EdgeIntersection<T>,
) -> Option<(Vector2<T>, Vector2<T>)>
where
    T: Real,
{
    use EdgeIntersectionKind::*;

    if intersection.kind != VertexMinY && intersection.kind != VertexMaxY {
        return None;
    }

    let this_edge = polygon.edge_at(intersection.edge_index);
    let vertex1_touches = (intersection.kind == VertexMinY
        && this_edge.vertex1.y == this_edge.min_y())
        || (intersection.kind == VertexMaxY && this_edge.vertex1.y == this_edge.max_y());

    if vertex1_touches {
        Some((
            polygon.previous_edge(intersection.edge_index).vertex1,
            this_edge.vertex2,
        ))
    } else {
        Some((
            this_edge.vertex1,
            polygon.next_edge(intersection.edge_index).vertex2,
        ))
    }
}

/// Appends or extends the open interval at `x`, returning the flipped inside flag.
fn append_interval_x<T>(x: T, inside: bool, result: &mut Vec<ShapeInterval<T>>) -> bool
where
    T: Real,
{
    if !inside {
        result.push(ShapeInterval::new(x, x));
    } else if let Some(last) = result.last_mut() {
        last.x2 = x;
    }

    !inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

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

    fn diamond() -> Polygon<f64> {
        Polygon::new(
            vec![
                Vector2::new(50.0, 0.0),
                Vector2::new(100.0, 50.0),
                Vector2::new(50.0, 100.0),
                Vector2::new(0.0, 50.0),
            ],
            WindRule::EvenOdd,
        )
        .unwrap()
    }

    #[test]
    fn scan_through_square_interior() {
        let intervals = compute_x_intersections(&square(), 50.0, true);
        assert_eq!(intervals, vec![ShapeInterval::new(0.0, 100.0)]);
    }

    #[test]
    fn scan_grazing_diamond_apex_is_empty() {
        // both edges touch (50, 0) from below, the boundary bounces back
        let intervals = compute_x_intersections(&diamond(), 0.0, true);
        assert!(intervals.is_empty());
    }

    #[test]
    fn scan_through_diamond_waist_collapses_vertex_pairs() {
        let intervals = compute_x_intersections(&diamond(), 50.0, true);
        assert_eq!(intervals, vec![ShapeInterval::new(0.0, 100.0)]);
    }

    #[test]
    fn scan_on_horizontal_edge_depends_on_slab_side() {
        // slab top lying on the square's top edge covers the full span, slab bottom does not
        // reach into the interior
        let as_slab_top = compute_x_intersections(&square(), 0.0, true);
        assert_eq!(as_slab_top, vec![ShapeInterval::new(0.0, 100.0)]);

        let as_slab_bottom = compute_x_intersections(&square(), 0.0, false);
        assert!(as_slab_bottom.is_empty());
    }

    #[test]
    fn edge_projections_clip_to_slab() {
        // diamond edges crossing the slab [25, 75] are clipped to it
        let projections = compute_overlapping_edge_x_projections(&diamond(), 25.0, 75.0);
        assert_eq!(projections.len(), 4);
        assert_fuzzy_eq!(projections[0].x1, 0.0);
        assert_fuzzy_eq!(projections[0].x2, 25.0);
        assert_fuzzy_eq!(projections[3].x1, 75.0);
        assert_fuzzy_eq!(projections[3].x2, 100.0);
    }
}
