//! Polygon model used by the shape queries.
//!
//! A [Polygon] is an immutable closed ring of vertices with a [WindRule] deciding interior
//! membership. Construction walks the vertex ring once to build the edge list, skipping
//! coincident vertices and merging runs of collinear vertices so every stored edge has positive
//! length, then indexes the edges by their bounding boxes for y range queries. Rings that
//! collapse below 3 surviving edges are treated as empty.
use crate::core::math::{Vector2, is_left, min_max};
use crate::core::traits::Real;
use crate::error::ShapeError;
use static_aabb2d_index::{
    AABB, StaticAABB2DIndex, StaticAABB2DIndexBuildError, StaticAABB2DIndexBuilder,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fill rule deciding which regions of a self intersecting polygon count as inside.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum WindRule {
    /// Inside if the boundary winds around the point a net nonzero number of times.
    #[default]
    NonZero,
    /// Inside if a ray from the point crosses the boundary an odd number of times.
    EvenOdd,
}

/// Directed edge of a [Polygon] with endpoints in ring order.
///
/// Edges are value snapshots of the polygon's geometry, `edge_index` is the edge's position in
/// the owning polygon's edge list and is the key returned by
/// [overlapping_edges](Polygon::overlapping_edges).
#[derive(Debug, Copy, Clone)]
pub struct PolygonEdge<T = f64> {
    /// Start vertex of the edge.
    pub vertex1: Vector2<T>,
    /// End vertex of the edge.
    pub vertex2: Vector2<T>,
    /// Position of the edge in the polygon's edge list.
    pub edge_index: usize,
}

impl<T> PolygonEdge<T>
where
    T: Real,
{
    #[inline]
    pub fn min_y(&self) -> T {
        num_traits::real::Real::min(self.vertex1.y, self.vertex2.y)
    }

    #[inline]
    pub fn max_y(&self) -> T {
        num_traits::real::Real::max(self.vertex1.y, self.vertex2.y)
    }

    #[inline]
    pub fn min_x(&self) -> T {
        num_traits::real::Real::min(self.vertex1.x, self.vertex2.x)
    }

    #[inline]
    pub fn max_x(&self) -> T {
        num_traits::real::Real::max(self.vertex1.x, self.vertex2.x)
    }
}

/// Immutable closed polygon with precomputed edges and a spatial index over edge bounds.
///
/// # Examples
///
/// ```
/// # use exclusion_shapes::polygon::{Polygon, WindRule};
/// # use exclusion_shapes::core::math::Vector2;
/// let polygon = Polygon::new(
///     vec![
///         Vector2::new(0.0, 0.0),
///         Vector2::new(100.0, 0.0),
///         Vector2::new(100.0, 100.0),
///         Vector2::new(0.0, 100.0),
///     ],
///     WindRule::EvenOdd,
/// )?;
///
/// assert!(polygon.contains(Vector2::new(50.0, 50.0)));
/// assert!(!polygon.contains(Vector2::new(150.0, 50.0)));
/// # Ok::<(), exclusion_shapes::ShapeError<f64>>(())
/// ```
pub struct Polygon<T = f64> {
    vertices: Vec<Vector2<T>>,
    edges: Vec<PolygonEdge<T>>,
    wind_rule: WindRule,
    bounding_box: Option<AABB<T>>,
    edge_index: Option<StaticAABB2DIndex<T>>,
}

impl<T> Polygon<T>
where
    T: Real,
{
    /// Create a polygon from a vertex ring and wind rule.
    ///
    /// The ring wraps implicitly (no duplicated first/last vertex required). Errors if fewer
    /// than 3 vertices are given. A ring whose vertices are all coincident or collinear is
    /// accepted but results in an [empty](Polygon::is_empty) polygon.
    pub fn new(vertices: Vec<Vector2<T>>, wind_rule: WindRule) -> Result<Self, ShapeError<T>> {
        if vertices.len() < 3 {
            return Err(ShapeError::TooFewVertices {
                count: vertices.len(),
            });
        }

        Ok(Self::build(vertices, wind_rule))
    }

    /// Construct without the vertex count check, for rings synthesized by offsetting where
    /// collapse to empty is an accepted outcome.
    pub(crate) fn from_offset_vertices(vertices: Vec<Vector2<T>>, wind_rule: WindRule) -> Self {
        Self::build(vertices, wind_rule)
    }

    fn build(vertices: Vec<Vector2<T>>, wind_rule: WindRule) -> Self {
        let vertex_count = vertices.len();
        if vertex_count < 3 {
            return Polygon {
                vertices,
                edges: Vec::new(),
                wind_rule,
                bounding_box: None,
                edge_index: None,
            };
        }

        let v0 = vertices[0];
        let mut bounding_box = AABB::new(v0.x, v0.y, v0.x, v0.y);
        let mut edges: Vec<PolygonEdge<T>> = Vec::with_capacity(vertex_count);

        // walk the ring from vertex 0 until it wraps, one edge per surviving vertex pair
        let mut vertex_index1 = 0;
        loop {
            let vertex = vertices[vertex_index1];
            if vertex.x < bounding_box.min_x {
                bounding_box.min_x = vertex.x;
            } else if vertex.x > bounding_box.max_x {
                bounding_box.max_x = vertex.x;
            }

            if vertex.y < bounding_box.min_y {
                bounding_box.min_y = vertex.y;
            } else if vertex.y > bounding_box.max_y {
                bounding_box.max_y = vertex.y;
            }

            let vertex_index2 = find_next_ring_vertex(&vertices, vertex_index1);
            edges.push(PolygonEdge {
                vertex1: vertices[vertex_index1],
                vertex2: vertices[vertex_index2],
                edge_index: edges.len(),
            });

            vertex_index1 = vertex_index2;
            if vertex_index1 == 0 {
                break;
            }
        }

        // the wrap around edge may continue a collinear run started by the first edge
        if edges.len() > 3 {
            let last = edges[edges.len() - 1];
            if points_are_collinear(last.vertex1, last.vertex2, edges[0].vertex2) {
                edges[0].vertex1 = last.vertex1;
                edges.pop();
            }
        }

        if edges.len() < 3 {
            // ring collapsed (all vertices coincident or collinear)
            return Polygon {
                vertices,
                edges: Vec::new(),
                wind_rule,
                bounding_box: None,
                edge_index: None,
            };
        }

        let mut builder = StaticAABB2DIndexBuilder::new(edges.len());
        for edge in edges.iter() {
            builder.add(edge.min_x(), edge.min_y(), edge.max_x(), edge.max_y());
        }

        Polygon {
            vertices,
            edges,
            wind_rule,
            bounding_box: Some(bounding_box),
            edge_index: Some(unwrap_spatial_index(builder)),
        }
    }

    /// Vertex ring the polygon was constructed from (including any vertices elided from the
    /// edge list).
    #[inline]
    pub fn vertices(&self) -> &[Vector2<T>] {
        &self.vertices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn vertex_at(&self, vertex_index: usize) -> Vector2<T> {
        self.vertices[vertex_index]
    }

    /// Edges surviving the construction walk, in ring order.
    #[inline]
    pub fn edges(&self) -> &[PolygonEdge<T>] {
        &self.edges
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn edge_at(&self, edge_index: usize) -> PolygonEdge<T> {
        self.edges[edge_index]
    }

    /// Edge preceding `edge_index` in ring order (wrapping).
    #[inline]
    pub fn previous_edge(&self, edge_index: usize) -> PolygonEdge<T> {
        self.edges[(edge_index + self.edges.len() - 1) % self.edges.len()]
    }

    /// Edge following `edge_index` in ring order (wrapping).
    #[inline]
    pub fn next_edge(&self, edge_index: usize) -> PolygonEdge<T> {
        self.edges[(edge_index + 1) % self.edges.len()]
    }

    #[inline]
    pub fn wind_rule(&self) -> WindRule {
        self.wind_rule
    }

    /// True if the polygon has no area (fewer than 3 surviving edges).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Axis aligned bounding box of the vertex ring, `None` when the polygon is empty.
    #[inline]
    pub fn bounding_box(&self) -> Option<AABB<T>> {
        self.bounding_box
    }

    /// Indexes of all edges whose y extent intersects `[min_y, max_y]`, ascending.
    pub fn overlapping_edges(&self, min_y: T, max_y: T) -> Vec<usize> {
        let (bounding_box, edge_index) = match (self.bounding_box, self.edge_index.as_ref()) {
            (Some(bb), Some(index)) => (bb, index),
            _ => return Vec::new(),
        };

        let mut query_stack = Vec::new();
        let mut result = edge_index.query_with_stack(
            bounding_box.min_x,
            min_y,
            bounding_box.max_x,
            max_y,
            &mut query_stack,
        );
        result.sort_unstable();
        result
    }

    /// Point in polygon test honoring the wind rule.
    ///
    /// Points on the boundary (on an edge or vertex) are inside.
    pub fn contains(&self, point: Vector2<T>) -> bool {
        match self.bounding_box {
            Some(bb)
                if point.x >= bb.min_x
                    && point.x <= bb.max_x
                    && point.y >= bb.min_y
                    && point.y <= bb.max_y => {}
            _ => return false,
        }

        match self.wind_rule {
            WindRule::NonZero => self.contains_non_zero(point),
            WindRule::EvenOdd => self.contains_even_odd(point),
        }
    }

    fn contains_even_odd(&self, point: Vector2<T>) -> bool {
        let mut crossing_count = 0u32;
        for edge in self.edges.iter() {
            let v1 = edge.vertex1;
            let v2 = edge.vertex2;
            if point_on_edge(v1, v2, point) {
                return true;
            }

            if (v1.y <= point.y && v2.y > point.y) || (v1.y > point.y && v2.y <= point.y) {
                let vt = (point.y - v1.y) / (v2.y - v1.y);
                if point.x < v1.x + vt * (v2.x - v1.x) {
                    crossing_count += 1;
                }
            }
        }

        crossing_count % 2 == 1
    }

    fn contains_non_zero(&self, point: Vector2<T>) -> bool {
        let mut winding = 0i32;
        for edge in self.edges.iter() {
            let v1 = edge.vertex1;
            let v2 = edge.vertex2;
            if point_on_edge(v1, v2, point) {
                return true;
            }

            if v1.y <= point.y {
                if v2.y > point.y && is_left(v1, v2, point) {
                    // left and upward crossing
                    winding += 1;
                }
            } else if v2.y <= point.y && !is_left(v1, v2, point) {
                // right and downward crossing
                winding -= 1;
            }
        }

        winding != 0
    }
}

/// Next distinct ring vertex after `vertex_index1`, skipping coincident vertices and extending
/// through collinear runs. Returns 0 when the walk wraps back to the start.
fn find_next_ring_vertex<T>(vertices: &[Vector2<T>], vertex_index1: usize) -> usize
where
    T: Real,
{
    let vertex_count = vertices.len();
    let mut vertex_index2 = (vertex_index1 + 1) % vertex_count;

    while vertex_index2 != 0 && vertices[vertex_index1].fuzzy_eq(vertices[vertex_index2]) {
        vertex_index2 = (vertex_index2 + 1) % vertex_count;
    }

    while vertex_index2 != 0 {
        let vertex_index3 = (vertex_index2 + 1) % vertex_count;
        if !points_are_collinear(
            vertices[vertex_index1],
            vertices[vertex_index2],
            vertices[vertex_index3],
        ) {
            break;
        }

        vertex_index2 = vertex_index3;
    }

    vertex_index2
}

fn points_are_collinear<T>(p0: Vector2<T>, p1: Vector2<T>, p2: Vector2<T>) -> bool
where
    T: Real,
{
    (p1 - p0).perp_dot(p2 - p0).fuzzy_eq_zero()
}

/// True if `point` lies on the segment `v1->v2` (within fuzzy epsilon of its line and inside
/// both coordinate ranges).
fn point_on_edge<T>(v1: Vector2<T>, v2: Vector2<T>, point: Vector2<T>) -> bool
where
    T: Real,
{
    if !(v2 - v1).perp_dot(point - v1).fuzzy_eq_zero() {
        return false;
    }

    let (min_x, max_x) = min_max(v1.x, v2.x);
    let (min_y, max_y) = min_max(v1.y, v2.y);
    point.x >= min_x && point.x <= max_x && point.y >= min_y && point.y <= max_y
}

/// Unwraps the built edge index, panicking for the unexpected failure cases.
fn unwrap_spatial_index<T>(builder: StaticAABB2DIndexBuilder<T>) -> StaticAABB2DIndex<T>
where
    T: static_aabb2d_index::IndexableNum,
{
    match builder.build() {
        Ok(x) => x,
        Err(e) => match e {
            StaticAABB2DIndexBuildError::ItemCountError { .. } => {
                unreachable!("edge count mismatch when building the edge index")
            }
            StaticAABB2DIndexBuildError::NumericCastError => {
                panic!("failed to cast edge index numeric type: {e}")
            }
        },
    }
}
