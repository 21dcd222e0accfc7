/// Asserts two values are fuzzy equal, with an optional epsilon as third argument.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                assert!(
                    left_val.fuzzy_eq(*right_val),
                    "fuzzy equality assertion failed\n  left: `{:?}`\n right: `{:?}`",
                    left_val,
                    right_val
                );
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                assert!(
                    left_val.fuzzy_eq_eps(*right_val, *eps_val),
                    "fuzzy equality assertion failed\n  left: `{:?}`\n right: `{:?}`\n   eps: `{:?}`",
                    left_val,
                    right_val,
                    eps_val
                );
            }
        }
    }};
}

/// Construct a `Vec` of polygon vertices from a list of (x, y) tuples.
///
/// # Examples
///
/// ```
/// # use exclusion_shapes::shape_vertices;
/// # use exclusion_shapes::core::math::Vector2;
/// let vertices = shape_vertices![(0.0, 0.0), (4.0, 0.0), (4.0, 3.0)];
/// assert_eq!(vertices.len(), 3);
/// assert_eq!(vertices[1], Vector2::new(4.0, 0.0));
/// ```
#[macro_export]
macro_rules! shape_vertices {
    (@unit $_v:expr) => {
        ()
    };
    ($( $v:expr ),* $(,)?) => {{
        let size = <[()]>::len(&[$( $crate::shape_vertices!(@unit $v) ),*]);
        let mut vertices = ::std::vec::Vec::with_capacity(size);
        $(
            vertices.push($crate::core::math::Vector2::new($v.0, $v.1));
        )*
        vertices
    }};
}
