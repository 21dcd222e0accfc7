use exclusion_shapes::interval::{
    ShapeInterval, intersect_intervals, merge_intervals, sort_intervals, subtract_intervals,
};

#[test]
fn sort_orders_by_interval_start() {
    let mut intervals = vec![
        ShapeInterval::new(5.0, 8.0),
        ShapeInterval::new(0.0, 2.0),
        ShapeInterval::new(3.0, 3.0),
    ];
    sort_intervals(&mut intervals);
    assert_eq!(
        intervals,
        vec![
            ShapeInterval::new(0.0, 2.0),
            ShapeInterval::new(3.0, 3.0),
            ShapeInterval::new(5.0, 8.0)
        ]
    );
}

#[test]
fn merge_coalesces_overlapping_intervals() {
    let a = vec![ShapeInterval::new(0.0, 3.0), ShapeInterval::new(6.0, 8.0)];
    let b = vec![ShapeInterval::new(2.0, 4.0), ShapeInterval::new(10.0, 12.0)];
    assert_eq!(
        merge_intervals(&a, &b),
        vec![
            ShapeInterval::new(0.0, 4.0),
            ShapeInterval::new(6.0, 8.0),
            ShapeInterval::new(10.0, 12.0)
        ]
    );
}

#[test]
fn merge_coalesces_touching_intervals() {
    let a = vec![ShapeInterval::new(0.0, 5.0)];
    let b = vec![ShapeInterval::new(5.0, 9.0)];
    assert_eq!(merge_intervals(&a, &b), vec![ShapeInterval::new(0.0, 9.0)]);
}

#[test]
fn merge_with_itself_is_identity() {
    let a = vec![ShapeInterval::new(0.0, 3.0), ShapeInterval::new(6.0, 8.0)];
    assert_eq!(merge_intervals(&a, &a), a);
}

#[test]
fn merge_with_empty_is_identity() {
    let a = vec![ShapeInterval::new(1.0, 2.0)];
    assert_eq!(merge_intervals(&a, &[]), a);
    assert_eq!(merge_intervals(&[], &a), a);
}

#[test]
fn intersect_covers_only_shared_ranges() {
    let a = vec![ShapeInterval::new(0.0, 5.0), ShapeInterval::new(10.0, 15.0)];
    let b = vec![ShapeInterval::new(3.0, 12.0)];
    assert_eq!(
        intersect_intervals(&a, &b),
        vec![ShapeInterval::new(3.0, 5.0), ShapeInterval::new(10.0, 12.0)]
    );
}

#[test]
fn intersect_of_touching_intervals_is_zero_width() {
    let a = vec![ShapeInterval::new(0.0, 5.0)];
    let b = vec![ShapeInterval::new(5.0, 8.0)];
    assert_eq!(
        intersect_intervals(&a, &b),
        vec![ShapeInterval::new(5.0, 5.0)]
    );
}

#[test]
fn intersect_of_disjoint_intervals_is_empty() {
    let a = vec![ShapeInterval::new(0.0, 2.0)];
    let b = vec![ShapeInterval::new(3.0, 4.0)];
    assert!(intersect_intervals(&a, &b).is_empty());
    assert!(intersect_intervals(&a, &[]).is_empty());
    assert!(intersect_intervals(&[], &b).is_empty());
}

#[test]
fn subtract_splits_around_inner_intervals() {
    let a = vec![ShapeInterval::new(0.0, 10.0)];
    let b = vec![ShapeInterval::new(2.0, 4.0), ShapeInterval::new(6.0, 8.0)];
    assert_eq!(
        subtract_intervals(&a, &b),
        vec![
            ShapeInterval::new(0.0, 2.0),
            ShapeInterval::new(4.0, 6.0),
            ShapeInterval::new(8.0, 10.0)
        ]
    );
}

#[test]
fn subtract_removes_fully_covered_intervals() {
    let a = vec![ShapeInterval::new(2.0, 4.0), ShapeInterval::new(6.0, 8.0)];
    let b = vec![ShapeInterval::new(0.0, 5.0)];
    assert_eq!(subtract_intervals(&a, &b), vec![ShapeInterval::new(6.0, 8.0)]);
}

#[test]
fn subtract_spanning_interval_truncates_both_neighbors() {
    let a = vec![ShapeInterval::new(0.0, 4.0), ShapeInterval::new(6.0, 10.0)];
    let b = vec![ShapeInterval::new(3.0, 7.0)];
    assert_eq!(
        subtract_intervals(&a, &b),
        vec![ShapeInterval::new(0.0, 3.0), ShapeInterval::new(7.0, 10.0)]
    );
}

#[test]
fn subtract_of_empty_is_identity() {
    let a = vec![ShapeInterval::new(1.0, 2.0)];
    assert_eq!(subtract_intervals(&a, &[]), a);
    assert!(subtract_intervals(&[], &a).is_empty());
}

// intersection and subtraction by the same list partition the original coverage
#[test]
fn intersect_and_subtract_partition_coverage() {
    let a = vec![ShapeInterval::new(0.0, 10.0)];
    let b = vec![ShapeInterval::new(2.0, 4.0), ShapeInterval::new(6.0, 8.0)];

    let common = intersect_intervals(&a, &b);
    let remainder = subtract_intervals(&a, &b);

    let total_width: f64 = common
        .iter()
        .chain(remainder.iter())
        .map(|interval| interval.width())
        .sum();
    assert_eq!(total_width, 10.0);

    // merging the two partitions reconstructs the original interval
    assert_eq!(merge_intervals(&common, &remainder), a);
}
