//! Tests for the point-to-segment distance that backs wall picking on
//! the canvas.

use floorsketch::core::db::Point;

#[test]
fn test_distance_to_horizontal_segment() {
    let a = Point::new(10.0, 10.0);
    let b = Point::new(100.0, 10.0);

    // Directly above the middle of the segment
    assert_eq!(Point::new(55.0, 4.0).distance_to_segment(a, b), 6.0);
    // On the segment itself
    assert_eq!(Point::new(42.0, 10.0).distance_to_segment(a, b), 0.0);
}

#[test]
fn test_distance_clamps_to_endpoints() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(10.0, 0.0);

    // Beyond the end: distance to the endpoint, not the infinite line
    let d = Point::new(13.0, 4.0).distance_to_segment(a, b);
    assert!((d - 5.0).abs() < 1e-6);
    // Before the start, mirrored
    let d = Point::new(-3.0, -4.0).distance_to_segment(a, b);
    assert!((d - 5.0).abs() < 1e-6);
}

#[test]
fn test_zero_length_segment_collapses_to_point_distance() {
    let p = Point::new(7.0, 7.0);
    let d = Point::new(10.0, 11.0).distance_to_segment(p, p);
    assert!((d - 5.0).abs() < 1e-6);
}
