#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use geo::Rect;
use ndarray::Array1;
use petridish::simulation::geometry;

#[test]
fn test_point_in_rect() {
    let rect = Rect::new((0.0_f32, 0.0), (100.0, 50.0));

    assert!(geometry::point_in_rect(&rect, 10.0, 10.0));
    assert!(geometry::point_in_rect(&rect, 99.0, 49.0));
    assert!(!geometry::point_in_rect(&rect, 150.0, 10.0));
    assert!(!geometry::point_in_rect(&rect, 10.0, -1.0));
}

#[test]
fn test_circles_overlap() {
    let a = Array1::from_vec(vec![0.0, 0.0]);
    let b = Array1::from_vec(vec![10.0, 0.0]);

    assert!(geometry::circles_overlap(&a, 6.0, &b, 6.0));
    assert!(!geometry::circles_overlap(&a, 4.0, &b, 4.0));
    // touching circles do not count as overlapping
    assert!(!geometry::circles_overlap(&a, 5.0, &b, 5.0));
}

#[test]
fn test_center_distance() {
    let a = Array1::from_vec(vec![0.0, 0.0]);
    let b = Array1::from_vec(vec![3.0, 4.0]);

    assert!((geometry::center_distance(&a, &b) - 5.0).abs() < 1e-6);
}

#[test]
fn test_bounce_reflects_and_snaps_left_edge() {
    let rect = Rect::new((0.0_f32, 0.0), (500.0, 500.0));
    let mut pos = Array1::from_vec(vec![-5.0, 10.0]);
    let mut vel = Array1::from_vec(vec![-3.0, 2.0]);

    geometry::bounce_into_rect(&mut pos, &mut vel, 50.0, &rect);

    assert_eq!(pos[0], 0.0);
    assert_eq!(pos[1], 10.0);
    // exact reflection, no speed loss
    assert_eq!(vel[0], 3.0);
    assert_eq!(vel[1], 2.0);
}

#[test]
fn test_bounce_reflects_and_snaps_far_edges() {
    let rect = Rect::new((0.0_f32, 0.0), (500.0, 500.0));
    let mut pos = Array1::from_vec(vec![460.0, 455.0]);
    let mut vel = Array1::from_vec(vec![4.0, 2.5]);

    geometry::bounce_into_rect(&mut pos, &mut vel, 50.0, &rect);

    assert_eq!(pos[0], 450.0);
    assert_eq!(pos[1], 450.0);
    assert_eq!(vel[0], -4.0);
    assert_eq!(vel[1], -2.5);
}

#[test]
fn test_bounce_leaves_interior_untouched() {
    let rect = Rect::new((0.0_f32, 0.0), (500.0, 500.0));
    let mut pos = Array1::from_vec(vec![200.0, 300.0]);
    let mut vel = Array1::from_vec(vec![4.0, -2.0]);

    geometry::bounce_into_rect(&mut pos, &mut vel, 50.0, &rect);

    assert_eq!(pos[0], 200.0);
    assert_eq!(pos[1], 300.0);
    assert_eq!(vel[0], 4.0);
    assert_eq!(vel[1], -2.0);
}

#[test]
fn test_bounce_respects_rect_origin() {
    let rect = Rect::new((100.0_f32, 200.0), (400.0, 500.0));
    let mut pos = Array1::from_vec(vec![90.0, 460.0]);
    let mut vel = Array1::from_vec(vec![-2.0, 3.0]);

    geometry::bounce_into_rect(&mut pos, &mut vel, 50.0, &rect);

    assert_eq!(pos[0], 100.0);
    assert_eq!(pos[1], 450.0);
    assert_eq!(vel[0], 2.0);
    assert_eq!(vel[1], -3.0);
}

#[test]
fn test_clamp_does_not_touch_velocity() {
    let rect = Rect::new((0.0_f32, 0.0), (500.0, 400.0));
    let mut pos = Array1::from_vec(vec![600.0, -20.0]);

    geometry::clamp_into_rect(&mut pos, 50.0, &rect);

    assert_eq!(pos[0], 450.0);
    assert_eq!(pos[1], 0.0);
}
