//! Geometric helpers shared by every entity: rectangle containment, circle
//! overlap, and the two boundary rules (bounce vs. clamp).

use geo::algorithm::{Contains, Distance};
use geo::{Euclidean, Point, Rect};
use ndarray::Array1;

/// Tests whether a point lies inside an axis-aligned rectangle.
///
/// # Arguments
///
/// * `rect` - The rectangle to test against
/// * `x` - Point x coordinate
/// * `y` - Point y coordinate
pub fn point_in_rect(rect: &Rect<f32>, x: f32, y: f32) -> bool {
    rect.contains(&Point::new(x, y))
}

/// Euclidean distance between two points given as 2-vectors.
pub fn center_distance(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    Euclidean.distance(&Point::new(a[0], a[1]), &Point::new(b[0], b[1]))
}

/// Tests two circles for overlap: center distance against summed radii.
pub fn circles_overlap(
    center_a: &Array1<f32>,
    radius_a: f32,
    center_b: &Array1<f32>,
    radius_b: f32,
) -> bool {
    center_distance(center_a, center_b) < radius_a + radius_b
}

/// Bounces a `size`-sided box back into `rect`.
///
/// `pos` is the top-left corner of the box. Per axis, when the box edge is
/// at or past the rectangle boundary the velocity component is reflected
/// exactly (`v *= -1`) and the position snaps onto the boundary. No energy
/// is lost beyond the direction reversal.
pub fn bounce_into_rect(
    pos: &mut Array1<f32>,
    vel: &mut Array1<f32>,
    size: f32,
    rect: &Rect<f32>,
) {
    let min = rect.min();
    let max = rect.max();
    let limits = [(min.x, max.x - size), (min.y, max.y - size)];

    for (axis, &(lo, hi)) in limits.iter().enumerate() {
        // a box larger than the rect pins to the rect origin
        let hi = hi.max(lo);
        if pos[axis] <= lo || pos[axis] >= hi {
            vel[axis] *= -1.0;
            pos[axis] = pos[axis].clamp(lo, hi);
        }
    }
}

/// Clamps a `size`-sided box into `rect` without touching velocity.
///
/// Hunters use this at the window edge: they press against the boundary
/// instead of bouncing off it.
pub fn clamp_into_rect(pos: &mut Array1<f32>, size: f32, rect: &Rect<f32>) {
    let min = rect.min();
    let max = rect.max();
    pos[0] = pos[0].clamp(min.x, (max.x - size).max(min.x));
    pos[1] = pos[1].clamp(min.y, (max.y - size).max(min.y));
}
