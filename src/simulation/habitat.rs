//! Movement cages for predators.

use geo::Rect;
use rand::Rng;

use super::params::Params;

/// Smallest habitat edge length.
pub const HABITAT_MIN_EXTENT: f32 = 150.0;
/// Largest habitat edge length.
pub const HABITAT_MAX_EXTENT: f32 = 400.0;

/// Picks the movement bounds for a newly created predator.
///
/// With habitats enabled this is a random rectangle positioned to fit
/// inside the window; otherwise it is the window itself. The result is
/// fixed for the predator's lifetime.
pub fn assign(params: &Params) -> Rect<f32> {
    if !params.enable_habitats {
        return params.window();
    }

    let mut rng = rand::rng();
    let width = rng
        .random_range(HABITAT_MIN_EXTENT..HABITAT_MAX_EXTENT)
        .min(params.box_width);
    let height = rng
        .random_range(HABITAT_MIN_EXTENT..HABITAT_MAX_EXTENT)
        .min(params.box_height);
    let x = rng.random_range(0.0..(params.box_width - width).max(f32::EPSILON));
    let y = rng.random_range(0.0..(params.box_height - height).max(f32::EPSILON));

    Rect::new((x, y), (x + width, y + height))
}
