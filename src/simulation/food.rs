//! Food boxes that prey dots graze on.
//!
//! Food never moves. Each bite shrinks the box by a fixed step until it
//! drops below the minimum size and is flagged for the purge sweep.

use geo::Rect;
use ndarray::Array1;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;

use super::params::Params;
use super::sink::Rgb;

/// Side length of a fresh food box.
pub const FOOD_SIZE: f32 = 20.0;
/// Size lost per bite.
pub const FOOD_SHRINK_STEP: f32 = 4.0;
/// Below this size the food is gone.
pub const FOOD_MIN_SIZE: f32 = 4.0;
/// Food display color.
pub const FOOD_COLOR: Rgb = [0, 100, 255];

/// A passive food box.
#[derive(Debug, Clone)]
pub struct Food {
    /// Unique entity id.
    pub id: u64,
    /// Top-left corner of the box.
    pub pos: Array1<f32>,
    /// Current side length; only ever decreases.
    pub size: f32,
    /// Terminal deletion flag, set once the box shrinks away.
    pub deleted: bool,
}

impl Food {
    /// Creates a food box at a random position fully inside the window.
    pub fn new_random(id: u64, params: &Params) -> Self {
        let span = Array1::from_vec(vec![
            params.box_width - FOOD_SIZE,
            params.box_height - FOOD_SIZE,
        ]);
        Self {
            id,
            pos: Array1::random(2, Uniform::new(0., 1.)) * span,
            size: FOOD_SIZE,
            deleted: false,
        }
    }

    /// One bite: lose a fixed step, flag for deletion below the minimum.
    pub fn shrink(&mut self) {
        self.size = (self.size - FOOD_SHRINK_STEP).max(0.0);
        if self.size < FOOD_MIN_SIZE {
            self.deleted = true;
        }
    }

    /// The box the food occupies, for point-in-rect grazing tests.
    pub fn bounding_rect(&self) -> Rect<f32> {
        Rect::new(
            (self.pos[0], self.pos[1]),
            (self.pos[0] + self.size, self.pos[1] + self.size),
        )
    }
}
