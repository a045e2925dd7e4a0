//! The hunter: spawned to cull predator overpopulation, decaying over time.

use ndarray::Array1;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;

use super::dot::Dot;
use super::geometry;
use super::params::Params;
use super::sink::{PresentationSink, Rgb};

/// Hunter diameter.
pub const HUNTER_SIZE: f32 = 50.0;
/// Fixed chase speed in pixels per tick.
pub const HUNTER_SPEED: f32 = 7.0;
/// Energy a hunter starts with; it burns one per tick.
pub const HUNTER_INITIAL_ENERGY: i32 = 500;
/// Energy credited per predator killed.
pub const HUNTER_KILL_REWARD: i32 = 500;
/// Hunter display color.
pub const HUNTER_COLOR: Rgb = [0x11, 0x11, 0x11];

/// A predator-seeking entity.
#[derive(Debug, Clone)]
pub struct Hunter {
    /// Unique entity id.
    pub id: u64,
    /// Top-left corner of the bounding box.
    pub pos: Array1<f32>,
    /// Velocity, re-aimed at the nearest predator every tick.
    pub vel: Array1<f32>,
    /// Fixed scalar chase speed.
    pub speed: f32,
    /// Diameter.
    pub size: f32,
    /// Remaining energy; the hunter expires at zero.
    pub energy: i32,
    /// Terminal deletion flag.
    pub deleted: bool,
}

impl Hunter {
    /// Creates a hunter at a random position inside the window.
    pub fn new_random(id: u64, params: &Params) -> Self {
        let span = Array1::from_vec(vec![
            params.box_width - HUNTER_SIZE,
            params.box_height - HUNTER_SIZE,
        ]);
        Self {
            id,
            pos: Array1::random(2, Uniform::new(0., 1.)) * span,
            vel: Array1::zeros(2),
            speed: HUNTER_SPEED,
            size: HUNTER_SIZE,
            energy: HUNTER_INITIAL_ENERGY,
            deleted: false,
        }
    }

    /// Center of the bounding box.
    pub fn center(&self) -> Array1<f32> {
        &self.pos + self.size / 2.0
    }

    /// Advances one tick: energy decay, re-target, chase, window clamp.
    ///
    /// The target is the nearest live predator, picked fresh every tick —
    /// there is no path memory. With no predators left the hunter has
    /// nothing to do and expires. Unlike dots, hunters press against the
    /// window edge instead of bouncing.
    pub fn update<S: PresentationSink>(&mut self, dots: &[Dot], params: &Params, sink: &mut S) {
        if self.deleted {
            return;
        }
        self.energy -= 1;
        if self.energy <= 0 {
            self.deleted = true;
            return;
        }

        let center = self.center();
        let target = dots
            .iter()
            .filter(|d| !d.deleted && d.is_predator())
            .min_by(|a, b| {
                let da = geometry::center_distance(&center, &a.center());
                let db = geometry::center_distance(&center, &b.center());
                da.total_cmp(&db)
            });

        let Some(target) = target else {
            self.deleted = true;
            return;
        };

        let target_center = target.center();
        let distance = geometry::center_distance(&center, &target_center);
        if distance > 0.0 {
            self.vel = (target_center - &center) / distance * self.speed;
        }
        self.pos += &self.vel;
        geometry::clamp_into_rect(&mut self.pos, self.size, &params.window());

        sink.update(self.id, self.pos[0], self.pos[1], self.size);
    }
}
