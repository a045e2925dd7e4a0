//! The mobile dot entity: ordinary prey and the predator variant.
//!
//! Dots can:
//! - Bounce around their bounds (the window, or a predator's habitat cage)
//! - Graze food to build up fertility
//! - Breed on contact, sometimes emerging a predator instead of a litter
//! - Fight (predators) with winner-takes-size outcomes
//! - Be eaten by predators, or by the hunter if they are predators

use geo::Rect;
use ndarray::Array1;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::Rng;

use super::geometry;
use super::habitat;
use super::params::Params;
use super::sink::{PresentationSink, Rgb};

/// Dot diameter at birth.
pub const DOT_SIZE: f32 = 50.0;
/// A dot smaller than this no longer survives (fight losers).
pub const MIN_DOT_SIZE: f32 = 10.0;
/// Ticks both participants wait after a reproduction or combat check.
pub const BREED_COOLDOWN: u32 = 60;
/// Fertility gained per bite of food.
pub const FERTILITY_PER_BITE: f32 = 0.5;
/// Hard cap on offspring per collision.
pub const MAX_LITTER: usize = 4;
/// How far offspring scatter from the first parent.
pub const LITTER_SCATTER: f32 = 60.0;
/// Prey colors, cycled over the initial stock: red, green, blue, yellow.
pub const PALETTE: [Rgb; 4] = [
    [0xFF, 0x57, 0x33],
    [0x33, 0xFF, 0x57],
    [0x33, 0x57, 0xFF],
    [0xF3, 0xFF, 0x33],
];
/// Reserved predator color.
pub const PREDATOR_COLOR: Rgb = [0x4B, 0x00, 0x82];

/// Axis speeds below this magnitude get replaced outright.
const MIN_AXIS_SPEED: f32 = 1.0;
/// Replacement axis speed; the sampled sign is not kept.
const FALLBACK_AXIS_SPEED: f32 = 2.0;

/// What a dot is: grazing prey, or a caged predator.
#[derive(Debug, Clone)]
pub enum DotKind {
    /// Ordinary dot: grazes, breeds, gets eaten.
    Prey {
        /// Display color from [`PALETTE`].
        color: Rgb,
    },
    /// Preys on other dots; hunted in turn.
    Predator {
        /// Permanent movement cage. The full window when habitats were
        /// disabled at creation time.
        habitat: Rect<f32>,
    },
}

/// A mobile entity in the dish.
#[derive(Debug, Clone)]
pub struct Dot {
    /// Unique entity id.
    pub id: u64,
    /// Prey or predator.
    pub kind: DotKind,
    /// Top-left corner of the bounding box.
    pub pos: Array1<f32>,
    /// Velocity in pixels per tick.
    pub vel: Array1<f32>,
    /// Diameter. Doubles and halves in fights.
    pub size: f32,
    /// Ticks until the next reproduction/combat eligibility.
    pub cooldown: u32,
    /// Accumulated by grazing; spent when a litter appears.
    pub fertility: f32,
    /// Terminal deletion flag.
    pub deleted: bool,
}

impl Dot {
    /// Creates a prey dot at a random position with a random velocity.
    pub fn new_prey(id: u64, color: Rgb, params: &Params) -> Self {
        Self::new_random(id, DotKind::Prey { color }, params)
    }

    /// Creates a predator. Its habitat is assigned here, once.
    pub fn new_predator(id: u64, params: &Params) -> Self {
        let habitat = habitat::assign(params);
        Self::new_random(id, DotKind::Predator { habitat }, params)
    }

    fn new_random(id: u64, kind: DotKind, params: &Params) -> Self {
        let bounds = match &kind {
            DotKind::Predator { habitat } if params.enable_habitats => *habitat,
            _ => params.window(),
        };
        let min = bounds.min();
        let origin = Array1::from_vec(vec![min.x, min.y]);
        let span = Array1::from_vec(vec![
            (bounds.width() - DOT_SIZE).max(0.0),
            (bounds.height() - DOT_SIZE).max(0.0),
        ]);

        Self {
            id,
            kind,
            pos: origin + Array1::random(2, Uniform::new(0., 1.)) * span,
            vel: random_velocity(),
            size: DOT_SIZE,
            cooldown: 0,
            fertility: 0.0,
            deleted: false,
        }
    }

    /// Creates an offspring dot scattered around its first parent.
    ///
    /// Newborns start on full cooldown so a litter cannot breed in place.
    pub fn offspring(id: u64, color: Rgb, near: &Array1<f32>, params: &Params) -> Self {
        let mut rng = rand::rng();
        let mut pos = Array1::from_vec(vec![
            near[0] + rng.random_range(-LITTER_SCATTER..LITTER_SCATTER),
            near[1] + rng.random_range(-LITTER_SCATTER..LITTER_SCATTER),
        ]);
        geometry::clamp_into_rect(&mut pos, DOT_SIZE, &params.window());

        Self {
            id,
            kind: DotKind::Prey { color },
            pos,
            vel: random_velocity(),
            size: DOT_SIZE,
            cooldown: BREED_COOLDOWN,
            fertility: 0.0,
            deleted: false,
        }
    }

    /// True for the predator variant.
    pub fn is_predator(&self) -> bool {
        matches!(self.kind, DotKind::Predator { .. })
    }

    /// Display color: the palette entry for prey, the reserved color for
    /// predators.
    pub fn color(&self) -> Rgb {
        match &self.kind {
            DotKind::Prey { color } => *color,
            DotKind::Predator { .. } => PREDATOR_COLOR,
        }
    }

    /// Center of the bounding box.
    pub fn center(&self) -> Array1<f32> {
        &self.pos + self.size / 2.0
    }

    /// Collision radius.
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }

    /// The bounds this dot must stay inside right now.
    ///
    /// Re-derived every tick: the cage applies only while habitats are
    /// enabled, but the cage itself never changes.
    pub fn effective_bounds(&self, params: &Params) -> Rect<f32> {
        match &self.kind {
            DotKind::Predator { habitat } if params.enable_habitats => *habitat,
            _ => params.window(),
        }
    }

    /// Advances one tick: cooldown, position integration, boundary bounce.
    ///
    /// The new position and size are pushed to the presentation sink.
    pub fn update<S: PresentationSink>(&mut self, params: &Params, sink: &mut S) {
        if self.deleted {
            return;
        }
        self.cooldown = self.cooldown.saturating_sub(1);
        self.pos += &self.vel;

        let bounds = self.effective_bounds(params);
        geometry::bounce_into_rect(&mut self.pos, &mut self.vel, self.size, &bounds);

        sink.update(self.id, self.pos[0], self.pos[1], self.size);
    }
}

/// Random per-axis velocity in [-5, 5), with slow axes forced to a fixed
/// nonzero speed so dots never stall.
fn random_velocity() -> Array1<f32> {
    let mut rng = rand::rng();
    let mut vel = Array1::from_vec(vec![
        (rng.random::<f32>() - 0.5) * 10.0,
        (rng.random::<f32>() - 0.5) * 10.0,
    ]);
    for v in vel.iter_mut() {
        if v.abs() < MIN_AXIS_SPEED {
            *v = FALLBACK_AXIS_SPEED;
        }
    }
    vel
}
