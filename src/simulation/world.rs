//! The population controller: owns every entity collection and runs the
//! tick loop.
//!
//! A tick is strictly ordered: sweep flagged dots and food, move dots, move
//! hunters, sweep flagged hunters, run the interaction engine, then check
//! whether a hunter should take the field. Everything runs synchronously
//! inside one invocation from the frame loop; ticks never overlap.

use super::collisions::{self, InteractionState};
use super::dot::{self, Dot};
use super::event_log::{EventColor, EventLog};
use super::food::{self, Food};
use super::hunter::{self, Hunter};
use super::params::Params;
use super::sink::PresentationSink;

/// Live predators needed (strictly more than this) before a hunter spawns.
pub const HUNTER_SPAWN_MIN_PREDATORS: usize = 5;

/// Events kept for the UI feed.
const EVENT_LOG_CAPACITY: usize = 20;

/// The whole simulation: entity collections, counters, and the tick loop.
///
/// A fresh `World` is idle; [`World::restart`] seeds the stock population
/// and starts ticking.
#[derive(Debug, Clone)]
pub struct World {
    /// All dots, prey and predators, in insertion order.
    pub dots: Vec<Dot>,
    /// All food boxes.
    pub food: Vec<Food>,
    /// Hunters. At most one is ever live, but the sweep treats it like any
    /// other collection.
    pub hunters: Vec<Hunter>,
    /// Counters pacing predator emergence and fights.
    pub interactions: InteractionState,
    /// Recent notable events for the UI feed.
    pub event_log: EventLog,
    /// Ticks since the last restart.
    pub ticks: u64,
    running: bool,
    next_id: u64,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// An idle, empty world. Nothing happens until [`World::restart`].
    pub fn new() -> Self {
        Self {
            dots: Vec::new(),
            food: Vec::new(),
            hunters: Vec::new(),
            interactions: InteractionState::default(),
            event_log: EventLog::new(EVENT_LOG_CAPACITY),
            ticks: 0,
            running: false,
            next_id: 0,
        }
    }

    /// Whether the tick loop is live.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Live (not yet flagged) predator count.
    pub fn predator_count(&self) -> usize {
        self.dots
            .iter()
            .filter(|d| !d.deleted && d.is_predator())
            .count()
    }

    /// Live (not yet flagged) prey count.
    pub fn prey_count(&self) -> usize {
        self.dots
            .iter()
            .filter(|d| !d.deleted && !d.is_predator())
            .count()
    }

    /// Tears everything down and seeds a fresh stock population.
    ///
    /// Every existing entity is deregistered from the sink exactly once;
    /// counters, the tick count, and the event feed start over. The new
    /// stock is `initial_dots` prey (palette colors cycling) plus
    /// `initial_food` food boxes, and the world resumes ticking.
    pub fn restart<S: PresentationSink>(&mut self, params: &Params, sink: &mut S) {
        for d in &self.dots {
            sink.remove(d.id);
        }
        for f in &self.food {
            sink.remove(f.id);
        }
        for h in &self.hunters {
            sink.remove(h.id);
        }
        self.dots.clear();
        self.food.clear();
        self.hunters.clear();
        self.interactions = InteractionState::default();
        self.event_log.clear();
        self.ticks = 0;

        for i in 0..params.initial_dots {
            let color = dot::PALETTE[i % dot::PALETTE.len()];
            let d = Dot::new_prey(self.alloc_id(), color, params);
            sink.register(d.id, d.pos[0], d.pos[1], d.size, d.color());
            self.dots.push(d);
        }
        for _ in 0..params.initial_food {
            let f = Food::new_random(self.alloc_id(), params);
            sink.register(f.id, f.pos[0], f.pos[1], f.size, food::FOOD_COLOR);
            self.food.push(f);
        }

        self.running = true;
    }

    /// One full tick; a no-op while idle.
    pub fn tick<S: PresentationSink>(&mut self, params: &Params, sink: &mut S) {
        if !self.running {
            return;
        }
        self.ticks += 1;

        // sweep last tick's casualties: sink first, then the collection
        self.dots.retain(|d| {
            if d.deleted {
                sink.remove(d.id);
            }
            !d.deleted
        });
        self.food.retain(|f| {
            if f.deleted {
                sink.remove(f.id);
            }
            !f.deleted
        });

        for d in &mut self.dots {
            d.update(params, sink);
        }
        for h in &mut self.hunters {
            h.update(&self.dots, params, sink);
        }
        self.hunters.retain(|h| {
            if h.deleted {
                sink.remove(h.id);
            }
            !h.deleted
        });

        collisions::run(
            &mut self.dots,
            &mut self.food,
            &mut self.hunters,
            &mut self.interactions,
            params,
            &mut self.next_id,
            &mut self.event_log,
            self.ticks,
            sink,
        );

        self.spawn_hunter_check(params, sink);
    }

    /// Spawns the hunter when predators overrun the dish.
    ///
    /// Requires hunters enabled, strictly more than
    /// [`HUNTER_SPAWN_MIN_PREDATORS`] live predators, predators outnumbering
    /// a third of the prey, and no hunter already out.
    fn spawn_hunter_check<S: PresentationSink>(&mut self, params: &Params, sink: &mut S) {
        if !params.enable_hunters {
            return;
        }
        let predators = self.predator_count();
        let prey = self.prey_count();
        let hunter_out = self.hunters.iter().any(|h| !h.deleted);

        if predators > HUNTER_SPAWN_MIN_PREDATORS
            && predators as f32 > prey as f32 / 3.0
            && !hunter_out
        {
            let h = Hunter::new_random(self.alloc_id(), params);
            sink.register(h.id, h.pos[0], h.pos[1], h.size, hunter::HUNTER_COLOR);
            self.event_log.log(
                self.ticks,
                format!("hunter {} took the field", h.id),
                EventColor::Hunter,
            );
            self.hunters.push(h);
        }
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
