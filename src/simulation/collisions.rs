//! The collision and interaction engine: three ordered passes per tick.
//!
//! Pass order is load-bearing. Grazing feeds fertility before the pair pass
//! consumes it, and pair outcomes (deaths, spawns) land before hunters count
//! their kills — all within the same tick.

use rand::Rng;

use super::dot::{self, Dot};
use super::event_log::{EventColor, EventLog};
use super::food::Food;
use super::geometry;
use super::hunter::{HUNTER_KILL_REWARD, Hunter};
use super::params::Params;
use super::sink::PresentationSink;

/// Counters pacing the rare modulo-triggered events.
///
/// Owned by the controller and threaded through the engine, so the trigger
/// points can be unit-tested by setting counter values directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractionState {
    /// Eligible prey-pair collisions seen so far. Every `predator_rate`-th
    /// one emerges a predator instead of a litter.
    pub breeding_collisions: u64,
    /// Eligible predator-pair clashes seen so far. Every `fight_rate`-th
    /// one escalates into a fight.
    pub predator_clashes: u64,
}

/// Runs the three interaction passes over the pre-purge population.
pub fn run<S: PresentationSink>(
    dots: &mut Vec<Dot>,
    food: &mut [Food],
    hunters: &mut [Hunter],
    state: &mut InteractionState,
    params: &Params,
    next_id: &mut u64,
    log: &mut EventLog,
    tick: u64,
    sink: &mut S,
) {
    graze_pass(dots, food, sink);
    pair_pass(dots, state, params, next_id, log, tick, sink);
    hunt_pass(dots, hunters, log, tick);
}

/// Pass 1: prey graze any food box their center falls inside.
///
/// No exclusivity — several dots may bite the same box in one tick.
fn graze_pass<S: PresentationSink>(dots: &mut [Dot], food: &mut [Food], sink: &mut S) {
    for d in dots.iter_mut().filter(|d| !d.deleted && !d.is_predator()) {
        let center = d.center();
        for item in food.iter_mut().filter(|f| !f.deleted) {
            if geometry::point_in_rect(&item.bounding_rect(), center[0], center[1]) {
                item.shrink();
                d.fertility += dot::FERTILITY_PER_BITE;
                if !item.deleted {
                    sink.update(item.id, item.pos[0], item.pos[1], item.size);
                }
            }
        }
    }
}

/// Pass 2: every unordered dot pair, tested once, in population order.
///
/// Dots spawned here are appended after the pass: visible to pass 3 and to
/// later ticks, but not to the remaining pairs of this pass.
fn pair_pass<S: PresentationSink>(
    dots: &mut Vec<Dot>,
    state: &mut InteractionState,
    params: &Params,
    next_id: &mut u64,
    log: &mut EventLog,
    tick: u64,
    sink: &mut S,
) {
    let mut spawned: Vec<Dot> = Vec::new();

    for i in 0..dots.len() {
        for j in (i + 1)..dots.len() {
            let (head, tail) = dots.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];

            if a.deleted || b.deleted {
                continue;
            }
            if !geometry::circles_overlap(&a.center(), a.radius(), &b.center(), b.radius()) {
                continue;
            }

            match (a.is_predator(), b.is_predator()) {
                (true, true) => clash(a, b, state, params, log, tick, sink),
                // predation: the prey dies on the spot, no elastic exchange
                (true, false) => {
                    b.deleted = true;
                    log.log(
                        tick,
                        format!("predator {} ate dot {}", a.id, b.id),
                        EventColor::Death,
                    );
                }
                (false, true) => {
                    a.deleted = true;
                    log.log(
                        tick,
                        format!("predator {} ate dot {}", b.id, a.id),
                        EventColor::Death,
                    );
                }
                (false, false) => {
                    separate_and_swap(a, b, sink);
                    breed(a, b, state, params, next_id, &mut spawned, log, tick, sink);
                }
            }
        }
    }

    dots.append(&mut spawned);
}

/// Predator-vs-predator contact.
///
/// Only every `fight_rate`-th eligible clash escalates into a fight; the
/// rest bounce like any other pair. Cooldowns reset on eligibility, not on
/// escalation.
fn clash<S: PresentationSink>(
    a: &mut Dot,
    b: &mut Dot,
    state: &mut InteractionState,
    params: &Params,
    log: &mut EventLog,
    tick: u64,
    sink: &mut S,
) {
    if a.cooldown != 0 || b.cooldown != 0 {
        separate_and_swap(a, b, sink);
        return;
    }

    state.predator_clashes += 1;
    if state.predator_clashes % params.fight_rate.max(1) == 0 {
        fight(a, b, log, tick, sink);
    } else {
        separate_and_swap(a, b, sink);
    }
    a.cooldown = dot::BREED_COOLDOWN;
    b.cooldown = dot::BREED_COOLDOWN;
}

/// A triggered fight: the winner's size doubles, the loser's halves, and a
/// loser shrunk below the survivable minimum dies.
fn fight<S: PresentationSink>(
    a: &mut Dot,
    b: &mut Dot,
    log: &mut EventLog,
    tick: u64,
    sink: &mut S,
) {
    let (winner, loser) = if rand::rng().random_bool(0.5) {
        (a, b)
    } else {
        (b, a)
    };

    winner.size *= 2.0;
    loser.size /= 2.0;
    if loser.size < dot::MIN_DOT_SIZE {
        loser.deleted = true;
        log.log(
            tick,
            format!("predator {} crushed predator {}", winner.id, loser.id),
            EventColor::Death,
        );
    } else {
        log.log(
            tick,
            format!("predator {} beat predator {}", winner.id, loser.id),
            EventColor::Combat,
        );
    }

    sink.update(winner.id, winner.pos[0], winner.pos[1], winner.size);
    sink.update(loser.id, loser.pos[0], loser.pos[1], loser.size);
}

/// Pushes an overlapping pair apart along the connecting angle, half the
/// penetration depth each, then swaps their velocities. Not mass-weighted.
fn separate_and_swap<S: PresentationSink>(a: &mut Dot, b: &mut Dot, sink: &mut S) {
    let ca = a.center();
    let cb = b.center();
    let angle = (cb[1] - ca[1]).atan2(cb[0] - ca[0]);
    let push = (a.radius() + b.radius() - geometry::center_distance(&ca, &cb)) / 2.0;

    a.pos[0] -= push * angle.cos();
    a.pos[1] -= push * angle.sin();
    b.pos[0] += push * angle.cos();
    b.pos[1] += push * angle.sin();

    std::mem::swap(&mut a.vel, &mut b.vel);

    sink.update(a.id, a.pos[0], a.pos[1], a.size);
    sink.update(b.id, b.pos[0], b.pos[1], b.size);
}

/// Reproduction check for an eligible prey pair.
///
/// Every `predator_rate`-th eligible collision emerges a predator instead
/// of a litter. Cooldowns reset either way; fertility is spent only when a
/// litter actually appears.
fn breed<S: PresentationSink>(
    a: &mut Dot,
    b: &mut Dot,
    state: &mut InteractionState,
    params: &Params,
    next_id: &mut u64,
    spawned: &mut Vec<Dot>,
    log: &mut EventLog,
    tick: u64,
    sink: &mut S,
) {
    if a.cooldown != 0 || b.cooldown != 0 {
        return;
    }

    state.breeding_collisions += 1;

    if state.breeding_collisions % params.predator_rate.max(1) == 0 {
        let predator = Dot::new_predator(*next_id, params);
        *next_id += 1;
        sink.register(
            predator.id,
            predator.pos[0],
            predator.pos[1],
            predator.size,
            predator.color(),
        );
        log.log(
            tick,
            format!("predator {} emerged", predator.id),
            EventColor::Birth,
        );
        spawned.push(predator);
    } else {
        let litter = ((a.fertility + b.fertility).floor() as usize).min(dot::MAX_LITTER);
        let mut rng = rand::rng();
        for _ in 0..litter {
            let color = if rng.random_bool(0.5) { a.color() } else { b.color() };
            let child = Dot::offspring(*next_id, color, &a.pos, params);
            *next_id += 1;
            sink.register(child.id, child.pos[0], child.pos[1], child.size, child.color());
            spawned.push(child);
        }
        if litter > 0 {
            a.fertility = 0.0;
            b.fertility = 0.0;
            log.log(
                tick,
                format!("dots {} and {} bred a litter of {}", a.id, b.id, litter),
                EventColor::Birth,
            );
        }
    }

    a.cooldown = dot::BREED_COOLDOWN;
    b.cooldown = dot::BREED_COOLDOWN;
}

/// Pass 3: hunters eat any predator they touch, gaining energy per kill.
fn hunt_pass(dots: &mut [Dot], hunters: &mut [Hunter], log: &mut EventLog, tick: u64) {
    for hunter in hunters.iter_mut().filter(|h| !h.deleted) {
        let center = hunter.center();
        let radius = hunter.size / 2.0;
        for d in dots.iter_mut().filter(|d| !d.deleted && d.is_predator()) {
            if geometry::circles_overlap(&center, radius, &d.center(), d.radius()) {
                d.deleted = true;
                hunter.energy += HUNTER_KILL_REWARD;
                log.log(
                    tick,
                    format!("hunter {} culled predator {}", hunter.id, d.id),
                    EventColor::Hunter,
                );
            }
        }
    }
}
