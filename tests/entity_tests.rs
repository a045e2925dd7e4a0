#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use ndarray::Array1;
use petridish::simulation::dot::{DOT_SIZE, Dot, DotKind, PALETTE, PREDATOR_COLOR};
use petridish::simulation::food::{FOOD_MIN_SIZE, FOOD_SHRINK_STEP, FOOD_SIZE, Food};
use petridish::simulation::habitat;
use petridish::simulation::hunter::{HUNTER_INITIAL_ENERGY, HUNTER_SIZE, Hunter};
use petridish::simulation::params::Params;
use petridish::simulation::sink::NullSink;

fn create_test_params() -> Params {
    Params {
        box_width: 800.0,
        box_height: 600.0,
        initial_dots: 10,
        initial_food: 5,
        predator_rate: 25,
        fight_rate: 3,
        enable_habitats: false,
        enable_hunters: true,
    }
}

fn make_predator(id: u64, x: f32, y: f32, params: &Params) -> Dot {
    Dot {
        id,
        kind: DotKind::Predator {
            habitat: params.window(),
        },
        pos: Array1::from_vec(vec![x, y]),
        vel: Array1::from_vec(vec![0.0, 0.0]),
        size: DOT_SIZE,
        cooldown: 0,
        fertility: 0.0,
        deleted: false,
    }
}

#[test]
fn test_dot_stays_in_window() {
    let params = create_test_params();
    let mut sink = NullSink;
    let mut dot = Dot::new_prey(0, PALETTE[0], &params);

    for _ in 0..500 {
        dot.update(&params, &mut sink);

        assert!(dot.pos[0] >= 0.0 && dot.pos[0] <= params.box_width - dot.size);
        assert!(dot.pos[1] >= 0.0 && dot.pos[1] <= params.box_height - dot.size);
    }
}

#[test]
fn test_predator_stays_in_habitat() {
    let mut params = create_test_params();
    params.enable_habitats = true;
    let mut sink = NullSink;
    let mut dot = Dot::new_predator(0, &params);

    let habitat = match &dot.kind {
        DotKind::Predator { habitat } => *habitat,
        DotKind::Prey { .. } => panic!("expected a predator"),
    };

    for _ in 0..500 {
        dot.update(&params, &mut sink);

        assert!(dot.pos[0] >= habitat.min().x);
        assert!(dot.pos[0] <= habitat.max().x - dot.size);
        assert!(dot.pos[1] >= habitat.min().y);
        assert!(dot.pos[1] <= habitat.max().y - dot.size);
    }
}

#[test]
fn test_habitat_ignored_while_disabled() {
    let mut params = create_test_params();
    params.enable_habitats = true;
    let mut sink = NullSink;
    let mut dot = Dot::new_predator(0, &params);

    // the cage stays on the dot, but only binds while the flag is on
    params.enable_habitats = false;
    for _ in 0..200 {
        dot.update(&params, &mut sink);

        assert!(dot.pos[0] >= 0.0 && dot.pos[0] <= params.box_width - dot.size);
        assert!(dot.pos[1] >= 0.0 && dot.pos[1] <= params.box_height - dot.size);
    }
}

#[test]
fn test_cooldown_counts_down_to_zero() {
    let params = create_test_params();
    let mut sink = NullSink;
    let mut dot = Dot::new_prey(0, PALETTE[1], &params);
    dot.cooldown = 2;

    dot.update(&params, &mut sink);
    assert_eq!(dot.cooldown, 1);
    dot.update(&params, &mut sink);
    assert_eq!(dot.cooldown, 0);
    dot.update(&params, &mut sink);
    assert_eq!(dot.cooldown, 0, "cooldown must floor at zero");
}

#[test]
fn test_random_velocity_never_stalls() {
    let params = create_test_params();

    for i in 0..100 {
        let dot = Dot::new_prey(i, PALETTE[0], &params);
        assert!(dot.vel[0].abs() >= 1.0, "x velocity too slow: {}", dot.vel[0]);
        assert!(dot.vel[1].abs() >= 1.0, "y velocity too slow: {}", dot.vel[1]);
    }
}

#[test]
fn test_deleted_dot_never_moves() {
    let params = create_test_params();
    let mut sink = NullSink;
    let mut dot = Dot::new_prey(0, PALETTE[2], &params);
    dot.deleted = true;
    let before = dot.pos.clone();

    dot.update(&params, &mut sink);

    assert_eq!(dot.pos, before);
}

#[test]
fn test_dot_colors() {
    let params = create_test_params();
    let prey = Dot::new_prey(0, PALETTE[3], &params);
    let predator = Dot::new_predator(1, &params);

    assert_eq!(prey.color(), PALETTE[3]);
    assert_eq!(predator.color(), PREDATOR_COLOR);
    assert!(predator.is_predator());
    assert!(!prey.is_predator());
}

#[test]
fn test_offspring_lands_inside_window() {
    let params = create_test_params();
    let corner = Array1::from_vec(vec![0.0, 0.0]);

    for i in 0..50 {
        let child = Dot::offspring(i, PALETTE[0], &corner, &params);
        assert!(child.pos[0] >= 0.0 && child.pos[0] <= params.box_width - DOT_SIZE);
        assert!(child.pos[1] >= 0.0 && child.pos[1] <= params.box_height - DOT_SIZE);
        assert!(child.cooldown > 0, "newborns must not breed in place");
    }
}

#[test]
fn test_food_shrinks_monotonically() {
    let params = create_test_params();
    let mut food = Food::new_random(0, &params);

    let mut last = food.size;
    let mut bites = 0;
    while !food.deleted {
        food.shrink();
        assert!(food.size <= last, "food size must never grow");
        assert!(food.size >= 0.0);
        last = food.size;
        bites += 1;
        assert!(bites < 100, "food must eventually shrink away");
    }

    assert!(food.size < FOOD_MIN_SIZE);
    assert_eq!(
        bites,
        (FOOD_SIZE / FOOD_SHRINK_STEP) as i32,
        "bite count should match the shrink schedule"
    );
}

#[test]
fn test_habitat_assignment_fits_window() {
    let mut params = create_test_params();
    params.enable_habitats = true;

    for _ in 0..100 {
        let rect = habitat::assign(&params);
        assert!(rect.min().x >= 0.0);
        assert!(rect.min().y >= 0.0);
        assert!(rect.max().x <= params.box_width);
        assert!(rect.max().y <= params.box_height);
        assert!(rect.width() > 0.0 && rect.height() > 0.0);
    }
}

#[test]
fn test_habitat_assignment_disabled_is_window() {
    let params = create_test_params();
    let rect = habitat::assign(&params);

    assert_eq!(rect.min().x, 0.0);
    assert_eq!(rect.min().y, 0.0);
    assert_eq!(rect.max().x, params.box_width);
    assert_eq!(rect.max().y, params.box_height);
}

#[test]
fn test_hunter_expires_without_predators() {
    let params = create_test_params();
    let mut sink = NullSink;
    let mut hunter = Hunter::new_random(0, &params);

    hunter.update(&[], &params, &mut sink);

    assert!(hunter.deleted);
}

#[test]
fn test_hunter_steers_toward_nearest_predator() {
    let params = create_test_params();
    let mut sink = NullSink;
    let mut hunter = Hunter {
        id: 0,
        pos: Array1::from_vec(vec![0.0, 0.0]),
        vel: Array1::from_vec(vec![0.0, 0.0]),
        speed: 7.0,
        size: HUNTER_SIZE,
        energy: HUNTER_INITIAL_ENERGY,
        deleted: false,
    };
    // near target straight to the right, far target further out
    let dots = vec![
        make_predator(1, 100.0, 0.0, &params),
        make_predator(2, 400.0, 0.0, &params),
    ];

    hunter.update(&dots, &params, &mut sink);

    assert_eq!(hunter.energy, HUNTER_INITIAL_ENERGY - 1);
    assert_eq!(hunter.pos[0], 7.0, "hunter should chase the nearer predator");
    assert_eq!(hunter.pos[1], 0.0);
    assert!(!hunter.deleted);
}

#[test]
fn test_hunter_energy_decay_kills_it() {
    let params = create_test_params();
    let mut sink = NullSink;
    let mut hunter = Hunter::new_random(0, &params);
    hunter.energy = 1;
    let dots = vec![make_predator(1, 100.0, 100.0, &params)];

    hunter.update(&dots, &params, &mut sink);

    assert!(hunter.deleted, "hunter must expire at zero energy");
}
