use glam::DVec2;

use super::*;
use crate::constants::CHECKPOINT_COUNT;
use crate::world::{heading_vector, Vehicle};

/// Heading 90 points down the screen, straight at the obstacle in slot 2.
fn world_facing_obstacle() -> World {
    World::with_vehicle(Vehicle::new(DVec2::new(400.0, 300.0), 90.0))
}

fn world_inside_obstacle_range() -> World {
    World::with_vehicle(Vehicle::new(DVec2::new(300.0, 295.0), 0.0))
}

/// Deterministic steering noise for long-running property checks.
fn noisy_inputs(seed: u32, len: usize) -> Vec<SteerInput> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            SteerInput {
                left: state & 0x01 != 0,
                right: state & 0x02 != 0,
            }
        })
        .collect()
}

fn assert_world_consistent(world: &World) {
    let vehicle = world.vehicle();
    assert!(vehicle.position.is_finite(), "position {:?}", vehicle.position);
    assert!(vehicle.heading_deg.is_finite());
    assert!(world.checkpoint_index() < CHECKPOINT_COUNT);
    assert_eq!(
        world.trail().len() as u64 + world.collisions(),
        world.tick(),
        "every tick either extends the trail or collides"
    );
}

#[test]
fn first_tick_from_start_moves_forward() {
    let mut world = World::new();
    let outcome = step(&mut world, SteerInput::NONE);

    assert_eq!(
        outcome,
        StepOutcome::Advanced {
            reached_checkpoint: false
        }
    );
    assert_eq!(world.vehicle().position, DVec2::new(405.0, 300.0));
    assert_eq!(world.trail(), &[DVec2::new(405.0, 300.0)]);
    assert_eq!(world.checkpoint_index(), 0);
    assert_eq!(world.tick(), 1);
}

#[test]
fn steering_changes_heading_by_turn_rate() {
    let cases = [
        (SteerInput::NONE, 0.0),
        (SteerInput::LEFT, 5.0),
        (SteerInput::RIGHT, -5.0),
        (SteerInput::BOTH, 0.0),
    ];
    for (input, expected) in cases {
        let mut world = World::new();
        step(&mut world, input);
        assert_eq!(world.vehicle().heading_deg, expected, "input {input:?}");
    }
}

#[test]
fn heading_accumulates_without_wrapping() {
    let mut world = World::new();
    for _ in 0..80 {
        step(&mut world, SteerInput::LEFT);
    }
    assert_eq!(world.vehicle().heading_deg, 400.0);
}

#[test]
fn collision_backs_off_along_heading() {
    let mut world = world_inside_obstacle_range();
    let outcome = step(&mut world, SteerInput::NONE);

    assert_eq!(outcome, StepOutcome::Collided);
    assert_eq!(world.vehicle().position, DVec2::new(298.0, 295.0));
    assert!(world.trail().is_empty());
    assert_eq!(world.collisions(), 1);
    assert_eq!(world.checkpoint_index(), 0);
}

#[test]
fn collision_backoff_uses_steered_heading() {
    let mut world = world_inside_obstacle_range();
    let before = world.vehicle().position;
    step(&mut world, SteerInput::LEFT);

    let expected = before - heading_vector(5.0) * 2.0;
    assert_eq!(world.vehicle().heading_deg, 5.0);
    assert_eq!(world.vehicle().position, expected);
}

#[test]
fn collision_tick_leaves_checkpoint_progress_alone() {
    let mut world = world_inside_obstacle_range();
    world.checkpoint_index = 4;
    step(&mut world, SteerInput::NONE);
    assert_eq!(world.checkpoint_index(), 4);
    assert_eq!(world.checkpoints_reached(), 0);
}

#[test]
fn driving_into_obstacle_alternates_without_extending_trail() {
    let mut world = world_facing_obstacle();
    let mut collided_ticks = 0;

    for _ in 0..60 {
        let trail_before = world.trail().len();
        match step(&mut world, SteerInput::NONE) {
            StepOutcome::Collided => {
                collided_ticks += 1;
                assert_eq!(world.trail().len(), trail_before);
            }
            StepOutcome::Advanced { .. } => {
                assert_eq!(world.trail().len(), trail_before + 1);
            }
        }
        // The vehicle never gets through the obstacle at (400, 400).
        assert!(world.vehicle().position.y < 400.0);
    }

    assert!(collided_ticks > 0);
    assert_eq!(world.collisions(), collided_ticks);
}

#[test]
fn reaches_first_checkpoint_after_twenty_nine_ticks() {
    let mut world = World::new();
    for _ in 0..28 {
        step(&mut world, SteerInput::NONE);
    }
    // Exactly 10 units away is not close enough.
    assert_eq!(world.vehicle().position, DVec2::new(540.0, 300.0));
    assert_eq!(world.checkpoint_index(), 0);

    let outcome = step(&mut world, SteerInput::NONE);
    assert_eq!(
        outcome,
        StepOutcome::Advanced {
            reached_checkpoint: true
        }
    );
    assert_eq!(world.checkpoint_index(), 1);
    assert_eq!(world.checkpoints_reached(), 1);
}

#[test]
fn starting_on_checkpoint_advances_exactly_once() {
    let first = World::new().checkpoints()[0];
    let mut world = World::with_vehicle(Vehicle::new(first, 0.0));
    step(&mut world, SteerInput::NONE);
    assert_eq!(world.checkpoint_index(), 1);

    step(&mut world, SteerInput::NONE);
    assert_eq!(world.checkpoint_index(), 1);
}

#[test]
fn checkpoint_index_wraps_after_last() {
    let last = World::new().checkpoints()[CHECKPOINT_COUNT - 1];
    let mut world = World::with_vehicle(Vehicle::new(last, 0.0));
    world.checkpoint_index = CHECKPOINT_COUNT - 1;

    step(&mut world, SteerInput::NONE);
    assert_eq!(world.checkpoint_index(), 0);
}

#[test]
fn noisy_driving_keeps_world_consistent() {
    for seed in [0xDEAD_BEEF, 0xC0FF_EE11, 0x1234_5678] {
        let mut world = World::new();
        for input in noisy_inputs(seed, 4_000) {
            let trail_before = world.trail().len();
            let outcome = step(&mut world, input);
            let appended = world.trail().len() - trail_before;
            match outcome {
                StepOutcome::Collided => assert_eq!(appended, 0),
                StepOutcome::Advanced { .. } => assert_eq!(appended, 1),
            }
            assert_world_consistent(&world);
        }
    }
}

#[test]
fn same_inputs_are_deterministic() {
    let inputs = noisy_inputs(0xABCD_1234, 2_000);
    let mut a = World::new();
    let mut b = World::new();
    for input in &inputs {
        step(&mut a, *input);
        step(&mut b, *input);
    }
    assert_eq!(a.vehicle(), b.vehicle());
    assert_eq!(a.trail(), b.trail());
    assert_eq!(a.checkpoint_index(), b.checkpoint_index());
}

#[test]
fn counters_saturate_instead_of_overflowing() {
    let mut world = world_inside_obstacle_range();
    world.tick = u64::MAX;
    world.collisions = u64::MAX;
    assert_eq!(step(&mut world, SteerInput::NONE), StepOutcome::Collided);
    assert_eq!(world.tick(), u64::MAX);
    assert_eq!(world.collisions(), u64::MAX);

    let first = World::new().checkpoints()[0];
    let mut world = World::with_vehicle(Vehicle::new(first, 0.0));
    world.tick = u64::MAX;
    world.checkpoints_reached = u64::MAX;
    step(&mut world, SteerInput::NONE);
    assert_eq!(world.tick(), u64::MAX);
    assert_eq!(world.checkpoints_reached(), u64::MAX);
    assert_eq!(world.checkpoint_index(), 1);
}
