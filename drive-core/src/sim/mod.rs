use crate::constants::{CHECKPOINT_REACH_DISTANCE, COLLISION_BACKOFF, COLLISION_DISTANCE};
use crate::input::SteerInput;
use crate::world::World;

#[cfg(test)]
mod tests;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The vehicle started the tick inside an obstacle's range and backed off.
    Collided,
    Advanced { reached_checkpoint: bool },
}

/// Advances the world by one tick.
///
/// Steering is applied first. A vehicle that starts the tick within collision
/// range of any obstacle backs off along its new heading and neither extends
/// the trail nor advances the checkpoint index.
pub fn step(world: &mut World, input: SteerInput) -> StepOutcome {
    world.tick = world.tick.saturating_add(1);

    let vehicle = &mut world.vehicle;
    vehicle.heading_deg = steer(vehicle.heading_deg, vehicle.turn_rate_deg, input);
    let direction = vehicle.heading_vector();

    if world.nearest_obstacle_distance(world.vehicle.position) < COLLISION_DISTANCE {
        world.vehicle.position -= direction * COLLISION_BACKOFF;
        world.collisions = world.collisions.saturating_add(1);
        return StepOutcome::Collided;
    }

    world.vehicle.position += direction * world.vehicle.speed;
    world.trail.push(world.vehicle.position);

    let reached_checkpoint = world.vehicle.position.distance(world.active_checkpoint())
        < CHECKPOINT_REACH_DISTANCE;
    if reached_checkpoint {
        world.checkpoint_index = (world.checkpoint_index + 1) % world.checkpoints().len();
        world.checkpoints_reached = world.checkpoints_reached.saturating_add(1);
    }

    StepOutcome::Advanced { reached_checkpoint }
}

#[inline]
fn steer(heading_deg: f64, turn_rate_deg: f64, input: SteerInput) -> f64 {
    let mut heading = heading_deg;
    if input.left {
        heading += turn_rate_deg;
    }
    if input.right {
        heading -= turn_rate_deg;
    }
    heading
}
