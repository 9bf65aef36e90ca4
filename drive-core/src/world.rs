use glam::DVec2;

use crate::constants::{
    CHECKPOINT_COUNT, CHECKPOINT_RING_RADIUS, OBSTACLE_FIRST_SLOT, OBSTACLE_LAST_SLOT,
    OBSTACLE_RING_RADIUS, RING_SLOT_ANGLE_RAD, SCENARIO_CENTER_X, SCENARIO_CENTER_Y,
    VEHICLE_SPEED, VEHICLE_START_HEADING_DEG, VEHICLE_START_X, VEHICLE_START_Y,
    VEHICLE_TURN_RATE_DEG,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vehicle {
    pub position: DVec2,
    /// Degrees; 0 points along +x and positive turns are counter-clockwise in math axes.
    pub heading_deg: f64,
    pub speed: f64,
    pub turn_rate_deg: f64,
}

impl Vehicle {
    pub fn new(position: DVec2, heading_deg: f64) -> Self {
        Self {
            position,
            heading_deg,
            speed: VEHICLE_SPEED,
            turn_rate_deg: VEHICLE_TURN_RATE_DEG,
        }
    }

    #[inline]
    pub fn heading_vector(&self) -> DVec2 {
        heading_vector(self.heading_deg)
    }
}

impl Default for Vehicle {
    fn default() -> Self {
        Self::new(
            DVec2::new(VEHICLE_START_X, VEHICLE_START_Y),
            VEHICLE_START_HEADING_DEG,
        )
    }
}

/// Simulation state shared by the update and render steps.
///
/// The scenario geometry is fixed at construction. Everything else is only
/// mutated by [`crate::sim::step`].
#[derive(Clone, Debug)]
pub struct World {
    pub(crate) vehicle: Vehicle,
    checkpoints: Vec<DVec2>,
    obstacles: Vec<DVec2>,
    pub(crate) checkpoint_index: usize,
    pub(crate) trail: Vec<DVec2>,
    pub(crate) tick: u64,
    pub(crate) collisions: u64,
    pub(crate) checkpoints_reached: u64,
}

impl World {
    pub fn new() -> Self {
        Self::with_vehicle(Vehicle::default())
    }

    pub fn with_vehicle(vehicle: Vehicle) -> Self {
        Self {
            vehicle,
            checkpoints: checkpoint_ring(),
            obstacles: obstacle_ring(),
            checkpoint_index: 0,
            trail: Vec::new(),
            tick: 0,
            collisions: 0,
            checkpoints_reached: 0,
        }
    }

    #[inline]
    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    #[inline]
    pub fn checkpoints(&self) -> &[DVec2] {
        &self.checkpoints
    }

    #[inline]
    pub fn obstacles(&self) -> &[DVec2] {
        &self.obstacles
    }

    #[inline]
    pub fn checkpoint_index(&self) -> usize {
        self.checkpoint_index
    }

    #[inline]
    pub fn active_checkpoint(&self) -> DVec2 {
        self.checkpoints[self.checkpoint_index]
    }

    #[inline]
    pub fn trail(&self) -> &[DVec2] {
        &self.trail
    }

    #[inline]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    #[inline]
    pub fn collisions(&self) -> u64 {
        self.collisions
    }

    #[inline]
    pub fn checkpoints_reached(&self) -> u64 {
        self.checkpoints_reached
    }

    /// Distance to the closest obstacle, or infinity for an obstacle-free world.
    pub fn nearest_obstacle_distance(&self, point: DVec2) -> f64 {
        self.obstacles
            .iter()
            .map(|obstacle| point.distance(*obstacle))
            .fold(f64::INFINITY, f64::min)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
pub fn heading_vector(heading_deg: f64) -> DVec2 {
    let radians = heading_deg.to_radians();
    DVec2::new(radians.cos(), radians.sin())
}

fn ring_point(radius: f64, slot: usize) -> DVec2 {
    let angle = RING_SLOT_ANGLE_RAD * slot as f64;
    DVec2::new(
        SCENARIO_CENTER_X + radius * angle.cos(),
        SCENARIO_CENTER_Y + radius * angle.sin(),
    )
}

fn checkpoint_ring() -> Vec<DVec2> {
    (0..CHECKPOINT_COUNT)
        .map(|slot| ring_point(CHECKPOINT_RING_RADIUS, slot))
        .collect()
}

fn obstacle_ring() -> Vec<DVec2> {
    (OBSTACLE_FIRST_SLOT..=OBSTACLE_LAST_SLOT)
        .map(|slot| ring_point(OBSTACLE_RING_RADIUS, slot))
        .collect()
}
