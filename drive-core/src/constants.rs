// Scenario layout. Coordinates are screen units with +y pointing down the window.
pub const WORLD_WIDTH: u32 = 800;
pub const WORLD_HEIGHT: u32 = 600;
pub const SCENARIO_CENTER_X: f64 = 400.0;
pub const SCENARIO_CENTER_Y: f64 = 300.0;

pub const VEHICLE_START_X: f64 = 400.0;
pub const VEHICLE_START_Y: f64 = 300.0;
pub const VEHICLE_START_HEADING_DEG: f64 = 0.0;
pub const VEHICLE_SPEED: f64 = 5.0;
pub const VEHICLE_TURN_RATE_DEG: f64 = 5.0;
pub const VEHICLE_LENGTH: f64 = 20.0;
pub const VEHICLE_WIDTH: f64 = 10.0;

// Checkpoints and obstacles sit on rings divided into eight equal slots.
pub const RING_SLOT_ANGLE_RAD: f64 = core::f64::consts::FRAC_PI_4;

pub const CHECKPOINT_COUNT: usize = 8;
pub const CHECKPOINT_RING_RADIUS: f64 = 150.0;
pub const CHECKPOINT_REACH_DISTANCE: f64 = 10.0;

// Obstacles occupy slots 2..=7 of the inner ring.
pub const OBSTACLE_RING_RADIUS: f64 = 100.0;
pub const OBSTACLE_FIRST_SLOT: usize = 2;
pub const OBSTACLE_LAST_SLOT: usize = 7;
pub const OBSTACLE_COUNT: usize = OBSTACLE_LAST_SLOT - OBSTACLE_FIRST_SLOT + 1;
pub const COLLISION_DISTANCE: f64 = 15.0;
pub const COLLISION_BACKOFF: f64 = 2.0;

pub const MARKER_RADIUS: i32 = 10;
pub const TRAIL_WIDTH: i32 = 3;
pub const STEERING_WHEEL_X: i32 = 700;
pub const STEERING_WHEEL_Y: i32 = 550;
pub const STEERING_WHEEL_RADIUS: i32 = 30;
pub const STEERING_WHEEL_HANDLE: f64 = 20.0;
pub const STEERING_WHEEL_STROKE: i32 = 5;

pub const TICK_MILLIS_DEFAULT: u64 = 30;
// Catch-up ticks allowed per wakeup before the pacing clock drops backlog.
pub const MAX_CATCH_UP_TICKS: u32 = 4;
