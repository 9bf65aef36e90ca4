mod raster;

pub use raster::{Canvas, Rgba};

use glam::DVec2;

use crate::constants::{
    MARKER_RADIUS, STEERING_WHEEL_HANDLE, STEERING_WHEEL_RADIUS, STEERING_WHEEL_STROKE,
    STEERING_WHEEL_X, STEERING_WHEEL_Y, TRAIL_WIDTH, VEHICLE_LENGTH, VEHICLE_WIDTH,
};
use crate::world::World;

pub const BACKGROUND: Rgba = [0, 0, 0, 255];
pub const TRAIL: Rgba = [0, 255, 0, 255];
pub const CHECKPOINT: Rgba = [0, 255, 0, 255];
pub const OBSTACLE: Rgba = [255, 0, 0, 255];
pub const VEHICLE: Rgba = [255, 255, 255, 255];
pub const HIGHLIGHT: Rgba = [255, 255, 255, 255];
pub const STEERING_WHEEL: Rgba = [255, 255, 255, 255];

const HIGHLIGHT_RADIUS: i32 = MARKER_RADIUS + 4;
const HIGHLIGHT_STROKE: i32 = 2;

#[inline]
fn to_pixel(point: DVec2) -> (i32, i32) {
    (point.x as i32, point.y as i32)
}

/// Paints one full frame. Later layers overwrite earlier ones.
pub fn draw(world: &World, canvas: &mut Canvas<'_>) {
    canvas.clear(BACKGROUND);
    draw_trail(world, canvas);
    draw_checkpoints(world, canvas);
    draw_obstacles(world, canvas);
    draw_vehicle(world, canvas);
    draw_steering_wheel(world.vehicle().heading_deg, canvas);
}

fn draw_trail(world: &World, canvas: &mut Canvas<'_>) {
    for segment in world.trail().windows(2) {
        canvas.line(to_pixel(segment[0]), to_pixel(segment[1]), TRAIL_WIDTH, TRAIL);
    }
}

fn draw_checkpoints(world: &World, canvas: &mut Canvas<'_>) {
    for checkpoint in world.checkpoints() {
        let (x, y) = to_pixel(*checkpoint);
        canvas.fill_circle(x, y, MARKER_RADIUS, CHECKPOINT);
    }
    let (x, y) = to_pixel(world.active_checkpoint());
    canvas.ring(x, y, HIGHLIGHT_RADIUS, HIGHLIGHT_STROKE, HIGHLIGHT);
}

fn draw_obstacles(world: &World, canvas: &mut Canvas<'_>) {
    for obstacle in world.obstacles() {
        let (x, y) = to_pixel(*obstacle);
        canvas.fill_circle(x, y, MARKER_RADIUS, OBSTACLE);
    }
}

fn draw_vehicle(world: &World, canvas: &mut Canvas<'_>) {
    let vehicle = world.vehicle();
    let along = vehicle.heading_vector() * (VEHICLE_LENGTH * 0.5);
    let across = along.perp().normalize_or_zero() * (VEHICLE_WIDTH * 0.5);
    let center = vehicle.position;
    let corners = [
        center + along + across,
        center + along - across,
        center - along - across,
        center - along + across,
    ];
    canvas.fill_convex(&corners, VEHICLE);
}

/// The handle mirrors the heading about the horizontal axis so it turns with the keys.
fn draw_steering_wheel(heading_deg: f64, canvas: &mut Canvas<'_>) {
    let angle = heading_deg.to_radians();
    let handle = (
        STEERING_WHEEL_X + (STEERING_WHEEL_HANDLE * angle.cos()) as i32,
        STEERING_WHEEL_Y - (STEERING_WHEEL_HANDLE * angle.sin()) as i32,
    );
    canvas.ring(
        STEERING_WHEEL_X,
        STEERING_WHEEL_Y,
        STEERING_WHEEL_RADIUS,
        STEERING_WHEEL_STROKE,
        STEERING_WHEEL,
    );
    canvas.line(
        (STEERING_WHEEL_X, STEERING_WHEEL_Y),
        handle,
        STEERING_WHEEL_STROKE,
        STEERING_WHEEL,
    );
}
