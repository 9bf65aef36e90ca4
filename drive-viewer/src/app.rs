use std::time::Instant;

use anyhow::{Context, Result};
use drive_core::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use drive_core::render::{draw, Canvas};
use drive_core::{step, StepOutcome, World};
use pixels::{Pixels, SurfaceTexture};
use tracing::{debug, error, trace, warn};
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::EventLoop;
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::WindowBuilder;

use crate::config::ViewerConfig;
use crate::input::HeldKeys;
use crate::pacing::TickClock;

pub const WINDOW_TITLE: &str = "Autonomous Vehicle Simulation";

/// The world plus the keys currently steering it.
#[derive(Debug, Default)]
pub struct Session {
    world: World,
    keys: HeldKeys,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub ticks: u64,
    pub checkpoint_index: usize,
    pub checkpoints_reached: u64,
    pub collisions: u64,
    pub trail_len: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn handle_key(&mut self, key: VirtualKeyCode, state: ElementState) {
        self.keys.handle(key, state);
    }

    pub fn focus_lost(&mut self) {
        self.keys.release_all();
    }

    /// Advances the world one tick with the keys held right now.
    pub fn tick(&mut self) -> StepOutcome {
        let outcome = step(&mut self.world, self.keys.steer());
        match outcome {
            StepOutcome::Collided => {
                let position = self.world.vehicle().position;
                trace!(
                    tick = self.world.tick(),
                    x = position.x,
                    y = position.y,
                    "collision"
                );
            }
            StepOutcome::Advanced {
                reached_checkpoint: true,
            } => {
                debug!(
                    tick = self.world.tick(),
                    next = self.world.checkpoint_index(),
                    "checkpoint reached"
                );
            }
            StepOutcome::Advanced { .. } => {}
        }
        outcome
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            ticks: self.world.tick(),
            checkpoint_index: self.world.checkpoint_index(),
            checkpoints_reached: self.world.checkpoints_reached(),
            collisions: self.world.collisions(),
            trail_len: self.world.trail().len(),
        }
    }
}

/// Surface dimensions for a window resize, or `None` while the window is minimized.
pub fn presentable_size(size: PhysicalSize<u32>) -> Option<(u32, u32)> {
    if size.width == 0 || size.height == 0 {
        None
    } else {
        Some((size.width, size.height))
    }
}

/// Opens the window and drives `session` until the user quits.
///
/// The window and its surface are released before this returns.
pub fn run_window(mut session: Session, config: &ViewerConfig) -> Result<Session> {
    let mut event_loop = EventLoop::new();
    let size = LogicalSize::new(WORLD_WIDTH as f64, WORLD_HEIGHT as f64);
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(size)
        .with_min_inner_size(size)
        .build(&event_loop)
        .context("failed to create window")?;

    let window_size = window.inner_size();
    let surface = SurfaceTexture::new(window_size.width, window_size.height, &window);
    let mut pixels = Pixels::new(WORLD_WIDTH, WORLD_HEIGHT, surface)
        .context("failed to create pixel surface")?;

    let mut clock = TickClock::new(config.tick, config.max_catch_up, Instant::now());
    let mut minimized = presentable_size(window_size).is_none();
    let mut quit = false;
    let mut failure: Option<anyhow::Error> = None;
    window.request_redraw();

    event_loop.run_return(|event, _, control_flow| {
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => quit = true,
                WindowEvent::Focused(false) => session.focus_lost(),
                WindowEvent::Resized(size) => match presentable_size(size) {
                    Some((width, height)) => {
                        minimized = false;
                        if let Err(err) = pixels.resize_surface(width, height) {
                            error!("surface resize failed: {err}");
                            failure =
                                Some(anyhow::Error::new(err).context("failed to resize surface"));
                            quit = true;
                        }
                    }
                    None => minimized = true,
                },
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => {
                    if key == VirtualKeyCode::Escape && state == ElementState::Pressed {
                        quit = true;
                    } else {
                        session.handle_key(key, state);
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                let due = clock.advance(Instant::now());
                for _ in 0..due {
                    session.tick();
                }
                if due > 0 && !minimized {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) if !minimized => {
                let mut canvas = Canvas::new(pixels.frame_mut(), WORLD_WIDTH, WORLD_HEIGHT);
                draw(session.world(), &mut canvas);
                if let Err(err) = pixels.render() {
                    error!("render failed: {err}");
                    failure = Some(anyhow::Error::new(err).context("failed to present frame"));
                    quit = true;
                }
            }
            _ => {}
        }

        if quit {
            control_flow.set_exit();
        } else {
            control_flow.set_wait_until(clock.next_deadline());
        }
    });

    if clock.dropped() > 0 {
        warn!(dropped = clock.dropped(), "ticks skipped to catch up with the clock");
    }

    drop(pixels);
    drop(window);

    match failure {
        Some(err) => Err(err),
        None => Ok(session),
    }
}
