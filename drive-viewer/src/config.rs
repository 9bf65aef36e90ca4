use std::time::Duration;

use drive_core::constants::{MAX_CATCH_UP_TICKS, TICK_MILLIS_DEFAULT};

/// Loop timing. The program takes no runtime configuration, so this is
/// always the default outside of tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerConfig {
    pub tick: Duration,
    /// Most ticks simulated for one wakeup before the backlog is dropped.
    pub max_catch_up: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(TICK_MILLIS_DEFAULT),
            max_catch_up: MAX_CATCH_UP_TICKS,
        }
    }
}
