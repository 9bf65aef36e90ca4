pub mod constants;
pub mod input;
pub mod render;
pub mod sim;
pub mod world;

pub use input::SteerInput;
pub use sim::{step, StepOutcome};
pub use world::{Vehicle, World};
