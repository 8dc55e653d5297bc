pub mod config;
mod machine;

pub use config::ZoomConfig;
pub use machine::{round2, WheelOutcome, ZoomMachine, ZoomState};
