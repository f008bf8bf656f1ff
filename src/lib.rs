pub mod color;
pub mod config;
pub mod hierarchy;
pub mod math;
pub mod player_loop;
pub mod random;
pub mod time;
pub mod vector;
pub mod wait;

pub use player_loop::{PhaseId, PhaseNode, PlayerLoop};
pub use wait::{WaitHandle, WaitPool};
