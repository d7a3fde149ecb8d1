pub mod animator;
pub mod clock;
pub mod config;
pub mod constants;
pub mod ensemble;
pub mod instance;
pub mod layout;
pub mod state;
pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");

pub use animator::*;
pub use clock::*;
pub use config::*;
pub use constants::*;
pub use ensemble::*;
pub use instance::*;
pub use layout::*;
pub use state::*;
