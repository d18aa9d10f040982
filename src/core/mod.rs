pub mod command;
pub mod config;
pub mod constants;
pub mod layout;
pub mod mapper;
pub mod player;
pub mod spectrum;

pub use command::*;
pub use config::*;
pub use constants::*;
pub use layout::*;
pub use mapper::*;
pub use player::*;
pub use spectrum::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
