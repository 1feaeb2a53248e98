pub mod animator;
pub mod color;
pub mod config;
pub mod constants;
pub mod debounce;
pub mod error;
pub mod gradient;
pub mod input;
pub mod layout;
pub mod model;
pub mod picking;
pub mod state;
pub mod tween;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use animator::*;
pub use config::*;
pub use constants::*;
pub use debounce::*;
pub use error::*;
pub use gradient::*;
pub use input::*;
pub use layout::*;
pub use model::*;
pub use picking::*;
pub use state::*;
pub use tween::*;
