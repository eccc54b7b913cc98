pub mod camera;
pub mod constants;
pub mod loading;
pub mod overlay;
pub mod picking;
pub mod ring;
pub mod scene;
pub mod scroll;
pub mod waves;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static BACKGROUND_WGSL: &str = include_str!("../shaders/background.wgsl");
pub static OVERLAY_WGSL: &str = include_str!("../shaders/overlay.wgsl");

pub use camera::*;
pub use constants::*;
pub use loading::*;
pub use overlay::*;
pub use picking::*;
pub use ring::*;
pub use scene::*;
pub use scroll::*;
pub use waves::*;
