pub mod camera;
pub mod constants;
pub mod geometry;
pub mod input;
pub mod interaction;
pub mod picking;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::OrbitCamera;
pub use input::{Cursor, EventResponse, InputEvent, MouseState, PanKey};
pub use interaction::{Interaction, Marker};
pub use picking::{Aabb, Ray};
