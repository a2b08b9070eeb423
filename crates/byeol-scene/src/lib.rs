//! Scene engine for the byeol screensaver.
//!
//! A starfield background, periodic shooting stars, and a stream of
//! phrases and sprites receding toward a vanishing point under a
//! pinhole-camera projection. The scene draws into a virtual pixel
//! space mapped onto the terminal cell grid.

mod camera;
mod falling;
mod scene;
mod shooting;
mod starfield;
mod surface;

pub use camera::{Camera, FOCAL_LENGTH_PX, Projection};
pub use falling::{FallingField, SpawnPool, SpriteSource};
pub use scene::Scene;
pub use shooting::ShootingStars;
pub use starfield::StarField;
pub use surface::{CELL_PX_H, CELL_PX_W, Painter};
