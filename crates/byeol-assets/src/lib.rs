//! Sprite assets for the byeol screensaver.
//!
//! Sprites are character-art grids: built-in hearts and sparkles, plus
//! user-supplied art files loaded asynchronously through [`SpriteStore`].

mod art;
mod sprite;
mod store;

pub use art::{builtin_hearts, builtin_sparkles};
pub use sprite::Sprite;
pub use store::{LoadStatus, SpriteId, SpriteStore};
