//! Built-in character art.

use crate::sprite::Sprite;

/// Heart art used when no sprite files are configured.
const HEART_ART: [&str; 2] = [
    r"
 ▓██▓    ▓██▓
██████  ██████
██████████████
██████████████
 ████████████
   ████████
     ████
      ██
",
    r"
 ░▓░ ░▓░
▓███▓███▓
▓███████▓
 ▓█████▓
  ░███░
   ░█░
",
];

/// Sparkle art for the generic image kind.
const SPARKLE_ART: [&str; 1] = [r"
    ░
   ░█░
  ░███░
░███████░
  ░███░
   ░█░
    ░
"];

/// Parse the built-in heart sprites.
pub fn builtin_hearts() -> Vec<Sprite> {
    HEART_ART.iter().filter_map(|art| Sprite::parse(art)).collect()
}

/// Parse the built-in sparkle sprites.
pub fn builtin_sparkles() -> Vec<Sprite> {
    SPARKLE_ART.iter().filter_map(|art| Sprite::parse(art)).collect()
}
