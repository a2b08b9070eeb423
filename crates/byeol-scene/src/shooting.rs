//! Transient shooting-star streaks.
//!
//! Spawned by an independent timer, faded by a fixed decrement each
//! frame, removed when fully transparent. Unlike falling elements there
//! is no replacement policy; population follows the timer alone.

use std::f32::consts::FRAC_PI_4;

use byeol_core::Rgb;
use rand::Rng;

use crate::surface::Painter;

/// Fixed diagonal travel direction.
const ANGLE: f32 = FRAC_PI_4;
/// Opacity lost per frame.
const FADE_PER_FRAME: f32 = 0.01;

#[derive(Debug, Clone)]
pub struct ShootingStar {
    x: f32,
    y: f32,
    length: f32,
    speed: f32,
    opacity: f32,
}

/// The live set of streaks.
#[derive(Debug, Default)]
pub struct ShootingStars {
    stars: Vec<ShootingStar>,
}

impl ShootingStars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Spawn one streak starting in the upper half of the surface.
    pub fn spawn(&mut self, px_w: f32, px_h: f32, rng: &mut impl Rng) {
        self.stars.push(ShootingStar {
            x: rng.gen_range(0.0..px_w.max(1.0)),
            y: rng.gen_range(0.0..(px_h / 2.0).max(1.0)),
            length: rng.gen_range(100.0..400.0),
            speed: rng.gen_range(6.0..16.0),
            opacity: 1.0,
        });
    }

    /// Advance and fade every streak, dropping the ones that reached
    /// zero opacity this frame.
    pub fn update(&mut self) {
        for star in &mut self.stars {
            star.x += ANGLE.cos() * star.speed;
            star.y += ANGLE.sin() * star.speed;
            star.opacity -= FADE_PER_FRAME;
        }
        self.stars.retain(|s| s.opacity > 0.0);
    }

    pub fn draw(&self, painter: &mut Painter<'_>) {
        for star in &self.stars {
            let tail = (
                star.x - ANGLE.cos() * star.length,
                star.y - ANGLE.sin() * star.length,
            );
            painter.streak_px((star.x, star.y), tail, Rgb::WHITE, star.opacity);
        }
    }
}
