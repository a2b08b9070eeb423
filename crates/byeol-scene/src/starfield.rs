//! Twinkling background stars.

use byeol_core::Rgb;
use rand::Rng;

use crate::surface::Painter;

/// A single background star in surface pixels.
#[derive(Debug, Clone)]
pub struct Star {
    x: f32,
    y: f32,
    radius: f32,
    alpha: f32,
    delta: f32,
}

/// Fixed set of twinkling points, regenerated on resize.
#[derive(Debug, Default)]
pub struct StarField {
    stars: Vec<Star>,
}

impl StarField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Replace the whole field with fresh stars for the new dimensions.
    pub fn regenerate(&mut self, px_w: f32, px_h: f32, count: usize, rng: &mut impl Rng) {
        self.stars = (0..count)
            .map(|_| Star {
                x: rng.gen_range(0.0..px_w.max(1.0)),
                y: rng.gen_range(0.0..px_h.max(1.0)),
                radius: rng.gen_range(0.5..2.0),
                alpha: rng.gen_range(0.0..1.0),
                delta: rng.gen_range(0.005..0.025),
            })
            .collect();
    }

    /// Advance the twinkle: alpha oscillates, reversing at the [0, 1]
    /// bounds.
    pub fn update(&mut self) {
        for star in &mut self.stars {
            star.alpha += star.delta;
            if star.alpha <= 0.0 || star.alpha >= 1.0 {
                star.delta = -star.delta;
                star.alpha = star.alpha.clamp(0.0, 1.0);
            }
        }
    }

    pub fn draw(&self, painter: &mut Painter<'_>) {
        for star in &self.stars {
            painter.point_px(star.x, star.y, star.radius, Rgb::WHITE, star.alpha);
        }
    }
}
