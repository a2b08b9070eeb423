//! Falling content elements: phrases and sprites receding toward the
//! vanishing point.
//!
//! The field keeps a bounded population. Elements that pass the camera
//! or recede out of frame are removed and replaced one-for-one, subject
//! to the population cap; elements whose sprite failed to load are
//! removed without replacement and backfilled by the spawn timer.

use std::path::PathBuf;

use byeol_assets::{LoadStatus, SpriteId, SpriteStore};
use byeol_core::Rgb;
use rand::Rng;

use crate::camera::{Camera, FOCAL_LENGTH_PX};
use crate::surface::Painter;

/// Spawn depth range as focal-length multiples.
const SPAWN_DEPTH_MIN: f32 = FOCAL_LENGTH_PX * 1.5;
const SPAWN_DEPTH_MAX: f32 = FOCAL_LENGTH_PX * 5.0;
/// Spawn plane extends 10% beyond the visible plane so elements can
/// drift into view.
const SPAWN_BUFFER: f32 = 1.1;

const PHRASE_BASE_SIZE: f32 = 30.0;
const SPRITE_BASE_SIZE: f32 = 50.0;

const HEART_TINT: Rgb = Rgb::new(0xFF, 0x69, 0xB4);
const SPARKLE_TINT: Rgb = Rgb::new(0xFF, 0xD7, 0x00);

/// Kind of falling content, chosen by weighted random at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Phrase,
    Image,
    Heart,
}

impl ElementKind {
    fn tint(self) -> Rgb {
        match self {
            // Phrases use the cycling text color instead.
            Self::Phrase => Rgb::WHITE,
            Self::Image => SPARKLE_TINT,
            Self::Heart => HEART_TINT,
        }
    }
}

#[derive(Debug, Clone)]
enum Content {
    Phrase(String),
    Sprite(SpriteId),
}

#[derive(Debug, Clone)]
struct FallingElement {
    kind: ElementKind,
    content: Content,
    world_x: f32,
    world_y: f32,
    depth: f32,
    base_size: f32,
    depth_velocity: f32,
}

/// Where a sprite spawn draws its art from.
#[derive(Debug, Clone)]
pub enum SpriteSource {
    /// Pre-registered art, ready in the store.
    Ready(SpriteId),
    /// Art file loaded on first use.
    File(PathBuf),
}

/// Content the spawner randomizes over.
#[derive(Debug, Clone, Default)]
pub struct SpawnPool {
    pub phrases: Vec<String>,
    pub images: Vec<SpriteSource>,
    pub hearts: Vec<SpriteSource>,
}

impl SpawnPool {
    fn sources(&self, kind: ElementKind) -> &[SpriteSource] {
        match kind {
            ElementKind::Image => &self.images,
            ElementKind::Heart => &self.hearts,
            ElementKind::Phrase => &[],
        }
    }
}

/// The live collection of falling elements.
#[derive(Debug)]
pub struct FallingField {
    elements: Vec<FallingElement>,
    cap: usize,
    pool: SpawnPool,
    store: SpriteStore,
}

impl FallingField {
    pub fn new(cap: usize, pool: SpawnPool, store: SpriteStore) -> Self {
        Self {
            elements: Vec::with_capacity(cap),
            cap,
            pool,
            store,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Seed the initial population up to the cap. Called exactly once
    /// at startup.
    pub fn populate(&mut self, camera: &Camera, rng: &mut impl Rng) {
        while self.elements.len() < self.cap {
            if !self.try_spawn(camera, rng) {
                break;
            }
        }
    }

    /// Spawn one element if the population allows it. Timer entry point.
    pub fn spawn(&mut self, camera: &Camera, rng: &mut impl Rng) {
        if self.elements.len() < self.cap {
            self.try_spawn(camera, rng);
        }
    }

    /// Build and push one randomized element. Returns false when the
    /// pool has nothing left to offer for any kind.
    fn try_spawn(&mut self, camera: &Camera, rng: &mut impl Rng) -> bool {
        let roll: f32 = rng.r#gen();
        let kind = if roll < 0.6 {
            ElementKind::Phrase
        } else if roll < 0.8 {
            ElementKind::Image
        } else {
            ElementKind::Heart
        };

        let Some((kind, content)) = self.pick_content(kind, rng) else {
            return false;
        };

        let depth = rng.gen_range(SPAWN_DEPTH_MIN..SPAWN_DEPTH_MAX);
        let (plane_w, plane_h) = camera.visible_plane(SPAWN_DEPTH_MAX);

        // Sum of two uniforms: triangular, biased toward the center.
        let mut triangular = |range: f32| -> f32 {
            (rng.r#gen::<f32>() + rng.r#gen::<f32>() - 1.0) * 0.5 * range
        };
        let world_x = triangular(plane_w * SPAWN_BUFFER);
        let world_y = triangular(plane_h * SPAWN_BUFFER);

        let base_size = match kind {
            ElementKind::Phrase => PHRASE_BASE_SIZE,
            _ => SPRITE_BASE_SIZE,
        };

        self.elements.push(FallingElement {
            kind,
            content,
            world_x,
            world_y,
            depth,
            base_size,
            depth_velocity: rng.gen_range(2.0..7.0),
        });
        true
    }

    /// Resolve content for the rolled kind, degrading to the next kind
    /// when a pool list is empty.
    fn pick_content(
        &self,
        rolled: ElementKind,
        rng: &mut impl Rng,
    ) -> Option<(ElementKind, Content)> {
        let order = match rolled {
            ElementKind::Phrase => [ElementKind::Phrase, ElementKind::Image, ElementKind::Heart],
            ElementKind::Image => [ElementKind::Image, ElementKind::Heart, ElementKind::Phrase],
            ElementKind::Heart => [ElementKind::Heart, ElementKind::Image, ElementKind::Phrase],
        };
        for kind in order {
            if kind == ElementKind::Phrase {
                if let Some(phrase) = pick(&self.pool.phrases, rng) {
                    return Some((kind, Content::Phrase(phrase.clone())));
                }
            } else if let Some(source) = pick(self.pool.sources(kind), rng) {
                let id = match source {
                    SpriteSource::Ready(id) => *id,
                    SpriteSource::File(path) => self.store.request(path),
                };
                return Some((kind, Content::Sprite(id)));
            }
        }
        None
    }

    /// One frame: enforce the cap, advance depths, cull, respawn, draw.
    pub fn update_and_draw(
        &mut self,
        camera: &Camera,
        painter: &mut Painter<'_>,
        text_color: Rgb,
        glow_px: f32,
        rng: &mut impl Rng,
    ) {
        // One-time correction when the cap was exceeded (e.g. after a
        // tier change): discard the excess without respawning.
        self.elements.truncate(self.cap);

        let zoom = camera.zoom();
        let (view_w, view_h) = camera.viewport_px();

        let mut i = self.elements.len();
        while i > 0 {
            i -= 1;

            self.elements[i].depth -= self.elements[i].depth_velocity * zoom;

            // Passed the camera plane.
            if self.elements[i].depth <= 0.0 {
                self.elements.remove(i);
                if self.elements.len() < self.cap {
                    self.try_spawn(camera, rng);
                }
                continue;
            }

            let el = &self.elements[i];
            let proj = camera.project(el.world_x, el.world_y, el.depth);
            let size = el.base_size * proj.scale * zoom;
            let half = size / 2.0;

            // Receded fully out of frame. The depth guard keeps close
            // elements that merely overflow the frame while growing.
            let off_frame = proj.x + half < 0.0
                || proj.x - half > view_w
                || proj.y + half < 0.0
                || proj.y - half > view_h;
            if off_frame && el.depth > FOCAL_LENGTH_PX {
                self.elements.remove(i);
                if self.elements.len() < self.cap {
                    self.try_spawn(camera, rng);
                }
                continue;
            }

            let sprite_status = match &self.elements[i].content {
                Content::Sprite(id) => Some(self.store.status(*id)),
                Content::Phrase(_) => None,
            };
            if matches!(sprite_status, Some(LoadStatus::Failed)) {
                log::warn!("dropping falling element with failed sprite load");
                self.elements.remove(i);
                continue;
            }

            let el = &self.elements[i];
            match (&el.content, sprite_status) {
                (Content::Phrase(text), _) => {
                    painter.text_px(
                        proj.x,
                        proj.y,
                        text,
                        text_color,
                        proj.opacity,
                        glow_px * proj.scale,
                    );
                }
                (Content::Sprite(_), Some(LoadStatus::Ready(sprite))) => {
                    painter.sprite_px(proj.x, proj.y, size, &sprite, el.kind.tint(), proj.opacity);
                }
                // Still loading: skipped this frame, not removed.
                _ => {}
            }
        }
    }
}

fn pick<'a, T>(items: &'a [T], rng: &mut impl Rng) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        items.get(rng.gen_range(0..items.len()))
    }
}
