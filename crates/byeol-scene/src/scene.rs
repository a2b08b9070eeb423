//! Frame orchestration.
//!
//! One `render` call per frame tick: background, stars, shooting
//! stars, falling elements, then the color-cycle advance. Spawn timers
//! live in the application loop and only append through the `spawn_*`
//! entry points.

use byeol_assets::SpriteStore;
use byeol_core::{ColorCycle, TierProfile};
use ratatui::Frame;

use crate::camera::Camera;
use crate::falling::{FallingField, SpawnPool};
use crate::shooting::ShootingStars;
use crate::starfield::StarField;
use crate::surface::{CELL_PX_H, CELL_PX_W, Painter};

/// The whole animated scene.
pub struct Scene {
    camera: Camera,
    starfield: StarField,
    shooting: ShootingStars,
    falling: FallingField,
    cycle: ColorCycle,
    profile: TierProfile,
    /// Last known terminal dimensions in cells.
    last_size: (u16, u16),
}

impl Scene {
    /// Build the scene for the given terminal size and seed the initial
    /// falling population (once).
    pub fn new(
        profile: TierProfile,
        cycle: ColorCycle,
        pool: SpawnPool,
        store: SpriteStore,
        cols: u16,
        rows: u16,
    ) -> Self {
        let px_w = cols as f32 * CELL_PX_W;
        let px_h = rows as f32 * CELL_PX_H;
        let camera = Camera::new(px_w, px_h);

        let mut rng = rand::thread_rng();
        let mut starfield = StarField::new();
        starfield.regenerate(px_w, px_h, profile.star_count, &mut rng);

        let mut falling = FallingField::new(profile.max_falling, pool, store);
        falling.populate(&camera, &mut rng);

        Self {
            camera,
            starfield,
            shooting: ShootingStars::new(),
            falling,
            cycle,
            profile,
            last_size: (cols, rows),
        }
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn profile(&self) -> &TierProfile {
        &self.profile
    }

    /// Timer entry: add one shooting star.
    pub fn spawn_shooting_star(&mut self) {
        let (px_w, px_h) = self.camera.viewport_px();
        self.shooting.spawn(px_w, px_h, &mut rand::thread_rng());
    }

    /// Timer entry: add one falling element, subject to the cap.
    pub fn spawn_falling_element(&mut self) {
        self.falling.spawn(&self.camera, &mut rand::thread_rng());
    }

    /// Draw one frame and advance all per-frame state.
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        if area.width == 0 || area.height == 0 {
            return;
        }

        // Resize: regenerate the starfield and retarget the camera.
        if (area.width, area.height) != self.last_size {
            self.last_size = (area.width, area.height);
            let px_w = area.width as f32 * CELL_PX_W;
            let px_h = area.height as f32 * CELL_PX_H;
            self.camera.set_viewport(px_w, px_h);
            self.starfield.regenerate(
                px_w,
                px_h,
                self.profile.star_count,
                &mut rand::thread_rng(),
            );
        }

        let mut painter = Painter::new(frame.buffer_mut(), area);
        painter.clear_background();

        self.starfield.update();
        self.starfield.draw(&mut painter);

        self.shooting.update();
        self.shooting.draw(&mut painter);

        self.falling.update_and_draw(
            &self.camera,
            &mut painter,
            self.cycle.color(),
            self.profile.glow_px,
            &mut rand::thread_rng(),
        );

        self.cycle.advance();
    }
}
