use std::fs::{self, File};
use std::io;
use std::time::{Duration, Instant};

use byeol_assets::{Sprite, SpriteStore, builtin_hearts, builtin_sparkles};
use byeol_config::Config;
use byeol_core::{ColorCycle, DeviceTier};
use byeol_scene::{CELL_PX_W, Scene, SpawnPool, SpriteSource};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use directories::ProjectDirs;
use ratatui::DefaultTerminal;

mod input;

use input::InputController;

/// Frame cadence, approximating a 60 Hz display refresh.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_logging();

    let config = Config::load().map_err(|e| color_eyre::eyre::eyre!(e))?;

    let terminal = ratatui::init();
    if let Err(err) = crossterm::execute!(io::stdout(), EnableMouseCapture) {
        log::warn!("mouse capture unavailable: {err}");
    }
    let result = App::new(config).run(terminal);
    let _ = crossterm::execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}

/// Route log output to a file; the terminal itself is the display.
fn init_logging() {
    let Some(dirs) = ProjectDirs::from("", "", "byeol") else {
        return;
    };
    let log_dir = dirs.data_dir();
    if fs::create_dir_all(log_dir).is_err() {
        return;
    }
    let Ok(file) = File::create(log_dir.join("byeol.log")) else {
        return;
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}

/// Repeating timer driven by the frame loop. Fires at most once per
/// check, so spawn cadence is bounded by the loop frequency.
struct Ticker {
    interval: Duration,
    last: Instant,
}

impl Ticker {
    fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Instant::now(),
        }
    }

    fn tick(&mut self) -> bool {
        if self.last.elapsed() >= self.interval {
            self.last = Instant::now();
            true
        } else {
            false
        }
    }
}

/// The main application which holds the state and logic of the application.
pub struct App {
    /// Is the application running?
    running: bool,
    /// Loaded user configuration.
    config: Config,
    /// Pointer-to-camera translation state.
    input: InputController,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        Self {
            running: false,
            config,
            input: InputController::new(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let size = terminal.size()?;
        let tier = DeviceTier::from_px_width(size.width as f32 * CELL_PX_W);
        let profile = tier.profile();
        log::info!(
            "starting byeol: {}x{} cells, {tier:?} tier",
            size.width,
            size.height
        );

        let store = SpriteStore::new();
        let pool = build_spawn_pool(&self.config, &store);
        let cycle = ColorCycle::new(self.config.text_palette(), self.config.color_cycle_step);
        let mut scene = Scene::new(profile, cycle, pool, store, size.width, size.height);

        let mut shooting_timer = Ticker::new(profile.shooting_star_interval);
        let mut falling_timer = Ticker::new(profile.falling_spawn_interval);

        self.running = true;
        let mut deadline = Instant::now() + FRAME_INTERVAL;
        while self.running {
            if shooting_timer.tick() {
                scene.spawn_shooting_star();
            }
            if falling_timer.tick() {
                scene.spawn_falling_element();
            }

            terminal.draw(|frame| scene.render(frame))?;

            // Absorb input until the next frame is due.
            loop {
                let Some(budget) = deadline.checked_duration_since(Instant::now()) else {
                    break;
                };
                if !event::poll(budget)? {
                    break;
                }
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                    Event::Mouse(mouse) => self.input.on_mouse(mouse, scene.camera_mut()),
                    Event::FocusLost => self.input.cancel_drag(),
                    // The scene regenerates itself from the new frame area.
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
            deadline += FRAME_INTERVAL;
            if deadline < Instant::now() {
                deadline = Instant::now() + FRAME_INTERVAL;
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Resolve the spawn pool from configuration, falling back to the
/// built-in art when no sprite files are configured.
fn build_spawn_pool(config: &Config, store: &SpriteStore) -> SpawnPool {
    SpawnPool {
        phrases: config.phrases.clone(),
        images: sprite_sources(&config.image_sprites, builtin_sparkles(), store),
        hearts: sprite_sources(&config.heart_sprites, builtin_hearts(), store),
    }
}

fn sprite_sources(
    paths: &[std::path::PathBuf],
    builtin: Vec<Sprite>,
    store: &SpriteStore,
) -> Vec<SpriteSource> {
    if paths.is_empty() {
        builtin
            .into_iter()
            .map(|sprite| SpriteSource::Ready(store.register(sprite)))
            .collect()
    } else {
        paths.iter().cloned().map(SpriteSource::File).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_pool_uses_builtin_art_by_default() {
        let store = SpriteStore::new();
        let pool = build_spawn_pool(&Config::default(), &store);
        assert!(!pool.phrases.is_empty());
        assert!(!pool.images.is_empty());
        assert!(!pool.hearts.is_empty());
        assert!(pool.hearts.iter().all(|s| matches!(s, SpriteSource::Ready(_))));
    }

    #[test]
    fn test_spawn_pool_prefers_configured_files() {
        let store = SpriteStore::new();
        let mut config = Config::default();
        config.heart_sprites = vec!["hearts/one.txt".into()];
        let pool = build_spawn_pool(&config, &store);
        assert_eq!(pool.hearts.len(), 1);
        assert!(matches!(pool.hearts[0], SpriteSource::File(_)));
    }

    #[test]
    fn test_ticker_fires_after_interval() {
        let mut ticker = Ticker::new(Duration::from_millis(0));
        assert!(ticker.tick());
        let mut slow = Ticker::new(Duration::from_secs(3600));
        assert!(!slow.tick());
    }
}
