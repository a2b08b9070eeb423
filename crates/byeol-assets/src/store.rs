//! Asynchronous sprite loading.
//!
//! File sprites load on background threads and publish their outcome
//! into a shared map, which the frame loop polls by handle. There is no
//! cancellation: a load that resolves after its element is gone simply
//! parks in the store.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::thread;

use crate::sprite::Sprite;

/// Stable handle for a sprite slot in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteId(u64);

/// Poll result for a sprite slot.
#[derive(Debug, Clone)]
pub enum LoadStatus {
    /// Load still in flight (or the store lock was contended).
    Pending,
    /// Load finished; art is available.
    Ready(Arc<Sprite>),
    /// Load failed, or the handle is unknown.
    Failed,
}

impl LoadStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

#[derive(Debug, Default)]
struct StoreInner {
    slots: HashMap<SpriteId, LoadStatus>,
    by_path: HashMap<PathBuf, SpriteId>,
}

/// Shared sprite store. Cloning shares the underlying slots.
#[derive(Debug, Clone, Default)]
pub struct SpriteStore {
    inner: Arc<RwLock<StoreInner>>,
    next_id: Arc<AtomicU64>,
}

impl SpriteStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&self) -> SpriteId {
        SpriteId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Register an already-parsed sprite; the slot is Ready immediately.
    pub fn register(&self, sprite: Sprite) -> SpriteId {
        let id = self.allocate_id();
        if let Ok(mut inner) = self.inner.write() {
            inner.slots.insert(id, LoadStatus::Ready(Arc::new(sprite)));
        }
        id
    }

    /// Begin loading a sprite file, returning its handle. Repeat requests
    /// for the same path reuse the existing slot, whatever its state.
    pub fn request(&self, path: &Path) -> SpriteId {
        if let Ok(inner) = self.inner.read()
            && let Some(&id) = inner.by_path.get(path)
        {
            return id;
        }

        let id = self.allocate_id();
        if let Ok(mut inner) = self.inner.write() {
            // A racing request may have inserted the path meanwhile.
            if let Some(&existing) = inner.by_path.get(path) {
                return existing;
            }
            inner.slots.insert(id, LoadStatus::Pending);
            inner.by_path.insert(path.to_path_buf(), id);
        }

        let shared = self.inner.clone();
        let path = path.to_path_buf();
        thread::spawn(move || {
            let status = match fs::read_to_string(&path) {
                Ok(text) => match Sprite::parse(&text) {
                    Some(sprite) => LoadStatus::Ready(Arc::new(sprite)),
                    None => {
                        log::warn!("sprite file {} has no visible content", path.display());
                        LoadStatus::Failed
                    }
                },
                Err(err) => {
                    log::warn!("failed to load sprite {}: {err}", path.display());
                    LoadStatus::Failed
                }
            };
            if let Ok(mut inner) = shared.write() {
                inner.slots.insert(id, status);
            }
        });
        id
    }

    /// Non-blocking poll of a slot. Lock contention reads as Pending so
    /// the frame loop never stalls on a loader thread.
    pub fn status(&self, id: SpriteId) -> LoadStatus {
        match self.inner.try_read() {
            Ok(inner) => inner.slots.get(&id).cloned().unwrap_or(LoadStatus::Failed),
            Err(_) => LoadStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn wait_settled(store: &SpriteStore, id: SpriteId) -> LoadStatus {
        let deadline = Instant::now() + Duration::from_secs(2);
        loop {
            match store.status(id) {
                LoadStatus::Pending => {
                    assert!(Instant::now() < deadline, "load did not settle");
                    thread::sleep(Duration::from_millis(5));
                }
                settled => return settled,
            }
        }
    }

    #[test]
    fn test_register_is_immediately_ready() {
        let store = SpriteStore::new();
        let id = store.register(Sprite::parse("##").unwrap());
        assert!(store.status(id).is_ready());
    }

    #[test]
    fn test_missing_file_fails() {
        let store = SpriteStore::new();
        let id = store.request(Path::new("/nonexistent/byeol-sprite.txt"));
        assert!(matches!(wait_settled(&store, id), LoadStatus::Failed));
    }

    #[test]
    fn test_requests_are_cached_by_path() {
        let store = SpriteStore::new();
        let a = store.request(Path::new("/nonexistent/a.txt"));
        let b = store.request(Path::new("/nonexistent/a.txt"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_handle_reads_failed() {
        let store = SpriteStore::new();
        let id = store.register(Sprite::parse("#").unwrap());
        drop(store);
        let other = SpriteStore::new();
        assert!(matches!(other.status(id), LoadStatus::Failed));
    }

    #[test]
    fn test_load_real_file() {
        let dir = std::env::temp_dir();
        let path = dir.join("byeol-store-test-sprite.txt");
        fs::write(&path, " ██ \n████\n ██ \n").unwrap();

        let store = SpriteStore::new();
        let id = store.request(&path);
        match wait_settled(&store, id) {
            LoadStatus::Ready(sprite) => {
                assert_eq!(sprite.width(), 4);
                assert_eq!(sprite.height(), 3);
            }
            other => panic!("expected ready, got {other:?}"),
        }
        let _ = fs::remove_file(&path);
    }
}
