//! Client-side state containers
//!
//! One explicit session object owns every store, created at app start and
//! passed to screens by `Arc`. Each store sits behind its own mutex; critical
//! sections are short and never held across an await.

mod booked;
mod data;
mod halls;
mod session;

use std::path::PathBuf;
use std::sync::Mutex;

use directories::ProjectDirs;

use crate::error::{Error, Result};
use crate::storage::{Favorites, LocalStore};

pub use booked::BookedIds;
pub use data::SessionData;
pub use halls::HallStore;
pub use session::AuthSession;

/// The application session: every client-side store plus the local storage
/// handle. Created once at app start, torn down (reset) at logout.
pub struct AppSession {
    pub halls: Mutex<HallStore>,
    pub auth: Mutex<AuthSession>,
    pub data: Mutex<SessionData>,
    pub booked: Mutex<BookedIds>,
    pub favorites: Mutex<Favorites>,
    // The sqlite connection is !Sync, so the handle needs the same guard as
    // the in-memory stores for the session to cross threads.
    pub store: Mutex<LocalStore>,
}

impl AppSession {
    /// Open the local store under the platform data directory and load the
    /// persisted favorites.
    pub fn new() -> Result<Self> {
        let db_path = Self::data_path()?.join("hallbook.db");

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let store = LocalStore::open(&db_path)?;
        Ok(Self::with_store(store))
    }

    /// In-memory session for tests.
    pub fn new_in_memory() -> Result<Self> {
        Ok(Self::with_store(LocalStore::open_in_memory()?))
    }

    fn with_store(store: LocalStore) -> Self {
        let favorites = store.favorites().load();
        Self {
            halls: Mutex::new(HallStore::new()),
            auth: Mutex::new(AuthSession::new()),
            data: Mutex::new(SessionData::new()),
            booked: Mutex::new(BookedIds::new()),
            favorites: Mutex::new(favorites),
            store: Mutex::new(store),
        }
    }

    fn data_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("app", "hallbook", "hallbook").ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine data directory",
            ))
        })?;

        Ok(dirs.data_dir().to_path_buf())
    }

    /// Tear down session-scoped state at logout.
    ///
    /// Favorites survive: the cache is device-scoped, not session-scoped.
    pub fn reset(&self) {
        self.auth.lock().unwrap().clear();
        self.data.lock().unwrap().clear();
        self.booked.lock().unwrap().clear();
        self.halls.lock().unwrap().clear();
    }
}
