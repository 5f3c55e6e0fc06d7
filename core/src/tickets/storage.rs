//! Ticket persistence.
//!
//! A store only knows how to load and save a whole [`TicketBook`]; the
//! ticket operations are provided on top of that so every backend applies
//! the same rules. `FileStore` keeps a single JSON document on disk,
//! `MemoryStore` keeps the book in process.
//!
//! Layout:
//! ```text
//! $TRIAGE_HOME/          (default ~/.triage/)
//!   tickets.json         # TicketBook
//! ```

use super::book::{BookError, TicketBook};
use super::model::{NewTicket, StaffMember, Ticket, TicketUpdate};
use chrono::Utc;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;

const TICKETS_FILENAME: &str = "tickets.json";
const TICKETS_TMP_FILENAME: &str = "tickets.json.tmp";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Version conflict: expected version {expected}, found {found}. Another process modified the file.")]
    VersionConflict { expected: u64, found: u64 },
    #[error(transparent)]
    Book(#[from] BookError),
    #[error("Store lock poisoned")]
    Poisoned,
}

/// A backend that can load and save the full ticket book.
pub trait TicketStore: Send + Sync {
    fn load(&self) -> Result<TicketBook, StorageError>;

    /// Persist `book`. Callers run [`TicketBook::prepare_for_save`] first.
    fn save(&self, book: &TicketBook) -> Result<(), StorageError>;

    /// All tickets, most recent first.
    fn list_tickets(&self) -> Result<Vec<Ticket>, StorageError> {
        Ok(self.load()?.newest_first().cloned().collect())
    }

    fn get_ticket(&self, id: &str) -> Result<Ticket, StorageError> {
        Ok(self.load()?.get(id)?.clone())
    }

    fn create_ticket(&self, new: NewTicket) -> Result<Ticket, StorageError> {
        modify(self, |book| book.create(new, Utc::now()))
    }

    fn update_ticket(&self, id: &str, update: TicketUpdate) -> Result<Ticket, StorageError> {
        modify(self, |book| book.apply_update(id, update, Utc::now()))
    }

    fn resolve_ticket(&self, id: &str) -> Result<Ticket, StorageError> {
        modify(self, |book| book.resolve(id, Utc::now()))
    }

    fn list_staff(&self) -> Result<Vec<StaffMember>, StorageError> {
        Ok(self.load()?.staff)
    }

    fn add_staff(
        &self,
        name: &str,
        email: &str,
        puesto: &str,
        area: &str,
    ) -> Result<StaffMember, StorageError> {
        modify(self, |book| book.add_staff(name, email, puesto, area))
    }
}

/// Load, mutate and save in one step. Nothing is written when `f` fails.
fn modify<S, T>(
    store: &S,
    f: impl FnOnce(&mut TicketBook) -> Result<T, BookError>,
) -> Result<T, StorageError>
where
    S: TicketStore + ?Sized,
{
    let mut book = store.load()?;
    let value = f(&mut book)?;
    book.prepare_for_save();
    store.save(&book)?;
    Ok(value)
}

/// Tickets stored as one JSON file under a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(TICKETS_FILENAME)
    }
}

impl TicketStore for FileStore {
    fn load(&self) -> Result<TicketBook, StorageError> {
        let path = self.path();
        if !path.exists() {
            // Nothing persisted yet
            return Ok(TicketBook::new());
        }
        let content = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save with optimistic concurrency control.
    ///
    /// The on-disk version must be `book.version - 1`; otherwise another
    /// process saved in between and a `VersionConflict` is returned.
    fn save(&self, book: &TicketBook) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)?;
        let path = self.path();

        if path.exists() && book.version > 0 {
            let existing_content = fs::read_to_string(&path)?;
            if let Ok(existing) = serde_json::from_str::<TicketBook>(&existing_content) {
                let expected = book.version - 1;
                if existing.version != expected {
                    log::warn!(
                        "[storage] Refusing save of {}: disk has version {}, expected {}",
                        path.display(),
                        existing.version,
                        expected
                    );
                    return Err(StorageError::VersionConflict {
                        expected,
                        found: existing.version,
                    });
                }
            }
        }

        // Write-then-rename so a crash never leaves a half-written book
        let tmp_path = self.root.join(TICKETS_TMP_FILENAME);
        let content = serde_json::to_string_pretty(book)?;
        fs::write(&tmp_path, &content)?;
        fs::rename(&tmp_path, &path)?;
        log::debug!("[storage] Saved version {} to {}", book.version, path.display());
        Ok(())
    }
}

/// Tickets kept in memory for the life of the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    book: Mutex<TicketBook>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(book: TicketBook) -> Self {
        Self {
            book: Mutex::new(book),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, TicketBook>, StorageError> {
        self.book.lock().map_err(|_| StorageError::Poisoned)
    }
}

impl TicketStore for MemoryStore {
    fn load(&self) -> Result<TicketBook, StorageError> {
        Ok(self.lock()?.clone())
    }

    fn save(&self, book: &TicketBook) -> Result<(), StorageError> {
        let mut current = self.lock()?;
        if book.version > 0 && current.version != book.version - 1 {
            return Err(StorageError::VersionConflict {
                expected: book.version - 1,
                found: current.version,
            });
        }
        *current = book.clone();
        Ok(())
    }
}
