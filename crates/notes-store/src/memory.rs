//! In-memory note repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::debug;

use notes_core::{defaults, Error, NewNote, Note, NotePatch, NoteRepository, Result};

/// Source of timestamps for created/updated stamps.
pub type Clock = fn() -> DateTime<Utc>;

/// Notes plus the id counter, guarded together so id assignment stays
/// sequential.
#[derive(Debug, Default)]
struct NoteTable {
    items: Vec<Note>,
    last_id: u64,
}

impl NoteTable {
    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|n| n.id == id)
    }
}

/// In-memory implementation of NoteRepository.
///
/// Every operation, reads included, takes the single table lock.
pub struct MemoryNoteRepository {
    table: Mutex<NoteTable>,
    clock: Clock,
}

impl MemoryNoteRepository {
    /// Create an empty repository. The first note gets id `"1"`.
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    /// Create a repository pre-populated with the fixture notes `"1"` and `"2"`.
    pub fn seeded() -> Self {
        Self::seeded_with_clock(Utc::now)
    }

    /// Create an empty repository using a custom clock.
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            table: Mutex::new(NoteTable::default()),
            clock,
        }
    }

    /// Create a seeded repository using a custom clock.
    pub fn seeded_with_clock(clock: Clock) -> Self {
        let now = clock();
        let items: Vec<Note> = defaults::SEED_NOTES
            .iter()
            .enumerate()
            .map(|(i, (title, content))| Note {
                id: (i + 1).to_string(),
                title: title.to_string(),
                content: content.to_string(),
                created_at: now,
                updated_at: now,
            })
            .collect();
        let last_id = items.len() as u64;

        Self {
            table: Mutex::new(NoteTable { items, last_id }),
            clock,
        }
    }
}

impl Default for MemoryNoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NoteRepository for MemoryNoteRepository {
    async fn list(&self) -> Result<Vec<Note>> {
        let table = self.table.lock().await;
        Ok(table.items.clone())
    }

    async fn fetch(&self, id: &str) -> Result<Option<Note>> {
        let table = self.table.lock().await;
        Ok(table.items.iter().find(|n| n.id == id).cloned())
    }

    async fn insert(&self, note: NewNote) -> Result<Note> {
        let mut table = self.table.lock().await;
        table.last_id += 1;

        let now = (self.clock)();
        let note = Note {
            id: table.last_id.to_string(),
            title: note.title,
            content: note.content,
            created_at: now,
            updated_at: now,
        };
        table.items.push(note.clone());

        debug!(note_id = %note.id, "Inserted note");
        Ok(note)
    }

    async fn update(&self, id: &str, patch: NotePatch) -> Result<Note> {
        let mut table = self.table.lock().await;
        let idx = table
            .position(id)
            .ok_or_else(|| Error::NoteNotFound(id.to_string()))?;

        let now = (self.clock)();
        let note = &mut table.items[idx];
        patch.apply_to(note);
        // Clamp so a clock step backwards cannot put updated_at before created_at.
        note.updated_at = now.max(note.created_at);

        debug!(note_id = %id, "Updated note");
        Ok(note.clone())
    }

    async fn remove(&self, id: &str) -> Result<Note> {
        let mut table = self.table.lock().await;
        let idx = table
            .position(id)
            .ok_or_else(|| Error::NoteNotFound(id.to_string()))?;

        let removed = table.items.remove(idx);
        debug!(note_id = %id, "Removed note");
        Ok(removed)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.table.lock().await.items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    fn earlier_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
    }

    fn new_note(title: &str) -> NewNote {
        NewNote {
            title: title.to_string(),
            content: String::new(),
        }
    }

    #[tokio::test]
    async fn test_empty_repository_starts_at_one() {
        let repo = MemoryNoteRepository::new();
        assert_eq!(repo.count().await.unwrap(), 0);

        let note = repo.insert(new_note("first")).await.unwrap();
        assert_eq!(note.id, "1");
    }

    #[tokio::test]
    async fn test_seeded_repository_has_fixture_notes() {
        let repo = MemoryNoteRepository::seeded_with_clock(fixed_clock);
        let notes = repo.list().await.unwrap();

        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].id, "1");
        assert_eq!(notes[0].title, "Welcome to Notes");
        assert_eq!(notes[1].id, "2");
        assert_eq!(notes[1].title, "Getting Started");
        assert!(notes.iter().all(|n| n.created_at == fixed_clock()));
    }

    #[tokio::test]
    async fn test_insert_stamps_equal_timestamps() {
        let repo = MemoryNoteRepository::with_clock(fixed_clock);
        let note = repo.insert(new_note("t")).await.unwrap();

        assert_eq!(note.created_at, fixed_clock());
        assert_eq!(note.created_at, note.updated_at);
    }

    #[tokio::test]
    async fn test_update_never_moves_updated_at_before_created_at() {
        let repo = MemoryNoteRepository::seeded_with_clock(fixed_clock);
        // Swap in a clock that runs behind the seed timestamps.
        let repo = MemoryNoteRepository {
            table: repo.table,
            clock: earlier_clock,
        };

        let note = repo
            .update(
                "1",
                NotePatch {
                    title: None,
                    content: Some("x".into()),
                },
            )
            .await
            .unwrap();
        assert_eq!(note.updated_at, note.created_at);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_remove() {
        let repo = MemoryNoteRepository::seeded();
        let third = repo.insert(new_note("three")).await.unwrap();
        repo.remove(&third.id).await.unwrap();

        let fourth = repo.insert(new_note("four")).await.unwrap();
        assert_eq!(third.id, "3");
        assert_eq!(fourth.id, "4");
    }

    #[tokio::test]
    async fn test_returned_notes_are_snapshots() {
        let repo = MemoryNoteRepository::seeded();
        let mut note = repo.fetch("1").await.unwrap().unwrap();
        note.title = "mutated locally".to_string();

        let stored = repo.fetch("1").await.unwrap().unwrap();
        assert_eq!(stored.title, "Welcome to Notes");
    }
}
