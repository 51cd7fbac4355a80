//! The note collection and its synchronization with storage.

mod clock;

pub use clock::{Clock, FixedClock, SystemClock};

use crate::domain::note::{NEW_NOTE_TEXT, PALETTE, WELCOME_TAGS, WELCOME_TEXT};
use crate::domain::{Note, NoteId, NoteRecord, Position, Size, Tags};
use crate::storage::{NOTES_KEY, Storage, StorageError};
use log::{debug, error, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use serde_json::Value;
use thiserror::Error;

/// Dimensions of the area notes are placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    /// Used when the caller cannot report its canvas.
    pub const FALLBACK: Canvas = Canvas {
        width: 800,
        height: 600,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the position that centers a default-sized note.
    fn center(self) -> Position {
        Position::new(
            (f64::from(self.width) / 2.0 - 100.0).floor(),
            (f64::from(self.height) / 2.0 - 100.0).floor(),
        )
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// Why saved notes could not be restored.
#[derive(Debug, Error)]
pub enum RestoreError {
    #[error(transparent)]
    Unavailable(#[from] StorageError),

    #[error("no saved notes")]
    Missing,

    #[error("saved notes are not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("saved notes are not a list")]
    NotASequence,

    #[error("saved note list is empty")]
    Empty,
}

/// How [`NoteStore::initialize`] obtained its collection.
#[derive(Debug)]
pub enum Restore {
    /// Saved records were loaded as-is.
    Restored { count: usize },
    /// Nothing usable was saved, so the welcome note was created.
    Seeded { cause: RestoreError },
}

/// Why the collection could not be persisted.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("failed to encode notes: {0}")]
    Encode(#[from] serde_json::Error),
}

/// The ordered collection of notes.
///
/// Records are held exactly as restored from storage. Every successful
/// mutation writes the whole collection back under [`NOTES_KEY`]; a failed
/// write is logged, kept in [`last_save_error`](Self::last_save_error), and
/// otherwise ignored so the session continues in memory. The next mutation
/// tries to save again.
pub struct NoteStore<S: Storage> {
    storage: S,
    records: Vec<NoteRecord>,
    clock: Box<dyn Clock>,
    rng: Box<dyn RngCore>,
    last_save_error: Option<SaveError>,
}

impl<S: Storage> NoteStore<S> {
    /// Creates an empty store over `storage`, using the system clock and an
    /// entropy-seeded random source.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            records: Vec::new(),
            clock: Box::new(SystemClock),
            rng: Box::new(StdRng::from_entropy()),
            last_save_error: None,
        }
    }

    /// Replaces the time source.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replaces the random source used for ids, placement, and colors.
    pub fn with_rng(mut self, rng: impl RngCore + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Loads the saved collection, or seeds the welcome note.
    ///
    /// A non-empty JSON array is taken verbatim without inspecting its
    /// elements, and nothing is written back. Anything else (no value,
    /// unreadable storage, invalid JSON, a non-array, an empty array)
    /// replaces the collection with a single welcome note centered on
    /// `canvas` (or [`Canvas::FALLBACK`]) and persists it.
    pub fn initialize(&mut self, canvas: Option<Canvas>) -> Restore {
        match self.restore() {
            Ok(records) => {
                let count = records.len();
                debug!("restored {count} notes");
                self.records = records;
                Restore::Restored { count }
            }
            Err(cause) => {
                match &cause {
                    RestoreError::Missing => info!("no saved notes, creating welcome note"),
                    other => warn!("{other}; starting over with a welcome note"),
                }
                self.records.clear();
                self.seed(canvas.unwrap_or_default());
                Restore::Seeded { cause }
            }
        }
    }

    fn restore(&self) -> Result<Vec<NoteRecord>, RestoreError> {
        let raw = self.storage.load(NOTES_KEY)?.ok_or(RestoreError::Missing)?;
        let value: Value = serde_json::from_str(&raw).map_err(RestoreError::Malformed)?;
        let Value::Array(items) = value else {
            return Err(RestoreError::NotASequence);
        };
        if items.is_empty() {
            return Err(RestoreError::Empty);
        }
        Ok(items.into_iter().map(NoteRecord::from_value).collect())
    }

    fn seed(&mut self, canvas: Canvas) {
        let note = Note::builder(self.fresh_id())
            .text(WELCOME_TEXT)
            .position(canvas.center())
            .color(PALETTE[0])
            .size(Size::DEFAULT)
            .tags(WELCOME_TAGS.into_iter().collect())
            .build();
        self.records.push(NoteRecord::from(&note));
        self.persist();
    }

    /// Creates a note at a random spot on `canvas` with a random palette
    /// color and appends it.
    pub fn add_note(&mut self, canvas: Canvas) -> Note {
        let x = self.random_below(canvas.width);
        let y = self.random_below(canvas.height);
        let color = PALETTE[self.rng.gen_range(0..PALETTE.len())];

        let note = Note::builder(self.fresh_id())
            .text(NEW_NOTE_TEXT)
            .position(Position::new(f64::from(x), f64::from(y)))
            .color(color)
            .size(Size::DEFAULT)
            .tags(Tags::new())
            .build();

        debug!("adding note {}", note.id());
        self.records.push(NoteRecord::from(&note));
        self.persist();
        note
    }

    /// Replaces every mutable field of the note `id`.
    ///
    /// This is a full replace: callers pass unchanged fields through as they
    /// are. Every record carrying the id is updated, matching
    /// [`delete_note`](Self::delete_note). Returns `false`, without saving,
    /// if no note has that id.
    pub fn update_note(
        &mut self,
        id: &str,
        text: &str,
        position: Position,
        color: &str,
        size: Size,
        tags: &Tags,
    ) -> bool {
        let mut found = false;
        for record in self.records.iter_mut().filter(|r| r.has_id(id)) {
            record.replace_fields(text, position, color, size, tags);
            found = true;
        }
        if !found {
            debug!("update ignored, no note {id}");
            return false;
        }
        self.persist();
        true
    }

    /// Removes the note `id`. Returns `false`, without saving, if no note
    /// has that id.
    pub fn delete_note(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| !r.has_id(id));
        if self.records.len() == before {
            debug!("delete ignored, no note {id}");
            return false;
        }
        self.persist();
        true
    }

    fn persist(&mut self) {
        let result = serde_json::to_string(&self.records)
            .map_err(SaveError::from)
            .and_then(|json| {
                self.storage
                    .save(NOTES_KEY, &json)
                    .map_err(SaveError::from)
            });

        match result {
            Ok(()) => {
                debug!("saved {} notes", self.records.len());
                self.last_save_error = None;
            }
            Err(e) => {
                error!("failed to save notes, keeping changes in memory: {e}");
                self.last_save_error = Some(e);
            }
        }
    }

    /// Draws an id that no record in the collection already uses.
    fn fresh_id(&mut self) -> NoteId {
        loop {
            let id = NoteId::generate(self.clock.now(), &mut *self.rng);
            if !self.records.iter().any(|r| r.has_id(id.as_str())) {
                return id;
            }
        }
    }

    fn random_below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }

    /// Returns the records as stored.
    pub fn records(&self) -> &[NoteRecord] {
        &self.records
    }

    /// Returns every well-formed note, normalized, in collection order.
    pub fn notes(&self) -> Vec<Note> {
        self.records.iter().filter_map(NoteRecord::normalize).collect()
    }

    /// Returns the normalized note `id`, if present and well-formed.
    pub fn get(&self, id: &str) -> Option<Note> {
        self.records
            .iter()
            .find(|r| r.has_id(id))
            .and_then(NoteRecord::normalize)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the error from the most recent save, if it failed.
    pub fn last_save_error(&self) -> Option<&SaveError> {
        self.last_save_error.as_ref()
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}
