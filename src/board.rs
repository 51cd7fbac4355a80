//! The board: the intent surface a presentation layer drives.
//!
//! A [`Board`] bundles the note store, the transient filter state, and the
//! theme flag. Presentation code issues intents (`add_note`,
//! `update_note`, `set_selected_tag`, ...) and renders the read state
//! (`filtered_notes`, `unique_tags`, `dark_mode`).

use chrono::NaiveDate;
use log::debug;

use crate::domain::{Note, Position, Size, Tags};
use crate::export::export_json;
use crate::storage::Storage;
use crate::store::{Canvas, NoteStore, Restore, SaveError};
use crate::theme::{load_dark_mode, save_dark_mode};
use crate::view::{ViewState, unique_tags};

pub struct Board<S: Storage> {
    store: NoteStore<S>,
    view: ViewState,
    canvas: Canvas,
    dark_mode: bool,
    restore: Restore,
}

impl<S: Storage> Board<S> {
    /// Opens a board over `storage` with default clock and randomness.
    pub fn open(storage: S, canvas: Option<Canvas>) -> Self {
        Self::with_store(NoteStore::new(storage), canvas)
    }

    /// Opens a board over a preconfigured (not yet initialized) store.
    pub fn with_store(mut store: NoteStore<S>, canvas: Option<Canvas>) -> Self {
        let restore = store.initialize(canvas);
        let dark_mode = load_dark_mode(store.storage());
        debug!("board opened: {restore:?}, dark mode {dark_mode}");
        Self {
            store,
            view: ViewState::new(),
            canvas: canvas.unwrap_or_default(),
            dark_mode,
            restore,
        }
    }

    /// Returns how the collection was obtained when the board opened.
    pub fn restore(&self) -> &Restore {
        &self.restore
    }

    // ===========================================
    // Intents
    // ===========================================

    pub fn add_note(&mut self) -> Note {
        self.store.add_note(self.canvas)
    }

    pub fn delete_note(&mut self, id: &str) -> bool {
        self.store.delete_note(id)
    }

    pub fn update_note(
        &mut self,
        id: &str,
        text: &str,
        position: Position,
        color: &str,
        size: Size,
        tags: &Tags,
    ) -> bool {
        self.store.update_note(id, text, position, color, size, tags)
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.view.set_search_term(term);
    }

    /// Selects `tag` as the filter, or clears it if it is already selected.
    pub fn set_selected_tag(&mut self, tag: &str) {
        self.view.select_tag(tag);
    }

    /// Flips the theme and persists the new value.
    pub fn toggle_theme(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        save_dark_mode(self.store.storage_mut(), self.dark_mode);
        self.dark_mode
    }

    // ===========================================
    // Read state
    // ===========================================

    pub fn filtered_notes(&self) -> Vec<Note> {
        self.view.apply(self.store.records())
    }

    pub fn unique_tags(&self) -> Vec<String> {
        unique_tags(self.store.records())
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn search_term(&self) -> &str {
        self.view.search_term()
    }

    pub fn selected_tag(&self) -> &str {
        self.view.selected_tag()
    }

    /// Returns the normalized note `id`.
    pub fn note(&self, id: &str) -> Option<Note> {
        self.store.get(id)
    }

    pub fn last_save_error(&self) -> Option<&SaveError> {
        self.store.last_save_error()
    }

    /// Returns today's date by the board's clock, for naming exports.
    pub fn today(&self) -> NaiveDate {
        self.store.clock().now().date_naive()
    }

    /// Returns the pretty-printed export of the whole collection.
    pub fn export(&self) -> Result<String, serde_json::Error> {
        export_json(self.store.records())
    }

    pub fn store(&self) -> &NoteStore<S> {
        &self.store
    }
}
