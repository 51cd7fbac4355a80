//! Note struct representing a sticky note on the board.

use crate::domain::{NoteId, Tags};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Color given to notes whose stored color is missing or unusable.
pub const DEFAULT_COLOR: &str = "#f7e98d";

/// Pastel palette new notes draw their color from.
pub const PALETTE: [&str; 6] = [
    "#f7e98d", // yellow
    "#fdceb9", // peach
    "#b4f0a7", // green
    "#a7def0", // blue
    "#e2a7f0", // purple
    "#f0a7a7", // pink
];

/// Text shown for a note whose stored text is missing or unusable.
pub const PLACEHOLDER_TEXT: &str = "New Note";

/// Text given to a freshly added note.
pub const NEW_NOTE_TEXT: &str = "<h3>New Note</h3><p>Start typing here...</p>";

/// Text of the note seeded on an empty board.
pub const WELCOME_TEXT: &str = "<h3>Welcome to Keep Writing!</h3>\
<p>This is a <strong>rich text</strong> note taking app.</p>\
<ul><li>Click to edit this note</li><li>Drag the header to move it</li>\
<li>Use the color picker to change its color</li>\
<li>Drag the bottom-right corner to resize</li>\
<li>Click the tag icon to add tags</li></ul>";

/// Tags carried by the seeded welcome note.
pub const WELCOME_TAGS: [&str; 2] = ["welcome", "tutorial"];

/// Top-left corner of a note on the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of a note.
///
/// The model stores any size. Boards keep notes between [`Size::MIN`] and
/// [`Size::MAX`] on each axis; use [`Size::clamped`] to apply that bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const MIN: f64 = 150.0;
    pub const MAX: f64 = 500.0;
    pub const DEFAULT: Size = Size {
        width: 250.0,
        height: 250.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns this size with both dimensions bounded to the board limits.
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.clamp(Self::MIN, Self::MAX),
            height: self.height.clamp(Self::MIN, Self::MAX),
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A sticky note.
///
/// Every field is always present on a `Note`; records read back from
/// storage are normalized into this shape by
/// [`NoteRecord::normalize`](crate::domain::NoteRecord::normalize).
///
/// # Examples
///
/// ```
/// use keep_writing::domain::{Note, Position};
///
/// let note = Note::builder("n1".parse().unwrap())
///     .text("<p>Buy milk</p>")
///     .position(Position::new(10.0, 20.0))
///     .build();
/// assert_eq!(note.text(), "<p>Buy milk</p>");
/// assert_eq!(note.color(), "#f7e98d");
/// ```
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    id: NoteId,
    text: String,
    position: Position,
    color: String,
    size: Size,
    tags: Tags,
}

impl Note {
    /// Creates a builder with every optional field at its default.
    pub fn builder(id: NoteId) -> NoteBuilder {
        NoteBuilder::new(id)
    }

    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the note's rich-text HTML.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.id, self.text)
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("id", &self.id)
            .field("text", &self.text)
            .field("position", &self.position)
            .field("color", &self.color)
            .field("size", &self.size)
            .field("tags", &self.tags)
            .finish()
    }
}

/// Builder for constructing a Note.
pub struct NoteBuilder {
    id: NoteId,
    text: String,
    position: Position,
    color: String,
    size: Size,
    tags: Tags,
}

impl NoteBuilder {
    fn new(id: NoteId) -> Self {
        Self {
            id,
            text: PLACEHOLDER_TEXT.to_string(),
            position: Position::default(),
            color: DEFAULT_COLOR.to_string(),
            size: Size::DEFAULT,
            tags: Tags::new(),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn tags(mut self, tags: Tags) -> Self {
        self.tags = tags;
        self
    }

    pub fn build(self) -> Note {
        Note {
            id: self.id,
            text: self.text,
            position: self.position,
            color: self.color,
            size: self.size,
            tags: self.tags,
        }
    }
}
