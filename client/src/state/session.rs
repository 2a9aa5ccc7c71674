//! Recognition session: variable bindings, typeset entries, and the anchor
//! where new entries appear.
//!
//! EPOCHS
//! ======
//! Every reset bumps the session [`Epoch`]. Work started before a reset (an
//! in-flight request, a pending publication timer) captures the epoch it was
//! started in and is discarded if the session has moved on by the time it
//! completes.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use canvas::geom::Point;
use uuid::Uuid;

pub use crate::net::types::Bindings;
use crate::net::types::ResultEntry;
use crate::util::typeset::entry_markup;

/// Vertical distance between consecutive entries placed from one anchor.
pub const ENTRY_STEP_PX: f64 = 50.0;

/// Where entries appear before any ink has been measured.
pub const DEFAULT_ANCHOR: Point = Point { x: 10.0, y: 200.0 };

/// Session-unique identity of a typeset entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(Uuid);

impl EntryId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A recognized expression and its answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecognitionResult {
    pub expression: String,
    pub answer: String,
}

impl From<&ResultEntry> for RecognitionResult {
    fn from(entry: &ResultEntry) -> Self {
        Self { expression: entry.expr.clone(), answer: entry.result.clone() }
    }
}

/// One rendered expression-answer pair.
#[derive(Clone, Debug, PartialEq)]
pub struct TypesetEntry {
    pub id: EntryId,
    /// Inline-math markup, already sanitized.
    pub latex: String,
    /// Top-left corner in canvas-local CSS pixels.
    pub position: Point,
}

/// Reset generation counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Epoch(u64);

/// State of one drawing session, shared through context as a `RwSignal`.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub bindings: Bindings,
    pub entries: Vec<TypesetEntry>,
    pub result: Option<RecognitionResult>,
    pub anchor: Point,
    epoch: Epoch,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            bindings: Bindings::new(),
            entries: Vec::new(),
            result: None,
            anchor: DEFAULT_ANCHOR,
            epoch: Epoch::default(),
        }
    }
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Fold assignment entries into the bindings in response order. A later
    /// assignment to the same name overwrites an earlier one; non-assignment
    /// entries are skipped.
    pub fn apply_assignments(&mut self, entries: &[ResultEntry]) {
        for entry in entries.iter().filter(|e| e.assign) {
            self.bindings.insert(entry.expr.clone(), entry.result.clone());
        }
    }

    /// Apply a calculate response that was started in `epoch`: merge its
    /// assignments and move the anchor to `anchor`.
    ///
    /// Returns `false` and changes nothing when the session has been reset
    /// since the request was sent.
    pub fn accept_response(&mut self, epoch: Epoch, entries: &[ResultEntry], anchor: Point) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.apply_assignments(entries);
        self.anchor = anchor;
        true
    }

    /// Make `result` the active recognition result and append its typeset
    /// entry below the previous ones.
    ///
    /// Returns `None` when `epoch` is stale.
    pub fn publish(&mut self, epoch: Epoch, result: RecognitionResult) -> Option<EntryId> {
        if epoch != self.epoch {
            return None;
        }
        let id = EntryId::new();
        let offset = ENTRY_STEP_PX * f64::from(u32::try_from(self.entries.len()).unwrap_or(u32::MAX));
        self.entries.push(TypesetEntry {
            id,
            latex: entry_markup(&result.expression, &result.answer),
            position: Point::new(self.anchor.x, self.anchor.y + offset),
        });
        self.result = Some(result);
        Some(id)
    }

    #[must_use]
    pub fn entry(&self, id: EntryId) -> Option<&TypesetEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Move one entry. Other entries and the anchor are untouched.
    pub fn move_entry(&mut self, id: EntryId, position: Point) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.position = position;
                true
            }
            None => false,
        }
    }

    /// Clear bindings, entries and the active result, restore the default
    /// anchor, and start a new epoch.
    pub fn reset(&mut self) {
        self.bindings.clear();
        self.entries.clear();
        self.result = None;
        self.anchor = DEFAULT_ANCHOR;
        self.epoch = Epoch(self.epoch.0 + 1);
    }
}
