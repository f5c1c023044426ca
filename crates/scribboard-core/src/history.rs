//! Linear undo/redo history over whole-value snapshots.

/// A linear sequence of snapshots with a cursor.
///
/// The visible value is always the snapshot at the cursor. Discrete actions
/// [`push`](History::push) a new snapshot and drop any redo tail; continuous
/// gestures [`amend`](History::amend) the snapshot at the cursor in place so
/// the whole gesture undoes as one step.
#[derive(Debug, Clone)]
pub struct History<T> {
    snapshots: Vec<T>,
    cursor: usize,
    /// Maximum number of undo steps kept, if bounded.
    limit: Option<usize>,
}

impl<T: Default> Default for History<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> History<T> {
    /// History holding only `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
            limit: None,
        }
    }

    /// Keep at most `limit` undo steps, evicting the oldest first.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self.evict();
        self
    }

    /// The snapshot at the cursor.
    pub fn current(&self) -> &T {
        &self.snapshots[self.cursor]
    }

    /// Record a discrete action.
    pub fn push(&mut self, next: T) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(next);
        self.cursor += 1;
        self.evict();
    }

    /// Overwrite the snapshot at the cursor.
    pub fn amend(&mut self, next: T) {
        self.snapshots[self.cursor] = next;
    }

    /// `push` or `amend`, selected by flag.
    pub fn record(&mut self, next: T, amend: bool) {
        if amend {
            self.amend(next);
        } else {
            self.push(next);
        }
    }

    /// Step back. Returns false if already at the oldest snapshot.
    pub fn undo(&mut self) -> bool {
        if self.can_undo() {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward. Returns false if already at the newest snapshot.
    pub fn redo(&mut self) -> bool {
        if self.can_redo() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Number of snapshots, including the initial one.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn evict(&mut self) {
        let Some(limit) = self.limit else {
            return;
        };
        let excess = self.snapshots.len().saturating_sub(limit + 1);
        if excess > 0 {
            log::debug!("Evicting {excess} oldest history snapshot(s)");
            self.snapshots.drain(..excess);
            self.cursor = self.cursor.saturating_sub(excess);
        }
    }
}
