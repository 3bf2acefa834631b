//! Bounded undo/redo history of alive-set snapshots.

use std::collections::VecDeque;

use lifepat_model::{AliveSet, DEFAULT_HISTORY_CAPACITY};
use tracing::trace;

/// Linear undo/redo over full snapshots.
///
/// The undo stack keeps at most `capacity` entries and evicts the oldest
/// first. Taking a snapshot clears the redo stack.
#[derive(Debug, Clone)]
pub struct History {
    undo: VecDeque<AliveSet>,
    redo: Vec<AliveSet>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl History {
    /// Creates an empty history. A capacity of zero disables undo.
    pub fn new(capacity: usize) -> Self {
        Self {
            undo: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)),
            redo: Vec::new(),
            capacity,
        }
    }

    /// Records `state` as the pre-edit snapshot for the next mutation.
    pub fn snapshot(&mut self, state: &AliveSet) {
        self.undo.push_back(state.clone());
        while self.undo.len() > self.capacity {
            self.undo.pop_front();
        }
        self.redo.clear();
        trace!(undo = self.undo.len(), "history snapshot");
    }

    /// Steps back. Returns the state to restore, or `None` if there is
    /// nothing to undo (in which case the redo stack is untouched).
    pub fn undo(&mut self, current: &AliveSet) -> Option<AliveSet> {
        let previous = self.undo.pop_back()?;
        self.redo.push(current.clone());
        Some(previous)
    }

    /// Steps forward after an undo.
    pub fn redo(&mut self, current: &AliveSet) -> Option<AliveSet> {
        let next = self.redo.pop()?;
        self.undo.push_back(current.clone());
        while self.undo.len() > self.capacity {
            self.undo.pop_front();
        }
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every snapshot.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
