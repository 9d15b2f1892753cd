//! Work deferred until the host has repainted the field.

use std::collections::VecDeque;

/// Deferred work a field can schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTask {
    /// Move the caret to match the tracker's selection count.
    PlaceCaret,
    /// Run validation rules.
    Validate,
    /// Take focus back (after clearing).
    Focus,
    /// Recompute the auto-grow height of a multi-line field.
    MeasureHeight,
}

/// Queue of tasks run by `after_render`.
///
/// Scheduling a task that is already pending is a no-op: tasks carry no data
/// and read the field's state when they run, so the pending one already
/// covers the newer request.
#[derive(Debug, Default)]
pub struct NextTick {
    pending: VecDeque<FieldTask>,
}

impl NextTick {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, task: FieldTask) {
        if !self.pending.contains(&task) {
            self.pending.push_back(task);
        }
    }

    pub fn is_pending(&self, task: FieldTask) -> bool {
        self.pending.contains(&task)
    }

    /// Remove a pending task so the caller can run it now.
    /// Returns true if it was pending.
    pub fn take(&mut self, task: FieldTask) -> bool {
        match self.pending.iter().position(|t| *t == task) {
            Some(idx) => {
                self.pending.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Take everything scheduled so far, in order.
    pub fn drain(&mut self) -> Vec<FieldTask> {
        self.pending.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
