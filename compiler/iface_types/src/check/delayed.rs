//! Deferred work queue.

use std::collections::VecDeque;
use std::fmt;

use super::Checker;

type Task = Box<dyn FnOnce(&mut Checker)>;

/// FIFO queue of checker tasks. Tasks may push more tasks; everything
/// runs before checking finishes.
#[derive(Default)]
pub(crate) struct Delayed {
    tasks: VecDeque<Task>,
}

impl Delayed {
    pub(crate) fn push(&mut self, task: impl FnOnce(&mut Checker) + 'static) {
        self.tasks.push_back(Box::new(task));
    }

    pub(crate) fn pop(&mut self) -> Option<Task> {
        self.tasks.pop_front()
    }

    pub(crate) fn len(&self) -> usize {
        self.tasks.len()
    }
}

impl fmt::Debug for Delayed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Delayed")
            .field("pending", &self.tasks.len())
            .finish()
    }
}
