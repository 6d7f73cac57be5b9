//! Synchronous transition listeners.

use crate::core::{Event, State};

/// Callback invoked after a committed transition with `(from, event, to)`.
pub type TransitionListener<S, E> = Box<dyn FnMut(&S, &E, &S) + Send>;

/// Ordered set of listeners owned by a machine.
pub(crate) struct Listeners<S: State, E: Event> {
    callbacks: Vec<TransitionListener<S, E>>,
}

impl<S: State, E: Event> Listeners<S, E> {
    pub(crate) fn new() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, listener: TransitionListener<S, E>) {
        self.callbacks.push(listener);
    }

    pub(crate) fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Run every listener in registration order.
    pub(crate) fn notify(&mut self, from: &S, event: &E, to: &S) {
        for callback in &mut self.callbacks {
            callback(from, event, to);
        }
    }
}
