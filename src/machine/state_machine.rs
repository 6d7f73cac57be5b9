//! State machine with a single current-state cursor.

use crate::audit::{self, AuditResult};
use crate::core::{Event, EventMap, State, TransitionTable};
use crate::machine::listener::{Listeners, TransitionListener};
use log::{debug, trace};
use std::fmt;

/// Deterministic state machine driven by a [`TransitionTable`].
///
/// The current state is fixed at construction and afterwards only moves
/// through [`transition`](Self::transition). There is no setter.
pub struct StateMachine<S: State, E: Event> {
    current: S,
    table: TransitionTable<S, E>,
    listeners: Listeners<S, E>,
}

impl<S: State, E: Event> StateMachine<S, E> {
    /// Create a machine in `initial` with an empty table.
    pub fn new(initial: S) -> Self {
        Self::with_table(initial, TransitionTable::new())
    }

    /// Create a machine in `initial` driven by a prepared table.
    pub fn with_table(initial: S, table: TransitionTable<S, E>) -> Self {
        Self {
            current: initial,
            table,
            listeners: Listeners::new(),
        }
    }

    /// Replace every transition registered for `state`.
    ///
    /// Returns the row that was registered before, if any. Nothing is
    /// merged: events missing from `transitions` are no longer handled.
    pub fn set_transitions(
        &mut self,
        state: S,
        transitions: EventMap<S, E>,
    ) -> Option<EventMap<S, E>> {
        debug!(
            "registering {} transition(s) for state '{}'",
            transitions.len(),
            state.name()
        );
        self.table.set(state, transitions)
    }

    /// Get the transitions registered for `state` (pure).
    pub fn transitions(&self, state: &S) -> Option<&EventMap<S, E>> {
        self.table.get(state)
    }

    /// Resolve `event` against the current state without moving (pure).
    pub fn peek(&self, event: &E) -> Option<&S> {
        self.table.resolve(&self.current, event)
    }

    /// Whether `event` would move the machine from where it is now (pure).
    pub fn can_handle(&self, event: &E) -> bool {
        self.peek(event).is_some()
    }

    /// Move along `event` from the current state.
    ///
    /// On a hit the cursor is updated, listeners are notified and the new
    /// state is returned. On a miss nothing changes and `None` is returned.
    pub fn transition(&mut self, event: &E) -> Option<S> {
        let Some(next) = self.peek(event).cloned() else {
            trace!(
                "state '{}' ignores event '{}'",
                self.current.name(),
                event.name()
            );
            return None;
        };

        let from = std::mem::replace(&mut self.current, next.clone());
        debug!(
            "transition '{}' --{}--> '{}'",
            from.name(),
            event.name(),
            next.name()
        );
        self.listeners.notify(&from, event, &next);

        Some(next)
    }

    /// Register a callback run after every committed transition.
    ///
    /// Callbacks run synchronously in registration order, after the cursor
    /// has moved. Misses and [`peek`](Self::peek) never invoke them.
    pub fn on_transition<F>(&mut self, listener: F)
    where
        F: FnMut(&S, &E, &S) + Send + 'static,
    {
        let listener: TransitionListener<S, E> = Box::new(listener);
        self.listeners.push(listener);
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Check if machine is in a final state (pure)
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Audit the table as driven from the current state.
    pub fn audit(&self) -> AuditResult {
        audit::audit(&self.table, &self.current)
    }

    pub fn table(&self) -> &TransitionTable<S, E> {
        &self.table
    }

    /// Consume the machine, keeping only its table.
    pub fn into_table(self) -> TransitionTable<S, E> {
        self.table
    }
}

impl<S: State, E: Event> fmt::Debug for StateMachine<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current)
            .field("table", &self.table)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
