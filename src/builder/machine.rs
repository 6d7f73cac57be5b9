//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{Event, EventMap, State, TransitionTable};
use crate::machine::StateMachine;

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```
/// use flowstate::builder::StateMachineBuilder;
/// use flowstate::{event_enum, state_enum, transitions};
///
/// state_enum! {
///     enum Connection { Disconnected, Connecting, Connected }
///     final: [Connected]
/// }
///
/// event_enum! {
///     enum Signal { Dial, Ack }
/// }
///
/// let mut machine = StateMachineBuilder::new()
///     .initial(Connection::Disconnected)
///     .state(Connection::Disconnected, transitions! { Signal::Dial => Connection::Connecting })
///     .state(Connection::Connecting, transitions! { Signal::Ack => Connection::Connected })
///     .build()
///     .unwrap();
///
/// machine.transition(&Signal::Dial);
/// machine.transition(&Signal::Ack);
/// assert!(machine.is_final());
/// ```
pub struct StateMachineBuilder<S: State, E: Event> {
    initial: Option<S>,
    table: TransitionTable<S, E>,
}

impl<S: State, E: Event> StateMachineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            table: TransitionTable::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Register the row for `state`, replacing any earlier row for it.
    pub fn state(mut self, state: S, transitions: EventMap<S, E>) -> Self {
        self.table.set(state, transitions);
        self
    }

    /// Start from a prepared table. Rows registered before this call are
    /// discarded; later `.state()` calls replace rows of the new table.
    pub fn table(mut self, table: TransitionTable<S, E>) -> Self {
        self.table = table;
        self
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing.
    pub fn build(self) -> Result<StateMachine<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        Ok(StateMachine::with_table(initial, self.table))
    }
}

impl<S: State, E: Event> Default for StateMachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
