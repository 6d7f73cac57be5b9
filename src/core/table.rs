//! Two-level transition table.
//!
//! The table maps each state to its own event map, and each event map maps
//! an event to exactly one destination state.

use super::state::{Event, State};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One state's row of the table: event to destination.
pub type EventMap<S, E> = HashMap<E, S>;

/// Mapping from state to the events it reacts to and where they lead.
///
/// Rows are replaced wholesale by [`set`](Self::set); there is no way to
/// merge into an existing row. A state with no row, or with an empty row,
/// has no outgoing transitions.
///
/// # Example
///
/// ```rust
/// use flowstate::core::TransitionTable;
/// use flowstate::{event_enum, state_enum, transitions};
///
/// state_enum! {
///     enum Door { Closed, Open }
/// }
///
/// event_enum! {
///     enum Push { Open, Close }
/// }
///
/// let mut table = TransitionTable::new();
/// table.set(Door::Closed, transitions! { Push::Open => Door::Open });
/// table.set(Door::Open, transitions! { Push::Close => Door::Closed });
///
/// assert_eq!(table.resolve(&Door::Closed, &Push::Open), Some(&Door::Open));
/// assert_eq!(table.resolve(&Door::Closed, &Push::Close), None);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    transparent,
    bound(
        serialize = "S: Serialize, E: Serialize",
        deserialize = "S: Deserialize<'de>, E: Deserialize<'de>"
    )
)]
pub struct TransitionTable<S: State, E: Event> {
    rows: HashMap<S, EventMap<S, E>>,
}

impl<S: State, E: Event> Default for TransitionTable<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> TransitionTable<S, E> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }

    /// Replace the full row for `state`, returning the row it displaced.
    pub fn set(&mut self, state: S, transitions: EventMap<S, E>) -> Option<EventMap<S, E>> {
        self.rows.insert(state, transitions)
    }

    /// Get the row registered for `state`, if one was ever set.
    pub fn get(&self, state: &S) -> Option<&EventMap<S, E>> {
        self.rows.get(state)
    }

    /// Look up where `event` leads from `from`.
    pub fn resolve(&self, from: &S, event: &E) -> Option<&S> {
        self.rows.get(from).and_then(|row| row.get(event))
    }

    /// Whether a row has been registered for `state`.
    pub fn contains_state(&self, state: &S) -> bool {
        self.rows.contains_key(state)
    }

    /// States that have a registered row, in no particular order.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.rows.keys()
    }

    /// All rows, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &EventMap<S, E>)> {
        self.rows.iter()
    }

    /// Number of registered rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<S: State, E: Event> FromIterator<(S, EventMap<S, E>)> for TransitionTable<S, E> {
    fn from_iter<I: IntoIterator<Item = (S, EventMap<S, E>)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (state, row) in iter {
            table.set(state, row);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Initial => "Initial",
                Self::Processing => "Processing",
                Self::Complete => "Complete",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Complete)
        }
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Start,
        Finish,
    }

    impl Event for TestEvent {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Finish => "Finish",
            }
        }
    }

    fn row(entries: &[(TestEvent, TestState)]) -> EventMap<TestState, TestEvent> {
        entries.iter().copied().collect()
    }

    #[test]
    fn new_table_is_empty() {
        let table: TransitionTable<TestState, TestEvent> = TransitionTable::new();

        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(table.get(&TestState::Initial).is_none());
    }

    #[test]
    fn set_replaces_whole_row() {
        let mut table = TransitionTable::new();
        table.set(
            TestState::Initial,
            row(&[(TestEvent::Start, TestState::Processing)]),
        );

        let previous = table.set(
            TestState::Initial,
            row(&[(TestEvent::Finish, TestState::Complete)]),
        );

        assert_eq!(
            previous,
            Some(row(&[(TestEvent::Start, TestState::Processing)]))
        );
        assert_eq!(table.resolve(&TestState::Initial, &TestEvent::Start), None);
        assert_eq!(
            table.resolve(&TestState::Initial, &TestEvent::Finish),
            Some(&TestState::Complete)
        );
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn resolve_misses_unregistered_state() {
        let mut table = TransitionTable::new();
        table.set(
            TestState::Initial,
            row(&[(TestEvent::Start, TestState::Processing)]),
        );

        assert_eq!(table.resolve(&TestState::Processing, &TestEvent::Start), None);
    }

    #[test]
    fn empty_row_is_registered_but_has_no_exits() {
        let mut table: TransitionTable<TestState, TestEvent> = TransitionTable::new();
        table.set(TestState::Complete, EventMap::new());

        assert!(table.contains_state(&TestState::Complete));
        assert_eq!(table.get(&TestState::Complete).map(|r| r.len()), Some(0));
        assert_eq!(table.resolve(&TestState::Complete, &TestEvent::Start), None);
    }

    #[test]
    fn from_iterator_keeps_last_row_per_state() {
        let table: TransitionTable<TestState, TestEvent> = vec![
            (
                TestState::Initial,
                row(&[(TestEvent::Start, TestState::Processing)]),
            ),
            (
                TestState::Initial,
                row(&[(TestEvent::Start, TestState::Complete)]),
            ),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.len(), 1);
        assert_eq!(
            table.resolve(&TestState::Initial, &TestEvent::Start),
            Some(&TestState::Complete)
        );
    }

    #[test]
    fn states_lists_registered_rows() {
        let mut table = TransitionTable::new();
        table.set(
            TestState::Initial,
            row(&[(TestEvent::Start, TestState::Processing)]),
        );
        table.set(
            TestState::Processing,
            row(&[(TestEvent::Finish, TestState::Complete)]),
        );

        let mut states: Vec<_> = table.states().copied().collect();
        states.sort_by_key(|s| s.name().to_string());
        assert_eq!(states, vec![TestState::Initial, TestState::Processing]);
    }

    #[test]
    fn table_serializes_as_nested_object() {
        let mut table = TransitionTable::new();
        table.set(
            TestState::Initial,
            row(&[(TestEvent::Start, TestState::Processing)]),
        );

        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"Initial":{"Start":"Processing"}}"#);

        let restored: TransitionTable<TestState, TestEvent> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, table);
    }
}
