//! Loading and dumping transition tables as JSON.
//!
//! A table definition is an object keyed by state, whose values are objects
//! keyed by event, whose values are destination states:
//!
//! ```json
//! {
//!   "Login": { "Next": "CreateProfile", "Login": "Finished" },
//!   "CreateProfile": { "Next": "SelectAvatar" }
//! }
//! ```
//!
//! Only the table is configuration. A machine's current state is never
//! written out; it always starts from the initial state its owner picks.

use crate::core::{Event, State, TransitionTable};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Read;

pub mod error;

pub use error::ConfigError;

/// Parse a table definition from a JSON string.
///
/// # Example
///
/// ```rust
/// use flowstate::config;
/// use flowstate::core::TransitionTable;
/// use flowstate::{event_enum, state_enum};
///
/// state_enum! {
///     enum Step { Start, End }
/// }
///
/// event_enum! {
///     enum Go { Next }
/// }
///
/// let table: TransitionTable<Step, Go> =
///     config::from_json(r#"{"Start": {"Next": "End"}}"#).unwrap();
/// assert_eq!(table.resolve(&Step::Start, &Go::Next), Some(&Step::End));
/// ```
pub fn from_json<S, E>(json: &str) -> Result<TransitionTable<S, E>, ConfigError>
where
    S: State + DeserializeOwned,
    E: Event + DeserializeOwned,
{
    let table: TransitionTable<S, E> = serde_json::from_str(json).map_err(ConfigError::Parse)?;
    debug!("loaded table definition with {} state(s)", table.len());
    Ok(table)
}

/// Parse a table definition from any reader, such as an open file.
pub fn from_reader<S, E, R>(reader: R) -> Result<TransitionTable<S, E>, ConfigError>
where
    S: State + DeserializeOwned,
    E: Event + DeserializeOwned,
    R: Read,
{
    let table: TransitionTable<S, E> =
        serde_json::from_reader(reader).map_err(ConfigError::Parse)?;
    debug!("loaded table definition with {} state(s)", table.len());
    Ok(table)
}

/// Render a table definition as compact JSON.
pub fn to_json<S, E>(table: &TransitionTable<S, E>) -> Result<String, ConfigError>
where
    S: State + Serialize,
    E: Event + Serialize,
{
    serde_json::to_string(table).map_err(ConfigError::Serialize)
}

/// Render a table definition as indented JSON.
pub fn to_json_pretty<S, E>(table: &TransitionTable<S, E>) -> Result<String, ConfigError>
where
    S: State + Serialize,
    E: Event + Serialize,
{
    serde_json::to_string_pretty(table).map_err(ConfigError::Serialize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{event_enum, state_enum, transitions};
    use std::io::Cursor;

    state_enum! {
        enum TestState {
            Initial,
            Processing,
            Complete,
        }
        final: [Complete]
    }

    event_enum! {
        enum TestEvent {
            Start,
            Finish,
        }
    }

    #[test]
    fn from_json_loads_nested_rows() {
        let table: TransitionTable<TestState, TestEvent> = from_json(
            r#"{
                "Initial": {"Start": "Processing"},
                "Processing": {"Finish": "Complete"},
                "Complete": {}
            }"#,
        )
        .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(
            table.resolve(&TestState::Processing, &TestEvent::Finish),
            Some(&TestState::Complete)
        );
        assert_eq!(table.get(&TestState::Complete).map(|r| r.len()), Some(0));
    }

    #[test]
    fn from_json_rejects_unknown_state() {
        let result: Result<TransitionTable<TestState, TestEvent>, _> =
            from_json(r#"{"Nowhere": {"Start": "Processing"}}"#);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn from_json_rejects_unknown_event() {
        let result: Result<TransitionTable<TestState, TestEvent>, _> =
            from_json(r#"{"Initial": {"Jump": "Processing"}}"#);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn from_json_rejects_malformed_input() {
        let result: Result<TransitionTable<TestState, TestEvent>, _> = from_json("{\"Initial\":");

        let err = result.unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Failed to parse table definition"));
    }

    #[test]
    fn from_reader_loads_table() {
        let reader = Cursor::new(br#"{"Initial": {"Start": "Processing"}}"#.to_vec());
        let table: TransitionTable<TestState, TestEvent> = from_reader(reader).unwrap();

        assert_eq!(
            table.resolve(&TestState::Initial, &TestEvent::Start),
            Some(&TestState::Processing)
        );
    }

    #[test]
    fn dumped_table_loads_back() {
        let mut table = TransitionTable::new();
        table.set(
            TestState::Initial,
            transitions! { TestEvent::Start => TestState::Processing },
        );
        table.set(
            TestState::Processing,
            transitions! { TestEvent::Finish => TestState::Complete },
        );

        let json = to_json_pretty(&table).unwrap();
        let restored: TransitionTable<TestState, TestEvent> = from_json(&json).unwrap();

        assert_eq!(restored, table);
    }

    #[test]
    fn to_json_writes_compact_rows() {
        let mut table = TransitionTable::new();
        table.set(
            TestState::Processing,
            transitions! { TestEvent::Finish => TestState::Complete },
        );

        assert_eq!(
            to_json(&table).unwrap(),
            r#"{"Processing":{"Finish":"Complete"}}"#
        );
    }
}
