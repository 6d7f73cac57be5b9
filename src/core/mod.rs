//! Core transition table types.
//!
//! This module contains the pure part of the library:
//! - State and event definitions via the `State` and `Event` traits
//! - The two-level `TransitionTable` and its `EventMap` rows
//!
//! Nothing here holds a cursor; see [`crate::machine`] for that.

mod state;
mod table;

pub use state::{Event, State};
pub use table::{EventMap, TransitionTable};
