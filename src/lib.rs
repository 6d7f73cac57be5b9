//! Flowstate: a small deterministic finite state transition table
//!
//! Flowstate maps `(state, event)` pairs to a next state and keeps a single
//! current-state cursor. It decouples "where does this action lead" from
//! whatever presents the result, typically a chain of screens.
//!
//! # Core Concepts
//!
//! - **State** / **Event**: opaque hashable keys via the `State` and `Event` traits
//! - **Transition Table**: per-state rows of event → destination, replaced wholesale
//! - **State Machine**: the table plus a cursor that only moves on a hit
//! - **Audit**: advisory report of unreachable states and dead ends
//!
//! # Example
//!
//! ```rust
//! use flowstate::{event_enum, state_enum, transitions, StateMachine};
//!
//! state_enum! {
//!     enum Screen {
//!         Login,
//!         CreateProfile,
//!         Finished,
//!     }
//!     final: [Finished]
//! }
//!
//! event_enum! {
//!     enum Action {
//!         Login,
//!         Next,
//!         Back,
//!     }
//! }
//!
//! let mut machine = StateMachine::new(Screen::Login);
//! machine.set_transitions(
//!     Screen::Login,
//!     transitions! {
//!         Action::Next => Screen::CreateProfile,
//!         Action::Login => Screen::Finished,
//!     },
//! );
//!
//! assert_eq!(machine.transition(&Action::Next), Some(Screen::CreateProfile));
//! // Unregistered events are ignored
//! assert_eq!(machine.transition(&Action::Back), None);
//! assert_eq!(machine.current_state(), &Screen::CreateProfile);
//! ```

pub mod audit;
pub mod builder;
pub mod config;
pub mod core;
pub mod machine;
pub mod registration;

#[doc(hidden)]
pub use serde;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateMachineBuilder};
pub use crate::core::{Event, EventMap, State, TransitionTable};
pub use crate::machine::StateMachine;
