//! The cursor-holding state machine.
//!
//! # Key Concepts
//!
//! - **Cursor**: the machine's current state, never set from outside
//! - **Peek**: resolve an event against the cursor without committing
//! - **Transition**: resolve and commit, or silently ignore a miss
//! - **Listeners**: synchronous callbacks run after each committed move
//!
//! # Example
//!
//! ```rust
//! use flowstate::machine::StateMachine;
//! use flowstate::{event_enum, state_enum, transitions};
//!
//! state_enum! {
//!     enum Light { Red, Green, Yellow }
//! }
//!
//! event_enum! {
//!     enum Tick { Tick }
//! }
//!
//! let mut light = StateMachine::new(Light::Red);
//! light.set_transitions(Light::Red, transitions! { Tick::Tick => Light::Green });
//! light.set_transitions(Light::Green, transitions! { Tick::Tick => Light::Yellow });
//! light.set_transitions(Light::Yellow, transitions! { Tick::Tick => Light::Red });
//!
//! assert_eq!(light.transition(&Tick::Tick), Some(Light::Green));
//! assert_eq!(light.transition(&Tick::Tick), Some(Light::Yellow));
//! assert_eq!(light.transition(&Tick::Tick), Some(Light::Red));
//! ```

mod listener;
mod state_machine;

pub use listener::TransitionListener;
pub use state_machine::StateMachine;
