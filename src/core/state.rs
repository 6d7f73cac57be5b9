//! Core State and Event traits for transition tables.
//!
//! States and events are opaque keys: the table only ever compares and
//! hashes them. The traits add a display name for logging and, for states,
//! a terminal marker consulted by the audit.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: destinations are handed back to the caller by value
/// - `Eq` + `Hash`: states key the outer level of the transition table
/// - `Debug`: states must be debuggable for diagnostics
///
/// # Example
///
/// ```rust
/// use flowstate::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Screen {
///     Login,
///     Profile,
///     Done,
/// }
///
/// impl State for Screen {
///     fn name(&self) -> &str {
///         match self {
///             Self::Login => "Login",
///             Self::Profile => "Profile",
///             Self::Done => "Done",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Done)
///     }
/// }
///
/// assert!(Screen::Done.is_final());
/// assert!(!Screen::Login.is_final());
/// ```
pub trait State: Clone + Eq + Hash + Debug {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Final states are where a flow is expected to stop. The machine does
    /// not refuse transitions out of them; the marker only informs
    /// [`audit`](crate::audit::audit) and [`StateMachine::is_final`].
    ///
    /// Default implementation returns `false`.
    ///
    /// [`StateMachine::is_final`]: crate::machine::StateMachine::is_final
    fn is_final(&self) -> bool {
        false
    }
}

/// Trait for events that may trigger a transition.
///
/// Events carry no payload; two events are the same trigger exactly when
/// they compare equal.
pub trait Event: Clone + Eq + Hash + Debug {
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}
