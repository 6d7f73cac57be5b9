//! Ready-made table for a mobile sign-up flow.
//!
//! The flow runs Login → CreateProfile → (FacebookProfile) → SelectAvatar →
//! TermsAndConditions → Finished, with shortcuts for registering later and
//! for logging in directly. Screens, navigation and button wiring belong to
//! the host application; it feeds [`RegistrationAction`]s in and reacts to
//! the [`RegistrationState`] it gets back.
//!
//! Host navigation that pops a screen by itself (a system back button) may
//! still report `Back` so the cursor follows, and then skip its own
//! presentation step. That choice lives in the host, not in the table.

use crate::core::TransitionTable;
use crate::machine::StateMachine;
use crate::{event_enum, state_enum, transitions};

state_enum! {
    /// Screens of the sign-up flow.
    pub enum RegistrationState {
        Login,
        CreateProfile,
        FacebookProfile,
        SelectAvatar,
        TermsAndConditions,
        Finished,
    }
    final: [Finished]
}

event_enum! {
    /// User actions the screens report.
    pub enum RegistrationAction {
        Login,
        Next,
        Back,
        RegisterLater,
        FacebookRegister,
    }
}

/// The sign-up transition table.
pub fn registration_table() -> TransitionTable<RegistrationState, RegistrationAction> {
    use crate::registration::{RegistrationAction as A, RegistrationState as S};

    let mut table = TransitionTable::new();
    table.set(
        S::Login,
        transitions! {
            A::Next => S::CreateProfile,
            A::Login => S::Finished,
        },
    );
    table.set(
        S::CreateProfile,
        transitions! {
            A::Next => S::SelectAvatar,
            A::FacebookRegister => S::FacebookProfile,
            A::RegisterLater => S::TermsAndConditions,
        },
    );
    table.set(
        S::FacebookProfile,
        transitions! {
            A::Next => S::SelectAvatar,
            A::RegisterLater => S::TermsAndConditions,
        },
    );
    table.set(
        S::SelectAvatar,
        transitions! {
            A::Next => S::TermsAndConditions,
            A::Back => S::CreateProfile,
        },
    );
    table.set(
        S::TermsAndConditions,
        transitions! { A::Next => S::Finished },
    );
    table
}

/// A sign-up machine positioned on the login screen.
pub fn registration_machine() -> StateMachine<RegistrationState, RegistrationAction> {
    StateMachine::with_table(RegistrationState::Login, registration_table())
}
