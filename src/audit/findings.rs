//! Findings reported by the table audit.

use thiserror::Error;

/// Structural oddities in a transition table.
///
/// Findings are advisory: a table that produces them is still valid and
/// the machine drives it exactly as written.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuditFinding {
    #[error("State '{state}' has transitions but cannot be reached from '{initial}'")]
    Unreachable { state: String, initial: String },

    #[error("State '{state}' is reachable and not final, but has no outgoing transitions")]
    DeadEnd { state: String },

    #[error("State '{state}' is final but has {exits} outgoing transition(s)")]
    FinalWithExits { state: String, exits: usize },
}
