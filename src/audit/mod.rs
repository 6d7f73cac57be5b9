//! Advisory audit of transition table shape.
//!
//! The audit walks a table from an initial state and reports every finding
//! at once using Stillwater's `Validation`, rather than stopping at the
//! first. It never changes the table and the machine never runs it on its
//! own; tables are allowed to be partial.
//!
//! # Example
//!
//! ```rust
//! use flowstate::audit::{audit, AuditFinding};
//! use flowstate::core::TransitionTable;
//! use flowstate::{event_enum, state_enum, transitions};
//! use stillwater::validation::Validation;
//!
//! state_enum! {
//!     enum Step { Start, Stuck, Done }
//!     final: [Done]
//! }
//!
//! event_enum! {
//!     enum Go { Next }
//! }
//!
//! let mut table = TransitionTable::new();
//! table.set(Step::Start, transitions! { Go::Next => Step::Stuck });
//!
//! match audit(&table, &Step::Start) {
//!     Validation::Failure(findings) => {
//!         assert!(findings
//!             .iter()
//!             .any(|f| matches!(f, AuditFinding::DeadEnd { .. })));
//!     }
//!     Validation::Success(_) => panic!("expected a dead end"),
//! }
//! ```

mod findings;

pub use findings::AuditFinding;

use crate::core::{Event, State, TransitionTable};
use log::debug;
use std::collections::{HashSet, VecDeque};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of an audit: success, or every finding.
pub type AuditResult = Validation<(), NonEmptyVec<AuditFinding>>;

/// Audit `table` as driven from `initial`.
///
/// Reports states with outgoing transitions that are unreachable from
/// `initial`, reachable non-final states without exits, and final states
/// that still have exits. Findings are ordered by check, then state name.
pub fn audit<S: State, E: Event>(table: &TransitionTable<S, E>, initial: &S) -> AuditResult {
    let reachable = reachable_from(table, initial);
    let mut checks: Vec<AuditResult> = Vec::new();

    // Non-empty rows must be reachable
    for state in sorted(table.states()) {
        let has_exits = table.get(state).is_some_and(|row| !row.is_empty());
        let check = if !has_exits || reachable.contains(state) {
            Validation::success(())
        } else {
            Validation::fail(AuditFinding::Unreachable {
                state: state.name().to_string(),
                initial: initial.name().to_string(),
            })
        };
        checks.push(check);
    }

    // Reachable non-final states need a way out
    for state in sorted(reachable.iter().copied()) {
        let exits = table.get(state).map_or(0, |row| row.len());
        let check = if exits == 0 && !state.is_final() {
            Validation::fail(AuditFinding::DeadEnd {
                state: state.name().to_string(),
            })
        } else {
            Validation::success(())
        };
        checks.push(check);
    }

    // Final states should not lead anywhere
    for state in sorted(table.states()) {
        let exits = table.get(state).map_or(0, |row| row.len());
        let check = if state.is_final() && exits > 0 {
            Validation::fail(AuditFinding::FinalWithExits {
                state: state.name().to_string(),
                exits,
            })
        } else {
            Validation::success(())
        };
        checks.push(check);
    }

    if checks.is_empty() {
        return Validation::success(());
    }

    let result = Validation::all_vec(checks).map(|_| ());
    if let Validation::Failure(findings) = &result {
        debug!(
            "audit from '{}' reported {} finding(s)",
            initial.name(),
            findings.len()
        );
    }
    result
}

/// States reachable from `initial` by following registered rows.
fn reachable_from<'a, S: State, E: Event>(
    table: &'a TransitionTable<S, E>,
    initial: &'a S,
) -> HashSet<&'a S> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(initial);
    queue.push_back(initial);

    while let Some(state) = queue.pop_front() {
        let Some(row) = table.get(state) else {
            continue;
        };
        for next in row.values() {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }

    seen
}

/// Stable order so findings read the same on every run.
fn sorted<'a, S: State + 'a>(states: impl Iterator<Item = &'a S>) -> Vec<&'a S> {
    let mut states: Vec<&S> = states.collect();
    states.sort_by(|a, b| a.name().cmp(b.name()));
    states
}
