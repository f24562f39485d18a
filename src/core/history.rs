//! State transition history tracking.
//!
//! An immutable, ordered record of the actions that changed a machine's
//! state. Recording returns a new history; the old one is left untouched.
//! The owning machine appends in place and may cap the length.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied action.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use keypad_calc::calculator::{Action, CalculatorState, Digit};
/// use keypad_calc::core::StateTransition;
///
/// let from = CalculatorState::default();
/// let transition = StateTransition {
///     to: from.with_current_operand("7"),
///     from,
///     action: Action::AddDigit { digit: Digit::SEVEN },
///     timestamp: Utc::now(),
///     sequence: 1,
/// };
/// assert_eq!(transition.to.current_operand(), Some("7"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "A: Serialize", deserialize = "A: Deserialize<'de>"))]
pub struct StateTransition<S: State, A> {
    /// The state before the action
    pub from: S,
    /// The state the reducer produced
    pub to: S,
    /// The action that was dispatched
    pub action: A,
    /// When the action was applied
    pub timestamp: DateTime<Utc>,
    /// Dispatch counter at the time of the action, starting at 1
    pub sequence: usize,
}

/// Ordered history of state transitions.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use keypad_calc::calculator::{Action, CalculatorState, Digit};
/// use keypad_calc::core::{StateHistory, StateTransition};
///
/// let empty = CalculatorState::default();
/// let one = empty.with_current_operand("1");
/// let twelve = one.with_current_operand("12");
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: empty,
///         to: one.clone(),
///         action: Action::AddDigit { digit: Digit::ONE },
///         timestamp: Utc::now(),
///         sequence: 1,
///     })
///     .record(StateTransition {
///         from: one,
///         to: twelve,
///         action: Action::AddDigit { digit: Digit::TWO },
///         timestamp: Utc::now(),
///         sequence: 2,
///     });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path[2].current_operand(), Some("12"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "A: Serialize", deserialize = "A: Deserialize<'de>"))]
pub struct StateHistory<S: State, A> {
    transitions: Vec<StateTransition<S, A>>,
}

impl<S: State, A: Clone> Default for StateHistory<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, A: Clone> StateHistory<S, A> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The receiver is not modified.
    pub fn record(&self, transition: StateTransition<S, A>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append in place, then drop the oldest entries beyond `limit`.
    pub(crate) fn push_bounded(
        &mut self,
        transition: StateTransition<S, A>,
        limit: Option<usize>,
    ) {
        self.transitions.push(transition);
        if let Some(limit) = limit {
            let excess = self.transitions.len().saturating_sub(limit);
            if excess > 0 {
                self.transitions.drain(..excess);
            }
        }
    }

    /// States traversed in order: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Actions in the order they were applied.
    pub fn actions(&self) -> Vec<&A> {
        self.transitions.iter().map(|t| &t.action).collect()
    }

    /// Time between the first and the last recorded transition.
    ///
    /// `None` when nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition<S, A>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
