//! State machine shell that dispatches actions through a reducer.

use crate::core::{Reducer, State, StateHistory, StateTransition};
use chrono::Utc;
use std::marker::PhantomData;
use tracing::{debug, trace};

/// History entries a machine keeps unless configured otherwise.
pub const DEFAULT_MAX_HISTORY: usize = 1000;

/// Outcome of dispatching a single action
#[derive(Clone, Debug, PartialEq)]
pub enum DispatchResult<S: State> {
    /// The reducer produced a different state
    Transitioned(S),

    /// The action did not apply; the state is unchanged
    Absorbed,
}

impl<S: State> DispatchResult<S> {
    pub fn is_transitioned(&self) -> bool {
        matches!(self, Self::Transitioned(_))
    }
}

/// Owns the current state of a reducer-driven machine.
///
/// The reducer stays pure; this shell keeps the current value, the initial
/// value for `reset`, and an optional history of applied actions. History
/// is capped at [`DEFAULT_MAX_HISTORY`] entries by default; the oldest
/// entries are dropped first.
pub struct StateMachine<R: Reducer> {
    initial: R::State,
    current: R::State,
    history: StateHistory<R::State, R::Action>,
    record_history: bool,
    max_history: Option<usize>,
    dispatched: usize,
    _reducer: PhantomData<R>,
}

impl<R: Reducer> StateMachine<R> {
    /// Create a machine in the given state, recording history
    pub fn new(initial: R::State) -> Self {
        Self {
            current: initial.clone(),
            initial,
            history: StateHistory::new(),
            record_history: true,
            max_history: Some(DEFAULT_MAX_HISTORY),
            dispatched: 0,
            _reducer: PhantomData,
        }
    }

    pub(crate) fn set_record_history(&mut self, record: bool) {
        self.record_history = record;
    }

    pub(crate) fn set_max_history(&mut self, limit: Option<usize>) {
        self.max_history = limit;
    }

    /// Most history entries kept, `None` when unbounded
    pub fn max_history(&self) -> Option<usize> {
        self.max_history
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &R::State {
        &self.current
    }

    /// The state the machine started from and returns to on `reset`
    pub fn initial_state(&self) -> &R::State {
        &self.initial
    }

    /// Check if machine is in a final state (pure)
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Get transition history (pure)
    pub fn history(&self) -> &StateHistory<R::State, R::Action> {
        &self.history
    }

    pub fn records_history(&self) -> bool {
        self.record_history
    }

    /// Number of actions dispatched since creation or the last `reset`
    pub fn dispatched(&self) -> usize {
        self.dispatched
    }

    /// Run one action through the reducer and keep the result.
    pub fn dispatch(&mut self, action: R::Action) -> DispatchResult<R::State> {
        self.dispatched += 1;
        let next = R::reduce(&self.current, &action);

        if next == self.current {
            trace!(
                action = ?action,
                state = self.current.name(),
                "action absorbed"
            );
            return DispatchResult::Absorbed;
        }

        debug!(
            action = ?action,
            from = self.current.name(),
            to = next.name(),
            "transition applied"
        );

        let from = std::mem::replace(&mut self.current, next.clone());
        if self.record_history {
            self.history.push_bounded(
                StateTransition {
                    from,
                    to: next.clone(),
                    action,
                    timestamp: Utc::now(),
                    sequence: self.dispatched,
                },
                self.max_history,
            );
        }

        DispatchResult::Transitioned(next)
    }

    /// Dispatch actions in order, returning how many changed the state.
    pub fn dispatch_all<I>(&mut self, actions: I) -> usize
    where
        I: IntoIterator<Item = R::Action>,
    {
        actions
            .into_iter()
            .map(|action| self.dispatch(action))
            .filter(DispatchResult::is_transitioned)
            .count()
    }

    /// Return to the initial state and forget history.
    pub fn reset(&mut self) {
        debug!(from = self.current.name(), "machine reset");
        self.current = self.initial.clone();
        self.history = StateHistory::new();
        self.dispatched = 0;
    }
}

impl<R: Reducer> Default for StateMachine<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}
