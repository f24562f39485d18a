//! The reducer seam between a state type and the actions it accepts.

use super::state::State;
use std::fmt::Debug;

/// Pure transformation `(state, action) -> state`.
///
/// Reducers are the only place where states change. `reduce` must be total
/// and side-effect free: an action that does not apply returns a state equal
/// to the input, which the shell reports as absorbed.
///
/// # Example
///
/// ```rust
/// use keypad_calc::core::{Reducer, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
/// struct Counter(u32);
///
/// impl State for Counter {
///     fn name(&self) -> &str {
///         "Counter"
///     }
/// }
///
/// #[derive(Clone, Debug)]
/// enum Tick {
///     Up,
///     Reset,
/// }
///
/// struct CounterReducer;
///
/// impl Reducer for CounterReducer {
///     type State = Counter;
///     type Action = Tick;
///
///     fn reduce(state: &Counter, action: &Tick) -> Counter {
///         match action {
///             Tick::Up => Counter(state.0 + 1),
///             Tick::Reset => Counter::default(),
///         }
///     }
/// }
///
/// assert_eq!(CounterReducer::reduce(&Counter(1), &Tick::Up), Counter(2));
/// ```
pub trait Reducer {
    /// The state this reducer operates on.
    type State: State + Default;

    /// The actions it handles.
    type Action: Clone + Debug + Send + Sync;

    /// Process an action and return the next state.
    fn reduce(state: &Self::State, action: &Self::Action) -> Self::State;
}
