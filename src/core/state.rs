//! Core State trait for state machine states.
//!
//! Every state the machine can hold implements this trait. The methods are
//! pure inspections used for logging, display and invariant checks.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// States are immutable values. A reducer never edits one in place; it
/// returns a new value, so `Clone` and `PartialEq` are what let the shell
/// detect whether an action changed anything.
///
/// # Required Traits
///
/// - `Clone`: states are copied into history records
/// - `PartialEq`: absorbed actions are detected by comparing states
/// - `Debug`: states show up in diagnostics
/// - `Serialize` + `Deserialize`: states cross the UI boundary as JSON
///
/// # Example
///
/// ```rust
/// use keypad_calc::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Power {
///     Off,
///     On,
///     Fault,
/// }
///
/// impl State for Power {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::On => "On",
///             Self::Fault => "Fault",
///         }
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Fault)
///     }
/// }
///
/// assert_eq!(Power::On.name(), "On");
/// assert!(Power::Fault.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Short name of the state (or of its phase) for display and logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this state shows an error to the user.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}
