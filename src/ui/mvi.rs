//! Unidirectional data-flow primitives for the view layer.
//!
//! Every screen keeps its state in a value implementing [`UiState`], and
//! the only way that value changes is through a [`Reducer`] consuming an
//! [`Intent`]:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ render
//! ```
//!
//! Reducers are pure; side effects (API calls, navigation) live in the
//! app shell, which dispatches follow-up intents when results arrive.

/// Marker trait for view state.
///
/// `Default` is the state a screen starts in (typically `Loading` or an
/// empty draft); `PartialEq` lets tests compare transitions directly.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions and API outcomes.
pub trait Intent: Send + 'static {}

/// Pure state transition: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
