//! Reducer trait for synchronous, event-driven UI state.

/// State that evolves through discrete actions.
///
/// - **Transition**: `apply(&mut self, action)` evolves state in place.
/// - **Preview**: `reduce(&self, action)` returns the next state without
///   touching the current one.
///
/// Implementations must be deterministic and must not perform IO: the same
/// state and action always produce the same next state.
pub trait Reducer: Clone {
    type Action: Clone + core::fmt::Debug;

    /// Evolve state from a single action.
    fn apply(&mut self, action: &Self::Action);

    /// Compute the state that `action` would produce.
    fn reduce(&self, action: &Self::Action) -> Self {
        let mut next = self.clone();
        next.apply(action);
        next
    }

    /// Apply a sequence of actions in order.
    fn apply_all<'a, I>(&mut self, actions: I)
    where
        I: IntoIterator<Item = &'a Self::Action>,
        Self::Action: 'a,
    {
        for action in actions {
            self.apply(action);
        }
    }
}
