//! Per-page state machines.
//!
//! Each page keeps one of these in a signal. Transitions consume the state and hand back the
//! next one, together with the fetches or mutations the view has to spawn; none of them perform
//! I/O, so every flow is testable without rendering.

pub mod admin;
pub mod bulk;
pub mod collection;
pub mod forms;
pub mod gate;
pub mod health;
pub mod messaging;
pub mod requests;
pub mod student;

#[cfg(test)]
mod tests;

/// Replace `state` with `transition(state)`.
pub fn apply<S: Default>(state: &mut S, transition: impl FnOnce(S) -> S) {
    *state = transition(std::mem::take(state));
}

/// Replace `state` with the state returned by `transition`, handing back its second output.
pub fn apply_with<S: Default, R>(state: &mut S, transition: impl FnOnce(S) -> (S, R)) -> R {
    let (next, output) = transition(std::mem::take(state));
    *state = next;
    output
}
