use std::rc::Rc;

use yew::Reducible;

/// Lifecycle of one asynchronous fetch, as an explicit state machine.
///
/// A failed request lands in [`FetchState::Failed`] instead of leaving the
/// view stuck on its loading placeholder, so the error arm is a real,
/// renderable state rather than an omission.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// Request in flight; the view shows a loading placeholder.
    Loading,
    /// Request settled successfully. Replaces any previous data wholesale.
    Loaded(T),
    /// Request settled with an error message worth surfacing.
    Failed(String),
}

/// Transitions applied to a [`FetchState`] reducer handle.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchAction<T> {
    /// A request was (re)issued.
    Start,
    /// The request resolved with data.
    Success(T),
    /// The request rejected with a message.
    Failure(String),
}

impl<T> FetchState<T> {
    /// The single transition function. Every action fully determines the
    /// next state; prior state never leaks into it.
    fn transition(action: FetchAction<T>) -> Self {
        match action {
            FetchAction::Start => FetchState::Loading,
            FetchAction::Success(data) => FetchState::Loaded(data),
            FetchAction::Failure(message) => FetchState::Failed(message),
        }
    }
}

impl<T: Clone + PartialEq + 'static> Reducible for FetchState<T> {
    type Action = FetchAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self::transition(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Categories = Vec<(i64, &'static str)>;

    fn step(state: FetchState<Categories>, action: FetchAction<Categories>) -> FetchState<Categories> {
        let next = Rc::new(state).reduce(action);
        (*next).clone()
    }

    #[test]
    fn success_moves_loading_to_loaded_preserving_order() {
        let records = vec![(1, "Books"), (2, "Toys")];

        let next = step(FetchState::Loading, FetchAction::Success(records.clone()));

        assert_eq!(next, FetchState::Loaded(records));
    }

    #[test]
    fn empty_success_is_loaded_not_loading() {
        let next = step(FetchState::Loading, FetchAction::Success(vec![]));

        assert_eq!(next, FetchState::Loaded(vec![]));
    }

    #[test]
    fn failure_reaches_failed_with_message() {
        let next = step(
            FetchState::Loading,
            FetchAction::Failure("HTTP error: 503".to_string()),
        );

        assert_eq!(next, FetchState::Failed("HTTP error: 503".to_string()));
    }

    #[test]
    fn retry_reenters_loading_from_failed() {
        let failed = FetchState::Failed("Network error".to_string());

        let next = step(failed, FetchAction::Start);

        assert_eq!(next, FetchState::Loading);
    }

    #[test]
    fn success_replaces_previous_data_wholesale() {
        let stale = FetchState::Loaded(vec![(9, "Stale")]);
        let fresh = vec![(1, "Books")];

        let next = step(stale, FetchAction::Success(fresh.clone()));

        assert_eq!(next, FetchState::Loaded(fresh));
    }
}
