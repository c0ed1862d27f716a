use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

use crate::{
    api,
    models::Category,
    state::{FetchAction, FetchState},
};

/// Load the category list once per mount.
///
/// Returns the fetch state handle plus a retry callback that re-issues the
/// request. The effect keys on an attempt counter that only the retry
/// callback bumps, so unrelated re-renders never refetch. A guard flag is
/// flipped in the effect cleanup so a response arriving after the view is
/// gone is dropped instead of dispatched into a defunct handle.
#[hook]
pub fn use_categories() -> (UseReducerHandle<FetchState<Vec<Category>>>, Callback<()>) {
    let categories = use_reducer(|| FetchState::Loading);
    let attempt = use_state(|| 0u32);

    {
        let categories = categories.clone();
        use_effect_with(*attempt, move |_| {
            let alive = Rc::new(Cell::new(true));
            let guard = alive.clone();

            categories.dispatch(FetchAction::Start);
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = api::fetch_categories().await;
                if !alive.get() {
                    return;
                }
                match outcome {
                    Ok(data) => categories.dispatch(FetchAction::Success(data)),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch categories: {}", e).into(),
                        );
                        categories.dispatch(FetchAction::Failure(e));
                    },
                }
            });

            move || guard.set(false)
        });
    }

    let retry = {
        let attempt = attempt.clone();
        Callback::from(move |_| attempt.set(*attempt + 1))
    };

    (categories, retry)
}
