use std::time::Duration;

use crate::components::app::AppAction;
use crate::environment::types::{KeyEvent, Post};
use crate::environment::Environment;
use crate::runtime::{Debouncer, Effect, Reducer, RequestHandle};

const SEARCH_DEBOUNCE: Duration = Duration::from_millis(750);

pub const NO_RESULTS_MESSAGE: &str = "Sorry, we could not find any results for that search.";

pub struct SearchReducer;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Show {
    #[default]
    Neither,
    Loading,
    Results,
}

/// State of one search session while the panel is open.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    pub search_term: String,
    pub results: im::Vector<Post>,
    pub show: Show,
    /// Increments once per elapsed debounce delay; every increment issues
    /// exactly one search request.
    pub request_count: u32,
    pub(crate) debounce: Option<Debouncer>,
    pub(crate) request: Option<RequestHandle>,
}

impl SearchState {
    /// Header above a non-empty result list, e.g. "(3 items found)".
    pub fn results_label(&self) -> String {
        match self.results.len() {
            1 => "(1 item found)".to_string(),
            count => format!("({count} items found)"),
        }
    }
}

#[derive(Clone, Debug)]
pub enum SearchAction {
    Input(String),
    DebounceElapsed,
    Results(Result<Vec<Post>, String>),
    KeyUp(KeyEvent),
}

impl Reducer for SearchReducer {
    type State = SearchState;
    type Action = SearchAction;

    fn reduce(
        action: Self::Action,
        state: &mut Self::State,
        environment: &Environment,
    ) -> Effect<Self::Action> {
        reduce(action, state, environment)
    }
}

pub fn reduce(
    action: SearchAction,
    state: &mut SearchState,
    environment: &Environment,
) -> Effect<SearchAction> {
    log::trace!("{action:?}");
    match action {
        SearchAction::Input(term) => {
            state.search_term = term;
            // last keystroke wins: restart the delay on every input
            if let Some(previous) = state.debounce.take() {
                previous.cancel();
            }
            if state.search_term.trim().is_empty() {
                state.show = Show::Neither;
                return Effect::NONE;
            }
            state.show = Show::Loading;
            let debouncer = Debouncer::default();
            state.debounce = Some(debouncer.clone());
            Effect::debounce(SEARCH_DEBOUNCE, SearchAction::DebounceElapsed, debouncer)
        }
        SearchAction::DebounceElapsed => {
            state.debounce = None;
            state.request_count += 1;
            let model = environment.model.clone();
            let term = state.search_term.clone();
            let handle = RequestHandle::new();
            state.request = Some(handle.clone());
            // a newer keystroke only restarts the timer; it does not cancel
            // a request that already left
            Effect::request(
                async move { model.search(term).await },
                SearchAction::Results,
                handle,
            )
        }
        SearchAction::Results(result) => {
            state.request = None;
            match result {
                Ok(posts) => {
                    // applied unconditionally, even when the term has moved
                    // on since the request left
                    state.results = posts.into_iter().collect();
                    state.show = Show::Results;
                }
                Err(e) => {
                    log::warn!("search failed: {e:?}");
                }
            }
            Effect::NONE
        }
        SearchAction::KeyUp(key) => {
            if key == KeyEvent::Escape {
                environment.app.dispatch(AppAction::CloseSearch);
            }
            Effect::NONE
        }
    }
}
