mod reducer;

pub use reducer::{
    reduce, SearchAction, SearchReducer, SearchState, Show, NO_RESULTS_MESSAGE,
};

use crate::environment::types::KeyEvent;
use crate::environment::Environment;
use crate::runtime::Store;

/// Open the search panel. The key subscription lives exactly as long as the
/// store, so closing and reopening the panel never stacks listeners.
pub fn mount(environment: Environment, keys: flume::Receiver<KeyEvent>) -> Store<SearchReducer> {
    let mut store = Store::new(SearchState::default(), environment);
    store.subscribe(keys, SearchAction::KeyUp);
    store
}
