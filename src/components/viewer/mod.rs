mod reducer;

pub use reducer::{
    reduce, ViewerAction, ViewerReducer, ViewerState, DELETE_PROMPT, POST_DELETED_MESSAGE,
};

use crate::environment::types::User;
use crate::environment::Environment;
use crate::runtime::Store;

/// Open a single post. The store starts fetching immediately.
pub fn mount(environment: Environment, id: impl Into<String>, user: User) -> Store<ViewerReducer> {
    let mut store = Store::new(ViewerState::new(id, user), environment);
    store.send(ViewerAction::Fetch);
    store
}
