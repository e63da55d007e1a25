mod reducer;
mod state;

pub use reducer::{
    reduce, EditorAction, EditorReducer, BODY_REQUIRED_MESSAGE, NO_PERMISSION_MESSAGE,
    POST_UPDATED_MESSAGE, TITLE_REQUIRED_MESSAGE,
};
pub use state::{EditorState, Field};

use crate::environment::types::User;
use crate::environment::Environment;
use crate::runtime::Store;

/// Open the editor for a post: the store starts fetching immediately and
/// tearing it down cancels whatever is still in flight.
pub fn mount(environment: Environment, id: impl Into<String>, user: User) -> Store<EditorReducer> {
    let mut store = Store::new(EditorState::new(id, user), environment);
    store.send(EditorAction::Fetch);
    store
}
