mod following;
mod posts;

pub use following::{
    ProfileFollowingAction, ProfileFollowingReducer, ProfileFollowingState,
};
pub use posts::{ProfilePostsAction, ProfilePostsReducer, ProfilePostsState};

use crate::environment::Environment;
use crate::runtime::Store;

/// Open the posts tab of a profile page. Loading starts immediately.
pub fn mount_posts(
    environment: Environment,
    username: impl Into<String>,
) -> Store<ProfilePostsReducer> {
    let username = username.into();
    let mut store = Store::new(ProfilePostsState::new(username.clone()), environment);
    store.send(ProfilePostsAction::UsernameChanged(username));
    store
}

/// Open the follow list tab of a profile page.
pub fn mount_following(
    environment: Environment,
    username: impl Into<String>,
) -> Store<ProfileFollowingReducer> {
    let username = username.into();
    let mut store = Store::new(ProfileFollowingState::new(username.clone()), environment);
    store.send(ProfileFollowingAction::UsernameChanged(username));
    store
}
