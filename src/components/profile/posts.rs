use crate::environment::types::Post;
use crate::environment::Environment;
use crate::runtime::{Effect, Reducer, RequestHandle};

pub struct ProfilePostsReducer;

#[derive(Clone, Debug, Default)]
pub struct ProfilePostsState {
    pub username: String,
    pub is_loading: bool,
    pub posts: im::Vector<Post>,
    pub(crate) request: Option<RequestHandle>,
}

impl ProfilePostsState {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            is_loading: true,
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug)]
pub enum ProfilePostsAction {
    /// The route changed to another profile while the tab stayed mounted.
    UsernameChanged(String),
    Loaded(Result<Vec<Post>, String>),
}

impl Reducer for ProfilePostsReducer {
    type State = ProfilePostsState;
    type Action = ProfilePostsAction;

    fn reduce(
        action: Self::Action,
        state: &mut Self::State,
        environment: &Environment,
    ) -> Effect<Self::Action> {
        reduce(action, state, environment)
    }
}

pub fn reduce(
    action: ProfilePostsAction,
    state: &mut ProfilePostsState,
    environment: &Environment,
) -> Effect<ProfilePostsAction> {
    log::trace!("{action:?}");
    match action {
        ProfilePostsAction::UsernameChanged(username) => {
            // the previous profile's response must never land on this one
            if let Some(previous) = state.request.take() {
                previous.cancel();
            }
            state.username = username;
            state.is_loading = true;
            let model = environment.model.clone();
            let username = state.username.clone();
            let handle = RequestHandle::new();
            state.request = Some(handle.clone());
            Effect::request(
                async move { model.profile_posts(username).await },
                ProfilePostsAction::Loaded,
                handle,
            )
        }
        ProfilePostsAction::Loaded(result) => {
            state.request = None;
            match result {
                Ok(posts) => {
                    state.posts = posts.into_iter().collect();
                    state.is_loading = false;
                }
                Err(e) => {
                    log::warn!("could not load profile posts: {e:?}");
                }
            }
            Effect::NONE
        }
    }
}
