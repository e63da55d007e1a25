use crate::environment::types::Follower;
use crate::environment::Environment;
use crate::runtime::{Effect, Reducer, RequestHandle};

pub struct ProfileFollowingReducer;

#[derive(Clone, Debug, Default)]
pub struct ProfileFollowingState {
    pub username: String,
    pub is_loading: bool,
    pub following: im::Vector<Follower>,
    pub(crate) request: Option<RequestHandle>,
}

impl ProfileFollowingState {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            is_loading: true,
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug)]
pub enum ProfileFollowingAction {
    UsernameChanged(String),
    Loaded(Result<Vec<Follower>, String>),
}

impl Reducer for ProfileFollowingReducer {
    type State = ProfileFollowingState;
    type Action = ProfileFollowingAction;

    fn reduce(
        action: Self::Action,
        state: &mut Self::State,
        environment: &Environment,
    ) -> Effect<Self::Action> {
        reduce(action, state, environment)
    }
}

pub fn reduce(
    action: ProfileFollowingAction,
    state: &mut ProfileFollowingState,
    environment: &Environment,
) -> Effect<ProfileFollowingAction> {
    log::trace!("{action:?}");
    match action {
        ProfileFollowingAction::UsernameChanged(username) => {
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
                async move { model.profile_following(username).await },
                ProfileFollowingAction::Loaded,
                handle,
            )
        }
        ProfileFollowingAction::Loaded(result) => {
            state.request = None;
            match result {
                Ok(following) => {
                    state.following = following.into_iter().collect();
                    state.is_loading = false;
                }
                Err(e) => {
                    log::warn!("could not load follow list: {e:?}");
                }
            }
            Effect::NONE
        }
    }
}
