use crate::environment::model::token_or_empty;
use crate::environment::types::{Post, User};
use crate::environment::Environment;
use crate::runtime::{Effect, Reducer, RequestHandle};

pub const DELETE_PROMPT: &str = "Do you really want to delete this post?";
pub const POST_DELETED_MESSAGE: &str = "Post was successfully deleted.";

pub struct ViewerReducer;

/// State of a single rendered post.
#[derive(Clone, Debug)]
pub struct ViewerState {
    pub id: String,
    pub user: User,
    pub is_loading: bool,
    pub not_found: bool,
    pub post: Option<Post>,
    pub(crate) fetch_request: Option<RequestHandle>,
    pub(crate) delete_request: Option<RequestHandle>,
}

impl ViewerState {
    pub fn new(id: impl Into<String>, user: User) -> Self {
        Self {
            id: id.into(),
            user,
            is_loading: true,
            not_found: false,
            post: None,
            fetch_request: None,
            delete_request: None,
        }
    }

    /// Edit and delete controls only render for the author's own post.
    pub fn is_owner(&self) -> bool {
        match (&self.post, &self.user.username) {
            (Some(post), Some(username)) => post.author.username == *username,
            _ => false,
        }
    }
}

#[derive(Clone, Debug)]
pub enum ViewerAction {
    Fetch,
    FetchComplete(Result<Option<Post>, String>),
    Delete,
    DeleteComplete(Result<String, String>),
}

impl Reducer for ViewerReducer {
    type State = ViewerState;
    type Action = ViewerAction;

    fn reduce(
        action: Self::Action,
        state: &mut Self::State,
        environment: &Environment,
    ) -> Effect<Self::Action> {
        reduce(action, state, environment)
    }
}

pub fn reduce(
    action: ViewerAction,
    state: &mut ViewerState,
    environment: &Environment,
) -> Effect<ViewerAction> {
    log::trace!("{action:?}");
    match action {
        ViewerAction::Fetch => {
            let model = environment.model.clone();
            let id = state.id.clone();
            let handle = RequestHandle::new();
            state.fetch_request = Some(handle.clone());
            Effect::request(
                async move { model.fetch_post(id).await },
                ViewerAction::FetchComplete,
                handle,
            )
        }
        ViewerAction::FetchComplete(result) => {
            state.fetch_request = None;
            match result {
                Ok(Some(post)) => {
                    state.post = Some(post);
                    state.is_loading = false;
                }
                Ok(None) => {
                    state.not_found = true;
                    state.is_loading = false;
                }
                Err(e) => {
                    log::warn!("could not fetch post: {e:?}");
                }
            }
            Effect::NONE
        }
        ViewerAction::Delete => {
            if !environment.prompt.confirm(DELETE_PROMPT) {
                return Effect::NONE;
            }
            let model = environment.model.clone();
            let id = state.id.clone();
            let token = token_or_empty(&state.user);
            let handle = RequestHandle::new();
            state.delete_request = Some(handle.clone());
            Effect::request(
                async move { model.delete_post(id, token).await },
                ViewerAction::DeleteComplete,
                handle,
            )
        }
        ViewerAction::DeleteComplete(result) => {
            state.delete_request = None;
            match result {
                // the backend confirms with a plain "Success" string
                Ok(response) if response == "Success" => {
                    environment.app.flash(POST_DELETED_MESSAGE);
                    let username = state.user.username.clone().unwrap_or_default();
                    environment.navigator.navigate(format!("/profile/{username}"));
                }
                Ok(response) => {
                    log::warn!("unexpected delete response: {response:?}");
                }
                Err(e) => {
                    log::warn!("could not delete post: {e:?}");
                }
            }
            Effect::NONE
        }
    }
}
