use crate::environment::types::User;
use crate::environment::{Environment, Repository};
use crate::runtime::{Effect, Reducer, RequestHandle};

pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

pub struct AppReducer;

/// Process-wide session state: authentication, flash notifications and the
/// global UI toggles. Shared by every view, mutated only through
/// [`AppAction`]s.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub logged_in: bool,
    pub user: User,
    pub flash_messages: im::Vector<String>,
    pub is_search_open: bool,
    pub is_chat_open: bool,
    pub unread_chat_count: u32,
    pub(crate) session_check: Option<RequestHandle>,
}

impl AppState {
    /// Initial state, seeded once at process start from durable storage.
    pub fn seeded(repository: &Repository) -> Self {
        match repository.stored_user() {
            Some(user) => Self {
                logged_in: true,
                user,
                ..Default::default()
            },
            None => Self::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub enum AppAction {
    Login(User),
    Logout,
    FlashMessage(String),
    OpenSearch,
    CloseSearch,
    ToggleChat,
    CloseChat,
    IncrementUnreadChatCount,
    ClearUnreadChatCount,
    /// Ask the backend whether the stored token still names a live session.
    CheckToken,
    TokenChecked(Result<bool, String>),
}

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;

    fn reduce(
        action: Self::Action,
        state: &mut Self::State,
        environment: &Environment,
    ) -> Effect<Self::Action> {
        reduce(action, state, environment)
    }
}

pub fn reduce(
    action: AppAction,
    state: &mut AppState,
    environment: &Environment,
) -> Effect<AppAction> {
    log::trace!("{action:?}");
    match action {
        AppAction::Login(user) => {
            state.logged_in = true;
            state.user = user;
            Effect::NONE
        }
        AppAction::Logout => {
            // logged_in and the user record move together, keeping the
            // session invariant: logged_in == true iff a token exists
            state.logged_in = false;
            state.user = User::default();
            Effect::NONE
        }
        AppAction::FlashMessage(message) => {
            state.flash_messages.push_back(message);
            Effect::NONE
        }
        AppAction::OpenSearch => {
            state.is_search_open = true;
            Effect::NONE
        }
        AppAction::CloseSearch => {
            state.is_search_open = false;
            Effect::NONE
        }
        AppAction::ToggleChat => {
            state.is_chat_open = !state.is_chat_open;
            Effect::NONE
        }
        AppAction::CloseChat => {
            state.is_chat_open = false;
            Effect::NONE
        }
        AppAction::IncrementUnreadChatCount => {
            state.unread_chat_count += 1;
            Effect::NONE
        }
        AppAction::ClearUnreadChatCount => {
            state.unread_chat_count = 0;
            Effect::NONE
        }
        AppAction::CheckToken => {
            let Some(token) = state.user.token.clone() else {
                return Effect::NONE;
            };
            let model = environment.model.clone();
            let handle = RequestHandle::new();
            state.session_check = Some(handle.clone());
            Effect::request(
                async move { model.validate_session(token).await },
                AppAction::TokenChecked,
                handle,
            )
        }
        AppAction::TokenChecked(result) => {
            state.session_check = None;
            match result {
                Ok(true) => Effect::NONE,
                Ok(false) => Effect::merge2(
                    Effect::action(AppAction::Logout),
                    Effect::action(AppAction::FlashMessage(SESSION_EXPIRED_MESSAGE.to_string())),
                ),
                Err(e) => {
                    log::warn!("token check failed: {e:?}");
                    Effect::NONE
                }
            }
        }
    }
}
