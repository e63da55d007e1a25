mod reducer;

pub use reducer::{reduce, AppAction, AppReducer, AppState, SESSION_EXPIRED_MESSAGE};

use crate::environment::Environment;
use crate::runtime::Store;

/// Create the process-wide session store: state seeded from durable storage,
/// the persistence observer, the subscription that lets every other view
/// dispatch through its [`crate::environment::AppHandle`], and, when a
/// session was restored, the bootstrap token check.
pub fn mount(
    environment: Environment,
    actions: flume::Receiver<AppAction>,
) -> Store<AppReducer> {
    let state = AppState::seeded(&environment.repository);
    let mut store: Store<AppReducer> = Store::new(state, environment).with_observer(persist_session);
    store.subscribe(actions, |action| action);
    if store.state().logged_in {
        store.send(AppAction::CheckToken);
    }
    store
}

/// Lifecycle-bound side effect: whenever `logged_in` flips, mirror the user
/// record into durable storage (all three slots on login, none on logout).
/// Lives outside the reducer so the reducer stays pure.
fn persist_session(previous: &AppState, current: &AppState, environment: &Environment) {
    if previous.logged_in == current.logged_in {
        return;
    }
    if current.logged_in {
        environment.repository.store_user(&current.user);
    } else {
        environment.repository.clear_user();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    use super::*;
    use crate::environment::testing::test_environment;
    use crate::environment::types::User;

    fn alice() -> User {
        User::new("token123", "alice", "https://gravatar.com/alice")
    }

    #[tokio::test(flavor = "current_thread")]
    async fn login_persists_and_logout_clears_storage() {
        let env = test_environment();
        let mut store = mount(env.environment.clone(), env.app_actions.clone());

        store.send(AppAction::Login(alice()));
        assert!(store.state().logged_in);
        assert_eq!(env.repository.stored_user(), Some(alice()));

        store.send(AppAction::Logout);
        assert!(!store.state().logged_in);
        assert_eq!(store.state().user, User::default());
        assert!(env.repository.stored_user().is_none());

        // logging out again leaves storage empty, not errored
        store.send(AppAction::Logout);
        assert!(env.repository.stored_user().is_none());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn session_invariant_holds_across_transitions() {
        let env = test_environment();
        let mut store = mount(env.environment.clone(), env.app_actions.clone());
        assert_eq!(store.state().logged_in, store.state().user.token.is_some());
        store.send(AppAction::Login(alice()));
        assert_eq!(store.state().logged_in, store.state().user.token.is_some());
        store.send(AppAction::Logout);
        assert_eq!(store.state().logged_in, store.state().user.token.is_some());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn bootstrap_keeps_a_valid_session() {
        let env = test_environment();
        env.repository.store_user(&alice());
        let mut store = mount(env.environment.clone(), env.app_actions.clone());
        assert!(store.state().logged_in);
        store.settle().await;
        assert!(store.state().logged_in);
        assert!(store.state().flash_messages.is_empty());
        assert_eq!(env.api.calls(), vec!["checkToken:token123"]);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn expired_token_logs_out_with_a_flash() {
        let env = test_environment();
        env.repository.store_user(&alice());
        env.api.session_valid.store(false, Ordering::SeqCst);
        let mut store = mount(env.environment.clone(), env.app_actions.clone());
        store.settle().await;
        assert!(!store.state().logged_in);
        assert_eq!(
            store.state().flash_messages,
            im::vector![SESSION_EXPIRED_MESSAGE.to_string()]
        );
        assert!(env.repository.stored_user().is_none());
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn teardown_before_the_check_resolves_changes_nothing() {
        let env = test_environment();
        env.repository.store_user(&alice());
        env.api.session_valid.store(false, Ordering::SeqCst);
        env.api.set_delay(Duration::from_secs(5));
        let mut store = mount(env.environment.clone(), env.app_actions.clone());
        store.teardown();
        store.settle().await;
        assert!(store.state().logged_in);
        assert!(store.state().flash_messages.is_empty());
        assert_eq!(env.repository.stored_user(), Some(alice()));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn no_stored_session_means_no_token_check() {
        let env = test_environment();
        let mut store = mount(env.environment.clone(), env.app_actions.clone());
        assert!(!store.state().logged_in);
        store.settle().await;
        assert!(env.api.calls().is_empty());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn flash_messages_append_in_order() {
        let env = test_environment();
        let mut store = mount(env.environment.clone(), env.app_actions.clone());
        store.send(AppAction::FlashMessage("one".into()));
        store.send(AppAction::FlashMessage("two".into()));
        assert_eq!(
            store.state().flash_messages,
            im::vector!["one".to_string(), "two".to_string()]
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn chat_toggles_and_unread_counter() {
        let env = test_environment();
        let mut store = mount(env.environment.clone(), env.app_actions.clone());
        store.send(AppAction::ToggleChat);
        assert!(store.state().is_chat_open);
        store.send(AppAction::IncrementUnreadChatCount);
        store.send(AppAction::IncrementUnreadChatCount);
        assert_eq!(store.state().unread_chat_count, 2);
        store.send(AppAction::ClearUnreadChatCount);
        assert_eq!(store.state().unread_chat_count, 0);
        store.send(AppAction::CloseChat);
        assert!(!store.state().is_chat_open);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn handle_dispatches_reach_the_store() {
        let env = test_environment();
        let mut store = mount(env.environment.clone(), env.app_actions.clone());
        env.environment.app.flash("from another view");
        store.process_next().await;
        assert_eq!(
            store.state().flash_messages,
            im::vector!["from another view".to_string()]
        );
    }
}
