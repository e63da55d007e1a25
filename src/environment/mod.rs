pub mod http;
pub mod model;
pub mod repository;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use model::{Api, Model};
pub use repository::Repository;

use std::sync::Arc;

use crate::components::app::AppAction;

/// Everything a reducer may reach out to besides its own state: the network
/// model, durable storage, the shared session store, navigation, and the
/// confirmation gate. Cloning is cheap; all members are handles.
#[derive(Clone)]
pub struct Environment {
    pub model: Model,
    pub repository: Repository,
    pub app: AppHandle,
    pub navigator: Navigator,
    pub prompt: Prompter,
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment").finish()
    }
}

impl Environment {
    pub fn new(
        model: Model,
        repository: Repository,
        app: AppHandle,
        navigator: Navigator,
        prompt: Prompter,
    ) -> Self {
        Self {
            model,
            repository,
            app,
            navigator,
            prompt,
        }
    }
}

/// Write access to the session store from any view. The store end of the
/// channel is pumped by the app store's subscription.
#[derive(Clone)]
pub struct AppHandle {
    sender: flume::Sender<AppAction>,
}

impl AppHandle {
    pub fn new() -> (Self, flume::Receiver<AppAction>) {
        let (sender, receiver) = flume::unbounded();
        (Self { sender }, receiver)
    }

    pub fn dispatch(&self, action: AppAction) {
        let _ = self.sender.send(action);
    }

    /// Queue a transient user-visible notification.
    pub fn flash(&self, message: impl Into<String>) {
        self.dispatch(AppAction::FlashMessage(message.into()));
    }
}

/// The `navigate(path)` capability. The routing layer owns the receiving end.
#[derive(Clone)]
pub struct Navigator {
    sender: flume::Sender<String>,
}

impl Navigator {
    pub fn new() -> (Self, flume::Receiver<String>) {
        let (sender, receiver) = flume::unbounded();
        (Self { sender }, receiver)
    }

    pub fn navigate(&self, path: impl Into<String>) {
        let path = path.into();
        log::trace!("navigate to {path}");
        let _ = self.sender.send(path);
    }
}

/// Synchronous yes/no confirmation, answered by the shell (a modal dialog in
/// the real app).
#[derive(Clone)]
pub struct Prompter(Arc<dyn Fn(&str) -> bool + Send + Sync>);

impl Prompter {
    pub fn new(ask: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(ask))
    }

    pub fn confirm(&self, message: &str) -> bool {
        (self.0)(message)
    }
}
