use std::sync::Arc;

use async_trait::async_trait;

use super::types::{Follower, Post, User};

/// The network boundary the reducers talk to. Transport details live behind
/// this trait; errors are stringly typed and contained by the caller.
#[async_trait]
pub trait Api: Send + Sync {
    /// `true` when the token still identifies a live session.
    async fn validate_session(&self, token: &str) -> Result<bool, String>;
    /// `None` when no post exists for the id.
    async fn fetch_post(&self, id: &str) -> Result<Option<Post>, String>;
    async fn save_post(
        &self,
        id: &str,
        title: &str,
        body: &str,
        token: &str,
    ) -> Result<(), String>;
    /// Resolves to the backend's sentinel, `"Success"` when the post is gone.
    async fn delete_post(&self, id: &str, token: &str) -> Result<String, String>;
    async fn search(&self, term: &str) -> Result<Vec<Post>, String>;
    async fn profile_posts(&self, username: &str) -> Result<Vec<Post>, String>;
    async fn profile_following(&self, username: &str) -> Result<Vec<Follower>, String>;
}

/// Cloneable handle to the backend. Reducers clone it into their effect
/// futures; the owned-argument methods keep those futures `'static`.
#[derive(Clone)]
pub struct Model {
    api: Arc<dyn Api>,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model").finish()
    }
}

impl Model {
    pub fn new(api: Arc<dyn Api>) -> Self {
        Self { api }
    }

    pub async fn validate_session(&self, token: String) -> Result<bool, String> {
        self.api.validate_session(&token).await
    }

    pub async fn fetch_post(&self, id: String) -> Result<Option<Post>, String> {
        self.api.fetch_post(&id).await
    }

    pub async fn save_post(
        &self,
        id: String,
        title: String,
        body: String,
        token: String,
    ) -> Result<(), String> {
        self.api.save_post(&id, &title, &body, &token).await
    }

    pub async fn delete_post(&self, id: String, token: String) -> Result<String, String> {
        self.api.delete_post(&id, &token).await
    }

    pub async fn search(&self, term: String) -> Result<Vec<Post>, String> {
        self.api.search(&term).await
    }

    pub async fn profile_posts(&self, username: String) -> Result<Vec<Post>, String> {
        self.api.profile_posts(&username).await
    }

    pub async fn profile_following(&self, username: String) -> Result<Vec<Follower>, String> {
        self.api.profile_following(&username).await
    }
}

/// The session token a request should carry; empty when logged out, which the
/// backend rejects like any other invalid token.
pub fn token_or_empty(user: &User) -> String {
    user.token.clone().unwrap_or_default()
}
