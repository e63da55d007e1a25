use async_trait::async_trait;
use serde_json::json;
use url::Url;

use super::model::Api;
use super::types::{Follower, Post};

/// Production [`Api`] implementation speaking the complexapp backend routes.
pub struct HttpApi {
    client: reqwest::Client,
    base: Url,
}

impl HttpApi {
    pub fn new(base: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, String> {
        self.base
            .join(path)
            .map_err(|e| format!("Invalid endpoint {path}: {e:?}"))
    }
}

#[async_trait]
impl Api for HttpApi {
    async fn validate_session(&self, token: &str) -> Result<bool, String> {
        let response = self
            .client
            .post(self.endpoint("/checkToken")?)
            .json(&json!({ "token": token }))
            .send()
            .await
            .map_err(|e| format!("checkToken failed: {e:?}"))?;
        response
            .json::<bool>()
            .await
            .map_err(|e| format!("checkToken returned garbage: {e:?}"))
    }

    async fn fetch_post(&self, id: &str) -> Result<Option<Post>, String> {
        let response = self
            .client
            .get(self.endpoint(&format!("/post/{id}"))?)
            .send()
            .await
            .map_err(|e| format!("fetch post failed: {e:?}"))?;
        // a missing post comes back as a falsy body, not as an error status
        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| format!("fetch post returned garbage: {e:?}"))?;
        if !value.is_object() {
            return Ok(None);
        }
        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| format!("fetch post returned garbage: {e:?}"))
    }

    async fn save_post(
        &self,
        id: &str,
        title: &str,
        body: &str,
        token: &str,
    ) -> Result<(), String> {
        self.client
            .post(self.endpoint(&format!("/post/{id}/edit"))?)
            .json(&json!({ "title": title, "body": body, "token": token }))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| format!("save post failed: {e:?}"))?;
        Ok(())
    }

    async fn delete_post(&self, id: &str, token: &str) -> Result<String, String> {
        let response = self
            .client
            .delete(self.endpoint(&format!("/post/{id}"))?)
            .json(&json!({ "token": token }))
            .send()
            .await
            .map_err(|e| format!("delete post failed: {e:?}"))?;
        response
            .text()
            .await
            .map_err(|e| format!("delete post returned garbage: {e:?}"))
    }

    async fn search(&self, term: &str) -> Result<Vec<Post>, String> {
        let response = self
            .client
            .post(self.endpoint("/search")?)
            .json(&json!({ "searchTerm": term }))
            .send()
            .await
            .map_err(|e| format!("search failed: {e:?}"))?;
        response
            .json()
            .await
            .map_err(|e| format!("search returned garbage: {e:?}"))
    }

    async fn profile_posts(&self, username: &str) -> Result<Vec<Post>, String> {
        let response = self
            .client
            .get(self.endpoint(&format!("/profile/{username}/posts"))?)
            .send()
            .await
            .map_err(|e| format!("profile posts failed: {e:?}"))?;
        response
            .json()
            .await
            .map_err(|e| format!("profile posts returned garbage: {e:?}"))
    }

    async fn profile_following(&self, username: &str) -> Result<Vec<Follower>, String> {
        let response = self
            .client
            .get(self.endpoint(&format!("/profile/{username}/following"))?)
            .send()
            .await
            .map_err(|e| format!("profile following failed: {e:?}"))?;
        response
            .json()
            .await
            .map_err(|e| format!("profile following returned garbage: {e:?}"))
    }
}
