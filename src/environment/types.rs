use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Repository Types

/// The logged-in user's session record. All three fields are present while a
/// session exists and empty otherwise.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub token: Option<String>,
    pub username: Option<String>,
    pub avatar: Option<String>,
}

impl User {
    pub fn new(
        token: impl Into<String>,
        username: impl Into<String>,
        avatar: impl Into<String>,
    ) -> Self {
        Self {
            token: Some(token.into()),
            username: Some(username.into()),
            avatar: Some(avatar.into()),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.token.is_some() && self.username.is_some() && self.avatar.is_some()
    }
}

// Backend Types

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub username: String,
    pub avatar: String,
}

/// A post as the backend returns it. Read-only to this crate.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub body: String,
    pub author: Author,
    pub created_date: DateTime<Utc>,
}

/// One entry of a profile's following list.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Follower {
    pub username: String,
    pub avatar: String,
}

/// Global key events the shell forwards to whoever subscribed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyEvent {
    Escape,
    Other,
}
