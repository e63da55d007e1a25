//! Shared test doubles: a programmable in-memory backend and an environment
//! harness wired to inspectable channels.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::components::app::AppAction;
use crate::environment::model::{Api, Model};
use crate::environment::repository::Repository;
use crate::environment::types::{Author, Follower, Post};
use crate::environment::{AppHandle, Environment, Navigator, Prompter};

#[derive(Default)]
pub(crate) struct MockApi {
    pub posts: Mutex<HashMap<String, Post>>,
    pub search_results: Mutex<Vec<Post>>,
    /// Per-term overrides, checked before `search_results`.
    pub search_by_term: Mutex<HashMap<String, Vec<Post>>>,
    pub profile_posts: Mutex<HashMap<String, Vec<Post>>>,
    pub following: Mutex<HashMap<String, Vec<Follower>>>,
    pub session_valid: AtomicBool,
    pub delete_response: Mutex<String>,
    /// Injected latency before every response.
    pub delay: Mutex<Duration>,
    /// When set, every call fails with a transport error.
    pub offline: AtomicBool,
    pub calls: Mutex<Vec<String>>,
}

impl MockApi {
    pub fn new() -> Self {
        let api = Self::default();
        api.session_valid.store(true, Ordering::SeqCst);
        *api.delete_response.lock().unwrap() = "Success".to_string();
        api
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = delay;
    }

    pub fn insert_post(&self, post: Post) {
        self.posts.lock().unwrap().insert(post.id.clone(), post);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn respond(&self, call: String) -> Result<(), String> {
        let delay = *self.delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.calls.lock().unwrap().push(call);
        if self.offline.load(Ordering::SeqCst) {
            return Err("network down".to_string());
        }
        Ok(())
    }
}

#[async_trait]
impl Api for MockApi {
    async fn validate_session(&self, token: &str) -> Result<bool, String> {
        self.respond(format!("checkToken:{token}")).await?;
        Ok(self.session_valid.load(Ordering::SeqCst))
    }

    async fn fetch_post(&self, id: &str) -> Result<Option<Post>, String> {
        self.respond(format!("fetchPost:{id}")).await?;
        Ok(self.posts.lock().unwrap().get(id).cloned())
    }

    async fn save_post(
        &self,
        id: &str,
        title: &str,
        _body: &str,
        _token: &str,
    ) -> Result<(), String> {
        self.respond(format!("savePost:{id}:{title}")).await?;
        Ok(())
    }

    async fn delete_post(&self, id: &str, _token: &str) -> Result<String, String> {
        self.respond(format!("deletePost:{id}")).await?;
        Ok(self.delete_response.lock().unwrap().clone())
    }

    async fn search(&self, term: &str) -> Result<Vec<Post>, String> {
        self.respond(format!("search:{term}")).await?;
        if let Some(results) = self.search_by_term.lock().unwrap().get(term) {
            return Ok(results.clone());
        }
        Ok(self.search_results.lock().unwrap().clone())
    }

    async fn profile_posts(&self, username: &str) -> Result<Vec<Post>, String> {
        self.respond(format!("profilePosts:{username}")).await?;
        Ok(self
            .profile_posts
            .lock()
            .unwrap()
            .get(username)
            .cloned()
            .unwrap_or_default())
    }

    async fn profile_following(&self, username: &str) -> Result<Vec<Follower>, String> {
        self.respond(format!("profileFollowing:{username}")).await?;
        Ok(self
            .following
            .lock()
            .unwrap()
            .get(username)
            .cloned()
            .unwrap_or_default())
    }
}

pub(crate) struct TestEnv {
    pub environment: Environment,
    pub api: Arc<MockApi>,
    pub repository: Repository,
    pub app_actions: flume::Receiver<AppAction>,
    pub navigations: flume::Receiver<String>,
    pub confirm_answer: Arc<AtomicBool>,
    pub prompts: Arc<Mutex<Vec<String>>>,
    _dir: tempfile::TempDir,
}

impl TestEnv {
    pub fn flashes(&self) -> Vec<String> {
        self.app_actions
            .try_iter()
            .filter_map(|action| match action {
                AppAction::FlashMessage(message) => Some(message),
                _ => None,
            })
            .collect()
    }
}

pub(crate) fn test_environment() -> TestEnv {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir().expect("tempdir");
    let api = Arc::new(MockApi::new());
    let repository = Repository::open(dir.path().to_path_buf());
    let (app, app_actions) = AppHandle::new();
    let (navigator, navigations) = Navigator::new();
    let confirm_answer = Arc::new(AtomicBool::new(true));
    let prompts = Arc::new(Mutex::new(Vec::new()));
    let prompt = {
        let answer = confirm_answer.clone();
        let prompts = prompts.clone();
        Prompter::new(move |message| {
            prompts.lock().unwrap().push(message.to_string());
            answer.load(Ordering::SeqCst)
        })
    };
    let environment = Environment::new(
        Model::new(api.clone()),
        repository.clone(),
        app,
        navigator,
        prompt,
    );
    TestEnv {
        environment,
        api,
        repository,
        app_actions,
        navigations,
        confirm_answer,
        prompts,
        _dir: dir,
    }
}

pub(crate) fn post(id: &str, title: &str, author: &str) -> Post {
    Post {
        id: id.to_string(),
        title: title.to_string(),
        body: format!("{title} body"),
        author: Author {
            username: author.to_string(),
            avatar: format!("https://gravatar.com/{author}"),
        },
        created_date: chrono::Utc::now(),
    }
}
