use crate::environment::types::User;
use crate::runtime::RequestHandle;

/// One editable form field with its inline validation result.
#[derive(Clone, Debug, Default)]
pub struct Field {
    pub value: String,
    pub has_errors: bool,
    pub message: String,
}

/// State of one Post Editor instance: `Fetching → Ready → (Saving → Ready)*`,
/// with `not_found` absorbing when the backend has no such post.
#[derive(Clone, Debug)]
pub struct EditorState {
    pub id: String,
    /// The session user at mount time; the save token and the owner check
    /// both come from here.
    pub user: User,
    pub title: Field,
    pub body: Field,
    pub is_fetching: bool,
    pub is_saving: bool,
    pub not_found: bool,
    /// Increments once per validated submit; every increment issues exactly
    /// one save request.
    pub send_count: u32,
    pub(crate) fetch_request: Option<RequestHandle>,
    pub(crate) save_request: Option<RequestHandle>,
}

impl EditorState {
    pub fn new(id: impl Into<String>, user: User) -> Self {
        Self {
            id: id.into(),
            user,
            title: Field::default(),
            body: Field::default(),
            is_fetching: true,
            is_saving: false,
            not_found: false,
            send_count: 0,
            fetch_request: None,
            save_request: None,
        }
    }
}
