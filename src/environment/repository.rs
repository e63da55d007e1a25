use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{from_slice, to_string_pretty};

use super::types::User;

const SESSION_PATH: &str = "session.json";

/// Durable client storage. One document holds the three session slots
/// (token, username, avatar); they are written together on login, removed
/// together on logout, and read once at process start to seed the initial
/// session state. I/O failures are logged and never propagated.
#[derive(Clone)]
pub struct Repository {
    directory: PathBuf,
    session: Arc<Mutex<Option<User>>>,
}

impl Repository {
    pub fn new() -> Self {
        Self::open(data_directory())
    }

    pub fn open(directory: PathBuf) -> Self {
        let session = read(&directory, SESSION_PATH).ok().flatten();
        Self {
            directory,
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// The persisted user, if a full session record exists.
    pub fn stored_user(&self) -> Option<User> {
        let session = self.session.lock().ok()?;
        session.clone().filter(User::is_complete)
    }

    pub fn store_user(&self, user: &User) {
        let Ok(mut session) = self.session.lock() else {
            return;
        };
        *session = Some(user.clone());
        if let Err(e) = write(&self.directory, SESSION_PATH, user) {
            log::error!("Could not save session: {e:?}");
        }
    }

    pub fn clear_user(&self) {
        let Ok(mut session) = self.session.lock() else {
            return;
        };
        *session = None;
        let path = self.directory.join(SESSION_PATH);
        if !path.exists() {
            return;
        }
        if let Err(e) = std::fs::remove_file(&path) {
            log::error!("Could not clear session at {}: {e:?}", path.display());
        }
    }
}

fn read<T: DeserializeOwned>(directory: &PathBuf, name: &str) -> Result<Option<T>, String> {
    let data_path = directory.join(name);
    if !data_path.exists() {
        return Ok(None);
    };
    let data = std::fs::read(&data_path)
        .map_err(|e| format!("Could not read {}: {e:?}", data_path.display()))?;
    let obj: T =
        from_slice(&data).map_err(|e| format!("Could not parse {}: {e:?}", data_path.display()))?;
    Ok(Some(obj))
}

fn write<T: Serialize>(directory: &PathBuf, name: &str, value: &T) -> Result<(), String> {
    let data_path = directory.join(name);
    let data = to_string_pretty(&value).map_err(|e| format!("Could not serialize value: {e:?}"))?;
    std::fs::write(&data_path, data)
        .map_err(|e| format!("Could not write to {}: {e:?}", data_path.display()))?;
    Ok(())
}

fn data_directory() -> PathBuf {
    use directories_next::ProjectDirs;
    if let Some(proj_dirs) = ProjectDirs::from("com", "complexapp", "complexapp") {
        let dirs = proj_dirs.config_dir().to_path_buf();
        if !dirs.exists() {
            if let Err(e) = std::fs::create_dir_all(&dirs) {
                log::error!("Could not create directory {}: {e:?}", dirs.display());
                panic!("Couldn't find a folder to save data")
            }
        }
        dirs
    } else {
        panic!("Couldn't find a folder to save data")
    }
}
