//! Persisted client state (current user and cart)
//!
//! A small key/value store holding JSON values. `FileStore` keeps every key
//! in one JSON object on disk; `MemoryStore` is for tests and throwaway
//! sessions.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use serde_json::{Map, Value};

use super::cart::Cart;
use super::error::ClientResult;
use crate::interfaces::http::modules::users::UserDto;

pub const CURRENT_USER_KEY: &str = "currentUser";
pub const CART_KEY: &str = "cart";

pub trait StateStore: Send + Sync {
    fn get(&self, key: &str) -> ClientResult<Option<Value>>;
    fn set(&self, key: &str, value: Value) -> ClientResult<()>;
    fn remove(&self, key: &str) -> ClientResult<()>;
}

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, Value>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> ClientResult<Option<Value>> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> ClientResult<()> {
        self.entries().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> ClientResult<()> {
        self.entries().remove(key);
        Ok(())
    }
}

/// JSON object file. Writes go to a sibling temp file that is then renamed
/// over the original.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> ClientResult<Map<String, Value>> {
        match std::fs::read(&self.path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Map::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, entries: &Map<String, Value>) -> ClientResult<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> ClientResult<Option<Value>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: Value) -> ClientResult<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value);
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> ClientResult<()> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}

/// `~/.config/tienda-online/client-state.json`
pub fn default_state_path() -> PathBuf {
    dirs_next::config_dir()
        .map(|dir| dir.join("tienda-online").join("client-state.json"))
        .unwrap_or_else(|| PathBuf::from("client-state.json"))
}

/// Typed view over a [`StateStore`]
pub struct ClientState<S> {
    store: S,
}

impl<S: StateStore> ClientState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn current_user(&self) -> ClientResult<Option<UserDto>> {
        match self.store.get(CURRENT_USER_KEY)? {
            Some(Value::Null) | None => Ok(None),
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
        }
    }

    pub fn set_current_user(&self, user: &UserDto) -> ClientResult<()> {
        self.store.set(CURRENT_USER_KEY, serde_json::to_value(user)?)
    }

    pub fn clear_current_user(&self) -> ClientResult<()> {
        self.store.remove(CURRENT_USER_KEY)
    }

    /// Missing key reads as an empty cart.
    pub fn cart(&self) -> ClientResult<Cart> {
        match self.store.get(CART_KEY)? {
            Some(Value::Null) | None => Ok(Cart::default()),
            Some(value) => Ok(serde_json::from_value(value)?),
        }
    }

    pub fn save_cart(&self, cart: &Cart) -> ClientResult<()> {
        self.store.set(CART_KEY, serde_json::to_value(cart)?)
    }

    pub fn clear_cart(&self) -> ClientResult<()> {
        self.store.remove(CART_KEY)
    }
}
