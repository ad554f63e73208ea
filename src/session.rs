//! Session state that outlives a single request.
//!
//! [`Session`] is the per-browsing-session key-value map a request carries.
//! [`MemorySessionStore`] is a simple in-memory stand-in for the host
//! framework's session backend, used by tests and demos.

use std::cell::RefCell;
use std::collections::HashMap;

/// Key-value state scoped to one browsing session.
///
/// Every write sets the `modified` flag so the host knows the session must be
/// saved back to its store after the response is produced.
///
/// # Examples
///
/// ```
/// use param_guard::Session;
///
/// let mut session = Session::new();
/// assert!(!session.is_modified());
///
/// session.insert("lang", "en");
/// assert_eq!(session.get("lang"), Some("en"));
/// assert!(session.is_modified());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    values: HashMap<String, String>,
    modified: bool,
}

impl Session {
    /// Creates an empty, unmodified session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns true if `key` is stored.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Stores `value` under `key`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.modified = true;
        self.values.insert(key.into(), value.into())
    }

    /// Removes `key`, returning its value if it was stored.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let removed = self.values.remove(key);
        if removed.is_some() {
            self.modified = true;
        }
        removed
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(key, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if the session was written since it was loaded.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Clears the `modified` flag, typically after the host saved the session.
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }
}

impl<K, V> FromIterator<(K, V)> for Session
where
    K: Into<String>,
    V: Into<String>,
{
    /// Builds an unmodified session, as if loaded from a store.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            modified: false,
        }
    }
}

/// In-memory session store keyed by session key.
///
/// Sessions are loaded by value and saved back explicitly, mirroring how a
/// host framework loads a session before the handler runs and persists it
/// afterwards. Only modified sessions are written.
///
/// # Examples
///
/// ```
/// use param_guard::MemorySessionStore;
///
/// let store = MemorySessionStore::new();
///
/// let mut session = store.load("sess-1");
/// session.insert("theme", "dark");
/// store.save("sess-1", session);
///
/// assert_eq!(store.load("sess-1").get("theme"), Some("dark"));
/// assert!(store.load("sess-2").is_empty());
/// ```
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: RefCell<HashMap<String, Session>>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the session for `key`, or an empty one.
    pub fn load(&self, key: &str) -> Session {
        self.sessions.borrow().get(key).cloned().unwrap_or_default()
    }

    /// Saves `session` under `key` if it was modified.
    ///
    /// Returns true if the session was written.
    pub fn save(&self, key: &str, mut session: Session) -> bool {
        if !session.is_modified() {
            return false;
        }
        session.mark_saved();
        self.sessions.borrow_mut().insert(key.to_string(), session);
        true
    }

    /// Returns the number of stored sessions.
    pub fn len(&self) -> usize {
        self.sessions.borrow().len()
    }

    /// Returns true if no session has been saved.
    pub fn is_empty(&self) -> bool {
        self.sessions.borrow().is_empty()
    }
}
