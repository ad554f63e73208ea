//! Query parameters and lists of parameter names.

use std::collections::HashMap;

/// Query-string parameters of a single request.
///
/// Keys are unique; inserting an existing key replaces its value. The host
/// framework fills this in when it builds a [`Request`](crate::Request).
///
/// # Examples
///
/// ```
/// use param_guard::QueryParams;
///
/// let params: QueryParams = [("page", "2"), ("sort", "name")].into_iter().collect();
///
/// assert_eq!(params.get("page"), Some("2"));
/// assert!(params.contains("sort"));
/// assert!(!params.contains("filter"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: HashMap<String, String>,
}

impl QueryParams {
    /// Creates an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, replacing any previous value under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Returns the value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns true if `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the query string carried no parameters.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(key, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// An ordered, deduplicated list of query parameter names.
///
/// Used both by the session persister and by the presence-checking
/// requirement guards. Repeated names keep their first position. Empty lists
/// and the empty name are accepted: an empty list is vacuously satisfied by
/// "all" checks and never satisfied by "any" checks.
///
/// # Examples
///
/// ```
/// use param_guard::ParamNames;
///
/// let names = ParamNames::new(["page", "sort", "page"]);
/// assert_eq!(names.iter().collect::<Vec<_>>(), ["page", "sort"]);
/// ```
///
/// A single string is not a list of names:
///
/// ```compile_fail
/// use param_guard::ParamNames;
///
/// let names = ParamNames::new("page");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamNames {
    names: Vec<String>,
}

impl ParamNames {
    /// Builds a name list from any sequence of strings.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            // Deduplicate: only add if not already present
            if !deduped.contains(&name) {
                deduped.push(name);
            }
        }

        Self { names: deduped }
    }

    /// Iterates over the names in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Returns the number of distinct names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no names were given.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the names joined with `,`, as used in client-facing messages.
    pub fn joined(&self) -> String {
        self.names.join(",")
    }
}
