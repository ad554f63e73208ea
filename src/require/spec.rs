//! Value-check requirement specifications.

use std::fmt;
use std::sync::Arc;

/// Predicate applied to a parameter's value, or `None` when it is absent.
pub type ValuePredicate = dyn Fn(Option<&str>) -> bool + Send + Sync;

/// A single (name, predicate) pair.
#[derive(Clone)]
pub struct ValueCheck {
    name: String,
    predicate: Arc<ValuePredicate>,
}

impl ValueCheck {
    /// Returns the parameter name this check applies to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Applies the predicate to `value`.
    pub fn check(&self, value: Option<&str>) -> bool {
        (self.predicate)(value)
    }
}

impl fmt::Debug for ValueCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueCheck")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// An ordered list of value checks.
///
/// Several checks may target the same parameter; all of them must pass.
/// Each pair is a name and a closure, so a malformed pair or a
/// non-callable check cannot be expressed.
///
/// # Examples
///
/// ```
/// use param_guard::ValueChecks;
///
/// let checks = ValueChecks::builder()
///     .check("page", |v| v.map_or(false, |s| s.parse::<u32>().is_ok()))
///     .check("sort", |v| matches!(v, None | Some("asc") | Some("desc")))
///     .build();
///
/// assert_eq!(checks.len(), 2);
/// ```
///
/// The second element must be callable:
///
/// ```compile_fail
/// use param_guard::ValueChecks;
///
/// let checks = ValueChecks::builder().check("page", "1").build();
/// ```
#[derive(Debug, Clone)]
pub struct ValueChecks {
    checks: Vec<ValueCheck>,
}

impl ValueChecks {
    /// Starts an empty builder.
    pub fn builder() -> ValueChecksBuilder {
        ValueChecksBuilder::default()
    }

    /// Builds checks from homogeneous `(name, predicate)` pairs.
    ///
    /// Handy with function pointers; use [`ValueChecks::builder`] to mix
    /// closures of different types.
    ///
    /// # Examples
    ///
    /// ```
    /// use param_guard::ValueChecks;
    ///
    /// fn is_one(v: Option<&str>) -> bool {
    ///     v == Some("1")
    /// }
    ///
    /// let checks = ValueChecks::from_pairs([("a", is_one), ("b", is_one)]);
    /// assert_eq!(checks.len(), 2);
    /// ```
    pub fn from_pairs<I, S, F>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, F)>,
        S: Into<String>,
        F: Fn(Option<&str>) -> bool + Send + Sync + 'static,
    {
        pairs
            .into_iter()
            .fold(Self::builder(), |builder, (name, predicate)| {
                builder.check(name, predicate)
            })
            .build()
    }

    /// Iterates over the checks in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ValueCheck> {
        self.checks.iter()
    }

    /// Returns the number of checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns true if no check was added.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

/// Builder for [`ValueChecks`].
#[derive(Default)]
pub struct ValueChecksBuilder {
    checks: Vec<ValueCheck>,
}

impl ValueChecksBuilder {
    /// Adds a check for `name`.
    pub fn check<F>(mut self, name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(Option<&str>) -> bool + Send + Sync + 'static,
    {
        self.checks.push(ValueCheck {
            name: name.into(),
            predicate: Arc::new(predicate),
        });
        self
    }

    /// Returns the checks in the order they were added.
    pub fn build(self) -> ValueChecks {
        ValueChecks {
            checks: self.checks,
        }
    }
}

impl fmt::Debug for ValueChecksBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueChecksBuilder")
            .field("checks", &self.checks)
            .finish()
    }
}
