//! Session persister middleware.
//!
//! Copies selected query parameters into the session so later requests in the
//! same browsing session can read them, then always calls the wrapped
//! handler.

use std::sync::Arc;

use crate::handler::{Handler, Layer};
use crate::params::ParamNames;
use crate::request::Request;
use crate::response::Response;

/// Builds a [`PersistParams`] layer for the given parameter names.
///
/// An empty `names` list yields a layer that only delegates.
///
/// # Examples
///
/// ```
/// use param_guard::{persist_params, Handler, HandlerExt, Request, Response};
///
/// let handler = (|request: &mut Request| {
///     Response::ok(request.session().get("lang").unwrap_or("none").to_string())
/// })
/// .with(&persist_params(["lang", "theme"]));
///
/// let mut request = Request::new("req-1").with_query_param("lang", "fr");
/// let response = handler.handle(&mut request);
///
/// assert_eq!(response.body(), "fr");
/// assert!(!request.session().contains("theme"));
/// ```
pub fn persist_params<I, S>(names: I) -> PersistParams
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    PersistParams::new(ParamNames::new(names))
}

/// Layer that writes configured query parameters into the session.
///
/// Only parameters present in the query are written; absent ones leave the
/// session untouched, including any value stored by an earlier request.
#[derive(Debug, Clone)]
pub struct PersistParams {
    names: Arc<ParamNames>,
}

impl PersistParams {
    /// Creates a persister for `names`.
    pub fn new(names: ParamNames) -> Self {
        Self {
            names: Arc::new(names),
        }
    }

    /// Returns the configured parameter names.
    pub fn names(&self) -> &ParamNames {
        &self.names
    }

    /// Copies the present parameters into the request's session.
    ///
    /// Returns how many keys were written.
    pub fn apply(&self, request: &mut Request) -> usize {
        let mut persisted = 0;

        for name in self.names.iter() {
            if let Some(value) = request.query().get(name).map(str::to_owned) {
                request.session_mut().insert(name, value);
                request.log().persisted(name);
                persisted += 1;
            }
        }

        persisted
    }
}

impl<H: Handler> Layer<H> for PersistParams {
    type Handler = Persisted<H>;

    fn layer(&self, inner: H) -> Self::Handler {
        Persisted {
            persister: self.clone(),
            inner,
        }
    }
}

/// A handler wrapped by [`PersistParams`].
#[derive(Debug, Clone)]
pub struct Persisted<H> {
    persister: PersistParams,
    inner: H,
}

impl<H: Handler> Handler for Persisted<H> {
    fn handle(&self, request: &mut Request) -> Response {
        self.persister.apply(request);
        self.inner.handle(request)
    }
}
