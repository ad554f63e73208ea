use crate::logging::RequestLog;
use crate::params::QueryParams;
use crate::session::Session;

/// An incoming request as seen by middleware and handlers.
///
/// `Request` holds simple, owned data so it does not depend on any specific
/// framework's request type. A framework integration builds one from its own
/// request (request id, parsed query string, loaded session), runs the handler
/// chain, then takes the session back with [`Request::into_session`] to save
/// it.
///
/// # Examples
///
/// ```
/// use param_guard::{Request, Session};
///
/// let request = Request::new("req-001")
///     .with_query_param("page", "3")
///     .with_session(Session::new());
///
/// assert_eq!(request.request_id(), "req-001");
/// assert_eq!(request.query().get("page"), Some("3"));
/// ```
#[derive(Debug, Clone)]
pub struct Request {
    request_id: String,
    query: QueryParams,
    session: Session,
}

impl Request {
    /// Creates a request with the given id, no query parameters and an
    /// empty session.
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            query: QueryParams::new(),
            session: Session::new(),
        }
    }

    /// Adds a query parameter.
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key, value);
        self
    }

    /// Replaces all query parameters.
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Attaches the session loaded for this browsing session.
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Returns the request id.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Returns the query parameters.
    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    /// Returns the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the session for writing.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Consumes the request, returning its session so the host can save it.
    pub fn into_session(self) -> Session {
        self.session
    }

    /// Returns a logger that tags every event with this request's id.
    pub fn log(&self) -> RequestLog<'_> {
        RequestLog::new(&self.request_id)
    }
}
