//! Handlers and the layers that wrap them.
//!
//! A [`Handler`] turns a request into a response. A [`Layer`] takes a handler
//! and returns a new handler with the same signature, adding behavior around
//! it (persisting session state, rejecting requests with missing parameters).
//! Layers compose by nesting:
//!
//! ```text
//! Request
//!   ↓
//! outermost layer   (e.g. PersistParams)
//!   ↓
//! inner layer       (e.g. RequireParams, may short-circuit with 404)
//!   ↓
//! application handler
//!   ↓
//! Response
//! ```

use crate::request::Request;
use crate::response::Response;

/// Something that can answer a request.
///
/// Implemented for every `Fn(&mut Request) -> Response`, so plain closures and
/// functions are handlers.
///
/// # Examples
///
/// ```
/// use param_guard::{Handler, Request, Response};
///
/// let hello = |request: &mut Request| {
///     Response::ok(format!("hello from {}", request.request_id()))
/// };
///
/// let response = hello.handle(&mut Request::new("req-1"));
/// assert_eq!(response.body(), "hello from req-1");
/// ```
pub trait Handler {
    /// Handles `request`, possibly mutating its session.
    fn handle(&self, request: &mut Request) -> Response;
}

impl<F> Handler for F
where
    F: Fn(&mut Request) -> Response,
{
    fn handle(&self, request: &mut Request) -> Response {
        self(request)
    }
}

/// Wraps a handler in middleware.
///
/// A layer is configured once and can wrap any number of handlers; it is
/// borrowed, not consumed, by [`Layer::layer`].
pub trait Layer<H> {
    /// The wrapped handler type.
    type Handler: Handler;

    /// Returns `inner` wrapped by this layer.
    fn layer(&self, inner: H) -> Self::Handler;
}

/// Method-chaining helper for applying layers.
///
/// # Examples
///
/// ```
/// use param_guard::{
///     persist_params, require_all_params, Handler, HandlerExt, Request, Response, StatusCode,
/// };
///
/// let handler = (|_: &mut Request| Response::ok("listing"))
///     .with(&require_all_params(["page"]))
///     .with(&persist_params(["page"]));
///
/// let response = handler.handle(&mut Request::new("req-1"));
/// assert_eq!(response.status(), StatusCode::NOT_FOUND);
/// ```
pub trait HandlerExt: Handler + Sized {
    /// Wraps `self` in `layer`. The last layer applied runs first.
    fn with<L>(self, layer: &L) -> L::Handler
    where
        L: Layer<Self>,
    {
        layer.layer(self)
    }
}

impl<H: Handler> HandlerExt for H {}
