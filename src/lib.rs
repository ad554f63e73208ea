//! Query-parameter middleware for request handlers.
//!
//! This crate provides thin layers that wrap a [`Handler`]:
//! - **Session persistence**: [`persist_params`] copies selected query
//!   parameters into the request's [`Session`] so later requests in the same
//!   browsing session can read them
//! - **Requirement guards**: [`require_all_params`], [`require_any_params`]
//!   and [`require_param_value`] reject a request with a 404 (or a custom
//!   fallback) before the handler runs when required parameters are missing
//!   or invalid
//! - **Custom guards**: [`RequirementFactory`] turns any validator function
//!   into a guard of the same shape
//!
//! # Core Types
//!
//! - [`Request`]: request id, [`QueryParams`] and [`Session`]
//! - [`Response`]: status code and plain-text body
//! - [`Handler`] / [`Layer`]: the middleware chaining model
//! - [`ParamNames`] / [`ValueChecks`]: requirement specifications, validated
//!   at construction time
//!
//! # Examples
//!
//! ```
//! use param_guard::{
//!     persist_params, require_all_params, Handler, HandlerExt, Request, Response, StatusCode,
//! };
//!
//! let handler = (|request: &mut Request| {
//!     let page = request.query().get("page").unwrap_or("1");
//!     Response::ok(format!("page {}", page))
//! })
//! .with(&require_all_params(["page"]))
//! .with(&persist_params(["page", "sort"]));
//!
//! let mut request = Request::new("req-123").with_query_param("page", "4");
//! let response = handler.handle(&mut request);
//!
//! assert_eq!(response.status(), StatusCode::OK);
//! assert_eq!(response.body(), "page 4");
//! assert_eq!(request.session().get("page"), Some("4"));
//!
//! let response = handler.handle(&mut Request::new("req-124"));
//! assert_eq!(response.status(), StatusCode::NOT_FOUND);
//! assert_eq!(response.body(), "Missing required param(s): page");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::print_stdout, clippy::print_stderr, clippy::dbg_macro)]

mod error;
mod handler;
mod logging;
mod params;
mod persist;
mod request;
pub mod require;
mod response;
mod session;

#[cfg(test)]
mod test_utils;

pub use error::{Error, Violation, ViolationKind};
pub use handler::{Handler, HandlerExt, Layer};
pub use logging::RequestLog;
pub use params::{ParamNames, QueryParams};
pub use persist::{persist_params, PersistParams, Persisted};
pub use request::Request;
pub use require::{
    require_all_params, require_all_validator, require_any_params, require_any_validator,
    require_param_value, require_param_value_validator, Guarded, RequireParams,
    RequirementFactory, ValueChecks,
};
pub use response::{Response, StatusCode};
pub use session::{MemorySessionStore, Session};
