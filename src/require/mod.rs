//! Requirement guards: middleware that checks query parameters before the
//! wrapped handler runs.
//!
//! A [`RequirementFactory`] is built from a validator function. Each call to
//! [`RequirementFactory::require`] binds it to a requirement specification and
//! yields a [`RequireParams`] layer. The layer's handler ([`Guarded`]) runs the
//! validator on every request:
//!
//! ```text
//! Request
//!   ↓
//! validator(requirements, query)
//!   ├─ Ok(())          → wrapped handler
//!   └─ Err(violation)  → on_error() fallback, or 404 with violation message
//! ```
//!
//! Runtime failures never surface as `Err`; they become responses. Malformed
//! requirement specifications are rejected at compile time.

mod spec;
mod validators;

use std::fmt;
use std::sync::Arc;

use crate::error::Violation;
use crate::handler::{Handler, Layer};
use crate::params::QueryParams;
use crate::request::Request;
use crate::response::Response;

pub use spec::{ValueCheck, ValueChecks, ValueChecksBuilder, ValuePredicate};
pub use validators::{
    require_all_params, require_all_validator, require_any_params, require_any_validator,
    require_param_value, require_param_value_validator,
};

/// Validator signature: checks `params` against requirements `R`.
pub type Validator<R> = dyn Fn(&R, &QueryParams) -> Result<(), Violation> + Send + Sync;

/// Fallback response producer used instead of the default 404.
pub type Fallback = dyn Fn() -> Response + Send + Sync;

/// Produces requirement layers that share one validator.
///
/// # Examples
///
/// ```
/// use param_guard::{
///     Handler, HandlerExt, ParamNames, QueryParams, Request, RequirementFactory, Response,
///     StatusCode, Violation, ViolationKind,
/// };
///
/// // At most one of the names may be present.
/// let exclusive = RequirementFactory::new(|names: &ParamNames, params: &QueryParams| {
///     if names.iter().filter(|n| params.contains(n)).count() <= 1 {
///         Ok(())
///     } else {
///         Err(Violation::new(
///             ViolationKind::Custom,
///             format!("Only one of {} is allowed", names.joined()),
///         ))
///     }
/// });
///
/// let handler = (|_: &mut Request| Response::ok("ok"))
///     .with(&exclusive.require(ParamNames::new(["id", "slug"])));
///
/// let mut request = Request::new("r")
///     .with_query_param("id", "1")
///     .with_query_param("slug", "x");
/// let response = handler.handle(&mut request);
///
/// assert_eq!(response.status(), StatusCode::NOT_FOUND);
/// assert_eq!(response.body(), "Only one of id,slug is allowed");
/// ```
///
/// The validator must be callable:
///
/// ```compile_fail
/// use param_guard::{ParamNames, RequirementFactory};
///
/// let factory: RequirementFactory<ParamNames> = RequirementFactory::new("not a function");
/// ```
pub struct RequirementFactory<R> {
    validator: Arc<Validator<R>>,
}

impl<R> RequirementFactory<R> {
    /// Creates a factory around `validator`.
    pub fn new<V>(validator: V) -> Self
    where
        V: Fn(&R, &QueryParams) -> Result<(), Violation> + Send + Sync + 'static,
    {
        Self {
            validator: Arc::new(validator),
        }
    }

    /// Binds the validator to `requirements`, producing a layer.
    pub fn require(&self, requirements: R) -> RequireParams<R> {
        RequireParams {
            requirements: Arc::new(requirements),
            validator: Arc::clone(&self.validator),
            on_error: None,
        }
    }
}

impl<R> Clone for RequirementFactory<R> {
    fn clone(&self) -> Self {
        Self {
            validator: Arc::clone(&self.validator),
        }
    }
}

impl<R> fmt::Debug for RequirementFactory<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequirementFactory").finish_non_exhaustive()
    }
}

/// Layer that rejects requests whose query fails a requirement.
pub struct RequireParams<R> {
    requirements: Arc<R>,
    validator: Arc<Validator<R>>,
    on_error: Option<Arc<Fallback>>,
}

impl<R> RequireParams<R> {
    /// Replaces the default 404 response with `fallback`.
    ///
    /// # Examples
    ///
    /// ```
    /// use param_guard::{require_any_params, Handler, HandlerExt, Request, Response, StatusCode};
    ///
    /// let guard = require_any_params(["id", "slug"])
    ///     .on_error(|| Response::new(StatusCode::FOUND, "/search"));
    /// let handler = (|_: &mut Request| Response::ok("detail")).with(&guard);
    ///
    /// let response = handler.handle(&mut Request::new("r"));
    /// assert_eq!(response.status(), StatusCode::FOUND);
    /// assert_eq!(response.body(), "/search");
    /// ```
    pub fn on_error<F>(mut self, fallback: F) -> Self
    where
        F: Fn() -> Response + Send + Sync + 'static,
    {
        self.on_error = Some(Arc::new(fallback));
        self
    }

    /// Returns the requirement specification.
    pub fn requirements(&self) -> &R {
        &self.requirements
    }

    /// Runs the validator against `params`.
    pub fn check(&self, params: &QueryParams) -> Result<(), Violation> {
        (self.validator)(&self.requirements, params)
    }

    /// Produces the response for a failed check.
    fn reject(&self, violation: &Violation) -> Response {
        match &self.on_error {
            Some(fallback) => fallback(),
            None => Response::not_found(violation.message()),
        }
    }
}

impl<R> Clone for RequireParams<R> {
    fn clone(&self) -> Self {
        Self {
            requirements: Arc::clone(&self.requirements),
            validator: Arc::clone(&self.validator),
            on_error: self.on_error.clone(),
        }
    }
}

impl<R: fmt::Debug> fmt::Debug for RequireParams<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequireParams")
            .field("requirements", &self.requirements)
            .field("on_error", &self.on_error.is_some())
            .finish_non_exhaustive()
    }
}

impl<R, H: Handler> Layer<H> for RequireParams<R> {
    type Handler = Guarded<R, H>;

    fn layer(&self, inner: H) -> Self::Handler {
        Guarded {
            guard: self.clone(),
            inner,
        }
    }
}

/// A handler wrapped by [`RequireParams`].
pub struct Guarded<R, H> {
    guard: RequireParams<R>,
    inner: H,
}

impl<R, H: Handler> Handler for Guarded<R, H> {
    fn handle(&self, request: &mut Request) -> Response {
        match self.guard.check(request.query()) {
            Ok(()) => {
                request.log().passed();
                self.inner.handle(request)
            }
            Err(violation) => {
                request.log().rejected(&violation);
                self.guard.reject(&violation)
            }
        }
    }
}

impl<R, H: Clone> Clone for Guarded<R, H> {
    fn clone(&self) -> Self {
        Self {
            guard: self.guard.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<R: fmt::Debug, H> fmt::Debug for Guarded<R, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guarded")
            .field("guard", &self.guard)
            .finish_non_exhaustive()
    }
}
