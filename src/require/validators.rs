//! The built-in validators and their ready-made guards.

use crate::error::{Violation, ViolationKind};
use crate::params::{ParamNames, QueryParams};

use super::{RequireParams, RequirementFactory, ValueChecks};

/// Passes when every name in `requirements` is present in `params`.
///
/// The violation lists only the missing names, in declaration order.
///
/// # Examples
///
/// ```
/// use param_guard::{require_all_validator, ParamNames, QueryParams};
///
/// let names = ParamNames::new(["a", "b", "c"]);
/// let params: QueryParams = [("b", "2")].into_iter().collect();
///
/// let violation = require_all_validator(&names, &params).unwrap_err();
/// assert_eq!(violation.message(), "Missing required param(s): a,c");
/// ```
pub fn require_all_validator(
    requirements: &ParamNames,
    params: &QueryParams,
) -> Result<(), Violation> {
    let missing: Vec<String> = requirements
        .iter()
        .filter(|name| !params.contains(name))
        .map(str::to_string)
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    let message = format!("Missing required param(s): {}", missing.join(","));
    Err(Violation::new(
        ViolationKind::MissingParams { names: missing },
        message,
    ))
}

/// Passes when at least one name in `requirements` is present in `params`.
///
/// The violation lists every candidate name. [`ParamNames`] drops repeated
/// names, so `["a", "a", "b"]` is reported as `One of a,b is required`. An
/// empty list never passes and is reported as `One of  is required`.
///
/// # Examples
///
/// ```
/// use param_guard::{require_any_validator, ParamNames, QueryParams};
///
/// let names = ParamNames::new(["a", "a", "b"]);
/// let violation = require_any_validator(&names, &QueryParams::new()).unwrap_err();
/// assert_eq!(violation.message(), "One of a,b is required");
/// ```
pub fn require_any_validator(
    requirements: &ParamNames,
    params: &QueryParams,
) -> Result<(), Violation> {
    if requirements.iter().any(|name| params.contains(name)) {
        return Ok(());
    }

    Err(Violation::new(
        ViolationKind::NoneOfParams {
            names: requirements.iter().map(str::to_string).collect(),
        },
        format!("One of {} is required", requirements.joined()),
    ))
}

/// Passes when every check's predicate accepts its parameter's value.
///
/// Absent parameters are passed to the predicate as `None`. The violation
/// lists each failing name once, in declaration order; names whose checks all
/// passed are not reported.
pub fn require_param_value_validator(
    requirements: &ValueChecks,
    params: &QueryParams,
) -> Result<(), Violation> {
    let mut failing: Vec<String> = Vec::new();
    for check in requirements.iter() {
        if !check.check(params.get(check.name())) && !failing.iter().any(|f| f == check.name()) {
            failing.push(check.name().to_string());
        }
    }

    if failing.is_empty() {
        return Ok(());
    }

    let message = format!("Params: {} have an invalid value", failing.join(","));
    Err(Violation::new(
        ViolationKind::InvalidValue { names: failing },
        message,
    ))
}

/// Guard requiring every one of `names`.
///
/// An empty `names` list is always satisfied.
///
/// # Examples
///
/// ```
/// use param_guard::{require_all_params, Handler, HandlerExt, Request, Response, StatusCode};
///
/// let handler = (|_: &mut Request| Response::ok("ok"))
///     .with(&require_all_params(["a", "b"]));
///
/// let mut complete = Request::new("r1").with_query_param("a", "1").with_query_param("b", "2");
/// assert_eq!(handler.handle(&mut complete).status(), StatusCode::OK);
///
/// let mut partial = Request::new("r2").with_query_param("a", "1");
/// let response = handler.handle(&mut partial);
/// assert_eq!(response.status(), StatusCode::NOT_FOUND);
/// assert_eq!(response.body(), "Missing required param(s): b");
/// ```
///
/// A single string is not a list of names:
///
/// ```compile_fail
/// use param_guard::require_all_params;
///
/// let guard = require_all_params("a");
/// ```
pub fn require_all_params<I, S>(names: I) -> RequireParams<ParamNames>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    RequirementFactory::new(require_all_validator).require(ParamNames::new(names))
}

/// Guard requiring at least one of `names`.
///
/// An empty `names` list is never satisfied.
///
/// # Examples
///
/// ```
/// use param_guard::{require_any_params, Handler, HandlerExt, Request, Response, StatusCode};
///
/// let handler = (|_: &mut Request| Response::ok("ok"))
///     .with(&require_any_params(["a", "b"]));
///
/// let mut only_b = Request::new("r1").with_query_param("b", "2");
/// assert_eq!(handler.handle(&mut only_b).status(), StatusCode::OK);
///
/// let response = handler.handle(&mut Request::new("r2"));
/// assert_eq!(response.body(), "One of a,b is required");
/// ```
pub fn require_any_params<I, S>(names: I) -> RequireParams<ParamNames>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    RequirementFactory::new(require_any_validator).require(ParamNames::new(names))
}

/// Guard requiring every value check in `checks` to pass.
///
/// # Examples
///
/// ```
/// use param_guard::{require_param_value, Handler, HandlerExt, Request, Response, StatusCode, ValueChecks};
///
/// let checks = ValueChecks::builder()
///     .check("a", |v| v == Some("1"))
///     .build();
/// let handler = (|_: &mut Request| Response::ok("ok")).with(&require_param_value(checks));
///
/// let mut good = Request::new("r1").with_query_param("a", "1");
/// assert_eq!(handler.handle(&mut good).status(), StatusCode::OK);
///
/// let mut bad = Request::new("r2").with_query_param("a", "2");
/// let response = handler.handle(&mut bad);
/// assert_eq!(response.status(), StatusCode::NOT_FOUND);
/// assert_eq!(response.body(), "Params: a have an invalid value");
/// ```
pub fn require_param_value(checks: ValueChecks) -> RequireParams<ValueChecks> {
    RequirementFactory::new(require_param_value_validator).require(checks)
}
