//! Integration tests for middleware chains.
//!
//! These tests run complete request flows: the host loads a session, builds a
//! request, runs the layered handler, and saves the session afterwards.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use param_guard::{
    persist_params, require_all_params, require_any_params, require_param_value, Handler,
    HandlerExt, MemorySessionStore, Request, Response, StatusCode, ValueChecks,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn listing(request: &mut Request) -> Response {
    let page = request
        .query()
        .get("page")
        .or_else(|| request.session().get("page"))
        .unwrap_or("1");
    Response::ok(format!("page {}", page))
}

/// Simulates the host framework serving one request for `session_key`.
fn serve<H: Handler>(
    store: &MemorySessionStore,
    session_key: &str,
    handler: &H,
    request: Request,
) -> Response {
    let mut request = request.with_session(store.load(session_key));
    let response = handler.handle(&mut request);
    store.save(session_key, request.into_session());
    response
}

#[test]
fn require_all_params_delegates_or_lists_missing() {
    init_tracing();
    let handler = listing.with(&require_all_params(["a", "b"]));

    let mut both = Request::new("req-1")
        .with_query_param("a", "1")
        .with_query_param("b", "2");
    let response = handler.handle(&mut both);
    assert_eq!(response.status(), StatusCode::OK);

    let mut only_a = Request::new("req-2").with_query_param("a", "1");
    let response = handler.handle(&mut only_a);
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.body(), "Missing required param(s): b");

    let response = handler.handle(&mut Request::new("req-3"));
    assert_eq!(response.body(), "Missing required param(s): a,b");
}

#[test]
fn require_any_params_accepts_one_of_many() {
    init_tracing();
    let handler = listing.with(&require_any_params(["a", "b"]));

    let mut only_b = Request::new("req-1").with_query_param("b", "2");
    assert_eq!(handler.handle(&mut only_b).status(), StatusCode::OK);

    let response = handler.handle(&mut Request::new("req-2").with_query_param("c", "3"));
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.body(), "One of a,b is required");
}

#[test]
fn require_param_value_checks_values() {
    init_tracing();
    let checks = ValueChecks::builder()
        .check("a", |v| v == Some("1"))
        .build();
    let handler = listing.with(&require_param_value(checks));

    let mut good = Request::new("req-1").with_query_param("a", "1");
    assert_eq!(handler.handle(&mut good).status(), StatusCode::OK);

    let mut wrong = Request::new("req-2").with_query_param("a", "2");
    let response = handler.handle(&mut wrong);
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.body(), "Params: a have an invalid value");

    let response = handler.handle(&mut Request::new("req-3"));
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn fallback_response_replaces_404() {
    let guard = require_all_params(["id"]).on_error(|| Response::new(StatusCode::FOUND, "/"));
    let handler = listing.with(&guard);

    let response = handler.handle(&mut Request::new("req-1"));
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.body(), "/");
}

#[test]
fn rejected_request_never_reaches_handler() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let handler = (move |_: &mut Request| {
        seen.fetch_add(1, Ordering::SeqCst);
        Response::ok("done")
    })
    .with(&require_all_params(["token"]));

    handler.handle(&mut Request::new("req-1"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    handler.handle(&mut Request::new("req-2").with_query_param("token", "t"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn persisted_params_survive_across_requests() {
    init_tracing();
    let store = MemorySessionStore::new();
    let handler = listing.with(&persist_params(["page"]));

    let response = serve(
        &store,
        "browser-1",
        &handler,
        Request::new("req-1").with_query_param("page", "7"),
    );
    assert_eq!(response.body(), "page 7");

    // No query this time: the handler falls back to the session value.
    let response = serve(&store, "browser-1", &handler, Request::new("req-2"));
    assert_eq!(response.body(), "page 7");

    // A different browsing session does not see it.
    let response = serve(&store, "browser-2", &handler, Request::new("req-3"));
    assert_eq!(response.body(), "page 1");
}

#[test]
fn persister_runs_even_when_inner_guard_rejects() {
    let store = MemorySessionStore::new();
    let handler = listing
        .with(&require_all_params(["page", "sort"]))
        .with(&persist_params(["page"]));

    let response = serve(
        &store,
        "browser-1",
        &handler,
        Request::new("req-1").with_query_param("page", "2"),
    );

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(store.load("browser-1").get("page"), Some("2"));
}

#[test]
fn guard_outside_persister_blocks_persistence() {
    let store = MemorySessionStore::new();
    let handler = listing
        .with(&persist_params(["page"]))
        .with(&require_all_params(["page", "sort"]));

    serve(
        &store,
        "browser-1",
        &handler,
        Request::new("req-1").with_query_param("page", "2"),
    );

    assert!(store.is_empty());
}

#[test]
fn stacked_guards_report_outermost_failure_first() {
    let checks = ValueChecks::builder()
        .check("page", |v| v.map_or(false, |s| s.parse::<u32>().is_ok()))
        .build();
    let handler = listing
        .with(&require_param_value(checks))
        .with(&require_any_params(["page", "cursor"]));

    let response = handler.handle(&mut Request::new("req-1"));
    assert_eq!(response.body(), "One of page,cursor is required");

    let response = handler.handle(&mut Request::new("req-2").with_query_param("page", "x"));
    assert_eq!(response.body(), "Params: page have an invalid value");

    let response = handler.handle(&mut Request::new("req-3").with_query_param("page", "3"));
    assert_eq!(response.body(), "page 3");
}

#[test]
fn layers_are_shareable_across_handlers() {
    let guard = require_all_params(["q"]);
    let search = listing.with(&guard);
    let export = (|_: &mut Request| Response::ok("csv")).with(&guard);

    assert_eq!(search.handle(&mut Request::new("r1")).status(), StatusCode::NOT_FOUND);
    assert_eq!(export.handle(&mut Request::new("r2")).status(), StatusCode::NOT_FOUND);
    assert_eq!(
        export
            .handle(&mut Request::new("r3").with_query_param("q", "x"))
            .body(),
        "csv"
    );
}

#[test]
fn empty_requirement_lists_are_vacuous() {
    let none: [&str; 0] = [];

    let all = listing.with(&require_all_params(none));
    assert_eq!(all.handle(&mut Request::new("req-1")).body(), "page 1");

    let any = listing.with(&require_any_params(none));
    let response = any.handle(&mut Request::new("req-2").with_query_param("page", "2"));
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.body(), "One of  is required");

    let store = MemorySessionStore::new();
    let persist = listing.with(&persist_params(none));
    serve(
        &store,
        "browser-1",
        &persist,
        Request::new("req-3").with_query_param("page", "3"),
    );
    assert!(store.is_empty());
}

#[test]
fn empty_param_name_is_required_and_persisted() {
    let store = MemorySessionStore::new();
    let handler = (|_: &mut Request| Response::ok("ok"))
        .with(&persist_params([""]))
        .with(&require_all_params([""]));

    let response = serve(&store, "browser-1", &handler, Request::new("req-1"));
    assert_eq!(response.body(), "Missing required param(s): ");

    let response = serve(
        &store,
        "browser-1",
        &handler,
        Request::new("req-2").with_query_param("", "5"),
    );
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.load("browser-1").get(""), Some("5"));
}
