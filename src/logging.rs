use crate::error::Violation;

/// Request-scoped logging for the middleware layers.
///
/// `RequestLog` is obtained from `Request::log()` and borrows the request id,
/// so it cannot outlive the request. Every event carries the id as a
/// structured `request_id` field.
///
/// ```
/// # use param_guard::Request;
/// let request = Request::new("req-1");
/// request.log().persisted("page");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequestLog<'a> {
    request_id: &'a str,
}

impl<'a> RequestLog<'a> {
    /// Only `Request` hands these out.
    pub(crate) fn new(request_id: &'a str) -> Self {
        Self { request_id }
    }

    /// Returns the request ID associated with this logger.
    pub fn request_id(&self) -> &str {
        self.request_id
    }

    /// Records that query parameter `param` was copied into the session.
    pub fn persisted(&self, param: &str) {
        tracing::debug!(
            request_id = %self.request_id,
            param,
            "persisted query param to session"
        );
    }

    /// Records that a guard let the request through.
    pub fn passed(&self) {
        tracing::debug!(request_id = %self.request_id, "query requirements satisfied");
    }

    /// Records that a guard rejected the request.
    pub fn rejected(&self, violation: &Violation) {
        tracing::warn!(
            request_id = %self.request_id,
            kind = %violation.kind,
            "request rejected: {}",
            violation.message()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ViolationKind;

    #[test]
    fn events_do_not_require_a_subscriber() {
        let log = RequestLog::new("req-quiet");

        log.persisted("page");
        log.passed();
        log.rejected(&Violation::new(ViolationKind::Custom, "nope"));
        assert_eq!(log.request_id(), "req-quiet");
    }

    #[test]
    fn events_reach_an_installed_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let log = RequestLog::new("req-traced");
            log.persisted("");
            log.rejected(&Violation::new(
                ViolationKind::MissingParams {
                    names: vec!["a".to_string()],
                },
                "Missing required param(s): a",
            ));
        });
    }
}
