//! Correlation identifier carried by every inventory and clock-in request.
//!
//! The trace middleware puts a [`TraceId`] in task-local scope. Errors built
//! while it is in scope pick it up, so the `trace-id` header, the JSON error
//! body and the log lines all agree. Spawned tasks start without one.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

task_local! {
    pub(crate) static TRACE_ID: TraceId;
}

/// UUID identifying one request through the service.
///
/// # Examples
/// ```
/// use backend::TraceId;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let id: TraceId = "00000000-0000-0000-0000-000000000000".parse().expect("uuid");
/// let seen = TraceId::scope(id, async { TraceId::current() }).await;
/// assert_eq!(seen, Some(id));
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Fresh random identifier for a request that arrived without one.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Identifier of the request being served, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        TRACE_ID.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` as the current identifier.
    pub async fn scope<Fut: Future>(trace_id: TraceId, fut: Fut) -> Fut::Output {
        TRACE_ID.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Error;

    #[tokio::test]
    async fn errors_raised_in_scope_carry_the_identifier() {
        let id = TraceId::generate();
        let error = TraceId::scope(id, async { Error::not_found("Item not found") }).await;
        assert_eq!(error.trace_id(), Some(id.to_string().as_str()));
    }

    #[tokio::test]
    async fn errors_raised_out_of_scope_have_none() {
        assert!(TraceId::current().is_none());
        assert_eq!(Error::not_found("Item not found").trace_id(), None);
    }

    #[tokio::test]
    async fn spawned_tasks_do_not_inherit_scope() {
        let id = TraceId::generate();
        let seen = TraceId::scope(id, async {
            tokio::spawn(async { TraceId::current() })
                .await
                .expect("task completes")
        })
        .await;
        assert_eq!(seen, None);
    }

    #[test]
    fn header_values_must_be_uuids() {
        assert!("not-a-uuid".parse::<TraceId>().is_err());
        let parsed: TraceId = "00000000-0000-0000-0000-000000000000"
            .parse()
            .expect("nil uuid");
        assert_eq!(parsed.to_string(), Uuid::nil().to_string());
    }
}
