//! Scripted in-memory transport
//!
//! Routes are keyed by verb and path. Each route holds a queue of responses:
//! responses are consumed in order and the last one is replayed for every
//! further call. Every request is recorded, whether or not it was scripted.

#![allow(clippy::module_name_repetitions)] // MockTransport is the natural name

use futures::future::BoxFuture;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use ticket_desk_client::{ApiError, ApiRequest, Method, Transport};

#[derive(Clone)]
struct Scripted {
    result: Result<Value, ApiError>,
    delay: Option<Duration>,
}

/// Transport double with scripted responses and call recording
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use ticket_desk_client::{ApiError, Method};
/// use ticket_desk_testing::MockTransport;
///
/// let transport = MockTransport::new();
/// transport.respond(Method::Get, "/tickets", json!([]));
/// transport.fail(Method::Get, "/users", ApiError::network("network down"));
/// assert_eq!(transport.call_count(), 0);
/// ```
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<(Method, String), VecDeque<Scripted>>>,
    calls: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    /// Creates a transport with no routes
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful payload for `method path`
    pub fn respond(&self, method: Method, path: &str, payload: Value) -> &Self {
        self.script(method, path, Ok(payload), None)
    }

    /// Queue a failure for `method path`
    pub fn fail(&self, method: Method, path: &str, error: ApiError) -> &Self {
        self.script(method, path, Err(error), None)
    }

    /// Queue a result that only settles after `delay`
    pub fn respond_after(
        &self,
        method: Method,
        path: &str,
        delay: Duration,
        result: Result<Value, ApiError>,
    ) -> &Self {
        self.script(method, path, result, Some(delay))
    }

    /// Every request received so far, in order
    #[must_use]
    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of requests received so far
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Number of requests received for `method path`
    #[must_use]
    pub fn calls_to(&self, method: Method, path: &str) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    /// Forget recorded calls, keep the routes
    pub fn clear_calls(&self) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn script(
        &self,
        method: Method,
        path: &str,
        result: Result<Value, ApiError>,
        delay: Option<Duration>,
    ) -> &Self {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry((method, path.to_string()))
            .or_default()
            .push_back(Scripted { result, delay });
        self
    }

    fn next_response(&self, request: &ApiRequest) -> Scripted {
        let mut routes = self.routes.lock().unwrap_or_else(PoisonError::into_inner);
        let queue = routes.get_mut(&(request.method, request.path.clone()));

        match queue {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        }
        .unwrap_or_else(|| Scripted {
            result: Err(ApiError::from_status(
                404,
                "",
                &format!("No mock response for {} {}", request.method, request.path),
            )),
            delay: None,
        })
    }
}

impl Transport for MockTransport {
    fn send(&self, request: ApiRequest) -> BoxFuture<'_, Result<Value, ApiError>> {
        let scripted = self.next_response(&request);
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        Box::pin(async move {
            if let Some(delay) = scripted.delay {
                tokio::time::sleep(delay).await;
            }
            scripted.result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn queued_responses_are_consumed_then_replayed() {
        let transport = MockTransport::new();
        transport
            .respond(Method::Get, "/tickets", json!([1]))
            .respond(Method::Get, "/tickets", json!([2]));

        let request = ApiRequest::new(Method::Get, "/tickets");
        assert_eq!(transport.send(request.clone()).await, Ok(json!([1])));
        assert_eq!(transport.send(request.clone()).await, Ok(json!([2])));
        assert_eq!(transport.send(request).await, Ok(json!([2])));
        assert_eq!(transport.calls_to(Method::Get, "/tickets"), 3);
    }

    #[tokio::test]
    async fn unscripted_route_fails_and_is_recorded() {
        let transport = MockTransport::new();

        let result = transport.send(ApiRequest::new(Method::Put, "/tickets/1/complete")).await;

        assert_eq!(
            result.map_err(|e| e.status()),
            Err(Some(404))
        );
        assert_eq!(transport.call_count(), 1);
        transport.clear_calls();
        assert!(transport.calls().is_empty());
    }
}
