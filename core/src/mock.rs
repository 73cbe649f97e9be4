//! Deterministic transport double for network-free tests.
//!
//! # Design
//! `MockTransport` implements `HttpTransport` without any I/O: it records
//! every request it receives and replays outcomes programmed up front.
//! Outcomes are consumed in order; the last one is replayed once the queue
//! runs dry, so a single canned response serves any number of identical
//! calls. Tests hold the transport behind an `Arc` and inspect `calls()`
//! after driving the client.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::http::{HttpRequest, HttpTransport, RawResponse, TransportError};

type Outcome = Result<RawResponse, TransportError>;

#[derive(Debug, Default)]
pub struct MockTransport {
    calls: Mutex<Vec<HttpRequest>>,
    outcomes: Mutex<VecDeque<Outcome>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport programmed with a single successful exchange.
    pub fn respond(status: u16, body: &str) -> Self {
        let transport = Self::new();
        transport.push_response(status, body);
        transport
    }

    /// A transport programmed with a single transport-level failure.
    pub fn fail(message: &str) -> Self {
        let transport = Self::new();
        transport.push_error(message);
        transport
    }

    pub fn push_response(&self, status: u16, body: &str) {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Ok(RawResponse {
                status,
                body: body.as_bytes().to_vec(),
            }));
    }

    pub fn push_error(&self, message: &str) {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Err(TransportError(message.to_string())));
    }

    /// Every request sent through this transport, in order.
    pub fn calls(&self) -> Vec<HttpRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl HttpTransport for MockTransport {
    fn send(&self, request: &HttpRequest) -> Result<RawResponse, TransportError> {
        self.calls.lock().unwrap().push(request.clone());

        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.len() > 1 {
            if let Some(outcome) = outcomes.pop_front() {
                return outcome;
            }
        }
        match outcomes.front() {
            Some(outcome) => outcome.clone(),
            None => Err(TransportError(
                "mock transport has no programmed outcome".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;

    fn request(url: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: url.to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    #[test]
    fn records_every_call() {
        let transport = MockTransport::respond(200, "ok");
        transport.send(&request("https://example.com/a")).unwrap();
        transport.send(&request("https://example.com/b")).unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].url, "https://example.com/a");
        assert_eq!(calls[1].url, "https://example.com/b");
    }

    #[test]
    fn replays_last_outcome_when_queue_is_exhausted() {
        let transport = MockTransport::respond(200, "same");
        let first = transport.send(&request("https://example.com")).unwrap();
        let second = transport.send(&request("https://example.com")).unwrap();
        assert_eq!(first.status, second.status);
        assert_eq!(first.body, second.body);
    }

    #[test]
    fn consumes_queued_outcomes_in_order() {
        let transport = MockTransport::new();
        transport.push_response(200, "first");
        transport.push_response(500, "second");

        assert_eq!(transport.send(&request("https://example.com")).unwrap().status, 200);
        assert_eq!(transport.send(&request("https://example.com")).unwrap().status, 500);
    }

    #[test]
    fn programmed_error_is_returned_verbatim() {
        let transport = MockTransport::fail("no route to host");
        let err = transport.send(&request("https://example.com")).unwrap_err();
        assert_eq!(err.to_string(), "no route to host");
    }

    #[test]
    fn unprogrammed_transport_fails() {
        let transport = MockTransport::new();
        assert!(transport.send(&request("https://example.com")).is_err());
    }
}
