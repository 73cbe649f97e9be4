//! Transport seam between request construction and network execution.
//!
//! # Design
//! `HttpRequest` and `RawResponse` describe an exchange as plain data, so
//! the `Client` never depends on a concrete HTTP library's types. The
//! `HttpTransport` trait is the single extension point: the production
//! implementation (`UreqTransport`) performs real I/O, while tests swap in
//! `mock::MockTransport` to record calls and replay canned outcomes.
//!
//! All fields use owned types (`String`, `Vec`) so values can be recorded
//! and asserted on after the request has been sent.

use std::fmt;

/// HTTP method for a request. Only the shapes the workflows need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// A fully built request, ready to hand to a transport.
///
/// `url` is absolute and already carries the encoded query string; `headers`
/// hold the client's default set plus `content-type` when a body is present.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

/// The transport's native view of a completed exchange.
///
/// Any status code counts as completion, including 4xx/5xx. The body is
/// fully buffered before the transport returns.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// A failure below the HTTP layer: name resolution, connection refused,
/// timeout. The underlying diagnostic is preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError(pub String);

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for TransportError {}

/// Sends a built request and returns the raw outcome.
///
/// Implementations must treat every completed exchange as `Ok`, whatever
/// the status code; `Err` is reserved for failures where no response
/// exists at all.
pub trait HttpTransport: Send + Sync {
    fn send(&self, request: &HttpRequest) -> Result<RawResponse, TransportError>;
}

/// Production transport backed by ureq.
///
/// Status-as-error is disabled so 4xx/5xx responses come back as data;
/// interpreting status codes is the caller's job, not the transport's.
#[derive(Debug)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> Result<RawResponse, TransportError> {
        let mut response = match request.method {
            HttpMethod::Get => {
                let mut req = self.agent.get(&request.url);
                for (name, value) in &request.headers {
                    req = req.header(name.as_str(), value.as_str());
                }
                req.call()
            }
            HttpMethod::Post => {
                let mut req = self.agent.post(&request.url);
                for (name, value) in &request.headers {
                    req = req.header(name.as_str(), value.as_str());
                }
                match &request.body {
                    Some(body) => req.send(&body[..]),
                    None => req.send_empty(),
                }
            }
        }
        .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_vec()
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_displays_as_http_verb() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
    }

    #[test]
    fn transport_error_displays_message_verbatim() {
        let err = TransportError("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
    }
}
