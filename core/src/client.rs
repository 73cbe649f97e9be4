//! Generic request client for simple query/response REST calls.
//!
//! # Design
//! `Client` holds a base URL, a default header set, and a transport handle,
//! and nothing else — each call is stateless. `get` and `post` funnel into
//! a single `request` path that joins the URL, encodes the query string,
//! attaches headers, and delegates to the injected `HttpTransport`. The
//! client never judges status codes: any completed exchange becomes a
//! `Response`, and only transport or serialization failures become errors.

use std::sync::Arc;

use serde::Serialize;
use url::Url;

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpTransport, UreqTransport};

const CONTENT_TYPE_JSON: &str = "application/json";

/// An immutable snapshot of a completed exchange.
///
/// Created only by the `Client`. Decoding `body` into an API-specific
/// shape is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Synchronous HTTP request client with an injectable transport.
pub struct Client {
    base_url: Url,
    headers: Vec<(String, String)>,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a client bound to an absolute base URL.
    ///
    /// Fails fast on a syntactically invalid URL; no network activity
    /// happens here. The production transport is installed by default.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl(e.to_string()))?;
        Ok(Self {
            base_url,
            headers: Vec::new(),
            transport: Arc::new(UreqTransport::new()),
        })
    }

    /// Replace the full set of default headers applied to every
    /// subsequent request.
    pub fn set_headers(&mut self, headers: Vec<(String, String)>) {
        self.headers = headers;
    }

    /// Replace the transport. Exists so tests can substitute a
    /// `mock::MockTransport`; expected to be called during setup only.
    pub fn set_transport(&mut self, transport: Arc<dyn HttpTransport>) {
        self.transport = transport;
    }

    /// Issue a GET request for `path` resolved against the base URL.
    pub fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Response, ClientError> {
        self.request(HttpMethod::Get, path, query, None)
    }

    /// Issue a POST request, with an optional JSON body.
    ///
    /// When `body` is present it is serialized before any transport
    /// activity and the request carries a JSON `content-type` header;
    /// when absent, neither body nor `content-type` is attached.
    pub fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&T>,
    ) -> Result<Response, ClientError> {
        let body = match body {
            Some(value) => Some(
                serde_json::to_vec(value)
                    .map_err(|e| ClientError::Serialization(e.to_string()))?,
            ),
            None => None,
        };
        self.request(HttpMethod::Post, path, query, body)
    }

    /// Shared execution path for `get` and `post`.
    fn request(
        &self,
        method: HttpMethod,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Vec<u8>>,
    ) -> Result<Response, ClientError> {
        let url = self.build_url(path, query);

        let mut headers = self.headers.clone();
        if body.is_some() {
            headers.push(("content-type".to_string(), CONTENT_TYPE_JSON.to_string()));
        }

        log::debug!("{method} {url}");

        let raw = self
            .transport
            .send(&HttpRequest {
                method,
                url,
                headers,
                body,
            })
            .map_err(|e| ClientError::Transport(e.0))?;

        Ok(Response {
            status: raw.status,
            body: raw.body,
        })
    }

    /// Join `path` onto the base URL at exactly one `/` boundary and
    /// append the percent-encoded query string.
    fn build_url(&self, path: &str, query: &[(&str, &str)]) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        let mut url = format!("{}/{}", base, path.trim_start_matches('/'));

        if !query.is_empty() {
            let encoded = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(query)
                .finish();
            url.push('?');
            url.push_str(&encoded);
        }

        url
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};
    use std::sync::Arc;

    use super::*;
    use crate::mock::MockTransport;

    fn client_with(transport: Arc<MockTransport>) -> Client {
        let mut client = Client::new("https://example.com/").unwrap();
        client.set_transport(transport);
        client
    }

    fn query_set(url: &str) -> HashMap<String, HashSet<String>> {
        let parsed = Url::parse(url).unwrap();
        let mut map: HashMap<String, HashSet<String>> = HashMap::new();
        for (key, value) in parsed.query_pairs() {
            map.entry(key.into_owned()).or_default().insert(value.into_owned());
        }
        map
    }

    #[test]
    fn new_rejects_relative_base_url() {
        let err = Client::new("not-a-url/fake").unwrap_err();
        assert!(matches!(err, ClientError::InvalidBaseUrl(_)));
    }

    #[test]
    fn get_sends_through_the_transport() {
        let transport = Arc::new(MockTransport::respond(200, ""));
        let client = client_with(transport.clone());

        let res = client.get("fake", &[]).unwrap();
        assert_eq!(res.status, 200);

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, HttpMethod::Get);
        assert_eq!(calls[0].url, "https://example.com/fake");
        assert!(calls[0].body.is_none());
    }

    #[test]
    fn post_sends_through_the_transport() {
        let transport = Arc::new(MockTransport::respond(200, ""));
        let client = client_with(transport.clone());

        let res = client.post::<()>("fake", &[], None).unwrap();
        assert_eq!(res.status, 200);
        assert_eq!(transport.calls()[0].method, HttpMethod::Post);
    }

    #[test]
    fn path_joins_at_exactly_one_slash() {
        let cases = [
            ("https://example.com", "fake"),
            ("https://example.com/", "fake"),
            ("https://example.com", "/fake"),
            ("https://example.com/", "/fake"),
        ];
        for (base, path) in cases {
            let transport = Arc::new(MockTransport::respond(200, ""));
            let mut client = Client::new(base).unwrap();
            client.set_transport(transport.clone());
            client.get(path, &[]).unwrap();
            assert_eq!(transport.calls()[0].url, "https://example.com/fake");
        }
    }

    #[test]
    fn base_url_path_prefix_is_preserved() {
        let transport = Arc::new(MockTransport::respond(200, ""));
        let mut client = Client::new("https://api.example.com/helix/").unwrap();
        client.set_transport(transport.clone());
        client.get("streams", &[]).unwrap();
        assert_eq!(transport.calls()[0].url, "https://api.example.com/helix/streams");
    }

    #[test]
    fn query_params_round_trip_as_a_set() {
        let transport = Arc::new(MockTransport::respond(200, ""));
        let client = client_with(transport.clone());

        client
            .get("fake", &[("queryKey", "queryValue"), ("multi", "a"), ("multi", "b")])
            .unwrap();

        let decoded = query_set(&transport.calls()[0].url);
        assert_eq!(decoded["queryKey"], HashSet::from(["queryValue".to_string()]));
        assert_eq!(
            decoded["multi"],
            HashSet::from(["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn query_values_are_percent_encoded() {
        let transport = Arc::new(MockTransport::respond(200, ""));
        let client = client_with(transport.clone());

        client.get("search", &[("title", "breaking bad & more")]).unwrap();

        let url = &transport.calls()[0].url;
        assert!(!url.contains(' '), "unencoded space in {url}");
        let decoded = query_set(url);
        assert_eq!(
            decoded["title"],
            HashSet::from(["breaking bad & more".to_string()])
        );
    }

    #[test]
    fn configured_headers_are_sent_on_every_request() {
        let transport = Arc::new(MockTransport::respond(200, ""));
        let mut client = client_with(transport.clone());
        client.set_headers(vec![("headerKey".to_string(), "headerValue".to_string())]);

        client.get("fake", &[]).unwrap();
        client.get("fake", &[]).unwrap();

        for call in transport.calls() {
            assert_eq!(
                call.headers,
                vec![("headerKey".to_string(), "headerValue".to_string())]
            );
        }
    }

    #[test]
    fn set_headers_replaces_the_whole_set() {
        let transport = Arc::new(MockTransport::respond(200, ""));
        let mut client = client_with(transport.clone());
        client.set_headers(vec![("first".to_string(), "1".to_string())]);
        client.set_headers(vec![("second".to_string(), "2".to_string())]);

        client.get("fake", &[]).unwrap();
        assert_eq!(
            transport.calls()[0].headers,
            vec![("second".to_string(), "2".to_string())]
        );
    }

    #[test]
    fn post_with_body_attaches_json_and_content_type() {
        let transport = Arc::new(MockTransport::respond(200, ""));
        let client = client_with(transport.clone());

        let body = HashMap::from([("bodyKey", "bodyValue")]);
        client.post("fake", &[], Some(&body)).unwrap();

        let call = &transport.calls()[0];
        let sent: HashMap<String, String> =
            serde_json::from_slice(call.body.as_deref().unwrap()).unwrap();
        assert_eq!(sent, HashMap::from([("bodyKey".to_string(), "bodyValue".to_string())]));

        let content_types: Vec<_> = call
            .headers
            .iter()
            .filter(|(name, _)| name == "content-type")
            .collect();
        assert_eq!(content_types.len(), 1);
        assert_eq!(content_types[0].1, CONTENT_TYPE_JSON);
    }

    #[test]
    fn post_without_body_has_no_body_and_no_content_type() {
        let transport = Arc::new(MockTransport::respond(200, ""));
        let client = client_with(transport.clone());

        client.post::<()>("fake", &[], None).unwrap();

        let call = &transport.calls()[0];
        assert!(call.body.is_none());
        assert!(call.headers.iter().all(|(name, _)| name != "content-type"));
    }

    #[test]
    fn identical_gets_yield_equal_responses() {
        let transport = Arc::new(MockTransport::respond(200, r#"{ "data": "the data" }"#));
        let client = client_with(transport);

        let first = client.get("fake", &[("queryKey", "queryValue")]).unwrap();
        let second = client.get("fake", &[("queryKey", "queryValue")]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn transport_failure_yields_error_with_verbatim_message() {
        let transport = Arc::new(MockTransport::fail("Client error"));
        let client = client_with(transport);

        let err = client.get("fake", &[]).unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
        assert_eq!(err.to_string(), "Client error");
    }

    #[test]
    fn http_error_status_is_a_response_not_an_error() {
        let body = r#"{"error":"Unauthorized"}"#;
        let transport = Arc::new(MockTransport::respond(401, body));
        let client = client_with(transport);

        let res = client.get("fake", &[]).unwrap();
        assert_eq!(res.status, 401);
        assert_eq!(res.body, body.as_bytes());
    }
}
