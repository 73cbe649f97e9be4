//! Shared building blocks for the launcher workflow binaries.
//!
//! # Overview
//! A small, synchronous HTTP request client plus the launcher output
//! boundary. The client translates logical API calls (method, relative
//! path, query parameters, optional JSON body) into transport-level
//! requests and normalizes the outcome into a `Response` the caller
//! decodes itself.
//!
//! # Design
//! - `Client` is configured once (base URL, default headers, transport)
//!   and stateless per call.
//! - Network execution sits behind the `HttpTransport` trait; production
//!   uses ureq, tests use `mock::MockTransport` for deterministic,
//!   network-free assertions.
//! - Completed exchanges always become `Response` values, whatever the
//!   status code; only transport and serialization failures are errors.
//! - `alfred` renders result lists to the single JSON document the
//!   launcher consumes from stdout.

pub mod alfred;
pub mod client;
pub mod error;
pub mod http;
pub mod mock;

pub use client::{Client, Response};
pub use error::ClientError;
pub use http::{HttpMethod, HttpRequest, HttpTransport, RawResponse, TransportError, UreqTransport};
