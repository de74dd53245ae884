//! REST client core: request construction, transport dispatch, decoding.
//!
//! This module provides types and traits for:
//! - Describing backend servers ([`ServerDescription`], [`Scheme`])
//! - Describing logical calls ([`Endpoint`], [`QueryItem`], [`Encoding`])
//! - Building concrete requests ([`HttpRequestInfo`])
//! - Handling responses ([`RawResponse`], [`ResponseBody`])
//! - Abstracting transports ([`HttpTransport`], [`ReqwestTransport`])
//! - Executing calls ([`RestClient`]) under three concurrency faces
//!   ([`RestClient::call`], [`CallFuture`], [`CallStream`])
//! - Error taxonomy ([`RequestError`], [`HttpError`], [`DecodeError`])
//!
//! Exactly one code path performs the HTTP exchange
//! ([`RestClient`]'s internal engine); the three faces are mechanical
//! adapters over it and never add retries or extra attempts.

mod endpoint;
mod error;
mod faces;
mod request;
mod response;
mod rest;
mod server;
mod transport;


pub use endpoint::{Encoding, Endpoint, QueryItem};
pub use error::{DecodeError, HttpError, RequestError};
pub use faces::{CallFuture, CallStream};
pub use request::HttpRequestInfo;
pub use response::{RawResponse, ResponseBody};
pub use rest::RestClient;
pub use server::{Scheme, ServerDescription, ServerError};
pub use transport::{HttpTransport, ReqwestTransport};
