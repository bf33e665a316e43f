//! Remote persistence for finished (or explicitly saved) sessions.
//!
//! Orchestrators only know [`ActivitySink`]; the HTTP implementation lives in
//! [`http`]. A sink performs exactly one submission per call: no retry, no
//! timeout, and the response body is ignored.

mod http;
pub mod payload;

use std::future::Future;

pub use http::HttpActivityClient;
pub use payload::{
    ActivityPayload, BreathingPayload, GratitudeItem, GratitudePayload, GroundingPayload,
    JournalPayload,
};

use crate::error::ClientError;

/// Destination for completed activity sessions.
pub trait ActivitySink {
    /// Submit one payload. `Ok` means the backend acknowledged with 2xx.
    fn submit(
        &self,
        payload: &ActivityPayload,
    ) -> impl Future<Output = Result<(), ClientError>> + Send;
}
