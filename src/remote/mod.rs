//! # Remote Invocation Module
//!
//! This module defines how the client talks to its backend. The backend is a set of
//! named operations, each taking an optional JSON payload and answering with a JSON
//! envelope, much like an RPC. Nothing in here keeps state: every call is exactly one
//! round trip, there are no retries and no caching.
//!
//! ## Architecture
//!
//! ```text
//! Action Layer (cli)
//!          ↓
//! Typed calls (calls)        list_artists, search_artist, add_artist, ...
//!          ↓
//! RemoteInvoker trait        invoke(operation, payload) -> RemoteCallResult
//!          ↓
//! GatewayInvoker (gateway)   POST {base_url}/{function_name}
//! ```
//!
//! ## Failure Classes
//!
//! Every call resolves to one of three outcomes:
//!
//! - **Success** - the envelope parsed and carried no failure marker
//! - **Transport** - connectivity, authorization or service faults, reported with the
//!   provider's code and message verbatim
//! - **Application** - the operation ran but reported a business failure inside its
//!   response body (no matches, execution exception, non-200 write result)
//!
//! The transport status is always checked before any application field is read.

pub mod calls;
mod gateway;

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use gateway::GatewayInvoker;
pub use gateway::classify;

/// The remote operations the backend exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteOperation {
    IssueToken,
    ListArtists,
    SearchArtist,
    AddArtist,
    RemoveArtist,
    LatestMusic,
}

impl RemoteOperation {
    pub const ALL: [RemoteOperation; 6] = [
        RemoteOperation::IssueToken,
        RemoteOperation::ListArtists,
        RemoteOperation::SearchArtist,
        RemoteOperation::AddArtist,
        RemoteOperation::RemoveArtist,
        RemoteOperation::LatestMusic,
    ];

    /// Name of the backend function serving this operation.
    pub fn function_name(&self) -> &'static str {
        match self {
            RemoteOperation::IssueToken => "GetAccessTokenHandler",
            RemoteOperation::ListArtists => "FetchArtistsHandler",
            RemoteOperation::SearchArtist => "GetArtist-IDHandler",
            RemoteOperation::AddArtist => "AddArtistsHandler",
            RemoteOperation::RemoveArtist => "RemoveArtistsHandler",
            RemoteOperation::LatestMusic => "GetLatestMusicHandler",
        }
    }
}

impl fmt::Display for RemoteOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.function_name())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RemoteError {
    /// Connectivity, authorization or service fault.
    #[error("Client error {code}: {message}")]
    Transport { code: String, message: String },

    /// The operation ran but reported a business-level failure.
    #[error("{0}")]
    Application(String),
}

impl RemoteError {
    pub fn transport(code: impl Into<String>, message: impl Into<String>) -> Self {
        RemoteError::Transport {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, RemoteError::Transport { .. })
    }
}

/// Outcome of a single remote call: the decoded response envelope or a failure.
pub type RemoteCallResult = Result<Value, RemoteError>;

/// Sends one named call with an optional serialized request to the backend.
///
/// Implementations must perform exactly one round trip per call and must
/// tell transport failures apart from application failures by inspecting
/// the response envelope.
#[async_trait(?Send)]
pub trait RemoteInvoker {
    async fn invoke(&self, operation: RemoteOperation, payload: Option<Vec<u8>>)
    -> RemoteCallResult;
}
