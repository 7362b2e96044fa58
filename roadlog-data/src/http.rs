//! Blocking HTTP plumbing shared by the routing and geocoding adapters.
//!
//! The collaborator traits in `roadlog-core` are synchronous so the core
//! stays embeddable in synchronous contexts. [`BlockingClient`] bridges them
//! to `reqwest` by blocking on a Tokio runtime: the ambient multi-threaded
//! runtime when there is one, otherwise a current-thread runtime it owns.
//! Callers inside a `current_thread` runtime are served from a helper
//! thread, since blocking on a runtime from within one panics.

use std::future::Future;
use std::time::Duration;
use std::{panic, thread};

use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

/// Error building an HTTP adapter.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Transport-level failure, mapped onto each adapter's error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TransportError {
    Timeout { url: String, timeout_secs: u64 },
    Http { url: String, status: u16, message: String },
    Network { url: String, message: String },
    Parse { message: String },
}

pub(crate) struct BlockingClient {
    client: Client,
    runtime: Runtime,
    timeout: Duration,
}

impl std::fmt::Debug for BlockingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockingClient")
            .field("client", &self.client)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl BlockingClient {
    pub(crate) fn new(user_agent: &str, timeout: Duration) -> Result<Self, ClientBuildError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(ClientBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ClientBuildError::Runtime)?;
        Ok(Self {
            client,
            runtime,
            timeout,
        })
    }

    /// GET `url` and decode the JSON body, blocking the calling thread.
    ///
    /// Inside a multi-threaded Tokio runtime the ambient handle is used via
    /// `block_in_place`. Inside a `current_thread` runtime neither
    /// `block_in_place` nor a nested `block_on` is allowed on the calling
    /// thread, so the owned runtime drives the request on a scoped helper
    /// thread while the caller waits. Outside any runtime the owned runtime
    /// is used directly.
    pub(crate) fn get_json<T>(&self, url: &str) -> Result<T, TransportError>
    where
        T: DeserializeOwned + Send,
    {
        self.block_on(self.fetch_json(url))
    }

    fn block_on<F>(&self, future: F) -> F::Output
    where
        F: Future + Send,
        F::Output: Send,
    {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            Ok(_) => thread::scope(|scope| {
                scope
                    .spawn(|| self.runtime.block_on(future))
                    .join()
                    .unwrap_or_else(|payload| panic::resume_unwind(payload))
            }),
            Err(_) => self.runtime.block_on(future),
        }
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| self.classify(&err, url))?
            .error_for_status()
            .map_err(|err| self.classify(&err, url))?;
        response.json().await.map_err(|err| TransportError::Parse {
            message: err.to_string(),
        })
    }

    fn classify(&self, error: &reqwest::Error, url: &str) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.timeout.as_secs(),
            };
        }
        if let Some(status) = error.status() {
            return TransportError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }
        TransportError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}
