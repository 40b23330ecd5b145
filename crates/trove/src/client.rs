//! Knowledge-Base API Client
//!
//! The interaction controller: one request per editing action, then a
//! [`Navigation`] back to the listing view. Responses are awaited but
//! never parsed or validated; the server owns the outcome, and any
//! reply at all (success or not) moves the interface along.

use reqwest::Client;
use serde::Serialize;

use crate::error::ClientError;
use crate::navigation::{Navigation, KNOWLEDGE_BASE_PATH};

const DELETE_TRIPLE_PATH: &str = "/delete-triple";
const SAVE_GRAPH_PATH: &str = "/save-graph";

/// Client for the knowledge-base editing interface.
pub struct KbClient {
    client: Client,
    base_url: String,
}

/// Wire payload for a deletion request: `{"triple": <triple>}`.
///
/// The triple is whatever the caller hands over. Its shape belongs to
/// the server; it is forwarded verbatim.
#[derive(Serialize)]
struct DeleteTriplePayload<'a, T: ?Sized> {
    triple: &'a T,
}

impl KbClient {
    /// Create a new client bound to the knowledge-base server.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the server to remove one triple from the graph.
    ///
    /// Issues a POST to `/delete-triple` with body `{"triple": <triple>}`.
    /// Once any response arrives (status and body are not inspected) the
    /// interface is sent back to the listing view.
    ///
    /// A transport failure (the request never resolves) is returned as
    /// [`ClientError::Transport`] and produces no navigation.
    pub async fn delete_triple<T>(&self, triple: &T) -> Result<Navigation, ClientError>
    where
        T: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, DELETE_TRIPLE_PATH);
        let resp = self
            .client
            .post(&url)
            .json(&DeleteTriplePayload { triple })
            .send()
            .await?;

        tracing::debug!(status = %resp.status(), "delete-triple acknowledged");
        Ok(Navigation::to_knowledge_base())
    }

    /// Fire-and-forget variant of [`KbClient::delete_triple`]: a failed
    /// request is logged and dropped instead of surfaced, and no
    /// navigation is produced.
    pub async fn delete_triple_silent<T>(&self, triple: &T) -> Option<Navigation>
    where
        T: Serialize + ?Sized,
    {
        match self.delete_triple(triple).await {
            Ok(nav) => Some(nav),
            Err(err) => {
                tracing::warn!(%err, "delete-triple request failed");
                None
            }
        }
    }

    /// Ask the server to persist the in-memory graph to durable storage.
    ///
    /// Issues a bare GET to `/save-graph`. Completion policy is the same
    /// as [`KbClient::delete_triple`]: any response at all resolves to
    /// navigation back to the listing view.
    pub async fn save_graph(&self) -> Result<Navigation, ClientError> {
        let url = format!("{}{}", self.base_url, SAVE_GRAPH_PATH);
        let resp = self.client.get(&url).send().await?;

        tracing::debug!(status = %resp.status(), "save-graph acknowledged");
        Ok(Navigation::to_knowledge_base())
    }

    /// Fire-and-forget variant of [`KbClient::save_graph`].
    pub async fn save_graph_silent(&self) -> Option<Navigation> {
        match self.save_graph().await {
            Ok(nav) => Some(nav),
            Err(err) => {
                tracing::warn!(%err, "save-graph request failed");
                None
            }
        }
    }

    /// Submit a new triple through the listing form endpoint.
    ///
    /// The server validates the three fields itself; the client performs
    /// no checks and treats the response like every other editing action.
    pub async fn add_triple(
        &self,
        subject: &str,
        predicate: &str,
        object: &str,
    ) -> Result<Navigation, ClientError> {
        let url = format!("{}{}", self.base_url, KNOWLEDGE_BASE_PATH);
        let resp = self
            .client
            .post(&url)
            .form(&[
                ("subject", subject),
                ("predicate", predicate),
                ("object", object),
            ])
            .send()
            .await?;

        tracing::debug!(status = %resp.status(), "add-triple acknowledged");
        Ok(Navigation::to_knowledge_base())
    }

    /// Check whether the knowledge-base server is reachable by fetching
    /// its listing view.
    pub async fn probe(&self) -> Result<bool, ClientError> {
        let url = format!("{}{}", self.base_url, KNOWLEDGE_BASE_PATH);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }
}
