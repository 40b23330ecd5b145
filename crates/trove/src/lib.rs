//! Trove Client Library
//!
//! Client-side control layer for a knowledge-base editing interface.
//! The knowledge base itself (triple storage, querying, page rendering)
//! lives in an external server; this crate only speaks its HTTP surface
//! and decides where the interface goes afterward.
//!
//! # Architecture
//!
//! - [`client`]: the interaction controller. [`KbClient`] issues the
//!   side-effecting requests (delete a triple, persist the graph, submit
//!   a new triple) and resolves each one to a [`Navigation`].
//! - [`navigation`]: navigation commands. The controller never touches
//!   the view layer; it returns a [`Navigation`] and the frontend's
//!   [`Navigator`] carries it out.
//! - [`error`]: the error channel. Transport failures are surfaced as
//!   [`ClientError`]; server-reported outcomes are opaque by contract.
//!
//! # Usage
//!
//! ```rust,ignore
//! use trove::KbClient;
//!
//! let kb = KbClient::new("http://127.0.0.1:5000");
//! let nav = kb.delete_triple(&triple).await?;
//! assert_eq!(nav.location(), "/knowledge-base");
//! ```

pub mod client;
pub mod error;
pub mod navigation;

// Re-export commonly used types
pub use client::KbClient;
pub use error::ClientError;
pub use navigation::{Navigation, Navigator, KNOWLEDGE_BASE_PATH};
