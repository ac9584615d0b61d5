//! # commandandcontrol-client
//!
//! Typed client contract for the command-and-control messaging REST API:
//! the [`MessagesService`] operations, the wire types they exchange, the
//! relative-URL builders for the message/recipient/reply resources, and the
//! layered request-header builder. Transport-agnostic; an HTTP-backed
//! implementation composes these pieces and owns host, authentication, and
//! error mapping.

pub mod client;
pub mod config;
pub mod error;
pub mod headers;
pub mod logger;
pub mod types;
pub mod urls;

pub use client::MessagesService;
pub use config::{ClientConfig, HEADERS_ENV_VAR};
pub use error::{ClientError, Result};
pub use headers::{HeaderBuilder, RequestHeaders, MIME_TYPE};
pub use logger::init_tracing;
pub use types::{
    Message, MessageTargets, NewMessage, Pagination, Recipient, RecipientCursor,
    RecipientListPage, Reply, ReplyCursor, ReplyListPage,
};
