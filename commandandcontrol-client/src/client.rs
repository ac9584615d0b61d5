//! Capability contract for the messaging API.
//!
//! [`MessagesService`] is transport-agnostic; an HTTP-backed implementation
//! satisfies it by composing the [`urls`](crate::urls) builders and a
//! [`HeaderBuilder`](crate::headers::HeaderBuilder).

use crate::error::Result;
use crate::headers::RequestHeaders;
use crate::types::{Message, NewMessage, Recipient, RecipientListPage, ReplyListPage};
use async_trait::async_trait;

/// Remote operations on messages, recipients, and replies. Object-safe so
/// callers can hold a `Box<dyn MessagesService>` or `Arc<dyn MessagesService>`.
///
/// Every operation takes an optional per-call header override layer; `None`
/// contributes nothing on top of the configured headers.
#[async_trait]
pub trait MessagesService: Send + Sync {
    /// Sends a message for a command and returns the created message's id.
    async fn create_message(
        &self,
        message: &NewMessage,
        additional_headers: Option<&RequestHeaders>,
    ) -> Result<String>;

    /// Fetches a single message resource.
    async fn get_message(
        &self,
        message_id: &str,
        additional_headers: Option<&RequestHeaders>,
    ) -> Result<Message>;

    /// Fetches one recipient's delivery status for a message.
    async fn get_recipient(
        &self,
        message_id: &str,
        thing_name: &str,
        additional_headers: Option<&RequestHeaders>,
    ) -> Result<Recipient>;

    /// Lists a message's recipients, paginated by an exclusive-start cursor
    /// on the recipient name and an optional page size.
    async fn list_recipients(
        &self,
        message_id: &str,
        from_thing_name_exclusive: Option<&str>,
        count: Option<u32>,
        additional_headers: Option<&RequestHeaders>,
    ) -> Result<RecipientListPage>;

    /// Lists one recipient's replies to a message, paginated by an
    /// exclusive-start cursor on the receive timestamp (epoch milliseconds)
    /// and an optional page size.
    async fn list_replies(
        &self,
        message_id: &str,
        thing_name: &str,
        from_received_at_exclusive: Option<i64>,
        count: Option<u32>,
        additional_headers: Option<&RequestHeaders>,
    ) -> Result<ReplyListPage>;
}
