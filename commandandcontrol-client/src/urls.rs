//! Relative URL builders for the messaging resources.
//!
//! Each function joins fixed-order path segments, percent-encoding every
//! variable segment independently so that identifiers containing `/`, spaces,
//! or other reserved characters remain a single segment. Building is total
//! over any input; empty identifiers are the caller's error and are rejected
//! by the service, not here.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything a path segment must escape: all non-alphanumeric ASCII except
/// the unreserved marks `- _ . ! ~ * ' ( )`. Non-ASCII bytes are always
/// encoded.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes one path segment.
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// `commands/{commandId}/messages` — collection of messages sent for a command.
pub fn command_messages_relative_url(command_id: &str) -> String {
    format!("commands/{}/messages", encode_segment(command_id))
}

/// `messages/{messageId}` — a single message resource.
pub fn message_relative_url(message_id: &str) -> String {
    format!("messages/{}", encode_segment(message_id))
}

/// `messages/{messageId}/recipients` — collection of a message's recipients.
pub fn message_recipients_relative_url(message_id: &str) -> String {
    format!("messages/{}/recipients", encode_segment(message_id))
}

/// `messages/{messageId}/recipients/{thingName}` — one recipient of a message.
pub fn message_recipient_relative_url(message_id: &str, thing_name: &str) -> String {
    format!(
        "messages/{}/recipients/{}",
        encode_segment(message_id),
        encode_segment(thing_name)
    )
}

/// `messages/{messageId}/recipients/{thingName}/replies` — replies from one recipient.
pub fn message_replies_relative_url(message_id: &str, thing_name: &str) -> String {
    format!(
        "messages/{}/recipients/{}/replies",
        encode_segment(message_id),
        encode_segment(thing_name)
    )
}
