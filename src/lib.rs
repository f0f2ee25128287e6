//! Typed Rust client for the Nexmo SMS HTTP API and its webhooks.
//!
//! The crate has three layers: a domain layer of strong types (sender-id
//! normalization, message kinds, delivery results), a transport layer for
//! wire-format quirks (the `&key=value` form body, hyphenated JSON keys, the
//! compact `scts` timestamp), and a small client layer orchestrating requests.
//!
//! ```rust,no_run
//! use nexmo_sms::{Credentials, MessageText, NexmoClient, Originator, RawPhoneNumber, SendText};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), nexmo_sms::NexmoError> {
//!     let client = NexmoClient::new(Credentials::new("api_key", "api_secret")?);
//!     let request = SendText::new(
//!         RawPhoneNumber::new("447234567890")?,
//!         Originator::new("MyApp"),
//!         MessageText::new("Hello!")?,
//!     );
//!     let result = client.send_text(request).await?;
//!     println!("{}", result.overview());
//!     Ok(())
//! }
//! ```
//!
//! Webhooks are decoded without a client:
//!
//! ```rust
//! let receipt = nexmo_sms::decode_delivery_receipt_query(
//!     "msisdn=447700900000&to=9999&network-code=23410&messageId=abc123&status=delivered&scts=2301171205",
//! )
//! .unwrap()
//! .expect("complete receipt");
//! assert_eq!(receipt.status.as_str(), "DELIVERED");
//! assert_eq!(receipt.received_time.value(), 1_673_957_100);
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Credentials, NexmoClient, NexmoClientBuilder, NexmoError};
pub use domain::{
    ALPHANUMERIC_MAX_LEN, ApiKey, ApiSecret, DeliveryReceipt, DeliveryResult, InboundMessage,
    KnownStatusCode, MessagePart, MessageText, NUMERIC_MAX_LEN, Originator, PhoneNumber, PushWap,
    RawPhoneNumber, ReceiptStatus, SendBinary, SendText, StatusCode, TextType, UnixTimestamp,
    ValidationError, ValidityMillis, WapTitle, WapUrl,
};
pub use transport::{
    WebhookError, decode_delivery_receipt, decode_delivery_receipt_query, decode_inbound_message,
    decode_inbound_message_query, parse_scts,
};
