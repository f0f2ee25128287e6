use std::fmt;

use crate::domain::originator::Originator;
use crate::domain::request::SendText;
use crate::domain::validation::ValidationError;
use crate::domain::value::{MessageText, RawPhoneNumber, UnixTimestamp};

/// Text received on one of the account's numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    /// Number or short code the message was sent to (one of ours).
    pub to: String,
    /// Handset that sent the message.
    pub from: String,
    pub text: String,
    pub message_id: Option<String>,
    pub message_type: Option<String>,
    pub keyword: Option<String>,
}

impl InboundMessage {
    /// Build the answer to this message: it goes back to the sender, from the number
    /// the message arrived on.
    pub fn reply(&self, text: MessageText) -> Result<SendText, ValidationError> {
        let to = RawPhoneNumber::new(self.from.as_str())?;
        let from = Originator::new(&self.to);
        Ok(SendText::new(to, from, text))
    }
}

/// Final (or intermediate) delivery state reported by a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReceiptStatus {
    Delivered,
    Expired,
    Failed,
    Buffered,
    /// Any other status, upper-cased.
    Other(String),
}

impl ReceiptStatus {
    /// Upper-case `value` and map it onto a known status when possible.
    pub fn parse(value: &str) -> Self {
        let upper = value.to_uppercase();
        match upper.as_str() {
            "DELIVERED" => Self::Delivered,
            "EXPIRED" => Self::Expired,
            "FAILED" => Self::Failed,
            "BUFFERED" => Self::Buffered,
            _ => Self::Other(upper),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Delivered => "DELIVERED",
            Self::Expired => "EXPIRED",
            Self::Failed => "FAILED",
            Self::Buffered => "BUFFERED",
            Self::Other(value) => value,
        }
    }
}

impl fmt::Display for ReceiptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Asynchronous delivery report for a previously sent message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// Handset the message was delivered to.
    pub to: String,
    /// Sender id the message was sent from.
    pub from: String,
    pub network: String,
    pub message_id: String,
    pub status: ReceiptStatus,
    /// Service-centre timestamp, minute precision, UTC.
    pub received_time: UnixTimestamp,
    pub err_code: Option<String>,
    pub price: Option<String>,
    pub client_ref: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::request::TextType;

    fn inbound() -> InboundMessage {
        InboundMessage {
            to: "9999".to_owned(),
            from: "447700900000".to_owned(),
            text: "Hi".to_owned(),
            message_id: None,
            message_type: None,
            keyword: None,
        }
    }

    #[test]
    fn reply_swaps_direction() {
        let reply = inbound()
            .reply(MessageText::new("Thanks!").unwrap())
            .unwrap();
        assert_eq!(reply.to().raw(), "447700900000");
        assert_eq!(reply.from().as_str(), "9999");
        assert_eq!(reply.text().as_str(), "Thanks!");
        assert_eq!(reply.text_type(), TextType::Text);
    }

    #[test]
    fn reply_requires_a_sender() {
        let mut message = inbound();
        message.from = "  ".to_owned();
        let err = message.reply(MessageText::new("x").unwrap()).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "to" });
    }

    #[test]
    fn receipt_status_upper_cases_and_keeps_unknown_values() {
        assert_eq!(ReceiptStatus::parse("delivered"), ReceiptStatus::Delivered);
        assert_eq!(ReceiptStatus::parse("Expired"), ReceiptStatus::Expired);
        assert_eq!(ReceiptStatus::parse("FAILED"), ReceiptStatus::Failed);
        assert_eq!(ReceiptStatus::parse("buffered"), ReceiptStatus::Buffered);

        let other = ReceiptStatus::parse("accepted");
        assert_eq!(other, ReceiptStatus::Other("ACCEPTED".to_owned()));
        assert_eq!(other.to_string(), "ACCEPTED");
    }
}
