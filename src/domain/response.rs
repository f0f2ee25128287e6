use std::borrow::Cow;

use crate::domain::value::StatusCode;

/// Parsed answer to a send call.
///
/// Long texts are split by the gateway; every part is reported separately and in
/// order. A part with a non-zero status was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeliveryResult {
    pub message_count: u32,
    pub messages: Vec<MessagePart>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessagePart {
    pub status: StatusCode,
    pub error_text: Option<String>,
    pub message_id: Option<String>,
    pub to: Option<String>,
    pub remaining_balance: Option<String>,
    pub message_price: Option<String>,
    pub network: Option<String>,
}

impl MessagePart {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Gateway error text, or the numeric status when the gateway sent none.
    pub fn error_description(&self) -> Cow<'_, str> {
        match self.error_text.as_deref() {
            Some(text) if !text.trim().is_empty() => Cow::Borrowed(text),
            _ => Cow::Owned(format!("status {}", self.status.as_i32())),
        }
    }
}

impl DeliveryResult {
    /// Parts the gateway did not accept.
    pub fn rejected_parts(&self) -> impl Iterator<Item = &MessagePart> {
        self.messages.iter().filter(|part| !part.is_success())
    }

    /// `true` when every reported part was accepted.
    pub fn is_success(&self) -> bool {
        self.rejected_parts().next().is_none()
    }

    /// Error text of every rejected part, space separated, in part order.
    pub fn error_text(&self) -> Option<String> {
        let errors = self
            .rejected_parts()
            .map(MessagePart::error_description)
            .collect::<Vec<_>>();
        if errors.is_empty() {
            None
        } else {
            Some(errors.join(" "))
        }
    }

    /// One-sentence human-readable summary of the send.
    pub fn overview(&self) -> String {
        let start = if self.message_count > 1 {
            format!("Your message was sent in {} parts ", self.message_count)
        } else {
            "Your message was sent ".to_owned()
        };

        match self.error_text() {
            None => format!("{start}and delivered successfully."),
            Some(errors) => format!("{start}but there was an error: {errors}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(status: i32, error_text: Option<&str>) -> MessagePart {
        MessagePart {
            status: StatusCode::new(status),
            error_text: error_text.map(str::to_owned),
            ..Default::default()
        }
    }

    #[test]
    fn overview_reports_single_part_success() {
        let result = DeliveryResult {
            message_count: 1,
            messages: vec![part(0, None)],
        };
        let overview = result.overview();
        assert_eq!(overview, "Your message was sent and delivered successfully.");
        assert!(!overview.contains("error"));
        assert!(result.is_success());
        assert_eq!(result.error_text(), None);
    }

    #[test]
    fn overview_collects_errors_of_rejected_parts() {
        let result = DeliveryResult {
            message_count: 2,
            messages: vec![part(0, None), part(1, Some("Missing from"))],
        };
        let overview = result.overview();
        assert!(overview.contains("2 parts"));
        assert!(overview.contains("Missing from"));
        assert!(!overview.contains("delivered successfully"));
        assert!(!result.is_success());
    }

    #[test]
    fn error_text_joins_parts_in_order_and_falls_back_to_status() {
        let result = DeliveryResult {
            message_count: 3,
            messages: vec![
                part(2, Some("Missing to")),
                part(0, None),
                part(9, None),
            ],
        };
        assert_eq!(result.error_text().as_deref(), Some("Missing to status 9"));
        assert_eq!(result.rejected_parts().count(), 2);
    }

    #[test]
    fn overview_of_empty_result_is_singular_success() {
        let result = DeliveryResult::default();
        assert_eq!(
            result.overview(),
            "Your message was sent and delivered successfully."
        );
    }
}
